pub mod add_drip;
pub mod claim;
pub mod claim_all;
pub mod claim_common;
pub mod claim_many;
pub mod initialize_faucet;
pub mod set_drip_active;
pub mod views;

pub use add_drip::*;
pub use claim::*;
pub use claim_all::*;
pub use claim_many::*;
pub use initialize_faucet::*;
pub use set_drip_active::*;
pub use views::*;
