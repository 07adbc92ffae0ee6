pub mod activate_entitlements;
pub mod claim;
pub mod create_schedule;
pub mod get_claimable;
pub mod get_schedule;
pub mod initialize_ledger;

pub use activate_entitlements::*;
pub use claim::*;
pub use create_schedule::*;
pub use get_claimable::*;
pub use get_schedule::*;
pub use initialize_ledger::*;
