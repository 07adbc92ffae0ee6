pub mod account_position;
pub mod entitlement;
pub mod ledger_config;
pub mod schedule;

pub use account_position::*;
pub use entitlement::*;
pub use ledger_config::*;
pub use schedule::*;
