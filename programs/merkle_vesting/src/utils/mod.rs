pub mod accounts;
pub mod activation;
pub mod merkle;
#[cfg(not(target_os = "solana"))]
pub mod merkle_tree;
pub mod time;
pub mod vesting;
