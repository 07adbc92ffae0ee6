use anchor_lang::prelude::*;

/// Ledger instance PDA: binds one admin to one token mint.
#[account]
pub struct LedgerConfig {
    /// Authority allowed to register schedules.
    pub admin: Pubkey,
    /// The single token mint this ledger custodies and pays out.
    pub mint: Pubkey,
    pub bump: u8,
}

impl LedgerConfig {
    pub const SIZE: usize =
        32 + // admin
        32 + // mint
        1;   // bump
}
