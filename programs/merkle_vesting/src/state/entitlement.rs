use anchor_lang::prelude::*;

/// Activation record for one leaf. The account existing is the activated bit;
/// beneficiary and amount are re-proven off the root, not stored.
#[account]
pub struct EntitlementRecord {
    pub schedule: Pubkey,
    pub index: u64,
    pub bump: u8,
}

impl EntitlementRecord {
    pub const SIZE: usize =
        32 + // schedule
        8 +  // index
        1;   // bump
}

/// Instruction input: one allocation leaf and its proof.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct EntitlementInput {
    pub index: u64,
    pub amount: u64,
    pub proof: Vec<[u8; 32]>,
}
