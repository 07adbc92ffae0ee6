use anchor_lang::prelude::*;

/// Custom error codes for the merkle vesting ledger.
#[error_code]
pub enum VestingError {
    #[msg("Schedule identifier must be non-zero")]
    InvalidIdentifier,

    #[msg("Merkle root must be non-zero")]
    InvalidCommitment,

    #[msg("Start fraction exceeds 10000 basis points")]
    InvalidFraction,

    #[msg("Recurrences must be at least 1")]
    InvalidRecurrences,

    #[msg("Schedule end time overflows")]
    ScheduleOverflow,

    #[msg("A schedule is already registered at this identifier")]
    DuplicateCommitment,

    #[msg("Malformed activation batch")]
    MalformedBatch,

    #[msg("Invalid merkle proof")]
    InvalidProof,

    #[msg("No new entitlement entries to activate")]
    NothingNewToActivate,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Funding account balance is below the committed total")]
    InsufficientAllowance,

    #[msg("Token transfer did not move the expected amount")]
    TransferFailed,

    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid schedule vault account")]
    InvalidVaultAccount,

    #[msg("Entitlement account does not match the expected PDA")]
    InvalidEntitlementAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
