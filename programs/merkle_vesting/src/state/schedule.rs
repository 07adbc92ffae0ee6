use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::error::VestingError;
use crate::utils::time;

/// Immutable vesting schedule PDA, keyed by `(ledger, schedule_id)`.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Schedule {
    /// Owning ledger instance.
    pub ledger: Pubkey,
    /// Non-zero identifier chosen by the admin.
    pub schedule_id: u64,
    /// Unix seconds at which the start fraction unlocks.
    pub start_time: i64,
    /// Seconds after `start_time` before linear accrual begins.
    pub cliff_duration: u64,
    /// `start_time + cliff_duration + recurrences * PERIOD`.
    pub end_time: i64,
    /// Number of equal linear accrual steps (>= 1).
    pub recurrences: u32,
    /// Fraction released at `start_time`, in basis points.
    pub start_bps: u16,
    /// Commitment to the full allocation set.
    pub merkle_root: [u8; 32],
    /// Sum of every leaf amount; escrowed into `vault` at creation.
    pub total_committed: u64,
    /// Custody token account for this schedule.
    pub vault: Pubkey,
    pub bump: u8,
}

impl Schedule {
    pub const SIZE: usize =
        32 + // ledger
        8 +  // schedule_id
        8 +  // start_time
        8 +  // cliff_duration
        8 +  // end_time
        4 +  // recurrences
        2 +  // start_bps
        32 + // merkle_root
        8 +  // total_committed
        32 + // vault
        1;   // bump

    /// First instant at which linear accrual can add to the vested amount.
    pub fn linear_start(&self) -> std::result::Result<i64, VestingError> {
        time::linear_start(self.start_time, self.cliff_duration)
    }

    /// Write-once: any schedule already stored at the id blocks, matching root or not.
    pub fn ensure_vacant(existing: Option<&Schedule>) -> std::result::Result<(), VestingError> {
        match existing {
            Some(_) => Err(VestingError::DuplicateCommitment),
            None => Ok(()),
        }
    }
}

/// Curve parameters supplied to `create_schedule`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleParams {
    pub start_time: i64,
    pub cliff_duration: u64,
    pub recurrences: u32,
    pub start_bps: u16,
    pub merkle_root: [u8; 32],
    pub total_committed: u64,
}

impl ScheduleParams {
    /// Input validation in reporting order; returns the derived end time.
    pub fn validate(&self, schedule_id: u64) -> std::result::Result<i64, VestingError> {
        if schedule_id == 0 {
            return Err(VestingError::InvalidIdentifier);
        }
        if self.merkle_root == [0u8; 32] {
            return Err(VestingError::InvalidCommitment);
        }
        if self.start_bps > BPS_DENOMINATOR {
            return Err(VestingError::InvalidFraction);
        }
        if self.recurrences == 0 {
            return Err(VestingError::InvalidRecurrences);
        }
        time::end_time(self.start_time, self.cliff_duration, self.recurrences)
    }
}
