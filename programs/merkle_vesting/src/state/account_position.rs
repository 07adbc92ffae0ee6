use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Per `(schedule, beneficiary)` running totals.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AccountPosition {
    pub schedule: Pubkey,
    pub beneficiary: Pubkey,
    /// Sum of every activated leaf amount. Never decreases.
    pub authenticated_total: u64,
    /// Cumulative amount withdrawn. Never decreases.
    pub claimed: u64,
    pub bump: u8,
}

impl AccountPosition {
    pub const SIZE: usize =
        32 + // schedule
        32 + // beneficiary
        8 +  // authenticated_total
        8 +  // claimed
        1;   // bump

    pub fn record_activation(&mut self, amount: u64) -> std::result::Result<(), VestingError> {
        self.authenticated_total = self
            .authenticated_total
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    pub fn record_claim(&mut self, amount: u64) -> std::result::Result<(), VestingError> {
        let claimed = self
            .claimed
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        if claimed > self.authenticated_total {
            return Err(VestingError::MathOverflow);
        }
        self.claimed = claimed;
        Ok(())
    }
}
