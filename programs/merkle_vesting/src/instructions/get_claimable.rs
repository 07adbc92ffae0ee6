use anchor_lang::prelude::*;

use crate::constants::{POSITION_SEED, SCHEDULE_SEED};
use crate::state::{AccountPosition, LedgerConfig, Schedule};
use crate::utils::accounts::load_optional;
use crate::utils::vesting;

/// Returned via return data. Zero for unknown schedules and positions.
pub fn get_claimable(
    ctx: Context<GetClaimable>,
    _schedule_id: u64,
    _beneficiary: Pubkey,
) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let schedule = load_optional::<Schedule>(&ctx.accounts.schedule.to_account_info())?;
    let position = load_optional::<AccountPosition>(&ctx.accounts.position.to_account_info())?;

    match (schedule, position) {
        (Some(schedule), Some(position)) => {
            Ok(vesting::claimable_amount(&schedule, &position, now)?)
        }
        _ => Ok(0),
    }
}

#[derive(Accounts)]
#[instruction(schedule_id: u64, beneficiary: Pubkey)]
pub struct GetClaimable<'info> {
    pub ledger: Account<'info, LedgerConfig>,

    /// CHECK: Read-only lookup; may not exist.
    #[account(
        seeds = [SCHEDULE_SEED, ledger.key().as_ref(), &schedule_id.to_le_bytes()],
        bump
    )]
    pub schedule: UncheckedAccount<'info>,

    /// CHECK: Read-only lookup; may not exist.
    #[account(
        seeds = [POSITION_SEED, schedule.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub position: UncheckedAccount<'info>,
}
