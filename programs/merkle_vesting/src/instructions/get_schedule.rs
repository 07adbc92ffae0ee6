use anchor_lang::prelude::*;

use crate::constants::SCHEDULE_SEED;
use crate::state::{LedgerConfig, Schedule};
use crate::utils::accounts::load_optional;

/// Returned via return data; `None` for an unregistered id.
pub fn get_schedule(ctx: Context<GetSchedule>, _schedule_id: u64) -> Result<Option<Schedule>> {
    load_optional::<Schedule>(&ctx.accounts.schedule.to_account_info())
}

#[derive(Accounts)]
#[instruction(schedule_id: u64)]
pub struct GetSchedule<'info> {
    pub ledger: Account<'info, LedgerConfig>,

    /// CHECK: Read-only lookup; absence is a valid answer.
    #[account(
        seeds = [SCHEDULE_SEED, ledger.key().as_ref(), &schedule_id.to_le_bytes()],
        bump
    )]
    pub schedule: UncheckedAccount<'info>,
}
