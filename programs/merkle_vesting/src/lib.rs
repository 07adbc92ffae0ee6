use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("23gQuJdQ2uQc2ZAGL9RYxT8TQRRFLMvfUJQWnGpHJzH6");

#[program]
pub mod merkle_vesting {
    use super::*;

    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        instructions::initialize_ledger::initialize_ledger(ctx)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_schedule(
        ctx: Context<CreateSchedule>,
        schedule_id: u64,
        start_time: i64,
        cliff_duration: u64,
        recurrences: u32,
        start_bps: u16,
        merkle_root: [u8; 32],
        total_committed: u64,
    ) -> Result<()> {
        instructions::create_schedule::create_schedule(
            ctx,
            schedule_id,
            ScheduleParams {
                start_time,
                cliff_duration,
                recurrences,
                start_bps,
                merkle_root,
                total_committed,
            },
        )
    }

    pub fn get_schedule(ctx: Context<GetSchedule>, schedule_id: u64) -> Result<Option<Schedule>> {
        instructions::get_schedule::get_schedule(ctx, schedule_id)
    }

    // Context lifetimes must match the handler: entitlement records arrive as remaining accounts.
    pub fn activate_entitlements<'info>(
        ctx: Context<'_, '_, 'info, 'info, ActivateEntitlements<'info>>,
        schedule_id: u64,
        beneficiary: Pubkey,
        entries: Vec<EntitlementInput>,
    ) -> Result<()> {
        instructions::activate_entitlements::activate_entitlements(
            ctx,
            schedule_id,
            beneficiary,
            entries,
        )
    }

    pub fn get_claimable(
        ctx: Context<GetClaimable>,
        schedule_id: u64,
        beneficiary: Pubkey,
    ) -> Result<u64> {
        instructions::get_claimable::get_claimable(ctx, schedule_id, beneficiary)
    }

    pub fn claim(ctx: Context<Claim>, schedule_id: u64) -> Result<()> {
        instructions::claim::claim(ctx, schedule_id)
    }
}
