use anchor_lang::prelude::*;

use crate::constants::{ENTITLEMENT_SEED, POSITION_SEED, SCHEDULE_SEED};
use crate::error::VestingError;
use crate::state::{
    AccountPosition, EntitlementInput, EntitlementRecord, LedgerConfig, Schedule,
};
use crate::utils::accounts::{create_pda_account, load_optional, store};
use crate::utils::activation::plan_activation;

/// Remaining accounts: one entitlement record PDA per entry, in entry order.
pub fn activate_entitlements<'info>(
    ctx: Context<'_, '_, 'info, 'info, ActivateEntitlements<'info>>,
    schedule_id: u64,
    beneficiary: Pubkey,
    entries: Vec<EntitlementInput>,
) -> Result<()> {
    require!(
        ctx.remaining_accounts.len() == entries.len(),
        VestingError::MalformedBatch
    );

    let schedule_ai = ctx.accounts.schedule.to_account_info();
    let schedule_key = schedule_ai.key();
    let schedule = load_optional::<Schedule>(&schedule_ai)?;

    let mut activated = Vec::with_capacity(entries.len());
    let mut bumps = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let record_ai = &ctx.remaining_accounts[i];
        let (expected, bump) = Pubkey::find_program_address(
            &[
                ENTITLEMENT_SEED,
                schedule_key.as_ref(),
                &entry.index.to_le_bytes(),
            ],
            ctx.program_id,
        );
        require_keys_eq!(
            expected,
            *record_ai.key,
            VestingError::InvalidEntitlementAccount
        );
        activated.push(load_optional::<EntitlementRecord>(record_ai)?.is_some());
        bumps.push(bump);
    }

    let fresh = plan_activation(
        schedule.as_ref().map(|s| &s.merkle_root),
        &beneficiary,
        &entries,
        &activated,
    )?;

    let payer_ai = ctx.accounts.payer.to_account_info();
    let system_ai = ctx.accounts.system_program.to_account_info();
    let position = &mut ctx.accounts.position;
    position.schedule = schedule_key;
    position.beneficiary = beneficiary;
    position.bump = ctx.bumps.position;

    for i in fresh {
        let entry = &entries[i];
        let record_ai = &ctx.remaining_accounts[i];
        let index_le = entry.index.to_le_bytes();
        let signer_seeds: &[&[&[u8]]] = &[&[
            ENTITLEMENT_SEED,
            schedule_key.as_ref(),
            &index_le,
            &[bumps[i]],
        ]];
        create_pda_account(
            &payer_ai,
            record_ai,
            &system_ai,
            8 + EntitlementRecord::SIZE,
            signer_seeds,
        )?;
        store(
            &EntitlementRecord {
                schedule: schedule_key,
                index: entry.index,
                bump: bumps[i],
            },
            record_ai,
        )?;

        position.record_activation(entry.amount)?;

        emit!(EntitlementActivated {
            schedule_id,
            beneficiary,
            index: entry.index,
            amount: entry.amount,
        });
    }

    msg!(
        "schedule {}: {} authenticated for {}",
        schedule_id,
        position.authenticated_total,
        beneficiary
    );

    Ok(())
}

#[derive(Accounts)]
#[instruction(schedule_id: u64, beneficiary: Pubkey)]
pub struct ActivateEntitlements<'info> {
    pub ledger: Account<'info, LedgerConfig>,

    /// CHECK: May not exist; an unknown schedule makes every proof invalid.
    #[account(
        seeds = [SCHEDULE_SEED, ledger.key().as_ref(), &schedule_id.to_le_bytes()],
        bump
    )]
    pub schedule: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + AccountPosition::SIZE,
        seeds = [POSITION_SEED, schedule.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub position: Account<'info, AccountPosition>,

    /// Anyone may relay activations on a beneficiary's behalf.
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct EntitlementActivated {
    pub schedule_id: u64,
    pub beneficiary: Pubkey,
    pub index: u64,
    pub amount: u64,
}
