use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{SCHEDULE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{LedgerConfig, Schedule, ScheduleParams};
use crate::utils::accounts::{create_pda_account, load_optional, store};

pub fn create_schedule(
    ctx: Context<CreateSchedule>,
    schedule_id: u64,
    params: ScheduleParams,
) -> Result<()> {
    let end_time = params.validate(schedule_id)?;

    let ledger = &ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.admin_token_account.mint,
        ledger.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.admin_token_account.owner,
        ctx.accounts.admin.key(),
        VestingError::InvalidTokenAccount
    );

    let schedule_ai = ctx.accounts.schedule.to_account_info();
    Schedule::ensure_vacant(load_optional::<Schedule>(&schedule_ai)?.as_ref())?;

    require!(
        ctx.accounts.admin_token_account.amount >= params.total_committed,
        VestingError::InsufficientAllowance
    );

    let ledger_key = ledger.key();
    let id_le = schedule_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        SCHEDULE_SEED,
        ledger_key.as_ref(),
        &id_le,
        &[ctx.bumps.schedule],
    ]];
    create_pda_account(
        &ctx.accounts.admin.to_account_info(),
        &schedule_ai,
        &ctx.accounts.system_program.to_account_info(),
        8 + Schedule::SIZE,
        signer_seeds,
    )?;

    let schedule = Schedule {
        ledger: ledger_key,
        schedule_id,
        start_time: params.start_time,
        cliff_duration: params.cliff_duration,
        end_time,
        recurrences: params.recurrences,
        start_bps: params.start_bps,
        merkle_root: params.merkle_root,
        total_committed: params.total_committed,
        vault: ctx.accounts.vault.key(),
        bump: ctx.bumps.schedule,
    };
    store(&schedule, &schedule_ai)?;

    // Funding is part of registration: any failure below reverts the schedule too.
    let vault_before = ctx.accounts.vault.amount;
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.admin_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        params.total_committed,
    )?;

    ctx.accounts.vault.reload()?;
    let received = ctx
        .accounts
        .vault
        .amount
        .checked_sub(vault_before)
        .ok_or(VestingError::TransferFailed)?;
    require!(
        received == params.total_committed,
        VestingError::TransferFailed
    );

    msg!(
        "schedule {} registered, {} tokens escrowed",
        schedule_id,
        params.total_committed
    );
    emit!(ScheduleCreated {
        schedule: schedule_ai.key(),
        schedule_id,
        start_time: schedule.start_time,
        cliff_duration: schedule.cliff_duration,
        end_time: schedule.end_time,
        recurrences: schedule.recurrences,
        start_bps: schedule.start_bps,
        merkle_root: schedule.merkle_root,
        total_committed: schedule.total_committed,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(schedule_id: u64)]
pub struct CreateSchedule<'info> {
    #[account(has_one = admin @ VestingError::UnauthorizedAdmin)]
    pub ledger: Account<'info, LedgerConfig>,

    /// CHECK: Created and written in-handler; must not already hold a schedule.
    #[account(
        mut,
        seeds = [SCHEDULE_SEED, ledger.key().as_ref(), &schedule_id.to_le_bytes()],
        bump
    )]
    pub schedule: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        token::mint = mint,
        token::authority = schedule,
        seeds = [VAULT_SEED, schedule.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(address = ledger.mint @ VestingError::InvalidTokenMint)]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct ScheduleCreated {
    pub schedule: Pubkey,
    pub schedule_id: u64,
    pub start_time: i64,
    pub cliff_duration: u64,
    pub end_time: i64,
    pub recurrences: u32,
    pub start_bps: u16,
    pub merkle_root: [u8; 32],
    pub total_committed: u64,
}
