use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{POSITION_SEED, SCHEDULE_SEED};
use crate::error::VestingError;
use crate::state::{AccountPosition, LedgerConfig, Schedule};
use crate::utils::accounts::{load_optional, store};
use crate::utils::vesting;

pub fn claim(ctx: Context<Claim>, schedule_id: u64) -> Result<()> {
    let schedule_ai = ctx.accounts.schedule.to_account_info();
    let position_ai = ctx.accounts.position.to_account_info();
    let beneficiary = ctx.accounts.beneficiary.key();
    let now = Clock::get()?.unix_timestamp;

    let schedule = load_optional::<Schedule>(&schedule_ai)?;
    let position = load_optional::<AccountPosition>(&position_ai)?;
    let claimable = vesting::plan_claim(schedule.as_ref(), position.as_ref(), now)?;
    let (Some(schedule), Some(mut position)) = (schedule, position) else {
        return err!(VestingError::NothingToClaim);
    };

    require_keys_eq!(
        ctx.accounts.vault.key(),
        schedule.vault,
        VestingError::InvalidVaultAccount
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        ctx.accounts.ledger.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        beneficiary,
        VestingError::InvalidTokenAccount
    );

    // Effects before the token CPI.
    position.record_claim(claimable)?;
    store(&position, &position_ai)?;

    let ledger_key = ctx.accounts.ledger.key();
    let id_le = schedule_id.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[
        SCHEDULE_SEED,
        ledger_key.as_ref(),
        &id_le,
        &[schedule.bump],
    ]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: schedule_ai,
            },
            signer_seeds,
        ),
        claimable,
    )?;

    msg!(
        "schedule {}: claimed {} ({} of {})",
        schedule_id,
        claimable,
        position.claimed,
        position.authenticated_total
    );
    emit!(Claimed {
        schedule_id,
        beneficiary,
        amount: claimable,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(schedule_id: u64)]
pub struct Claim<'info> {
    pub ledger: Account<'info, LedgerConfig>,

    /// CHECK: Loaded in-handler; an unknown schedule has nothing to claim.
    #[account(
        seeds = [SCHEDULE_SEED, ledger.key().as_ref(), &schedule_id.to_le_bytes()],
        bump
    )]
    pub schedule: UncheckedAccount<'info>,

    /// CHECK: Loaded in-handler; a missing position has nothing to claim.
    #[account(
        mut,
        seeds = [POSITION_SEED, schedule.key().as_ref(), beneficiary.key().as_ref()],
        bump
    )]
    pub position: UncheckedAccount<'info>,

    /// CHECK: Must equal `schedule.vault`; the token program validates the rest.
    #[account(mut)]
    pub vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Claimed {
    pub schedule_id: u64,
    pub beneficiary: Pubkey,
    pub amount: u64,
}
