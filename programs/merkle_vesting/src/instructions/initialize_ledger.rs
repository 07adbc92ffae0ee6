use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::LEDGER_SEED;
use crate::state::LedgerConfig;

pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    ledger.admin = ctx.accounts.admin.key();
    ledger.mint = ctx.accounts.mint.key();
    ledger.bump = ctx.bumps.ledger;

    msg!("ledger initialized for mint {}", ledger.mint);
    emit!(LedgerInitialized {
        ledger: ledger.key(),
        admin: ledger.admin,
        mint: ledger.mint,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + LedgerConfig::SIZE,
        seeds = [LEDGER_SEED, admin.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, LedgerConfig>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub admin: Pubkey,
    pub mint: Pubkey,
}
