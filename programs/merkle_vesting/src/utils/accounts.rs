//! Raw account helpers for PDAs whose absence is a valid, queryable state.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};
use anchor_lang::Owner;

/// `None` when the account is empty or not owned by this program.
pub fn load_optional<T: AccountDeserialize + Owner>(ai: &AccountInfo) -> Result<Option<T>> {
    if ai.owner != &T::owner() || ai.data_is_empty() {
        return Ok(None);
    }
    let data = ai.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map(Some)
}

/// Write `value` (discriminator included) into the account data.
pub fn store<T: AccountSerialize>(value: &T, ai: &AccountInfo) -> Result<()> {
    let mut data = ai.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    value.try_serialize(&mut writer)
}

/// Create a program-owned PDA, tolerating a target that was pre-funded with lamports.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program_ai: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let rent = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program_ai.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer_seeds,
            ),
            rent,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = rent.saturating_sub(current);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program_ai.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            system_program_ai.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system_program_ai.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}
