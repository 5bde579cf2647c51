use anchor_lang::prelude::*;
use anchor_lang::system_program;

/// Creates `target` as a rent-exempt account of `space` bytes owned by this
/// program, paid by `payer`. `signer_seeds` are the target's seeds including
/// its bump.
///
/// A target that already holds lamports cannot go through `create_account`,
/// so it is topped up, allocated and assigned instead.
pub fn create_program_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let rent = Rent::get()?.minimum_balance(space);
    let current_lamports = target.lamports();
    let signer = &[signer_seeds];

    if current_lamports == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                system_program::CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer,
            ),
            rent,
            space as u64,
            &crate::ID,
        );
    }

    let shortfall = rent.saturating_sub(current_lamports);
    if shortfall > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                system_program::Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            shortfall,
        )?;
    }

    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            system_program::Allocate {
                account_to_allocate: target.clone(),
            },
            signer,
        ),
        space as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            system_program::Assign {
                account_to_assign: target.clone(),
            },
            signer,
        ),
        &crate::ID,
    )
}

/// Deserializes a program account, checking its discriminator.
pub fn read_account<T: AccountDeserialize>(account: &AccountInfo) -> Result<T> {
    let mut data: &[u8] = &account.try_borrow_data()?;
    T::try_deserialize(&mut data)
}

/// Serializes `state` with its discriminator into the account data.
pub fn write_account<T: AccountSerialize>(account: &AccountInfo, state: &T) -> Result<()> {
    let mut data = account.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    state.try_serialize(&mut writer)
}
