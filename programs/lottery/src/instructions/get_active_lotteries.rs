use anchor_lang::prelude::*;

use crate::state::RegistryAccount;

/// Returns the ids of the authority's lotteries that have not been paid out,
/// in creation order.
pub fn get_active_lotteries(ctx: Context<GetActiveLotteries>) -> Result<Vec<u64>> {
    let registry = &ctx.accounts.registry;

    msg!(
        "Registry of {} has {} active lotteries",
        registry.authority,
        registry.active_ids.len()
    );

    Ok(registry.active_ids.clone())
}

#[derive(Accounts)]
pub struct GetActiveLotteries<'info> {
    pub registry: Account<'info, RegistryAccount>,
}
