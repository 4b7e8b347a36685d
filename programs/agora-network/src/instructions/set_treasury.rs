use anchor_lang::prelude::*;

use crate::errors::AgoraError;
use crate::events::TreasuryUpdated;
use crate::state::Network;

#[derive(Accounts)]
pub struct SetTreasury<'info> {
    /// Network authority (must sign)
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"network"],
        bump = network.bump,
        has_one = authority @ AgoraError::InvalidAuthority
    )]
    pub network: Account<'info, Network>,
}

pub fn handler(ctx: Context<SetTreasury>, new_treasury: Pubkey) -> Result<()> {
    ctx.accounts.network.assert_not_paused()?;
    require_keys_neq!(new_treasury, Pubkey::default(), AgoraError::InvalidAddress);

    let network = &mut ctx.accounts.network;
    let old_treasury = network.treasury;
    network.treasury = new_treasury;

    emit!(TreasuryUpdated {
        old_treasury,
        new_treasury,
    });

    Ok(())
}
