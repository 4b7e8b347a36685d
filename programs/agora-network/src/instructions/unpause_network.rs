use anchor_lang::prelude::*;

use crate::errors::AgoraError;
use crate::events::PauseStateChanged;
use crate::state::Network;

#[derive(Accounts)]
pub struct UnpauseNetwork<'info> {
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

pub fn handler(ctx: Context<UnpauseNetwork>) -> Result<()> {
    let network = &mut ctx.accounts.network;
    require!(network.is_paused, AgoraError::NotPaused);

    network.is_paused = false;

    emit!(PauseStateChanged {
        authority: ctx.accounts.authority.key(),
        paused: false,
    });

    Ok(())
}
