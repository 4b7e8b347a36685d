use anchor_lang::prelude::*;

use crate::errors::AgoraError;
use crate::events::NetworkAuthorityUpdated;
use crate::state::Network;

#[derive(Accounts)]
pub struct UpdateNetworkAuthority<'info> {
    /// Current authority (must sign)
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"network"],
        bump = network.bump,
        has_one = authority @ AgoraError::InvalidAuthority,
        constraint = !network.is_immutable() @ AgoraError::ImmutableAuthority
    )]
    pub network: Account<'info, Network>,
}

pub fn handler(ctx: Context<UpdateNetworkAuthority>, new_authority: Option<Pubkey>) -> Result<()> {
    ctx.accounts.network.assert_not_paused()?;

    let network = &mut ctx.accounts.network;
    let old_authority = network.authority;

    // None = renounce (set to default pubkey = immutable)
    network.authority = new_authority.unwrap_or(Pubkey::default());

    emit!(NetworkAuthorityUpdated {
        old_authority,
        new_authority,
    });

    Ok(())
}
