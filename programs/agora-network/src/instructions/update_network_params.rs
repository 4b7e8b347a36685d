use anchor_lang::prelude::*;

use crate::errors::AgoraError;
use crate::events::NetworkParamsUpdated;
use crate::state::{Network, NetworkParamsUpdate};

#[derive(Accounts)]
pub struct UpdateNetworkParams<'info> {
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

pub fn handler(ctx: Context<UpdateNetworkParams>, update: NetworkParamsUpdate) -> Result<()> {
    ctx.accounts.network.assert_not_paused()?;

    let network = &mut ctx.accounts.network;
    network.apply_params(&update)?;

    // The event carries the resulting configuration, not the sparse delta.
    emit!(NetworkParamsUpdated {
        registration_fee: network.registration_fee,
        message_fee: network.message_fee,
        service_fee_bps: network.service_fee_bps,
        min_stake: network.min_stake,
        max_service_price: network.max_service_price,
        lock_period: network.lock_period,
        reward_rate_bps: network.reward_rate_bps,
    });

    Ok(())
}
