use anchor_lang::prelude::*;

use crate::errors::AgoraError;
use crate::events::ReputationAdjusted;
use crate::state::{Agent, Network};

#[derive(Accounts)]
pub struct AdjustReputation<'info> {
    /// Network authority (must sign)
    pub authority: Signer<'info>,

    #[account(
        seeds = [b"network"],
        bump = network.bump,
        has_one = authority @ AgoraError::InvalidAuthority
    )]
    pub network: Account<'info, Network>,

    #[account(
        mut,
        seeds = [b"agent", agent.authority.as_ref()],
        bump = agent.bump
    )]
    pub agent: Account<'info, Agent>,
}

pub fn handler(ctx: Context<AdjustReputation>, delta: i64) -> Result<()> {
    ctx.accounts.network.assert_not_paused()?;

    let agent = &mut ctx.accounts.agent;
    require!(agent.is_active, AgoraError::AgentNotActive);

    let (old_reputation, new_reputation) = agent.apply_reputation_delta(delta);

    emit!(ReputationAdjusted {
        agent: agent.authority,
        old_reputation,
        new_reputation,
    });

    Ok(())
}
