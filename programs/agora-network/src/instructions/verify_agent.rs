use anchor_lang::prelude::*;

use crate::constants::VERIFICATION_REPUTATION_BONUS;
use crate::errors::AgoraError;
use crate::events::AgentVerified;
use crate::state::{Agent, Network};

#[derive(Accounts)]
pub struct VerifyAgent<'info> {
    /// Network authority (must sign)
    pub authority: Signer<'info>,

    /// Configured oracle co-signs, attesting the proof vector passed its
    /// off-chain check
    pub verification_oracle: Signer<'info>,

    #[account(
        seeds = [b"network"],
        bump = network.bump,
        has_one = authority @ AgoraError::InvalidAuthority,
        constraint = network.has_oracle() @ AgoraError::OracleNotConfigured,
        has_one = verification_oracle @ AgoraError::InvalidOracle
    )]
    pub network: Account<'info, Network>,

    /// Agent being verified (any participant's record)
    #[account(
        mut,
        seeds = [b"agent", agent.authority.as_ref()],
        bump = agent.bump
    )]
    pub agent: Account<'info, Agent>,
}

pub fn handler(ctx: Context<VerifyAgent>, proof: [u8; 8]) -> Result<()> {
    ctx.accounts.network.assert_not_paused()?;

    let agent = &mut ctx.accounts.agent;
    require!(agent.is_active, AgoraError::AgentNotActive);
    require!(!agent.is_verified, AgoraError::AgentAlreadyVerified);

    agent.is_verified = true;
    let (_, reputation) = agent.grant_reputation(VERIFICATION_REPUTATION_BONUS);

    emit!(AgentVerified {
        agent: agent.authority,
        proof,
        reputation,
    });

    Ok(())
}
