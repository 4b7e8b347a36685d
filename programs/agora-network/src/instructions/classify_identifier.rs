use anchor_lang::prelude::*;

use crate::identifier::{classify, IdentifierKind};
use crate::state::Agent;

/// Read-only view: classifies a registered agent's identifier. The result is
/// returned as instruction return data.
#[derive(Accounts)]
pub struct ClassifyIdentifier<'info> {
    #[account(
        seeds = [b"agent", agent.authority.as_ref()],
        bump = agent.bump
    )]
    pub agent: Account<'info, Agent>,
}

pub fn handler(ctx: Context<ClassifyIdentifier>) -> Result<IdentifierKind> {
    Ok(classify(&ctx.accounts.agent.identifier))
}
