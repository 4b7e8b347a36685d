use anchor_lang::prelude::*;

use crate::errors::AgoraError;
use crate::events::VerificationOracleUpdated;
use crate::state::Network;

#[derive(Accounts)]
pub struct SetVerificationOracle<'info> {
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

pub fn handler(ctx: Context<SetVerificationOracle>, new_oracle: Pubkey) -> Result<()> {
    ctx.accounts.network.assert_not_paused()?;
    require_keys_neq!(new_oracle, Pubkey::default(), AgoraError::InvalidAddress);

    let network = &mut ctx.accounts.network;
    let old_oracle = network.verification_oracle;
    network.verification_oracle = new_oracle;

    emit!(VerificationOracleUpdated {
        old_oracle,
        new_oracle,
    });

    Ok(())
}
