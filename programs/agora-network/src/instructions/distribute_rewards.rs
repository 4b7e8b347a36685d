use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::errors::AgoraError;
use crate::events::RewardsDistributed;
use crate::state::Network;

#[derive(Accounts)]
pub struct DistributeRewards<'info> {
    /// Network authority (must sign)
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"network"],
        bump = network.bump,
        has_one = authority @ AgoraError::InvalidAuthority
    )]
    pub network: Account<'info, Network>,

    #[account(
        seeds = [b"vault"],
        bump = network.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,
}

pub fn handler(ctx: Context<DistributeRewards>) -> Result<()> {
    ctx.accounts.network.assert_not_paused()?;
    require!(
        !ctx.accounts.network.round_in_flight(),
        AgoraError::DistributionInProgress
    );

    let clock = Clock::get()?;
    let (amount, elapsed) = ctx.accounts.network.reward_accrual(clock.unix_timestamp)?;
    require!(amount > 0, AgoraError::NothingToDistribute);

    // The vault must cover the new pool on top of everything already owed.
    let required = ctx
        .accounts
        .network
        .liabilities()?
        .checked_add(amount)
        .ok_or(AgoraError::Overflow)?;
    require!(
        (ctx.accounts.vault.amount as u128) >= required,
        AgoraError::InsufficientVaultBalance
    );

    let network = &mut ctx.accounts.network;
    network.begin_distribution(amount, clock.unix_timestamp)?;

    emit!(RewardsDistributed {
        amount,
        total_staked: network.total_staked,
        elapsed,
    });

    Ok(())
}
