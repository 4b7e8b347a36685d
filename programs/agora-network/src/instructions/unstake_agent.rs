use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::errors::AgoraError;
use crate::events::AgentUnstaked;
use crate::state::{Agent, AgentDirectory, Network};

#[derive(Accounts)]
pub struct UnstakeAgent<'info> {
    /// Unstaking participant; receives the refund and the record's rent
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"network"],
        bump = network.bump
    )]
    pub network: Account<'info, Network>,

    #[account(
        mut,
        seeds = [b"directory"],
        bump = directory.bump
    )]
    pub directory: Account<'info, AgentDirectory>,

    #[account(
        mut,
        seeds = [b"agent", authority.key().as_ref()],
        bump = agent.bump,
        has_one = authority @ AgoraError::InvalidAuthority,
        close = authority
    )]
    pub agent: Account<'info, Agent>,

    /// Record of the directory's tail agent, whose entry is swapped into the
    /// vacated slot. Required whenever the unstaking agent is not the tail.
    #[account(mut)]
    pub moved_agent: Option<Account<'info, Agent>>,

    #[account(address = network.token_mint @ AgoraError::InvalidTokenAccount)]
    pub token_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = authority_token_account.owner == authority.key() @ AgoraError::InvalidTokenAccount,
        constraint = authority_token_account.mint == network.token_mint @ AgoraError::InvalidTokenAccount
    )]
    pub authority_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"vault"],
        bump = network.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<UnstakeAgent>) -> Result<()> {
    ctx.accounts.network.assert_not_paused()?;
    require!(
        !ctx.accounts.network.round_in_flight(),
        AgoraError::DistributionInProgress
    );

    let clock = Clock::get()?;
    require!(
        clock.unix_timestamp
            >= ctx
                .accounts
                .agent
                .unlock_time(ctx.accounts.network.lock_period),
        AgoraError::StakeLockActive
    );

    let staked_amount = ctx.accounts.agent.staked_amount;
    let unclaimed_rewards = ctx.accounts.agent.unclaimed_rewards;
    let refund = staked_amount
        .checked_add(unclaimed_rewards)
        .ok_or(AgoraError::Overflow)?;
    let refund_tokens = u64::try_from(refund).map_err(|_| AgoraError::Overflow)?;
    require!(
        ctx.accounts.vault.amount >= refund_tokens,
        AgoraError::InsufficientVaultBalance
    );

    // === PHASE 1: Commit state before the ledger CPI ===
    let removed_index = ctx.accounts.agent.directory_index;
    let moved = ctx.accounts.directory.remove_entry(removed_index)?;
    if let Some(moved_address) = moved {
        // The tail entry took the vacated slot; its reverse index must
        // follow or the directory invariant breaks.
        let moved_agent = ctx
            .accounts
            .moved_agent
            .as_mut()
            .ok_or(AgoraError::InvalidTailAgent)?;
        require_keys_eq!(
            moved_agent.authority,
            moved_address,
            AgoraError::InvalidTailAgent
        );
        moved_agent.directory_index = removed_index;
    }

    {
        let agent = &mut ctx.accounts.agent;
        agent.is_active = false;
        agent.staked_amount = 0;
        agent.unclaimed_rewards = 0;
    }

    {
        let network = &mut ctx.accounts.network;
        network.acquire_lock()?;
        network.note_unstake(staked_amount, unclaimed_rewards)?;
    }

    // === PHASE 2: Refund stake plus any unclaimed rewards ===
    let network_bump = ctx.accounts.network.bump;
    let seeds: &[&[u8]] = &[b"network", &[network_bump]];
    let signer_seeds = &[seeds];
    let cpi_accounts = TransferChecked {
        from: ctx.accounts.vault.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        to: ctx.accounts.authority_token_account.to_account_info(),
        authority: ctx.accounts.network.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::transfer_checked(cpi_ctx, refund_tokens, ctx.accounts.token_mint.decimals)?;

    ctx.accounts.network.release_lock();

    emit!(AgentUnstaked {
        agent: ctx.accounts.authority.key(),
        staked_amount,
        unclaimed_rewards,
    });

    Ok(())
}
