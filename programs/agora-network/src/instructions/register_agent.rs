use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::*;
use crate::errors::AgoraError;
use crate::events::AgentRegistered;
use crate::hashing::compute_identifier_hash;
use crate::identifier::{classify, IdentifierKind};
use crate::state::{Agent, AgentDirectory, Network};

#[derive(Accounts)]
pub struct RegisterAgent<'info> {
    /// Registering participant; pays rent, the stake, and the registration fee
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

    /// One record per participant; an existing record rejects re-registration
    #[account(
        init,
        payer = authority,
        space = Agent::SIZE,
        seeds = [b"agent", authority.key().as_ref()],
        bump
    )]
    pub agent: Account<'info, Agent>,

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
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<RegisterAgent>,
    identifier: String,
    public_key: String,
    stake_amount: u64,
) -> Result<()> {
    ctx.accounts.network.assert_not_paused()?;
    // Swap-and-pop under a live batch cursor would skip or double-visit
    // agents, so registry mutations wait the round out.
    require!(
        !ctx.accounts.network.round_in_flight(),
        AgoraError::DistributionInProgress
    );

    // === Input Validation ===
    require!(
        !identifier.is_empty() && identifier.len() <= MAX_IDENTIFIER_LENGTH,
        AgoraError::InvalidIdentifier
    );
    require!(
        classify(&identifier) != IdentifierKind::Unknown,
        AgoraError::UnclassifiableIdentifier
    );
    require!(
        !public_key.is_empty() && public_key.len() <= MAX_PUBLIC_KEY_LENGTH,
        AgoraError::InvalidPublicKey
    );
    require!(
        stake_amount >= ctx.accounts.network.min_stake,
        AgoraError::InsufficientStake
    );

    let total_cost = stake_amount
        .checked_add(ctx.accounts.network.registration_fee)
        .ok_or(AgoraError::Overflow)?;
    require!(
        ctx.accounts.authority_token_account.amount >= total_cost,
        AgoraError::InsufficientBalance
    );

    let clock = Clock::get()?;
    let registration_fee = ctx.accounts.network.registration_fee;
    let identifier_hash = compute_identifier_hash(&identifier);

    // === PHASE 1: Commit state before the ledger CPI ===
    let directory_index = ctx
        .accounts
        .directory
        .push_entry(ctx.accounts.authority.key(), identifier_hash)?;

    {
        let agent = &mut ctx.accounts.agent;
        agent.authority = ctx.accounts.authority.key();
        agent.identifier = identifier.clone();
        agent.public_key = public_key;
        agent.staked_amount = stake_amount as u128;
        agent.total_earnings = 0;
        agent.unclaimed_rewards = 0;
        agent.reputation = INITIAL_REPUTATION;
        agent.registration_time = clock.unix_timestamp;
        agent.last_activity = clock.unix_timestamp;
        agent.total_services = 0;
        agent.directory_index = directory_index;
        agent.is_active = true;
        agent.is_verified = false;
        agent.bump = ctx.bumps.agent;
    }

    {
        let network = &mut ctx.accounts.network;
        network.acquire_lock()?;
        network.note_registration(stake_amount as u128)?;
        network.accrue_fee(registration_fee as u128)?;
    }
    // Borrows are dropped - safe to make the CPI

    // === PHASE 2: Collect stake plus registration fee ===
    let cpi_accounts = TransferChecked {
        from: ctx.accounts.authority_token_account.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.authority.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer_checked(cpi_ctx, total_cost, ctx.accounts.token_mint.decimals)?;

    ctx.accounts.network.release_lock();

    emit!(AgentRegistered {
        agent: ctx.accounts.authority.key(),
        identifier,
        staked_amount: stake_amount as u128,
        fee: registration_fee,
    });

    Ok(())
}
