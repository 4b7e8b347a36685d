use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::MAX_CID_LENGTH;
use crate::errors::AgoraError;
use crate::events::ServiceCompleted;
use crate::state::{Agent, Network, Service};

#[derive(Accounts)]
pub struct CompleteService<'info> {
    /// Original provider (must sign)
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"network"],
        bump = network.bump
    )]
    pub network: Account<'info, Network>,

    #[account(
        mut,
        seeds = [b"agent", authority.key().as_ref()],
        bump = provider_agent.bump,
        has_one = authority @ AgoraError::InvalidAuthority
    )]
    pub provider_agent: Account<'info, Agent>,

    #[account(
        mut,
        seeds = [b"service", service.service_id.to_le_bytes().as_ref()],
        bump = service.bump,
        constraint = service.provider == authority.key() @ AgoraError::NotServiceProvider
    )]
    pub service: Account<'info, Service>,

    #[account(address = network.token_mint @ AgoraError::InvalidTokenAccount)]
    pub token_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = provider_token_account.owner == authority.key() @ AgoraError::InvalidTokenAccount,
        constraint = provider_token_account.mint == network.token_mint @ AgoraError::InvalidTokenAccount
    )]
    pub provider_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"vault"],
        bump = network.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<CompleteService>, result_id: String) -> Result<()> {
    ctx.accounts.network.assert_not_paused()?;

    // === Input Validation ===
    require!(
        !ctx.accounts.service.is_completed,
        AgoraError::ServiceAlreadyCompleted
    );
    require!(
        !result_id.is_empty() && result_id.len() <= MAX_CID_LENGTH,
        AgoraError::InvalidResultId
    );
    require!(
        ctx.accounts.provider_agent.is_active,
        AgoraError::AgentNotActive
    );

    let clock = Clock::get()?;
    require!(
        !ctx.accounts.service.is_expired(clock.unix_timestamp),
        AgoraError::ServiceExpired
    );

    let price = ctx.accounts.service.price;
    let (reward, fee) = ctx.accounts.network.service_split(price)?;
    let reward_tokens = u64::try_from(reward).map_err(|_| AgoraError::Overflow)?;
    require!(
        ctx.accounts.vault.amount >= reward_tokens,
        AgoraError::InsufficientVaultBalance
    );

    // === PHASE 1: Commit state before the ledger CPI ===
    // Mandatory ordering: a re-entrant payout must observe the service as
    // already completed.
    {
        let service = &mut ctx.accounts.service;
        service.is_completed = true;
        service.result_id = result_id.clone();
    }

    {
        let provider = &mut ctx.accounts.provider_agent;
        provider.credit_completion(reward)?;
        provider.touch(clock.unix_timestamp);
    }

    {
        let network = &mut ctx.accounts.network;
        network.acquire_lock()?;
        network.settle_service(price, fee)?;
    }

    // === PHASE 2: Pay the provider from the vault ===
    let network_bump = ctx.accounts.network.bump;
    let seeds: &[&[u8]] = &[b"network", &[network_bump]];
    let signer_seeds = &[seeds];
    let cpi_accounts = TransferChecked {
        from: ctx.accounts.vault.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        to: ctx.accounts.provider_token_account.to_account_info(),
        authority: ctx.accounts.network.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::transfer_checked(cpi_ctx, reward_tokens, ctx.accounts.token_mint.decimals)?;

    ctx.accounts.network.release_lock();

    emit!(ServiceCompleted {
        service_id: ctx.accounts.service.service_id,
        provider: ctx.accounts.service.provider,
        reward,
        fee,
        result_id,
    });

    Ok(())
}
