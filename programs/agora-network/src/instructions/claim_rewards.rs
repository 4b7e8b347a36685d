use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::errors::AgoraError;
use crate::events::RewardsClaimed;
use crate::state::{Agent, Network};

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    /// Claiming participant (must sign)
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
        bump = agent.bump,
        has_one = authority @ AgoraError::InvalidAuthority
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
}

pub fn handler(ctx: Context<ClaimRewards>) -> Result<()> {
    ctx.accounts.network.assert_not_paused()?;

    // === PHASE 1: Zero the accrual before the ledger CPI ===
    let amount = {
        let network = &mut ctx.accounts.network;
        network.acquire_lock()?;
        let amount = ctx.accounts.agent.take_rewards()?;
        network.note_claim(amount)?;
        amount
    };
    let amount_tokens = u64::try_from(amount).map_err(|_| AgoraError::Overflow)?;
    require!(
        ctx.accounts.vault.amount >= amount_tokens,
        AgoraError::InsufficientVaultBalance
    );

    // === PHASE 2: Pay out from the vault ===
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
    token::transfer_checked(cpi_ctx, amount_tokens, ctx.accounts.token_mint.decimals)?;

    ctx.accounts.network.release_lock();

    emit!(RewardsClaimed {
        agent: ctx.accounts.authority.key(),
        amount,
    });

    Ok(())
}
