use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::{MAX_CID_LENGTH, MESSAGE_TIMESTAMP_TOLERANCE};
use crate::errors::AgoraError;
use crate::events::MessageSent;
use crate::hashing::compute_message_id;
use crate::state::{Agent, Message, Network};

/// The message key binds the client-chosen timestamp, so the key is
/// predictable off-chain; the handler only checks it against the clock.
#[derive(Accounts)]
#[instruction(content_id: String, timestamp: i64)]
pub struct SendMessage<'info> {
    /// Sending participant; pays the message fee and the record's rent
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
        seeds = [b"agent", authority.key().as_ref()],
        bump = sender_agent.bump,
        has_one = authority @ AgoraError::InvalidAuthority
    )]
    pub sender_agent: Account<'info, Agent>,

    #[account(
        mut,
        seeds = [b"agent", recipient_agent.authority.as_ref()],
        bump = recipient_agent.bump
    )]
    pub recipient_agent: Account<'info, Agent>,

    /// Keyed by the message hash; a colliding key fails account creation
    /// instead of overwriting the existing record
    #[account(
        init,
        payer = authority,
        space = Message::SIZE,
        seeds = [
            b"message",
            compute_message_id(
                &sender_agent.authority,
                &recipient_agent.authority,
                &content_id,
                timestamp,
            )
            .as_ref(),
        ],
        bump
    )]
    pub message: Account<'info, Message>,

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

pub fn handler(ctx: Context<SendMessage>, content_id: String, timestamp: i64) -> Result<()> {
    ctx.accounts.network.assert_not_paused()?;

    // === Input Validation ===
    require!(
        ctx.accounts.sender_agent.is_active,
        AgoraError::AgentNotActive
    );
    require!(
        ctx.accounts.recipient_agent.is_active,
        AgoraError::AgentNotActive
    );
    require_keys_neq!(
        ctx.accounts.sender_agent.authority,
        ctx.accounts.recipient_agent.authority,
        AgoraError::SelfMessageNotAllowed
    );
    require!(
        !content_id.is_empty() && content_id.len() <= MAX_CID_LENGTH,
        AgoraError::InvalidContentId
    );

    let clock = Clock::get()?;
    let skew = clock
        .unix_timestamp
        .checked_sub(timestamp)
        .ok_or(AgoraError::Overflow)?;
    require!(
        skew.unsigned_abs() <= MESSAGE_TIMESTAMP_TOLERANCE as u64,
        AgoraError::StaleMessageTimestamp
    );

    let fee = ctx.accounts.network.message_fee;
    require!(
        ctx.accounts.authority_token_account.amount >= fee,
        AgoraError::InsufficientBalance
    );

    let message_id = compute_message_id(
        &ctx.accounts.sender_agent.authority,
        &ctx.accounts.recipient_agent.authority,
        &content_id,
        timestamp,
    );

    // === PHASE 1: Commit state before the ledger CPI ===
    {
        let message = &mut ctx.accounts.message;
        message.message_id = message_id;
        message.from_agent = ctx.accounts.sender_agent.authority;
        message.to_agent = ctx.accounts.recipient_agent.authority;
        message.content_id = content_id;
        message.timestamp = timestamp;
        message.is_verified = false;
        message.fee = fee as u128;
        message.bump = ctx.bumps.message;
    }

    ctx.accounts.sender_agent.touch(clock.unix_timestamp);
    ctx.accounts.recipient_agent.touch(clock.unix_timestamp);

    {
        let network = &mut ctx.accounts.network;
        network.acquire_lock()?;
        network.note_message(fee as u128)?;
    }

    // === PHASE 2: Collect the message fee ===
    let cpi_accounts = TransferChecked {
        from: ctx.accounts.authority_token_account.to_account_info(),
        mint: ctx.accounts.token_mint.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.authority.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer_checked(cpi_ctx, fee, ctx.accounts.token_mint.decimals)?;

    ctx.accounts.network.release_lock();

    emit!(MessageSent {
        message_id,
        from_agent: ctx.accounts.sender_agent.authority,
        to_agent: ctx.accounts.recipient_agent.authority,
        fee,
    });

    Ok(())
}
