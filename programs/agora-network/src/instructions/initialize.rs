use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::AgoraError;
use crate::events::NetworkInitialized;
use crate::state::{AgentDirectory, Network};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for account creation and becomes the network authority
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Global network state
    #[account(
        init,
        payer = authority,
        space = Network::SIZE,
        seeds = [b"network"],
        bump
    )]
    pub network: Account<'info, Network>,

    /// Enumerable directory of active agents
    #[account(
        init,
        payer = authority,
        space = AgentDirectory::SIZE,
        seeds = [b"directory"],
        bump
    )]
    pub directory: Account<'info, AgentDirectory>,

    /// Ledger token used for stakes, fees, and payouts
    pub token_mint: Account<'info, Mint>,

    /// Network-owned token account holding stakes, fees, and reward pools
    #[account(
        init,
        payer = authority,
        seeds = [b"vault"],
        bump,
        token::mint = token_mint,
        token::authority = network
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<Initialize>,
    registration_fee: u64,
    message_fee: u64,
    service_fee_bps: u16,
    min_stake: u64,
    max_service_price: u64,
    lock_period: i64,
    reward_rate_bps: u16,
) -> Result<()> {
    // === Input Validation ===
    require!(
        service_fee_bps <= MAX_SERVICE_FEE_BPS,
        AgoraError::InvalidFeeRate
    );
    require!(
        reward_rate_bps <= MAX_REWARD_RATE_BPS,
        AgoraError::InvalidRewardRate
    );
    require!(max_service_price > 0, AgoraError::InvalidServicePrice);
    require!(lock_period >= 0, AgoraError::InvalidLockPeriod);

    let clock = Clock::get()?;

    let network = &mut ctx.accounts.network;
    network.authority = ctx.accounts.authority.key();
    network.token_mint = ctx.accounts.token_mint.key();
    network.verification_oracle = Pubkey::default();
    network.treasury = Pubkey::default();

    network.registration_fee = registration_fee;
    network.message_fee = message_fee;
    network.service_fee_bps = service_fee_bps;
    network.min_stake = min_stake;
    network.max_service_price = max_service_price;
    network.lock_period = lock_period;
    network.reward_rate_bps = reward_rate_bps;

    network.total_agents = 0;
    network.total_messages = 0;
    network.total_services = 0;
    network.total_volume = 0;
    network.total_staked = 0;
    network.accumulated_fees = 0;
    network.total_unclaimed = 0;

    network.pending_rewards = 0;
    network.round_distributed = 0;
    network.last_processed_index = 0;
    network.last_distribution_time = clock.unix_timestamp;

    network.is_paused = false;
    network.locked = false;
    network.schema_version = NETWORK_SCHEMA_VERSION;
    network.bump = ctx.bumps.network;
    network.vault_bump = ctx.bumps.vault;

    let directory = &mut ctx.accounts.directory;
    directory.agents = Vec::new();
    directory.identifier_hashes = Vec::new();
    directory.bump = ctx.bumps.directory;

    emit!(NetworkInitialized {
        authority: network.authority,
        token_mint: network.token_mint,
        min_stake,
        registration_fee,
    });

    Ok(())
}
