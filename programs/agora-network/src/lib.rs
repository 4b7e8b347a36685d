use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod hashing;
pub mod identifier;
pub mod instructions;
pub mod state;

use identifier::IdentifierKind;
use instructions::*;
use state::NetworkParamsUpdate;

declare_id!("AgoraNetVxcwrWVZweDCtZXhgsC7VLA6btymh3fSVipg");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Agora Network",
    project_url: "https://github.com/agora-net/agora-network",
    contacts: "email:security@agora.sh",
    policy: "https://github.com/agora-net/agora-network/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://github.com/agora-net/agora-network"
}

#[program]
pub mod agora_network {
    use super::*;

    // =========================================================================
    // Lifecycle & Administration
    // =========================================================================

    /// One-time network setup: creates the global state, the agent directory,
    /// and the vault token account, and stores the initial configuration.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        ctx: Context<Initialize>,
        registration_fee: u64,
        message_fee: u64,
        service_fee_bps: u16,
        min_stake: u64,
        max_service_price: u64,
        lock_period: i64,
        reward_rate_bps: u16,
    ) -> Result<()> {
        instructions::initialize::handler(
            ctx,
            registration_fee,
            message_fee,
            service_fee_bps,
            min_stake,
            max_service_price,
            lock_period,
            reward_rate_bps,
        )
    }

    /// Sparse configuration update. Authority only; `None` fields are
    /// left unchanged.
    pub fn update_network_params(
        ctx: Context<UpdateNetworkParams>,
        update: NetworkParamsUpdate,
    ) -> Result<()> {
        instructions::update_network_params::handler(ctx, update)
    }

    /// Configure the verification oracle. Authority only.
    pub fn set_verification_oracle(
        ctx: Context<SetVerificationOracle>,
        new_oracle: Pubkey,
    ) -> Result<()> {
        instructions::set_verification_oracle::handler(ctx, new_oracle)
    }

    /// Configure the fee withdrawal sink. Authority only.
    pub fn set_treasury(ctx: Context<SetTreasury>, new_treasury: Pubkey) -> Result<()> {
        instructions::set_treasury::handler(ctx, new_treasury)
    }

    /// Halt all state-mutating operations. Authority only.
    pub fn pause_network(ctx: Context<PauseNetwork>) -> Result<()> {
        instructions::pause_network::handler(ctx)
    }

    /// Resume operations. Authority only.
    pub fn unpause_network(ctx: Context<UnpauseNetwork>) -> Result<()> {
        instructions::unpause_network::handler(ctx)
    }

    /// Transfer or renounce the network authority.
    /// Pass None to renounce (makes the network immutable).
    pub fn update_network_authority(
        ctx: Context<UpdateNetworkAuthority>,
        new_authority: Option<Pubkey>,
    ) -> Result<()> {
        instructions::update_authority::handler(ctx, new_authority)
    }

    // =========================================================================
    // Agent Registry
    // =========================================================================

    /// Register the caller as an agent: validates the identifier shape,
    /// stakes collateral plus the registration fee, and appends the agent to
    /// the enumerable directory.
    pub fn register_agent(
        ctx: Context<RegisterAgent>,
        identifier: String,
        public_key: String,
        stake_amount: u64,
    ) -> Result<()> {
        instructions::register_agent::handler(ctx, identifier, public_key, stake_amount)
    }

    /// Leave the registry after the stake lock elapses: removes the caller
    /// from the directory, refunds stake plus unclaimed rewards, and closes
    /// the record.
    pub fn unstake_agent(ctx: Context<UnstakeAgent>) -> Result<()> {
        instructions::unstake_agent::handler(ctx)
    }

    /// Mark an agent verified. Authority only; the configured oracle co-signs
    /// the proof vector.
    pub fn verify_agent(ctx: Context<VerifyAgent>, proof: [u8; 8]) -> Result<()> {
        instructions::verify_agent::handler(ctx, proof)
    }

    /// Classify a registered agent's identifier. Read-only.
    pub fn classify_identifier(ctx: Context<ClassifyIdentifier>) -> Result<IdentifierKind> {
        instructions::classify_identifier::handler(ctx)
    }

    // =========================================================================
    // Messaging
    // =========================================================================

    /// Send a fee-metered message to another active agent. The record is
    /// keyed by a hash binding sender, recipient, content id, and timestamp.
    pub fn send_message(
        ctx: Context<SendMessage>,
        content_id: String,
        timestamp: i64,
    ) -> Result<()> {
        instructions::send_message::handler(ctx, content_id, timestamp)
    }

    // =========================================================================
    // Service Marketplace
    // =========================================================================

    /// Open a priced engagement between a verified provider (the caller) and
    /// a verified consumer.
    pub fn create_service(
        ctx: Context<CreateService>,
        service_type: String,
        price: u64,
    ) -> Result<()> {
        instructions::create_service::handler(ctx, service_type, price)
    }

    /// Settle a service within its validity window: commits the result and
    /// all accounting, then pays the provider net of the protocol fee.
    pub fn complete_service(ctx: Context<CompleteService>, result_id: String) -> Result<()> {
        instructions::complete_service::handler(ctx, result_id)
    }

    // =========================================================================
    // Reputation
    // =========================================================================

    /// Administrative reputation correction, clamped to the domain range.
    /// Authority only.
    pub fn adjust_reputation(ctx: Context<AdjustReputation>, delta: i64) -> Result<()> {
        instructions::adjust_reputation::handler(ctx, delta)
    }

    // =========================================================================
    // Rewards & Treasury
    // =========================================================================

    /// Open a reward round: accrues a time-proportional pool against the
    /// vault's free balance. Authority only.
    pub fn distribute_rewards(ctx: Context<DistributeRewards>) -> Result<()> {
        instructions::distribute_rewards::handler(ctx)
    }

    /// Credit one directory slice of the open round. Authority only;
    /// returns true when the round is complete.
    pub fn process_reward_batch<'info>(
        ctx: Context<'_, '_, 'info, 'info, ProcessRewardBatch<'info>>,
    ) -> Result<bool> {
        instructions::process_reward_batch::handler(ctx)
    }

    /// Withdraw the caller's credited rewards from the vault.
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards::handler(ctx)
    }

    /// Sweep all accrued fees to the configured treasury. Authority only.
    pub fn withdraw_fees(ctx: Context<WithdrawFees>) -> Result<()> {
        instructions::withdraw_fees::handler(ctx)
    }
}
