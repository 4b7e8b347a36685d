use anchor_lang::prelude::*;

// ============================================================================
// Network Lifecycle Events
// ============================================================================

#[event]
pub struct NetworkInitialized {
    pub authority: Pubkey,
    pub token_mint: Pubkey,
    pub min_stake: u64,
    pub registration_fee: u64,
}

#[event]
pub struct NetworkParamsUpdated {
    pub registration_fee: u64,
    pub message_fee: u64,
    pub service_fee_bps: u16,
    pub min_stake: u64,
    pub max_service_price: u64,
    pub lock_period: i64,
    pub reward_rate_bps: u16,
}

#[event]
pub struct VerificationOracleUpdated {
    pub old_oracle: Pubkey,
    pub new_oracle: Pubkey,
}

#[event]
pub struct TreasuryUpdated {
    pub old_treasury: Pubkey,
    pub new_treasury: Pubkey,
}

/// Emitted by both pause and unpause.
#[event]
pub struct PauseStateChanged {
    pub authority: Pubkey,
    pub paused: bool,
}

#[event]
pub struct NetworkAuthorityUpdated {
    pub old_authority: Pubkey,
    pub new_authority: Option<Pubkey>,
}

// ============================================================================
// Registry Events
// ============================================================================

#[event]
pub struct AgentRegistered {
    pub agent: Pubkey,
    pub identifier: String,
    pub staked_amount: u128,
    pub fee: u64,
}

#[event]
pub struct AgentUnstaked {
    pub agent: Pubkey,
    pub staked_amount: u128,
    pub unclaimed_rewards: u128,
}

#[event]
pub struct AgentVerified {
    pub agent: Pubkey,
    pub proof: [u8; 8],
    pub reputation: u64,
}

// ============================================================================
// Messaging Events
// ============================================================================

#[event]
pub struct MessageSent {
    pub message_id: [u8; 32],
    pub from_agent: Pubkey,
    pub to_agent: Pubkey,
    pub fee: u64,
}

// ============================================================================
// Marketplace Events
// ============================================================================

#[event]
pub struct ServiceCreated {
    pub service_id: u64,
    pub provider: Pubkey,
    pub consumer: Pubkey,
    pub service_type: String,
    pub price: u128,
}

#[event]
pub struct ServiceCompleted {
    pub service_id: u64,
    pub provider: Pubkey,
    pub reward: u128,
    pub fee: u128,
    pub result_id: String,
}

// ============================================================================
// Reputation Events
// ============================================================================

#[event]
pub struct ReputationAdjusted {
    pub agent: Pubkey,
    pub old_reputation: u64,
    pub new_reputation: u64,
}

// ============================================================================
// Reward & Treasury Events
// ============================================================================

#[event]
pub struct RewardsDistributed {
    pub amount: u128,
    pub total_staked: u128,
    pub elapsed: i64,
}

#[event]
pub struct RewardBatchProcessed {
    pub from_index: u32,
    pub processed: u32,
    pub completed: bool,
}

#[event]
pub struct RewardsClaimed {
    pub agent: Pubkey,
    pub amount: u128,
}

#[event]
pub struct FeesWithdrawn {
    pub treasury: Pubkey,
    pub amount: u128,
}
