use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::AgoraError;

// ============================================================================
// Network State
// ============================================================================

/// Global configuration, counters, and lifecycle flags.
/// PDA seeds: [b"network"]
#[account]
#[derive(Default)]
pub struct Network {
    /// Admin authority. Set to Pubkey::default() to make immutable.
    pub authority: Pubkey,
    /// Mint of the ledger token used for stakes, fees, and payouts.
    pub token_mint: Pubkey,
    /// Oracle that co-signs agent verification.
    /// Pubkey::default() = not configured.
    pub verification_oracle: Pubkey,
    /// Fee withdrawal sink. Pubkey::default() = not configured.
    pub treasury: Pubkey,

    // --- parameters ---
    /// Flat fee charged at registration, in token units.
    pub registration_fee: u64,
    /// Flat fee charged per message, in token units.
    pub message_fee: u64,
    /// Service fee rate in basis points, at most MAX_SERVICE_FEE_BPS.
    pub service_fee_bps: u16,
    /// Minimum stake accepted at registration.
    pub min_stake: u64,
    /// Ceiling for service prices.
    pub max_service_price: u64,
    /// Seconds a stake stays locked after registration.
    pub lock_period: i64,
    /// Annualized reward rate in basis points, at most MAX_REWARD_RATE_BPS.
    pub reward_rate_bps: u16,

    // --- counters ---
    pub total_agents: u64,
    pub total_messages: u64,
    /// Doubles as the next service id.
    pub total_services: u64,
    /// Settled service prices plus message fees.
    pub total_volume: u128,
    /// Sum of active agents' staked amounts.
    pub total_staked: u128,
    /// Fees awaiting treasury withdrawal.
    pub accumulated_fees: u128,
    /// Rewards credited to agents but not yet claimed.
    pub total_unclaimed: u128,

    // --- reward round ---
    /// Pool being distributed by the current round; zero when idle.
    pub pending_rewards: u128,
    /// Portion of the pool already credited this round.
    pub round_distributed: u128,
    /// Directory cursor of the current round.
    pub last_processed_index: u32,
    pub last_distribution_time: i64,

    // --- lifecycle ---
    pub is_paused: bool,
    /// Re-entrancy exclusion flag for externally-calling operations.
    pub locked: bool,
    pub schema_version: u8,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Network {
    /// discriminator (8) + 4 pubkeys (128) + params (44) + u64 counters (24)
    /// + u128 counters (96) + round cursor/clock (12) + flags and bumps (5)
    pub const SIZE: usize = 8 + 128 + 44 + 24 + 96 + 12 + 5; // 317 bytes

    pub fn is_immutable(&self) -> bool {
        self.authority == Pubkey::default()
    }

    pub fn has_oracle(&self) -> bool {
        self.verification_oracle != Pubkey::default()
    }

    pub fn has_treasury(&self) -> bool {
        self.treasury != Pubkey::default()
    }

    pub fn assert_not_paused(&self) -> Result<()> {
        require!(!self.is_paused, AgoraError::NetworkPaused);
        Ok(())
    }

    /// Acquire the re-entrancy lock. Every error path unwinds the whole
    /// transaction, so a held lock can never outlive a failed operation.
    pub fn acquire_lock(&mut self) -> Result<()> {
        require!(!self.locked, AgoraError::ReentrantCall);
        self.locked = true;
        Ok(())
    }

    pub fn release_lock(&mut self) {
        self.locked = false;
    }

    /// A reward round is in flight between `distribute_rewards` and the
    /// batch call that drains the pool.
    pub fn round_in_flight(&self) -> bool {
        self.pending_rewards != 0 || self.last_processed_index != 0
    }

    /// Apply a sparse parameter update, validating bounds per field.
    pub fn apply_params(&mut self, update: &NetworkParamsUpdate) -> Result<()> {
        if let Some(fee) = update.registration_fee {
            self.registration_fee = fee;
        }
        if let Some(fee) = update.message_fee {
            self.message_fee = fee;
        }
        if let Some(bps) = update.service_fee_bps {
            require!(bps <= MAX_SERVICE_FEE_BPS, AgoraError::InvalidFeeRate);
            self.service_fee_bps = bps;
        }
        if let Some(stake) = update.min_stake {
            self.min_stake = stake;
        }
        if let Some(ceiling) = update.max_service_price {
            require!(ceiling > 0, AgoraError::InvalidServicePrice);
            self.max_service_price = ceiling;
        }
        if let Some(period) = update.lock_period {
            require!(period >= 0, AgoraError::InvalidLockPeriod);
            self.lock_period = period;
        }
        if let Some(bps) = update.reward_rate_bps {
            require!(bps <= MAX_REWARD_RATE_BPS, AgoraError::InvalidRewardRate);
            self.reward_rate_bps = bps;
        }
        Ok(())
    }

    pub fn accrue_fee(&mut self, amount: u128) -> Result<()> {
        self.accumulated_fees = self
            .accumulated_fees
            .checked_add(amount)
            .ok_or(AgoraError::Overflow)?;
        Ok(())
    }

    pub fn note_registration(&mut self, stake: u128) -> Result<()> {
        self.total_agents = self
            .total_agents
            .checked_add(1)
            .ok_or(AgoraError::Overflow)?;
        self.total_staked = self
            .total_staked
            .checked_add(stake)
            .ok_or(AgoraError::Overflow)?;
        Ok(())
    }

    pub fn note_unstake(&mut self, stake: u128, unclaimed: u128) -> Result<()> {
        self.total_agents = self
            .total_agents
            .checked_sub(1)
            .ok_or(AgoraError::Overflow)?;
        self.total_staked = self
            .total_staked
            .checked_sub(stake)
            .ok_or(AgoraError::Overflow)?;
        self.total_unclaimed = self
            .total_unclaimed
            .checked_sub(unclaimed)
            .ok_or(AgoraError::Overflow)?;
        Ok(())
    }

    /// Record one sent message: counter, volume, and fee accrual.
    pub fn note_message(&mut self, fee: u128) -> Result<()> {
        self.total_messages = self
            .total_messages
            .checked_add(1)
            .ok_or(AgoraError::Overflow)?;
        self.total_volume = self
            .total_volume
            .checked_add(fee)
            .ok_or(AgoraError::Overflow)?;
        self.accrue_fee(fee)
    }

    pub fn next_service_id(&mut self) -> Result<u64> {
        let id = self.total_services;
        self.total_services = id.checked_add(1).ok_or(AgoraError::Overflow)?;
        Ok(id)
    }

    /// Split a service price into (provider reward, protocol fee).
    /// Integer division truncates toward the fee, never the reward:
    /// the fee is computed first and the reward is the exact remainder.
    pub fn service_split(&self, price: u128) -> Result<(u128, u128)> {
        let fee = price
            .checked_mul(self.service_fee_bps as u128)
            .ok_or(AgoraError::Overflow)?
            .checked_div(BPS_DENOMINATOR)
            .ok_or(AgoraError::Overflow)?;
        let reward = price.checked_sub(fee).ok_or(AgoraError::Overflow)?;
        Ok((reward, fee))
    }

    /// Record a settled service: volume grows by the full price, the fee
    /// margin accrues to the treasury.
    pub fn settle_service(&mut self, price: u128, fee: u128) -> Result<()> {
        self.total_volume = self
            .total_volume
            .checked_add(price)
            .ok_or(AgoraError::Overflow)?;
        self.accrue_fee(fee)
    }

    /// Time-proportional reward accrual since the last distribution.
    /// Returns (amount, elapsed seconds); the amount may be zero.
    pub fn reward_accrual(&self, now: i64) -> Result<(u128, i64)> {
        let elapsed = now
            .checked_sub(self.last_distribution_time)
            .ok_or(AgoraError::Overflow)?;
        if elapsed <= 0 {
            return Ok((0, elapsed));
        }
        let numerator = self
            .total_staked
            .checked_mul(self.reward_rate_bps as u128)
            .ok_or(AgoraError::Overflow)?
            .checked_mul(elapsed as u128)
            .ok_or(AgoraError::Overflow)?;
        let denominator = BPS_DENOMINATOR
            .checked_mul(SECONDS_PER_YEAR as u128)
            .ok_or(AgoraError::Overflow)?;
        let amount = numerator
            .checked_div(denominator)
            .ok_or(AgoraError::Overflow)?;
        Ok((amount, elapsed))
    }

    /// Everything the vault owes outside an in-flight CPI: staked principal,
    /// accrued fees, credited-but-unclaimed rewards, and the undistributed
    /// remainder of the current round's pool.
    pub fn liabilities(&self) -> Result<u128> {
        let undistributed = self
            .pending_rewards
            .checked_sub(self.round_distributed)
            .ok_or(AgoraError::Overflow)?;
        self.total_staked
            .checked_add(self.accumulated_fees)
            .and_then(|v| v.checked_add(self.total_unclaimed))
            .and_then(|v| v.checked_add(undistributed))
            .ok_or_else(|| AgoraError::Overflow.into())
    }

    pub fn begin_distribution(&mut self, amount: u128, now: i64) -> Result<()> {
        require!(!self.round_in_flight(), AgoraError::DistributionInProgress);
        self.pending_rewards = amount;
        self.round_distributed = 0;
        self.last_distribution_time = now;
        Ok(())
    }

    /// An agent's share of the current pool, pro rata by stake.
    pub fn pro_rata_share(&self, staked: u128) -> Result<u128> {
        self.pending_rewards
            .checked_mul(staked)
            .ok_or(AgoraError::Overflow)?
            .checked_div(self.total_staked)
            .ok_or_else(|| AgoraError::Overflow.into())
    }

    pub fn credit_share(&mut self, share: u128) -> Result<()> {
        self.round_distributed = self
            .round_distributed
            .checked_add(share)
            .ok_or(AgoraError::Overflow)?;
        self.total_unclaimed = self
            .total_unclaimed
            .checked_add(share)
            .ok_or(AgoraError::Overflow)?;
        Ok(())
    }

    /// Close out a finished round. Division dust that no share could carry
    /// is folded into the fee accrual so no vault balance goes unaccounted.
    /// Returns the dust amount.
    pub fn complete_round(&mut self) -> Result<u128> {
        let dust = self
            .pending_rewards
            .checked_sub(self.round_distributed)
            .ok_or(AgoraError::Overflow)?;
        self.accrue_fee(dust)?;
        self.pending_rewards = 0;
        self.round_distributed = 0;
        self.last_processed_index = 0;
        Ok(dust)
    }

    pub fn note_claim(&mut self, amount: u128) -> Result<()> {
        self.total_unclaimed = self
            .total_unclaimed
            .checked_sub(amount)
            .ok_or(AgoraError::Overflow)?;
        Ok(())
    }

    /// Zero the fee accrual and return the swept amount.
    pub fn take_fees(&mut self) -> Result<u128> {
        require!(self.accumulated_fees > 0, AgoraError::NoFeesAccrued);
        let amount = self.accumulated_fees;
        self.accumulated_fees = 0;
        Ok(amount)
    }
}

/// Sparse parameter update; `None` leaves a field unchanged.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct NetworkParamsUpdate {
    pub registration_fee: Option<u64>,
    pub message_fee: Option<u64>,
    pub service_fee_bps: Option<u16>,
    pub min_stake: Option<u64>,
    pub max_service_price: Option<u64>,
    pub lock_period: Option<i64>,
    pub reward_rate_bps: Option<u16>,
}

// ============================================================================
// Agent Directory
// ============================================================================

/// Dense, insertion-ordered list of active agents with their identifier
/// claim hashes. Each agent stores its own position (`directory_index`);
/// removal is swap-with-last-and-pop.
/// PDA seeds: [b"directory"]
#[account]
#[derive(Default)]
pub struct AgentDirectory {
    pub agents: Vec<Pubkey>,
    pub identifier_hashes: Vec<[u8; 32]>,
    pub bump: u8,
}

impl AgentDirectory {
    /// discriminator (8) + agents vec (4 + 128 * 32) + hashes vec (4 + 128 * 32) + bump (1)
    pub const SIZE: usize = 8 + (4 + MAX_AGENTS * 32) + (4 + MAX_AGENTS * 32) + 1; // 8209 bytes

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn contains_identifier(&self, hash: &[u8; 32]) -> bool {
        self.identifier_hashes.iter().any(|h| h == hash)
    }

    /// Append an agent and its identifier claim; returns the assigned index.
    pub fn push_entry(&mut self, agent: Pubkey, identifier_hash: [u8; 32]) -> Result<u32> {
        require!(self.agents.len() < MAX_AGENTS, AgoraError::DirectoryFull);
        require!(
            !self.contains_identifier(&identifier_hash),
            AgoraError::DuplicateIdentifier
        );
        let index = self.agents.len() as u32;
        self.agents.push(agent);
        self.identifier_hashes.push(identifier_hash);
        Ok(index)
    }

    /// Swap-and-pop removal of the entry at `index`. Returns the address
    /// that moved into the vacated slot, if any; the caller must update
    /// that agent's `directory_index` to keep the reverse index exact.
    pub fn remove_entry(&mut self, index: u32) -> Result<Option<Pubkey>> {
        let i = index as usize;
        require!(i < self.agents.len(), AgoraError::InvalidDirectoryIndex);
        let last = self.agents.len() - 1;
        self.agents.swap_remove(i);
        self.identifier_hashes.swap_remove(i);
        if i < last {
            Ok(Some(self.agents[i]))
        } else {
            Ok(None)
        }
    }

    /// Directory slice covered by one batch invocation from `cursor`.
    pub fn batch_range(&self, cursor: u32) -> std::ops::Range<usize> {
        let start = (cursor as usize).min(self.agents.len());
        let end = start
            .saturating_add(REWARD_BATCH_SIZE)
            .min(self.agents.len());
        start..end
    }
}

// ============================================================================
// Agent State
// ============================================================================

/// One record per registered participant. Closed on unstake, so an existing
/// record implies an active agent.
/// PDA seeds: [b"agent", authority]
#[account]
#[derive(Default)]
pub struct Agent {
    pub authority: Pubkey,
    /// Identity document pointer; shape-checked at registration, immutable.
    pub identifier: String,
    /// Opaque key material, stored not validated.
    pub public_key: String,
    pub staked_amount: u128,
    pub total_earnings: u128,
    /// Rewards credited by the batcher, withdrawable via claim.
    pub unclaimed_rewards: u128,
    /// Bounded to [0, MAX_REPUTATION].
    pub reputation: u64,
    pub registration_time: i64,
    pub last_activity: i64,
    pub total_services: u32,
    /// Position in the directory list (reverse index).
    pub directory_index: u32,
    pub is_active: bool,
    pub is_verified: bool,
    pub bump: u8,
}

impl Agent {
    /// discriminator (8) + authority (32) + identifier (4 + 100)
    /// + public_key (4 + 100) + three u128 amounts (48) + reputation (8)
    /// + two timestamps (16) + two u32 indexes (8) + two flags + bump (3)
    pub const SIZE: usize =
        8 + 32 + (4 + MAX_IDENTIFIER_LENGTH) + (4 + MAX_PUBLIC_KEY_LENGTH) + 48 + 8 + 16 + 8 + 3; // 331 bytes

    pub fn unlock_time(&self, lock_period: i64) -> i64 {
        self.registration_time.saturating_add(lock_period)
    }

    pub fn touch(&mut self, now: i64) {
        self.last_activity = now;
    }

    /// Add a reputation bonus, saturating at the domain ceiling.
    /// Returns (old, new).
    pub fn grant_reputation(&mut self, bonus: u64) -> (u64, u64) {
        let old = self.reputation;
        self.reputation = self.reputation.saturating_add(bonus).min(MAX_REPUTATION);
        (old, self.reputation)
    }

    /// Signed reputation adjustment: saturates at the ceiling, floors at
    /// zero. Returns (old, new).
    pub fn apply_reputation_delta(&mut self, delta: i64) -> (u64, u64) {
        let old = self.reputation;
        self.reputation = if delta >= 0 {
            self.reputation
                .saturating_add(delta as u64)
                .min(MAX_REPUTATION)
        } else {
            self.reputation.saturating_sub(delta.unsigned_abs())
        };
        (old, self.reputation)
    }

    /// Post a completed service to the record: earnings and service count
    /// are width-checked and fail the operation on overflow, the reputation
    /// bonus clamps.
    pub fn credit_completion(&mut self, reward: u128) -> Result<()> {
        self.total_earnings = self
            .total_earnings
            .checked_add(reward)
            .ok_or(AgoraError::Overflow)?;
        self.total_services = self
            .total_services
            .checked_add(1)
            .ok_or(AgoraError::Overflow)?;
        self.grant_reputation(SERVICE_COMPLETION_REPUTATION_BONUS);
        Ok(())
    }

    pub fn credit_reward(&mut self, share: u128) -> Result<()> {
        self.unclaimed_rewards = self
            .unclaimed_rewards
            .checked_add(share)
            .ok_or(AgoraError::Overflow)?;
        Ok(())
    }

    /// Zero the reward accrual and return the claimable amount.
    pub fn take_rewards(&mut self) -> Result<u128> {
        require!(self.unclaimed_rewards > 0, AgoraError::NothingToClaim);
        let amount = self.unclaimed_rewards;
        self.unclaimed_rewards = 0;
        Ok(amount)
    }
}

// ============================================================================
// Message State
// ============================================================================

/// Immutable point-to-point message record.
/// PDA seeds: [b"message", message_id]
#[account]
#[derive(Default)]
pub struct Message {
    /// Keccak-256 over (sender, recipient, content id, timestamp).
    pub message_id: [u8; 32],
    pub from_agent: Pubkey,
    pub to_agent: Pubkey,
    pub content_id: String,
    pub timestamp: i64,
    pub is_verified: bool,
    pub fee: u128,
    pub bump: u8,
}

impl Message {
    /// discriminator (8) + message_id (32) + two pubkeys (64)
    /// + content_id (4 + 200) + timestamp (8) + verified (1) + fee (16) + bump (1)
    pub const SIZE: usize = 8 + 32 + 64 + (4 + MAX_CID_LENGTH) + 8 + 1 + 16 + 1; // 334 bytes
}

// ============================================================================
// Service State
// ============================================================================

/// Provider/consumer engagement with direct settlement on completion.
/// PDA seeds: [b"service", service_id.to_le_bytes()]
#[account]
#[derive(Default)]
pub struct Service {
    pub service_id: u64,
    pub provider: Pubkey,
    pub consumer: Pubkey,
    pub service_type: String,
    pub price: u128,
    pub created_at: i64,
    pub is_completed: bool,
    /// Empty until completion.
    pub result_id: String,
    pub bump: u8,
}

impl Service {
    /// discriminator (8) + service_id (8) + two pubkeys (64)
    /// + service_type (4 + 64) + price (16) + created_at (8) + completed (1)
    /// + result_id (4 + 200) + bump (1)
    pub const SIZE: usize =
        8 + 8 + 64 + (4 + MAX_SERVICE_TYPE_LENGTH) + 16 + 8 + 1 + (4 + MAX_CID_LENGTH) + 1; // 378 bytes

    pub fn expires_at(&self) -> i64 {
        self.created_at.saturating_add(SERVICE_VALIDITY_WINDOW)
    }

    /// The window is inclusive: completion at exactly `expires_at` succeeds.
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expires_at()
    }
}
