// ============================================================================
// Registry Constants
// ============================================================================

/// Reputation granted to a freshly registered agent.
pub const INITIAL_REPUTATION: u64 = 1_000;

/// Upper bound of the reputation range. The lower bound is zero.
pub const MAX_REPUTATION: u64 = 10_000;

/// Reputation bonus granted when the verification oracle attests an agent.
pub const VERIFICATION_REPUTATION_BONUS: u64 = 1_000;

/// Reputation earned per completed service.
pub const SERVICE_COMPLETION_REPUTATION_BONUS: u64 = 10;

/// Maximum number of simultaneously active agents.
///
/// The directory stores two parallel 32-byte entries per agent and must fit
/// a single account created in one instruction (10 KiB allocation cap).
pub const MAX_AGENTS: usize = 128;

/// Maximum byte length of an agent identifier.
pub const MAX_IDENTIFIER_LENGTH: usize = 100;

/// Maximum byte length of a stored agent public key.
pub const MAX_PUBLIC_KEY_LENGTH: usize = 100;

// ============================================================================
// Identifier Classification
// ============================================================================

/// Prefix of CIDv0 content hashes.
pub const CIDV0_PREFIX: &str = "Qm";

/// Prefix of CIDv1 content hashes.
pub const CIDV1_PREFIX: &str = "baf";

/// Prefix of IPNS persistent names.
pub const IPNS_PREFIX: &str = "k";

/// Minimum accepted length for a content-hash identifier.
pub const CONTENT_HASH_MIN_LENGTH: usize = 10;

/// Maximum accepted length for a content-hash identifier.
pub const CONTENT_HASH_MAX_LENGTH: usize = 100;

/// Minimum accepted length for a persistent-name identifier.
pub const PERSISTENT_NAME_MIN_LENGTH: usize = 50;

/// Maximum accepted length for a persistent-name identifier.
pub const PERSISTENT_NAME_MAX_LENGTH: usize = 65;

// ============================================================================
// Marketplace Constants
// ============================================================================

/// Basis-point denominator for fee and rate arithmetic.
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Hard ceiling for the service fee rate (10%).
pub const MAX_SERVICE_FEE_BPS: u16 = 1_000;

/// Seconds a service remains completable after creation (30 days).
pub const SERVICE_VALIDITY_WINDOW: i64 = 30 * 24 * 60 * 60;

/// Maximum byte length of a service category.
pub const MAX_SERVICE_TYPE_LENGTH: usize = 64;

/// Maximum byte length of message content and service result identifiers.
pub const MAX_CID_LENGTH: usize = 200;

// ============================================================================
// Messaging Constants
// ============================================================================

/// Accepted drift between a message's declared timestamp and the cluster
/// clock, in seconds. The timestamp is part of the message key, so the
/// sender declares it and the program checks freshness.
pub const MESSAGE_TIMESTAMP_TOLERANCE: i64 = 90;

// ============================================================================
// Reward Constants
// ============================================================================

/// Agents credited per reward batch invocation.
pub const REWARD_BATCH_SIZE: usize = 50;

/// Hard ceiling for the annualized reward rate (100%).
pub const MAX_REWARD_RATE_BPS: u16 = 10_000;

/// Denominator for annualized reward accrual.
pub const SECONDS_PER_YEAR: i64 = 365 * 24 * 60 * 60;

// ============================================================================
// Hash Domains
// ============================================================================

/// Domain separator for message keys.
pub const DOMAIN_MESSAGE: &[u8] = b"AGORA:message:v1";

/// Domain separator for identifier claim hashes.
pub const DOMAIN_IDENTIFIER: &[u8] = b"AGORA:identifier:v1";

// ============================================================================
// Schema
// ============================================================================

/// Current persisted-state schema version, stored on the network account.
pub const NETWORK_SCHEMA_VERSION: u8 = 1;
