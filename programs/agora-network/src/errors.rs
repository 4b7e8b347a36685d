use anchor_lang::prelude::*;

/// Closed failure taxonomy for the network.
///
/// Three conditions are enforced structurally by the account model instead of
/// a variant here: re-registering an active agent and replaying a message key
/// surface as account-already-in-use, and operating on an unregistered agent
/// surfaces as account-not-initialized.
#[error_code]
pub enum AgoraError {
    // ========================================================================
    // Input Validation
    // ========================================================================
    #[msg("Address must not be the zero address")]
    InvalidAddress,

    #[msg("Identifier is empty or exceeds the maximum length")]
    InvalidIdentifier,

    #[msg("Identifier does not match any supported content-hash or persistent-name shape")]
    UnclassifiableIdentifier,

    #[msg("Identifier is already claimed by an active agent")]
    DuplicateIdentifier,

    #[msg("Public key is empty or exceeds the maximum length")]
    InvalidPublicKey,

    #[msg("Service price must be nonzero and at most the configured ceiling")]
    InvalidServicePrice,

    #[msg("Service category is empty or exceeds the maximum length")]
    InvalidServiceType,

    #[msg("Content identifier is empty or exceeds the maximum length")]
    InvalidContentId,

    #[msg("Result identifier is empty or exceeds the maximum length")]
    InvalidResultId,

    #[msg("Message timestamp is outside the accepted freshness window")]
    StaleMessageTimestamp,

    #[msg("Token account owner or mint does not match")]
    InvalidTokenAccount,

    // ========================================================================
    // State Preconditions
    // ========================================================================
    #[msg("Stake is below the configured minimum")]
    InsufficientStake,

    #[msg("Agent is not active")]
    AgentNotActive,

    #[msg("Agent is not verified")]
    AgentNotVerified,

    #[msg("Agent is already verified")]
    AgentAlreadyVerified,

    #[msg("Stake lock period has not elapsed")]
    StakeLockActive,

    #[msg("Agents cannot message themselves")]
    SelfMessageNotAllowed,

    #[msg("Provider and consumer must differ")]
    SelfServiceNotAllowed,

    #[msg("Only the original provider can complete a service")]
    NotServiceProvider,

    #[msg("Service is already completed")]
    ServiceAlreadyCompleted,

    #[msg("Service validity window has elapsed")]
    ServiceExpired,

    #[msg("Agent directory is at capacity")]
    DirectoryFull,

    #[msg("Directory index is out of bounds")]
    InvalidDirectoryIndex,

    #[msg("Moved directory entry does not match the supplied agent account")]
    InvalidTailAgent,

    #[msg("A reward round is in flight")]
    DistributionInProgress,

    #[msg("No rewards accrued for the elapsed period")]
    NothingToDistribute,

    #[msg("No unclaimed rewards")]
    NothingToClaim,

    #[msg("No fees accrued")]
    NoFeesAccrued,

    #[msg("Supplied accounts do not match the directory batch slice")]
    BatchAccountsMismatch,

    // ========================================================================
    // Resource Conditions
    // ========================================================================
    #[msg("Insufficient token balance")]
    InsufficientBalance,

    #[msg("Vault balance cannot cover the payout")]
    InsufficientVaultBalance,

    #[msg("Arithmetic overflow")]
    Overflow,

    // ========================================================================
    // Authorization & Lifecycle
    // ========================================================================
    #[msg("Invalid authority")]
    InvalidAuthority,

    #[msg("Authority is immutable (renounced)")]
    ImmutableAuthority,

    #[msg("Verification oracle has not been configured")]
    OracleNotConfigured,

    #[msg("Signer does not match the configured verification oracle")]
    InvalidOracle,

    #[msg("Treasury address has not been configured")]
    TreasuryNotConfigured,

    #[msg("Treasury token account is not owned by the configured treasury")]
    InvalidTreasuryAccount,

    #[msg("Service fee rate exceeds the hard ceiling")]
    InvalidFeeRate,

    #[msg("Reward rate exceeds the hard ceiling")]
    InvalidRewardRate,

    #[msg("Lock period must not be negative")]
    InvalidLockPeriod,

    #[msg("Network is paused")]
    NetworkPaused,

    #[msg("Network is already paused")]
    AlreadyPaused,

    #[msg("Network is not paused")]
    NotPaused,

    #[msg("Re-entrant call rejected")]
    ReentrantCall,
}
