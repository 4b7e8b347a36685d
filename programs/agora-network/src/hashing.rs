//! Hash derivations for message keys and identifier claims.
//!
//! Both hashes are domain-separated so a message key can never alias an
//! identifier claim. Message keys double as the message account's PDA seed,
//! which is what makes a colliding (sender, recipient, content, timestamp)
//! tuple structurally unrepresentable: creating the same key twice fails.

use anchor_lang::prelude::*;
use sha3::{Digest, Keccak256};

use crate::constants::{DOMAIN_IDENTIFIER, DOMAIN_MESSAGE};

/// Compute the key of a message record.
/// Domain: AGORA:message:v1
pub fn compute_message_id(
    from_agent: &Pubkey,
    to_agent: &Pubkey,
    content_id: &str,
    timestamp: i64,
) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(DOMAIN_MESSAGE);
    hasher.update(from_agent.as_ref());
    hasher.update(to_agent.as_ref());
    hasher.update(content_id.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.finalize().into()
}

/// Compute the claim hash under which an identifier occupies its directory
/// slot. Domain: AGORA:identifier:v1
pub fn compute_identifier_hash(identifier: &str) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(DOMAIN_IDENTIFIER);
    hasher.update(identifier.as_bytes());
    hasher.finalize().into()
}
