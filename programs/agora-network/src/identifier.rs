//! Identifier shape classification.
//!
//! Agent identifiers are opaque pointers into content-addressed storage and
//! are never dereferenced on-chain; the program only checks that a string has
//! one of the supported shapes before accepting it at registration.

use anchor_lang::prelude::*;

use crate::constants::*;

/// Shape of an agent identifier.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum IdentifierKind {
    /// No supported shape matched.
    Unknown,
    /// CIDv0 ("Qm...") or CIDv1 ("baf...") content hash.
    ContentHash,
    /// IPNS ("k...") persistent name.
    PersistentName,
}

/// Classify an identifier string. Rules are ordered; the first match wins.
pub fn classify(identifier: &str) -> IdentifierKind {
    let len = identifier.len();
    if len < 2 {
        return IdentifierKind::Unknown;
    }
    if identifier.starts_with(CIDV0_PREFIX)
        && (CONTENT_HASH_MIN_LENGTH..=CONTENT_HASH_MAX_LENGTH).contains(&len)
    {
        return IdentifierKind::ContentHash;
    }
    if identifier.starts_with(CIDV1_PREFIX)
        && (CONTENT_HASH_MIN_LENGTH..=CONTENT_HASH_MAX_LENGTH).contains(&len)
    {
        return IdentifierKind::ContentHash;
    }
    if identifier.starts_with(IPNS_PREFIX)
        && (PERSISTENT_NAME_MIN_LENGTH..=PERSISTENT_NAME_MAX_LENGTH).contains(&len)
    {
        return IdentifierKind::PersistentName;
    }
    IdentifierKind::Unknown
}
