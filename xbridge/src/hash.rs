//! Canonical unlock message and its keccak-256 digest
//!
//! The validator signs the keccak-256 hash of this byte layout (99 bytes):
//! - Bytes 0-15:   lock id (version byte first)
//! - Bytes 16-35:  recipient on this chain (20 bytes)
//! - Bytes 36-52:  system amount: `0x01` followed by the u128 big-endian
//! - Bytes 53-56:  lock source chain id
//! - Bytes 57-92:  token source (chain id + address)
//! - Bytes 93-98:  ASCII tag `unlock`

use tiny_keccak::{Hasher, Keccak};

use crate::wire::{
    ChainId, LockId, TokenSource, CHAIN_ID_LENGTH, LOCAL_RECIPIENT_LENGTH, LOCK_ID_LENGTH,
    TOKEN_SOURCE_LENGTH,
};

/// Trailing tag that binds a signature to the unlock direction
pub const UNLOCK_TAG: &[u8] = b"unlock";

/// Type byte prepended to encoded unsigned integers
pub const UINT_PREFIX: u8 = 0x01;

pub const ENCODED_UINT_LENGTH: usize = 17;

pub const UNLOCK_MESSAGE_LENGTH: usize = LOCK_ID_LENGTH
    + LOCAL_RECIPIENT_LENGTH
    + ENCODED_UINT_LENGTH
    + CHAIN_ID_LENGTH
    + TOKEN_SOURCE_LENGTH
    + UNLOCK_TAG.len();

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Encode an unsigned amount as `0x01 ‖ u128 big-endian`
pub fn encode_uint(value: u128) -> [u8; ENCODED_UINT_LENGTH] {
    let mut out = [0u8; ENCODED_UINT_LENGTH];
    out[0] = UINT_PREFIX;
    out[1..].copy_from_slice(&value.to_be_bytes());
    out
}

/// Build the byte-exact message the validator signs for an unlock.
pub fn unlock_message(
    lock_id: &LockId,
    recipient: &[u8; LOCAL_RECIPIENT_LENGTH],
    system_amount: u128,
    lock_source: &ChainId,
    token_source: &TokenSource,
) -> Vec<u8> {
    let mut message = Vec::with_capacity(UNLOCK_MESSAGE_LENGTH);
    message.extend_from_slice(lock_id);
    message.extend_from_slice(recipient);
    message.extend_from_slice(&encode_uint(system_amount));
    message.extend_from_slice(lock_source);
    message.extend_from_slice(token_source);
    message.extend_from_slice(UNLOCK_TAG);
    message
}

pub fn unlock_message_hash(
    lock_id: &LockId,
    recipient: &[u8; LOCAL_RECIPIENT_LENGTH],
    system_amount: u128,
    lock_source: &ChainId,
    token_source: &TokenSource,
) -> [u8; 32] {
    keccak256(&unlock_message(
        lock_id,
        recipient,
        system_amount,
        lock_source,
        token_source,
    ))
}

/// Hex-encode bytes with a `0x` prefix for event attributes
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
