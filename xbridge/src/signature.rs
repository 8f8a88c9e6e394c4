//! Validator signature checks.
//!
//! Signatures are `r ‖ s ‖ v` (65 bytes). The recovered key is compressed
//! and compared byte-for-byte with the configured validator key.

use cosmwasm_std::Api;

use crate::error::ContractError;
use crate::wire::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};

/// Ethereum-style recovery ids are offset by 27
const RECOVERY_ID_OFFSET: u8 = 27;

/// Normalize the trailing recovery byte to {0, 1}.
pub fn recovery_param(v: u8) -> Result<u8, ContractError> {
    let param = if v >= RECOVERY_ID_OFFSET {
        v - RECOVERY_ID_OFFSET
    } else {
        v
    };
    match param {
        0 | 1 => Ok(param),
        _ => Err(ContractError::WrongSignature),
    }
}

/// Compress an uncompressed (65-byte, `0x04`-prefixed) secp256k1 point.
pub fn compress_public_key(uncompressed: &[u8]) -> Option<[u8; PUBLIC_KEY_LENGTH]> {
    if uncompressed.len() != 65 || uncompressed[0] != 0x04 {
        return None;
    }
    let mut compressed = [0u8; PUBLIC_KEY_LENGTH];
    compressed[0] = if uncompressed[64] & 1 == 0 { 0x02 } else { 0x03 };
    compressed[1..].copy_from_slice(&uncompressed[1..33]);
    Some(compressed)
}

/// Recover the signer of `message_hash` and require it to be `validator_key`.
pub fn verify_validator_signature(
    api: &dyn Api,
    message_hash: &[u8; 32],
    signature: &[u8],
    validator_key: &[u8],
) -> Result<(), ContractError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(ContractError::WrongSignature);
    }
    let param = recovery_param(signature[SIGNATURE_LENGTH - 1])?;

    let recovered = api
        .secp256k1_recover_pubkey(message_hash, &signature[..SIGNATURE_LENGTH - 1], param)
        .map_err(|_| ContractError::WrongSignature)?;
    let signer = compress_public_key(&recovered).ok_or(ContractError::WrongSignature)?;

    if signer.as_slice() != validator_key {
        return Err(ContractError::WrongSignature);
    }
    Ok(())
}
