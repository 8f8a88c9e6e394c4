//! Fixed-width fields exchanged with the other side of the bridge.
//!
//! Each parser checks the exact byte width and returns the error kind the
//! relayer expects for that field.

use cosmwasm_std::Binary;

use crate::error::ContractError;

pub const LOCK_ID_LENGTH: usize = 16;
pub const LOCK_ID_VERSION: u8 = 0x01;
pub const CHAIN_ID_LENGTH: usize = 4;
pub const FOREIGN_RECIPIENT_LENGTH: usize = 32;
pub const LOCAL_RECIPIENT_LENGTH: usize = 20;
pub const TOKEN_SOURCE_ADDRESS_LENGTH: usize = 32;
pub const TOKEN_SOURCE_LENGTH: usize = CHAIN_ID_LENGTH + TOKEN_SOURCE_ADDRESS_LENGTH;
pub const PUBLIC_KEY_LENGTH: usize = 33;
pub const SIGNATURE_LENGTH: usize = 65;

pub type LockId = [u8; LOCK_ID_LENGTH];
pub type ChainId = [u8; CHAIN_ID_LENGTH];
pub type TokenSource = [u8; TOKEN_SOURCE_LENGTH];

/// Lock id with a supported version byte
pub fn parse_lock_id(lock_id: &Binary) -> Result<LockId, ContractError> {
    let id: LockId = lock_id
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::WrongVersion)?;
    if id[0] != LOCK_ID_VERSION {
        return Err(ContractError::WrongVersion);
    }
    Ok(id)
}

/// 32-byte account on the destination chain
pub fn parse_foreign_recipient(
    recipient: &Binary,
) -> Result<[u8; FOREIGN_RECIPIENT_LENGTH], ContractError> {
    recipient
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::WrongRecipient {
            expected: FOREIGN_RECIPIENT_LENGTH,
            got: recipient.len(),
        })
}

/// 20-byte account on this chain
pub fn parse_local_recipient(
    recipient: &Binary,
) -> Result<[u8; LOCAL_RECIPIENT_LENGTH], ContractError> {
    recipient
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::WrongRecipient {
            expected: LOCAL_RECIPIENT_LENGTH,
            got: recipient.len(),
        })
}

pub fn parse_destination(destination: &Binary) -> Result<ChainId, ContractError> {
    destination
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::WrongDestination {
            expected: CHAIN_ID_LENGTH,
            got: destination.len(),
        })
}

pub fn parse_lock_source(lock_source: &Binary) -> Result<ChainId, ContractError> {
    lock_source
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::WrongLockSource {
            expected: CHAIN_ID_LENGTH,
            got: lock_source.len(),
        })
}

/// Origin chain id followed by the origin address; the chain id may not be zero
pub fn parse_token_source(token_source: &Binary) -> Result<TokenSource, ContractError> {
    let source: TokenSource = token_source
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::WrongTokenSource {
            expected: TOKEN_SOURCE_LENGTH,
        })?;
    if source[..CHAIN_ID_LENGTH] == [0u8; CHAIN_ID_LENGTH] {
        return Err(ContractError::WrongTokenSource {
            expected: TOKEN_SOURCE_LENGTH,
        });
    }
    Ok(source)
}

/// Own chain id given at instantiation: exactly four bytes, not all zero
pub fn parse_own_chain_id(chain_id: &Binary) -> Result<ChainId, ContractError> {
    let id: ChainId =
        chain_id
            .as_slice()
            .try_into()
            .map_err(|_| ContractError::InvalidChainId {
                reason: format!(
                    "must be exactly {} bytes, got {}",
                    CHAIN_ID_LENGTH,
                    chain_id.len()
                ),
            })?;
    if id == [0u8; CHAIN_ID_LENGTH] {
        return Err(ContractError::InvalidChainId {
            reason: "0x00000000 is reserved".to_string(),
        });
    }
    Ok(id)
}

/// Compressed secp256k1 validator key
pub fn parse_public_key(public_key: &Binary) -> Result<[u8; PUBLIC_KEY_LENGTH], ContractError> {
    let key: [u8; PUBLIC_KEY_LENGTH] =
        public_key
            .as_slice()
            .try_into()
            .map_err(|_| ContractError::WrongPublicKey {
                expected: PUBLIC_KEY_LENGTH,
                got: public_key.len(),
            })?;
    if key[0] != 0x02 && key[0] != 0x03 {
        return Err(ContractError::WrongPublicKey {
            expected: PUBLIC_KEY_LENGTH,
            got: public_key.len(),
        });
    }
    Ok(key)
}
