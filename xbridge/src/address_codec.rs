//! Bech32 encoding for unlock recipients
//!
//! Unlock messages carry the recipient as 20 raw account bytes. The contract
//! renders them as a bech32 address using the chain prefix configured at
//! instantiation (e.g. `terra`), so the validator never signs over an
//! address string.

use cosmwasm_std::{StdError, StdResult};

/// Bech32 character set
const BECH32_CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const CHECKSUM_LENGTH: usize = 6;

/// Human-readable part rules: 1-83 chars, lowercase, printable ASCII
pub fn validate_hrp(hrp: &str) -> bool {
    !hrp.is_empty()
        && hrp.len() <= 83
        && hrp
            .bytes()
            .all(|c| (33..=126).contains(&c) && !c.is_ascii_uppercase() && c != b'1')
}

/// Encode raw 20 bytes to a bech32 address with given prefix
pub fn encode_bech32_address(bytes: &[u8; 20], hrp: &str) -> StdResult<String> {
    if !validate_hrp(hrp) {
        return Err(StdError::generic_err(format!(
            "Invalid bech32 prefix: {}",
            hrp
        )));
    }

    let data5 = convert_bits(bytes, 8, 5, true)?;
    let checksum = compute_bech32_checksum(hrp, &data5);

    Ok(format!(
        "{}1{}{}",
        hrp,
        encode_bech32_data(&data5),
        encode_bech32_data(&checksum)
    ))
}

/// Convert bits between different group sizes
fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> StdResult<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut result = Vec::new();
    let max_v = (1u32 << to_bits) - 1;

    for &value in data {
        acc = (acc << from_bits) | value as u32;
        bits += from_bits;

        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_v) as u8);
        }
    }

    if pad && bits > 0 {
        result.push(((acc << (to_bits - bits)) & max_v) as u8);
    } else if !pad && (bits >= from_bits || (acc << (to_bits - bits)) & max_v != 0) {
        return Err(StdError::generic_err("Invalid padding"));
    }

    Ok(result)
}

fn encode_bech32_data(data: &[u8]) -> String {
    data.iter()
        .map(|&b| BECH32_CHARSET[b as usize] as char)
        .collect()
}

fn compute_bech32_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut values = expand_hrp(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; CHECKSUM_LENGTH]);

    let polymod = bech32_polymod(&values) ^ 1;

    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, c) in checksum.iter_mut().enumerate() {
        *c = ((polymod >> (5 * (5 - i))) & 31) as u8;
    }
    checksum
}

fn expand_hrp(hrp: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(hrp.len() * 2 + 1);
    result.extend(hrp.bytes().map(|c| c >> 5));
    result.push(0);
    result.extend(hrp.bytes().map(|c| c & 31));
    result
}

fn bech32_polymod(values: &[u8]) -> u32 {
    const GENERATOR: [u32; 5] = [
        0x3b6a_57b2,
        0x2650_8e6d,
        0x1ea1_19fa,
        0x3d42_33dd,
        0x2a14_62b3,
    ];

    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ (v as u32);
        for (i, gen) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk
}
