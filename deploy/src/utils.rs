use std::str::FromStr;

use anyhow::{anyhow, Result};
use ethers::{
    signers::{LocalWallet, Signer},
    types::{H160, U256},
    utils::{format_units, hex},
};

/// Strict account-address parsing: `0x` prefix and exactly 40 hex digits.
pub fn parse_address(address: &str) -> Result<H160> {
    let digits = address
        .strip_prefix("0x")
        .ok_or_else(|| anyhow!("address must start with 0x: {address}"))?;
    if digits.len() != 40 {
        return Err(anyhow!(
            "address must be 40 hex digits, got {}: {address}",
            digits.len()
        ));
    }
    H160::from_str(address).map_err(|err| anyhow!("invalid address {address}: {err}"))
}

pub fn parse_wallet(sk: &str, chain_id: u64) -> Result<LocalWallet> {
    let wallet = LocalWallet::from_bytes(&hex::decode(sk.strip_prefix("0x").unwrap_or(sk))?)?;
    Ok(wallet.with_chain_id(chain_id))
}

pub fn format_bnb(wei: U256) -> String {
    format_units(wei, "ether").unwrap_or_else(|_| wei.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_address_rejects_bad_input() {
        assert!(parse_address("55d398326f99059fF775485246999027B3197955").is_err());
        assert!(parse_address("0x55d398326f99059fF775485246999027B319795").is_err());
        assert!(parse_address("0x55d398326f99059fF775485246999027B31979555").is_err());
        assert!(parse_address("0xzzd398326f99059fF775485246999027B3197955").is_err());
    }

    #[test]
    fn parse_address_accepts_checksummed() {
        let address = parse_address("0x55d398326f99059fF775485246999027B3197955").unwrap();
        assert_eq!(
            format!("{address:?}"),
            "0x55d398326f99059ff775485246999027b3197955"
        );
    }

    #[test]
    fn parse_wallet_ignores_hex_prefix() {
        let sk = "0123456789012345678901234567890123456789012345678901234567890123";
        let bare = parse_wallet(sk, 56).unwrap();
        let prefixed = parse_wallet(&format!("0x{sk}"), 56).unwrap();
        assert_eq!(bare.address(), prefixed.address());
        assert_eq!(bare.chain_id(), 56);
    }

    #[test]
    fn format_bnb_whole_unit() {
        assert_eq!(format_bnb(U256::exp10(18)), "1.000000000000000000");
    }
}
