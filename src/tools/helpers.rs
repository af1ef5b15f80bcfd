use crate::ethereum::EthereumClient;
use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    sol,
    sol_types::SolCall,
};
use anyhow::{anyhow, bail, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

sol! {
    #[allow(missing_docs)]
    function decimals() external view returns (uint8);
}

/// Parses a `0x`-prefixed, 40-hex-character address. Stricter than
/// `Address::from_str`, which also accepts unprefixed hex.
pub fn parse_address(s: &str) -> Result<Address> {
    if !s.starts_with("0x") || s.len() != 42 {
        bail!("invalid address: {}", s);
    }
    Ok(Address::from_str(s)?)
}

/// Reads the token's `decimals()` via `eth_call`.
pub async fn fetch_token_decimals(client: &EthereumClient, token: Address) -> Result<u8> {
    let call_data = decimalsCall {}.abi_encode();
    let tx_req = alloy::rpc::types::eth::TransactionRequest::default()
        .to(token)
        .input(call_data.into());
    let result = client.provider.call(&tx_req).await?;
    Ok(decimalsCall::abi_decode_returns(&result, true)?._0)
}

/// Scales a human-readable amount into integer base units. The scaling is
/// exact: a non-positive amount, an amount with more fractional digits than
/// the token supports, or an overflow is an error.
pub fn parse_token_amount(amount: Decimal, decimals: u8) -> Result<U256> {
    if amount <= Decimal::ZERO {
        bail!("amount must be positive, got {}", amount);
    }

    let scale = pow10_decimal(i32::from(decimals))?;
    let scaled = amount
        .checked_mul(scale)
        .ok_or_else(|| anyhow!("amount {} overflows at {} decimals", amount, decimals))?;

    if scaled.fract() != Decimal::ZERO {
        bail!(
            "amount {} has more fractional digits than the token's {} decimals",
            amount,
            decimals
        );
    }

    Ok(U256::from_str(&scaled.trunc().normalize().to_string())?)
}

/// Resolves the token's decimal precision on-chain and scales `amount` into
/// base units.
pub async fn fetch_token_decimals_and_parse_amount(
    client: &EthereumClient,
    token: Address,
    amount: Decimal,
) -> Result<U256> {
    let decimals = fetch_token_decimals(client, token).await?;
    parse_token_amount(amount, decimals)
}

fn pow10_decimal(exp: i32) -> Result<Decimal> {
    if exp == 0 {
        return Ok(Decimal::ONE);
    }
    if exp < 0 {
        let positive = pow10_decimal(-exp)?;
        return Ok(Decimal::ONE / positive);
    }

    let exp_usize = usize::try_from(exp).unwrap_or(0);
    let s = format!("1{}", "0".repeat(exp_usize));
    Ok(Decimal::from_str(&s)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_whole_amount_at_18_decimals() {
        let parsed = parse_token_amount(dec!(10), 18).unwrap();
        assert_eq!(parsed, U256::from_str("10000000000000000000").unwrap());
    }

    #[test]
    fn parses_fractional_amount_at_6_decimals() {
        let parsed = parse_token_amount(dec!(1.5), 6).unwrap();
        assert_eq!(parsed, U256::from(1_500_000u64));
    }

    #[test]
    fn parses_smallest_unit() {
        let parsed = parse_token_amount(dec!(0.000001), 6).unwrap();
        assert_eq!(parsed, U256::from(1u64));
    }

    #[test]
    fn zero_decimals_token() {
        let parsed = parse_token_amount(dec!(42), 0).unwrap();
        assert_eq!(parsed, U256::from(42u64));
    }

    #[test]
    fn rejects_excess_fractional_digits() {
        let err = parse_token_amount(dec!(1.2345678), 6).unwrap_err();
        assert!(err.to_string().contains("fractional digits"));
    }

    #[test]
    fn rejects_zero_and_negative_amounts() {
        assert!(parse_token_amount(dec!(0), 18).is_err());
        assert!(parse_token_amount(dec!(-3), 18).is_err());
    }

    #[test]
    fn round_trips_within_precision() {
        let amount = dec!(123.456789);
        let parsed = parse_token_amount(amount, 6).unwrap();
        let back = Decimal::from_str(&parsed.to_string()).unwrap() / dec!(1000000);
        assert_eq!(back, amount);
    }

    #[test]
    fn accepts_prefixed_addresses_only() {
        assert!(parse_address("0xFCBD14DC51f0A4d49d5E53C2E0950e0bC26d0Dce").is_ok());
        assert!(parse_address("FCBD14DC51f0A4d49d5E53C2E0950e0bC26d0Dce").is_err());
        assert!(parse_address("0x1234").is_err());
        assert!(parse_address("0xZZZZ14DC51f0A4d49d5E53C2E0950e0bC26d0Dce").is_err());
    }
}
