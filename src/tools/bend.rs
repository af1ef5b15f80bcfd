use super::helpers::{fetch_token_decimals_and_parse_amount, parse_address};
use super::Tool;
use crate::constants::ChainConfig;
use crate::ethereum::EthereumClient;
use alloy::{
    primitives::{Address, U256},
    sol,
    sol_types::SolCall,
};
use anyhow::{anyhow, bail, Result};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use tracing::{error, info};

// Bend pool interface (Aave V2 style).
sol! {
    #[allow(missing_docs)]
    function borrow(address asset, uint256 amount, uint256 interestRateMode, uint16 referralCode, address onBehalfOf) external;
}

/// Protocol attribution tag; Bend calls always use 0.
const REFERRAL_CODE: u16 = 0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterestRateMode {
    Stable,
    #[default]
    Variable,
}

impl InterestRateMode {
    pub fn from_code(code: u64) -> Result<Self> {
        match code {
            1 => Ok(Self::Stable),
            2 => Ok(Self::Variable),
            other => bail!(
                "invalid interestRateMode {}: expected 1 (stable) or 2 (variable)",
                other
            ),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Stable => 1,
            Self::Variable => 2,
        }
    }
}

struct BendBorrowArgs {
    asset: Address,
    amount: Decimal,
    interest_rate_mode: InterestRateMode,
}

pub struct BendBorrowTool {
    config: ChainConfig,
}

impl BendBorrowTool {
    pub fn new(config: ChainConfig) -> Self {
        Self { config }
    }

    /// Schema-level validation; rejects malformed requests before the wallet
    /// precondition check and before any network round-trip.
    fn parse_args(args: &Value) -> Result<BendBorrowArgs> {
        let asset = parse_address(
            args["asset"]
                .as_str()
                .ok_or_else(|| anyhow!("Missing asset"))?,
        )?;

        let amount = match &args["amount"] {
            Value::Number(n) => {
                let raw = n.to_string();
                Decimal::from_str(&raw)
                    .or_else(|_| Decimal::from_scientific(&raw))
                    .map_err(|e| anyhow!("invalid amount {}: {}", raw, e))?
            }
            Value::String(s) => {
                Decimal::from_str(s).map_err(|e| anyhow!("invalid amount {}: {}", s, e))?
            }
            _ => bail!("Missing amount"),
        };
        if amount <= Decimal::ZERO {
            bail!("amount must be positive, got {}", amount);
        }

        let interest_rate_mode = match args.get("interestRateMode") {
            None | Some(Value::Null) => InterestRateMode::default(),
            Some(v) => InterestRateMode::from_code(
                v.as_u64()
                    .ok_or_else(|| anyhow!("interestRateMode must be a number"))?,
            )?,
        };

        Ok(BendBorrowArgs {
            asset,
            amount,
            interest_rate_mode,
        })
    }

    async fn execute(&self, client: &EthereumClient, args: &Value) -> Result<Value> {
        let args = Self::parse_args(args)?;

        // Wallet precondition before any network interaction.
        let signer = client.signer()?;
        let on_behalf_of = signer.address;

        let parsed_amount =
            fetch_token_decimals_and_parse_amount(client, args.asset, args.amount).await?;

        let call_data = borrowCall {
            asset: args.asset,
            amount: parsed_amount,
            interestRateMode: U256::from(args.interest_rate_mode.code()),
            referralCode: REFERRAL_CODE,
            onBehalfOf: on_behalf_of,
        }
        .abi_encode();

        let bend = self
            .config
            .contract("Bend")
            .ok_or_else(|| anyhow!("Bend contract address is not configured"))?;

        let hash = client.send_contract_transaction(bend, call_data).await?;

        info!(
            "Successfully borrowed tokens from Bend. Transaction hash: {}",
            hash
        );

        Ok(json!({
            "transaction_hash": hash.to_string(),
            "asset": args.asset.to_string(),
            "parsed_amount": parsed_amount.to_string(),
            "interest_rate_mode": args.interest_rate_mode.code(),
            "on_behalf_of": on_behalf_of.to_string()
        }))
    }
}

#[async_trait::async_trait]
impl Tool for BendBorrowTool {
    fn name(&self) -> &'static str {
        "bend_borrow"
    }

    fn description(&self) -> &'static str {
        "Borrow tokens from Bend Protocol"
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "asset": {
                    "type": "string",
                    "pattern": "^0x[a-fA-F0-9]{40}$",
                    "description": "Token address to borrow"
                },
                "amount": {
                    "type": "number",
                    "description": "The amount of tokens to borrow"
                },
                "interestRateMode": {
                    "type": "number",
                    "enum": [1, 2],
                    "description": "Interest rate mode (1 for stable, 2 for variable)",
                    "default": 2
                }
            },
            "required": ["asset", "amount"]
        })
    }

    async fn call(&self, client: &EthereumClient, args: Value) -> Result<Value> {
        match self.execute(client, &args).await {
            Ok(result) => Ok(result),
            Err(e) => {
                error!("Bend borrow failed: {}", e);
                Err(e)
            }
        }
    }
}
