use alloy::{
    network::EthereumWallet,
    primitives::{Address, TxHash},
    providers::{Provider, ProviderBuilder},
    rpc::types::eth::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use anyhow::Result;
use std::str::FromStr;
use tracing::debug;
use url::Url;

/// A wallet bound to one account, able to sign and submit transactions.
#[derive(Clone, Debug)]
pub struct Signer {
    pub wallet: EthereumWallet,
    pub address: Address,
}

#[derive(Clone)]
pub struct EthereumClient {
    pub provider: alloy::providers::RootProvider<
        alloy::transports::http::Http<alloy::transports::http::Client>,
    >,
    rpc_url: Url,
    signer: Option<Signer>,
}

impl EthereumClient {
    /// Without a private key the client is read-only: `eth_call` lookups work,
    /// write tools fail their wallet precondition.
    pub async fn new(rpc_url: &str, private_key: Option<&str>) -> Result<Self> {
        let signer = match private_key {
            Some(key) => {
                let signer = PrivateKeySigner::from_str(key)?;
                let address = signer.address();
                Some(Signer {
                    wallet: EthereumWallet::from(signer),
                    address,
                })
            }
            None => None,
        };

        let url = Url::parse(rpc_url)?;
        let provider = ProviderBuilder::new().on_http(url.clone());

        Ok(Self {
            provider,
            rpc_url: url,
            signer,
        })
    }

    pub fn signer(&self) -> Result<&Signer> {
        self.signer
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("wallet client is not provided"))
    }

    /// Submits `call_data` as a signed write transaction to `to` and returns
    /// the transaction hash without waiting for a receipt. Nonce, gas and
    /// chain-id fill are delegated to the provider fillers.
    pub async fn send_contract_transaction(
        &self,
        to: Address,
        call_data: Vec<u8>,
    ) -> Result<TxHash> {
        let signer = self.signer()?;

        debug!(
            "Sending contract transaction to {} with calldata 0x{}",
            to,
            hex::encode(&call_data)
        );

        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(signer.wallet.clone())
            .on_http(self.rpc_url.clone());

        let tx = TransactionRequest::default()
            .from(signer.address)
            .to(to)
            .input(call_data.into());

        let pending = provider.send_transaction(tx).await?;
        Ok(*pending.tx_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known Anvil/Hardhat development key, never funded on a live network.
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[tokio::test]
    async fn read_only_client_has_no_signer() {
        let client = EthereumClient::new("http://localhost:8545", None)
            .await
            .unwrap();
        let err = client.signer().unwrap_err();
        assert!(err.to_string().contains("wallet client is not provided"));
    }

    #[tokio::test]
    async fn signing_client_binds_the_key_address() {
        let client = EthereumClient::new("http://localhost:8545", Some(DEV_KEY))
            .await
            .unwrap();
        let signer = client.signer().unwrap();
        assert_eq!(signer.address, Address::from_str(DEV_ADDRESS).unwrap());
    }

    #[tokio::test]
    async fn invalid_private_key_is_rejected() {
        let result = EthereumClient::new("http://localhost:8545", Some("not-a-key")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn invalid_rpc_url_is_rejected() {
        let result = EthereumClient::new("not a url", None).await;
        assert!(result.is_err());
    }
}
