use anyhow::Context;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub rpc_url: String,
    /// Absent key means a read-only client; write tools fail their wallet
    /// precondition instead of the whole process refusing to start.
    pub private_key: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let rpc_url = env::var("BERACHAIN_RPC_URL").context("BERACHAIN_RPC_URL must be set")?;
        let private_key = env::var("PRIVATE_KEY").ok();

        Ok(Self {
            rpc_url,
            private_key,
        })
    }
}
