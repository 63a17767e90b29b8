//! Utilities for the deploy scripts.

use std::str::FromStr;

use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use tracing::debug;

use crate::errors::ScriptError;

/// Sets up the signing client used to send deployment transactions,
/// checking that the network is reachable
pub async fn setup_client(priv_key: &str, rpc_url: &str) -> Result<DynProvider, ScriptError> {
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let deployer_address = signer.address();
    let provider = ProviderBuilder::new()
        .wallet(signer)
        .with_simple_nonce_management()
        .connect_http(url);

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    debug!("Deploying from {:#x} on chain {}", deployer_address, chain_id);

    Ok(DynProvider::new(provider))
}
