//! The deployment capability consumed by the sequencer, and its RPC-backed implementation

use std::future::Future;

use alloy::{
    dyn_abi::DynSolValue,
    network::TransactionBuilder,
    primitives::Address,
    providers::{DynProvider, Provider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use tracing::debug;

use crate::{artifacts::ArtifactRegistry, errors::ScriptError, types::DeployableContract};

/// Something that can publish a compiled contract and report where it landed
pub trait Deployer {
    /// Deploy the given contract with the given constructor arguments, resolving
    /// once the deployment is confirmed
    fn deploy(
        &self,
        contract: DeployableContract,
        args: &[DynSolValue],
    ) -> impl Future<Output = Result<Address, ScriptError>> + Send;
}

/// A [`Deployer`] that sends creation transactions through an RPC provider,
/// reading bytecode from an [`ArtifactRegistry`]
#[derive(Clone)]
pub struct AlloyDeployer {
    /// The signing client
    client: DynProvider,
    /// The registry of compiled artifacts
    registry: ArtifactRegistry,
    /// The number of confirmations to wait for on each deployment
    confirmations: u64,
}

impl AlloyDeployer {
    /// Create a new deployer
    pub fn new(client: DynProvider, registry: ArtifactRegistry, confirmations: u64) -> Self {
        Self {
            client,
            registry,
            confirmations,
        }
    }
}

impl Deployer for AlloyDeployer {
    async fn deploy(
        &self,
        contract: DeployableContract,
        args: &[DynSolValue],
    ) -> Result<Address, ScriptError> {
        let artifact = self.registry.resolve(contract)?;
        let tx = TransactionRequest::default().with_deploy_code(artifact.deploy_code(args)?);

        debug!("Submitting {} deployment transaction...", contract);
        let pending_tx = self
            .client
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        debug!(
            "Awaiting {} confirmation(s) of {:#x}...",
            self.confirmations,
            pending_tx.tx_hash()
        );
        let receipt = pending_tx
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        deployed_address(contract, &receipt)
    }
}

/// The address of the contract created by a deployment, given its receipt
fn deployed_address(
    contract: DeployableContract,
    receipt: &TransactionReceipt,
) -> Result<Address, ScriptError> {
    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(format!(
            "{} deployment transaction {:#x} reverted",
            contract, receipt.transaction_hash
        )));
    }

    receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment(format!(
            "receipt for {} deployment has no contract address",
            contract
        ))
    })
}
