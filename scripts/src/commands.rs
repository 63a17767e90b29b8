//! Implementations of the deploy script commands

use std::path::Path;

use itertools::Itertools;
use tracing::info;

use crate::{
    artifacts::ArtifactRegistry,
    cli::DeployArgs,
    deployer::AlloyDeployer,
    errors::ScriptError,
    plan::{deployment_plan, validate_plan},
    sequencer::run_deployment,
    utils::setup_client,
};

/// Deploy the MyToken, Staking & RaffleAuction contracts, in that order
pub async fn deploy(args: DeployArgs, artifacts_dir: &Path) -> Result<(), ScriptError> {
    let client = setup_client(&args.priv_key, &args.rpc_url).await?;
    let deployer = AlloyDeployer::new(
        client,
        ArtifactRegistry::new(artifacts_dir),
        args.confirmations,
    );

    let deployed = run_deployment(&deployer, &deployment_plan()).await?;
    info!("Deployed {} contracts", deployed.len());

    Ok(())
}

/// Resolve every artifact in the deployment plan and print the plan,
/// without sending any transactions
pub fn plan(artifacts_dir: &Path) -> Result<(), ScriptError> {
    let plan = deployment_plan();
    validate_plan(&plan)?;

    let registry = ArtifactRegistry::new(artifacts_dir);
    for (i, step) in plan.iter().enumerate() {
        let artifact = registry.resolve(step.contract)?;
        info!(
            "Step {}: {} ({} bytes of creation code), constructor args: [{}]",
            i + 1,
            step.contract,
            artifact.bytecode.len(),
            step.constructor_args.iter().join(", ")
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::types::DeployableContract;

    /// An artifact for a contract without a constructor
    const TOKEN_ARTIFACT: &str = r#"{ "abi": [], "bytecode": "0x6080604052" }"#;

    /// An artifact whose constructor takes a single address
    const ADDRESS_CTOR_ARTIFACT: &str = r#"{
        "abi": [
            {
                "type": "constructor",
                "inputs": [{ "name": "dependency", "type": "address" }],
                "stateMutability": "nonpayable"
            }
        ],
        "bytecode": "0x60806040"
    }"#;

    /// Write artifacts for the given contracts into a fresh directory
    fn artifacts_dir(contracts: &[DeployableContract]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for contract in contracts {
            let json = match contract {
                DeployableContract::MyToken => TOKEN_ARTIFACT,
                DeployableContract::Staking | DeployableContract::RaffleAuction => {
                    ADDRESS_CTOR_ARTIFACT
                }
            };
            fs::write(dir.path().join(format!("{}.json", contract)), json).unwrap();
        }

        dir
    }

    #[test]
    fn test_plan_resolves_all_artifacts() {
        let dir = artifacts_dir(&[
            DeployableContract::MyToken,
            DeployableContract::Staking,
            DeployableContract::RaffleAuction,
        ]);

        plan(dir.path()).unwrap();
    }

    #[test]
    fn test_plan_missing_artifact() {
        let dir = artifacts_dir(&[DeployableContract::MyToken, DeployableContract::Staking]);

        assert!(matches!(
            plan(dir.path()),
            Err(ScriptError::ArtifactResolution(_))
        ));
    }

    #[test]
    fn test_plan_malformed_artifact() {
        let dir = artifacts_dir(&[DeployableContract::MyToken, DeployableContract::Staking]);
        fs::write(dir.path().join("RaffleAuction.json"), "{}").unwrap();

        assert!(matches!(
            plan(dir.path()),
            Err(ScriptError::ArtifactParsing(_))
        ));
    }
}
