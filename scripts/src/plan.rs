//! The fixed deployment plan and its validation

use std::collections::HashSet;

use crate::{
    errors::ScriptError,
    types::{DeployableContract, DeploymentStep},
};

/// The deployment plan: the token, then the staking contract over the token,
/// then the raffle auction over the staking contract.
///
/// Each constructor may only reference addresses from earlier steps, since
/// constructor parameters cannot be updated after deployment.
pub fn deployment_plan() -> [DeploymentStep; 3] {
    [
        DeploymentStep::new(DeployableContract::MyToken),
        DeploymentStep::new(DeployableContract::Staking)
            .with_address_of(DeployableContract::MyToken),
        DeploymentStep::new(DeployableContract::RaffleAuction)
            .with_address_of(DeployableContract::Staking),
    ]
}

/// Check that every step only depends on contracts deployed strictly before it,
/// and that no contract is deployed twice
pub fn validate_plan(plan: &[DeploymentStep]) -> Result<(), ScriptError> {
    let mut deployed = HashSet::new();
    for step in plan {
        if let Some(dependency) = step.dependencies().find(|dep| !deployed.contains(dep)) {
            return Err(ScriptError::InvalidPlan(format!(
                "{} depends on {}, which is not deployed before it",
                step.contract, dependency
            )));
        }

        if !deployed.insert(step.contract) {
            return Err(ScriptError::InvalidPlan(format!(
                "{} is deployed more than once",
                step.contract
            )));
        }
    }

    Ok(())
}
