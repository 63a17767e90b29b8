//! Sequential execution of a deployment plan.
//!
//! Steps run strictly one after another: a step is only issued once every
//! earlier step has a confirmed address, and the first failure aborts the
//! remainder of the plan. Contracts deployed before a failure stay on-chain.

use tracing::{debug, info, warn};

use crate::{
    deployer::Deployer,
    errors::ScriptError,
    plan::validate_plan,
    types::{DeployedContract, DeploymentStep},
};

/// The state of a deployment run, indexed by plan step
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SequencerState {
    /// The step's deployment has been requested and is awaiting confirmation
    Pending(usize),
    /// The step's deployment has been confirmed
    Deployed(usize),
    /// Every step has been deployed
    Done,
    /// The step failed, and no later steps were issued
    Aborted(usize),
}

/// Runs a deployment plan against a [`Deployer`]
pub struct DeploymentSequencer<'a, D> {
    /// The deployment capability
    deployer: &'a D,
    /// The current state of the run
    state: SequencerState,
}

impl<'a, D: Deployer> DeploymentSequencer<'a, D> {
    /// Create a sequencer over the given deployer
    pub fn new(deployer: &'a D) -> Self {
        Self {
            deployer,
            state: SequencerState::Pending(0),
        }
    }

    /// The current state of the run
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Deploy every step of the plan in order, threading the addresses of
    /// earlier deployments into the constructor arguments of later ones.
    ///
    /// Returns the deployed contracts in plan order.
    pub async fn run(
        &mut self,
        plan: &[DeploymentStep],
    ) -> Result<Vec<DeployedContract>, ScriptError> {
        if let Err(e) = validate_plan(plan) {
            self.transition(SequencerState::Aborted(0));
            return Err(e);
        }

        let mut deployed = Vec::with_capacity(plan.len());
        for (i, step) in plan.iter().enumerate() {
            self.transition(SequencerState::Pending(i));

            let deployment = match step.resolve_args(&deployed) {
                Ok(args) => self.deployer.deploy(step.contract, &args).await,
                Err(e) => Err(e),
            };

            let address = match deployment {
                Ok(address) => address,
                Err(e) => {
                    self.transition(SequencerState::Aborted(i));
                    warn!(
                        "Deployment of {} failed, skipping {} remaining step(s)",
                        step.contract,
                        plan.len() - i - 1
                    );
                    return Err(e);
                }
            };

            info!("{} address: {:#x}", step.contract, address);
            deployed.push(DeployedContract {
                contract: step.contract,
                address,
            });
            self.transition(SequencerState::Deployed(i));
        }

        self.transition(SequencerState::Done);
        Ok(deployed)
    }

    /// Move to the given state
    fn transition(&mut self, state: SequencerState) {
        debug!("{:?} -> {:?}", self.state, state);
        self.state = state;
    }
}

/// Deploy every step of the plan in order, see [`DeploymentSequencer::run`]
pub async fn run_deployment<D: Deployer>(
    deployer: &D,
    plan: &[DeploymentStep],
) -> Result<Vec<DeployedContract>, ScriptError> {
    DeploymentSequencer::new(deployer).run(plan).await
}
