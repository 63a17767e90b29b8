//! Type definitions used throughout the scripts

use std::fmt::{self, Display};

use alloy::{dyn_abi::DynSolValue, primitives::Address};

use crate::errors::ScriptError;

/// The contracts deployed by the scripts
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeployableContract {
    /// The ERC20 token contract
    MyToken,
    /// The staking contract, parameterized by the token address
    Staking,
    /// The raffle auction contract, parameterized by the staking address
    RaffleAuction,
}

impl Display for DeployableContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployableContract::MyToken => write!(f, "MyToken"),
            DeployableContract::Staking => write!(f, "Staking"),
            DeployableContract::RaffleAuction => write!(f, "RaffleAuction"),
        }
    }
}

/// A single constructor argument of a deployment step
#[derive(Clone, Debug, PartialEq)]
pub enum ConstructorArg {
    /// The address of a contract deployed in an earlier step
    AddressOf(DeployableContract),
    /// A literal ABI value
    Value(DynSolValue),
}

impl Display for ConstructorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructorArg::AddressOf(contract) => write!(f, "address of {}", contract),
            ConstructorArg::Value(value) => write!(f, "{:?}", value),
        }
    }
}

/// A contract to deploy, along with the arguments to pass to its constructor
#[derive(Clone, Debug, PartialEq)]
pub struct DeploymentStep {
    /// The contract to deploy
    pub contract: DeployableContract,
    /// The ordered constructor arguments
    pub constructor_args: Vec<ConstructorArg>,
}

impl DeploymentStep {
    /// Create a step for a contract whose constructor takes no arguments
    pub fn new(contract: DeployableContract) -> Self {
        Self {
            contract,
            constructor_args: Vec::new(),
        }
    }

    /// Append the address of an earlier deployment to the constructor arguments
    pub fn with_address_of(mut self, dependency: DeployableContract) -> Self {
        self.constructor_args
            .push(ConstructorArg::AddressOf(dependency));
        self
    }

    /// Append a literal value to the constructor arguments
    pub fn with_value(mut self, value: DynSolValue) -> Self {
        self.constructor_args.push(ConstructorArg::Value(value));
        self
    }

    /// The contracts whose addresses this step's constructor needs
    pub fn dependencies(&self) -> impl Iterator<Item = DeployableContract> + '_ {
        self.constructor_args.iter().filter_map(|arg| match arg {
            ConstructorArg::AddressOf(contract) => Some(*contract),
            ConstructorArg::Value(_) => None,
        })
    }

    /// Resolve the constructor arguments against the contracts deployed so far.
    ///
    /// Addresses are passed through exactly as the deployer reported them.
    pub fn resolve_args(
        &self,
        deployed: &[DeployedContract],
    ) -> Result<Vec<DynSolValue>, ScriptError> {
        self.constructor_args
            .iter()
            .map(|arg| match arg {
                ConstructorArg::AddressOf(dependency) => deployed
                    .iter()
                    .find(|d| d.contract == *dependency)
                    .map(|d| DynSolValue::Address(d.address))
                    .ok_or_else(|| {
                        ScriptError::InvalidPlan(format!(
                            "{} depends on {}, which has not been deployed",
                            self.contract, dependency
                        ))
                    }),
                ConstructorArg::Value(value) => Ok(value.clone()),
            })
            .collect()
    }
}

/// A contract that has been deployed and confirmed on-chain
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DeployedContract {
    /// The contract that was deployed
    pub contract: DeployableContract,
    /// The address at which it was deployed
    pub address: Address,
}
