//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error locating or reading a compiled contract artifact
    ArtifactResolution(String),
    /// Error parsing a Solidity compilation artifact
    ArtifactParsing(String),
    /// Error constructing calldata for a contract constructor
    CalldataConstruction(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// A deployment plan references a contract that is not deployed before it
    InvalidPlan(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ArtifactResolution(s) => write!(f, "error resolving artifact: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::InvalidPlan(s) => write!(f, "invalid deployment plan: {}", s),
        }
    }
}

impl Error for ScriptError {}
