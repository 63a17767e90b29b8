//! Resolution of compiled contract artifacts.
//!
//! Artifacts are JSON files named after the contract, holding at least the
//! contract's `abi` and creation `bytecode`. Both the Truffle/Hardhat layout
//! (`"bytecode": "0x..."`) and the Foundry layout
//! (`"bytecode": { "object": "0x..." }`) are accepted.

use std::{fs, path::PathBuf};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt},
    json_abi::JsonAbi,
    primitives::Bytes,
};
use serde::Deserialize;

use crate::{constants::ARTIFACT_EXTENSION, errors::ScriptError, types::DeployableContract};

/// The subset of an artifact file needed for deployment
#[derive(Deserialize)]
struct RawArtifact {
    /// The contract ABI
    abi: JsonAbi,
    /// The creation bytecode, in one of the supported layouts
    bytecode: RawBytecode,
}

/// The creation bytecode as it appears in the different artifact layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    /// A bare hex string
    Hex(Bytes),
    /// An object wrapping the hex string
    Object {
        /// The hex-encoded bytecode
        object: Bytes,
    },
}

impl From<RawBytecode> for Bytes {
    fn from(raw: RawBytecode) -> Self {
        match raw {
            RawBytecode::Hex(bytes) | RawBytecode::Object { object: bytes } => bytes,
        }
    }
}

/// A compiled contract, ready to be deployed
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    /// The contract ABI
    pub abi: JsonAbi,
    /// The contract creation bytecode
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        let RawArtifact { abi, bytecode } =
            serde_json::from_str(json).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        let bytecode = Bytes::from(bytecode);
        if bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(
                "artifact has no creation bytecode, is the contract abstract?".to_string(),
            ));
        }

        Ok(Self { abi, bytecode })
    }

    /// The creation bytecode followed by the ABI-encoded constructor arguments
    pub fn deploy_code(&self, args: &[DynSolValue]) -> Result<Bytes, ScriptError> {
        let encoded_args = match self.abi.constructor() {
            Some(constructor) => constructor
                .abi_encode_input(args)
                .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?,
            None if args.is_empty() => Vec::new(),
            None => {
                return Err(ScriptError::CalldataConstruction(format!(
                    "contract has no constructor, but {} arguments were given",
                    args.len()
                )))
            }
        };

        Ok([&self.bytecode[..], encoded_args.as_slice()]
            .concat()
            .into())
    }
}

/// A directory of compiled contract artifacts
#[derive(Clone, Debug)]
pub struct ArtifactRegistry {
    /// The directory containing the artifact files
    dir: PathBuf,
}

impl ArtifactRegistry {
    /// Create a registry over the given artifacts directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The path of the artifact file for the given contract
    pub fn artifact_path(&self, contract: DeployableContract) -> PathBuf {
        self.dir
            .join(contract.to_string())
            .with_extension(ARTIFACT_EXTENSION)
    }

    /// Read and parse the artifact for the given contract
    pub fn resolve(&self, contract: DeployableContract) -> Result<ContractArtifact, ScriptError> {
        let path = self.artifact_path(contract);
        let json = fs::read_to_string(&path).map_err(|e| {
            ScriptError::ArtifactResolution(format!("{} ({}): {}", contract, path.display(), e))
        })?;

        ContractArtifact::from_json(&json)
    }
}
