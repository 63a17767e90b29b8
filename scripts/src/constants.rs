//! Constants used in the deploy scripts

/// The number of confirmations to wait for on each contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The default directory holding compiled contract artifacts, in the Truffle layout
pub const DEFAULT_ARTIFACTS_DIR: &str = "build/contracts";

/// The extension of a compiled contract artifact file
pub const ARTIFACT_EXTENSION: &str = "json";

/// The log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// The environment variable holding the deployer's private key
pub const PRIV_KEY_ENV_VAR: &str = "DEPLOYER_PRIV_KEY";

/// The environment variable holding the network RPC URL
pub const RPC_URL_ENV_VAR: &str = "RPC_URL";

/// The environment variable holding the artifacts directory
pub const ARTIFACTS_DIR_ENV_VAR: &str = "ARTIFACTS_DIR";
