//! Definitions of CLI arguments and commands for deploy scripts

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy, plan},
    constants::{
        ARTIFACTS_DIR_ENV_VAR, DEFAULT_ARTIFACTS_DIR, NUM_DEPLOY_CONFIRMATIONS, PRIV_KEY_ENV_VAR,
        RPC_URL_ENV_VAR,
    },
    errors::ScriptError,
};

/// Deploys the MyToken, Staking & RaffleAuction contracts
#[derive(Parser)]
pub struct Cli {
    /// Directory containing the compiled contract artifacts
    #[arg(long, env = ARTIFACTS_DIR_ENV_VAR, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The available commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy all contracts, threading each address into the next constructor
    Deploy(DeployArgs),
    /// Resolve the artifacts and print the deployment plan without deploying
    Plan,
}

impl Command {
    /// Run the command
    pub async fn run(self, artifacts_dir: &Path) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy(args, artifacts_dir).await,
            Command::Plan => plan(artifacts_dir),
        }
    }
}

/// Arguments for the `deploy` command
#[derive(Args)]
pub struct DeployArgs {
    /// Private key of the deployer
    #[arg(short, long, env = PRIV_KEY_ENV_VAR, hide_env_values = true)]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = RPC_URL_ENV_VAR)]
    pub rpc_url: String,

    /// Number of confirmations to wait for on each deployment
    #[arg(short, long, default_value_t = NUM_DEPLOY_CONFIRMATIONS)]
    pub confirmations: u64,
}
