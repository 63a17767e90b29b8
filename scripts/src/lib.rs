//! Scripts for deploying the MyToken, Staking & RaffleAuction contracts.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod artifacts;
pub mod cli;
mod commands;
pub mod constants;
pub mod deployer;
pub mod errors;
pub mod plan;
pub mod sequencer;
pub mod types;
pub mod utils;
