//! Bootstrap deployment of the kpk governance token, governor and timelock
//! controller, and of the Gnosis DAO vesting plans.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod artifacts;
pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod errors;
pub mod network;
pub mod orchestrator;
mod solidity;
pub mod state;
pub mod steps;
pub mod utils;
pub mod vesting;

#[cfg(test)]
mod test_utils;
