//! The networks the bootstrap deployment supports, and the collaborator
//! contracts that live on each of them

use std::fmt::{self, Display};

use alloy_primitives::Address;
use clap::ValueEnum;

use crate::constants::{
    BATCH_PLANNER, BATCH_PLANNER_SEPOLIA, MAINNET_RPC_ENV_VAR, SEPOLIA_RPC_ENV_VAR,
    TOKEN_VESTING_PLANS, TOKEN_VESTING_PLANS_SEPOLIA,
};

/// A network the contracts can be deployed to
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Network {
    /// Ethereum mainnet
    Mainnet,
    /// The Sepolia testnet
    Sepolia,
}

impl Network {
    /// The chain ID of the network
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Sepolia => 11_155_111,
        }
    }

    /// The display name of the network, used in the deployment result
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Ethereum",
            Network::Sepolia => "Sepolia",
        }
    }

    /// The environment variable holding the network's RPC URL
    pub fn rpc_env_var(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_RPC_ENV_VAR,
            Network::Sepolia => SEPOLIA_RPC_ENV_VAR,
        }
    }

    /// The token vesting plans registry deployed on the network
    pub fn vesting_plans_address(&self) -> Address {
        match self {
            Network::Mainnet => TOKEN_VESTING_PLANS,
            Network::Sepolia => TOKEN_VESTING_PLANS_SEPOLIA,
        }
    }

    /// The batch planner deployed on the network
    pub fn batch_planner_address(&self) -> Address {
        match self {
            Network::Mainnet => BATCH_PLANNER,
            Network::Sepolia => BATCH_PLANNER_SEPOLIA,
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Sepolia => write!(f, "sepolia"),
        }
    }
}
