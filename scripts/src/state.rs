//! The accumulator threaded through the deployment steps, and the result
//! record derived from it

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{errors::ScriptError, network::Network};

/// The logical role of a contract created during the deployment
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContractRole {
    /// The timelock controller holding the governance roles
    TimelockController,
    /// The governance token implementation
    TokenImplementation,
    /// The proxy admin of the governance token
    TokenProxyAdmin,
    /// The governance token proxy
    TokenProxy,
    /// The governor implementation
    GovernorImplementation,
    /// The proxy admin of the governor
    GovernorProxyAdmin,
    /// The governor proxy
    GovernorProxy,
}

impl Display for ContractRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractRole::TimelockController => write!(f, "TimelockController"),
            ContractRole::TokenImplementation => write!(f, "KpkToken implementation"),
            ContractRole::TokenProxyAdmin => write!(f, "KpkToken ProxyAdmin"),
            ContractRole::TokenProxy => write!(f, "KpkToken proxy"),
            ContractRole::GovernorImplementation => write!(f, "KpkGovernor implementation"),
            ContractRole::GovernorProxyAdmin => write!(f, "KpkGovernor ProxyAdmin"),
            ContractRole::GovernorProxy => write!(f, "KpkGovernor proxy"),
        }
    }
}

/// The deployment progress accumulated so far
///
/// Steps take the state by value and hand back a new one; an address is only
/// ever recorded once the transaction that created it has been confirmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentState {
    /// The network being deployed to
    pub network: Network,
    /// The chain ID reported by the RPC endpoint
    pub chain_id: u64,
    /// The confirmed addresses of the contracts deployed so far
    contracts: BTreeMap<ContractRole, Address>,
}

impl DeploymentState {
    /// An empty state for a deployment to the given chain
    pub fn new(network: Network, chain_id: u64) -> Self {
        Self { network, chain_id, contracts: BTreeMap::new() }
    }

    /// Return a new state with `address` recorded for `role`
    pub fn with_contract(mut self, role: ContractRole, address: Address) -> Self {
        self.contracts.insert(role, address);
        self
    }

    /// The address recorded for `role`, if any
    pub fn get(&self, role: ContractRole) -> Option<Address> {
        self.contracts.get(&role).copied()
    }

    /// The address recorded for `role`, failing if no earlier step produced it
    pub fn require(&self, role: ContractRole) -> Result<Address, ScriptError> {
        self.get(role).ok_or(ScriptError::MissingArtifact(role))
    }

    /// The roles with a recorded address
    pub fn roles(&self) -> impl Iterator<Item = ContractRole> + '_ {
        self.contracts.keys().copied()
    }

    /// Finalize the state into the deployment result, stamped with `timestamp`
    pub fn into_result(self, timestamp: u64) -> Result<DeploymentResult, ScriptError> {
        Ok(DeploymentResult {
            network: self.network.name().to_string(),
            chain_id: self.chain_id,
            timelock_controller: self.require(ContractRole::TimelockController)?,
            kpk_token: self.require(ContractRole::TokenProxy)?,
            kpk_token_proxy_admin: self.require(ContractRole::TokenProxyAdmin)?,
            kpk_governor: self.require(ContractRole::GovernorProxy)?,
            kpk_governor_proxy_admin: self.require(ContractRole::GovernorProxyAdmin)?,
            timestamp,
        })
    }
}

/// The record written to disk once the deployment has fully succeeded
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentResult {
    /// The name of the network deployed to
    pub network: String,
    /// The chain ID of the network deployed to
    pub chain_id: u64,
    /// The timelock controller
    pub timelock_controller: Address,
    /// The governance token proxy
    pub kpk_token: Address,
    /// The governance token's proxy admin
    pub kpk_token_proxy_admin: Address,
    /// The governor proxy
    pub kpk_governor: Address,
    /// The governor's proxy admin
    pub kpk_governor_proxy_admin: Address,
    /// The time the deployment completed, in seconds since the Unix epoch
    pub timestamp: u64,
}

impl DeploymentResult {
    /// The file name the result is written to
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{}-{}-{}.json", prefix, self.network, self.timestamp)
    }

    /// The contract addresses in the result
    pub fn addresses(&self) -> [Address; 5] {
        [
            self.timelock_controller,
            self.kpk_token,
            self.kpk_token_proxy_admin,
            self.kpk_governor,
            self.kpk_governor_proxy_admin,
        ]
    }
}
