//! Resolution of the operator configuration: credentials, endpoint, and the
//! destination addresses of the deployment

use std::{env, str::FromStr, time::Duration};

use alloy::{signers::local::PrivateKeySigner, transports::http::reqwest::Url};
use alloy_primitives::Address;

use crate::{cli::Cli, constants::PRIVATE_KEY_ENV_VAR, errors::ScriptError, network::Network};

/// The validated configuration of a deployment run
pub struct DeployConfig {
    /// The network to deploy to
    pub network: Network,
    /// The deployer's signing key
    pub signer: PrivateKeySigner,
    /// The RPC endpoint of the network
    pub rpc_url: Url,
    /// The recipient of the vesting plans
    pub vesting_recipient: Address,
    /// The final holder of the token and the controller's admin role
    pub final_holder: Address,
    /// How long to wait for each transaction to be confirmed
    pub confirmation_timeout: Duration,
}

impl DeployConfig {
    /// Resolve the configuration from the CLI, falling back to the network's
    /// RPC environment variable when no URL is given
    pub fn resolve(cli: &Cli) -> Result<Self, ScriptError> {
        Self::resolve_with(cli, |var| env::var(var).ok())
    }

    /// Resolve the configuration, looking up environment variables with `lookup`
    pub fn resolve_with(
        cli: &Cli,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ScriptError> {
        let network = cli.network;

        let priv_key = cli.priv_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            ScriptError::Configuration(format!(
                "no deployer key, pass --priv-key or set {}",
                PRIVATE_KEY_ENV_VAR
            ))
        })?;
        // The key itself never ends up in an error message
        let signer = PrivateKeySigner::from_str(priv_key)
            .map_err(|_| ScriptError::Configuration("invalid deployer key".to_string()))?;

        let rpc_url = cli
            .rpc_url
            .clone()
            .or_else(|| lookup(network.rpc_env_var()))
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                ScriptError::Configuration(format!(
                    "no RPC URL for {}, pass --rpc-url or set {}",
                    network,
                    network.rpc_env_var()
                ))
            })?;
        let rpc_url = Url::parse(&rpc_url)
            .map_err(|e| ScriptError::Configuration(format!("invalid RPC URL: {}", e)))?;

        Ok(Self {
            network,
            signer,
            rpc_url,
            vesting_recipient: parse_address("vesting recipient", &cli.vesting_recipient)?,
            final_holder: parse_address("final holder", &cli.final_holder)?,
            confirmation_timeout: Duration::from_secs(cli.confirmation_timeout_secs),
        })
    }
}

/// Parse a non-zero address given on the command line
fn parse_address(name: &str, value: &str) -> Result<Address, ScriptError> {
    let address = Address::from_str(value)
        .map_err(|e| ScriptError::Configuration(format!("invalid {}: {}", name, e)))?;
    if address.is_zero() {
        return Err(ScriptError::Configuration(format!("{} is the zero address", name)));
    }

    Ok(address)
}
