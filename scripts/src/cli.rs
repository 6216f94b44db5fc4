//! Definitions of CLI arguments for the deploy script

use std::path::PathBuf;

use clap::Parser;

use crate::{
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_CONFIRMATION_TIMEOUT_SECS, GNOSIS_DAO_TREASURY_SAFE,
        KPK_TREASURY_SAFE, PRIVATE_KEY_ENV_VAR,
    },
    network::Network,
};

/// Deploy the kpk governance token, governor and timelock controller, and set
/// up the Gnosis DAO vesting plans
#[derive(Parser)]
#[command(name = "kpk-deploy")]
pub struct Cli {
    /// The network to deploy to
    #[arg(value_enum)]
    pub network: Network,

    /// Private key of the deployer
    #[arg(long, env = PRIVATE_KEY_ENV_VAR, hide_env_values = true)]
    pub priv_key: Option<String>,

    /// Network RPC URL, read from `MAINNET_RPC` / `SEPOLIA_RPC` if omitted
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// Recipient of the vesting plans
    #[arg(long, default_value = GNOSIS_DAO_TREASURY_SAFE)]
    pub vesting_recipient: String,

    /// Final holder of the token, its ownership, and the controller's admin role
    #[arg(long, default_value = KPK_TREASURY_SAFE)]
    pub final_holder: String,

    /// Directory holding the `forge build` output
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// Directory the deployment result is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Seconds to wait for each transaction to be confirmed
    #[arg(long, default_value_t = DEFAULT_CONFIRMATION_TIMEOUT_SECS)]
    pub confirmation_timeout_secs: u64,

    /// Print the deployment steps and exit without touching the chain
    #[arg(long)]
    pub print_plan: bool,
}
