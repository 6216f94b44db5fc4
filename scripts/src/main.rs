use std::process;

use clap::Parser;
use kpk_deploy::{
    artifacts::Artifacts,
    cli::Cli,
    client::RpcChainClient,
    config::DeployConfig,
    errors::ScriptError,
    orchestrator::run,
    steps::{DeployContext, DEPLOYMENT_PLAN},
    utils::write_deployment_result,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    if cli.print_plan {
        for (i, step) in DEPLOYMENT_PLAN.iter().enumerate() {
            println!("{:>2}. [{:?}] {}", i + 1, step.kind(), step);
        }
        return;
    }

    if let Err(e) = deploy(cli).await {
        error!("deployment failed: {}", e);
        process::exit(1);
    }
}

/// Resolve the configuration, run the deployment and write its result
async fn deploy(cli: Cli) -> Result<(), ScriptError> {
    let config = DeployConfig::resolve(&cli)?;
    let artifacts = Artifacts::load(&cli.artifacts_dir)?;

    let client =
        RpcChainClient::new(config.signer, config.rpc_url, config.confirmation_timeout);
    let ctx = DeployContext {
        network: config.network,
        vesting_recipient: config.vesting_recipient,
        final_holder: config.final_holder,
        artifacts,
    };

    let result = run(&client, &ctx).await?;
    let path = write_deployment_result(&cli.output_dir, &result)?;
    info!("deployment written to {}", path.display());

    Ok(())
}
