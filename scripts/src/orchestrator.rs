//! The driver running the deployment plan against a chain client

use tracing::info;

use crate::{
    client::ChainClient,
    errors::ScriptError,
    state::{DeploymentResult, DeploymentState},
    steps::{DeployContext, Step, DEPLOYMENT_PLAN},
    utils::unix_timestamp,
};

/// Run every step of the deployment plan in order, returning the addresses of
/// the deployed contracts.
///
/// Nothing is submitted if the endpoint serves a different chain than the
/// selected network. The first failing step aborts the run; steps before it
/// stay committed on chain.
pub async fn run<C: ChainClient>(
    client: &C,
    ctx: &DeployContext,
) -> Result<DeploymentResult, ScriptError> {
    run_plan(client, ctx, &DEPLOYMENT_PLAN).await
}

/// Run `plan` in order against a fresh state.
///
/// A step runs only once every contract it consumes has been recorded by an
/// earlier step, and waits for its own confirmation depth on each transaction.
pub async fn run_plan<C: ChainClient>(
    client: &C,
    ctx: &DeployContext,
    plan: &[Step],
) -> Result<DeploymentResult, ScriptError> {
    let expected = ctx.network.chain_id();
    let actual = client.chain_id().await?;
    if actual != expected {
        return Err(ScriptError::ChainMismatch { expected, actual });
    }

    info!("deploying to {} (chain {}) from {:#x}", ctx.network.name(), actual, client.deployer());

    let mut state = DeploymentState::new(ctx.network, actual);
    for (i, step) in plan.iter().enumerate() {
        info!("[{}/{}] {} ({} confirmations)", i + 1, plan.len(), step, step.confirmations());
        state = step
            .execute(state, client, ctx)
            .await
            .map_err(|e| e.in_step(step.description()))?;
    }

    info!("{} contracts deployed", state.roles().count());
    state.into_result(unix_timestamp()?)
}
