//! Steps wiring the governor into the timelock controller and handing the
//! controller's admin role to the final holder

use alloy_primitives::{Address, B256};
use tracing::info;

use super::DeployContext;
use crate::{
    client::{read_call, send_call, ChainClient, Receipt},
    errors::ScriptError,
    solidity::ITimelockController,
    state::{ContractRole, DeploymentState},
};

/// Grant the controller's proposer role to the governor
pub async fn grant_proposer_role<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let timelock = state.require(ContractRole::TimelockController)?;
    let governor = state.require(ContractRole::GovernorProxy)?;

    let role = read_call(client, timelock, &ITimelockController::PROPOSER_ROLECall {}).await?;
    let receipt = grant_role(client, timelock, role, governor, confirmations).await?;
    info!("PROPOSER_ROLE granted to governor {:#x} (tx {:#x})", governor, receipt.tx_hash);

    Ok(state)
}

/// Grant the controller's canceller role to the governor
pub async fn grant_canceller_role<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let timelock = state.require(ContractRole::TimelockController)?;
    let governor = state.require(ContractRole::GovernorProxy)?;

    let role = read_call(client, timelock, &ITimelockController::CANCELLER_ROLECall {}).await?;
    let receipt = grant_role(client, timelock, role, governor, confirmations).await?;
    info!("CANCELLER_ROLE granted to governor {:#x} (tx {:#x})", governor, receipt.tx_hash);

    Ok(state)
}

/// Grant the controller's admin role to the final holder
pub async fn grant_admin_role<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    ctx: &DeployContext,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let timelock = state.require(ContractRole::TimelockController)?;

    let role = admin_role(client, timelock).await?;
    let receipt = grant_role(client, timelock, role, ctx.final_holder, confirmations).await?;
    info!("DEFAULT_ADMIN_ROLE granted to {:#x} (tx {:#x})", ctx.final_holder, receipt.tx_hash);

    Ok(state)
}

/// Renounce the deployer's admin role on the controller.
///
/// Refuses to renounce unless the controller reports the final holder as an
/// admin, so the controller can never be left without one.
pub async fn renounce_admin_role<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    ctx: &DeployContext,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let timelock = state.require(ContractRole::TimelockController)?;
    let role = admin_role(client, timelock).await?;

    let holder_is_admin = read_call(
        client,
        timelock,
        &ITimelockController::hasRoleCall { role, account: ctx.final_holder },
    )
    .await?;
    if !holder_is_admin {
        return Err(ScriptError::ContractInteraction(format!(
            "{:#x} does not hold DEFAULT_ADMIN_ROLE, refusing to renounce",
            ctx.final_holder
        )));
    }

    let deployer = client.deployer();
    let call = ITimelockController::renounceRoleCall { role, callerConfirmation: deployer };
    let receipt = send_call(client, timelock, &call, confirmations).await?;
    info!("DEFAULT_ADMIN_ROLE renounced by deployer {:#x} (tx {:#x})", deployer, receipt.tx_hash);

    Ok(state)
}

// -----------
// | Helpers |
// -----------

/// Read the admin role identifier from the controller
async fn admin_role<C: ChainClient>(client: &C, timelock: Address) -> Result<B256, ScriptError> {
    read_call(client, timelock, &ITimelockController::DEFAULT_ADMIN_ROLECall {}).await
}

/// Grant `role` on the controller to `account` and wait for confirmation
async fn grant_role<C: ChainClient>(
    client: &C,
    timelock: Address,
    role: B256,
    account: Address,
    confirmations: u64,
) -> Result<Receipt, ScriptError> {
    let call = ITimelockController::grantRoleCall { role, account };
    send_call(client, timelock, &call, confirmations).await
}
