//! Steps creating the controller, the token and the governor

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use tracing::info;

use super::DeployContext;
use crate::{
    client::{constructor_args, deploy_contract, send_call, ChainClient},
    constants::TIMELOCK_MIN_DELAY_SECS,
    errors::ScriptError,
    solidity::{
        IKpkGovernor, IKpkToken, IOwnable, ProxyAdmin, TimelockController,
        TransparentUpgradeableProxy,
    },
    state::{ContractRole, DeploymentState},
};

/// Deploy a contract and record its confirmed address under `role`
async fn deploy_and_record<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    role: ContractRole,
    bytecode: &Bytes,
    args: Bytes,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let (address, receipt) = deploy_contract(client, bytecode, args, confirmations).await?;
    info!("{} deployed at {:#x} (tx {:#x})", role, address, receipt.tx_hash);

    Ok(state.with_contract(role, address))
}

/// Deploy the timelock controller with the deployer as its temporary admin.
///
/// There are no proposers until the governor exists, and the zero address as
/// the only executor lets anyone execute a ready operation.
pub async fn deploy_timelock_controller<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    ctx: &DeployContext,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let args = constructor_args(&TimelockController::constructorCall {
        minDelay: U256::from(TIMELOCK_MIN_DELAY_SECS),
        proposers: vec![],
        executors: vec![Address::ZERO],
        admin: client.deployer(),
    });

    let role = ContractRole::TimelockController;
    let bytecode = &ctx.artifacts.timelock_controller;
    deploy_and_record(state, client, role, bytecode, args, confirmations).await
}

/// Deploy the token implementation
pub async fn deploy_token_implementation<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    ctx: &DeployContext,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let role = ContractRole::TokenImplementation;
    let bytecode = &ctx.artifacts.kpk_token;
    deploy_and_record(state, client, role, bytecode, Bytes::new(), confirmations).await
}

/// Deploy the governor implementation
pub async fn deploy_governor_implementation<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    ctx: &DeployContext,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let role = ContractRole::GovernorImplementation;
    let bytecode = &ctx.artifacts.kpk_governor;
    deploy_and_record(state, client, role, bytecode, Bytes::new(), confirmations).await
}

/// Deploy a proxy admin owned by the deployer, recorded under `role`
pub async fn deploy_proxy_admin<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    ctx: &DeployContext,
    role: ContractRole,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let args = constructor_args(&ProxyAdmin::constructorCall { initialOwner: client.deployer() });
    deploy_and_record(state, client, role, &ctx.artifacts.proxy_admin, args, confirmations).await
}

/// Transfer ownership of the proxy admin recorded under `role` to the timelock controller
pub async fn hand_proxy_admin_to_timelock<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    role: ContractRole,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let proxy_admin = state.require(role)?;
    let timelock = state.require(ContractRole::TimelockController)?;

    let call = IOwnable::transferOwnershipCall { newOwner: timelock };
    let receipt = send_call(client, proxy_admin, &call, confirmations).await?;
    info!("{} ownership transferred to {:#x} (tx {:#x})", role, timelock, receipt.tx_hash);

    Ok(state)
}

/// Deploy the token proxy, initializing the token with the deployer as owner
pub async fn deploy_token_proxy<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    ctx: &DeployContext,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let implementation = state.require(ContractRole::TokenImplementation)?;
    let proxy_admin = state.require(ContractRole::TokenProxyAdmin)?;
    let init_data = IKpkToken::initializeCall { owner: client.deployer() }.abi_encode();

    let args = constructor_args(&TransparentUpgradeableProxy::constructorCall {
        logic: implementation,
        initialOwner: proxy_admin,
        data: init_data.into(),
    });

    let role = ContractRole::TokenProxy;
    deploy_and_record(state, client, role, &ctx.artifacts.proxy, args, confirmations).await
}

/// Deploy the governor proxy, initializing the governor with the token and the controller
pub async fn deploy_governor_proxy<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    ctx: &DeployContext,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let implementation = state.require(ContractRole::GovernorImplementation)?;
    let proxy_admin = state.require(ContractRole::GovernorProxyAdmin)?;
    let token = state.require(ContractRole::TokenProxy)?;
    let timelock = state.require(ContractRole::TimelockController)?;
    let init_data = IKpkGovernor::initializeCall { token, timelock }.abi_encode();

    let args = constructor_args(&TransparentUpgradeableProxy::constructorCall {
        logic: implementation,
        initialOwner: proxy_admin,
        data: init_data.into(),
    });

    let role = ContractRole::GovernorProxy;
    deploy_and_record(state, client, role, &ctx.artifacts.proxy, args, confirmations).await
}
