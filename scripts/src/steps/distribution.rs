//! Steps distributing the token: allowlisting, vesting plan creation, and the
//! final handover to the final holder

use alloy_primitives::{Address, U256};
use tracing::{info, warn};

use super::DeployContext;
use crate::{
    client::{read_call, send_call, ChainClient},
    constants::{SECONDS_IN_TWO_YEARS, VESTING_MINT_TYPE, VESTING_PERIOD},
    errors::ScriptError,
    solidity::{IBatchPlanner, IKpkToken, IOwnable, Plan},
    state::{ContractRole, DeploymentState},
    vesting::total_allocation,
};

/// Exempt `account` from the token's transfer restriction
pub async fn allowlist<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    account: Address,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let token = state.require(ContractRole::TokenProxy)?;

    let call = IKpkToken::transferAllowlistCall { account, allowed: true };
    let receipt = send_call(client, token, &call, confirmations).await?;
    info!("{:#x} allowlisted on token {:#x} (tx {:#x})", account, token, receipt.tx_hash);

    Ok(state)
}

/// Approve the batch planner to spend exactly the total vesting allocation
pub async fn approve_batch_planner<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    ctx: &DeployContext,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let token = state.require(ContractRole::TokenProxy)?;
    let spender = ctx.batch_planner_address();
    let value = total_allocation(&ctx.vesting_plans()?);

    let call = IKpkToken::approveCall { spender, value };
    let receipt = send_call(client, token, &call, confirmations).await?;
    info!("batch planner {:#x} approved for {} (tx {:#x})", spender, value, receipt.tx_hash);

    Ok(state)
}

/// Create both vesting plans in a single batch planner call
pub async fn create_vesting_plans<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    ctx: &DeployContext,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let token = state.require(ContractRole::TokenProxy)?;
    let plans = ctx.vesting_plans()?;

    for plan in plans.iter() {
        let dust = plan.truncated_dust(SECONDS_IN_TWO_YEARS);
        if !dust.is_zero() {
            warn!("plan starting at {} leaves {} units unvested by truncation", plan.start, dust);
        }
    }

    let call = IBatchPlanner::batchVestingPlansCall {
        locker: ctx.vesting_plans_address(),
        token,
        totalAmount: total_allocation(&plans),
        plans: plans.iter().map(Plan::from).collect(),
        period: U256::from(VESTING_PERIOD),
        vestingAdmin: ctx.final_holder,
        adminTransferOBO: true,
        mintType: VESTING_MINT_TYPE,
    };
    let receipt = send_call(client, ctx.batch_planner_address(), &call, confirmations).await?;
    info!(
        "{} vesting plans created for {:#x} (tx {:#x})",
        plans.len(),
        ctx.vesting_recipient,
        receipt.tx_hash
    );

    Ok(state)
}

/// Transfer whatever the deployer still holds to the final holder
pub async fn sweep_remaining_balance<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    ctx: &DeployContext,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let token = state.require(ContractRole::TokenProxy)?;
    let deployer = client.deployer();

    let balance = read_call(client, token, &IKpkToken::balanceOfCall { account: deployer }).await?;
    if balance.is_zero() {
        info!("deployer holds no tokens, nothing to transfer");
        return Ok(state);
    }

    let call = IKpkToken::transferCall { to: ctx.final_holder, value: balance };
    let receipt = send_call(client, token, &call, confirmations).await?;
    info!("{} tokens transferred to {:#x} (tx {:#x})", balance, ctx.final_holder, receipt.tx_hash);

    Ok(state)
}

/// Hand token ownership to the final holder, after which the deployer has no
/// authority over the token
pub async fn transfer_token_ownership<C: ChainClient>(
    state: DeploymentState,
    client: &C,
    ctx: &DeployContext,
    confirmations: u64,
) -> Result<DeploymentState, ScriptError> {
    let token = state.require(ContractRole::TokenProxy)?;

    let call = IOwnable::transferOwnershipCall { newOwner: ctx.final_holder };
    let receipt = send_call(client, token, &call, confirmations).await?;
    info!("token ownership transferred to {:#x} (tx {:#x})", ctx.final_holder, receipt.tx_hash);

    Ok(state)
}
