//! The ordered steps of the bootstrap deployment
//!
//! Each step is a function from the prior [`DeploymentState`] and a chain
//! client to the next state. Every transaction a step submits is confirmed to
//! the step's [`Step::confirmations`] depth before the step returns, so a step
//! only ever sees addresses and privileges that are final on chain.

pub mod contracts;
pub mod distribution;
pub mod governance;

use std::fmt::{self, Display};

use alloy_primitives::Address;

use crate::{
    artifacts::Artifacts,
    client::ChainClient,
    constants::NUM_CONFIRMATIONS,
    errors::ScriptError,
    network::Network,
    state::{ContractRole, DeploymentState},
    vesting::{vesting_plans, VestingPlan},
};

/// Everything the steps need that does not change over the deployment
#[derive(Clone, Debug)]
pub struct DeployContext {
    /// The network being deployed to
    pub network: Network,
    /// The recipient of the vesting plans
    pub vesting_recipient: Address,
    /// The final holder of the token, its ownership, and the controller's admin role
    pub final_holder: Address,
    /// The creation bytecode of the deployed contracts
    pub artifacts: Artifacts,
}

impl DeployContext {
    /// The vesting plans registry on the selected network
    pub fn vesting_plans_address(&self) -> Address {
        self.network.vesting_plans_address()
    }

    /// The batch planner on the selected network
    pub fn batch_planner_address(&self) -> Address {
        self.network.batch_planner_address()
    }

    /// The vesting plans created for the vesting recipient
    pub fn vesting_plans(&self) -> Result<[VestingPlan; 2], ScriptError> {
        vesting_plans(self.vesting_recipient)
    }
}

/// The kind of on-chain action a step performs
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionKind {
    /// The step creates a contract
    Deployment,
    /// The step calls methods on existing contracts
    Call,
}

/// A single step of the deployment
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Deploy the timelock controller
    DeployTimelockController,
    /// Deploy the token implementation
    DeployTokenImplementation,
    /// Deploy the token's proxy admin
    DeployTokenProxyAdmin,
    /// Hand the token's proxy admin to the controller
    HandTokenProxyAdminToTimelock,
    /// Deploy and initialize the token proxy
    DeployTokenProxy,
    /// Deploy the governor implementation
    DeployGovernorImplementation,
    /// Deploy the governor's proxy admin
    DeployGovernorProxyAdmin,
    /// Hand the governor's proxy admin to the controller
    HandGovernorProxyAdminToTimelock,
    /// Deploy and initialize the governor proxy
    DeployGovernorProxy,
    /// Let the governor propose operations on the controller
    GrantProposerRole,
    /// Let the governor cancel operations on the controller
    GrantCancellerRole,
    /// Make the final holder an admin of the controller
    GrantAdminRole,
    /// Drop the deployer's admin role on the controller
    RenounceAdminRole,
    /// Allowlist the vesting plans registry on the token
    AllowlistVestingPlans,
    /// Allowlist the batch planner on the token
    AllowlistBatchPlanner,
    /// Approve the batch planner for the vesting allocation
    ApproveBatchPlanner,
    /// Create the vesting plans
    CreateVestingPlans,
    /// Send the deployer's remaining tokens to the final holder
    SweepRemainingBalance,
    /// Hand token ownership to the final holder
    TransferTokenOwnership,
}

/// The steps of the deployment, in the order they run
///
/// A step may only consume addresses produced by a strictly earlier step. The
/// admin role must be granted to the final holder before the deployer renounces
/// it, and token ownership must be handed over last.
pub const DEPLOYMENT_PLAN: [Step; 19] = [
    Step::DeployTimelockController,
    Step::DeployTokenImplementation,
    Step::DeployTokenProxyAdmin,
    Step::HandTokenProxyAdminToTimelock,
    Step::DeployTokenProxy,
    Step::DeployGovernorImplementation,
    Step::DeployGovernorProxyAdmin,
    Step::HandGovernorProxyAdminToTimelock,
    Step::DeployGovernorProxy,
    Step::GrantProposerRole,
    Step::GrantCancellerRole,
    Step::GrantAdminRole,
    Step::RenounceAdminRole,
    Step::AllowlistVestingPlans,
    Step::AllowlistBatchPlanner,
    Step::ApproveBatchPlanner,
    Step::CreateVestingPlans,
    Step::SweepRemainingBalance,
    Step::TransferTokenOwnership,
];

impl Step {
    /// A human-readable description of the step
    pub fn description(&self) -> &'static str {
        match self {
            Step::DeployTimelockController => "deploy TimelockController",
            Step::DeployTokenImplementation => "deploy KpkToken implementation",
            Step::DeployTokenProxyAdmin => "deploy KpkToken ProxyAdmin",
            Step::HandTokenProxyAdminToTimelock => {
                "transfer KpkToken ProxyAdmin ownership to TimelockController"
            }
            Step::DeployTokenProxy => "deploy KpkToken proxy",
            Step::DeployGovernorImplementation => "deploy KpkGovernor implementation",
            Step::DeployGovernorProxyAdmin => "deploy KpkGovernor ProxyAdmin",
            Step::HandGovernorProxyAdminToTimelock => {
                "transfer KpkGovernor ProxyAdmin ownership to TimelockController"
            }
            Step::DeployGovernorProxy => "deploy KpkGovernor proxy",
            Step::GrantProposerRole => "grant PROPOSER_ROLE to KpkGovernor",
            Step::GrantCancellerRole => "grant CANCELLER_ROLE to KpkGovernor",
            Step::GrantAdminRole => "grant DEFAULT_ADMIN_ROLE to final holder",
            Step::RenounceAdminRole => "renounce DEFAULT_ADMIN_ROLE from deployer",
            Step::AllowlistVestingPlans => "allowlist TokenVestingPlans on KpkToken",
            Step::AllowlistBatchPlanner => "allowlist BatchPlanner on KpkToken",
            Step::ApproveBatchPlanner => "approve BatchPlanner to spend the vesting allocation",
            Step::CreateVestingPlans => "create vesting plans via BatchPlanner",
            Step::SweepRemainingBalance => "transfer remaining tokens to final holder",
            Step::TransferTokenOwnership => "transfer KpkToken ownership to final holder",
        }
    }

    /// The kind of action the step performs
    pub fn kind(&self) -> ActionKind {
        match self.produces() {
            Some(_) => ActionKind::Deployment,
            None => ActionKind::Call,
        }
    }

    /// The number of confirmations the step waits for on each transaction,
    /// the same [`NUM_CONFIRMATIONS`] for every step
    pub fn confirmations(&self) -> u64 {
        NUM_CONFIRMATIONS
    }

    /// The contract the step creates, if any
    pub fn produces(&self) -> Option<ContractRole> {
        match self {
            Step::DeployTimelockController => Some(ContractRole::TimelockController),
            Step::DeployTokenImplementation => Some(ContractRole::TokenImplementation),
            Step::DeployTokenProxyAdmin => Some(ContractRole::TokenProxyAdmin),
            Step::DeployTokenProxy => Some(ContractRole::TokenProxy),
            Step::DeployGovernorImplementation => Some(ContractRole::GovernorImplementation),
            Step::DeployGovernorProxyAdmin => Some(ContractRole::GovernorProxyAdmin),
            Step::DeployGovernorProxy => Some(ContractRole::GovernorProxy),
            _ => None,
        }
    }

    /// The contracts whose addresses the step consumes
    pub fn consumes(&self) -> &'static [ContractRole] {
        use ContractRole::*;

        match self {
            Step::DeployTimelockController
            | Step::DeployTokenImplementation
            | Step::DeployTokenProxyAdmin
            | Step::DeployGovernorImplementation
            | Step::DeployGovernorProxyAdmin => &[],
            Step::HandTokenProxyAdminToTimelock => &[TokenProxyAdmin, TimelockController],
            Step::DeployTokenProxy => &[TokenImplementation, TokenProxyAdmin],
            Step::HandGovernorProxyAdminToTimelock => &[GovernorProxyAdmin, TimelockController],
            Step::DeployGovernorProxy => {
                &[GovernorImplementation, GovernorProxyAdmin, TokenProxy, TimelockController]
            }
            Step::GrantProposerRole | Step::GrantCancellerRole => {
                &[TimelockController, GovernorProxy]
            }
            Step::GrantAdminRole | Step::RenounceAdminRole => &[TimelockController],
            Step::AllowlistVestingPlans
            | Step::AllowlistBatchPlanner
            | Step::ApproveBatchPlanner
            | Step::CreateVestingPlans
            | Step::SweepRemainingBalance
            | Step::TransferTokenOwnership => &[TokenProxy],
        }
    }

    /// Run the step against `state`, returning the state after it.
    ///
    /// Every contract the step consumes must already be recorded in `state`,
    /// otherwise the step fails before submitting anything. Each transaction
    /// is confirmed to the step's confirmation depth.
    pub async fn execute<C: ChainClient>(
        &self,
        state: DeploymentState,
        client: &C,
        ctx: &DeployContext,
    ) -> Result<DeploymentState, ScriptError> {
        for role in self.consumes() {
            state.require(*role)?;
        }

        let n = self.confirmations();
        match self {
            Step::DeployTimelockController => {
                contracts::deploy_timelock_controller(state, client, ctx, n).await
            }
            Step::DeployTokenImplementation => {
                contracts::deploy_token_implementation(state, client, ctx, n).await
            }
            Step::DeployTokenProxyAdmin => {
                let role = ContractRole::TokenProxyAdmin;
                contracts::deploy_proxy_admin(state, client, ctx, role, n).await
            }
            Step::HandTokenProxyAdminToTimelock => {
                let role = ContractRole::TokenProxyAdmin;
                contracts::hand_proxy_admin_to_timelock(state, client, role, n).await
            }
            Step::DeployTokenProxy => contracts::deploy_token_proxy(state, client, ctx, n).await,
            Step::DeployGovernorImplementation => {
                contracts::deploy_governor_implementation(state, client, ctx, n).await
            }
            Step::DeployGovernorProxyAdmin => {
                let role = ContractRole::GovernorProxyAdmin;
                contracts::deploy_proxy_admin(state, client, ctx, role, n).await
            }
            Step::HandGovernorProxyAdminToTimelock => {
                let role = ContractRole::GovernorProxyAdmin;
                contracts::hand_proxy_admin_to_timelock(state, client, role, n).await
            }
            Step::DeployGovernorProxy => {
                contracts::deploy_governor_proxy(state, client, ctx, n).await
            }
            Step::GrantProposerRole => governance::grant_proposer_role(state, client, n).await,
            Step::GrantCancellerRole => governance::grant_canceller_role(state, client, n).await,
            Step::GrantAdminRole => governance::grant_admin_role(state, client, ctx, n).await,
            Step::RenounceAdminRole => {
                governance::renounce_admin_role(state, client, ctx, n).await
            }
            Step::AllowlistVestingPlans => {
                distribution::allowlist(state, client, ctx.vesting_plans_address(), n).await
            }
            Step::AllowlistBatchPlanner => {
                distribution::allowlist(state, client, ctx.batch_planner_address(), n).await
            }
            Step::ApproveBatchPlanner => {
                distribution::approve_batch_planner(state, client, ctx, n).await
            }
            Step::CreateVestingPlans => {
                distribution::create_vesting_plans(state, client, ctx, n).await
            }
            Step::SweepRemainingBalance => {
                distribution::sweep_remaining_balance(state, client, ctx, n).await
            }
            Step::TransferTokenOwnership => {
                distribution::transfer_token_ownership(state, client, ctx, n).await
            }
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
