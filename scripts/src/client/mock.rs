//! An in-memory chain client that records every interaction, for testing the
//! deployment flow without a node

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use alloy_primitives::{keccak256, Address, Bytes, TxHash, B256, U256};
use alloy_sol_types::{SolCall, SolValue};

use super::{ChainClient, Receipt};
use crate::{errors::ScriptError, solidity::IKpkToken, solidity::ITimelockController};

/// A single interaction with the mock client, in the order it happened
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientCall {
    /// A chain ID query
    ChainId,
    /// A contract creation
    SubmitDeployment {
        /// The creation bytecode, without constructor arguments
        bytecode: Bytes,
        /// The encoded constructor arguments
        constructor_args: Bytes,
        /// The hash handed back to the caller
        tx_hash: TxHash,
    },
    /// A contract method call
    SubmitCall {
        /// The called contract
        target: Address,
        /// The encoded call
        calldata: Bytes,
        /// The hash handed back to the caller
        tx_hash: TxHash,
    },
    /// A confirmation wait
    Confirm {
        /// The awaited transaction
        tx_hash: TxHash,
        /// The requested confirmation depth
        confirmations: u64,
    },
    /// A view call
    Read {
        /// The queried contract
        target: Address,
        /// The encoded call
        calldata: Bytes,
    },
}

/// How a matching transaction misbehaves when confirmed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Fault {
    /// The transaction reverts
    Revert,
    /// The confirmation never arrives
    Hang,
}

/// A transaction submitted to the mock and not yet confirmed
#[derive(Clone, Debug)]
enum Submitted {
    /// A deployment that will create a contract at the given address
    Deployment(Address),
    /// A call with the given calldata
    Call(Bytes),
}

/// The mutable state of the mock
#[derive(Default)]
struct Inner {
    /// Every interaction so far
    calls: Vec<ClientCall>,
    /// Submitted transactions by hash
    submitted: HashMap<TxHash, Submitted>,
    /// The number of transactions submitted so far
    nonce: u64,
    /// The `(role, account)` pairs granted by confirmed `grantRole` calls
    granted: HashSet<(B256, Address)>,
}

/// A recording chain client
pub struct MockChainClient {
    /// The deployer address
    deployer: Address,
    /// The chain ID reported by the mock
    chain_id: u64,
    /// The deployer's token balance reported by `balanceOf`
    balance: U256,
    /// Calls whose calldata starts with the given prefix fail on confirmation
    fault: Option<(Bytes, Fault)>,
    /// The recorded state
    inner: Mutex<Inner>,
}

impl MockChainClient {
    /// A well-behaved mock for the given chain
    pub fn new(chain_id: u64) -> Self {
        Self {
            deployer: Address::repeat_byte(0xde),
            chain_id,
            balance: U256::from(1_000_000_000u64) * U256::from(10u64).pow(U256::from(18)),
            fault: None,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Report the given token balance for the deployer
    pub fn with_balance(mut self, balance: U256) -> Self {
        self.balance = balance;
        self
    }

    /// Misbehave when confirming calls whose calldata starts with `prefix`
    pub fn with_fault(mut self, prefix: impl Into<Bytes>, fault: Fault) -> Self {
        self.fault = Some((prefix.into(), fault));
        self
    }

    /// Every interaction so far
    pub fn calls(&self) -> Vec<ClientCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Every submitted method call, as `(target, calldata)`
    pub fn submitted_calls(&self) -> Vec<(Address, Bytes)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ClientCall::SubmitCall { target, calldata, .. } => Some((target, calldata)),
                _ => None,
            })
            .collect()
    }

    /// The submitted calls of type `T`, decoded, with their target
    pub fn decoded_calls<T: SolCall>(&self) -> Vec<(Address, T)> {
        self.submitted_calls()
            .into_iter()
            .filter(|(_, data)| data.starts_with(&T::SELECTOR))
            .map(|(target, data)| (target, T::abi_decode(&data).unwrap()))
            .collect()
    }

    /// The position in the call log of the first interaction matching `pred`
    pub fn position(&self, pred: impl Fn(&ClientCall) -> bool) -> Option<usize> {
        self.calls().iter().position(pred)
    }

    /// The number of submitted transactions, deployments included
    pub fn num_submissions(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| {
                matches!(c, ClientCall::SubmitCall { .. } | ClientCall::SubmitDeployment { .. })
            })
            .count()
    }

    /// Record a submission and hand back its hash
    fn record_submission(
        &self,
        make: impl FnOnce(TxHash, u64) -> (ClientCall, Submitted),
    ) -> TxHash {
        let mut inner = self.inner.lock().unwrap();
        inner.nonce += 1;
        let tx_hash = TxHash::left_padding_from(&inner.nonce.to_be_bytes());

        let (call, submitted) = make(tx_hash, inner.nonce);
        inner.calls.push(call);
        inner.submitted.insert(tx_hash, submitted);
        tx_hash
    }
}

impl ChainClient for MockChainClient {
    fn deployer(&self) -> Address {
        self.deployer
    }

    async fn chain_id(&self) -> Result<u64, ScriptError> {
        self.inner.lock().unwrap().calls.push(ClientCall::ChainId);
        Ok(self.chain_id)
    }

    async fn submit_deployment(
        &self,
        bytecode: &Bytes,
        constructor_args: Bytes,
    ) -> Result<TxHash, ScriptError> {
        Ok(self.record_submission(|tx_hash, nonce| {
            let address = Address::left_padding_from(&(0xc0_0000 + nonce).to_be_bytes());
            let call = ClientCall::SubmitDeployment {
                bytecode: bytecode.clone(),
                constructor_args,
                tx_hash,
            };
            (call, Submitted::Deployment(address))
        }))
    }

    async fn submit_call(&self, target: Address, calldata: Bytes) -> Result<TxHash, ScriptError> {
        Ok(self.record_submission(|tx_hash, _| {
            let call = ClientCall::SubmitCall { target, calldata: calldata.clone(), tx_hash };
            (call, Submitted::Call(calldata))
        }))
    }

    async fn confirm(&self, tx_hash: TxHash, confirmations: u64) -> Result<Receipt, ScriptError> {
        let submitted = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(ClientCall::Confirm { tx_hash, confirmations });
            inner.submitted.get(&tx_hash).cloned()
        };

        let contract_address = match submitted {
            None => {
                return Err(ScriptError::TransactionFailure(format!("{:#x} dropped", tx_hash)))
            }
            Some(Submitted::Deployment(address)) => Some(address),
            Some(Submitted::Call(calldata)) => {
                match &self.fault {
                    Some((prefix, Fault::Revert)) if calldata.starts_with(prefix) => {
                        return Err(ScriptError::TransactionFailure(format!(
                            "{:#x} reverted",
                            tx_hash
                        )));
                    }
                    Some((prefix, Fault::Hang)) if calldata.starts_with(prefix) => {
                        std::future::pending::<()>().await;
                    }
                    _ => {}
                }

                if let Ok(grant) = ITimelockController::grantRoleCall::abi_decode(&calldata) {
                    self.inner.lock().unwrap().granted.insert((grant.role, grant.account));
                }
                None
            }
        };

        Ok(Receipt { tx_hash, contract_address })
    }

    async fn read(&self, target: Address, calldata: Bytes) -> Result<Bytes, ScriptError> {
        self.inner.lock().unwrap().calls.push(ClientCall::Read {
            target,
            calldata: calldata.clone(),
        });

        let selector = calldata.get(..4).unwrap_or_default();
        let ret = if selector == ITimelockController::PROPOSER_ROLECall::SELECTOR {
            proposer_role().abi_encode()
        } else if selector == ITimelockController::CANCELLER_ROLECall::SELECTOR {
            canceller_role().abi_encode()
        } else if selector == ITimelockController::DEFAULT_ADMIN_ROLECall::SELECTOR {
            B256::ZERO.abi_encode()
        } else if selector == ITimelockController::hasRoleCall::SELECTOR {
            let query = ITimelockController::hasRoleCall::abi_decode(&calldata)
                .map_err(|e| ScriptError::Serde(e.to_string()))?;
            let granted = self.inner.lock().unwrap().granted.contains(&(query.role, query.account));
            granted.abi_encode()
        } else if selector == IKpkToken::balanceOfCall::SELECTOR {
            self.balance.abi_encode()
        } else {
            return Err(ScriptError::ContractInteraction("unknown view method".to_string()));
        };

        Ok(Bytes::from(ret))
    }
}

/// The proposer role identifier reported by the mock controller
pub fn proposer_role() -> B256 {
    keccak256("PROPOSER_ROLE")
}

/// The canceller role identifier reported by the mock controller
pub fn canceller_role() -> B256 {
    keccak256("CANCELLER_ROLE")
}
