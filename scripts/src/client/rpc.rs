//! A chain client backed by a JSON-RPC node

use std::time::Duration;

use alloy::{
    network::{Ethereum, TransactionBuilder},
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_primitives::{Address, Bytes, TxHash};
use tracing::debug;

use super::{ChainClient, Receipt};
use crate::errors::ScriptError;

/// A chain client that signs with a local private key and talks to an HTTP endpoint
#[derive(Clone)]
pub struct RpcChainClient {
    /// The underlying provider, with the deployer's wallet attached
    provider: DynProvider<Ethereum>,
    /// The address of the deployer
    deployer: Address,
    /// How long to wait for a transaction to reach the required confirmations
    confirmation_timeout: Duration,
}

impl RpcChainClient {
    /// Sets up a client signing with `signer` against the node at `rpc_url`
    pub fn new(signer: PrivateKeySigner, rpc_url: Url, confirmation_timeout: Duration) -> Self {
        let deployer = signer.address();
        let provider = ProviderBuilder::new().wallet(signer).connect_http(rpc_url);

        Self { provider: DynProvider::new(provider), deployer, confirmation_timeout }
    }

    /// Submit a transaction request, returning its hash once the node accepted it
    async fn submit(&self, tx: TransactionRequest) -> Result<TxHash, ScriptError> {
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::TransactionFailure(e.to_string()))?;

        let tx_hash = *pending.tx_hash();
        debug!("submitted transaction {:#x}", tx_hash);
        Ok(tx_hash)
    }
}

impl ChainClient for RpcChainClient {
    fn deployer(&self) -> Address {
        self.deployer
    }

    async fn chain_id(&self) -> Result<u64, ScriptError> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| ScriptError::ClientInitialization(e.to_string()))
    }

    async fn submit_deployment(
        &self,
        bytecode: &Bytes,
        constructor_args: Bytes,
    ) -> Result<TxHash, ScriptError> {
        let mut code = bytecode.to_vec();
        code.extend_from_slice(&constructor_args);

        let tx = TransactionRequest::default().with_from(self.deployer).with_deploy_code(code);
        self.submit(tx).await
    }

    async fn submit_call(&self, target: Address, calldata: Bytes) -> Result<TxHash, ScriptError> {
        let tx = TransactionRequest::default()
            .with_from(self.deployer)
            .with_to(target)
            .with_input(calldata);
        self.submit(tx).await
    }

    async fn confirm(&self, tx_hash: TxHash, confirmations: u64) -> Result<Receipt, ScriptError> {
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
            .with_required_confirmations(confirmations)
            .with_timeout(Some(self.confirmation_timeout))
            .get_receipt()
            .await
            .map_err(|e| ScriptError::TransactionFailure(format!("{:#x}: {}", tx_hash, e)))?;

        if !receipt.status() {
            return Err(ScriptError::TransactionFailure(format!("{:#x} reverted", tx_hash)));
        }

        Ok(Receipt {
            tx_hash: receipt.transaction_hash,
            contract_address: receipt.contract_address,
        })
    }

    async fn read(&self, target: Address, calldata: Bytes) -> Result<Bytes, ScriptError> {
        let tx = TransactionRequest::default().with_to(target).with_input(calldata);
        self.provider
            .call(tx)
            .await
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
    }
}
