//! The chain client used by the deployment steps
//!
//! Every state-changing helper in this module submits a transaction and then
//! blocks until it reaches the requested confirmation depth before returning,
//! so a caller can never observe an address or act on a state change that is
//! not yet final.

mod rpc;
#[cfg(test)]
pub mod mock;

pub use rpc::RpcChainClient;

use alloy_primitives::{Address, Bytes, TxHash};
use alloy_sol_types::{SolCall, SolConstructor};

use crate::errors::ScriptError;

/// The receipt of a confirmed transaction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// The hash of the transaction
    pub tx_hash: TxHash,
    /// The address of the contract created by the transaction, if any
    pub contract_address: Option<Address>,
}

/// A handle on the chain the contracts are deployed to
#[allow(async_fn_in_trait)]
pub trait ChainClient {
    /// The address of the signing account
    fn deployer(&self) -> Address;

    /// The chain ID reported by the node
    async fn chain_id(&self) -> Result<u64, ScriptError>;

    /// Submit a contract creation transaction
    async fn submit_deployment(
        &self,
        bytecode: &Bytes,
        constructor_args: Bytes,
    ) -> Result<TxHash, ScriptError>;

    /// Submit a call to a contract method
    async fn submit_call(&self, target: Address, calldata: Bytes) -> Result<TxHash, ScriptError>;

    /// Wait until the transaction is included and followed by at least
    /// `confirmations` blocks, failing if it reverts, is dropped, or times out
    async fn confirm(&self, tx_hash: TxHash, confirmations: u64) -> Result<Receipt, ScriptError>;

    /// Query contract state without submitting a transaction
    async fn read(&self, target: Address, calldata: Bytes) -> Result<Bytes, ScriptError>;
}

// -----------
// | Helpers |
// -----------

/// ABI-encode the arguments of a contract constructor
pub fn constructor_args<T: SolConstructor>(constructor: &T) -> Bytes {
    Bytes::from(constructor.abi_encode())
}

/// Deploy a contract and wait for `confirmations` blocks, returning its address
pub async fn deploy_contract<C: ChainClient>(
    client: &C,
    bytecode: &Bytes,
    constructor_args: Bytes,
    confirmations: u64,
) -> Result<(Address, Receipt), ScriptError> {
    let tx_hash = client.submit_deployment(bytecode, constructor_args).await?;
    let receipt = client.confirm(tx_hash, confirmations).await?;

    let address = receipt.contract_address.ok_or_else(|| {
        ScriptError::TransactionFailure(format!(
            "deployment {:#x} confirmed without a contract address",
            tx_hash
        ))
    })?;
    Ok((address, receipt))
}

/// Call a contract method and wait for `confirmations` blocks
pub async fn send_call<C: ChainClient, T: SolCall>(
    client: &C,
    target: Address,
    call: &T,
    confirmations: u64,
) -> Result<Receipt, ScriptError> {
    let tx_hash = client.submit_call(target, Bytes::from(call.abi_encode())).await?;
    client.confirm(tx_hash, confirmations).await
}

/// Call a view method and decode its return value
pub async fn read_call<C: ChainClient, T: SolCall>(
    client: &C,
    target: Address,
    call: &T,
) -> Result<T::Return, ScriptError> {
    let data = client.read(target, Bytes::from(call.abi_encode())).await?;
    T::abi_decode_returns(&data).map_err(|e| ScriptError::Serde(e.to_string()))
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, Bytes};

    use super::{deploy_contract, send_call};
    use crate::{
        client::mock::{ClientCall, MockChainClient},
        solidity::IOwnable,
    };

    fn confirmation_depths(client: &MockChainClient) -> Vec<u64> {
        client
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                ClientCall::Confirm { confirmations, .. } => Some(confirmations),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_requested_depth_is_awaited() {
        let client = MockChainClient::new(1);
        let call = IOwnable::transferOwnershipCall { newOwner: Address::repeat_byte(1) };

        send_call(&client, Address::repeat_byte(2), &call, 5).await.unwrap();
        let (address, receipt) =
            deploy_contract(&client, &Bytes::from_static(&[0x60]), Bytes::new(), 12)
                .await
                .unwrap();

        assert_eq!(receipt.contract_address, Some(address));
        assert_eq!(confirmation_depths(&client), vec![5, 12]);
    }
}
