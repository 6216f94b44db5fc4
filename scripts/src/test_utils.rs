//! Fixtures shared by the unit tests

use alloy_primitives::{address, Address, Bytes};

use crate::{artifacts::Artifacts, network::Network, steps::DeployContext};

/// The vesting recipient used in tests
pub const TEST_VESTING_RECIPIENT: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");

/// The final holder used in tests
pub const TEST_FINAL_HOLDER: Address = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");

/// Distinct, non-empty placeholder bytecode for every artifact
pub fn test_artifacts() -> Artifacts {
    Artifacts {
        timelock_controller: Bytes::from_static(&[0x60, 0x01]),
        kpk_token: Bytes::from_static(&[0x60, 0x02]),
        kpk_governor: Bytes::from_static(&[0x60, 0x03]),
        proxy_admin: Bytes::from_static(&[0x60, 0x04]),
        proxy: Bytes::from_static(&[0x60, 0x05]),
    }
}

/// A deployment context for `network` using the test addresses
pub fn test_context(network: Network) -> DeployContext {
    DeployContext {
        network,
        vesting_recipient: TEST_VESTING_RECIPIENT,
        final_holder: TEST_FINAL_HOLDER,
        artifacts: test_artifacts(),
    }
}
