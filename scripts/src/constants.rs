//! Constants used in the deploy script

use alloy_primitives::{address, Address};

/// The number of confirmations to wait for on every state-changing transaction
pub const NUM_CONFIRMATIONS: u64 = 3;

/// The default number of seconds to wait for a transaction to be confirmed
pub const DEFAULT_CONFIRMATION_TIMEOUT_SECS: u64 = 600;

// ------------
// | Calendar |
// ------------

/// The number of seconds in a (non-leap) year
pub const SECONDS_IN_A_YEAR: u64 = 31_536_000;

/// The duration over which both vesting plans accrue
pub const SECONDS_IN_TWO_YEARS: u64 = SECONDS_IN_A_YEAR * 2;

/// The minimum delay enforced by the timelock controller, one day
pub const TIMELOCK_MIN_DELAY_SECS: u64 = 3600 * 24;

/// The start of the first vesting plan: the date GIP-20 was approved in Snapshot,
/// January 13th 2022, 12:00 UTC
pub const FIRST_PLAN_START: u64 = 1_642_075_200;

/// The start of the second vesting plan: February 28th 2025, 01:29 UTC, plus one year
pub const SECOND_PLAN_START: u64 = 1_740_706_140 + SECONDS_IN_A_YEAR;

// ---------------
// | Allocations |
// ---------------

/// The number of decimals of the governance token
pub const TOKEN_DECIMALS: u32 = 18;

/// The first Gnosis DAO allocation, in the token's smallest unit
pub const GNOSIS_DAO_ALLOCATION_1: u128 = 25_000_000 * 10u128.pow(TOKEN_DECIMALS);

/// The second Gnosis DAO allocation, in the token's smallest unit
pub const GNOSIS_DAO_ALLOCATION_2: u128 = 50_000_000 * 10u128.pow(TOKEN_DECIMALS);

/// The accrual period passed to the batch planner, one second
pub const VESTING_PERIOD: u64 = 1;

/// The batch planner's mint type discriminator for vesting plans
pub const VESTING_MINT_TYPE: u8 = 4;

// -------------
// | Addresses |
// -------------

/// The token vesting plans registry on mainnet
pub const TOKEN_VESTING_PLANS: Address = address!("2CDE9919e81b20B4B33DD562a48a84b54C48F00C");

/// The token vesting plans registry on Sepolia
pub const TOKEN_VESTING_PLANS_SEPOLIA: Address =
    address!("68b6986416c7A38F630cBc644a2833A0b78b3631");

/// The batch planner on mainnet
pub const BATCH_PLANNER: Address = address!("3466EB008EDD8d5052446293D1a7D212cb65C646");

/// The batch planner on Sepolia
pub const BATCH_PLANNER_SEPOLIA: Address = address!("d8B085f666299E52f24e637aB1076ba5C2c38045");

/// The kpk treasury safe, default final holder of the token and the controller admin role
pub const KPK_TREASURY_SAFE: &str = "0x58e6c7ab55Aa9012eAccA16d1ED4c15795669E1C";

/// The Gnosis DAO treasury safe, default recipient of the vesting plans
pub const GNOSIS_DAO_TREASURY_SAFE: &str = "0x849D52316331967b6fF1198e5E32A0eB168D039d";

// --------------------
// | Files & env vars |
// --------------------

/// The environment variable holding the deployer's private key
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// The environment variable holding the mainnet RPC URL
pub const MAINNET_RPC_ENV_VAR: &str = "MAINNET_RPC";

/// The environment variable holding the Sepolia RPC URL
pub const SEPOLIA_RPC_ENV_VAR: &str = "SEPOLIA_RPC";

/// The default directory holding the forge build output
pub const DEFAULT_ARTIFACTS_DIR: &str = "out";

/// The prefix of the deployment result file name
pub const DEPLOYMENT_FILE_PREFIX: &str = "deployment";

/// The name of the timelock controller contract artifact
pub const TIMELOCK_CONTROLLER_ARTIFACT: &str = "TimelockController";

/// The name of the governance token contract artifact
pub const KPK_TOKEN_ARTIFACT: &str = "KpkToken";

/// The name of the governor contract artifact
pub const KPK_GOVERNOR_ARTIFACT: &str = "KpkGovernor";

/// The name of the proxy admin contract artifact
pub const PROXY_ADMIN_ARTIFACT: &str = "ProxyAdmin";

/// The name of the transparent upgradeable proxy contract artifact
pub const PROXY_ARTIFACT: &str = "TransparentUpgradeableProxy";
