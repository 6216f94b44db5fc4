//! Definitions of Solidity constructors and functions called during deployment

use alloy_sol_types::sol;

// --- Constructors --- //

sol! {
    contract TimelockController {
        constructor(uint256 minDelay, address[] proposers, address[] executors, address admin) {}
    }
}

sol! {
    contract ProxyAdmin {
        constructor(address initialOwner) {}
    }
}

sol! {
    contract TransparentUpgradeableProxy {
        constructor(address logic, address initialOwner, bytes data) {}
    }
}

// --- Interfaces --- //

sol! {
    interface ITimelockController {
        function PROPOSER_ROLE() external view returns (bytes32);
        function CANCELLER_ROLE() external view returns (bytes32);
        function DEFAULT_ADMIN_ROLE() external view returns (bytes32);
        function hasRole(bytes32 role, address account) external view returns (bool);
        function grantRole(bytes32 role, address account) external;
        function renounceRole(bytes32 role, address callerConfirmation) external;
    }
}

sol! {
    interface IOwnable {
        function transferOwnership(address newOwner) external;
    }
}

sol! {
    interface IKpkToken {
        function initialize(address owner) external;
        function transferAllowlist(address account, bool allowed) external;
        function approve(address spender, uint256 value) external returns (bool);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 value) external returns (bool);
    }
}

sol! {
    interface IKpkGovernor {
        function initialize(address token, address timelock) external;
    }
}

sol! {
    struct Plan {
        address recipient;
        uint256 amount;
        uint256 start;
        uint256 cliff;
        uint256 rate;
    }

    interface IBatchPlanner {
        function batchVestingPlans(
            address locker,
            address token,
            uint256 totalAmount,
            Plan[] plans,
            uint256 period,
            address vestingAdmin,
            bool adminTransferOBO,
            uint8 mintType
        ) external;
    }
}
