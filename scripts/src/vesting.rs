//! Computation of the vesting plans created for the Gnosis DAO allocations
//!
//! Rates are truncated: `rate = floor(amount / duration)`. The remainder is not
//! redistributed, so up to `duration - 1` units of each allocation never accrue.

use alloy_primitives::{Address, U256};

use crate::{
    constants::{
        FIRST_PLAN_START, GNOSIS_DAO_ALLOCATION_1, GNOSIS_DAO_ALLOCATION_2, SECONDS_IN_TWO_YEARS,
        SECOND_PLAN_START,
    },
    errors::ScriptError,
    solidity::Plan,
};

/// A linear vesting schedule for a single recipient
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VestingPlan {
    /// The recipient of the vested tokens
    pub recipient: Address,
    /// The total amount vested, in the token's smallest unit
    pub amount: U256,
    /// The timestamp at which accrual starts
    pub start: U256,
    /// The timestamp before which nothing can be claimed
    pub cliff: U256,
    /// The amount accrued per second
    pub rate: U256,
}

impl VestingPlan {
    /// A plan with no cliff, accruing `amount` over `duration` seconds from `start`
    pub fn without_cliff(
        recipient: Address,
        amount: U256,
        start: u64,
        duration: u64,
    ) -> Result<Self, ScriptError> {
        let rate = vesting_rate(amount, duration)?;
        let start = U256::from(start);
        Ok(Self { recipient, amount, start, cliff: start, rate })
    }

    /// The amount lost to rate truncation over the plan's duration
    pub fn truncated_dust(&self, duration: u64) -> U256 {
        self.amount.saturating_sub(self.rate.saturating_mul(U256::from(duration)))
    }
}

impl From<&VestingPlan> for Plan {
    fn from(plan: &VestingPlan) -> Self {
        Plan {
            recipient: plan.recipient,
            amount: plan.amount,
            start: plan.start,
            cliff: plan.cliff,
            rate: plan.rate,
        }
    }
}

/// The per-second accrual rate of `amount` vesting over `duration` seconds,
/// failing on an empty duration
pub fn vesting_rate(amount: U256, duration: u64) -> Result<U256, ScriptError> {
    amount.checked_div(U256::from(duration)).ok_or_else(|| {
        ScriptError::Configuration("vesting duration must be at least one second".to_string())
    })
}

/// The two vesting plans created for the Gnosis DAO, both paid to `recipient`
pub fn vesting_plans(recipient: Address) -> Result<[VestingPlan; 2], ScriptError> {
    Ok([
        VestingPlan::without_cliff(
            recipient,
            U256::from(GNOSIS_DAO_ALLOCATION_1),
            FIRST_PLAN_START,
            SECONDS_IN_TWO_YEARS,
        )?,
        VestingPlan::without_cliff(
            recipient,
            U256::from(GNOSIS_DAO_ALLOCATION_2),
            SECOND_PLAN_START,
            SECONDS_IN_TWO_YEARS,
        )?,
    ])
}

/// The sum of all vesting plan amounts, approved to the batch planner
pub fn total_allocation(plans: &[VestingPlan]) -> U256 {
    plans.iter().fold(U256::ZERO, |acc, plan| acc + plan.amount)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, U256};

    use super::{total_allocation, vesting_plans, vesting_rate, VestingPlan};
    use crate::{
        constants::{GNOSIS_DAO_ALLOCATION_1, GNOSIS_DAO_ALLOCATION_2, SECONDS_IN_TWO_YEARS},
        errors::ScriptError,
    };

    #[test]
    fn test_two_years_in_seconds() {
        assert_eq!(SECONDS_IN_TWO_YEARS, 63_072_000);
    }

    #[test]
    fn test_rates_are_floored() {
        let recipient = Address::repeat_byte(0x11);
        let [first, second] = vesting_plans(recipient).unwrap();

        // 25_000_000e18 / 63_072_000 = 396_372_399_797_057_331.30...
        assert_eq!(first.rate, U256::from(396_372_399_797_057_331u128));
        // 50_000_000e18 / 63_072_000 = 792_744_799_594_114_662.60...
        assert_eq!(second.rate, U256::from(792_744_799_594_114_662u128));

        let duration = U256::from(SECONDS_IN_TWO_YEARS);
        assert!(first.rate * duration <= first.amount);
        assert!((first.rate + U256::from(1)) * duration > first.amount);
        assert!(second.rate * duration <= second.amount);
        assert!((second.rate + U256::from(1)) * duration > second.amount);
    }

    #[test]
    fn test_dust_is_not_redistributed() {
        let [first, _] = vesting_plans(Address::ZERO).unwrap();
        let dust = first.truncated_dust(SECONDS_IN_TWO_YEARS);

        assert!(dust < U256::from(SECONDS_IN_TWO_YEARS));
        assert_eq!(first.rate * U256::from(SECONDS_IN_TWO_YEARS) + dust, first.amount);
    }

    #[test]
    fn test_plans_have_no_cliff() {
        let recipient = Address::repeat_byte(0x22);
        for plan in vesting_plans(recipient).unwrap() {
            assert_eq!(plan.cliff, plan.start);
            assert_eq!(plan.recipient, recipient);
        }
    }

    #[test]
    fn test_plan_calendar() {
        let [first, second] = vesting_plans(Address::ZERO).unwrap();
        assert_eq!(first.start, U256::from(1_642_075_200u64));
        assert_eq!(second.start, U256::from(1_772_242_140u64));
    }

    #[test]
    fn test_total_allocation() {
        let plans = vesting_plans(Address::ZERO).unwrap();
        let expected = U256::from(GNOSIS_DAO_ALLOCATION_1) + U256::from(GNOSIS_DAO_ALLOCATION_2);

        assert_eq!(total_allocation(&plans), expected);
        assert_eq!(expected, U256::from(75_000_000u128 * 10u128.pow(18)));
    }

    #[test]
    fn test_rate_of_exact_multiple() {
        assert_eq!(vesting_rate(U256::from(1_000), 10).unwrap(), U256::from(100));
        assert_eq!(vesting_rate(U256::from(1_009), 10).unwrap(), U256::from(100));
        assert_eq!(vesting_rate(U256::from(9), 10).unwrap(), U256::ZERO);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = vesting_rate(U256::from(1_000), 0).unwrap_err();
        assert!(matches!(err, ScriptError::Configuration(_)));

        let plan = VestingPlan::without_cliff(Address::ZERO, U256::from(1_000), 0, 0);
        assert!(plan.is_err());
    }
}
