multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Tier thresholds, in the staking asset's smallest unit
// ============================================================

pub const BRONZE_THRESHOLD: u64 = 10_000_000;
pub const SILVER_THRESHOLD: u64 = 100_000_000;
pub const GOLD_THRESHOLD: u64 = 1_000_000_000;

// ============================================================
// Tier — staking bracket, recomputed on every balance change
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum Tier {
    None,
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    pub fn for_amount<M: ManagedTypeApi>(staked_amount: &BigUint<M>) -> Self {
        if *staked_amount >= GOLD_THRESHOLD {
            Tier::Gold
        } else if *staked_amount >= SILVER_THRESHOLD {
            Tier::Silver
        } else if *staked_amount >= BRONZE_THRESHOLD {
            Tier::Bronze
        } else {
            Tier::None
        }
    }
}

// ============================================================
// Stake Position — one per account, created on opt-in or first
// stake, never deleted. A zeroed position is a valid steady state.
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct StakePosition<M: ManagedTypeApi> {
    pub staked_amount: BigUint<M>,
    /// Share of the accumulator already accounted for at the last interaction
    pub reward_debt: BigUint<M>,
    pub pending_reward: BigUint<M>,
    pub stake_timestamp: u64,
    pub tier: Tier,
}

impl<M: ManagedTypeApi> StakePosition<M> {
    pub fn new() -> Self {
        StakePosition {
            staked_amount: BigUint::zero(),
            reward_debt: BigUint::zero(),
            pending_reward: BigUint::zero(),
            stake_timestamp: 0,
            tier: Tier::None,
        }
    }
}

impl<M: ManagedTypeApi> Default for StakePosition<M> {
    fn default() -> Self {
        Self::new()
    }
}
