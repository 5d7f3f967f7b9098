multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Pool State — pool-wide accrual bookkeeping, one per deployment
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PoolState<M: ManagedTypeApi> {
    pub total_staked: BigUint<M>,
    /// Reward units emitted per second across the whole pool
    pub reward_rate: BigUint<M>,
    pub last_update_time: u64,
    /// Cumulative reward per staked unit, scaled by `SCALE`. Never decreases.
    pub acc_reward_per_unit: BigUint<M>,
}
