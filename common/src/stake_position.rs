multiversx_sc::imports!();

use crate::types::StakePosition;

/// The staking contract's per-account positions. It is the only writer;
/// other contracts read the same key through `StakeLedgerReaderModule`.
#[multiversx_sc::module]
pub trait StakePositionModule {
    #[storage_mapper("stakePosition")]
    fn stake_position(&self, account: &ManagedAddress) -> SingleValueMapper<StakePosition<Self::Api>>;
}
