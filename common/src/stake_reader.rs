multiversx_sc::imports!();

use crate::types::StakePosition;

/// Read-only view of a staking contract's per-account positions.
///
/// Storage is read directly from the ledger's account, which only works
/// when the ledger lives on the same shard as the reading contract.
/// Deployed on another shard, every lookup comes back empty and no
/// account is ever eligible.
#[multiversx_sc::module]
pub trait StakeLedgerReaderModule {
    /// `None` when the account has no position on that ledger.
    fn staked_amount_at(
        &self,
        ledger_address: ManagedAddress,
        account: &ManagedAddress,
    ) -> Option<BigUint> {
        let position_mapper = self.stake_position_at(ledger_address, account);
        if position_mapper.is_empty() {
            return None;
        }
        Some(position_mapper.get().staked_amount)
    }

    // Same key as `StakePositionModule::stake_position`.
    #[storage_mapper_from_address("stakePosition")]
    fn stake_position_at(
        &self,
        ledger_address: ManagedAddress,
        account: &ManagedAddress,
    ) -> SingleValueMapper<StakePosition<Self::Api>, ManagedAddress>;
}
