#![no_std]

multiversx_sc::imports!();

pub mod types;

use cbd_common::errors::*;
use cbd_common::types::{StakePosition, Tier};
use types::PoolState;

// ============================================================
// Constants
// ============================================================

/// Fixed-point scale of the reward accumulator (1e9)
pub const SCALE: u64 = 1_000_000_000;

// ============================================================
// Contract
// ============================================================

/// Continuous-time staking ledger. Rewards accrue per second into a
/// pool-wide accumulator; each position only stores the share of it
/// already accounted for, so no operation ever iterates over time or
/// over other stakers.
#[multiversx_sc::contract]
pub trait StakeLedger:
    cbd_common::admin::AdminModule + cbd_common::stake_position::StakePositionModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        self.init_admin();
        self.staking_enabled().set(true);
        self.total_staked().set(BigUint::zero());
        self.reward_rate().set(BigUint::zero());
        self.acc_reward_per_unit().set(BigUint::zero());
        self.last_update_time()
            .set(self.blockchain().get_block_timestamp());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ADMIN: parameters
    // The staking asset locks on first set; the rate stays mutable.
    // ========================================================

    #[endpoint(setParams)]
    fn set_params(&self, asset_id: TokenIdentifier, reward_rate: BigUint) {
        self.require_admin();

        if self.asset_id().is_empty() {
            require!(asset_id.is_valid_esdt_identifier(), ERR_ASSET_NOT_CONFIGURED);
            self.asset_id().set(&asset_id);
        } else {
            require!(
                self.asset_id().get() == asset_id,
                ERR_CONFIGURATION_LOCKED
            );
        }

        self.apply_reward_rate(reward_rate);
        self.params_updated_event(&asset_id, &self.reward_rate().get());
    }

    #[endpoint(setRewardRate)]
    fn set_reward_rate(&self, reward_rate: BigUint) {
        self.require_admin();
        require!(!self.asset_id().is_empty(), ERR_ASSET_NOT_CONFIGURED);

        self.apply_reward_rate(reward_rate);
        self.params_updated_event(&self.asset_id().get(), &self.reward_rate().get());
    }

    #[endpoint(toggleStaking)]
    fn toggle_staking(&self) {
        self.require_admin();
        let enabled = !self.staking_enabled().get();
        self.staking_enabled().set(enabled);
        self.staking_toggled_event(enabled);
    }

    /// Tops up the reserve that reward claims are paid from.
    #[payable("*")]
    #[endpoint(fundRewards)]
    fn fund_rewards(&self) {
        self.require_admin();
        let amount = self.require_paired_transfer();

        self.reward_reserve().update(|reserve| *reserve += &amount);
        self.rewards_funded_event(&self.blockchain().get_caller(), &amount);
    }

    // ========================================================
    // ENDPOINT: optIn
    // ========================================================

    #[endpoint(optIn)]
    fn opt_in(&self) {
        let caller = self.blockchain().get_caller();
        let position_mapper = self.stake_position(&caller);
        if position_mapper.is_empty() {
            position_mapper.set(StakePosition::new());
            self.opt_in_event(&caller);
        }
    }

    // ========================================================
    // ENDPOINT: stake
    // The call must carry exactly one transfer of the staking
    // asset for exactly `amount`.
    // ========================================================

    #[payable("*")]
    #[endpoint(stake)]
    fn stake(&self, amount: BigUint) {
        require!(self.staking_enabled().get(), ERR_STAKING_DISABLED);
        require!(amount > 0u64, ERR_BELOW_MINIMUM_STAKE);
        let paid = self.require_paired_transfer();
        require!(paid == amount, ERR_TRANSFER_MISMATCH);

        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        let acc = self.update_pool();

        let mut position = self.load_position(&caller);
        self.harvest(&mut position, &acc);

        position.staked_amount += &amount;
        position.stake_timestamp = now;
        position.tier = Tier::for_amount(&position.staked_amount);
        position.reward_debt = &position.staked_amount * &acc / SCALE;
        self.total_staked().update(|total| *total += &amount);

        self.stake_position(&caller).set(&position);
        self.stake_event(&caller, &amount, position.tier);
    }

    // ========================================================
    // ENDPOINT: unstake
    // Rewards accrued up to this instant are harvested on the old
    // balance before the debt is reset on the new one.
    // ========================================================

    #[endpoint(unstake)]
    fn unstake(&self, amount: BigUint) {
        require!(amount > 0u64, ERR_BELOW_MINIMUM_STAKE);

        let caller = self.blockchain().get_caller();
        let mut position = self.load_position(&caller);
        require!(position.staked_amount >= amount, ERR_INSUFFICIENT_STAKE);

        let acc = self.update_pool();
        self.harvest(&mut position, &acc);

        position.staked_amount -= &amount;
        position.tier = Tier::for_amount(&position.staked_amount);
        position.reward_debt = &position.staked_amount * &acc / SCALE;
        self.total_staked().update(|total| *total -= &amount);

        self.stake_position(&caller).set(&position);
        self.send()
            .direct_esdt(&caller, &self.asset_id().get(), 0, &amount);
        self.unstake_event(&caller, &amount, position.tier);
    }

    // ========================================================
    // ENDPOINT: claim
    // Zero pending is a successful no-op.
    // ========================================================

    #[endpoint(claim)]
    fn claim(&self) {
        let caller = self.blockchain().get_caller();
        let acc = self.update_pool();

        // Nothing to harvest, and no position is created as a side effect.
        if self.stake_position(&caller).is_empty() {
            self.claim_rewards_event(&caller, &BigUint::zero());
            return;
        }

        let mut position = self.stake_position(&caller).get();
        self.harvest(&mut position, &acc);

        let payout = core::mem::replace(&mut position.pending_reward, BigUint::zero());
        if payout > 0u64 {
            let reserve = self.reward_reserve().get();
            require!(reserve >= payout, ERR_INSUFFICIENT_REWARD_RESERVE);
            self.reward_reserve().set(&reserve - &payout);
            self.send()
                .direct_esdt(&caller, &self.asset_id().get(), 0, &payout);
        }

        self.stake_position(&caller).set(&position);
        self.claim_rewards_event(&caller, &payout);
    }

    // ========================================================
    // INTERNAL: accrual
    // ========================================================

    /// Brings the accumulator up to `now` and returns it. With nothing
    /// staked the accumulator is left alone; the clock still advances.
    fn update_pool(&self) -> BigUint {
        let now = self.blockchain().get_block_timestamp();
        let mut acc = self.acc_reward_per_unit().get();
        let total_staked = self.total_staked().get();

        if total_staked > 0u64 {
            let elapsed = now.saturating_sub(self.last_update_time().get());
            if elapsed > 0 {
                let increment = self.accrual_increment(elapsed, &total_staked);
                acc += &increment;
                self.acc_reward_per_unit().set(&acc);
            }
        }

        self.last_update_time().set(now);
        acc
    }

    /// Moves the share earned since the last snapshot into `pending_reward`.
    fn harvest(&self, position: &mut StakePosition<Self::Api>, acc: &BigUint) {
        let accumulated = &position.staked_amount * acc / SCALE;
        if accumulated > position.reward_debt {
            let earned = &accumulated - &position.reward_debt;
            position.pending_reward += &earned;
        }
        position.reward_debt = accumulated;
    }

    /// Projection of `update_pool` + `harvest` without writing anything.
    fn preview_pending(&self, position: &StakePosition<Self::Api>) -> BigUint {
        let now = self.blockchain().get_block_timestamp();
        let mut acc = self.acc_reward_per_unit().get();
        let total_staked = self.total_staked().get();
        let elapsed = now.saturating_sub(self.last_update_time().get());
        if total_staked > 0u64 && elapsed > 0 {
            let increment = self.accrual_increment(elapsed, &total_staked);
            acc += &increment;
        }

        let accumulated = &position.staked_amount * &acc / SCALE;
        if accumulated > position.reward_debt {
            let earned = &accumulated - &position.reward_debt;
            &position.pending_reward + &earned
        } else {
            position.pending_reward.clone()
        }
    }

    /// `elapsed * reward_rate * SCALE / total_staked`, floored.
    fn accrual_increment(&self, elapsed: u64, total_staked: &BigUint) -> BigUint {
        let emitted = &BigUint::from(elapsed) * &self.reward_rate().get();
        &emitted * SCALE / total_staked
    }

    /// Rate changes only apply from now on: the accumulator is settled
    /// at the old rate first.
    fn apply_reward_rate(&self, reward_rate: BigUint) {
        self.update_pool();
        self.reward_rate().set(&reward_rate);
    }

    fn load_position(&self, account: &ManagedAddress) -> StakePosition<Self::Api> {
        let position_mapper = self.stake_position(account);
        if position_mapper.is_empty() {
            StakePosition::new()
        } else {
            position_mapper.get()
        }
    }

    /// Validates the single inbound leg of the call and returns its amount.
    fn require_paired_transfer(&self) -> BigUint {
        require!(!self.asset_id().is_empty(), ERR_ASSET_NOT_CONFIGURED);

        require!(
            self.call_value().all_esdt_transfers().len() == 1,
            ERR_TRANSFER_MISMATCH
        );

        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.asset_id().get() && payment.token_nonce == 0,
            ERR_TRANSFER_MISMATCH
        );
        payment.amount.clone()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getInfo)]
    fn get_info(&self, account: &ManagedAddress) -> MultiValue3<BigUint, Tier, BigUint> {
        let position = self.load_position(account);
        (position.staked_amount, position.tier, position.pending_reward).into()
    }

    #[view(getStakePosition)]
    fn get_stake_position(&self, account: &ManagedAddress) -> StakePosition<Self::Api> {
        self.load_position(account)
    }

    #[view(getPendingRewards)]
    fn get_pending_rewards(&self, account: &ManagedAddress) -> BigUint {
        self.preview_pending(&self.load_position(account))
    }

    #[view(getPoolState)]
    fn get_pool_state(&self) -> PoolState<Self::Api> {
        PoolState {
            total_staked: self.total_staked().get(),
            reward_rate: self.reward_rate().get(),
            last_update_time: self.last_update_time().get(),
            acc_reward_per_unit: self.acc_reward_per_unit().get(),
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("stake")]
    fn stake_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] amount: &BigUint,
        tier: Tier,
    );

    #[event("unstake")]
    fn unstake_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] amount: &BigUint,
        tier: Tier,
    );

    #[event("claimRewards")]
    fn claim_rewards_event(&self, #[indexed] account: &ManagedAddress, amount: &BigUint);

    #[event("optIn")]
    fn opt_in_event(&self, #[indexed] account: &ManagedAddress);

    #[event("paramsUpdated")]
    fn params_updated_event(&self, #[indexed] asset_id: &TokenIdentifier, reward_rate: &BigUint);

    #[event("stakingToggled")]
    fn staking_toggled_event(&self, enabled: bool);

    #[event("rewardsFunded")]
    fn rewards_funded_event(&self, #[indexed] funder: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(isStakingEnabled)]
    #[storage_mapper("stakingEnabled")]
    fn staking_enabled(&self) -> SingleValueMapper<bool>;

    #[view(getAssetId)]
    #[storage_mapper("assetId")]
    fn asset_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("rewardRate")]
    fn reward_rate(&self) -> SingleValueMapper<BigUint>;

    // ── Pool state ──

    #[view(getTotalStaked)]
    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("lastUpdateTime")]
    fn last_update_time(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("accRewardPerUnit")]
    fn acc_reward_per_unit(&self) -> SingleValueMapper<BigUint>;

    #[view(getRewardReserve)]
    #[storage_mapper("rewardReserve")]
    fn reward_reserve(&self) -> SingleValueMapper<BigUint>;
}
