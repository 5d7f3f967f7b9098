#![no_std]

multiversx_sc::imports!();

pub mod types;

use cbd_common::errors::*;
use types::PrizeInfo;

// ============================================================
// Constants
// ============================================================

/// Minimum spacing between two claims by the same account: 24 hours
pub const CLAIM_COOLDOWN: u64 = 86_400;

/// Minimum stake on the referenced ledger, until reconfigured
pub const DEFAULT_MIN_STAKE: u64 = 10_000_000;

// ============================================================
// Contract
// ============================================================

/// Gates prize claims behind a stake held on a separate staking
/// contract and a per-account cooldown. Only the claim event is
/// recorded here; drawing and paying the prize happens off-contract.
#[multiversx_sc::contract]
pub trait PrizeGate:
    cbd_common::admin::AdminModule + cbd_common::stake_reader::StakeLedgerReaderModule
{
    #[init]
    fn init(&self) {
        self.init_admin();
        self.claims_enabled().set(true);
        self.min_stake_required()
            .set(BigUint::from(DEFAULT_MIN_STAKE));
        self.total_prizes_claimed().set(0u64);
        self.prize_pool_balance().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: claimPrize
    // ========================================================

    #[endpoint(claimPrize)]
    fn claim_prize(&self) {
        require!(self.claims_enabled().get(), ERR_CLAIMS_DISABLED);
        require!(
            !self.staking_contract().is_empty(),
            ERR_STAKING_REFERENCE_NOT_SET
        );

        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        require!(
            now > self.last_claim_time(&caller).get() + CLAIM_COOLDOWN,
            ERR_COOLDOWN_ACTIVE
        );
        require!(self.is_eligible(&caller), ERR_NOT_ELIGIBLE);

        self.total_claims(&caller).update(|claims| *claims += 1);
        self.last_claim_time(&caller).set(now);
        self.total_prizes_claimed().update(|total| *total += 1);

        self.prize_claimed_event(&caller, self.total_claims(&caller).get(), now);
    }

    // ========================================================
    // ENDPOINT: fundPool
    // ========================================================

    #[payable("*")]
    #[endpoint(fundPool)]
    fn fund_pool(&self) {
        self.require_admin();
        require!(
            self.call_value().all_esdt_transfers().len() == 1,
            ERR_TRANSFER_MISMATCH
        );

        let payment = self.call_value().single_esdt();
        self.prize_pool_balance()
            .update(|balance| *balance += &payment.amount);

        self.prize_pool_funded_event(&payment.token_identifier, &payment.amount);
    }

    // ========================================================
    // ADMIN: configuration
    // ========================================================

    #[endpoint(toggleClaims)]
    fn toggle_claims(&self) {
        self.require_admin();
        let enabled = !self.claims_enabled().get();
        self.claims_enabled().set(enabled);
        self.claims_toggled_event(enabled);
    }

    #[endpoint(setStakingContract)]
    fn set_staking_contract(&self, staking_contract: ManagedAddress) {
        self.require_admin();
        self.staking_contract().set(&staking_contract);
        self.staking_reference_updated_event(&staking_contract);
    }

    #[endpoint(setMinStake)]
    fn set_min_stake(&self, min_stake: BigUint) {
        self.require_admin();
        self.min_stake_required().set(&min_stake);
        self.min_stake_updated_event(&min_stake);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    /// An account with no position on the staking contract is simply
    /// not eligible.
    #[view(isEligible)]
    fn is_eligible(&self, account: &ManagedAddress) -> bool {
        if self.staking_contract().is_empty() {
            return false;
        }
        match self.staked_amount_at(self.staking_contract().get(), account) {
            Some(staked_amount) => staked_amount >= self.min_stake_required().get(),
            None => false,
        }
    }

    #[view(getPrizeInfo)]
    fn get_prize_info(&self, account: &ManagedAddress) -> PrizeInfo {
        PrizeInfo {
            total_claims: self.total_claims(account).get(),
            last_claim_time: self.last_claim_time(account).get(),
            total_prizes_claimed: self.total_prizes_claimed().get(),
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("prizeClaimed")]
    fn prize_claimed_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] claim_number: u64,
        timestamp: u64,
    );

    #[event("prizePoolFunded")]
    fn prize_pool_funded_event(&self, #[indexed] token_id: &TokenIdentifier, amount: &BigUint);

    #[event("claimsToggled")]
    fn claims_toggled_event(&self, enabled: bool);

    #[event("stakingReferenceUpdated")]
    fn staking_reference_updated_event(&self, staking_contract: &ManagedAddress);

    #[event("minStakeUpdated")]
    fn min_stake_updated_event(&self, min_stake: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(areClaimsEnabled)]
    #[storage_mapper("claimsEnabled")]
    fn claims_enabled(&self) -> SingleValueMapper<bool>;

    #[view(getStakingContract)]
    #[storage_mapper("stakingContract")]
    fn staking_contract(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getMinStakeRequired)]
    #[storage_mapper("minStakeRequired")]
    fn min_stake_required(&self) -> SingleValueMapper<BigUint>;

    // ── Global counters ──

    #[storage_mapper("totalPrizesClaimed")]
    fn total_prizes_claimed(&self) -> SingleValueMapper<u64>;

    #[view(getPrizePoolBalance)]
    #[storage_mapper("prizePoolBalance")]
    fn prize_pool_balance(&self) -> SingleValueMapper<BigUint>;

    // ── Per-account ──

    #[storage_mapper("totalClaims")]
    fn total_claims(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("lastClaimTime")]
    fn last_claim_time(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;
}
