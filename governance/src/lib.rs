#![no_std]

multiversx_sc::imports!();

pub mod types;

use cbd_common::errors::*;
use types::{Proposal, ProposalStatus};

// ============================================================
// Constants
// ============================================================

/// Voting window: 7 days in seconds
pub const VOTING_PERIOD: u64 = 604_800;

/// Minimum voting power needed to cast a ballot, until reconfigured
pub const DEFAULT_MIN_VOTING_POWER: u64 = 1_000_000;

/// Minimum combined for + against weight for a binding outcome
pub const DEFAULT_QUORUM: u64 = 10_000_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait GovernanceRegister: cbd_common::admin::AdminModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        self.init_admin();
        self.voting_enabled().set(true);
        self.min_voting_power()
            .set(BigUint::from(DEFAULT_MIN_VOTING_POWER));
        self.quorum_min().set(BigUint::from(DEFAULT_QUORUM));
        self.proposal_count().set(0u64);
        self.active_proposals().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // Admin only. Voting opens immediately for VOTING_PERIOD.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, title: ManagedBuffer) -> u64 {
        self.require_admin();

        let proposal_id = self.proposal_count().get() + 1u64;
        let timestamp = self.blockchain().get_block_timestamp();

        let proposal = Proposal {
            id: proposal_id,
            title,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            created_at: timestamp,
            end_time: timestamp + VOTING_PERIOD,
            status: ProposalStatus::Open,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);
        self.active_proposals().update(|active| *active += 1);

        self.proposal_created_event(proposal_id, &proposal.title, proposal.end_time);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // Weighted by the caller's voting power at the moment of
    // voting. One ballot per account per proposal, final.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        require!(self.voting_enabled().get(), ERR_VOTING_DISABLED);
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );

        let caller = self.blockchain().get_caller();
        let weight = self.voting_power(&caller).get();
        require!(
            weight >= self.min_voting_power().get(),
            ERR_INSUFFICIENT_VOTING_POWER
        );

        let mut proposal = self.proposals(proposal_id).get();
        require!(
            proposal.status == ProposalStatus::Open,
            ERR_PROPOSAL_NOT_OPEN
        );

        let now = self.blockchain().get_block_timestamp();
        require!(now < proposal.end_time, ERR_VOTING_CLOSED);

        // The receipt is write-once: a second insert for the same key fails.
        require!(
            self.vote_receipts(proposal_id).insert(caller.clone()),
            ERR_ALREADY_VOTED
        );

        if support {
            proposal.votes_for += &weight;
        } else {
            proposal.votes_against += &weight;
        }

        self.proposals(proposal_id).set(&proposal);
        self.total_votes(&caller).update(|votes| *votes += 1);

        self.vote_event(proposal_id, &caller, support, &weight);
    }

    // ========================================================
    // ENDPOINT: finalizeProposal
    // Anyone may call once the voting window has closed.
    // ========================================================

    #[endpoint(finalizeProposal)]
    fn finalize_proposal(&self, proposal_id: u64) -> ProposalStatus {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );

        let mut proposal = self.proposals(proposal_id).get();

        let now = self.blockchain().get_block_timestamp();
        require!(now >= proposal.end_time, ERR_PROPOSAL_STILL_ACTIVE);
        require!(
            proposal.status == ProposalStatus::Open,
            ERR_ALREADY_FINALIZED
        );

        proposal.status = self.tally(&proposal);
        self.proposals(proposal_id).set(&proposal);
        self.active_proposals().update(|active| *active -= 1);

        self.proposal_finalized_event(proposal_id, proposal.status);

        proposal.status
    }

    /// Below quorum is rejected whatever the split; ties reject.
    fn tally(&self, proposal: &Proposal<Self::Api>) -> ProposalStatus {
        if proposal.total_votes() < self.quorum_min().get() {
            return ProposalStatus::Rejected;
        }
        if proposal.votes_for > proposal.votes_against {
            ProposalStatus::Passed
        } else {
            ProposalStatus::Rejected
        }
    }

    // ========================================================
    // ADMIN: configuration and voting power bookkeeping
    // ========================================================

    #[endpoint(setQuorum)]
    fn set_quorum(&self, value: BigUint) {
        self.require_admin();
        self.quorum_min().set(&value);
        self.quorum_updated_event(&value);
    }

    #[endpoint(setMinVotingPower)]
    fn set_min_voting_power(&self, value: BigUint) {
        self.require_admin();
        self.min_voting_power().set(&value);
        self.min_voting_power_updated_event(&value);
    }

    #[endpoint(toggleVoting)]
    fn toggle_voting(&self) {
        self.require_admin();
        let enabled = !self.voting_enabled().get();
        self.voting_enabled().set(enabled);
        self.voting_toggled_event(enabled);
    }

    /// Power is read live by `vote`, not snapshotted per proposal, so an
    /// update lands on every proposal the account has not voted on yet.
    #[endpoint(updateVotingPower)]
    fn update_voting_power(&self, account: ManagedAddress, value: BigUint) {
        self.require_admin();
        self.voting_power(&account).set(&value);
        self.voting_power_updated_event(&account, &value);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, id: u64) -> Proposal<Self::Api> {
        require!(!self.proposals(id).is_empty(), ERR_PROPOSAL_NOT_FOUND);
        self.proposals(id).get()
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: u64, account: &ManagedAddress) -> bool {
        self.vote_receipts(proposal_id).contains(account)
    }

    #[view(getProposalCounts)]
    fn get_proposal_counts(&self) -> MultiValue2<u64, u64> {
        (self.proposal_count().get(), self.active_proposals().get()).into()
    }

    #[view(getGovernanceConfig)]
    fn get_governance_config(&self) -> MultiValue4<bool, BigUint, BigUint, u64> {
        (
            self.voting_enabled().get(),
            self.min_voting_power().get(),
            self.quorum_min().get(),
            VOTING_PERIOD,
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] title: &ManagedBuffer,
        end_time: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("proposalFinalized")]
    fn proposal_finalized_event(&self, #[indexed] proposal_id: u64, status: ProposalStatus);

    #[event("quorumUpdated")]
    fn quorum_updated_event(&self, quorum: &BigUint);

    #[event("minVotingPowerUpdated")]
    fn min_voting_power_updated_event(&self, min_voting_power: &BigUint);

    #[event("votingToggled")]
    fn voting_toggled_event(&self, enabled: bool);

    #[event("votingPowerUpdated")]
    fn voting_power_updated_event(&self, #[indexed] account: &ManagedAddress, power: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("votingEnabled")]
    fn voting_enabled(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("minVotingPower")]
    fn min_voting_power(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("quorumMin")]
    fn quorum_min(&self) -> SingleValueMapper<BigUint>;

    // ── Proposals ──

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("activeProposals")]
    fn active_proposals(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voteReceipts")]
    fn vote_receipts(&self, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    // ── Per-account ──

    #[view(getVotingPower)]
    #[storage_mapper("votingPower")]
    fn voting_power(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getTotalVotes)]
    #[storage_mapper("totalVotes")]
    fn total_votes(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;
}
