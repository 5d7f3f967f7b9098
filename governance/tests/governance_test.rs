// Whitebox tests for the governance register. Voting power is plain
// bookkeeping set by the admin, so every scenario runs on one contract.

use cbd_common::errors::*;
use cbd_governance::types::ProposalStatus;
use cbd_governance::{GovernanceRegister, VOTING_PERIOD};
use multiversx_sc::types::Address;
use multiversx_sc_scenario::{
    api::DebugApi, managed_address, managed_biguint, managed_buffer, rust_biguint,
    whitebox_legacy::*,
};

const WASM_PATH: &str = "output/cbd-governance.wasm";
const OPENED_AT: u64 = 1_700_000_000;

struct GovernanceSetup<Builder>
where
    Builder: 'static + Copy + Fn() -> cbd_governance::ContractObj<DebugApi>,
{
    b_mock: BlockchainStateWrapper,
    admin: Address,
    alice: Address,
    bob: Address,
    sc: ContractObjWrapper<cbd_governance::ContractObj<DebugApi>, Builder>,
}

impl<Builder> GovernanceSetup<Builder>
where
    Builder: 'static + Copy + Fn() -> cbd_governance::ContractObj<DebugApi>,
{
    fn new(builder: Builder) -> Self {
        let zero = rust_biguint!(0);
        let mut b_mock = BlockchainStateWrapper::new();
        let admin = b_mock.create_user_account(&zero);
        let alice = b_mock.create_user_account(&zero);
        let bob = b_mock.create_user_account(&zero);
        b_mock.set_block_timestamp(OPENED_AT);

        let sc = b_mock.create_sc_account(&zero, Some(&admin), builder, WASM_PATH);
        b_mock
            .execute_tx(&admin, &sc, &zero, |sc| {
                sc.init();
            })
            .assert_ok();

        GovernanceSetup {
            b_mock,
            admin,
            alice,
            bob,
            sc,
        }
    }

    fn create_proposal(&mut self, title: &[u8]) -> u64 {
        let admin = self.admin.clone();
        let mut proposal_id = 0u64;
        self.b_mock
            .execute_tx(&admin, &self.sc, &rust_biguint!(0), |sc| {
                proposal_id = sc.create_proposal(managed_buffer!(title));
            })
            .assert_ok();
        proposal_id
    }

    fn set_power(&mut self, account: &Address, power: u64) {
        let admin = self.admin.clone();
        self.b_mock
            .execute_tx(&admin, &self.sc, &rust_biguint!(0), |sc| {
                sc.update_voting_power(managed_address!(account), managed_biguint!(power));
            })
            .assert_ok();
    }

    fn vote(&mut self, voter: &Address, proposal_id: u64, support: bool) {
        self.b_mock
            .execute_tx(voter, &self.sc, &rust_biguint!(0), |sc| {
                sc.vote(proposal_id, support);
            })
            .assert_ok();
    }

    fn finalize(&mut self, proposal_id: u64, expected: ProposalStatus) {
        let bob = self.bob.clone();
        self.b_mock
            .execute_tx(&bob, &self.sc, &rust_biguint!(0), |sc| {
                assert_eq!(sc.finalize_proposal(proposal_id), expected);
            })
            .assert_ok();
    }

    fn check_tally(&mut self, proposal_id: u64, votes_for: u64, votes_against: u64) {
        self.b_mock
            .execute_query(&self.sc, |sc| {
                let proposal = sc.get_proposal(proposal_id);
                assert_eq!(proposal.votes_for, managed_biguint!(votes_for));
                assert_eq!(proposal.votes_against, managed_biguint!(votes_against));
            })
            .assert_ok();
    }
}

#[test]
fn proposal_below_quorum_is_rejected() {
    let mut setup = GovernanceSetup::new(cbd_governance::contract_obj);
    let alice = setup.alice.clone();
    let bob = setup.bob.clone();

    let proposal_id = setup.create_proposal(b"Add Gold tier perks");
    assert_eq!(proposal_id, 1);

    setup.set_power(&alice, 4_000_000);
    setup.set_power(&bob, 3_000_000);
    setup.vote(&alice, proposal_id, true);
    setup.vote(&bob, proposal_id, false);
    setup.check_tally(proposal_id, 4_000_000, 3_000_000);

    setup.b_mock.set_block_timestamp(OPENED_AT + VOTING_PERIOD);
    setup.finalize(proposal_id, ProposalStatus::Rejected);
}

#[test]
fn proposal_with_quorum_and_majority_passes() {
    let mut setup = GovernanceSetup::new(cbd_governance::contract_obj);
    let alice = setup.alice.clone();
    let bob = setup.bob.clone();

    let proposal_id = setup.create_proposal(b"Lower prize cooldown");
    setup.set_power(&alice, 8_000_000);
    setup.set_power(&bob, 3_000_000);
    setup.vote(&alice, proposal_id, true);
    setup.vote(&bob, proposal_id, false);

    setup.b_mock.set_block_timestamp(OPENED_AT + VOTING_PERIOD + 1);
    setup.finalize(proposal_id, ProposalStatus::Passed);

    setup
        .b_mock
        .execute_query(&setup.sc, |sc| {
            assert_eq!(sc.get_proposal(proposal_id).status, ProposalStatus::Passed);
            let (total, active) = sc.get_proposal_counts().into_tuple();
            assert_eq!(total, 1);
            assert_eq!(active, 0);
        })
        .assert_ok();
}

#[test]
fn tied_vote_is_rejected() {
    let mut setup = GovernanceSetup::new(cbd_governance::contract_obj);
    let alice = setup.alice.clone();
    let bob = setup.bob.clone();

    let proposal_id = setup.create_proposal(b"Split treasury");
    setup.set_power(&alice, 6_000_000);
    setup.set_power(&bob, 6_000_000);
    setup.vote(&alice, proposal_id, true);
    setup.vote(&bob, proposal_id, false);

    setup.b_mock.set_block_timestamp(OPENED_AT + VOTING_PERIOD);
    setup.finalize(proposal_id, ProposalStatus::Rejected);
}

#[test]
fn second_ballot_is_refused() {
    let mut setup = GovernanceSetup::new(cbd_governance::contract_obj);
    let alice = setup.alice.clone();

    let proposal_id = setup.create_proposal(b"Replay");
    setup.set_power(&alice, 5_000_000);
    setup.vote(&alice, proposal_id, true);

    for support in [true, false] {
        setup
            .b_mock
            .execute_tx(&alice, &setup.sc, &rust_biguint!(0), |sc| {
                sc.vote(proposal_id, support);
            })
            .assert_user_error(ERR_ALREADY_VOTED);
    }

    setup.check_tally(proposal_id, 5_000_000, 0);
    setup
        .b_mock
        .execute_query(&setup.sc, |sc| {
            assert!(sc.has_voted(proposal_id, &managed_address!(&alice)));
            assert_eq!(sc.total_votes(&managed_address!(&alice)).get(), 1);
        })
        .assert_ok();
}

#[test]
fn receipts_are_per_proposal() {
    let mut setup = GovernanceSetup::new(cbd_governance::contract_obj);
    let alice = setup.alice.clone();

    let first = setup.create_proposal(b"First");
    let second = setup.create_proposal(b"Second");
    assert_eq!(second, first + 1);

    setup.set_power(&alice, 2_000_000);
    setup.vote(&alice, first, true);
    setup.vote(&alice, second, false);

    setup.check_tally(first, 2_000_000, 0);
    setup.check_tally(second, 0, 2_000_000);
    setup
        .b_mock
        .execute_query(&setup.sc, |sc| {
            assert_eq!(sc.total_votes(&managed_address!(&alice)).get(), 2);
        })
        .assert_ok();
}

#[test]
fn voting_window_is_enforced() {
    let mut setup = GovernanceSetup::new(cbd_governance::contract_obj);
    let alice = setup.alice.clone();
    let bob = setup.bob.clone();

    let proposal_id = setup.create_proposal(b"Deadline");
    setup.set_power(&alice, 2_000_000);
    setup.set_power(&bob, 2_000_000);

    setup
        .b_mock
        .execute_tx(&bob, &setup.sc, &rust_biguint!(0), |sc| {
            sc.finalize_proposal(proposal_id);
        })
        .assert_user_error(ERR_PROPOSAL_STILL_ACTIVE);

    setup.b_mock.set_block_timestamp(OPENED_AT + VOTING_PERIOD - 1);
    setup.vote(&alice, proposal_id, true);

    setup.b_mock.set_block_timestamp(OPENED_AT + VOTING_PERIOD);
    setup
        .b_mock
        .execute_tx(&bob, &setup.sc, &rust_biguint!(0), |sc| {
            sc.vote(proposal_id, true);
        })
        .assert_user_error(ERR_VOTING_CLOSED);

    setup.finalize(proposal_id, ProposalStatus::Rejected);

    setup
        .b_mock
        .execute_tx(&bob, &setup.sc, &rust_biguint!(0), |sc| {
            sc.finalize_proposal(proposal_id);
        })
        .assert_user_error(ERR_ALREADY_FINALIZED);

    setup
        .b_mock
        .execute_tx(&bob, &setup.sc, &rust_biguint!(0), |sc| {
            sc.vote(proposal_id, false);
        })
        .assert_user_error(ERR_PROPOSAL_NOT_OPEN);
}

#[test]
fn ballot_requires_power_and_enabled_voting() {
    let mut setup = GovernanceSetup::new(cbd_governance::contract_obj);
    let admin = setup.admin.clone();
    let alice = setup.alice.clone();
    let bob = setup.bob.clone();

    let proposal_id = setup.create_proposal(b"Gatekeeping");
    setup.set_power(&alice, 999_999);

    setup
        .b_mock
        .execute_tx(&alice, &setup.sc, &rust_biguint!(0), |sc| {
            sc.vote(proposal_id, true);
        })
        .assert_user_error(ERR_INSUFFICIENT_VOTING_POWER);

    setup
        .b_mock
        .execute_tx(&bob, &setup.sc, &rust_biguint!(0), |sc| {
            sc.vote(proposal_id + 1, true);
        })
        .assert_user_error(ERR_PROPOSAL_NOT_FOUND);

    setup
        .b_mock
        .execute_tx(&admin, &setup.sc, &rust_biguint!(0), |sc| {
            sc.toggle_voting();
        })
        .assert_ok();
    setup.set_power(&alice, 1_000_000);
    setup
        .b_mock
        .execute_tx(&alice, &setup.sc, &rust_biguint!(0), |sc| {
            sc.vote(proposal_id, true);
        })
        .assert_user_error(ERR_VOTING_DISABLED);

    setup.check_tally(proposal_id, 0, 0);
}

#[test]
fn power_is_read_when_voting() {
    let mut setup = GovernanceSetup::new(cbd_governance::contract_obj);
    let alice = setup.alice.clone();

    let proposal_id = setup.create_proposal(b"Live power");
    setup.set_power(&alice, 1_000_000);

    // Raised after the proposal opened; the ballot still carries the new value.
    setup.b_mock.set_block_timestamp(OPENED_AT + 60);
    setup.set_power(&alice, 12_000_000);
    setup.vote(&alice, proposal_id, true);
    setup.check_tally(proposal_id, 12_000_000, 0);

    setup.b_mock.set_block_timestamp(OPENED_AT + VOTING_PERIOD);
    setup.finalize(proposal_id, ProposalStatus::Passed);
}

#[test]
fn quorum_is_configurable() {
    let mut setup = GovernanceSetup::new(cbd_governance::contract_obj);
    let admin = setup.admin.clone();
    let alice = setup.alice.clone();

    setup
        .b_mock
        .execute_tx(&alice, &setup.sc, &rust_biguint!(0), |sc| {
            sc.set_quorum(managed_biguint!(1));
        })
        .assert_user_error(ERR_UNAUTHORIZED);

    setup
        .b_mock
        .execute_tx(&admin, &setup.sc, &rust_biguint!(0), |sc| {
            sc.set_quorum(managed_biguint!(2_000_000));
        })
        .assert_ok();

    let proposal_id = setup.create_proposal(b"Small quorum");
    setup.set_power(&alice, 2_000_000);
    setup.vote(&alice, proposal_id, true);

    setup.b_mock.set_block_timestamp(OPENED_AT + VOTING_PERIOD);
    setup.finalize(proposal_id, ProposalStatus::Passed);
}

#[test]
fn admin_only_bookkeeping() {
    let mut setup = GovernanceSetup::new(cbd_governance::contract_obj);
    let alice = setup.alice.clone();

    setup
        .b_mock
        .execute_tx(&alice, &setup.sc, &rust_biguint!(0), |sc| {
            sc.create_proposal(managed_buffer!(b"Not mine to make"));
        })
        .assert_user_error(ERR_UNAUTHORIZED);

    setup
        .b_mock
        .execute_tx(&alice, &setup.sc, &rust_biguint!(0), |sc| {
            sc.update_voting_power(managed_address!(&alice), managed_biguint!(50_000_000));
        })
        .assert_user_error(ERR_UNAUTHORIZED);

    setup
        .b_mock
        .execute_query(&setup.sc, |sc| {
            assert_eq!(sc.voting_power(&managed_address!(&alice)).get(), managed_biguint!(0));
            let (total, active) = sc.get_proposal_counts().into_tuple();
            assert_eq!(total, 0);
            assert_eq!(active, 0);
        })
        .assert_ok();
}

#[test]
fn admin_tunes_power_floor_and_voting_switch() {
    let mut setup = GovernanceSetup::new(cbd_governance::contract_obj);
    let admin = setup.admin.clone();
    let alice = setup.alice.clone();

    setup
        .b_mock
        .execute_tx(&alice, &setup.sc, &rust_biguint!(0), |sc| {
            sc.set_min_voting_power(managed_biguint!(1));
        })
        .assert_user_error(ERR_UNAUTHORIZED);
    setup
        .b_mock
        .execute_tx(&alice, &setup.sc, &rust_biguint!(0), |sc| {
            sc.toggle_voting();
        })
        .assert_user_error(ERR_UNAUTHORIZED);

    setup
        .b_mock
        .execute_tx(&admin, &setup.sc, &rust_biguint!(0), |sc| {
            sc.set_min_voting_power(managed_biguint!(500));
            sc.toggle_voting();
        })
        .assert_ok();
    setup
        .b_mock
        .execute_query(&setup.sc, |sc| {
            let (enabled, min_power, _quorum, period) = sc.get_governance_config().into_tuple();
            assert!(!enabled);
            assert_eq!(min_power, managed_biguint!(500));
            assert_eq!(period, VOTING_PERIOD);
        })
        .assert_ok();

    // Switched back on, the lowered floor admits a small holder.
    setup
        .b_mock
        .execute_tx(&admin, &setup.sc, &rust_biguint!(0), |sc| {
            sc.toggle_voting();
        })
        .assert_ok();
    let proposal_id = setup.create_proposal(b"Low floor");
    setup.set_power(&alice, 500);
    setup.vote(&alice, proposal_id, true);
    setup.check_tally(proposal_id, 500, 0);
}
