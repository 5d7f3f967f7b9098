multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal Status — lifecycle states
// Open moves to Passed or Rejected exactly once, at or after end_time.
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Accepting ballots until end_time.
    Open,
    /// Quorum reached and for > against.
    Passed,
    /// Below quorum, or against >= for.
    Rejected,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub title: ManagedBuffer<M>,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
    pub created_at: u64,
    pub end_time: u64,
    pub status: ProposalStatus,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn total_votes(&self) -> BigUint<M> {
        &self.votes_for + &self.votes_against
    }
}
