// ============================================================
// Error messages — one per failure kind. Every failure aborts the
// whole transaction; the message is what the caller observes.
// ============================================================

pub const ERR_UNAUTHORIZED: &str = "Unauthorized";

// ── Feature switches ──
pub const ERR_STAKING_DISABLED: &str = "Staking disabled";
pub const ERR_VOTING_DISABLED: &str = "Voting disabled";
pub const ERR_CLAIMS_DISABLED: &str = "Claims disabled";

// ── Staking ──
pub const ERR_INSUFFICIENT_STAKE: &str = "Insufficient stake";
pub const ERR_TRANSFER_MISMATCH: &str = "Transfer mismatch";
// The ledger has no minimum beyond "more than zero", so this is also the
// failure for a zero-amount unstake.
pub const ERR_BELOW_MINIMUM_STAKE: &str = "Below minimum stake";
pub const ERR_CONFIGURATION_LOCKED: &str = "Configuration locked";
pub const ERR_ASSET_NOT_CONFIGURED: &str = "Asset not configured";
pub const ERR_INSUFFICIENT_REWARD_RESERVE: &str = "Insufficient reward reserve";

// ── Governance ──
pub const ERR_INSUFFICIENT_VOTING_POWER: &str = "Insufficient voting power";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal not found";
pub const ERR_PROPOSAL_NOT_OPEN: &str = "Proposal not open";
pub const ERR_VOTING_CLOSED: &str = "Voting closed";
pub const ERR_PROPOSAL_STILL_ACTIVE: &str = "Proposal still active";
pub const ERR_ALREADY_FINALIZED: &str = "Already finalized";

// ── Prize ──
pub const ERR_COOLDOWN_ACTIVE: &str = "Cooldown active";
pub const ERR_NOT_ELIGIBLE: &str = "Not eligible";
pub const ERR_STAKING_REFERENCE_NOT_SET: &str = "Staking reference not set";
