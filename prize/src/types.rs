multiversx_sc::derive_imports!();

// ============================================================
// Prize Info — per-account claim record plus the global counter
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PrizeInfo {
    pub total_claims: u64,
    pub last_claim_time: u64,
    pub total_prizes_claimed: u64,
}
