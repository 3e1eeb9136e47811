multiversx_sc::imports!();

use crate::types::{VoteOption, VoteRecord};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Access control ──

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Wallet ──

    #[storage_mapper("availableBalance")]
    fn available_balance(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    // ── Stake registry ──

    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("userStake")]
    fn user_stake(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    // ── Vote tally ──

    #[storage_mapper("userVote")]
    fn user_vote(&self, user: &ManagedAddress) -> SingleValueMapper<VoteRecord<Self::Api>>;

    #[storage_mapper("voteTotal")]
    fn vote_total(&self, option: &VoteOption) -> SingleValueMapper<BigUint>;

    // ── Decision ──

    #[storage_mapper("aiDecision")]
    fn ai_decision(&self) -> SingleValueMapper<VoteOption>;
}
