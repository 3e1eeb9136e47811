multiversx_sc::imports!();

use crate::types::VoteOption;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("deposit")]
    fn deposit_event(&self, #[indexed] user: &ManagedAddress, amount: &BigUint);

    #[event("withdraw")]
    fn withdraw_event(&self, #[indexed] user: &ManagedAddress, amount: &BigUint);

    #[event("stake")]
    fn stake_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] amount: &BigUint,
        total_staked: &BigUint,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] option: &VoteOption,
        weight: &BigUint,
    );

    #[event("aiDecisionUpdated")]
    fn ai_decision_updated_event(
        &self,
        #[indexed] previous: &VoteOption,
        #[indexed] decision: &VoteOption,
    );
}
