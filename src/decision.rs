multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_VOTE_OPTION, ERR_OWNER_ONLY};
use crate::types::VoteOption;

#[multiversx_sc::module]
pub trait DecisionModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: updateAiDecision
    // Owner-only: the deployer recorded at init.
    // ========================================================

    #[endpoint(updateAiDecision)]
    fn update_ai_decision(&self, option: ManagedBuffer) -> bool {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_OWNER_ONLY);

        let decision = match VoteOption::from_buffer(&option) {
            Some(decision) => decision,
            None => sc_panic!(ERR_INVALID_VOTE_OPTION),
        };

        let previous = self.ai_decision().get();
        self.ai_decision().set(decision);

        self.ai_decision_updated_event(&previous, &decision);
        true
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getAiDecision)]
    fn get_ai_decision(&self) -> ManagedBuffer {
        self.ai_decision().get().to_buffer()
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }
}
