multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_VOTE_OPTION, ERR_NO_STAKE};
use crate::types::{VoteOption, VoteRecord};

#[multiversx_sc::module]
pub trait TallyModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: vote
    // Weighted by the caller's full stake. Re-voting moves the
    // weight to the new option instead of adding it again.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, option: ManagedBuffer) -> bool {
        let caller = self.blockchain().get_caller();

        let weight = self.user_stake(&caller).get();
        require!(weight > 0u64, ERR_NO_STAKE);

        let option = match VoteOption::from_buffer(&option) {
            Some(option) => option,
            None => sc_panic!(ERR_INVALID_VOTE_OPTION),
        };

        let previous = self.current_vote(&caller);
        self.move_weight(previous, option, &weight);
        self.user_vote(&caller).set(VoteRecord {
            voter: caller.clone(),
            option,
        });

        self.vote_event(&caller, &option, &weight);
        true
    }

    // ========================================================
    // INTERNAL: tally bookkeeping
    // Tally of an option == sum of stakes of its current voters.
    // ========================================================

    fn current_vote(&self, user: &ManagedAddress) -> Option<VoteOption> {
        let record = self.user_vote(user);
        if record.is_empty() {
            None
        } else {
            Some(record.get().option)
        }
    }

    /// Takes `weight` off `from` (if any) and puts it on `to`.
    fn move_weight(&self, from: Option<VoteOption>, to: VoteOption, weight: &BigUint) {
        if from == Some(to) {
            return;
        }
        if let Some(previous) = from {
            self.vote_total(&previous).update(|total| *total -= weight);
        }
        self.add_weight(to, weight);
    }

    fn add_weight(&self, option: VoteOption, weight: &BigUint) {
        self.vote_total(&option).update(|total| *total += weight);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Unknown tokens have no tally and read as zero.
    #[view(getVoteTotal)]
    fn get_vote_total(&self, option: ManagedBuffer) -> BigUint {
        match VoteOption::from_buffer(&option) {
            Some(option) => self.vote_total(&option).get(),
            None => BigUint::zero(),
        }
    }

    /// Returns (buy, sell, hold).
    #[view(getVoteTotals)]
    fn get_vote_totals(&self) -> MultiValue3<BigUint, BigUint, BigUint> {
        (
            self.vote_total(&VoteOption::Buy).get(),
            self.vote_total(&VoteOption::Sell).get(),
            self.vote_total(&VoteOption::Hold).get(),
        )
            .into()
    }

    /// Empty result if the user never voted.
    #[view(getUserVote)]
    fn get_user_vote(&self, user: &ManagedAddress) -> OptionalValue<ManagedBuffer> {
        match self.current_vote(user) {
            Some(option) => OptionalValue::Some(option.to_buffer()),
            None => OptionalValue::None,
        }
    }
}
