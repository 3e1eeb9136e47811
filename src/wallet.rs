multiversx_sc::imports!();

use crate::errors::VotingError;

/// EGLD held by the contract on behalf of each principal and not yet staked.
/// Staking debits this balance; anything left over can be withdrawn.
#[multiversx_sc::module]
pub trait WalletModule: crate::storage::StorageModule + crate::events::EventsModule {
    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        self.credit(&caller, &payment);
        self.deposit_event(&caller, &payment);
    }

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        if let Err(err) = self.try_debit(&caller, &amount) {
            sc_panic!(err.message());
        }

        self.send().direct_egld(&caller, &amount);
        self.withdraw_event(&caller, &amount);
    }

    fn credit(&self, user: &ManagedAddress, amount: &BigUint) {
        if *amount > 0u64 {
            self.available_balance(user).update(|balance| *balance += amount);
        }
    }

    /// Leaves the balance untouched on failure.
    fn try_debit(&self, user: &ManagedAddress, amount: &BigUint) -> Result<(), VotingError> {
        let available = self.available_balance(user).get();
        if available < *amount {
            return Err(VotingError::InsufficientFunds);
        }

        self.available_balance(user).set(&available - amount);
        Ok(())
    }

    #[view(getAvailableBalance)]
    fn get_available_balance(&self, user: &ManagedAddress) -> BigUint {
        self.available_balance(user).get()
    }
}
