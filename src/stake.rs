multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait StakeModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::wallet::WalletModule
    + crate::tally::TallyModule
{
    // ========================================================
    // ENDPOINT: stake
    // Any attached EGLD is credited first, then the stake is
    // debited from the caller's available balance.
    // ========================================================

    #[endpoint(stake)]
    #[payable("EGLD")]
    fn stake(&self, amount: BigUint) -> bool {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        self.credit(&caller, &payment);
        if let Err(err) = self.try_debit(&caller, &amount) {
            sc_panic!(err.message());
        }

        self.user_stake(&caller).update(|stake| *stake += &amount);
        self.total_staked().update(|total| *total += &amount);

        // A standing vote carries the whole stake, including this top-up.
        if let Some(option) = self.current_vote(&caller) {
            self.add_weight(option, &amount);
        }

        self.stake_event(&caller, &amount, &self.total_staked().get());
        true
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTotalStaked)]
    fn get_total_staked(&self) -> BigUint {
        self.total_staked().get()
    }

    #[view(getUserStake)]
    fn get_user_stake(&self, user: &ManagedAddress) -> BigUint {
        self.user_stake(user).get()
    }
}
