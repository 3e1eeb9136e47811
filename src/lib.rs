#![no_std]

multiversx_sc::imports!();

pub mod decision;
pub mod errors;
pub mod events;
pub mod stake;
pub mod storage;
pub mod tally;
pub mod types;
pub mod wallet;

use types::VoteOption;

// ============================================================
// Contract
// ============================================================

/// Crowd-sourced trading signal: stakers vote buy/sell/hold with
/// their stake as weight, and the owner publishes the AI decision.
#[multiversx_sc::contract]
pub trait CrowdWisdomBot:
    storage::StorageModule
    + events::EventsModule
    + wallet::WalletModule
    + stake::StakeModule
    + tally::TallyModule
    + decision::DecisionModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        let deployer = self.blockchain().get_caller();
        self.owner().set(&deployer);
        self.ai_decision().set(VoteOption::Hold);
        self.total_staked().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}
}
