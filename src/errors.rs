// Error messages carry the numeric code as prefix so off-chain consumers can
// match on it.

pub const ERR_OWNER_ONLY: &str = "100: owner only";
pub const ERR_INSUFFICIENT_FUNDS: &str = "101: not enough funds";
pub const ERR_NO_STAKE: &str = "102: no stake";
pub const ERR_INVALID_VOTE_OPTION: &str = "103: invalid vote option";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VotingError {
    OwnerOnly = 100,
    InsufficientFunds = 101,
    NoStake = 102,
    InvalidVoteOption = 103,
}

impl VotingError {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn message(self) -> &'static str {
        match self {
            VotingError::OwnerOnly => ERR_OWNER_ONLY,
            VotingError::InsufficientFunds => ERR_INSUFFICIENT_FUNDS,
            VotingError::NoStake => ERR_NO_STAKE,
            VotingError::InvalidVoteOption => ERR_INVALID_VOTE_OPTION,
        }
    }
}
