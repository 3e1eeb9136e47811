multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Longest accepted option token ("hold", "sell").
const MAX_TOKEN_LEN: usize = 4;

// ============================================================
// Vote Option — the three trading directions
// ============================================================

/// `Hold` is declared first so that an empty storage entry decodes to it.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteOption {
    Hold,
    Buy,
    Sell,
}

impl VoteOption {
    pub const ALL: [VoteOption; 3] = [VoteOption::Buy, VoteOption::Sell, VoteOption::Hold];

    /// Parses the wire token. Matching is exact and case-sensitive.
    pub fn from_token(token: &[u8]) -> Option<Self> {
        match token {
            b"buy" => Some(VoteOption::Buy),
            b"sell" => Some(VoteOption::Sell),
            b"hold" => Some(VoteOption::Hold),
            _ => None,
        }
    }

    pub fn from_buffer<M: ManagedTypeApi>(token: &ManagedBuffer<M>) -> Option<Self> {
        if token.len() > MAX_TOKEN_LEN {
            return None;
        }
        let mut bytes = [0u8; MAX_TOKEN_LEN];
        let loaded = token.load_to_byte_array(&mut bytes);
        Self::from_token(loaded)
    }

    pub fn as_token(&self) -> &'static [u8] {
        match self {
            VoteOption::Buy => b"buy",
            VoteOption::Sell => b"sell",
            VoteOption::Hold => b"hold",
        }
    }

    pub fn to_buffer<M: ManagedTypeApi>(&self) -> ManagedBuffer<M> {
        ManagedBuffer::from(self.as_token())
    }
}

// ============================================================
// Vote Record — a principal's standing vote
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub option: VoteOption,
}

#[cfg(test)]
mod tests {
    use super::VoteOption;

    #[test]
    fn parses_known_tokens() {
        assert_eq!(VoteOption::from_token(b"buy"), Some(VoteOption::Buy));
        assert_eq!(VoteOption::from_token(b"sell"), Some(VoteOption::Sell));
        assert_eq!(VoteOption::from_token(b"hold"), Some(VoteOption::Hold));
    }

    #[test]
    fn rejects_unknown_tokens() {
        let tokens: [&[u8]; 6] = [b"invalid", b"", b"BUY", b"buy ", b"hol", b"sells"];
        for token in tokens {
            assert_eq!(VoteOption::from_token(token), None);
        }
    }

    #[test]
    fn token_matches_parser() {
        for option in VoteOption::ALL {
            assert_eq!(VoteOption::from_token(option.as_token()), Some(option));
        }
    }
}
