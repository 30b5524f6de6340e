use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type.
/// Ids are allocated from a monotonic counter, so the fixed-width numeric id
/// is used instead of a byte vector.
pub type ContractTokenId = TokenIdU64;

/// Wrapping the custom errors in a type with the standard token errors.
pub type ContractError = Cis2Error<CustomContractError>;
