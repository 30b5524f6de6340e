use super::*;

/// Royalty configuration, validated and fixed at init.
#[derive(Debug, Clone, Copy, Serialize, SchemaType)]
pub struct Royalty {
    /// Account the royalty share is owed to.
    pub beneficiary: AccountAddress,
    /// Royalty rate applied to a sale price.
    pub rate: BasisPoints,
}

/// The contract state.
///
/// Each registry concern is its own map. A token exists iff it has an entry
/// in `owners`; balances are maintained in lock-step with `owners` and never
/// recomputed by scanning.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Administrative ownership, transferred in two phases. Unrelated to
    /// per-token ownership.
    pub admin: Admin,
    /// Token id -> current owner.
    pub owners: StateMap<ContractTokenId, Address, S>,
    /// Token id -> the single account approved to transfer that token.
    /// Cleared on every ownership change.
    pub approvals: StateMap<ContractTokenId, Address, S>,
    /// Owner -> addresses enabled as operators for all of the owner's tokens.
    pub operators: StateMap<Address, StateSet<Address, S>, S>,
    /// Address -> number of tokens currently owned.
    pub balances: StateMap<Address, u64, S>,
    /// Token id -> token URI.
    pub uris: StateMap<ContractTokenId, String, S>,
    /// The id the next minted token will get. Starts at 1.
    pub next_token_id: u64,
    /// Royalty configuration.
    pub royalty: Royalty,
    /// When true, only the admin may mint.
    pub restrict_mint: bool,
    /// Standards with third-party implementors, overriding the built-in
    /// supported list.
    pub implementors: StateMap<StandardIdentifierOwned, Vec<ContractAddress>, S>,
}

/// Snapshot of a single token, for off-chain inspection.
#[derive(Debug, Serialize, PartialEq, Eq, SchemaType)]
pub struct TokenView {
    pub owner: Address,
    pub approved: Option<Address>,
    pub uri: Option<String>,
}
