use super::*;

/// Parameter for the `init` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct InitParams {
    /// Account receiving royalty payouts.
    pub royalty_beneficiary: AccountAddress,
    /// Royalty rate in basis points. Values above 10000 abort deployment.
    pub royalty_rate: u64,
    /// When true, only the contract admin may mint.
    pub restrict_mint: bool,
}

/// Parameter for the `mint` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct MintParams {
    /// Owner of the newly minted token.
    pub to: Address,
    /// Token URI, if any.
    pub uri: Option<String>,
}

/// Parameter for the `safeMint` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct SafeMintParams {
    /// Owner of the newly minted token.
    pub to: Address,
    /// Token URI, if any.
    pub uri: Option<String>,
    /// Payload forwarded to the receive hook when `to` is a contract.
    pub data: AdditionalData,
}

/// Parameter for the `transferFrom` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct TransferParams {
    /// Current owner of the token.
    pub from: Address,
    /// New owner of the token.
    pub to: Address,
    pub token_id: ContractTokenId,
}

/// Parameter for the `safeTransferFrom` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct SafeTransferParams {
    /// Current owner of the token.
    pub from: Address,
    /// New owner of the token.
    pub to: Address,
    pub token_id: ContractTokenId,
    /// Payload forwarded to the receive hook when `to` is a contract.
    pub data: AdditionalData,
}

/// Parameter for the `approve` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct ApproveParams {
    /// Account becoming the single approved account of the token.
    pub approved: Address,
    pub token_id: ContractTokenId,
}

/// Parameter for the `setApprovalForAll` function.
#[derive(Debug, Serialize, SchemaType)]
pub struct SetApprovalForAllParams {
    pub operator: Address,
    /// Grants the operator when true, revokes it when false.
    pub approved: bool,
}

/// Parameter for the `isApprovedForAll` query.
#[derive(Debug, Serialize, SchemaType)]
pub struct OperatorQuery {
    pub owner: Address,
    pub operator: Address,
}

/// Parameter for the `royaltyInfo` query.
#[derive(Debug, Serialize, SchemaType)]
pub struct RoyaltyInfoParams {
    pub token_id: ContractTokenId,
    pub sale_price: Amount,
}

/// Response of the `royaltyInfo` query.
#[derive(Debug, Serialize, PartialEq, Eq, SchemaType)]
pub struct RoyaltyInfo {
    /// Account the royalty share is owed to.
    pub beneficiary: AccountAddress,
    /// Royalty share of the queried sale price, rounded down.
    pub amount: Amount,
}

/// Parameter for the `setImplementors` function.
/// Takes a standard identifier and a list of contract addresses providing
/// implementations of this standard.
#[derive(Debug, Serialize, SchemaType)]
pub struct SetImplementorsParams {
    /// The identifier for the standard.
    pub id: StandardIdentifierOwned,
    /// The addresses of the implementors of the standard.
    pub implementors: Vec<ContractAddress>,
}
