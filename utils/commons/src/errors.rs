use super::*;

/// The custom errors the contract can produce.
///
/// Every failure is a terminal abort of the current call; nothing is retried
/// and the host discards all state changes of a rejected call.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// The null account was queried or used where a real account is required
    /// (Error code: -4).
    InvalidAccount,
    /// Attempt to mint or transfer a token to the null account
    /// (Error code: -5).
    InvalidRecipient,
    /// Attempt to approve the current owner of the token (Error code: -6).
    SelfApproval,
    /// The `from` address does not own the token being transferred
    /// (Error code: -7).
    TokenMismatch,
    /// Royalty rate is outside of the [0, 10000] basis point domain
    /// (Error code: -8).
    InvalidRoyaltyPercent,
    /// The receiving contract refused the token: its receive hook returned
    /// `false` or rejected outright (Error code: -9).
    CallbackRejected,
    /// The receiving contract replied with something that is not a single
    /// boolean. Distinct from `CallbackRejected`: this is a protocol error on
    /// the receiver side, not a refusal (Error code: -10).
    CallbackMalformed,
    /// Failed to invoke a contract (Error code: -11).
    InvokeContractError,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
