use super::*;

/// Parameter of the `onNonFungibleTokenReceived` hook a receiving contract
/// must implement to accept safe transfers.
#[derive(Debug, Serialize, SchemaType)]
pub struct OnReceivingNftParams {
    /// The token that was delivered.
    pub token_id: ContractTokenId,
    /// The account that triggered the transfer.
    pub operator: Address,
    /// Previous owner, or the zero address for freshly minted tokens.
    pub from: Address,
    /// Opaque payload forwarded from the transfer parameter.
    pub data: AdditionalData,
}

/// Interpretation of the bytes a receive hook returned.
///
/// The hook protocol is a single boolean: exactly `true` accepts the token.
/// Everything else is kept apart so callers can tell a refusal from a
/// receiver that does not speak the protocol at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiverResponse {
    /// The receiver acknowledged the token.
    Accepted,
    /// The receiver answered `false`.
    Rejected,
    /// No reply, a non-boolean reply, or trailing bytes after the boolean.
    Malformed,
}

impl ReceiverResponse {
    pub fn parse<R: Read>(return_value: Option<R>) -> Self {
        let mut cursor = match return_value {
            Some(cursor) => cursor,
            None => return ReceiverResponse::Malformed,
        };
        let accepted = match bool::deserial(&mut cursor) {
            Ok(accepted) => accepted,
            Err(_) => return ReceiverResponse::Malformed,
        };
        // Anything after the boolean means the receiver spoke some other
        // protocol; do not guess what it meant.
        if u8::deserial(&mut cursor).is_ok() {
            return ReceiverResponse::Malformed;
        }
        if accepted {
            ReceiverResponse::Accepted
        } else {
            ReceiverResponse::Rejected
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    fn parse(bytes: &[u8]) -> ReceiverResponse {
        ReceiverResponse::parse(Some(Cursor::new(bytes.to_vec())))
    }

    #[concordium_test]
    fn test_accepted() {
        claim_eq!(parse(&[1]), ReceiverResponse::Accepted);
    }

    #[concordium_test]
    fn test_rejected() {
        claim_eq!(parse(&[0]), ReceiverResponse::Rejected);
    }

    #[concordium_test]
    fn test_no_reply_is_malformed() {
        claim_eq!(
            ReceiverResponse::parse(None::<Cursor<Vec<u8>>>),
            ReceiverResponse::Malformed
        );
    }

    #[concordium_test]
    fn test_empty_reply_is_malformed() {
        claim_eq!(parse(&[]), ReceiverResponse::Malformed);
    }

    #[concordium_test]
    fn test_non_boolean_byte_is_malformed() {
        claim_eq!(parse(&[2]), ReceiverResponse::Malformed);
        claim_eq!(parse(&[255]), ReceiverResponse::Malformed);
    }

    #[concordium_test]
    fn test_trailing_bytes_are_malformed() {
        // A correct boolean followed by garbage is not a valid reply, whether
        // it starts with an accept or a reject.
        claim_eq!(parse(&[1, 0]), ReceiverResponse::Malformed);
        claim_eq!(parse(&[0, 1]), ReceiverResponse::Malformed);
    }
}
