use super::*;

/// Tag for the Transfer event. Mints and burns reuse this tag with the zero
/// address as one endpoint.
pub const TRANSFER_EVENT_TAG: u8 = u8::MAX;

/// Tag for the Approval event.
pub const APPROVAL_EVENT_TAG: u8 = u8::MAX - 1;

/// Tag for the ApprovalForAll event.
pub const APPROVAL_FOR_ALL_EVENT_TAG: u8 = u8::MAX - 2;

/// Tag for the OwnershipTransferRequested event.
pub const OWNERSHIP_TRANSFER_REQUESTED_EVENT_TAG: u8 = u8::MAX - 3;

/// Tag for the OwnershipTransferred event.
pub const OWNERSHIP_TRANSFERRED_EVENT_TAG: u8 = u8::MAX - 4;

/// Identifier of the base registry interface.
pub const NFT_STANDARD_IDENTIFIER: StandardIdentifier<'static> =
    StandardIdentifier::new_unchecked("RNFT");

/// Identifier of the token URI extension.
pub const METADATA_STANDARD_IDENTIFIER: StandardIdentifier<'static> =
    StandardIdentifier::new_unchecked("RNFT-METADATA");

/// Identifier of the royalty extension.
pub const ROYALTY_STANDARD_IDENTIFIER: StandardIdentifier<'static> =
    StandardIdentifier::new_unchecked("RNFT-ROYALTY");

/// Capability sets every instance of this contract implements, answered by
/// the `supports` query.
pub const SUPPORTS_STANDARDS: [StandardIdentifier<'static>; 4] = [
    CIS0_STANDARD_IDENTIFIER,
    NFT_STANDARD_IDENTIFIER,
    METADATA_STANDARD_IDENTIFIER,
    ROYALTY_STANDARD_IDENTIFIER,
];
