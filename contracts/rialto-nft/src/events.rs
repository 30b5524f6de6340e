use super::*;

/// Tagged event to be serialized for the event log.
#[derive(Debug)]
pub enum RialtoEvent {
    /// Ownership of a token changed. Mints carry the zero address as `from`,
    /// burns carry it as `to`, so indexers see one uniform event shape.
    Transfer(TransferEvent),
    /// The single approved account of a token was set.
    Approval(ApprovalEvent),
    /// An operator was granted or revoked for all tokens of an owner.
    ApprovalForAll(ApprovalForAllEvent),
    /// The admin nominated a new contract owner.
    OwnershipTransferRequested(OwnershipTransferRequestedEvent),
    /// The nominated owner claimed contract ownership.
    OwnershipTransferred(OwnershipTransferredEvent),
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TransferEvent {
    pub token_id: ContractTokenId,
    pub from: Address,
    pub to: Address,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ApprovalEvent {
    pub token_id: ContractTokenId,
    pub owner: Address,
    pub approved: Address,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ApprovalForAllEvent {
    pub owner: Address,
    pub operator: Address,
    pub approved: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct OwnershipTransferRequestedEvent {
    pub current_owner: Address,
    pub pending_owner: Address,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

impl Serial for RialtoEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            RialtoEvent::Transfer(event) => {
                out.write_u8(TRANSFER_EVENT_TAG)?;
                event.serial(out)
            }
            RialtoEvent::Approval(event) => {
                out.write_u8(APPROVAL_EVENT_TAG)?;
                event.serial(out)
            }
            RialtoEvent::ApprovalForAll(event) => {
                out.write_u8(APPROVAL_FOR_ALL_EVENT_TAG)?;
                event.serial(out)
            }
            RialtoEvent::OwnershipTransferRequested(event) => {
                out.write_u8(OWNERSHIP_TRANSFER_REQUESTED_EVENT_TAG)?;
                event.serial(out)
            }
            RialtoEvent::OwnershipTransferred(event) => {
                out.write_u8(OWNERSHIP_TRANSFERRED_EVENT_TAG)?;
                event.serial(out)
            }
        }
    }
}
