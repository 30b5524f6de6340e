use crate::{ContractError, ContractResult};
use concordium_std::*;

/// Administrative ownership of a contract instance, transferred in two
/// phases: the current owner nominates a pending owner, who must then claim
/// ownership itself. Deliberately a separate type from anything token
/// related, so admin ownership and per-token ownership cannot be mixed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SchemaType)]
pub struct Admin {
    /// The account in control of administrative actions.
    current: Address,
    /// The account nominated to take over, if any.
    pending: Option<Address>,
}

impl Admin {
    pub fn new(owner: Address) -> Self {
        Self {
            current: owner,
            pending: None,
        }
    }

    pub fn current(&self) -> Address {
        self.current
    }

    pub fn pending(&self) -> Option<Address> {
        self.pending
    }

    pub fn is_current(&self, address: &Address) -> bool {
        self.current == *address
    }

    /// Nominate a new owner. Only the current owner may nominate; nominating
    /// again overwrites the previous nomination.
    pub fn set_pending(&mut self, sender: Address, new_owner: Address) -> ContractResult<()> {
        ensure!(self.is_current(&sender), ContractError::Unauthorized);
        self.pending = Some(new_owner);
        Ok(())
    }

    /// Complete the transfer. Only the nominated account may claim; on
    /// success it becomes the current owner and the nomination is cleared.
    /// Returns the previous owner.
    pub fn claim(&mut self, sender: Address) -> ContractResult<Address> {
        ensure!(self.pending == Some(sender), ContractError::Unauthorized);
        let previous = self.current;
        self.current = sender;
        self.pending = None;
        Ok(previous)
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const OWNER_ACCOUNT: AccountAddress = AccountAddress([1; 32]);
    const OWNER: Address = Address::Account(OWNER_ACCOUNT);

    const NEW_OWNER_ACCOUNT: AccountAddress = AccountAddress([2; 32]);
    const NEW_OWNER: Address = Address::Account(NEW_OWNER_ACCOUNT);

    const INTRUDER_ACCOUNT: AccountAddress = AccountAddress([3; 32]);
    const INTRUDER: Address = Address::Account(INTRUDER_ACCOUNT);

    #[concordium_test]
    fn test_set_pending_by_owner() {
        let mut admin = Admin::new(OWNER);

        let result = admin.set_pending(OWNER, NEW_OWNER);
        claim_eq!(result, Ok(()));
        claim_eq!(admin.current(), OWNER);
        claim_eq!(admin.pending(), Some(NEW_OWNER));
    }

    #[concordium_test]
    fn test_set_pending_unauthorized() {
        let mut admin = Admin::new(OWNER);

        let result = admin.set_pending(INTRUDER, INTRUDER);
        claim_eq!(result, Err(ContractError::Unauthorized));
        claim_eq!(admin.current(), OWNER);
        claim_eq!(admin.pending(), None);
    }

    #[concordium_test]
    fn test_set_pending_overwrites_previous_nomination() {
        let mut admin = Admin::new(OWNER);

        admin
            .set_pending(OWNER, INTRUDER)
            .expect_report("First nomination failed");
        admin
            .set_pending(OWNER, NEW_OWNER)
            .expect_report("Second nomination failed");

        claim_eq!(admin.pending(), Some(NEW_OWNER));

        // The superseded nominee can no longer claim.
        let result = admin.claim(INTRUDER);
        claim_eq!(result, Err(ContractError::Unauthorized));
    }

    #[concordium_test]
    fn test_claim_by_pending_owner() {
        let mut admin = Admin::new(OWNER);
        admin
            .set_pending(OWNER, NEW_OWNER)
            .expect_report("Nomination failed");

        let result = admin.claim(NEW_OWNER);
        claim_eq!(result, Ok(OWNER));
        claim_eq!(admin.current(), NEW_OWNER);
        claim_eq!(admin.pending(), None);

        // The previous owner lost its rights with the handover.
        claim!(!admin.is_current(&OWNER));
        claim_eq!(
            admin.set_pending(OWNER, OWNER),
            Err(ContractError::Unauthorized)
        );
    }

    #[concordium_test]
    fn test_claim_unauthorized() {
        let mut admin = Admin::new(OWNER);
        admin
            .set_pending(OWNER, NEW_OWNER)
            .expect_report("Nomination failed");

        let result = admin.claim(INTRUDER);
        claim_eq!(result, Err(ContractError::Unauthorized));
        claim_eq!(admin.current(), OWNER);
        claim_eq!(admin.pending(), Some(NEW_OWNER));
    }

    #[concordium_test]
    fn test_claim_without_nomination() {
        let mut admin = Admin::new(OWNER);

        let result = admin.claim(NEW_OWNER);
        claim_eq!(result, Err(ContractError::Unauthorized));
        claim_eq!(admin.current(), OWNER);

        // Even the current owner cannot claim without a nomination.
        let result = admin.claim(OWNER);
        claim_eq!(result, Err(ContractError::Unauthorized));
    }
}
