use super::*;

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates an empty registry with no tokens.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        admin: Address,
        royalty: Royalty,
        restrict_mint: bool,
    ) -> Self {
        State {
            admin: Admin::new(admin),
            owners: state_builder.new_map(),
            approvals: state_builder.new_map(),
            operators: state_builder.new_map(),
            balances: state_builder.new_map(),
            uris: state_builder.new_map(),
            next_token_id: 1,
            royalty,
            restrict_mint,
            implementors: state_builder.new_map(),
        }
    }

    /// Get the owner of a token.
    /// Results in an error if the token has never been minted or was burned.
    pub fn owner_of(&self, token_id: &ContractTokenId) -> ContractResult<Address> {
        self.owners
            .get(token_id)
            .map(|owner| *owner)
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Get the number of tokens currently owned by an address, zero when the
    /// address never owned any.
    /// Results in an error when the null account is queried.
    pub fn balance_of(&self, address: &Address) -> ContractResult<u64> {
        ensure!(
            *address != ZERO_ADDRESS,
            CustomContractError::InvalidAccount.into()
        );
        Ok(self.balances.get(address).map_or(0, |balance| *balance))
    }

    /// The single approved account of a token, if any.
    pub fn approved_for(&self, token_id: &ContractTokenId) -> Option<Address> {
        self.approvals.get(token_id).map(|approved| *approved)
    }

    /// Overwrite the single approved account of a token. Authorization and
    /// the self-approval check are the caller's responsibility.
    pub fn approve_token(&mut self, token_id: ContractTokenId, approved: Address) {
        self.approvals.insert(token_id, approved);
    }

    /// Check if a given address is an operator of a given owner address.
    pub fn is_operator(&self, owner: &Address, address: &Address) -> bool {
        self.operators
            .get(owner)
            .map(|operators| operators.contains(address))
            .unwrap_or(false)
    }

    /// Enable or disable an operator for all tokens of `owner`.
    /// Succeeds regardless of whether the grant was already in the requested
    /// state.
    pub fn set_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        approved: bool,
        state_builder: &mut StateBuilder<S>,
    ) {
        if approved {
            let mut operators = self
                .operators
                .entry(*owner)
                .or_insert_with(|| state_builder.new_set());
            operators.insert(*operator);
        } else {
            self.operators
                .get_mut(owner)
                .map(|mut operators| operators.remove(operator));
        }
    }

    /// Update the state with a transfer of a token from `from` to `to`,
    /// clearing the token's approval and moving one unit of balance.
    /// `owner` must be the resolved current owner of the token.
    ///
    /// Results in an error if `from` is not the owner or `to` is the null
    /// account.
    pub fn transfer(
        &mut self,
        owner: &Address,
        from: &Address,
        to: &Address,
        token_id: &ContractTokenId,
    ) -> ContractResult<()> {
        ensure!(from == owner, CustomContractError::TokenMismatch.into());
        ensure!(
            *to != ZERO_ADDRESS,
            CustomContractError::InvalidRecipient.into()
        );

        self.approvals.remove(token_id);
        // `from` owns the token, so its balance entry is present and at
        // least 1.
        self.balances
            .get_mut(from)
            .map(|mut balance| *balance -= 1);
        self.balances
            .entry(*to)
            .and_modify(|balance| *balance += 1)
            .or_insert(1);
        self.owners.insert(*token_id, *to);

        Ok(())
    }

    /// Mint a new token owned by `to`, allocating the next id from the
    /// counter.
    /// Results in an error if `to` is the null account.
    pub fn mint(&mut self, to: &Address, uri: Option<String>) -> ContractResult<ContractTokenId> {
        ensure!(
            *to != ZERO_ADDRESS,
            CustomContractError::InvalidRecipient.into()
        );

        let token_id = TokenIdU64(self.next_token_id);
        self.owners.insert(token_id, *to);
        if let Some(uri) = uri {
            self.uris.insert(token_id, uri);
        }
        self.balances
            .entry(*to)
            .and_modify(|balance| *balance += 1)
            .or_insert(1);
        self.next_token_id += 1;

        Ok(token_id)
    }

    /// Remove a token from the registry: owner, approval and URI are cleared
    /// and the owner's balance decremented. Authorization is the caller's
    /// responsibility; `owner` must be the resolved current owner.
    pub fn burn(&mut self, owner: &Address, token_id: &ContractTokenId) {
        self.owners.remove(token_id);
        self.approvals.remove(token_id);
        self.uris.remove(token_id);
        self.balances
            .get_mut(owner)
            .map(|mut balance| *balance -= 1);
    }

    /// Update the list of contracts implementing the specified standard.
    pub fn set_implementors(
        &mut self,
        id: StandardIdentifierOwned,
        implementors: Vec<ContractAddress>,
    ) {
        self.implementors.insert(id, implementors);
    }
}
