use super::*;

/// Initialize the registry with no tokens.
///
/// The royalty configuration is validated here and fixed for the lifetime of
/// the instance; the account deploying the instance becomes the contract
/// admin.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The royalty rate exceeds 10000 basis points.
#[init(contract = "RialtoNFT", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params: InitParams = ctx.parameter_cursor().get()?;

    let rate = BasisPoints::new(params.royalty_rate)
        .ok_or(CustomContractError::InvalidRoyaltyPercent)?;
    let royalty = Royalty {
        beneficiary: params.royalty_beneficiary,
        rate,
    };

    Ok(State::new(
        state_builder,
        Address::Account(ctx.init_origin()),
        royalty,
        params.restrict_mint,
    ))
}

/// Mint a new token, assigning it the next id from the counter.
/// Logs a `Transfer` event from the zero address, so indexers see mints as
/// ordinary transfers.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Minting is restricted and the sender is not the contract admin.
/// - The owner-to-be is the zero address.
/// - Fails to log event.
#[receive(
    contract = "RialtoNFT",
    name = "mint",
    parameter = "MintParams",
    mutable,
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: MintParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    let state = host.state_mut();
    if state.restrict_mint {
        ensure!(state.admin.is_current(&sender), ContractError::Unauthorized);
    }
    let token_id = state.mint(&params.to, params.uri)?;

    logger.log(&RialtoEvent::Transfer(TransferEvent {
        token_id,
        from: ZERO_ADDRESS,
        to: params.to,
    }))?;

    Ok(())
}

/// Mint a new token and, when the owner-to-be is a contract, require it to
/// acknowledge receipt through its `onNonFungibleTokenReceived` entrypoint.
/// The hook sees the zero address as the previous owner.
///
/// It rejects if:
/// - `mint` would reject.
/// - The receiving contract refuses the token or replies with anything but a
///   single boolean `true`.
#[receive(
    contract = "RialtoNFT",
    name = "safeMint",
    parameter = "SafeMintParams",
    mutable,
    enable_logger
)]
fn safe_mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let SafeMintParams { to, uri, data } = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    let token_id = {
        let state = host.state_mut();
        if state.restrict_mint {
            ensure!(state.admin.is_current(&sender), ContractError::Unauthorized);
        }
        state.mint(&to, uri)?
    };

    logger.log(&RialtoEvent::Transfer(TransferEvent {
        token_id,
        from: ZERO_ADDRESS,
        to,
    }))?;

    if let Address::Contract(receiver) = to {
        let hook_params = OnReceivingNftParams {
            token_id,
            operator: sender,
            from: ZERO_ADDRESS,
            data,
        };
        receiver_handshake(host, &receiver, &hook_params)?;
    }

    Ok(())
}

/// Transfer a token from its current owner to a new one, clearing the
/// token's single approval.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token does not exist.
/// - The sender is neither the owner, the approved account of the token, nor
///   an operator of the owner.
/// - `from` is not the current owner of the token.
/// - `to` is the zero address.
/// - Fails to log event.
#[receive(
    contract = "RialtoNFT",
    name = "transferFrom",
    parameter = "TransferParams",
    mutable,
    enable_logger
)]
fn transfer_from<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: TransferParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    let state = host.state_mut();
    let owner = state.owner_of(&params.token_id)?;
    ensure!(
        sender == owner
            || state.approved_for(&params.token_id) == Some(sender)
            || state.is_operator(&owner, &sender),
        ContractError::Unauthorized
    );
    state.transfer(&owner, &params.from, &params.to, &params.token_id)?;

    logger.log(&RialtoEvent::Transfer(TransferEvent {
        token_id: params.token_id,
        from: params.from,
        to: params.to,
    }))?;

    Ok(())
}

/// Transfer a token and, when the recipient is a contract, require it to
/// acknowledge receipt through its `onNonFungibleTokenReceived` entrypoint.
///
/// The registry is updated and the `Transfer` event logged before the hook
/// is invoked, so a receiver that calls back into this contract observes the
/// post-transfer state while the call is still pending. If the hook fails
/// the host discards the entire call, updates included.
///
/// It rejects if:
/// - `transferFrom` would reject.
/// - The receiving contract refuses the token or replies with anything but a
///   single boolean `true`.
#[receive(
    contract = "RialtoNFT",
    name = "safeTransferFrom",
    parameter = "SafeTransferParams",
    mutable,
    enable_logger
)]
fn safe_transfer_from<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let SafeTransferParams {
        from,
        to,
        token_id,
        data,
    } = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    {
        let state = host.state_mut();
        let owner = state.owner_of(&token_id)?;
        ensure!(
            sender == owner
                || state.approved_for(&token_id) == Some(sender)
                || state.is_operator(&owner, &sender),
            ContractError::Unauthorized
        );
        state.transfer(&owner, &from, &to, &token_id)?;
    }

    logger.log(&RialtoEvent::Transfer(TransferEvent {
        token_id,
        from,
        to,
    }))?;

    if let Address::Contract(receiver) = to {
        let hook_params = OnReceivingNftParams {
            token_id,
            operator: sender,
            from,
            data,
        };
        receiver_handshake(host, &receiver, &hook_params)?;
    }

    Ok(())
}

/// Invoke the receive hook on `receiver` and interpret its reply.
fn receiver_handshake<S: HasStateApi>(
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    receiver: &ContractAddress,
    hook_params: &OnReceivingNftParams,
) -> ContractResult<()> {
    let response = match host.invoke_contract(
        receiver,
        hook_params,
        EntrypointName::new_unchecked(ON_RECEIVING_NFT_ENTRYPOINT),
        Amount::zero(),
    ) {
        Ok((_state_modified, return_value)) => ReceiverResponse::parse(return_value),
        // The receiver actively rejecting the invoke is a refusal of the
        // token, same as answering `false`.
        Err(CallContractError::LogicReject { .. }) => ReceiverResponse::Rejected,
        Err(_) => return Err(CustomContractError::InvokeContractError.into()),
    };

    match response {
        ReceiverResponse::Accepted => Ok(()),
        ReceiverResponse::Rejected => Err(CustomContractError::CallbackRejected.into()),
        ReceiverResponse::Malformed => Err(CustomContractError::CallbackMalformed.into()),
    }
}

/// Destroy a token: its owner, approval and URI slots are cleared and the
/// owner's balance decremented. Logs a `Transfer` event to the zero address.
/// Only the owner itself may burn; operators and approved accounts may not.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token does not exist.
/// - The sender is not the current owner of the token.
/// - Fails to log event.
#[receive(
    contract = "RialtoNFT",
    name = "burn",
    parameter = "ContractTokenId",
    mutable,
    enable_logger
)]
fn burn<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    let state = host.state_mut();
    let owner = state.owner_of(&token_id)?;
    ensure!(sender == owner, ContractError::Unauthorized);
    state.burn(&owner, &token_id);

    logger.log(&RialtoEvent::Transfer(TransferEvent {
        token_id,
        from: owner,
        to: ZERO_ADDRESS,
    }))?;

    Ok(())
}

/// Set the single approved account of a token, overwriting any previous
/// approval.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token does not exist.
/// - The sender is neither the owner nor an operator of the owner.
/// - The account to approve is the current owner.
/// - Fails to log event.
#[receive(
    contract = "RialtoNFT",
    name = "approve",
    parameter = "ApproveParams",
    mutable,
    enable_logger
)]
fn approve<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: ApproveParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    let state = host.state_mut();
    let owner = state.owner_of(&params.token_id)?;
    ensure!(
        sender == owner || state.is_operator(&owner, &sender),
        ContractError::Unauthorized
    );
    ensure!(
        params.approved != owner,
        CustomContractError::SelfApproval.into()
    );
    state.approve_token(params.token_id, params.approved);

    logger.log(&RialtoEvent::Approval(ApprovalEvent {
        token_id: params.token_id,
        owner,
        approved: params.approved,
    }))?;

    Ok(())
}

/// The single approved account of a token, or the zero address when none is
/// set.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token does not exist.
#[receive(
    contract = "RialtoNFT",
    name = "getApproved",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
fn get_approved<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;

    let state = host.state();
    state.owner_of(&token_id)?;
    Ok(state.approved_for(&token_id).unwrap_or(ZERO_ADDRESS))
}

/// Enable or disable an operator for every token the sender owns, now and in
/// the future, until revoked.
///
/// Unlike `approve` there is no self-approval restriction here; an owner
/// listing itself as operator is a harmless no-op grant.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - Fails to log event.
#[receive(
    contract = "RialtoNFT",
    name = "setApprovalForAll",
    parameter = "SetApprovalForAllParams",
    mutable,
    enable_logger
)]
fn set_approval_for_all<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: SetApprovalForAllParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    let (state, state_builder) = host.state_and_builder();
    state.set_operator(&sender, &params.operator, params.approved, state_builder);

    logger.log(&RialtoEvent::ApprovalForAll(ApprovalForAllEvent {
        owner: sender,
        operator: params.operator,
        approved: params.approved,
    }))?;

    Ok(())
}

/// Check whether `operator` is enabled for all tokens of `owner`.
///
/// It rejects if:
/// - Fails to parse parameter.
#[receive(
    contract = "RialtoNFT",
    name = "isApprovedForAll",
    parameter = "OperatorQuery",
    return_value = "bool"
)]
fn is_approved_for_all<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    let query: OperatorQuery = ctx.parameter_cursor().get()?;
    Ok(host.state().is_operator(&query.owner, &query.operator))
}

/// The current owner of a token.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token does not exist.
#[receive(
    contract = "RialtoNFT",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().owner_of(&token_id)
}

/// The number of tokens currently owned by an address, zero when the address
/// never owned any.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The zero address is queried.
#[receive(
    contract = "RialtoNFT",
    name = "balanceOf",
    parameter = "Address",
    return_value = "u64"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    let address: Address = ctx.parameter_cursor().get()?;
    host.state().balance_of(&address)
}

/// The URI of a token, or nothing when it was never set or the token was
/// burned. Deliberately tolerant: no existence check is performed.
///
/// It rejects if:
/// - Fails to parse parameter.
#[receive(
    contract = "RialtoNFT",
    name = "tokenUri",
    parameter = "ContractTokenId",
    return_value = "Option<String>"
)]
fn token_uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Option<String>> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    Ok(host.state().uris.get(&token_id).map(|uri| uri.clone()))
}

/// Snapshot of a single token: owner, approved account and URI.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token does not exist.
#[receive(
    contract = "RialtoNFT",
    name = "viewToken",
    parameter = "ContractTokenId",
    return_value = "TokenView"
)]
fn view_token<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenView> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;

    let state = host.state();
    let owner = state.owner_of(&token_id)?;
    Ok(TokenView {
        owner,
        approved: state.approved_for(&token_id),
        uri: state.uris.get(&token_id).map(|uri| uri.clone()),
    })
}

/// Quote the royalty owed on a sale of the given token at the given price:
/// the configured beneficiary and `floor(sale_price * rate / 10000)`.
///
/// The token's existence is not checked, so royalties can be quoted for
/// tokens that were burned or never minted.
///
/// It rejects if:
/// - Fails to parse parameter.
#[receive(
    contract = "RialtoNFT",
    name = "royaltyInfo",
    parameter = "RoyaltyInfoParams",
    return_value = "RoyaltyInfo"
)]
fn royalty_info<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<RoyaltyInfo> {
    let params: RoyaltyInfoParams = ctx.parameter_cursor().get()?;

    let royalty = host.state().royalty;
    Ok(RoyaltyInfo {
        beneficiary: royalty.beneficiary,
        amount: royalty.rate * params.sale_price,
    })
}

/// Nominate a new contract admin. The nomination only takes effect once the
/// nominee claims it through `claimOwnership`.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The sender is not the current contract admin.
/// - Fails to log event.
#[receive(
    contract = "RialtoNFT",
    name = "setPendingOwner",
    parameter = "Address",
    mutable,
    enable_logger
)]
fn set_pending_owner<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let new_owner: Address = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    let state = host.state_mut();
    state.admin.set_pending(sender, new_owner)?;

    logger.log(&RialtoEvent::OwnershipTransferRequested(
        OwnershipTransferRequestedEvent {
            current_owner: state.admin.current(),
            pending_owner: new_owner,
        },
    ))?;

    Ok(())
}

/// Complete an admin handover. Only the account nominated through
/// `setPendingOwner` may claim; on success it becomes the contract admin and
/// the nomination is cleared.
///
/// It rejects if:
/// - The sender is not the pending owner.
/// - Fails to log event.
#[receive(
    contract = "RialtoNFT",
    name = "claimOwnership",
    mutable,
    enable_logger
)]
fn claim_ownership<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let sender = ctx.sender();

    let state = host.state_mut();
    let previous_owner = state.admin.claim(sender)?;

    logger.log(&RialtoEvent::OwnershipTransferred(OwnershipTransferredEvent {
        previous_owner,
        new_owner: sender,
    }))?;

    Ok(())
}

/// Takes a list of standard identifiers and answers, for each, whether this
/// instance implements the standard, either directly or through configured
/// implementor contracts.
///
/// It rejects if:
/// - Fails to parse parameter.
#[receive(
    contract = "RialtoNFT",
    name = "supports",
    parameter = "SupportsQueryParams",
    return_value = "SupportsQueryResponse"
)]
fn supports<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<SupportsQueryResponse> {
    let params: SupportsQueryParams = ctx.parameter_cursor().get()?;

    let mut response = Vec::with_capacity(params.queries.len());
    for std_id in params.queries {
        if let Some(addresses) = host.state().implementors.get(&std_id) {
            response.push(SupportResult::SupportBy(addresses.to_vec()));
        } else if SUPPORTS_STANDARDS.contains(&std_id.as_standard_identifier()) {
            response.push(SupportResult::Support);
        } else {
            response.push(SupportResult::NoSupport);
        }
    }

    Ok(SupportsQueryResponse::from(response))
}

/// Register contracts implementing a standard on behalf of this instance,
/// overriding the built-in answer of `supports` for that standard.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The sender is not the contract admin.
#[receive(
    contract = "RialtoNFT",
    name = "setImplementors",
    parameter = "SetImplementorsParams",
    mutable
)]
fn set_implementors<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let params: SetImplementorsParams = ctx.parameter_cursor().get()?;
    ensure!(
        host.state().admin.is_current(&ctx.sender()),
        ContractError::Unauthorized
    );
    host.state_mut()
        .set_implementors(params.id, params.implementors);
    Ok(())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const ACCOUNT_ADMIN: AccountAddress = AccountAddress([1u8; 32]);
    const ADDRESS_ADMIN: Address = Address::Account(ACCOUNT_ADMIN);
    const ACCOUNT_7: AccountAddress = AccountAddress([7u8; 32]);
    const ADDRESS_7: Address = Address::Account(ACCOUNT_7);
    const ACCOUNT_8: AccountAddress = AccountAddress([8u8; 32]);
    const ADDRESS_8: Address = Address::Account(ACCOUNT_8);
    const ACCOUNT_9: AccountAddress = AccountAddress([9u8; 32]);
    const ADDRESS_9: Address = Address::Account(ACCOUNT_9);
    const BENEFICIARY: AccountAddress = AccountAddress([42u8; 32]);

    const RECEIVER_CONTRACT: ContractAddress = ContractAddress {
        index: 17,
        subindex: 0,
    };
    const ADDRESS_RECEIVER: Address = Address::Contract(RECEIVER_CONTRACT);

    const TOKEN_1: ContractTokenId = TokenIdU64(1);
    const TOKEN_2: ContractTokenId = TokenIdU64(2);
    const TOKEN_99: ContractTokenId = TokenIdU64(99);

    fn default_royalty() -> Royalty {
        Royalty {
            beneficiary: BENEFICIARY,
            rate: BasisPoints::new(250).expect_report("250 bps is a valid rate"),
        }
    }

    /// Test helper function which creates a contract state with one token
    /// with id `TOKEN_1` owned by `ADDRESS_7`.
    fn initial_state<S: HasStateApi>(state_builder: &mut StateBuilder<S>) -> State<S> {
        let mut state = State::new(state_builder, ADDRESS_ADMIN, default_royalty(), false);
        state
            .mint(&ADDRESS_7, Some(String::from("ipfs://rialto/1")))
            .expect_report("Failed to mint TOKEN_1");
        state
    }

    fn hook_entrypoint() -> OwnedEntrypointName {
        OwnedEntrypointName::new_unchecked(ON_RECEIVING_NFT_ENTRYPOINT.to_string())
    }

    /// Mock for the receive hook: requires the parameter to parse as
    /// `OnReceivingNftParams` and replies with `return_value`.
    fn hook_reply_mock<S>(return_value: impl Clone + Serial + 'static) -> MockFn<S> {
        MockFn::new(move |parameter, _amount, _balance, _state| {
            OnReceivingNftParams::deserial(&mut Cursor::new(parameter))
                .map_err(|_| CallContractError::Trap)?;
            Ok((false, Some(return_value.clone())))
        })
    }

    /// Mock for the receive hook that additionally asserts on the parsed
    /// hook parameter.
    fn hook_check_mock<S>(
        check: impl Fn(&OnReceivingNftParams) -> bool + 'static,
        return_value: impl Clone + Serial + 'static,
    ) -> MockFn<S> {
        MockFn::new(move |parameter, _amount, _balance, _state| {
            let value = OnReceivingNftParams::deserial(&mut Cursor::new(parameter))
                .map_err(|_| CallContractError::Trap)?;
            if !check(&value) {
                return Err(CallContractError::Trap);
            }
            Ok((false, Some(return_value.clone())))
        })
    }

    /// A reply that starts with a valid boolean but carries trailing bytes.
    #[derive(Serialize, Clone)]
    struct OverlongReply {
        flag: bool,
        extra: u8,
    }

    /// Test initialization succeeds and the registry starts empty with the
    /// id counter at 1.
    #[concordium_test]
    fn test_init() {
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ACCOUNT_ADMIN);

        let params = InitParams {
            royalty_beneficiary: BENEFICIARY,
            royalty_rate: 250,
            restrict_mint: false,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut builder = TestStateBuilder::new();

        let result = init(&ctx, &mut builder);
        let state = result.expect_report("Contract initialization failed");

        claim_eq!(
            state.owners.iter().count(),
            0,
            "No token should be registered after init"
        );
        claim_eq!(state.next_token_id, 1, "Token ids must start at 1");
        claim_eq!(state.admin.current(), ADDRESS_ADMIN);
        claim_eq!(state.admin.pending(), None);
        claim_eq!(state.royalty.rate.rate(), 250);
    }

    /// Test initialization with a royalty rate above 100% fails, so the
    /// instance is never deployed.
    #[concordium_test]
    fn test_init_invalid_royalty() {
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ACCOUNT_ADMIN);

        let params = InitParams {
            royalty_beneficiary: BENEFICIARY,
            royalty_rate: 10_001,
            restrict_mint: false,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut builder = TestStateBuilder::new();

        let result = init(&ctx, &mut builder);
        claim!(result.is_err(), "Init with 10001 bps must fail");
    }

    /// Test minting: ownership, balance, counter advancement and the
    /// `Transfer` event from the zero address.
    #[concordium_test]
    fn test_mint() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = MintParams {
            to: ADDRESS_7,
            uri: Some(String::from("ipfs://rialto/1")),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::new(&mut state_builder, ADDRESS_ADMIN, default_royalty(), false);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim_eq!(
            host.state().owner_of(&TOKEN_1),
            Ok(ADDRESS_7),
            "TOKEN_1 should be owned by the minting target"
        );
        claim_eq!(host.state().balance_of(&ADDRESS_7), Ok(1));
        claim_eq!(
            host.state().next_token_id,
            2,
            "Counter should advance past the minted id"
        );

        claim!(
            logger.logs.contains(&to_bytes(&RialtoEvent::Transfer(TransferEvent {
                token_id: TOKEN_1,
                from: ZERO_ADDRESS,
                to: ADDRESS_7,
            }))),
            "Expected a Transfer event from the zero address"
        );

        // A second mint gets the next id.
        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        claim_eq!(host.state().owner_of(&TOKEN_2), Ok(ADDRESS_7));
        claim_eq!(host.state().balance_of(&ADDRESS_7), Ok(2));
    }

    /// Test minting to the zero address fails.
    #[concordium_test]
    fn test_mint_to_zero_address() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = MintParams {
            to: ZERO_ADDRESS,
            uri: None,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::new(&mut state_builder, ADDRESS_ADMIN, default_royalty(), false);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::InvalidRecipient.into(),
            "Error is expected to be InvalidRecipient"
        );
    }

    /// Test that with restricted minting only the admin may mint.
    #[concordium_test]
    fn test_mint_restricted() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = MintParams {
            to: ADDRESS_7,
            uri: None,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::new(&mut state_builder, ADDRESS_ADMIN, default_royalty(), true);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Only the admin may mint on a restricted instance"
        );

        // The admin itself can mint.
        ctx.set_sender(ADDRESS_ADMIN);
        let result: ContractResult<()> = mint(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        claim_eq!(host.state().owner_of(&TOKEN_1), Ok(ADDRESS_7));
    }

    /// Test safe minting to a contract which acknowledges receipt. The hook
    /// must see the zero address as previous owner and the minter as
    /// operator.
    #[concordium_test]
    fn test_safe_mint_to_contract() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = SafeMintParams {
            to: ADDRESS_RECEIVER,
            uri: None,
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::new(&mut state_builder, ADDRESS_ADMIN, default_royalty(), false);
        let mut host = TestHost::new(state, state_builder);
        host.setup_mock_entrypoint(
            RECEIVER_CONTRACT,
            hook_entrypoint(),
            hook_check_mock(
                |hook: &OnReceivingNftParams| {
                    hook.token_id == TOKEN_1
                        && hook.operator == ADDRESS_7
                        && hook.from == ZERO_ADDRESS
                },
                true,
            ),
        );

        let result: ContractResult<()> = safe_mint(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        claim_eq!(host.state().owner_of(&TOKEN_1), Ok(ADDRESS_RECEIVER));
        claim_eq!(host.state().balance_of(&ADDRESS_RECEIVER), Ok(1));
    }

    /// Test safe minting rolls everything back when the receiving contract
    /// refuses the token.
    #[concordium_test]
    fn test_safe_mint_rejected_by_receiver() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = SafeMintParams {
            to: ADDRESS_RECEIVER,
            uri: None,
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = State::new(&mut state_builder, ADDRESS_ADMIN, default_royalty(), false);
        let mut host = TestHost::new(state, state_builder);
        host.setup_mock_entrypoint(RECEIVER_CONTRACT, hook_entrypoint(), hook_reply_mock(false));

        let result = host.with_rollback(|host| safe_mint(&ctx, host, &mut logger));
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::CallbackRejected.into(),
            "Error is expected to be CallbackRejected"
        );

        // The mint never happened.
        claim_eq!(host.state().owner_of(&TOKEN_1), Err(ContractError::InvalidTokenId));
        claim_eq!(host.state().balance_of(&ADDRESS_RECEIVER), Ok(0));
        claim_eq!(host.state().next_token_id, 1, "Counter must be rolled back");
    }

    /// Test transfer succeeds when `from` is the sender: ownership moves,
    /// balances move in lock-step and the event is logged.
    #[concordium_test]
    fn test_transfer_by_owner() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = TransferParams {
            from: ADDRESS_7,
            to: ADDRESS_8,
            token_id: TOKEN_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = transfer_from(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim_eq!(host.state().owner_of(&TOKEN_1), Ok(ADDRESS_8));
        claim_eq!(
            host.state().balance_of(&ADDRESS_7),
            Ok(0),
            "Sender balance should decrease by 1"
        );
        claim_eq!(
            host.state().balance_of(&ADDRESS_8),
            Ok(1),
            "Receiver balance should increase by 1"
        );

        claim_eq!(logger.logs.len(), 1, "Only one event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&RialtoEvent::Transfer(TransferEvent {
                token_id: TOKEN_1,
                from: ADDRESS_7,
                to: ADDRESS_8,
            })),
            "Incorrect event emitted"
        );
    }

    /// Test transfer fails when the sender is neither owner, approved nor
    /// operator.
    #[concordium_test]
    fn test_transfer_not_authorized() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_8);

        let params = TransferParams {
            from: ADDRESS_7,
            to: ADDRESS_8,
            token_id: TOKEN_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = transfer_from(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Error is expected to be Unauthorized"
        );
        claim_eq!(host.state().owner_of(&TOKEN_1), Ok(ADDRESS_7));
    }

    /// Test transfer of a token that was never minted fails.
    #[concordium_test]
    fn test_transfer_nonexistent_token() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = TransferParams {
            from: ADDRESS_7,
            to: ADDRESS_8,
            token_id: TOKEN_99,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = transfer_from(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::InvalidTokenId,
            "Error is expected to be InvalidTokenId"
        );
    }

    /// Test transfer fails when `from` is not the current owner, even when
    /// the sender would otherwise be authorized.
    #[concordium_test]
    fn test_transfer_wrong_from() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = TransferParams {
            from: ADDRESS_8,
            to: ADDRESS_9,
            token_id: TOKEN_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = transfer_from(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::TokenMismatch.into(),
            "Error is expected to be TokenMismatch"
        );
        claim_eq!(host.state().owner_of(&TOKEN_1), Ok(ADDRESS_7));
    }

    /// Test transfer to the zero address fails.
    #[concordium_test]
    fn test_transfer_to_zero_address() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = TransferParams {
            from: ADDRESS_7,
            to: ZERO_ADDRESS,
            token_id: TOKEN_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = transfer_from(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::InvalidRecipient.into(),
            "Error is expected to be InvalidRecipient"
        );
        claim_eq!(host.state().owner_of(&TOKEN_1), Ok(ADDRESS_7));
    }

    /// Test transfer by the single approved account, and that the approval
    /// is cleared by the transfer.
    #[concordium_test]
    fn test_transfer_by_approved_account() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_9);

        let params = TransferParams {
            from: ADDRESS_7,
            to: ADDRESS_8,
            token_id: TOKEN_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        state.approve_token(TOKEN_1, ADDRESS_9);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = transfer_from(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim_eq!(host.state().owner_of(&TOKEN_1), Ok(ADDRESS_8));
        claim_eq!(
            host.state().approved_for(&TOKEN_1),
            None,
            "Approval must be cleared on transfer"
        );

        // The cleared approval no longer authorizes a second transfer.
        let params = TransferParams {
            from: ADDRESS_8,
            to: ADDRESS_9,
            token_id: TOKEN_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<()> = transfer_from(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized);
    }

    /// Test transfer succeeds when the sender is an operator of the owner.
    #[concordium_test]
    fn test_transfer_by_operator() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_9);

        let params = TransferParams {
            from: ADDRESS_7,
            to: ADDRESS_8,
            token_id: TOKEN_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        state.set_operator(&ADDRESS_7, &ADDRESS_9, true, &mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = transfer_from(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        claim_eq!(host.state().owner_of(&TOKEN_1), Ok(ADDRESS_8));
        claim_eq!(host.state().balance_of(&ADDRESS_7), Ok(0));
        claim_eq!(host.state().balance_of(&ADDRESS_8), Ok(1));
    }

    /// Test safe transfer to a plain account performs no handshake at all.
    /// No mock is registered, so an attempted hook invocation would fail the
    /// test.
    #[concordium_test]
    fn test_safe_transfer_to_account_skips_handshake() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = SafeTransferParams {
            from: ADDRESS_7,
            to: ADDRESS_8,
            token_id: TOKEN_1,
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = safe_transfer_from(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        claim_eq!(host.state().owner_of(&TOKEN_1), Ok(ADDRESS_8));
    }

    /// Test safe transfer to a contract which acknowledges receipt. The hook
    /// must see the sender as operator and the previous owner as `from`.
    #[concordium_test]
    fn test_safe_transfer_accepted_by_receiver() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_9);

        let params = SafeTransferParams {
            from: ADDRESS_7,
            to: ADDRESS_RECEIVER,
            token_id: TOKEN_1,
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        state.set_operator(&ADDRESS_7, &ADDRESS_9, true, &mut state_builder);
        let mut host = TestHost::new(state, state_builder);
        host.setup_mock_entrypoint(
            RECEIVER_CONTRACT,
            hook_entrypoint(),
            hook_check_mock(
                |hook: &OnReceivingNftParams| {
                    hook.token_id == TOKEN_1
                        && hook.operator == ADDRESS_9
                        && hook.from == ADDRESS_7
                },
                true,
            ),
        );

        let result: ContractResult<()> = safe_transfer_from(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        claim_eq!(host.state().owner_of(&TOKEN_1), Ok(ADDRESS_RECEIVER));
        claim_eq!(host.state().balance_of(&ADDRESS_RECEIVER), Ok(1));
    }

    /// Test safe transfer whose receiver answers `false`: the call fails
    /// with CallbackRejected and ownership, balances and the approval are
    /// fully rolled back.
    #[concordium_test]
    fn test_safe_transfer_rejected_by_receiver() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = SafeTransferParams {
            from: ADDRESS_7,
            to: ADDRESS_RECEIVER,
            token_id: TOKEN_1,
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        state.approve_token(TOKEN_1, ADDRESS_9);
        let mut host = TestHost::new(state, state_builder);
        host.setup_mock_entrypoint(RECEIVER_CONTRACT, hook_entrypoint(), hook_reply_mock(false));

        let result = host.with_rollback(|host| safe_transfer_from(&ctx, host, &mut logger));
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::CallbackRejected.into(),
            "Error is expected to be CallbackRejected"
        );

        // Nothing moved: owner, balances and even the approval are intact.
        claim_eq!(host.state().owner_of(&TOKEN_1), Ok(ADDRESS_7));
        claim_eq!(host.state().balance_of(&ADDRESS_7), Ok(1));
        claim_eq!(host.state().balance_of(&ADDRESS_RECEIVER), Ok(0));
        claim_eq!(host.state().approved_for(&TOKEN_1), Some(ADDRESS_9));
    }

    /// Test safe transfer whose receiver replies with a non-boolean value:
    /// distinguishable from a refusal.
    #[concordium_test]
    fn test_safe_transfer_malformed_reply() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = SafeTransferParams {
            from: ADDRESS_7,
            to: ADDRESS_RECEIVER,
            token_id: TOKEN_1,
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);
        host.setup_mock_entrypoint(RECEIVER_CONTRACT, hook_entrypoint(), hook_reply_mock(7u8));

        let result = host.with_rollback(|host| safe_transfer_from(&ctx, host, &mut logger));
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::CallbackMalformed.into(),
            "Error is expected to be CallbackMalformed"
        );
        claim_eq!(host.state().owner_of(&TOKEN_1), Ok(ADDRESS_7));
    }

    /// Test safe transfer whose receiver replies with a boolean followed by
    /// trailing bytes: also malformed, even though it starts with `true`.
    #[concordium_test]
    fn test_safe_transfer_overlong_reply() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = SafeTransferParams {
            from: ADDRESS_7,
            to: ADDRESS_RECEIVER,
            token_id: TOKEN_1,
            data: AdditionalData::empty(),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);
        host.setup_mock_entrypoint(
            RECEIVER_CONTRACT,
            hook_entrypoint(),
            hook_reply_mock(OverlongReply {
                flag: true,
                extra: 1,
            }),
        );

        let result = host.with_rollback(|host| safe_transfer_from(&ctx, host, &mut logger));
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::CallbackMalformed.into(),
            "Error is expected to be CallbackMalformed"
        );
        claim_eq!(host.state().owner_of(&TOKEN_1), Ok(ADDRESS_7));
    }

    /// Test approving an account and that the appropriate event is logged.
    #[concordium_test]
    fn test_approve() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = ApproveParams {
            approved: ADDRESS_9,
            token_id: TOKEN_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = approve(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim_eq!(host.state().approved_for(&TOKEN_1), Some(ADDRESS_9));
        claim_eq!(logger.logs.len(), 1, "One event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&RialtoEvent::Approval(ApprovalEvent {
                token_id: TOKEN_1,
                owner: ADDRESS_7,
                approved: ADDRESS_9,
            })),
            "Incorrect event emitted"
        );
    }

    /// Test approving twice: only the latest approval is in effect.
    #[concordium_test]
    fn test_approve_overwrites() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let params = ApproveParams {
            approved: ADDRESS_9,
            token_id: TOKEN_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<()> = approve(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        let params = ApproveParams {
            approved: ADDRESS_8,
            token_id: TOKEN_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<()> = approve(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim_eq!(
            host.state().approved_for(&TOKEN_1),
            Some(ADDRESS_8),
            "Only the latest approval may be in effect"
        );
    }

    /// Test approving the current owner fails.
    #[concordium_test]
    fn test_approve_owner_fails() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = ApproveParams {
            approved: ADDRESS_7,
            token_id: TOKEN_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = approve(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            CustomContractError::SelfApproval.into(),
            "Error is expected to be SelfApproval"
        );
        claim_eq!(host.state().approved_for(&TOKEN_1), None);
    }

    /// Test approval by an account that is neither owner nor operator fails.
    #[concordium_test]
    fn test_approve_not_authorized() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_8);

        let params = ApproveParams {
            approved: ADDRESS_9,
            token_id: TOKEN_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = approve(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized);
    }

    /// Test an operator may set the approval on behalf of the owner.
    #[concordium_test]
    fn test_approve_by_operator() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_9);

        let params = ApproveParams {
            approved: ADDRESS_8,
            token_id: TOKEN_1,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        state.set_operator(&ADDRESS_7, &ADDRESS_9, true, &mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = approve(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        claim_eq!(host.state().approved_for(&TOKEN_1), Some(ADDRESS_8));
    }

    /// Test approving a token that does not exist fails.
    #[concordium_test]
    fn test_approve_nonexistent_token() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = ApproveParams {
            approved: ADDRESS_9,
            token_id: TOKEN_99,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = approve(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::InvalidTokenId);
    }

    /// Test `getApproved` returns the zero address when no approval is set
    /// and fails for unknown tokens.
    #[concordium_test]
    fn test_get_approved() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let parameter_bytes = to_bytes(&TOKEN_1);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<Address> = get_approved(&ctx, &host);
        claim_eq!(
            result,
            Ok(ZERO_ADDRESS),
            "Unset approval must read as the zero address"
        );

        host.state_mut().approve_token(TOKEN_1, ADDRESS_9);
        let result: ContractResult<Address> = get_approved(&ctx, &host);
        claim_eq!(result, Ok(ADDRESS_9));

        let parameter_bytes = to_bytes(&TOKEN_99);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<Address> = get_approved(&ctx, &host);
        claim_eq!(result, Err(ContractError::InvalidTokenId));
    }

    /// Test granting and revoking an operator, with events.
    #[concordium_test]
    fn test_set_approval_for_all() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let params = SetApprovalForAllParams {
            operator: ADDRESS_9,
            approved: true,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<()> = set_approval_for_all(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        claim!(host.state().is_operator(&ADDRESS_7, &ADDRESS_9));

        claim_eq!(logger.logs.len(), 1, "One event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&RialtoEvent::ApprovalForAll(ApprovalForAllEvent {
                owner: ADDRESS_7,
                operator: ADDRESS_9,
                approved: true,
            })),
            "Incorrect event emitted"
        );

        // Revoking works and is logged as well.
        let params = SetApprovalForAllParams {
            operator: ADDRESS_9,
            approved: false,
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<()> = set_approval_for_all(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        claim!(!host.state().is_operator(&ADDRESS_7, &ADDRESS_9));
        claim_eq!(logger.logs.len(), 2, "Two events should be logged");
    }

    /// Test the operator relation is directional and scoped to the granting
    /// owner.
    #[concordium_test]
    fn test_is_approved_for_all() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        state.set_operator(&ADDRESS_7, &ADDRESS_9, true, &mut state_builder);
        let host = TestHost::new(state, state_builder);

        let query = OperatorQuery {
            owner: ADDRESS_7,
            operator: ADDRESS_9,
        };
        let parameter_bytes = to_bytes(&query);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<bool> = is_approved_for_all(&ctx, &host);
        claim_eq!(result, Ok(true));

        // Reversed direction and unrelated owner are both false.
        let query = OperatorQuery {
            owner: ADDRESS_9,
            operator: ADDRESS_7,
        };
        let parameter_bytes = to_bytes(&query);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<bool> = is_approved_for_all(&ctx, &host);
        claim_eq!(result, Ok(false));

        let query = OperatorQuery {
            owner: ADDRESS_8,
            operator: ADDRESS_9,
        };
        let parameter_bytes = to_bytes(&query);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<bool> = is_approved_for_all(&ctx, &host);
        claim_eq!(result, Ok(false));
    }

    /// Test `balanceOf` for a fresh address defaults to zero and the zero
    /// address is rejected.
    #[concordium_test]
    fn test_balance_of() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let host = TestHost::new(state, state_builder);

        let parameter_bytes = to_bytes(&ADDRESS_7);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<u64> = balance_of(&ctx, &host);
        claim_eq!(result, Ok(1));

        let parameter_bytes = to_bytes(&ADDRESS_8);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<u64> = balance_of(&ctx, &host);
        claim_eq!(result, Ok(0), "Unknown addresses default to zero");

        let parameter_bytes = to_bytes(&ZERO_ADDRESS);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<u64> = balance_of(&ctx, &host);
        claim_eq!(
            result,
            Err(CustomContractError::InvalidAccount.into()),
            "The zero address must be rejected"
        );
    }

    /// Test `ownerOf` fails for tokens that were never minted.
    #[concordium_test]
    fn test_owner_of_nonexistent_token() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let host = TestHost::new(state, state_builder);

        let parameter_bytes = to_bytes(&TOKEN_99);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<Address> = owner_of(&ctx, &host);
        claim_eq!(result, Err(ContractError::InvalidTokenId));
    }

    /// Test burning: owner slot cleared, URI gone, balance decremented, and
    /// a `Transfer` event to the zero address.
    #[concordium_test]
    fn test_burn() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let parameter_bytes = to_bytes(&TOKEN_1);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = burn(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim_eq!(
            host.state().owner_of(&TOKEN_1),
            Err(ContractError::InvalidTokenId),
            "A burned token must not resolve to an owner"
        );
        claim_eq!(host.state().balance_of(&ADDRESS_7), Ok(0));
        claim_eq!(host.state().uris.get(&TOKEN_1).map(|uri| uri.clone()), None);

        claim!(
            logger.logs.contains(&to_bytes(&RialtoEvent::Transfer(TransferEvent {
                token_id: TOKEN_1,
                from: ADDRESS_7,
                to: ZERO_ADDRESS,
            }))),
            "Expected a Transfer event to the zero address"
        );

        // Burning again fails: the token is gone.
        let result: ContractResult<()> = burn(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::InvalidTokenId);
    }

    /// Test that only the owner itself may burn; operators and approved
    /// accounts may not.
    #[concordium_test]
    fn test_burn_not_owner() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_9);

        let parameter_bytes = to_bytes(&TOKEN_1);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        state.set_operator(&ADDRESS_7, &ADDRESS_9, true, &mut state_builder);
        state.approve_token(TOKEN_1, ADDRESS_9);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = burn(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Unauthorized,
            "Operators must not be able to burn"
        );
        claim_eq!(host.state().owner_of(&TOKEN_1), Ok(ADDRESS_7));
    }

    /// Test the URI read is tolerant: unknown and burned tokens read as
    /// absent instead of failing.
    #[concordium_test]
    fn test_token_uri() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let parameter_bytes = to_bytes(&TOKEN_1);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<Option<String>> = token_uri(&ctx, &host);
        claim_eq!(result, Ok(Some(String::from("ipfs://rialto/1"))));

        let parameter_bytes = to_bytes(&TOKEN_99);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<Option<String>> = token_uri(&ctx, &host);
        claim_eq!(result, Ok(None), "Unknown tokens read as absent");

        // After a burn the URI is gone as well.
        let parameter_bytes = to_bytes(&TOKEN_1);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<()> = burn(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");
        let result: ContractResult<Option<String>> = token_uri(&ctx, &host);
        claim_eq!(result, Ok(None), "Burned tokens read as absent");
    }

    /// Test the token snapshot view.
    #[concordium_test]
    fn test_view_token() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let mut state_builder = TestStateBuilder::new();
        let mut state = initial_state(&mut state_builder);
        state.approve_token(TOKEN_1, ADDRESS_9);
        let host = TestHost::new(state, state_builder);

        let parameter_bytes = to_bytes(&TOKEN_1);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<TokenView> = view_token(&ctx, &host);
        claim_eq!(
            result,
            Ok(TokenView {
                owner: ADDRESS_7,
                approved: Some(ADDRESS_9),
                uri: Some(String::from("ipfs://rialto/1")),
            })
        );

        let parameter_bytes = to_bytes(&TOKEN_99);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<TokenView> = view_token(&ctx, &host);
        claim_eq!(result, Err(ContractError::InvalidTokenId));
    }

    /// Test royalty quoting: floor rounding, and the 0 and 10000 bps
    /// boundaries are exact. The token's existence is deliberately not
    /// required.
    #[concordium_test]
    fn test_royalty_info() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let host = TestHost::new(state, state_builder);

        // 2.5% of 1000 is 25.
        let params = RoyaltyInfoParams {
            token_id: TOKEN_1,
            sale_price: Amount::from_micro_ccd(1_000),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<RoyaltyInfo> = royalty_info(&ctx, &host);
        claim_eq!(
            result,
            Ok(RoyaltyInfo {
                beneficiary: BENEFICIARY,
                amount: Amount::from_micro_ccd(25),
            })
        );

        // 2.5% of 999 rounds down to 24.
        let params = RoyaltyInfoParams {
            token_id: TOKEN_1,
            sale_price: Amount::from_micro_ccd(999),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<RoyaltyInfo> = royalty_info(&ctx, &host);
        claim_eq!(
            result.expect_report("Quote failed").amount,
            Amount::from_micro_ccd(24)
        );

        // A token that was never minted is quoted all the same.
        let params = RoyaltyInfoParams {
            token_id: TOKEN_99,
            sale_price: Amount::from_micro_ccd(1_000),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);
        let result: ContractResult<RoyaltyInfo> = royalty_info(&ctx, &host);
        claim!(result.is_ok(), "Quotes must not require token existence");
    }

    /// Test royalty quoting at the domain boundaries, against an instance
    /// configured at 100% and one at 0%.
    #[concordium_test]
    fn test_royalty_info_boundaries() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = RoyaltyInfoParams {
            token_id: TOKEN_1,
            sale_price: Amount::from_micro_ccd(u64::MAX),
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let royalty = Royalty {
            beneficiary: BENEFICIARY,
            rate: BasisPoints::new(MAX_BASIS_POINTS).expect_report("10000 bps is valid"),
        };
        let state = State::new(&mut state_builder, ADDRESS_ADMIN, royalty, false);
        let host = TestHost::new(state, state_builder);

        // At 100% the quote equals the sale price exactly, without overflow.
        let result: ContractResult<RoyaltyInfo> = royalty_info(&ctx, &host);
        claim_eq!(
            result.expect_report("Quote failed").amount,
            Amount::from_micro_ccd(u64::MAX)
        );

        let mut state_builder = TestStateBuilder::new();
        let royalty = Royalty {
            beneficiary: BENEFICIARY,
            rate: BasisPoints::new(0).expect_report("0 bps is valid"),
        };
        let state = State::new(&mut state_builder, ADDRESS_ADMIN, royalty, false);
        let host = TestHost::new(state, state_builder);

        // At 0% the quote is always zero.
        let result: ContractResult<RoyaltyInfo> = royalty_info(&ctx, &host);
        claim_eq!(result.expect_report("Quote failed").amount, Amount::zero());
    }

    /// Test nominating a new admin and the event logged for it.
    #[concordium_test]
    fn test_set_pending_owner() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_ADMIN);

        let parameter_bytes = to_bytes(&ADDRESS_8);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = set_pending_owner(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim_eq!(host.state().admin.current(), ADDRESS_ADMIN);
        claim_eq!(host.state().admin.pending(), Some(ADDRESS_8));
        claim_eq!(logger.logs.len(), 1, "One event should be logged");
        claim_eq!(
            logger.logs[0],
            to_bytes(&RialtoEvent::OwnershipTransferRequested(
                OwnershipTransferRequestedEvent {
                    current_owner: ADDRESS_ADMIN,
                    pending_owner: ADDRESS_8,
                }
            )),
            "Incorrect event emitted"
        );
    }

    /// Test nomination by anyone but the admin fails.
    #[concordium_test]
    fn test_set_pending_owner_not_admin() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let parameter_bytes = to_bytes(&ADDRESS_7);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = set_pending_owner(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized);
        claim_eq!(host.state().admin.pending(), None);
    }

    /// Test the nominated account claiming ownership: handover completes,
    /// the nomination is cleared and the event is logged.
    #[concordium_test]
    fn test_claim_ownership() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_ADMIN);

        let parameter_bytes = to_bytes(&ADDRESS_8);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = set_pending_owner(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        ctx.set_sender(ADDRESS_8);
        let result: ContractResult<()> = claim_ownership(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        claim_eq!(host.state().admin.current(), ADDRESS_8);
        claim_eq!(host.state().admin.pending(), None);
        claim_eq!(logger.logs.len(), 2, "Two events should be logged");
        claim_eq!(
            logger.logs[1],
            to_bytes(&RialtoEvent::OwnershipTransferred(
                OwnershipTransferredEvent {
                    previous_owner: ADDRESS_ADMIN,
                    new_owner: ADDRESS_8,
                }
            )),
            "Incorrect event emitted"
        );
    }

    /// Test claiming by any account other than the pending owner fails and
    /// leaves both slots unchanged.
    #[concordium_test]
    fn test_claim_ownership_not_pending() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_ADMIN);

        let parameter_bytes = to_bytes(&ADDRESS_8);
        ctx.set_parameter(&parameter_bytes);

        let mut logger = TestLogger::init();
        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = set_pending_owner(&ctx, &mut host, &mut logger);
        claim!(result.is_ok(), "Results in rejection");

        ctx.set_sender(ADDRESS_9);
        let result: ContractResult<()> = claim_ownership(&ctx, &mut host, &mut logger);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized);
        claim_eq!(host.state().admin.current(), ADDRESS_ADMIN);
        claim_eq!(host.state().admin.pending(), Some(ADDRESS_8));
    }

    /// Test the `supports` query over built-in standards, unknown standards
    /// and configured implementor overrides.
    #[concordium_test]
    fn test_supports() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = SupportsQueryParams {
            queries: vec![
                NFT_STANDARD_IDENTIFIER.to_owned(),
                ROYALTY_STANDARD_IDENTIFIER.to_owned(),
                StandardIdentifierOwned::new_unchecked("UNKNOWN-STD".to_string()),
            ],
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<SupportsQueryResponse> = supports(&ctx, &host);
        let response = result.expect_report("Query failed");
        claim_eq!(
            response.results,
            vec![
                SupportResult::Support,
                SupportResult::Support,
                SupportResult::NoSupport,
            ]
        );

        // An implementor override takes precedence over the built-in answer.
        host.state_mut().set_implementors(
            NFT_STANDARD_IDENTIFIER.to_owned(),
            vec![RECEIVER_CONTRACT],
        );
        let result: ContractResult<SupportsQueryResponse> = supports(&ctx, &host);
        let response = result.expect_report("Query failed");
        claim_eq!(
            response.results[0],
            SupportResult::SupportBy(vec![RECEIVER_CONTRACT])
        );
    }

    /// Test configuring implementors is admin-gated.
    #[concordium_test]
    fn test_set_implementors() {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(ADDRESS_7);

        let params = SetImplementorsParams {
            id: NFT_STANDARD_IDENTIFIER.to_owned(),
            implementors: vec![RECEIVER_CONTRACT],
        };
        let parameter_bytes = to_bytes(&params);
        ctx.set_parameter(&parameter_bytes);

        let mut state_builder = TestStateBuilder::new();
        let state = initial_state(&mut state_builder);
        let mut host = TestHost::new(state, state_builder);

        let result: ContractResult<()> = set_implementors(&ctx, &mut host);
        let err = result.expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized);

        ctx.set_sender(ADDRESS_ADMIN);
        let result: ContractResult<()> = set_implementors(&ctx, &mut host);
        claim!(result.is_ok(), "Results in rejection");
    }
}
