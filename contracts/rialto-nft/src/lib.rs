//! A registry of unique, non-fungible tokens.
//!
//! # Description
//! Every token tracked by an instance of this contract has exactly one owner.
//! Tokens are created through the `mint` function (gated to the contract
//! admin when the instance is initialized with restricted minting) with ids
//! allocated from a monotonic counter, and destroyed by their owner through
//! `burn`.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.
//!
//! Ownership can move in three ways: by the owner itself, by an account
//! holding the single per-token approval (`approve`), or by an operator the
//! owner has blanket-authorized for all of its tokens (`setApprovalForAll`).
//! The per-token approval is cleared on every transfer.
//!
//! `safeTransferFrom` and `safeMint` additionally perform a receipt
//! handshake when the destination is a contract: the receiver's
//! `onNonFungibleTokenReceived` entrypoint is invoked and must answer with a
//! single boolean `true`, otherwise the whole call, including all registry
//! updates made before the handshake, is rolled back by the host.
//!
//! The contract also carries a royalty configuration fixed at
//! initialization (`royaltyInfo` quotes a basis-point share of a sale
//! price), a two-phase transferable admin ownership, and a CIS-0 style
//! `supports` query for interface introspection.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{constants::*, events::*, external::*, structs::*};
use commons::*;
use concordium_cis2::{
    AdditionalData, StandardIdentifier, StandardIdentifierOwned, SupportResult,
    SupportsQueryParams, SupportsQueryResponse, TokenIdU64, CIS0_STANDARD_IDENTIFIER,
};
use concordium_std::*;

mod constants;
mod contract;
mod events;
mod external;
mod impls;
mod structs;
