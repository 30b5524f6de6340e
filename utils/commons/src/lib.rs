//! Shared vocabulary of the Rialto contract suite: error taxonomy, token and
//! result types, the two-phase admin ownership primitive, basis-point
//! arithmetic and the safe-transfer receiver handshake types.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{admin::*, constants::*, errors::*, structs::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

mod admin;
mod constants;
mod errors;
mod structs;
mod types;
