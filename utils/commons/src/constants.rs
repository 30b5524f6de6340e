use super::*;

/// The null account. A token whose owner slot would hold this value does not
/// exist; mints and burns are logged as transfers from and to this address.
pub const ZERO_ACCOUNT: AccountAddress = AccountAddress([0u8; 32]);

/// `ZERO_ACCOUNT` as an `Address`. Only the all-zero account address is a
/// sentinel; contract addresses are never treated as null.
pub const ZERO_ADDRESS: Address = Address::Account(ZERO_ACCOUNT);

/// Entrypoint a contract must expose to acknowledge receipt of a token
/// delivered through a safe transfer or safe mint.
pub const ON_RECEIVING_NFT_ENTRYPOINT: &str = "onNonFungibleTokenReceived";
