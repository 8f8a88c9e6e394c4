//! Common - shared asset types for the xbridge contracts
//!
//! Provides [`AssetInfo`], which addresses either a bank denom or a cw20
//! contract and builds the balance queries and transfer messages both kinds
//! support.

pub mod asset;

pub use asset::AssetInfo;
