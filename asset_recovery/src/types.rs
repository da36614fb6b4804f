//! Data types for the Asset Recovery contract

use soroban_sdk::{contracttype, Address};

/// A recoverable asset: the native currency or a fungible token contract.
///
/// The native asset resolves to the Stellar Asset Contract address supplied
/// at initialization; both kinds move through the standard token interface.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AssetRef {
    /// The environment's base currency
    Native,
    /// A fungible token contract
    Token(Address),
}

/// A pending or completed recovery request
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecoveryRequest {
    /// Monotonic identifier, assigned from 1, never reused
    pub id: u64,
    /// Identity that created the request
    pub requestor: Address,
    /// Identity that receives the recovered assets
    pub recipient: Address,
    /// Asset to recover
    pub asset: AssetRef,
    /// Quantity to recover, fixed at creation
    pub amount: i128,
    /// Ledger timestamp at creation
    pub created_at: u64,
    /// Number of distinct signer approvals recorded so far
    pub approval_count: u32,
    /// True from creation until executed; terminal once false
    pub active: bool,
}

/// Governance mode configuration
///
/// The signer list itself lives under its own storage key; this struct holds
/// the mode switch and threshold. When `enabled` is false the threshold is
/// zero and the signer set is empty.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MultisigConfig {
    /// Whether N-of-M approval is required for execution
    pub enabled: bool,
    /// Number of distinct approvals that trigger execution
    pub required_approvals: u32,
}
