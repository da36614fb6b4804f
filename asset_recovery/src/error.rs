//! Error types for the Asset Recovery contract

use soroban_sdk::contracterror;

/// Asset recovery contract errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RecoveryError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller is not an approved signer
    Unauthorized = 3,
    /// Multisig governance is not enabled
    MultisigDisabled = 4,
    /// An address argument is invalid (reserved; Soroban addresses are
    /// well-formed by construction)
    InvalidAddress = 5,
    /// Recovery amount must be positive
    InvalidAmount = 6,
    /// Threshold is zero or exceeds the number of signers
    InvalidConfiguration = 7,
    /// The same signer appears more than once in the signer list
    DuplicateSigner = 8,
    /// No active recovery request exists under the given ID
    RequestNotFound = 9,
    /// Signer has already approved this request
    AlreadyApproved = 10,
    /// Requested amount exceeds the contract's current asset balance
    InsufficientBalance = 11,
    /// The asset transfer primitive refused or reverted
    TransferFailed = 12,
    /// Nested entry into the execution routine
    ReentrantCall = 13,
    /// Reserved, never produced
    InsufficientApprovals = 14,
    /// Reserved, never produced
    InvalidRecoveryRequest = 15,
}
