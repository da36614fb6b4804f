//! Storage keys and helpers for the Asset Recovery contract

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{MultisigConfig, RecoveryRequest};

/// Storage keys for the recovery contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Boolean flag indicating contract initialization (instance storage)
    Initialized,
    /// Administrator identity (instance storage)
    Admin,
    /// Stellar Asset Contract address of the native currency (instance storage)
    NativeToken,
    /// Multisig governance configuration (instance storage)
    Config,
    /// Last assigned request ID (instance storage)
    RequestCount,
    /// Mutual-exclusion flag for the execution routine (instance storage)
    ExecutionLock,
    /// Membership flag for a specific signer (persistent storage)
    Signer(Address),
    /// List of all signer addresses (persistent storage)
    SignerList,
    /// A recovery request (persistent storage)
    Request(u64),
    /// List of signers that approved a request (persistent storage)
    RequestApprovals(u64),
}

// ============================================================================
// Initialization Helpers
// ============================================================================

/// Check if the contract is initialized
pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<DataKey, bool>(&DataKey::Initialized)
        .unwrap_or(false)
}

/// Mark the contract as initialized
pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

// ============================================================================
// Admin / Native Asset Helpers
// ============================================================================

/// Get the administrator identity
pub fn get_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("admin not found")
}

/// Set the administrator identity
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

/// Get the native currency's token contract address
pub fn get_native_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::NativeToken)
        .expect("native token not found")
}

/// Set the native currency's token contract address
pub fn set_native_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::NativeToken, token);
}

// ============================================================================
// Multisig Configuration Helpers
// ============================================================================

/// Get the multisig configuration
pub fn get_config(env: &Env) -> MultisigConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("config not found")
}

/// Set the multisig configuration
pub fn set_config(env: &Env, config: &MultisigConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

/// Get the list of all signer addresses
pub fn get_signer_list(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::SignerList)
        .unwrap_or_else(|| Vec::new(env))
}

/// Set the list of all signer addresses
pub fn set_signer_list(env: &Env, signers: &Vec<Address>) {
    env.storage()
        .persistent()
        .set(&DataKey::SignerList, signers);
}

/// Check if an address is a current signer
pub fn is_signer(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<DataKey, bool>(&DataKey::Signer(address.clone()))
        .unwrap_or(false)
}

/// Record an address as a signer
pub fn set_signer(env: &Env, address: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Signer(address.clone()), &true);
}

/// Revoke an address's signer membership
pub fn remove_signer(env: &Env, address: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Signer(address.clone()));
}

/// Remove every current signer membership and empty the list
pub fn clear_signers(env: &Env) {
    let signers = get_signer_list(env);
    for signer in signers.iter() {
        remove_signer(env, &signer);
    }
    set_signer_list(env, &Vec::new(env));
}

// ============================================================================
// Request Helpers
// ============================================================================

/// Get the last assigned request ID
pub fn get_request_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get::<DataKey, u64>(&DataKey::RequestCount)
        .unwrap_or(0)
}

/// Set the last assigned request ID
pub fn set_request_count(env: &Env, count: u64) {
    env.storage().instance().set(&DataKey::RequestCount, &count);
}

/// Get a recovery request by ID
pub fn get_request(env: &Env, request_id: u64) -> Option<RecoveryRequest> {
    env.storage().persistent().get(&DataKey::Request(request_id))
}

/// Set a recovery request
pub fn set_request(env: &Env, request: &RecoveryRequest) {
    env.storage()
        .persistent()
        .set(&DataKey::Request(request.id), request);
}

/// Get the list of signers that approved a request
pub fn get_request_approvals(env: &Env, request_id: u64) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::RequestApprovals(request_id))
        .unwrap_or_else(|| Vec::new(env))
}

/// Set the list of signers that approved a request
pub fn set_request_approvals(env: &Env, request_id: u64, approvals: &Vec<Address>) {
    env.storage()
        .persistent()
        .set(&DataKey::RequestApprovals(request_id), approvals);
}

/// Check if a signer has approved a request
pub fn has_approved(env: &Env, request_id: u64, signer: &Address) -> bool {
    let approvals = get_request_approvals(env, request_id);
    approvals.contains(signer)
}

// ============================================================================
// Execution Lock Helpers
// ============================================================================

/// Check if an execution is in flight
pub fn is_execution_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get::<DataKey, bool>(&DataKey::ExecutionLock)
        .unwrap_or(false)
}

/// Acquire the execution lock
pub fn set_execution_lock(env: &Env) {
    env.storage().instance().set(&DataKey::ExecutionLock, &true);
}

/// Release the execution lock
pub fn clear_execution_lock(env: &Env) {
    env.storage().instance().remove(&DataKey::ExecutionLock);
}
