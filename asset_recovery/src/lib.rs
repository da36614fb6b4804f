#![no_std]

//! # Asset Recovery Contract
//!
//! A Soroban smart contract that recovers native-currency and fungible-token
//! balances accidentally deposited into the contract's own address, through an
//! auditable request/approval workflow.
//!
//! ## Governance modes
//! - Single-admin: the administrator executes requests directly
//! - Multisig: N-of-M approved signers approve; reaching the threshold
//!   executes the request automatically in the same call
//!
//! ## Security
//! - Requests are marked inactive before any asset moves (CEI pattern)
//! - A mutual-exclusion lock rejects nested entry into the execution routine
//! - A signer can approve a given request at most once
//! - A failed transfer aborts the whole invocation, leaving the request
//!   active and retryable

use soroban_sdk::{contract, contractevent, contractimpl, token, Address, Env, Vec};

mod error;
mod storage;
mod types;

pub use error::RecoveryError;
pub use types::{AssetRef, MultisigConfig, RecoveryRequest};

// ============================================================================
// Events
// ============================================================================

#[contractevent(topics = ["AssetRecovery", "INIT"])]
pub struct ContractInitialized {
    pub admin: Address,
    pub native_token: Address,
}

#[contractevent(topics = ["AssetRecovery", "REQUESTED"])]
pub struct RecoveryRequested {
    pub request_id: u64,
    pub requestor: Address,
    pub asset: AssetRef,
    pub amount: i128,
}

#[contractevent(topics = ["AssetRecovery", "APPROVED"])]
pub struct RecoveryApproved {
    pub request_id: u64,
    pub signer: Address,
    pub approval_count: u32,
}

#[contractevent(topics = ["AssetRecovery", "MSIG_ON"])]
pub struct MultisigEnabled {
    pub required_approvals: u32,
    pub signers: Vec<Address>,
}

#[contractevent(topics = ["AssetRecovery", "MSIG_OFF"])]
pub struct MultisigDisabled {
    pub timestamp: u64,
}

#[contractevent(topics = ["AssetRecovery", "NATIVE_OUT"])]
pub struct NativeRecovered {
    pub requestor: Address,
    pub recipient: Address,
    pub amount: i128,
}

#[contractevent(topics = ["AssetRecovery", "TOKEN_OUT"])]
pub struct TokenRecovered {
    pub asset: Address,
    pub requestor: Address,
    pub recipient: Address,
    pub amount: i128,
}

// ============================================================================
// Contract Implementation
// ============================================================================

#[contract]
pub struct AssetRecovery;

#[contractimpl]
impl AssetRecovery {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the recovery contract
    ///
    /// Multisig governance starts disabled: the threshold is zero and the
    /// signer set is empty until the admin calls `enable_multisig`.
    ///
    /// # Arguments
    /// * `admin` - Administrator identity, gates governance and execution
    /// * `native_token` - Stellar Asset Contract address of the native currency
    ///
    /// # Errors
    /// * `AlreadyInitialized` - Contract has already been initialized
    pub fn initialize(
        env: Env,
        admin: Address,
        native_token: Address,
    ) -> Result<(), RecoveryError> {
        if storage::is_initialized(&env) {
            return Err(RecoveryError::AlreadyInitialized);
        }

        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_native_token(&env, &native_token);
        storage::set_config(
            &env,
            &MultisigConfig {
                enabled: false,
                required_approvals: 0,
            },
        );
        storage::set_initialized(&env);

        ContractInitialized {
            admin,
            native_token,
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // Multisig Governance
    // ========================================================================

    /// Enable N-of-M multisig governance (admin only)
    ///
    /// Atomically replaces any previous signer set: no membership from the
    /// prior set survives the call.
    ///
    /// # Arguments
    /// * `signers` - New signer set
    /// * `required_approvals` - Number of distinct approvals that trigger execution
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    /// * `InvalidConfiguration` - Threshold is zero or exceeds the signer count
    /// * `DuplicateSigner` - The same identity appears twice in `signers`
    pub fn enable_multisig(
        env: Env,
        signers: Vec<Address>,
        required_approvals: u32,
    ) -> Result<(), RecoveryError> {
        if !storage::is_initialized(&env) {
            return Err(RecoveryError::NotInitialized);
        }

        let admin = storage::get_admin(&env);
        admin.require_auth();

        if required_approvals == 0 || required_approvals > signers.len() {
            return Err(RecoveryError::InvalidConfiguration);
        }

        // Revoke the outgoing set before installing the new one
        storage::clear_signers(&env);

        for signer in signers.iter() {
            if storage::is_signer(&env, &signer) {
                return Err(RecoveryError::DuplicateSigner);
            }
            storage::set_signer(&env, &signer);
        }
        storage::set_signer_list(&env, &signers);

        storage::set_config(
            &env,
            &MultisigConfig {
                enabled: true,
                required_approvals,
            },
        );

        MultisigEnabled {
            required_approvals,
            signers,
        }
        .publish(&env);

        Ok(())
    }

    /// Disable multisig governance (admin only)
    ///
    /// Reverts to single-admin mode: the threshold drops to zero and every
    /// signer membership is revoked.
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    pub fn disable_multisig(env: Env) -> Result<(), RecoveryError> {
        if !storage::is_initialized(&env) {
            return Err(RecoveryError::NotInitialized);
        }

        let admin = storage::get_admin(&env);
        admin.require_auth();

        storage::clear_signers(&env);
        storage::set_config(
            &env,
            &MultisigConfig {
                enabled: false,
                required_approvals: 0,
            },
        );

        MultisigDisabled {
            timestamp: env.ledger().timestamp(),
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // Recovery Requests
    // ========================================================================

    /// Create a recovery request (callable by anyone)
    ///
    /// The balance check is advisory: outstanding requests can together
    /// exceed the held balance, in which case the later execution fails with
    /// `TransferFailed`.
    ///
    /// # Arguments
    /// * `requestor` - Identity creating the request (must authorize the call)
    /// * `asset` - Native currency or a token contract
    /// * `recipient` - Identity to receive the recovered assets
    /// * `amount` - Positive quantity to recover
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    /// * `InvalidAmount` - Amount is zero or negative
    /// * `InsufficientBalance` - Amount exceeds the currently held balance
    pub fn request_recovery(
        env: Env,
        requestor: Address,
        asset: AssetRef,
        recipient: Address,
        amount: i128,
    ) -> Result<u64, RecoveryError> {
        if !storage::is_initialized(&env) {
            return Err(RecoveryError::NotInitialized);
        }

        requestor.require_auth();

        if amount <= 0 {
            return Err(RecoveryError::InvalidAmount);
        }

        let held = token::Client::new(&env, &asset_address(&env, &asset))
            .balance(&env.current_contract_address());
        if amount > held {
            return Err(RecoveryError::InsufficientBalance);
        }

        let request_id = storage::get_request_count(&env) + 1;
        storage::set_request_count(&env, request_id);

        let request = RecoveryRequest {
            id: request_id,
            requestor: requestor.clone(),
            recipient,
            asset: asset.clone(),
            amount,
            created_at: env.ledger().timestamp(),
            approval_count: 0,
            active: true,
        };
        storage::set_request(&env, &request);
        storage::set_request_approvals(&env, request_id, &Vec::new(&env));

        RecoveryRequested {
            request_id,
            requestor,
            asset,
            amount,
        }
        .publish(&env);

        Ok(request_id)
    }

    /// Approve a recovery request (signers only, multisig mode only)
    ///
    /// Recording the approval that meets the threshold executes the request
    /// synchronously in the same call: the caller observes either a pure
    /// approval or an approval-plus-execution as one atomic step.
    ///
    /// # Arguments
    /// * `signer` - Approving signer (must authorize the call)
    /// * `request_id` - ID of the request to approve
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    /// * `MultisigDisabled` - Governance is in single-admin mode
    /// * `Unauthorized` - Caller is not a current signer
    /// * `RequestNotFound` - No active request under this ID
    /// * `AlreadyApproved` - Signer has already approved this request
    /// * `TransferFailed` - Threshold reached but the asset transfer failed
    pub fn approve_recovery(
        env: Env,
        signer: Address,
        request_id: u64,
    ) -> Result<(), RecoveryError> {
        if !storage::is_initialized(&env) {
            return Err(RecoveryError::NotInitialized);
        }

        signer.require_auth();

        let config = storage::get_config(&env);
        if !config.enabled {
            return Err(RecoveryError::MultisigDisabled);
        }
        if !storage::is_signer(&env, &signer) {
            return Err(RecoveryError::Unauthorized);
        }

        let mut request =
            storage::get_request(&env, request_id).ok_or(RecoveryError::RequestNotFound)?;
        if !request.active {
            return Err(RecoveryError::RequestNotFound);
        }

        if storage::has_approved(&env, request_id, &signer) {
            return Err(RecoveryError::AlreadyApproved);
        }

        let mut approvals = storage::get_request_approvals(&env, request_id);
        approvals.push_back(signer.clone());
        storage::set_request_approvals(&env, request_id, &approvals);

        request.approval_count += 1;
        storage::set_request(&env, &request);

        RecoveryApproved {
            request_id,
            signer,
            approval_count: request.approval_count,
        }
        .publish(&env);

        if request.approval_count >= config.required_approvals {
            execute_request(&env, request_id)?;
        }

        Ok(())
    }

    /// Execute a recovery request (admin only, valid in either mode)
    ///
    /// The administrator may always force execution, bypassing multisig
    /// approval accumulation.
    ///
    /// # Errors
    /// * `NotInitialized` - Contract not initialized
    /// * `RequestNotFound` - No active request under this ID
    /// * `TransferFailed` - The asset transfer refused or reverted
    pub fn execute_recovery(env: Env, request_id: u64) -> Result<(), RecoveryError> {
        if !storage::is_initialized(&env) {
            return Err(RecoveryError::NotInitialized);
        }

        let admin = storage::get_admin(&env);
        admin.require_auth();

        execute_request(&env, request_id)
    }

    // ========================================================================
    // Balance Views
    // ========================================================================

    /// Native currency balance currently held by the contract
    pub fn get_native_balance(env: Env) -> Result<i128, RecoveryError> {
        if !storage::is_initialized(&env) {
            return Err(RecoveryError::NotInitialized);
        }
        let native = storage::get_native_token(&env);
        Ok(token::Client::new(&env, &native).balance(&env.current_contract_address()))
    }

    /// Balance of a given token currently held by the contract
    pub fn get_token_balance(env: Env, token: Address) -> Result<i128, RecoveryError> {
        if !storage::is_initialized(&env) {
            return Err(RecoveryError::NotInitialized);
        }
        Ok(token::Client::new(&env, &token).balance(&env.current_contract_address()))
    }

    // ========================================================================
    // Query Functions
    // ========================================================================

    /// Get a recovery request by ID
    pub fn get_request(env: Env, request_id: u64) -> Result<RecoveryRequest, RecoveryError> {
        if !storage::is_initialized(&env) {
            return Err(RecoveryError::NotInitialized);
        }
        storage::get_request(&env, request_id).ok_or(RecoveryError::RequestNotFound)
    }

    /// Get the list of signers that approved a request
    pub fn get_request_approvals(
        env: Env,
        request_id: u64,
    ) -> Result<Vec<Address>, RecoveryError> {
        if !storage::is_initialized(&env) {
            return Err(RecoveryError::NotInitialized);
        }
        if storage::get_request(&env, request_id).is_none() {
            return Err(RecoveryError::RequestNotFound);
        }
        Ok(storage::get_request_approvals(&env, request_id))
    }

    /// Get the last assigned request ID (0 before any request exists)
    pub fn get_request_count(env: Env) -> Result<u64, RecoveryError> {
        if !storage::is_initialized(&env) {
            return Err(RecoveryError::NotInitialized);
        }
        Ok(storage::get_request_count(&env))
    }

    /// Get the current governance configuration
    pub fn get_multisig_config(env: Env) -> Result<MultisigConfig, RecoveryError> {
        if !storage::is_initialized(&env) {
            return Err(RecoveryError::NotInitialized);
        }
        Ok(storage::get_config(&env))
    }

    /// Get all current signer addresses
    pub fn get_signers(env: Env) -> Result<Vec<Address>, RecoveryError> {
        if !storage::is_initialized(&env) {
            return Err(RecoveryError::NotInitialized);
        }
        Ok(storage::get_signer_list(&env))
    }

    /// Check if an address is a current signer
    pub fn is_signer(env: Env, address: Address) -> bool {
        if !storage::is_initialized(&env) {
            return false;
        }
        storage::is_signer(&env, &address)
    }

    /// Get the administrator identity
    pub fn get_admin(env: Env) -> Result<Address, RecoveryError> {
        if !storage::is_initialized(&env) {
            return Err(RecoveryError::NotInitialized);
        }
        Ok(storage::get_admin(&env))
    }
}

// ============================================================================
// Execution Routine
// ============================================================================

/// Resolve an asset reference to its token contract address
fn asset_address(env: &Env, asset: &AssetRef) -> Address {
    match asset {
        AssetRef::Native => storage::get_native_token(env),
        AssetRef::Token(address) => address.clone(),
    }
}

/// Single execution entry point shared by the multisig auto-trigger and the
/// admin's `execute_recovery`.
///
/// The request is marked inactive before the outbound transfer, so a
/// reentrant call on the same request fails with `RequestNotFound`; the lock
/// rejects nested entry into any execution. A failed transfer returns
/// `TransferFailed`, which reverts every storage write of the invocation,
/// leaving the request active and the lock released.
fn execute_request(env: &Env, request_id: u64) -> Result<(), RecoveryError> {
    if storage::is_execution_locked(env) {
        return Err(RecoveryError::ReentrantCall);
    }
    storage::set_execution_lock(env);

    let mut request =
        storage::get_request(env, request_id).ok_or(RecoveryError::RequestNotFound)?;
    if !request.active {
        return Err(RecoveryError::RequestNotFound);
    }

    // State mutation precedes the external transfer (CEI pattern)
    request.active = false;
    storage::set_request(env, &request);

    let contract = env.current_contract_address();
    let client = token::Client::new(env, &asset_address(env, &request.asset));
    match client.try_transfer(&contract, &request.recipient, &request.amount) {
        Ok(Ok(())) => {}
        _ => return Err(RecoveryError::TransferFailed),
    }

    match request.asset {
        AssetRef::Native => NativeRecovered {
            requestor: request.requestor,
            recipient: request.recipient,
            amount: request.amount,
        }
        .publish(env),
        AssetRef::Token(asset) => TokenRecovered {
            asset,
            requestor: request.requestor,
            recipient: request.recipient,
            amount: request.amount,
        }
        .publish(env),
    }

    storage::clear_execution_lock(env);

    Ok(())
}
