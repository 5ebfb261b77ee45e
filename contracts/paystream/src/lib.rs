#![no_std]

mod accrual;
mod auth;
mod errors;
mod events;
mod funds;
mod ledger;
mod lifecycle;
mod settlement;
mod storage;
mod treasury;
mod types;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use accrual::calculate_vested_amount;
pub use errors::ContractError;
pub use events::{
    BonusAdded, BonusPaid, StreamCancelled, StreamCreated, StreamPaused, StreamResumed, TaxSwept,
    TreasuryDeposited, Withdrawn, YieldSimulated,
};
pub use settlement::split_tax;
pub use types::{Config, DataKey, Funding, Stream, StreamStatus, Withdrawal};

// ---------------------------------------------------------------------------
// Contract Implementation
// ---------------------------------------------------------------------------

#[contract]
pub struct PayStream;

#[contractimpl]
impl PayStream {
    /// Initialise the contract with the payroll token and admin (employer) address.
    ///
    /// Must be called exactly once before any other operation. The token is used for
    /// every escrow pull, payout, treasury deposit and tax sweep. The admin owns the
    /// treasury and the tax vault, manages the employer allow-list, and may pause,
    /// resume or cancel any stream.
    ///
    /// # Storage
    /// - Stores `Config { token, admin }` in instance storage under `DataKey::Config`
    /// - Zeroes the treasury and tax vault balances
    /// - Extends instance TTL
    ///
    /// # Errors
    /// - `AlreadyInitialized` if called more than once
    pub fn init(env: Env, token: Address, admin: Address) -> Result<(), ContractError> {
        if storage::has_config(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        storage::set_config(&env, &Config { token, admin });
        storage::set_treasury_balance(&env, 0);
        storage::set_tax_vault_balance(&env, 0);
        Ok(())
    }

    /// Create an escrow-funded salary stream.
    ///
    /// Pulls `deposit` from `sender` using the allowance `sender` granted this
    /// contract, then opens a stream that vests `rate_per_second` per unpaused
    /// second from `start_time` until the deposit is exhausted.
    ///
    /// # Parameters
    /// - `sender`: employer funding the stream (admin or allow-listed employer)
    /// - `stream_id`: caller-chosen identity; ids are never reused
    /// - `recipient`: employee receiving the salary
    /// - `rate_per_second`: smallest token unit per second (must be > 0)
    /// - `deposit`: total escrow and vesting cap (must be > 0)
    /// - `start_time`: when accrual begins; `None` means now, earlier than now is rejected
    /// - `tax_percent`: share of every payout withheld into the tax vault, `0..=100`
    ///
    /// # Errors
    /// - `Unauthorized` if `sender` is neither admin nor an allow-listed employer
    /// - `InvalidAmount`, `InvalidRecipient`, `InvalidTaxPercent`, `InvalidStartTime`
    /// - `StreamAlreadyExists` if `stream_id` was ever used
    /// - `InsufficientAllowance` / `InsufficientBalance` if the escrow cannot be pulled
    ///
    /// # Events
    /// - `("created", stream_id)` → `StreamCreated`
    ///
    /// # Examples
    /// - Monthly salary of 3000 over a 30-day month:
    ///   `deposit = 3000`, `rate = 3000 / 2_592_000`, `tax_percent = 10`
    #[allow(clippy::too_many_arguments)]
    pub fn create_stream(
        env: Env,
        sender: Address,
        stream_id: u64,
        recipient: Address,
        rate_per_second: i128,
        deposit: i128,
        start_time: Option<u64>,
        tax_percent: u32,
    ) -> Result<u64, ContractError> {
        auth::require_employer(&env, &sender)?;
        ledger::create(
            &env,
            sender,
            stream_id,
            recipient,
            rate_per_second,
            deposit,
            start_time,
            tax_percent,
            Funding::Escrow,
        )
    }

    /// Create a stream whose escrow is reserved from the pooled treasury.
    ///
    /// Same parameters and errors as `create_stream`, except that only the admin may
    /// call it and a treasury shortfall fails with `InsufficientTreasury`. Treasury
    /// streams settle the recipient on pause and on cancel, and return unvested funds
    /// to the treasury rather than to a wallet.
    ///
    /// An employee is paid from the treasury through at most one non-cancelled
    /// stream (`RecipientHasActiveStream`), and is added to the employee roster the
    /// first time they get one.
    #[allow(clippy::too_many_arguments)]
    pub fn create_treasury_stream(
        env: Env,
        caller: Address,
        stream_id: u64,
        recipient: Address,
        rate_per_second: i128,
        deposit: i128,
        start_time: Option<u64>,
        tax_percent: u32,
    ) -> Result<u64, ContractError> {
        auth::require_admin(&env, &caller)?;
        ledger::create(
            &env,
            caller,
            stream_id,
            recipient,
            rate_per_second,
            deposit,
            start_time,
            tax_percent,
            Funding::Treasury,
        )
    }

    /// Withdraw vested salary.
    ///
    /// Pays `amount` (gross) out of the stream, or everything available when
    /// `amount` is `None`. `tax_percent` of the gross, rounded down, is withheld into
    /// the tax vault; the rest goes to the recipient.
    ///
    /// Works on active, paused and cancelled streams: pausing freezes accrual but
    /// never locks what already vested.
    ///
    /// # Errors
    /// - `Unauthorized` if `caller` is not the stream's recipient
    /// - `InvalidAmount` for a non-positive explicit amount
    /// - `AmountExceedsAvailable` if `amount > vested - withdrawn`
    /// - `NothingToWithdraw` if `amount` is `None` and nothing is available
    ///
    /// # Events
    /// - `("withdrew", stream_id)` → `Withdrawn { stream_id, recipient, net, tax }`
    ///
    /// # Examples
    /// - 10% tax, withdraw 100 → recipient receives 90, tax vault grows by 10
    pub fn withdraw(
        env: Env,
        caller: Address,
        stream_id: u64,
        amount: Option<i128>,
    ) -> Result<Withdrawal, ContractError> {
        settlement::withdraw(&env, &caller, stream_id, amount)
    }

    /// Pause an active stream. Caller must be the stream's sender or the admin.
    ///
    /// Accrual stops at the current ledger timestamp. Treasury-funded streams pay the
    /// recipient everything vested so far before freezing.
    ///
    /// # Errors
    /// - `Unauthorized`, `StreamNotFound`
    /// - `AlreadyPaused` if the stream is paused
    /// - `StreamCancelled` if the stream is cancelled
    pub fn pause_stream(env: Env, caller: Address, stream_id: u64) -> Result<(), ContractError> {
        lifecycle::pause(&env, &caller, stream_id)
    }

    /// Resume a paused stream. Caller must be the stream's sender or the admin.
    ///
    /// Accrual restarts from now; the paused interval is added to
    /// `total_paused_duration` and pushes `stop_time` back by the same amount.
    ///
    /// # Errors
    /// - `Unauthorized`, `StreamNotFound`
    /// - `NotPaused` if the stream is running
    /// - `StreamCancelled` if the stream is cancelled
    pub fn resume_stream(env: Env, caller: Address, stream_id: u64) -> Result<(), ContractError> {
        lifecycle::resume(&env, &caller, stream_id)
    }

    /// Cancel a stream. Caller must be the stream's sender or the admin.
    ///
    /// Vesting is frozen at the current timestamp and `deposit - vested` is refunded
    /// to the funding source. Cancellation is terminal: the id can never be reused,
    /// but the recipient becomes free to receive a new stream.
    ///
    /// # Behavior
    /// - Escrow streams: refund to the sender's wallet; the vested, unwithdrawn
    ///   remainder stays claimable by the recipient through `withdraw`
    /// - Treasury streams: the recipient is settled immediately and the refund is
    ///   credited back to the treasury
    ///
    /// # Errors
    /// - `Unauthorized`, `StreamNotFound`
    /// - `StreamCancelled` if already cancelled
    ///
    /// # Examples
    /// - 3000 over a month, cancelled at day 15 → sender refunded ~1500,
    ///   recipient can still withdraw ~1500 (~1350 net at 10% tax)
    pub fn cancel_stream(env: Env, caller: Address, stream_id: u64) -> Result<(), ContractError> {
        lifecycle::cancel(&env, &caller, stream_id)
    }

    /// Add a bonus spike to a stream, raising its escrow and vesting cap by `amount`.
    ///
    /// Escrow streams pull `amount` from the caller; treasury streams draw it from the
    /// treasury. The bonus vests at the stream's normal rate.
    ///
    /// # Errors
    /// - `Unauthorized`, `StreamNotFound`, `StreamCancelled`, `InvalidAmount`
    /// - `InsufficientAllowance` / `InsufficientBalance` / `InsufficientTreasury`
    ///
    /// # Events
    /// - `("bonus", stream_id)` → `BonusAdded { stream_id, amount, reason }`
    pub fn add_bonus_spike(
        env: Env,
        caller: Address,
        stream_id: u64,
        amount: i128,
        reason: String,
    ) -> Result<(), ContractError> {
        settlement::add_bonus_spike(&env, &caller, stream_id, amount, reason)
    }

    /// Pay `amount` from the treasury to `recipient` immediately, untaxed. Admin only.
    ///
    /// # Errors
    /// - `Unauthorized`, `InvalidAmount`, `InsufficientTreasury`
    pub fn trigger_bonus(
        env: Env,
        caller: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        treasury::trigger_bonus(&env, &caller, &recipient, amount)
    }

    /// Move `amount` from the admin's wallet into the pooled treasury.
    /// Returns the new treasury balance.
    pub fn deposit_treasury(env: Env, caller: Address, amount: i128) -> Result<i128, ContractError> {
        treasury::deposit(&env, &caller, amount)
    }

    /// Credit simulated yield to the treasury, funded from the admin's wallet.
    /// Returns the new treasury balance.
    pub fn simulate_yield(env: Env, caller: Address, amount: i128) -> Result<i128, ContractError> {
        treasury::simulate_yield(&env, &caller, amount)
    }

    /// Sweep the whole tax vault to the admin. Returns the amount swept.
    ///
    /// # Errors
    /// - `Unauthorized`, `NoTaxToWithdraw`
    pub fn withdraw_tax(env: Env, caller: Address) -> Result<i128, ContractError> {
        treasury::withdraw_tax(&env, &caller)
    }

    pub fn treasury_balance(env: Env) -> i128 {
        storage::get_treasury_balance(&env)
    }

    pub fn tax_vault_balance(env: Env) -> i128 {
        storage::get_tax_vault_balance(&env)
    }

    /// Complete stored state of a stream.
    pub fn get_stream(env: Env, stream_id: u64) -> Result<Stream, ContractError> {
        storage::load_stream(&env, stream_id)
    }

    /// Total vested as of the current ledger timestamp, withdrawn or not.
    ///
    /// | Status      | Return value                                          |
    /// |-------------|-------------------------------------------------------|
    /// | `Active`    | `min(unpaused_elapsed × rate, deposit)`               |
    /// | `Paused`    | value frozen at `paused_at`                           |
    /// | `Cancelled` | value frozen at `cancelled_at`                        |
    pub fn get_vested_amount(env: Env, stream_id: u64) -> Result<i128, ContractError> {
        let stream = storage::load_stream(&env, stream_id)?;
        Ok(accrual::vested_amount(&stream, env.ledger().timestamp()))
    }

    /// Vested minus already withdrawn.
    pub fn get_withdrawable_amount(env: Env, stream_id: u64) -> Result<i128, ContractError> {
        let stream = storage::load_stream(&env, stream_id)?;
        Ok(accrual::withdrawable_amount(
            &stream,
            env.ledger().timestamp(),
        ))
    }

    pub fn stream_exists(env: Env, stream_id: u64) -> bool {
        storage::has_stream(&env, stream_id)
    }

    /// Every stream id `sender` ever created, in creation order. Cancelled streams
    /// are not pruned.
    pub fn get_sender_streams(env: Env, sender: Address) -> Vec<u64> {
        storage::get_sender_streams(&env, &sender)
    }

    /// The recipient's current non-cancelled treasury stream, if any. Escrow
    /// streams are not tracked per recipient.
    pub fn get_recipient_stream(env: Env, recipient: Address) -> Option<u64> {
        storage::get_active_stream(&env, &recipient)
    }

    /// Everyone ever paid through a treasury stream, in hiring order. Cancelling
    /// a stream does not remove its recipient.
    pub fn get_employees(env: Env) -> Vec<Address> {
        storage::get_employees(&env)
    }

    pub fn get_employee_count(env: Env) -> u32 {
        storage::get_employees(&env).len()
    }
}

#[contractimpl]
impl PayStream {
    /// Retrieve the global contract configuration.
    ///
    /// # Errors
    /// - `NotInitialized` before `init`
    pub fn get_config(env: Env) -> Result<Config, ContractError> {
        storage::get_config(&env)
    }

    /// Rotate the admin key. Requires the current admin's authorization.
    ///
    /// The new admin immediately takes over the treasury, the tax vault, the
    /// employer allow-list and the admin override on every stream.
    ///
    /// # Events
    /// - `("admin", "updated")` → `(old_admin, new_admin)`
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        let mut config = storage::get_config(&env)?;
        let old_admin = config.admin.clone();

        // Only current admin can update admin
        old_admin.require_auth();

        config.admin = new_admin.clone();
        storage::set_config(&env, &config);

        events::admin_updated(&env, &old_admin, &new_admin);
        Ok(())
    }

    /// Add `employer` to (or remove it from) the allow-list of addresses that may
    /// call `create_stream`. Admin only.
    pub fn set_employer(
        env: Env,
        caller: Address,
        employer: Address,
        allowed: bool,
    ) -> Result<(), ContractError> {
        auth::require_admin(&env, &caller)?;
        storage::set_employer(&env, &employer, allowed);
        events::employer_updated(&env, &employer, allowed);
        Ok(())
    }

    /// Whether `address` may create escrow streams. The admin always may.
    pub fn is_employer(env: Env, address: Address) -> bool {
        let is_admin = storage::get_admin(&env)
            .map(|admin| admin == address)
            .unwrap_or(false);
        is_admin || storage::is_employer(&env, &address)
    }
}
