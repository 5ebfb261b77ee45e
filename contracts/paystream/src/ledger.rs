//! Stream creation.

use soroban_sdk::{log, Address, Env};

use crate::accrual::nominal_stop_time;
use crate::errors::ContractError;
use crate::events::{self, StreamCreated};
use crate::storage::{
    add_employee, get_active_stream, has_stream, push_sender_stream, save_stream,
    set_active_stream,
};
use crate::types::{Funding, Stream, StreamStatus};
use crate::{funds, treasury};

#[allow(clippy::too_many_arguments)]
fn validate_stream_params(
    env: &Env,
    sender: &Address,
    stream_id: u64,
    recipient: &Address,
    rate_per_second: i128,
    deposit: i128,
    start_time: u64,
    tax_percent: u32,
    funding: Funding,
) -> Result<(), ContractError> {
    if deposit <= 0 || rate_per_second <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if sender == recipient {
        return Err(ContractError::InvalidRecipient);
    }
    if tax_percent > 100 {
        return Err(ContractError::InvalidTaxPercent);
    }
    if start_time < env.ledger().timestamp() {
        return Err(ContractError::InvalidStartTime);
    }
    if has_stream(env, stream_id) {
        return Err(ContractError::StreamAlreadyExists);
    }
    // Employers may each stream to the same employee; the pooled treasury
    // pays an employee through one stream at a time.
    if funding == Funding::Treasury && get_active_stream(env, recipient).is_some() {
        return Err(ContractError::RecipientHasActiveStream);
    }
    Ok(())
}

/// Validate, fund and persist a new stream. Authorization of `sender` is the
/// caller's job; funding follows `funding`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn create(
    env: &Env,
    sender: Address,
    stream_id: u64,
    recipient: Address,
    rate_per_second: i128,
    deposit: i128,
    start_time: Option<u64>,
    tax_percent: u32,
    funding: Funding,
) -> Result<u64, ContractError> {
    let start_time = start_time.unwrap_or_else(|| env.ledger().timestamp());
    validate_stream_params(
        env,
        &sender,
        stream_id,
        &recipient,
        rate_per_second,
        deposit,
        start_time,
        tax_percent,
        funding,
    )?;

    // Funds move before any stream state is written; a failure here leaves
    // the ledger untouched.
    match funding {
        Funding::Escrow => funds::pull(env, &sender, deposit)?,
        Funding::Treasury => {
            treasury::debit(env, deposit)?;
        }
    }

    let stream = Stream {
        stream_id,
        sender: sender.clone(),
        recipient: recipient.clone(),
        funding,
        rate_per_second,
        deposit,
        tax_percent,
        start_time,
        stop_time: nominal_stop_time(start_time, rate_per_second, deposit, 0),
        withdrawn: 0,
        status: StreamStatus::Active,
        paused_at: None,
        total_paused_duration: 0,
        cancelled_at: None,
    };
    save_stream(env, &stream);
    push_sender_stream(env, &sender, stream_id);
    if funding == Funding::Treasury {
        set_active_stream(env, &recipient, stream_id);
        add_employee(env, &recipient);
    }

    log!(env, "stream created", stream_id, deposit);
    events::stream_created(
        env,
        StreamCreated {
            stream_id,
            sender,
            recipient,
            funding,
            rate_per_second,
            deposit,
            start_time,
            tax_percent,
        },
    );
    Ok(stream_id)
}
