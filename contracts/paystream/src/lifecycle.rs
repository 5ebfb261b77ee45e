//! Pause / resume / cancel.
//!
//! ```text
//!   Active ──pause──▶ Paused ──resume──▶ Active
//!     │                  │
//!     └──────cancel──────┴──▶ Cancelled (terminal)
//! ```

use soroban_sdk::{log, Address, Env};

use crate::accrual::{nominal_stop_time, paused_duration, vested_amount, withdrawable_amount};
use crate::auth::require_sender_or_admin;
use crate::errors::ContractError;
use crate::events::{self, StreamCancelled, StreamPaused, StreamResumed};
use crate::settlement::settle;
use crate::storage::{clear_active_stream, load_stream, save_stream};
use crate::types::{Funding, StreamStatus};
use crate::{funds, treasury};

/// Freeze accrual. Treasury-funded streams are settled up to `now` first so
/// nothing is left queued while the stream sits paused.
pub(crate) fn pause(env: &Env, caller: &Address, stream_id: u64) -> Result<(), ContractError> {
    let mut stream = load_stream(env, stream_id)?;
    require_sender_or_admin(env, caller, &stream)?;

    match stream.status {
        StreamStatus::Active => {}
        StreamStatus::Paused => return Err(ContractError::AlreadyPaused),
        StreamStatus::Cancelled => return Err(ContractError::StreamCancelled),
    }

    let now = env.ledger().timestamp();
    let mut settled = 0;
    if stream.funding == Funding::Treasury {
        let available = withdrawable_amount(&stream, now);
        if available > 0 {
            settle(env, &mut stream, available)?;
            settled = available;
        }
    }

    stream.status = StreamStatus::Paused;
    stream.paused_at = Some(now);
    save_stream(env, &stream);

    events::stream_paused(
        env,
        StreamPaused {
            stream_id,
            paused_at: now,
            settled,
        },
    );
    Ok(())
}

/// Restart accrual from `now`. Paused time is never vested retroactively.
pub(crate) fn resume(env: &Env, caller: &Address, stream_id: u64) -> Result<(), ContractError> {
    let mut stream = load_stream(env, stream_id)?;
    require_sender_or_admin(env, caller, &stream)?;

    match stream.status {
        StreamStatus::Paused => {}
        StreamStatus::Active => return Err(ContractError::NotPaused),
        StreamStatus::Cancelled => return Err(ContractError::StreamCancelled),
    }

    let now = env.ledger().timestamp();
    let paused_at = stream.paused_at.unwrap_or(now);
    let total_paused_duration = stream
        .total_paused_duration
        .checked_add(paused_duration(stream.start_time, paused_at, now))
        .ok_or(ContractError::ArithmeticOverflow)?;

    stream.status = StreamStatus::Active;
    stream.paused_at = None;
    stream.total_paused_duration = total_paused_duration;
    stream.stop_time = nominal_stop_time(
        stream.start_time,
        stream.rate_per_second,
        stream.deposit,
        total_paused_duration,
    );
    save_stream(env, &stream);

    events::stream_resumed(
        env,
        StreamResumed {
            stream_id,
            resumed_at: now,
            total_paused_duration,
        },
    );
    Ok(())
}

/// Terminate the stream and return the unvested remainder to where it came
/// from.
///
/// - `Escrow`: the refund goes back to the sender's wallet; whatever vested
///   and was not withdrawn stays claimable through `withdraw`.
/// - `Treasury`: the recipient is settled in full right away and the refund
///   is credited back to the treasury.
///
/// Cancelling a treasury stream releases the recipient's slot, so a new
/// treasury stream can be opened for them under a fresh id.
pub(crate) fn cancel(env: &Env, caller: &Address, stream_id: u64) -> Result<(), ContractError> {
    let mut stream = load_stream(env, stream_id)?;
    require_sender_or_admin(env, caller, &stream)?;

    if stream.status == StreamStatus::Cancelled {
        return Err(ContractError::StreamCancelled);
    }

    let now = env.ledger().timestamp();
    let vested = vested_amount(&stream, now);
    let refund = stream.deposit - vested;

    // CEI: update state before external token transfer to reduce reentrancy risk.
    stream.status = StreamStatus::Cancelled;
    stream.cancelled_at = Some(now);
    save_stream(env, &stream);
    if stream.funding == Funding::Treasury {
        clear_active_stream(env, &stream.recipient);
    }

    let mut recipient_payout = 0;
    match stream.funding {
        Funding::Escrow => funds::pay(env, &stream.sender, refund)?,
        Funding::Treasury => {
            let available = withdrawable_amount(&stream, now);
            if available > 0 {
                settle(env, &mut stream, available)?;
                recipient_payout = available;
            }
            if refund > 0 {
                treasury::credit(env, refund)?;
            }
        }
    }

    log!(env, "stream cancelled", stream_id, refund);
    events::stream_cancelled(
        env,
        StreamCancelled {
            stream_id,
            recipient: stream.recipient.clone(),
            recipient_payout,
            sender_refund: refund,
        },
    );
    Ok(())
}
