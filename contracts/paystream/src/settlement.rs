//! Payouts to recipients and bonus spikes.

use soroban_sdk::{log, Address, Env, String};

use crate::accrual::{nominal_stop_time, withdrawable_amount};
use crate::auth::{require_recipient, require_sender_or_admin};
use crate::errors::ContractError;
use crate::events::{self, BonusAdded, Withdrawn};
use crate::storage::{load_stream, save_stream};
use crate::types::{Funding, Stream, StreamStatus, Withdrawal};
use crate::{funds, treasury};

/// Split a gross payout into `(net, tax)`.
///
/// Tax truncates toward zero, so any fractional remainder stays with the
/// recipient. `net + tax == amount` always holds.
pub fn split_tax(amount: i128, tax_percent: u32) -> Result<(i128, i128), ContractError> {
    if tax_percent > 100 {
        return Err(ContractError::InvalidTaxPercent);
    }
    let tax = amount
        .checked_mul(tax_percent as i128)
        .ok_or(ContractError::ArithmeticOverflow)?
        / 100;
    Ok((amount - tax, tax))
}

/// Pay `amount` (gross) of the stream's vested balance to its recipient,
/// withholding tax into the vault. The caller has already checked that
/// `amount` is withdrawable.
pub(crate) fn settle(
    env: &Env,
    stream: &mut Stream,
    amount: i128,
) -> Result<Withdrawal, ContractError> {
    let (net, tax) = split_tax(amount, stream.tax_percent)?;
    let withdrawn = stream
        .withdrawn
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;

    // CEI: record the payout before the external token transfer.
    stream.withdrawn = withdrawn;
    save_stream(env, stream);
    treasury::credit_tax(env, tax)?;

    funds::pay(env, &stream.recipient, net)?;

    events::withdrawn(
        env,
        Withdrawn {
            stream_id: stream.stream_id,
            recipient: stream.recipient.clone(),
            net,
            tax,
        },
    );
    Ok(Withdrawal {
        gross: amount,
        net,
        tax,
    })
}

/// Recipient-initiated withdrawal. `None` withdraws everything available.
///
/// Each call re-derives the available amount from stored state, so no
/// sequence of withdrawals can take more than has vested.
pub(crate) fn withdraw(
    env: &Env,
    caller: &Address,
    stream_id: u64,
    amount: Option<i128>,
) -> Result<Withdrawal, ContractError> {
    let mut stream = load_stream(env, stream_id)?;
    require_recipient(caller, &stream)?;

    let available = withdrawable_amount(&stream, env.ledger().timestamp());
    let amount = match amount {
        Some(amount) if amount <= 0 => return Err(ContractError::InvalidAmount),
        Some(amount) if amount > available => {
            return Err(ContractError::AmountExceedsAvailable)
        }
        Some(amount) => amount,
        None if available == 0 => return Err(ContractError::NothingToWithdraw),
        None => available,
    };

    settle(env, &mut stream, amount)
}

/// Raise a stream's escrow (and therefore its vesting cap) by `amount`.
pub(crate) fn add_bonus_spike(
    env: &Env,
    caller: &Address,
    stream_id: u64,
    amount: i128,
    reason: String,
) -> Result<(), ContractError> {
    let mut stream = load_stream(env, stream_id)?;
    require_sender_or_admin(env, caller, &stream)?;

    if stream.status == StreamStatus::Cancelled {
        return Err(ContractError::StreamCancelled);
    }
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    let deposit = stream
        .deposit
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;

    match stream.funding {
        Funding::Escrow => funds::pull(env, caller, amount)?,
        Funding::Treasury => {
            treasury::debit(env, amount)?;
        }
    }

    stream.deposit = deposit;
    stream.stop_time = nominal_stop_time(
        stream.start_time,
        stream.rate_per_second,
        stream.deposit,
        stream.total_paused_duration,
    );
    save_stream(env, &stream);

    log!(env, "bonus spike", stream_id, amount);
    events::bonus_added(
        env,
        BonusAdded {
            stream_id,
            amount,
            reason,
        },
    );
    Ok(())
}
