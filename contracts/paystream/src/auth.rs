//! Caller checks. Every state-changing entry point receives the caller as an
//! explicit `Address`; `require_auth` proves the caller signed, the comparison
//! proves the caller is allowed to act on the target.

use soroban_sdk::{Address, Env};

use crate::errors::ContractError;
use crate::storage::{get_admin, is_employer};
use crate::types::Stream;

pub(crate) fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let admin = get_admin(env)?;
    caller.require_auth();
    if *caller != admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// The admin, or an address on the employer allow-list.
pub(crate) fn require_employer(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let admin = get_admin(env)?;
    caller.require_auth();
    if *caller != admin && !is_employer(env, caller) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub(crate) fn require_sender_or_admin(
    env: &Env,
    caller: &Address,
    stream: &Stream,
) -> Result<(), ContractError> {
    let admin = get_admin(env)?;
    caller.require_auth();
    if *caller != stream.sender && *caller != admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub(crate) fn require_recipient(caller: &Address, stream: &Stream) -> Result<(), ContractError> {
    caller.require_auth();
    if *caller != stream.recipient {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}
