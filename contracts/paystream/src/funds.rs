//! Token movements in and out of the contract.
//!
//! Sufficiency is checked up front so a shortfall surfaces as a typed error
//! instead of a trap inside the token contract.

use soroban_sdk::{token, Address, Env};

use crate::errors::ContractError;
use crate::storage::get_token;

/// Pull `amount` from `from` into the contract using the allowance `from`
/// granted to this contract.
pub(crate) fn pull(env: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    let token_client = token::Client::new(env, &get_token(env)?);
    let this = env.current_contract_address();

    if token_client.allowance(from, &this) < amount {
        return Err(ContractError::InsufficientAllowance);
    }
    if token_client.balance(from) < amount {
        return Err(ContractError::InsufficientBalance);
    }

    token_client.transfer_from(&this, from, &this, &amount);
    Ok(())
}

/// Pay `amount` out of the contract to `to`. Zero is a no-op.
pub(crate) fn pay(env: &Env, to: &Address, amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }

    let token_client = token::Client::new(env, &get_token(env)?);
    let this = env.current_contract_address();

    if token_client.balance(&this) < amount {
        return Err(ContractError::InsufficientBalance);
    }

    token_client.transfer(&this, to, &amount);
    Ok(())
}
