//! Pooled employer treasury and the tax vault.
//!
//! Both are scalar balances tracked in instance storage; the tokens backing
//! them sit in the contract's own token balance alongside stream escrow.

use soroban_sdk::{log, Address, Env};

use crate::auth::require_admin;
use crate::errors::ContractError;
use crate::events::{self, BonusPaid, TaxSwept, TreasuryDeposited, YieldSimulated};
use crate::funds;
use crate::storage::{
    get_tax_vault_balance, get_treasury_balance, set_tax_vault_balance, set_treasury_balance,
};

pub(crate) fn credit(env: &Env, amount: i128) -> Result<i128, ContractError> {
    let balance = get_treasury_balance(env)
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    set_treasury_balance(env, balance);
    Ok(balance)
}

pub(crate) fn debit(env: &Env, amount: i128) -> Result<i128, ContractError> {
    let balance = get_treasury_balance(env);
    if balance < amount {
        return Err(ContractError::InsufficientTreasury);
    }
    let balance = balance - amount;
    set_treasury_balance(env, balance);
    Ok(balance)
}

pub(crate) fn credit_tax(env: &Env, tax: i128) -> Result<(), ContractError> {
    if tax == 0 {
        return Ok(());
    }
    let balance = get_tax_vault_balance(env)
        .checked_add(tax)
        .ok_or(ContractError::ArithmeticOverflow)?;
    set_tax_vault_balance(env, balance);
    Ok(())
}

pub(crate) fn deposit(env: &Env, caller: &Address, amount: i128) -> Result<i128, ContractError> {
    require_admin(env, caller)?;
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    funds::pull(env, caller, amount)?;
    let treasury_balance = credit(env, amount)?;

    events::treasury_deposited(
        env,
        TreasuryDeposited {
            from: caller.clone(),
            amount,
            treasury_balance,
        },
    );
    Ok(treasury_balance)
}

/// Stand-in for an external yield source: the admin tops the treasury up
/// without it counting as an employer deposit.
pub(crate) fn simulate_yield(
    env: &Env,
    caller: &Address,
    amount: i128,
) -> Result<i128, ContractError> {
    require_admin(env, caller)?;
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    funds::pull(env, caller, amount)?;
    let treasury_balance = credit(env, amount)?;

    events::yield_simulated(
        env,
        caller,
        YieldSimulated {
            amount,
            treasury_balance,
        },
    );
    Ok(treasury_balance)
}

/// Immediate, untaxed payment out of the treasury.
pub(crate) fn trigger_bonus(
    env: &Env,
    caller: &Address,
    recipient: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    require_admin(env, caller)?;
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    let treasury_balance = debit(env, amount)?;
    funds::pay(env, recipient, amount)?;

    events::bonus_paid(
        env,
        BonusPaid {
            recipient: recipient.clone(),
            amount,
            treasury_balance,
        },
    );
    Ok(())
}

/// Sweep the whole tax vault to the admin.
pub(crate) fn withdraw_tax(env: &Env, caller: &Address) -> Result<i128, ContractError> {
    require_admin(env, caller)?;

    let amount = get_tax_vault_balance(env);
    if amount == 0 {
        return Err(ContractError::NoTaxToWithdraw);
    }

    set_tax_vault_balance(env, 0);
    funds::pay(env, caller, amount)?;

    log!(env, "tax vault swept", amount);
    events::tax_swept(
        env,
        TaxSwept {
            to: caller.clone(),
            amount,
        },
    );
    Ok(amount)
}
