use soroban_sdk::{Address, Env, Vec};

use crate::errors::ContractError;
use crate::types::{Config, DataKey, Stream};

// ~1 day / ~7 days at 5s ledgers.
pub(crate) const TTL_THRESHOLD: u32 = 17280;
pub(crate) const TTL_EXTEND_TO: u32 = 120960;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

pub(crate) fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub(crate) fn get_config(env: &Env) -> Result<Config, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub(crate) fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn get_token(env: &Env) -> Result<Address, ContractError> {
    Ok(get_config(env)?.token)
}

pub(crate) fn get_admin(env: &Env) -> Result<Address, ContractError> {
    Ok(get_config(env)?.admin)
}

// ---------------------------------------------------------------------------
// Treasury & tax vault scalars
// ---------------------------------------------------------------------------

pub(crate) fn get_treasury_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TreasuryBalance)
        .unwrap_or(0)
}

pub(crate) fn set_treasury_balance(env: &Env, balance: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TreasuryBalance, &balance);
}

pub(crate) fn get_tax_vault_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TaxVaultBalance)
        .unwrap_or(0)
}

pub(crate) fn set_tax_vault_balance(env: &Env, balance: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TaxVaultBalance, &balance);
}

// ---------------------------------------------------------------------------
// Streams
// ---------------------------------------------------------------------------

pub(crate) fn has_stream(env: &Env, stream_id: u64) -> bool {
    env.storage().persistent().has(&DataKey::Stream(stream_id))
}

pub(crate) fn load_stream(env: &Env, stream_id: u64) -> Result<Stream, ContractError> {
    if !has_config(env) {
        return Err(ContractError::NotInitialized);
    }
    env.storage()
        .persistent()
        .get(&DataKey::Stream(stream_id))
        .ok_or(ContractError::StreamNotFound)
}

pub(crate) fn save_stream(env: &Env, stream: &Stream) {
    let key = DataKey::Stream(stream.stream_id);
    env.storage().persistent().set(&key, stream);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn get_sender_streams(env: &Env, sender: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::SenderStreams(sender.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

pub(crate) fn push_sender_stream(env: &Env, sender: &Address, stream_id: u64) {
    let key = DataKey::SenderStreams(sender.clone());
    let mut ids = get_sender_streams(env, sender);
    ids.push_back(stream_id);
    env.storage().persistent().set(&key, &ids);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn get_active_stream(env: &Env, recipient: &Address) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::ActiveStream(recipient.clone()))
}

pub(crate) fn set_active_stream(env: &Env, recipient: &Address, stream_id: u64) {
    let key = DataKey::ActiveStream(recipient.clone());
    env.storage().persistent().set(&key, &stream_id);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn clear_active_stream(env: &Env, recipient: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::ActiveStream(recipient.clone()));
}

/// Every address that has ever been paid from the treasury, in order of its
/// first treasury stream.
pub(crate) fn get_employees(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Employees)
        .unwrap_or_else(|| Vec::new(env))
}

pub(crate) fn add_employee(env: &Env, employee: &Address) {
    let mut employees = get_employees(env);
    if employees.contains(employee) {
        return;
    }
    employees.push_back(employee.clone());
    env.storage().persistent().set(&DataKey::Employees, &employees);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Employees, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ---------------------------------------------------------------------------
// Employers
// ---------------------------------------------------------------------------

pub(crate) fn is_employer(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Employer(address.clone()))
        .unwrap_or(false)
}

pub(crate) fn set_employer(env: &Env, address: &Address, allowed: bool) {
    let key = DataKey::Employer(address.clone());
    if allowed {
        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    } else {
        env.storage().persistent().remove(&key);
    }
}
