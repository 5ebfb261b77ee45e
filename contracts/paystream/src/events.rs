//! Audit trail. Stream events are published under `(name, stream_id)`,
//! contract-wide events under `(name, participant)`.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

use crate::types::Funding;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StreamCreated {
    pub stream_id: u64,
    pub sender: Address,
    pub recipient: Address,
    pub funding: Funding,
    pub rate_per_second: i128,
    pub deposit: i128,
    pub start_time: u64,
    pub tax_percent: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub stream_id: u64,
    pub recipient: Address,
    pub net: i128,
    pub tax: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StreamPaused {
    pub stream_id: u64,
    pub paused_at: u64,
    /// Gross amount settled to the recipient before freezing (treasury streams).
    pub settled: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StreamResumed {
    pub stream_id: u64,
    pub resumed_at: u64,
    pub total_paused_duration: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StreamCancelled {
    pub stream_id: u64,
    pub recipient: Address,
    /// Gross amount settled to the recipient at cancellation.
    pub recipient_payout: i128,
    /// Unvested remainder returned to the funding source.
    pub sender_refund: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BonusAdded {
    pub stream_id: u64,
    pub amount: i128,
    pub reason: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BonusPaid {
    pub recipient: Address,
    pub amount: i128,
    pub treasury_balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreasuryDeposited {
    pub from: Address,
    pub amount: i128,
    pub treasury_balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct YieldSimulated {
    pub amount: i128,
    pub treasury_balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaxSwept {
    pub to: Address,
    pub amount: i128,
}

pub(crate) fn stream_created(env: &Env, event: StreamCreated) {
    env.events()
        .publish((symbol_short!("created"), event.stream_id), event);
}

pub(crate) fn withdrawn(env: &Env, event: Withdrawn) {
    env.events()
        .publish((symbol_short!("withdrew"), event.stream_id), event);
}

pub(crate) fn stream_paused(env: &Env, event: StreamPaused) {
    env.events()
        .publish((symbol_short!("paused"), event.stream_id), event);
}

pub(crate) fn stream_resumed(env: &Env, event: StreamResumed) {
    env.events()
        .publish((symbol_short!("resumed"), event.stream_id), event);
}

pub(crate) fn stream_cancelled(env: &Env, event: StreamCancelled) {
    env.events()
        .publish((symbol_short!("cancelled"), event.stream_id), event);
}

pub(crate) fn bonus_added(env: &Env, event: BonusAdded) {
    env.events()
        .publish((symbol_short!("bonus"), event.stream_id), event);
}

pub(crate) fn bonus_paid(env: &Env, event: BonusPaid) {
    env.events()
        .publish((symbol_short!("bonus_pd"), event.recipient.clone()), event);
}

pub(crate) fn treasury_deposited(env: &Env, event: TreasuryDeposited) {
    env.events()
        .publish((symbol_short!("treasury"), event.from.clone()), event);
}

pub(crate) fn yield_simulated(env: &Env, admin: &Address, event: YieldSimulated) {
    env.events()
        .publish((symbol_short!("yield"), admin.clone()), event);
}

pub(crate) fn tax_swept(env: &Env, event: TaxSwept) {
    env.events()
        .publish((symbol_short!("tax_swept"), event.to.clone()), event);
}

pub(crate) fn employer_updated(env: &Env, employer: &Address, allowed: bool) {
    env.events()
        .publish((symbol_short!("employer"), employer.clone()), allowed);
}

pub(crate) fn admin_updated(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (symbol_short!("admin"), symbol_short!("updated")),
        (old_admin.clone(), new_admin.clone()),
    );
}
