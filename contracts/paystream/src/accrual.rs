//! Vesting math.
//!
//! Everything here is a pure function of a stream's schedule and a timestamp
//! supplied by the caller, so the same inputs always give the same answer and
//! nothing is written to storage.

use crate::types::Stream;

/// Amount unlocked at `now` for a linear per-second schedule.
///
/// Time spent paused does not count: `total_paused_duration` covers completed
/// pauses, and a pause still in progress (`paused_at`) stops the clock at the
/// moment it began. The result never exceeds `deposit`; a multiplication that
/// would overflow `i128` clamps to `deposit` as well.
///
/// # Examples
/// - 1000 deposit, rate 1, start 0, no pauses, `now = 300` → `300`
/// - same stream at `now = 10_000` → `1000` (capped)
/// - paused at 300, `now = 900` → `300` (frozen)
pub fn calculate_vested_amount(
    start_time: u64,
    rate_per_second: i128,
    deposit: i128,
    total_paused_duration: u64,
    paused_at: Option<u64>,
    now: u64,
) -> i128 {
    let end = match paused_at {
        Some(paused_at) => now.min(paused_at),
        None => now,
    };
    if end <= start_time || deposit <= 0 || rate_per_second <= 0 {
        return 0;
    }

    let elapsed = (end - start_time).saturating_sub(total_paused_duration);
    match (elapsed as i128).checked_mul(rate_per_second) {
        Some(raw) => raw.min(deposit),
        None => deposit,
    }
}

/// Seconds of a pause that fall inside the schedule. A pause that started
/// before `start_time` only counts from `start_time` on.
pub fn paused_duration(start_time: u64, paused_at: u64, now: u64) -> u64 {
    now.saturating_sub(paused_at.max(start_time))
}

/// Nominal end of accrual: the moment `deposit` is fully vested if no further
/// pauses happen.
pub fn nominal_stop_time(
    start_time: u64,
    rate_per_second: i128,
    deposit: i128,
    total_paused_duration: u64,
) -> u64 {
    if rate_per_second <= 0 || deposit <= 0 {
        return start_time;
    }
    let mut seconds = deposit / rate_per_second;
    if deposit % rate_per_second != 0 {
        seconds += 1;
    }
    let seconds = u64::try_from(seconds).unwrap_or(u64::MAX);
    start_time
        .saturating_add(seconds)
        .saturating_add(total_paused_duration)
}

/// Vested amount of a stored stream. Cancelled streams are frozen at their
/// cancellation timestamp.
pub fn vested_amount(stream: &Stream, now: u64) -> i128 {
    let now = stream.cancelled_at.unwrap_or(now);
    calculate_vested_amount(
        stream.start_time,
        stream.rate_per_second,
        stream.deposit,
        stream.total_paused_duration,
        stream.paused_at,
        now,
    )
}

/// Vested but not yet withdrawn.
pub fn withdrawable_amount(stream: &Stream, now: u64) -> i128 {
    (vested_amount(stream, now) - stream.withdrawn).max(0)
}
