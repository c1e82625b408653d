use crate::errors::Error;
use crate::storage::*;
use crate::types::TierSchedule;
use soroban_sdk::Env;

/// Tier selected by the schedule at `now`: total elapsed time divided by the
/// interval, clamped to the final tier. Shared by the advancing path and the
/// read-only view.
pub fn tier_index_at(schedule: &TierSchedule, start_time: u64, now: u64) -> u32 {
    if schedule.change_interval == 0 || now <= start_time {
        return 0;
    }
    let index = (now - start_time) / schedule.change_interval;
    let last_tier = schedule.prices.len() - 1;
    if index >= last_tier as u64 {
        last_tier
    } else {
        index as u32
    }
}

/// Advance the price tier if at least one `change_interval` has elapsed since
/// the last change. `last_change_time` moves by exactly one interval per
/// firing, while the tier index is computed from total elapsed time and
/// clamped to the final tier, so the price freezes once the schedule runs out.
///
/// Callers must have already checked that `now` is inside the sale window.
pub fn maybe_advance_tier(env: &Env, now: u64) -> Result<(), Error> {
    let mut schedule = get_schedule(env);
    if schedule.change_interval == 0 {
        return Ok(());
    }

    let due = schedule
        .last_change_time
        .checked_add(schedule.change_interval)
        .ok_or(Error::ArithmeticOverflow)?;
    if now < due {
        return Ok(());
    }

    let config = get_config(env);
    let tier_index = tier_index_at(&schedule, config.start_time, now);
    let price = schedule
        .prices
        .get(tier_index)
        .ok_or(Error::InvalidTierPrice)?;

    schedule.last_change_time = due;
    set_schedule(env, &schedule);
    set_tokens_per_unit(env, price);

    env.events().publish(("price_change",), (tier_index, price));
    Ok(())
}
