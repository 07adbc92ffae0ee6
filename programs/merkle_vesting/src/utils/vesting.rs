//! Cliff + stepwise linear vesting curve with an immediate start fraction.

use crate::constants::BPS_DENOMINATOR;
use crate::error::VestingError;
use crate::state::{AccountPosition, Schedule};
use crate::utils::time;

/// Amount of `total` unlocked under `schedule` at `now_ts`.
pub fn vested_amount(schedule: &Schedule, total: u64, now_ts: i64) -> Result<u64, VestingError> {
    if now_ts < schedule.start_time {
        return Ok(0);
    }

    let start_amount = (total as u128)
        .checked_mul(schedule.start_bps as u128)
        .ok_or(VestingError::MathOverflow)?
        / BPS_DENOMINATOR as u128;

    let linear_start = schedule.linear_start()?;
    if now_ts < linear_start {
        return to_u64(start_amount);
    }
    if now_ts >= schedule.end_time {
        return Ok(total);
    }

    // Whole periods only; a partial period contributes nothing.
    let periods = time::elapsed_periods(now_ts, linear_start, schedule.recurrences)
        .min(schedule.recurrences.saturating_sub(1));
    let remainder = (total as u128)
        .checked_sub(start_amount)
        .ok_or(VestingError::MathOverflow)?;
    let accrued = remainder
        .checked_mul(periods as u128)
        .ok_or(VestingError::MathOverflow)?
        / schedule.recurrences as u128;

    to_u64(
        start_amount
            .checked_add(accrued)
            .ok_or(VestingError::MathOverflow)?,
    )
}

/// `vested(authenticated_total, now) - claimed`, floored at zero.
pub fn claimable_amount(
    schedule: &Schedule,
    position: &AccountPosition,
    now_ts: i64,
) -> Result<u64, VestingError> {
    let vested = vested_amount(schedule, position.authenticated_total, now_ts)?;
    Ok(vested.saturating_sub(position.claimed))
}

/// Amount a claim at `now_ts` would pay out. An unknown schedule, a missing
/// position and a zero claimable amount all mean `NothingToClaim`.
pub fn plan_claim(
    schedule: Option<&Schedule>,
    position: Option<&AccountPosition>,
    now_ts: i64,
) -> Result<u64, VestingError> {
    let (Some(schedule), Some(position)) = (schedule, position) else {
        return Err(VestingError::NothingToClaim);
    };
    match claimable_amount(schedule, position, now_ts)? {
        0 => Err(VestingError::NothingToClaim),
        amount => Ok(amount),
    }
}

fn to_u64(v: u128) -> Result<u64, VestingError> {
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}
