//! Fixed-period vesting timeline (PERIOD = 30 days, no calendar arithmetic).
//! - linear_start = start + cliff
//! - end = linear_start + recurrences * PERIOD
//! - elapsed_periods = whole periods since linear_start, inclusive at boundaries

use crate::constants::PERIOD_SECONDS;
use crate::error::VestingError;

/// Instant at which the cliff ends and linear accrual begins.
pub fn linear_start(start_ts: i64, cliff_duration: u64) -> Result<i64, VestingError> {
    let cliff = i64::try_from(cliff_duration).map_err(|_| VestingError::ScheduleOverflow)?;
    start_ts
        .checked_add(cliff)
        .ok_or(VestingError::ScheduleOverflow)
}

/// `start + cliff + recurrences * PERIOD`; fails closed instead of wrapping.
pub fn end_time(start_ts: i64, cliff_duration: u64, recurrences: u32) -> Result<i64, VestingError> {
    let linear = (recurrences as i64)
        .checked_mul(PERIOD_SECONDS)
        .ok_or(VestingError::ScheduleOverflow)?;
    linear_start(start_ts, cliff_duration)?
        .checked_add(linear)
        .ok_or(VestingError::ScheduleOverflow)
}

/// Largest k such that `now >= linear_start + k * PERIOD`, clamped to `[0, recurrences]`.
pub fn elapsed_periods(now_ts: i64, linear_start_ts: i64, recurrences: u32) -> u32 {
    if now_ts < linear_start_ts {
        return 0;
    }
    // now >= linear_start, so the difference is non-negative.
    let elapsed = (now_ts as i128 - linear_start_ts as i128) / PERIOD_SECONDS as i128;
    elapsed.min(recurrences as i128) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_700_000_000;

    #[test]
    fn period_boundary_inclusive() {
        let linear = linear_start(START, 3_600).unwrap();
        assert_eq!(elapsed_periods(linear, linear, 12), 0);
        assert_eq!(elapsed_periods(linear + PERIOD_SECONDS - 1, linear, 12), 0);
        assert_eq!(elapsed_periods(linear + PERIOD_SECONDS, linear, 12), 1);
        assert_eq!(elapsed_periods(linear + 2 * PERIOD_SECONDS + 123, linear, 12), 2);
    }

    #[test]
    fn before_linear_start_is_zero() {
        assert_eq!(elapsed_periods(START - 1, START, 12), 0);
        assert_eq!(elapsed_periods(i64::MIN, START, 12), 0);
    }

    #[test]
    fn elapsed_saturates_at_recurrences() {
        assert_eq!(elapsed_periods(START + 100 * PERIOD_SECONDS, START, 12), 12);
        assert_eq!(elapsed_periods(i64::MAX, i64::MIN, 3), 3);
    }

    #[test]
    fn end_time_matches_definition() {
        assert_eq!(
            end_time(START, 3_600, 12).unwrap(),
            START + 3_600 + 12 * PERIOD_SECONDS
        );
        assert_eq!(end_time(START, 0, 1).unwrap(), START + PERIOD_SECONDS);
    }

    #[test]
    fn end_time_overflow_fails_closed() {
        assert!(matches!(
            end_time(i64::MAX - PERIOD_SECONDS + 1, 0, 1),
            Err(VestingError::ScheduleOverflow)
        ));
        assert!(matches!(
            end_time(0, i64::MAX as u64 + 1, 1),
            Err(VestingError::ScheduleOverflow)
        ));
        // u32::MAX periods alone fit in i64 seconds.
        assert!(end_time(0, 0, u32::MAX).is_ok());
    }
}
