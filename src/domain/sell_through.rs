//! Sell-through velocity from best-seller rank, competing offers and data age.
//!
//! The estimate is a two-stage lookup: a rank picks a base days-to-sell range
//! from a fixed step table, which is then stretched by the number of
//! competing offers. Confidence depends only on how fresh and how complete
//! the observation is. "Now" is always passed in.

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::trace;

use super::entities::{Confidence, DaysRange, RankSignal, SellThroughEstimate, Speed};

/// Upper rank bound (inclusive) and base days-to-sell range for each bucket.
/// Both endpoints grow monotonically with the rank.
const VELOCITY_BUCKETS: &[(u64, f64, f64)] = &[
    (10, 0.1, 0.5),
    (100, 0.5, 1.5),
    (1_000, 1.0, 3.0),
    (5_000, 2.0, 7.0),
    (10_000, 4.0, 14.0),
    (25_000, 7.0, 21.0),
    (50_000, 14.0, 45.0),
    (100_000, 30.0, 90.0),
    (200_000, 60.0, 180.0),
];
const BEYOND_LAST_BUCKET: (f64, f64) = (120.0, 365.0);

const MAX_OFFERS_FACTOR: f64 = 5.0;

const FAST_MAX_DAYS: f64 = 14.0;
const MEDIUM_MAX_DAYS: f64 = 60.0;
const SLOW_MAX_DAYS: f64 = 180.0;

pub const RANGE_PLACEHOLDER: &str = "unknown";

/// How old an observation may be and still count as fresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreshnessWindows {
    pub high_hours: u32,
    pub medium_hours: u32,
}

impl Default for FreshnessWindows {
    fn default() -> Self {
        Self {
            high_hours: 24,
            medium_hours: 72,
        }
    }
}

pub fn estimate_sell_through(signal: &RankSignal, now: OffsetDateTime) -> SellThroughEstimate {
    estimate_sell_through_with(signal, now, &FreshnessWindows::default())
}

pub fn estimate_sell_through_with(
    signal: &RankSignal,
    now: OffsetDateTime,
    windows: &FreshnessWindows,
) -> SellThroughEstimate {
    let rank = select_rank(signal);
    let range_days = rank.map(|rank| base_range(rank).scaled(offers_factor(signal.offers_count)));
    let speed = range_days.map(speed_for).unwrap_or(Speed::Unknown);

    let mut confidence = freshness_confidence(signal, now, windows);
    if signal.offers_count.is_none() {
        confidence = confidence.step_down();
    }

    SellThroughEstimate {
        rank,
        offers: signal.offers_count,
        range_days,
        speed,
        confidence,
    }
}

/// Overall rank wins when both are present; the category rank is the fallback.
fn select_rank(signal: &RankSignal) -> Option<u64> {
    signal
        .rank_overall
        .filter(|rank| *rank > 0)
        .or_else(|| signal.rank_specific.filter(|rank| *rank > 0))
}

pub fn base_range(rank: u64) -> DaysRange {
    let (low, high) = VELOCITY_BUCKETS
        .iter()
        .find(|(max_rank, _, _)| rank <= *max_rank)
        .map(|(max_rank, low, high)| {
            trace!(rank, bucket = max_rank, "velocity bucket");
            (*low, *high)
        })
        .unwrap_or(BEYOND_LAST_BUCKET);

    DaysRange { low, high }
}

fn offers_factor(offers: Option<u32>) -> f64 {
    f64::from(offers.unwrap_or(1))
        .sqrt()
        .clamp(1.0, MAX_OFFERS_FACTOR)
}

fn speed_for(range: DaysRange) -> Speed {
    if range.high <= FAST_MAX_DAYS {
        Speed::Fast
    } else if range.high <= MEDIUM_MAX_DAYS {
        Speed::Medium
    } else if range.high <= SLOW_MAX_DAYS {
        Speed::Slow
    } else {
        Speed::VerySlow
    }
}

fn freshness_confidence(
    signal: &RankSignal,
    now: OffsetDateTime,
    windows: &FreshnessWindows,
) -> Confidence {
    let Some(observed_at) = signal.last_success_at else {
        return Confidence::Low;
    };
    if signal.blocked {
        return Confidence::Low;
    }

    // Observations stamped in the future count as brand new.
    let age = (now - observed_at).max(Duration::ZERO);

    if age <= Duration::hours(i64::from(windows.high_hours)) {
        Confidence::High
    } else if age <= Duration::hours(i64::from(windows.medium_hours)) {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RangeUnit {
    Hours,
    Days,
    Weeks,
    Months,
}

impl RangeUnit {
    fn days(self) -> f64 {
        match self {
            Self::Hours => 1.0 / 24.0,
            Self::Days => 1.0,
            Self::Weeks => 7.0,
            Self::Months => 30.0,
        }
    }

    fn finer(self) -> Self {
        match self {
            Self::Months => Self::Weeks,
            Self::Weeks => Self::Days,
            Self::Days | Self::Hours => Self::Hours,
        }
    }

    fn name(self, plural: bool) -> &'static str {
        match (self, plural) {
            (Self::Hours, false) => "hour",
            (Self::Hours, true) => "hours",
            (Self::Days, false) => "day",
            (Self::Days, true) => "days",
            (Self::Weeks, false) => "week",
            (Self::Weeks, true) => "weeks",
            (Self::Months, false) => "month",
            (Self::Months, true) => "months",
        }
    }
}

/// Human-readable range such as `"2-6 weeks"` or `"1 day"`.
pub fn format_range(range: Option<DaysRange>) -> String {
    let Some(range) = range else {
        return RANGE_PLACEHOLDER.to_string();
    };

    let mut unit = if range.high < 1.0 {
        RangeUnit::Hours
    } else if range.high < 14.0 {
        RangeUnit::Days
    } else if range.high <= 55.0 {
        RangeUnit::Weeks
    } else {
        RangeUnit::Months
    };
    while unit != RangeUnit::Hours && range.low / unit.days() < 1.0 {
        unit = unit.finer();
    }

    let low = (range.low / unit.days()).round().max(1.0) as u64;
    let high = ((range.high / unit.days()).round().max(1.0) as u64).max(low);

    if low == high {
        format!("{low} {}", unit.name(low != 1))
    } else {
        format!("{low}-{high} {}", unit.name(true))
    }
}
