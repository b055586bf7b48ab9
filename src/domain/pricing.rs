//! Market price resolution from a multi-condition price snapshot.

use tracing::debug;

use super::entities::{Cents, Condition, ConditionPriceSnapshot};

/// Cheapest listed used price, the most conservative resale estimate.
pub fn best_used_price(snapshot: &ConditionPriceSnapshot) -> Option<Cents> {
    snapshot.used_prices().into_iter().flatten().min()
}

/// Estimated market price for stock in `condition`.
///
/// Used conditions walk a fixed fallback chain that ends at the cheapest used
/// price. `New` never falls back and `Defect` is never priced.
pub fn price_for_condition(
    snapshot: &ConditionPriceSnapshot,
    condition: Condition,
) -> Option<Cents> {
    let direct = match condition {
        Condition::New => return snapshot.new,
        Condition::Defect => return None,
        Condition::LikeNew => snapshot.like_new,
        Condition::VeryGood => snapshot.very_good,
        Condition::Good => snapshot.good.or(snapshot.very_good),
        Condition::Acceptable => snapshot.acceptable.or(snapshot.good),
    };

    direct.or_else(|| {
        let fallback = best_used_price(snapshot);
        debug!(
            condition = condition.label(),
            fallback = ?fallback,
            "no condition price listed, using best used price"
        );
        fallback
    })
}
