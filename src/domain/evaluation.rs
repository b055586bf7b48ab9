use tracing::debug;

use super::entities::{
    Cents, Condition, ConditionPriceSnapshot, FeeProfile, ListingEvaluation, PayoutEstimate,
};
use super::money::format_cents;
use super::pricing::price_for_condition;

const BASIS_POINTS: i128 = 10_000;
const GREEN_MARGIN_BP: i64 = 3_000;

/// Net payout after marketplace fees. Without a price nothing is estimated.
///
/// The payout may come out negative; that is a real answer (the item loses
/// money once fees are paid) and is reported as such.
pub fn estimate_payout(market_price: Option<Cents>, fees: &FeeProfile) -> PayoutEstimate {
    let Some(price) = market_price else {
        return PayoutEstimate::default();
    };

    let referral = round_half_away_from_zero(
        i128::from(price) * i128::from(fees.referral_fee_bp),
        BASIS_POINTS,
    );
    let referral_fee = saturate(referral);
    let total_fees = referral_fee
        .saturating_add(fees.fulfillment_fee_cents)
        .saturating_add(fees.inbound_shipping_cents);

    PayoutEstimate {
        payout: Some(price.saturating_sub(total_fees)),
        total_fees: Some(total_fees),
        referral_fee: Some(referral_fee),
    }
}

/// Signed margin; a missing cost basis is never treated as free.
pub fn estimate_margin(payout: Option<Cents>, cost_basis: Option<Cents>) -> Option<Cents> {
    Some(payout?.saturating_sub(cost_basis?))
}

pub fn evaluate_listing(
    snapshot: &ConditionPriceSnapshot,
    condition: Condition,
    fees: &FeeProfile,
    cost_basis: Option<Cents>,
) -> ListingEvaluation {
    let market_price = price_for_condition(snapshot, condition);
    let payout = estimate_payout(market_price, fees);
    let margin = estimate_margin(payout.payout, cost_basis);

    let margin_bp = match (margin, cost_basis) {
        (Some(margin), Some(cost)) if cost > 0 => Some(saturate(round_half_away_from_zero(
            i128::from(margin) * BASIS_POINTS,
            i128::from(cost),
        ))),
        _ => None,
    };

    ListingEvaluation {
        market_price,
        payout,
        cost_basis,
        margin,
        margin_bp,
    }
}

/// A listing to evaluate in bulk.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingInput {
    pub id: String,
    pub snapshot: ConditionPriceSnapshot,
    pub condition: Condition,
    pub cost_basis: Option<Cents>,
}

pub struct EvaluationSummary {
    /// Sum of the margins that could be estimated.
    pub total_margin: Cents,
    /// Listings with both a market price and a margin.
    pub priced: usize,
    /// Listings with no market price for their condition.
    pub unpriced: usize,
    /// Listings with a market price but no cost basis, so no margin.
    pub without_cost: usize,
    pub items: Vec<(String, ListingEvaluation)>,
}

pub fn evaluate_listings(listings: &[ListingInput], fees: &FeeProfile) -> EvaluationSummary {
    let mut items = Vec::with_capacity(listings.len());
    let mut total_margin: Cents = 0;
    let mut priced = 0_usize;
    let mut unpriced = 0_usize;

    for listing in listings {
        let evaluation = evaluate_listing(
            &listing.snapshot,
            listing.condition,
            fees,
            listing.cost_basis,
        );
        if let Some(margin) = evaluation.margin {
            total_margin = total_margin.saturating_add(margin);
            priced += 1;
        } else if evaluation.market_price.is_none() {
            unpriced += 1;
        }
        items.push((listing.id.clone(), evaluation));
    }

    let without_cost = listings.len() - priced - unpriced;
    debug!(priced, unpriced, without_cost, total_margin, "evaluated listings");

    EvaluationSummary {
        total_margin,
        priced,
        unpriced,
        without_cost,
        items,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfitIndicator {
    pub status: ProfitIndicatorStatus,
    pub rationale: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfitIndicatorStatus {
    Green,
    Yellow,
    Red,
}

pub fn profit_indicator(evaluation: &ListingEvaluation) -> ProfitIndicator {
    let Some(margin) = evaluation.margin else {
        return ProfitIndicator {
            status: ProfitIndicatorStatus::Red,
            rationale: "No margin estimate yet".to_string(),
        };
    };

    let status = if margin <= 0 {
        ProfitIndicatorStatus::Red
    } else if evaluation.margin_bp.is_some_and(|bp| bp >= GREEN_MARGIN_BP) {
        ProfitIndicatorStatus::Green
    } else {
        ProfitIndicatorStatus::Yellow
    };

    let amount = |cents: Option<Cents>| cents.map(format_cents).unwrap_or_else(|| "?".to_string());
    let rationale = format!(
        "Payout {} - cost {} = margin {}",
        amount(evaluation.payout.payout),
        amount(evaluation.cost_basis),
        format_cents(margin)
    );

    ProfitIndicator { status, rationale }
}

/// Integer division rounding halves away from zero. `den` must be positive.
pub(crate) fn round_half_away_from_zero(num: i128, den: i128) -> i128 {
    let doubled = 2 * den;
    if num >= 0 {
        (2 * num + den) / doubled
    } else {
        -((-2 * num + den) / doubled)
    }
}

fn saturate(value: i128) -> Cents {
    Cents::try_from(value).unwrap_or(if value < 0 { Cents::MIN } else { Cents::MAX })
}
