//! Resale economics: pricing, payout, margin, velocity and cost apportionment.

pub mod allocation;
pub mod entities;
pub mod evaluation;
pub mod money;
pub mod pricing;
pub mod sell_through;

pub use allocation::{allocate, allocate_purchase_costs, allocate_units};
pub use entities::{
    Cents, Condition, ConditionPriceSnapshot, Confidence, DaysRange, FeeProfile, LandedCost,
    ListingEvaluation, PayoutEstimate, PurchaseLine, RankSignal, SellThroughEstimate, SharedCosts,
    Speed,
};
pub use evaluation::{
    estimate_margin, estimate_payout, evaluate_listing, evaluate_listings, profit_indicator,
    EvaluationSummary, ListingInput, ProfitIndicator, ProfitIndicatorStatus,
};
pub use money::{format_cents, parse_cents, ParseError};
pub use pricing::{best_used_price, price_for_condition};
pub use sell_through::{
    estimate_sell_through, estimate_sell_through_with, format_range, FreshnessWindows,
    RANGE_PLACEHOLDER,
};
