use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Money in minor currency units. Floating point never carries money here.
pub type Cents = i64;

/// Physical condition of a unit of stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    LikeNew,
    VeryGood,
    Good,
    Acceptable,
    Defect,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::LikeNew => "Like new",
            Self::VeryGood => "Very good",
            Self::Good => "Good",
            Self::Acceptable => "Acceptable",
            Self::Defect => "Defect",
        }
    }
}

/// Price per condition for one catalog item, as delivered by the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionPriceSnapshot {
    pub new: Option<Cents>,
    pub like_new: Option<Cents>,
    pub very_good: Option<Cents>,
    pub good: Option<Cents>,
    pub acceptable: Option<Cents>,
}

impl ConditionPriceSnapshot {
    /// The four used-condition prices, missing entries included as `None`.
    pub fn used_prices(&self) -> [Option<Cents>; 4] {
        [self.like_new, self.very_good, self.good, self.acceptable]
    }
}

/// Marketplace fees applied to a sale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeProfile {
    /// Referral fee in basis points of the sale price (0..=10000).
    pub referral_fee_bp: u32,
    pub fulfillment_fee_cents: Cents,
    pub inbound_shipping_cents: Cents,
}

impl Default for FeeProfile {
    fn default() -> Self {
        Self {
            referral_fee_bp: 1500,
            fulfillment_fee_cents: 350,
            inbound_shipping_cents: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutEstimate {
    pub payout: Option<Cents>,
    pub total_fees: Option<Cents>,
    pub referral_fee: Option<Cents>,
}

/// Latest successful observation of an item's marketplace standing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankSignal {
    pub rank_specific: Option<u64>,
    pub rank_overall: Option<u64>,
    pub offers_count: Option<u32>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_success_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub blocked: bool,
}

/// Expected days until a unit sells. `low <= high` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DaysRange {
    pub low: f64,
    pub high: f64,
}

impl DaysRange {
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            low: self.low * factor,
            high: self.high * factor,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Speed {
    Fast,
    Medium,
    Slow,
    VerySlow,
    Unknown,
}

impl Speed {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fast => "Fast",
            Self::Medium => "Medium",
            Self::Slow => "Slow",
            Self::VerySlow => "Very slow",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// One level less certain; `Low` stays `Low`.
    pub fn step_down(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium | Self::Low => Self::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SellThroughEstimate {
    pub rank: Option<u64>,
    pub offers: Option<u32>,
    pub range_days: Option<DaysRange>,
    pub speed: Speed,
    pub confidence: Confidence,
}

/// Outcome of pricing one listing against a fee profile and cost basis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEvaluation {
    pub market_price: Option<Cents>,
    pub payout: PayoutEstimate,
    pub cost_basis: Option<Cents>,
    pub margin: Option<Cents>,
    /// Margin over cost basis in basis points.
    pub margin_bp: Option<i64>,
}

/// One line of a purchase that shares shipping and protection costs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub item_id: String,
    pub price_cents: Cents,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedCosts {
    pub shipping_cents: Cents,
    pub buyer_protection_cents: Cents,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandedCost {
    pub item_id: String,
    pub price_cents: Cents,
    pub shipping_cents: Cents,
    pub protection_cents: Cents,
    pub landed_cents: Cents,
}
