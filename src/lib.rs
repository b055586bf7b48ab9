//! Resale economics engine.
//!
//! Pure functions that turn marketplace signals into money and velocity
//! figures for a small resale operation:
//!
//! - [`domain::money`] - locale decimal strings to integer cents and back
//! - [`domain::pricing`] - market price for a physical condition
//! - [`domain::evaluation`] - payout after fees and margin over cost basis
//! - [`domain::sell_through`] - days-to-sell range, speed and confidence
//! - [`domain::allocation`] - exact largest-remainder cost apportionment
//! - [`config`] / [`util::persistence`] - settings and logging
//!
//! Money is always `i64` cents, missing data is always `None`, and time is
//! always passed in explicitly.
//!
//! ```
//! use resale_engine::domain::{
//!     estimate_margin, estimate_payout, price_for_condition, Condition, ConditionPriceSnapshot,
//!     FeeProfile,
//! };
//!
//! let snapshot = ConditionPriceSnapshot { very_good: Some(5000), ..Default::default() };
//! let price = price_for_condition(&snapshot, Condition::Good);
//! let payout = estimate_payout(price, &FeeProfile::default());
//! assert_eq!(estimate_margin(payout.payout, Some(2000)), Some(1900));
//! ```

pub mod config;
pub mod domain;
pub mod util;

pub use config::{ConfigError, LoggingConfig, Settings};
