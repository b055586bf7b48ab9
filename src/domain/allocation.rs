//! Exact apportionment of shared costs across weighted buckets.
//!
//! Uses the largest-remainder (Hamilton) method: every bucket receives the
//! floor of its exact share, and the units left over go one at a time to the
//! buckets with the largest remainders, ties broken by position. The shares
//! always sum to the total.

use num_bigint::BigUint;
use tracing::warn;

use super::entities::{Cents, LandedCost, PurchaseLine, SharedCosts};

/// Splits `total` across `weights`.
///
/// Negative or non-finite weights count as zero. When no weight is usable the
/// total is split evenly, earlier positions taking the odd units. A negative
/// total yields all zeros.
pub fn allocate(total: Cents, weights: &[f64]) -> Vec<Cents> {
    apportion(total, exact_weights(weights))
}

/// Same as [`allocate`] for integer weights.
pub fn allocate_units(total: Cents, weights: &[u64]) -> Vec<Cents> {
    apportion(total, weights.iter().map(|w| BigUint::from(*w)).collect())
}

/// Every finite f64 is `mantissa * 2^exp`. Shifting each mantissa up to the
/// smallest exponent in use turns the weights into integers with exactly the
/// same ratios.
fn exact_weights(weights: &[f64]) -> Vec<BigUint> {
    let parts: Vec<Option<(u64, i32)>> = weights
        .iter()
        .map(|w| (w.is_finite() && *w > 0.0).then(|| decompose(*w)))
        .collect();
    let min_exp = parts.iter().flatten().map(|(_, exp)| *exp).min().unwrap_or(0);

    parts
        .into_iter()
        .map(|part| match part {
            Some((mantissa, exp)) => BigUint::from(mantissa) << ((exp - min_exp) as usize),
            None => BigUint::default(),
        })
        .collect()
}

/// Splits a positive finite f64 into `(mantissa, exp)` with `w = mantissa * 2^exp`.
fn decompose(w: f64) -> (u64, i32) {
    let bits = w.to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1_u64 << 52) - 1);
    if exp_bits == 0 {
        // subnormal
        (fraction, -1074)
    } else {
        (fraction | (1_u64 << 52), exp_bits - 1075)
    }
}

fn apportion(total: Cents, weights: Vec<BigUint>) -> Vec<Cents> {
    if weights.is_empty() {
        return Vec::new();
    }
    if total < 0 {
        warn!(total, buckets = weights.len(), "negative total, allocating nothing");
        return vec![0; weights.len()];
    }

    let total = total.unsigned_abs();
    let sum: BigUint = weights.iter().sum();
    let shares = if sum == BigUint::default() {
        if total > 0 {
            warn!(total, buckets = weights.len(), "all weights zero, splitting evenly");
        }
        equal_split(total, weights.len())
    } else {
        largest_remainder(total, &weights, &sum)
    };

    // every share is at most `total`, which came from a non-negative i64
    shares.into_iter().map(|share| share as Cents).collect()
}

fn equal_split(total: u64, buckets: usize) -> Vec<u64> {
    let n = buckets as u64;
    let base = total / n;
    let remainder = (total % n) as usize;

    (0..buckets)
        .map(|idx| if idx < remainder { base + 1 } else { base })
        .collect()
}

fn largest_remainder(total: u64, weights: &[BigUint], sum: &BigUint) -> Vec<u64> {
    let mut shares = Vec::with_capacity(weights.len());
    let mut remainders: Vec<(usize, BigUint)> = Vec::with_capacity(weights.len());
    let mut distributed = 0_u64;

    for (idx, weight) in weights.iter().enumerate() {
        let numerator = weight * total;
        // share <= total, so it fits back into u64
        let share = u64::try_from(&(&numerator / sum)).unwrap_or(total);
        shares.push(share);
        remainders.push((idx, numerator % sum));
        distributed += share;
    }

    // Each floor loses less than one unit, so fewer than `len` units are left.
    let leftover = (total - distributed) as usize;
    if leftover > 0 {
        remainders.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        for (idx, _) in remainders.iter().take(leftover) {
            shares[*idx] += 1;
        }
    }

    shares
}

/// Spreads shipping and buyer protection over purchase lines by line price.
pub fn allocate_purchase_costs(lines: &[PurchaseLine], shared: &SharedCosts) -> Vec<LandedCost> {
    let weights: Vec<u64> = lines
        .iter()
        .map(|line| line.price_cents.max(0).unsigned_abs())
        .collect();

    let shipping = allocate_units(shared.shipping_cents, &weights);
    let protection = allocate_units(shared.buyer_protection_cents, &weights);

    lines
        .iter()
        .zip(shipping)
        .zip(protection)
        .map(|((line, shipping_cents), protection_cents)| LandedCost {
            item_id: line.item_id.clone(),
            price_cents: line.price_cents,
            shipping_cents,
            protection_cents,
            landed_cents: line
                .price_cents
                .saturating_add(shipping_cents)
                .saturating_add(protection_cents),
        })
        .collect()
}
