use resale_engine::domain::{
    allocate, allocate_purchase_costs, allocate_units, PurchaseLine, SharedCosts,
};

fn weight_sets() -> Vec<Vec<f64>> {
    vec![
        vec![1.0],
        vec![1.0, 1.0],
        vec![1.0, 2.0, 3.0],
        vec![0.0, 0.0, 0.0],
        vec![0.3, 0.3, 0.4],
        vec![1e-9, 1.0, 1e9],
        vec![2.5, -4.0, f64::NAN, 7.25],
        vec![12.99, 4.50, 0.0, 33.10, 8.00, 8.00],
        vec![f64::INFINITY, f64::NEG_INFINITY],
        (1..=17).map(f64::from).collect(),
    ]
}

#[test]
fn shares_always_sum_to_total() {
    for weights in weight_sets() {
        for total in [0_i64, 1, 2, 7, 99, 100, 101, 1_000, 4_999, 123_457, 10_000_000] {
            let shares = allocate(total, &weights);
            assert_eq!(shares.len(), weights.len());
            assert!(shares.iter().all(|s| *s >= 0), "negative share for {weights:?}");
            assert_eq!(shares.iter().sum::<i64>(), total, "lost units for {weights:?} / {total}");
        }
    }
}

#[test]
fn negative_totals_are_zeroed() {
    assert_eq!(allocate(-5, &[1.0, 2.0, 3.0]), vec![0, 0, 0]);
    for weights in weight_sets() {
        assert!(allocate(-1, &weights).iter().all(|s| *s == 0));
    }
}

#[test]
fn equal_split_favours_earlier_positions() {
    assert_eq!(allocate(100, &[0.0, 0.0]), vec![50, 50]);
    assert_eq!(allocate(101, &[0.0, 0.0, 0.0]), vec![34, 34, 33]);
}

#[test]
fn shares_stay_within_one_unit_of_exact_quota() {
    let weights = [3_u64, 5, 7, 11, 13];
    let sum: u64 = weights.iter().sum();
    for total in 0..500_i64 {
        let shares = allocate_units(total, &weights);
        for (share, weight) in shares.iter().zip(weights) {
            let exact = total as f64 * weight as f64 / sum as f64;
            assert!((*share as f64 - exact).abs() < 1.0);
        }
    }
}

#[test]
fn integral_float_weights_agree_with_unit_weights() {
    let sets: [&[u64]; 4] = [&[1, 3], &[5, 5, 5, 1], &[250, 1, 1], &[2, 4, 6, 8, 10]];
    for weights in sets {
        let floats: Vec<f64> = weights.iter().map(|w| *w as f64).collect();
        for total in 0..400_i64 {
            assert_eq!(
                allocate(total, &floats),
                allocate_units(total, weights),
                "{weights:?} / {total}"
            );
        }
    }
}

#[test]
fn landed_costs_account_for_every_cent() {
    let lines: Vec<PurchaseLine> = [799_i64, 1250, 0, 4300, 1250]
        .iter()
        .enumerate()
        .map(|(idx, price)| PurchaseLine {
            item_id: format!("line-{idx}"),
            price_cents: *price,
        })
        .collect();
    let shared = SharedCosts {
        shipping_cents: 690,
        buyer_protection_cents: 143,
    };

    let landed = allocate_purchase_costs(&lines, &shared);
    assert_eq!(landed.len(), lines.len());
    assert_eq!(landed.iter().map(|l| l.shipping_cents).sum::<i64>(), 690);
    assert_eq!(landed.iter().map(|l| l.protection_cents).sum::<i64>(), 143);
    assert_eq!(landed[2].shipping_cents, 0);
    // equal prices differ by at most the one leftover unit, earlier line first
    assert!(landed[1].shipping_cents - landed[4].shipping_cents <= 1);
    assert!(landed[1].shipping_cents >= landed[4].shipping_cents);
    assert_eq!(
        landed.iter().map(|l| l.landed_cents).sum::<i64>(),
        lines.iter().map(|l| l.price_cents).sum::<i64>() + 690 + 143
    );
}
