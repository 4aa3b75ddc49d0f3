//! Property checks on the closed-form models.

use hc_catalog::Gas;
use hc_components::GasRegime;
use hc_components::gas::{concurrency_factor, end_pressure};
use hc_components::hazen_williams::unit_pressure_drop;
use hc_core::GasId;
use proptest::prelude::*;

const BREAKPOINTS_KCAL_PER_H: [f64; 3] = [21_000.0, 576_720.0, 1_200_000.0];

#[test]
fn concurrency_factor_breakpoints_are_nearly_continuous() {
    for bp in BREAKPOINTS_KCAL_PER_H {
        let below = concurrency_factor(bp / 60.0 - 1e-6);
        let above = concurrency_factor(bp / 60.0 + 1e-6);
        assert!(
            (below - above).abs() < 2e-3,
            "jump at {bp}: {below} vs {above}"
        );
    }
}

#[test]
fn concurrency_factor_decreases_through_curved_breakpoints() {
    for bp in &BREAKPOINTS_KCAL_PER_H[..2] {
        assert!(concurrency_factor(bp / 60.0 + 1e-6) < concurrency_factor(bp / 60.0 - 1e-6));
    }
    // the 0.23 floor sits just above where the last curve ends
    assert_eq!(concurrency_factor(1_200_000.0 / 60.0), 0.23);
}

#[test]
fn concurrency_factor_just_below_first_breakpoint() {
    assert_eq!(concurrency_factor(21_000.0 / 60.0 - 1e-9), 1.0);
}

#[test]
fn primary_drop_compares_squares() {
    let start: f64 = 150.0;
    let drop = 4_000.0;
    let end = end_pressure(GasRegime::Primary, start, drop);
    assert!((start * start - end * end - drop).abs() < 1e-6);
}

#[test]
fn gas_record_is_plain_data() {
    let g = Gas {
        id: GasId(2),
        name: "GN".into(),
        description: Some("natural gas".into()),
        pci: 8_600.0,
        pck: None,
        relative_density: 0.6,
    };
    assert!(g.is_natural_gas());
}

proptest! {
    #[test]
    fn concurrency_factor_non_increasing(a in 0.0f64..19_999.0, b in 0.0f64..19_999.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(concurrency_factor(hi) <= concurrency_factor(lo) + 1e-12);
    }

    #[test]
    fn concurrency_factor_bounded(p in 0.0f64..1.0e6) {
        let f = concurrency_factor(p);
        prop_assert!(f > 0.0 && f <= 1.0);
    }

    #[test]
    fn end_pressure_never_negative(start in 0.0f64..500.0, drop in 0.0f64..300_000.0) {
        prop_assert!(end_pressure(GasRegime::Primary, start, drop) >= 0.0);
        prop_assert!(end_pressure(GasRegime::Secondary, start, drop) >= 0.0);
    }

    #[test]
    fn positive_drop_lowers_pressure(start in 1.0f64..500.0, frac in 0.01f64..0.99) {
        let lin_drop = start * frac;
        prop_assert!(end_pressure(GasRegime::Secondary, start, lin_drop) < start);
        let sq_drop = start * start * frac;
        prop_assert!(end_pressure(GasRegime::Primary, start, sq_drop) < start);
    }

    #[test]
    fn hazen_williams_increases_with_flow(q in 1e-5f64..0.05, dq in 1e-6f64..0.01) {
        prop_assert!(unit_pressure_drop(q + dq, 120.0, 65.0) > unit_pressure_drop(q, 120.0, 65.0));
    }
}
