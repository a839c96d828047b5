//! Property tests for the numeric core

mod common;

use proptest::prelude::*;

use mq2_core::{
    curves::{CO_CURVE, LPG_CURVE, SMOKE_CURVE},
    pins::ESP32_DEVKIT_V1,
    resistance_from_raw, GasCurve, SensorError,
};

use common::{ratio_for, relative_error, resistance};

fn any_curve() -> impl Strategy<Value = GasCurve> {
    prop_oneof![Just(LPG_CURVE), Just(CO_CURVE), Just(SMOKE_CURVE)]
}

proptest! {
    #[test]
    fn resistance_matches_divider_formula(raw in 1u16..=4095) {
        let rs = resistance_from_raw(raw, 1.0, 4095).unwrap();
        let expected = resistance(raw);
        prop_assert!((rs as f64 - expected).abs() <= expected * 1e-6 + 1e-6);
    }

    #[test]
    fn codes_above_full_scale_rejected(raw in 4096u16..=u16::MAX) {
        prop_assert_eq!(
            resistance_from_raw(raw, 1.0, 4095),
            Err(SensorError::RawOutOfRange { raw, max: 4095 })
        );
    }

    #[test]
    fn estimate_decreases_with_ratio(
        curve in any_curve(),
        low in 0.05f32..20.0,
        step in 0.01f32..10.0,
    ) {
        let high = low + step;
        let at_low = curve.percentage(low).unwrap();
        let at_high = curve.percentage(high).unwrap();
        prop_assert!(at_low > at_high, "{} <= {}", at_low, at_high);
    }

    #[test]
    fn round_trip_through_ratio(curve in any_curve(), target in 1.0f64..10_000.0) {
        let ratio = ratio_for(target, &curve) as f32;
        let back = curve.percentage(ratio).unwrap();
        prop_assert!(relative_error(back, target) < 1e-3);
    }

    #[test]
    fn non_positive_ratios_rejected(curve in any_curve(), ratio in -100.0f32..=0.0) {
        prop_assert_eq!(curve.percentage(ratio), Err(SensorError::InvalidRatio));
    }

    #[test]
    fn unmapped_pins_never_resolve(gpio in any::<u8>()) {
        let in_table = ESP32_DEVKIT_V1.entries().iter().any(|e| e.gpio == gpio);
        prop_assert_eq!(ESP32_DEVKIT_V1.resolve(gpio).is_ok(), in_table);
    }
}

#[test]
fn lpg_round_trip_at_100_percent() {
    let ratio = ratio_for(100.0, &LPG_CURVE) as f32;
    let back = LPG_CURVE.percentage(ratio).unwrap();
    assert!(relative_error(back, 100.0) < 1e-3);
}
