//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{TemperatureTier, UserId, WeatherQuery, celsius_to_fahrenheit};
use proptest::prelude::*;

// ============================================================================
// TemperatureTier Property Tests
// ============================================================================

mod temperature_tier_tests {
    use super::*;

    proptest! {
        #[test]
        fn every_temperature_has_exactly_one_tier(celsius in -100.0f64..=100.0f64) {
            // The step function is exhaustive: every finite input classifies
            let tier = TemperatureTier::from_celsius(celsius);

            let expected = if celsius >= 30.0 {
                TemperatureTier::Hot
            } else if celsius >= 20.0 {
                TemperatureTier::Warm
            } else if celsius >= 10.0 {
                TemperatureTier::Mild
            } else if celsius >= 0.0 {
                TemperatureTier::Cool
            } else {
                TemperatureTier::Cold
            };

            prop_assert_eq!(tier, expected);
        }

        #[test]
        fn tier_is_monotonic(a in -100.0f64..=100.0f64, b in -100.0f64..=100.0f64) {
            // A warmer temperature never lands in a colder tier
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

            let rank = |t: TemperatureTier| match t {
                TemperatureTier::Cold => 0,
                TemperatureTier::Cool => 1,
                TemperatureTier::Mild => 2,
                TemperatureTier::Warm => 3,
                TemperatureTier::Hot => 4,
            };

            prop_assert!(
                rank(TemperatureTier::from_celsius(lo)) <= rank(TemperatureTier::from_celsius(hi))
            );
        }

        #[test]
        fn fahrenheit_is_within_rounding_of_exact(celsius in -100.0f64..=100.0f64) {
            let exact = celsius * 9.0 / 5.0 + 32.0;
            #[allow(clippy::cast_precision_loss)]
            let diff = (celsius_to_fahrenheit(celsius) as f64 - exact).abs();
            prop_assert!(diff <= 0.5);
        }
    }
}

// ============================================================================
// WeatherQuery Property Tests
// ============================================================================

mod weather_query_tests {
    use super::*;

    proptest! {
        #[test]
        fn non_blank_location_is_accepted(location in "[A-Za-z][A-Za-z ]{0,30}[A-Za-z]") {
            let query = WeatherQuery::new(location.clone(), None);
            prop_assert!(query.is_ok());
            let query = query.unwrap();
            prop_assert_eq!(query.location(), location.trim());
        }

        #[test]
        fn provider_query_joins_with_comma(
            location in "[A-Za-z]{1,20}",
            region in "[A-Z]{2}"
        ) {
            let query = WeatherQuery::new(location.clone(), Some(region.clone())).unwrap();
            prop_assert_eq!(query.provider_query(), format!("{location},{region}"));
        }

        #[test]
        fn whitespace_only_location_is_rejected(ws in "[ \t]{0,10}") {
            prop_assert!(WeatherQuery::new(ws, None).is_err());
        }
    }
}

// ============================================================================
// UserId Property Tests
// ============================================================================

mod user_id_tests {
    use super::*;

    proptest! {
        #[test]
        fn snowflake_round_trips_through_string(raw in any::<u64>()) {
            let id = UserId::new(raw);
            let parsed = UserId::parse(&id.to_string()).unwrap();
            prop_assert_eq!(parsed, id);
        }
    }
}
