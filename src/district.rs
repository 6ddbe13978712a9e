//! Jurisdiction-key normalization.
//!
//! The join key is (state, district) with the district rendered as exactly
//! two characters on both sides. The roster encodes districts as 1-based
//! integers; the agency encodes them as integers, strings, or not at all, and
//! gives at-large states an arbitrary default value. These rules reconcile
//! the two encodings.

use crate::fetch::RawDistrict;

/// Render an integer district as the canonical 2-character key: values under
/// 10 get a leading zero, everything else renders as-is.
pub fn district_to_str(district: u32) -> String {
    if district < 10 {
        format!("0{district}")
    } else {
        district.to_string()
    }
}

/// Normalize the award-side district. At-large states are pinned to "01"
/// regardless of the raw value; otherwise the raw value is re-rendered in
/// the 2-character form. `None` means the record has no resolvable district
/// and will be dropped (and counted) at the join.
pub fn normalize_award_district(
    at_large_states: &[String],
    state: &str,
    raw: Option<&RawDistrict>,
) -> Option<String> {
    if at_large_states.iter().any(|s| s == state) {
        return Some("01".to_string());
    }
    match raw {
        Some(RawDistrict::Number(n)) => Some(district_to_str(*n)),
        Some(RawDistrict::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else if text.len() == 1 {
                Some(format!("0{text}"))
            } else {
                Some(text.to_string())
            }
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_large() -> Vec<String> {
        vec!["DE".to_string(), "VT".to_string()]
    }

    #[test]
    fn single_digit_districts_get_a_leading_zero() {
        for d in 0..=9 {
            assert_eq!(district_to_str(d), format!("0{d}"));
        }
    }

    #[test]
    fn two_digit_districts_render_as_is() {
        assert_eq!(district_to_str(10), "10");
        assert_eq!(district_to_str(27), "27");
        assert_eq!(district_to_str(53), "53");
    }

    #[test]
    fn at_large_states_pin_to_01_regardless_of_raw_value() {
        for state in ["DE", "VT"] {
            assert_eq!(
                normalize_award_district(&at_large(), state, Some(&RawDistrict::Number(5))),
                Some("01".to_string())
            );
            assert_eq!(
                normalize_award_district(
                    &at_large(),
                    state,
                    Some(&RawDistrict::Text("98".to_string()))
                ),
                Some("01".to_string())
            );
            assert_eq!(
                normalize_award_district(&at_large(), state, None),
                Some("01".to_string())
            );
        }
    }

    #[test]
    fn numeric_districts_are_zero_padded() {
        assert_eq!(
            normalize_award_district(&at_large(), "NY", Some(&RawDistrict::Number(3))),
            Some("03".to_string())
        );
        assert_eq!(
            normalize_award_district(&at_large(), "NY", Some(&RawDistrict::Number(11))),
            Some("11".to_string())
        );
    }

    #[test]
    fn normalization_is_idempotent_on_canonical_strings() {
        let once =
            normalize_award_district(&at_large(), "PA", Some(&RawDistrict::Text("07".to_string())))
                .unwrap();
        let twice =
            normalize_award_district(&at_large(), "PA", Some(&RawDistrict::Text(once.clone())));
        assert_eq!(twice, Some(once));
    }

    #[test]
    fn single_character_strings_are_padded() {
        assert_eq!(
            normalize_award_district(&at_large(), "PA", Some(&RawDistrict::Text("7".to_string()))),
            Some("07".to_string())
        );
    }

    #[test]
    fn missing_or_blank_district_is_unresolvable() {
        assert_eq!(normalize_award_district(&at_large(), "NY", None), None);
        assert_eq!(
            normalize_award_district(&at_large(), "NY", Some(&RawDistrict::Text("  ".to_string()))),
            None
        );
    }

    #[test]
    fn out_of_range_values_pass_through_unvalidated() {
        assert_eq!(
            normalize_award_district(&at_large(), "NY", Some(&RawDistrict::Number(98))),
            Some("98".to_string())
        );
    }
}
