//! Property-based tests for name formatting
//!
//! Uses proptest to verify properties that should hold for all inputs.

use company_scope::core::services::formatter::{
    has_entity_suffix, to_domain_token, to_jurisdiction_token, with_llc_suffix,
};
use proptest::prelude::*;

/// Suffix spellings in arbitrary letter case
fn suffix() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("LLC"), Just("L.L.C."), Just("INC"), Just("I.N.C."), Just("Inc.")],
        proptest::collection::vec(any::<bool>(), 6),
    )
        .prop_map(|(suffix, upper)| {
            suffix
                .chars()
                .zip(upper.iter().cycle())
                .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
                .collect()
        })
}

proptest! {
    /// Domain tokens of suffixed names are bare lower-case alphanumerics
    #[test]
    fn domain_token_drops_any_suffix(
        // No i, l, n or c, so the suffix letters can only come from the suffix
        base in "[abd-hjkmo-zABD-HJKMO-Z]{1,8}( [abd-hjkmo-zABD-HJKMO-Z0-9]{1,8}){0,2}",
        punctuation in "[,.&' ]{0,3}",
        suffix in suffix(),
    ) {
        let name = format!("{base}{punctuation} {suffix}");
        let token = to_domain_token(&name);
        prop_assert!(token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()), "{}", token);
        prop_assert!(!token.contains("llc"));
        prop_assert!(!token.contains("inc"));
        prop_assert_eq!(token, base.replace(' ', "").to_lowercase());
    }

    /// A second pass over a domain token changes nothing
    #[test]
    fn domain_token_is_idempotent(name in "\\PC{0,40}") {
        let once = to_domain_token(&name);
        prop_assert_eq!(to_domain_token(&once), once);
    }

    /// Jurisdiction tokens are trimmed and keep no punctuation
    #[test]
    fn jurisdiction_token_is_trimmed_and_unpunctuated(name in "\\PC{0,40}", remove in any::<bool>()) {
        let token = to_jurisdiction_token(&name, remove);
        prop_assert_eq!(token.trim(), token.as_str());
        prop_assert!(!token.chars().any(|c| c.is_ascii_punctuation() && c != '_'));
    }

    /// Appending the LLC suffix never doubles an existing suffix
    #[test]
    fn llc_suffix_is_idempotent(name in "[A-Za-z ]{0,20}") {
        let once = with_llc_suffix(&name);
        prop_assert_eq!(with_llc_suffix(&once), once.clone());
        prop_assert!(has_entity_suffix(&once));
    }
}
