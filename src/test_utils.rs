//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a filesystem-safe entry name (no separators, no dot names)
    pub fn entry_name() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_-]{1,24}(\\.[a-z0-9]{1,8})?"
            .prop_filter("Name must not be a dot name", |s| {
                s != "." && s != ".."
            })
    }

    /// Generate arbitrary text content, empty string included
    pub fn text_content() -> impl Strategy<Value = String> {
        proptest::string::string_regex("(?s).{0,512}").expect("valid regex")
    }

    /// Generate a small set of distinct entry names
    pub fn entry_names(max: usize) -> impl Strategy<Value = Vec<String>> {
        proptest::collection::hash_set(entry_name(), 0..max)
            .prop_map(|set| set.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_entry_name_generator(name in entry_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('/'));
            prop_assert!(name != "." && name != "..");
        }

        #[test]
        fn test_entry_names_generator_is_distinct(names in entry_names(8)) {
            let mut deduped = names.clone();
            deduped.sort();
            deduped.dedup();
            prop_assert_eq!(deduped.len(), names.len());
        }
    }
}
