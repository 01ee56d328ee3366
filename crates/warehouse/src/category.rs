use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Serialize, Serializer};

use stockroom_core::{DomainError, DomainResult, canonicalize};

/// A product category.
///
/// Handles are cheap to clone and compare by canonical name. Handles obtained
/// from the same [`CategoryRegistry`] for the same canonical name share one
/// allocation (see [`Category::same_instance`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category {
    name: Arc<str>,
}

impl Category {
    /// Canonical name (first character upper-cased).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when both handles were handed out for the same registry entry.
    pub fn same_instance(a: &Category, b: &Category) -> bool {
        Arc::ptr_eq(&a.name, &b.name)
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// Deduplicating registry of categories, keyed by canonical name.
///
/// Entries are created lazily and never evicted.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    categories: Mutex<HashMap<String, Category>>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the category for `name`, registering it on first use.
    pub fn of(&self, name: &str) -> DomainResult<Category> {
        if name.is_empty() {
            return Err(DomainError::validation("category name cannot be empty"));
        }
        let canonical = canonicalize(name);

        // Map operations cannot leave the map half-updated, so a poisoned lock is still usable.
        let mut categories = self.categories.lock().unwrap_or_else(PoisonError::into_inner);
        let category = categories
            .entry(canonical)
            .or_insert_with_key(|key| {
                tracing::debug!(category = %key, "registered category");
                Category {
                    name: Arc::from(key.as_str()),
                }
            })
            .clone();
        Ok(category)
    }

    /// Whether a category with the same canonical name is registered.
    pub fn contains(&self, name: &str) -> bool {
        let canonical = canonicalize(name);
        self.categories
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&canonical)
    }

    pub fn len(&self) -> usize {
        self.categories.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_canonicalizes_first_letter() {
        let registry = CategoryRegistry::new();
        let category = registry.of("electronics").unwrap();
        assert_eq!(category.name(), "Electronics");
    }

    #[test]
    fn of_preserves_remainder_verbatim() {
        let registry = CategoryRegistry::new();
        assert_eq!(registry.of("tV sets").unwrap().name(), "TV sets");
        assert_eq!(registry.of("DIY").unwrap().name(), "DIY");
    }

    #[test]
    fn of_returns_same_instance_for_same_canonical_name() {
        let registry = CategoryRegistry::new();
        let a = registry.of("books").unwrap();
        let b = registry.of("Books").unwrap();

        assert_eq!(a, b);
        assert!(Category::same_instance(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn different_remainders_are_different_categories() {
        let registry = CategoryRegistry::new();
        let a = registry.of("books").unwrap();
        let b = registry.of("bOOKS").unwrap();

        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn of_rejects_empty_name() {
        let registry = CategoryRegistry::new();
        let err = registry.of("").unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn registries_are_isolated() {
        let first = CategoryRegistry::new();
        let second = CategoryRegistry::new();
        let a = first.of("toys").unwrap();
        let b = second.of("toys").unwrap();

        assert_eq!(a, b);
        assert!(!Category::same_instance(&a, &b));
        assert!(first.contains("Toys"));
        assert!(!second.contains("games"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: first-letter case never produces a second registry entry.
            #[test]
            fn first_letter_case_dedupes(first in "[a-z]", rest in "[a-zA-Z0-9 ]{0,30}") {
                let registry = CategoryRegistry::new();
                let lower = registry.of(&format!("{first}{rest}")).unwrap();
                let upper = registry.of(&format!("{}{rest}", first.to_uppercase())).unwrap();

                prop_assert!(Category::same_instance(&lower, &upper));
                prop_assert_eq!(registry.len(), 1);
            }

            /// Property: the canonical name starts upper-case and keeps the tail.
            #[test]
            fn name_is_canonical(first in "[a-z]", rest in "[a-zA-Z0-9 ]{0,30}") {
                let registry = CategoryRegistry::new();
                let category = registry.of(&format!("{first}{rest}")).unwrap();

                prop_assert_eq!(category.name(), format!("{}{rest}", first.to_uppercase()));
            }
        }
    }
}
