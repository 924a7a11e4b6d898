//! Property-based test generators using proptest.
//!
//! Provides strategies for keys, values and operation sequences, plus a
//! reference model to replay those sequences against.

use indexmap::IndexMap;
use proptest::prelude::*;
use wrapstore_core::StorageFacade;

/// Strategy for generating keys from a small alphabet, so sequences
/// revisit keys often.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,2}").expect("Invalid regex")
}

/// Strategy for generating values, including the empty string.
pub fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ]{0,16}").expect("Invalid regex")
}

/// A single store operation.
#[derive(Debug, Clone)]
pub enum StoreOperation {
    /// Read a key.
    Get {
        /// Key to read.
        key: String,
    },
    /// Write a key.
    Set {
        /// Key to write.
        key: String,
        /// Value to write.
        value: String,
    },
    /// Remove a key.
    Remove {
        /// Key to remove.
        key: String,
    },
    /// Remove everything.
    Clear,
    /// Enumerate by position.
    Key {
        /// Ordinal position.
        index: usize,
    },
    /// Count entries.
    Length,
}

/// Observable result of a [`StoreOperation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `get` or `key` result.
    Value(Option<String>),
    /// `length` result.
    Len(usize),
    /// `set`, `remove`, `clear`.
    Unit,
}

/// Strategy for generating store operations.
pub fn store_operation_strategy() -> impl Strategy<Value = StoreOperation> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| StoreOperation::Set { key, value }),
        3 => key_strategy().prop_map(|key| StoreOperation::Get { key }),
        2 => key_strategy().prop_map(|key| StoreOperation::Remove { key }),
        2 => (0usize..8).prop_map(|index| StoreOperation::Key { index }),
        1 => Just(StoreOperation::Length),
        1 => Just(StoreOperation::Clear),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<StoreOperation>> {
    prop::collection::vec(store_operation_strategy(), min_ops..max_ops)
}

/// Insertion-ordered reference model of the key-value contract.
#[derive(Debug, Default)]
pub struct Model {
    entries: IndexMap<String, String>,
}

impl Model {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `op` and returns what a conforming store would return.
    pub fn apply(&mut self, op: &StoreOperation) -> Outcome {
        match op {
            StoreOperation::Get { key } => Outcome::Value(self.entries.get(key).cloned()),
            StoreOperation::Set { key, value } => {
                self.entries.insert(key.clone(), value.clone());
                Outcome::Unit
            }
            StoreOperation::Remove { key } => {
                self.entries.shift_remove(key);
                Outcome::Unit
            }
            StoreOperation::Clear => {
                self.entries.clear();
                Outcome::Unit
            }
            StoreOperation::Key { index } => {
                Outcome::Value(self.entries.get_index(*index).map(|(k, _)| k.clone()))
            }
            StoreOperation::Length => Outcome::Len(self.entries.len()),
        }
    }
}

/// Applies `op` to a facade and returns the observed outcome.
pub fn apply_to_facade(facade: &StorageFacade, op: &StoreOperation) -> Outcome {
    match op {
        StoreOperation::Get { key } => Outcome::Value(facade.get(key)),
        StoreOperation::Set { key, value } => {
            facade.set(key, value);
            Outcome::Unit
        }
        StoreOperation::Remove { key } => {
            facade.remove(key);
            Outcome::Unit
        }
        StoreOperation::Clear => {
            facade.clear();
            Outcome::Unit
        }
        StoreOperation::Key { index } => Outcome::Value(facade.key(*index)),
        StoreOperation::Length => Outcome::Len(facade.length()),
    }
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn keys_are_short_and_nonempty(key in key_strategy()) {
            prop_assert!(!key.is_empty());
            prop_assert!(key.len() <= 2);
        }

        #[test]
        fn model_length_tracks_distinct_keys(ops in operation_sequence_strategy(0, 40)) {
            let mut model = Model::new();
            for op in &ops {
                model.apply(op);
            }
            let len = model.apply(&StoreOperation::Length);
            let Outcome::Len(len) = len else {
                panic!("length must return Len");
            };
            prop_assert_eq!(model.apply(&StoreOperation::Key { index: len }), Outcome::Value(None));
        }
    }

    #[test]
    fn model_set_then_get() {
        let mut model = Model::new();
        model.apply(&StoreOperation::Set {
            key: "a".into(),
            value: "1".into(),
        });
        assert_eq!(
            model.apply(&StoreOperation::Get { key: "a".into() }),
            Outcome::Value(Some("1".into()))
        );
    }
}
