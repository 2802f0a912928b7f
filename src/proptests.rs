// Model-based property tests for OrderedMap, kept inside the crate so they can reach the
// invariant checker.

use crate::map::OrderedMap;
use crate::lock::LocalLock;
use parking_lot::lock_api::RawRwLock;
use proptest::prelude::*;

// Keys come from a small domain so that updates, repeats and removals of present keys are common.
#[derive(Clone, Debug)]
enum Op {
    Set(u8, i32),
    BulkSet(Vec<(u8, i32)>),
    Remove(u8),
    Get(u8),
    Iterate,
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let key = 0u8..16;
    let op = prop_oneof![
        4 => (key.clone(), any::<i32>()).prop_map(|(k, v)| Op::Set(k, v)),
        2 => proptest::collection::vec((key.clone(), any::<i32>()), 0..8).prop_map(Op::BulkSet),
        2 => key.clone().prop_map(Op::Remove),
        1 => key.prop_map(Op::Get),
        1 => Just(Op::Iterate),
    ];
    proptest::collection::vec(op, 1..80)
}

/// The reference model: a plain vector in insertion order, searched linearly.
#[derive(Default)]
struct Model {
    entries: Vec<(u8, i32)>,
}

impl Model {
    fn position(&self, key: u8) -> Option<usize> {
        self.entries.iter().position(|(k, _)| *k == key)
    }

    fn set(&mut self, key: u8, value: i32) -> Option<i32> {
        match self.position(key) {
            Some(pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    fn bulk_set(&mut self, batch: &[(u8, i32)]) {
        let start = self.entries.len();
        for &(key, value) in batch {
            match self.position(key) {
                Some(pos) if pos < start => {
                    self.entries[pos].1 = value;
                    return;
                }
                Some(_) => return,
                None => self.entries.push((key, value)),
            }
        }
    }

    fn remove(&mut self, key: u8) -> Option<i32> {
        self.position(key).map(|pos| self.entries.remove(pos).1)
    }
}

fn run<R: RawRwLock>(sut: OrderedMap<u8, i32, R>, ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut model = Model::default();

    for op in ops {
        match op {
            Op::Set(key, value) => {
                prop_assert_eq!(sut.set(key, value), model.set(key, value));
            }
            Op::BulkSet(batch) => {
                model.bulk_set(&batch);
                sut.bulk_set(batch);
            }
            Op::Remove(key) => {
                let before: Vec<_> = model.entries.iter().map(|(k, _)| *k).collect();
                let removed_at = model.position(key);

                prop_assert_eq!(sut.shift_remove(&key), model.remove(key));

                // Earlier keys keep their position, later keys move down by exactly one.
                for (old_pos, k) in before.into_iter().enumerate() {
                    let expected = match removed_at {
                        Some(at) if old_pos == at => None,
                        Some(at) if old_pos > at => Some(old_pos - 1),
                        _ => Some(old_pos),
                    };
                    prop_assert_eq!(sut.index_of(&k), expected);
                }
            }
            Op::Get(key) => {
                let expected = model.position(key).map(|pos| model.entries[pos].1);
                prop_assert_eq!(sut.get(&key), expected);
                prop_assert_eq!(sut.contains_key(&key), expected.is_some());
                prop_assert_eq!(sut.index_of(&key), model.position(key));
            }
            Op::Iterate => {
                prop_assert_eq!(sut.iter().collect::<Vec<_>>(), model.entries.clone());
                let indexed: Vec<_> = sut.indexed_values().collect();
                let expected: Vec<_> = model.entries.iter().map(|(_, v)| *v).enumerate().collect();
                prop_assert_eq!(indexed, expected);
            }
        }

        prop_assert_eq!(sut.len(), model.entries.len());
        sut.debug_check_invariants();
    }

    prop_assert_eq!(sut.entries(), model.entries);
    Ok(())
}

// Property: both lock strategies behave exactly like the linear model for any operation
// sequence, and the index agrees with the ordered storage after every step.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn prop_guarded_matches_model(ops in arb_ops()) {
        run(OrderedMap::new(), ops)?;
    }

    #[test]
    fn prop_unguarded_matches_model(ops in arb_ops()) {
        run::<LocalLock>(OrderedMap::new_unguarded(), ops)?;
    }
}
