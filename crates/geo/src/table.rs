//! Reverse index from postal code to federal state.
//!
//! The table is built once from per-state range lists:
//!
//! 1. every range is expanded into its member codes,
//! 2. the codes of each state are unioned into one ordered set,
//! 3. every (code, state) pair is inserted into a hash index, visiting states
//!    in the order they were handed to the builder.
//!
//! Step 3 is where two states could claim the same code. What happens then
//! is decided by [`CollisionPolicy`].

use std::collections::{BTreeSet, HashMap};

use crate::error::ZipCodeError;
use crate::range::{MAX_ZIP_CODE, ZipRange};
use crate::state::State;

/// What to do when one code is claimed by two different states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Abort the build with [`ZipCodeError::Collision`].
    #[default]
    Reject,
    /// The state handed to the builder later owns the code.
    LastWriteWins,
}

/// Collects per-state ranges and builds a [`ZipCodeTable`].
#[derive(Debug, Clone, Default)]
pub struct ZipCodeTableBuilder {
    ranges: Vec<(State, Vec<ZipRange>)>,
    policy: CollisionPolicy,
}

impl ZipCodeTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Add ranges for `state`. Repeated calls for the same state are unioned
    /// and keep the position of the first call.
    pub fn ranges<I>(mut self, state: State, ranges: I) -> Self
    where
        I: IntoIterator<Item = ZipRange>,
    {
        match self.ranges.iter().position(|(s, _)| *s == state) {
            Some(i) => self.ranges[i].1.extend(ranges),
            None => self.ranges.push((state, ranges.into_iter().collect())),
        }
        self
    }

    pub fn build(self) -> Result<ZipCodeTable, ZipCodeError> {
        let mut by_state: Vec<(State, BTreeSet<u32>)> = Vec::with_capacity(self.ranges.len());
        for (state, ranges) in &self.ranges {
            let mut codes = BTreeSet::new();
            for range in ranges {
                if range.start() > range.end() || range.end() > MAX_ZIP_CODE {
                    return Err(ZipCodeError::InvalidRange {
                        start: range.start(),
                        end: range.end(),
                    });
                }
                codes.extend(range.codes());
            }
            by_state.push((*state, codes));
        }

        let capacity = by_state.iter().map(|(_, codes)| codes.len()).sum();
        let mut index: HashMap<u32, State> = HashMap::with_capacity(capacity);
        let mut overridden = 0usize;

        for (state, codes) in &by_state {
            for &code in codes {
                let Some(previous) = index.insert(code, *state) else {
                    continue;
                };
                match self.policy {
                    CollisionPolicy::Reject => {
                        tracing::error!(
                            code,
                            first = previous.code(),
                            second = state.code(),
                            "zip code claimed by two states"
                        );
                        return Err(ZipCodeError::Collision {
                            code,
                            first: previous,
                            second: *state,
                        });
                    }
                    CollisionPolicy::LastWriteWins => {
                        overridden += 1;
                        tracing::warn!(
                            code,
                            previous = previous.code(),
                            winner = state.code(),
                            "zip code reassigned to later state"
                        );
                    }
                }
            }
        }

        tracing::debug!(
            codes = index.len(),
            states = by_state.len(),
            overridden,
            policy = ?self.policy,
            "zip code table built"
        );

        Ok(ZipCodeTable {
            index,
            by_state: by_state.into_iter().collect(),
        })
    }
}

/// Immutable postal code → state index.
#[derive(Debug, Clone)]
pub struct ZipCodeTable {
    index: HashMap<u32, State>,
    by_state: HashMap<State, BTreeSet<u32>>,
}

impl ZipCodeTable {
    pub fn builder() -> ZipCodeTableBuilder {
        ZipCodeTableBuilder::new()
    }

    /// Owner of `code`, if any.
    pub fn get(&self, code: u32) -> Option<State> {
        self.index.get(&code).copied()
    }

    /// Every code the ranges of `state` cover, ascending.
    ///
    /// Under [`CollisionPolicy::LastWriteWins`] this still includes codes the
    /// state lost to a later state; use [`ZipCodeTable::get`] for ownership.
    pub fn codes_of(&self, state: State) -> impl Iterator<Item = u32> + '_ {
        self.by_state
            .get(&state)
            .into_iter()
            .flat_map(|codes| codes.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All (code, owner) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, State)> + '_ {
        self.index.iter().map(|(&code, &state)| (code, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlapping_builder() -> ZipCodeTableBuilder {
        ZipCodeTable::builder()
            .ranges(State::Sachsen, [ZipRange::new(7900, 7919)])
            .ranges(State::Thueringen, [ZipRange::new(7919, 7950)])
    }

    #[test]
    fn builds_reverse_index() {
        let table = ZipCodeTable::builder()
            .ranges(State::Berlin, [ZipRange::new(10001, 10003)])
            .ranges(State::Bremen, [ZipRange::new(28001, 28002)])
            .build()
            .unwrap();

        assert_eq!(table.len(), 5);
        assert_eq!(table.get(10002), Some(State::Berlin));
        assert_eq!(table.get(28002), Some(State::Bremen));
        assert_eq!(table.get(28003), None);
    }

    #[test]
    fn ranges_of_one_state_are_unioned() {
        let table = ZipCodeTable::builder()
            .ranges(State::Hamburg, [ZipRange::new(1, 5), ZipRange::new(4, 8)])
            .ranges(State::Hamburg, [ZipRange::new(8, 8), ZipRange::new(20, 21)])
            .build()
            .unwrap();

        assert_eq!(
            table.codes_of(State::Hamburg).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 20, 21]
        );
        assert_eq!(table.len(), 10);
        assert_eq!(table.codes_of(State::Saarland).count(), 0);
    }

    #[test]
    fn reject_policy_fails_loudly_on_overlap() {
        let err = overlapping_builder().build().unwrap_err();
        assert_eq!(
            err,
            ZipCodeError::Collision {
                code: 7919,
                first: State::Sachsen,
                second: State::Thueringen,
            }
        );
    }

    #[test]
    fn last_write_wins_policy_prefers_later_state() {
        let table = overlapping_builder()
            .collision_policy(CollisionPolicy::LastWriteWins)
            .build()
            .unwrap();

        assert_eq!(table.get(7919), Some(State::Thueringen));
        assert_eq!(table.get(7918), Some(State::Sachsen));
        assert!(table.codes_of(State::Sachsen).any(|c| c == 7919));
    }

    #[test]
    fn later_call_for_known_state_keeps_first_position() {
        let table = ZipCodeTable::builder()
            .collision_policy(CollisionPolicy::LastWriteWins)
            .ranges(State::Hessen, [ZipRange::new(100, 100)])
            .ranges(State::Bayern, [ZipRange::new(100, 100)])
            .ranges(State::Hessen, [ZipRange::new(101, 101)])
            .build()
            .unwrap();

        assert_eq!(table.get(100), Some(State::Bayern));
    }

    #[test]
    fn invalid_ranges_abort_the_build() {
        let err = ZipCodeTable::builder()
            .ranges(State::Saarland, [ZipRange::new(66459, 66001)])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ZipCodeError::InvalidRange {
                start: 66459,
                end: 66001
            }
        );
    }

    #[test]
    fn empty_builder_yields_empty_table() {
        let table = ZipCodeTableBuilder::new().build().unwrap();
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
    }
}
