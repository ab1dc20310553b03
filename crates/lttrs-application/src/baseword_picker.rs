//! Random baseword selection.

use lttrs_core::dictionary::Dictionary;
use lttrs_core::word::Baseword;
use lttrs_core::{LttrsError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::{Mutex, MutexGuard};

struct PickerState {
    rng: StdRng,
    previous: Option<Baseword>,
}

/// Picks basewords from a dictionary's pool.
///
/// The baseword picked (or remembered) last is never picked again right
/// away, unless it is the only one in the pool.
pub struct BasewordPicker {
    state: Mutex<PickerState>,
}

impl BasewordPicker {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// A picker with a fixed seed, for reproducible sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            state: Mutex::new(PickerState {
                rng,
                previous: None,
            }),
        }
    }

    /// Picks a random baseword from `dictionary`'s pool.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryUnavailable` if the pool is empty.
    pub fn pick(&self, dictionary: &Dictionary) -> Result<Baseword> {
        let mut state = self.lock();
        let previous = state.previous.clone();

        let candidates: Vec<&Baseword> = dictionary
            .basewords()
            .iter()
            .filter(|baseword| Some(*baseword) != previous.as_ref())
            .collect();

        let picked = match candidates.choose(&mut state.rng) {
            Some(baseword) => (*baseword).clone(),
            // The pool holds nothing but the previous pick
            None => dictionary.basewords().first().cloned().ok_or_else(|| {
                LttrsError::dictionary_unavailable(
                    dictionary.locale(),
                    "no baseword of the required length in the word list",
                )
            })?,
        };

        state.previous = Some(picked.clone());
        Ok(picked)
    }

    /// Records a baseword chosen elsewhere (shared or continued games).
    pub fn remember(&self, baseword: &Baseword) {
        self.lock().previous = Some(baseword.clone());
    }

    pub fn previous(&self) -> Option<Baseword> {
        self.lock().previous.clone()
    }

    fn lock(&self) -> MutexGuard<'_, PickerState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for BasewordPicker {
    fn default() -> Self {
        Self::new()
    }
}
