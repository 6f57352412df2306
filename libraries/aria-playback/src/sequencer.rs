//! Playback sequencing
//!
//! State machine computing the next/previous playlist index under shuffle
//! and repeat policies. The sequencer owns the shuffle-order permutation and
//! repairs its own state in lockstep with playlist mutations; the
//! controller calls [`Sequencer::on_track_removed`] and
//! [`Sequencer::on_tracks_appended`] whenever the store changes.
//!
//! Invariants, maintained across every operation:
//! - a non-empty `order` is a permutation of `0..len`
//! - `position` indexes into `order` whenever `order` is non-empty
//! - `current`, when present, is a valid playlist index
//!
//! One deliberate asymmetry: `prev` has no repeat-one special case, so a
//! user pressing "previous" is never trapped by single-track repeat, while
//! `next` (and the controller's ended-handling) replays the current track.

use crate::types::RepeatMode;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Next/previous index computation under shuffle/repeat
#[derive(Debug)]
pub struct Sequencer {
    /// Current playlist index, if a track is active
    current: Option<usize>,

    /// Whether shuffle traversal is active
    shuffle: bool,

    /// Repeat policy
    repeat: RepeatMode,

    /// Shuffle-order permutation; meaningful only while shuffled
    order: Vec<usize>,

    /// Position within `order`
    position: usize,

    rng: StdRng,
}

impl Sequencer {
    /// Create a sequencer with an entropy-seeded random source
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a sequencer with a fixed seed, for deterministic shuffling
    /// in tests
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            current: None,
            shuffle: false,
            repeat: RepeatMode::Off,
            order: Vec::new(),
            position: 0,
            rng,
        }
    }

    // ===== State accessors =====

    /// Current playlist index
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Set the current playlist index (when the user picks a track)
    pub fn set_current(&mut self, index: Option<usize>) {
        self.current = index;
    }

    /// Repeat policy
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Set the repeat policy
    pub fn set_repeat(&mut self, repeat: RepeatMode) {
        self.repeat = repeat;
    }

    /// Whether shuffle traversal is active
    pub fn is_shuffled(&self) -> bool {
        self.shuffle
    }

    /// The shuffle-order permutation (empty while unshuffled)
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Position within the shuffle order
    pub fn position(&self) -> usize {
        self.position
    }

    // ===== Shuffle order =====

    /// Toggle shuffle for a playlist of `len` tracks.
    ///
    /// Switching shuffle on with an active track builds a fresh order
    /// anchored at it; without one the order stays empty until the first
    /// `next`/`prev` query. Switching off discards the order.
    pub fn set_shuffle(&mut self, shuffle: bool, len: usize) {
        self.shuffle = shuffle;
        if shuffle {
            if let Some(anchor) = self.current {
                self.build_order(anchor, len);
            } else {
                self.order.clear();
                self.position = 0;
            }
        } else {
            self.order.clear();
            self.position = 0;
        }
    }

    /// Build a fresh shuffle order: `anchor` first, every other valid index
    /// Fisher-Yates shuffled behind it. Resets the position to the anchor.
    fn build_order(&mut self, anchor: usize, len: usize) {
        let mut rest: Vec<usize> = (0..len).filter(|&i| i != anchor).collect();
        rest.shuffle(&mut self.rng);

        self.order = Vec::with_capacity(len);
        self.order.push(anchor);
        self.order.extend(rest);
        self.position = 0;
    }

    /// Whether the stored order is unusable for the current track
    fn order_is_stale(&self) -> bool {
        match self.current {
            Some(current) => self.order.is_empty() || !self.order.contains(&current),
            None => true,
        }
    }

    // ===== Traversal =====

    /// Index of the track to play after the current one, or `None` when
    /// traversal is exhausted (signals stop).
    pub fn next(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        // Repeat-one replays regardless of shuffle state or order contents.
        if self.repeat == RepeatMode::One {
            if let Some(current) = self.current {
                return Some(current);
            }
        }

        if self.shuffle {
            let Some(current) = self.current else {
                return Some(0);
            };
            if self.order_is_stale() {
                // Self-correcting replay: rebuild around the current track
                // and report it unchanged rather than advancing.
                self.build_order(current, len);
                return Some(current);
            }
            if self.position + 1 < self.order.len() {
                self.position += 1;
                Some(self.order[self.position])
            } else if self.repeat == RepeatMode::All {
                self.position = 0;
                Some(self.order[0])
            } else {
                None
            }
        } else {
            match self.current {
                None => Some(0),
                Some(current) if current + 1 < len => Some(current + 1),
                Some(_) if self.repeat == RepeatMode::All => Some(0),
                Some(_) => None,
            }
        }
    }

    /// Index of the track before the current one, or `None` at the start.
    ///
    /// No repeat-one special case here (see module docs).
    pub fn prev(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        if self.shuffle {
            let Some(current) = self.current else {
                return Some(0);
            };
            if self.order_is_stale() {
                self.build_order(current, len);
                return Some(current);
            }
            if self.position > 0 {
                self.position -= 1;
                Some(self.order[self.position])
            } else if self.repeat == RepeatMode::All {
                self.position = self.order.len() - 1;
                Some(self.order[self.position])
            } else {
                None
            }
        } else {
            match self.current {
                None => Some(0),
                Some(current) if current > 0 => Some(current - 1),
                Some(_) if self.repeat == RepeatMode::All => Some(len - 1),
                Some(_) => None,
            }
        }
    }

    // ===== Playlist mutation repair =====

    /// Repair state after the playlist removed the track at `removed`.
    ///
    /// `new_len` is the playlist length after removal. Order entries equal
    /// to `removed` disappear; greater ones shift down. The current index is
    /// repaired the same way, and under shuffle the position is recomputed
    /// as the repaired current's place within the repaired order.
    pub fn on_track_removed(&mut self, removed: usize, new_len: usize) {
        self.order.retain(|&i| i != removed);
        for entry in &mut self.order {
            if *entry > removed {
                *entry -= 1;
            }
        }

        self.current = match self.current {
            Some(current) if current == removed => {
                if new_len == 0 {
                    None
                } else {
                    Some(removed.min(new_len - 1))
                }
            }
            Some(current) if current > removed => Some(current - 1),
            other => other,
        };

        if self.shuffle {
            self.position = self
                .current
                .and_then(|current| self.order.iter().position(|&i| i == current))
                .unwrap_or(0);
        }
    }

    /// React to tracks appended while a playlist now holds `len` tracks.
    ///
    /// Under shuffle with an active track the whole order is rebuilt
    /// anchored at it, re-randomizing the not-yet-played remainder; the
    /// previous order is discarded.
    pub fn on_tracks_appended(&mut self, len: usize) {
        if self.shuffle {
            if let Some(anchor) = self.current {
                self.build_order(anchor, len);
            }
        }
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}
