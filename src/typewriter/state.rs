//! Pure typewriter state machine.
//!
//! Each call to [`TypewriterState::advance`] applies exactly one transition;
//! [`TypewriterState::delay`] reports how long to wait before the next one.

use std::time::Duration;

/// Delay between typed characters.
pub const TYPE_INTERVAL: Duration = Duration::from_millis(100);
/// Delay between deleted characters.
pub const DELETE_INTERVAL: Duration = Duration::from_millis(50);
/// Dwell once a phrase is fully typed.
pub const FULL_WORD_DWELL: Duration = Duration::from_millis(2000);
/// Dwell once a phrase is fully deleted.
pub const EMPTY_DWELL: Duration = Duration::from_millis(500);

/// Animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Adding one character per tick.
    Typing,
    /// Holding the complete phrase.
    PausedAtFullWord,
    /// Removing one character per tick.
    Deleting,
    /// Holding the empty display before the next phrase.
    PausedAtEmpty,
}

impl Phase {
    /// Wait before the transition out of this phase's current step.
    #[must_use]
    pub const fn delay(self) -> Duration {
        match self {
            Self::Typing => TYPE_INTERVAL,
            Self::PausedAtFullWord => FULL_WORD_DWELL,
            Self::Deleting => DELETE_INTERVAL,
            Self::PausedAtEmpty => EMPTY_DWELL,
        }
    }
}

/// Position within the phrase cycle.
///
/// `char_index` counts characters, not bytes, and always lies within
/// `0..=len(phrases[phrase_index])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterState {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    phase: Phase,
}

impl TypewriterState {
    /// Starts typing the first phrase from an empty display.
    #[must_use]
    pub const fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
        }
    }

    /// Phrases being cycled.
    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Index of the current phrase.
    #[must_use]
    pub const fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Characters of the current phrase currently shown.
    #[must_use]
    pub const fn char_index(&self) -> usize {
        self.char_index
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// True while characters are being removed.
    #[must_use]
    pub const fn is_deleting(&self) -> bool {
        matches!(self.phase, Phase::Deleting)
    }

    /// True when there is nothing to animate.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phrases.is_empty()
    }

    fn current_phrase(&self) -> &str {
        self.phrases
            .get(self.phrase_index)
            .map_or("", String::as_str)
    }

    fn current_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    /// Text shown right now: the first `char_index` characters.
    #[must_use]
    pub fn displayed(&self) -> String {
        self.current_phrase().chars().take(self.char_index).collect()
    }

    /// Wait before the next [`advance`](Self::advance).
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.phase.delay()
    }

    /// Applies one transition.
    ///
    /// Returns true when the phrase index wrapped back to the first phrase.
    pub fn advance(&mut self) -> bool {
        if self.is_idle() {
            return false;
        }
        match self.phase {
            Phase::Typing => {
                let len = self.current_len();
                if self.char_index < len {
                    self.char_index += 1;
                }
                if self.char_index >= len {
                    self.phase = Phase::PausedAtFullWord;
                }
                false
            }
            Phase::PausedAtFullWord => {
                self.phase = Phase::Deleting;
                false
            }
            Phase::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.phase = Phase::PausedAtEmpty;
                }
                false
            }
            Phase::PausedAtEmpty => {
                let next = self.phrase_index.saturating_add(1);
                let wrapped = next >= self.phrases.len();
                self.phrase_index = if wrapped { 0 } else { next };
                self.char_index = 0;
                self.phase = Phase::Typing;
                wrapped
            }
        }
    }
}

/// Total time for one uninterrupted pass over every phrase.
///
/// Each phrase of `n` characters costs `n` typing ticks, the full-word
/// dwell, `n` deleting ticks, and the empty dwell.
#[must_use]
pub fn cycle_duration(phrases: &[String]) -> Duration {
    phrases
        .iter()
        .map(|phrase| {
            let len = u32::try_from(phrase.chars().count()).unwrap_or(u32::MAX);
            TYPE_INTERVAL
                .saturating_mul(len)
                .saturating_add(FULL_WORD_DWELL)
                .saturating_add(DELETE_INTERVAL.saturating_mul(len))
                .saturating_add(EMPTY_DWELL)
        })
        .fold(Duration::ZERO, Duration::saturating_add)
}
