//! Ordered storage for the six timeline points that bound the three sounds.

use egui::Pos2;
use std::fmt;

/// Drawn width of the timeline rail in model pixels.
pub const RAIL_WIDTH: f32 = 400.0;

/// "Lim": the longest duration that is still mensurally determinate.
/// A third of the rail, truncated to whole pixels like the tick spacing.
pub const UNIT_LENGTH: f32 = 133.0;

pub const SLOT_COUNT: usize = 6;

/// Interaction phase, equal to the index of the last filled point slot.
/// Slots 0/1 bound the first sound, 2/3 the second, 4/5 the third.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Empty,
    Sound1Started,
    Sound1Ended,
    Sound2Started,
    Sound2Ended,
    Sound3Started,
    Sound3Ended,
}

impl Phase {
    /// Number of filled slots in this phase.
    pub const fn filled(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Sound1Started => 1,
            Self::Sound1Ended => 2,
            Self::Sound2Started => 3,
            Self::Sound2Ended => 4,
            Self::Sound3Started => 5,
            Self::Sound3Ended => 6,
        }
    }

    const fn from_filled(filled: usize) -> Self {
        match filled {
            0 => Self::Empty,
            1 => Self::Sound1Started,
            2 => Self::Sound1Ended,
            3 => Self::Sound2Started,
            4 => Self::Sound2Ended,
            5 => Self::Sound3Started,
            _ => Self::Sound3Ended,
        }
    }
}

/// A new point did not lie strictly to the right of every earlier point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingError;

impl fmt::Display for OrderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("new point does not lie to the right of every earlier point")
    }
}

impl std::error::Error for OrderingError {}

/// The ordered list of up to six timeline points, filled strictly left to
/// right. The first point is always clamped to x = 0: the first click
/// defines instant 0 no matter where it lands.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSequence {
    slots: [Option<Pos2>; SLOT_COUNT],
    unit_length: f32,
}

impl Default for EventSequence {
    fn default() -> Self {
        Self::new(UNIT_LENGTH)
    }
}

impl EventSequence {
    pub const fn new(unit_length: f32) -> Self {
        Self {
            slots: [None; SLOT_COUNT],
            unit_length,
        }
    }

    pub const fn unit_length(&self) -> f32 {
        self.unit_length
    }

    pub fn phase(&self) -> Phase {
        Phase::from_filled(self.slots.iter().take_while(|s| s.is_some()).count())
    }

    pub fn point_at(&self, index: usize) -> Option<Pos2> {
        self.slots.get(index).copied().flatten()
    }

    /// Append a point at the next free slot, enforcing strict monotone x.
    /// On violation nothing is stored and the caller must roll the
    /// interaction back one step.
    pub fn try_append(&mut self, x: f32, y: f32) -> Result<Phase, OrderingError> {
        let filled = self.phase().filled();
        if filled == SLOT_COUNT {
            return Err(OrderingError);
        }
        if filled == 0 {
            self.slots[0] = Some(Pos2::new(0.0, y));
            return Ok(Phase::Sound1Started);
        }
        if self.slots[..filled]
            .iter()
            .flatten()
            .any(|prior| prior.x >= x)
        {
            return Err(OrderingError);
        }
        self.slots[filled] = Some(Pos2::new(x, y));
        Ok(Phase::from_filled(filled + 1))
    }

    /// Remove the most recently filled slot. The third sound is produced by
    /// a single click that fills two slots at once, so stepping back from
    /// the fully populated state removes both of its slots together.
    pub fn remove_last(&mut self) -> Phase {
        let filled = self.phase().filled();
        if filled == 0 {
            return Phase::Empty;
        }
        self.slots[filled - 1] = None;
        if self.phase() == Phase::Sound3Started {
            self.slots[4] = None;
        }
        self.phase()
    }

    pub fn reset(&mut self) {
        self.slots = [None; SLOT_COUNT];
    }

    /// Whether the span from `first` to `second` is short enough (at most
    /// Lim) to be perceived as reproducible.
    pub fn is_determinate(&self, first: f32, second: f32) -> bool {
        first < second && second - first <= self.unit_length
    }

    /// The upper range of determinacy: still determinate, but already past
    /// twice the span's start, so a projection begun there is overrun.
    pub fn is_weak_determinate(&self, first: f32, second: f32) -> bool {
        self.is_determinate(first, second) && second > 2.0 * first
    }
}
