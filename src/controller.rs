//! Classification engine: turns accepted clicks and pointer moves into the
//! derived scene state and the current (instruction, commentary) selection.

use crate::messages::Message;
use crate::sequence::{EventSequence, Phase, UNIT_LENGTH};
use egui::Pos2;

/// Shown in place of the instruction after an ordering violation; the
/// commentary selection underneath is left untouched.
pub const ORDERING_NOTICE: &str = "Not a well-defined event. Try again";

/// Horizontal extent granted to the third sound in the bands where its
/// offset trails the click.
const THIRD_SOUND_TAIL: f32 = 20.0;

/// In the anticipation bands the third sound's offset is pinned just short
/// of the projected boundary at twice the second onset.
const ANTICIPATION_INSET: f32 = 5.0;

/// Everything the renderer needs beyond the stored points. Recomputed on
/// every accepted click, pointer move, step-back, or restart; read-only to
/// the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedState {
    /// The first projective-potential arc is growing.
    pub arcing1: bool,
    /// The second projective-potential arc is growing.
    pub arcing2: bool,
    /// The pointer is defining the first sound's duration.
    pub in_event1: bool,
    /// The pointer is defining the second sound's duration.
    pub in_event2: bool,
    /// No further points are accepted.
    pub finished: bool,
    /// Resize the first dashed projection out to the third onset.
    pub dashed_arc_redraw: bool,
    /// The next click anywhere switches to the alternate interpretation.
    pub click_to_alternate: bool,
    /// Draw the hypothetical parenthesized event.
    pub short_parenthesis: bool,
    /// The alternate interpretation replaces the primary diagram.
    pub alternate_view: bool,
    /// Draw the hiatus double bar and the curved arrow.
    pub rail_tracks: bool,
    /// Anchor of the X through the first dashed projection, if any.
    pub cross_mark: Option<f32>,
    /// Live terminus of whichever arc is growing.
    pub pending_arc_end: Option<Pos2>,
    /// Live offset of the sound currently being defined.
    pub provisional: Option<Pos2>,
    /// Selected text pair.
    pub message: Message,
}

impl Default for DerivedState {
    fn default() -> Self {
        Self {
            arcing1: false,
            arcing2: false,
            in_event1: false,
            in_event2: false,
            finished: false,
            dashed_arc_redraw: false,
            click_to_alternate: false,
            short_parenthesis: false,
            alternate_view: false,
            rail_tracks: false,
            cross_mark: None,
            pending_arc_end: None,
            provisional: None,
            message: Message::Intro,
        }
    }
}

/// The phase-transition and classification engine. Owns the point store
/// and the derived state; everything is mutated synchronously inside the
/// two pointer handlers and the two control actions.
#[derive(Debug, Clone)]
pub struct ProjectionController {
    seq: EventSequence,
    state: DerivedState,
    notice: Option<&'static str>,
}

impl Default for ProjectionController {
    fn default() -> Self {
        Self::new(UNIT_LENGTH)
    }
}

impl ProjectionController {
    pub fn new(unit_length: f32) -> Self {
        Self {
            seq: EventSequence::new(unit_length),
            state: DerivedState::default(),
            notice: None,
        }
    }

    pub const fn sequence(&self) -> &EventSequence {
        &self.seq
    }

    pub const fn state(&self) -> &DerivedState {
        &self.state
    }

    #[cfg(test)]
    pub const fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Instruction text with any pending ordering notice applied on top.
    pub fn displayed_instruction(&self) -> &'static str {
        self.notice.unwrap_or_else(|| self.state.message.instruction())
    }

    pub fn displayed_commentary(&self) -> &'static str {
        self.state.message.commentary()
    }

    fn unit(&self) -> f32 {
        self.seq.unit_length()
    }

    fn set_message(&mut self, message: Message) {
        self.state.message = message;
        self.notice = None;
    }

    /// Clear everything back to the introduction.
    pub fn restart(&mut self) {
        self.seq.reset();
        self.state = DerivedState::default();
        self.notice = None;
    }

    /// Remove the most recently completed point (both third-sound points at
    /// the fully populated state) and re-enter the prior phase. Returns
    /// false when there was nothing to remove.
    pub fn step_back(&mut self) -> bool {
        if self.seq.phase() == Phase::Empty {
            return false;
        }
        let remaining = self.seq.remove_last().filled();
        self.rollback_to(remaining);
        true
    }

    /// Restore the canonical mid-definition state for `filled` stored
    /// points. Identical to arriving at that phase for the first time,
    /// except that the live arc terminus survives and `finished` is
    /// always cleared.
    fn rollback_to(&mut self, filled: usize) {
        let mut next = DerivedState::default();
        match filled {
            0 => {
                self.seq.reset();
            }
            1 => {
                next.in_event1 = true;
                next.arcing1 = true;
                next.message = Message::Sound1Continues;
            }
            2 => {
                next.arcing1 = true;
                next.message = Message::Pause1;
            }
            3 => {
                next.in_event2 = true;
                next.arcing2 = true;
                next.message = Message::Sound2Continues;
            }
            _ => {
                next.arcing2 = true;
                next.message = Message::Sound2Ends;
            }
        }
        if filled > 0 {
            next.pending_arc_end = self.state.pending_arc_end;
        }
        self.state = next;
        self.notice = None;
    }

    /// Ordering violation: discard the offending point and re-enter the
    /// phase the click was made from, flagging the fixed notice.
    fn force_rollback(&mut self) {
        self.rollback_to(self.seq.phase().filled());
        self.notice = Some(ORDERING_NOTICE);
    }

    pub fn on_click(&mut self, pos: Pos2) {
        // The alternate-interpretation offer captures the next click no
        // matter where it lands.
        if self.state.click_to_alternate {
            self.state.click_to_alternate = false;
            self.state.alternate_view = true;
            self.state.finished = true;
            self.set_message(Message::Sound3AltInterpretation);
            return;
        }
        if self.state.finished {
            return;
        }
        if self.seq.phase() >= Phase::Sound3Started {
            self.state.finished = true;
            return;
        }
        let appended = match self.seq.try_append(pos.x, pos.y) {
            Ok(phase) => phase,
            Err(_) => {
                self.force_rollback();
                return;
            }
        };
        match appended {
            Phase::Sound1Started => self.click_starts_sound1(),
            Phase::Sound1Ended => self.click_ends_sound1(pos.x),
            Phase::Sound2Started => self.click_starts_sound2(pos.x),
            Phase::Sound2Ended => self.click_ends_sound2(pos.x),
            Phase::Sound3Started => self.click_performs_sound3(pos),
            Phase::Empty | Phase::Sound3Ended => {}
        }
    }

    fn click_starts_sound1(&mut self) {
        // The stored onset was clamped to x = 0 by the sequence.
        self.state.arcing1 = true;
        self.state.in_event1 = true;
        self.set_message(Message::Sound1Starts);
    }

    fn click_ends_sound1(&mut self, x: f32) {
        self.state.in_event1 = false;
        self.state.provisional = None;
        if self.seq.is_determinate(0.0, x) {
            self.set_message(Message::Sound1Ends);
        } else {
            self.set_message(Message::Sound1EndsTooLong);
            self.state.finished = true;
        }
    }

    fn click_starts_sound2(&mut self, x: f32) {
        self.state.arcing1 = false;
        self.state.arcing2 = true;
        self.state.in_event2 = true;
        self.state.provisional = None;
        let Some(a) = self.seq.point_at(1).map(|p| p.x) else {
            return;
        };
        if x >= a && x < a + self.unit() {
            self.set_message(Message::Sound2Starts);
        } else if x >= a + self.unit() {
            self.set_message(Message::Sound2StartsTooLong);
            self.state.finished = true;
        }
    }

    fn click_ends_sound2(&mut self, x: f32) {
        self.state.in_event2 = false;
        self.state.provisional = None;
        let Some(b) = self.seq.point_at(2).map(|p| p.x) else {
            return;
        };
        if x < 2.0 * b {
            self.set_message(Message::Sound2Ends);
        } else if self.seq.is_weak_determinate(b, x) {
            self.set_message(Message::Sound2EndsWithoutProjection);
            self.state.finished = true;
        } else if x > b + self.unit() {
            self.set_message(Message::Sound2EndsTooLong);
            self.state.finished = true;
        } else if x == 2.0 * b {
            self.set_message(Message::Sound3StartsExactly);
        }
    }

    /// One click performs the whole third sound: it places the onset and
    /// derives the offset, then classifies the new interonset duration
    /// against the projection begun at the second sound's onset. The bands
    /// are evaluated first-match-wins.
    fn click_performs_sound3(&mut self, pos: Pos2) {
        self.state.arcing2 = false;
        let x = pos.x;
        let (Some(w), Some(prior_end)) = (
            self.seq.point_at(2).map(|p| p.x),
            self.seq.point_at(3).map(|p| p.x),
        ) else {
            return;
        };
        let anticipated = 2.0f32.mul_add(w, -ANTICIPATION_INSET);
        let mut offset_x = None;
        if x < 2.0 * w && x >= 1.75 * w {
            self.set_message(Message::Sound3StartsAccel);
            self.state.dashed_arc_redraw = true;
            offset_x = Some(anticipated);
        } else if x < 1.75 * w && x >= prior_end {
            self.set_message(Message::Sound3StartsRealized);
            self.state.click_to_alternate = true;
            self.state.short_parenthesis = true;
            offset_x = Some(anticipated);
        } else if x == 2.0 * w {
            self.set_message(Message::Sound3StartsExactly);
            offset_x = Some(x + THIRD_SOUND_TAIL);
        } else if x >= w + self.unit() {
            self.set_message(Message::Sound3StartsTooLate);
            self.state.rail_tracks = true;
            offset_x = Some(x + THIRD_SOUND_TAIL);
        } else if x < 2.5 * w && x > 2.0 * w {
            self.set_message(Message::Sound3SlightlyLate);
            self.state.dashed_arc_redraw = true;
            offset_x = Some(x + THIRD_SOUND_TAIL);
        } else if x >= 2.5 * w && x < w + self.unit() {
            self.set_message(Message::Sound3NewProjection);
            offset_x = Some(x + THIRD_SOUND_TAIL);
        }
        if let Some(offset_x) = offset_x
            && self.seq.try_append(offset_x, pos.y).is_err()
        {
            // The pinned anticipation offset can land left of the onset the
            // click just placed; drop the half-built third sound entirely.
            self.seq.remove_last();
            self.force_rollback();
            return;
        }
        self.state.finished = true;
    }

    pub fn on_move(&mut self, pos: Pos2) {
        if self.state.finished {
            return;
        }
        let x = pos.x;
        if self.state.in_event1 {
            self.state.provisional = Some(pos);
            if x == 0.0 {
                self.set_message(Message::Sound1Starts);
            } else if x <= self.unit() {
                self.set_message(Message::Sound1Continues);
                self.state.arcing1 = true;
            } else {
                self.set_message(Message::Sound1ContinuesTooLong);
                self.state.arcing1 = false;
            }
        }
        if self.state.in_event2
            && let Some(b) = self.seq.point_at(2).map(|p| p.x)
        {
            self.state.provisional = (x >= b).then_some(pos);
            if x <= 2.0 * b {
                self.state.cross_mark = None;
            }
            if x < 2.0 * b {
                self.set_message(Message::Sound2Continues);
            } else if self.seq.is_weak_determinate(b, x) {
                self.set_message(Message::Sound2ContinuesWithoutProjection);
                self.state.cross_mark = Some(b);
                self.state.arcing2 = true;
            } else if x > b + self.unit() {
                self.set_message(Message::Sound2ContinuesTooLong);
                self.state.arcing2 = false;
            }
        }

        // Whichever onset most recently completed anchors the growing arc;
        // drifting past it by more than Lim exhausts the potential.
        if let Some(second_onset) = self.seq.point_at(2) {
            if x > second_onset.x + self.unit() {
                self.state.arcing2 = false;
            } else if !self.state.in_event1 && !self.state.in_event2 {
                self.state.arcing2 = true;
            }
        } else if let Some(first_onset) = self.seq.point_at(0) {
            if x > first_onset.x + self.unit() {
                self.state.arcing1 = false;
            } else if !self.state.in_event1 {
                self.state.arcing1 = true;
            }
        }

        // The second sound always takes visual priority over a lingering
        // first arc.
        if self.state.in_event2 || self.state.arcing2 {
            self.state.arcing1 = false;
        }

        if self.state.arcing1 || self.state.arcing2 {
            self.state.pending_arc_end = Some(pos);
            if self.state.arcing1
                && !self.state.in_event1
                && let Some(end1) = self.seq.point_at(1).map(|p| p.x)
            {
                if x < end1 {
                    self.set_message(Message::Pause1Negative);
                } else if x > end1 && x < end1 + self.unit() {
                    self.set_message(Message::Pause1);
                }
            }
            if self.state.arcing2
                && !self.state.in_event2
                && let Some(end2) = self.seq.point_at(3).map(|p| p.x)
            {
                if x < end2 {
                    self.set_message(Message::Pause2Negative);
                } else if x > end2 && x < end2 + self.unit() {
                    self.set_message(Message::Pause2);
                } else if x > end2 + self.unit() {
                    self.set_message(Message::Pause2TooLong);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
