//! The fixed table of (instruction, commentary) text pairs, one per
//! classification outcome. The strings are data; the enum gives each
//! outcome a stable index so the classifier can be checked for coverage.

/// One classification outcome of the projection model. Discriminants are
/// the historical message indices 0..=25.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Intro,
    Sound1Starts,
    Sound1Continues,
    Sound1ContinuesTooLong,
    Sound1Ends,
    Sound1EndsTooLong,
    Pause1Negative,
    Pause1,
    Sound2Starts,
    Sound2StartsTooLong,
    Sound2Continues,
    Sound2ContinuesWithoutProjection,
    Sound2ContinuesTooLong,
    Sound2Ends,
    Sound2EndsWithoutProjection,
    Sound2EndsTooLong,
    Pause2Negative,
    Pause2,
    Pause2TooLong,
    Sound3StartsAccel,
    Sound3StartsExactly,
    Sound3StartsTooLate,
    Sound3StartsRealized,
    Sound3AltInterpretation,
    Sound3SlightlyLate,
    Sound3NewProjection,
}

#[cfg(test)]
pub const MESSAGE_COUNT: usize = 26;

#[cfg(test)]
pub const ALL_MESSAGES: [Message; MESSAGE_COUNT] = [
    Message::Intro,
    Message::Sound1Starts,
    Message::Sound1Continues,
    Message::Sound1ContinuesTooLong,
    Message::Sound1Ends,
    Message::Sound1EndsTooLong,
    Message::Pause1Negative,
    Message::Pause1,
    Message::Sound2Starts,
    Message::Sound2StartsTooLong,
    Message::Sound2Continues,
    Message::Sound2ContinuesWithoutProjection,
    Message::Sound2ContinuesTooLong,
    Message::Sound2Ends,
    Message::Sound2EndsWithoutProjection,
    Message::Sound2EndsTooLong,
    Message::Pause2Negative,
    Message::Pause2,
    Message::Pause2TooLong,
    Message::Sound3StartsAccel,
    Message::Sound3StartsExactly,
    Message::Sound3StartsTooLate,
    Message::Sound3StartsRealized,
    Message::Sound3AltInterpretation,
    Message::Sound3SlightlyLate,
    Message::Sound3NewProjection,
];

impl Message {
    #[cfg(test)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// What the user should do next.
    pub const fn instruction(self) -> &'static str {
        match self {
            Self::Intro => {
                "You may perform graphically up to three successive sounds by \
                 clicking and moving the mouse. First, click the mouse at time 0, \
                 the leftmost point, but don't move it."
            }
            Self::Sound1Starts => "Perform the first sound by moving the mouse to the right.",
            Self::Sound1Continues => "End the first sound by clicking the mouse.",
            Self::Sound1ContinuesTooLong => {
                "To make the first sound's duration determinate, move the mouse \
                 back to the left. Or click to end the sound."
            }
            Self::Sound1Ends => "To begin the second sound, click the mouse.",
            Self::Sound1EndsTooLong => "Click on the Restart button to try again.",
            Self::Pause1Negative => "Click the mouse at the end of the first sound or later.",
            Self::Pause1 => "Click the mouse to begin the second sound.",
            Self::Sound2Starts => "Perform the second sound by moving the mouse to the right.",
            Self::Sound2StartsTooLong => {
                "Click on the \"Back one step\" button to select an earlier \
                 beginning for the second sound, or click \"Restart\"."
            }
            Self::Sound2Continues | Self::Sound2ContinuesWithoutProjection => {
                "Click the mouse to end the second sound."
            }
            Self::Sound2ContinuesTooLong => {
                "Move the mouse to the left to shorten the second sound, or \
                 click the mouse to end it."
            }
            Self::Sound2Ends => {
                "Click on the \"Back one step\" button to select an earlier \
                 beginning for the second sound, or click \"Restart\"."
            }
            Self::Sound2EndsWithoutProjection => "Click the mouse to begin the third sound.",
            Self::Sound2EndsTooLong => {
                "Click on the \"Back one step\" button to define a different \
                 second sound or \"Restart\" to start all over."
            }
            Self::Pause2Negative => "Click the mouse at the end of the second sound or later.",
            Self::Pause2 => "Click the mouse button to begin the third sound.",
            Self::Pause2TooLong => {
                "Click the mouse button to begin the third sound (earlier if you \
                 want a projection)."
            }
            Self::Sound3StartsRealized => "Click anywhere to see an alternate interpretation.",
            Self::Sound3StartsAccel
            | Self::Sound3StartsExactly
            | Self::Sound3StartsTooLate
            | Self::Sound3AltInterpretation
            | Self::Sound3SlightlyLate
            | Self::Sound3NewProjection => {
                "Click on \"Back one step\" to define a different third sound or \
                 \"Restart\" to begin again."
            }
        }
    }

    /// How the projection model interprets the current state.
    pub const fn commentary(self) -> &'static str {
        match self {
            Self::Intro => {
                "This simulator demonstrates the concepts in Chapter 7 of \
                 Christopher Hasty's \"Meter as Rhythm\". Imagine time 0 as an \
                 instant that is a potential beginning of a sound, yet prior to \
                 and independent of it."
            }
            Self::Sound1Starts => {
                "The first sound begins, but time 0 will not be a beginning \
                 until it is past."
            }
            Self::Sound1Continues => {
                "The first sound is becoming. Time 0 becomes its beginning. \
                 \"Projective potential\"--the potential of a duration to be \
                 reproduced by a successive duration--accumulates, as indicated \
                 by the solid arc."
            }
            Self::Sound1ContinuesTooLong => {
                "The first sound's duration is so long that it is \"mensurally \
                 indeterminate\"--it has lost its projective potential to be \
                 reproduced."
            }
            Self::Sound1Ends => {
                "The first sound ends. Its duration is \"mensurally determinate\" \
                 because it has the potential for being precisely reproduced."
            }
            Self::Sound1EndsTooLong => {
                "The first sound ends; it is too long to have projective \
                 potential."
            }
            // Intentionally blank: the negative-pause states carry only an
            // instruction.
            Self::Pause1Negative | Self::Pause2Negative => "",
            Self::Pause1 => {
                "There is a pause between the first two sounds. Its duration is \
                 relatively indeterminate, if our attention is focused on the \
                 beginning of sounds. The growing arc indicates that the \
                 duration of the first sound *plus* the following silence itself \
                 has the \"projective potential\" to be reproduced."
            }
            Self::Sound2Starts => {
                "This beginning of the second sound \"realizes\" the projective \
                 potential of the duration begun by the first event's attack. \
                 The solid arrow represents this projective potential. The event \
                 now beginning has the potential to reproduce this past \
                 duration. The dotted arc, extending for this duration into the \
                 future, symbolizes this \"projected potential\"."
            }
            Self::Sound2StartsTooLong => {
                "The second sound begins. It is so long since the beginning of \
                 the first event that the interonset duration is mensurally \
                 indeterminate--it has no potential to be reproduced--so there \
                 is no projection."
            }
            Self::Sound2Continues => {
                "The accumulating duration of the second sound is realizing the \
                 projected potential (symbolized by the dashed arc) of the first \
                 interonset duration. Simultaneously the present event \
                 accumulates its own projective potential (represented by the \
                 growing solid arc) to be reproduced by a successive, third \
                 event."
            }
            Self::Sound2ContinuesWithoutProjection => {
                "The second sound exceeds the duration projected at its onset; \
                 the projection is not clearly realized, as indicated by the X \
                 through the dashed arc."
            }
            Self::Sound2ContinuesTooLong => {
                "The second sound is so long that it is mensurally \
                 indeterminate. (The projection of the first interonset duration \
                 is not realized.)"
            }
            Self::Sound2Ends => {
                "The second sound ends. Its duration is \"mensurally \
                 determinate\" because it has the potential for being precisely \
                 reproduced. But it does not affect the projection of the first \
                 interonset duration, shown by the arrow and dashed arc"
            }
            Self::Sound2EndsWithoutProjection => {
                "The second sound exceeds the duration projected at its onset. \
                 The projection is not clearly realized, as indicated by the X \
                 through the dashed arc. The projective potential of the \
                 duration initiated by the second sound's beginning continues to \
                 accumulate."
            }
            Self::Sound2EndsTooLong => {
                "The second sound is so long that it is mensurally \
                 indeterminate. Since the projected potential of the first \
                 interonset duration is denied there is no projection at all."
            }
            Self::Pause2 => {
                "The silence between the second and third sounds is relatively \
                 indeterminate if our attention is focused on the sounds' \
                 beginnings. The growing arc indicates that the duration from \
                 the beginning of the second sound up to now, including the \
                 silence, has \"projective potential\" to be reproduced."
            }
            Self::Pause2TooLong => {
                "The time since the beginning of the second sound is mensurally \
                 indeterminate, having no projective potential to be reproduced."
            }
            Self::Sound3StartsAccel => {
                "The beginning of the third sound is earlier than projected. The \
                 second interonset duration is shorter than, but at least \
                 three-fourths of the first interonset duration. We feel an \
                 *acceleration* because we sense the realization of the first \
                 projected duration even as we also perceive the difference \
                 between the two durations."
            }
            Self::Sound3StartsExactly => {
                "Since the third sound begins exactly at the end of the \
                 projected duration (the upper dashed arc), the projected \
                 duration is \"realized\". A new projection is created, \
                 conditioned by the first, in which the second interonset \
                 duration has the projective potential (the lower arrow) to be \
                 reproduced."
            }
            Self::Sound3StartsTooLate => {
                "The projective potential of the first interonset duration (the \
                 dashed arc) is realized, but the projective potential of the \
                 second interonset duration is not, since it is mensurally \
                 indeterminate. Because the third sound begins much later than \
                 projected, we may come to feel \"hiatus\" (symbolized by the \
                 double bar)--a break between the realization of projected \
                 potential and a new beginning. A new and relatively \
                 unconditioned potential emerges from the beginning of the third \
                 sound."
            }
            Self::Sound3StartsRealized => {
                "The projection of the first interonset duration is realized. \
                 Another projection (the rightmost arrow and dashed arc) can be \
                 completed within the promised duration, so may enhance its \
                 mensural determinacy. The emergence of a new beginning, shown \
                 in parentheses, would clarify this."
            }
            Self::Sound3AltInterpretation => {
                "In this interpretation the accent symbolizes an unequivocal \
                 second beginning that denies the projection of the first \
                 interonset duration in order to realize a larger projective \
                 potential, symbolized by the large arrow."
            }
            Self::Sound3SlightlyLate => {
                "The beginning of the third sound is slightly later than \
                 projected. We hear a *deceleration* because we sense the \
                 realization of the first projected duration even as we also \
                 perceive the difference between the two durations."
            }
            Self::Sound3NewProjection => {
                "The third sound begins somewhat later than projected. A new \
                 projection, indicated by the lowest arrow and dashed arc, \
                 emerges, breaking off from the emerging first projection. We \
                 reject the relevance of the first projection to the mensural \
                 determinacy of the second interonset duration."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_stable_and_complete() {
        for (expected, msg) in ALL_MESSAGES.iter().enumerate() {
            assert_eq!(msg.index(), expected);
        }
        assert_eq!(ALL_MESSAGES.len(), MESSAGE_COUNT);
    }

    #[test]
    fn only_negative_pauses_have_blank_commentary() {
        for msg in ALL_MESSAGES {
            let blank = msg.commentary().is_empty();
            let negative = matches!(msg, Message::Pause1Negative | Message::Pause2Negative);
            assert_eq!(blank, negative, "{msg:?}");
        }
    }

    #[test]
    fn every_outcome_has_an_instruction() {
        for msg in ALL_MESSAGES {
            assert!(!msg.instruction().is_empty(), "{msg:?}");
        }
    }
}
