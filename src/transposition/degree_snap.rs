//! Semitone transposition and scale-degree snapping
//!
//! Snapping moves a pitch to the nearest occurrence of a natural letter's
//! pitch class. When the letter is exactly a tritone away both ways, the
//! upward candidate wins.

use crate::models::{Letter, PitchNumber};

/// Semitone step for ArrowUp / ArrowDown
pub fn transpose_step(up: bool, octave: bool) -> PitchNumber {
    let step = if octave { 12 } else { 1 };
    if up {
        step
    } else {
        -step
    }
}

/// Candidate offsets `(below, above)` to the letter's pitch class,
/// with `above = below + 12`
///
/// The remainder keeps the sign of `number - reference`, so under the
/// letter's octave-0 reference `below` is positive and lands on the
/// reference itself instead of an octave under the table.
pub fn snap_candidates(number: PitchNumber, letter: Letter) -> (PitchNumber, PitchNumber) {
    let below = -((number - letter.reference_number()) % 12);
    (below, below + 12)
}

/// Nearest pitch number whose pitch class is `letter`; ties go up
pub fn snap_to_degree(number: PitchNumber, letter: Letter) -> PitchNumber {
    let (below, above) = snap_candidates(number, letter);
    if below.abs() < above.abs() {
        number + below
    } else {
        number + above
    }
}
