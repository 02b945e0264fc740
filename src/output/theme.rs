//! Colors shared by the pretty printer and the TUI.

use crate::workout::Exercise;

/// Section accent colors, cycled by section index.
const SECTION_PALETTE: [(u8, u8, u8); 5] = [
    (250, 179, 135), // peach
    (137, 180, 250), // blue
    (166, 227, 161), // green
    (203, 166, 247), // mauve
    (249, 226, 175), // yellow
];

const TIMER_ACCENT: (u8, u8, u8) = (148, 226, 213);
const REPS_ACCENT: (u8, u8, u8) = (245, 194, 231);
const REST_ACCENT: (u8, u8, u8) = (116, 199, 236);

/// Accent color for a section.
#[must_use]
pub const fn section_rgb(index: usize) -> (u8, u8, u8) {
    SECTION_PALETTE[index % SECTION_PALETTE.len()]
}

/// Accent color for an exercise kind.
#[must_use]
pub const fn exercise_rgb(exercise: &Exercise) -> (u8, u8, u8) {
    match exercise {
        Exercise::Timer(_) => TIMER_ACCENT,
        Exercise::Reps(_) => REPS_ACCENT,
    }
}

/// Accent color for rest intervals.
#[must_use]
pub const fn rest_rgb() -> (u8, u8, u8) {
    REST_ACCENT
}

/// Short badge for an exercise kind.
#[must_use]
pub const fn exercise_badge(exercise: &Exercise) -> &'static str {
    match exercise {
        Exercise::Timer(_) => "TIMED",
        Exercise::Reps(_) => "REPS",
    }
}
