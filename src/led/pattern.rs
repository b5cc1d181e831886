//! Power level → LED line pattern table.
//!
//! Seven binary output lines feed the flashlight LEDs. Brightness is
//! emulated by asserting a larger or smaller subset of them:
//!
//! ```text
//! Level 1: A
//! Level 2: A G
//! Level 3: A C G
//! Level 4: A B C G
//! Level 5: A B C D G
//! Level 6: A B C D E G
//! Other:   A B C G      (same as level 4)
//! ```
//!
//! Line F is configured and reset with the others but no level drives it.

/// Number of LED lines managed by the driver.
pub const LINE_COUNT: usize = 7;

/// One of the fixed LED output lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
}

impl Line {
    /// All lines in driver slot order.
    pub const ALL: [Line; LINE_COUNT] = [
        Line::A,
        Line::B,
        Line::C,
        Line::D,
        Line::E,
        Line::F,
        Line::G,
    ];

    /// Driver slot index of this line.
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of asserted lines, one bit per line.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineSet(u8);

impl LineSet {
    /// No lines asserted.
    pub const EMPTY: LineSet = LineSet(0);

    /// Build a set from a list of lines.
    pub const fn of(lines: &[Line]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < lines.len() {
            bits |= lines[i].bit();
            i += 1;
        }
        LineSet(bits)
    }

    pub const fn contains(self, line: Line) -> bool {
        self.0 & line.bit() != 0
    }

    pub fn insert(&mut self, line: Line) {
        self.0 |= line.bit();
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of asserted lines.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate the member lines in slot order.
    pub fn iter(self) -> impl Iterator<Item = Line> {
        Line::ALL.into_iter().filter(move |l| self.contains(*l))
    }
}

impl core::fmt::Debug for LineSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Line> for LineSet {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        let mut set = LineSet::EMPTY;
        for line in iter {
            set.insert(line);
        }
        set
    }
}

const LEVEL_1: LineSet = LineSet::of(&[Line::A]);
const LEVEL_2: LineSet = LineSet::of(&[Line::A, Line::G]);
const LEVEL_3: LineSet = LineSet::of(&[Line::A, Line::C, Line::G]);
const LEVEL_4: LineSet = LineSet::of(&[Line::A, Line::B, Line::C, Line::G]);
const LEVEL_5: LineSet = LineSet::of(&[Line::A, Line::D, Line::B, Line::C, Line::G]);
const LEVEL_6: LineSet = LineSet::of(&[Line::A, Line::D, Line::B, Line::C, Line::E, Line::G]);
const LEVEL_DEFAULT: LineSet = LineSet::of(&[Line::A, Line::B, Line::C, Line::G]);

/// Lines to assert for a power level.
///
/// Levels outside 1..=6 fall back to the level-4 pattern.
pub const fn lines_for_level(level: u8) -> LineSet {
    match level {
        1 => LEVEL_1,
        2 => LEVEL_2,
        3 => LEVEL_3,
        4 => LEVEL_4,
        5 => LEVEL_5,
        6 => LEVEL_6,
        _ => LEVEL_DEFAULT,
    }
}
