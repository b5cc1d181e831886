//! LED line driver.
//!
//! Owns the seven flashlight output pins and applies power-level patterns
//! to them. Every write goes straight to the pin; the driver keeps no
//! shadow copy of what is asserted.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, StatefulOutputPin};

use super::pattern::{lines_for_level, Line, LineSet, LINE_COUNT};

/// An output line that can be (re)configured as a push-pull output.
///
/// The error type is pinned to `Infallible`: the lines are memory-mapped
/// GPIO and a failed write is not something the applet can recover from.
pub trait LedLine: StatefulOutputPin<Error = Infallible> {
    /// Drive the line low and switch it to push-pull output mode.
    fn configure_push_pull(&mut self);

    /// Read the level on the pad itself, not the output latch.
    fn sense_high(&mut self) -> bool;
}

fn infallible<T>(r: Result<T, Infallible>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => match e {},
    }
}

/// Drives the flashlight LED lines.
pub struct PinDriver<P> {
    lines: [P; LINE_COUNT],
}

impl<P: LedLine> PinDriver<P> {
    /// Take ownership of the lines, ordered A through G.
    pub fn new(lines: [P; LINE_COUNT]) -> Self {
        Self { lines }
    }

    /// Configure every line as a push-pull output, driven low.
    pub fn initialize_pins(&mut self) {
        for line in self.lines.iter_mut() {
            line.configure_push_pull();
        }
    }

    /// Deassert every line.
    pub fn reset_all(&mut self) {
        for line in self.lines.iter_mut() {
            infallible(line.set_low());
        }
    }

    /// Reset, then assert exactly the lines of `level`'s pattern.
    pub fn apply_level(&mut self, level: u8) {
        self.reset_all();
        for line in lines_for_level(level).iter() {
            infallible(self.lines[line.index()].set_high());
        }
    }

    /// Best-effort read of line A's pad level.
    ///
    /// Used at startup to guess whether the light is already on. The output
    /// latch is no help here since it comes up low after every reset.
    pub fn probe(&mut self) -> bool {
        self.lines[Line::A.index()].sense_high()
    }

    /// Lines currently driven high, read back from the pins.
    pub fn asserted(&mut self) -> LineSet {
        let mut set = LineSet::EMPTY;
        for line in Line::ALL {
            if infallible(self.lines[line.index()].is_set_high()) {
                set.insert(line);
            }
        }
        set
    }

    /// Give the lines back.
    pub fn release(self) -> [P; LINE_COUNT] {
        self.lines
    }

    /// Give up the lines without dropping them.
    ///
    /// Pin handles may reset their pin when dropped. Detached lines keep
    /// their mode and level for good, so a lit flashlight stays lit.
    pub fn detach(self) {
        core::mem::forget(self.lines);
    }
}


#[cfg(test)]
mod tests {
    use super::fake::{driver, FakeLine};
    use super::*;

    #[test]
    fn apply_level_asserts_exact_pattern() {
        let mut drv = driver();
        for level in 1..=6 {
            drv.apply_level(level);
            assert_eq!(drv.asserted(), lines_for_level(level), "level {}", level);
        }
    }

    #[test]
    fn apply_level_clears_stale_lines() {
        let mut drv = driver();
        drv.apply_level(6);
        drv.apply_level(1);
        assert_eq!(drv.asserted(), LineSet::of(&[Line::A]));
    }

    #[test]
    fn reset_all_includes_unused_line() {
        let mut drv = PinDriver::new([FakeLine::high(); LINE_COUNT]);
        drv.reset_all();
        assert!(drv.asserted().is_empty());
    }

    #[test]
    fn initialize_configures_every_line_low() {
        let mut drv = PinDriver::new([FakeLine::high(); LINE_COUNT]);
        drv.initialize_pins();
        drv.initialize_pins();
        for line in drv.release() {
            assert!(line.push_pull);
            assert!(!line.high);
            assert_eq!(line.inits, 2);
        }
    }

    #[test]
    fn probe_reads_line_a_only() {
        let mut lines = [FakeLine::default(); LINE_COUNT];
        lines[Line::G.index()].high = true;
        assert!(!PinDriver::new(lines).probe());

        lines[Line::A.index()].high = true;
        assert!(PinDriver::new(lines).probe());
    }

    #[test]
    fn probe_reads_pad_not_latch() {
        let mut lines = [FakeLine::default(); LINE_COUNT];
        lines[Line::A.index()].pad = Some(true);
        let mut drv = PinDriver::new(lines);
        assert!(drv.probe());
        assert!(drv.asserted().is_empty());

        let mut lines = [FakeLine::high(); LINE_COUNT];
        lines[Line::A.index()].pad = Some(false);
        assert!(!PinDriver::new(lines).probe());
    }

    /// Counts how many of its kind have been dropped.
    struct DropLine<'a> {
        high: bool,
        drops: &'a core::cell::Cell<u32>,
    }

    impl Drop for DropLine<'_> {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    impl embedded_hal::digital::ErrorType for DropLine<'_> {
        type Error = Infallible;
    }

    impl OutputPin for DropLine<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    impl StatefulOutputPin for DropLine<'_> {
        fn is_set_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.high)
        }
    }

    impl LedLine for DropLine<'_> {
        fn configure_push_pull(&mut self) {
            self.high = false;
        }

        fn sense_high(&mut self) -> bool {
            self.high
        }
    }

    #[test]
    fn detach_never_drops_lines() {
        let drops = core::cell::Cell::new(0);
        let mut drv = PinDriver::new(core::array::from_fn(|_| DropLine {
            high: false,
            drops: &drops,
        }));
        drv.apply_level(6);
        drv.detach();
        assert_eq!(drops.get(), 0);

        drop(PinDriver::new(core::array::from_fn(|_| DropLine {
            high: false,
            drops: &drops,
        })));
        assert_eq!(drops.get(), LINE_COUNT as u32);
    }
}
