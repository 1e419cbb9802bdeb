use std::time::{Duration, Instant};

use rand::Rng;

use crate::config::DisplayConfig;
use crate::palette::{self, CellColor};
use crate::pattern::LitPattern;
use crate::time::ClockDigits;

/// Cell of the hours-tens column that doubles as the PM marker in 12-hour mode.
pub const PM_INDICATOR_CELL: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitPosition {
    HoursTens,
    HoursOnes,
    MinutesTens,
    MinutesOnes,
}

impl DigitPosition {
    pub const ALL: [DigitPosition; 4] = [
        DigitPosition::HoursTens,
        DigitPosition::HoursOnes,
        DigitPosition::MinutesTens,
        DigitPosition::MinutesOnes,
    ];

    pub fn index(self) -> usize {
        match self {
            DigitPosition::HoursTens => 0,
            DigitPosition::HoursOnes => 1,
            DigitPosition::MinutesTens => 2,
            DigitPosition::MinutesOnes => 3,
        }
    }

    pub fn cell_count(self) -> usize {
        match self {
            DigitPosition::HoursTens => 3,
            _ => 9,
        }
    }

    pub fn value(self, digits: &ClockDigits) -> u8 {
        match self {
            DigitPosition::HoursTens => digits.hours_tens,
            DigitPosition::HoursOnes => digits.hours_ones,
            DigitPosition::MinutesTens => digits.minutes_tens,
            DigitPosition::MinutesOnes => digits.minutes_ones,
        }
    }
}

/// Lit cells and their colors for one matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixFrame {
    pub pattern: LitPattern,
    pub colors: Vec<CellColor>,
}

impl MatrixFrame {
    /// Color assigned to `index`, red when the assignment is short.
    pub fn color_at(&self, index: usize) -> CellColor {
        self.colors.get(index).copied().unwrap_or(CellColor::Red)
    }
}

/// Patterns and colors for all four digit positions, replaced as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyFrame {
    matrices: [MatrixFrame; 4],
}

impl TallyFrame {
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        digits: &ClockDigits,
        config: &DisplayConfig,
    ) -> Self {
        let matrices = DigitPosition::ALL.map(|pos| {
            let value = usize::from(pos.value(digits));
            MatrixFrame {
                // In 12-hour mode the hours-tens draw still spans all three
                // cells; the PM marker masks cell 2 at render time.
                pattern: LitPattern::generate(rng, value, pos.cell_count()),
                colors: palette::generate_colors(rng, config.color_scheme, pos.cell_count()),
            }
        });
        Self { matrices }
    }

    pub fn matrix(&self, pos: DigitPosition) -> &MatrixFrame {
        &self.matrices[pos.index()]
    }
}

/// Baseline for interval-driven refreshes. Resets to the refresh instant,
/// so refreshes follow the last one rather than a fixed phase.
#[derive(Debug, Clone, Copy)]
pub struct RefreshTimer {
    last_refresh: Instant,
}

impl RefreshTimer {
    pub fn new(now: Instant) -> Self {
        Self { last_refresh: now }
    }

    pub fn is_due(&self, now: Instant, interval: Duration) -> bool {
        now.saturating_duration_since(self.last_refresh) >= interval
    }

    pub fn reset(&mut self, now: Instant) {
        self.last_refresh = now;
    }

    #[cfg(test)]
    pub fn last_refresh(&self) -> Instant {
        self.last_refresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorScheme;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(use_24: bool) -> DisplayConfig {
        DisplayConfig {
            use_24_hour_clock: use_24,
            ..DisplayConfig::default()
        }
    }

    // -----------------------------------------------------------------------
    // TallyFrame
    // -----------------------------------------------------------------------

    #[test]
    fn frame_lights_one_cell_per_unit() {
        let mut rng = StdRng::seed_from_u64(1);
        let digits = ClockDigits::from_hour_minute(23, 59, true);
        let frame = TallyFrame::generate(&mut rng, &digits, &config(true));
        for pos in DigitPosition::ALL {
            let m = frame.matrix(pos);
            assert_eq!(m.pattern.len(), usize::from(pos.value(&digits)));
            assert_eq!(m.colors.len(), pos.cell_count());
            assert!(m.pattern.iter().all(|i| i < pos.cell_count()));
        }
    }

    #[test]
    fn midnight_24_hour_is_all_dark() {
        let mut rng = StdRng::seed_from_u64(2);
        let digits = ClockDigits::from_hour_minute(0, 0, true);
        let frame = TallyFrame::generate(&mut rng, &digits, &config(true));
        assert!(DigitPosition::ALL
            .iter()
            .all(|&pos| frame.matrix(pos).pattern.is_empty()));
    }

    #[test]
    fn twelve_hour_tens_draws_from_all_three_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        let digits = ClockDigits::from_hour_minute(10, 0, false);
        assert_eq!(digits.hours_tens, 1);
        let mut hits = [0usize; 3];
        for _ in 0..3000 {
            let frame = TallyFrame::generate(&mut rng, &digits, &config(false));
            let tens = &frame.matrix(DigitPosition::HoursTens).pattern;
            assert_eq!(tens.len(), 1);
            for i in tens.iter() {
                hits[i] += 1;
            }
        }
        // Roughly 1000 each; every cell, the PM cell included, gets drawn.
        assert!(hits.iter().all(|&h| h > 800), "{hits:?}");
    }

    #[test]
    fn twenty_four_hour_tens_may_use_all_three_cells() {
        let mut rng = StdRng::seed_from_u64(4);
        let digits = ClockDigits::from_hour_minute(20, 0, true);
        let used_third = (0..100).any(|_| {
            TallyFrame::generate(&mut rng, &digits, &config(true))
                .matrix(DigitPosition::HoursTens)
                .pattern
                .contains(PM_INDICATOR_CELL)
        });
        assert!(used_third);
    }

    #[test]
    fn colors_follow_scheme() {
        let mut rng = StdRng::seed_from_u64(5);
        let digits = ClockDigits::from_hour_minute(12, 34, true);
        let cfg = DisplayConfig {
            color_scheme: ColorScheme::RandomPerMatrix,
            ..DisplayConfig::default()
        };
        let frame = TallyFrame::generate(&mut rng, &digits, &cfg);
        for pos in DigitPosition::ALL {
            let colors = &frame.matrix(pos).colors;
            assert!(colors.iter().all(|&c| c == colors[0]));
        }
    }

    #[test]
    fn color_at_falls_back_to_red() {
        let m = MatrixFrame {
            pattern: LitPattern::EMPTY,
            colors: vec![CellColor::Blue],
        };
        assert_eq!(m.color_at(0), CellColor::Blue);
        assert_eq!(m.color_at(5), CellColor::Red);
    }

    // -----------------------------------------------------------------------
    // RefreshTimer
    // -----------------------------------------------------------------------

    #[test]
    fn refresh_due_only_at_interval() {
        let t0 = Instant::now();
        let timer = RefreshTimer::new(t0);
        let interval = Duration::from_secs(5);
        assert!(!timer.is_due(t0, interval));
        assert!(!timer.is_due(t0 + Duration::from_millis(4900), interval));
        assert!(timer.is_due(t0 + Duration::from_secs(5), interval));
        assert!(timer.is_due(t0 + Duration::from_secs(7), interval));
    }

    #[test]
    fn reset_moves_baseline() {
        let t0 = Instant::now();
        let mut timer = RefreshTimer::new(t0);
        let interval = Duration::from_secs(5);
        let late = t0 + Duration::from_millis(5300);
        timer.reset(late);
        assert_eq!(timer.last_refresh(), late);
        assert!(!timer.is_due(t0 + Duration::from_secs(10), interval));
        assert!(timer.is_due(late + interval, interval));
    }

    #[test]
    fn earlier_instant_is_not_due() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let timer = RefreshTimer::new(t0);
        assert!(!timer.is_due(t0 - Duration::from_millis(500), Duration::from_secs(5)));
    }
}
