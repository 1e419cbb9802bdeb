use std::time::Instant;

use chrono::NaiveDateTime;
use iced::Color;
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::DisplayConfig;
use crate::fade::FadeBoard;
use crate::frame::{DigitPosition, RefreshTimer, TallyFrame, PM_INDICATOR_CELL};
use crate::settings::{self, SettingChange};
use crate::theme::UNLIT;
use crate::time::ClockDigits;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Clock,
    SettingsOpen,
}

/// Everything the clock screen shows, independent of the windowing layer.
pub struct ClockState<R = StdRng> {
    config: DisplayConfig,
    screen: Screen,
    time: NaiveDateTime,
    frame: TallyFrame,
    timer: RefreshTimer,
    fades: FadeBoard,
    generation: u64,
    rng: R,
}

impl<R: Rng> ClockState<R> {
    /// Build the first frame at `time`; the refresh baseline starts at `now`.
    pub fn new(config: DisplayConfig, time: NaiveDateTime, now: Instant, mut rng: R) -> Self {
        let digits = ClockDigits::from_time(time.time(), config.use_24_hour_clock);
        let frame = TallyFrame::generate(&mut rng, &digits, &config);
        Self {
            config,
            screen: Screen::Clock,
            time,
            frame,
            timer: RefreshTimer::new(now),
            fades: FadeBoard::default(),
            generation: 0,
            rng,
        }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    #[cfg(test)]
    pub fn frame(&self) -> &TallyFrame {
        &self.frame
    }

    /// Number of pattern refreshes since startup.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn digits(&self) -> ClockDigits {
        ClockDigits::from_time(self.time.time(), self.config.use_24_hour_clock)
    }

    /// One-second tick. Updates the time and refreshes the patterns when the
    /// interval has elapsed. Returns whether a refresh happened.
    pub fn tick(&mut self, time: NaiveDateTime, now: Instant) -> bool {
        if self.screen != Screen::Clock {
            return false;
        }
        self.time = time;
        if self.timer.is_due(now, self.config.pattern_interval.duration()) {
            self.refresh(now);
            true
        } else {
            false
        }
    }

    /// Remote "menu"/"select". Returns false when settings are already open.
    pub fn open_settings(&mut self) -> bool {
        if self.screen == Screen::SettingsOpen {
            return false;
        }
        self.screen = Screen::SettingsOpen;
        true
    }

    /// Settings edits only land while the panel is open.
    pub fn apply_setting(&mut self, change: SettingChange) -> bool {
        if self.screen != Screen::SettingsOpen {
            return false;
        }
        settings::apply(&mut self.config, change);
        true
    }

    /// Close settings, then refresh time and patterns right away and restart
    /// the interval from `now`.
    pub fn dismiss_settings(&mut self, time: NaiveDateTime, now: Instant) -> bool {
        if self.screen != Screen::SettingsOpen {
            return false;
        }
        self.screen = Screen::Clock;
        self.time = time;
        self.refresh(now);
        true
    }

    fn refresh(&mut self, now: Instant) {
        let mut before = [[UNLIT; crate::pattern::MAX_CELLS]; 4];
        for pos in DigitPosition::ALL {
            for (i, slot) in before[pos.index()].iter_mut().enumerate().take(pos.cell_count()) {
                *slot = self.cell_color(pos, i, now);
            }
        }

        let digits = self.digits();
        self.frame = TallyFrame::generate(&mut self.rng, &digits, &self.config);
        self.timer.reset(now);
        self.generation += 1;

        for pos in DigitPosition::ALL {
            for i in 0..pos.cell_count() {
                if self.is_pm_indicator(pos, i) {
                    self.fades.cancel(pos, i);
                } else {
                    let target = self.cell_target(pos, i);
                    self.fades.begin(pos, i, before[pos.index()][i], target, now);
                }
            }
        }
    }

    /// The hours-tens cell that shows PM in 12-hour mode.
    pub fn is_pm_indicator(&self, pos: DigitPosition, index: usize) -> bool {
        !self.config.use_24_hour_clock
            && pos == DigitPosition::HoursTens
            && index == PM_INDICATOR_CELL
    }

    pub fn is_lit(&self, pos: DigitPosition, index: usize) -> bool {
        if self.is_pm_indicator(pos, index) {
            self.digits().is_pm
        } else {
            self.frame.matrix(pos).pattern.contains(index)
        }
    }

    /// Resting color of a cell once any crossfade has finished.
    pub fn cell_target(&self, pos: DigitPosition, index: usize) -> Color {
        if self.is_lit(pos, index) {
            self.frame.matrix(pos).color_at(index).to_color()
        } else {
            UNLIT
        }
    }

    /// Color to draw right now, mid-fade if one is running.
    pub fn cell_color(&self, pos: DigitPosition, index: usize, now: Instant) -> Color {
        let target = self.cell_target(pos, index);
        if self.is_pm_indicator(pos, index) {
            target
        } else {
            self.fades.displayed(pos, index, target, now)
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.fades.is_animating(now)
    }

    pub fn prune_fades(&mut self, now: Instant) {
        self.fades.prune(now);
    }
}
