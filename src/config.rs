/// How lit cells pick their colors on each pattern refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    /// Every cell draws its own color.
    RandomPerCell,
    /// One color per matrix.
    RandomPerMatrix,
    /// Meant as one color for the whole screen. Each matrix still draws its
    /// own color, so in practice this behaves like `RandomPerMatrix`.
    SingleColorAll,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 3] = [
        ColorScheme::RandomPerCell,
        ColorScheme::RandomPerMatrix,
        ColorScheme::SingleColorAll,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorScheme::RandomPerCell => "Random RGB (Each Square)",
            ColorScheme::RandomPerMatrix => "Matrix Colors (Per Matrix)",
            ColorScheme::SingleColorAll => "Single Color (All Matrices)",
        }
    }

    /// Keyword used by the remote control socket.
    pub fn keyword(self) -> &'static str {
        match self {
            ColorScheme::RandomPerCell => "per-cell",
            ColorScheme::RandomPerMatrix => "per-matrix",
            ColorScheme::SingleColorAll => "single",
        }
    }

    pub fn from_keyword(s: &str) -> Option<ColorScheme> {
        ColorScheme::ALL.into_iter().find(|c| c.keyword() == s)
    }
}

/// Seconds between pattern refreshes. Closed set, matching the settings buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternInterval {
    Five,
    Fifteen,
    Thirty,
    Sixty,
}

impl PatternInterval {
    pub const ALL: [PatternInterval; 4] = [
        PatternInterval::Five,
        PatternInterval::Fifteen,
        PatternInterval::Thirty,
        PatternInterval::Sixty,
    ];

    pub fn secs(self) -> u64 {
        match self {
            PatternInterval::Five => 5,
            PatternInterval::Fifteen => 15,
            PatternInterval::Thirty => 30,
            PatternInterval::Sixty => 60,
        }
    }

    pub fn duration(self) -> std::time::Duration {
        std::time::Duration::from_secs(self.secs())
    }

    pub fn from_secs(secs: u64) -> Option<PatternInterval> {
        PatternInterval::ALL.into_iter().find(|i| i.secs() == secs)
    }

    pub fn label(self) -> String {
        format!("{}s", self.secs())
    }
}

/// Display options. Lives for the process lifetime only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub show_decimal_time: bool,
    pub use_24_hour_clock: bool,
    pub color_scheme: ColorScheme,
    pub pattern_interval: PatternInterval,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_decimal_time: true,
            use_24_hour_clock: true,
            color_scheme: ColorScheme::RandomPerCell,
            pattern_interval: PatternInterval::Sixty,
        }
    }
}

/// Output (monitor) to place the clock on, from `TALLY_CLOCK_SCREEN`.
pub fn target_output_from_env() -> Option<String> {
    std::env::var("TALLY_CLOCK_SCREEN")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
