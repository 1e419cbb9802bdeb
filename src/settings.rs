use crate::config::{ColorScheme, DisplayConfig, PatternInterval};

/// A single edit made from the settings panel or its remote equivalents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingChange {
    ShowDecimalTime(bool),
    ToggleDecimalTime,
    Use24HourClock(bool),
    Toggle24HourClock,
    ColorScheme(ColorScheme),
    PatternInterval(PatternInterval),
}

/// Apply `change` to `config`. Every control is a closed choice, so this
/// cannot fail.
pub fn apply(config: &mut DisplayConfig, change: SettingChange) {
    match change {
        SettingChange::ShowDecimalTime(on) => config.show_decimal_time = on,
        SettingChange::ToggleDecimalTime => config.show_decimal_time = !config.show_decimal_time,
        SettingChange::Use24HourClock(on) => config.use_24_hour_clock = on,
        SettingChange::Toggle24HourClock => config.use_24_hour_clock = !config.use_24_hour_clock,
        SettingChange::ColorScheme(scheme) => config.color_scheme = scheme,
        SettingChange::PatternInterval(interval) => config.pattern_interval = interval,
    }
}
