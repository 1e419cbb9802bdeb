use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Source of wall-clock time for the clock screen.
pub trait TimeSource {
    fn now(&self) -> NaiveDateTime;
}

/// Local system time.
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// The four displayed digits plus the afternoon flag for the PM marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockDigits {
    pub hours_tens: u8,
    pub hours_ones: u8,
    pub minutes_tens: u8,
    pub minutes_ones: u8,
    pub is_pm: bool,
}

impl ClockDigits {
    /// `hour` is 0-23 and `minute` 0-59, as produced by `chrono`.
    pub fn from_hour_minute(hour: u32, minute: u32, use_24_hour: bool) -> Self {
        let display_hour = if use_24_hour {
            hour
        } else {
            match hour % 12 {
                0 => 12,
                h => h,
            }
        };
        Self {
            hours_tens: (display_hour / 10) as u8,
            hours_ones: (display_hour % 10) as u8,
            minutes_tens: (minute / 10) as u8,
            minutes_ones: (minute % 10) as u8,
            is_pm: hour >= 12,
        }
    }

    pub fn from_time(time: NaiveTime, use_24_hour: bool) -> Self {
        Self::from_hour_minute(time.hour(), time.minute(), use_24_hour)
    }
}

/// Plain-text clock shown under the matrices: `14:05` or `2:05 PM`.
pub fn digital_label(time: NaiveTime, use_24_hour: bool) -> String {
    if use_24_hour {
        time.format("%H:%M").to_string()
    } else {
        time.format("%-I:%M %p").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    // -----------------------------------------------------------------------
    // ClockDigits
    // -----------------------------------------------------------------------

    #[test]
    fn midnight_is_twelve_am() {
        let d = ClockDigits::from_hour_minute(0, 0, false);
        assert_eq!((d.hours_tens, d.hours_ones), (1, 2));
        assert!(!d.is_pm);
    }

    #[test]
    fn noon_is_twelve_pm() {
        let d = ClockDigits::from_hour_minute(12, 0, false);
        assert_eq!((d.hours_tens, d.hours_ones), (1, 2));
        assert!(d.is_pm);
    }

    #[test]
    fn one_pm_is_one() {
        let d = ClockDigits::from_hour_minute(13, 0, false);
        assert_eq!((d.hours_tens, d.hours_ones), (0, 1));
        assert!(d.is_pm);
    }

    #[test]
    fn eleven_pm_is_eleven() {
        let d = ClockDigits::from_hour_minute(23, 0, false);
        assert_eq!((d.hours_tens, d.hours_ones), (1, 1));
        assert!(d.is_pm);
    }

    #[test]
    fn morning_hours_pass_through_in_12_hour_mode() {
        for hour in 1..12 {
            let d = ClockDigits::from_hour_minute(hour, 0, false);
            assert_eq!(u32::from(d.hours_tens * 10 + d.hours_ones), hour);
            assert!(!d.is_pm);
        }
    }

    #[test]
    fn twenty_four_hour_digits() {
        let d = ClockDigits::from_hour_minute(23, 59, true);
        assert_eq!(
            d,
            ClockDigits {
                hours_tens: 2,
                hours_ones: 3,
                minutes_tens: 5,
                minutes_ones: 9,
                is_pm: true,
            }
        );
        let d = ClockDigits::from_hour_minute(0, 7, true);
        assert_eq!((d.hours_tens, d.hours_ones), (0, 0));
        assert_eq!((d.minutes_tens, d.minutes_ones), (0, 7));
    }

    #[test]
    fn hours_tens_stays_in_range() {
        for hour in 0..24 {
            assert!(ClockDigits::from_hour_minute(hour, 0, true).hours_tens <= 2);
            assert!(ClockDigits::from_hour_minute(hour, 0, false).hours_tens <= 1);
        }
    }

    // -----------------------------------------------------------------------
    // digital_label
    // -----------------------------------------------------------------------

    #[test]
    fn label_24_hour() {
        assert_eq!(digital_label(at(9, 5), true), "09:05");
        assert_eq!(digital_label(at(21, 30), true), "21:30");
    }

    #[test]
    fn label_12_hour() {
        assert_eq!(digital_label(at(21, 5), false), "9:05 PM");
        assert_eq!(digital_label(at(0, 0), false), "12:00 AM");
        assert_eq!(digital_label(at(12, 15), false), "12:15 PM");
    }
}
