use std::io::BufRead;
use std::os::unix::net::UnixListener;
use std::path::PathBuf;
use std::time::Duration;

use futures::channel::mpsc;

use crate::app::Message;
use crate::config::{ColorScheme, PatternInterval};
use crate::settings::SettingChange;

const CLOCK_TICK: Duration = Duration::from_secs(1);

pub(crate) fn socket_path() -> PathBuf {
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(runtime_dir).join("tally-clock.sock")
}

/// Map one line from the control socket to a message.
pub(crate) fn parse_command(line: &str) -> Option<Message> {
    match line.trim() {
        "menu" | "select" | "up" | "down" | "left" | "right" | "play-pause" => {
            Some(Message::OpenSettings)
        }
        "done" => Some(Message::DismissSettings),
        "toggle-decimal" => Some(Message::Setting(SettingChange::ToggleDecimalTime)),
        "toggle-24h" => Some(Message::Setting(SettingChange::Toggle24HourClock)),
        cmd if cmd.starts_with("scheme ") => ColorScheme::from_keyword(cmd[7..].trim())
            .map(|scheme| Message::Setting(SettingChange::ColorScheme(scheme))),
        cmd if cmd.starts_with("interval ") => cmd[9..]
            .trim()
            .trim_end_matches('s')
            .parse::<u64>()
            .ok()
            .and_then(PatternInterval::from_secs)
            .map(|interval| Message::Setting(SettingChange::PatternInterval(interval))),
        cmd if cmd.starts_with("screen ") => {
            let name = cmd[7..].trim();
            (!name.is_empty()).then(|| Message::ScreenSet(name.to_string()))
        }
        _ => None,
    }
}

pub(crate) fn socket_listener() -> impl futures::Stream<Item = Message> {
    let (tx, rx) = mpsc::unbounded();
    std::thread::spawn(move || {
        let path = socket_path();
        let _ = std::fs::remove_file(&path);
        let listener = match UnixListener::bind(&path) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("[tally-clock] failed to bind socket {path:?}: {e}");
                return;
            }
        };
        eprintln!("[tally-clock] listening on {path:?}");
        for stream in listener.incoming().flatten() {
            let mut buf = String::new();
            if std::io::BufReader::new(stream).read_line(&mut buf).is_ok() {
                let Some(msg) = parse_command(&buf) else {
                    eprintln!("[tally-clock] unknown command: {:?}", buf.trim());
                    continue;
                };
                if tx.unbounded_send(msg).is_err() {
                    break;
                }
            }
        }
    });
    rx
}

/// One-second wall-clock tick.
pub(crate) fn clock_tick_stream() -> impl futures::Stream<Item = Message> {
    let (tx, rx) = mpsc::unbounded();
    std::thread::spawn(move || loop {
        std::thread::sleep(CLOCK_TICK);
        if tx.unbounded_send(Message::Tick).is_err() {
            break;
        }
    });
    rx
}

/// Animation frames while crossfades are running.
pub(crate) fn frame_stream(ms: &u64) -> mpsc::UnboundedReceiver<Message> {
    let ms = *ms;
    let (tx, rx) = mpsc::unbounded();
    std::thread::spawn(move || loop {
        std::thread::sleep(Duration::from_millis(ms));
        if tx.unbounded_send(Message::Frame).is_err() {
            break;
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setting(line: &str) -> Option<SettingChange> {
        match parse_command(line) {
            Some(Message::Setting(change)) => Some(change),
            _ => None,
        }
    }

    #[test]
    fn remote_keys_open_and_close_settings() {
        assert!(matches!(parse_command("menu"), Some(Message::OpenSettings)));
        assert!(matches!(parse_command("select\n"), Some(Message::OpenSettings)));
        assert!(matches!(parse_command("  done  "), Some(Message::DismissSettings)));
    }

    #[test]
    fn direction_and_play_pause_keys_open_settings() {
        for key in ["up", "down", "left", "right", "play-pause"] {
            assert!(matches!(parse_command(key), Some(Message::OpenSettings)), "{key}");
        }
        assert!(parse_command("play").is_none());
    }

    #[test]
    fn toggles() {
        assert_eq!(setting("toggle-decimal"), Some(SettingChange::ToggleDecimalTime));
        assert_eq!(setting("toggle-24h"), Some(SettingChange::Toggle24HourClock));
    }

    #[test]
    fn scheme_keywords() {
        assert_eq!(
            setting("scheme per-cell"),
            Some(SettingChange::ColorScheme(ColorScheme::RandomPerCell))
        );
        assert_eq!(
            setting("scheme per-matrix"),
            Some(SettingChange::ColorScheme(ColorScheme::RandomPerMatrix))
        );
        assert_eq!(
            setting("scheme single"),
            Some(SettingChange::ColorScheme(ColorScheme::SingleColorAll))
        );
        assert!(parse_command("scheme plaid").is_none());
    }

    #[test]
    fn intervals_accept_offered_values_only() {
        assert_eq!(
            setting("interval 5"),
            Some(SettingChange::PatternInterval(PatternInterval::Five))
        );
        assert_eq!(
            setting("interval 30s"),
            Some(SettingChange::PatternInterval(PatternInterval::Thirty))
        );
        assert!(parse_command("interval 10").is_none());
        assert!(parse_command("interval soon").is_none());
        assert!(parse_command("interval -5").is_none());
    }

    #[test]
    fn screen_needs_a_name() {
        match parse_command("screen HDMI-A-1") {
            Some(Message::ScreenSet(name)) => assert_eq!(name, "HDMI-A-1"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(parse_command("screen ").is_none());
    }

    #[test]
    fn unknown_commands_rejected() {
        assert!(parse_command("").is_none());
        assert!(parse_command("reboot").is_none());
        assert!(parse_command("MENU").is_none());
    }

    #[test]
    fn socket_lives_in_runtime_dir() {
        assert!(socket_path().ends_with("tally-clock.sock"));
    }
}
