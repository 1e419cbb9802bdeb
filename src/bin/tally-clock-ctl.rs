use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;
use std::process;

const SCHEMES: &[&str] = &["per-cell", "per-matrix", "single"];
const INTERVALS: &[&str] = &["5", "15", "30", "60"];

fn socket_path() -> PathBuf {
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(runtime_dir).join("tally-clock.sock")
}

fn is_known(cmd: &str) -> bool {
    match cmd {
        "menu" | "select" | "up" | "down" | "left" | "right" | "play-pause" | "done"
        | "toggle-decimal" | "toggle-24h" => true,
        _ => {
            if let Some(kw) = cmd.strip_prefix("scheme ") {
                SCHEMES.contains(&kw)
            } else if let Some(secs) = cmd.strip_prefix("interval ") {
                INTERVALS.contains(&secs.trim_end_matches('s'))
            } else if let Some(name) = cmd.strip_prefix("screen ") {
                !name.trim().is_empty()
            } else {
                false
            }
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        usage();
        process::exit(1);
    }

    let cmd = args.join(" ");
    if !is_known(&cmd) {
        eprintln!("unknown command: {cmd}");
        usage();
        process::exit(1);
    }

    let path = socket_path();
    let mut stream = match UnixStream::connect(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("tally-clock not running ({path:?}): {e}");
            process::exit(1);
        }
    };

    if let Err(e) = writeln!(stream, "{cmd}") {
        eprintln!("failed to send command: {e}");
        process::exit(1);
    }
}

fn usage() {
    eprintln!("usage: tally-clock-ctl <command>");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  menu | select             open the settings panel");
    eprintln!("  up | down | left | right | play-pause");
    eprintln!("                            also open the settings panel");
    eprintln!("  done                      close settings and redraw the patterns");
    eprintln!("  toggle-decimal            show/hide the digital time");
    eprintln!("  toggle-24h                switch between 12- and 24-hour time");
    eprintln!("  scheme <per-cell|per-matrix|single>");
    eprintln!("                            pick the color scheme");
    eprintln!("  interval <5|15|30|60>     seconds between pattern changes");
    eprintln!("  screen <output>           move the clock to another output");
}
