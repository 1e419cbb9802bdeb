use std::process::Command;

fn main() {
    // Shown in the startup log and the settings footer. Packagers export
    // TALLY_CLOCK_VERSION; plain `cargo build` uses the crate version.
    let version = std::env::var("TALLY_CLOCK_VERSION")
        .unwrap_or_else(|_| std::env::var("CARGO_PKG_VERSION").unwrap_or_default());
    println!("cargo:rustc-env=TALLY_CLOCK_VERSION={version}");

    // Source tarballs have no .git, so packagers export TALLY_CLOCK_COMMIT.
    let commit = std::env::var("TALLY_CLOCK_COMMIT").unwrap_or_else(|_| {
        let output = Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .output();
        match output {
            Ok(o) if o.status.success() => {
                String::from_utf8_lossy(&o.stdout).trim().to_string()
            }
            _ => "unknown".to_string(),
        }
    });
    println!("cargo:rustc-env=TALLY_CLOCK_COMMIT={commit}");

    println!("cargo:rerun-if-env-changed=TALLY_CLOCK_VERSION");
    println!("cargo:rerun-if-env-changed=TALLY_CLOCK_COMMIT");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/heads/");
}
