mod app;
mod clock;
mod config;
mod fade;
mod frame;
mod ipc;
mod palette;
mod pattern;
mod settings;
mod surface;
mod theme;
mod time;

mod views {
    pub(crate) mod clock;
    pub(crate) mod settings;
}

fn main() -> Result<(), iced_layershell::Error> {
    app::run()
}
