use std::time::Instant;

use iced::{Color, Element, Subscription, Task};
use iced_layershell::build_pattern::daemon;
use iced_layershell::settings::{LayerShellSettings, StartMode};
use iced_layershell::to_layer_message;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::{ClockState, Screen};
use crate::config::{self, DisplayConfig};
use crate::ipc;
use crate::settings::SettingChange;
use crate::surface::*;
use crate::theme::ThemeColors;
use crate::time::{SystemClock, TimeSource};

pub(crate) type IcedId = iced_layershell::reexport::IcedId;

/// Animation frame period while crossfades run (~30 fps).
const FRAME_MS: u64 = 33;

pub(crate) struct TallyClock {
    pub(crate) state: ClockState,
    pub(crate) surface_id: Option<IcedId>,
    pub(crate) settings_surface: Option<IcedId>,
    pub(crate) colors: ThemeColors,
    pub(crate) target_output: Option<String>,
    time_source: SystemClock,
}

#[to_layer_message(multi)]
#[derive(Debug, Clone)]
pub(crate) enum Message {
    OpenSettings,
    DismissSettings,
    Setting(SettingChange),
    ScreenSet(String),
    Tick,
    Frame,
}

pub(crate) fn run() -> Result<(), iced_layershell::Error> {
    eprintln!(
        "[tally-clock] v{} ({}) starting",
        env!("TALLY_CLOCK_VERSION"),
        env!("TALLY_CLOCK_COMMIT")
    );

    let settings = LayerShellSettings {
        start_mode: StartMode::Background,
        ..Default::default()
    };

    daemon(
        TallyClock::new,
        TallyClock::namespace,
        TallyClock::update,
        TallyClock::view,
    )
    .style(TallyClock::style)
    .subscription(TallyClock::subscription)
    .layer_settings(settings)
    .run()
}

impl TallyClock {
    fn new() -> (Self, Task<Message>) {
        let target_output = config::target_output_from_env();
        if let Some(ref name) = target_output {
            eprintln!("[tally-clock] target screen: {name} (from TALLY_CLOCK_SCREEN)");
        }

        let time_source = SystemClock;
        let state = ClockState::new(
            DisplayConfig::default(),
            time_source.now(),
            Instant::now(),
            StdRng::from_entropy(),
        );

        let (id, task) = Message::layershell_open(clock_settings(target_output.as_deref()));
        eprintln!("[tally-clock] booting -> Clock (surface {id})");
        (
            Self {
                state,
                surface_id: Some(id),
                settings_surface: None,
                colors: ThemeColors::dark(),
                target_output,
                time_source,
            },
            task,
        )
    }

    fn namespace() -> String {
        String::from("tally-clock")
    }

    fn close_settings_task(&mut self) -> Task<Message> {
        if let Some(id) = self.settings_surface.take() {
            Task::done(Message::RemoveWindow(id))
        } else {
            Task::none()
        }
    }

    fn open_settings_task(&mut self) -> Task<Message> {
        let (id, task) = Message::layershell_open(settings_modal_settings(
            self.target_output.as_deref(),
        ));
        self.settings_surface = Some(id);
        task
    }

    /// Reopen the clock (and settings, if showing) on the current target output.
    fn recreate_surfaces(&mut self) -> Task<Message> {
        let settings_task = self.close_settings_task();
        let remove_task = if let Some(id) = self.surface_id.take() {
            Task::done(Message::RemoveWindow(id))
        } else {
            Task::none()
        };
        let (id, open_task) = Message::layershell_open(clock_settings(self.target_output.as_deref()));
        self.surface_id = Some(id);
        let reopen_task = if self.state.screen() == Screen::SettingsOpen {
            self.open_settings_task()
        } else {
            Task::none()
        };
        Task::batch([settings_task, remove_task, open_task, reopen_task])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenSettings => {
                if !self.state.open_settings() {
                    return Task::none();
                }
                eprintln!("[tally-clock] Clock -> SettingsOpen");
                self.open_settings_task()
            }
            Message::DismissSettings => {
                if !self
                    .state
                    .dismiss_settings(self.time_source.now(), Instant::now())
                {
                    return Task::none();
                }
                eprintln!(
                    "[tally-clock] SettingsOpen -> Clock (pattern refresh #{})",
                    self.state.generation()
                );
                self.close_settings_task()
            }
            Message::Setting(change) => {
                if self.state.apply_setting(change) {
                    eprintln!("[tally-clock] setting {change:?} -> {:?}", self.state.config());
                } else {
                    eprintln!("[tally-clock] settings closed, ignoring {change:?}");
                }
                Task::none()
            }
            Message::ScreenSet(ref name) => {
                self.target_output = Some(name.clone());
                eprintln!("[tally-clock] screen -> {name}");
                self.recreate_surfaces()
            }
            Message::Tick => {
                self.state.tick(self.time_source.now(), Instant::now());
                Task::none()
            }
            Message::Frame => {
                self.state.prune_fades(Instant::now());
                Task::none()
            }
            _ => Task::none(),
        }
    }

    fn view(&self, window_id: IcedId) -> Element<'_, Message> {
        if self.settings_surface == Some(window_id) {
            return self.view_settings();
        }
        self.view_clock()
    }

    fn subscription(state: &Self) -> Subscription<Message> {
        let mut subs = vec![Subscription::run(ipc::socket_listener)];

        if state.state.screen() == Screen::Clock {
            subs.push(Subscription::run(ipc::clock_tick_stream));
        }

        if state.state.is_animating(Instant::now()) {
            subs.push(Subscription::run_with(FRAME_MS, ipc::frame_stream));
        }

        Subscription::batch(subs)
    }

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: Color::TRANSPARENT,
            text_color: self.colors.text,
        }
    }
}
