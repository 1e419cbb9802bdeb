use iced::widget::{column, container, mouse_area, row, scrollable, space, text};
use iced::{mouse, Element, Length};

use crate::app::{Message, TallyClock};
use crate::config::{ColorScheme, PatternInterval};
use crate::settings::SettingChange;

impl TallyClock {
    pub(crate) fn view_settings(&self) -> Element<'_, Message> {
        let colors = &self.colors;
        let config = self.state.config();

        let title = text("Settings")
            .size(colors.modal_title)
            .color(colors.text)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..iced::Font::DEFAULT
            });

        let decimal_row = self.toggle_row(
            "Show Base-10 Time",
            config.show_decimal_time,
            SettingChange::ShowDecimalTime(!config.show_decimal_time),
        );
        let hour_row = self.toggle_row(
            "24-Hour Clock",
            config.use_24_hour_clock,
            SettingChange::Use24HourClock(!config.use_24_hour_clock),
        );

        // --- Color scheme: radio list ---
        let mut scheme_col = column![text("Color Scheme")
            .size(colors.modal_text)
            .color(colors.text)]
        .spacing(20);
        for scheme in ColorScheme::ALL {
            let selected = config.color_scheme == scheme;
            let mark = if selected { "\u{25c9}" } else { "\u{25cb}" };
            scheme_col = scheme_col.push(
                mouse_area(
                    row![
                        text(mark).size(colors.option_text).color(colors.text),
                        text(scheme.label()).size(colors.option_text).color(colors.text),
                    ]
                    .spacing(16)
                    .padding(iced::Padding::ZERO.top(8).bottom(8)),
                )
                .on_press(Message::Setting(SettingChange::ColorScheme(scheme)))
                .interaction(mouse::Interaction::Pointer),
            );
        }

        // --- Pattern interval: button row ---
        let mut interval_row = row![].spacing(20);
        for interval in PatternInterval::ALL {
            let selected = config.pattern_interval == interval;
            interval_row = interval_row.push(
                mouse_area(
                    container(text(interval.label()).size(colors.option_text))
                        .center_x(Length::Fill)
                        .padding(iced::Padding::ZERO.top(20).bottom(20))
                        .style(colors.option_style(selected)),
                )
                .on_press(Message::Setting(SettingChange::PatternInterval(interval)))
                .interaction(mouse::Interaction::Pointer),
            );
        }
        let interval_col = column![
            text("Pattern Change Interval")
                .size(colors.modal_text)
                .color(colors.text),
            interval_row,
        ]
        .spacing(20);

        let body = column![
            decimal_row,
            hour_row,
            self.divider(),
            scheme_col,
            self.divider(),
            interval_col,
        ]
        .spacing(30)
        .padding(iced::Padding::ZERO.left(80).right(80).bottom(30));

        let done = mouse_area(
            container(text("Done").size(colors.modal_text * 1.1))
                .padding(iced::Padding::ZERO.top(20).bottom(20).left(60).right(60))
                .style(colors.option_style(true)),
        )
        .on_press(Message::DismissSettings)
        .interaction(mouse::Interaction::Pointer);

        let footer = text(format!(
            "v{} {}",
            env!("TALLY_CLOCK_VERSION"),
            env!("TALLY_CLOCK_COMMIT")
        ))
        .size(colors.info_text)
        .color(colors.muted);

        let content = column![
            title,
            scrollable(body).width(Length::Fill).height(Length::Fill),
            done,
            footer,
        ]
        .spacing(30)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center);

        container(content)
            .padding(40)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(colors.modal_bg_style())
            .into()
    }

    /// Label on the left, ON/OFF pill on the right.
    fn toggle_row(
        &self,
        label: &'static str,
        on: bool,
        change: SettingChange,
    ) -> Element<'_, Message> {
        let colors = &self.colors;
        let pill = mouse_area(
            container(text(if on { "ON" } else { "OFF" }).size(colors.option_text))
                .padding(iced::Padding::ZERO.top(8).bottom(8).left(24).right(24))
                .style(colors.option_style(on)),
        )
        .on_press(Message::Setting(change))
        .interaction(mouse::Interaction::Pointer);

        row![
            text(label).size(colors.modal_text).color(colors.text),
            space::horizontal(),
            pill,
        ]
        .align_y(iced::alignment::Vertical::Center)
        .into()
    }

    fn divider(&self) -> Element<'_, Message> {
        container(space::Space::new())
            .width(Length::Fill)
            .height(1)
            .style(self.colors.divider_style())
            .into()
    }
}
