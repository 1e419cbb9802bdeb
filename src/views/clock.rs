use std::time::Instant;

use iced::widget::{column, container, mouse_area, row, space, text};
use iced::{mouse, Color, Element, Font, Length};

use crate::app::{Message, TallyClock};
use crate::frame::DigitPosition;
use crate::time::digital_label;

const DIGITAL_FONT: Font = Font {
    weight: iced::font::Weight::Thin,
    ..Font::MONOSPACE
};

impl TallyClock {
    pub(crate) fn view_clock(&self) -> Element<'_, Message> {
        let now = Instant::now();
        let colors = &self.colors;

        // Hours pair, wide gap, minutes pair
        let matrices = row![
            self.view_matrix(DigitPosition::HoursTens, now),
            space::Space::new().width(colors.digit_gap),
            self.view_matrix(DigitPosition::HoursOnes, now),
            space::Space::new().width(colors.pair_gap),
            self.view_matrix(DigitPosition::MinutesTens, now),
            space::Space::new().width(colors.digit_gap),
            self.view_matrix(DigitPosition::MinutesOnes, now),
        ]
        .align_y(iced::alignment::Vertical::Center);

        let mut main_col = column![space::vertical(), matrices, space::vertical()]
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center);

        let config = self.state.config();
        if config.show_decimal_time {
            main_col = main_col.push(
                text(digital_label(self.state.time().time(), config.use_24_hour_clock))
                    .size(colors.digital_text)
                    .color(colors.digital)
                    .font(DIGITAL_FONT),
            );
        }

        main_col = main_col.push(space::Space::new().height(100));

        mouse_area(
            container(main_col)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(colors.background_style()),
        )
        .on_press(Message::OpenSettings)
        .interaction(mouse::Interaction::Pointer)
        .into()
    }

    /// 1x3 column for hours tens, 3x3 grid (row-major) for the rest.
    fn view_matrix(&self, pos: DigitPosition, now: Instant) -> Element<'_, Message> {
        let spacing = self.colors.cell_spacing;
        let cols = if pos.cell_count() == 3 { 1 } else { 3 };
        let rows = pos.cell_count() / cols;

        let mut grid = column![].spacing(spacing);
        for r in 0..rows {
            let mut line = row![].spacing(spacing);
            for c in 0..cols {
                let i = r * cols + c;
                line = line.push(self.view_cell(self.state.cell_color(pos, i, now)));
            }
            grid = grid.push(line);
        }
        grid.into()
    }

    fn view_cell(&self, fill: Color) -> Element<'_, Message> {
        let size = self.colors.cell_size;
        container(space::Space::new())
            .width(size)
            .height(size)
            .style(self.colors.cell_style(fill))
            .into()
    }
}
