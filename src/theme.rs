use iced::{Background, Border, Color};

/// Resting color of an unlit cell.
pub const UNLIT: Color = Color {
    r: 0.08,
    g: 0.08,
    b: 0.08,
    a: 1.0,
};

/// All colors and sizes used by the clock and the settings panel.
pub struct ThemeColors {
    // Text
    pub text: Color,
    pub digital: Color,
    pub muted: Color,
    // Backgrounds
    pub background: Color,
    pub modal_bg: Color,
    pub divider: Color,
    pub accent: Color,
    pub option_bg: Color,
    // Geometry (logical pixels)
    pub cell_size: f32,
    pub cell_spacing: f32,
    pub cell_radius: f32,
    /// Gap between the two digits of a pair (hours or minutes).
    pub digit_gap: f32,
    /// Gap between the hours pair and the minutes pair.
    pub pair_gap: f32,
    // Font sizes
    pub digital_text: f32,
    pub modal_title: f32,
    pub modal_text: f32,
    pub option_text: f32,
    pub info_text: f32,
}

impl ThemeColors {
    /// Black room-display theme.
    pub fn dark() -> Self {
        Self {
            text: Color::WHITE,
            digital: Color {
                r: 1.0,
                g: 1.0,
                b: 1.0,
                a: 0.6,
            },
            muted: Color {
                r: 1.0,
                g: 1.0,
                b: 1.0,
                a: 0.4,
            },
            background: Color::BLACK,
            modal_bg: Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 0.95,
            },
            divider: Color {
                r: 1.0,
                g: 1.0,
                b: 1.0,
                a: 0.3,
            },
            accent: Color {
                r: 0.0,
                g: 0.48,
                b: 1.0,
                a: 1.0,
            },
            option_bg: Color {
                r: 0.5,
                g: 0.5,
                b: 0.5,
                a: 0.3,
            },
            cell_size: 80.0,
            cell_spacing: 12.0,
            cell_radius: 8.0,
            digit_gap: 40.0,
            pair_gap: 120.0,
            digital_text: 60.0,
            modal_title: 60.0,
            modal_text: 36.0,
            option_text: 30.0,
            info_text: 14.0,
        }
    }

    pub fn background_style(&self) -> impl Fn(&iced::Theme) -> iced::widget::container::Style {
        let color = self.background;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        }
    }

    pub fn modal_bg_style(&self) -> impl Fn(&iced::Theme) -> iced::widget::container::Style {
        let color = self.modal_bg;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        }
    }

    pub fn divider_style(&self) -> impl Fn(&iced::Theme) -> iced::widget::container::Style {
        let color = self.divider;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        }
    }

    /// Rounded button face: accent when selected, translucent gray otherwise.
    pub fn option_style(
        &self,
        selected: bool,
    ) -> impl Fn(&iced::Theme) -> iced::widget::container::Style {
        let color = if selected { self.accent } else { self.option_bg };
        let text = self.text;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            text_color: Some(text),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Filled rounded square for a single matrix cell.
    pub fn cell_style(&self, fill: Color) -> impl Fn(&iced::Theme) -> iced::widget::container::Style {
        let radius = self.cell_radius;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(fill)),
            border: Border {
                radius: radius.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
