//! Color palette for the wizard screens.

use ratatui::style::Color;

pub struct Palette {
    pub bg: Color,
    pub text: Color,
    pub faint: Color,
    pub accent: Color,
    pub error: Color,
    pub ok: Color,
    pub pill: Color,
}

#[must_use]
pub fn palette() -> Palette {
    Palette {
        bg: Color::Rgb(16, 18, 24),
        text: Color::Rgb(220, 223, 228),
        faint: Color::Rgb(130, 135, 145),
        accent: Color::Rgb(97, 175, 239),
        error: Color::Rgb(224, 108, 117),
        ok: Color::Rgb(152, 195, 121),
        pill: Color::Rgb(229, 192, 123),
    }
}
