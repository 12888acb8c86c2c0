use ratatui::style::Color;

use crate::domain::weather::IconCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Basic16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub surface_alt: Color,
    pub accent: Color,
    pub text: Color,
    pub muted_text: Color,
    pub border: Color,
    pub danger: Color,
}

pub fn detect_color_capability() -> ColorCapability {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorCapability::Basic16;
    }
    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        ColorCapability::TrueColor
    } else {
        ColorCapability::Basic16
    }
}

/// Deep navy dashboard palette; terminals without 24-bit color get the
/// nearest named colors.
pub fn theme_for(capability: ColorCapability) -> Theme {
    match capability {
        ColorCapability::TrueColor => Theme {
            background: Color::Rgb(3, 1, 45),
            surface: Color::Rgb(61, 59, 94),
            surface_alt: Color::Rgb(39, 37, 65),
            accent: Color::Rgb(68, 85, 218),
            text: Color::Rgb(255, 255, 255),
            muted_text: Color::Rgb(174, 174, 183),
            border: Color::Rgb(74, 72, 104),
            danger: Color::Rgb(255, 120, 120),
        },
        ColorCapability::Basic16 => Theme {
            background: Color::Reset,
            surface: Color::Reset,
            surface_alt: Color::Reset,
            accent: Color::LightBlue,
            text: Color::White,
            muted_text: Color::Gray,
            border: Color::DarkGray,
            danger: Color::LightRed,
        },
    }
}

pub fn icon_color(category: IconCategory) -> Color {
    match category {
        IconCategory::Sunny => Color::Yellow,
        IconCategory::PartlyCloudy => Color::LightYellow,
        IconCategory::Overcast | IconCategory::Fog => Color::Gray,
        IconCategory::Rain | IconCategory::Drizzle => Color::LightBlue,
        IconCategory::Snow => Color::White,
        IconCategory::Storm => Color::LightMagenta,
        IconCategory::Unknown => Color::DarkGray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_palette_avoids_rgb() {
        let theme = theme_for(ColorCapability::Basic16);
        assert!(!matches!(theme.accent, Color::Rgb(..)));
        assert!(!matches!(theme.surface, Color::Rgb(..)));
    }

    #[test]
    fn every_icon_has_a_color() {
        for category in IconCategory::ALL {
            let _ = icon_color(category);
        }
        assert_eq!(icon_color(IconCategory::Unknown), Color::DarkGray);
    }
}
