use crate::domain::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub done: Color,
    pub tomorrow: Color,
    pub error: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(243, 244, 246),
    foreground: Color::Rgb(17, 24, 39),
    muted: Color::Rgb(107, 114, 128),
    accent: Color::Rgb(59, 130, 246),
    border: Color::Rgb(209, 213, 219),
    selected_bg: Color::Rgb(191, 219, 254),
    selected_fg: Color::Rgb(17, 24, 39),
    done: Color::Rgb(22, 163, 74),
    tomorrow: Color::Rgb(161, 98, 7),
    error: Color::Rgb(220, 38, 38),
};

const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39),
    foreground: Color::Rgb(243, 244, 246),
    muted: Color::Rgb(156, 163, 175),
    accent: Color::Rgb(96, 165, 250),
    border: Color::Rgb(75, 85, 99),
    selected_bg: Color::Rgb(55, 65, 81),
    selected_fg: Color::Rgb(243, 244, 246),
    done: Color::Rgb(74, 222, 128),
    tomorrow: Color::Rgb(250, 204, 21),
    error: Color::Rgb(248, 113, 113),
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

/// Base style applied to the whole screen
pub fn base_style(p: &Palette) -> Style {
    Style::default().fg(p.foreground).bg(p.background)
}

/// Selected row highlight style
pub fn selected_style(p: &Palette) -> Style {
    Style::default()
        .fg(p.selected_fg)
        .bg(p.selected_bg)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

pub fn border_style(p: &Palette) -> Style {
    Style::default().fg(p.border)
}

/// Secondary text (alarm labels, empty-list placeholders, hints)
pub fn muted_style(p: &Palette) -> Style {
    Style::default().fg(p.muted)
}

/// Completed task text
pub fn done_style(p: &Palette) -> Style {
    Style::default()
        .fg(p.muted)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn done_marker_style(p: &Palette) -> Style {
    Style::default().fg(p.done)
}

pub fn tomorrow_style(p: &Palette) -> Style {
    Style::default().fg(p.tomorrow)
}

pub fn error_style(p: &Palette) -> Style {
    Style::default().fg(p.error).add_modifier(Modifier::BOLD)
}

/// Modal title style
pub fn modal_title_style(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        assert_ne!(palette(Theme::Light), palette(Theme::Dark));
        assert_eq!(palette(Theme::Dark).background, DARK.background);
    }

    #[test]
    fn test_done_style_strikes_through() {
        let style = done_style(palette(Theme::Light));
        assert!(style.add_modifier.contains(Modifier::CROSSED_OUT));
    }
}
