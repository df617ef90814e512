use ratatui::style::{Color, Modifier, Style};

pub const EMERALD: Color = Color::Rgb(16, 185, 129);
pub const CYAN: Color = Color::Rgb(6, 182, 212);
pub const AMBER: Color = Color::Rgb(251, 191, 36);
pub const RED: Color = Color::Rgb(248, 113, 113);
pub const TELEGRAM: Color = Color::Rgb(0, 136, 204);
pub const SLATE_200: Color = Color::Rgb(226, 232, 240);
pub const SLATE_400: Color = Color::Rgb(148, 163, 184);
pub const SLATE_600: Color = Color::Rgb(71, 85, 105);
pub const BORDER: Color = Color::Rgb(30, 41, 59);

pub const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn muted() -> Style {
    Style::default().fg(SLATE_400)
}

pub fn dim() -> Style {
    Style::default().fg(SLATE_600)
}

pub fn accent() -> Style {
    Style::default().fg(EMERALD).add_modifier(Modifier::BOLD)
}

pub fn panel_border() -> Style {
    Style::default().fg(BORDER)
}
