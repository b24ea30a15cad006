use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border: Color,
    pub status_bg: Color,
    pub bar: Color,
    pub bar_compared: Color, // Yellow, inspected without a write
    pub bar_moved: Color,    // Red, written by the last step
    pub bar_sorted: Color,
    pub algorithm: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    bar: Color::Rgb(100, 150, 255),
    bar_compared: Color::Rgb(249, 226, 175),
    bar_moved: Color::Rgb(243, 139, 168),
    bar_sorted: Color::Rgb(166, 227, 161),
    algorithm: Color::Rgb(148, 226, 213), // Cyan
};
