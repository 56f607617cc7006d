use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const CRITICAL: Color = Color::Red;
pub const HIGH: Color = Color::TrueColor {
    r: 249,
    g: 115,
    b: 22,
};
pub const MEDIUM: Color = Color::Yellow;
