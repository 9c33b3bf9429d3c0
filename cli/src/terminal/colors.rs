use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Yellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const UNSET: Color = Color::BrightBlack;
pub const MONEY: Color = Color::TrueColor { r: 60, g: 179, b: 113 };

// mediumseagreen / steelblue
pub const GP_BAR: Color = Color::TrueColor { r: 60, g: 179, b: 113 };
pub const COMMISSION_BAR: Color = Color::TrueColor { r: 70, g: 130, b: 180 };
