use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x2f, 0x6f, 0xed);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT_DIM: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BADGE_BG: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STAR: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const DOT_ACTIVE: Color = Color::Rgb(0x2f, 0x6f, 0xed);
pub const DOT_INACTIVE: Color = Color::Rgb(0x52, 0x52, 0x52);
