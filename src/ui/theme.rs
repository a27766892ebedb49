use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xe5, 0x39, 0x35);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT_MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FAVORITE: Color = Color::Rgb(0xf4, 0x3f, 0x5e);
pub const BADGE: Color = Color::Rgb(0xfb, 0xbf, 0x24);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
