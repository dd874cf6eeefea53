mod hex_view;
mod panels;

pub use hex_view::HexView;
pub use panels::{HelpPopup, InfoBar, StatusBar, help_area};

use ratatui::style::Color;

/// 配色
pub struct Colors;

impl Colors {
    pub const ADDR: Color = Color::Cyan;
    pub const HEADER: Color = Color::Yellow;
    pub const HEX_ZERO: Color = Color::DarkGray;
    pub const HEX_HIGH: Color = Color::Red;
    pub const HEX_PRINTABLE: Color = Color::Green;
    pub const HEX_NORMAL: Color = Color::White;
    pub const ASCII_NORMAL: Color = Color::Gray;
    pub const CURSOR: Color = Color::Black;
    pub const CURSOR_BG: Color = Color::White;
    pub const BAR: Color = Color::DarkGray;
    pub const ERROR: Color = Color::Red;
}
