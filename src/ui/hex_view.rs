use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use super::Colors;
use crate::format::{ascii_cell, hex_cell, row_offset};
use crate::nav::{ROW_BYTES, ROWS_PER_PAGE};

/// アドレス列の幅
const ADDR_WIDTH: u16 = 8;
/// 列間の余白
const GAP: u16 = 3;

/// HEX/ASCII表示ウィジェット（1ページ分）
pub struct HexView<'a> {
    /// ページのバイト列
    data: &'a [u8],
    /// ページ先頭オフセット
    offset: u64,
    /// アクティブセル（空ファイルでは None）
    active: Option<usize>,
}

impl<'a> HexView<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            active: None,
        }
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    pub fn active(mut self, active: Option<usize>) -> Self {
        self.active = active;
        self
    }

    /// 列 `col` のHEXセルのx座標（4バイトごとに1文字余分に空ける）
    fn hex_x(col: usize) -> u16 {
        (col * 3 + col / 4) as u16
    }

    fn hex_width() -> u16 {
        Self::hex_x(ROW_BYTES - 1) + 2
    }

    fn ascii_x() -> u16 {
        ADDR_WIDTH + GAP + Self::hex_width() + GAP
    }

    /// バイト値に応じた色を取得
    fn byte_color(byte: u8) -> Color {
        match byte {
            0x00 => Colors::HEX_ZERO,
            0xFF => Colors::HEX_HIGH,
            0x20..=0x7E => Colors::HEX_PRINTABLE,
            _ => Colors::HEX_NORMAL,
        }
    }

    fn cursor_style(style: Style) -> Style {
        style.bg(Colors::CURSOR_BG).fg(Colors::CURSOR)
    }

    /// ヘッダー行を描画
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(Colors::HEADER)
            .add_modifier(Modifier::BOLD);
        buf.set_string(area.x, area.y, "Offset", style);

        let hex_start = area.x + ADDR_WIDTH + GAP;
        for col in 0..ROW_BYTES {
            buf.set_string(hex_start + Self::hex_x(col), area.y, format!("{:02x}", col), style);
        }
        buf.set_string(area.x + Self::ascii_x(), area.y, "ASCII", style);
    }

    /// 1行分のデータを描画
    fn render_row(&self, row: usize, area: Rect, buf: &mut Buffer) {
        let y = area.y;
        let row_start = row * ROW_BYTES;

        // アドレス表示
        let addr = row_offset(self.offset + row_start as u64);
        buf.set_string(area.x, y, &addr, Style::default().fg(Colors::ADDR));

        let hex_start = area.x + ADDR_WIDTH + GAP;
        let ascii_start = area.x + Self::ascii_x();

        for col in 0..ROW_BYTES {
            let index = row_start + col;
            let byte = self.data.get(index).copied();
            let is_active = self.active == Some(index);

            // HEX表示
            let mut hex_style = match byte {
                Some(b) => Style::default().fg(Self::byte_color(b)),
                None => Style::default(),
            };
            if is_active {
                hex_style = Self::cursor_style(hex_style);
            }
            buf.set_string(hex_start + Self::hex_x(col), y, hex_cell(byte), hex_style);

            // ASCII表示
            let mut ascii_style = Style::default().fg(Colors::ASCII_NORMAL);
            if is_active {
                ascii_style = Self::cursor_style(ascii_style);
            }
            buf.set_string(
                ascii_start + col as u16,
                y,
                ascii_cell(byte).to_string(),
                ascii_style,
            );
        }
    }
}

impl Widget for HexView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        self.render_header(area, buf);

        let visible_rows = (area.height as usize).saturating_sub(1).min(ROWS_PER_PAGE);
        for row in 0..visible_rows {
            let row_area = Rect {
                x: area.x,
                y: area.y + 1 + row as u16,
                width: area.width,
                height: 1,
            };
            self.render_row(row, row_area, buf);
        }
    }
}
