use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::Colors;
use crate::format::{inspect, position_hex};
use crate::nav::{HELP_TEXT, JumpInput, PageState};
use crate::source::Meta;

/// タイトル・パス・サイズのバー
pub struct InfoBar<'a> {
    meta: &'a Meta,
}

impl<'a> InfoBar<'a> {
    pub fn new(meta: &'a Meta) -> Self {
        Self { meta }
    }
}

impl Widget for InfoBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                "Binary File Viewer (? for help)",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("path: {}", self.meta.path)),
            Line::from(format!("size: {}", self.meta.size)),
        ];
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(Colors::BAR)),
            )
            .render(area, buf);
    }
}

/// オフセット・ジャンプ入力・バイトインスペクタのバー
pub struct StatusBar<'a> {
    /// カーソルのファイル上の位置
    position: u64,
    jump: &'a JumpInput,
    /// カーソル位置からのバイト列
    bytes: &'a [u8],
    state: &'a PageState,
}

impl<'a> StatusBar<'a> {
    pub fn new(position: u64, jump: &'a JumpInput, bytes: &'a [u8], state: &'a PageState) -> Self {
        Self {
            position,
            jump,
            bytes,
            state,
        }
    }

    fn offset_line(&self) -> Line<'static> {
        let marker = if self.jump.is_focused() { "_" } else { "" };
        let mut spans = vec![
            Span::raw(format!(
                "offset: 0x{} {}",
                position_hex(self.position),
                self.position
            )),
            Span::raw("  jump: "),
            Span::styled(
                format!("{}{}", self.jump.text(), marker),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ),
        ];
        match self.state {
            PageState::Loading => spans.push(Span::raw("  loading...")),
            PageState::Error(msg) => spans.push(Span::styled(
                format!("  error: {}", msg),
                Style::default().fg(Colors::ERROR),
            )),
            PageState::Loaded => {}
        }
        Line::from(spans)
    }

    fn bytes_line(&self) -> Line<'static> {
        Line::from(inspect(self.bytes).join("  "))
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![self.offset_line(), self.bytes_line()];
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(Colors::BAR)),
            )
            .render(area, buf);
    }
}

/// ヘルプオーバーレイ
pub struct HelpPopup;

impl Widget for HelpPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        Paragraph::new(HELP_TEXT)
            .block(Block::bordered().title(" help "))
            .render(area, buf);
    }
}

/// ヘルプを表示する中央の領域
pub fn help_area(area: Rect) -> Rect {
    let height = HELP_TEXT.lines().count() as u16 + 2;
    let width = HELP_TEXT.lines().map(str::len).max().unwrap_or(0) as u16 + 4;
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    area
}
