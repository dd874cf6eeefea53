//! Navigator - ページオフセットとカーソルの状態機械
//!
//! キー入力（[`crate::app::Action`]）を受けて、どのページを読み込むか・
//! どのセルをハイライトするかを決める。読み込み自体は行わず、
//! [`FetchRequest`] を呼び出し側に返す。

mod cursor;
mod help;
mod jump;
mod navigator;
mod offset;

pub use cursor::Cursor;
pub use help::{HELP_TEXT, HelpOverlay};
pub use jump::JumpInput;
pub use navigator::Navigator;
pub use offset::PageOffset;

/// 1行あたりのバイト数
pub const ROW_BYTES: usize = 16;
/// 1ページあたりの行数
pub const ROWS_PER_PAGE: usize = 24;
/// 1ページあたりのバイト数
pub const PAGE_BYTES: usize = ROW_BYTES * ROWS_PER_PAGE;

/// ページの読み込み状態
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    Loading,
    Loaded,
    Error(String),
}

/// 現在表示中のページ
///
/// 読み込み中・エラー時は直前のページのバイト列を保持したまま状態だけ変わる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// `data` の先頭が対応するファイル上の位置
    pub offset: u64,
    /// ページのバイト列（EOFでは `PAGE_BYTES` 未満）
    pub data: Vec<u8>,
    pub state: PageState,
}

impl Page {
    /// ページ内インデックスのバイトを取得
    pub fn get(&self, index: usize) -> Option<u8> {
        self.data.get(index).copied()
    }

    /// `start` から最大 `len` バイトのスライス
    pub fn window(&self, start: usize, len: usize) -> &[u8] {
        let start = start.min(self.data.len());
        let end = start.saturating_add(len).min(self.data.len());
        &self.data[start..end]
    }
}

/// ページ読み込み要求（世代番号付き）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub offset: u64,
    pub length: usize,
}

/// ページ読み込み結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub generation: u64,
    pub offset: u64,
    pub result: Result<Vec<u8>, String>,
}

impl FetchResponse {
    pub fn new(request: FetchRequest, result: Result<Vec<u8>, String>) -> Self {
        Self {
            generation: request.generation,
            offset: request.offset,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_constants() {
        assert_eq!(PAGE_BYTES, 384);
    }

    #[test]
    fn test_page_window_short_data() {
        let page = Page {
            offset: 0,
            data: vec![1, 2, 3, 4, 5],
            state: PageState::Loaded,
        };
        assert_eq!(page.window(3, 8), &[4, 5]);
        assert_eq!(page.window(5, 8), &[] as &[u8]);
        assert_eq!(page.window(100, 8), &[] as &[u8]);
        assert_eq!(page.get(4), Some(5));
        assert_eq!(page.get(5), None);
    }
}
