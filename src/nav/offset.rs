use super::{PAGE_BYTES, ROW_BYTES};

/// 表示ページの先頭オフセット
///
/// 前方向の移動はEOFを越える場合に移動自体を拒否し、
/// 後方向のページ移動だけは先頭（0）に丸める。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOffset {
    /// 現在のオフセット
    offset: u64,
    /// ファイルサイズ
    size: u64,
}

impl PageOffset {
    pub fn new(size: u64) -> Self {
        Self { offset: 0, size }
    }

    /// 現在のオフセット
    #[inline]
    pub fn get(&self) -> u64 {
        self.offset
    }

    /// 1行進む（EOFを越えるなら何もしない）
    pub fn next_row(&mut self) -> bool {
        self.step_forward(ROW_BYTES as u64)
    }

    /// 1行戻る（先頭より前なら何もしない）
    pub fn prev_row(&mut self) -> bool {
        match self.offset.checked_sub(ROW_BYTES as u64) {
            Some(offset) => self.replace(offset),
            None => false,
        }
    }

    /// 1ページ進む（EOFを越えるなら何もしない）
    pub fn next_page(&mut self) -> bool {
        self.step_forward(PAGE_BYTES as u64)
    }

    /// 1ページ戻る（先頭より前なら0に丸める）
    pub fn prev_page(&mut self) -> bool {
        self.replace(self.offset.saturating_sub(PAGE_BYTES as u64))
    }

    /// 絶対位置を設定
    pub fn set(&mut self, offset: u64) -> bool {
        self.replace(offset)
    }

    fn step_forward(&mut self, step: u64) -> bool {
        match self.offset.checked_add(step) {
            Some(offset) if offset < self.size => self.replace(offset),
            _ => false,
        }
    }

    /// 値が変わった場合のみ true
    fn replace(&mut self, offset: u64) -> bool {
        if offset == self.offset {
            return false;
        }
        self.offset = offset;
        true
    }
}
