use super::{PAGE_BYTES, ROW_BYTES, ROWS_PER_PAGE};

/// ページ内のカーソル位置（アクティブセル）
///
/// 制約に反する移動はすべて何もしない（丸めない）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    active: usize,
}

impl Cursor {
    /// ページ内インデックス
    #[inline]
    pub fn active(&self) -> usize {
        self.active
    }

    /// ページ内インデックスを直接設定（ジャンプ用）
    pub fn set(&mut self, active: usize) {
        self.active = active;
    }

    /// 先頭行にいるか
    pub fn on_first_row(&self) -> bool {
        self.active < ROW_BYTES
    }

    /// 最終行にいるか
    pub fn on_last_row(&self) -> bool {
        self.active / ROW_BYTES >= ROWS_PER_PAGE - 1
    }

    /// オフセット変更後の補正: EOFを越えていれば最後の有効バイトへ
    pub fn clamp(&mut self, offset: u64, size: u64) {
        if !in_file(self.active, offset, size) {
            self.active = usize::try_from(size.saturating_sub(offset).saturating_sub(1))
                .unwrap_or(0)
                .min(PAGE_BYTES - 1);
        }
    }

    /// 左へ（行頭なら何もしない）
    pub fn left(&mut self) -> bool {
        if self.active % ROW_BYTES == 0 {
            return false;
        }
        self.active -= 1;
        true
    }

    /// 右へ（行末・EOFなら何もしない）
    pub fn right(&mut self, offset: u64, size: u64) -> bool {
        if self.active % ROW_BYTES == ROW_BYTES - 1 {
            return false;
        }
        let next = self.active + 1;
        if !in_file(next, offset, size) {
            return false;
        }
        self.active = next;
        true
    }

    /// 上へ（先頭行なら何もしない）
    pub fn up(&mut self) -> bool {
        match self.active.checked_sub(ROW_BYTES) {
            Some(active) => {
                self.active = active;
                true
            }
            None => false,
        }
    }

    /// 下へ（ページ外・EOFなら何もしない）
    pub fn down(&mut self, offset: u64, size: u64) -> bool {
        let next = self.active + ROW_BYTES;
        if next >= PAGE_BYTES || !in_file(next, offset, size) {
            return false;
        }
        self.active = next;
        true
    }
}

/// `offset + active` がファイル内か
fn in_file(active: usize, offset: u64, size: u64) -> bool {
    offset.saturating_add(active as u64) < size
}
