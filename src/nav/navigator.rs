use tracing::{debug, warn};

use super::{
    Cursor, FetchRequest, FetchResponse, HelpOverlay, JumpInput, PAGE_BYTES, Page, PageOffset,
    PageState, ROW_BYTES,
};
use crate::app::Action;
use crate::source::Meta;

/// インスペクタに渡すバイト数
const INSPECT_BYTES: usize = 8;

/// ページ・カーソル・ヘルプ・ジャンプ入力をまとめた状態機械
///
/// オフセットが変わるたびに世代番号を進めて [`FetchRequest`] を1つ返す。
/// 古い世代の応答は [`Navigator::page_loaded`] で捨てられる。
#[derive(Debug, Clone)]
pub struct Navigator {
    /// ファイルのメタデータ（起動時に一度だけ取得）
    meta: Meta,
    /// ページ先頭オフセット
    offset: PageOffset,
    /// ページ内カーソル
    cursor: Cursor,
    /// 表示中のページ
    page: Page,
    /// 読み込み要求の世代番号
    generation: u64,
    /// ヘルプオーバーレイ
    help: HelpOverlay,
    /// オフセットジャンプ入力
    jump_input: JumpInput,
}

impl Navigator {
    pub fn new(meta: Meta) -> Self {
        Self {
            offset: PageOffset::new(meta.size),
            meta,
            cursor: Cursor::default(),
            page: Page::default(),
            generation: 0,
            help: HelpOverlay::default(),
            jump_input: JumpInput::default(),
        }
    }

    /// 最初のページ読み込み要求
    pub fn start(&mut self) -> FetchRequest {
        self.cursor.clamp(self.offset.get(), self.meta.size);
        self.issue_fetch()
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn size(&self) -> u64 {
        self.meta.size
    }

    /// ページ先頭オフセット
    pub fn offset(&self) -> u64 {
        self.offset.get()
    }

    /// ページ内のアクティブセル
    pub fn active(&self) -> usize {
        self.cursor.active()
    }

    /// ファイル上のカーソル位置
    pub fn position(&self) -> u64 {
        self.offset.get() + self.cursor.active() as u64
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn help(&self) -> HelpOverlay {
        self.help
    }

    pub fn jump_input(&self) -> &JumpInput {
        &self.jump_input
    }

    /// カーソル位置から最大8バイト（インスペクタ用）
    pub fn inspected_bytes(&self) -> &[u8] {
        self.page.window(self.cursor.active(), INSPECT_BYTES)
    }

    // === オフセット操作 ===

    pub fn next_row(&mut self) -> Option<FetchRequest> {
        let changed = self.offset.next_row();
        self.offset_changed(changed)
    }

    pub fn prev_row(&mut self) -> Option<FetchRequest> {
        let changed = self.offset.prev_row();
        self.offset_changed(changed)
    }

    pub fn next_page(&mut self) -> Option<FetchRequest> {
        let changed = self.offset.next_page();
        self.offset_changed(changed)
    }

    pub fn prev_page(&mut self) -> Option<FetchRequest> {
        let changed = self.offset.prev_page();
        self.offset_changed(changed)
    }

    pub fn set_offset(&mut self, offset: u64) -> Option<FetchRequest> {
        let changed = self.offset.set(offset);
        self.offset_changed(changed)
    }

    /// オフセットが変わった場合: カーソルを補正して新しいページを要求
    fn offset_changed(&mut self, changed: bool) -> Option<FetchRequest> {
        if !changed {
            return None;
        }
        self.cursor.clamp(self.offset.get(), self.meta.size);
        Some(self.issue_fetch())
    }

    fn issue_fetch(&mut self) -> FetchRequest {
        self.generation += 1;
        self.page.state = PageState::Loading;
        let request = FetchRequest {
            generation: self.generation,
            offset: self.offset.get(),
            length: PAGE_BYTES,
        };
        debug!(
            generation = request.generation,
            offset = request.offset,
            "fetch page"
        );
        request
    }

    // === カーソル操作 ===

    pub fn left(&mut self) -> bool {
        self.cursor.left()
    }

    pub fn right(&mut self) -> bool {
        self.cursor.right(self.offset.get(), self.meta.size)
    }

    pub fn up(&mut self) -> bool {
        self.cursor.up()
    }

    pub fn down(&mut self) -> bool {
        self.cursor.down(self.offset.get(), self.meta.size)
    }

    /// 上へ（先頭行なら1行戻る）
    pub fn cursor_up(&mut self) -> Option<FetchRequest> {
        if self.cursor.on_first_row() {
            return self.prev_row();
        }
        self.up();
        None
    }

    /// 下へ（最終行なら1行進む）
    pub fn cursor_down(&mut self) -> Option<FetchRequest> {
        if self.cursor.on_last_row() {
            return self.next_row();
        }
        self.down();
        None
    }

    /// ファイル全体でのバイト位置へジャンプ（範囲外は最終バイト）
    pub fn jump(&mut self, index: u64) -> Option<FetchRequest> {
        if self.meta.size == 0 {
            return None;
        }
        if index >= self.meta.size {
            return self.jump(self.meta.size - 1);
        }
        let row = (index % ROW_BYTES as u64) as usize;
        let request = self.set_offset(index - row as u64);
        self.cursor.set(row);
        request
    }

    // === 入力ディスパッチ ===

    /// アクションを適用し、必要ならページ読み込み要求を返す
    pub fn dispatch(&mut self, action: Action) -> Option<FetchRequest> {
        // ヘルプ表示中は閉じる操作以外を無視
        if self.help.is_shown() {
            if action == Action::Cancel {
                self.help.dismiss();
                self.jump_input.cancel();
            }
            return None;
        }

        match action {
            Action::CursorUp => self.cursor_up(),
            Action::CursorDown => self.cursor_down(),
            Action::CursorLeft => {
                self.left();
                None
            }
            Action::CursorRight => {
                self.right();
                None
            }
            Action::NextRow => self.next_row(),
            Action::PrevRow => self.prev_row(),
            Action::NextPage => self.next_page(),
            Action::PrevPage => self.prev_page(),
            Action::FocusJump => {
                self.jump_input.focus();
                None
            }
            Action::JumpDigit(ch) => {
                self.jump_input.push(ch);
                None
            }
            Action::JumpBackspace => {
                self.jump_input.backspace();
                None
            }
            Action::CommitJump => self.jump_input.commit().and_then(|index| self.jump(index)),
            Action::ShowHelp => {
                self.help.show();
                None
            }
            Action::Cancel => {
                self.jump_input.cancel();
                None
            }
            Action::Quit | Action::None => None,
        }
    }

    /// 読み込み結果を反映（最新の世代のみ）
    pub fn page_loaded(&mut self, response: FetchResponse) -> bool {
        if response.generation != self.generation {
            debug!(
                generation = response.generation,
                current = self.generation,
                "discard stale page"
            );
            return false;
        }

        match response.result {
            Ok(data) => {
                self.page = Page {
                    offset: response.offset,
                    data,
                    state: PageState::Loaded,
                };
            }
            Err(message) => {
                warn!(offset = response.offset, %message, "page read failed");
                self.page.state = PageState::Error(message);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(size: u64) -> Navigator {
        let mut nav = Navigator::new(Meta {
            size,
            path: "test.bin".to_string(),
        });
        nav.start();
        nav
    }

    #[test]
    fn test_start_issues_generation_one() {
        let mut nav = Navigator::new(Meta {
            size: 1000,
            path: String::new(),
        });
        let request = nav.start();
        assert_eq!(request.generation, 1);
        assert_eq!(request.offset, 0);
        assert_eq!(request.length, PAGE_BYTES);
        assert_eq!(nav.page().state, PageState::Loading);
    }

    #[test]
    fn test_start_clamps_cursor_on_tiny_file() {
        let nav = navigator(1);
        assert_eq!(nav.active(), 0);
        assert_eq!(nav.position(), 0);
    }

    #[test]
    fn test_each_offset_change_issues_one_fetch() {
        let mut nav = navigator(1000);
        let request = nav.next_row().unwrap();
        assert_eq!(request.generation, 2);
        assert_eq!(request.offset, 16);
        assert!(nav.prev_page().is_some());
        assert_eq!(nav.generation(), 3);
        // 変化なしなら要求しない
        assert!(nav.prev_page().is_none());
        assert_eq!(nav.generation(), 3);
    }

    #[test]
    fn test_down_on_last_row_scrolls() {
        let mut nav = navigator(400);
        nav.cursor.set(368);

        let request = nav.cursor_down().unwrap();
        assert_eq!(request.offset, 16);
        assert_eq!(nav.offset(), 16);
        assert_eq!(nav.active(), 368);
    }

    #[test]
    fn test_down_on_last_row_clamps_cursor_near_eof() {
        let mut nav = navigator(390);
        nav.cursor.set(375);
        assert!(nav.cursor_down().is_some());
        assert_eq!(nav.offset(), 16);
        assert_eq!(nav.active(), 373);
        assert_eq!(nav.position(), 389);
    }

    #[test]
    fn test_up_on_first_row_scrolls_back() {
        let mut nav = navigator(1000);
        nav.set_offset(32);
        nav.cursor.set(3);
        assert!(nav.cursor_up().is_some());
        assert_eq!(nav.offset(), 16);
        assert_eq!(nav.active(), 3);
    }

    #[test]
    fn test_up_at_file_start_is_noop() {
        let mut nav = navigator(1000);
        nav.cursor.set(3);
        assert!(nav.cursor_up().is_none());
        assert_eq!(nav.offset(), 0);
        assert_eq!(nav.active(), 3);
    }

    #[test]
    fn test_right_at_eof_byte() {
        let mut nav = navigator(10);
        nav.cursor.set(9);
        assert!(!nav.right());
        assert_eq!(nav.active(), 9);
    }

    #[test]
    fn test_jump_aligns_to_row() {
        let mut nav = navigator(10_000);
        let request = nav.jump(1234).unwrap();
        assert_eq!(request.offset, 1232);
        assert_eq!(nav.offset(), 1232);
        assert_eq!(nav.active(), 2);
        assert_eq!(nav.position(), 1234);
    }

    #[test]
    fn test_jump_past_end_goes_to_last_byte() {
        let mut nav = navigator(1000);
        nav.jump(5000);
        assert_eq!(nav.position(), 999);
        assert_eq!(nav.offset(), 992);
        assert_eq!(nav.active(), 7);
    }

    #[test]
    fn test_jump_within_same_row_does_not_refetch() {
        let mut nav = navigator(1000);
        assert!(nav.jump(5).is_none());
        assert_eq!(nav.active(), 5);
        assert_eq!(nav.generation(), 1);
    }

    #[test]
    fn test_jump_on_empty_file_is_noop() {
        let mut nav = navigator(0);
        assert!(nav.jump(10).is_none());
        assert_eq!(nav.position(), 0);
    }

    #[test]
    fn test_offset_change_clamps_cursor() {
        let mut nav = navigator(400);
        nav.cursor.set(100);
        nav.next_page();
        assert_eq!(nav.offset(), 384);
        assert_eq!(nav.active(), 15);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut nav = navigator(1000);
        let first = nav.next_row().unwrap();
        let second = nav.next_row().unwrap();

        assert!(!nav.page_loaded(FetchResponse::new(first, Ok(vec![1; 384]))));
        assert_eq!(nav.page().state, PageState::Loading);

        assert!(nav.page_loaded(FetchResponse::new(second, Ok(vec![2; 384]))));
        assert_eq!(nav.page().state, PageState::Loaded);
        assert_eq!(nav.page().offset, 32);
        assert_eq!(nav.page().get(0), Some(2));
    }

    #[test]
    fn test_failed_read_keeps_previous_bytes() {
        let mut nav = navigator(1000);
        nav.page_loaded(FetchResponse::new(
            FetchRequest {
                generation: 1,
                offset: 0,
                length: PAGE_BYTES,
            },
            Ok(vec![7; 384]),
        ));
        let request = nav.next_page().unwrap();
        nav.page_loaded(FetchResponse::new(request, Err("boom".to_string())));

        assert_eq!(nav.page().state, PageState::Error("boom".to_string()));
        assert_eq!(nav.page().get(0), Some(7));
    }

    #[test]
    fn test_inspected_bytes() {
        let mut nav = navigator(1000);
        nav.page_loaded(FetchResponse::new(
            FetchRequest {
                generation: 1,
                offset: 0,
                length: PAGE_BYTES,
            },
            Ok((0..=255).chain(0..128).collect()),
        ));
        nav.cursor.set(10);
        assert_eq!(nav.inspected_bytes(), &[10, 11, 12, 13, 14, 15, 16, 17]);
        nav.cursor.set(380);
        assert_eq!(nav.inspected_bytes(), &[124, 125, 126, 127]);
    }

    #[test]
    fn test_help_suppresses_navigation() {
        let mut nav = navigator(1000);
        nav.dispatch(Action::JumpDigit('4'));
        nav.dispatch(Action::ShowHelp);
        assert!(nav.dispatch(Action::NextPage).is_none());
        nav.dispatch(Action::CursorRight);
        nav.dispatch(Action::JumpDigit('5'));
        assert_eq!(nav.offset(), 0);
        assert_eq!(nav.active(), 0);
        assert_eq!(nav.jump_input().text(), "4");

        // 閉じると同時に入力途中のジャンプも破棄
        nav.dispatch(Action::Cancel);
        assert!(!nav.help().is_shown());
        assert_eq!(nav.jump_input().text(), "");
        assert!(!nav.jump_input().is_focused());
        assert!(nav.dispatch(Action::NextPage).is_some());
    }

    #[test]
    fn test_commit_jump_via_dispatch() {
        let mut nav = navigator(10_000);
        for ch in "500".chars() {
            nav.dispatch(Action::JumpDigit(ch));
        }
        let request = nav.dispatch(Action::CommitJump).unwrap();
        assert_eq!(request.offset, 496);
        assert_eq!(nav.position(), 500);
        assert_eq!(nav.jump_input().text(), "");
    }

    #[test]
    fn test_cancel_jump_does_not_navigate() {
        let mut nav = navigator(10_000);
        nav.dispatch(Action::JumpDigit('9'));
        nav.dispatch(Action::Cancel);
        assert!(nav.dispatch(Action::CommitJump).is_none());
        assert_eq!(nav.position(), 0);
    }
}
