mod state;

pub use state::App;

use crossterm::event::KeyCode;

/// アプリケーションアクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,

    // カーソル移動（ページ端では行送り）
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,

    // ページオフセット
    NextRow,
    PrevRow,
    NextPage,
    PrevPage,

    // オフセットジャンプ入力
    FocusJump,
    JumpDigit(char),
    JumpBackspace,
    CommitJump,

    // ヘルプ
    ShowHelp,
    /// Esc: ヘルプを閉じ、ジャンプ入力を破棄
    Cancel,

    None,
}

/// キー修飾子
///
/// Shiftは `KeyCode::Char` の文字（'?' など）に反映済みなので持たない。
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMod {
    pub ctrl: bool,
    pub alt: bool,
}

impl Action {
    /// キーコードからアクションに変換（viキーバインド）
    pub fn from_key(key: KeyCode, mods: KeyMod) -> Self {
        let KeyMod { ctrl, alt } = mods;

        match (key, ctrl, alt) {
            // C-c: 終了
            (KeyCode::Char('c'), true, false) => Action::Quit,
            // その他の修飾付き文字は無視
            (KeyCode::Char(_), true, _) | (KeyCode::Char(_), _, true) => Action::None,

            (KeyCode::Char('q'), _, _) => Action::Quit,

            // === カーソル移動 ===
            (KeyCode::Char('h'), _, _) | (KeyCode::Left, _, _) => Action::CursorLeft,
            (KeyCode::Char('j'), _, _) | (KeyCode::Down, _, _) => Action::CursorDown,
            (KeyCode::Char('k'), _, _) | (KeyCode::Up, _, _) => Action::CursorUp,
            (KeyCode::Char('l'), _, _) | (KeyCode::Right, _, _) => Action::CursorRight,

            // === 行送り・ページ送り ===
            (KeyCode::Char('n'), _, _) => Action::NextRow,
            (KeyCode::Char('p'), _, _) => Action::PrevRow,
            (KeyCode::Char('d'), _, _) | (KeyCode::PageDown, _, _) => Action::NextPage,
            (KeyCode::Char('u'), _, _) | (KeyCode::PageUp, _, _) => Action::PrevPage,

            // === ジャンプ入力 ===
            (KeyCode::Char('/'), _, _) => Action::FocusJump,
            (KeyCode::Char(c), _, _) if c.is_ascii_digit() => Action::JumpDigit(c),
            (KeyCode::Backspace, _, _) => Action::JumpBackspace,
            (KeyCode::Enter, _, _) => Action::CommitJump,

            // === ヘルプ ===
            (KeyCode::Char('?'), _, _) => Action::ShowHelp,
            (KeyCode::Esc, _, _) => Action::Cancel,

            _ => Action::None,
        }
    }
}
