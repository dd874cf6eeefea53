/// ヘルプオーバーレイ
///
/// 表示中はナビゲーション用のキーをすべて無視する（モーダル）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HelpOverlay {
    #[default]
    Hidden,
    Shown,
}

impl HelpOverlay {
    pub fn show(&mut self) {
        *self = HelpOverlay::Shown;
    }

    pub fn dismiss(&mut self) {
        *self = HelpOverlay::Hidden;
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, HelpOverlay::Shown)
    }
}

/// ヘルプ本文
pub const HELP_TEXT: &str = "\
h      move cursor left
j      move cursor down
k      move cursor up
l      move cursor right

n      move to next line
p      move to previous line

d      move to next page
u      move to previous page

/      focus jump input
[0-9]  input byte offset(decimal)
Enter  jump to offset
Esc    cancel jump

?      open help
Esc    close help
q      quit";
