/// オフセットジャンプ入力（10進数のみ）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpInput {
    /// 入力中の数字列
    text: String,
    /// 入力欄にフォーカスがあるか
    focused: bool,
}

impl JumpInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// 入力せずにフォーカスだけ移す
    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// 数字を追加（数字以外は受け付けない）
    pub fn push(&mut self, ch: char) -> bool {
        if !ch.is_ascii_digit() {
            return false;
        }
        self.focused = true;
        self.text.push(ch);
        true
    }

    /// 最後の1文字を削除
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// 入力を破棄してフォーカスを外す
    pub fn cancel(&mut self) {
        self.text.clear();
        self.focused = false;
    }

    /// 確定: 入力があれば10進数として返し、入力欄をクリア
    pub fn commit(&mut self) -> Option<u64> {
        self.focused = false;
        if self.text.is_empty() {
            return None;
        }
        let target = parse_decimal(&self.text);
        self.text.clear();
        Some(target)
    }
}

/// 桁あふれは u64::MAX に飽和させる（ジャンプ側で最終バイトに丸められる）
fn parse_decimal(text: &str) -> u64 {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}
