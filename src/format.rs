//! Byte formatting helpers for the grid and the inspector bar.

/// 2桁の16進数（小文字）
pub fn to16(n: u8) -> String {
    format!("{:02x}", n)
}

/// 4桁の8進数
pub fn to8(n: u8) -> String {
    format!("{:04o}", n)
}

/// 8桁の2進数
pub fn to2(n: u8) -> String {
    format!("{:08b}", n)
}

/// 3桁の10進数
pub fn to10(n: u8) -> String {
    format!("{:03}", n)
}

/// 行オフセット（8桁の16進数）
pub fn row_offset(offset: u64) -> String {
    format!("{:08x}", offset)
}

/// カーソル位置の16進表記（最低2桁、桁数は可変）
pub fn position_hex(position: u64) -> String {
    format!("{:02x}", position)
}

/// HEXセル（データなしは空白2文字）
pub fn hex_cell(byte: Option<u8>) -> String {
    match byte {
        Some(b) => to16(b),
        None => "  ".to_string(),
    }
}

/// ASCIIセル（表示可能文字以外は '.'、データなしは空白）
pub fn ascii_cell(byte: Option<u8>) -> char {
    match byte {
        Some(b @ 0x20..=0x7E) => b as char,
        Some(_) => '.',
        None => ' ',
    }
}

/// カーソル位置のバイト列の数値解釈（リトルエンディアン）
///
/// 利用可能なバイト数に応じて、1バイト・u16・u32の各表現を返す。
pub fn inspect(bytes: &[u8]) -> Vec<String> {
    let mut parts = Vec::new();

    if let Some(&b) = bytes.first() {
        parts.push(format!(
            "Byte: 0x{} 0o{} 0b{} {}(decimal)",
            to16(b),
            to8(b),
            to2(b),
            to10(b)
        ));
    }
    if let [b0, b1, ..] = *bytes {
        parts.push(format!("{:05}(u16)", u16::from_le_bytes([b0, b1])));
    }
    if let [b0, b1, b2, b3, ..] = *bytes {
        parts.push(format!("{:010}(u32)", u32::from_le_bytes([b0, b1, b2, b3])));
    }

    parts
}
