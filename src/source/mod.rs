//! Byte source - ファイルサイズとバイト範囲の読み出し

mod file;
mod memory;

pub use file::FileSource;
pub use memory::MemorySource;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// バイトソースのエラー
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// サイズ問い合わせと範囲読み出しだけを持つ読み取り専用ソース
///
/// 各読み出しは独立しており、複数スレッドから同時に呼ばれても互いに干渉しない。
pub trait ByteSource: Send + Sync {
    /// 全体のバイト長
    fn size(&self) -> Result<u64, SourceError>;

    /// `offset` から最大 `length` バイトを読む
    ///
    /// EOFを超える分は切り詰められる（0バイトもあり得る）。
    fn read(&self, offset: u64, length: usize) -> Result<Vec<u8>, SourceError>;
}

/// ファイルのメタデータ（`/meta` の応答）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub size: u64,
    pub path: String,
}

impl Meta {
    /// ソースを一度だけstatしてメタデータを作る
    pub fn probe(source: &dyn ByteSource, path: impl Into<String>) -> Result<Self, SourceError> {
        Ok(Self {
            size: source.size()?,
            path: path.into(),
        })
    }
}

/// 読み出し可能なバイト数（EOFで切り詰め）
pub(crate) fn clamp_length(size: u64, offset: u64, length: usize) -> usize {
    let available = size.saturating_sub(offset);
    usize::try_from(available).map_or(length, |available| length.min(available))
}
