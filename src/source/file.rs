use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use super::{ByteSource, SourceError, clamp_length};

/// 位置指定読み出しでファイルを参照するバイトソース
///
/// ファイル位置（シーク位置）を共有しないため、並行する範囲読み出しが互いに壊れない。
#[derive(Debug)]
pub struct FileSource {
    /// ファイルパス
    path: PathBuf,
    /// 読み取り専用ハンドル
    file: File,
}

impl FileSource {
    /// ファイルを読み取り専用で開く
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let path = path.into();
        let file = File::open(&path).map_err(|source| SourceError::Open {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, file })
    }

    /// ファイルパスを取得
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileSource {
    fn size(&self) -> Result<u64, SourceError> {
        Ok(self.file.metadata()?.len())
    }

    fn read(&self, offset: u64, length: usize) -> Result<Vec<u8>, SourceError> {
        let length = clamp_length(self.size()?, offset, length);
        let mut buf = vec![0u8; length];
        let mut filled = 0;

        // 短い読み出しはEOFに達するまで繰り返す
        while filled < length {
            match read_at(&self.file, &mut buf[filled..], offset + filled as u64) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        buf.truncate(filled);
        Ok(buf)
    }
}

#[cfg(unix)]
fn read_at(file: &File, buf: &mut [u8], offset: u64) -> io::Result<usize> {
    use std::os::unix::fs::FileExt;
    file.read_at(buf, offset)
}

#[cfg(windows)]
fn read_at(file: &File, buf: &mut [u8], offset: u64) -> io::Result<usize> {
    use std::os::windows::fs::FileExt;
    file.seek_read(buf, offset)
}
