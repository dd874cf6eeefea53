//! In-memory byte source.

use super::{ByteSource, SourceError, clamp_length};

/// メモリ上のバイト列をそのまま返すソース
///
/// テストや、ファイルを介さずにビューアを組み込む場合に使う。
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    data: Vec<u8>,
}

impl MemorySource {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl ByteSource for MemorySource {
    fn size(&self) -> Result<u64, SourceError> {
        Ok(self.data.len() as u64)
    }

    fn read(&self, offset: u64, length: usize) -> Result<Vec<u8>, SourceError> {
        let length = clamp_length(self.data.len() as u64, offset, length);
        if length == 0 {
            return Ok(Vec::new());
        }
        let start = offset as usize;
        Ok(self.data[start..start + length].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_range() {
        let source = MemorySource::new((0..32).collect());
        assert_eq!(source.read(30, 8).unwrap(), vec![30, 31]);
        assert_eq!(source.read(0, 2).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_read_past_end() {
        let source = MemorySource::new(vec![1, 2, 3]);
        assert!(source.read(3, 1).unwrap().is_empty());
        assert!(source.read(u64::MAX, 1).unwrap().is_empty());
    }

    #[test]
    fn test_eof_scenario() {
        let source = MemorySource::new(vec![7; 400]);
        assert_eq!(source.read(395, 384).unwrap().len(), 5);
    }
}
