//! Raster images embedded as slide media.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Image formats that can be stored under `ppt/media`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
}

impl ImageFormat {
    /// Detect format from file magic bytes.
    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(Self::Png);
        }
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Self::Jpeg);
        }
        if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            return Some(Self::Gif);
        }
        if bytes.starts_with(b"BM") && bytes.len() >= 14 {
            return Some(Self::Bmp);
        }
        None
    }

    /// File extension used for the media part.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
        }
    }

    /// MIME type registered in `[Content_Types].xml`.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
        }
    }
}

/// Image bytes together with their detected format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
}

impl ImageData {
    /// Wrap raw bytes, rejecting anything that is not a known image format.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let format = ImageFormat::from_magic(&bytes)
            .ok_or_else(|| Error::ImageError("unrecognized image header".to_string()))?;
        Ok(Self { bytes, format })
    }

    /// Read an image from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes)
            .map_err(|e| Error::ImageError(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_from_magic() {
        assert_eq!(ImageFormat::from_magic(&PNG_HEADER), Some(ImageFormat::Png));
        assert_eq!(
            ImageFormat::from_magic(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(ImageFormat::from_magic(b"GIF89a...."), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::from_magic(b"not an image"), None);
        assert_eq!(ImageFormat::from_magic(&[]), None);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ImageData::load("/definitely/not/here/bg.png");
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_load_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bg.png");
        std::fs::write(&path, b"plain text").unwrap();
        assert!(matches!(ImageData::load(&path), Err(Error::ImageError(_))));
    }

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bg.png");
        std::fs::write(&path, PNG_HEADER).unwrap();
        let image = ImageData::load(&path).unwrap();
        assert_eq!(image.format, ImageFormat::Png);
        assert_eq!(image.format.extension(), "png");
        assert_eq!(image.bytes.len(), 8);
    }
}
