//! Archive container access
//!
//! A template document is a zip archive of XML parts. This module opens the
//! archive from an in-memory buffer and hands out raw part bytes without
//! interpreting their content. Absent optional parts are not an error.

use std::io::{Cursor, Read};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::error::ExtractError;

/// Main document body, required in every valid template
pub const BODY_PART: &str = "word/document.xml";

/// Header slots, optional
pub const HEADER_PARTS: [&str; 3] = [
    "word/header1.xml",
    "word/header2.xml",
    "word/header3.xml",
];

/// Footer slots, optional
pub const FOOTER_PARTS: [&str; 3] = [
    "word/footer1.xml",
    "word/footer2.xml",
    "word/footer3.xml",
];

/// An opened template archive
pub struct TemplateArchive<'a> {
    zip: ZipArchive<Cursor<&'a [u8]>>,
}

impl<'a> TemplateArchive<'a> {
    /// Open a template document from its complete byte buffer
    ///
    /// # Errors
    /// Returns `ExtractError::InvalidArchive` if the buffer is not a valid
    /// zip container (truncated, corrupt, or a different format entirely).
    pub fn open(bytes: &'a [u8]) -> Result<Self, ExtractError> {
        let zip = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ExtractError::InvalidArchive(e.to_string()))?;
        tracing::debug!("opened template archive with {} entries", zip.len());
        Ok(Self { zip })
    }

    /// Read one named part, or `None` if the archive has no such entry
    pub fn part(&mut self, path: &str) -> Result<Option<Vec<u8>>, ExtractError> {
        match self.zip.by_name(path) {
            Ok(mut entry) => {
                let mut buf = Vec::with_capacity(entry.size() as usize);
                entry
                    .read_to_end(&mut buf)
                    .map_err(|e| ExtractError::InvalidArchive(e.to_string()))?;
                Ok(Some(buf))
            }
            Err(ZipError::FileNotFound) => Ok(None),
            Err(e) => Err(ExtractError::InvalidArchive(e.to_string())),
        }
    }
}
