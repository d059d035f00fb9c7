// Font name table extraction
//
// Opens a font file and pulls the full name (name ID 4) and family name
// (name ID 1) out of its name table. Binary table parsing is delegated
// to ttf-parser; this module only decodes the two string records.

use std::path::Path;

use ttf_parser::{name_id, Face};
use tracing::debug;

use crate::error::FontResult;

/// The two name table records the toolkit cares about
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontNames {
    /// Full font name (name ID 4), empty if no record exists
    pub full_name: String,
    /// Font family name (name ID 1), empty if no record exists
    pub family: String,
}

impl FontNames {
    /// Extract names from a parsed face.
    ///
    /// Records are scanned in table order and the first decodable match
    /// per name ID wins. A font without a matching record leaves the
    /// field empty rather than failing.
    pub fn from_face(face: &Face) -> Self {
        let mut names = Self::default();
        for record in face.names() {
            match record.name_id {
                name_id::FULL_NAME if names.full_name.is_empty() => {
                    names.full_name = decode_record(record.name);
                }
                name_id::FAMILY if names.family.is_empty() => {
                    names.family = decode_record(record.name);
                }
                _ => {}
            }
            if !names.full_name.is_empty() && !names.family.is_empty() {
                break;
            }
        }
        names
    }
}

/// Read the name records of face 0 in a font file
pub fn read_names(path: impl AsRef<Path>) -> FontResult<FontNames> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let face = Face::parse(&data, 0)?;
    let names = FontNames::from_face(&face);
    debug!(
        "Read font names from {}: family={:?}",
        path.display(),
        names.family
    );
    Ok(names)
}

/// Family name of face 0 in a font file, empty if the record is missing
pub fn family_name(path: impl AsRef<Path>) -> FontResult<String> {
    Ok(read_names(path)?.family)
}

// Name records carry no reliable encoding tag across platforms; a NUL
// byte means the record is UTF-16BE, anything else is taken as Latin-1.
fn decode_record(raw: &[u8]) -> String {
    if raw.contains(&0) {
        let units: Vec<u16> = raw
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        raw.iter().map(|&b| b as char).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf16_be_record() {
        let raw = [0x00, 0x48, 0x00, 0x65, 0x00, 0x6C, 0x00, 0x76, 0x00, 0x65];
        assert_eq!(decode_record(&raw), "Helve");
    }

    #[test]
    fn test_decode_latin1_record() {
        assert_eq!(decode_record(b"Helvetica"), "Helvetica");
        // Latin-1 high bytes map straight to the matching code points
        assert_eq!(decode_record(&[0x43, 0x61, 0x66, 0xE9]), "Caf\u{e9}");
    }

    #[test]
    fn test_decode_empty_record() {
        assert_eq!(decode_record(&[]), "");
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(family_name("/nonexistent/font.ttf").is_err());
    }
}
