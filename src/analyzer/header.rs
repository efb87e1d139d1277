//! SNES header decoding

use log::debug;

use crate::constants::header::header;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::models::{RomHeader, RomImage};

/// Decode the header block at 0x7FC0
///
/// Fails with [`AnalyzerError::HeaderTooSmall`] when the image is shorter
/// than 0x8000 bytes. The caller decides whether that is fatal.
pub fn decode_header(rom: &RomImage) -> AnalyzerResult<RomHeader> {
    let data = rom.bytes();
    if data.len() < header::HEADER_END {
        debug!("ROM too small for SNES header: {} bytes", data.len());
        return Err(AnalyzerError::HeaderTooSmall { len: data.len() });
    }

    let block = &data[header::HEADER_START..header::HEADER_END];
    let le16 = |offset: usize| u16::from_le_bytes([block[offset], block[offset + 1]]);

    let header = RomHeader {
        title: decode_title(&block[header::TITLE..header::TITLE + header::TITLE_LEN]),
        rom_type: block[header::ROM_TYPE],
        rom_size: block[header::ROM_SIZE],
        ram_size: block[header::RAM_SIZE],
        country: block[header::COUNTRY],
        license: block[header::LICENSE],
        version: block[header::VERSION],
        checksum: le16(header::CHECKSUM),
        checksum_complement: le16(header::CHECKSUM_COMPLEMENT),
        reset_vector: le16(header::RESET_VECTOR_OFFSET),
    };

    debug!("Decoded header: {:?}", header);
    Ok(header)
}

/// ASCII-decode a title, dropping non-ASCII bytes, then trim whitespace
///
/// The file, group, record and unit separators (0x1C..=0x1F) count as
/// whitespace here, so titles padded with them trim like space-padded ones.
fn decode_title(bytes: &[u8]) -> String {
    let ascii: String = bytes
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect();
    ascii
        .trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
        .to_string()
}
