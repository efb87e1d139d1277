//! Decoded SNES cartridge header

use serde::{Serialize, Deserialize};

/// Header fields decoded from bytes [0x7FC0, 0x8000)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RomHeader {
    /// Game title (ASCII, trimmed)
    pub title: String,
    /// ROM type / map mode code
    pub rom_type: u8,
    /// ROM size code
    pub rom_size: u8,
    /// RAM size code
    pub ram_size: u8,
    /// Country code
    pub country: u8,
    /// License code
    pub license: u8,
    /// Version byte
    pub version: u8,
    /// Checksum
    pub checksum: u16,
    /// Checksum complement
    pub checksum_complement: u16,
    /// Emulation-mode reset vector
    pub reset_vector: u16,
}

impl RomHeader {
    /// Human-readable name of the country code
    pub fn country_name(&self) -> &'static str {
        country_name(self.country)
    }

    /// Whether checksum and complement are bitwise inverses
    pub fn checksum_valid(&self) -> bool {
        self.checksum ^ self.checksum_complement == 0xFFFF
    }
}

/// Map a header country byte to its region name.
pub fn country_name(code: u8) -> &'static str {
    match code {
        0x00 => "Japan (NTSC)",
        0x01 => "USA / Canada (NTSC)",
        0x02 => "Europe / Oceania / Asia (PAL)",
        0x03 => "Sweden / Scandinavia (PAL)",
        0x04 => "Finland (PAL)",
        0x05 => "Denmark (PAL)",
        0x06 => "France (PAL)",
        0x07 => "Netherlands (PAL)",
        0x08 => "Spain (PAL)",
        0x09 => "Germany (PAL)",
        0x0A => "Italy (PAL)",
        0x0B => "China (PAL)",
        0x0C => "Indonesia (PAL)",
        0x0D => "South Korea (NTSC)",
        0x0E => "Common / International",
        0x0F => "Canada (NTSC)",
        0x10 => "Brazil (NTSC)",
        0x11 => "Australia (PAL)",
        _ => "Unknown",
    }
}
