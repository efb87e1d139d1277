#[cfg(test)]
mod tests {
    use super::super::*;

    fn header_with(checksum: u16, checksum_complement: u16, country: u8) -> RomHeader {
        RomHeader {
            title: "CPU TEST".to_string(),
            rom_type: 0x20,
            rom_size: 0x08,
            ram_size: 0x00,
            country,
            license: 0x01,
            version: 0x00,
            checksum,
            checksum_complement,
            reset_vector: 0x8000,
        }
    }

    #[test]
    fn test_checksum_valid() {
        assert!(header_with(0x1234, 0xEDCB, 0x01).checksum_valid());
        assert!(!header_with(0x1234, 0x1234, 0x01).checksum_valid());
    }

    #[test]
    fn test_country_name() {
        assert_eq!(header_with(0, 0, 0x00).country_name(), "Japan (NTSC)");
        assert_eq!(header_with(0, 0, 0x01).country_name(), "USA / Canada (NTSC)");
        assert_eq!(header_with(0, 0, 0x7F).country_name(), "Unknown");
    }

    #[test]
    fn test_rom_image_read_u16_le() {
        let image = RomImage::new(vec![0x34, 0x12, 0xFF]);
        assert_eq!(image.len(), 3);
        assert_eq!(image.read_u16_le(0), Some(0x1234));
        assert_eq!(image.read_u16_le(1), Some(0xFF12));
        assert_eq!(image.read_u16_le(2), None);
        assert_eq!(image.read_u16_le(usize::MAX), None);
    }

    #[test]
    fn test_test_pattern_hex() {
        assert_eq!(TestPattern::AllZero.hex(), "00000000");
        assert_eq!(TestPattern::AllOne.hex(), "ffffffff");
        assert_eq!(TestPattern::AlternatingAA.hex(), "aaaaaaaa");
        assert_eq!(TestPattern::Alternating55.hex(), "55555555");
    }

    #[test]
    fn test_entry_point_origin_display() {
        assert_eq!(EntryPointOrigin::ResetVector.to_string(), "Reset Vector");
        assert_eq!(EntryPointOrigin::Jump { offset: 10 }.to_string(), "JMP at 0x00000A");
        assert_eq!(EntryPointOrigin::Call { offset: 0x1234 }.to_string(), "JSR at 0x001234");
    }

    #[test]
    fn test_region_kind_labels() {
        assert_eq!(RegionKind::ZeroFilled.to_string(), "Zero-filled");
        assert_eq!(RegionKind::FFFilled.to_string(), "FF-filled");
        assert_eq!(RegionKind::TextData.to_string(), "Text/Data");
        assert_eq!(RegionKind::Code.to_string(), "Code");
    }
}
