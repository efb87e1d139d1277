/// Internal SNES header layout (LoROM placement)
pub mod header {
    pub const HEADER_START: usize = 0x7FC0;
    pub const HEADER_END: usize = 0x8000;       // Minimum image length for a header

    // Offsets relative to HEADER_START
    pub const TITLE: usize = 0x00;
    pub const TITLE_LEN: usize = 0x15;          // 21 bytes
    pub const ROM_TYPE: usize = 0x15;
    pub const ROM_SIZE: usize = 0x16;
    pub const RAM_SIZE: usize = 0x17;
    pub const COUNTRY: usize = 0x18;
    pub const LICENSE: usize = 0x19;
    pub const VERSION: usize = 0x1A;
    pub const CHECKSUM: usize = 0x1C;
    pub const CHECKSUM_COMPLEMENT: usize = 0x1E;
    pub const RESET_VECTOR_OFFSET: usize = 0x3C;

    // Absolute offset of the emulation-mode reset vector
    pub const RESET_VECTOR: usize = 0x7FFC;
}
