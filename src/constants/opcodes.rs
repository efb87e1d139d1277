/// 65816 opcodes recognized by the frequency report
pub mod opcodes {
    use once_cell::sync::Lazy;
    use std::collections::HashMap;

    // Load / store
    pub const LDA_IMM: u8 = 0xA9;     // Load accumulator immediate
    pub const LDA_DP: u8 = 0xA5;      // Load accumulator direct page
    pub const LDA_ABS: u8 = 0xAD;     // Load accumulator absolute
    pub const STA_DP: u8 = 0x85;      // Store accumulator direct page
    pub const STA_ABS: u8 = 0x8D;     // Store accumulator absolute

    // Register transfers
    pub const TAX: u8 = 0xAA;
    pub const TXA: u8 = 0x8A;
    pub const TAY: u8 = 0xA8;
    pub const TYA: u8 = 0x98;
    pub const TSX: u8 = 0xBA;
    pub const TXS: u8 = 0x9A;

    // Stack
    pub const PHA: u8 = 0x48;
    pub const PLA: u8 = 0x68;
    pub const PHP: u8 = 0x08;
    pub const PLP: u8 = 0x28;

    // Control flow
    pub const JMP_ABS: u8 = 0x4C;     // Jump absolute
    pub const JMP_IND: u8 = 0x6C;     // Jump absolute indirect
    pub const JSR_ABS: u8 = 0x20;     // Jump to subroutine absolute
    pub const RTS: u8 = 0x60;
    pub const RTI: u8 = 0x40;
    pub const BRK: u8 = 0x00;
    pub const NOP: u8 = 0xEA;

    // Flags
    pub const SEI: u8 = 0x78;
    pub const CLI: u8 = 0x58;
    pub const SED: u8 = 0xF8;
    pub const CLD: u8 = 0xD8;
    pub const SEC: u8 = 0x38;
    pub const CLC: u8 = 0x18;
    pub const CLV: u8 = 0xB8;

    // Increment / decrement
    pub const INX: u8 = 0xE8;
    pub const INY: u8 = 0xC8;
    pub const DEX: u8 = 0xCA;
    pub const DEY: u8 = 0x88;

    /// Mnemonics for the opcodes above
    pub static MNEMONICS: Lazy<HashMap<u8, &'static str>> = Lazy::new(|| {
        HashMap::from([
            (LDA_IMM, "LDA #imm"),
            (LDA_DP, "LDA dp"),
            (LDA_ABS, "LDA abs"),
            (STA_DP, "STA dp"),
            (STA_ABS, "STA abs"),
            (TAX, "TAX"),
            (TXA, "TXA"),
            (TAY, "TAY"),
            (TYA, "TYA"),
            (PHA, "PHA"),
            (PLA, "PLA"),
            (PLP, "PLP"),
            (PHP, "PHP"),
            (JMP_ABS, "JMP abs"),
            (JMP_IND, "JMP (abs)"),
            (JSR_ABS, "JSR abs"),
            (RTS, "RTS"),
            (RTI, "RTI"),
            (BRK, "BRK"),
            (NOP, "NOP"),
            (SEI, "SEI"),
            (CLI, "CLI"),
            (SED, "SED"),
            (CLD, "CLD"),
            (SEC, "SEC"),
            (CLC, "CLC"),
            (CLV, "CLV"),
            (TSX, "TSX"),
            (TXS, "TXS"),
            (INX, "INX"),
            (INY, "INY"),
            (DEX, "DEX"),
            (DEY, "DEY"),
        ])
    });

    /// Mnemonic for an opcode byte, or "Unknown"
    pub fn mnemonic(opcode: u8) -> &'static str {
        MNEMONICS.get(&opcode).copied().unwrap_or("Unknown")
    }
}
