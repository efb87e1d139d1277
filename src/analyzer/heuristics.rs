//! Documentation of heuristics and known imprecision in ROM analysis
//!
//! None of the passes decode instructions. Their results are statistical
//! hints about the image, and the inaccuracies below are expected output,
//! not errors.
//!
//! # Opcode Sampling
//!
//! The frequency report reads the byte at every even offset and treats it
//! as an opcode. 65816 instructions are one to four bytes long, so real
//! instruction boundaries fall on odd offsets about as often as on even
//! ones. The ranking is a fingerprint of the image, useful for comparing
//! ROMs built by the same toolchain, not a measurement of executed code.
//!
//! # Entry Point Scanning
//!
//! Every byte equal to `JMP abs` (0x4C) or `JSR abs` (0x20) becomes a
//! candidate, including bytes inside graphics, text (0x20 is ASCII space)
//! and other instructions' operands. Targets are 16-bit bank-relative
//! addresses and are reported as read, with no bank or mapping applied.
//! Candidates are not deduplicated.
//!
//! # Memory Map Classification
//!
//! Blocks are classified by byte statistics alone. `Code` is the fallback
//! for anything that is not mostly filler or text, so compressed data,
//! tiles and tables are reported as `Code` too.
//!
//! # Header Placement
//!
//! The header is always read at the LoROM location 0x7FC0. HiROM and
//! copier-prefixed images decode to whatever bytes sit there.
