//! Plain text report

use crate::models::RomAnalysis;

const RULE_WIDTH: usize = 50;

/// Render the full report, sections in fixed order
pub fn generate(analysis: &RomAnalysis) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&format!("Loaded ROM: {} ({} bytes)\n", analysis.source, analysis.size));
    out.push_str(&format!("Analyzing ROM: {}\n", analysis.source));
    out.push_str(&format!("SHA-256: {}\n", analysis.sha256));
    out.push_str(&rule);
    out.push('\n');

    header_section(&mut out, analysis);
    opcode_section(&mut out, analysis);
    string_section(&mut out, analysis);
    test_vector_section(&mut out, analysis);
    memory_map_section(&mut out, analysis);
    entry_point_section(&mut out, analysis);

    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str("Analysis complete!\n");
    out
}

fn header_section(out: &mut String, analysis: &RomAnalysis) {
    out.push_str("\n=== SNES ROM Header Analysis ===\n");

    let header = match &analysis.header {
        Some(header) => header,
        None => {
            let reason = analysis
                .header_diagnostic
                .as_deref()
                .unwrap_or("header not decoded");
            out.push_str(&format!("Error: {}\n", reason));
            return;
        }
    };

    out.push_str(&format!("Game Title: {}\n", header.title));
    out.push_str(&format!("ROM Type: {:02X}\n", header.rom_type));
    out.push_str(&format!("ROM Size: {:02X}\n", header.rom_size));
    out.push_str(&format!("RAM Size: {:02X}\n", header.ram_size));
    out.push_str(&format!("Country: {:02X} ({})\n", header.country, header.country_name()));
    out.push_str(&format!("License: {:02X}\n", header.license));
    out.push_str(&format!("Version: {:02X}\n", header.version));
    out.push_str(&format!("Checksum: {:04X}\n", header.checksum));
    out.push_str(&format!("Checksum Complement: {:04X}\n", header.checksum_complement));
    out.push_str(&format!(
        "Checksum Pair: {}\n",
        if header.checksum_valid() { "valid" } else { "invalid" }
    ));
    out.push_str(&format!("Reset Vector: 0x{:04X}\n", header.reset_vector));
}

fn opcode_section(out: &mut String, analysis: &RomAnalysis) {
    out.push_str("\n=== Code Pattern Analysis ===\n");
    out.push_str("Most common opcodes:\n");
    for entry in analysis.opcodes.iter().take(analysis.config.top_opcodes) {
        out.push_str(&format!(
            "  0x{:02X} ({}): {} occurrences\n",
            entry.opcode, entry.mnemonic, entry.count
        ));
    }
}

fn string_section(out: &mut String, analysis: &RomAnalysis) {
    out.push_str(&format!(
        "\n=== ASCII Strings (min length {}) ===\n",
        analysis.config.min_string_length
    ));
    for record in &analysis.strings {
        out.push_str(&format!("0x{:06X}: {}\n", record.offset, quote(&record.text)));
    }
}

/// Quote a printable ASCII string for the report
///
/// Single quotes by default; double quotes when the text holds a `'` but
/// no `"`. Backslashes and the active quote character are escaped.
fn quote(text: &str) -> String {
    let delimiter = if text.contains('\'') && !text.contains('"') { '"' } else { '\'' };
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push(delimiter);
    for c in text.chars() {
        if c == '\\' || c == delimiter {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push(delimiter);
    quoted
}

fn test_vector_section(out: &mut String, analysis: &RomAnalysis) {
    out.push_str("\n=== Test Vector Analysis ===\n");
    for hit in &analysis.patterns.hits {
        out.push_str(&format!("Pattern {}: {} occurrences\n", hit.pattern.hex(), hit.count));
    }
    out.push_str(&format!(
        "Sequential 4-byte patterns: {}\n",
        analysis.patterns.sequential_windows
    ));
}

fn memory_map_section(out: &mut String, analysis: &RomAnalysis) {
    out.push_str("\n=== Memory Map Analysis ===\n");
    out.push_str("Memory sections:\n");
    for region in &analysis.regions {
        out.push_str(&format!("  0x{:06X}-0x{:06X}: {}\n", region.start, region.end, region.kind));
    }
}

fn entry_point_section(out: &mut String, analysis: &RomAnalysis) {
    out.push_str("\n=== Entry Point Analysis ===\n");
    out.push_str("Potential entry points:\n");
    for entry in analysis.entry_points.iter().take(analysis.config.max_entry_points) {
        out.push_str(&format!("  {}: 0x{:04X}\n", entry.origin, entry.target));
    }
}
