//! Renders the defaults catalogue as Rust source, a hex dump or JSON.

use std::fmt::Write;
use std::path::Path;

use mq_binary::MQLONG;
use mq_binary::serde_helpers::serialize_hex;
use mq_binary::serde_helpers::serialize_struc_id;
use mq_default::DefaultEntry;
use mq_default::MQ_CLIENT_LEVEL;
use serde::Serialize;
use tracing::debug;
use tracing::info;

use crate::config_loader::OutputFormat;
use crate::errors::AppError;
use crate::errors::Result;

const BYTES_PER_LINE: usize = 16;

/// JSON view of one catalogue entry
#[derive(Debug, Serialize)]
pub struct EntrySummary<'a> {
    pub name: &'a str,
    pub structure: &'a str,
    #[serde(serialize_with = "serialize_struc_id")]
    pub struc_id: Option<[u8; 4]>,
    pub version: Option<MQLONG>,
    pub size: usize,
    #[serde(serialize_with = "serialize_hex")]
    pub bytes: &'a [u8],
}

impl<'a> From<&'a DefaultEntry> for EntrySummary<'a> {
    fn from(entry: &'a DefaultEntry) -> Self {
        Self {
            name: entry.name,
            structure: entry.structure,
            struc_id: entry.struc_id,
            version: entry.version,
            size: entry.size(),
            bytes: &entry.bytes,
        }
    }
}

pub fn header() -> String {
    format!("/* Generated for MQ client level {MQ_CLIENT_LEVEL} */")
}

pub fn render(entries: &[DefaultEntry], format: OutputFormat) -> Result<String> {
    debug!(count = entries.len(), ?format, "rendering defaults");
    match format {
        OutputFormat::Rust => Ok(render_rust(entries)),
        OutputFormat::Hex => Ok(render_hex(entries)),
        OutputFormat::Json => render_json(entries),
    }
}

/// `b'x'` for alphanumerics and blanks, hex otherwise
fn byte_literal(byte: u8) -> String {
    if byte.is_ascii_alphanumeric() || byte == b' ' { format!("b'{}'", byte as char) } else { format!("0x{byte:02x}") }
}

/// Crate path the generated constants name their types through
const TYPE_PATH: &str = "mq_default";

fn write_const(out: &mut String, entry: &DefaultEntry, indent: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{indent}pub const {}: {TYPE_PATH}::{} = unsafe {{", entry.name, entry.structure);
    let _ = writeln!(out, "{indent}    core::mem::transmute::<[u8; {}], _>([", entry.size());
    for line in entry.bytes.chunks(BYTES_PER_LINE) {
        let literals: Vec<String> = line.iter().map(|&b| byte_literal(b)).collect();
        let _ = writeln!(out, "{indent}        {},", literals.join(", "));
    }
    let _ = writeln!(out, "{indent}    ])");
    let _ = writeln!(out, "{indent}}};");
}

/// MQI constants at the top level, feature-gated sets in a module named
/// after their feature.
pub fn render_rust(entries: &[DefaultEntry]) -> String {
    let mut out = header();
    out.push('\n');

    for entry in entries.iter().filter(|e| e.feature.is_none()) {
        write_const(&mut out, entry, "");
    }

    let mut features: Vec<&str> = Vec::new();
    for feature in entries.iter().filter_map(|e| e.feature) {
        if !features.contains(&feature) {
            features.push(feature);
        }
    }

    for feature in features {
        let _ = writeln!(out);
        let _ = writeln!(out, "#[cfg(feature = \"{feature}\")]");
        let _ = writeln!(out, "pub mod {feature} {{");
        for entry in entries.iter().filter(|e| e.feature == Some(feature)) {
            write_const(&mut out, entry, "    ");
        }
        let _ = writeln!(out, "}}");
    }

    out
}

pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for (i, line) in bytes.chunks(BYTES_PER_LINE).enumerate() {
        let hex: Vec<String> = line.iter().map(|b| format!("{b:02x}")).collect();
        let ascii: String = line.iter().map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' }).collect();
        let _ = writeln!(out, "{:04x}: {:<47}  |{}|", i * BYTES_PER_LINE, hex.join(" "), ascii);
    }
    out
}

pub fn render_hex(entries: &[DefaultEntry]) -> String {
    let mut out = header();
    out.push('\n');

    for entry in entries {
        let _ = writeln!(out, "\n# {} ({}, {} bytes)", entry.name, entry.structure, entry.size());
        out.push_str(&hex_dump(&entry.bytes));
    }

    out
}

pub fn render_json(entries: &[DefaultEntry]) -> Result<String> {
    let summaries: Vec<EntrySummary> = entries.iter().map(EntrySummary::from).collect();
    Ok(serde_json::to_string_pretty(&summaries)?)
}

/// Writes `contents` to `path`, creating parent directories
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let io_error = |source| AppError::Io { path: path.display().to_string(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
    }
    std::fs::write(path, contents).map_err(io_error)?;

    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use mq_binary::MqStruct;
    use mq_default::MQMD;
    use mq_default::MQMD_DEFAULT;

    use super::*;

    fn md_entry() -> DefaultEntry {
        mq_default::find("MQMD_DEFAULT").unwrap()
    }

    #[test]
    fn test_byte_literal() {
        assert_eq!(byte_literal(b'M'), "b'M'");
        assert_eq!(byte_literal(b' '), "b' '");
        assert_eq!(byte_literal(b'*'), "0x2a");
        assert_eq!(byte_literal(0), "0x00");
    }

    #[test]
    fn test_render_rust_shape() {
        let out = render_rust(&[md_entry()]);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("/* Generated for MQ client level 9.4.0.0 */"));
        assert!(out.contains("pub const MQMD_DEFAULT: mq_default::MQMD = unsafe {"));
        assert!(!out.contains("pub mod "));
        assert!(out.contains("core::mem::transmute::<[u8; 364], _>(["));
        assert!(out.contains("        b'M', b'D', b' ', b' ', "));
        assert!(out.trim_end().ends_with("};"));

        let byte_count: usize = out
            .lines()
            .filter(|line| line.starts_with("        "))
            .map(|line| line.trim_end_matches(',').split(", ").count())
            .sum();
        assert_eq!(byte_count, MQMD::SIZE);
    }

    #[test]
    fn test_render_rust_groups_feature_sets() {
        let out = render_rust(&mq_default::entries());

        let pcf = out.find("#[cfg(feature = \"pcf\")]\npub mod pcf {\n").unwrap();
        let exits = out.find("#[cfg(feature = \"exits\")]\npub mod exits {\n").unwrap();
        let md = out.find("\npub const MQMD_DEFAULT: mq_default::MQMD = unsafe {").unwrap();
        assert!(md < pcf && pcf < exits);

        let cfh = out.find("\n    pub const MQCFH_DEFAULT: mq_default::MQCFH = unsafe {").unwrap();
        assert!(pcf < cfh && cfh < exits);
        assert!(out[exits..].contains("\n    pub const MQWXP4_DEFAULT: mq_default::MQWXP = unsafe {"));
        assert!(out[exits..].contains("\n            b'I', b'E', b'P', b' ', "));
        assert!(out.ends_with("    };\n}\n"));
        assert_eq!(out.matches("pub mod ").count(), 2);
    }

    #[test]
    fn test_hex_dump_lines() {
        let dump = hex_dump(&MQMD_DEFAULT.as_bytes()[..20]);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0000: 4d 44 20 20 01 00 00 00") || lines[0].starts_with("0000: 4d 44 20 20 00 00 00 01"));
        assert!(lines[0].ends_with("|"));
        assert!(lines[1].starts_with("0010: "));
    }

    #[test]
    fn test_render_hex_sections() {
        let entries = mq_default::entries();
        let out = render_hex(&entries);
        assert_eq!(out.matches("\n# ").count(), entries.len());
        assert!(out.contains("# MQCD_DEFAULT (MQCD, "));
    }

    #[test]
    fn test_render_json_records() {
        let out = render(&[md_entry()], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let record = &value[0];
        assert_eq!(record["name"], "MQMD_DEFAULT");
        assert_eq!(record["structure"], "MQMD");
        assert_eq!(record["struc_id"], "MD  ");
        assert_eq!(record["version"], 1);
        assert_eq!(record["size"], 364);
        assert!(record["bytes"].as_str().unwrap().starts_with("4d442020"));
        assert_eq!(record["bytes"].as_str().unwrap().len(), 728);
    }

    #[test]
    fn test_write_output_creates_parent() {
        let dir = std::env::temp_dir().join(format!("mq_defaultgen_{}", std::process::id()));
        let path = dir.join("nested").join("defaults.rs");
        write_output(&path, "// empty\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "// empty\n");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
