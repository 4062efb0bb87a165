//! XSDIR directory-file reader: `DATAPATH`, atomic-weight-ratio table, and the
//! per-nuclide table descriptors.
//!
//! Grounded on `xsdir.cpp`/`xsdir.hpp`: `XsInfo`, `XsDir`, `registerXsInfo`
//! (grouping entries by bare ZAID in file-appearance order), `getNuclideInfo`.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{AceError, Result};
use crate::identifier::Nty;
use crate::source::AceSource;
use crate::tokens::parse_f64;

/// One table descriptor line from the `directory` section of an XSDIR file.
#[derive(Debug, Clone, PartialEq)]
pub struct XsInfo {
    pub table_id: String,
    pub awr: f64,
    pub filename: String,
    pub access_route: String,
    pub filetype: i32,
    pub address: i64,
    pub table_length: i64,
    pub record_length: i64,
    pub entries_per_record: i64,
    pub temperature_mev: f64,
    pub has_ptable: bool,
}

/// A parsed XSDIR file.
#[derive(Debug, Clone, Default)]
pub struct XsDir {
    pub datapath: Option<String>,
    pub awr_map: HashMap<String, f64>,
    /// Keyed by the bare ZAID (the substring before the first `.`), preserving
    /// file-appearance order within each bucket so a suffix-less lookup resolves
    /// to the first matching entry.
    pub xs_info_map: HashMap<String, Vec<XsInfo>>,
}

fn bare_zaid(table_id: &str) -> &str {
    table_id.split('.').next().unwrap_or(table_id)
}

impl XsDir {
    pub fn parse(path: impl AsRef<Path>) -> Result<Self> {
        let source = AceSource::open(path)?;
        Self::parse_str(source.text())
    }

    pub fn parse_str(text: &str) -> Result<Self> {
        let mut lines = text.lines().peekable();

        let mut datapath = None;
        if let Some(first) = lines.peek() {
            let trimmed = first.trim_start();
            if trimmed.to_ascii_lowercase().starts_with("datapath") {
                let after_eq = trimmed.splitn(2, '=').nth(1).unwrap_or("").trim();
                datapath = Some(after_eq.to_string());
                lines.next();
            }
        }
        if datapath.is_none() {
            datapath = std::env::var("DATAPATH").ok();
        }

        // The next non-blank line (after the optional DATAPATH line) must be
        // "atomic weight ratios" exactly; anything else is a hard format
        // violation (xsdir.cpp throws immediately on a mismatch rather than
        // scanning forward for a match).
        loop {
            match lines.next() {
                None => return Err(AceError::MissingDirectorySection),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) if line.trim().to_ascii_lowercase() == "atomic weight ratios" => break,
                Some(line) => return Err(AceError::MalformedDirectoryEntry { line: line.to_string() }),
            }
        }

        let mut awr_map = HashMap::new();
        let mut remainder_tokens: Vec<&str> = Vec::new();
        loop {
            let Some(line) = lines.peek().copied() else {
                return Err(AceError::MissingDirectorySection);
            };
            if line.trim().to_ascii_lowercase() == "directory" {
                lines.next();
                break;
            }
            let consumed_line = lines.next().unwrap();
            for tok in consumed_line.split_ascii_whitespace() {
                remainder_tokens.push(tok);
            }
            // pair up whatever whole pairs we can from remainder_tokens; a
            // (zaid, awr) pair ends when a token can't start a new zaid/number.
            while remainder_tokens.len() >= 2 {
                let zaid = remainder_tokens[0];
                let awr_tok = remainder_tokens[1];
                if !starts_numeric(zaid) || !starts_numeric(awr_tok) {
                    break;
                }
                if let Some(awr) = parse_f64(awr_tok) {
                    awr_map.insert(zaid.to_string(), awr);
                }
                remainder_tokens.drain(0..2);
            }
        }

        let mut xs_info_map: HashMap<String, Vec<XsInfo>> = HashMap::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_ascii_whitespace().collect();
            let info = parse_descriptor(&fields, line)?;
            xs_info_map.entry(bare_zaid(&info.table_id).to_string()).or_default().push(info);
        }

        Ok(XsDir { datapath, awr_map, xs_info_map })
    }

    /// Look up a directory entry by identifier and (for suffix-less ids) NTY.
    pub fn get(&self, id: &str, nty: Nty) -> Result<&XsInfo> {
        if let Some(dot) = id.find('.') {
            let _ = dot;
            let bare = bare_zaid(id);
            return self
                .xs_info_map
                .get(bare)
                .and_then(|entries| entries.iter().find(|e| e.table_id == id))
                .ok_or_else(|| AceError::NotFound { id: id.to_string(), nty });
        }
        let entries = self
            .xs_info_map
            .get(id)
            .ok_or_else(|| AceError::NotFound { id: id.to_string(), nty })?;
        entries
            .iter()
            .find(|e| {
                crate::identifier::class_of(&e.table_id)
                    .ok()
                    .and_then(|class| crate::identifier::nty_of(&e.table_id).ok().map(|n| (n, class)))
                    .map(|(n, _)| n == nty)
                    .unwrap_or(false)
            })
            .ok_or_else(|| AceError::NotFound { id: id.to_string(), nty })
    }
}

fn starts_numeric(tok: &str) -> bool {
    tok.bytes().next().map(|b| b.is_ascii_digit() || b == b'.' || b == b'-' || b == b'+').unwrap_or(false)
}

fn parse_descriptor(fields: &[&str], line: &str) -> Result<XsInfo> {
    match fields.len() {
        10 | 11 => {
            let has_ptable = fields.len() == 11 && fields[10].eq_ignore_ascii_case("ptable");
            Ok(XsInfo {
                table_id: fields[0].to_string(),
                awr: parse_f64(fields[1]).ok_or_else(|| AceError::MalformedDirectoryEntry { line: line.to_string() })?,
                filename: fields[2].to_string(),
                access_route: fields[3].to_string(),
                filetype: fields[4].parse().map_err(|_| AceError::MalformedDirectoryEntry { line: line.to_string() })?,
                address: fields[5].parse().map_err(|_| AceError::MalformedDirectoryEntry { line: line.to_string() })?,
                table_length: fields[6].parse().map_err(|_| AceError::MalformedDirectoryEntry { line: line.to_string() })?,
                record_length: fields[7].parse().map_err(|_| AceError::MalformedDirectoryEntry { line: line.to_string() })?,
                entries_per_record: fields[8].parse().map_err(|_| AceError::MalformedDirectoryEntry { line: line.to_string() })?,
                temperature_mev: parse_f64(fields[9]).ok_or_else(|| AceError::MalformedDirectoryEntry { line: line.to_string() })?,
                has_ptable,
            })
        }
        7 => Ok(XsInfo {
            table_id: fields[0].to_string(),
            awr: parse_f64(fields[1]).ok_or_else(|| AceError::MalformedDirectoryEntry { line: line.to_string() })?,
            filename: fields[2].to_string(),
            access_route: fields[3].to_string(),
            filetype: fields[4].parse().map_err(|_| AceError::MalformedDirectoryEntry { line: line.to_string() })?,
            address: fields[5].parse().map_err(|_| AceError::MalformedDirectoryEntry { line: line.to_string() })?,
            table_length: fields[6].parse().map_err(|_| AceError::MalformedDirectoryEntry { line: line.to_string() })?,
            record_length: 0,
            entries_per_record: 0,
            temperature_mev: 0.0,
            has_ptable: false,
        }),
        _ => Err(AceError::MalformedDirectoryEntry { line: line.to_string() }),
    }
}
