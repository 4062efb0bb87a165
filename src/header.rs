//! ACE header detection (version 1 fixed / version 2 variable) and NXS/JXS array
//! reads.
//!
//! Grounded on `acefile.cpp::getAceHeader`/`getNXS`/`getJXS`, cross-checked against
//! spec §4.5/§6.

use crate::arrays::{JxsArray, NxsArray};
use crate::error::{AceError, Result};
use crate::identifier::{is_szax, is_zaidx};
use crate::source::LineCursor;
use crate::tokens::parse_f64_then_truncate;

const NUM_HEADER_LINE: usize = 4;

/// The fixed-format portion of an ACE table: identifier, weight ratio, temperature,
/// and the two index arrays, all positioned immediately before the XSS payload.
#[derive(Debug, Clone)]
pub struct AceHeader {
    pub version: f64,
    pub table_id: String,
    pub awr: f64,
    /// `kT` as written in the header, in MeV.
    pub kt_mev: f64,
    pub nxs: NxsArray,
    pub jxs: JxsArray,
}

/// Parse `atof`-style: the longest valid floating-point prefix of `s`. ACE version
/// tokens are sometimes written `"2.0.0"`, which is not a strictly valid float but
/// whose leading `"2.0"` is; naive whole-token parsing would reject it.
fn leading_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut i = 0;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let mut seen_digit = false;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        seen_digit = true;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
            seen_digit = true;
        }
    }
    if !seen_digit {
        return None;
    }
    fast_float::parse::<f64, _>(&s[..i]).ok()
}

/// Parse the header starting at the cursor's current position (which must already
/// be positioned at the start of the target nuclide's first header line, i.e.
/// immediately after a successful [`crate::seeker::seek`]).
pub fn parse(cursor: &mut LineCursor) -> Result<AceHeader> {
    let header_line_start = cursor.current_line_start();
    let first_tok = cursor
        .next_token()
        .ok_or_else(|| AceError::UnsupportedAceVersion(f64::NAN))?;

    if is_zaidx(first_tok) {
        let awr = cursor.next_token().and_then(crate::tokens::parse_f64).unwrap_or(0.0);
        let kt_mev = cursor.next_token().and_then(crate::tokens::parse_f64).unwrap_or(0.0);
        // remaining token(s) on line 1 (date) are free-form, ignored.
        cursor.rewind_to(header_line_start);
        cursor.skip_lines(NUM_HEADER_LINE + 2);
        let nxs = read_nxs(cursor)?;
        let jxs = read_jxs(cursor)?;
        return Ok(AceHeader { version: 1.0, table_id: first_tok.to_string(), awr, kt_mev, nxs, jxs });
    }

    let version = leading_float(first_tok).ok_or(AceError::UnsupportedAceVersion(f64::NAN))?;
    if version < 2.0 {
        return Err(AceError::UnsupportedAceVersion(version));
    }

    let table_id = cursor
        .next_token()
        .ok_or(AceError::UnsupportedAceVersion(version))?
        .to_string();
    if !is_szax(&table_id) {
        return Err(AceError::UnsupportedAceVersion(version));
    }
    let awr = cursor.next_token().and_then(crate::tokens::parse_f64).unwrap_or(0.0);
    let kt_mev = cursor.next_token().and_then(crate::tokens::parse_f64).unwrap_or(0.0);
    let _t3 = cursor.next_token();
    let _t4 = cursor.next_token();
    let nc_tok = cursor.next_token().ok_or(AceError::UnsupportedAceVersion(version))?;
    let nc = parse_f64_then_truncate(nc_tok).ok_or(AceError::UnsupportedAceVersion(version))? as usize;

    cursor.rewind_to(header_line_start);
    cursor.skip_lines(NUM_HEADER_LINE + nc);
    let nxs = read_nxs(cursor)?;
    let jxs = read_jxs(cursor)?;
    Ok(AceHeader { version, table_id, awr, kt_mev, nxs, jxs })
}

fn read_ints(cursor: &mut LineCursor, n: usize) -> Result<Vec<i64>> {
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let tok = cursor.next_token().ok_or(AceError::OutOfXssRange { pos: out.len() + 1, len: out.len() })?;
        let v = parse_f64_then_truncate(tok)
            .ok_or(AceError::OutOfXssRange { pos: out.len() + 1, len: out.len() })?;
        out.push(v);
    }
    Ok(out)
}

fn read_nxs(cursor: &mut LineCursor) -> Result<NxsArray> {
    Ok(NxsArray::from_raw(read_ints(cursor, 16)?))
}

fn read_jxs(cursor: &mut LineCursor) -> Result<JxsArray> {
    Ok(JxsArray::from_raw(read_ints(cursor, 32)?))
}
