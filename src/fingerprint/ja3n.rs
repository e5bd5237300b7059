//! JA3N fingerprint construction.
//!
//! JA3N is JA3 with one change: the extension list is sorted before
//! rendering, which makes the fingerprint stable across clients that send
//! the same extensions in a different order. Everything else (field
//! order, GREASE filtering, comma/dash joining, MD5 of the resulting
//! string) matches plain JA3.

use thiserror::Error;

use super::grease::is_grease;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FingerprintError {
    #[error("no fingerprintable fields: ciphers, extensions, curves and point formats were all empty")]
    Empty,
}

/// Borrowed view over the fields a JA3N string is built from. `extensions`
/// is expected to already be sorted ascending; the caller (the preread
/// controller, on reaching `Ready`) sorts once at render time rather than
/// keeping the list sorted during parsing.
pub struct Ja3Fields<'a> {
    pub version: u16,
    pub ciphers: &'a [u16],
    pub extensions: &'a [u16],
    pub curves: &'a [u16],
    pub point_formats: &'a [u8],
}

/// Builds the `version,ciphers,extensions,curves,point_formats` string.
///
/// GREASE values are dropped from ciphers, extensions and curves but never
/// from point formats: there is no GREASE point format. Returns
/// [`FingerprintError::Empty`] when all four lists are empty, matching the
/// "not found" behavior `PrereadVariables::ja3n` surfaces to callers.
pub fn build(fields: Ja3Fields<'_>) -> Result<String, FingerprintError> {
    if fields.ciphers.is_empty()
        && fields.extensions.is_empty()
        && fields.curves.is_empty()
        && fields.point_formats.is_empty()
    {
        return Err(FingerprintError::Empty);
    }

    let mut out = String::new();
    out.push_str(&fields.version.to_string());
    out.push(',');
    join_filtered(&mut out, fields.ciphers);
    out.push(',');
    join_filtered(&mut out, fields.extensions);
    out.push(',');
    join_filtered(&mut out, fields.curves);
    out.push(',');
    join_all(&mut out, fields.point_formats);

    Ok(out)
}

/// Hex MD5 digest of a rendered fingerprint string (`ssl_preread_ja3n_hash`).
pub fn md5_hex(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

fn join_filtered(out: &mut String, values: &[u16]) {
    let mut first = true;
    for &v in values {
        if is_grease(v) {
            continue;
        }
        if !first {
            out.push('-');
        }
        out.push_str(&v.to_string());
        first = false;
    }
}

fn join_all(out: &mut String, values: &[u8]) {
    let mut first = true;
    for &v in values {
        if !first {
            out.push('-');
        }
        out.push_str(&v.to_string());
        first = false;
    }
}
