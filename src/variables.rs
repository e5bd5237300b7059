//! Read-only accessors over a parsed [`PrereadContext`], mirroring the
//! `ngx_stream_ssl_preread_*_variable` functions: `protocol`,
//! `server_name`, `alpn_protocols`, `ja3n`, `ja3n_hash`, `prologue`. `None`
//! plays the role of nginx's `not_found`; every accessor but `prologue`
//! returns `None` when the connection was never recognized as TLS.

use std::borrow::Cow;

use crate::context::PrereadContext;
use crate::fingerprint::ja3n::{self, Ja3Fields};

pub struct PrereadVariables<'a> {
    ctx: &'a PrereadContext,
}

impl<'a> PrereadVariables<'a> {
    pub(crate) fn new(ctx: &'a PrereadContext) -> Self {
        Self { ctx }
    }

    /// The negotiated/observed protocol name. An unrecognized legacy
    /// version yields `Some("")`, not `None`; the connection is still
    /// known to be TLS, just an unrecognized version, exactly as nginx
    /// leaves the variable "found" with empty data in that case.
    pub fn protocol(&self) -> Option<&'static str> {
        if !self.ctx.is_ssl {
            return None;
        }
        Some(match self.ctx.parser.legacy_version {
            (0, 2) => "SSLv2",
            (3, 0) => "SSLv3",
            (3, 1) => "TLSv1",
            (3, 2) => "TLSv1.1",
            (3, 3) => "TLSv1.2",
            (3, 4) => "TLSv1.3",
            _ => "",
        })
    }

    pub fn server_name(&self) -> Option<Cow<'a, str>> {
        if !self.ctx.is_ssl {
            return None;
        }
        Some(String::from_utf8_lossy(&self.ctx.parser.host))
    }

    pub fn alpn_protocols(&self) -> Option<Cow<'a, str>> {
        if !self.ctx.is_ssl {
            return None;
        }
        Some(String::from_utf8_lossy(&self.ctx.parser.alpn))
    }

    /// The JA3N fingerprint string. `None` both when the connection isn't
    /// TLS and when the builder has nothing to fingerprint (ciphers,
    /// extensions, curves and point formats all empty), a benign "not
    /// found", not a parse failure.
    pub fn ja3n(&self) -> Option<String> {
        if !self.ctx.is_ssl {
            return None;
        }
        let p = &self.ctx.parser;
        ja3n::build(Ja3Fields {
            version: p.ja3_version,
            ciphers: &p.ciphers,
            extensions: &p.extensions,
            curves: &p.curves,
            point_formats: &p.point_formats,
        })
        .ok()
    }

    pub fn ja3n_hash(&self) -> Option<String> {
        self.ja3n().map(|s| ja3n::md5_hex(&s))
    }

    /// Hex dump of the captured prologue. Available whenever any bytes
    /// were captured at all, regardless of `is_ssl`; the prologue is
    /// useful for diagnosing non-TLS traffic too.
    pub fn prologue(&self) -> Option<String> {
        if self.ctx.prologue.is_empty() {
            return None;
        }
        Some(hex_encode(&self.ctx.prologue))
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}
