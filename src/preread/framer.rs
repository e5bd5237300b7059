//! Record framing: splits a TLS byte stream into handshake records, hands
//! complete record bodies to the [`ClientHelloParser`](super::parser::ClientHelloParser),
//! and detects the legacy SSLv2 ClientHello prologue nginx's preread
//! handler also special-cases.
//!
//! Grounded on `ngx_stream_ssl_preread_handler`: prologue capture (first
//! 32 bytes, captured once, never shrinks), the `p[0]&0x80 && p[2]==1 &&
//! p[3] in {0,3}` SSLv2 heuristic, record-header validation (content type
//! `0x16`, major version `3`), and the rule that a record is only handed
//! to the parser once it has arrived in full; a partial record always
//! yields `Again`, never a partial parse.

use crate::context::PrereadContext;
use crate::preread::parser::Outcome as ParserOutcome;

/// How many leading bytes of the connection are captured for
/// `ssl_preread_prologue`, independent of whether the stream turns out to
/// be TLS at all.
pub const PROLOGUE_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ready,
    Declined,
    Again,
}

/// Scans `buf`, the full, cumulative bytes received on the connection so
/// far, not just what arrived since the previous call, for a complete
/// ClientHello. `ctx.cursor` remembers how far the scan got so repeat
/// calls don't re-walk already-processed records.
pub fn scan(ctx: &mut PrereadContext, buf: &[u8]) -> Outcome {
    if ctx.prologue.len() < PROLOGUE_SIZE {
        let n = buf.len().min(PROLOGUE_SIZE);
        ctx.prologue = buf[..n].to_vec();
    }

    let mut pos = ctx.cursor;

    while buf.len().saturating_sub(pos) >= 5 {
        let p = &buf[pos..];

        if p[0] & 0x80 != 0 && p[2] == 1 && (p[3] == 0 || p[3] == 3) {
            tracing::debug!("ssl preread: SSLv2-style ClientHello detected");
            ctx.parser.legacy_version = (p[3], p[4]);
            ctx.is_ssl = true;
            return Outcome::Ready;
        }

        if p[0] != 0x16 {
            tracing::debug!(content_type = p[0], "ssl preread: not a TLS handshake record");
            return Outcome::Declined;
        }

        if p[1] != 3 {
            tracing::debug!(major = p[1], "ssl preread: unsupported record version");
            return Outcome::Declined;
        }

        let record_len = ((p[3] as usize) << 8) | p[4] as usize;

        if buf.len() - pos < record_len + 5 {
            break;
        }

        let body = &p[5..5 + record_len];

        match ctx.parser.advance(body) {
            ParserOutcome::Declined => {
                tracing::debug!("ssl preread: malformed ClientHello");
                return Outcome::Declined;
            }
            ParserOutcome::Ready => {
                ctx.is_ssl = true;
                ctx.parser.extensions.sort_unstable();
                return Outcome::Ready;
            }
            ParserOutcome::Again => {
                pos += 5 + record_len;
            }
        }
    }

    ctx.cursor = pos;
    Outcome::Again
}
