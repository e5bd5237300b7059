//! The resumable ClientHello state machine.
//!
//! Grounded transition-for-transition on
//! `ngx_stream_ssl_preread_parse_record`: the same field order (legacy
//! version, random, session id, cipher suites, compression methods,
//! extensions), the same extension subset (SNI, ALPN, supported_versions,
//! supported_groups, ec_point_formats, everything else skipped), and the
//! same bounds checks. `advance` can be called any number of times with
//! any slicing of the input: a single byte at a time, or the whole
//! ClientHello at once, and produces the same result either way.

use super::state::{Collect, Field, TransitionResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A complete, well-formed ClientHello has been parsed.
    Ready,
    /// The input is not a ClientHello this parser can make sense of.
    Declined,
    /// Well-formed so far; more bytes are needed to make progress.
    Again,
}

/// Parses a single ClientHello handshake message, fed one or more record
/// bodies at a time. Never allocates more than the size carried in the
/// wire length field that introduced the data it's about to collect,
/// every field is bounded by a 1- or 2-byte length prefix (at most 65535
/// bytes), so there's no amplification from the outer 3-byte handshake
/// length, which bounds the running total but never sizes an allocation
/// directly.
#[derive(Debug, Default)]
pub struct ClientHelloParser {
    field: Field,
    collect: Collect,
    size: usize,
    left: usize,
    /// Remaining bytes in the innermost length-prefixed list currently
    /// being walked (SNI's `server_name_list`, ALPN's
    /// `protocol_name_list`).
    ext: usize,
    buf: Vec<u8>,
    scratch: Vec<u8>,
    extensions_allocated: bool,
    host_set: bool,
    alpn_set: bool,

    pub(crate) ja3_version: u16,
    pub(crate) legacy_version: (u8, u8),
    pub(crate) ciphers: Vec<u16>,
    pub(crate) extensions: Vec<u16>,
    pub(crate) curves: Vec<u16>,
    pub(crate) point_formats: Vec<u8>,
    pub(crate) host: Vec<u8>,
    pub(crate) alpn: Vec<u8>,
}

impl Default for Field {
    fn default() -> Self {
        Field::Start
    }
}

impl Default for Collect {
    fn default() -> Self {
        Collect::None
    }
}

impl ClientHelloParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next chunk of the (single) handshake message's bytes.
    /// `input` must not contain bytes from a different TLS record's
    /// header; the caller (the record framer) is responsible for
    /// stripping those and handing over record bodies only.
    pub fn advance(&mut self, mut input: &[u8]) -> Outcome {
        loop {
            let n = input.len().min(self.size);
            if n > 0 {
                if self.collect != Collect::None {
                    self.buf.extend_from_slice(&input[..n]);
                }
                input = &input[n..];
            }
            self.size -= n;
            self.left -= n;

            if self.size != 0 {
                return Outcome::Again;
            }

            self.finalize_collect();

            match self.transition() {
                TransitionResult::Continue => {}
                TransitionResult::Ready => return Outcome::Ready,
                TransitionResult::Declined => return Outcome::Declined,
            }

            if self.left < self.size {
                return Outcome::Declined;
            }
        }
    }

    fn finalize_collect(&mut self) {
        let data = std::mem::take(&mut self.buf);
        match self.collect {
            Collect::None => {}
            Collect::Scratch => self.scratch = data,
            Collect::Ciphers => {
                self.ciphers = data
                    .chunks_exact(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect();
            }
            Collect::Curves => {
                self.curves = data
                    .chunks_exact(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect();
            }
            Collect::PointFormats => self.point_formats = data,
            Collect::Host => self.host = data,
            Collect::AlpnProtoData => self.alpn.extend_from_slice(&data),
        }
    }

    fn transition(&mut self) -> TransitionResult {
        use Field::*;

        match self.field {
            Start => {
                self.extensions.clear();
                self.extensions_allocated = false;
                self.field = Header;
                self.collect = Collect::Scratch;
                self.size = 4;
                self.left = 4;
            }
            Header => {
                if self.scratch.first().copied() != Some(1) {
                    return TransitionResult::Declined;
                }
                let len = ((self.scratch[1] as usize) << 16)
                    | ((self.scratch[2] as usize) << 8)
                    | self.scratch[3] as usize;
                self.left = len;
                self.field = Version;
                self.collect = Collect::Scratch;
                self.size = 2;
            }
            Version => {
                self.ja3_version = u16::from_be_bytes([self.scratch[0], self.scratch[1]]);
                self.legacy_version = (self.scratch[0], self.scratch[1]);
                self.field = Random;
                self.collect = Collect::None;
                self.size = 32;
            }
            Random => {
                self.field = SidLen;
                self.collect = Collect::Scratch;
                self.size = 1;
            }
            SidLen => {
                self.field = Sid;
                self.collect = Collect::None;
                self.size = self.scratch[0] as usize;
            }
            Sid => {
                self.field = CsLen;
                self.collect = Collect::Scratch;
                self.size = 2;
            }
            CsLen => {
                let len = u16::from_be_bytes([self.scratch[0], self.scratch[1]]) as usize;
                self.field = Cs;
                self.collect = Collect::Ciphers;
                self.size = len;
            }
            Cs => {
                self.field = CmLen;
                self.collect = Collect::Scratch;
                self.size = 1;
            }
            CmLen => {
                self.field = Cm;
                self.collect = Collect::None;
                self.size = self.scratch[0] as usize;
            }
            Cm => {
                if self.left == 0 {
                    return TransitionResult::Ready;
                }
                self.field = Ext;
                self.collect = Collect::Scratch;
                self.size = 2;
            }
            Ext => {
                if self.left == 0 {
                    return TransitionResult::Ready;
                }
                if !self.extensions_allocated {
                    let block_len = u16::from_be_bytes([self.scratch[0], self.scratch[1]]) as usize;
                    self.extensions = Vec::with_capacity(block_len / 2);
                    self.extensions_allocated = true;
                }
                self.field = ExtHeader;
                self.collect = Collect::Scratch;
                self.size = 4;
            }
            ExtHeader => {
                let ext_type = u16::from_be_bytes([self.scratch[0], self.scratch[1]]);
                let ext_len = u16::from_be_bytes([self.scratch[2], self.scratch[3]]) as usize;
                self.extensions.push(ext_type);
                match ext_type {
                    0 if !self.host_set => {
                        self.field = SniLen;
                        self.collect = Collect::Scratch;
                        self.size = 2;
                    }
                    16 if !self.alpn_set => {
                        self.field = AlpnLen;
                        self.collect = Collect::Scratch;
                        self.size = 2;
                    }
                    43 => {
                        self.field = SupverLen;
                        self.collect = Collect::Scratch;
                        self.size = 1;
                    }
                    10 => {
                        self.field = SupportedGroupsLen;
                        self.collect = Collect::Scratch;
                        self.size = 2;
                    }
                    11 => {
                        self.field = EcPointFormatsLen;
                        self.collect = Collect::Scratch;
                        self.size = 1;
                    }
                    _ => {
                        self.field = Ext;
                        self.collect = Collect::None;
                        self.size = ext_len;
                    }
                }
            }
            SniLen => {
                self.ext = u16::from_be_bytes([self.scratch[0], self.scratch[1]]) as usize;
                self.field = SniHostHead;
                self.collect = Collect::Scratch;
                self.size = 3;
            }
            SniHostHead => {
                if self.scratch[0] != 0 {
                    return TransitionResult::Declined;
                }
                let name_len = u16::from_be_bytes([self.scratch[1], self.scratch[2]]) as usize;
                if self.ext < 3 + name_len {
                    return TransitionResult::Declined;
                }
                self.ext -= 3 + name_len;
                self.host_set = true;
                self.field = SniHost;
                self.collect = Collect::Host;
                self.size = name_len;
            }
            SniHost => {
                self.field = Ext;
                self.collect = Collect::None;
                self.size = self.ext;
            }
            AlpnLen => {
                self.ext = u16::from_be_bytes([self.scratch[0], self.scratch[1]]) as usize;
                self.alpn_set = true;
                self.field = AlpnProtoLen;
                self.collect = Collect::Scratch;
                self.size = 1;
            }
            AlpnProtoLen => {
                let proto_len = self.scratch[0] as usize;
                if proto_len == 0 {
                    return TransitionResult::Declined;
                }
                if self.ext < 1 + proto_len {
                    return TransitionResult::Declined;
                }
                self.ext -= 1 + proto_len;
                self.field = AlpnProtoData;
                self.collect = Collect::AlpnProtoData;
                self.size = proto_len;
            }
            AlpnProtoData => {
                if self.ext > 0 {
                    self.alpn.push(b',');
                    self.field = AlpnProtoLen;
                    self.collect = Collect::Scratch;
                    self.size = 1;
                } else {
                    self.field = Ext;
                    self.collect = Collect::None;
                    self.size = 0;
                }
            }
            SupverLen => {
                self.legacy_version = (3, 4);
                self.field = Ext;
                self.collect = Collect::None;
                self.size = self.scratch[0] as usize;
            }
            SupportedGroupsLen => {
                let len = u16::from_be_bytes([self.scratch[0], self.scratch[1]]) as usize;
                self.field = Ext;
                self.collect = Collect::Curves;
                self.size = len;
            }
            EcPointFormatsLen => {
                let len = self.scratch[0] as usize;
                self.field = Ext;
                self.collect = Collect::PointFormats;
                self.size = len;
            }
        }

        TransitionResult::Continue
    }
}
