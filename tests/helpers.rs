//! Shared fixture builders for ClientHello test vectors: one place that
//! builds wire bytes so individual test files stay focused on what they
//! assert.

#![allow(dead_code)]

/// Wraps a handshake message body in a single TLS record
/// (content type 0x16, version 3.1).
pub fn tls_record(body: &[u8]) -> Vec<u8> {
    let mut r = vec![0x16, 0x03, 0x01];
    r.extend_from_slice(&(body.len() as u16).to_be_bytes());
    r.extend_from_slice(body);
    r
}

/// Wraps a handshake message body in one TLS record per `chunk_size` bytes
/// of the message, so a caller can exercise cross-record resumption.
pub fn tls_records_chunked(body: &[u8], chunk_size: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for chunk in body.chunks(chunk_size.max(1)) {
        out.extend_from_slice(&tls_record(chunk));
    }
    out
}

/// A 5-byte legacy SSLv2 ClientHello prologue: high bit set on the length
/// byte, msg_type 1, the given (major, minor) version.
pub fn sslv2_prologue(version: (u8, u8)) -> Vec<u8> {
    vec![0x80, 0x2e, 0x01, version.0, version.1]
}

fn encode_extension(ext_type: u16, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&ext_type.to_be_bytes());
    out.extend_from_slice(&(body.len() as u16).to_be_bytes());
    out.extend_from_slice(body);
    out
}

/// SNI extension (type 0) body for a single DNS hostname entry.
pub fn sni_extension_body(host: &str) -> Vec<u8> {
    let mut entry = Vec::new();
    entry.push(0); // name_type = host_name
    entry.extend_from_slice(&(host.len() as u16).to_be_bytes());
    entry.extend_from_slice(host.as_bytes());

    let mut body = Vec::new();
    body.extend_from_slice(&(entry.len() as u16).to_be_bytes());
    body.extend_from_slice(&entry);
    body
}

/// ALPN extension (type 16) body for a list of protocol names.
pub fn alpn_extension_body(protocols: &[&str]) -> Vec<u8> {
    let mut list = Vec::new();
    for p in protocols {
        list.push(p.len() as u8);
        list.extend_from_slice(p.as_bytes());
    }
    let mut body = Vec::new();
    body.extend_from_slice(&(list.len() as u16).to_be_bytes());
    body.extend_from_slice(&list);
    body
}

/// `supported_versions` extension (type 43) body listing TLS 1.3.
pub fn supported_versions_extension_body() -> Vec<u8> {
    vec![2, 0x03, 0x04]
}

/// `supported_groups` extension (type 10) body for a list of 16-bit curve ids.
pub fn supported_groups_extension_body(curves: &[u16]) -> Vec<u8> {
    let mut list = Vec::new();
    for c in curves {
        list.extend_from_slice(&c.to_be_bytes());
    }
    let mut body = Vec::new();
    body.extend_from_slice(&(list.len() as u16).to_be_bytes());
    body.extend_from_slice(&list);
    body
}

/// `ec_point_formats` extension (type 11) body for a list of 8-bit formats.
pub fn ec_point_formats_extension_body(formats: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.push(formats.len() as u8);
    body.extend_from_slice(formats);
    body
}

/// Assembles a full `handshake(ClientHello)` message: `msg_type(1) = 1`,
/// a 3-byte length, then the body built from the given fields.
pub struct ClientHelloSpec<'a> {
    pub legacy_version: (u8, u8),
    pub ciphers: &'a [u16],
    pub compression_methods: &'a [u8],
    /// `(extension_type, extension_body)` pairs, in the order they should
    /// appear on the wire.
    pub extensions: &'a [(u16, Vec<u8>)],
}

impl<'a> Default for ClientHelloSpec<'a> {
    fn default() -> Self {
        Self {
            legacy_version: (3, 3),
            ciphers: &[0x1301],
            compression_methods: &[0],
            extensions: &[],
        }
    }
}

pub fn build_client_hello(spec: &ClientHelloSpec<'_>) -> Vec<u8> {
    let mut body = Vec::new();
    body.push(spec.legacy_version.0);
    body.push(spec.legacy_version.1);
    body.extend_from_slice(&[0u8; 32]); // random
    body.push(0); // session_id length (empty)

    let mut cipher_bytes = Vec::new();
    for c in spec.ciphers {
        cipher_bytes.extend_from_slice(&c.to_be_bytes());
    }
    body.extend_from_slice(&(cipher_bytes.len() as u16).to_be_bytes());
    body.extend_from_slice(&cipher_bytes);

    body.push(spec.compression_methods.len() as u8);
    body.extend_from_slice(spec.compression_methods);

    if !spec.extensions.is_empty() {
        let mut ext_block = Vec::new();
        for (ext_type, ext_body) in spec.extensions {
            ext_block.extend_from_slice(&encode_extension(*ext_type, ext_body));
        }
        body.extend_from_slice(&(ext_block.len() as u16).to_be_bytes());
        body.extend_from_slice(&ext_block);
    }

    let mut msg = vec![1u8];
    let len = body.len();
    msg.push((len >> 16) as u8);
    msg.push((len >> 8) as u8);
    msg.push(len as u8);
    msg.extend_from_slice(&body);
    msg
}

/// A fixture mirroring the well-known JA3 worked example: SNI `example.com`, ALPN `h2,http/1.1`,
/// ciphers `[0x1301, 0x1302]`, extensions in wire order `[0, 16, 11, 10]`,
/// point formats `[0]`, curves `[0x001d, 0x0017]`.
pub fn s1_client_hello() -> Vec<u8> {
    build_client_hello(&ClientHelloSpec {
        legacy_version: (3, 3),
        ciphers: &[0x1301, 0x1302],
        compression_methods: &[0],
        extensions: &[
            (0, sni_extension_body("example.com")),
            (16, alpn_extension_body(&["h2", "http/1.1"])),
            (11, ec_point_formats_extension_body(&[0])),
            (10, supported_groups_extension_body(&[0x001d, 0x0017])),
        ],
    })
}
