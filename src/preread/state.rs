//! The state machine's two axes, mirroring the `state`/`dst` split in
//! nginx's `ngx_stream_ssl_preread_parse_record`: [`Field`] selects which
//! match arm post-processes the bytes that just finished arriving, while
//! [`Collect`] says where those bytes were written while they arrived.
//! Several distinct preceding paths (reading curve data, point-format
//! data, an SNI tail skip, a final ALPN protocol, an unrecognized
//! extension's body) all reuse `Field::Ext` as their completion handler,
//! exactly as nginx reuses `state = sw_ext` for all of them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Start,
    Header,
    Version,
    Random,
    SidLen,
    Sid,
    CsLen,
    Cs,
    CmLen,
    Cm,
    Ext,
    ExtHeader,
    SniLen,
    SniHostHead,
    SniHost,
    AlpnLen,
    AlpnProtoLen,
    AlpnProtoData,
    SupverLen,
    SupportedGroupsLen,
    EcPointFormatsLen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Collect {
    /// Bytes are counted but not retained.
    None,
    /// Small fixed-shape metadata: message/extension headers, length
    /// prefixes, the legacy version field.
    Scratch,
    Ciphers,
    Curves,
    PointFormats,
    Host,
    AlpnProtoData,
}

pub(crate) enum TransitionResult {
    Continue,
    Ready,
    Declined,
}
