//! Per-connection state. In nginx this is `ngx_stream_ssl_preread_ctx_t`,
//! allocated from the connection's pool; here it is a single owned struct
//! the embedding host allocates once per connection and drops when the
//! connection ends. No `unsafe`, no custom allocator, and no lifetime
//! parameter escapes it: accessors on [`crate::variables::PrereadVariables`]
//! either return owned data or borrow from `&self`.

use crate::preread::parser::ClientHelloParser;
use crate::variables::PrereadVariables;

#[derive(Debug, Default)]
pub struct PrereadContext {
    pub(crate) cursor: usize,
    pub(crate) parser: ClientHelloParser,
    pub(crate) prologue: Vec<u8>,
    pub(crate) is_ssl: bool,
}

impl PrereadContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ssl(&self) -> bool {
        self.is_ssl
    }

    /// Up to the first 32 bytes received on the connection, captured
    /// regardless of whether the stream turns out to be TLS.
    pub fn prologue(&self) -> &[u8] {
        &self.prologue
    }

    pub fn variables(&self) -> PrereadVariables<'_> {
        PrereadVariables::new(self)
    }
}
