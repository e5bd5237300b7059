//! Binds the record framer, the ClientHello parser and the host's
//! hostname/virtual-server collaborators together, the way
//! `ngx_stream_ssl_preread_handler` wraps `ngx_stream_ssl_preread_parse_record`
//! and, on success, calls `ngx_stream_ssl_preread_servername`.
//!
//! Unlike nginx, this crate owns no session object to rebind in place;
//! there is no `s->srv_conf` here, so a successful virtual-server lookup
//! is handed back to the caller as `ControllerOutcome::Ready(Some(cfg))`
//! for the embedding host to act on.

use std::marker::PhantomData;

use crate::context::PrereadContext;
use crate::error::PrereadError;
use crate::host::{HostValidation, HostnameValidator, NoopSelector, NoopValidator, ServerLookup, VirtualServerSelector};
use crate::preread::framer::{self, Outcome as FramerOutcome};

#[derive(Debug)]
pub enum ControllerOutcome<Cfg> {
    Ready(Option<Cfg>),
    Declined,
    Again,
    /// A host collaborator (`HostnameValidator`/`VirtualServerSelector`)
    /// reported its own `ERROR` class, not a parse rejection. Per spec §7
    /// this is not retried; the host aborts the connection.
    Error(PrereadError),
}

/// Precondition gate plus host collaboration around the framer/parser
/// pair. `enabled` mirrors the `ssl_preread on|off` directive: when unset
/// the controller declines every connection without looking at a single
/// byte, the same way nginx skips the whole preread phase handler.
pub struct PrereadController<V = NoopValidator, S = NoopSelector, Cfg = ()> {
    enabled: bool,
    validator: V,
    selector: S,
    _cfg: PhantomData<Cfg>,
}

impl PrereadController<NoopValidator, NoopSelector, ()> {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            validator: NoopValidator,
            selector: NoopSelector,
            _cfg: PhantomData,
        }
    }
}

impl<V, S, Cfg> PrereadController<V, S, Cfg>
where
    V: HostnameValidator,
    S: VirtualServerSelector<Cfg>,
{
    pub fn with_host(enabled: bool, validator: V, selector: S) -> Self {
        Self {
            enabled,
            validator,
            selector,
            _cfg: PhantomData,
        }
    }

    /// `buf` is the full cumulative prologue of the connection, not just
    /// the bytes that arrived since the previous call; callers keep
    /// accumulating into the same buffer and re-invoke `poll` on every
    /// readiness notification.
    pub fn poll(&self, ctx: &mut PrereadContext, buf: &[u8]) -> ControllerOutcome<Cfg> {
        if !self.enabled {
            return ControllerOutcome::Declined;
        }

        match framer::scan(ctx, buf) {
            FramerOutcome::Again => ControllerOutcome::Again,
            FramerOutcome::Declined => ControllerOutcome::Declined,
            FramerOutcome::Ready => match self.resolve_server_name(ctx) {
                Ok(rebind) => ControllerOutcome::Ready(rebind),
                Err(err) => ControllerOutcome::Error(err),
            },
        }
    }

    /// `Ok(None)` covers both "no SNI to resolve" and a host-side
    /// `Declined` (proceed without rebinding); `Err` is the host-side
    /// `ERROR` class, which the caller must not downgrade to `Declined`.
    fn resolve_server_name(&self, ctx: &PrereadContext) -> Result<Option<Cfg>, PrereadError> {
        if ctx.parser.host.is_empty() {
            return Ok(None);
        }
        let host = String::from_utf8_lossy(&ctx.parser.host);
        match self.validator.validate(&host) {
            HostValidation::Ok => match self.selector.find(&host) {
                ServerLookup::Found(cfg) => Ok(Some(cfg)),
                ServerLookup::Declined => Ok(None),
                ServerLookup::Error => Err(PrereadError::Tls(format!(
                    "virtual server lookup failed for host {host:?}"
                ))),
            },
            HostValidation::Declined => Ok(None),
            HostValidation::Error => Err(PrereadError::Tls(format!(
                "hostname validation failed for host {host:?}"
            ))),
        }
    }
}
