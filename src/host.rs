//! Host collaboration seams: in nginx these are C function pointers the
//! stream module calls through (`ngx_stream_ssl_preread_servername`'s
//! hostname validation and virtual-server lookup); here they're traits,
//! with a no-op pair so the crate is usable standalone without a real
//! embedding host, the same way a dummy certificate pair lets a TLS test
//! run without a real CA.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostValidation {
    Ok,
    Declined,
    Error,
}

pub trait HostnameValidator {
    fn validate(&self, name: &str) -> HostValidation;
}

#[derive(Debug)]
pub enum ServerLookup<Cfg> {
    Found(Cfg),
    Declined,
    Error,
}

pub trait VirtualServerSelector<Cfg> {
    fn find(&self, name: &str) -> ServerLookup<Cfg>;
}

/// Accepts every hostname.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopValidator;

impl HostnameValidator for NoopValidator {
    fn validate(&self, _name: &str) -> HostValidation {
        HostValidation::Ok
    }
}

/// Never resolves a virtual server.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSelector;

impl<Cfg> VirtualServerSelector<Cfg> for NoopSelector {
    fn find(&self, _name: &str) -> ServerLookup<Cfg> {
        ServerLookup::Declined
    }
}
