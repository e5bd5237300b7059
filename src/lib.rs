#![forbid(unsafe_code)]

//! A passive TLS ClientHello preread parser and JA3N fingerprint core.
//!
//! Feed a connection's accumulated receive-buffer bytes to
//! [`PrereadController::poll`] on every I/O readiness notification; once it
//! reports [`ControllerOutcome::Ready`], read the extracted metadata back
//! off [`PrereadContext::variables`]. The parser never terminates or
//! continues the TLS handshake; it only classifies the stream and, for
//! TLS streams, extracts SNI/ALPN/version and JA3N fingerprint inputs.

pub mod config;
pub mod context;
pub mod error;
pub mod fingerprint;
pub mod host;
pub mod preread;
pub mod telemetry;
pub mod variables;

pub use config::{load_from_path, PrereadConfig, RootConfig};
pub use context::PrereadContext;
pub use error::{PrereadError, Result};
pub use fingerprint::{build as build_ja3n, md5_hex, FingerprintError, Ja3Fields};
pub use host::{
    HostValidation, HostnameValidator, NoopSelector, NoopValidator, ServerLookup,
    VirtualServerSelector,
};
pub use preread::{ControllerOutcome, PrereadController};
pub use variables::PrereadVariables;
