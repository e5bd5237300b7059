//! JA3N fingerprint construction: GREASE filtering plus a deterministic
//! string/hash builder over the fields the ClientHello parser extracts.

pub mod grease;
pub mod ja3n;

pub use ja3n::{build, md5_hex, FingerprintError, Ja3Fields};
