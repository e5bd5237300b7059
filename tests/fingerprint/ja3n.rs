//! JA3N grammar and GREASE-exclusion tests against the bit-exact grammar:
//! `<version> "," <nums> "," <nums> "," <nums> "," <nums>`.

use huginn_preread_tls::{build_ja3n, md5_hex, FingerprintError, Ja3Fields};

#[test]
fn empty_sections_render_as_empty_fields_with_trailing_commas() {
    let s = build_ja3n(Ja3Fields {
        version: 771,
        ciphers: &[0x1301],
        extensions: &[],
        curves: &[],
        point_formats: &[],
    })
    .unwrap();
    assert_eq!(s, "771,4865,,,");
}

#[test]
fn all_empty_is_an_error_not_an_empty_string() {
    let err = build_ja3n(Ja3Fields {
        version: 771,
        ciphers: &[],
        extensions: &[],
        curves: &[],
        point_formats: &[],
    })
    .unwrap_err();
    assert_eq!(err, FingerprintError::Empty);
}

#[test]
fn grease_values_excluded_from_every_section_but_point_formats() {
    for &g in huginn_preread_tls::fingerprint::grease::GREASE.iter() {
        let s = build_ja3n(Ja3Fields {
            version: 771,
            ciphers: &[g, 0x1301],
            extensions: &[g, 0],
            curves: &[g, 0x001d],
            point_formats: &[0],
        })
        .unwrap();
        assert_eq!(s, "771,4865,0,29,0", "GREASE value {g:#06x} leaked through");
    }
}

#[test]
fn md5_hex_is_32_lowercase_hex_chars_and_deterministic() {
    let a = md5_hex("771,4865,0,29,0");
    let b = md5_hex("771,4865,0,29,0");
    assert_eq!(a, b);
    assert_eq!(a.len(), 32);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn decimal_rendering_is_shortest_form_no_leading_zeros() {
    let s = build_ja3n(Ja3Fields {
        version: 0,
        ciphers: &[0],
        extensions: &[0],
        curves: &[0],
        point_formats: &[0],
    })
    .unwrap();
    assert_eq!(s, "0,0,0,0,0");
}
