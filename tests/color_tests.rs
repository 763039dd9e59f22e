// Host-side tests for color parsing, formatting, and interpolation.

use graph_fx_web::Rgb;

#[test]
fn hex_round_trip() {
    let c = Rgb::from_hex("#3b88c3").expect("valid hex");
    assert_eq!(c.to_hex(), "#3b88c3");
}

#[test]
fn hex_parses_without_hash_and_uppercase() {
    assert_eq!(Rgb::from_hex("ff00aa"), Rgb::from_hex("#ff00aa"));
    assert_eq!(Rgb::from_hex("#FF00AA"), Rgb::from_hex("#ff00aa"));
}

#[test]
fn malformed_hex_is_none() {
    assert_eq!(Rgb::from_hex(""), None);
    assert_eq!(Rgb::from_hex("#12"), None);
    assert_eq!(Rgb::from_hex("#12345"), None);
    assert_eq!(Rgb::from_hex("#1234567"), None);
    assert_eq!(Rgb::from_hex("#gghhii"), None);
    assert_eq!(Rgb::from_hex("not a color"), None);
}

#[test]
fn byte_conversion_rounds_and_clamps() {
    assert_eq!(Rgb::new(0.0, 0.5, 1.0).to_bytes(), [0, 128, 255]);
    // out-of-range channels clamp instead of wrapping
    assert_eq!(Rgb::new(-0.5, 1.5, 0.0).to_bytes(), [0, 255, 0]);
}

#[test]
fn from_bytes_matches_hex_parse() {
    assert_eq!(Rgb::from_bytes(0x3b, 0x88, 0xc3), Rgb::from_hex("#3b88c3").unwrap());
}

#[test]
fn lerp_at_zero_is_exactly_start() {
    let a = Rgb::from_hex("#123456").unwrap();
    let b = Rgb::from_hex("#fedcba").unwrap();
    assert_eq!(a.lerp(b, 0.0), a);
}

#[test]
fn lerp_midpoint_is_between_endpoints() {
    let a = Rgb::new(0.0, 0.0, 0.0);
    let b = Rgb::new(1.0, 0.5, 0.0);
    let mid = a.lerp(b, 0.5);
    assert!((mid.r - 0.5).abs() < 1e-6);
    assert!((mid.g - 0.25).abs() < 1e-6);
    assert!(mid.b.abs() < 1e-6);
}
