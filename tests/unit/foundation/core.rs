use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(800, 600).unwrap();
    assert_eq!(c.center(), Point::new(400.0, 300.0));
}

#[test]
fn hex_parse_accepts_rgb_and_rgba() {
    assert_eq!(
        Rgba8::from_hex("#0066FF").unwrap(),
        Rgba8::opaque(0x00, 0x66, 0xff)
    );
    assert_eq!(
        Rgba8::from_hex("84e0ff").unwrap(),
        Rgba8::opaque(0x84, 0xe0, 0xff)
    );
    let c = Rgba8::from_hex("#00000080").unwrap();
    assert_eq!(c.a, 0x80);
}

#[test]
fn hex_parse_rejects_bad_input() {
    assert!(Rgba8::from_hex("#fff").is_err());
    assert!(Rgba8::from_hex("#gg0000").is_err());
    assert!(Rgba8::from_hex("#ééé").is_err());
}

#[test]
fn hex_format_is_lowercase_and_drops_opaque_alpha() {
    assert_eq!(Rgba8::opaque(0xFB, 0xA8, 0xED).to_hex(), "#fba8ed");
    assert_eq!(Rgba8::BLACK.with_alpha(40).to_hex(), "#00000028");
}

#[test]
fn serde_uses_hex_strings() {
    let c: Rgba8 = serde_json::from_value(serde_json::json!("#0f0f0f")).unwrap();
    assert_eq!(c, Rgba8::gray(15));
    assert_eq!(
        serde_json::to_value(c).unwrap(),
        serde_json::json!("#0f0f0f")
    );
}

#[test]
fn premul_scales_color_channels() {
    assert_eq!(Rgba8::WHITE.to_premul(), [255, 255, 255, 255]);
    assert_eq!(Rgba8::opaque(255, 0, 0).with_alpha(128).to_premul(), [128, 0, 0, 128]);
    assert_eq!(Rgba8::WHITE.with_alpha(0).to_premul(), [0, 0, 0, 0]);
}
