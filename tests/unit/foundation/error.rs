use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GlyphwarpError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GlyphwarpError::outline("x")
            .to_string()
            .contains("outline error:")
    );
    assert!(
        GlyphwarpError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        GlyphwarpError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GlyphwarpError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
