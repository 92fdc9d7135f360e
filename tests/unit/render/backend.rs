use super::*;

#[test]
fn pixel_unpremultiplies() {
    let f = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![0, 0, 0, 0, 64, 0, 0, 128],
        premultiplied: true,
    };
    assert_eq!(f.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(f.pixel(1, 0), Some([128, 0, 0, 128]));
    assert_eq!(f.pixel(2, 0), None);
}

#[test]
fn straight_pixels_pass_through() {
    let f = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![10, 20, 30, 40],
        premultiplied: false,
    };
    assert_eq!(f.pixel(0, 0), Some([10, 20, 30, 40]));
}

#[test]
fn flatten_alpha_0_returns_bg() {
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg(&mut dst, &[0, 0, 0, 0], Rgba8::opaque(10, 20, 30)).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_alpha_255_is_identity() {
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg(&mut dst, &[1, 2, 3, 255], Rgba8::opaque(10, 20, 30)).unwrap();
    assert_eq!(dst, vec![1, 2, 3, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_premul_over_bg(&mut dst, &[0, 0, 0, 0], Rgba8::BLACK).is_err());
}

#[test]
fn opaque_copy_handles_straight_input() {
    let f = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![255, 255, 255, 0],
        premultiplied: false,
    };
    assert_eq!(
        f.to_opaque_rgba8(Rgba8::opaque(9, 8, 7)).unwrap(),
        vec![9, 8, 7, 255]
    );
}
