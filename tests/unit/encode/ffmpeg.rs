use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn encoder_listing_is_matched_by_name_column() {
    let listing = "Encoders:\n V..... = Video\n ------\n V....D libx264              libx264 H.264 / AVC\n V....D libvpx-vp9           libvpx VP9\n";
    assert!(encoder_listed(listing, "libx264"));
    assert!(encoder_listed(listing, "libvpx-vp9"));
    assert!(!encoder_listed(listing, "libx265"));
    assert!(!encoder_listed("", "libx264"));
}

#[test]
fn codec_preference_is_h264_then_vp9() {
    assert_eq!(
        VideoCodec::PREFERENCE,
        [VideoCodec::H264Mp4, VideoCodec::Vp9Webm]
    );
    assert_eq!(VideoCodec::H264Mp4.extension(), "mp4");
    assert_eq!(VideoCodec::Vp9Webm.encoder(), "libvpx-vp9");
}

#[test]
fn begin_rejects_odd_dimensions_before_spawning() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(std::env::temp_dir().join("odd.mp4")));
    let err = sink
        .begin(SinkConfig::new(3, 2, Rgba8::BLACK))
        .unwrap_err();
    assert!(err.to_string().contains("even"));
    assert!(sink.output_path().is_none());
}

#[test]
fn push_without_begin_fails() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("unused.mp4"));
    let f = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &f).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn dropping_a_started_sink_reaps_ffmpeg() {
    if !is_ffmpeg_on_path() {
        eprintln!("skipping: ffmpeg not on PATH");
        return;
    }
    let root = std::env::temp_dir().join(format!("glyphwarp_ffmpeg_drop_{}", std::process::id()));
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(root.join("cancelled.mp4")));
    if sink.begin(SinkConfig::new(16, 16, Rgba8::BLACK)).is_err() {
        eprintln!("skipping: no usable video encoder");
        return;
    }
    assert!(sink.codec().is_some());
    drop(sink);
    let _ = std::fs::remove_dir_all(&root);
}

#[test]
fn records_a_short_clip_when_ffmpeg_is_available() {
    if !is_ffmpeg_on_path() {
        eprintln!("skipping: ffmpeg not on PATH");
        return;
    }
    let root = std::env::temp_dir().join(format!("glyphwarp_ffmpeg_rec_{}", std::process::id()));
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(root.join("clip.mp4")));
    if sink.begin(SinkConfig::new(16, 16, Rgba8::BLACK)).is_err() {
        eprintln!("skipping: no usable video encoder");
        return;
    }
    let f = FrameRGBA {
        width: 16,
        height: 16,
        data: vec![255; 16 * 16 * 4],
        premultiplied: true,
    };
    for i in 0..5 {
        sink.push_frame(FrameIndex(i), &f).unwrap();
    }
    sink.end().unwrap();
    let path = sink.output_path().unwrap().to_path_buf();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
    let _ = std::fs::remove_dir_all(&root);
}
