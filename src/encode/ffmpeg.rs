use std::io::{Read as _, Write as _};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::{
    encode::sink::{FrameSink, SinkConfig},
    export::ensure_parent_dir,
    foundation::{
        core::FrameIndex,
        error::{GlyphwarpError, GlyphwarpResult},
    },
    render::backend::{FrameRGBA, flatten_premul_over_bg},
};

/// Video codec and container pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoCodec {
    /// `libx264` in MP4.
    H264Mp4,
    /// `libvpx-vp9` in WebM.
    Vp9Webm,
}

impl VideoCodec {
    /// In preference order.
    pub const PREFERENCE: [Self; 2] = [Self::H264Mp4, Self::Vp9Webm];

    pub fn encoder(self) -> &'static str {
        match self {
            Self::H264Mp4 => "libx264",
            Self::Vp9Webm => "libvpx-vp9",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::H264Mp4 => "mp4",
            Self::Vp9Webm => "webm",
        }
    }

    fn output_args(self) -> &'static [&'static str] {
        match self {
            Self::H264Mp4 => &[
                "-an",
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "-movflags",
                "+faststart",
            ],
            Self::Vp9Webm => &[
                "-an",
                "-c:v",
                "libvpx-vp9",
                "-pix_fmt",
                "yuv420p",
                "-b:v",
                "0",
                "-crf",
                "32",
            ],
        }
    }
}

#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    /// Output path; its extension is replaced by the chosen codec's.
    pub out_path: PathBuf,
    pub overwrite: bool,
    /// Force a codec instead of probing `ffmpeg` for the preferred one.
    pub codec: Option<VideoCodec>,
}

impl FfmpegSinkOpts {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            codec: None,
        }
    }
}

/// Sink that spawns the system `ffmpeg` and streams flattened RGBA frames to its stdin.
///
/// Dropping a sink that was started but never ended kills and reaps the encoder.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    codec: Option<VideoCodec>,
    resolved_path: Option<PathBuf>,

    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,

    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl FfmpegSink {
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            codec: None,
            resolved_path: None,
            child: None,
            stdin: None,
            stderr_drain: None,
            scratch: Vec::new(),
            cfg: None,
            last_idx: None,
        }
    }

    /// Codec picked in `begin`.
    pub fn codec(&self) -> Option<VideoCodec> {
        self.codec
    }

    /// Final output path, known once `begin` has chosen a codec.
    pub fn output_path(&self) -> Option<&Path> {
        self.resolved_path.as_deref()
    }

    fn choose_codec(&self) -> GlyphwarpResult<VideoCodec> {
        if let Some(codec) = self.opts.codec {
            return Ok(codec);
        }
        let listing = ffmpeg_encoder_listing()?;
        VideoCodec::PREFERENCE
            .into_iter()
            .find(|c| encoder_listed(&listing, c.encoder()))
            .ok_or_else(|| {
                GlyphwarpError::encode("ffmpeg has neither libx264 nor libvpx-vp9 available")
            })
    }
}

impl FrameSink for FfmpegSink {
    #[tracing::instrument(skip(self, cfg), fields(w = cfg.width, h = cfg.height, fps = cfg.fps))]
    fn begin(&mut self, cfg: SinkConfig) -> GlyphwarpResult<()> {
        if self.child.is_some() {
            return Err(GlyphwarpError::encode("ffmpeg sink already started"));
        }
        if cfg.fps == 0 {
            return Err(GlyphwarpError::validation("fps must be non-zero"));
        }
        if cfg.width == 0 || cfg.height == 0 {
            return Err(GlyphwarpError::validation(
                "ffmpeg sink width/height must be non-zero",
            ));
        }
        if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
            return Err(GlyphwarpError::validation(
                "ffmpeg sink width/height must be even (required for yuv420p output)",
            ));
        }
        if !is_ffmpeg_on_path() {
            return Err(GlyphwarpError::encode(
                "ffmpeg is required for recording, but was not found on PATH",
            ));
        }

        let codec = self.choose_codec()?;
        let out_path = self.opts.out_path.with_extension(codec.extension());
        ensure_parent_dir(&out_path)?;
        if !self.opts.overwrite && out_path.exists() {
            return Err(GlyphwarpError::validation(format!(
                "output file '{}' already exists",
                out_path.display()
            )));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd.arg(if self.opts.overwrite { "-y" } else { "-n" });
        // Frames are flattened to opaque RGBA in push_frame.
        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
            "-r",
            &cfg.fps.to_string(),
            "-i",
            "pipe:0",
        ]);
        cmd.args(codec.output_args());
        cmd.arg(&out_path);

        let mut child = cmd.spawn().map_err(|e| {
            GlyphwarpError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| GlyphwarpError::encode("failed to open ffmpeg stdin"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| GlyphwarpError::encode("failed to open ffmpeg stderr"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut bytes = Vec::new();
            stderr.read_to_end(&mut bytes)?;
            Ok(bytes)
        });

        tracing::info!(codec = codec.encoder(), path = %out_path.display(), "recording started");
        self.scratch = vec![0u8; (cfg.width as usize) * (cfg.height as usize) * 4];
        self.child = Some(child);
        self.stdin = Some(stdin);
        self.stderr_drain = Some(stderr_drain);
        self.codec = Some(codec);
        self.resolved_path = Some(out_path);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> GlyphwarpResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| GlyphwarpError::encode("ffmpeg sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(GlyphwarpError::encode(
                "ffmpeg sink received out-of-order frame index",
            ));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(GlyphwarpError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        self.last_idx = Some(idx);

        if frame.premultiplied {
            flatten_premul_over_bg(&mut self.scratch, &frame.data, cfg.background)?;
        } else {
            self.scratch = frame.to_opaque_rgba8(cfg.background)?;
        }

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(GlyphwarpError::encode("ffmpeg sink is already finalized"));
        };
        stdin.write_all(&self.scratch).map_err(|e| {
            GlyphwarpError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        Ok(())
    }

    fn end(&mut self) -> GlyphwarpResult<()> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| GlyphwarpError::encode("ffmpeg sink not started"))?;

        let status = child.wait().map_err(|e| {
            GlyphwarpError::encode(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| GlyphwarpError::encode("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| GlyphwarpError::encode(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };
        self.cfg = None;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(GlyphwarpError::encode(format!(
                "ffmpeg exited with status {status}: {}",
                stderr.trim()
            )));
        }
        tracing::info!(frames = self.last_idx.map_or(0, |i| i.0 + 1), "recording finished");
        Ok(())
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        drop(self.stdin.take());
        let Some(mut child) = self.child.take() else {
            return;
        };
        tracing::warn!("recording dropped before end; stopping ffmpeg");
        let _ = child.kill();
        let _ = child.wait();
        if let Some(handle) = self.stderr_drain.take() {
            let _ = handle.join();
        }
    }
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Return `true` when the local `ffmpeg` lists `encoder`.
pub fn ffmpeg_has_encoder(encoder: &str) -> bool {
    ffmpeg_encoder_listing()
        .map(|listing| encoder_listed(&listing, encoder))
        .unwrap_or(false)
}

fn ffmpeg_encoder_listing() -> GlyphwarpResult<String> {
    let out = Command::new("ffmpeg")
        .args(["-hide_banner", "-encoders"])
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|e| GlyphwarpError::encode(format!("failed to query ffmpeg encoders: {e}")))?;
    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}

/// Encoder lines look like ` V....D libx264   libx264 H.264 ...`; the name is the second column.
fn encoder_listed(listing: &str, encoder: &str) -> bool {
    listing
        .lines()
        .filter_map(|line| line.split_whitespace().nth(1))
        .any(|name| name == encoder)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
