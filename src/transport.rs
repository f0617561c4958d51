//! Audio playback transport built on rodio.
//!
//! One transport wraps one audio file queued on a single sink. When the
//! output device cannot be opened or the file cannot be decoded, the
//! transport is constructed inert: every operation is a silent no-op and the
//! duration stays unknown. The UI keeps rendering its controls either way.

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, Sink, Source};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

pub struct AudioTransport {
    inner: Option<LiveAudio>,
}

struct LiveAudio {
    _stream: OutputStream,
    sink: Sink,
    path: PathBuf,
    total: Option<Duration>,
}

impl AudioTransport {
    /// Open the audio file on the default output device. Failure yields an
    /// inert transport rather than an error.
    pub fn open(path: &Path) -> Self {
        match LiveAudio::open(path) {
            Ok(live) => {
                debug!(
                    path = %path.display(),
                    duration = ?live.total,
                    "Audio transport ready"
                );
                Self { inner: Some(live) }
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    "Audio unavailable; playback controls will be inert: {err:#}"
                );
                Self::inert()
            }
        }
    }

    /// A transport with no backing audio. Used when loading fails and by
    /// state tests, which must not touch a real output device.
    pub fn inert() -> Self {
        Self { inner: None }
    }

    pub fn is_live(&self) -> bool {
        self.inner.is_some()
    }

    /// Start or resume playback. Returns whether the transport accepted the
    /// command; the caller mirrors that into its playing flag, the same way
    /// the play notification of an audio element would.
    pub fn play(&mut self) -> bool {
        let Some(live) = &mut self.inner else {
            return false;
        };
        if live.sink.empty() && !live.requeue() {
            return false;
        }
        live.sink.play();
        true
    }

    pub fn pause(&self) {
        if let Some(live) = &self.inner {
            live.sink.pause();
        }
    }

    /// Pause and rewind to the start.
    pub fn stop(&mut self) {
        self.pause();
        self.seek(Duration::ZERO);
    }

    /// Jump to `position` without changing the play/pause state. After the
    /// track has drained, the source is re-queued paused so seeking still
    /// lands somewhere meaningful.
    pub fn seek(&mut self, position: Duration) {
        let Some(live) = &mut self.inner else {
            return;
        };
        if live.sink.empty() {
            live.sink.pause();
            if !live.requeue() {
                return;
            }
        }
        if let Err(err) = live.sink.try_seek(position) {
            debug!(?position, "Seek not supported by this source: {err:?}");
        }
    }

    pub fn set_speed(&self, speed: f32) {
        if let Some(live) = &self.inner {
            live.sink.set_speed(speed);
        }
    }

    pub fn set_volume(&self, volume: f32) {
        if let Some(live) = &self.inner {
            live.sink.set_volume(volume);
        }
    }

    /// Current playback position within the source.
    pub fn position(&self) -> Option<Duration> {
        self.inner.as_ref().map(|live| live.sink.get_pos())
    }

    /// Total length, if the decoder reported it. `None` until then.
    pub fn duration(&self) -> Option<Duration> {
        self.inner.as_ref().and_then(|live| live.total)
    }

    /// Whether a previously playing sink has drained its source.
    pub fn finished(&self) -> bool {
        self.inner
            .as_ref()
            .map(|live| live.sink.empty())
            .unwrap_or(false)
    }
}

impl LiveAudio {
    fn open(path: &Path) -> Result<Self> {
        let (stream, handle) = OutputStream::try_default().context("Opening audio output")?;
        let sink = Sink::try_new(&handle).context("Creating sink")?;
        let source = decode(path)?;
        let total = source.total_duration();
        // Queue paused: mounting the screen must not start playback.
        sink.pause();
        sink.append(source);
        Ok(Self {
            _stream: stream,
            sink,
            path: path.to_path_buf(),
            total,
        })
    }

    /// Re-queue the decoded source after the sink drained. Volume and speed
    /// live on the sink, so they survive; position restarts at zero.
    fn requeue(&mut self) -> bool {
        match decode(&self.path) {
            Ok(source) => {
                self.total = self.total.or_else(|| source.total_duration());
                self.sink.append(source);
                true
            }
            Err(err) => {
                warn!(path = %self.path.display(), "Failed to re-queue audio: {err:#}");
                false
            }
        }
    }
}

fn decode(path: &Path) -> Result<Decoder<BufReader<File>>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Decoder::new(BufReader::new(file)).context("Decoding audio")
}
