//! Fire-and-forget sound cues. A missing output device or asset never stops
//! the game; it just goes silent.

use std::fs;
use std::io::Cursor;
use std::sync::Arc;

use anyhow::Result;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

const SUCCESS_CUE_PATH: &str = "assets/success.mp3";
const FAILURE_CUE_PATH: &str = "assets/failure.mp3";
const CUE_VOLUME: f32 = 0.5;

/// Holds the audio device and the two cues loaded at startup.
pub struct SoundBank {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
    success: Option<Arc<[u8]>>,
    failure: Option<Arc<[u8]>>,
}

impl SoundBank {
    pub fn new() -> Result<Self> {
        let (stream, stream_handle) = OutputStream::try_default()?;

        Ok(Self {
            _stream: stream,
            stream_handle,
            success: load_cue(SUCCESS_CUE_PATH),
            failure: load_cue(FAILURE_CUE_PATH),
        })
    }

    pub fn play_success(&self) {
        self.play(self.success.as_ref(), SUCCESS_CUE_PATH);
    }

    pub fn play_failure(&self) {
        self.play(self.failure.as_ref(), FAILURE_CUE_PATH);
    }

    fn play(&self, cue: Option<&Arc<[u8]>>, name: &str) {
        let Some(bytes) = cue else {
            return;
        };

        let source = match Decoder::new(Cursor::new(Arc::clone(bytes))) {
            Ok(source) => source,
            Err(err) => {
                warn!("failed to decode sound cue {}: {}", name, err);
                return;
            }
        };

        let sink = match Sink::try_new(&self.stream_handle) {
            Ok(sink) => sink,
            Err(err) => {
                warn!("failed to open audio sink: {}", err);
                return;
            }
        };
        sink.set_volume(CUE_VOLUME);
        sink.append(source);
        // Play in the background; the sink cleans itself up when done.
        sink.detach();
    }
}

fn load_cue(path: &str) -> Option<Arc<[u8]>> {
    match fs::read(path) {
        Ok(bytes) => {
            debug!("loaded sound cue {} ({} bytes)", path, bytes.len());
            Some(bytes.into())
        }
        Err(err) => {
            warn!("failed to load sound cue {}: {}", path, err);
            None
        }
    }
}
