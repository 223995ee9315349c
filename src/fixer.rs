//! Duration patching for finalized WebM recordings.
//!
//! Browser capture pipelines (`MediaRecorder`) finalize WebM containers
//! without ever writing a total duration, so players show an unknown or zero
//! length. [`WebmFile::fix_duration`] walks the fixed path Segment → Info →
//! {TimecodeScale, Duration}, inserts or corrects the Duration leaf with a
//! caller-measured wall-clock duration, forces the timecode scale to one
//! millisecond per tick, and reserializes each ancestor child-to-parent.
//!
//! Missing ancestors and an already-valid duration are soft outcomes
//! ([`FixStatus`]), never errors: the documented recovery is to keep the
//! original bytes, which [`fix_webm_duration`] does for the caller.

use std::io::Read;

use crate::elements::{DURATION, INFO, SEGMENT, TIMECODE_SCALE};
use crate::error::Result;
use crate::tree::{Container, Element};

/// Timecode scale forced by the patch: 1,000,000 ns per tick, i.e. one
/// millisecond, so the patched Duration value is read as milliseconds.
pub const DEFAULT_TIMECODE_SCALE: u64 = 1_000_000;

/// Default media type for exported recordings.
pub const WEBM_MEDIA_TYPE: &str = "video/webm";

/// Outcome of a duration fix attempt.
///
/// Anything other than `Fixed` means the tree was left untouched and the
/// caller should keep using the original bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixStatus {
    /// Duration was inserted or corrected and the file reserialized.
    Fixed,
    /// An existing Duration is already positive (or unreadable); good data is
    /// never overwritten.
    AlreadyValid,
    /// No Segment element at the top level.
    NoSegment,
    /// Segment carries no Info element.
    NoInfo,
    /// Info carries no TimecodeScale element.
    NoTimecodeScale,
}

impl FixStatus {
    /// Whether the file was actually rewritten.
    pub fn is_fixed(self) -> bool {
        matches!(self, FixStatus::Fixed)
    }
}

/// A parsed WebM file: the root container whose payload is the whole buffer.
#[derive(Debug, Clone)]
pub struct WebmFile {
    root: Container,
}

impl WebmFile {
    /// Parse a byte buffer into an element tree.
    pub fn parse(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        Ok(Self {
            root: Container::parse(bytes.into())?,
        })
    }

    /// Read a source to its end and parse it. Read failures are hard errors.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::parse(bytes)
    }

    /// Top-level element sequence.
    pub fn root(&self) -> &Container {
        &self.root
    }

    /// Declared duration in milliseconds, if the file carries one.
    ///
    /// Computed from Info's TimecodeScale and Duration elements.
    pub fn duration_ms(&self) -> Option<f64> {
        let segment = match self.root.child(SEGMENT)? {
            Element::Container(c) => c,
            _ => return None,
        };
        let info = match segment.child(INFO)? {
            Element::Container(c) => c,
            _ => return None,
        };
        let scale = info.child(TIMECODE_SCALE)?.uint_value()?;
        let ticks = info.child(DURATION)?.float_value()?;
        Some(ticks * scale as f64 / 1_000_000.0)
    }

    /// Insert or correct the Duration element.
    ///
    /// `duration_ms` is the caller-measured elapsed time of the capture
    /// session (wall-clock between start and stop), not a value derived from
    /// the media stream.
    pub fn fix_duration(&mut self, duration_ms: f64) -> FixStatus {
        let Some(Element::Container(segment)) = self.root.child_mut(SEGMENT) else {
            log::debug!("no Segment element, leaving file untouched");
            return FixStatus::NoSegment;
        };
        let Some(Element::Container(info)) = segment.child_mut(INFO) else {
            log::debug!("no Info element, leaving file untouched");
            return FixStatus::NoInfo;
        };
        if info.child(TIMECODE_SCALE).is_none() {
            log::debug!("no TimecodeScale element, leaving file untouched");
            return FixStatus::NoTimecodeScale;
        }

        match info.child_mut(DURATION) {
            Some(duration) => match duration.float_value() {
                Some(value) if value <= 0.0 => {
                    log::debug!("overwriting stored duration {value} with {duration_ms} ms");
                    duration.set_float(duration_ms);
                }
                // Positive, NaN, or unreadable: never overwrite.
                value => {
                    log::debug!("existing duration {value:?} left untouched");
                    return FixStatus::AlreadyValid;
                }
            },
            None => {
                log::debug!("appending Duration element with {duration_ms} ms");
                info.push(DURATION, Element::new_float(duration_ms));
            }
        }

        // One millisecond per tick, so the value above is in milliseconds.
        if let Some(scale) = info.child_mut(TIMECODE_SCALE) {
            scale.set_uint(DEFAULT_TIMECODE_SCALE);
        }

        // Child-to-parent: each sync consumes the previous one's payload.
        info.sync();
        segment.sync();
        self.root.sync();

        FixStatus::Fixed
    }

    /// Serialized file bytes. Identical to the input when nothing was fixed.
    pub fn into_bytes(self) -> Vec<u8> {
        self.root.data
    }
}

/// A binary recording tagged with its media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBlob {
    /// Container bytes.
    pub data: Vec<u8>,
    /// Informational media type; not derived from the content.
    pub media_type: String,
}

/// Fix the duration of a finalized recording.
///
/// On success the returned blob holds the rewritten bytes; on any soft
/// failure it holds the input bytes unchanged. Callers must not assume the
/// output differs from the input. `media_type` defaults to
/// [`WEBM_MEDIA_TYPE`].
pub fn fix_webm_duration(
    bytes: &[u8],
    duration_ms: f64,
    media_type: Option<&str>,
) -> Result<MediaBlob> {
    let media_type = media_type.unwrap_or(WEBM_MEDIA_TYPE).to_string();

    let mut file = WebmFile::parse(bytes)?;
    let status = file.fix_duration(duration_ms);
    log::debug!("fix_webm_duration: {status:?}");

    let data = if status.is_fixed() {
        file.into_bytes()
    } else {
        bytes.to_vec()
    };
    Ok(MediaBlob { data, media_type })
}

/// [`fix_webm_duration`] over a [`Read`] source.
///
/// Read failures propagate as hard errors with no partial result.
pub fn fix_webm_duration_from_reader<R: Read>(
    mut reader: R,
    duration_ms: f64,
    media_type: Option<&str>,
) -> Result<MediaBlob> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    fix_webm_duration(&bytes, duration_ms, media_type)
}
