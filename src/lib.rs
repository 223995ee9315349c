//! # webm-duration
//!
//! Patches missing duration metadata into WebM recordings.
//!
//! Browser capture pipelines (`navigator.mediaDevices.getUserMedia` +
//! `MediaRecorder`) finalize WebM containers without writing a total
//! duration, so recordings report an unknown or zero length. This crate
//! parses the EBML element tree just deeply enough to reach
//! Segment → Info → {TimecodeScale, Duration}, inserts or corrects the
//! Duration element with a caller-measured wall-clock duration, and
//! reserializes with byte-identical framing for every untouched section.
//!
//! It is deliberately not a demuxer: every element off the duration path,
//! including entire Clusters, is carried as opaque bytes.
//!
//! ## Example: fixing a recording
//!
//! ```no_run
//! use webm_duration::fix_webm_duration;
//!
//! let recording: Vec<u8> = std::fs::read("capture.webm").unwrap();
//! // Wall-clock time between recorder start and stop, in milliseconds.
//! let elapsed_ms = 2500.0;
//!
//! let blob = fix_webm_duration(&recording, elapsed_ms, None).unwrap();
//! std::fs::write("capture-fixed.webm", &blob.data).unwrap();
//! ```
//!
//! ## Example: inspecting the patch outcome
//!
//! ```no_run
//! use webm_duration::{FixStatus, WebmFile};
//!
//! let recording: Vec<u8> = std::fs::read("capture.webm").unwrap();
//! let mut file = WebmFile::parse(recording).unwrap();
//! match file.fix_duration(2500.0) {
//!     FixStatus::Fixed => std::fs::write("fixed.webm", file.into_bytes()).unwrap(),
//!     status => eprintln!("left unchanged: {status:?}"),
//! }
//! ```

pub mod ebml;
pub mod elements;
pub mod error;
pub mod fixer;
pub mod tree;

// Re-export main types
pub use error::{Result, WebmError};
pub use fixer::{
    fix_webm_duration, fix_webm_duration_from_reader, FixStatus, MediaBlob, WebmFile,
    DEFAULT_TIMECODE_SCALE, WEBM_MEDIA_TYPE,
};
pub use tree::{Child, Container, Element};
