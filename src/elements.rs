//! WebM element definitions and the element catalog.
//!
//! Element IDs are a subset of the Matroska specification and include the
//! VINT marker bits, so the constants here match the raw ID bytes in a file.
//!
//! The catalog is a total function: IDs it does not recognize come back as an
//! `Unknown` opaque entry and round-trip byte for byte, so completeness only
//! affects naming, never correctness of a rewrite.

// ============================================================================
// EBML Header Elements (IDs include the VINT marker)
// ============================================================================

/// EBML element (root of EBML header).
pub const EBML: u32 = 0x1A45DFA3;
/// EBML Version.
pub const EBML_VERSION: u32 = 0x4286;
/// EBML Read Version.
pub const EBML_READ_VERSION: u32 = 0x42F7;
/// Maximum ID Length.
pub const EBML_MAX_ID_LENGTH: u32 = 0x42F2;
/// Maximum Size Length.
pub const EBML_MAX_SIZE_LENGTH: u32 = 0x42F3;
/// Document Type.
pub const DOC_TYPE: u32 = 0x4282;
/// Document Type Version.
pub const DOC_TYPE_VERSION: u32 = 0x4287;
/// Document Type Read Version.
pub const DOC_TYPE_READ_VERSION: u32 = 0x4285;
/// Void filler element.
pub const VOID: u32 = 0xEC;
/// CRC-32 checksum element.
pub const CRC32: u32 = 0xBF;

// ============================================================================
// Segment Elements
// ============================================================================

/// Segment (main container).
pub const SEGMENT: u32 = 0x18538067;

/// SeekHead (index for faster seeking).
pub const SEEK_HEAD: u32 = 0x114D9B74;
/// Seek (single entry in SeekHead).
pub const SEEK: u32 = 0x4DBB;
/// SeekID (element ID being indexed).
pub const SEEK_ID: u32 = 0x53AB;
/// SeekPosition (byte position relative to segment).
pub const SEEK_POSITION: u32 = 0x53AC;

// ============================================================================
// Info Elements (Segment Information)
// ============================================================================

/// Info (segment information).
pub const INFO: u32 = 0x1549A966;
/// Segment UID (unique identifier).
pub const SEGMENT_UID: u32 = 0x73A4;
/// Timecode Scale (nanoseconds per tick).
pub const TIMECODE_SCALE: u32 = 0x2AD7B1;
/// Duration (in timecode units).
pub const DURATION: u32 = 0x4489;
/// Date UTC (nanoseconds since 2001-01-01).
pub const DATE_UTC: u32 = 0x4461;
/// Title.
pub const TITLE: u32 = 0x7BA9;
/// Muxing Application.
pub const MUXING_APP: u32 = 0x4D80;
/// Writing Application.
pub const WRITING_APP: u32 = 0x5741;

// ============================================================================
// Cluster Elements
// ============================================================================

/// Cluster (block data).
///
/// Cataloged as opaque: cluster payloads are never recursed into, only
/// carried. MediaRecorder output can hold hundreds of clusters and none of
/// them are on the duration path.
pub const CLUSTER: u32 = 0x1F43B675;
/// Cluster Timecode.
pub const TIMECODE: u32 = 0xE7;
/// SimpleBlock (frame data).
pub const SIMPLE_BLOCK: u32 = 0xA3;
/// BlockGroup.
pub const BLOCK_GROUP: u32 = 0xA0;
/// Block.
pub const BLOCK: u32 = 0xA1;

// ============================================================================
// Track Elements
// ============================================================================

/// Tracks container.
pub const TRACKS: u32 = 0x1654AE6B;
/// Track Entry.
pub const TRACK_ENTRY: u32 = 0xAE;
/// Track Number.
pub const TRACK_NUMBER: u32 = 0xD7;
/// Track UID.
pub const TRACK_UID: u32 = 0x73C5;
/// Track Type.
pub const TRACK_TYPE: u32 = 0x83;
/// Codec ID.
pub const CODEC_ID: u32 = 0x86;
/// Codec Private.
pub const CODEC_PRIVATE: u32 = 0x63A2;
/// Video settings container.
pub const VIDEO: u32 = 0xE0;
/// Audio settings container.
pub const AUDIO: u32 = 0xE1;

// ============================================================================
// Cues Elements
// ============================================================================

/// Cues (seek index).
pub const CUES: u32 = 0x1C53BB6B;
/// Cue Point.
pub const CUE_POINT: u32 = 0xBB;
/// Cue Time.
pub const CUE_TIME: u32 = 0xB3;
/// Cue Track Positions.
pub const CUE_TRACK_POSITIONS: u32 = 0xB7;

/// Semantic kind of an element's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Ordered sequence of child elements.
    Container,
    /// Big-endian unsigned integer, 0 to 8 bytes.
    UInt,
    /// IEEE754 float, 4 or 8 bytes, big-endian.
    Float,
    /// Anything carried as raw bytes: binary, strings, dates, signed ints.
    Opaque,
}

/// Catalog entry for an element ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementInfo {
    /// Human-readable element name.
    pub name: &'static str,
    /// Payload kind.
    pub kind: ElementKind,
}

/// Look up an element ID in the catalog.
///
/// Total function: unrecognized IDs come back as `Unknown`/`Opaque`.
pub fn element_info(id: u32) -> ElementInfo {
    use ElementKind::*;

    let (name, kind) = match id {
        // EBML header
        EBML => ("EBML", Container),
        EBML_VERSION => ("EBMLVersion", UInt),
        EBML_READ_VERSION => ("EBMLReadVersion", UInt),
        EBML_MAX_ID_LENGTH => ("EBMLMaxIDLength", UInt),
        EBML_MAX_SIZE_LENGTH => ("EBMLMaxSizeLength", UInt),
        DOC_TYPE => ("DocType", Opaque),
        DOC_TYPE_VERSION => ("DocTypeVersion", UInt),
        DOC_TYPE_READ_VERSION => ("DocTypeReadVersion", UInt),
        VOID => ("Void", Opaque),
        CRC32 => ("CRC-32", Opaque),

        // Signature
        0x1B538667 => ("SignatureSlot", Container),
        0x7E8A => ("SignatureAlgo", UInt),
        0x7E9A => ("SignatureHash", UInt),
        0x7EA5 => ("SignaturePublicKey", Opaque),
        0x7EB5 => ("Signature", Opaque),
        0x7E5B => ("SignatureElements", Container),
        0x7E7B => ("SignatureElementList", Container),
        0x6532 => ("SignedElement", Opaque),

        // Segment and seeking
        SEGMENT => ("Segment", Container),
        SEEK_HEAD => ("SeekHead", Container),
        SEEK => ("Seek", Container),
        SEEK_ID => ("SeekID", Opaque),
        SEEK_POSITION => ("SeekPosition", UInt),

        // Segment information
        INFO => ("Info", Container),
        SEGMENT_UID => ("SegmentUID", Opaque),
        0x7384 => ("SegmentFilename", Opaque),
        0x3CB923 => ("PrevUID", Opaque),
        0x3C83AB => ("PrevFilename", Opaque),
        0x3EB923 => ("NextUID", Opaque),
        0x3E83BB => ("NextFilename", Opaque),
        0x4444 => ("SegmentFamily", Opaque),
        0x6924 => ("ChapterTranslate", Container),
        0x69FC => ("ChapterTranslateEditionUID", UInt),
        0x69BF => ("ChapterTranslateCodec", UInt),
        0x69A5 => ("ChapterTranslateID", Opaque),
        TIMECODE_SCALE => ("TimecodeScale", UInt),
        DURATION => ("Duration", Float),
        DATE_UTC => ("DateUTC", Opaque),
        TITLE => ("Title", Opaque),
        MUXING_APP => ("MuxingApp", Opaque),
        WRITING_APP => ("WritingApp", Opaque),

        // Cluster level. The Cluster itself stays opaque.
        CLUSTER => ("Cluster", Opaque),
        TIMECODE => ("Timecode", UInt),
        0x5854 => ("SilentTracks", Container),
        0x58D7 => ("SilentTrackNumber", UInt),
        0xA7 => ("Position", UInt),
        0xAB => ("PrevSize", UInt),
        SIMPLE_BLOCK => ("SimpleBlock", Opaque),
        BLOCK_GROUP => ("BlockGroup", Container),
        BLOCK => ("Block", Opaque),
        0xA2 => ("BlockVirtual", Opaque),
        0x75A1 => ("BlockAdditions", Container),
        0xA6 => ("BlockMore", Container),
        0xEE => ("BlockAddID", UInt),
        0xA5 => ("BlockAdditional", Opaque),
        0x9B => ("BlockDuration", UInt),
        0xFA => ("ReferencePriority", UInt),
        0xFB => ("ReferenceBlock", Opaque),
        0xFD => ("ReferenceVirtual", Opaque),
        0xA4 => ("CodecState", Opaque),
        0x75A2 => ("DiscardPadding", Opaque),
        0x8E => ("Slices", Container),
        0xE8 => ("TimeSlice", Container),
        0xCC => ("LaceNumber", UInt),
        0xCD => ("FrameNumber", UInt),
        0xCB => ("BlockAdditionID", UInt),
        0xCE => ("Delay", UInt),
        0xCF => ("SliceDuration", UInt),
        0xC8 => ("ReferenceFrame", Container),
        0xC9 => ("ReferenceOffset", UInt),
        0xCA => ("ReferenceTimeCode", UInt),
        0xAF => ("EncryptedBlock", Opaque),

        // Tracks
        TRACKS => ("Tracks", Container),
        TRACK_ENTRY => ("TrackEntry", Container),
        TRACK_NUMBER => ("TrackNumber", UInt),
        TRACK_UID => ("TrackUID", UInt),
        TRACK_TYPE => ("TrackType", UInt),
        0xB9 => ("FlagEnabled", UInt),
        0x88 => ("FlagDefault", UInt),
        0x55AA => ("FlagForced", UInt),
        0x9C => ("FlagLacing", UInt),
        0x6DE7 => ("MinCache", UInt),
        0x6DF8 => ("MaxCache", UInt),
        0x23E383 => ("DefaultDuration", UInt),
        0x234E7A => ("DefaultDecodedFieldDuration", UInt),
        0x23314F => ("TrackTimecodeScale", Float),
        0x537F => ("TrackOffset", Opaque),
        0x55EE => ("MaxBlockAdditionID", UInt),
        0x536E => ("Name", Opaque),
        0x22B59C => ("Language", Opaque),
        CODEC_ID => ("CodecID", Opaque),
        CODEC_PRIVATE => ("CodecPrivate", Opaque),
        0x258688 => ("CodecName", Opaque),
        0x7446 => ("AttachmentLink", UInt),
        0x3A9697 => ("CodecSettings", Opaque),
        0x3B4040 => ("CodecInfoURL", Opaque),
        0x26B240 => ("CodecDownloadURL", Opaque),
        0xAA => ("CodecDecodeAll", UInt),
        0x6FAB => ("TrackOverlay", UInt),
        0x56AA => ("CodecDelay", UInt),
        0x56BB => ("SeekPreRoll", UInt),
        0x6624 => ("TrackTranslate", Container),
        0x66FC => ("TrackTranslateEditionUID", UInt),
        0x66BF => ("TrackTranslateCodec", UInt),
        0x66A5 => ("TrackTranslateTrackID", Opaque),

        // Video settings
        VIDEO => ("Video", Container),
        0x9A => ("FlagInterlaced", UInt),
        0x53B8 => ("StereoMode", UInt),
        0x53C0 => ("AlphaMode", UInt),
        0x53B9 => ("OldStereoMode", UInt),
        0xB0 => ("PixelWidth", UInt),
        0xBA => ("PixelHeight", UInt),
        0x54AA => ("PixelCropBottom", UInt),
        0x54BB => ("PixelCropTop", UInt),
        0x54CC => ("PixelCropLeft", UInt),
        0x54DD => ("PixelCropRight", UInt),
        0x54B0 => ("DisplayWidth", UInt),
        0x54BA => ("DisplayHeight", UInt),
        0x54B2 => ("DisplayUnit", UInt),
        0x54B3 => ("AspectRatioType", UInt),
        0x2EB524 => ("ColourSpace", Opaque),
        0x2FB523 => ("GammaValue", Float),
        0x2383E3 => ("FrameRate", Float),

        // Audio settings
        AUDIO => ("Audio", Container),
        0xB5 => ("SamplingFrequency", Float),
        0x78B5 => ("OutputSamplingFrequency", Float),
        0x9F => ("Channels", UInt),
        0x7D7B => ("ChannelPositions", Opaque),
        0x6264 => ("BitDepth", UInt),

        // Track operations
        0xE2 => ("TrackOperation", Container),
        0xE3 => ("TrackCombinePlanes", Container),
        0xE4 => ("TrackPlane", Container),
        0xE5 => ("TrackPlaneUID", UInt),
        0xE6 => ("TrackPlaneType", UInt),
        0xE9 => ("TrackJoinBlocks", Container),
        0xED => ("TrackJoinUID", UInt),
        0xC0 => ("TrickTrackUID", UInt),
        0xC1 => ("TrickTrackSegmentUID", Opaque),
        0xC6 => ("TrickTrackFlag", UInt),
        0xC7 => ("TrickMasterTrackUID", UInt),
        0xC4 => ("TrickMasterTrackSegmentUID", Opaque),

        // Content encoding
        0x6D80 => ("ContentEncodings", Container),
        0x6240 => ("ContentEncoding", Container),
        0x5031 => ("ContentEncodingOrder", UInt),
        0x5032 => ("ContentEncodingScope", UInt),
        0x5033 => ("ContentEncodingType", UInt),
        0x5034 => ("ContentCompression", Container),
        0x4254 => ("ContentCompAlgo", UInt),
        0x4255 => ("ContentCompSettings", Opaque),
        0x5035 => ("ContentEncryption", Container),
        0x47E1 => ("ContentEncAlgo", UInt),
        0x47E2 => ("ContentEncKeyID", Opaque),
        0x47E3 => ("ContentSignature", Opaque),
        0x47E4 => ("ContentSigKeyID", Opaque),
        0x47E5 => ("ContentSigAlgo", UInt),
        0x47E6 => ("ContentSigHashAlgo", UInt),

        // Cues
        CUES => ("Cues", Container),
        CUE_POINT => ("CuePoint", Container),
        CUE_TIME => ("CueTime", UInt),
        CUE_TRACK_POSITIONS => ("CueTrackPositions", Container),
        0xF7 => ("CueTrack", UInt),
        0xF1 => ("CueClusterPosition", UInt),
        0xF0 => ("CueRelativePosition", UInt),
        0xB2 => ("CueDuration", UInt),
        0x5378 => ("CueBlockNumber", UInt),
        0xEA => ("CueCodecState", UInt),
        0xDB => ("CueReference", Container),
        0x96 => ("CueRefTime", UInt),
        0x97 => ("CueRefCluster", UInt),
        0x535F => ("CueRefNumber", UInt),
        0xEB => ("CueRefCodecState", UInt),

        // Attachments
        0x1941A469 => ("Attachments", Container),
        0x61A7 => ("AttachedFile", Container),
        0x467E => ("FileDescription", Opaque),
        0x466E => ("FileName", Opaque),
        0x4660 => ("FileMimeType", Opaque),
        0x465C => ("FileData", Opaque),
        0x46AE => ("FileUID", UInt),
        0x4675 => ("FileReferral", Opaque),
        0x4661 => ("FileUsedStartTime", UInt),
        0x4662 => ("FileUsedEndTime", UInt),

        // Chapters
        0x1043A770 => ("Chapters", Container),
        0x45B9 => ("EditionEntry", Container),
        0x45BC => ("EditionUID", UInt),
        0x45BD => ("EditionFlagHidden", UInt),
        0x45DB => ("EditionFlagDefault", UInt),
        0x45DD => ("EditionFlagOrdered", UInt),
        0xB6 => ("ChapterAtom", Container),
        0x73C4 => ("ChapterUID", UInt),
        0x5654 => ("ChapterStringUID", Opaque),
        0x91 => ("ChapterTimeStart", UInt),
        0x92 => ("ChapterTimeEnd", UInt),
        0x98 => ("ChapterFlagHidden", UInt),
        0x4598 => ("ChapterFlagEnabled", UInt),
        0x6E67 => ("ChapterSegmentUID", Opaque),
        0x6EBC => ("ChapterSegmentEditionUID", UInt),
        0x63C3 => ("ChapterPhysicalEquiv", UInt),
        0x8F => ("ChapterTrack", Container),
        0x89 => ("ChapterTrackNumber", UInt),
        0x80 => ("ChapterDisplay", Container),
        0x85 => ("ChapString", Opaque),
        0x437C => ("ChapLanguage", Opaque),
        0x437E => ("ChapCountry", Opaque),
        0x6944 => ("ChapProcess", Container),
        0x6955 => ("ChapProcessCodecID", UInt),
        0x450D => ("ChapProcessPrivate", Opaque),
        0x6911 => ("ChapProcessCommand", Container),
        0x6922 => ("ChapProcessTime", UInt),
        0x6933 => ("ChapProcessData", Opaque),

        // Tags
        0x1254C367 => ("Tags", Container),
        0x7373 => ("Tag", Container),
        0x63C0 => ("Targets", Container),
        0x68CA => ("TargetTypeValue", UInt),
        0x63CA => ("TargetType", Opaque),
        0x63C5 => ("TagTrackUID", UInt),
        0x63C9 => ("TagEditionUID", UInt),
        0x63C4 => ("TagChapterUID", UInt),
        0x63C6 => ("TagAttachmentUID", UInt),
        0x67C8 => ("SimpleTag", Container),
        0x45A3 => ("TagName", Opaque),
        0x447A => ("TagLanguage", Opaque),
        0x4484 => ("TagDefault", UInt),
        0x4487 => ("TagString", Opaque),
        0x4485 => ("TagBinary", Opaque),

        _ => ("Unknown", Opaque),
    };

    ElementInfo { name, kind }
}
