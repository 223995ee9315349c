//! The EBML element tree: recursive decode into typed nodes and exact
//! two-pass re-serialization.
//!
//! A [`Container`] keeps two representations of its payload: the parsed
//! `children` and the serialized `data` bytes. `data` is authoritative for a
//! parent's encode and is only rewritten by an explicit [`Container::sync`],
//! so any subtree that is never synced re-emits byte for byte, regardless of
//! how non-canonical its original framing was. After mutating a leaf, callers
//! must sync every ancestor from the child outward.

use crate::ebml;
use crate::elements::{self, ElementKind};
use crate::error::{Result, WebmError};

/// Maximum container nesting depth.
///
/// Well-formed WebM stays in single digits; the limit only exists so a
/// crafted buffer of nested container headers cannot exhaust the stack.
pub const MAX_RECURSION_DEPTH: u32 = 64;

/// One `(id, element)` entry in a container's ordered child sequence.
#[derive(Debug, Clone)]
pub struct Child {
    /// Element ID, marker bits included.
    pub id: u32,
    /// The parsed element.
    pub element: Element,
}

/// A parsed EBML element.
///
/// One arm per catalog kind; decode and encode are matches over the tag.
#[derive(Debug, Clone)]
pub enum Element {
    /// Big-endian unsigned integer payload.
    UInt(Vec<u8>),
    /// IEEE754 float payload, 4 or 8 bytes.
    Float(Vec<u8>),
    /// Payload carried as raw bytes.
    Opaque(Vec<u8>),
    /// Nested element sequence.
    Container(Container),
}

impl Element {
    /// A fresh 64-bit float leaf.
    pub fn new_float(value: f64) -> Self {
        Element::Float(ebml::encode_float64(value))
    }

    /// The element's payload in its current serialized form.
    pub fn payload(&self) -> &[u8] {
        match self {
            Element::UInt(data) | Element::Float(data) | Element::Opaque(data) => data,
            Element::Container(container) => &container.data,
        }
    }

    /// Decoded unsigned-integer value, if this is a UInt leaf.
    pub fn uint_value(&self) -> Option<u64> {
        match self {
            Element::UInt(data) => Some(ebml::decode_uint(data)),
            _ => None,
        }
    }

    /// Decoded float value, if this is a Float leaf with a readable width.
    pub fn float_value(&self) -> Option<f64> {
        match self {
            Element::Float(data) => ebml::decode_float(data),
            _ => None,
        }
    }

    /// Store an unsigned integer, re-encoding the payload at minimal width.
    ///
    /// No-op on non-UInt elements.
    pub fn set_uint(&mut self, value: u64) {
        if let Element::UInt(data) = self {
            *data = ebml::encode_uint(value);
        }
    }

    /// Store a float, keeping the payload's width: 4-byte payloads are
    /// rewritten as f32, everything else as f64.
    ///
    /// No-op on non-Float elements.
    pub fn set_float(&mut self, value: f64) {
        if let Element::Float(data) = self {
            *data = if data.len() == 4 {
                ebml::encode_float32(value as f32)
            } else {
                ebml::encode_float64(value)
            };
        }
    }
}

/// An ordered sequence of child elements plus its serialized payload.
#[derive(Debug, Clone, Default)]
pub struct Container {
    /// Serialized payload, in sync with `children` as of the last parse or
    /// [`Container::sync`].
    pub(crate) data: Vec<u8>,
    /// Parsed children, in file order.
    pub children: Vec<Child>,
}

impl Container {
    /// Parse a byte buffer as a container payload.
    pub fn parse(data: Vec<u8>) -> Result<Self> {
        Self::parse_at_depth(data, 0)
    }

    fn parse_at_depth(data: Vec<u8>, depth: u32) -> Result<Self> {
        if depth > MAX_RECURSION_DEPTH {
            return Err(WebmError::RecursionLimit { depth });
        }
        let children = Self::parse_children(&data, depth)?;
        Ok(Self { data, children })
    }

    fn parse_children(data: &[u8], depth: u32) -> Result<Vec<Child>> {
        let mut children = Vec::new();
        let mut pos = 0usize;

        while pos < data.len() {
            let id = ebml::read_id(data, &mut pos)?;
            let len = ebml::read_size(data, &mut pos)?;
            // Clamp rather than fail on a size that runs past the buffer;
            // truncated recordings are the expected input here.
            let claimed_end = (pos as u64).saturating_add(len);
            let end = claimed_end.min(data.len() as u64) as usize;
            if claimed_end > data.len() as u64 {
                log::debug!(
                    "element 0x{id:X} size {len} clamped to {} available bytes",
                    end - pos
                );
            }
            let payload = data[pos..end].to_vec();

            let info = elements::element_info(id);
            let element = match info.kind {
                ElementKind::Container => {
                    Element::Container(Container::parse_at_depth(payload, depth + 1)?)
                }
                ElementKind::UInt => Element::UInt(payload),
                ElementKind::Float => Element::Float(payload),
                ElementKind::Opaque => Element::Opaque(payload),
            };
            children.push(Child { id, element });
            pos = end;
        }

        Ok(children)
    }

    /// Serialized payload bytes, as of the last parse or sync.
    pub fn payload(&self) -> &[u8] {
        &self.data
    }

    /// First child with the given ID.
    pub fn child(&self, id: u32) -> Option<&Element> {
        self.children
            .iter()
            .find(|child| child.id == id)
            .map(|child| &child.element)
    }

    /// Mutable access to the first child with the given ID.
    pub fn child_mut(&mut self, id: u32) -> Option<&mut Element> {
        self.children
            .iter_mut()
            .find(|child| child.id == id)
            .map(|child| &mut child.element)
    }

    /// Append a child element.
    pub fn push(&mut self, id: u32, element: Element) {
        self.children.push(Child { id, element });
    }

    /// Reserialize the child sequence into this container's payload.
    ///
    /// Two passes: a draft pass sums the framed length of every child so the
    /// output buffer can be allocated up front, then the real pass writes ID
    /// varint, size varint, and payload. Children contribute their current
    /// payload bytes, so untouched subtrees are copied verbatim.
    pub fn sync(&mut self) {
        let mut total = 0usize;
        for child in &self.children {
            let payload_len = child.element.payload().len();
            total += ebml::id_len(child.id) + ebml::size_len(payload_len as u64) + payload_len;
        }

        let mut out = Vec::with_capacity(total);
        for child in &self.children {
            let payload = child.element.payload();
            ebml::write_id(&mut out, child.id);
            ebml::write_size(&mut out, payload.len() as u64);
            out.extend_from_slice(payload);
        }
        debug_assert_eq!(out.len(), total);

        self.data = out;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{DURATION, INFO, TIMECODE_SCALE};

    /// Info { TimecodeScale = 1_000_000 } with definite sizes.
    fn info_with_timecode_scale() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&[0x15, 0x49, 0xA9, 0x66]); // Info ID
        data.push(0x87); // size 7
        data.extend_from_slice(&[0x2A, 0xD7, 0xB1]); // TimecodeScale ID
        data.push(0x83); // size 3
        data.extend_from_slice(&[0x0F, 0x42, 0x40]); // 1_000_000
        data
    }

    #[test]
    fn test_parse_nested() {
        let root = Container::parse(info_with_timecode_scale()).unwrap();
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].id, INFO);

        let info = match &root.children[0].element {
            Element::Container(c) => c,
            other => panic!("expected container, got {other:?}"),
        };
        assert_eq!(info.children.len(), 1);
        assert_eq!(
            info.child(TIMECODE_SCALE).unwrap().uint_value(),
            Some(1_000_000)
        );
    }

    #[test]
    fn test_roundtrip_without_mutation_is_identity() {
        let bytes = info_with_timecode_scale();
        let mut root = Container::parse(bytes.clone()).unwrap();
        root.sync();
        assert_eq!(root.data, bytes);
    }

    #[test]
    fn test_unsynced_container_keeps_original_bytes() {
        // A non-minimal size encoding (2 bytes for size 3) must survive as
        // long as the container holding it is never synced.
        let mut inner = Vec::new();
        inner.extend_from_slice(&[0x2A, 0xD7, 0xB1]);
        inner.extend_from_slice(&[0x40, 0x03]); // overlong size 3
        inner.extend_from_slice(&[0x0F, 0x42, 0x40]);

        let mut data = Vec::new();
        data.extend_from_slice(&[0x15, 0x49, 0xA9, 0x66]);
        data.push(0x88); // size 8
        data.extend_from_slice(&inner);

        let mut root = Container::parse(data.clone()).unwrap();
        root.sync();
        assert_eq!(root.data, data);
    }

    #[test]
    fn test_unknown_element_roundtrips_as_opaque() {
        let mut data = Vec::new();
        data.extend_from_slice(&[0x7F, 0xFF]); // unknown 2-byte ID
        data.push(0x84);
        data.extend_from_slice(&[1, 2, 3, 4]);

        let mut root = Container::parse(data.clone()).unwrap();
        assert!(matches!(root.children[0].element, Element::Opaque(_)));
        root.sync();
        assert_eq!(root.data, data);
    }

    #[test]
    fn test_nesting_beyond_limit_is_an_error() {
        use crate::ebml::write_size;
        use crate::error::WebmError;

        // BlockGroup nested 200 deep, built innermost-out. Each level is
        // just a 1-byte ID plus a size varint, so a few hundred bytes of
        // input would otherwise cost a stack frame per level.
        let mut payload = Vec::new();
        for _ in 0..200 {
            let mut frame = vec![0xA0];
            write_size(&mut frame, payload.len() as u64);
            frame.extend_from_slice(&payload);
            payload = frame;
        }

        assert!(matches!(
            Container::parse(payload),
            Err(WebmError::RecursionLimit { .. })
        ));
    }

    #[test]
    fn test_nesting_within_limit_parses() {
        use crate::ebml::write_size;

        let mut payload = Vec::new();
        for _ in 0..super::MAX_RECURSION_DEPTH {
            let mut frame = vec![0xA0];
            write_size(&mut frame, payload.len() as u64);
            frame.extend_from_slice(&payload);
            payload = frame;
        }

        let mut root = Container::parse(payload.clone()).unwrap();
        root.sync();
        assert_eq!(root.data, payload);
    }

    #[test]
    fn test_truncated_payload_is_clamped() {
        let mut data = Vec::new();
        data.extend_from_slice(&[0x2A, 0xD7, 0xB1]);
        data.push(0x88); // claims 8 bytes
        data.extend_from_slice(&[0x0F, 0x42]); // only 2 present

        let root = Container::parse(data).unwrap();
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].element.payload(), &[0x0F, 0x42]);
    }

    #[test]
    fn test_set_uint_reencodes_minimal() {
        let mut el = Element::UInt(vec![0x00, 0x0F, 0x42, 0x40]);
        el.set_uint(1_000_000);
        assert_eq!(el.payload(), &[0x0F, 0x42, 0x40]);
        el.set_uint(0);
        assert_eq!(el.payload(), &[] as &[u8]);
    }

    #[test]
    fn test_set_float_preserves_width() {
        let mut narrow = Element::Float(vec![0x3F, 0x80, 0x00, 0x00]); // 1.0f32
        narrow.set_float(2.5);
        assert_eq!(narrow.payload().len(), 4);
        assert_eq!(narrow.float_value(), Some(2.5));

        let mut wide = Element::new_float(0.0);
        wide.set_float(900.0);
        assert_eq!(wide.payload().len(), 8);
        assert_eq!(wide.float_value(), Some(900.0));
    }

    #[test]
    fn test_float_with_odd_width_is_unreadable() {
        let el = Element::Float(vec![0x00, 0x01]);
        assert_eq!(el.float_value(), None);
    }

    #[test]
    fn test_sync_after_append_grows_by_framed_size() {
        let mut root = Container::parse(info_with_timecode_scale()).unwrap();
        let before = root.data.len();

        if let Some(Element::Container(info)) = root.child_mut(INFO) {
            info.push(DURATION, Element::new_float(2500.0));
            info.sync();
        } else {
            panic!("Info missing");
        }
        root.sync();

        // Duration frame: 2-byte ID + 1-byte size + 8-byte payload.
        assert_eq!(root.data.len(), before + 11);
    }
}
