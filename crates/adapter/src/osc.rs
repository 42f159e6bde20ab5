//! OSC 1.0 message codec.
//!
//! Only single messages are decoded; bundles are rejected. Arguments the
//! message log cares about (`i`, `f`, `s`) decode to typed [`Arg`] values,
//! every other standard tag is skipped over by its payload size and kept as
//! [`Arg::Other`] so positional walks stay aligned.
//!
//! Wire layout:
//!
//! ```text
//! /dirt/play\0\0  ,sisf\0\0\0  orbit\0\0\0  <i32 BE>  s\0\0\0  bd\0\0 ...
//! ^ address       ^ type tags  ^ arguments, each padded to 4 bytes
//! ```

use thiserror::Error;

use crate::types::{Arg, ArgKind, Record};

const BUNDLE_TAG: &[u8] = b"#bundle\0";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("datagram is empty")]
    Empty,
    #[error("bundles are not supported")]
    Bundle,
    #[error("address does not start with '/'")]
    BadAddress,
    #[error("missing type tag string")]
    MissingTypeTags,
    #[error("unsupported type tag '{0}'")]
    UnsupportedTag(char),
    #[error("string is not NUL terminated")]
    Unterminated,
    #[error("string is not valid UTF-8")]
    InvalidUtf8,
    #[error("payload truncated at byte {0}")]
    Truncated(usize),
}

/// Payload size in bytes of a fixed-size tag, `None` for strings, blobs and unknown tags.
fn fixed_payload_len(tag: char) -> Option<usize> {
    match tag {
        'i' | 'f' | 'c' | 'r' | 'm' => Some(4),
        'h' | 't' | 'd' => Some(8),
        'T' | 'F' | 'N' | 'I' | '[' | ']' => Some(0),
        _ => None,
    }
}

fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.buf.len())
            .ok_or(DecodeError::Truncated(self.pos))?;
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn word(&mut self) -> Result<[u8; 4], DecodeError> {
        let mut out = [0u8; 4];
        out.copy_from_slice(self.take(4)?);
        Ok(out)
    }

    fn string(&mut self) -> Result<&'a str, DecodeError> {
        let rest = &self.buf[self.pos..];
        let nul = rest
            .iter()
            .position(|&b| b == 0)
            .ok_or(DecodeError::Unterminated)?;
        let raw = self.take(padded_len(nul + 1))?;
        std::str::from_utf8(&raw[..nul]).map_err(|_| DecodeError::InvalidUtf8)
    }

    fn blob(&mut self) -> Result<(), DecodeError> {
        let len = i32::from_be_bytes(self.word()?);
        let len = usize::try_from(len).map_err(|_| DecodeError::Truncated(self.pos))?;
        self.take(padded_len(len))?;
        Ok(())
    }
}

/// Decode one OSC message datagram.
pub fn decode_message(buf: &[u8]) -> Result<Record, DecodeError> {
    if buf.is_empty() {
        return Err(DecodeError::Empty);
    }
    if buf.starts_with(BUNDLE_TAG) {
        return Err(DecodeError::Bundle);
    }

    let mut r = Reader::new(buf);
    let address = r.string()?;
    if !address.starts_with('/') {
        return Err(DecodeError::BadAddress);
    }
    if r.at_end() {
        return Err(DecodeError::MissingTypeTags);
    }
    let tags = r.string()?;
    let Some(tags) = tags.strip_prefix(',') else {
        return Err(DecodeError::MissingTypeTags);
    };

    let mut args = Vec::with_capacity(tags.len());
    for tag in tags.chars() {
        let arg = match ArgKind::from_tag(tag) {
            Some(ArgKind::Int) => Arg::Int(i32::from_be_bytes(r.word()?)),
            Some(ArgKind::Float) => Arg::Float(f32::from_be_bytes(r.word()?)),
            Some(ArgKind::Str) => Arg::Str(r.string()?.to_string()),
            None if tag == 'b' => {
                r.blob()?;
                Arg::Other(tag)
            }
            None => {
                let len = fixed_payload_len(tag).ok_or(DecodeError::UnsupportedTag(tag))?;
                r.take(len)?;
                Arg::Other(tag)
            }
        };
        args.push(arg);
    }

    Ok(Record {
        address: address.to_string(),
        args,
    })
}

fn push_padded_str(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(s.as_bytes());
    let len = s.len() + 1;
    out.resize(out.len() + padded_len(len) - s.len(), 0);
}

/// Encode a record as an OSC message.
///
/// [`Arg::Other`] tags are written with a zeroed payload of their wire size
/// (an empty blob for `b`), so they decode back to the same tag.
pub fn encode_message(record: &Record) -> Vec<u8> {
    let mut out = Vec::with_capacity(64);
    push_padded_str(&mut out, &record.address);

    let mut tags = String::with_capacity(record.args.len() + 1);
    tags.push(',');
    for arg in &record.args {
        tags.push(match arg {
            Arg::Int(_) => 'i',
            Arg::Float(_) => 'f',
            Arg::Str(_) => 's',
            Arg::Other(tag) => *tag,
        });
    }
    push_padded_str(&mut out, &tags);

    for arg in &record.args {
        match arg {
            Arg::Int(v) => out.extend_from_slice(&v.to_be_bytes()),
            Arg::Float(v) => out.extend_from_slice(&v.to_be_bytes()),
            Arg::Str(s) => push_padded_str(&mut out, s),
            Arg::Other('b') => out.extend_from_slice(&0i32.to_be_bytes()),
            Arg::Other(tag) => {
                let len = fixed_payload_len(*tag).unwrap_or(0);
                out.resize(out.len() + len, 0);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_len() {
        assert_eq!(padded_len(0), 0);
        assert_eq!(padded_len(1), 4);
        assert_eq!(padded_len(4), 4);
        assert_eq!(padded_len(5), 8);
    }

    #[test]
    fn test_decode_hand_built_message() {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"/a\0\0");
        buf.extend_from_slice(b",isf\0\0\0\0");
        buf.extend_from_slice(&7i32.to_be_bytes());
        buf.extend_from_slice(b"hey\0");
        buf.extend_from_slice(&0.5f32.to_be_bytes());

        let rec = decode_message(&buf).unwrap();
        assert_eq!(rec.address, "/a");
        assert_eq!(
            rec.args,
            vec![Arg::Int(7), Arg::Str("hey".into()), Arg::Float(0.5)]
        );
    }

    #[test]
    fn test_string_exactly_four_bytes_gets_full_pad_word() {
        // "/abc" + NUL needs 8 bytes.
        let mut buf = Vec::new();
        buf.extend_from_slice(b"/abc\0\0\0\0");
        buf.extend_from_slice(b",\0\0\0");
        let rec = decode_message(&buf).unwrap();
        assert_eq!(rec.address, "/abc");
        assert!(rec.args.is_empty());
    }

    #[test]
    fn test_decoded_kinds_follow_type_tags() {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"/k\0\0");
        buf.extend_from_slice(b",iSfT\0\0\0");
        buf.extend_from_slice(&7i32.to_be_bytes());
        buf.extend_from_slice(b"sym\0");
        buf.extend_from_slice(&0.5f32.to_be_bytes());
        let rec = decode_message(&buf).unwrap();

        let kinds: Vec<_> = rec.args.iter().map(Arg::kind).collect();
        let expected: Vec<_> = "iSfT".chars().map(ArgKind::from_tag).collect();
        assert_eq!(kinds, expected);
        assert_eq!(rec.args[1], Arg::Str("sym".to_string()));
        assert_eq!(rec.args[3], Arg::Other('T'));
    }

    #[test]
    fn test_skips_payloads_of_other_tags() {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"/x\0\0");
        buf.extend_from_slice(b",dTbi\0\0\0");
        buf.extend_from_slice(&1.5f64.to_be_bytes());
        buf.extend_from_slice(&3i32.to_be_bytes());
        buf.extend_from_slice(&[1, 2, 3, 0]);
        buf.extend_from_slice(&42i32.to_be_bytes());

        let rec = decode_message(&buf).unwrap();
        assert_eq!(
            rec.args,
            vec![Arg::Other('d'), Arg::Other('T'), Arg::Other('b'), Arg::Int(42)]
        );
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(decode_message(&[]), Err(DecodeError::Empty));
        assert_eq!(
            decode_message(b"#bundle\0\0\0\0\0\0\0\0\x01"),
            Err(DecodeError::Bundle)
        );
        assert_eq!(decode_message(b"abc\0"), Err(DecodeError::BadAddress));
        assert_eq!(decode_message(b"/abc"), Err(DecodeError::Unterminated));
        assert_eq!(decode_message(b"/ab\0"), Err(DecodeError::MissingTypeTags));
        assert_eq!(
            decode_message(b"/ab\0i\0\0\0"),
            Err(DecodeError::MissingTypeTags)
        );
        assert_eq!(
            decode_message(b"/ab\0,q\0\0"),
            Err(DecodeError::UnsupportedTag('q'))
        );
        assert!(matches!(
            decode_message(b"/ab\0,i\0\0\0\0"),
            Err(DecodeError::Truncated(_))
        ));
        assert_eq!(
            decode_message(b"/\xff\0\0,\0\0\0"),
            Err(DecodeError::InvalidUtf8)
        );
    }

    #[test]
    fn test_encode_matches_wire_layout() {
        let rec = Record::new("/a", vec![Arg::Int(1), Arg::Str("xyz".into())]);
        let buf = encode_message(&rec);
        let mut expected = Vec::new();
        expected.extend_from_slice(b"/a\0\0");
        expected.extend_from_slice(b",is\0");
        expected.extend_from_slice(&1i32.to_be_bytes());
        expected.extend_from_slice(b"xyz\0");
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_encoded_other_tags_decode_to_same_tags() {
        let rec = Record::new(
            "/dirt/play",
            vec![Arg::Other('h'), Arg::Other('b'), Arg::Other('N'), Arg::Float(2.0)],
        );
        assert_eq!(decode_message(&encode_message(&rec)).unwrap(), rec);
    }
}
