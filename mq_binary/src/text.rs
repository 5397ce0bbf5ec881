//! Fixed-width `MQCHAR` fields.
//!
//! MQ character fields have no terminator: the queue manager pads them with
//! blanks. The C initialisers, however, usually write `""` which leaves the
//! whole field NUL, so decoding stops at the first NUL as well as trimming
//! trailing blanks.

use crate::errors::ProtocolError;
use crate::errors::Result;
use crate::types::MQCHAR;

pub const BLANK: MQCHAR = b' ' as MQCHAR;

/// All-NUL field, the value of a C `{""}` initialiser.
pub const fn nul<const N: usize>() -> [MQCHAR; N] {
    [0; N]
}

/// All-blank field.
pub const fn blank<const N: usize>() -> [MQCHAR; N] {
    [BLANK; N]
}

/// NUL padded field, the value of a C string initialiser such as `{"AMQ.*"}`.
pub const fn chars<const N: usize>(s: &[u8]) -> [MQCHAR; N] {
    padded(s, 0)
}

/// Blank padded field.
pub const fn blank_padded<const N: usize>(s: &[u8]) -> [MQCHAR; N] {
    padded(s, b' ')
}

const fn padded<const N: usize>(s: &[u8], fill: u8) -> [MQCHAR; N] {
    assert!(s.len() <= N, "initialiser is wider than the field");
    let mut out = [fill as MQCHAR; N];
    let mut i = 0;
    while i < s.len() {
        out[i] = s[i] as MQCHAR;
        i += 1;
    }
    out
}

/// Reinterprets a character field as bytes.
#[inline]
pub fn as_bytes(field: &[MQCHAR]) -> &[u8] {
    // MQCHAR is a one byte integer on every target
    unsafe { std::slice::from_raw_parts(field.as_ptr() as *const u8, field.len()) }
}

/// Writes `value` into `field`, padding with blanks.
pub fn set_text(field: &mut [MQCHAR], value: &str) -> Result<()> {
    if let Some((position, char)) = value.chars().enumerate().find(|(_, ch)| !ch.is_ascii()) {
        return Err(ProtocolError::InvalidCharacter { char, position });
    }

    if value.len() > field.len() {
        return Err(ProtocolError::StringTooLong { length: value.len(), max: field.len() });
    }

    let (head, tail) = field.split_at_mut(value.len());
    for (slot, byte) in head.iter_mut().zip(value.bytes()) {
        *slot = byte as MQCHAR;
    }
    tail.fill(BLANK);
    Ok(())
}

/// Decodes a character field, stopping at the first NUL and dropping trailing blanks.
pub fn text(field: &[MQCHAR]) -> String {
    let bytes = as_bytes(field);
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).trim_end_matches(' ').to_string()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_const_builders() {
        const FMT: [MQCHAR; 8] = blank_padded(b"MQSTR");
        const DYN: [MQCHAR; 48] = chars(b"AMQ.*");

        assert_eq!(as_bytes(&FMT), b"MQSTR   ");
        assert_eq!(&as_bytes(&DYN)[..6], b"AMQ.*\0");
        assert!(as_bytes(&DYN)[5..].iter().all(|&b| b == 0));
        assert!(as_bytes(&nul::<12>()).iter().all(|&b| b == 0));
        assert!(as_bytes(&blank::<4>()).iter().all(|&b| b == b' '));
    }

    #[test]
    fn test_set_text_pads_with_blanks() {
        let mut field = nul::<12>();
        set_text(&mut field, "QM1").unwrap();
        assert_eq!(as_bytes(&field), b"QM1         ");
        assert_eq!(text(&field), "QM1");
    }

    #[test]
    fn test_set_text_exact_width() {
        let mut field = nul::<4>();
        set_text(&mut field, "RFH2").unwrap();
        assert_eq!(text(&field), "RFH2");
    }

    #[test]
    fn test_set_text_too_long() {
        let mut field = nul::<8>();
        let err = set_text(&mut field, "MQHRF2XYZ").unwrap_err();
        assert_eq!(err, ProtocolError::StringTooLong { length: 9, max: 8 });
        assert!(as_bytes(&field).iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_text_rejects_non_ascii() {
        let mut field = nul::<48>();
        let err = set_text(&mut field, "QUEUE.É").unwrap_err();
        assert_eq!(err, ProtocolError::InvalidCharacter { char: 'É', position: 6 });
    }

    #[test]
    fn test_text_of_nul_field_is_empty() {
        assert_eq!(text(&nul::<48>()), "");
        assert_eq!(text(&blank::<48>()), "");
    }

    #[test]
    fn test_text_stops_at_nul() {
        let field: [MQCHAR; 8] = chars(b"AB\0CD");
        assert_eq!(text(&field), "AB");
    }

    proptest! {
        #[test]
        fn prop_set_text_then_text_recovers_trimmed_value(value in "[A-Z0-9._/%]{0,48}") {
            let mut field = nul::<48>();
            set_text(&mut field, &value).unwrap();
            prop_assert_eq!(text(&field), value.trim_end_matches(' '));
            prop_assert!(as_bytes(&field)[value.len()..].iter().all(|&b| b == b' '));
        }
    }
}
