use std::fmt::Write;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serializer;

/// Lower-case hex rendering of a byte image, no separators
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Serialize a byte image as a hex string
pub fn serialize_hex<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_hex(bytes))
}

/// Deserialize a hex string back into bytes
pub fn deserialize_hex<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: &str = Deserialize::deserialize(deserializer)?;
    if !s.is_ascii() {
        return Err(serde::de::Error::custom("hex string is not ASCII"));
    }
    if s.len() % 2 != 0 {
        return Err(serde::de::Error::custom(format!("odd hex length {}", s.len())));
    }

    s.as_bytes().chunks(2).map(hex_pair).collect::<Option<Vec<u8>>>().ok_or_else(|| {
        serde::de::Error::custom(format!("invalid hex digit in {s:?}"))
    })
}

fn hex_pair(pair: &[u8]) -> Option<u8> {
    let digit = |b: u8| (b as char).to_digit(16);
    match pair {
        [hi, lo] => Some((digit(*hi)? << 4 | digit(*lo)?) as u8),
        _ => None,
    }
}

/// Serialize a four character eye-catcher as text
pub fn serialize_struc_id<S>(struc_id: &Option<[u8; 4]>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match struc_id {
        Some(id) => serializer.serialize_some(&String::from_utf8_lossy(id)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Image {
        #[serde(serialize_with = "serialize_hex", deserialize_with = "deserialize_hex")]
        bytes: Vec<u8>,
        #[serde(serialize_with = "serialize_struc_id", skip_deserializing)]
        struc_id: Option<[u8; 4]>,
    }

    #[test]
    fn test_serialize_hex() {
        let image = Image { bytes: vec![0x4d, 0x44, 0x20, 0x20, 0xff], struc_id: Some(*b"MD  ") };
        let json = serde_json::to_string(&image).unwrap();
        assert_eq!(json, r#"{"bytes":"4d442020ff","struc_id":"MD  "}"#);
    }

    #[test]
    fn test_deserialize_hex() {
        let image: Image = serde_json::from_str(r#"{"bytes":"00ff10"}"#).unwrap();
        assert_eq!(image.bytes, vec![0x00, 0xff, 0x10]);
        assert!(image.struc_id.is_none());
    }

    #[test]
    fn test_deserialize_hex_odd_length() {
        let result: Result<Image, _> = serde_json::from_str(r#"{"bytes":"abc"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_hex_rejects_non_ascii() {
        let result: Result<Image, _> = serde_json::from_str(r#"{"bytes":"aéa"}"#);
        let err = result.err().unwrap().to_string();
        assert!(err.contains("not ASCII"), "{err}");

        let result: Result<Image, _> = serde_json::from_str(r#"{"bytes":"éé"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_hex_rejects_bad_digit() {
        let result: Result<Image, _> = serde_json::from_str(r#"{"bytes":"0g"}"#);
        assert!(result.is_err());

        let result: Result<Image, _> = serde_json::from_str(r#"{"bytes":"+1"}"#);
        assert!(result.is_err());

        let image: Image = serde_json::from_str(r#"{"bytes":"ABcd"}"#).unwrap();
        assert_eq!(image.bytes, vec![0xab, 0xcd]);
    }

    #[test]
    fn test_missing_struc_id_serializes_null() {
        let image = Image { bytes: vec![], struc_id: None };
        assert_eq!(serde_json::to_string(&image).unwrap(), r#"{"bytes":"","struc_id":null}"#);
    }
}
