use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Invalid structure length: expected {expected} bytes, got {actual} bytes")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid structure identifier for {structure}: expected {expected:?}, found {actual:?}")]
    InvalidStrucId { structure: &'static str, expected: String, actual: String },

    #[error("Invalid memory alignment: address {address:#x} is not {align}-byte aligned")]
    InvalidAlignment { address: usize, align: usize },

    #[error("String too long: {length} characters exceeds field width of {max}")]
    StringTooLong { length: usize, max: usize },

    #[error("Invalid character '{char}' at position {position}")]
    InvalidCharacter { char: char, position: usize },
}

pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ProtocolError::InvalidLength { expected: 364, actual: 12 };
        assert_eq!(err.to_string(), "Invalid structure length: expected 364 bytes, got 12 bytes");

        let err = ProtocolError::StringTooLong { length: 60, max: 48 };
        assert_eq!(err.to_string(), "String too long: 60 characters exceeds field width of 48");

        let err = ProtocolError::InvalidStrucId { structure: "MQMD", expected: "MD  ".into(), actual: "OD  ".into() };
        assert_eq!(err.to_string(), "Invalid structure identifier for MQMD: expected \"MD  \", found \"OD  \"");
    }
}
