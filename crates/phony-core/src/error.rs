#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid splitter {splitter:?}: {reason}")]
    InvalidSplitter { splitter: String, reason: String },
}

/// Accept raw message bytes only if they are text.
pub fn decode_message(bytes: &[u8]) -> Result<&str, TranslateError> {
    std::str::from_utf8(bytes).map_err(|e| TranslateError::InvalidInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_utf8() {
        assert_eq!(decode_message(b"Alfa Bravo").unwrap(), "Alfa Bravo");
        assert_eq!(decode_message(b"").unwrap(), "");
    }

    #[test]
    fn decode_rejects_binary() {
        let err = decode_message(&[0x41, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, TranslateError::InvalidInput(_)));
        assert!(err.to_string().starts_with("invalid input"));
    }
}
