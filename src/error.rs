use thiserror::Error;

/// Result type for codec and sidecar operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;

#[derive(Error, Debug)]
pub enum HuffmanError {
    /// Tree construction was attempted over an input with no symbols.
    #[error("cannot build a Huffman tree from an empty input")]
    EmptyInput,

    /// A symbol submitted for encoding has no leaf in the tree.
    #[error("symbol {0} is not present in the tree")]
    UnknownSymbol(String),

    /// A bit sequence handed to the decoder does not end on a code boundary.
    #[error("malformed bit stream: the last complete code ends at bit {valid_up_to} of {len}")]
    MalformedBitStream { valid_up_to: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

impl HuffmanError {
    /// Builds an `UnknownSymbol` out of any symbol type.
    pub fn unknown_symbol<S: std::fmt::Debug>(symbol: &S) -> Self {
        HuffmanError::UnknownSymbol(format!("{:?}", symbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            HuffmanError::EmptyInput.to_string(),
            "cannot build a Huffman tree from an empty input"
        );
        assert_eq!(
            HuffmanError::unknown_symbol(&'x').to_string(),
            "symbol 'x' is not present in the tree"
        );
        assert_eq!(
            HuffmanError::MalformedBitStream { valid_up_to: 5, len: 7 }.to_string(),
            "malformed bit stream: the last complete code ends at bit 5 of 7"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: HuffmanError = io_err.into();
        assert!(matches!(err, HuffmanError::Io(_)));
    }
}
