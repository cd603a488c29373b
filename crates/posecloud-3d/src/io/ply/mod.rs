mod parser;
mod properties;
mod writer;

pub use parser::*;
pub use properties::*;
pub use writer::*;

/// Error types for the PLY module.
#[derive(Debug, thiserror::Error)]
pub enum PlyError {
    /// Failed to read or write PLY file
    #[error("failed to read or write PLY file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a binary PLY record
    #[error("failed to serialize PLY record")]
    Serialize(#[from] bincode::error::EncodeError),

    /// Failed to deserialize a binary PLY record
    #[error("failed to deserialize PLY record")]
    Deserialize(#[from] bincode::error::DecodeError),

    /// Unsupported PLY property
    #[error("unsupported PLY property: {0}")]
    UnsupportedProperty(String),

    /// Malformed PLY header
    #[error("malformed PLY header: {0}")]
    MalformedHeader(String),

    /// Malformed vertex data
    #[error("parse error: {0}")]
    ParseError(String),
}

/// Encoding of the vertex data following the PLY header.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum PlyEncoding {
    /// One whitespace separated line per vertex
    #[default]
    Ascii,
    /// Packed little endian records
    BinaryLittleEndian,
}

impl PlyEncoding {
    /// The name used on the `format` header line.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlyEncoding::Ascii => "ascii",
            PlyEncoding::BinaryLittleEndian => "binary_little_endian",
        }
    }

    fn from_header(format: &str) -> Result<Self, PlyError> {
        match format {
            "ascii" => Ok(PlyEncoding::Ascii),
            "binary_little_endian" => Ok(PlyEncoding::BinaryLittleEndian),
            _ => Err(PlyError::UnsupportedProperty(format!("format {format}"))),
        }
    }
}
