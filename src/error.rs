use thiserror::Error;

/// Errors surfaced by the VAST codec.
///
/// Every variant is a stable category marker; the underlying cause is kept as
/// the error's `source()`.
#[derive(Error, Debug)]
pub enum VastError {
    #[error("cannot read VAST")]
    Read(#[source] std::io::Error),

    #[error("cannot decode VAST")]
    Decode(#[source] DecodeError),

    #[error("cannot encode VAST")]
    Encode(#[source] EncodeError),
}

/// Errors raised while turning bytes into a VAST document
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("document has no root element")]
    MissingRoot,

    #[error("document has more than one root element, found <{0}>")]
    MultipleRoots(String),

    #[error("element <{0}> is never closed")]
    UnclosedElement(String),

    #[error("expected root element <VAST>, found <{0}>")]
    UnexpectedRoot(String),

    #[error("missing required attribute {attribute} on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    #[error("invalid value {value:?} for {field} on <{element}>: {reason}")]
    InvalidValue {
        element: String,
        field: String,
        value: String,
        reason: String,
    },
}

/// Errors raised while turning a VAST document into bytes
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("failed to write XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("encoded document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl From<DecodeError> for VastError {
    fn from(err: DecodeError) -> Self {
        VastError::Decode(err)
    }
}

impl From<EncodeError> for VastError {
    fn from(err: EncodeError) -> Self {
        VastError::Encode(err)
    }
}

pub type Result<T> = std::result::Result<T, VastError>;
