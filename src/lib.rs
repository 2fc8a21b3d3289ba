//! VAST 4.2 document model with a lossless XML codec.
//!
//! ```no_run
//! let vast = vast_codec::parse_vast(r#"<VAST version="4.2"></VAST>"#)?;
//! let xml = vast.to_xml_string()?;
//! # Ok::<(), vast_codec::VastError>(())
//! ```

pub mod error;
pub mod fetch;
pub mod models;
pub mod parser;
pub mod serializer;
pub mod types;
pub mod xml;

pub use error::{DecodeError, EncodeError, Result, VastError};
pub use models::*;
pub use parser::{from_slice, parse_vast, read};
pub use types::*;

pub mod async_api {
    use crate::error::Result;
    use crate::models::Vast;

    pub async fn parse_vast(xml: &str) -> Result<Vast> {
        // Decoding is CPU-bound, so we can just wrap the sync version
        crate::parser::parse_vast(xml)
    }

    pub async fn from_slice(bytes: &[u8]) -> Result<Vast> {
        crate::parser::from_slice(bytes)
    }

    pub async fn to_xml_string(vast: &Vast) -> Result<String> {
        vast.to_xml_string()
    }
}
