//! Scalar types of the VAST 4.2 schema.
//!
//! Pattern-constrained strings are kept as opaque text: the decoder accepts
//! whatever the document carries and the encoder writes it back unchanged.
//! Enumerations are open, so values outside the published set survive a
//! decode/encode cycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The only VAST version this crate models
pub const VAST_VERSION: &str = "4.2";

/// The canonical VAST XML namespace
pub const VAST_NAMESPACE: &str = "http://www.iab.com/VAST";

/// A boolean written as a digit: `true` is `"1"`, `false` is `"0"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericBool(pub bool);

impl NumericBool {
    pub fn as_str(self) -> &'static str {
        if self.0 { "1" } else { "0" }
    }
}

impl fmt::Display for NumericBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected \"1\" or \"0\", found {0:?}")]
pub struct ParseNumericBoolError(pub String);

/// Accepts `"1"`/`"0"` and the XML Schema spellings `"true"`/`"false"`.
/// Anything else is rejected rather than silently read as `false`.
impl FromStr for NumericBool {
    type Err = ParseNumericBoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "true" => Ok(NumericBool(true)),
            "0" | "false" => Ok(NumericBool(false)),
            other => Err(ParseNumericBoolError(other.to_string())),
        }
    }
}

impl From<bool> for NumericBool {
    fn from(value: bool) -> Self {
        NumericBool(value)
    }
}

impl From<NumericBool> for bool {
    fn from(value: NumericBool) -> Self {
        value.0
    }
}

macro_rules! pattern_string {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                $name(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pattern_string!(
    /// A duration in the form `hh:mm:ss` or `hh:mm:ss.mmm`.
    Duration
);

pattern_string!(
    /// A time offset, either `hh:mm:ss[.mmm]` or a percentage such as `25%`.
    ///
    /// Pattern: `(\d{2}:[0-5]\d:[0-5]\d(\.\d\d\d)?|1?\d?\d(\.?\d)*%)`
    Offset
);

pattern_string!(
    /// The point after which a linear creative may be skipped.
    ///
    /// Same pattern as [`Offset`].
    SkipOffset
);

pattern_string!(
    /// Horizontal icon placement: pixels from the left, or `left` / `right`.
    XPosition
);

pattern_string!(
    /// Vertical icon placement: pixels from the top, or `top` / `bottom`.
    YPosition
);

pattern_string!(
    /// A three letter ISO-4217 currency code, pattern `[a-zA-Z]{3}`.
    Currency
);

/// A decimal number kept exactly as written, so `25.00` stays `25.00`.
///
/// Parsing checks that the text is a number; the text itself is what gets
/// encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decimal(String);

impl Decimal {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_f64(&self) -> f64 {
        // Non-numeric text can only come in through serde; it reads as zero
        self.0.parse().unwrap_or_default()
    }
}

impl FromStr for Decimal {
    type Err = std::num::ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<f64>()?;
        Ok(Decimal(s.to_string()))
    }
}

impl From<f64> for Decimal {
    fn from(value: f64) -> Self {
        Decimal(value.to_string())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A value outside the published set, kept as written.
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Other(value) => value,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::Other(String::new())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($text => $name::$variant,)+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($text => $name::$variant,)+
                    _ => $name::Other(value),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(value) => value,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum!(
    /// The kind of content an ad carries
    AdType {
        Video => "video",
        Audio => "audio",
        Hybrid => "hybrid",
    }
);

string_enum!(
    /// How a media file is delivered to the player
    Delivery {
        Streaming => "streaming",
        Progressive => "progressive",
    }
);

string_enum!(
    /// Pricing model
    Model {
        Cpc => "CPC",
        Cpm => "CPM",
        Cpe => "CPE",
        Cpv => "CPV",
    }
);

string_enum!(
    /// Which companions must be displayed
    Required {
        All => "all",
        Any => "any",
        None => "none",
    }
);

string_enum!(
    /// When a companion is rendered relative to the linear creative
    RenderingMode {
        Default => "default",
        EndCard => "end-card",
        Concurrent => "concurrent",
    }
);

string_enum!(
    /// Tracking event names
    Event {
        Mute => "mute",
        Unmute => "unmute",
        Pause => "pause",
        Resume => "resume",
        Rewind => "rewind",
        Skip => "skip",
        PlayerExpand => "playerExpand",
        PlayerCollapse => "playerCollapse",
        Loaded => "loaded",
        Start => "start",
        FirstQuartile => "firstQuartile",
        Midpoint => "midpoint",
        ThirdQuartile => "thirdQuartile",
        Complete => "complete",
        Progress => "progress",
        CloseLinear => "closeLinear",
        CreativeView => "creativeView",
        AcceptInvitation => "acceptInvitation",
        AdExpand => "adExpand",
        AdCollapse => "adCollapse",
        Minimize => "minimize",
        Close => "close",
        OverlayViewDuration => "overlayViewDuration",
        OtherAdInteraction => "otherAdInteraction",
        InteractiveStart => "interactiveStart",
    }
);
