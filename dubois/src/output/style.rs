//! Value types for visual options: lengths and fonts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A CSS-style length.
///
/// Serializes as its display form (`"405px"`, `"25%"`).
///
/// # Example
///
/// ```rust
/// use dubois::Length;
///
/// assert_eq!(Length::px(405.0).to_string(), "405px");
/// assert_eq!("25%".parse::<Length>().unwrap(), Length::pct(25.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Length {
    /// Absolute size in pixels
    Px(f64),
    /// Share of the containing width
    Percent(f64),
}

impl Length {
    /// Pixel length.
    pub fn px(value: f64) -> Self {
        Length::Px(value)
    }

    /// Percentage length.
    pub fn pct(value: f64) -> Self {
        Length::Percent(value)
    }

    /// The bare number, without its unit.
    pub fn value(&self) -> f64 {
        match self {
            Length::Px(v) | Length::Percent(v) => *v,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

impl FromStr for Length {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || Error::InvalidLength(s.to_string());

        if let Some(num) = trimmed.strip_suffix("px") {
            num.trim().parse().map(Length::Px).map_err(|_| invalid())
        } else if let Some(num) = trimmed.strip_suffix('%') {
            num.trim().parse().map(Length::Percent).map_err(|_| invalid())
        } else {
            Err(invalid())
        }
    }
}

impl From<Length> for String {
    fn from(length: Length) -> Self {
        length.to_string()
    }
}

impl TryFrom<String> for Length {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

const GOOGLE_FONTS_CSS: &str = "https://fonts.googleapis.com/css2";

/// A font family entry in a font stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Font {
    /// Web font served by Google Fonts; renderers import it before use
    Google { name: String },
    /// Family name resolved by the renderer's environment (e.g. `Georgia`, `Serif`)
    System(String),
}

impl Font {
    /// A Google Fonts family.
    pub fn google(name: impl Into<String>) -> Self {
        Font::Google { name: name.into() }
    }

    /// A locally resolved family.
    pub fn system(name: impl Into<String>) -> Self {
        Font::System(name.into())
    }

    /// The CSS family name.
    pub fn family(&self) -> &str {
        match self {
            Font::Google { name } | Font::System(name) => name,
        }
    }

    /// Stylesheet URL to import for web fonts; `None` for system fonts.
    pub fn import_url(&self) -> Option<String> {
        match self {
            Font::Google { name } => Some(format!(
                "{}?family={}&display=swap",
                GOOGLE_FONTS_CSS,
                name.replace(' ', "+")
            )),
            Font::System(_) => None,
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.family())
    }
}
