//! URL parsing and identity wrappers for post resolution.

use std::fmt;

use url::{ParseError, Url};

use super::error::HarvestError;

/// Alphabet used by post shortcodes, ordered by digit value.
const SHORTCODE_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Path segments that precede a shortcode in a post URL.
const POST_MARKERS: [&str; 4] = ["p", "reel", "reels", "tv"];

/// Shortcodes of private posts carry a suffix after the public part.
const PRIVATE_SHORTCODE_THRESHOLD: usize = 28;
const PUBLIC_SHORTCODE_LENGTH: usize = 11;

/// Numeric identifier of a post on the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(u64);

impl PostId {
    /// Wraps a raw numeric post identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// URL-safe post identifier as it appears in a post URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcode(String);

impl Shortcode {
    /// Validates that every character belongs to the shortcode alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::InvalidShortcode`] when the value is empty or
    /// contains a character outside `A-Z a-z 0-9 - _`.
    pub fn new(value: &str) -> Result<Self, HarvestError> {
        if value.is_empty() {
            return Err(HarvestError::InvalidShortcode("shortcode is empty".to_owned()));
        }
        if let Some(invalid) = value.chars().find(|ch| !is_shortcode_char(*ch)) {
            return Err(HarvestError::InvalidShortcode(format!(
                "unexpected character '{invalid}' in '{value}'"
            )));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the shortcode value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Decodes the shortcode into the numeric post identifier.
    ///
    /// Private post shortcodes are longer than 28 characters; only their
    /// first 11 characters encode the id.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::InvalidShortcode`] when the decoded value does
    /// not fit in 64 bits.
    pub fn decode(&self) -> Result<PostId, HarvestError> {
        let bytes = self.0.as_bytes();
        let significant = if bytes.len() > PRIVATE_SHORTCODE_THRESHOLD {
            bytes.get(..PUBLIC_SHORTCODE_LENGTH).unwrap_or(bytes)
        } else {
            bytes
        };

        significant
            .iter()
            .try_fold(0_u64, |acc, byte| {
                let digit = digit_value(*byte)?;
                acc.checked_mul(64)?.checked_add(digit)
            })
            .map(PostId)
            .ok_or_else(|| {
                HarvestError::InvalidShortcode(format!("'{}' does not fit a post id", self.0))
            })
    }
}

const fn is_shortcode_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

fn digit_value(byte: u8) -> Option<u64> {
    SHORTCODE_ALPHABET
        .iter()
        .position(|candidate| *candidate == byte)
        .and_then(|position| u64::try_from(position).ok())
}

fn parse_with_default_scheme(input: &str) -> Result<Url, ParseError> {
    match Url::parse(input) {
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{input}")),
        parsed => parsed,
    }
}

/// Parsed post URL with its decoded identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLocator {
    shortcode: Shortcode,
    post_id: PostId,
}

impl PostLocator {
    /// Parses a post URL in the form `https://www.instagram.com/p/<shortcode>/`.
    ///
    /// Reel (`/reel/`, `/reels/`) and IGTV (`/tv/`) URLs are accepted too.
    /// A URL without a scheme, such as `instagram.com/p/<shortcode>/`, is
    /// read as `https`. Anything after the shortcode, such as a query
    /// string, is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::InvalidUrl`] when parsing fails or the path has
    /// no post marker followed by a shortcode, and
    /// [`HarvestError::InvalidShortcode`] when the shortcode cannot be decoded.
    pub fn parse(input: &str) -> Result<Self, HarvestError> {
        let parsed = parse_with_default_scheme(input.trim())
            .map_err(|error| HarvestError::InvalidUrl(error.to_string()))?;

        if parsed.host_str().is_none() {
            return Err(HarvestError::InvalidUrl("URL must include a host".to_owned()));
        }

        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|segments| segments.filter(|segment| !segment.is_empty()).collect())
            .unwrap_or_default();

        let code = segments
            .iter()
            .position(|segment| POST_MARKERS.contains(segment))
            .and_then(|marker| segments.get(marker + 1))
            .ok_or_else(|| {
                HarvestError::InvalidUrl(format!(
                    "'{input}' must match /p/<shortcode>, /reel/<shortcode> or /tv/<shortcode>"
                ))
            })?;

        let shortcode = Shortcode::new(code)?;
        let post_id = shortcode.decode()?;

        Ok(Self { shortcode, post_id })
    }

    /// Shortcode taken from the URL.
    #[must_use]
    pub const fn shortcode(&self) -> &Shortcode {
        &self.shortcode
    }

    /// Numeric post identifier decoded from the shortcode.
    #[must_use]
    pub const fn post_id(&self) -> PostId {
        self.post_id
    }
}
