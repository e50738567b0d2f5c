use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in time as whole seconds since the Unix epoch.
///
/// Netscape files store `ADD_DATE` and `LAST_MODIFIED` as decimal epoch
/// seconds. Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a timestamp from epoch seconds.
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Epoch seconds.
    #[must_use]
    pub const fn as_secs(self) -> i64 {
        self.0
    }

    /// Parse an attribute value leniently.
    ///
    /// Leading whitespace and an optional sign are accepted, then as many
    /// ASCII digits as follow; anything after them is ignored. Input with
    /// no leading digits is zero, so `ADD_DATE=""` still yields a
    /// timestamp. Values that overflow saturate.
    ///
    /// # Example
    /// ```ignore
    /// Timestamp::parse_lenient("1444432395")   // 1444432395
    /// Timestamp::parse_lenient(" 12abc")       // 12
    /// Timestamp::parse_lenient("garbage")      // 0
    /// ```
    #[must_use]
    pub fn parse_lenient(text: &str) -> Self {
        let text = text.trim_start();
        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        // Accumulate toward the sign so i64::MIN survives.
        let secs = digits
            .bytes()
            .take_while(u8::is_ascii_digit)
            .fold(0_i64, |acc, digit| {
                let acc = acc.saturating_mul(10);
                let digit = i64::from(digit - b'0');
                if negative {
                    acc.saturating_sub(digit)
                } else {
                    acc.saturating_add(digit)
                }
            });

        Self(secs)
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
