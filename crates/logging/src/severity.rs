//! crates/logging/src/severity.rs
//! Severity names, numeric ranks, and threshold activity checks.

use std::fmt;
use std::str::FromStr;

/// Severity of a log record, ordered by numeric rank.
///
/// The rank table is fixed: `Off = 0 < Error = 1 < Debug = 2 < Info = 3 <
/// All = 4`. Debug deliberately filters ahead of Info - a threshold of
/// `Debug` passes errors and debug records but suppresses informational
/// chatter. `Off` is a threshold value that silences everything; entry
/// points never emit records at it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Threshold value disabling all output.
    Off,
    /// Error records.
    Error,
    /// Debugging records.
    Debug,
    /// Informational records.
    Info,
    /// Threshold value passing every record.
    All,
}

impl Severity {
    /// Returns the fixed numeric rank of this severity.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert_eq!(Severity::Off.rank(), 0);
    /// assert_eq!(Severity::Error.rank(), 1);
    /// assert_eq!(Severity::Debug.rank(), 2);
    /// assert_eq!(Severity::Info.rank(), 3);
    /// assert_eq!(Severity::All.rank(), 4);
    /// ```
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Error => 1,
            Self::Debug => 2,
            Self::Info => 3,
            Self::All => 4,
        }
    }

    /// Returns the lowercase canonical name of this severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::All => "all",
        }
    }

    /// Reports whether records at this severity pass a configured threshold
    /// rank.
    ///
    /// A record is active iff `rank(self) <= threshold`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert!(Severity::Error.is_active(Severity::Debug.rank()));
    /// assert!(!Severity::Info.is_active(Severity::Debug.rank()));
    /// ```
    #[must_use]
    pub const fn is_active(self, threshold: u8) -> bool {
        self.rank() <= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Severity`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unrecognised severity name: {name:?}")]
pub struct ParseSeverityError {
    /// The candidate name that did not match any canonical severity.
    pub name: String,
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses a canonical lowercase severity name. Case-sensitive.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "off" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "all" => Ok(Self::All),
            _ => Err(ParseSeverityError {
                name: input.to_owned(),
            }),
        }
    }
}

/// Resolves a severity spelled as a canonical name or a raw numeric rank.
///
/// Numeric input passes through unchanged; an unknown non-numeric name
/// yields `None` rather than an error so that message-or-level argument
/// sniffing can fall back to treating the string as a message. Callers that
/// gate on the result treat `None` as "not active" - an ambiguous level
/// never logs and never fails.
///
/// # Examples
///
/// ```
/// use logging::resolve_rank;
///
/// assert_eq!(resolve_rank("debug"), Some(2));
/// assert_eq!(resolve_rank("7"), Some(7));
/// assert_eq!(resolve_rank("verbose"), None);
/// assert_eq!(resolve_rank("Debug"), None);
/// ```
#[must_use]
pub fn resolve_rank(spec: &str) -> Option<u8> {
    if let Ok(rank) = spec.parse::<u8>() {
        return Some(rank);
    }
    spec.parse::<Severity>().ok().map(Severity::rank)
}

/// Result of sniffing an ambiguous first argument that may be either a
/// message or a severity name.
///
/// Several legacy entry points accepted `(message)` or `(level)` in the
/// same position. The preferred surface is the explicit `*_at` split on
/// [`Logger`](crate::Logger); this classifier remains as the compatibility
/// shim for call sites ported verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageOrLevel<'a> {
    /// The argument resolved to a severity rank.
    Level(u8),
    /// The argument is an ordinary message.
    Message(&'a str),
}

impl<'a> MessageOrLevel<'a> {
    /// Classifies `arg` as a level when it resolves to a rank, else as a
    /// message.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::MessageOrLevel;
    ///
    /// assert_eq!(MessageOrLevel::classify("info"), MessageOrLevel::Level(3));
    /// assert_eq!(MessageOrLevel::classify("2"), MessageOrLevel::Level(2));
    /// assert_eq!(
    ///     MessageOrLevel::classify("ready"),
    ///     MessageOrLevel::Message("ready")
    /// );
    /// ```
    #[must_use]
    pub fn classify(arg: &'a str) -> Self {
        match resolve_rank(arg) {
            Some(rank) => Self::Level(rank),
            None => Self::Message(arg),
        }
    }
}
