//! Report formats for chatstat.
//!
//! These types carry no CLI dependencies, so library users can pick a
//! format without pulling in clap.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> chatstat::Result<()> {
//! use chatstat::core::analyze;
//! use chatstat::format::{OutputFormat, to_format_string};
//! use chatstat::parser::parse_str;
//!
//! let stats = analyze(&parse_str("[05.03.24, 14:05:30] Alice: Hello world"));
//!
//! let json = to_format_string(&stats, OutputFormat::Json)?;
//! assert!(json.contains("\"Alice\""));
//!
//! // Or detect the format from a file extension
//! let format = OutputFormat::from_path("report.csv")?;
//! assert_eq!(format, OutputFormat::Csv);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::ChatStats;
use crate::error::ChatstatError;

/// Rendering of a [`ChatStats`] snapshot.
///
/// - [`Text`](OutputFormat::Text) - sectioned console report with percentages
/// - [`Json`](OutputFormat::Json) - the full snapshot
/// - [`Csv`](OutputFormat::Csv) - per-sender table, `;` delimited
///
/// # Example
///
/// ```rust
/// use chatstat::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("json").unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.extension(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Human-readable report (default)
    #[default]
    Text,

    /// Pretty-printed JSON document of every statistic
    Json,

    /// One row per sender with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use chatstat::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Text.extension(), "txt");
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all accepted format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }

    /// Returns all formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv]
    }

    /// Detects the format from a file path's extension.
    ///
    /// ```rust
    /// use chatstat::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/report.JSON").unwrap(), OutputFormat::Json);
    /// assert!(OutputFormat::from_path("report.xml").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatstatError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => {
                let expected: Vec<_> = OutputFormat::all().iter().map(|f| f.extension()).collect();
                Err(ChatstatError::invalid_format(
                    "output",
                    format!(
                        "Unknown file extension: '.{ext}'. Expected one of: {}",
                        expected.join(", ")
                    ),
                ))
            }
        }
    }

    /// Cargo feature the writer for this format lives behind, if any.
    fn required_feature(self) -> Option<&'static str> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Json => Some("json-output"),
            OutputFormat::Csv => Some("csv-output"),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn missing_feature(format: OutputFormat) -> ChatstatError {
    ChatstatError::invalid_format(
        "output",
        format!(
            "Output format {:?} requires the '{}' feature to be enabled",
            format,
            format.required_feature().unwrap_or("default")
        ),
    )
}

/// Writes the report to a file in the given format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
pub fn write_to_format(
    stats: &ChatStats,
    path: &str,
    format: OutputFormat,
) -> Result<(), ChatstatError> {
    match format {
        OutputFormat::Text => crate::output::write_text(stats, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::write_json(stats, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::write_csv(stats, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders the report as a string in the given format.
pub fn to_format_string(stats: &ChatStats, format: OutputFormat) -> Result<String, ChatstatError> {
    match format {
        OutputFormat::Text => Ok(crate::output::to_text(stats)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::to_json(stats),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::to_csv(stats),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}
