use crate::options::EscapingStyle;
use std::fmt::{Debug, Display, Formatter, Result};

pub const INVALID_DELIMITER: &str = "invalid delimiter";
pub const INVALID_ESCAPE: &str = "invalid escape character";

const RED: &str = "\x1B[31m";
const RESET: &str = "\x1B[0m";

/// Return an [`Error`] describing an empty or whitespace-only delimiter.
pub fn error_empty_delimiter(which: &str) -> Error {
    Error::build(INVALID_DELIMITER).with_help(format!(
        "{which} delimiter cannot be empty or whitespace only"
    ))
}

/// Return an [`Error`] describing an escape character that is a control
/// character.
pub fn error_control_escape() -> Error {
    Error::build(INVALID_ESCAPE).with_help("escape character cannot be a control character")
}

/// Return an [`Error`] describing a missing escape character.
pub fn error_missing_escape(style: EscapingStyle) -> Error {
    Error::build(INVALID_ESCAPE).with_help(format!(
        "escaping style `{style}` requires an escape character, set one with `.with_escape`"
    ))
}

/// Describes an error, and allows adding contextual help text.
///
/// Every `Error` in this crate is raised while a [`Template`][crate::Template]
/// is being compiled; filling a template never fails.
///
/// # Examples
///
/// ```
/// use press::Error;
///
/// Error::build("invalid delimiter")
///     .with_help("start delimiter cannot be empty or whitespace only");
/// ```
///
/// When printed with `println!("{:#}", error)` the [`Error`] produces this
/// output:
///
/// ```text
/// error: invalid delimiter
///   = help: start delimiter cannot be empty or whitespace only
/// ```
pub struct Error {
    /// Describes the cause of the [`Error`].
    reason: String,
    /// Additional information to display with the [`Error`].
    help: Option<String>,
    /// The name of the Template that the [`Error`] comes from.
    name: Option<String>,
}

impl Error {
    /// Create a new [`Error`] with the given reason text.
    ///
    /// The additional fields may be populated using the various methods
    /// defined on `Error`.
    pub fn build<T>(reason: T) -> Self
    where
        T: Into<String>,
    {
        Error {
            reason: reason.into(),
            help: None,
            name: None,
        }
    }

    /// Set the help text, which is contextual information to accompany the
    /// reason text.
    pub fn with_help<T>(mut self, text: T) -> Self
    where
        T: Into<String>,
    {
        self.help = Some(text.into());

        self
    }

    /// Set the name text, which is the name of the [`Template`][crate::Template]
    /// that the [`Error`] is related to.
    pub fn with_name<T>(mut self, text: T) -> Self
    where
        T: Into<String>,
    {
        self.name = Some(text.into());

        self
    }

    /// Return the name of the `Template` that the error is related to.
    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if !f.alternate() {
            writeln!(f, "{self:#}")?;
        }
        f.debug_struct("Error")
            .field("reason", &self.reason)
            .field("help", &self.help)
            .field("name", &self.name)
            .finish()?;

        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let header = format!("{RED}error{RESET}");
        write!(f, "{header}: {}", self.reason)?;
        if let Some(name) = &self.name {
            write!(f, " in template `{name}`")?;
        }

        if f.alternate() {
            if let Some(help) = &self.help {
                write!(f, "\n  = help: {help}")?;
            }
        }

        Ok(())
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.reason == other.reason && self.help == other.help && self.name == other.name
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let error = Error::build(INVALID_DELIMITER).with_help("end delimiter cannot be empty");

        assert!(format!("{error}").contains("invalid delimiter"));
        assert!(format!("{error:#}").contains("= help: end delimiter cannot be empty"));
    }

    #[test]
    fn test_name() {
        let error = error_empty_delimiter("start").with_name("greeting");

        assert_eq!(error.get_name(), Some("greeting"));
        assert!(format!("{error}").contains("in template `greeting`"));
    }
}
