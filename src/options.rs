use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Configuration for a [`Template`][crate::Template].
///
/// # Examples
///
/// ```
/// use press::{EscapingStyle, Options};
///
/// let options = Options::new()
///     .with_delimiters("[", "]")
///     .with_escape('$')
///     .with_style(EscapingStyle::StartingCharacter);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Marks the beginning of a variable.
    pub start_delimiter: String,
    /// Marks the end of a variable.
    pub end_delimiter: String,
    /// Marks a single variable as escaped, when the escaping style calls
    /// for one.
    pub escape_character: Option<char>,
    /// Strategy used to mark a variable as escaped.
    pub escaping_style: EscapingStyle,
    /// Flags passed through to the matcher when it is compiled.
    pub match_flags: MatchFlags,
}

impl Options {
    /// Create a new [`Options`].
    ///
    /// The `Options` has default values:
    ///
    /// ```text
    /// Variables: {name}
    /// Escape character: unset
    /// Escaping style: none
    /// ```
    ///
    /// To proceed with these defaults, pass the instance along to
    /// [`Template::new`][crate::Template::new] unchanged.
    #[inline]
    pub fn new() -> Self {
        Self {
            start_delimiter: "{".into(),
            end_delimiter: "}".into(),
            escape_character: None,
            escaping_style: EscapingStyle::None,
            match_flags: MatchFlags::default(),
        }
    }

    /// Set the variable delimiters.
    ///
    /// # Examples
    ///
    /// ```
    /// use press::Options;
    ///
    /// let mut options = Options::new();
    /// options.set_delimiters("<<", ">>");
    /// ```
    #[inline]
    pub fn set_delimiters<T>(&mut self, start: T, end: T)
    where
        T: Into<String>,
    {
        self.start_delimiter = start.into();
        self.end_delimiter = end.into();
    }

    /// Set the variable delimiters.
    ///
    /// Returns the [`Options`], so additional methods may be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use press::Options;
    ///
    /// Options::new().with_delimiters("<<", ">>");
    /// ```
    #[inline]
    pub fn with_delimiters<T>(mut self, start: T, end: T) -> Self
    where
        T: Into<String>,
    {
        self.set_delimiters(start, end);

        self
    }

    /// Set the escape character.
    ///
    /// # Examples
    ///
    /// ```
    /// use press::Options;
    ///
    /// let mut options = Options::new();
    /// options.set_escape('$');
    /// ```
    #[inline]
    pub fn set_escape(&mut self, character: char) {
        self.escape_character = Some(character);
    }

    /// Set the escape character.
    ///
    /// Returns the [`Options`], so additional methods may be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use press::Options;
    ///
    /// Options::new().with_escape('$');
    /// ```
    #[inline]
    pub fn with_escape(mut self, character: char) -> Self {
        self.set_escape(character);

        self
    }

    /// Set the escaping style.
    ///
    /// # Examples
    ///
    /// ```
    /// use press::{EscapingStyle, Options};
    ///
    /// let mut options = Options::new();
    /// options.set_style(EscapingStyle::DoubleDelimiters);
    /// ```
    #[inline]
    pub fn set_style(&mut self, style: EscapingStyle) {
        self.escaping_style = style;
    }

    /// Set the escaping style.
    ///
    /// Returns the [`Options`], so additional methods may be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use press::{EscapingStyle, Options};
    ///
    /// Options::new().with_style(EscapingStyle::DoubleDelimiters);
    /// ```
    #[inline]
    pub fn with_style(mut self, style: EscapingStyle) -> Self {
        self.set_style(style);

        self
    }

    /// Set the matcher flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use press::{MatchFlags, Options};
    ///
    /// let mut options = Options::new();
    /// options.set_flags(MatchFlags {
    ///     case_insensitive: true,
    ///     ..MatchFlags::default()
    /// });
    /// ```
    #[inline]
    pub fn set_flags(&mut self, flags: MatchFlags) {
        self.match_flags = flags;
    }

    /// Set the matcher flags.
    ///
    /// Returns the [`Options`], so additional methods may be chained.
    #[inline]
    pub fn with_flags(mut self, flags: MatchFlags) -> Self {
        self.set_flags(flags);

        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

/// Strategies used to mark a variable as escaped, so that it is left in
/// place when a [`Template`][crate::Template] is filled.
///
/// The escape marker itself is never removed from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapingStyle {
    /// No escaping is performed.
    #[default]
    None,
    /// A variable is escaped by doubling the delimiters.
    /// (e.g: `{{name}}`)
    DoubleDelimiters,
    /// A variable is escaped by placing the escape character directly
    /// before it. (e.g: `${name}`)
    StartingCharacter,
    /// A variable is escaped by placing the escape character directly
    /// after it. (e.g: `{name}$`)
    EndingCharacter,
}

impl Display for EscapingStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EscapingStyle::None => write!(f, "none"),
            EscapingStyle::DoubleDelimiters => write!(f, "double delimiters"),
            EscapingStyle::StartingCharacter => write!(f, "starting character"),
            EscapingStyle::EndingCharacter => write!(f, "ending character"),
        }
    }
}

/// Flags applied when the matcher for a [`Template`][crate::Template] is
/// compiled.
///
/// These are passed through to the underlying pattern engine and do not
/// otherwise change how variables are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchFlags {
    /// Match delimiters and variable names without regard to letter case.
    pub case_insensitive: bool,
    /// Enable multi-line mode in the underlying pattern engine.
    pub multi_line: bool,
    /// Allow `.` to match new lines in the underlying pattern engine.
    pub dot_matches_new_line: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::new();

        assert_eq!(options.start_delimiter, "{");
        assert_eq!(options.end_delimiter, "}");
        assert_eq!(options.escape_character, None);
        assert_eq!(options.escaping_style, EscapingStyle::None);
    }

    #[test]
    fn test_fluent() {
        let options = Options::new()
            .with_delimiters("<<", ">>")
            .with_escape('$')
            .with_style(EscapingStyle::EndingCharacter);

        assert_eq!(options.start_delimiter, "<<");
        assert_eq!(options.end_delimiter, ">>");
        assert_eq!(options.escape_character, Some('$'));
        assert_eq!(options.escaping_style, EscapingStyle::EndingCharacter);
    }

    #[test]
    fn test_deserialize() {
        let options: Options = serde_json::from_str(
            r#"{
                "start_delimiter": "[",
                "end_delimiter": "]",
                "escape_character": "$",
                "escaping_style": "starting_character"
            }"#,
        )
        .unwrap();

        assert_eq!(
            options,
            Options::new()
                .with_delimiters("[", "]")
                .with_escape('$')
                .with_style(EscapingStyle::StartingCharacter)
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let options: Options = serde_json::from_str("{}").unwrap();

        assert_eq!(options, Options::new());
    }
}
