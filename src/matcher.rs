use crate::{
    log::{
        error_control_escape, error_empty_delimiter, error_missing_escape, Error,
        INVALID_DELIMITER,
    },
    options::{EscapingStyle, Options},
    region::Region,
};
use regex::{Regex, RegexBuilder};

/// Name of the capture group holding the variable name.
const VARIABLE: &str = "variable";

/// An occurrence of a variable within a model string.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Occurrence {
    /// Area covered by the occurrence, delimiters included.
    pub region: Region,
    /// Area covered by the variable name.
    pub variable: Region,
}

/// Recognizes variables within a model string.
///
/// A `Matcher` is compiled once from a set of [`Options`] and may be used
/// any number of times, against any number of model strings. It holds no
/// scan state of its own.
#[derive(Debug, Clone)]
pub struct Matcher {
    /// Pattern recognizing a delimited variable.
    pattern: Regex,
    /// Escaping style the matcher was compiled with.
    style: EscapingStyle,
    /// Escape character, when the style calls for one.
    escape: Option<char>,
    /// Doubled delimiter pair, checked behind the end delimiter.
    pair: String,
}

impl Matcher {
    /// Compile a new [`Matcher`] from the given [`Options`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when either delimiter is empty or whitespace
    /// only, when the escape character is a control character, or when the
    /// escaping style calls for an escape character and none is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use press::{Matcher, Options};
    ///
    /// let matcher = Matcher::build(&Options::new());
    /// assert!(matcher.is_ok());
    /// ```
    pub fn build(options: &Options) -> Result<Self, Error> {
        if options.start_delimiter.trim().is_empty() {
            return Err(error_empty_delimiter("start"));
        }
        if options.end_delimiter.trim().is_empty() {
            return Err(error_empty_delimiter("end"));
        }
        if options.escape_character.is_some_and(char::is_control) {
            return Err(error_control_escape());
        }
        let escape = match options.escaping_style {
            EscapingStyle::StartingCharacter | EscapingStyle::EndingCharacter => {
                match options.escape_character {
                    Some(character) => Some(character),
                    None => return Err(error_missing_escape(options.escaping_style)),
                }
            }
            _ => None,
        };

        // A variable is the start delimiter, one or more characters that do
        // not appear in the end delimiter, then the end delimiter.
        let start = regex::escape(&options.start_delimiter);
        let end = regex::escape(&options.end_delimiter);
        let not_end: String = options
            .end_delimiter
            .chars()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        let source = format!("{start}(?P<{VARIABLE}>[^{not_end}]+){end}");

        let flags = options.match_flags;
        let pattern = RegexBuilder::new(&source)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_matches_new_line)
            .build()
            .map_err(|error| Error::build(INVALID_DELIMITER).with_help(error.to_string()))?;

        Ok(Self {
            pattern,
            style: options.escaping_style,
            escape,
            pair: format!("{}{}", options.start_delimiter, options.end_delimiter),
        })
    }

    /// Return the next unescaped [`Occurrence`] at or beyond the given
    /// index, if any.
    pub fn find_at(&self, model: &str, mut at: usize) -> Option<Occurrence> {
        while at <= model.len() {
            let captures = self.pattern.captures_at(model, at)?;
            let found = captures.get(0)?;
            let variable = captures.name(VARIABLE)?;

            if self.is_escaped(model, found.start(), variable.end(), found.end()) {
                // Step over the first character and search again, an escaped
                // occurrence may still contain a real one.
                let step = model[found.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                at = found.start() + step;
                continue;
            }

            return Some(Occurrence {
                region: Region::new(found.start()..found.end()),
                variable: Region::new(variable.start()..variable.end()),
            });
        }

        None
    }

    /// Return true if the occurrence is marked as escaped under the
    /// compiled escaping style.
    ///
    /// The indices are the beginning of the occurrence, the end of the
    /// variable name, and the end of the occurrence.
    fn is_escaped(&self, model: &str, begin: usize, close: usize, end: usize) -> bool {
        match self.style {
            EscapingStyle::None => false,
            // The doubled pair is checked directly before the end delimiter,
            // not around the entire occurrence.
            EscapingStyle::DoubleDelimiters => model[..close].ends_with(&self.pair),
            EscapingStyle::StartingCharacter => self
                .escape
                .is_some_and(|escape| model[..begin].ends_with(escape)),
            EscapingStyle::EndingCharacter => self
                .escape
                .is_some_and(|escape| model[end..].starts_with(escape)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{log::INVALID_ESCAPE, options::MatchFlags};

    #[test]
    fn test_find() {
        let matcher = Matcher::build(&Options::new()).unwrap();
        let model = "Hello, {name}!";

        let occurrence = matcher.find_at(model, 0).unwrap();
        assert_eq!(&model[occurrence.region], "{name}");
        assert_eq!(occurrence.variable.literal(model), "name");
        assert_eq!(matcher.find_at(model, occurrence.region.end), None);
    }

    #[test]
    fn test_find_multichar_delimiters() {
        let options = Options::new().with_delimiters("*{", "}*");
        let matcher = Matcher::build(&options).unwrap();
        let model = "Hello, *{name}*! Hello {name}!";

        let occurrence = matcher.find_at(model, 0).unwrap();
        assert_eq!(&model[occurrence.region], "*{name}*");
        assert_eq!(occurrence.variable.literal(model), "name");
        assert_eq!(matcher.find_at(model, occurrence.region.end), None);
    }

    #[test]
    fn test_find_skips_starting_escape() {
        let options = Options::new()
            .with_escape('$')
            .with_style(EscapingStyle::StartingCharacter);
        let matcher = Matcher::build(&options).unwrap();
        let model = "${name} {name}";

        let occurrence = matcher.find_at(model, 0).unwrap();
        assert_eq!(occurrence.region, Region::new(8..14));
    }

    #[test]
    fn test_find_skips_ending_escape() {
        let options = Options::new()
            .with_escape('$')
            .with_style(EscapingStyle::EndingCharacter);
        let matcher = Matcher::build(&options).unwrap();
        let model = "{name}$ {name}";

        let occurrence = matcher.find_at(model, 0).unwrap();
        assert_eq!(occurrence.region, Region::new(8..14));
    }

    #[test]
    fn test_find_inside_escaped_occurrence() {
        let options = Options::new()
            .with_escape('$')
            .with_style(EscapingStyle::StartingCharacter);
        let matcher = Matcher::build(&options).unwrap();

        // The first delimiter is escaped, but a real variable begins
        // before the escaped occurrence would end.
        let model = "${x{y}";
        let occurrence = matcher.find_at(model, 0).unwrap();
        assert_eq!(&model[occurrence.region], "{y}");
    }

    #[test]
    fn test_find_case_insensitive() {
        let options = Options::new()
            .with_delimiters("<var:", ">")
            .with_flags(MatchFlags {
                case_insensitive: true,
                ..MatchFlags::default()
            });
        let matcher = Matcher::build(&options).unwrap();
        let model = "Hello, <VAR:name>!";

        let occurrence = matcher.find_at(model, 0).unwrap();
        assert_eq!(&model[occurrence.region], "<VAR:name>");
        assert_eq!(occurrence.variable.literal(model), "name");
    }

    #[test]
    fn test_empty_start_delimiter() {
        let result = Matcher::build(&Options::new().with_delimiters("", "}"));

        assert_eq!(result.unwrap_err(), error_empty_delimiter("start"));
    }

    #[test]
    fn test_whitespace_end_delimiter() {
        let result = Matcher::build(&Options::new().with_delimiters("{", "  "));

        assert_eq!(result.unwrap_err(), error_empty_delimiter("end"));
    }

    #[test]
    fn test_control_escape() {
        let result = Matcher::build(&Options::new().with_escape('\t'));

        assert_eq!(result.unwrap_err(), error_control_escape());
    }

    #[test]
    fn test_missing_escape() {
        for style in [
            EscapingStyle::StartingCharacter,
            EscapingStyle::EndingCharacter,
        ] {
            let result = Matcher::build(&Options::new().with_style(style));

            assert!(result.is_err_and(|error| error == error_missing_escape(style)));
        }
    }

    #[test]
    fn test_escape_not_required() {
        // These styles never require an escape character.
        for style in [EscapingStyle::None, EscapingStyle::DoubleDelimiters] {
            assert!(Matcher::build(&Options::new().with_style(style)).is_ok());
        }
    }

    #[test]
    fn test_error_reason() {
        let error = Matcher::build(&Options::new().with_escape('\x07')).unwrap_err();

        assert_eq!(error, Error::build(INVALID_ESCAPE).with_help(
            "escape character cannot be a control character",
        ));
    }
}
