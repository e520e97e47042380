use crate::{log::Error, matcher::Matcher, options::Options, region::Region, store::Store};

/// Fill a model string with the given [`Store`].
///
/// Provides a shortcut to quickly fill a model string using the default
/// [`Options`]. A new matcher is compiled on every call, so prefer creating
/// a [`Template`] (or a [`Factory`][crate::Factory]) up front when the same
/// options are used more than once.
///
/// # Examples
///
/// ```
/// use press::Store;
///
/// let output = press::fill("Hello, {name}!", &Store::new().with("name", "taylor"));
/// assert_eq!(output, "Hello, taylor!");
/// ```
pub fn fill(model: &str, store: &Store) -> String {
    Template::default().fill(model, store)
}

/// A compiled `Template` that can be filled with a [`Store`].
///
/// A `Template` is immutable once built, and may be filled any number of
/// times, from any number of threads.
#[derive(Debug, Clone)]
pub struct Template {
    /// Options the [`Template`] was built with.
    options: Options,
    /// Matcher recognizing variables within a model string.
    matcher: Matcher,
}

impl Template {
    /// Compile a new [`Template`] from the given [`Options`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the options are invalid, as described on
    /// [`Matcher::build`].
    ///
    /// # Examples
    ///
    /// ```
    /// use press::{Options, Template};
    ///
    /// let template = Template::new(Options::new().with_delimiters("((", "))"));
    /// assert!(template.is_ok());
    /// ```
    pub fn new(options: Options) -> Result<Self, Error> {
        let matcher = Matcher::build(&options)?;

        Ok(Self { options, matcher })
    }

    /// Compile a new [`Template`] from the given [`Options`].
    ///
    /// # Panics
    ///
    /// Panics when the options are invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use press::{Options, Template};
    ///
    /// let template = Template::new_must(Options::new().with_delimiters("((", "))"));
    /// ```
    #[inline]
    pub fn new_must(options: Options) -> Self {
        Self::new(options).unwrap()
    }

    /// Return the [`Options`] the [`Template`] was built with.
    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Fill the model string, replacing every recognized variable with the
    /// matching value from the [`Store`].
    ///
    /// Variables without a matching value, and variables marked as escaped
    /// under the escaping style, are left in place unchanged. Filling never
    /// fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use press::{Options, Store, Template};
    ///
    /// let template = Template::new_must(Options::new());
    /// let output = template.fill("Hello, {name}!", &Store::new().with("name", "taylor"));
    ///
    /// assert_eq!(output, "Hello, taylor!");
    /// ```
    pub fn fill(&self, model: &str, store: &Store) -> String {
        let mut filled = String::with_capacity(model.len());
        let mut cursor = 0;

        while let Some(occurrence) = self.matcher.find_at(model, cursor) {
            let Region { begin, end } = occurrence.region;
            filled.push_str(&model[cursor..begin]);

            match store.get(occurrence.variable.literal(model)) {
                Some(value) => filled.push_str(value),
                None => filled.push_str(&model[occurrence.region]),
            }
            cursor = end;
        }
        filled.push_str(&model[cursor..]);

        filled
    }
}

impl Default for Template {
    /// Create a [`Template`] from the default [`Options`], which always
    /// compile.
    fn default() -> Self {
        Self::new_must(Options::new())
    }
}
