use crate::{log::Error, options::Options, template::Template};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Creates and stores [`Template`] instances by name.
///
/// A `Factory` compiles a `Template` the first time a name is requested,
/// and returns the same instance for every later request with that name,
/// so the cost of compiling a matcher is paid once per name.
///
/// Intended to be created once and shared for the lifetime of the
/// application. The registry is locked around lookup and insertion, so a
/// shared `Factory` may be used from multiple threads without giving two
/// callers different instances for the same name.
///
/// # Examples
///
/// ```
/// use press::{Factory, Store};
///
/// let factory = Factory::new();
/// let template = factory.get("greeting");
/// let output = template.fill("Hello, {name}!", &Store::new().with("name", "taylor"));
///
/// assert_eq!(output, "Hello, taylor!");
/// ```
pub struct Factory {
    /// Templates this [`Factory`] has created, by name.
    templates: Mutex<HashMap<String, Arc<Template>>>,
}

impl Factory {
    /// Create a new [`Factory`].
    #[inline]
    pub fn new() -> Self {
        Self {
            templates: Mutex::new(HashMap::new()),
        }
    }

    /// Return the [`Template`] with the given name, creating it with the
    /// default [`Options`] if it does not exist.
    ///
    /// The empty string is a valid name, and refers to the default
    /// template.
    ///
    /// # Examples
    ///
    /// ```
    /// use press::Factory;
    ///
    /// let factory = Factory::new();
    /// let first = factory.get("greeting");
    /// let second = factory.get("greeting");
    ///
    /// assert!(std::sync::Arc::ptr_eq(&first, &second));
    /// ```
    pub fn get(&self, name: &str) -> Arc<Template> {
        let mut templates = self.lock();
        if let Some(template) = templates.get(name) {
            return Arc::clone(template);
        }

        let template = Arc::new(Template::default());
        templates.insert(name.to_owned(), Arc::clone(&template));

        template
    }

    /// Return the [`Template`] with the given name, creating it from the
    /// given [`Options`] if it does not exist.
    ///
    /// The options are only used when the template does not exist yet; an
    /// existing template is never recompiled or overwritten.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when the template does not exist and the given
    /// options are invalid. Nothing is stored under the name in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use press::{Factory, Options};
    ///
    /// let factory = Factory::new();
    /// let template = factory.get_with("html", Options::new().with_delimiters("<%", "%>"));
    ///
    /// assert!(template.is_ok());
    /// ```
    pub fn get_with(&self, name: &str, options: Options) -> Result<Arc<Template>, Error> {
        let mut templates = self.lock();
        if let Some(template) = templates.get(name) {
            return Ok(Arc::clone(template));
        }

        let template = Template::new(options).map_err(|error| error.with_name(name))?;
        let template = Arc::new(template);
        templates.insert(name.to_owned(), Arc::clone(&template));

        Ok(template)
    }

    /// Lock the registry.
    ///
    /// A poisoned lock is recovered, the registry holds no invariant that
    /// a panicking holder could break mid-update.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Template>>> {
        self.templates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Factory {
    fn default() -> Self {
        Self::new()
    }
}
