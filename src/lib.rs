//! A minimal and fast string templating engine.
//!
//! Press substitutes named variables such as `{name}` in a model string
//! with values from a [`Store`]. Delimiters are configurable, and four
//! escaping styles allow individual variables to be left unfilled. There
//! is no template language beyond that: no loops, no conditionals, no
//! nested expressions.
//!
//! # Examples
//!
//! ```
//! use press::{Options, Store, Template};
//!
//! let template = Template::new(Options::new()).unwrap();
//! let output = template.fill(
//!     "Hello, {name}! You are {age} years old.",
//!     &Store::new().with("name", "World").with("age", "42"),
//! );
//!
//! assert_eq!(output, "Hello, World! You are 42 years old.");
//! ```
//!
//! Variables without a matching value in the [`Store`] are left in place
//! unchanged, and filling a compiled [`Template`] never fails.
//!
//! # Escaping
//!
//! An [`EscapingStyle`] marks individual variables as "do not fill". The
//! marker is part of the text and is never removed from the output:
//!
//! ```
//! use press::{EscapingStyle, Options, Store, Template};
//!
//! let template = Template::new(
//!     Options::new()
//!         .with_escape('$')
//!         .with_style(EscapingStyle::StartingCharacter),
//! )
//! .unwrap();
//!
//! let output = template.fill(
//!     "Hello, {name}! Hello ${name}!",
//!     &Store::new().with("name", "world"),
//! );
//!
//! assert_eq!(output, "Hello, world! Hello ${name}!");
//! ```
//!
//! # Reuse
//!
//! Compiling a matcher is the expensive part, so hold on to a [`Template`],
//! or use a [`Factory`] to create and cache templates by name:
//!
//! ```
//! use press::{Factory, Store};
//!
//! let factory = Factory::new();
//! let greeting = factory.get("greeting");
//!
//! // Later lookups return the same compiled instance.
//! assert!(std::sync::Arc::ptr_eq(&greeting, &factory.get("greeting")));
//! ```

mod factory;
mod log;
mod matcher;
mod options;
mod region;
mod store;
mod template;

pub use factory::Factory;
pub use log::Error;
pub use matcher::{Matcher, Occurrence};
pub use options::{EscapingStyle, MatchFlags, Options};
pub use region::Region;
pub use store::Store;
pub use template::{fill, Template};
