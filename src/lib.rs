//! Declarative command line argument binding.
//!
//! Arguments are declared up front as [`ArgumentSpec`]s and registered with a
//! [`Parser`]. A parse call walks the raw tokens, binds them to the declared
//! flags, options and positionals according to each spec's [`Nargs`] and
//! [`Action`], validates the result and hands back a [`Namespace`] plus the
//! tokens nobody claimed.
//!
//! ```
//! use argbind::{ArgumentSpec, Parser};
//!
//! let mut p = Parser::new("greet");
//! p.add(ArgumentSpec::flag(&["u", "upper"], "upper").default("false")).unwrap();
//! p.add(ArgumentSpec::positional("name").required()).unwrap();
//!
//! let parsed = p.parse(vec!["Vader".into(), "-u".into()]).unwrap();
//! assert_eq!(parsed.namespace.get_str("name"), Some("Vader"));
//! assert!(parsed.namespace.flag("upper"));
//! ```
mod bind;
mod classify;
pub mod help;
mod namespace;
mod parser;
mod registry;
mod spec;
mod validate;

pub use crate::{
    bind::bind,
    classify::{classify, Classified},
    namespace::{Namespace, Value},
    parser::{Parsed, Parser},
    registry::Registry,
    spec::{Action, ArgumentSpec, Nargs},
    validate::validate,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything a registration or parse call can fail with.
///
/// [`Error::ShowHelp`] and [`Error::ShowVersion`] are not failures: they
/// report that the user asked for help or version output. Check
/// [`Error::is_signal`] before printing a generic error message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Argument declared more than once: `{qualifier}`")]
    DuplicateQualifier { qualifier: String },

    #[error("Invalid declaration for `{dest}`: {reason}")]
    InvalidSpec { dest: String, reason: String },

    #[error("Unknown flag: `{qualifier}`")]
    UnknownOption { qualifier: String },

    #[error("Expected {expected} value(s) for `{name}`, found {available}")]
    MissingArguments { name: String, expected: String, available: usize },

    #[error("Argument is required: `{name}`")]
    MissingRequired { name: String },

    #[error("Invalid choice for `{name}`: `{value}` (choose from {})", quoted(.choices))]
    InvalidChoice { name: String, value: String, choices: Vec<String> },

    #[error("Can't parse `{name}`, {reason}")]
    InvalidValue { name: String, reason: String },

    #[error("Can't parse arguments, invalid utf8: {arg}")]
    InvalidUtf8 { arg: String },

    #[error("help requested")]
    ShowHelp,

    #[error("version requested")]
    ShowVersion,
}

impl Error {
    /// Whether this is a help/version request rather than a failure.
    pub fn is_signal(&self) -> bool {
        matches!(self, Error::ShowHelp | Error::ShowVersion)
    }
}

fn quoted(choices: &[String]) -> String {
    choices.iter().map(|it| format!("`{it}`")).collect::<Vec<_>>().join(", ")
}
