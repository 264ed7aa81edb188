use std::{fmt, str::FromStr};

use crate::{namespace::Value, Error, Result};

/// How many tokens an argument consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nargs {
    /// Exactly this many values. `Exact(0)` is a plain flag.
    Exact(usize),
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `?`
    Optional,
    /// `R`: the whole tail of the command line, taken verbatim.
    Remainder,
}

impl Nargs {
    /// Whether a `Store` with this arity keeps a single string rather than a
    /// list.
    pub fn is_single(self) -> bool {
        matches!(self, Nargs::Exact(1) | Nargs::Optional)
    }

    /// Smallest number of values this arity accepts.
    pub fn min(self) -> usize {
        match self {
            Nargs::Exact(n) => n,
            Nargs::OneOrMore => 1,
            Nargs::ZeroOrMore | Nargs::Optional | Nargs::Remainder => 0,
        }
    }
}

impl fmt::Display for Nargs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nargs::Exact(n) => write!(f, "{n}"),
            Nargs::ZeroOrMore => f.write_str("*"),
            Nargs::OneOrMore => f.write_str("+"),
            Nargs::Optional => f.write_str("?"),
            Nargs::Remainder => f.write_str("R"),
        }
    }
}

impl FromStr for Nargs {
    type Err = String;

    fn from_str(s: &str) -> Result<Nargs, String> {
        let res = match s {
            "*" => Nargs::ZeroOrMore,
            "+" => Nargs::OneOrMore,
            "?" => Nargs::Optional,
            "R" => Nargs::Remainder,
            _ => Nargs::Exact(s.parse().map_err(|_| format!("invalid nargs: `{s}`"))?),
        };
        Ok(res)
    }
}

/// What a matched argument does to the namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StoreTrue,
    StoreFalse,
    StoreConst,
    Store,
    AppendConst,
    Append,
    ShowHelp,
    ShowVersion,
}

impl Action {
    /// Actions that never take values from the command line.
    pub fn takes_no_values(self) -> bool {
        !matches!(self, Action::Store | Action::Append)
    }
}

/// Declaration of a single flag, option or positional argument.
///
/// Specs are built with consuming setters and checked as a whole when they are
/// registered, see [`crate::Registry::register`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub(crate) qualifiers: Vec<String>,
    pub(crate) dest: String,
    pub(crate) help: Option<String>,
    pub(crate) metavar: Option<String>,
    pub(crate) required: bool,
    pub(crate) default: Option<Value>,
    pub(crate) const_value: Option<String>,
    pub(crate) nargs: Nargs,
    pub(crate) action: Action,
    pub(crate) choices: Option<Vec<String>>,
}

impl ArgumentSpec {
    fn new(qualifiers: Vec<String>, dest: &str, nargs: Nargs, action: Action) -> ArgumentSpec {
        ArgumentSpec {
            qualifiers,
            dest: dest.to_string(),
            help: None,
            metavar: None,
            required: false,
            default: None,
            const_value: None,
            nargs,
            action,
            choices: None,
        }
    }

    /// A boolean flag: `StoreTrue`, no values.
    ///
    /// Qualifiers are given without dashes; one letter makes a short name
    /// (`-u`), anything longer a long name (`--upper`).
    pub fn flag(qualifiers: &[&str], dest: &str) -> ArgumentSpec {
        ArgumentSpec::new(to_strings(qualifiers), dest, Nargs::Exact(0), Action::StoreTrue)
    }

    /// An option taking one value: `Store`, `nargs = 1`.
    pub fn option(qualifiers: &[&str], dest: &str) -> ArgumentSpec {
        ArgumentSpec::new(to_strings(qualifiers), dest, Nargs::Exact(1), Action::Store)
    }

    /// A positional argument matched by position: `Store`, `nargs = 1`.
    pub fn positional(dest: &str) -> ArgumentSpec {
        ArgumentSpec::new(Vec::new(), dest, Nargs::Exact(1), Action::Store)
    }

    pub fn help(mut self, help: &str) -> ArgumentSpec {
        self.help = Some(help.to_string());
        self
    }

    pub fn metavar(mut self, metavar: &str) -> ArgumentSpec {
        self.metavar = Some(metavar.to_string());
        self
    }

    pub fn nargs(mut self, nargs: Nargs) -> ArgumentSpec {
        self.nargs = nargs;
        self
    }

    pub fn action(mut self, action: Action) -> ArgumentSpec {
        self.action = action;
        self
    }

    pub fn required(mut self) -> ArgumentSpec {
        self.required = true;
        self
    }

    pub fn default(mut self, value: &str) -> ArgumentSpec {
        self.default = Some(Value::Single(value.to_string()));
        self
    }

    pub fn default_list(mut self, values: &[&str]) -> ArgumentSpec {
        self.default = Some(Value::List(to_strings(values)));
        self
    }

    pub fn const_value(mut self, value: &str) -> ArgumentSpec {
        self.const_value = Some(value.to_string());
        self
    }

    pub fn choices(mut self, choices: &[&str]) -> ArgumentSpec {
        self.choices = Some(to_strings(choices));
        self
    }

    pub fn dest(&self) -> &str {
        &self.dest
    }

    pub fn qualifiers(&self) -> &[String] {
        &self.qualifiers
    }

    pub fn is_positional(&self) -> bool {
        self.qualifiers.is_empty()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn get_nargs(&self) -> Nargs {
        self.nargs
    }

    pub fn get_action(&self) -> Action {
        self.action
    }

    pub fn get_help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn get_default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn get_choices(&self) -> Option<&[String]> {
        self.choices.as_deref()
    }

    /// The name used in messages: `--long`, else `-s`, else the destination.
    pub fn display_name(&self) -> String {
        let long = self.qualifiers.iter().find(|it| !is_short(it));
        match long.or_else(|| self.qualifiers.first()) {
            Some(q) => dashed(q),
            None => self.dest.clone(),
        }
    }

    /// Placeholder shown for values in help output.
    pub(crate) fn value_name(&self) -> String {
        match &self.metavar {
            Some(it) => it.clone(),
            None if self.is_positional() => self.dest.clone(),
            None => self.dest.to_ascii_uppercase().replace('-', "_"),
        }
    }

    pub(crate) fn check(&self) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidSpec {
            dest: self.dest.clone(),
            reason: reason.to_string(),
        };

        if self.dest.is_empty() {
            return Err(invalid("destination can't be empty"));
        }
        for q in &self.qualifiers {
            if q.is_empty() || !q.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(invalid(&format!("qualifier `{q}` must be made of ascii letters")));
            }
        }
        if self.action.takes_no_values() {
            if self.is_positional() {
                return Err(invalid("positional arguments must store or append values"));
            }
            if self.nargs != Nargs::Exact(0) {
                return Err(invalid(&format!("{:?} takes no values, nargs must be 0", self.action)));
            }
        } else if self.nargs == Nargs::Exact(0) {
            return Err(invalid(&format!("{:?} needs values, nargs can't be 0", self.action)));
        }
        if matches!(self.action, Action::StoreConst | Action::AppendConst)
            && self.const_value.is_none()
        {
            return Err(invalid(&format!("{:?} needs a const value", self.action)));
        }
        Ok(())
    }
}

pub(crate) fn is_short(qualifier: &str) -> bool {
    qualifier.chars().count() == 1
}

pub(crate) fn dashed(qualifier: &str) -> String {
    if is_short(qualifier) {
        format!("-{qualifier}")
    } else {
        format!("--{qualifier}")
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|it| it.to_string()).collect()
}
