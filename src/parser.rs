use std::{ffi::OsString, process};

use crate::{
    bind,
    help::{self, Page},
    validate, Action, ArgumentSpec, Error, Namespace, Registry, Result,
};

/// A successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub namespace: Namespace,
    /// Tokens not claimed by any argument. Not an error.
    pub leftovers: Vec<String>,
}

/// Argument registry plus the program metadata shown in help output.
#[derive(Debug, Clone)]
pub struct Parser {
    prog: String,
    description: Option<String>,
    epilog: Option<String>,
    version: Option<String>,
    registry: Registry,
}

impl Parser {
    pub fn new(prog: &str) -> Parser {
        Parser {
            prog: prog.to_string(),
            description: None,
            epilog: None,
            version: None,
            registry: Registry::new(),
        }
    }

    pub fn description(mut self, text: &str) -> Parser {
        self.description = Some(text.to_string());
        self
    }

    pub fn epilog(mut self, text: &str) -> Parser {
        self.epilog = Some(text.to_string());
        self
    }

    pub fn version(mut self, version: &str) -> Parser {
        self.version = Some(version.to_string());
        self
    }

    /// Registers `-h, --help`.
    pub fn add_help(&mut self) -> Result<()> {
        self.add(
            ArgumentSpec::flag(&["h", "help"], "help")
                .action(Action::ShowHelp)
                .help("Prints help information."),
        )
    }

    /// Registers `-V, --version`.
    pub fn add_version(&mut self) -> Result<()> {
        self.add(
            ArgumentSpec::flag(&["V", "version"], "version")
                .action(Action::ShowVersion)
                .help("Prints version information."),
        )
    }

    pub fn add(&mut self, spec: ArgumentSpec) -> Result<()> {
        self.registry.register(spec)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn prog(&self) -> &str {
        &self.prog
    }

    /// Binds `args` (program name excluded) and validates the result.
    pub fn parse(&self, args: Vec<String>) -> Result<Parsed> {
        tracing::debug!(prog = %self.prog, ?args, "parsing arguments");
        let (mut namespace, leftovers) = bind(args, &self.registry)?;
        validate(&mut namespace, &self.registry)?;
        tracing::debug!(?namespace, ?leftovers, "parsed arguments");
        Ok(Parsed { namespace, leftovers })
    }

    /// Parses the arguments of the current process.
    pub fn parse_env(&self) -> Result<Parsed> {
        self.parse_os(std::env::args_os().skip(1).collect())
    }

    /// Like [`Parser::parse`], for arguments that may not be valid UTF-8.
    pub fn parse_os(&self, args: Vec<OsString>) -> Result<Parsed> {
        let args = args.into_iter().map(into_string).collect::<Result<Vec<_>>>()?;
        self.parse(args)
    }

    /// Like [`Parser::parse_env`], but handles help, version and errors by
    /// printing and exiting.
    pub fn parse_env_or_exit(&self) -> Parsed {
        self.parse_env().unwrap_or_else(|err| self.exit(err))
    }

    /// Help for help/version signals goes to stdout with status 0, anything
    /// else to stderr with status 2.
    pub fn exit(&self, err: Error) -> ! {
        match err {
            Error::ShowHelp => {
                print!("{}", self.help_for_terminal());
                process::exit(0)
            }
            Error::ShowVersion => {
                println!("{}", self.version_text());
                process::exit(0)
            }
            err => {
                eprint!("{}", self.usage(help::width_or_fallback()));
                eprintln!("{}: error: {err}", self.prog);
                process::exit(2)
            }
        }
    }

    pub fn usage(&self, width: usize) -> String {
        self.page().usage(width)
    }

    pub fn help(&self, width: usize) -> String {
        self.page().render(width)
    }

    pub fn help_for_terminal(&self) -> String {
        self.help(help::width_or_fallback())
    }

    pub fn version_text(&self) -> String {
        match &self.version {
            Some(version) => format!("{} {version}", self.prog),
            None => self.prog.clone(),
        }
    }

    fn page(&self) -> Page<'_> {
        Page {
            prog: &self.prog,
            description: self.description.as_deref(),
            epilog: self.epilog.as_deref(),
            registry: &self.registry,
        }
    }
}

fn into_string(arg: OsString) -> Result<String> {
    arg.into_string().map_err(|it| Error::InvalidUtf8 { arg: it.to_string_lossy().into_owned() })
}
