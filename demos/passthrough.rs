//! Runs a command, forwarding everything after `--exec` untouched.
//!
//! ```text
//! cargo run --example passthrough -- -n 3 --exec echo -n hi
//! ```
use std::process::Command;

use argbind::{ArgumentSpec, Nargs, Parser};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut p = Parser::new("passthrough");
    let specs = [
        ArgumentSpec::option(&["n", "times"], "times").default("1").help("Repetitions."),
        ArgumentSpec::option(&["exec"], "exec").nargs(Nargs::Remainder).required(),
    ];
    for spec in specs {
        if let Err(err) = p.add(spec) {
            p.exit(err)
        }
    }
    if let Err(err) = p.add_help() {
        p.exit(err)
    }

    let parsed = p.parse_env_or_exit();
    let times = match parsed.namespace.value_of::<u32>("times") {
        Ok(it) => it.unwrap_or(1),
        Err(err) => p.exit(err),
    };
    let Some((cmd, args)) = parsed.leftovers.split_first() else {
        eprintln!("passthrough: nothing to run");
        std::process::exit(2)
    };
    for _ in 0..times {
        if let Err(err) = Command::new(cmd).args(args).status() {
            eprintln!("passthrough: {cmd}: {err}");
            std::process::exit(1)
        }
    }
}
