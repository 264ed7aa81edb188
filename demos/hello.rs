use argbind::{ArgumentSpec, Nargs, Parser};
use tracing_subscriber::EnvFilter;

fn flags() -> argbind::Result<Parser> {
    let mut p = Parser::new("hello").description("Says hello.").version(env!("CARGO_PKG_VERSION"));
    p.add(ArgumentSpec::flag(&["u", "upper"], "upper").default("false").help("Shout it."))?;
    p.add(
        ArgumentSpec::positional("name")
            .nargs(Nargs::Exact(1))
            .required()
            .help("Who to greet."),
    )?;
    p.add_help()?;
    p.add_version()?;
    Ok(p)
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let p = match flags() {
        Ok(it) => it,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1)
        }
    };
    let parsed = p.parse_env_or_exit();
    let name = parsed.namespace.get_str("name").unwrap_or_default();
    let greeting = format!("Hello {name}!");
    if parsed.namespace.flag("upper") {
        println!("{}", greeting.to_uppercase());
    } else {
        println!("{greeting}");
    }
}
