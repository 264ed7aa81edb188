use argbind::{Action, ArgumentSpec, Nargs, Parser};
use expect_test::expect;

fn helpful() -> Parser {
    let mut p = Parser::new("helpful")
        .description("Does stuff.\n\nHelpful stuff, spread over a second paragraph.")
        .version("0.2.2");
    p.add(ArgumentSpec::positional("src").help("With an arg.")).unwrap();
    p.add(
        ArgumentSpec::positional("extra")
            .nargs(Nargs::ZeroOrMore)
            .help("Another arg. This time, we provide some extra info about the arg."),
    )
    .unwrap();
    p.add(ArgumentSpec::flag(&["s", "switch"], "switch").help("And a switch.")).unwrap();
    p.add(
        ArgumentSpec::option(&["j", "jobs"], "jobs")
            .metavar("N")
            .required()
            .help("Number of parallel jobs."),
    )
    .unwrap();
    p.add(
        ArgumentSpec::option(&["only"], "only")
            .action(Action::Append)
            .choices(&["unit", "doc"]),
    )
    .unwrap();
    p.add_help().unwrap();
    p.add_version().unwrap();
    p
}

#[test]
fn full_page() {
    expect![[r#"
        Usage: helpful [-s] -j <N> [--only <ONLY>] [-h] [-V] [src]
            [extra]...

        Does stuff.

        Helpful stuff, spread over a second paragraph.

        ARGS:
            [src]
              With an arg.

            [extra]...
              Another arg. This time, we provide some extra info
              about the arg.

        OPTIONS:
            -s, --switch
              And a switch.

            -j, --jobs <N>
              Number of parallel jobs.

            --only <ONLY>
              [possible values: unit, doc]

            -h, --help
              Prints help information.

            -V, --version
              Prints version information.
    "#]]
    .assert_eq(&helpful().help(60));
}

#[test]
fn no_line_exceeds_width() {
    let p = helpful();
    for width in [20, 33, 47, 80, 120] {
        let help = p.help(width);
        for line in help.lines() {
            assert!(line.chars().count() <= width, "{width}: {line:?}");
        }
    }
}

#[test]
fn tiny_widths_are_clamped() {
    let p = helpful();
    assert_eq!(p.help(0), p.help(20));
}
