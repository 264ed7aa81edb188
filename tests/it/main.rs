mod help;

use argbind::{Action, ArgumentSpec, Error, Nargs, Parser};
use expect_test::{expect, Expect};

fn check(p: &Parser, args: &str, expect: Expect) {
    let args = args.split_ascii_whitespace().map(String::from).collect::<Vec<_>>();
    match p.parse(args) {
        Ok(parsed) => expect.assert_debug_eq(&parsed),
        Err(err) => expect.assert_eq(&err.to_string()),
    }
}

fn parser(specs: Vec<ArgumentSpec>) -> Parser {
    let mut p = Parser::new("test");
    for spec in specs {
        p.add(spec).unwrap();
    }
    p
}

fn greet() -> Parser {
    parser(vec![
        ArgumentSpec::flag(&["u", "upper"], "upper").default("false"),
        ArgumentSpec::positional("name").nargs(Nargs::Exact(1)).required().default("John"),
    ])
}

#[test]
fn greet_scenario() {
    check(
        &greet(),
        "Vader -u",
        expect![[r#"
            Parsed {
                namespace: {
                    "name": Single(
                        "Vader",
                    ),
                    "upper": Single(
                        "true",
                    ),
                },
                leftovers: [],
            }
        "#]],
    );
    check(&greet(), "", expect!["Argument is required: `name`"]);
}

#[test]
fn plain_tokens_become_leftovers() {
    let p = parser(vec![ArgumentSpec::option(&["o"], "out").default("a.out")]);
    check(
        &p,
        "x y -- -o z",
        expect![[r#"
            Parsed {
                namespace: {
                    "out": Single(
                        "a.out",
                    ),
                },
                leftovers: [
                    "x",
                    "y",
                    "-o",
                    "z",
                ],
            }
        "#]],
    );
}

#[test]
fn escaped_flag_is_not_toggled() {
    let p = parser(vec![ArgumentSpec::flag(&["x"], "x")]);
    let parsed = p.parse(vec!["--".to_string(), "-x".to_string()]).unwrap();
    assert!(!parsed.namespace.contains("x"));
    assert_eq!(parsed.leftovers, ["-x"]);
}

#[test]
fn short_clusters_match_separate_flags() {
    let p = parser(vec![ArgumentSpec::flag(&["a"], "a"), ArgumentSpec::flag(&["b"], "b")]);
    let clustered = p.parse(vec!["-ab".to_string()]).unwrap();
    let separate = p.parse(vec!["-a".to_string(), "-b".to_string()]).unwrap();
    assert_eq!(clustered, separate);
    assert!(clustered.namespace.flag("a") && clustered.namespace.flag("b"));
}

#[test]
fn exact_nargs() {
    let p = parser(vec![
        ArgumentSpec::option(&["p", "pair"], "pair").nargs(Nargs::Exact(2)),
        ArgumentSpec::flag(&["v"], "v"),
    ]);
    check(&p, "--pair 1", expect!["Expected 2 value(s) for `--pair`, found 1"]);
    check(&p, "--pair 1 -v 2", expect!["Expected 2 value(s) for `--pair`, found 1"]);
    check(
        &p,
        "--pair 1 2 3",
        expect![[r#"
            Parsed {
                namespace: {
                    "pair": List(
                        [
                            "1",
                            "2",
                        ],
                    ),
                },
                leftovers: [
                    "3",
                ],
            }
        "#]],
    );
}

#[test]
fn required_and_defaults() {
    let p = parser(vec![ArgumentSpec::option(&["l", "level"], "level").required()]);
    check(&p, "", expect!["Argument is required: `--level`"]);

    let p = parser(vec![ArgumentSpec::option(&["l", "level"], "level").required().default("2")]);
    let parsed = p.parse(vec![]).unwrap();
    assert_eq!(parsed.namespace.value_of::<u8>("level"), Ok(Some(2)));

    let p = parser(vec![ArgumentSpec::option(&["foo"], "foo").default("bar")]);
    assert_eq!(p.parse(vec![]).unwrap().namespace.get_str("foo"), Some("bar"));

    let p = parser(vec![ArgumentSpec::option(&["foo"], "foo")]);
    assert!(p.parse(vec![]).unwrap().namespace.is_empty());
}

#[test]
fn choices() {
    let p = parser(vec![ArgumentSpec::option(&["m", "mode"], "mode").choices(&["fast", "slow"])]);
    check(
        &p,
        "-m fast",
        expect![[r#"
            Parsed {
                namespace: {
                    "mode": Single(
                        "fast",
                    ),
                },
                leftovers: [],
            }
        "#]],
    );
    check(
        &p,
        "-m medium",
        expect!["Invalid choice for `--mode`: `medium` (choose from `fast`, `slow`)"],
    );
}

#[test]
fn errors_name_the_offender() {
    let p = greet();
    check(&p, "-uz", expect!["Unknown flag: `-z`"]);
    check(&p, "--lower Vader", expect!["Unknown flag: `--lower`"]);

    let mut p = greet();
    let err = p.add(ArgumentSpec::flag(&["upper"], "shout")).unwrap_err();
    assert_eq!(err, Error::DuplicateQualifier { qualifier: "--upper".to_string() });
}

#[test]
fn signals_are_not_failures() {
    let mut p = greet().version("0.1.0");
    p.add_help().unwrap();
    p.add_version().unwrap();

    for (args, expected) in [("--help", Error::ShowHelp), ("Vader -V", Error::ShowVersion)] {
        let args = args.split(' ').map(String::from).collect();
        let err = p.parse(args).unwrap_err();
        assert!(err.is_signal());
        assert_eq!(err, expected);
    }
    assert!(!Error::MissingRequired { name: "name".to_string() }.is_signal());
}

#[test]
fn append_and_const_actions() {
    let p = parser(vec![
        ArgumentSpec::option(&["I"], "include").action(Action::Append).default_list(&["/usr"]),
        ArgumentSpec::flag(&["d"], "level").action(Action::AppendConst).const_value("debug"),
        ArgumentSpec::flag(&["fast"], "speed").action(Action::StoreConst).const_value("9"),
        ArgumentSpec::positional("files").nargs(Nargs::ZeroOrMore),
    ]);
    check(
        &p,
        "a -I x -dd --fast b -I y",
        expect![[r#"
            Parsed {
                namespace: {
                    "files": List(
                        [
                            "a",
                            "b",
                        ],
                    ),
                    "include": List(
                        [
                            "x",
                            "y",
                        ],
                    ),
                    "level": List(
                        [
                            "debug",
                            "debug",
                        ],
                    ),
                    "speed": Single(
                        "9",
                    ),
                },
                leftovers: [],
            }
        "#]],
    );
    let parsed = p.parse(vec![]).unwrap();
    assert_eq!(parsed.namespace.get_list("include"), Some(&["/usr".to_string()][..]));
}

#[test]
fn remainder_option() {
    let p = parser(vec![
        ArgumentSpec::flag(&["v"], "verbose"),
        ArgumentSpec::option(&["x", "exec"], "exec").nargs(Nargs::Remainder),
    ]);
    let args = "-v --exec cargo -v test".split(' ').map(String::from).collect();
    let parsed = p.parse(args).unwrap();
    assert_eq!(parsed.namespace.get_list("exec").unwrap(), ["cargo", "-v", "test"]);
    assert_eq!(parsed.leftovers, ["cargo", "-v", "test"]);
}

#[cfg(unix)]
#[test]
fn non_utf8_arguments() {
    use std::{ffi::OsString, os::unix::ffi::OsStringExt};

    let p = greet();
    let err = p.parse_os(vec![OsString::from_vec(vec![254]), "-u".into()]).unwrap_err();
    assert_eq!(err, Error::InvalidUtf8 { arg: "\u{FFFD}".to_string() });
    expect!["Can't parse arguments, invalid utf8: \u{FFFD}"].assert_eq(&err.to_string());

    let parsed = p.parse_os(vec!["Vader".into()]).unwrap();
    assert_eq!(parsed.namespace.get_str("name"), Some("Vader"));
}
