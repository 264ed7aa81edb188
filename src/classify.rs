/// Tokens split by kind, see [`classify`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Classified {
    /// Short letters and long names, dashes stripped.
    pub options: Vec<String>,
    pub plain: Vec<String>,
}

/// Splits raw tokens into option names and plain tokens.
///
/// `-ab` yields the options `a` and `b`, `--name` yields `name`. A `--`
/// forces the token right after it to be plain; a trailing `--` is itself
/// plain. This is the kind-only view: it says nothing about which plain
/// tokens an option consumes.
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Classified {
    let mut res = Classified::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_ref();
        if let ("--", Some(next)) = (token, tokens.get(i + 1)) {
            res.plain.push(next.as_ref().to_string());
            i += 2;
            continue;
        }
        match option_names(token) {
            Some(names) => res.options.extend(names),
            None => res.plain.push(token.to_string()),
        }
        i += 1;
    }
    res
}

/// Names carried by an option-looking token, or `None` for anything else.
///
/// Only `-letters` and `--letters` are options, so `-`, `-5`, `--x=1` and
/// `---a` are all plain.
pub(crate) fn option_names(token: &str) -> Option<Vec<String>> {
    let (body, long) = match token.strip_prefix("--") {
        Some(rest) => (rest, true),
        None => (token.strip_prefix('-')?, false),
    };
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let names = if long {
        vec![body.to_string()]
    } else {
        body.chars().map(|c| c.to_string()).collect()
    };
    Some(names)
}

pub(crate) fn is_option(token: &str) -> bool {
    option_names(token).is_some()
}
