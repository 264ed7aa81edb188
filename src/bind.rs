use crate::{
    classify::{is_option, option_names},
    namespace::Value,
    Action, ArgumentSpec, Error, Namespace, Nargs, Registry, Result,
};

/// Remaining raw tokens, stored reversed so that `pop` yields the next one.
struct Cursor {
    rargs: Vec<String>,
}

impl Cursor {
    fn new(mut args: Vec<String>) -> Cursor {
        args.reverse();
        Cursor { rargs: args }
    }

    fn next(&mut self) -> Option<String> {
        self.rargs.pop()
    }

    /// Number of value tokens before the next option, `--`, or the end.
    fn available(&self) -> usize {
        self.rargs.iter().rev().take_while(|it| *it != "--" && !is_option(it)).count()
    }

    fn take(&mut self, n: usize) -> Vec<String> {
        let at = self.rargs.len() - n;
        let mut res = self.rargs.split_off(at);
        res.reverse();
        res
    }

    fn rest(&mut self) -> Vec<String> {
        self.take(self.rargs.len())
    }
}

/// Binds raw tokens to the specs of `registry`.
///
/// Returns the namespace (without defaults, see [`crate::validate`]) and the
/// leftover tokens. Options whose arity is [`Nargs::Remainder`] capture the
/// whole tail of the command line; that tail is never scanned for options or
/// handed to positionals, and it is returned as part of the leftovers too.
pub fn bind(tokens: Vec<String>, registry: &Registry) -> Result<(Namespace, Vec<String>)> {
    let mut ns = Namespace::new();
    let mut queue = Vec::new();
    let mut tail = Vec::new();

    let mut p = Cursor::new(tokens);
    while let Some(token) = p.next() {
        if token == "--" {
            queue.extend(p.rest());
            break;
        }
        let names = match option_names(&token) {
            Some(it) => it,
            None => {
                queue.push(token);
                continue;
            }
        };

        let long = token.starts_with("--");
        let specs = names
            .iter()
            .map(|name| {
                registry.lookup(name).ok_or_else(|| Error::UnknownOption {
                    qualifier: if long { token.clone() } else { format!("-{name}") },
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for spec in specs {
            let values = take_values(&mut p, spec)?;
            if spec.nargs == Nargs::Remainder {
                tail.extend(values.iter().cloned());
            }
            tracing::trace!(dest = %spec.dest, ?values, "bound option");
            apply(&mut ns, spec, values)?;
        }
    }

    let mut rest = &queue[..];
    for spec in registry.positionals() {
        if rest.is_empty() {
            continue;
        }
        if rest.len() < spec.nargs.min() {
            return Err(missing(spec, rest.len()));
        }
        let n = match spec.nargs {
            Nargs::Exact(n) => n,
            Nargs::Optional => 1,
            Nargs::ZeroOrMore | Nargs::OneOrMore | Nargs::Remainder => rest.len(),
        };
        let (values, remaining) = rest.split_at(n);
        tracing::trace!(dest = %spec.dest, ?values, "bound positional");
        apply(&mut ns, spec, values.to_vec())?;
        rest = remaining;
    }

    let mut leftovers = rest.to_vec();
    leftovers.extend(tail);
    Ok((ns, leftovers))
}

fn take_values(p: &mut Cursor, spec: &ArgumentSpec) -> Result<Vec<String>> {
    if spec.nargs == Nargs::Remainder {
        return Ok(p.rest());
    }
    let available = p.available();
    if available < spec.nargs.min() {
        return Err(missing(spec, available));
    }
    let n = match spec.nargs {
        Nargs::Exact(n) => n,
        Nargs::OneOrMore | Nargs::ZeroOrMore | Nargs::Remainder => available,
        Nargs::Optional => available.min(1),
    };
    Ok(p.take(n))
}

fn apply(ns: &mut Namespace, spec: &ArgumentSpec, values: Vec<String>) -> Result<()> {
    let key = spec.dest();
    match spec.action {
        Action::StoreTrue => ns.set(key, Value::Single("true".to_string())),
        Action::StoreFalse => ns.set(key, Value::Single("false".to_string())),
        Action::StoreConst => {
            if let Some(c) = &spec.const_value {
                ns.set(key, Value::Single(c.clone()))
            }
        }
        Action::Store if spec.nargs.is_single() => {
            // `?` given nothing falls back to the const value, if any.
            if let Some(it) = values.into_iter().next().or_else(|| spec.const_value.clone()) {
                ns.set(key, Value::Single(it))
            }
        }
        Action::Store => ns.set(key, Value::List(values)),
        Action::AppendConst => ns.append(key, spec.const_value.clone()),
        Action::Append => ns.append(key, values),
        Action::ShowHelp => return Err(Error::ShowHelp),
        Action::ShowVersion => return Err(Error::ShowVersion),
    }
    Ok(())
}

fn missing(spec: &ArgumentSpec, available: usize) -> Error {
    let expected = match spec.nargs {
        Nargs::Exact(n) => n.to_string(),
        nargs => format!("at least {}", nargs.min()),
    };
    Error::MissingArguments { name: spec.display_name(), expected, available }
}
