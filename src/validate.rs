use crate::{Error, Namespace, Registry, Result};

/// Checks a freshly bound namespace and fills in defaults.
///
/// Runs three passes over the registry in declaration order: required
/// arguments, choices, then defaults. A required option is satisfied by its
/// default; a required positional has to be given on the command line.
pub fn validate(ns: &mut Namespace, registry: &Registry) -> Result<()> {
    for spec in registry.iter() {
        let satisfied = ns.contains(spec.dest())
            || (!spec.is_positional() && spec.get_default().is_some());
        if spec.is_required() && !satisfied {
            return Err(Error::MissingRequired { name: spec.display_name() });
        }
    }

    for spec in registry.iter() {
        let (Some(choices), Some(value)) = (spec.get_choices(), ns.get(spec.dest())) else {
            continue;
        };
        if let Some(bad) = value.as_slice().iter().find(|it| !choices.contains(*it)) {
            return Err(Error::InvalidChoice {
                name: spec.display_name(),
                value: bad.clone(),
                choices: choices.to_vec(),
            });
        }
    }

    for spec in registry.iter() {
        if let (Some(default), false) = (spec.get_default(), ns.contains(spec.dest())) {
            tracing::trace!(dest = %spec.dest(), ?default, "applied default");
            ns.set(spec.dest(), default.clone());
        }
    }
    Ok(())
}
