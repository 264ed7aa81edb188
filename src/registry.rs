use std::collections::HashMap;

use crate::{spec::dashed, ArgumentSpec, Error, Result};

/// All argument declarations of one parser.
///
/// Specs are add-only. Every qualifier and every destination key belongs to
/// exactly one spec.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    specs: Vec<ArgumentSpec>,
    by_qualifier: HashMap<String, usize>,
    by_dest: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn register(&mut self, spec: ArgumentSpec) -> Result<()> {
        spec.check()?;

        if self.by_dest.contains_key(&spec.dest) {
            return Err(Error::DuplicateQualifier { qualifier: spec.dest.clone() });
        }
        for (i, q) in spec.qualifiers.iter().enumerate() {
            if self.by_qualifier.contains_key(q) || spec.qualifiers[..i].contains(q) {
                return Err(Error::DuplicateQualifier { qualifier: dashed(q) });
            }
        }

        let idx = self.specs.len();
        for q in &spec.qualifiers {
            self.by_qualifier.insert(q.clone(), idx);
        }
        self.by_dest.insert(spec.dest.clone(), idx);
        tracing::trace!(dest = %spec.dest, qualifiers = ?spec.qualifiers, "registered argument");
        self.specs.push(spec);
        Ok(())
    }

    /// Finds the spec owning a short letter or long name (without dashes).
    pub fn lookup(&self, qualifier: &str) -> Option<&ArgumentSpec> {
        self.by_qualifier.get(qualifier).map(|&idx| &self.specs[idx])
    }

    pub fn get(&self, dest: &str) -> Option<&ArgumentSpec> {
        self.by_dest.get(dest).map(|&idx| &self.specs[idx])
    }

    /// Positional specs in declaration order.
    pub fn positionals(&self) -> impl Iterator<Item = &ArgumentSpec> {
        self.specs.iter().filter(|it| it.is_positional())
    }

    pub fn optionals(&self) -> impl Iterator<Item = &ArgumentSpec> {
        self.specs.iter().filter(|it| !it.is_positional())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArgumentSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
