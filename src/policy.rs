use crate::charset::{self, CharClass};
use crate::error::{DeriveError, Result};
use CharClass::{Lower, Numeric, SpecialAdvanced, SpecialSimple, Upper};

pub const DEFAULT_POLICY: &str = "specialSimple";

// Satisfied by any one character from the union of the listed classes.
pub type Coverage = &'static [CharClass];

#[derive(Debug, PartialEq, Eq)]
pub struct Policy {
    pub(crate) name: &'static str,
    pub(crate) classes: &'static [CharClass],
    pub(crate) coverage: &'static [Coverage],
}

static POLICIES: [Policy; 3] = [
    Policy {
        name: "base",
        classes: &[Lower, Upper, Numeric],
        coverage: &[&[Lower], &[Upper], &[Numeric]],
    },
    Policy {
        name: "specialSimple",
        classes: &[Lower, Upper, Numeric, SpecialSimple],
        coverage: &[&[Lower], &[Upper], &[Numeric], &[SpecialSimple]],
    },
    Policy {
        name: "specialAdvanced",
        classes: &[Lower, Upper, Numeric, SpecialSimple, SpecialAdvanced],
        coverage: &[
            &[Lower],
            &[Upper],
            &[Numeric],
            &[SpecialSimple, SpecialAdvanced],
        ],
    },
];

impl Policy {
    pub fn all() -> &'static [Policy] {
        &POLICIES
    }

    pub fn lookup(name: &str) -> Result<&'static Policy> {
        POLICIES
            .iter()
            .find(|policy| policy.name == name)
            .ok_or_else(|| DeriveError::Policy {
                name: name.to_string(),
            })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn classes(&self) -> &'static [CharClass] {
        self.classes
    }

    pub fn coverage(&self) -> &'static [Coverage] {
        self.coverage
    }

    pub fn alphabet(&self) -> Vec<u8> {
        charset::concat(self.classes)
    }

    pub fn coverage_sets(&self) -> Vec<Vec<u8>> {
        self.coverage
            .iter()
            .map(|entry| charset::concat(entry))
            .collect()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.classes.iter().any(|class| class.contains(ch))
    }
}
