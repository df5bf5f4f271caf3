//! Single-comparator version requirements
//!
//! Supports `<`, `<=`, `>`, `>=`, `==`, `!=` followed by a full semantic version.
//! A bare version means `==`. Comparison uses the core-only ordering of
//! [`SemVer`], so metadata on either side is ignored.

use std::str::FromStr;

use crate::version::error::VersionError;
use crate::version::semver::SemVer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    Ne,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub operator: Operator,
    pub version: SemVer,
}

impl Requirement {
    pub fn satisfies(&self, version: &SemVer) -> bool {
        match self.operator {
            Operator::Lt => version < &self.version,
            Operator::Lte => version <= &self.version,
            Operator::Gt => version > &self.version,
            Operator::Gte => version >= &self.version,
            Operator::Eq => version == &self.version,
            Operator::Ne => version != &self.version,
        }
    }
}

impl FromStr for Requirement {
    type Err = VersionError;

    fn from_str(expr: &str) -> Result<Self, Self::Err> {
        let spec = expr.trim();

        // Two-character operators must be tried before their prefixes
        let (operator, rest) = if let Some(rest) = spec.strip_prefix(">=") {
            (Operator::Gte, rest)
        } else if let Some(rest) = spec.strip_prefix("<=") {
            (Operator::Lte, rest)
        } else if let Some(rest) = spec.strip_prefix("==") {
            (Operator::Eq, rest)
        } else if let Some(rest) = spec.strip_prefix("!=") {
            (Operator::Ne, rest)
        } else if let Some(rest) = spec.strip_prefix('>') {
            (Operator::Gt, rest)
        } else if let Some(rest) = spec.strip_prefix('<') {
            (Operator::Lt, rest)
        } else {
            (Operator::Eq, spec)
        };

        let version = SemVer::from_string(rest.trim())
            .map_err(|_| VersionError::InvalidRequirement(expr.to_string()))?;

        Ok(Self { operator, version })
    }
}
