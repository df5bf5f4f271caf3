//! Fixed-arity ordered tuple of version numbers
//!
//! Shared by [`APIVersion`](crate::version::api::APIVersion) (two parts) and
//! [`SemVer`](crate::version::semver::SemVer) (three parts). The arity is a const
//! generic: equality and ordering exist only between versions of the same arity,
//! so comparing a two-part with a three-part version does not compile. At runtime,
//! `try_cmp` accepts any arity and returns [`VersionError::Incomparable`] when
//! they differ.

use std::cmp::Ordering;
use std::fmt;

use crate::version::error::VersionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComparableVersion<const N: usize> {
    parts: [u64; N],
}

impl<const N: usize> ComparableVersion<N> {
    pub const fn new(parts: [u64; N]) -> Self {
        Self { parts }
    }

    /// Build from signed parts, rejecting any negative value.
    pub fn try_from_signed(parts: [i64; N]) -> Result<Self, VersionError> {
        let mut unsigned = [0u64; N];
        for (index, (&value, slot)) in parts.iter().zip(unsigned.iter_mut()).enumerate() {
            *slot = u64::try_from(value).map_err(|_| VersionError::NegativePart { index, value })?;
        }
        Ok(Self::new(unsigned))
    }

    pub const fn parts(&self) -> &[u64; N] {
        &self.parts
    }

    pub const fn arity(&self) -> usize {
        N
    }

    /// Compare with a version of any arity.
    ///
    /// Fails instead of guessing when the arities differ.
    pub fn try_cmp<const M: usize>(
        &self,
        other: &ComparableVersion<M>,
    ) -> Result<Ordering, VersionError> {
        if N != M {
            return Err(VersionError::Incomparable {
                left: N,
                right: M,
            });
        }
        Ok(self.parts.as_slice().cmp(other.parts.as_slice()))
    }
}

impl<const N: usize> From<[u64; N]> for ComparableVersion<N> {
    fn from(parts: [u64; N]) -> Self {
        Self::new(parts)
    }
}

impl<const N: usize> fmt::Display for ComparableVersion<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}
