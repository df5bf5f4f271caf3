//! Binary size units

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::size::error::SizeError;

/// Power-of-1024 scale factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u64)]
pub enum SizeUnit {
    B = 1,
    KiB = 1 << 10,
    MiB = 1 << 20,
    GiB = 1 << 30,
    TiB = 1 << 40,
}

impl SizeUnit {
    /// All units from smallest to largest
    pub const ALL: [SizeUnit; 5] = [
        SizeUnit::B,
        SizeUnit::KiB,
        SizeUnit::MiB,
        SizeUnit::GiB,
        SizeUnit::TiB,
    ];

    pub const fn factor(self) -> u64 {
        self as u64
    }

    pub const fn name(self) -> &'static str {
        match self {
            SizeUnit::B => "B",
            SizeUnit::KiB => "KiB",
            SizeUnit::MiB => "MiB",
            SizeUnit::GiB => "GiB",
            SizeUnit::TiB => "TiB",
        }
    }

    /// Unit for a single-letter prefix code (`k`, `m`, `g`, `t`)
    pub(crate) fn from_code(code: char) -> Option<Self> {
        match code {
            'k' => Some(SizeUnit::KiB),
            'm' => Some(SizeUnit::MiB),
            'g' => Some(SizeUnit::GiB),
            't' => Some(SizeUnit::TiB),
            _ => None,
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizeUnit {
    type Err = SizeError;

    /// Accepts the same case-insensitive unit tokens as `Size::from_string`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "b" => Ok(SizeUnit::B),
            "k" | "kb" | "kib" => Ok(SizeUnit::KiB),
            "m" | "mb" | "mib" => Ok(SizeUnit::MiB),
            "g" | "gb" | "gib" => Ok(SizeUnit::GiB),
            "t" | "tb" | "tib" => Ok(SizeUnit::TiB),
            _ => Err(SizeError::UnknownUnit(s.to_string())),
        }
    }
}

impl PartialEq<u64> for SizeUnit {
    fn eq(&self, other: &u64) -> bool {
        self.factor() == *other
    }
}

impl PartialEq<SizeUnit> for u64 {
    fn eq(&self, other: &SizeUnit) -> bool {
        *self == other.factor()
    }
}
