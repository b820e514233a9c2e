//! Tie handling and configuration for the Xi correlation routine.
//!
//! - [`TieMode`] selects the formula variant: `NoTies` (ordinal ranks,
//!   `3·S / (n² − 1)`) or `Ties` (max ranks in the denominator,
//!   `n·S / (2·Σ r·(n − 1))`).
//! - [`XiOptions`] bundles the run configuration passed to
//!   [`xi_cor_coeff_with`](super::xi::xi_cor_coeff_with).
use std::str::FromStr;

use crate::xi_correlation::errors::XiError;

/// Formula variant used to assemble the Xi statistic.
///
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"no_ties"`, `"noties"`, `"ordinal"` for [`TieMode::NoTies`];
/// `"ties"`, `"max"` for [`TieMode::Ties`]). Unknown names return
/// `XiError::InvalidTieMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieMode {
    #[default]
    NoTies,
    Ties,
}

impl TieMode {
    pub fn is_ties(&self) -> bool {
        matches!(self, TieMode::Ties)
    }
}

impl From<bool> for TieMode {
    fn from(ties: bool) -> Self {
        if ties { TieMode::Ties } else { TieMode::NoTies }
    }
}

impl FromStr for TieMode {
    type Err = XiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "no_ties" | "noties" | "ordinal" => Ok(TieMode::NoTies),
            "ties" | "max" => Ok(TieMode::Ties),
            _ => Err(XiError::InvalidTieMode { name: s.to_string() }),
        }
    }
}

/// Run configuration for the Xi correlation routine.
///
/// Defaults to [`TieMode::NoTies`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XiOptions {
    pub ties: TieMode,
}

impl XiOptions {
    pub fn new(ties: TieMode) -> Self {
        XiOptions { ties }
    }

    pub fn with_ties(ties: bool) -> Self {
        XiOptions { ties: TieMode::from(ties) }
    }
}
