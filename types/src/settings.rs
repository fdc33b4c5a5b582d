//! Resolved configuration types shared across crates.
//!
//! Raw TOML deserialization structs (with `Option` fields and `bool` flags)
//! stay private in `nucleus-config`. The config loader resolves them into
//! these types at the parse boundary.
//!
//! Existence of a value is the proof of its validity -- no `Option`, no `bool`.

use serde::{Deserialize, Serialize};

/// How a keyed spec treats input keys it does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Undeclared keys are ignored.
    #[default]
    Lenient,
    /// Undeclared keys are violations.
    Strict,
}

impl Strictness {
    #[must_use]
    pub const fn from_flag(strict: bool) -> Self {
        if strict {
            Strictness::Strict
        } else {
            Strictness::Lenient
        }
    }

    #[must_use]
    pub const fn rejects_unknown_keys(self) -> bool {
        matches!(self, Strictness::Strict)
    }
}

/// Whether failed checks are reported through `tracing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationLogging {
    #[default]
    Debug,
    Silent,
}

/// Resolved settings for the checking engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeditationSettings {
    strictness: Strictness,
    logging: ViolationLogging,
}

impl MeditationSettings {
    #[must_use]
    pub const fn new(strictness: Strictness, logging: ViolationLogging) -> Self {
        Self {
            strictness,
            logging,
        }
    }

    #[must_use]
    pub const fn strictness(&self) -> Strictness {
        self.strictness
    }

    #[must_use]
    pub const fn logging(&self) -> ViolationLogging {
        self.logging
    }
}
