use anyhow::{Result, bail};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// in-flight git operation attached to a displayed item (branch, commit, file)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum ItemOperation {
    #[default]
    None = 0,
    Pushing = 1,
    Pulling = 2,
    FastForwarding = 3,
    Deleting = 4,
}

impl ItemOperation {
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Pushing,
        Self::Pulling,
        Self::FastForwarding,
        Self::Deleting,
    ];

    /// map the underlying representation back to a variant
    /// returns None for values outside the known set
    pub fn from_repr(raw: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.repr() == raw)
    }

    pub fn repr(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pushing => "pushing",
            Self::Pulling => "pulling",
            Self::FastForwarding => "fast-forwarding",
            Self::Deleting => "deleting",
        }
    }
}

impl fmt::Display for ItemOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemOperation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let op = match s.trim().to_lowercase().as_str() {
            "none" => Self::None,
            "pushing" => Self::Pushing,
            "pulling" => Self::Pulling,
            "fast-forwarding" | "fast_forwarding" | "fastforwarding" => Self::FastForwarding,
            "deleting" => Self::Deleting,
            _ => bail!("unknown operation: {s}"),
        };
        Ok(op)
    }
}
