//! Content element publication status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication status of a content element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "element_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ElementStatus {
    /// Visible and selectable as a parent.
    Active,
    /// Temporarily hidden.
    Suspend,
    /// Not yet published.
    Draft,
}

impl ElementStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspend => "suspend",
            Self::Draft => "draft",
        }
    }
}

impl fmt::Display for ElementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ElementStatus {
    type Err = contenthub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "suspend" => Ok(Self::Suspend),
            "draft" => Ok(Self::Draft),
            _ => Err(contenthub_core::AppError::validation(
                "status",
                format!("Invalid status: '{s}'. Expected one of: active, suspend, draft"),
            )),
        }
    }
}
