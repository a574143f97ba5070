use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of the status review endpoints, shared by hospitals and blood
/// requests.
///
/// The status is carried as a plain string so the enumeration check happens
/// in the status service, where a bad value is a domain validation error
/// rather than a deserialization failure.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateStatusDto {
    pub status: String,
}

/// Review status shared by hospital applications and blood requests.
///
/// New records start `Pending`; the status service moves them between states
/// with no structural guard against backward or repeated transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Error, Debug)]
#[error("not a valid record status: {0:?}")]
pub struct ParseRecordStatusError(pub String);

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = ParseRecordStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(ParseRecordStatusError(other.to_string())),
        }
    }
}
