//! Donor domain: directory records, the registration payload, and the
//! client-side search/sort/statistics helpers the directory views run over
//! a wholesale-fetched list.

mod filter;
mod form;

pub use filter::{
    distribution, filter_donors, registered_on, search_and_sort, stats, DirectoryStats, SortKey,
};
pub use form::{DonorForm, FieldErrors};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The eight blood groups, serialized with their punctuated labels.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodType {
    pub const ALL: [BloodType; 8] = [
        BloodType::APositive,
        BloodType::ANegative,
        BloodType::BPositive,
        BloodType::BNegative,
        BloodType::AbPositive,
        BloodType::AbNegative,
        BloodType::OPositive,
        BloodType::ONegative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unrecognized blood group: {0}")]
pub struct UnknownBloodType(pub String);

impl FromStr for BloodType {
    type Err = UnknownBloodType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BloodType::ALL
            .into_iter()
            .find(|blood_type| blood_type.label() == value)
            .ok_or_else(|| UnknownBloodType(value.to_string()))
    }
}

/// A directory row as the views consume it. Stored rows are tolerated, not
/// trusted: unknown blood groups map to `None`, missing text to empty
/// strings, and rows predating the timestamp column to `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct DonorRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blood_type: Option<BloodType>,
    pub city: String,
    pub location: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// A registration payload that passed form validation.
#[derive(Clone, Debug, PartialEq)]
pub struct NewDonor {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blood_type: BloodType,
    pub city: String,
    pub location: String,
}

/// Directory rejection with a display message.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The donor directory as seen by the views: list wholesale, insert one.
#[async_trait(?Send)]
pub trait DirectoryStore {
    async fn list(&self) -> Result<Vec<DonorRecord>, StoreError>;
    async fn insert(&self, donor: &NewDonor) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::BloodType;

    #[test]
    fn labels_round_trip_through_parse() {
        for blood_type in BloodType::ALL {
            assert_eq!(blood_type.label().parse::<BloodType>(), Ok(blood_type));
        }
    }

    #[test]
    fn parse_rejects_unknown_groups() {
        assert!("C+".parse::<BloodType>().is_err());
        assert!("a+".parse::<BloodType>().is_err());
        assert!("".parse::<BloodType>().is_err());
    }

    #[test]
    fn serde_uses_the_punctuated_labels() {
        assert_eq!(
            serde_json::to_string(&BloodType::AbNegative).unwrap(),
            "\"AB-\""
        );
        assert_eq!(
            serde_json::from_str::<BloodType>("\"O+\"").unwrap(),
            BloodType::OPositive
        );
    }
}
