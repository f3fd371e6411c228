//! Wire shapes for the `Donor` table and the auth verify response. The table
//! predates this front end, so the column names are what they are and the
//! mapping into [`DonorRecord`] tolerates the drift legacy rows carry.

use crate::donors::{BloodType, DonorRecord, NewDonor};
use crate::flow::Identity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A `Donor` row as PostgREST returns it. `phone_number` arrives as a JSON
/// number in legacy rows and a string in newer ones, so it decodes as a raw
/// value and is normalized in the record mapping.
#[derive(Clone, Debug, Deserialize)]
pub struct DonorRow {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "Donor_name", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<Value>,
    #[serde(rename = "Blood_group", default)]
    pub blood_group: Option<String>,
    #[serde(rename = "City", default)]
    pub city: Option<String>,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<DonorRow> for DonorRecord {
    fn from(row: DonorRow) -> Self {
        Self {
            id: row.id,
            name: row.name.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
            phone: phone_text(row.phone_number),
            blood_type: row
                .blood_group
                .as_deref()
                .and_then(|group| group.trim().parse::<BloodType>().ok()),
            city: row.city.unwrap_or_default(),
            location: row.location.unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}

/// Renders the phone column as digits whether the row stored text or a number.
fn phone_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(digits)) => digits,
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    }
}

/// Insert payload shaped to the existing column names.
#[derive(Debug, Serialize)]
pub struct InsertDonorRow {
    #[serde(rename = "Donor_name")]
    pub name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(rename = "Blood_group")]
    pub blood_group: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Location")]
    pub location: String,
}

impl From<&NewDonor> for InsertDonorRow {
    fn from(donor: &NewDonor) -> Self {
        Self {
            name: donor.name.clone(),
            email: donor.email.clone(),
            phone_number: donor.phone.clone(),
            blood_group: donor.blood_type.label().to_string(),
            city: donor.city.clone(),
            location: donor.location.clone(),
        }
    }
}

/// The auth service's response to a successful code verification.
#[derive(Clone, Debug, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub access_token: String,
    pub user: Identity,
}

#[cfg(test)]
mod tests {
    use super::{DonorRow, InsertDonorRow, VerifyResponse};
    use crate::donors::{BloodType, DonorRecord, NewDonor};
    use serde_json::json;

    #[test]
    fn rows_map_the_legacy_column_names() {
        let row: DonorRow = serde_json::from_value(json!({
            "id": 7,
            "Donor_name": "Asha Rao",
            "email": "asha@example.com",
            "phone_number": "9876543210",
            "Blood_group": "O+",
            "City": "Pune",
            "Location": "Kothrud",
            "created_at": "2024-05-01T10:00:00Z"
        }))
        .expect("row decodes");

        let record = DonorRecord::from(row);
        assert_eq!(record.id, 7);
        assert_eq!(record.name, "Asha Rao");
        assert_eq!(record.phone, "9876543210");
        assert_eq!(record.blood_type, Some(BloodType::OPositive));
        assert_eq!(record.city, "Pune");
        assert_eq!(record.location, "Kothrud");
        assert!(record.created_at.is_some());
    }

    #[test]
    fn numeric_phones_and_unknown_groups_degrade_gracefully() {
        let row: DonorRow = serde_json::from_value(json!({
            "id": 3,
            "Donor_name": "Dev Khanna",
            "email": "dev@example.com",
            "phone_number": 9123456780u64,
            "Blood_group": "universal"
        }))
        .expect("row decodes");

        let record = DonorRecord::from(row);
        assert_eq!(record.phone, "9123456780");
        assert_eq!(record.blood_type, None);
        assert_eq!(record.city, "");
        assert_eq!(record.location, "");
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn insert_payload_uses_the_database_columns() {
        let donor = NewDonor {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            blood_type: BloodType::ANegative,
            city: "Pune".to_string(),
            location: "Kothrud".to_string(),
        };

        let payload = serde_json::to_value(InsertDonorRow::from(&donor)).expect("payload encodes");
        assert_eq!(payload["Donor_name"], "Asha Rao");
        assert_eq!(payload["Blood_group"], "A-");
        assert_eq!(payload["phone_number"], "9876543210");
        assert_eq!(payload["City"], "Pune");
        assert_eq!(payload["Location"], "Kothrud");
    }

    #[test]
    fn verify_response_carries_the_user() {
        let response: VerifyResponse = serde_json::from_value(json!({
            "access_token": "jwt",
            "token_type": "bearer",
            "user": {
                "id": "5f1c7e9a",
                "aud": "authenticated",
                "email": "a@b.com",
                "last_sign_in_at": "2024-05-01T10:00:00Z"
            }
        }))
        .expect("response decodes");

        assert_eq!(response.access_token, "jwt");
        assert_eq!(response.user.email, "a@b.com");
        assert!(response.user.last_sign_in_at.is_some());
        assert_eq!(response.user.email_confirmed_at, None);
    }
}
