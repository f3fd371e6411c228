//! Registration form validation. All failing fields are reported at once so
//! the form can show every message inline.

use super::{BloodType, NewDonor};
use crate::validate;

/// Form state as bound to the inputs. The blood type comes from a select,
/// so it is already parsed (or still unchosen).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DonorForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blood_type: Option<BloodType>,
    pub city: String,
    pub location: String,
}

/// Per-field validation messages; `None` means the field passed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub blood_type: Option<String>,
    pub city: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.blood_type.is_none()
            && self.city.is_none()
    }
}

impl DonorForm {
    /// Checks every field and either returns the cleaned-up payload or the
    /// full set of messages. Location is optional.
    pub fn validate(&self) -> Result<NewDonor, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.name = Some("Name is required".to_string());
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.email = Some("Email is required".to_string());
        } else if !validate::is_valid_email(email) {
            errors.email = Some("Email is invalid".to_string());
        }

        if self.phone.trim().is_empty() {
            errors.phone = Some("Phone number is required".to_string());
        } else if !validate::is_valid_phone(&self.phone) {
            errors.phone = Some("Phone number must be exactly 10 digits".to_string());
        }

        if self.blood_type.is_none() {
            errors.blood_type = Some("Blood type is required".to_string());
        }

        if self.city.trim().is_empty() {
            errors.city = Some("City is required".to_string());
        }

        let Some(blood_type) = self.blood_type else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewDonor {
            name: name.to_string(),
            email: email.to_string(),
            phone: validate::normalized_phone(&self.phone),
            blood_type,
            city: self.city.trim().to_string(),
            location: self.location.trim().to_string(),
        })
    }
}
