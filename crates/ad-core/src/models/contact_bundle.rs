use serde::{Deserialize, Serialize};

/// The four optional contact channels attached to a listing.
///
/// Every field is optional on its own, but a valid listing carries at least
/// one non-blank channel (checked by `validation::contact::validate_bundle`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBundle {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub other: Option<String>,
}

impl ContactBundle {
    /// True when no channel carries a non-blank value
    pub fn is_empty(&self) -> bool {
        fn blank(value: &Option<String>) -> bool {
            value.as_deref().map_or(true, |s| s.trim().is_empty())
        }

        blank(&self.phone) && blank(&self.email) && blank(&self.handle) && blank(&self.other)
    }

    pub fn phone_or_default(&self) -> &str {
        self.phone.as_deref().unwrap_or("")
    }

    pub fn email_or_default(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    pub fn handle_or_default(&self) -> &str {
        self.handle.as_deref().unwrap_or("")
    }
}
