//! Contact method beans.

use serde::{Deserialize, Serialize};

use super::{ElementHeader, ExtendedProperties};

/// How a contact method reaches its profile owner.
///
/// Stored in the repository as an enum ordinal; ordinals outside the table
/// map to [`ContactMethodType::Other`] rather than failing, so a newer
/// repository never blocks an older reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactMethodType {
    Email,
    Phone,
    Chat,
    Profile,
    Account,
    Other,
}

impl ContactMethodType {
    /// Ordinal used for the `Other` sentinel.
    pub const OTHER_ORDINAL: i32 = 99;

    pub fn from_ordinal(ordinal: i32) -> Self {
        match ordinal {
            0 => Self::Email,
            1 => Self::Phone,
            2 => Self::Chat,
            3 => Self::Profile,
            4 => Self::Account,
            _ => Self::Other,
        }
    }

    pub fn ordinal(self) -> i32 {
        match self {
            Self::Email => 0,
            Self::Phone => 1,
            Self::Chat => 2,
            Self::Profile => 3,
            Self::Account => 4,
            Self::Other => Self::OTHER_ORDINAL,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Chat => "Chat",
            Self::Profile => "Profile",
            Self::Account => "Account",
            Self::Other => "Other",
        }
    }
}

impl Default for ContactMethodType {
    fn default() -> Self {
        Self::Other
    }
}

/// One way of contacting a profile's owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMethod {
    pub header: ElementHeader,
    pub method_type: ContactMethodType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "ExtendedProperties::is_empty")]
    pub extended_properties: ExtendedProperties,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ordinals_round_trip() {
        for method in [
            ContactMethodType::Email,
            ContactMethodType::Phone,
            ContactMethodType::Chat,
            ContactMethodType::Profile,
            ContactMethodType::Account,
        ] {
            assert_eq!(ContactMethodType::from_ordinal(method.ordinal()), method);
        }
    }

    #[test]
    fn unknown_ordinals_fall_back_to_other() {
        assert_eq!(ContactMethodType::from_ordinal(17), ContactMethodType::Other);
        assert_eq!(ContactMethodType::from_ordinal(-1), ContactMethodType::Other);
        assert_eq!(ContactMethodType::Other.ordinal(), 99);
    }
}
