//! User profile model matching the users collection.

use serde::{Deserialize, Serialize};

/// Default avatar assigned at registration when none is provided.
pub const DEFAULT_PROFILE_PICTURE: &str =
    "https://res.cloudinary.com/publica/image/upload/default_profile.webp";

/// A user profile, resolved lazily by id when rendering feed items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub nick: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "apellidos", default)]
    pub surnames: String,
    #[serde(default)]
    pub profile_picture: String,
}

/// Request body for creating the profile record after provider sign-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserProfile {
    pub user_id: String,
    pub nick: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "apellidos")]
    pub surnames: String,
    pub profile_picture: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_wire_format() {
        let json = r#"{
            "user_id": "u1",
            "nick": "ana",
            "nombre": "Ana",
            "apellidos": "García López",
            "profile_picture": "https://img.example/u1.webp"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.nick, "ana");
        assert_eq!(profile.surnames, "García López");
    }

    #[test]
    fn test_profile_optional_fields_default() {
        let json = r#"{"user_id":"u1","nick":"ana"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert!(profile.name.is_empty());
        assert!(profile.profile_picture.is_empty());
    }
}
