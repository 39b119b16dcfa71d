use serde::{Deserialize, Serialize};

/// Perfil del usuario autenticado. Sin token vigente se fuerza el registro
/// en blanco (Default); cada fetch exitoso lo reemplaza entero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub image: String,
    pub address: UserAddress,
    pub gender: String,
    pub dob: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAddress {
    pub line1: String,
    pub line2: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_all_blank() {
        let profile = UserProfile::default();
        assert!(profile.name.is_empty());
        assert!(profile.email.is_empty());
        assert!(profile.phone.is_empty());
        assert!(profile.image.is_empty());
        assert!(profile.address.line1.is_empty());
        assert!(profile.address.line2.is_empty());
        assert!(profile.gender.is_empty());
        assert!(profile.dob.is_empty());
    }

    #[test]
    fn decodes_profile_from_backend_payload() {
        let json = r#"{
            "name": "Jane Roe",
            "email": "jane@example.com",
            "phone": "0600000000",
            "image": "/img/jane.png",
            "address": { "line1": "1 Main St", "line2": "Apt 2" },
            "gender": "Female",
            "dob": "1990-01-01"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Jane Roe");
        assert_eq!(profile.address.line1, "1 Main St");
        assert_eq!(profile.address.line2, "Apt 2");
        assert_eq!(profile.dob, "1990-01-01");
    }

    #[test]
    fn missing_fields_decode_as_blank() {
        let profile: UserProfile = serde_json::from_str(r#"{"name":"Jo"}"#).unwrap();
        assert_eq!(profile.name, "Jo");
        assert!(profile.email.is_empty());
        assert_eq!(profile.address, UserAddress::default());
    }
}
