use serde::{Deserialize, Serialize};

/// Presentation icon named by a section payload.
///
/// Names outside the known set are kept in `Unmapped` so callers decide
/// explicitly what to show instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Icon {
    Mail,
    Download,
    Briefcase,
    Users,
    Award,
    Coffee,
    Code,
    Palette,
    Database,
    Zap,
    Globe,
    Smartphone,
    Phone,
    MapPin,
    Github,
    Linkedin,
    Twitter,
    Heart,
    Unmapped(String),
}

impl Icon {
    pub fn as_str(&self) -> &str {
        match self {
            Icon::Mail => "Mail",
            Icon::Download => "Download",
            Icon::Briefcase => "Briefcase",
            Icon::Users => "Users",
            Icon::Award => "Award",
            Icon::Coffee => "Coffee",
            Icon::Code => "Code",
            Icon::Palette => "Palette",
            Icon::Database => "Database",
            Icon::Zap => "Zap",
            Icon::Globe => "Globe",
            Icon::Smartphone => "Smartphone",
            Icon::Phone => "Phone",
            Icon::MapPin => "MapPin",
            Icon::Github => "Github",
            Icon::Linkedin => "Linkedin",
            Icon::Twitter => "Twitter",
            Icon::Heart => "Heart",
            Icon::Unmapped(name) => name,
        }
    }

    pub fn is_mapped(&self) -> bool {
        !matches!(self, Icon::Unmapped(_))
    }

    /// Returns `self` if it is a known icon, otherwise `fallback`.
    pub fn resolve(&self, fallback: Icon) -> Icon {
        match self {
            Icon::Unmapped(name) => {
                tracing::debug!("Unmapped icon {:?}, using {}", name, fallback.as_str());
                fallback
            }
            known => known.clone(),
        }
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Mail" => Icon::Mail,
            "Download" => Icon::Download,
            "Briefcase" => Icon::Briefcase,
            "Users" => Icon::Users,
            "Award" => Icon::Award,
            "Coffee" => Icon::Coffee,
            "Code" => Icon::Code,
            "Palette" => Icon::Palette,
            "Database" => Icon::Database,
            "Zap" => Icon::Zap,
            "Globe" => Icon::Globe,
            "Smartphone" => Icon::Smartphone,
            "Phone" => Icon::Phone,
            "MapPin" => Icon::MapPin,
            "Github" => Icon::Github,
            "Linkedin" => Icon::Linkedin,
            "Twitter" => Icon::Twitter,
            "Heart" => Icon::Heart,
            _ => Icon::Unmapped(name),
        }
    }
}

impl From<&str> for Icon {
    fn from(name: &str) -> Self {
        Icon::from(name.to_string())
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        match icon {
            Icon::Unmapped(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_map_to_variants() {
        assert_eq!(Icon::from("MapPin"), Icon::MapPin);
        assert_eq!(Icon::from("Github").as_str(), "Github");
    }

    #[test]
    fn unknown_names_are_kept() {
        let icon = Icon::from("🚀");
        assert_eq!(icon, Icon::Unmapped("🚀".to_string()));
        assert!(!icon.is_mapped());
        assert_eq!(icon.resolve(Icon::Code), Icon::Code);
        assert_eq!(Icon::Zap.resolve(Icon::Code), Icon::Zap);
    }

    #[test]
    fn serializes_as_plain_name() {
        let icon: Icon = serde_json::from_str("\"Coffee\"").unwrap();
        assert_eq!(icon, Icon::Coffee);
        assert_eq!(serde_json::to_string(&Icon::Unmapped("x".into())).unwrap(), "\"x\"");
    }
}
