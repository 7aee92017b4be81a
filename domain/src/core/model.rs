//! Model value object representing a Gemini model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available Gemini models (Value Object)
///
/// Identifies the generation model a chat session is bound to. Unknown
/// identifiers are carried through as [`Model::Custom`] so new model
/// releases work without a code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini15Flash,
    Gemini15Flash8B,
    Gemini15Pro,
    Gemini20Flash,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini15Flash => "gemini-1.5-flash",
            Model::Gemini15Flash8B => "gemini-1.5-flash-8b",
            Model::Gemini15Pro => "gemini-1.5-pro",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (gemini-1.5-flash)
    fn default() -> Self {
        Model::Gemini15Flash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-1.5-flash" => Model::Gemini15Flash,
            "gemini-1.5-flash-8b" => Model::Gemini15Flash8B,
            "gemini-1.5-pro" => Model::Gemini15Pro,
            "gemini-2.0-flash" => Model::Gemini20Flash,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        let models = [
            Model::Gemini15Flash,
            Model::Gemini15Pro,
            Model::Gemini20Flash,
        ];
        for model in models {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "gemini-experimental".parse().unwrap();
        assert_eq!(model, Model::Custom("gemini-experimental".to_string()));
        assert_eq!(model.to_string(), "gemini-experimental");
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::Gemini15Flash);
    }
}
