use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfarerError};

/// Reply-length preference for one submission. Closed set; the instruction
/// sent to the model is appended as the trailing system message each turn
/// and never stored in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPreference {
    Concise,
    #[default]
    Moderate,
    Explained,
}

impl LengthPreference {
    /// All preferences in selector order.
    pub const ALL: [LengthPreference; 3] = [
        LengthPreference::Concise,
        LengthPreference::Moderate,
        LengthPreference::Explained,
    ];

    /// Label shown in the UI selector and accepted by [LengthPreference::from_label].
    pub fn label(&self) -> &'static str {
        match self {
            LengthPreference::Concise => "Concise",
            LengthPreference::Moderate => "Moderate",
            LengthPreference::Explained => "Explained",
        }
    }

    /// Instruction appended as the trailing system message.
    pub fn instruction(&self) -> &'static str {
        match self {
            LengthPreference::Concise => "Respond briefly.",
            LengthPreference::Moderate => "Respond with a balanced explanation.",
            LengthPreference::Explained => "Provide a detailed and thorough response.",
        }
    }

    /// Parse a label. Unknown labels are rejected; there is no fallback value.
    pub fn from_label(label: &str) -> Result<Self> {
        match label.trim().to_lowercase().as_str() {
            "concise" => Ok(LengthPreference::Concise),
            "moderate" => Ok(LengthPreference::Moderate),
            "explained" => Ok(LengthPreference::Explained),
            _ => Err(WayfarerError::InvalidPreference(label.to_string())),
        }
    }

    /// Next preference in selector order, wrapping around.
    pub fn next(&self) -> Self {
        match self {
            LengthPreference::Concise => LengthPreference::Moderate,
            LengthPreference::Moderate => LengthPreference::Explained,
            LengthPreference::Explained => LengthPreference::Concise,
        }
    }
}

impl FromStr for LengthPreference {
    type Err = WayfarerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

impl std::fmt::Display for LengthPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_moderate() {
        assert_eq!(LengthPreference::default(), LengthPreference::Moderate);
    }

    #[test]
    fn test_instruction_mapping() {
        assert_eq!(LengthPreference::Concise.instruction(), "Respond briefly.");
        assert_eq!(
            LengthPreference::Moderate.instruction(),
            "Respond with a balanced explanation."
        );
        assert_eq!(
            LengthPreference::Explained.instruction(),
            "Provide a detailed and thorough response."
        );
    }

    #[test]
    fn test_from_label_known() {
        assert_eq!(
            LengthPreference::from_label("Concise").unwrap(),
            LengthPreference::Concise
        );
        assert_eq!(
            LengthPreference::from_label("explained").unwrap(),
            LengthPreference::Explained
        );
        assert_eq!(
            LengthPreference::from_label(" moderate ").unwrap(),
            LengthPreference::Moderate
        );
    }

    #[test]
    fn test_from_label_unknown_is_rejected() {
        let err = LengthPreference::from_label("Verbose").unwrap_err();
        assert!(matches!(err, WayfarerError::InvalidPreference(_)));
        assert!(err.to_string().contains("Verbose"));
    }

    #[test]
    fn test_from_label_empty_is_rejected() {
        assert!(LengthPreference::from_label("").is_err());
    }

    #[test]
    fn test_from_str_round_trip() {
        for pref in LengthPreference::ALL {
            let parsed: LengthPreference = pref.label().parse().unwrap();
            assert_eq!(parsed, pref);
        }
    }

    #[test]
    fn test_next_cycles_all_three() {
        let start = LengthPreference::Concise;
        assert_eq!(start.next(), LengthPreference::Moderate);
        assert_eq!(start.next().next(), LengthPreference::Explained);
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(format!("{}", LengthPreference::Explained), "Explained");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LengthPreference::Concise).unwrap();
        assert_eq!(json, "\"concise\"");

        let decoded: LengthPreference = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, LengthPreference::Concise);
    }
}
