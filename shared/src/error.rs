use std::fmt;

/// Reasons a wheel cannot be used. Every variant leaves the wheel inert.
#[derive(Debug, Clone, PartialEq)]
pub enum WheelError {
    NoItems,
    InvalidWeight { label: String, weight: f64 },
    WeightsDoNotSum { total: f64 },
    InvalidConfig(String),
    MissingAnchor(&'static str),
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoItems => write!(f, "Wheel has no items"),
            Self::InvalidWeight { label, weight } => {
                write!(f, "Item '{}' has invalid weight {}", label, weight)
            }
            Self::WeightsDoNotSum { total } => {
                write!(f, "Item weights must sum to 100, got {}", total)
            }
            Self::InvalidConfig(msg) => write!(f, "Invalid wheel configuration: {}", msg),
            Self::MissingAnchor(anchor) => write!(f, "Missing required element: {}", anchor),
        }
    }
}

impl std::error::Error for WheelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_total() {
        let err = WheelError::WeightsDoNotSum { total: 99.5 };
        assert_eq!(err.to_string(), "Item weights must sum to 100, got 99.5");
    }

    #[test]
    fn test_missing_anchor_display() {
        let err = WheelError::MissingAnchor("canvas");
        assert!(err.to_string().contains("canvas"));
    }
}
