use serde::{Deserialize, Serialize};

/// Work-stream divisions a main project is split into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Division {
    Design,
    Construction,
    Interior,
    Unknown,
}

impl Division {
    /// Map an Odoo project tag id to a division.
    ///
    /// Tag configuration in the production database:
    /// 1 = Construction, 2 = Interior, 3 = Design.
    pub fn from_tag(tag: i64) -> Self {
        match tag {
            1 => Division::Construction,
            2 => Division::Interior,
            3 => Division::Design,
            _ => Division::Unknown,
        }
    }

    /// Short machine code
    pub fn code(&self) -> &'static str {
        match self {
            Division::Design => "design",
            Division::Construction => "construction",
            Division::Interior => "interior",
            Division::Unknown => "unknown",
        }
    }

    /// Human-readable name as shown on the board
    pub fn display_name(&self) -> &'static str {
        match self {
            Division::Design => "Design",
            Division::Construction => "Construction",
            Division::Interior => "Interior",
            Division::Unknown => "Unknown",
        }
    }

    /// The three real divisions, in board display order
    pub fn all() -> Vec<Division> {
        vec![Division::Design, Division::Construction, Division::Interior]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_mapping() {
        assert_eq!(Division::from_tag(1), Division::Construction);
        assert_eq!(Division::from_tag(2), Division::Interior);
        assert_eq!(Division::from_tag(3), Division::Design);
        assert_eq!(Division::from_tag(0), Division::Unknown);
        assert_eq!(Division::from_tag(99), Division::Unknown);
    }

    #[test]
    fn test_serializes_as_display_variant() {
        let json = serde_json::to_string(&Division::Design).unwrap();
        assert_eq!(json, "\"Design\"");
        let back: Division = serde_json::from_str("\"Interior\"").unwrap();
        assert_eq!(back, Division::Interior);
    }
}
