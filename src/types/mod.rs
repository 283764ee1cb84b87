use serde::{Deserialize, Serialize};
use std::fmt;

pub mod units;

pub use units::{ConversionTable, Quantity, LENGTH_TABLE, WEIGHT_TABLE};

/// Physical quantity category. Selects which conversion table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Length,
    Weight,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Length, Kind::Weight];

    /// The conversion table backing this kind
    pub fn table(&self) -> &'static ConversionTable {
        match self {
            Kind::Length => &LENGTH_TABLE,
            Kind::Weight => &WEIGHT_TABLE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Length => "length",
            Kind::Weight => "weight",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_selects_its_own_table() {
        for kind in Kind::ALL {
            assert_eq!(kind.table().kind(), kind);
        }
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Kind::Weight).unwrap(), "\"weight\"");

        let kind: Kind = serde_json::from_str("\"length\"").unwrap();
        assert_eq!(kind, Kind::Length);
        assert!(serde_json::from_str::<Kind>("\"Length\"").is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Length.to_string(), "length");
        assert_eq!(Kind::Weight.to_string(), "weight");
    }
}
