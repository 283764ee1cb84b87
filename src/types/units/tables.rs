use crate::types::Kind;

/// Read-only mapping from unit name to a base-relative factor.
///
/// Factors follow `value_in_a / (factor_a / factor_b) = value_in_b`, so a
/// larger unit carries a smaller factor. The constants are fixed and must not
/// be replaced by SI-derived ratios.
#[derive(Debug)]
pub struct ConversionTable {
    kind: Kind,
    entries: &'static [(&'static str, f64)],
}

/// Millimeter-relative length factors
pub static LENGTH_TABLE: ConversionTable = ConversionTable {
    kind: Kind::Length,
    entries: &[
        ("millimeter", 1.0),
        ("centimeter", 0.1),
        ("decimeter", 0.01),
        ("inch", 0.03937),
        ("meter", 0.001),
    ],
};

/// Milligram-relative weight factors
pub static WEIGHT_TABLE: ConversionTable = ConversionTable {
    kind: Kind::Weight,
    entries: &[
        ("milligram", 10000.0),
        ("gram", 10.0),
        ("kilogram", 0.01),
        ("pound", 0.022),
        ("ounce", 0.353),
    ],
};

impl ConversionTable {
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Factor for a unit, if the unit belongs to this table
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.factor(unit).is_some()
    }

    /// The table's own `'static` spelling of a unit name
    pub fn canonical(&self, unit: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(name, _)| *name)
    }

    /// Unit names in table order
    pub fn units(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// `factor(from) / factor(to)`; dividing a value in `from` by this gives the value in `to`
    pub fn ratio(&self, from: &str, to: &str) -> Option<f64> {
        Some(self.factor(from)? / self.factor(to)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_table_constants() {
        assert_eq!(LENGTH_TABLE.factor("millimeter"), Some(1.0));
        assert_eq!(LENGTH_TABLE.factor("centimeter"), Some(0.1));
        assert_eq!(LENGTH_TABLE.factor("decimeter"), Some(0.01));
        assert_eq!(LENGTH_TABLE.factor("inch"), Some(0.03937));
        assert_eq!(LENGTH_TABLE.factor("meter"), Some(0.001));
    }

    #[test]
    fn test_weight_table_constants() {
        assert_eq!(WEIGHT_TABLE.factor("milligram"), Some(10000.0));
        assert_eq!(WEIGHT_TABLE.factor("gram"), Some(10.0));
        assert_eq!(WEIGHT_TABLE.factor("kilogram"), Some(0.01));
        assert_eq!(WEIGHT_TABLE.factor("pound"), Some(0.022));
        assert_eq!(WEIGHT_TABLE.factor("ounce"), Some(0.353));
    }

    #[test]
    fn test_tables_do_not_share_units() {
        for unit in LENGTH_TABLE.units() {
            assert!(!WEIGHT_TABLE.contains(unit), "{unit} in both tables");
        }
        assert!(!LENGTH_TABLE.contains("pound"));
        assert!(!WEIGHT_TABLE.contains("meter"));
    }

    #[test]
    fn test_lookup_is_exact_match() {
        assert!(!LENGTH_TABLE.contains("Meter"));
        assert!(!LENGTH_TABLE.contains("m"));
        assert!(!LENGTH_TABLE.contains(""));
        assert_eq!(LENGTH_TABLE.canonical("meter"), Some("meter"));
        assert_eq!(LENGTH_TABLE.canonical("candela"), None);
    }

    #[test]
    fn test_units_in_table_order() {
        let units: Vec<_> = WEIGHT_TABLE.units().collect();
        assert_eq!(units, ["milligram", "gram", "kilogram", "pound", "ounce"]);
    }

    #[test]
    fn test_ratio() {
        let cm_to_m = LENGTH_TABLE.ratio("centimeter", "meter").unwrap();
        assert_relative_eq!(cm_to_m, 100.0, epsilon = 1e-9);

        let g_to_mg = WEIGHT_TABLE.ratio("gram", "milligram").unwrap();
        assert_relative_eq!(g_to_mg, 0.001, epsilon = 1e-12);
        assert_eq!(LENGTH_TABLE.ratio("meter", "pound"), None);
        assert_eq!(LENGTH_TABLE.ratio("pound", "meter"), None);
    }
}
