use std::fmt;

use super::Measurement;

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_measurement() {
        let weight = Measurement::weight(500500.0, "milligram").unwrap();
        assert_eq!(weight.to_string(), "500500 milligram");

        let length = Measurement::length(0.1, "meter").unwrap();
        assert_eq!(length.to_string(), "0.1 meter");
    }
}
