use std::fmt;

pub const CURRENCY_PREFIX: &str = "$";

const MINOR_UNITS_PER_MAJOR: u64 = 100;

/// An amount in minor currency units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(pub u64);

impl Price {
    #[must_use]
    pub const fn minor_units(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn major_units(self) -> u64 {
        self.0 / MINOR_UNITS_PER_MAJOR
    }

    #[must_use]
    pub const fn fraction(self) -> u64 {
        self.0 % MINOR_UNITS_PER_MAJOR
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{CURRENCY_PREFIX}{major}.{fraction:02}",
            major = self.major_units(),
            fraction = self.fraction()
        )
    }
}

/// Formats a minor-unit amount as a major-unit decimal with two fraction
/// digits, e.g. `1050` becomes `$10.50`.
#[must_use]
pub fn format_price(amount: u64) -> String {
    Price(amount).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_two_fraction_digits() {
        assert_eq!(format_price(1050), "$10.50");
        assert_eq!(format_price(0), "$0.00");
        assert_eq!(format_price(999), "$9.99");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(100), "$1.00");
    }

    #[test]
    fn exact_at_the_top_of_the_range() {
        assert_eq!(format_price(u64::MAX), "$184467440737095516.15");
    }

    #[test]
    fn orders_by_amount() {
        assert!(Price(999) < Price(1000));
        assert_eq!(Price::from(1234).major_units(), 12);
        assert_eq!(Price::from(1234).fraction(), 34);
    }
}
