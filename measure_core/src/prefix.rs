//! # Metric Prefixes
//!
//! The twenty classic SI prefixes, from yotta (10^24) to yocto (10^-24).
//! A prefix scales a base unit by a power of ten and prepends its symbol:
//! `Prefix::Centi` applied to the meter gives `cm` with a factor of 10^-2.
//!
//! ```rust
//! use measure_core::prefix::Prefix;
//!
//! assert_eq!(Prefix::Milli.symbol(), "m");
//! assert_eq!(Prefix::Milli.exponent(), -3);
//! assert_eq!(Prefix::Kilo.factor(), 1000.0);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prefix {
    Yotta,
    Zetta,
    Exa,
    Peta,
    Tera,
    Giga,
    Mega,
    Kilo,
    Hecto,
    Deca,
    Deci,
    Centi,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
    Zepto,
    Yocto,
}

impl Prefix {
    pub const ALL: [Prefix; 20] = [
        Prefix::Yotta,
        Prefix::Zetta,
        Prefix::Exa,
        Prefix::Peta,
        Prefix::Tera,
        Prefix::Giga,
        Prefix::Mega,
        Prefix::Kilo,
        Prefix::Hecto,
        Prefix::Deca,
        Prefix::Deci,
        Prefix::Centi,
        Prefix::Milli,
        Prefix::Micro,
        Prefix::Nano,
        Prefix::Pico,
        Prefix::Femto,
        Prefix::Atto,
        Prefix::Zepto,
        Prefix::Yocto,
    ];

    /// Power of ten this prefix stands for
    pub const fn exponent(self) -> i32 {
        match self {
            Prefix::Yotta => 24,
            Prefix::Zetta => 21,
            Prefix::Exa => 18,
            Prefix::Peta => 15,
            Prefix::Tera => 12,
            Prefix::Giga => 9,
            Prefix::Mega => 6,
            Prefix::Kilo => 3,
            Prefix::Hecto => 2,
            Prefix::Deca => 1,
            Prefix::Deci => -1,
            Prefix::Centi => -2,
            Prefix::Milli => -3,
            Prefix::Micro => -6,
            Prefix::Nano => -9,
            Prefix::Pico => -12,
            Prefix::Femto => -15,
            Prefix::Atto => -18,
            Prefix::Zepto => -21,
            Prefix::Yocto => -24,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Prefix::Yotta => "Y",
            Prefix::Zetta => "Z",
            Prefix::Exa => "E",
            Prefix::Peta => "P",
            Prefix::Tera => "T",
            Prefix::Giga => "G",
            Prefix::Mega => "M",
            Prefix::Kilo => "k",
            Prefix::Hecto => "h",
            Prefix::Deca => "da",
            Prefix::Deci => "d",
            Prefix::Centi => "c",
            Prefix::Milli => "m",
            Prefix::Micro => "µ",
            Prefix::Nano => "n",
            Prefix::Pico => "p",
            Prefix::Femto => "f",
            Prefix::Atto => "a",
            Prefix::Zepto => "z",
            Prefix::Yocto => "y",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Prefix::Yotta => "yotta",
            Prefix::Zetta => "zetta",
            Prefix::Exa => "exa",
            Prefix::Peta => "peta",
            Prefix::Tera => "tera",
            Prefix::Giga => "giga",
            Prefix::Mega => "mega",
            Prefix::Kilo => "kilo",
            Prefix::Hecto => "hecto",
            Prefix::Deca => "deca",
            Prefix::Deci => "deci",
            Prefix::Centi => "centi",
            Prefix::Milli => "milli",
            Prefix::Micro => "micro",
            Prefix::Nano => "nano",
            Prefix::Pico => "pico",
            Prefix::Femto => "femto",
            Prefix::Atto => "atto",
            Prefix::Zepto => "zepto",
            Prefix::Yocto => "yocto",
        }
    }

    /// Scale factor, `10^exponent`
    pub fn factor(self) -> f64 {
        10f64.powi(self.exponent())
    }

    /// Scale split into an exact (multiplier, divisor) pair.
    ///
    /// Negative exponents become a divisor so that e.g. centi is `1 / 100`
    /// rather than the inexact binary fraction `0.01`.
    pub fn scale(self) -> (f64, f64) {
        let exponent = self.exponent();
        if exponent >= 0 {
            (10f64.powi(exponent), 1.0)
        } else {
            (1.0, 10f64.powi(-exponent))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_table_is_ordered() {
        for pair in Prefix::ALL.windows(2) {
            assert!(pair[0].exponent() > pair[1].exponent());
        }
    }

    #[test]
    fn test_scale_pairs() {
        assert_eq!(Prefix::Kilo.scale(), (1000.0, 1.0));
        assert_eq!(Prefix::Centi.scale(), (1.0, 100.0));
        assert_eq!(Prefix::Deca.symbol(), "da");
    }

    #[test]
    fn test_factor() {
        assert_eq!(Prefix::Hecto.factor(), 100.0);
        assert_eq!(Prefix::Mega.factor(), 1.0e6);
    }
}
