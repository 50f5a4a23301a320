// src/sweep/quantity.rs
use crate::error::GreeksError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output quantity that can be plotted against the underlying price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Quantity {
    Delta,
    Gamma,
    Theta,
    Vega,
    Rho,
    Payoff,
}

impl Quantity {
    /// Canonical presentation order, also the default selection
    pub const ALL: [Quantity; 6] = [
        Quantity::Delta,
        Quantity::Gamma,
        Quantity::Theta,
        Quantity::Vega,
        Quantity::Rho,
        Quantity::Payoff,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Quantity::Delta => "Delta",
            Quantity::Gamma => "Gamma",
            Quantity::Theta => "Theta",
            Quantity::Vega => "Vega",
            Quantity::Rho => "Rho",
            Quantity::Payoff => "Payoff",
        }
    }
}

impl FromStr for Quantity {
    type Err = GreeksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Quantity::ALL
            .iter()
            .copied()
            .find(|q| q.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GreeksError::UnknownQuantity {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for Quantity {
    type Error = GreeksError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Quantity> for String {
    fn from(value: Quantity) -> Self {
        value.name().to_string()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!("delta".parse::<Quantity>().unwrap(), Quantity::Delta);
        assert_eq!("PAYOFF".parse::<Quantity>().unwrap(), Quantity::Payoff);
        assert!(matches!(
            "vanna".parse::<Quantity>(),
            Err(GreeksError::UnknownQuantity { .. })
        ));
    }

    #[test]
    fn test_names_round_trip_through_display() {
        for q in Quantity::ALL {
            assert_eq!(q.to_string().parse::<Quantity>().unwrap(), q);
        }
    }
}
