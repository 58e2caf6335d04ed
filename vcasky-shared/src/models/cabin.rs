use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cabin tiers offered by the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub const ALL: [CabinClass; 4] = [
        CabinClass::Economy,
        CabinClass::PremiumEconomy,
        CabinClass::Business,
        CabinClass::First,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::PremiumEconomy => "premium-economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Econômica",
            CabinClass::PremiumEconomy => "Econômica Premium",
            CabinClass::Business => "Executiva",
            CabinClass::First => "Primeira Classe",
        }
    }

    /// Amount added to a synthesized base fare.
    pub fn surcharge(&self) -> f64 {
        match self {
            CabinClass::Economy => 0.0,
            CabinClass::PremiumEconomy => 300.0,
            CabinClass::Business => 800.0,
            CabinClass::First => 1500.0,
        }
    }

    /// Numeric `travel_class` code understood by the flight-data provider.
    pub fn provider_code(&self) -> u8 {
        match self {
            CabinClass::Economy => 1,
            CabinClass::PremiumEconomy => 2,
            CabinClass::Business => 3,
            CabinClass::First => 4,
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CabinClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CabinClass::ALL
            .iter()
            .copied()
            .find(|class| class.key() == s)
            .ok_or_else(|| format!("unknown cabin class: {}", s))
    }
}

/// Cabin class as attached to a flight: tier, display name and surcharge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightClass {
    #[serde(rename = "type")]
    pub kind: CabinClass,
    pub name: String,
    pub price: f64,
}

impl From<CabinClass> for FlightClass {
    fn from(kind: CabinClass) -> Self {
        Self {
            kind,
            name: kind.display_name().to_string(),
            price: kind.surcharge(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_from_str() {
        for class in CabinClass::ALL {
            assert_eq!(class.key().parse::<CabinClass>().unwrap(), class);
        }
        assert!("coach".parse::<CabinClass>().is_err());
    }

    #[test]
    fn test_economy_has_no_surcharge() {
        assert_eq!(CabinClass::Economy.surcharge(), 0.0);
        assert!(CabinClass::ALL[1..].iter().all(|c| c.surcharge() > 0.0));
    }

    #[test]
    fn test_flight_class_serializes_type_key() {
        let class = FlightClass::from(CabinClass::PremiumEconomy);
        let json = serde_json::to_value(&class).unwrap();
        assert_eq!(json["type"], "premium-economy");
        assert_eq!(json["name"], "Econômica Premium");
        assert_eq!(json["price"], 300.0);
    }
}
