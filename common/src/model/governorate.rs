use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Governorates offered by the registration form's selector.
///
/// The Arabic label is both what the user sees and what gets stored in the
/// `governorate` column, so serde goes through `label()` / `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Governorate {
    #[default]
    Cairo,
    Alexandria,
    Giza,
    Sharqia,
    Dakahlia,
    Qalyubia,
    Monufia,
    Gharbia,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown governorate: {0}")]
pub struct UnknownGovernorate(pub String);

impl Governorate {
    /// Display order of the `<select>` options. The first one is the default.
    pub const ALL: [Governorate; 8] = [
        Governorate::Cairo,
        Governorate::Alexandria,
        Governorate::Giza,
        Governorate::Sharqia,
        Governorate::Dakahlia,
        Governorate::Qalyubia,
        Governorate::Monufia,
        Governorate::Gharbia,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Governorate::Cairo => "القاهرة",
            Governorate::Alexandria => "الإسكندرية",
            Governorate::Giza => "الجيزة",
            Governorate::Sharqia => "الشرقية",
            Governorate::Dakahlia => "الدقهلية",
            Governorate::Qalyubia => "القليوبية",
            Governorate::Monufia => "المنوفية",
            Governorate::Gharbia => "الغربية",
        }
    }
}

impl fmt::Display for Governorate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Governorate {
    type Err = UnknownGovernorate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Governorate::ALL
            .into_iter()
            .find(|g| g.label() == s)
            .ok_or_else(|| UnknownGovernorate(s.to_string()))
    }
}

impl Serialize for Governorate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Governorate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_first_option() {
        assert_eq!(Governorate::default(), Governorate::ALL[0]);
        assert_eq!(Governorate::default().label(), "القاهرة");
    }

    #[test]
    fn parses_every_label() {
        for g in Governorate::ALL {
            assert_eq!(g.label().parse::<Governorate>(), Ok(g));
        }
    }

    #[test]
    fn rejects_unlisted_label() {
        let err = "أسوان".parse::<Governorate>().unwrap_err();
        assert_eq!(err, UnknownGovernorate("أسوان".to_string()));
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Governorate::Giza).unwrap();
        assert_eq!(json, "\"الجيزة\"");
        let back: Governorate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Governorate::Giza);
    }
}
