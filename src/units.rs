use crate::errors::CadError;

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const LUNAR_DISTANCE_KM: f64 = 384_400.0;
pub const AU_KM: f64 = 149_597_870.7;
pub const MILE_KM: f64 = 1.60934;
pub const GEOSYNC_KM: f64 = EARTH_RADIUS_KM + 35_786.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DistanceUnit {
    Kilometers,
    Miles,
    EarthRadii,
    Lunar,
    Au,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 5] = [
        Self::Kilometers,
        Self::Miles,
        Self::EarthRadii,
        Self::Lunar,
        Self::Au,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Miles => "miles",
            Self::EarthRadii => "Earth radii",
            Self::Lunar => "lunar distances",
            Self::Au => "AU",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Miles => "miles",
            Self::EarthRadii => "earth_radii",
            Self::Lunar => "lunar",
            Self::Au => "au",
        }
    }

    pub fn km_per_unit(&self) -> f64 {
        match self {
            Self::Kilometers => 1.0,
            Self::Miles => MILE_KM,
            Self::EarthRadii => EARTH_RADIUS_KM,
            Self::Lunar => LUNAR_DISTANCE_KM,
            Self::Au => AU_KM,
        }
    }

    pub fn parse(tag: &str) -> Result<Self, CadError> {
        Self::ALL
            .iter()
            .copied()
            .find(|u| u.tag() == tag)
            .ok_or_else(|| CadError::InvalidUnit(tag.to_string()))
    }
}

pub fn convert(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
    value * from.km_per_unit() / to.km_per_unit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_unit_pair() {
        for from in DistanceUnit::ALL {
            for to in DistanceUnit::ALL {
                let there = convert(3.7, from, to);
                let back = convert(there, to, from);
                assert!((back - 3.7).abs() < 1e-9, "{:?} -> {:?} -> {}", from, to, back);
            }
        }
    }

    #[test]
    fn converts_known_values() {
        let km = convert(1.0, DistanceUnit::Au, DistanceUnit::Kilometers);
        assert!((km - 149_597_870.7).abs() < 1e-3);

        let miles = convert(MILE_KM, DistanceUnit::Kilometers, DistanceUnit::Miles);
        assert!((miles - 1.0).abs() < 1e-9);

        let radii = convert(1.0, DistanceUnit::Lunar, DistanceUnit::EarthRadii);
        assert!((radii - LUNAR_DISTANCE_KM / EARTH_RADIUS_KM).abs() < 1e-9);
    }

    #[test]
    fn parses_every_tag() {
        for unit in DistanceUnit::ALL {
            assert_eq!(DistanceUnit::parse(unit.tag()).unwrap(), unit);
        }
    }

    #[test]
    fn rejects_unknown_tags() {
        assert!(matches!(
            DistanceUnit::parse("parsecs"),
            Err(CadError::InvalidUnit(_))
        ));
        assert!(matches!(DistanceUnit::parse(""), Err(CadError::InvalidUnit(_))));
        assert!(matches!(
            DistanceUnit::parse("KM"),
            Err(CadError::InvalidUnit(_))
        ));
    }
}
