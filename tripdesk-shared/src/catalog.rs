use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raised when a wire string does not name any known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Destination countries an opening can be listed in.
///
/// Declaration order matters: the inventory generator weights each variant
/// by the inverse of its position, so earlier countries are more common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "India")]
    India,
    #[serde(rename = "China")]
    China,
    #[serde(rename = "United States")]
    UnitedStates,
    #[serde(rename = "Indonesia")]
    Indonesia,
    #[serde(rename = "Pakistan")]
    Pakistan,
    #[serde(rename = "Nigeria")]
    Nigeria,
    #[serde(rename = "Brazil")]
    Brazil,
    #[serde(rename = "Bangladesh")]
    Bangladesh,
    #[serde(rename = "Russia")]
    Russia,
    #[serde(rename = "Mexico")]
    Mexico,
    #[serde(rename = "Japan")]
    Japan,
    #[serde(rename = "Philippines")]
    Philippines,
    #[serde(rename = "Ethiopia")]
    Ethiopia,
    #[serde(rename = "Democratic Republic of the Congo")]
    Congo,
    #[serde(rename = "Egypt")]
    Egypt,
    #[serde(rename = "Vietnam")]
    Vietnam,
    #[serde(rename = "Iran")]
    Iran,
    #[serde(rename = "Turkey")]
    Turkey,
    #[serde(rename = "Germany")]
    Germany,
    #[serde(rename = "France")]
    France,
    #[serde(rename = "United Kingdom")]
    UnitedKingdom,
    #[serde(rename = "Tanzania")]
    Tanzania,
    #[serde(rename = "Thailand")]
    Thailand,
    #[serde(rename = "South Africa")]
    SouthAfrica,
    #[serde(rename = "Italy")]
    Italy,
    #[serde(rename = "Colombia")]
    Colombia,
    #[serde(rename = "Kenya")]
    Kenya,
    #[serde(rename = "Myanmar")]
    Myanmar,
    #[serde(rename = "South Korea")]
    SouthKorea,
    #[serde(rename = "Sudan")]
    Sudan,
}

impl Country {
    pub const ALL: [Country; 30] = [
        Country::India,
        Country::China,
        Country::UnitedStates,
        Country::Indonesia,
        Country::Pakistan,
        Country::Nigeria,
        Country::Brazil,
        Country::Bangladesh,
        Country::Russia,
        Country::Mexico,
        Country::Japan,
        Country::Philippines,
        Country::Ethiopia,
        Country::Congo,
        Country::Egypt,
        Country::Vietnam,
        Country::Iran,
        Country::Turkey,
        Country::Germany,
        Country::France,
        Country::UnitedKingdom,
        Country::Tanzania,
        Country::Thailand,
        Country::SouthAfrica,
        Country::Italy,
        Country::Colombia,
        Country::Kenya,
        Country::Myanmar,
        Country::SouthKorea,
        Country::Sudan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::India => "India",
            Country::China => "China",
            Country::UnitedStates => "United States",
            Country::Indonesia => "Indonesia",
            Country::Pakistan => "Pakistan",
            Country::Nigeria => "Nigeria",
            Country::Brazil => "Brazil",
            Country::Bangladesh => "Bangladesh",
            Country::Russia => "Russia",
            Country::Mexico => "Mexico",
            Country::Japan => "Japan",
            Country::Philippines => "Philippines",
            Country::Ethiopia => "Ethiopia",
            Country::Congo => "Democratic Republic of the Congo",
            Country::Egypt => "Egypt",
            Country::Vietnam => "Vietnam",
            Country::Iran => "Iran",
            Country::Turkey => "Turkey",
            Country::Germany => "Germany",
            Country::France => "France",
            Country::UnitedKingdom => "United Kingdom",
            Country::Tanzania => "Tanzania",
            Country::Thailand => "Thailand",
            Country::SouthAfrica => "South Africa",
            Country::Italy => "Italy",
            Country::Colombia => "Colombia",
            Country::Kenya => "Kenya",
            Country::Myanmar => "Myanmar",
            Country::SouthKorea => "South Korea",
            Country::Sudan => "Sudan",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the display name.
impl FromStr for Country {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "country",
                value: s.to_string(),
            })
    }
}

/// Room category of an opening. Each class carries its own nightly rate band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LodgingClass {
    Studio,
    #[serde(rename = "one_bedroom")]
    OneBed,
    #[serde(rename = "two_bedroom")]
    TwoBed,
    #[serde(rename = "three_bedroom")]
    ThreeBed,
    Suite,
    Cabin,
    Luxury,
}

impl LodgingClass {
    pub const ALL: [LodgingClass; 7] = [
        LodgingClass::Studio,
        LodgingClass::OneBed,
        LodgingClass::TwoBed,
        LodgingClass::ThreeBed,
        LodgingClass::Suite,
        LodgingClass::Cabin,
        LodgingClass::Luxury,
    ];

    /// Nightly rate band as `[low, high)`.
    pub fn rate_range(&self) -> (u32, u32) {
        match self {
            LodgingClass::Studio => (200, 400),
            LodgingClass::OneBed => (300, 600),
            LodgingClass::TwoBed => (400, 800),
            LodgingClass::ThreeBed => (600, 1200),
            LodgingClass::Suite => (800, 1500),
            LodgingClass::Cabin => (1000, 1800),
            LodgingClass::Luxury => (1500, 3000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HotelCompany {
    #[serde(rename = "Jin Jiang International")]
    JinJiang,
    #[serde(rename = "Wyndham Hotels & Resorts")]
    Wyndham,
    #[serde(rename = "Marriott Interational")]
    Marriott,
    #[serde(rename = "Huazhu Hotels Group")]
    Huazhu,
    #[serde(rename = "Choice Hotels International")]
    Choice,
    #[serde(rename = "Hilton Worldwide")]
    Hilton,
    #[serde(rename = "IHG Hotels & Resorts")]
    Ihg,
    #[serde(rename = "BTG Home Inns")]
    Btg,
    #[serde(rename = "Accor")]
    Accor,
    #[serde(rename = "BWH Hotel Group")]
    Bwh,
}

impl HotelCompany {
    pub const ALL: [HotelCompany; 10] = [
        HotelCompany::JinJiang,
        HotelCompany::Wyndham,
        HotelCompany::Marriott,
        HotelCompany::Huazhu,
        HotelCompany::Choice,
        HotelCompany::Hilton,
        HotelCompany::Ihg,
        HotelCompany::Btg,
        HotelCompany::Accor,
        HotelCompany::Bwh,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_parses_display_name() {
        assert_eq!("Japan".parse::<Country>().unwrap(), Country::Japan);
        assert_eq!(
            "Democratic Republic of the Congo".parse::<Country>().unwrap(),
            Country::Congo
        );
    }

    #[test]
    fn test_country_rejects_unknown_and_wrong_case() {
        let err = "Atlantis".parse::<Country>().unwrap_err();
        assert_eq!(err.value, "Atlantis");
        assert!("japan".parse::<Country>().is_err());
    }

    #[test]
    fn test_country_serde_matches_display() {
        for country in Country::ALL {
            let json = serde_json::to_string(&country).unwrap();
            assert_eq!(json, format!("\"{}\"", country));
        }
    }

    #[test]
    fn test_lodging_class_wire_names() {
        let json = serde_json::to_string(&LodgingClass::TwoBed).unwrap();
        assert_eq!(json, "\"two_bedroom\"");
        let class: LodgingClass = serde_json::from_str("\"studio\"").unwrap();
        assert_eq!(class, LodgingClass::Studio);
    }

    #[test]
    fn test_rate_ranges_are_non_empty() {
        for class in LodgingClass::ALL {
            let (low, high) = class.rate_range();
            assert!(low < high);
        }
    }
}
