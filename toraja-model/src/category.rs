//! Closed category enumerations and their presentation mapping.
//!
//! Every category maps to an [`Icon`] and a label through an exhaustive
//! `match`, so adding a variant fails to compile until it is rendered.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ModelError;
use crate::locale::Locale;

/// Icon names understood by the front end's icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Icon {
    Mountain,
    Landmark,
    Castle,
    Compass,
    Church,
    House,
    Flame,
    PartyPopper,
    Music,
    Sparkles,
    Utensils,
    Coffee,
    Cookie,
    Hotel,
    Home,
    Palmtree,
    BedDouble,
}

impl Icon {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Icon::Mountain => "mountain",
            Icon::Landmark => "landmark",
            Icon::Castle => "castle",
            Icon::Compass => "compass",
            Icon::Church => "church",
            Icon::House => "house",
            Icon::Flame => "flame",
            Icon::PartyPopper => "party-popper",
            Icon::Music => "music",
            Icon::Sparkles => "sparkles",
            Icon::Utensils => "utensils",
            Icon::Coffee => "coffee",
            Icon::Cookie => "cookie",
            Icon::Hotel => "hotel",
            Icon::Home => "home",
            Icon::Palmtree => "palmtree",
            Icon::BedDouble => "bed-double",
        }
    }
}

/// Shared presentation surface for every category enum.
pub trait Category: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;
    fn icon(&self) -> Icon;
    fn label(&self, locale: Locale) -> &'static str;
}

fn parse_category<C: Category>(raw: &str) -> Result<C, ModelError> {
    let needle = raw.trim().to_ascii_lowercase().replace(['_', ' '], "-");
    C::ALL
        .iter()
        .copied()
        .find(|c| c.as_str() == needle)
        .ok_or_else(|| ModelError::UnknownCategory(raw.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DestinationCategory {
    Nature,
    Culture,
    Heritage,
    Adventure,
    Religious,
    Village,
}

impl Category for DestinationCategory {
    const ALL: &'static [Self] = &[
        Self::Nature,
        Self::Culture,
        Self::Heritage,
        Self::Adventure,
        Self::Religious,
        Self::Village,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::Culture => "culture",
            Self::Heritage => "heritage",
            Self::Adventure => "adventure",
            Self::Religious => "religious",
            Self::Village => "village",
        }
    }

    fn icon(&self) -> Icon {
        match self {
            Self::Nature => Icon::Mountain,
            Self::Culture => Icon::Landmark,
            Self::Heritage => Icon::Castle,
            Self::Adventure => Icon::Compass,
            Self::Religious => Icon::Church,
            Self::Village => Icon::House,
        }
    }

    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Nature, Locale::Id) => "Alam",
            (Self::Nature, Locale::En) => "Nature",
            (Self::Culture, Locale::Id) => "Budaya",
            (Self::Culture, Locale::En) => "Culture",
            (Self::Heritage, Locale::Id) => "Warisan Sejarah",
            (Self::Heritage, Locale::En) => "Heritage",
            (Self::Adventure, Locale::Id) => "Petualangan",
            (Self::Adventure, Locale::En) => "Adventure",
            (Self::Religious, Locale::Id) => "Religi",
            (Self::Religious, Locale::En) => "Religious",
            (Self::Village, Locale::Id) => "Desa Wisata",
            (Self::Village, Locale::En) => "Tourism Village",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EventCategory {
    /// Funeral ceremonies.
    RambuSolo,
    /// Thanksgiving and house-blessing ceremonies.
    RambuTuka,
    Festival,
    Ceremony,
}

impl Category for EventCategory {
    const ALL: &'static [Self] = &[
        Self::RambuSolo,
        Self::RambuTuka,
        Self::Festival,
        Self::Ceremony,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::RambuSolo => "rambu-solo",
            Self::RambuTuka => "rambu-tuka",
            Self::Festival => "festival",
            Self::Ceremony => "ceremony",
        }
    }

    fn icon(&self) -> Icon {
        match self {
            Self::RambuSolo => Icon::Flame,
            Self::RambuTuka => Icon::PartyPopper,
            Self::Festival => Icon::Music,
            Self::Ceremony => Icon::Sparkles,
        }
    }

    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::RambuSolo, _) => "Rambu Solo'",
            (Self::RambuTuka, _) => "Rambu Tuka'",
            (Self::Festival, Locale::Id) => "Festival",
            (Self::Festival, Locale::En) => "Festival",
            (Self::Ceremony, Locale::Id) => "Upacara Adat",
            (Self::Ceremony, Locale::En) => "Traditional Ceremony",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CulinaryCategory {
    Food,
    Drink,
    Snack,
}

impl Category for CulinaryCategory {
    const ALL: &'static [Self] = &[Self::Food, Self::Drink, Self::Snack];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Drink => "drink",
            Self::Snack => "snack",
        }
    }

    fn icon(&self) -> Icon {
        match self {
            Self::Food => Icon::Utensils,
            Self::Drink => Icon::Coffee,
            Self::Snack => Icon::Cookie,
        }
    }

    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Food, Locale::Id) => "Makanan",
            (Self::Food, Locale::En) => "Food",
            (Self::Drink, Locale::Id) => "Minuman",
            (Self::Drink, Locale::En) => "Drink",
            (Self::Snack, Locale::Id) => "Camilan",
            (Self::Snack, Locale::En) => "Snack",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AccommodationKind {
    Hotel,
    Homestay,
    Resort,
    Guesthouse,
}

impl Category for AccommodationKind {
    const ALL: &'static [Self] =
        &[Self::Hotel, Self::Homestay, Self::Resort, Self::Guesthouse];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Homestay => "homestay",
            Self::Resort => "resort",
            Self::Guesthouse => "guesthouse",
        }
    }

    fn icon(&self) -> Icon {
        match self {
            Self::Hotel => Icon::Hotel,
            Self::Homestay => Icon::Home,
            Self::Resort => Icon::Palmtree,
            Self::Guesthouse => Icon::BedDouble,
        }
    }

    fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Hotel, _) => "Hotel",
            (Self::Homestay, _) => "Homestay",
            (Self::Resort, _) => "Resort",
            (Self::Guesthouse, Locale::Id) => "Penginapan",
            (Self::Guesthouse, Locale::En) => "Guesthouse",
        }
    }
}

macro_rules! category_str_impls {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(Category::as_str(self))
                }
            }

            impl FromStr for $ty {
                type Err = ModelError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_category(s)
                }
            }
        )*
    };
}

category_str_impls!(
    DestinationCategory,
    EventCategory,
    CulinaryCategory,
    AccommodationKind,
);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_round_trips<C>()
    where
        C: Category + FromStr<Err = ModelError> + PartialEq + fmt::Debug,
    {
        for c in C::ALL {
            assert_eq!(c.as_str().parse::<C>().unwrap(), *c);
            assert!(!c.label(Locale::Id).is_empty());
            assert!(!c.label(Locale::En).is_empty());
        }
    }

    #[test]
    fn every_category_parses_and_has_labels() {
        assert_round_trips::<DestinationCategory>();
        assert_round_trips::<EventCategory>();
        assert_round_trips::<CulinaryCategory>();
        assert_round_trips::<AccommodationKind>();
    }

    #[test]
    fn destination_icons_are_distinct() {
        let icons: HashSet<Icon> = DestinationCategory::ALL
            .iter()
            .map(|c| c.icon())
            .collect();
        assert_eq!(icons.len(), DestinationCategory::ALL.len());
    }

    #[test]
    fn parse_accepts_loose_spelling() {
        assert_eq!(
            "Rambu_Solo".parse::<EventCategory>().unwrap(),
            EventCategory::RambuSolo
        );
        assert_eq!(
            "rambu solo".parse::<EventCategory>().unwrap(),
            EventCategory::RambuSolo
        );
        assert!("volcano".parse::<DestinationCategory>().is_err());
    }

    #[test]
    fn icon_names_are_kebab_case() {
        assert_eq!(EventCategory::RambuTuka.icon().as_str(), "party-popper");
        assert_eq!(AccommodationKind::Guesthouse.icon().as_str(), "bed-double");
    }
}
