//! Closed vocabularies for the categorical metadata fields.
//!
//! Every categorical field accepts exactly the values listed here. Values are
//! matched verbatim; fields documented as case-normalized are lowercased by the
//! validator before they reach [`Vocabulary::parse`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ModelError;

/// A closed set of permitted string values for one metadata field.
pub trait Vocabulary: Sized + Copy + 'static {
    /// Name of the metadata field this vocabulary constrains.
    const FIELD: &'static str;

    /// Every member, in declaration order.
    fn all() -> &'static [Self];

    /// Canonical string value.
    fn as_str(&self) -> &'static str;

    /// Exact-match lookup of a canonical value.
    fn parse(value: &str) -> Option<Self>;
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            pub const fn all() -> &'static [Self] {
                &[ $( Self::$variant, )+ ]
            }

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $value, )+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $( $value => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl Vocabulary for $name {
            const FIELD: &'static str = $field;

            fn all() -> &'static [Self] {
                <$name>::all()
            }

            fn as_str(&self) -> &'static str {
                <$name>::as_str(self)
            }

            fn parse(value: &str) -> Option<Self> {
                <$name>::parse(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| ModelError::UnknownTerm {
                    field: $field,
                    value: s.to_string(),
                })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                value.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

vocabulary! {
    /// Patient sex. The `m`/`f` shorthands are expanded by the normalizer.
    Sex("sex") {
        Male => "male",
        Female => "female",
    }
}

vocabulary! {
    /// General anatomic site of the lesion.
    AnatomSiteGeneral("anatom_site_general") {
        HeadNeck => "head/neck",
        UpperExtremity => "upper extremity",
        LowerExtremity => "lower extremity",
        AnteriorTorso => "anterior torso",
        PosteriorTorso => "posterior torso",
        PalmsSoles => "palms/soles",
        LateralTorso => "lateral torso",
        OralGenital => "oral/genital",
    }
}

vocabulary! {
    /// Special anatomic site, a refinement of [`AnatomSiteGeneral`].
    AnatomSiteSpecial("anatom_site_special") {
        AcralNos => "acral NOS",
        NailNos => "nail NOS",
        Fingernail => "fingernail",
        Toenail => "toenail",
        AcralPalmsOrSoles => "acral palms or soles",
        OralOrGenital => "oral or genital",
    }
}

impl AnatomSiteSpecial {
    /// General sites a special site may be paired with.
    ///
    /// `None` means the special site places no restriction on the general site.
    pub const fn compatible_general_sites(&self) -> Option<&'static [AnatomSiteGeneral]> {
        use AnatomSiteGeneral as G;

        const EXTREMITIES_AND_PALMS_SOLES: &[AnatomSiteGeneral] =
            &[G::UpperExtremity, G::LowerExtremity, G::PalmsSoles];

        match self {
            Self::AcralNos | Self::NailNos | Self::AcralPalmsOrSoles => {
                Some(EXTREMITIES_AND_PALMS_SOLES)
            }
            Self::Fingernail => Some(&[G::UpperExtremity, G::PalmsSoles]),
            Self::Toenail => Some(&[G::LowerExtremity, G::PalmsSoles]),
            Self::OralOrGenital => Some(&[
                G::HeadNeck,
                G::OralGenital,
                G::LowerExtremity,
                G::AnteriorTorso,
                G::PosteriorTorso,
            ]),
        }
    }

    pub fn is_compatible_with(&self, general: AnatomSiteGeneral) -> bool {
        self.compatible_general_sites()
            .is_none_or(|sites| sites.contains(&general))
    }
}

vocabulary! {
    BenignMalignant("benign_malignant") {
        Benign => "benign",
        Malignant => "malignant",
        Indeterminate => "indeterminate",
        IndeterminateBenign => "indeterminate/benign",
        IndeterminateMalignant => "indeterminate/malignant",
    }
}

impl BenignMalignant {
    /// True for values asserting (or leaning towards) malignancy.
    pub const fn leans_malignant(&self) -> bool {
        matches!(self, Self::Malignant | Self::IndeterminateMalignant)
    }
}

vocabulary! {
    /// How the diagnosis was established.
    DiagnosisConfirmType("diagnosis_confirm_type") {
        Histopathology => "histopathology",
        SerialImagingShowingNoChange => "serial imaging showing no change",
        SingleImageExpertConsensus => "single image expert consensus",
        ConfocalMicroscopyWithConsensusDermoscopy => "confocal microscopy with consensus dermoscopy",
    }
}

vocabulary! {
    FitzpatrickSkinType("fitzpatrick_skin_type") {
        I => "I",
        II => "II",
        III => "III",
        IV => "IV",
        V => "V",
        VI => "VI",
    }
}

vocabulary! {
    ImageManipulation("image_manipulation") {
        InstrumentOnly => "instrument only",
        Altered => "altered",
    }
}

vocabulary! {
    /// Acquisition modality of the image.
    ImageType("image_type") {
        Dermoscopic => "dermoscopic",
        ClinicalCloseUp => "clinical: close-up",
        ClinicalOverview => "clinical: overview",
        TbpTileCloseUp => "TBP tile: close-up",
        TbpTileOverview => "TBP tile: overview",
        RcmMacroscopic => "RCM: macroscopic",
        RcmTile => "RCM: tile",
        RcmMosaic => "RCM: mosaic",
    }
}

impl ImageType {
    pub const fn is_tbp_tile(&self) -> bool {
        matches!(self, Self::TbpTileCloseUp | Self::TbpTileOverview)
    }

    /// Reflectance confocal microscopy image types.
    pub const fn is_rcm(&self) -> bool {
        matches!(self, Self::RcmMacroscopic | Self::RcmTile | Self::RcmMosaic)
    }
}

vocabulary! {
    DermoscopicType("dermoscopic_type") {
        ContactPolarized => "contact polarized",
        ContactNonPolarized => "contact non-polarized",
        NonContactPolarized => "non-contact polarized",
    }
}

vocabulary! {
    /// Total body photography tile subtype.
    TbpTileType("tbp_tile_type") {
        TwoD => "2D",
        ThreeDWhite => "3D: white",
        ThreeDXp => "3D: XP",
    }
}

vocabulary! {
    MelClass("mel_class") {
        MelanomaInSitu => "melanoma in situ",
        InvasiveMelanoma => "invasive melanoma",
        RecurrentPersistentInSitu => "recurrent/persistent melanoma, in situ",
        RecurrentPersistentInvasive => "recurrent/persistent melanoma, invasive",
        MelanomaNos => "melanoma NOS",
    }
}

vocabulary! {
    /// Mitotic index per square millimeter.
    MelMitoticIndex("mel_mitotic_index") {
        Zero => "0/mm^2",
        LessThanOne => "<1/mm^2",
        One => "1/mm^2",
        Two => "2/mm^2",
        Three => "3/mm^2",
        Four => "4/mm^2",
        GreaterThanFour => ">4/mm^2",
    }
}

vocabulary! {
    MelType("mel_type") {
        SuperficialSpreading => "superficial spreading melanoma",
        Nodular => "nodular melanoma",
        LentigoMaligna => "lentigo maligna melanoma",
        AcralLentiginous => "acral lentiginous melanoma",
        MelanomaNos => "melanoma NOS",
    }
}

vocabulary! {
    NevusType("nevus_type") {
        Blue => "blue",
        Combined => "combined",
        NevusNos => "nevus NOS",
        DeepPenetrating => "deep penetrating",
        Halo => "halo",
        PersistentRecurrent => "persistent/recurrent",
        PigmentedSpindleCellOfReed => "pigmented spindle cell of reed",
        PlexiformSpindleCell => "plexiform spindle cell",
        SpecialSite => "special site",
        Spitz => "spitz",
    }
}

vocabulary! {
    ColorTint("color_tint") {
        Blue => "blue",
        Pink => "pink",
        NoTint => "none",
    }
}
