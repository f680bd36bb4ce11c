pub mod diagnosis;
pub mod error;
pub mod fields;
pub mod vocab;

pub use diagnosis::{Diagnosis, LEVEL_FIELDS, MAX_LEVELS, accept_terminal_values, is_melanoma};
pub use error::{ModelError, Result};
pub use fields::{
    FIELD_REGISTRY, Facet, FieldCategory, FieldDescriptor, FieldKind, PropertyType, SearchConfig,
    field, is_known_field,
};
pub use vocab::{
    AnatomSiteGeneral, AnatomSiteSpecial, BenignMalignant, ColorTint, DermoscopicType,
    DiagnosisConfirmType, FitzpatrickSkinType, ImageManipulation, ImageType, MelClass,
    MelMitoticIndex, MelType, NevusType, Sex, TbpTileType, Vocabulary,
};
