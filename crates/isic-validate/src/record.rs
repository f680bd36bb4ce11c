//! The metadata row.

use std::collections::BTreeSet;

use isic_model::diagnosis::{LEVEL_FIELDS, Levels, MAX_LEVELS};
use isic_model::{
    AnatomSiteGeneral, AnatomSiteSpecial, BenignMalignant, ColorTint, DermoscopicType, Diagnosis,
    DiagnosisConfirmType, FitzpatrickSkinType, ImageManipulation, ImageType, MelClass,
    MelMitoticIndex, MelType, NevusType, Sex, TbpTileType,
};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::issue::{Issue, ValidationError};
use crate::normalizers::{NORMALIZERS, prepare};
use crate::options::ValidationMode;
use crate::rules::{RuleContext, run_all};

/// One validated metadata record.
///
/// Rows only exist in canonical form: [`MetadataRow::validate`] either
/// returns a row whose every field passed normalization and every
/// cross-field rule, or the complete list of issues. Rows are immutable;
/// to change one, edit its [`dump`](MetadataRow::dump) and validate again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataRow {
    pub(crate) age: Option<i64>,
    pub(crate) sex: Option<Sex>,
    pub(crate) anatom_site_general: Option<AnatomSiteGeneral>,
    pub(crate) anatom_site_special: Option<AnatomSiteSpecial>,
    pub(crate) benign_malignant: Option<BenignMalignant>,
    pub(crate) diagnosis: Option<Diagnosis>,
    pub(crate) diagnosis_confirm_type: Option<DiagnosisConfirmType>,
    pub(crate) personal_hx_mm: Option<bool>,
    pub(crate) family_hx_mm: Option<bool>,
    pub(crate) clin_size_long_diam_mm: Option<f64>,
    pub(crate) fitzpatrick_skin_type: Option<FitzpatrickSkinType>,
    pub(crate) melanocytic: Option<bool>,
    pub(crate) concomitant_biopsy: Option<bool>,

    pub(crate) mel_class: Option<MelClass>,
    pub(crate) mel_mitotic_index: Option<MelMitoticIndex>,
    pub(crate) mel_thick_mm: Option<f64>,
    pub(crate) mel_type: Option<MelType>,
    pub(crate) mel_ulcer: Option<bool>,

    pub(crate) patient_id: Option<String>,
    pub(crate) lesion_id: Option<String>,
    pub(crate) acquisition_day: Option<i64>,

    pub(crate) image_manipulation: Option<ImageManipulation>,
    pub(crate) nevus_type: Option<NevusType>,
    pub(crate) image_type: Option<ImageType>,
    pub(crate) dermoscopic_type: Option<DermoscopicType>,
    pub(crate) tbp_tile_type: Option<TbpTileType>,
    pub(crate) rcm_case_id: Option<String>,

    // Accepted but not documented for contributors.
    pub(crate) marker_pen: Option<bool>,
    pub(crate) hairy: Option<bool>,
    pub(crate) blurry: Option<bool>,
    pub(crate) color_tint: Option<ColorTint>,

    pub(crate) unstructured: Map<String, Value>,
}

macro_rules! copy_getters {
    ($($field:ident: $ty:ty),+ $(,)?) => {
        $(
            pub fn $field(&self) -> Option<$ty> {
                self.$field
            }
        )+
    };
}

macro_rules! str_getters {
    ($($field:ident),+ $(,)?) => {
        $(
            pub fn $field(&self) -> Option<&str> {
                self.$field.as_deref()
            }
        )+
    };
}

impl MetadataRow {
    /// Validate a raw record with every row-level rule enabled.
    pub fn validate(raw: &Map<String, Value>) -> Result<Self, ValidationError> {
        Self::validate_with_mode(raw, ValidationMode::Strict)
    }

    /// Validate a raw record.
    ///
    /// Field values are cleaned and normalized first, collecting an issue
    /// for every field that fails. Cross-field rules then run against the
    /// normalized values, skipping any rule that reads a failed field.
    pub fn validate_with_mode(
        raw: &Map<String, Value>,
        mode: ValidationMode,
    ) -> Result<Self, ValidationError> {
        let prepared = prepare(raw);
        let mut row = MetadataRow {
            unstructured: prepared.unstructured,
            ..MetadataRow::default()
        };

        let mut issues = Vec::new();
        let mut failed = BTreeSet::new();
        for normalizer in NORMALIZERS {
            let Some(value) = prepared.fields.get(normalizer.name) else {
                continue;
            };
            if let Err(reason) = (normalizer.apply)(&mut row, value) {
                failed.insert(normalizer.name);
                issues.push(Issue::from_normalization(normalizer.name, reason));
            }
        }

        let context = RuleContext::new(mode, &failed);
        issues.extend(run_all(&row, &context));

        if issues.is_empty() {
            Ok(row)
        } else {
            debug!(issue_count = issues.len(), "metadata row rejected");
            Err(ValidationError::new(issues))
        }
    }

    /// Canonical output mapping.
    ///
    /// Absent fields are omitted. The diagnosis appears only as the five
    /// level fields, and `unstructured` only when it holds something.
    pub fn dump(&self) -> Map<String, Value> {
        let mut out = Map::new();
        put(&mut out, "age", self.age);
        put(&mut out, "sex", self.sex.map(|v| v.as_str()));
        put(
            &mut out,
            "anatom_site_general",
            self.anatom_site_general.map(|v| v.as_str()),
        );
        put(
            &mut out,
            "anatom_site_special",
            self.anatom_site_special.map(|v| v.as_str()),
        );
        put(
            &mut out,
            "benign_malignant",
            self.benign_malignant.map(|v| v.as_str()),
        );
        if self.diagnosis.is_some() {
            for (field, level) in LEVEL_FIELDS.iter().zip(self.diagnosis_levels()) {
                out.insert((*field).to_string(), level.map_or(Value::Null, Value::from));
            }
        }
        put(
            &mut out,
            "diagnosis_confirm_type",
            self.diagnosis_confirm_type.map(|v| v.as_str()),
        );
        put(&mut out, "personal_hx_mm", self.personal_hx_mm);
        put(&mut out, "family_hx_mm", self.family_hx_mm);
        put(&mut out, "clin_size_long_diam_mm", self.clin_size_long_diam_mm);
        put(
            &mut out,
            "fitzpatrick_skin_type",
            self.fitzpatrick_skin_type.map(|v| v.as_str()),
        );
        put(&mut out, "melanocytic", self.melanocytic);
        put(&mut out, "concomitant_biopsy", self.concomitant_biopsy);
        put(&mut out, "mel_class", self.mel_class.map(|v| v.as_str()));
        put(
            &mut out,
            "mel_mitotic_index",
            self.mel_mitotic_index.map(|v| v.as_str()),
        );
        put(&mut out, "mel_thick_mm", self.mel_thick_mm);
        put(&mut out, "mel_type", self.mel_type.map(|v| v.as_str()));
        put(&mut out, "mel_ulcer", self.mel_ulcer);
        put(&mut out, "patient_id", self.patient_id.clone());
        put(&mut out, "lesion_id", self.lesion_id.clone());
        put(&mut out, "acquisition_day", self.acquisition_day);
        put(
            &mut out,
            "image_manipulation",
            self.image_manipulation.map(|v| v.as_str()),
        );
        put(&mut out, "nevus_type", self.nevus_type.map(|v| v.as_str()));
        put(&mut out, "image_type", self.image_type.map(|v| v.as_str()));
        put(
            &mut out,
            "dermoscopic_type",
            self.dermoscopic_type.map(|v| v.as_str()),
        );
        put(&mut out, "tbp_tile_type", self.tbp_tile_type.map(|v| v.as_str()));
        put(&mut out, "rcm_case_id", self.rcm_case_id.clone());
        put(&mut out, "marker_pen", self.marker_pen);
        put(&mut out, "hairy", self.hairy);
        put(&mut out, "blurry", self.blurry);
        put(&mut out, "color_tint", self.color_tint.map(|v| v.as_str()));
        if !self.unstructured.is_empty() {
            out.insert(
                "unstructured".to_string(),
                Value::Object(self.unstructured.clone()),
            );
        }
        out
    }

    copy_getters! {
        age: i64,
        sex: Sex,
        anatom_site_general: AnatomSiteGeneral,
        anatom_site_special: AnatomSiteSpecial,
        benign_malignant: BenignMalignant,
        diagnosis_confirm_type: DiagnosisConfirmType,
        personal_hx_mm: bool,
        family_hx_mm: bool,
        clin_size_long_diam_mm: f64,
        fitzpatrick_skin_type: FitzpatrickSkinType,
        melanocytic: bool,
        concomitant_biopsy: bool,
        mel_class: MelClass,
        mel_mitotic_index: MelMitoticIndex,
        mel_thick_mm: f64,
        mel_type: MelType,
        mel_ulcer: bool,
        acquisition_day: i64,
        image_manipulation: ImageManipulation,
        nevus_type: NevusType,
        image_type: ImageType,
        dermoscopic_type: DermoscopicType,
        tbp_tile_type: TbpTileType,
        marker_pen: bool,
        hairy: bool,
        blurry: bool,
        color_tint: ColorTint,
    }

    str_getters!(patient_id, lesion_id, rcm_case_id);

    /// The diagnosis split into its five levels; all `None` without one.
    pub fn diagnosis_levels(&self) -> Levels<'static> {
        self.diagnosis
            .map_or([None; MAX_LEVELS], |diagnosis| diagnosis.levels())
    }

    pub fn diagnosis_1(&self) -> Option<&'static str> {
        self.diagnosis_levels()[0]
    }

    pub fn diagnosis_2(&self) -> Option<&'static str> {
        self.diagnosis_levels()[1]
    }

    pub fn diagnosis_3(&self) -> Option<&'static str> {
        self.diagnosis_levels()[2]
    }

    pub fn diagnosis_4(&self) -> Option<&'static str> {
        self.diagnosis_levels()[3]
    }

    pub fn diagnosis_5(&self) -> Option<&'static str> {
        self.diagnosis_levels()[4]
    }

    /// Fields outside the schema, keyed verbatim.
    pub fn unstructured(&self) -> &Map<String, Value> {
        &self.unstructured
    }
}

fn put<T: Into<Value>>(out: &mut Map<String, Value>, field: &str, value: Option<T>) {
    if let Some(value) = value {
        out.insert(field.to_string(), value.into());
    }
}

impl Serialize for MetadataRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.dump().serialize(serializer)
    }
}
