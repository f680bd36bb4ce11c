//! Rules tying acquisition subtypes to the image type.

use isic_model::ImageType;

use super::RowRule;
use crate::issue::Issue;
use crate::record::MetadataRow;

pub(super) const DERMOSCOPIC_TYPE: RowRule = RowRule {
    name: "dermoscopic_type requires dermoscopic image",
    reads: &["dermoscopic_type", "image_type"],
    deferrable: false,
    check: |row| {
        row.dermoscopic_type?;
        match row.image_type {
            None => Some(Issue::MissingField {
                field: "dermoscopic_type",
                field_value: None,
                requires: "image_type",
                requires_value: Some(ImageType::Dermoscopic.as_str().to_string()),
            }),
            Some(ImageType::Dermoscopic) => None,
            Some(other) => Some(Issue::incompatible(
                "dermoscopic_type",
                "image_type",
                other.as_str(),
            )),
        }
    },
};

pub(super) const TBP_TILE_TYPE: RowRule = RowRule {
    name: "tbp_tile_type requires TBP tile image",
    reads: &["tbp_tile_type", "image_type"],
    deferrable: false,
    check: |row| {
        row.tbp_tile_type?;
        requires_image_type(row, "tbp_tile_type", ImageType::is_tbp_tile)
    },
};

pub(super) const RCM_CASE_ID: RowRule = RowRule {
    name: "rcm_case_id requires RCM image",
    reads: &["rcm_case_id", "image_type"],
    deferrable: true,
    check: |row| {
        row.rcm_case_id.as_ref()?;
        requires_image_type(row, "rcm_case_id", ImageType::is_rcm)
    },
};

fn requires_image_type(
    row: &MetadataRow,
    field: &'static str,
    accepts: fn(&ImageType) -> bool,
) -> Option<Issue> {
    match row.image_type {
        None => Some(Issue::missing(field, "image_type")),
        Some(image_type) if !accepts(&image_type) => Some(Issue::incompatible(
            field,
            "image_type",
            image_type.as_str(),
        )),
        Some(_) => None,
    }
}
