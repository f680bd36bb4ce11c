use super::RowRule;
use crate::issue::Issue;
use crate::record::MetadataRow;

pub(super) const ANATOM_SITE_SPECIAL: RowRule = RowRule {
    name: "anatom_site_special requires compatible general site",
    reads: &["anatom_site_special", "anatom_site_general"],
    deferrable: false,
    check: special_site_matches_general_site,
};

fn special_site_matches_general_site(row: &MetadataRow) -> Option<Issue> {
    let special = row.anatom_site_special?;
    let Some(general) = row.anatom_site_general else {
        return Some(Issue::missing("anatom_site_special", "anatom_site_general"));
    };
    if special.is_compatible_with(general) {
        return None;
    }
    Some(Issue::IncompatibleFields {
        field: "anatom_site_special",
        field_value: Some(special.as_str().to_string()),
        other: "anatom_site_general",
        other_value: Some(general.as_str().to_string()),
    })
}
