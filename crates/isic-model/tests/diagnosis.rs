#![allow(missing_docs)]

use std::collections::HashSet;

use isic_model::diagnosis::{self, Diagnosis, MAX_LEVELS};
use isic_model::{ModelError, accept_terminal_values, is_melanoma};

#[test]
fn terminal_segments_are_unique() {
    let terminals: Vec<&str> = Diagnosis::all().iter().map(Diagnosis::terminal).collect();
    let unique: HashSet<&str> = terminals.iter().copied().collect();
    assert_eq!(terminals.len(), unique.len());
}

#[test]
fn every_segment_has_a_parent_in_the_hierarchy() {
    for diagnosis in Diagnosis::all() {
        assert!(diagnosis.depth() <= MAX_LEVELS, "{diagnosis} is too deep");
        if diagnosis.depth() > 1 {
            assert!(diagnosis.parent().is_some(), "{diagnosis} has no parent");
        }
    }
}

#[test]
fn deepest_first_is_ordered_by_depth() {
    let depths: Vec<usize> = Diagnosis::deepest_first()
        .iter()
        .map(Diagnosis::depth)
        .collect();
    assert!(depths.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(depths.len(), Diagnosis::all().len());
}

#[test]
fn terminal_values_expand_to_full_paths() {
    let cases = [
        ("Benign", vec!["Benign"]),
        ("Benign - Other", vec!["Benign", "Benign - Other"]),
        (
            "Blue nevus",
            vec!["Benign", "Benign melanocytic proliferations", "Nevus", "Blue nevus"],
        ),
        (
            "Squamous cell carcinoma, NOS",
            vec![
                "Malignant",
                "Malignant epidermal proliferations",
                "Squamous cell carcinoma, NOS",
            ],
        ),
        (
            "Blue nevus, Sclerosing",
            vec![
                "Benign",
                "Benign melanocytic proliferations",
                "Nevus",
                "Blue nevus",
                "Blue nevus, Sclerosing",
            ],
        ),
    ];

    for (raw, expected) in cases {
        let diagnosis = Diagnosis::resolve(raw).expect("known terminal");
        let levels = diagnosis.levels();
        for (idx, level) in levels.iter().enumerate() {
            assert_eq!(*level, expected.get(idx).copied(), "{raw} level {idx}");
        }
    }
}

#[test]
fn accept_terminal_values_passes_unknown_input_through() {
    assert_eq!(accept_terminal_values("Not a diagnosis"), "Not a diagnosis");
    assert_eq!(accept_terminal_values("Benign:Nonsense"), "Benign:Nonsense");
    assert_eq!(
        accept_terminal_values("Melanoma Invasive"),
        "Malignant:Malignant melanocytic proliferations (Melanoma):Melanoma Invasive"
    );
}

#[test]
fn terminal_lookup() {
    let fibroma = Diagnosis::from_terminal("Fibroma, Sclerotic").expect("known terminal");
    assert_eq!(fibroma.terminal(), "Fibroma, Sclerotic");
    assert_eq!(fibroma.parent().map(|d| d.terminal()), Some("Fibroma"));
    assert_eq!(Diagnosis::from_terminal("Benign:Benign - Other"), None);
    assert_eq!(Diagnosis::from_terminal("Unicorn horn"), None);
}

#[test]
fn from_str_rejects_unknown_paths() {
    let err = "Benign:Nonsense".parse::<Diagnosis>().unwrap_err();
    assert_eq!(err, ModelError::UnknownDiagnosis("Benign:Nonsense".to_string()));
    assert_eq!(err.to_string(), "unknown diagnosis: 'Benign:Nonsense'");
}

#[test]
fn melanoma_classification() {
    let melanoma = Diagnosis::melanoma_diagnoses();
    assert_eq!(melanoma.len(), 30);
    assert!(melanoma.iter().all(Diagnosis::is_melanoma));
    assert!(is_melanoma(
        "Malignant:Collision - At least one malignant proliferation"
    ));
    assert!(is_melanoma(
        "Malignant:Malignant melanocytic proliferations (Melanoma)"
    ));
    assert!(!is_melanoma("Benign:Collision - Only benign proliferations"));
    assert!(!is_melanoma("Melanoma Invasive"), "terminal values are not resolved");

    let non_melanoma = Diagnosis::all().iter().filter(|d| !d.is_melanoma()).count();
    assert_eq!(non_melanoma + melanoma.len(), Diagnosis::all().len());
}

#[test]
fn nevus_family() {
    let blue = Diagnosis::resolve("Blue nevus").expect("blue nevus");
    assert!(blue.is_nevus());
    assert!(Diagnosis::resolve("Nevus").is_some_and(|d| d.is_nevus()));
    // Named like a nevus but filed under sebaceous proliferations.
    let sebaceus = Diagnosis::resolve("Nevus sebaceus").expect("nevus sebaceus");
    assert!(!sebaceus.is_nevus());
    assert!(!Diagnosis::resolve("Melanoma Invasive").is_some_and(|d| d.is_nevus()));
}

#[test]
fn as_dict_projects_level_fields() {
    let projected = diagnosis::as_dict("Benign:Benign - Other");
    assert_eq!(projected["diagnosis_1"], Some("Benign"));
    assert_eq!(projected["diagnosis_2"], Some("Benign - Other"));
    assert_eq!(projected["diagnosis_3"], None);
    assert_eq!(projected.len(), MAX_LEVELS);
}

#[test]
fn diagnosis_serializes_as_path() {
    let diagnosis = Diagnosis::resolve("Fibroma, Sclerotic").expect("fibroma");
    insta::assert_json_snapshot!(diagnosis, @r#""Benign:Benign soft tissue proliferations - Fibro-histiocytic:Fibroma:Fibroma, Sclerotic""#);
}
