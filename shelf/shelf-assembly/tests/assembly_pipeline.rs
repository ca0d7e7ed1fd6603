//! End-to-end assembly pipeline tests.
//!
//! Drives the full path a caller takes: parse a catalog from JSON, assemble
//! with a configuration, and inspect the resulting plan. Colocated unit
//! tests cover each component; these tests cover the seams between them.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use approx::assert_relative_eq;
use shelf_assembly::{
    assemble, assemble_with_roster, validate_catalog, AssemblyError, Catalog, PartRole,
    PartRoster, ShelfConfig, Side, Vector3,
};

/// A complete shelving catalog with ten console seats at Y = 0..9.
const CATALOG_JSON: &str = r#"{
    "back_panel": {
        "path": "models/back_panel.glb",
        "anchors": {
            "top_left": [-40.0, 40.0, 0.0],
            "top_right": [40.0, 40.0, 0.0],
            "bottom_left": [-40.0, 0.0, 0.0],
            "bottom_right": [40.0, 0.0, 0.0]
        }
    },
    "stand": {
        "path": "models/stand.glb",
        "anchors": {
            "bottom_back_panel": [0.0, 0.0, -2.0],
            "bottom_base_board": [0.0, 2.0, 4.0],
            "leg": [0.0, -10.0, 0.0],
            "console_0": [1.5, 0.0, 4.0],
            "console_1": [1.5, 1.0, 4.0],
            "console_2": [1.5, 2.0, 4.0],
            "console_3": [1.5, 3.0, 4.0],
            "console_4": [1.5, 4.0, 4.0],
            "console_5": [1.5, 5.0, 4.0],
            "console_6": [1.5, 6.0, 4.0],
            "console_7": [1.5, 7.0, 4.0],
            "console_8": [1.5, 8.0, 4.0],
            "console_9": [1.5, 9.0, 4.0]
        }
    },
    "leg": {
        "path": "models/leg.glb",
        "anchors": { "stand": [0.0, 10.0, 0.0] }
    },
    "console": {
        "path": "models/console.glb",
        "anchors": {
            "stand": [0.0, 2.0, -4.0],
            "level": [12.0, 4.0, 0.0]
        }
    },
    "base_board": {
        "path": "models/base_board.glb",
        "anchors": { "bottom_left": [-38.0, 0.0, 2.0] }
    },
    "level": {
        "path": "models/level.glb",
        "anchors": { "console_left": [-38.0, -2.0, 0.0] }
    }
}"#;

fn load_catalog() -> Catalog {
    Catalog::from_json_str(CATALOG_JSON).unwrap()
}

#[test]
fn json_catalog_assembles_with_defaults() {
    let catalog = load_catalog();
    let plan = assemble(&catalog, &ShelfConfig::default()).unwrap();

    // 5 panels, 2 legs, 2 stands, 7 console pairs, 1 base board, 7 levels
    assert_eq!(plan.len(), 5 + 2 + 2 + 14 + 1 + 7);
    assert_eq!(plan.role_count(PartRole::Console), 14);
    assert_eq!(plan.role_count(PartRole::Level), 7);
}

#[test]
fn three_levels_select_consoles_three_five_eight() {
    let catalog = load_catalog();
    let plan = assemble(&catalog, &ShelfConfig::new().with_level_count(3)).unwrap();

    // Selected seats sit at Y = 3, 5, 8; left stand offset is (-40, 0, 2)
    // and the console's own seat anchor is (0, 2, -4).
    let left_console_y: Vec<f64> = plan
        .placements_for_role(PartRole::Console)
        .filter(|p| p.side() == Some(Side::Left))
        .map(|p| p.offset().y)
        .collect();

    assert_eq!(left_console_y.len(), 3);
    assert_relative_eq!(left_console_y[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(left_console_y[1], 3.0, epsilon = 1e-12);
    assert_relative_eq!(left_console_y[2], 6.0, epsilon = 1e-12);
}

#[test]
fn repeated_assembly_is_bit_identical() {
    let catalog = load_catalog();
    let config = ShelfConfig::new().with_level_count(5).with_color("white");

    let first = assemble(&catalog, &config).unwrap();
    let second = assemble(&catalog, &config).unwrap();

    assert_eq!(first, second);
    for (a, b) in first.placements().iter().zip(second.placements()) {
        assert_eq!(a.offset(), b.offset());
    }
}

#[test]
fn zero_levels_keep_fixed_structure() {
    let catalog = load_catalog();
    let plan = assemble(&catalog, &ShelfConfig::new().with_level_count(0)).unwrap();

    assert_eq!(plan.role_count(PartRole::Console), 0);
    assert_eq!(plan.role_count(PartRole::Level), 0);
    assert_eq!(plan.role_count(PartRole::BackPanel), 5);
    assert_eq!(plan.role_count(PartRole::Stand), 2);
    assert_eq!(plan.role_count(PartRole::Leg), 2);
    assert_eq!(plan.role_count(PartRole::BaseBoard), 1);
}

#[test]
fn level_count_changes_only_repeated_placements() {
    let catalog = load_catalog();
    let small = assemble(&catalog, &ShelfConfig::new().with_level_count(2)).unwrap();
    let large = assemble(&catalog, &ShelfConfig::new().with_level_count(6)).unwrap();

    for role in [PartRole::BackPanel, PartRole::Leg, PartRole::Stand, PartRole::BaseBoard] {
        let small_offsets: Vec<Vector3<f64>> = small
            .placements_for_role(role)
            .map(shelf_assembly::Placement::offset)
            .collect();
        let large_offsets: Vec<Vector3<f64>> = large
            .placements_for_role(role)
            .map(shelf_assembly::Placement::offset)
            .collect();
        assert_eq!(small_offsets, large_offsets);
    }
}

#[test]
fn missing_anchor_fails_whole_assembly() {
    // Drop the console's level anchor: legs, stands, and consoles are all
    // resolvable, but the plan must still fail as a whole.
    let broken = CATALOG_JSON.replace("\"level\": [12.0, 4.0, 0.0]", "\"shelf\": [12.0, 4.0, 0.0]");
    let catalog = Catalog::from_json_str(&broken).unwrap();

    let result = assemble(&catalog, &ShelfConfig::new().with_level_count(2));
    assert!(matches!(
        result,
        Err(AssemblyError::MissingAnchor { .. })
    ));
}

#[test]
fn too_many_levels_rejected_up_front() {
    let catalog = load_catalog();
    let result = assemble(&catalog, &ShelfConfig::new().with_level_count(25));

    match result {
        Err(AssemblyError::InvalidCount {
            requested,
            available,
        }) => {
            assert_eq!(requested, 25);
            assert_eq!(available, 10);
        }
        other => panic!("expected InvalidCount, got {other:?}"),
    }
}

#[test]
fn validation_agrees_with_composer() {
    let catalog = load_catalog();
    let roster = PartRoster::default();
    assert!(validate_catalog(&catalog, &roster).is_valid());

    let broken = CATALOG_JSON.replace("\"stand\": [0.0, 10.0, 0.0]", "\"mount\": [0.0, 10.0, 0.0]");
    let broken_catalog = Catalog::from_json_str(&broken).unwrap();

    let validation = validate_catalog(&broken_catalog, &roster);
    assert!(!validation.is_valid());
    assert!(assemble(&broken_catalog, &ShelfConfig::default()).is_err());
}

#[test]
fn custom_roster_assembles_renamed_parts() {
    let renamed = CATALOG_JSON
        .replace("\"stand\": {", "\"upright\": {")
        .replace("\"leg\": {", "\"foot\": {");
    let catalog = Catalog::from_json_str(&renamed).unwrap();

    let roster = PartRoster::new().with_stand("upright").with_leg("foot");
    let plan =
        assemble_with_roster(&catalog, &roster, &ShelfConfig::new().with_level_count(1)).unwrap();

    assert_eq!(plan.role_count(PartRole::Stand), 2);
    assert_eq!(plan.role_count(PartRole::Leg), 2);
    assert!(plan
        .placements_for_role(PartRole::Leg)
        .all(|p| p.part_id() == "foot"));
}
