use super::*;

/// helper to build a bundle with distinct, recognisable phrases
fn dotted_translations() -> TranslationSet {
    TranslationSet {
        pushing_status: String::from("Pushing..."),
        pulling_status: String::from("Pulling..."),
        fast_forwarding: String::from("Fast-forwarding..."),
        deleting_status: String::from("Deleting..."),
    }
}

#[test]
fn test_none_is_empty() {
    assert_eq!(item_operation_to_string(ItemOperation::None, &dotted_translations()), "");
    assert_eq!(item_operation_to_string(ItemOperation::None, &TranslationSet::english()), "");
}

#[test]
fn test_each_operation_maps_to_its_phrase() {
    let tr = dotted_translations();
    assert_eq!(item_operation_to_string(ItemOperation::Pushing, &tr), "Pushing...");
    assert_eq!(item_operation_to_string(ItemOperation::Pulling, &tr), "Pulling...");
    assert_eq!(
        item_operation_to_string(ItemOperation::FastForwarding, &tr),
        "Fast-forwarding..."
    );
    assert_eq!(item_operation_to_string(ItemOperation::Deleting, &tr), "Deleting...");
}

#[test]
fn test_in_flight_operations_never_empty() {
    let tr = TranslationSet::english();
    for op in ItemOperation::ALL {
        assert_eq!(
            item_operation_to_string(op, &tr).is_empty(),
            op == ItemOperation::None,
            "operation {op}"
        );
    }
}

#[test]
fn test_resolve_is_deterministic_and_leaves_inputs_untouched() {
    let tr = dotted_translations();
    let before = tr.clone();
    for op in ItemOperation::ALL {
        let first = item_operation_to_string(op, &tr).to_string();
        let second = item_operation_to_string(op, &tr).to_string();
        assert_eq!(first, second);
    }
    assert_eq!(tr, before);
}

#[test]
fn test_raw_known_values() {
    let tr = dotted_translations();
    assert_eq!(raw_item_operation_to_string(0, &tr), "");
    assert_eq!(raw_item_operation_to_string(1, &tr), "Pushing...");
    assert_eq!(raw_item_operation_to_string(2, &tr), "Pulling...");
    assert_eq!(raw_item_operation_to_string(3, &tr), "Fast-forwarding...");
    assert_eq!(raw_item_operation_to_string(4, &tr), "Deleting...");
}

#[test]
fn test_raw_unknown_values_are_empty() {
    let tr = dotted_translations();
    for raw in 5..=u8::MAX {
        assert_eq!(raw_item_operation_to_string(raw, &tr), "", "raw value {raw}");
    }
}

#[test]
fn test_spinner_cycles() {
    assert_eq!(spinner_frame(Duration::ZERO), "|");
    assert_eq!(spinner_frame(Duration::from_millis(49)), "|");
    assert_eq!(spinner_frame(Duration::from_millis(50)), "/");
    assert_eq!(spinner_frame(Duration::from_millis(100)), "-");
    assert_eq!(spinner_frame(Duration::from_millis(150)), "\\");
    assert_eq!(spinner_frame(Duration::from_millis(200)), "|");
}

#[test]
fn test_loader_follows_wall_clock() {
    let at = |ms| UNIX_EPOCH + Duration::from_millis(ms);
    assert_eq!(loader_elapsed(at(1_000_050)), Duration::from_millis(1_000_050));
    assert_eq!(spinner_frame(loader_elapsed(at(1_000_000))), "|");
    assert_eq!(spinner_frame(loader_elapsed(at(1_000_050))), "/");
    assert_eq!(spinner_frame(loader_elapsed(at(1_000_100))), "-");
}

#[test]
fn test_loader_before_epoch_is_zero() {
    let before = UNIX_EPOCH - Duration::from_secs(1);
    assert_eq!(loader_elapsed(before), Duration::ZERO);
    assert_eq!(spinner_frame(loader_elapsed(before)), "|");
}

#[test]
fn test_render_row_without_operation_is_plain_name() {
    let row = render_row("main", ItemOperation::None, &dotted_translations(), Duration::ZERO);
    assert_eq!(row, "main");
}

#[test]
fn test_render_row_with_operation() {
    let row = render_row(
        "feature",
        ItemOperation::Pulling,
        &dotted_translations(),
        Duration::from_millis(60),
    );
    assert!(row.starts_with("feature "), "row: {row:?}");
    assert!(row.contains("Pulling... /"), "row: {row:?}");
}

#[test]
fn test_item_row() {
    let row = ItemRow::new("main", ItemOperation::FastForwarding, &TranslationSet::english());
    assert_eq!(row.status, "Fast-forwarding");

    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "main",
            "operation": "fast-forwarding",
            "status": "Fast-forwarding",
        })
    );
}
