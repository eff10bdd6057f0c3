// End-to-end grading scenarios: classification through populated matrix.

use sizegrade::{
    Audience, Badge, BrStandardTable, CalibrationContext, CellSource, ClassificationInput,
    GarmentStructure, ItemRole, LandmarkPayload, MeasurementId, MeasurementSession, Point,
    SeedValues, SizeCategory, UserGridPreference, project_session,
};

#[test]
fn baby_onesie_gets_length_only_from_the_table() {
    // No landmarks, no calibration: the table and the defaults carry it.
    let preference = UserGridPreference::new(Audience::Kids, SizeCategory::Baby);
    let mut session = MeasurementSession::new("product-3/front.jpg", preference);
    let input = ClassificationInput {
        category: Some("bebê".to_string()),
        name: Some("Body manga curta".to_string()),
        ..ClassificationInput::default()
    };
    session.classify(&input).unwrap();
    session.resolve_measurements(None).unwrap();
    session.populate(&SeedValues::new(), &BrStandardTable, None, None).unwrap();

    let item = session.single_item().unwrap();
    let ids: Vec<_> = item.geometry.iter().map(|line| line.id).collect();
    assert_eq!(ids, vec![MeasurementId::Length]);

    for size in ["RN", "3M", "6M", "9M", "12M"] {
        let length = item.values.value(MeasurementId::Length, size).unwrap();
        assert!(length > 0.0, "length for {size} must be positive, got {length}");
        assert_eq!(item.values.value(MeasurementId::Bust, size), None);
        assert_eq!(item.values.value(MeasurementId::Waist, size), None);
    }
}

#[test]
fn calibrated_waist_overrides_the_table_for_the_active_size() {
    // 200px apart at 10px/cm resolves to exactly 20.0cm.
    let preference = UserGridPreference::new(Audience::Female, SizeCategory::Standard);
    let mut session = MeasurementSession::new("product-9/front.jpg", preference);
    let input = ClassificationInput {
        product_type: Some("calça".to_string()),
        ..ClassificationInput::default()
    };
    session.classify(&input).unwrap();

    let mut landmarks = LandmarkPayload::new().with_image_size(1000.0, 1500.0);
    landmarks.insert("waist_start", Point { x: 30.0, y: 48.0 });
    landmarks.insert("waist_end", Point { x: 50.0, y: 48.0 });

    session.resolve_measurements(Some(&landmarks)).unwrap();
    session
        .populate(
            &SeedValues::new(),
            &BrStandardTable,
            Some(CalibrationContext::new(10.0)),
            Some(&landmarks),
        )
        .unwrap();

    let values = &session.single_item().unwrap().values;
    let active = session.active_size().to_string();
    assert_eq!(active, "M");
    let cell = values.get(MeasurementId::Waist, &active).unwrap();
    assert_eq!(cell.cm, 20.0);
    assert_eq!(cell.source, CellSource::Calibrated);

    // The projection surfaces the calibration badge, not the table's 72.
    let groups = project_session(&session, &BrStandardTable, &SeedValues::new());
    let waist_row = groups[0].rows.iter().find(|row| row.label == "Cintura").unwrap();
    assert_eq!(waist_row.value, Some(20.0));
    assert_eq!(waist_row.badge, Badge::Calibrated);
}

#[test]
fn conjunto_cropped_e_short_builds_both_role_slices() {
    let preference = UserGridPreference::new(Audience::Female, SizeCategory::Standard);
    let mut session = MeasurementSession::new("product-5/front.jpg", preference);
    let input = ClassificationInput {
        name: Some("Conjunto cropped e short".to_string()),
        ..ClassificationInput::default()
    };

    let decision = session.classify(&input).unwrap();
    assert_eq!(decision.structure, GarmentStructure::TopBottomSet);

    session.resolve_measurements(None).unwrap();
    session.populate(&SeedValues::new(), &BrStandardTable, None, None).unwrap();

    let groups = session.groups().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].id, ItemRole::Top);
    assert_eq!(groups[1].id, ItemRole::Bottom);

    let top_ids: Vec<_> = groups[0].geometry.iter().map(|line| line.id).collect();
    let bottom_ids: Vec<_> = groups[1].geometry.iter().map(|line| line.id).collect();
    assert_eq!(top_ids, vec![MeasurementId::Bust, MeasurementId::Length]);
    assert_eq!(
        bottom_ids,
        vec![MeasurementId::Waist, MeasurementId::Hip, MeasurementId::Length]
    );

    // Both matrices are fully populated for the whole grid.
    for group in groups {
        for line in &group.geometry {
            for size in ["PP", "P", "M", "G", "GG"] {
                assert!(group.values.value(line.id, size).is_some());
            }
        }
    }
}

#[test]
fn unknown_grid_still_grades_every_size() {
    // A combination the engine has no grid for falls back to the default
    // letter grid with extrapolated values only.
    let preference = UserGridPreference::new(Audience::Male, SizeCategory::Teen);
    let mut session = MeasurementSession::new("product-2/front.jpg", preference);
    let input = ClassificationInput {
        product_type: Some("camiseta".to_string()),
        ..ClassificationInput::default()
    };
    session.classify(&input).unwrap();
    session.resolve_measurements(None).unwrap();
    session
        .populate(&SeedValues::new().with(MeasurementId::Bust, 100.0), &BrStandardTable, None, None)
        .unwrap();

    let values = &session.single_item().unwrap().values;
    assert_eq!(values.value(MeasurementId::Bust, "PP"), Some(96.0));
    assert_eq!(values.value(MeasurementId::Bust, "M"), Some(100.0));
    assert_eq!(values.value(MeasurementId::Bust, "GG"), Some(104.0));
    for size in ["PP", "P", "M", "G", "GG"] {
        assert_eq!(values.get(MeasurementId::Bust, size).unwrap().source, CellSource::Estimated);
    }
}
