use super::*;

fn form(collection_id: Option<&str>) -> DataSourceForm {
    DataSourceForm {
        name: "Orders".to_owned(),
        kind: "PostgreSQL".to_owned(),
        collection_id: collection_id.map(str::to_owned),
        connection_uri: "postgresql://db:5432/orders".to_owned(),
        credentials: String::new(),
    }
}

// =============================================================
// Redirect targets
// =============================================================

#[test]
fn saved_source_returns_to_its_collection() {
    assert_eq!(redirect_after_save(Some("c7")), "/collections/c7");
}

#[test]
fn saved_source_without_collection_returns_to_list() {
    assert_eq!(redirect_after_save(None), "/data-sources");
    assert_eq!(redirect_after_save(Some("")), "/data-sources");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn create_requires_a_collection() {
    let errors = validate_form(&form(Some("")), false).unwrap_err();
    assert_eq!(errors.get("collectionId"), Some(COLLECTION_REQUIRED));
}

#[test]
fn create_reports_collection_alongside_field_errors() {
    let mut invalid = form(None);
    invalid.name = "  ".to_owned();
    let errors = validate_form(&invalid, false).unwrap_err();
    assert!(errors.get("name").is_some());
    assert!(errors.get("collectionId").is_some());
}

#[test]
fn edit_does_not_require_a_collection() {
    let input = validate_form(&form(None), true).unwrap();
    assert_eq!(input.kind, DataSourceType::PostgreSql);
    assert_eq!(input.credentials, None);
}

#[test]
fn create_with_collection_passes() {
    let input = validate_form(&form(Some("c1")), false).unwrap();
    assert_eq!(input.collection_id.as_deref(), Some("c1"));
}
