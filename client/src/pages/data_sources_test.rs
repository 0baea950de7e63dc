use super::*;

#[test]
fn default_inputs_filter_nothing() {
    let inputs = FilterInputs::default();
    assert!(inputs.is_default());
    assert_eq!(inputs.filter(), DataSourceFilter::default());
}

#[test]
fn select_values_parse_into_facets() {
    let inputs = FilterInputs {
        search: "prod".to_owned(),
        kind: "MongoDB".to_owned(),
        collection: "Sales".to_owned(),
        status: "disabled".to_owned(),
    };
    let filter = inputs.filter();
    assert_eq!(filter.search, "prod");
    assert_eq!(filter.kind, Some(DataSourceType::MongoDb));
    assert_eq!(filter.collection.as_deref(), Some("Sales"));
    assert_eq!(filter.status, Some(DataSourceStatus::Disabled));
    assert!(!inputs.is_default());
}
