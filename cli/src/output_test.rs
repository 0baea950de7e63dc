use serde_json::json;

use api::model::{DataSourceStatus, DataSourceType, ModelOrigin};

use super::*;

fn model(identifier: &str) -> Model {
    Model {
        id: "m1".to_owned(),
        name: "GPT-4".to_owned(),
        identifier: identifier.to_owned(),
        description: None,
        origin: ModelOrigin::OpenRouter,
        is_active: true,
        created_at: None,
        updated_at: None,
    }
}

fn data_source() -> DataSource {
    DataSource {
        id: "d1".to_owned(),
        collection_id: "c1".to_owned(),
        collection: "Sales".to_owned(),
        name: "Orders".to_owned(),
        kind: DataSourceType::PostgreSql,
        connection_uri: None,
        metadata: None,
        last_scanned_at: None,
        last_scan: "Never".to_owned(),
        is_active: false,
        status: DataSourceStatus::Disabled,
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// Query results
// =============================================================

#[test]
fn empty_results_show_placeholder() {
    assert_eq!(results(&[]), NO_RESULTS);
}

#[test]
fn results_use_first_row_columns_and_footer() {
    let rows: Vec<QueryRow> = vec![
        json!({ "a": 1, "b": "x" }).as_object().unwrap().clone(),
        json!({ "a": 2 }).as_object().unwrap().clone(),
    ];
    assert_eq!(results(&rows), "a\tb\n1\tx\n2\tundefined\nShowing 2 rows");
}

// =============================================================
// Lists
// =============================================================

#[test]
fn data_source_list_has_pagination_summary() {
    let out = data_sources(&[data_source()], Some(Pagination::new(1, 1)));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], "d1\tOrders\tPostgreSQL\tSales\tDisabled\tNever");
    assert_eq!(lines[2], "Showing 1 to 1 of 1 results");
}

#[test]
fn model_list_shows_provider_and_total() {
    let out = models(&[model("openai/gpt-4")], 1);
    assert!(out.contains("\topenai\tOpenRouter\tyes"));
    assert!(out.ends_with("\n1 model"));
}

#[test]
fn model_without_prefix_has_unknown_provider() {
    assert!(super::model(&model("gpt-4")).contains("provider:    unknown"));
}

#[test]
fn absent_json_reads_no_content() {
    assert_eq!(json(None), "(no content)");
    assert_eq!(json(Some(&json!({ "ok": true }))), "{\n  \"ok\": true\n}");
}
