use serde_json::json;

use super::*;

fn rows(value: serde_json::Value) -> Vec<QueryRow> {
    serde_json::from_value(value).unwrap()
}

fn table(view: ResultsView) -> ResultTable {
    match view {
        ResultsView::Table(table) => table,
        ResultsView::Empty => panic!("expected a table"),
    }
}

#[test]
fn empty_rows_render_placeholder() {
    assert_eq!(render(&[]), ResultsView::Empty);
}

#[test]
fn columns_follow_first_row_order() {
    let t = table(render(&rows(json!([{ "b": 2, "a": 1 }]))));
    assert_eq!(t.columns, ["b", "a"]);
    assert_eq!(t.rows, vec![vec!["2".to_owned(), "1".to_owned()]]);
    assert_eq!(t.footer(), "Showing 1 rows");
}

#[test]
fn missing_key_renders_undefined_and_extra_keys_drop() {
    let t = table(render(&rows(json!([{ "a": 1, "b": 2 }, { "a": 3, "c": 9 }]))));
    assert_eq!(t.columns, ["a", "b"]);
    assert_eq!(t.rows[1], ["3", "undefined"]);
    assert_eq!(t.footer(), "Showing 2 rows");
}

#[test]
fn cells_coerce_every_json_kind() {
    assert_eq!(cell_text(Some(&json!("text"))), "text");
    assert_eq!(cell_text(Some(&json!(1.5))), "1.5");
    assert_eq!(cell_text(Some(&json!(-3))), "-3");
    assert_eq!(cell_text(Some(&json!(true))), "true");
    assert_eq!(cell_text(Some(&json!(null))), "null");
    assert_eq!(cell_text(Some(&json!([1, "x"]))), r#"[1,"x"]"#);
    assert_eq!(cell_text(Some(&json!({ "k": 1 }))), r#"{"k":1}"#);
    assert_eq!(cell_text(None), "undefined");
}
