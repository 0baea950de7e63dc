//! Plain-text rendering for command results. Tables are tab-separated so
//! they pipe cleanly into `cut` and `column -t`.

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

use api::model::{Collection, DataSource, Model, QueryRow, SchemaSnapshot, User};
use api::pagination::Pagination;
use api::results::{NO_RESULTS, ResultsView, render};
use api::services::models::provider_from_identifier;
use serde_json::Value;

fn table(header: &[&str], rows: impl IntoIterator<Item = Vec<String>>) -> String {
    let mut lines = vec![header.join("\t")];
    lines.extend(rows.into_iter().map(|cells| cells.join("\t")));
    lines.join("\n")
}

pub fn user(user: &User) -> String {
    format!("{} ({}) <{}>", user.display_name(), user.username, user.email)
}

pub fn collections(items: &[Collection], pagination: Option<Pagination>) -> String {
    let body = table(
        &["ID", "NAME", "STATUS", "OWNER", "SOURCES", "LAST SCAN"],
        items.iter().map(|c| {
            vec![
                c.id.clone(),
                c.name.clone(),
                c.status.label().to_owned(),
                c.owner.clone(),
                c.data_sources_count.to_string(),
                c.last_scan.clone(),
            ]
        }),
    );
    with_footer(body, pagination)
}

pub fn collection(c: &Collection) -> String {
    [
        format!("id:           {}", c.id),
        format!("name:         {}", c.name),
        format!("description:  {}", c.description.as_deref().unwrap_or("-")),
        format!("status:       {}", c.status.label()),
        format!("owner:        {}", c.owner),
        format!("data sources: {}", c.data_sources_count),
        format!("last scan:    {}", c.last_scan),
    ]
    .join("\n")
}

pub fn data_sources(items: &[DataSource], pagination: Option<Pagination>) -> String {
    let body = table(
        &["ID", "NAME", "TYPE", "COLLECTION", "STATUS", "LAST SCAN"],
        items.iter().map(|d| {
            vec![
                d.id.clone(),
                d.name.clone(),
                d.kind.as_str().to_owned(),
                d.collection.clone(),
                d.status.label().to_owned(),
                d.last_scan.clone(),
            ]
        }),
    );
    with_footer(body, pagination)
}

pub fn data_source(d: &DataSource) -> String {
    [
        format!("id:         {}", d.id),
        format!("name:       {}", d.name),
        format!("type:       {}", d.kind.as_str()),
        format!("collection: {} ({})", d.collection, d.collection_id),
        format!("uri:        {}", d.connection_uri.as_deref().unwrap_or("-")),
        format!("status:     {}", d.status.label()),
        format!("last scan:  {}", d.last_scan),
    ]
    .join("\n")
}

pub fn models(items: &[Model], total: u64) -> String {
    let body = table(
        &["ID", "NAME", "IDENTIFIER", "PROVIDER", "ORIGIN", "ACTIVE"],
        items.iter().map(|m| {
            vec![
                m.id.clone(),
                m.name.clone(),
                m.identifier.clone(),
                provider_from_identifier(&m.identifier).to_owned(),
                m.origin.as_str().to_owned(),
                if m.is_active { "yes" } else { "no" }.to_owned(),
            ]
        }),
    );
    let count = if total == 1 { "1 model".to_owned() } else { format!("{total} models") };
    format!("{body}\n{count}")
}

pub fn model(m: &Model) -> String {
    [
        format!("id:          {}", m.id),
        format!("name:        {}", m.name),
        format!("identifier:  {}", m.identifier),
        format!("provider:    {}", provider_from_identifier(&m.identifier)),
        format!("origin:      {}", m.origin.as_str()),
        format!("active:      {}", m.is_active),
        format!("description: {}", m.description.as_deref().unwrap_or("-")),
    ]
    .join("\n")
}

pub fn snapshots(items: &[SchemaSnapshot]) -> String {
    table(&["ID", "CAPTURED"], items.iter().map(|s| vec![s.id.clone(), s.captured.clone()]))
}

/// Query rows as a table with a row-count footer, or the empty placeholder.
pub fn results(rows: &[QueryRow]) -> String {
    match render(rows) {
        ResultsView::Empty => NO_RESULTS.to_owned(),
        ResultsView::Table(t) => {
            let footer = t.footer();
            let header: Vec<&str> = t.columns.iter().map(String::as_str).collect();
            format!("{}\n{footer}", table(&header, t.rows))
        }
    }
}

/// Pretty JSON, or `"(no content)"` for an empty server reply.
pub fn json(value: Option<&Value>) -> String {
    match value {
        Some(v) => serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()),
        None => "(no content)".to_owned(),
    }
}

fn with_footer(body: String, pagination: Option<Pagination>) -> String {
    match pagination {
        Some(p) => format!("{body}\n{}", p.summary()),
        None => body,
    }
}
