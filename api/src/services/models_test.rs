use std::rc::Rc;

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::config::ApiConfig;
use crate::mock::MockTransport;
use crate::session::MemoryStore;
use crate::transport::Method;

fn model(name: &str, identifier: &str, origin: ModelOrigin, is_active: bool) -> Model {
    Model {
        id: identifier.to_owned(),
        name: name.to_owned(),
        identifier: identifier.to_owned(),
        description: None,
        origin,
        is_active,
        created_at: None,
        updated_at: None,
    }
}

fn sample() -> Vec<Model> {
    vec![
        model("GPT-4", "openai/gpt-4", ModelOrigin::OpenRouter, true),
        model("claude", "anthropic/claude", ModelOrigin::OpenRouter, false),
        model("Local SQL", "sqlcoder", ModelOrigin::Internal, true),
        model("GPT-3.5", "openai/gpt-3.5", ModelOrigin::OpenRouter, true),
    ]
}

#[test]
fn list_sends_filters_and_maps() {
    let mock = MockTransport::new().with_json(
        Method::Get,
        BASE,
        200,
        &json!({ "models": [{ "id": "m1", "name": "GPT-4", "identifier": "openai/gpt-4", "origin": "OpenRouter" }], "total": 1 }),
    );
    let api = ApiClient::new(mock, ApiConfig::new("http://api.test"), Rc::new(MemoryStore::new()));
    let query = ModelQuery { origin: Some(ModelOrigin::OpenRouter), search: Some("gpt".to_owned()) };
    let list = block_on(api.models().list(&query)).unwrap();
    assert_eq!(list.total, 1);
    assert!(list.models[0].is_active);
    assert_eq!(api.transport().requests()[0].url, "http://api.test/api/models?origin=OpenRouter&search=gpt");
}

#[test]
fn get_missing_is_none() {
    let api = ApiClient::new(MockTransport::new(), ApiConfig::new("http://api.test"), Rc::new(MemoryStore::new()));
    assert_eq!(block_on(api.models().get("nope")).unwrap(), None);
}

#[test]
fn provider_prefix() {
    assert_eq!(provider_from_identifier("openai/gpt-4"), "openai");
    assert_eq!(provider_from_identifier("meta/llama/3"), "meta");
    assert_eq!(provider_from_identifier("sqlcoder"), "unknown");
    assert_eq!(provider_from_identifier("/odd"), "unknown");
}

#[test]
fn grouping_by_provider() {
    let groups = group_by_provider(&sample());
    let providers: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(providers, ["anthropic", "openai", "unknown"]);
    assert_eq!(groups["openai"].len(), 2);
}

#[test]
fn origin_and_active_filters() {
    assert_eq!(filter_by_origin(&sample(), ModelOrigin::Internal).len(), 1);
    assert_eq!(filter_active(&sample()).len(), 3);
}

#[test]
fn sort_by_name_both_directions() {
    let names = |models: Vec<Model>| models.into_iter().map(|m| m.name).collect::<Vec<_>>();
    assert_eq!(names(sort_by_name(&sample(), true)), ["claude", "GPT-3.5", "GPT-4", "Local SQL"]);
    assert_eq!(names(sort_by_name(&sample(), false)), ["Local SQL", "GPT-4", "GPT-3.5", "claude"]);
}
