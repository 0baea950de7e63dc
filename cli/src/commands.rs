//! Command execution over the shared `api` services.
//!
//! Every command returns its rendered output instead of printing, so tests
//! can drive them against `MockTransport`.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::cell::RefCell;

use api::ApiClient;
use api::model::ModelOrigin;
use api::pagination::{PAGE_SIZE, Pagination};
use api::query::{QueryDraft, QueryStatus, QueryWorkflow};
use api::services::{ListQuery, ModelQuery};
use api::transport::Transport;
use api::validation::{CollectionForm, DataSourceForm, LoginForm};

use crate::args::{CollectionsSubcommand, Command, DataSourcesSubcommand, ListArgs, ModelsSubcommand};
use crate::error::CliError;
use crate::output;

pub async fn run<T: Transport>(api: &ApiClient<T>, command: Command) -> Result<String, CliError> {
    match command {
        Command::Login { username, password } => login(api, username, password).await,
        Command::Logout => {
            api.auth().logout().await;
            Ok("Logged out".to_owned())
        }
        Command::Whoami => {
            if !api.auth().is_authenticated() {
                return Err(CliError::NotLoggedIn);
            }
            Ok(output::user(&api.auth().me().await?))
        }
        Command::Collections(c) => collections(api, c.command).await,
        Command::DataSources(d) => data_sources(api, d.command).await,
        Command::Models(m) => models(api, m.command).await,
        Command::Query { collection, model, question } => {
            let draft = QueryDraft { question, collection_id: Some(collection), model_id: Some(model) };
            query(api, &draft, tokio::signal::ctrl_c()).await
        }
    }
}

async fn login<T: Transport>(api: &ApiClient<T>, username: String, password: String) -> Result<String, CliError> {
    let form = LoginForm { username_or_email: username, password };
    form.validate().map_err(|e| CliError::from_fields(&e))?;
    let user = api.auth().login(&form.username_or_email, &form.password).await?;
    Ok(format!("Logged in as {}", output::user(&user)))
}

fn list_query(args: &ListArgs) -> ListQuery {
    ListQuery { search: args.search.clone(), ..ListQuery::page(args.page.max(1), PAGE_SIZE) }
}

async fn collections<T: Transport>(api: &ApiClient<T>, command: CollectionsSubcommand) -> Result<String, CliError> {
    let service = api.collections();
    match command {
        CollectionsSubcommand::List(args) => {
            let page = service.list(&list_query(&args)).await?;
            Ok(output::collections(&page.items, Some(Pagination::new(args.page, page.total))))
        }
        CollectionsSubcommand::Get { id } => {
            let found = service.get(&id).await?.ok_or(CliError::NotFound { kind: "collection", id })?;
            Ok(output::collection(&found))
        }
        CollectionsSubcommand::Create { name, description } => {
            let form = CollectionForm { name, description: description.unwrap_or_default() };
            let input = form.validate().map_err(|e| CliError::from_fields(&e))?;
            Ok(output::collection(&service.create(&input).await?))
        }
        CollectionsSubcommand::Update { id, name, description } => {
            let form = CollectionForm { name, description: description.unwrap_or_default() };
            let input = form.validate().map_err(|e| CliError::from_fields(&e))?;
            Ok(output::collection(&service.update(&id, &input).await?))
        }
        CollectionsSubcommand::Delete { id } => {
            service.delete(&id).await?;
            Ok(format!("Deleted collection {id}"))
        }
        CollectionsSubcommand::Discover { id } => Ok(output::json(service.discover_relationships(&id).await?.as_ref())),
        CollectionsSubcommand::DataSources { id } => {
            let found = service.get(&id).await?.ok_or(CliError::NotFound { kind: "collection", id })?;
            Ok(output::data_sources(&service.data_sources(&found).await?, None))
        }
        CollectionsSubcommand::Attach { id, data_source_id } => {
            service.add_data_source(&id, &data_source_id).await?;
            Ok(format!("Attached data source {data_source_id} to collection {id}"))
        }
        CollectionsSubcommand::Detach { id, data_source_id } => {
            service.remove_data_source(&id, &data_source_id).await?;
            Ok(format!("Detached data source {data_source_id} from collection {id}"))
        }
    }
}

async fn data_sources<T: Transport>(api: &ApiClient<T>, command: DataSourcesSubcommand) -> Result<String, CliError> {
    let service = api.data_sources();
    match command {
        DataSourcesSubcommand::List(args) => {
            let page = service.list(&list_query(&args)).await?;
            Ok(output::data_sources(&page.items, Some(Pagination::new(args.page, page.total))))
        }
        DataSourcesSubcommand::Get { id } => {
            let found = service.get(&id).await?.ok_or(CliError::NotFound { kind: "data source", id })?;
            Ok(output::data_source(&found))
        }
        DataSourcesSubcommand::Create { name, kind, collection, uri, credentials } => {
            let form = DataSourceForm {
                name,
                kind,
                collection_id: Some(collection),
                connection_uri: uri,
                credentials: credentials.unwrap_or_default(),
            };
            let input = form.validate().map_err(|e| CliError::from_fields(&e))?;
            Ok(output::data_source(&service.create(&input).await?))
        }
        DataSourcesSubcommand::Delete { id } => {
            service.delete(&id).await?;
            Ok(format!("Deleted data source {id}"))
        }
        DataSourcesSubcommand::Rescan { id } => Ok(output::json(service.rescan(&id).await?.as_ref())),
        DataSourcesSubcommand::ExtractSchema { id } => Ok(output::json(service.extract_schema(&id).await?.as_ref())),
        DataSourcesSubcommand::Schema { id } => Ok(output::json(Some(&service.schema(&id).await?))),
        DataSourcesSubcommand::Snapshots { id } => Ok(output::snapshots(&service.snapshots(&id).await?)),
    }
}

async fn models<T: Transport>(api: &ApiClient<T>, command: ModelsSubcommand) -> Result<String, CliError> {
    let service = api.models();
    match command {
        ModelsSubcommand::List { origin, search } => {
            let origin = match origin {
                Some(raw) => Some(ModelOrigin::parse(&raw).ok_or_else(|| CliError::Invalid(format!("unknown origin {raw:?}")))?),
                None => None,
            };
            let list = service.list(&ModelQuery { origin, search }).await?;
            Ok(output::models(&list.models, list.total))
        }
        ModelsSubcommand::Get { id } => {
            let found = service.get(&id).await?.ok_or(CliError::NotFound { kind: "model", id })?;
            Ok(output::model(&found))
        }
    }
}

/// Run one query submission; `interrupt` resolving first cancels it.
pub async fn query<T, I>(api: &ApiClient<T>, draft: &QueryDraft, interrupt: I) -> Result<String, CliError>
where
    T: Transport,
    I: std::future::Future,
{
    let workflow = RefCell::new(QueryWorkflow::new());
    let submission = workflow
        .borrow_mut()
        .begin(draft)
        .ok_or_else(|| CliError::Invalid("question, collection, and model are required".to_owned()))?;
    workflow.borrow_mut().mark_executing(submission.generation);

    let run = api::query::execute(api, submission);
    tokio::pin!(run);
    tokio::pin!(interrupt);
    let (generation, outcome) = tokio::select! {
        done = &mut run => done,
        _ = &mut interrupt => {
            workflow.borrow_mut().reset();
            run.await
        }
    };
    workflow.borrow_mut().finish(generation, outcome);

    let workflow = workflow.borrow();
    match workflow.status() {
        QueryStatus::Completed => Ok(output::results(workflow.rows())),
        QueryStatus::Error => Err(CliError::Query(workflow.error().unwrap_or_default().to_owned())),
        _ => Err(CliError::Cancelled),
    }
}
