//! `/api/queries/execute`: natural-language question in, result rows out.

#[cfg(test)]
#[path = "queries_test.rs"]
mod queries_test;

use crate::client::ApiClient;
use crate::dto::{QueryRequest, RawQueryResponse};
use crate::error::ApiError;
use crate::model::QueryRow;
use crate::transport::Transport;

const EXECUTE_PATH: &str = "/api/queries/execute";

pub struct QueriesService<'a, T> {
    api: &'a ApiClient<T>,
}

impl<'a, T: Transport> QueriesService<'a, T> {
    pub(crate) fn new(api: &'a ApiClient<T>) -> Self {
        Self { api }
    }

    /// Run `request` and return its rows verbatim, in server order.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; a body that is neither an array nor an object
    /// carrying `rows`/`results`/`data` is [`ApiError::Decode`].
    pub async fn execute(&self, request: &QueryRequest) -> Result<Vec<QueryRow>, ApiError> {
        let response: RawQueryResponse = self.api.post(EXECUTE_PATH, request).await?;
        let rows = response.into_rows();
        log::debug!("query returned {} rows", rows.len());
        Ok(rows)
    }
}
