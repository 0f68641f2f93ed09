//! REST client for the hosted store.

use std::fmt::Display;

use reqwest::{
    Client, Method, RequestBuilder,
    header::{ACCEPT, AUTHORIZATION},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::store::{Caller, StoreConfig, StoreError};

const API_KEY_HEADER: &str = "apikey";
const PREFER_HEADER: &str = "prefer";
const RETURN_REPRESENTATION: &str = "return=representation";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// A `column=op.value` query filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    column: &'static str,
    expression: String,
}

impl Filter {
    /// Match rows whose `column` equals `value`.
    pub fn eq(column: &'static str, value: impl Display) -> Self {
        Self {
            column,
            expression: format!("eq.{value}"),
        }
    }
}

/// HTTP client for the store's REST interface.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: Client,
    rest_url: String,
    api_key: String,
}

impl StoreClient {
    /// Create a client for the given REST root and API key.
    #[must_use]
    pub fn new(http: Client, rest_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            rest_url: rest_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Create a client from store settings, or `None` when no key is set.
    #[must_use]
    pub fn from_config(http: Client, config: &StoreConfig) -> Option<Self> {
        config
            .api_key()
            .map(|api_key| Self::new(http, config.rest_url(), api_key))
    }

    /// Select `columns` from `table`, returning every matching row.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or when the store rejects the query.
    pub async fn select<T: DeserializeOwned>(
        &self,
        caller: &Caller,
        table: &str,
        columns: &str,
        filters: &[Filter],
    ) -> Result<Vec<T>, StoreError> {
        send(self.select_request(caller, table, columns, filters)).await
    }

    /// Select at most one row; zero rows is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MultipleRows`] when more than one row matches,
    /// or any error [`StoreClient::select`] can return.
    pub async fn select_maybe_single<T: DeserializeOwned>(
        &self,
        caller: &Caller,
        table: &str,
        columns: &str,
        filters: &[Filter],
    ) -> Result<Option<T>, StoreError> {
        let mut rows = self.select(caller, table, columns, filters).await?;

        if rows.len() > 1 {
            return Err(StoreError::MultipleRows);
        }

        Ok(rows.pop())
    }

    /// Insert a single row and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or when the store rejects the row.
    pub async fn insert_single<T, B>(
        &self,
        caller: &Caller,
        table: &str,
        row: &B,
        columns: &str,
    ) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self
            .insert_request(caller, table, row, columns)
            .header(ACCEPT, SINGLE_OBJECT);

        send(request).await
    }

    /// Insert a batch of rows and return them as stored.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or when the store rejects the batch.
    pub async fn insert_many<T, B>(
        &self,
        caller: &Caller,
        table: &str,
        rows: &[B],
        columns: &str,
    ) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        send(self.insert_request(caller, table, rows, columns)).await
    }

    /// Apply `changes` to the single row matching `filters` and return it.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure, or when the store rejects the
    /// change or finds no single row to update.
    pub async fn update_single<T, B>(
        &self,
        caller: &Caller,
        table: &str,
        filters: &[Filter],
        changes: &B,
        columns: &str,
    ) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        send(self.update_request(caller, table, filters, changes, columns)).await
    }

    fn request(&self, method: Method, caller: &Caller, table: &str) -> RequestBuilder {
        let authorization = caller
            .authorization()
            .map_or_else(|| format!("Bearer {}", self.api_key), ToOwned::to_owned);

        self.http
            .request(method, format!("{}/{table}", self.rest_url))
            .header(API_KEY_HEADER, &self.api_key)
            .header(AUTHORIZATION, authorization)
    }

    fn select_request(
        &self,
        caller: &Caller,
        table: &str,
        columns: &str,
        filters: &[Filter],
    ) -> RequestBuilder {
        self.request(Method::GET, caller, table)
            .query(&[("select", columns)])
            .query(&query_pairs(filters))
    }

    fn insert_request<B>(
        &self,
        caller: &Caller,
        table: &str,
        rows: &B,
        columns: &str,
    ) -> RequestBuilder
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, caller, table)
            .query(&[("select", columns)])
            .header(PREFER_HEADER, RETURN_REPRESENTATION)
            .json(rows)
    }

    fn update_request<B>(
        &self,
        caller: &Caller,
        table: &str,
        filters: &[Filter],
        changes: &B,
        columns: &str,
    ) -> RequestBuilder
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, caller, table)
            .query(&query_pairs(filters))
            .query(&[("select", columns)])
            .header(PREFER_HEADER, RETURN_REPRESENTATION)
            .header(ACCEPT, SINGLE_OBJECT)
            .json(changes)
    }
}

fn query_pairs(filters: &[Filter]) -> Vec<(&'static str, &str)> {
    filters
        .iter()
        .map(|filter| (filter.column, filter.expression.as_str()))
        .collect()
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, StoreError> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();

        debug!(status = status.as_u16(), "store request rejected");

        return Err(StoreError::from_response(status, &body));
    }

    Ok(response.json().await?)
}
