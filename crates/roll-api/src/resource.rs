//! Per-entity CRUD engine.
//!
//! Every entity screen owns one [`CrudResource`] pointed at its collection
//! path. The resource keeps the fetched record list, a loading flag, and an
//! initialized marker, and re-fetches the list after every successful
//! mutation so the table always reflects server state rather than a locally
//! patched copy.

use std::sync::Arc;

use serde_json::Value as Json;

use roll_core::FieldMap;
use roll_core::dates::convert_dates;
use roll_core::responses::ApiEnvelope;
use roll_core::value::to_field_map;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Sink for user-facing notices. Screens plug in their own; the default
/// routes to the log.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default notifier backed by `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Success notices shown after each mutation.
#[derive(Debug, Clone)]
pub struct Messages {
    pub created: String,
    pub updated: String,
    pub deleted: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            created: "新增成功".to_string(),
            updated: "更新成功".to_string(),
            deleted: "刪除成功".to_string(),
        }
    }
}

/// List state plus CRUD operations for one entity collection.
pub struct CrudResource {
    client: Arc<ApiClient>,
    path: String,
    date_fields: Vec<&'static str>,
    messages: Messages,
    notifier: Arc<dyn Notifier>,
    items: Vec<FieldMap>,
    loading: bool,
    initialized: bool,
}

impl CrudResource {
    #[must_use]
    pub fn new(client: Arc<ApiClient>, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
            date_fields: Vec::new(),
            messages: Messages::default(),
            notifier: Arc::new(TracingNotifier),
            items: Vec::new(),
            loading: false,
            initialized: false,
        }
    }

    /// Name the fields normalized to `YYYY-MM-DD` on every fetched record.
    #[must_use]
    pub fn with_date_fields(mut self, fields: &[&'static str]) -> Self {
        self.date_fields = fields.to_vec();
        self
    }

    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    #[must_use]
    pub fn items(&self) -> &[FieldMap] {
        &self.items
    }

    /// True while a request is in flight. Drives the table skeleton.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// True once the first fetch has completed successfully.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Fetch the full record list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] from the request or response parsing. The
    /// loading flag is cleared on every path, success or not.
    pub async fn fetch_items(&mut self) -> Result<(), ApiError> {
        self.loading = true;
        let result = self.refresh_list().await;
        self.loading = false;
        result.inspect_err(|err| self.report(err))
    }

    /// Create a record, then re-fetch the list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`]; validation failures arrive as
    /// [`ApiError::Validation`] with a display-ready message.
    pub async fn insert(&mut self, payload: &FieldMap) -> Result<(), ApiError> {
        self.loading = true;
        let result = self.insert_inner(payload).await;
        self.loading = false;
        match result {
            Ok(()) => {
                self.notifier.success(&self.messages.created);
                Ok(())
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Update a record and return the backend's copy of it, then re-fetch
    /// the list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingData`] when the backend acknowledges the
    /// update without returning the record.
    pub async fn update(&mut self, id: &str, payload: &FieldMap) -> Result<FieldMap, ApiError> {
        self.loading = true;
        let result = self.update_inner(id, payload).await;
        self.loading = false;
        match result {
            Ok(record) => {
                self.notifier.success(&self.messages.updated);
                Ok(record)
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Delete a record, then re-fetch the list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] from the request or the re-fetch.
    pub async fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        self.loading = true;
        let result = self.delete_inner(id).await;
        self.loading = false;
        match result {
            Ok(()) => {
                self.notifier.success(&self.messages.deleted);
                Ok(())
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Fetch a single record by id. `None` when the backend has no record
    /// under that id. The attendance screen looks a day up this way before
    /// deciding between insert and update.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] from the request or response parsing.
    pub async fn fetch_one(&self, id: &str) -> Result<Option<FieldMap>, ApiError> {
        let envelope: ApiEnvelope<Json> =
            self.client.get_json(&format!("{}/{id}", self.path)).await?;
        match envelope.data {
            None | Some(Json::Null) => Ok(None),
            Some(mut data) => {
                convert_dates(&mut data, &self.date_fields);
                Ok(Some(to_field_map(&data)?))
            }
        }
    }

    async fn refresh_list(&mut self) -> Result<(), ApiError> {
        let envelope: ApiEnvelope<Json> = self.client.get_json(&self.path).await?;
        let mut data = envelope.data.unwrap_or_else(|| Json::Array(Vec::new()));
        convert_dates(&mut data, &self.date_fields);
        let Json::Array(entries) = data else {
            return Err(ApiError::Parse(serde::de::Error::custom(
                "list response is not an array",
            )));
        };
        self.items = entries
            .iter()
            .map(to_field_map)
            .collect::<Result<_, _>>()?;
        self.initialized = true;
        Ok(())
    }

    async fn insert_inner(&mut self, payload: &FieldMap) -> Result<(), ApiError> {
        let _: ApiEnvelope<Json> = self
            .client
            .post_json(&self.path, &map_to_json(payload))
            .await?;
        self.refresh_list().await
    }

    async fn update_inner(&mut self, id: &str, payload: &FieldMap) -> Result<FieldMap, ApiError> {
        let envelope: ApiEnvelope<Json> = self
            .client
            .put_json(&format!("{}/{id}", self.path), &map_to_json(payload))
            .await?;
        let mut data = envelope.data.ok_or(ApiError::MissingData)?;
        if data.is_null() {
            return Err(ApiError::MissingData);
        }
        convert_dates(&mut data, &self.date_fields);
        let record = to_field_map(&data)?;
        self.refresh_list().await?;
        Ok(record)
    }

    async fn delete_inner(&mut self, id: &str) -> Result<(), ApiError> {
        let _: ApiEnvelope<Json> = self
            .client
            .delete_json(&format!("{}/{id}", self.path))
            .await?;
        self.refresh_list().await
    }

    /// Surface an error notice. 401s stay quiet: the session layer handles
    /// them by routing back to login.
    fn report(&self, err: &ApiError) {
        if !err.is_unauthorized() {
            self.notifier.error(&err.to_string());
        }
    }
}

/// Serialize a field map as a JSON object body.
fn map_to_json(fields: &FieldMap) -> Json {
    Json::Object(
        fields
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect(),
    )
}
