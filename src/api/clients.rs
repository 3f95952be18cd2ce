//! Endpoints under `/clientes`.

use crate::{
    api::{ApiClient, ApiError},
    models::{Client, ClientUpdate},
};

/// The client shown when no other client ID is given.
pub const DEFAULT_CLIENT_ID: &str = "C123456";

/// Get the client with `client_id`, or [DEFAULT_CLIENT_ID] if `None`.
pub async fn get_client_info(api: &ApiClient, client_id: Option<&str>) -> Result<Client, ApiError> {
    let client_id = client_id.unwrap_or(DEFAULT_CLIENT_ID);

    api.get(&["clientes", client_id]).await
}

/// Update the preferences of the client with `client_id`.
///
/// Returns the fields the backend updated.
pub async fn update_client_preferences(
    api: &ApiClient,
    client_id: &str,
    update: &ClientUpdate,
) -> Result<ClientUpdate, ApiError> {
    api.patch(&["clientes", client_id], update).await
}
