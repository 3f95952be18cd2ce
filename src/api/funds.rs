//! Endpoints under `/fondos`.

use crate::{
    api::{ApiClient, ApiError},
    models::Fund,
};

/// Get the full fund catalogue.
pub async fn get_all_funds(api: &ApiClient) -> Result<Vec<Fund>, ApiError> {
    api.get(&["fondos"]).await
}

/// Get a single fund.
pub async fn get_fund_details(api: &ApiClient, fund_id: &str) -> Result<Fund, ApiError> {
    api.get(&["fondos", fund_id]).await
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::{api::ApiError, test_utils::MockBackend};

    use super::{get_all_funds, get_fund_details};

    #[tokio::test]
    async fn get_all_funds_returns_catalogue() {
        let backend = MockBackend::start().await;

        let funds = get_all_funds(&backend.api_client()).await.unwrap();

        assert_eq!(funds, backend.funds());
        assert_eq!(backend.request_uris(), vec!["/fondos".to_owned()]);
    }

    #[tokio::test]
    async fn get_fund_details_returns_fund() {
        let backend = MockBackend::start().await;
        let want = backend.funds()[2].clone();

        let fund = get_fund_details(&backend.api_client(), &want.fund_id)
            .await
            .unwrap();

        assert_eq!(fund, want);
        assert_eq!(
            backend.request_uris(),
            vec![format!("/fondos/{}", want.fund_id)]
        );
    }

    #[tokio::test]
    async fn get_fund_details_propagates_not_found() {
        let backend = MockBackend::start().await;

        let error = get_fund_details(&backend.api_client(), "42")
            .await
            .unwrap_err();

        assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(error.detail(), Some("Fondo no encontrado"));
    }

    #[tokio::test]
    async fn get_fund_details_keeps_id_in_one_segment() {
        let backend = MockBackend::start().await;

        let error = get_fund_details(&backend.api_client(), "../clientes/C123456")
            .await
            .unwrap_err();

        assert_eq!(
            backend.request_uris(),
            vec!["/fondos/..%2Fclientes%2FC123456".to_owned()]
        );
        assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(error.detail(), Some("Fondo no encontrado"));
    }

    #[tokio::test]
    async fn get_all_funds_propagates_transport_errors() {
        let api = crate::api::ApiClient::new("http://127.0.0.1:1").unwrap();

        let error = get_all_funds(&api).await.unwrap_err();

        assert!(matches!(error, ApiError::Http(_)), "got {error:?}");
    }
}
