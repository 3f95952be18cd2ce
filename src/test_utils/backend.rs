//! An in-memory stand-in for the funds REST API.
//!
//! The mock applies the same rules as the real backend (minimum amounts,
//! duplicate subscriptions, cancelling without a subscription) so that tests
//! can exercise both the happy and the unhappy paths over real HTTP.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, Query, Request, State},
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::{
    AppState,
    api::ApiClient,
    config::DashboardConfig,
    models::{
        Client, ClientUpdate, Fund, FundCategory, NotificationChannel, Subscription,
        SubscriptionStatus, Transaction, TransactionStatus, TransactionType,
    },
};

const TEST_TIMESTAMP: &str = "2025-03-10T14:30:00";

/// Serve `router` on an ephemeral local port and return its base URL.
pub(crate) async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind test listener");
    let address = listener
        .local_addr()
        .expect("Could not get test listener address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server failed");
    });

    format!("http://{address}")
}

/// A request received by the mock backend.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    /// The path and query string, e.g. "/transacciones/history?limit=10".
    pub uri: String,
    /// The request body, if it was JSON.
    pub body: Option<Value>,
}

#[derive(Debug)]
struct BackendData {
    client: Client,
    funds: Vec<Fund>,
    subscriptions: Vec<Subscription>,
    /// Newest first.
    transactions: Vec<Transaction>,
    requests: Vec<RecordedRequest>,
    failure: Option<(StatusCode, Option<Value>)>,
    /// Path prefixes and how long to wait before answering requests under them.
    delays: Vec<(String, Duration)>,
    next_id: u64,
}

type SharedData = Arc<Mutex<BackendData>>;

#[derive(Debug, Clone)]
pub(crate) struct MockBackend {
    data: SharedData,
    base_url: String,
}

impl MockBackend {
    /// Start a backend for the default client with a balance of $500,000 COP.
    pub(crate) async fn start() -> Self {
        Self::start_with_balance(500_000.0).await
    }

    pub(crate) async fn start_with_balance(balance: f64) -> Self {
        let data = Arc::new(Mutex::new(BackendData {
            client: Client {
                client_id: "C123456".to_owned(),
                balance,
                preferred_notification: NotificationChannel::Email,
                email: Some("investor@example.com".to_owned()),
                phone: Some("+573001234567".to_owned()),
            },
            funds: sample_funds(),
            subscriptions: Vec::new(),
            transactions: Vec::new(),
            requests: Vec::new(),
            failure: None,
            delays: Vec::new(),
            next_id: 1,
        }));

        let router = Router::new()
            .route("/clientes/{client_id}", get(get_client).patch(patch_client))
            .route("/fondos", get(get_funds))
            .route("/fondos/{fund_id}", get(get_fund))
            .route(
                "/transacciones/subscriptions",
                get(get_subscriptions).post(post_subscription),
            )
            .route(
                "/transacciones/subscriptions/{fund_id}",
                delete(delete_subscription),
            )
            .route("/transacciones/history", get(get_history))
            .layer(middleware::from_fn_with_state(data.clone(), record_request))
            .with_state(data.clone());

        let base_url = serve(router).await;

        Self { data, base_url }
    }

    pub(crate) fn api_client(&self) -> ApiClient {
        ApiClient::new(&self.base_url).expect("Could not create API client")
    }

    /// Application state wired to this backend.
    ///
    /// Notifications are cleared after 50 ms so tests do not have to wait long.
    pub(crate) fn app_state(&self) -> AppState {
        AppState::new(
            self.api_client(),
            DashboardConfig {
                notification_delay: Duration::from_millis(50),
                ..Default::default()
            },
        )
    }

    pub(crate) fn client(&self) -> Client {
        self.lock().client.clone()
    }

    pub(crate) fn funds(&self) -> Vec<Fund> {
        self.lock().funds.clone()
    }

    pub(crate) fn transactions(&self) -> Vec<Transaction> {
        self.lock().transactions.clone()
    }

    pub(crate) fn active_subscriptions(&self) -> Vec<Subscription> {
        active_subscriptions(&self.lock())
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub(crate) fn request_uris(&self) -> Vec<String> {
        self.lock()
            .requests
            .iter()
            .map(|request| request.uri.clone())
            .collect()
    }

    pub(crate) fn last_request(&self) -> Option<RecordedRequest> {
        self.lock().requests.last().cloned()
    }

    pub(crate) fn clear_requests(&self) {
        self.lock().requests.clear();
    }

    /// Answer every following request with `status` and `body`.
    pub(crate) fn fail_with(&self, status: StatusCode, body: Option<Value>) {
        self.lock().failure = Some((status, body));
    }

    /// Wait `delay` before answering each following request whose path
    /// starts with `path_prefix`.
    pub(crate) fn delay_responses(&self, path_prefix: &str, delay: Duration) {
        self.lock().delays.push((path_prefix.to_owned(), delay));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BackendData> {
        self.data.lock().expect("Could not lock mock backend data")
    }
}

fn sample_funds() -> Vec<Fund> {
    [
        ("1", "FPV_EL CLIENTE_RECAUDADORA", FundCategory::Fpv, 75_000.0),
        ("2", "FPV_EL CLIENTE_ECOPETROL", FundCategory::Fpv, 125_000.0),
        ("3", "DEUDAPRIVADA", FundCategory::Fic, 50_000.0),
        ("4", "FDO-ACCIONES", FundCategory::Fic, 250_000.0),
        ("5", "FPV_EL CLIENTE_DINAMICA", FundCategory::Fpv, 100_000.0),
    ]
    .into_iter()
    .map(|(fund_id, name, category, minimum_amount)| Fund {
        fund_id: fund_id.to_owned(),
        name: name.to_owned(),
        category,
        minimum_amount,
    })
    .collect()
}

fn active_subscriptions(data: &BackendData) -> Vec<Subscription> {
    data.subscriptions
        .iter()
        .filter(|subscription| subscription.status == SubscriptionStatus::Active)
        .cloned()
        .collect()
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn record_request(State(data): State<SharedData>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    let (failure, delay) = {
        let mut data = data.lock().expect("Could not lock mock backend data");
        data.requests.push(RecordedRequest {
            method: parts.method.clone(),
            uri: parts.uri.to_string(),
            body: serde_json::from_slice(&bytes).ok(),
        });
        let delay = data
            .delays
            .iter()
            .find(|(prefix, _)| parts.uri.path().starts_with(prefix.as_str()))
            .map(|(_, delay)| *delay);

        (data.failure.clone(), delay)
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    match failure {
        Some((status, Some(body))) => (status, Json(body)).into_response(),
        Some((status, None)) => status.into_response(),
        None => next.run(Request::from_parts(parts, Body::from(bytes))).await,
    }
}

async fn get_client(State(data): State<SharedData>, Path(client_id): Path<String>) -> Response {
    let data = data.lock().expect("Could not lock mock backend data");

    if data.client.client_id != client_id {
        return detail(StatusCode::NOT_FOUND, "Cliente no encontrado");
    }

    Json(data.client.clone()).into_response()
}

async fn patch_client(
    State(data): State<SharedData>,
    Path(client_id): Path<String>,
    Json(update): Json<ClientUpdate>,
) -> Response {
    let mut data = data.lock().expect("Could not lock mock backend data");

    if data.client.client_id != client_id {
        return detail(
            StatusCode::NOT_FOUND,
            "Cliente no encontrado o error al actualizar",
        );
    }

    data.client.merge(update.clone());

    Json(update).into_response()
}

async fn get_funds(State(data): State<SharedData>) -> Response {
    let data = data.lock().expect("Could not lock mock backend data");

    Json(data.funds.clone()).into_response()
}

async fn get_fund(State(data): State<SharedData>, Path(fund_id): Path<String>) -> Response {
    let data = data.lock().expect("Could not lock mock backend data");

    match data.funds.iter().find(|fund| fund.fund_id == fund_id) {
        Some(fund) => Json(fund.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Fondo no encontrado"),
    }
}

async fn get_subscriptions(State(data): State<SharedData>) -> Response {
    let data = data.lock().expect("Could not lock mock backend data");

    Json(active_subscriptions(&data)).into_response()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubscriptionRequest {
    fund_id: String,
}

async fn post_subscription(
    State(data): State<SharedData>,
    Json(request): Json<SubscriptionRequest>,
) -> Response {
    let mut guard = data.lock().expect("Could not lock mock backend data");
    let data = &mut *guard;

    let Some(fund) = data
        .funds
        .iter()
        .find(|fund| fund.fund_id == request.fund_id)
        .cloned()
    else {
        return detail(StatusCode::BAD_REQUEST, "Cliente o fondo no encontrado");
    };

    if data.client.balance < fund.minimum_amount {
        return detail(
            StatusCode::BAD_REQUEST,
            &format!(
                "No tiene saldo disponible para vincularse al fondo {}",
                fund.name
            ),
        );
    }

    if active_subscriptions(data)
        .iter()
        .any(|subscription| subscription.fund_id == fund.fund_id)
    {
        return detail(StatusCode::BAD_REQUEST, "Ya está suscrito a este fondo");
    }

    let id = data.next_id;
    data.next_id += 1;
    data.client.balance -= fund.minimum_amount;
    data.subscriptions
        .retain(|subscription| subscription.fund_id != fund.fund_id);
    data.subscriptions.push(Subscription {
        subscription_id: format!("S{id}"),
        client_id: Some(data.client.client_id.clone()),
        fund_id: fund.fund_id.clone(),
        fund_name: Some(fund.name.clone()),
        amount_subscribed: fund.minimum_amount,
        status: SubscriptionStatus::Active,
        subscription_date: TEST_TIMESTAMP.to_owned(),
    });

    let transaction = Transaction {
        transaction_id: format!("T{id}"),
        client_id: Some(data.client.client_id.clone()),
        fund_id: fund.fund_id,
        fund_name: Some(fund.name),
        transaction_type: TransactionType::Subscription,
        amount: fund.minimum_amount,
        transaction_date: TEST_TIMESTAMP.to_owned(),
        status: Some(TransactionStatus::Completed),
    };
    data.transactions.insert(0, transaction.clone());

    Json(transaction).into_response()
}

async fn delete_subscription(
    State(data): State<SharedData>,
    Path(fund_id): Path<String>,
) -> Response {
    let mut guard = data.lock().expect("Could not lock mock backend data");
    let data = &mut *guard;

    let Some(subscription) = data.subscriptions.iter_mut().find(|subscription| {
        subscription.fund_id == fund_id && subscription.status == SubscriptionStatus::Active
    }) else {
        return detail(StatusCode::BAD_REQUEST, "No está suscrito a este fondo");
    };

    subscription.status = SubscriptionStatus::Cancelled;
    let amount = subscription.amount_subscribed;
    let fund_name = subscription.fund_name.clone();

    let id = data.next_id;
    data.next_id += 1;
    data.client.balance += amount;

    let transaction = Transaction {
        transaction_id: format!("T{id}"),
        client_id: Some(data.client.client_id.clone()),
        fund_id,
        fund_name,
        transaction_type: TransactionType::Cancellation,
        amount,
        transaction_date: TEST_TIMESTAMP.to_owned(),
        status: Some(TransactionStatus::Completed),
    };
    data.transactions.insert(0, transaction.clone());

    Json(transaction).into_response()
}

#[derive(Deserialize)]
struct HistoryQuery {
    limit: Option<usize>,
}

async fn get_history(State(data): State<SharedData>, Query(query): Query<HistoryQuery>) -> Response {
    let data = data.lock().expect("Could not lock mock backend data");
    let limit = query.limit.unwrap_or(10);

    let transactions: Vec<Transaction> = data.transactions.iter().take(limit).cloned().collect();

    Json(transactions).into_response()
}
