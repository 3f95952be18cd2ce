//! Actions that call the funds API and record the outcome in the store.
//!
//! Every action applies the pending transition, performs one request, then
//! applies the fulfilled or rejected transition. The store lock is released
//! while the request is in flight, so concurrent actions interleave and the
//! last one to resolve wins.

use axum::extract::FromRef;
use reqwest::StatusCode;

use crate::{
    AppState, Error,
    api::{ApiClient, ApiError, clients, funds, transactions},
    config::DashboardConfig,
    models::{
        Client, ClientUpdate, Fund, NotificationChannel, Subscription, Transaction,
        TransactionType,
    },
    store::{
        CANCEL_ERROR, ClientEvent, ErrorPayload, FundEvent, LastOperation, Phase,
        SUBSCRIBE_ERROR, SharedStore, Store, TransactionEvent, UNKNOWN_ERROR,
    },
};

/// Runs actions against the funds API and the shared store.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    pub api_client: ApiClient,
    pub store: SharedStore,
    pub config: DashboardConfig,
}

impl FromRef<AppState> for Dispatcher {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
            store: state.store.clone(),
            config: state.config.clone(),
        }
    }
}

impl Dispatcher {
    /// A copy of the current state of the store.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the store lock is poisoned.
    pub fn snapshot(&self) -> Result<Store, Error> {
        let store = self
            .store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        Ok(store.clone())
    }

    pub async fn fetch_client_info(&self) -> Result<Client, Error> {
        self.apply(|store| store.client.reduce(ClientEvent::FetchInfo(Phase::Pending)))?;

        let result = clients::get_client_info(&self.api_client, Some(&self.config.client_id))
            .await
            .map_err(|error| normalize(&error, UNKNOWN_ERROR, "fetch client info"));

        self.apply(|store| {
            store
                .client
                .reduce(ClientEvent::FetchInfo(result.clone().into()))
        })?;

        result.map_err(Error::ApiRequestFailed)
    }

    /// Change the channel the backend uses to notify the client.
    ///
    /// Returns the fields the backend updated.
    pub async fn update_preferences(
        &self,
        channel: NotificationChannel,
    ) -> Result<ClientUpdate, Error> {
        self.apply(|store| {
            store
                .client
                .reduce(ClientEvent::UpdatePreferences(Phase::Pending))
        })?;

        let update = ClientUpdate {
            preferred_notification: Some(channel),
            ..Default::default()
        };
        let result =
            clients::update_client_preferences(&self.api_client, &self.config.client_id, &update)
                .await
                .map_err(|error| normalize(&error, UNKNOWN_ERROR, "update preferences"));

        self.apply(|store| {
            store
                .client
                .reduce(ClientEvent::UpdatePreferences(result.clone().into()))
        })?;

        result.map_err(Error::ApiRequestFailed)
    }

    pub async fn fetch_all_funds(&self) -> Result<Vec<Fund>, Error> {
        self.apply(|store| store.funds.reduce(FundEvent::FetchAll(Phase::Pending)))?;

        let result = funds::get_all_funds(&self.api_client)
            .await
            .map_err(|error| normalize(&error, UNKNOWN_ERROR, "fetch funds"));

        self.apply(|store| store.funds.reduce(FundEvent::FetchAll(result.clone().into())))?;

        result.map_err(Error::ApiRequestFailed)
    }

    /// Fetch a single fund and make it the current fund.
    ///
    /// # Errors
    /// Returns [Error::FundNotFound] if the backend does not know the fund,
    /// and [Error::ApiRequestFailed] for any other failed request.
    pub async fn fetch_fund_details(&self, fund_id: &str) -> Result<Fund, Error> {
        self.apply(|store| store.funds.reduce(FundEvent::FetchDetails(Phase::Pending)))?;

        let result = funds::get_fund_details(&self.api_client, fund_id).await;
        let not_found = matches!(
            &result,
            Err(error) if error.status() == Some(StatusCode::NOT_FOUND)
        );
        let result =
            result.map_err(|error| normalize(&error, UNKNOWN_ERROR, "fetch fund details"));

        self.apply(|store| {
            store
                .funds
                .reduce(FundEvent::FetchDetails(result.clone().into()))
        })?;

        result.map_err(|payload| {
            if not_found {
                Error::FundNotFound(fund_id.to_owned())
            } else {
                Error::ApiRequestFailed(payload)
            }
        })
    }

    pub async fn fetch_transaction_history(&self) -> Result<Vec<Transaction>, Error> {
        self.apply(|store| {
            store
                .transactions
                .reduce(TransactionEvent::FetchHistory(Phase::Pending))
        })?;

        let result = transactions::get_transaction_history(
            &self.api_client,
            Some(self.config.history_limit),
        )
        .await
        .map_err(|error| normalize(&error, UNKNOWN_ERROR, "fetch transaction history"));

        self.apply(|store| {
            store
                .transactions
                .reduce(TransactionEvent::FetchHistory(result.clone().into()))
        })?;

        result.map_err(Error::ApiRequestFailed)
    }

    pub async fn fetch_active_subscriptions(&self) -> Result<Vec<Subscription>, Error> {
        self.apply(|store| {
            store
                .transactions
                .reduce(TransactionEvent::FetchActiveSubscriptions(Phase::Pending))
        })?;

        let result = transactions::get_active_subscriptions(&self.api_client)
            .await
            .map_err(|error| normalize(&error, UNKNOWN_ERROR, "fetch active subscriptions"));

        self.apply(|store| {
            store
                .transactions
                .reduce(TransactionEvent::FetchActiveSubscriptions(
                    result.clone().into(),
                ))
        })?;

        result.map_err(Error::ApiRequestFailed)
    }

    /// Subscribe the client to `fund_id`.
    ///
    /// The outcome is recorded as the store's last operation and cleared after
    /// the configured notification delay. A rejected subscription is not an
    /// [Error]: it is part of the returned [LastOperation].
    pub async fn subscribe_to_fund(&self, fund_id: &str) -> Result<LastOperation, Error> {
        self.apply(|store| {
            store
                .transactions
                .reduce(TransactionEvent::Subscribe(Phase::Pending))
        })?;

        let result = transactions::subscribe_to_fund(&self.api_client, fund_id)
            .await
            .map_err(|error| normalize(&error, SUBSCRIBE_ERROR, "subscribe to fund"));

        self.apply(|store| {
            store
                .transactions
                .reduce(TransactionEvent::Subscribe(result.clone().into()))
        })?;
        self.schedule_clear_last_operation();

        Ok(LastOperation {
            operation: TransactionType::Subscription,
            result,
        })
    }

    /// Cancel the client's subscription to `fund_id`.
    ///
    /// See [Dispatcher::subscribe_to_fund] for how the outcome is recorded.
    pub async fn cancel_subscription(&self, fund_id: &str) -> Result<LastOperation, Error> {
        self.apply(|store| {
            store
                .transactions
                .reduce(TransactionEvent::Cancel(Phase::Pending))
        })?;

        let result = transactions::cancel_subscription(&self.api_client, fund_id)
            .await
            .map_err(|error| normalize(&error, CANCEL_ERROR, "cancel subscription"));

        self.apply(|store| {
            store
                .transactions
                .reduce(TransactionEvent::Cancel(result.clone().into()))
        })?;
        self.schedule_clear_last_operation();

        Ok(LastOperation {
            operation: TransactionType::Cancellation,
            result,
        })
    }

    /// Clear the error of the transactions container, e.g. when the user
    /// dismisses a notification.
    pub fn clear_error(&self) -> Result<(), Error> {
        self.apply(|store| store.transactions.reduce(TransactionEvent::ClearError))
    }

    /// Re-read everything a subscribe or cancel changes: the client's
    /// balance, the active subscriptions and the transaction history.
    ///
    /// The reads run concurrently. Failed reads are recorded in the store.
    ///
    /// # Errors
    /// Only returns [Error::StoreLockError].
    pub async fn refresh_after_mutation(&self) -> Result<(), Error> {
        let (client, subscriptions, history) = tokio::join!(
            self.fetch_client_info(),
            self.fetch_active_subscriptions(),
            self.fetch_transaction_history(),
        );

        keep_lock_error(client)?;
        keep_lock_error(subscriptions)?;
        keep_lock_error(history)
    }

    /// Run the four reads the dashboard needs concurrently.
    ///
    /// # Errors
    /// Only returns [Error::StoreLockError], failed reads are recorded in the store.
    pub async fn load_dashboard(&self) -> Result<(), Error> {
        let (client, funds, subscriptions, history) = tokio::join!(
            self.fetch_client_info(),
            self.fetch_all_funds(),
            self.fetch_active_subscriptions(),
            self.fetch_transaction_history(),
        );

        keep_lock_error(client)?;
        keep_lock_error(funds)?;
        keep_lock_error(subscriptions)?;
        keep_lock_error(history)
    }

    fn schedule_clear_last_operation(&self) {
        let store = self.store.clone();
        let delay = self.config.notification_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            match store.lock() {
                Ok(mut store) => store
                    .transactions
                    .reduce(TransactionEvent::ClearLastOperation),
                Err(error) => tracing::error!("could not clear the last operation: {error}"),
            }
        });
    }

    fn apply(&self, reduce: impl FnOnce(&mut Store)) -> Result<(), Error> {
        let mut store = self
            .store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        reduce(&mut store);

        Ok(())
    }
}

fn normalize(error: &ApiError, fallback: &str, action: &str) -> ErrorPayload {
    tracing::error!("could not {action}: {error}");

    ErrorPayload::from_api_error(error, fallback)
}

/// Failed reads are already recorded in the store, only a poisoned lock is passed on.
fn keep_lock_error<T>(result: Result<T, Error>) -> Result<(), Error> {
    match result {
        Err(Error::StoreLockError) => Err(Error::StoreLockError),
        _ => Ok(()),
    }
}
