use crate::{
    models::{Subscription, Transaction, TransactionType},
    store::{ErrorPayload, Phase},
};

/// The outcome of the most recent subscribe or cancel.
///
/// It drives a one-shot notification and is cleared shortly after it is set.
#[derive(Debug, Clone, PartialEq)]
pub struct LastOperation {
    pub operation: TransactionType,
    pub result: Result<Transaction, ErrorPayload>,
}

impl LastOperation {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// The text of the notification for this outcome.
    pub fn message(&self) -> String {
        match (&self.result, self.operation) {
            (Ok(_), TransactionType::Subscription) => {
                "Subscription successful - notification sent".to_owned()
            }
            (Ok(_), TransactionType::Cancellation) => {
                "Cancellation successful - notification sent".to_owned()
            }
            (Err(error), _) => error.to_string(),
        }
    }
}

/// The client's subscriptions and transaction log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionState {
    /// Newest first, as sent by the backend.
    pub transactions: Vec<Transaction>,
    pub active_subscriptions: Vec<Subscription>,
    pub loading: bool,
    pub error: Option<ErrorPayload>,
    pub last_operation: Option<LastOperation>,
}

/// The transitions of [TransactionState].
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionEvent {
    FetchHistory(Phase<Vec<Transaction>>),
    FetchActiveSubscriptions(Phase<Vec<Subscription>>),
    Subscribe(Phase<Transaction>),
    Cancel(Phase<Transaction>),
    ClearError,
    ClearLastOperation,
}

impl TransactionState {
    pub fn reduce(&mut self, event: TransactionEvent) {
        match event {
            TransactionEvent::FetchHistory(Phase::Pending)
            | TransactionEvent::FetchActiveSubscriptions(Phase::Pending)
            | TransactionEvent::Subscribe(Phase::Pending)
            | TransactionEvent::Cancel(Phase::Pending) => {
                self.loading = true;
                self.error = None;
            }
            TransactionEvent::FetchHistory(Phase::Fulfilled(transactions)) => {
                self.loading = false;
                self.transactions = transactions;
            }
            TransactionEvent::FetchHistory(Phase::Rejected(error)) => {
                self.loading = false;
                self.error = Some(error);
                self.transactions = Vec::new();
            }
            TransactionEvent::FetchActiveSubscriptions(Phase::Fulfilled(subscriptions)) => {
                self.loading = false;
                self.active_subscriptions = subscriptions;
            }
            TransactionEvent::FetchActiveSubscriptions(Phase::Rejected(error)) => {
                self.loading = false;
                self.error = Some(error);
                self.active_subscriptions = Vec::new();
            }
            TransactionEvent::Subscribe(Phase::Fulfilled(transaction)) => {
                self.complete_operation(TransactionType::Subscription, Ok(transaction));
            }
            TransactionEvent::Subscribe(Phase::Rejected(error)) => {
                self.complete_operation(TransactionType::Subscription, Err(error));
            }
            TransactionEvent::Cancel(Phase::Fulfilled(transaction)) => {
                self.complete_operation(TransactionType::Cancellation, Ok(transaction));
            }
            TransactionEvent::Cancel(Phase::Rejected(error)) => {
                self.complete_operation(TransactionType::Cancellation, Err(error));
            }
            TransactionEvent::ClearError => self.error = None,
            TransactionEvent::ClearLastOperation => self.last_operation = None,
        }
    }

    fn complete_operation(
        &mut self,
        operation: TransactionType,
        result: Result<Transaction, ErrorPayload>,
    ) {
        self.loading = false;

        if let Err(error) = &result {
            self.error = Some(error.clone());
        }

        self.last_operation = Some(LastOperation { operation, result });
    }
}
