//! The records exchanged with the funds API.
//!
//! These types mirror the JSON documents of the backend, which uses camelCase
//! field names. The dashboard never validates them: balances, minimum amounts
//! and subscription state are the backend's business.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The channel the backend uses to notify a client about their operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    /// Notify by email.
    #[default]
    Email,
    /// Notify by text message.
    Sms,
}

impl NotificationChannel {
    /// The value used on the wire and in HTML forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationChannel::Email => "email",
            NotificationChannel::Sms => "sms",
        }
    }

    /// The human readable name of the channel.
    pub fn label(&self) -> &'static str {
        match self {
            NotificationChannel::Email => "Email",
            NotificationChannel::Sms => "SMS",
        }
    }
}

impl Display for NotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An investor and their available balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// The backend's identifier for the client, e.g. "C123456".
    pub client_id: String,

    /// The balance available for new subscriptions, in COP.
    pub balance: f64,

    /// Where the backend sends confirmation messages.
    #[serde(default)]
    pub preferred_notification: NotificationChannel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Client {
    /// Overwrite the fields that are present in `update`.
    pub fn merge(&mut self, update: ClientUpdate) {
        if let Some(channel) = update.preferred_notification {
            self.preferred_notification = channel;
        }

        if let Some(email) = update.email {
            self.email = Some(email);
        }

        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
    }

    /// The contact detail for the preferred notification channel, if the client has one.
    pub fn contact_detail(&self) -> Option<&str> {
        match self.preferred_notification {
            NotificationChannel::Email => self.email.as_deref(),
            NotificationChannel::Sms => self.phone.as_deref(),
        }
    }
}

/// A partial update of a client's preferences.
///
/// The backend answers a preferences update with the same shape, containing
/// only the fields that changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_notification: Option<NotificationChannel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// The kind of fund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FundCategory {
    /// Voluntary pension fund.
    Fpv,
    /// Collective investment fund.
    Fic,
}

impl Display for FundCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FundCategory::Fpv => write!(f, "FPV"),
            FundCategory::Fic => write!(f, "FIC"),
        }
    }
}

/// An investable product from the fund catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fund {
    pub fund_id: String,
    pub name: String,
    pub category: FundCategory,
    /// The amount debited from the client's balance when subscribing, in COP.
    pub minimum_amount: f64,
}

impl Fund {
    /// Whether a client with `balance` can afford the minimum amount.
    ///
    /// This only drives the state of the subscribe button, the backend makes
    /// the actual decision.
    pub fn is_affordable(&self, balance: f64) -> bool {
        balance >= self.minimum_amount
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
}

impl Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionStatus::Active => write!(f, "ACTIVE"),
            SubscriptionStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// A client's stake in a fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub subscription_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    pub fund_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fund_name: Option<String>,

    pub amount_subscribed: f64,

    pub status: SubscriptionStatus,

    /// An ISO 8601 date-time string.
    pub subscription_date: String,
}

impl Subscription {
    /// The fund name, or a placeholder built from the fund ID when the backend
    /// did not include the name.
    pub fn display_name(&self) -> String {
        display_fund_name(self.fund_name.as_deref(), &self.fund_id)
    }
}

/// The kind of event a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Subscription,
    Cancellation,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Subscription => "Subscription",
            TransactionType::Cancellation => "Cancellation",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Subscription => write!(f, "SUBSCRIPTION"),
            TransactionType::Cancellation => write!(f, "CANCELLATION"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Completed,
    Failed,
}

/// An entry in the client's transaction log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    pub fund_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fund_name: Option<String>,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    pub amount: f64,

    /// An ISO 8601 date-time string.
    pub transaction_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
}

impl Transaction {
    /// The fund name, or a placeholder built from the fund ID when the backend
    /// did not include the name.
    pub fn display_name(&self) -> String {
        display_fund_name(self.fund_name.as_deref(), &self.fund_id)
    }
}

fn display_fund_name(fund_name: Option<&str>, fund_id: &str) -> String {
    match fund_name {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => format!("Fund ID: {fund_id}"),
    }
}
