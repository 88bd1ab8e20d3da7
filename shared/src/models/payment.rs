//! Payment Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Accepted payment methods
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum PaymentMethod {
    Cash,
    Card,
    #[serde(rename = "QR")]
    #[cfg_attr(feature = "db", sqlx(rename = "QR"))]
    Qr,
    #[serde(rename = "E-wallet")]
    #[cfg_attr(feature = "db", sqlx(rename = "E-wallet"))]
    EWallet,
}

impl PaymentMethod {
    /// Fixed method set, in menu order.
    pub const ALL: [PaymentMethod; 4] = [Self::Cash, Self::Card, Self::Qr, Self::EWallet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Card => "Card",
            Self::Qr => "QR",
            Self::EWallet => "E-wallet",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment entity (append-only; there is no update or delete)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub method: PaymentMethod,
    pub paid_amount: f64,
    /// Payment timestamp (epoch millis)
    pub paid_at: i64,
}
