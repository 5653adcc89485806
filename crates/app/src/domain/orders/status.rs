//! Order Status
//!
//! Fulfilment states and the transitions staff may apply to them.
//!
//! ```text
//! pending ──► confirmed ──► preparing ──► delivered
//!    │            │                           ▲
//!    └────────────┴──► cancelled ◄── paid ────┘
//! ```

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Persisted order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Awaiting review (portal orders start here by default).
    Pending,
    Confirmed,
    Preparing,
    Delivered,
    Cancelled,

    /// Settled at the counter (point-of-sale default).
    Paid,
}

impl OrderStatus {
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Confirmed,
        Self::Preparing,
        Self::Delivered,
        Self::Cancelled,
        Self::Paid,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Paid => "paid",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed | Self::Cancelled)
                | (Self::Confirmed, Self::Preparing | Self::Cancelled)
                | (Self::Preparing | Self::Paid, Self::Delivered)
                | (Self::Paid, Self::Cancelled)
        )
    }

    /// Resolve a requested status against the transition table.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTransition`] when the table has no edge from `self` to the
    /// resolved target.
    pub fn transition(self, requested: RequestedStatus) -> Result<Self, InvalidTransition> {
        let next = requested.resolve();

        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| UnknownOrderStatus(value.to_owned()))
    }
}

/// A status as staff may request it.
///
/// `Shipped` is accepted for convenience and always lands as `Delivered`; it is never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestedStatus {
    Pending,
    Confirmed,
    Preparing,
    Shipped,
    Delivered,
    Cancelled,
    Paid,
}

impl RequestedStatus {
    #[must_use]
    pub const fn resolve(self) -> OrderStatus {
        match self {
            Self::Pending => OrderStatus::Pending,
            Self::Confirmed => OrderStatus::Confirmed,
            Self::Preparing => OrderStatus::Preparing,
            Self::Shipped | Self::Delivered => OrderStatus::Delivered,
            Self::Cancelled => OrderStatus::Cancelled,
            Self::Paid => OrderStatus::Paid,
        }
    }
}

impl From<OrderStatus> for RequestedStatus {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => Self::Pending,
            OrderStatus::Confirmed => Self::Confirmed,
            OrderStatus::Preparing => Self::Preparing,
            OrderStatus::Delivered => Self::Delivered,
            OrderStatus::Cancelled => Self::Cancelled,
            OrderStatus::Paid => Self::Paid,
        }
    }
}

impl FromStr for RequestedStatus {
    type Err = UnknownOrderStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "shipped" {
            return Ok(Self::Shipped);
        }

        value.parse::<OrderStatus>().map(Self::from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move order from {from} to {to}")]
pub struct InvalidTransition {
    pub from: OrderStatus,
    pub to: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_delivered() {
        let status = OrderStatus::Pending
            .transition(RequestedStatus::Confirmed)
            .and_then(|s| s.transition(RequestedStatus::Preparing))
            .and_then(|s| s.transition(RequestedStatus::Delivered));

        assert_eq!(status, Ok(OrderStatus::Delivered));
    }

    #[test]
    fn shipped_is_rewritten_to_delivered() {
        assert_eq!(RequestedStatus::Shipped.resolve(), OrderStatus::Delivered);
        assert_eq!(
            OrderStatus::Preparing.transition(RequestedStatus::Shipped),
            Ok(OrderStatus::Delivered)
        );
        assert_eq!(
            "shipped".parse::<RequestedStatus>().ok(),
            Some(RequestedStatus::Shipped)
        );
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn cancellation_only_before_preparing_or_after_payment() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Confirmed.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Paid.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Preparing.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn terminal_states_have_no_exits() {
        for from in OrderStatus::ALL.into_iter().filter(|s| s.is_terminal()) {
            for to in OrderStatus::ALL {
                assert!(
                    !from.can_transition_to(to),
                    "{from} must not transition to {to}"
                );
            }
        }
    }

    #[test]
    fn backwards_move_is_rejected() {
        assert_eq!(
            OrderStatus::Delivered.transition(RequestedStatus::Confirmed),
            Err(InvalidTransition {
                from: OrderStatus::Delivered,
                to: OrderStatus::Confirmed,
            })
        );
    }

    #[test]
    fn self_transition_is_rejected() {
        assert!(
            OrderStatus::Pending
                .transition(RequestedStatus::Pending)
                .is_err()
        );
    }
}
