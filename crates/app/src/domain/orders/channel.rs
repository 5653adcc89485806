//! Sales Channels

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a sale originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesChannel {
    /// Client self-service checkout with delivery.
    Portal,

    /// Counter sale rung up by clinic staff.
    PointOfSale,
}

impl SalesChannel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portal => "portal",
            Self::PointOfSale => "point_of_sale",
        }
    }
}

impl Display for SalesChannel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown sales channel: {0}")]
pub struct UnknownSalesChannel(pub String);

impl FromStr for SalesChannel {
    type Err = UnknownSalesChannel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "portal" => Ok(Self::Portal),
            "point_of_sale" => Ok(Self::PointOfSale),
            other => Err(UnknownSalesChannel(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_round_trips_through_str() {
        for channel in [SalesChannel::Portal, SalesChannel::PointOfSale] {
            assert_eq!(channel.as_str().parse::<SalesChannel>().ok(), Some(channel));
        }

        assert!("web".parse::<SalesChannel>().is_err());
    }
}
