//! Client Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Client UUID
pub type ClientUuid = TypedUuid<ClientRecord>;

/// Client Record
///
/// A pet owner; the payer on portal orders and point-of-sale invoices.
#[derive(Debug, Clone)]
pub struct ClientRecord {
    pub uuid: ClientUuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,

    /// Default delivery address for portal orders.
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ClientRecord {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
