//! Client Data

use crate::domain::clients::records::ClientUuid;

/// New Client Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub uuid: ClientUuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
