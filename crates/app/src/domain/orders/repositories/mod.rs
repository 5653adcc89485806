//! Order Repositories

mod lines;
mod orders;
mod receipts;

pub(crate) use lines::PgOrderLinesRepository;
pub(crate) use orders::PgOrdersRepository;
pub(crate) use receipts::PgReceiptsRepository;
