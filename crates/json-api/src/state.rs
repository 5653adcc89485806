//! State

use std::sync::Arc;

use vetshop_app::context::AppContext;

/// Default cap on a decoded payment receipt.
pub(crate) const DEFAULT_MAX_RECEIPT_BYTES: usize = 5 * 1024 * 1024;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Largest decoded receipt accepted at checkout.
    pub(crate) max_receipt_bytes: usize,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, max_receipt_bytes: usize) -> Self {
        Self {
            app,
            max_receipt_bytes,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, max_receipt_bytes: usize) -> Arc<Self> {
        Arc::new(Self::new(app, max_receipt_bytes))
    }
}
