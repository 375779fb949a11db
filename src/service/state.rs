use crate::store::accounts::AccountStore;

/// Global service state shared across handlers. The store carries its own
/// lock, so handlers only need an `Arc` to this.
#[derive(Debug)]
pub struct AppState {
    pub store: AccountStore,
}

impl AppState {
    pub fn new(store: AccountStore) -> Self {
        Self { store }
    }
}
