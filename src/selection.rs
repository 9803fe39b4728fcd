//! Detail Selection
//!
//! Single slot holding the store currently open in the detail overlay.

use crate::models::OnlineStore;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailSlot {
    current: Option<OnlineStore>,
}

impl DetailSlot {
    /// Open `store`, replacing whatever was open before
    pub fn open(&mut self, store: OnlineStore) {
        self.current = Some(store);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&OnlineStore> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
