//! Notice sink that records rejections for test assertions.

use std::sync::Mutex;

use crate::availability::{NoticeSink, SelectionRejected};

/// [`NoticeSink`] implementation that collects every rejection.
pub struct CollectingNoticeSink {
    notices: Mutex<Vec<SelectionRejected>>,
}

impl CollectingNoticeSink {
    pub fn new() -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
        }
    }

    /// All rejections seen so far, in order.
    pub fn notices(&self) -> Vec<SelectionRejected> {
        self.notices.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.notices.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.lock().unwrap().is_empty()
    }
}

impl Default for CollectingNoticeSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeSink for CollectingNoticeSink {
    fn selection_rejected(&self, notice: &SelectionRejected) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}
