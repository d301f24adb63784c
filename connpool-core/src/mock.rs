use std::sync::Arc;

use parking_lot::Mutex;

use crate::Connection;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub(crate) struct MockError(pub(crate) &'static str);

/// Records the ids of closed connections in the order they were closed.
#[derive(Default, Clone)]
pub(crate) struct Closed(Arc<Mutex<Vec<usize>>>);

impl Closed {
    pub(crate) fn ids(&self) -> Vec<usize> {
        Clone::clone(&*self.0.lock())
    }
}

#[derive(Debug)]
pub(crate) struct MockConn {
    pub(crate) id: usize,
    fail: Option<&'static str>,
    closed: Arc<Mutex<Vec<usize>>>,
}

impl MockConn {
    pub(crate) fn new(id: usize, closed: &Closed) -> Self {
        Self {
            id,
            fail: None,
            closed: Clone::clone(&closed.0),
        }
    }

    pub(crate) fn failing(id: usize, reason: &'static str, closed: &Closed) -> Self {
        Self {
            id,
            fail: Some(reason),
            closed: Clone::clone(&closed.0),
        }
    }
}

impl Connection for MockConn {
    type Error = MockError;

    fn close(self) -> std::result::Result<(), Self::Error> {
        self.closed.lock().push(self.id);
        match self.fail {
            None => Ok(()),
            Some(reason) => Err(MockError(reason)),
        }
    }
}

pub(crate) fn conns(n: usize, closed: &Closed) -> Vec<MockConn> {
    (0..n).map(|id| MockConn::new(id, closed)).collect()
}
