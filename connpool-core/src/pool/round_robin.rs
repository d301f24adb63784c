use std::sync::atomic::{AtomicU32, Ordering};

use crate::{CloseError, ConnPoolError, Connection, MultiError, Result};

use super::{CloseResult, ConnPool};

/// Pool cycling through a fixed list of connections.
///
/// Each call of [`ConnPool::conn`] bumps a counter owned by the pool and
/// picks the connection at `counter % len`. The counter is bumped before it
/// is read, so a fresh pool starts from the second connection.
#[derive(Debug)]
pub struct RoundRobinConnPool<C> {
    conns: Vec<C>,
    seq: AtomicU32,
}

impl<C> RoundRobinConnPool<C> {
    pub fn new(conns: Vec<C>) -> Result<Self> {
        if conns.is_empty() {
            return Err(ConnPoolError::EmptyPool);
        }

        Ok(Self {
            conns,
            seq: Default::default(),
        })
    }

    /// Returns the bumped counter and the index it selects.
    #[inline]
    fn next(&self) -> (u32, usize) {
        // fetch_add wraps around on overflow
        let seq = self.seq.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
        (seq, seq as usize % self.conns.len())
    }
}

impl<C: Connection> ConnPool for RoundRobinConnPool<C> {
    type Conn = C;

    #[inline]
    fn conn(&self) -> &C {
        let (_, bingo) = self.next();
        &self.conns[bingo]
    }

    fn num(&self) -> usize {
        self.conns.len()
    }

    fn close(self) -> CloseResult<C> {
        let mut errs = MultiError::default();

        for (i, conn) in self.conns.into_iter().enumerate() {
            match conn.close() {
                Ok(()) => debug!("close connection#{} ok", i),
                Err(e) => {
                    warn!("close connection#{} failed: {}", i, e);
                    errs.push(e);
                }
            }
        }

        if errs.is_empty() {
            return Ok(());
        }

        Err(CloseError::Multi(errs))
    }
}
