use crate::{CloseError, Connection};

use super::{CloseResult, ConnPool};

/// Pool of exactly one connection.
#[derive(Debug)]
pub struct SingleConnPool<C> {
    conn: C,
}

impl<C> From<C> for SingleConnPool<C> {
    fn from(value: C) -> Self {
        Self { conn: value }
    }
}

impl<C: Connection> ConnPool for SingleConnPool<C> {
    type Conn = C;

    #[inline]
    fn conn(&self) -> &C {
        &self.conn
    }

    fn num(&self) -> usize {
        1
    }

    fn close(self) -> CloseResult<C> {
        // the error of the only connection is returned as it is
        self.conn.close().map_err(CloseError::Conn)
    }
}
