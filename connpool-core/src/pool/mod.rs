use crate::{CloseError, Connection, Result};

pub use builder::PoolBuilder;
pub use round_robin::RoundRobinConnPool;
pub use single::SingleConnPool;

mod builder;
mod round_robin;
mod single;

pub type CloseResult<C> = std::result::Result<(), CloseError<<C as Connection>::Error>>;

/// A pool of connections to one endpoint.
///
/// Connections are lent out and never returned: callers borrow one per RPC
/// call and must not close it themselves.
pub trait ConnPool: Send + Sync {
    type Conn: Connection;

    /// Returns a connection from the pool.
    fn conn(&self) -> &Self::Conn;

    /// Returns the number of connections owned by the pool.
    fn num(&self) -> usize;

    /// Closes every connection in the pool.
    ///
    /// The pool is consumed, so it can be closed only once and no connection
    /// can be borrowed from it afterwards:
    ///
    /// ```compile_fail
    /// use connpool_core::{ConnPool, Connection, Pool};
    ///
    /// struct Channel;
    ///
    /// impl Connection for Channel {
    ///     type Error = std::io::Error;
    ///
    ///     fn close(self) -> Result<(), Self::Error> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let pool = Pool::new(vec![Channel, Channel]).unwrap();
    /// pool.close().unwrap();
    /// pool.close().unwrap();
    /// ```
    fn close(self) -> CloseResult<Self::Conn>
    where
        Self: Sized;
}

/// A connection pool whose strategy is picked from the number of connections
/// it is built with.
#[derive(Debug)]
pub enum Pool<C> {
    Single(SingleConnPool<C>),
    RoundRobin(RoundRobinConnPool<C>),
}

impl<C: Connection> Pool<C> {
    pub fn new(mut conns: Vec<C>) -> Result<Self> {
        if conns.len() == 1 {
            if let Some(conn) = conns.pop() {
                info!("initialize single connection pool");
                return Ok(Pool::Single(SingleConnPool::from(conn)));
            }
        }

        let pool = RoundRobinConnPool::new(conns)?;
        info!("initialize round-robin connection pool of {} connections", pool.num());
        Ok(Pool::RoundRobin(pool))
    }
}

impl<C: Connection> TryFrom<Vec<C>> for Pool<C> {
    type Error = crate::ConnPoolError;

    fn try_from(value: Vec<C>) -> std::result::Result<Self, Self::Error> {
        Pool::new(value)
    }
}

impl<C: Connection> ConnPool for Pool<C> {
    type Conn = C;

    #[inline]
    fn conn(&self) -> &C {
        match self {
            Pool::Single(pool) => pool.conn(),
            Pool::RoundRobin(pool) => pool.conn(),
        }
    }

    fn num(&self) -> usize {
        match self {
            Pool::Single(pool) => pool.num(),
            Pool::RoundRobin(pool) => pool.num(),
        }
    }

    fn close(self) -> CloseResult<C> {
        match self {
            Pool::Single(pool) => pool.close(),
            Pool::RoundRobin(pool) => pool.close(),
        }
    }
}
