#![allow(clippy::type_complexity)]
#![allow(clippy::from_over_into)]
#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]

//! Pools of pre-dialed RPC connections.
//!
//! ```
//! use connpool_core::{ConnPool, Connection, Pool};
//!
//! struct Channel(&'static str);
//!
//! impl Connection for Channel {
//!     type Error = std::io::Error;
//!
//!     fn close(self) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! let pool = Pool::new(vec![Channel("a"), Channel("b"), Channel("c")]).unwrap();
//! assert_eq!("b", pool.conn().0);
//! assert_eq!("c", pool.conn().0);
//! assert_eq!("a", pool.conn().0);
//! assert!(pool.close().is_ok());
//! ```

#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

pub use conn::Connection;
pub use error::{CloseError, ConnPoolError};
pub use multi_error::MultiError;
pub use pool::{CloseResult, ConnPool, Pool, PoolBuilder, RoundRobinConnPool, SingleConnPool};

pub type Result<T> = std::result::Result<T, ConnPoolError>;

mod conn;
mod error;
#[cfg(test)]
mod mock;
mod multi_error;
mod pool;
