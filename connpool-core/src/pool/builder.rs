use connpool_etc::PoolConf;

use crate::{ConnPoolError, Connection, Result};

use super::Pool;

/// Assembles a [`Pool`] from connections produced by a dialer.
///
/// The dialer is called once per connection with the connection index. When
/// one dial fails, the connections dialed before it are closed again and the
/// failure is returned.
pub struct PoolBuilder {
    name: Option<String>,
    size: usize,
}

impl PoolBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            size: 1,
        }
    }

    /// Sets the number of connections. A size of zero is treated as one.
    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name.replace(name.into());
        self
    }

    pub fn build<C, F>(self, mut dial: F) -> Result<Pool<C>>
    where
        C: Connection,
        F: FnMut(usize) -> anyhow::Result<C>,
    {
        let Self { name, size } = self;
        let name = name.as_deref().unwrap_or("-");
        let size = size.max(1);

        let mut conns = Vec::with_capacity(size);
        for i in 0..size {
            match dial(i) {
                Ok(conn) => conns.push(conn),
                Err(e) => {
                    warn!("dial connection#{} of pool '{}' failed: {}", i, name, e);
                    for (j, conn) in conns.into_iter().enumerate() {
                        if let Err(e) = conn.close() {
                            warn!("discard connection#{} of pool '{}' failed: {}", j, name, e);
                        }
                    }
                    return Err(ConnPoolError::DialFailure(i, e));
                }
            }
        }

        let pool = Pool::new(conns)?;

        info!("build connection pool '{}' of {} connections ok", name, size);

        Ok(pool)
    }
}

impl Default for PoolBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&PoolConf> for PoolBuilder {
    fn from(value: &PoolConf) -> Self {
        let mut bu = PoolBuilder::new().size(value.size);
        if let Some(name) = &value.name {
            bu = bu.name(Clone::clone(name));
        }
        bu
    }
}
