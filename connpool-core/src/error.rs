use crate::MultiError;

#[derive(thiserror::Error, Debug)]
pub enum ConnPoolError {
    #[error("cannot build a connection pool without connections")]
    EmptyPool,

    #[error("dial connection#{0} failed: {1}")]
    DialFailure(/* connection index */ usize, anyhow::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error), // source and Display delegate to anyhow::Error
}

/// Failure returned when closing a pool.
///
/// A single-connection pool hands back the connection's own error, a
/// round-robin pool every failure it met, in connection order.
#[derive(thiserror::Error, Debug)]
pub enum CloseError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Conn(E),

    #[error(transparent)]
    Multi(MultiError<E>),
}

impl<E> CloseError<E>
where
    E: std::error::Error + 'static,
{
    pub fn len(&self) -> usize {
        match self {
            CloseError::Conn(_) => 1,
            CloseError::Multi(errs) => errs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        let (head, rest) = match self {
            CloseError::Conn(e) => (Some(e), None),
            CloseError::Multi(errs) => (None, Some(errs.iter())),
        };
        head.into_iter().chain(rest.into_iter().flatten())
    }

    pub fn into_errors(self) -> Vec<E> {
        match self {
            CloseError::Conn(e) => vec![e],
            CloseError::Multi(errs) => errs.into_inner(),
        }
    }
}
