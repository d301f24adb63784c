use std::fmt::{Display, Formatter};

/// Errors collected while closing several connections.
///
/// Only failures are kept: pushing `None` is a no-op, so the aggregate can be
/// fed with the `err()` of every close result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiError<E>(Vec<E>);

impl<E> MultiError<E> {
    pub fn push(&mut self, err: impl Into<Option<E>>) {
        if let Some(err) = err.into() {
            self.0.push(err);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&E> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<E> {
        self.0
    }
}

impl<E> Default for MultiError<E> {
    fn default() -> Self {
        Self(vec![])
    }
}

impl<E> From<Vec<E>> for MultiError<E> {
    fn from(value: Vec<E>) -> Self {
        Self(value)
    }
}

impl<E> FromIterator<E> for MultiError<E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<E> Extend<E> for MultiError<E> {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

impl<E> IntoIterator for MultiError<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a MultiError<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<E: Display> Display for MultiError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0.split_first() {
            None => write!(f, "(0 errors)"),
            Some((first, [])) => write!(f, "{}", first),
            Some((first, [_])) => write!(f, "{} (and 1 other error)", first),
            Some((first, rest)) => write!(f, "{} (and {} other errors)", first, rest.len()),
        }
    }
}

impl<E> std::error::Error for MultiError<E> where E: std::error::Error + 'static {}
