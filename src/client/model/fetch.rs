use crate::client::model::error::AppError;

/// A view's private copy of fetched data.
///
/// Each view owns one of these per resource it shows; nothing is shared between
/// views, so a mutation in one only shows up elsewhere after that view re-fetches.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Fetch<T> {
    #[default]
    Loading,
    Fetched(T),
    Error(AppError),
}

impl<T> Fetch<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Fetch::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Fetch::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            Fetch::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Map the inner data to another value, returning None if not fetched successfully
    pub fn map<U, F>(&self, f: F) -> Option<U>
    where
        F: FnOnce(&T) -> U,
    {
        self.data().map(f)
    }
}

impl<T> From<Result<T, AppError>> for Fetch<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Fetch::Fetched(data),
            Err(err) => Fetch::Error(err),
        }
    }
}
