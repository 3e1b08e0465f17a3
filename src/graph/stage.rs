//! Stage definitions

use std::fmt;

use crate::error::PredicateError;
use crate::models::Outcome;

/// Predicate computing a stage's own outcome from a world-state snapshot.
pub type Predicate<S> = Box<dyn Fn(&S) -> Result<Outcome, PredicateError> + Send + Sync>;

/// A named checkpoint in a multi-step operator workflow.
///
/// The predicate is only consulted once every stage in `requires` is done, so
/// it may assume those prerequisites hold.
pub struct Stage<S> {
    id: String,
    description: Option<String>,
    requires: Vec<String>,
    suggests: Vec<String>,
    evaluate: Predicate<S>,
}

impl<S: 'static> Stage<S> {
    /// Create a stage whose predicate cannot fail.
    ///
    /// The predicate may return a `bool` or a [`crate::Status`].
    pub fn new<F, O>(id: impl Into<String>, evaluate: F) -> Self
    where
        F: Fn(&S) -> O + Send + Sync + 'static,
        O: Into<Outcome> + 'static,
    {
        Self::with_predicate(
            id,
            Box::new(move |state: &S| -> Result<Outcome, PredicateError> {
                Ok(evaluate(state).into())
            }),
        )
    }

    /// Create a stage whose predicate may fail.
    ///
    /// A failure aborts the whole evaluation pass.
    pub fn fallible<F, E>(id: impl Into<String>, evaluate: F) -> Self
    where
        F: Fn(&S) -> Result<Outcome, E> + Send + Sync + 'static,
        E: Into<PredicateError> + 'static,
    {
        Self::with_predicate(
            id,
            Box::new(move |state: &S| -> Result<Outcome, PredicateError> {
                evaluate(state).map_err(Into::into)
            }),
        )
    }
}

impl<S> Stage<S> {
    pub fn with_predicate(id: impl Into<String>, evaluate: Predicate<S>) -> Self {
        Self {
            id: id.into(),
            description: None,
            requires: Vec::new(),
            suggests: Vec::new(),
            evaluate,
        }
    }

    /// Hard prerequisites: the predicate is skipped until all are done.
    pub fn requires<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.requires.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Soft prerequisites: an `Off` stage becomes `Next` only once all are done.
    pub fn suggests<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.suggests.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn required(&self) -> &[String] {
        &self.requires
    }

    pub fn suggested(&self) -> &[String] {
        &self.suggests
    }

    /// Run the stage's own predicate, ignoring dependency state.
    pub fn evaluate(&self, state: &S) -> Result<Outcome, PredicateError> {
        (self.evaluate)(state)
    }
}

impl<S> fmt::Debug for Stage<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("requires", &self.requires)
            .field("suggests", &self.suggests)
            .finish_non_exhaustive()
    }
}
