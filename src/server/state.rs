use crate::{classifier::RelevanceClassifier, generator::TestGenerator};

/// Shared application state, cloned into each handler invocation.
///
/// Both components hold the same completion client, constructed once at
/// process start; requests never rebuild it.
#[derive(Clone)]
pub struct AppState<M> {
    pub classifier: RelevanceClassifier<M>,
    pub generator: TestGenerator<M>,
}
