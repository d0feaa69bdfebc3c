/// Errors raised by [`Tree`](crate::ast::Tree) accessors and mutators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// An argument was rejected, e.g. an insertion index past the end or a
    /// malformed tree description.
    #[error("Invalid argument: {details}.")]
    InvalidArgument {
        /// Why the argument was rejected.
        details: String,
    },
    /// A child index was out of range.
    #[error("No child at index {index}; the node has {count} children.")]
    NoSuchElement {
        /// The requested index.
        index: usize,
        /// The number of children the node had.
        count: usize,
    },
}
