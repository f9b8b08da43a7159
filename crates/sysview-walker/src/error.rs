/// Errors raised while discovering or ordering view attributes
#[derive(Debug, thiserror::Error)]
pub enum WalkerError {
    #[error("Failed to parse view source: {0}")]
    Parse(#[from] syn::Error),

    #[error("View type `{name}` not found (expected a trait or a type with inherent methods)")]
    ViewNotFound { name: String },

    #[error("View type `{name}` has type or const parameters; walkers need a concrete row type")]
    GenericView { name: String },

    #[error("Invalid walker annotation on `{accessor}`: {reason}")]
    InvalidAnnotation { accessor: String, reason: String },

    #[error("View type `{view}` declares order {order} on both `{first}` and `{second}`")]
    DuplicateOrder { view: String, order: i32, first: String, second: String },
}

pub type Result<T> = std::result::Result<T, WalkerError>;
