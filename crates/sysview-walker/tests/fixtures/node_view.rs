//! Cluster node view. `create` has no `where Self: Sized`, so the trait
//! cannot be used as `dyn NodeView`.

use std::fmt::Debug;

pub trait NodeView: Debug {
    fn create() -> Self;

    fn id(&self) -> i32;

    fn r#type(&self) -> String;

    fn state(&self) -> String;

    fn r#ref(&self) -> Option<Self>
    where
        Self: Sized;

    /// walker:order=0
    fn name(&self) -> &str;
}
