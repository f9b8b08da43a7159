//! Generated by walkergen. Do not edit.

use crate::node_view::NodeView;
use std::fmt::Debug;
use sysview_walker::protocol::{AttributeVisitor, AttributeWithValueVisitor, RowAttributeWalker};

/// Walks the attributes of [`NodeView`].
pub struct NodeViewWalker;

impl<R: NodeView + Debug> RowAttributeWalker<R> for NodeViewWalker {
    fn visit_all<V: AttributeVisitor>(&self, v: &mut V) {
        v.accept::<&str>(0, "name");
        v.accept::<i32>(1, "id");
        v.accept::<Option<R>>(2, "ref");
        v.accept::<String>(3, "state");
        v.accept::<String>(4, "type");
    }

    fn visit_all_values<V: AttributeWithValueVisitor>(&self, row: &R, v: &mut V) {
        v.accept::<&str>(0, "name", &row.name());
        v.accept_i32(1, "id", row.id());
        v.accept::<Option<R>>(2, "ref", &row.r#ref());
        v.accept::<String>(3, "state", &row.state());
        v.accept::<String>(4, "type", &row.r#type());
    }

    fn count(&self) -> usize {
        5
    }
}
