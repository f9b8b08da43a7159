//! Generated by walkergen. Do not edit.

use crate::cache_view::CacheMode;
use crate::cache_view::CacheView;
use std::time::Duration;
use sysview_walker::protocol::{AttributeVisitor, AttributeWithValueVisitor, RowAttributeWalker};

/// Walks the attributes of [`CacheView`].
pub struct CacheViewWalker;

impl<R: ?Sized + CacheView> RowAttributeWalker<R> for CacheViewWalker {
    fn visit_all<V: AttributeVisitor>(&self, v: &mut V) {
        v.accept::<i32>(0, "cache_id");
        v.accept::<String>(1, "cache_name");
        v.accept::<CacheMode>(2, "cache_mode");
        v.accept::<i16>(3, "backups");
        v.accept::<Duration>(4, "expiry");
        v.accept::<Option<String>>(5, "group_name");
        v.accept::<bool>(6, "is_system");
        v.accept::<f32>(7, "load_factor");
        v.accept::<&str>(8, "node_filter");
        v.accept::<u32>(9, "partitions");
        v.accept::<i8>(10, "priority");
        v.accept::<f64>(11, "read_through_ratio");
        v.accept::<i64>(12, "size");
        v.accept::<char>(13, "type_marker");
    }

    fn visit_all_values<V: AttributeWithValueVisitor>(&self, row: &R, v: &mut V) {
        v.accept_i32(0, "cache_id", row.cache_id());
        v.accept::<String>(1, "cache_name", &row.cache_name());
        v.accept::<CacheMode>(2, "cache_mode", &row.cache_mode());
        v.accept_i16(3, "backups", row.backups());
        v.accept::<Duration>(4, "expiry", &row.expiry());
        v.accept::<Option<String>>(5, "group_name", &row.group_name());
        v.accept_bool(6, "is_system", row.is_system());
        v.accept_f32(7, "load_factor", row.load_factor());
        v.accept::<&str>(8, "node_filter", &row.node_filter());
        v.accept::<u32>(9, "partitions", &row.partitions());
        v.accept_i8(10, "priority", row.priority());
        v.accept_f64(11, "read_through_ratio", row.read_through_ratio());
        v.accept_i64(12, "size", row.size());
        v.accept_char(13, "type_marker", row.type_marker());
    }

    fn count(&self) -> usize {
        14
    }
}
