//! Constants shared by discovery, enumeration and emission

/// Accessors that never become attributes: equality, hashing, string
/// conversion and type identity.
pub const EXCLUDED_ACCESSORS: &[&str] = &["eq", "hash", "to_string", "type_id"];

/// Doc-comment prefix carrying walker annotations, e.g. `/// walker:order=1`
pub const ANNOTATION_PREFIX: &str = "walker:";

/// Annotation key for the explicit attribute order
pub const ORDER_KEY: &str = "order";

/// Default suffix appended to the view name to form the walker name
pub const DEFAULT_SUFFIX: &str = "Walker";

/// Default module path of the runtime protocol used by emitted walkers
pub const DEFAULT_PROTOCOL_PATH: &str = "sysview_walker::protocol";

/// Type parameter of walkers generated for trait views
pub const ROW_PARAM: &str = "R";

/// Type names that are always in scope and never need a `use` line
pub const PRELUDE_TYPES: &[&str] = &[
    "Self", "bool", "char", "str", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32",
    "i64", "i128", "isize", "f32", "f64", "String", "Option", "Result", "Vec", "Box", "ToString",
    "ToOwned",
];
