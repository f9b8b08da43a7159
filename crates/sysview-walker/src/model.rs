//! View types, accessor declarations and enumerated attributes

use crate::constants::ROW_PARAM;
use serde::Serialize;
use std::fmt;

/// How a view type exposes its accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    /// A trait; walkers are generic over every row type implementing it
    Trait,
    /// A struct, enum or union with inherent `pub` getters
    Type,
}

/// A view type: the accessor contract a walker is generated for
#[derive(Debug, Clone, PartialEq)]
pub struct ViewType {
    pub name: String,
    pub kind: ViewKind,
    /// Absolute module path the view lives in, e.g. `crate::views`
    pub module: String,
    /// Lifetime parameters of a `Type` view, elided as `'_` in walkers
    pub lifetimes: usize,
    /// Accessor candidates in declaration order
    pub accessors: Vec<AccessorDeclaration>,
}

impl ViewType {
    pub fn new(name: impl Into<String>, kind: ViewKind, module: impl Into<String>) -> Self {
        Self { name: name.into(), kind, module: module.into(), lifetimes: 0, accessors: Vec::new() }
    }

    pub fn with_lifetimes(mut self, lifetimes: usize) -> Self {
        self.lifetimes = lifetimes;
        self
    }

    pub fn with_accessor(mut self, accessor: AccessorDeclaration) -> Self {
        self.accessors.push(accessor);
        self
    }

    /// Fully qualified path of the view type
    pub fn path(&self) -> String {
        format!("{}::{}", self.module, self.name)
    }

    /// The row type walkers are implemented for: the walker's type
    /// parameter for traits, the type itself otherwise
    pub fn row_type(&self) -> String {
        match self.kind {
            ViewKind::Trait => ROW_PARAM.to_string(),
            ViewKind::Type if self.lifetimes == 0 => self.name.clone(),
            ViewKind::Type => format!("{}<{}>", self.name, vec!["'_"; self.lifetimes].join(", ")),
        }
    }

    pub fn accessor(&self, name: &str) -> Option<&AccessorDeclaration> {
        self.accessors.iter().find(|a| a.name == name)
    }
}

/// Receiver of an accessor method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    /// No `self`: an associated (static) function
    None,
    /// `&self`
    Ref,
    /// `&mut self`
    RefMut,
    /// `self`
    Value,
}

/// One attribute candidate declared by a view type
#[derive(Debug, Clone, PartialEq)]
pub struct AccessorDeclaration {
    /// Method name with any `r#` prefix removed
    pub name: String,
    /// Declared return type, `None` when the method returns nothing
    pub ty: Option<TypeRef>,
    /// Explicit order from a `walker:order=N` annotation
    pub order: Option<i32>,
    pub receiver: Receiver,
    /// Inputs besides the receiver
    pub extra_inputs: usize,
    pub generic: bool,
    /// Declared with `where Self: Sized`
    pub sized_only: bool,
    /// The return type mentions `Self`
    pub self_typed: bool,
}

impl AccessorDeclaration {
    /// A plain `&self` getter returning `ty`
    pub fn getter(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            order: None,
            receiver: Receiver::Ref,
            extra_inputs: 0,
            generic: false,
            sized_only: false,
            self_typed: false,
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Calling this accessor needs a sized row
    pub fn needs_sized_row(&self) -> bool {
        self.sized_only || self.self_typed
    }

    pub fn is_static(&self) -> bool {
        self.receiver == Receiver::None
    }

    /// Whether a walker can call this accessor on a shared row reference
    pub fn is_callable_getter(&self) -> bool {
        self.receiver == Receiver::Ref && self.extra_inputs == 0 && !self.generic
    }
}

/// Classification of an attribute's type
///
/// The eight primitive kinds get a dedicated visitor method so values are
/// handed over by copy. Everything else is passed by reference together with
/// its type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TypeRef {
    Bool,
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Reference {
        /// Type as written in Rust, e.g. `Option<String>`
        name: String,
        /// `use` paths the type needs outside its defining module
        #[serde(skip)]
        imports: Vec<String>,
    },
}

impl TypeRef {
    /// A reference type that needs no imports
    pub fn reference(name: impl Into<String>) -> Self {
        TypeRef::Reference { name: name.into(), imports: Vec::new() }
    }

    /// Map a bare Rust primitive name to its primitive kind
    pub fn primitive(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(TypeRef::Bool),
            "char" => Some(TypeRef::Char),
            "i8" => Some(TypeRef::Byte),
            "i16" => Some(TypeRef::Short),
            "i32" => Some(TypeRef::Int),
            "i64" => Some(TypeRef::Long),
            "f32" => Some(TypeRef::Float),
            "f64" => Some(TypeRef::Double),
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(self, TypeRef::Reference { .. })
    }

    /// The Rust spelling of the type
    pub fn rust_name(&self) -> &str {
        match self {
            TypeRef::Bool => "bool",
            TypeRef::Char => "char",
            TypeRef::Byte => "i8",
            TypeRef::Short => "i16",
            TypeRef::Int => "i32",
            TypeRef::Long => "i64",
            TypeRef::Float => "f32",
            TypeRef::Double => "f64",
            TypeRef::Reference { name, .. } => name,
        }
    }

    /// Visitor method used to pass a value of this type
    pub fn accept_method(&self) -> &'static str {
        match self {
            TypeRef::Bool => "accept_bool",
            TypeRef::Char => "accept_char",
            TypeRef::Byte => "accept_i8",
            TypeRef::Short => "accept_i16",
            TypeRef::Int => "accept_i32",
            TypeRef::Long => "accept_i64",
            TypeRef::Float => "accept_f32",
            TypeRef::Double => "accept_f64",
            TypeRef::Reference { .. } => "accept",
        }
    }

    /// Kind label used in listings
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeRef::Bool => "boolean",
            TypeRef::Char => "char",
            TypeRef::Byte => "byte",
            TypeRef::Short => "short",
            TypeRef::Int => "int",
            TypeRef::Long => "long",
            TypeRef::Float => "float",
            TypeRef::Double => "double",
            TypeRef::Reference { .. } => "reference",
        }
    }

    pub fn imports(&self) -> &[String] {
        match self {
            TypeRef::Reference { imports, .. } => imports,
            _ => &[],
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_name())
    }
}

/// An enumerated attribute with its stable index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    pub index: usize,
}
