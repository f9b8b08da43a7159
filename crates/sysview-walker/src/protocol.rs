//! Runtime visitor protocol implemented by generated walkers
//!
//! Consumers (management consoles, metrics exporters) implement the visitor
//! traits and drive any walker without knowing the view it was generated for.

use std::fmt::Debug;

/// Receives the attribute schema of a view, without any row
pub trait AttributeVisitor {
    /// Attribute `idx` named `name` of type `T`
    fn accept<T: ?Sized>(&mut self, idx: usize, name: &str);
}

/// Receives the attribute values of one row
///
/// Primitive attributes arrive through the typed methods, which forward to
/// [`accept`](Self::accept) unless overridden.
pub trait AttributeWithValueVisitor {
    /// Any non-primitive attribute. Its type must implement `Debug`, so a
    /// view accessor returning a type without `Debug` yields a walker that
    /// does not compile; for trait views returning `Self` the walker
    /// requires `R: Debug`.
    fn accept<T: ?Sized + Debug>(&mut self, idx: usize, name: &str, val: &T);

    fn accept_bool(&mut self, idx: usize, name: &str, val: bool) {
        self.accept::<bool>(idx, name, &val);
    }

    fn accept_char(&mut self, idx: usize, name: &str, val: char) {
        self.accept::<char>(idx, name, &val);
    }

    fn accept_i8(&mut self, idx: usize, name: &str, val: i8) {
        self.accept::<i8>(idx, name, &val);
    }

    fn accept_i16(&mut self, idx: usize, name: &str, val: i16) {
        self.accept::<i16>(idx, name, &val);
    }

    fn accept_i32(&mut self, idx: usize, name: &str, val: i32) {
        self.accept::<i32>(idx, name, &val);
    }

    fn accept_i64(&mut self, idx: usize, name: &str, val: i64) {
        self.accept::<i64>(idx, name, &val);
    }

    fn accept_f32(&mut self, idx: usize, name: &str, val: f32) {
        self.accept::<f32>(idx, name, &val);
    }

    fn accept_f64(&mut self, idx: usize, name: &str, val: f64) {
        self.accept::<f64>(idx, name, &val);
    }
}

/// Attribute walker for rows of type `R`
///
/// Walkers of trait views are implemented for every `R` implementing the
/// view, trait objects included when the trait allows them.
pub trait RowAttributeWalker<R: ?Sized> {
    /// Visit every attribute's index, name and type
    fn visit_all<V: AttributeVisitor>(&self, v: &mut V);

    /// Visit every attribute's value in `row`
    fn visit_all_values<V: AttributeWithValueVisitor>(&self, row: &R, v: &mut V);

    /// Number of attributes
    fn count(&self) -> usize;
}

/// Attribute names of a walker, in index order
pub fn attribute_names<R: ?Sized, W: RowAttributeWalker<R>>(walker: &W) -> Vec<String> {
    struct Names(Vec<String>);

    impl AttributeVisitor for Names {
        fn accept<T: ?Sized>(&mut self, _idx: usize, name: &str) {
            self.0.push(name.to_string());
        }
    }

    let mut names = Names(Vec::with_capacity(walker.count()));
    walker.visit_all(&mut names);
    names.0
}
