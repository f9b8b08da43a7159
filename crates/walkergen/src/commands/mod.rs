//! Command implementations

pub mod check;
pub mod generate;
pub mod list;

pub use check::check_walkers;
pub use generate::generate_walkers;
pub use list::list_attributes;
