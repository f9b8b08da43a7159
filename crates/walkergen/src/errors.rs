//! Error reporting for the command line

use crate::config::CONFIG_FILENAME;
use colored::*;
use sysview_walker::WalkerError;

/// Print a failed step with its cause chain, followed by a hint when the
/// failure comes from a view's source
pub fn print_error(context: &str, error: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), context);
    eprintln!("  {}", error.to_string().red());

    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "Caused by:".dimmed(), cause.to_string().dimmed());
    }

    if let Some(hint) = view_hint(error) {
        eprintln!("\n{} {}", "Hint:".cyan().bold(), hint);
    }
}

/// Print an error with a suggestion
pub fn print_error_with_suggestion(context: &str, error: &anyhow::Error, suggestion: &str) {
    print_error(context, error);
    eprintln!("\n{} {}", "Suggestion:".cyan().bold(), suggestion);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message);
}

/// How to fix the view source behind the first walker error in the chain
pub fn view_hint(error: &anyhow::Error) -> Option<String> {
    let walker_error = error.chain().find_map(|cause| cause.downcast_ref::<WalkerError>())?;

    let hint = match walker_error {
        WalkerError::Parse(_) => "View sources must be valid Rust; fix the syntax error above".to_string(),
        WalkerError::ViewNotFound { name } => format!(
            "Declare `pub trait {}` or a `pub struct {}` in the view's source, or fix its `name` and `source` in {}",
            name, name, CONFIG_FILENAME
        ),
        WalkerError::GenericView { name } => {
            format!("Walkers need a concrete row type; remove the type parameters of `{}`", name)
        }
        WalkerError::InvalidAnnotation { accessor, .. } => {
            format!("Annotate `{}` as `/// walker:order=N` with an integer N", accessor)
        }
        WalkerError::DuplicateOrder { order, second, .. } => {
            format!("Give `{}` an order other than {}", second, order)
        }
    };

    Some(hint)
}
