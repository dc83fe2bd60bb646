pub mod animate;
pub mod convert;
pub mod estimate;
pub mod fling;
pub mod graph;

use std::time::Duration;

/// Formats a settling estimate, where `None` means the spring never settles.
pub fn format_duration(duration: Option<Duration>) -> String {
    match duration {
        Some(duration) => format!("{:.3}s", duration.as_secs_f32()),
        None => "Infinite".to_string(),
    }
}
