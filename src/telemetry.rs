//! Simple progress logging for the search.

use std::sync::Arc;

/// A logger which is called with information about the work done by the search.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_ants::telemetry::InfoLogger;
///
/// let logger: InfoLogger = Arc::new(|msg: &str| println!("{}", msg));
/// logger("started");
/// ```
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;
