//! Index selection policies.
//!
//! - [`history`]: rejection sampling against a window of recent values
//! - [`uniform`]: memoryless uniform baseline

pub mod history;
pub mod uniform;

use crate::error::ConfigError;

pub(crate) fn check_bound(bound: usize) -> Result<(), ConfigError> {
    if bound == 0 {
        return Err(ConfigError::new(
            "bound must be >= 1, cannot sample from an empty range",
        ));
    }
    Ok(())
}
