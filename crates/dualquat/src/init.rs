//! Initialization and options files.
//!
//! None of this is required to use the algebra. It installs a logger so that
//! permissive precondition violations are visible, and lets the process-wide
//! [`MathOptions`] come from a JSON file.

use std::path::Path;

use dualquat_core::MathOptions;

use crate::Result;

/// Initializes logging and installs the default options.
///
/// # Example
///
/// ```
/// use dualquat::*;
///
/// init();
/// assert_eq!(MathOptions::current(), MathOptions::default());
/// ```
pub fn init() {
    init_with(MathOptions::default());
}

/// Initializes logging and installs `options`.
///
/// The logger is only installed once. Calling this again just replaces the
/// options.
pub fn init_with(options: MathOptions) {
    let _ = env_logger::try_init();
    options.apply();
    log::info!(
        "dualquat-rs initialized with {:?} precondition policy",
        options.precondition_policy
    );
}

/// Initializes logging and installs the options stored at `path`.
pub fn init_from_file(path: impl AsRef<Path>) -> Result<MathOptions> {
    let options = load_options(path)?;
    init_with(options);
    Ok(options)
}

/// Reads options from a JSON file. Missing fields take their default value.
pub fn load_options(path: impl AsRef<Path>) -> Result<MathOptions> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let options = MathOptions::from_json_str(&text)?;
    log::debug!("loaded math options from {}", path.display());
    Ok(options)
}

/// Writes options to a JSON file.
pub fn save_options(path: impl AsRef<Path>, options: &MathOptions) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, serde_json::to_string_pretty(options)?)?;
    log::debug!("saved math options to {}", path.display());
    Ok(())
}
