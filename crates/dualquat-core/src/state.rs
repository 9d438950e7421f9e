//! Process-wide options storage.
//!
//! The algebra itself is stateless. The only shared state is the active
//! [`MathOptions`], which the `*_normalized` operations and new debug sinks
//! read.

use std::sync::{PoisonError, RwLock};

use crate::options::MathOptions;

/// Global options singleton.
static OPTIONS: RwLock<MathOptions> = RwLock::new(MathOptions::DEFAULT);

/// Access the global options for reading.
///
/// A poisoned lock is recovered, since the options are plain `Copy` data
/// that can't be left half-written.
pub fn with_options<F, R>(f: F) -> R
where
    F: FnOnce(&MathOptions) -> R,
{
    let guard = OPTIONS.read().unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Access the global options for writing.
pub fn with_options_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut MathOptions) -> R,
{
    let mut guard = OPTIONS.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Restores the built-in default options.
pub fn reset_options() {
    with_options_mut(|options| *options = MathOptions::DEFAULT);
}
