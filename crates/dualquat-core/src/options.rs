//! Configuration options for dualquat-rs.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::state;

/// Global configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathOptions {
    /// What happens when a `*_normalized` operation gets non-normalized input.
    pub precondition_policy: PreconditionPolicy,

    /// Initial value of the space-after-each-value flag of new
    /// [`DebugOutput`](crate::debug::DebugOutput) sinks.
    pub debug_space_after_each_value: bool,
}

impl MathOptions {
    /// Built-in defaults, usable in constant context.
    pub const DEFAULT: Self = Self {
        precondition_policy: PreconditionPolicy::DEFAULT,
        debug_space_after_each_value: true,
    };

    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the precondition policy.
    #[must_use]
    pub fn with_precondition_policy(mut self, policy: PreconditionPolicy) -> Self {
        self.precondition_policy = policy;
        self
    }

    /// Sets the default space-after-each-value flag for debug output.
    #[must_use]
    pub fn with_debug_space_after_each_value(mut self, enabled: bool) -> Self {
        self.debug_space_after_each_value = enabled;
        self
    }

    /// Parses options from JSON. Missing fields take their default value.
    pub fn from_json_str(json: &str) -> MathResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json_string(&self) -> MathResult<String> {
        serde_json::to_string_pretty(self).map_err(MathError::from)
    }

    /// Installs these options as the process-wide options.
    pub fn apply(self) {
        state::with_options_mut(|options| *options = self);
        log::debug!(
            "math options applied: precondition policy {:?}, debug space after each value {}",
            self.precondition_policy,
            self.debug_space_after_each_value
        );
    }

    /// Returns the process-wide options.
    #[must_use]
    pub fn current() -> Self {
        state::with_options(|options| *options)
    }
}

impl Default for MathOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How precondition violations of `*_normalized` operations are handled.
///
/// Both policies report the violation. They differ only in whether the
/// program continues afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreconditionPolicy {
    /// Panic with the violation message.
    Strict,
    /// Log the violation at error level and return the operation's sentinel value.
    Permissive,
}

impl PreconditionPolicy {
    /// `Strict` in builds with debug assertions, `Permissive` otherwise.
    pub const DEFAULT: Self = if cfg!(debug_assertions) {
        Self::Strict
    } else {
        Self::Permissive
    };

    /// Returns the process-wide policy.
    #[must_use]
    pub fn current() -> Self {
        state::with_options(|options| options.precondition_policy)
    }

    /// Sets the process-wide policy.
    pub fn set_current(policy: Self) {
        state::with_options_mut(|options| options.precondition_policy = policy);
        log::debug!("precondition policy set to {policy:?}");
    }

    /// Unwraps `result`, or handles its error according to the policy.
    ///
    /// Under [`Permissive`](Self::Permissive) the error is logged and
    /// `sentinel` provides the return value.
    ///
    /// # Panics
    ///
    /// Panics with the error message under [`Strict`](Self::Strict).
    pub fn resolve<V>(self, result: MathResult<V>, sentinel: impl FnOnce() -> V) -> V {
        match result {
            Ok(value) => value,
            Err(err) => match self {
                Self::Strict => panic!("{err}"),
                Self::Permissive => {
                    log::error!("{err}");
                    sentinel()
                }
            },
        }
    }
}

impl Default for PreconditionPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
