//! Diagnostic output for the algebra types.
//!
//! [`DebugOutput`] is a small text sink that separates consecutive values
//! with a space while its space-after-each-value flag is set. Composite
//! types switch the flag off while printing their own punctuation and
//! restore it afterwards:
//!
//! ```
//! use dualquat_core::{debug::DebugOutput, DualQuaternion};
//!
//! let out = DebugOutput::with_space_after_each_value(true)
//!     .print("transform:")
//!     .print(&DualQuaternion::<f32>::default());
//! assert_eq!(
//!     out.as_str(),
//!     "transform: DualQuaternion({{0, 0, 0}, 1}, {{0, 0, 0}, 0})"
//! );
//! ```
//!
//! Floats print with six significant digits, e.g. `0.479426` or `1e-07`.
//! The `Display` impls of [`Quaternion`], [`Dual`] and [`DualQuaternion`]
//! render through the same sink.

use std::fmt::{self, Display, Write};

use glam::{DVec3, Vec3};
use num_traits::ToPrimitive;

use crate::dual::Dual;
use crate::dual_quaternion::DualQuaternion;
use crate::options::MathOptions;
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;

/// Text sink for diagnostic output.
#[derive(Debug, Clone, Default)]
pub struct DebugOutput {
    buffer: String,
    space_after_each_value: bool,
    wrote_value: bool,
}

impl DebugOutput {
    /// Creates an empty sink using the process-wide default flag from
    /// [`MathOptions::debug_space_after_each_value`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_space_after_each_value(MathOptions::current().debug_space_after_each_value)
    }

    /// Creates an empty sink with an explicit space-after-each-value flag.
    #[must_use]
    pub fn with_space_after_each_value(enabled: bool) -> Self {
        Self {
            buffer: String::new(),
            space_after_each_value: enabled,
            wrote_value: false,
        }
    }

    /// Whether consecutive values are separated by a space.
    #[must_use]
    pub fn space_after_each_value(&self) -> bool {
        self.space_after_each_value
    }

    /// Enables or disables the space between consecutive values.
    pub fn set_space_after_each_value(&mut self, enabled: bool) {
        self.space_after_each_value = enabled;
    }

    /// Appends a value and returns the sink, for chaining.
    #[must_use]
    pub fn print<V: DebugPrint + ?Sized>(mut self, value: &V) -> Self {
        value.debug_print(&mut self);
        self
    }

    /// Appends a single displayable value, preceded by a space if the flag
    /// is set and something was written before.
    pub fn write_value(&mut self, value: impl Display) {
        if self.wrote_value && self.space_after_each_value {
            self.buffer.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(self.buffer, "{value}");
        self.wrote_value = true;
    }

    /// The text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consumes the sink and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Runs `f` with the space flag disabled, then restores it.
    fn compact(&mut self, f: impl FnOnce(&mut Self)) {
        let previous = self.space_after_each_value;
        self.space_after_each_value = false;
        f(self);
        self.space_after_each_value = previous;
    }
}

impl Display for DebugOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

/// A value that can be written into a [`DebugOutput`].
pub trait DebugPrint {
    /// Writes `self` into `out`.
    fn debug_print(&self, out: &mut DebugOutput);
}

macro_rules! impl_debug_print_display {
    ($($t:ty),*) => {$(
        impl DebugPrint for $t {
            fn debug_print(&self, out: &mut DebugOutput) {
                out.write_value(self);
            }
        }
    )*};
}

impl_debug_print_display!(str, String, bool, char, i32, i64, u32, u64, usize);

/// Formats a float with six significant digits, switching to scientific
/// notation for exponents below -4 or above 5. Trailing zeros are dropped.
fn format_significant(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_owned();
    }

    // Rounds to six significant digits, the exponent follows the rounding
    let scientific = format!("{value:.5e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..6).contains(&exponent) {
        let decimals = usize::try_from(5 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

fn write_scalar<T: Scalar>(out: &mut DebugOutput, value: T) {
    out.write_value(format_significant(value.to_f64().unwrap_or(f64::NAN)));
}

impl DebugPrint for f32 {
    fn debug_print(&self, out: &mut DebugOutput) {
        write_scalar(out, *self);
    }
}

impl DebugPrint for f64 {
    fn debug_print(&self, out: &mut DebugOutput) {
        write_scalar(out, *self);
    }
}

fn print_vector<T: Scalar>(out: &mut DebugOutput, vector: T::Vec3) {
    let [x, y, z] = T::vec3_to_array(vector);
    write_scalar(out, x);
    out.write_value(", ");
    write_scalar(out, y);
    out.write_value(", ");
    write_scalar(out, z);
}

/// `{x, y, z}, w`
fn print_quaternion_parts<T: Scalar>(out: &mut DebugOutput, quaternion: &Quaternion<T>) {
    out.write_value("{");
    print_vector::<T>(out, quaternion.vector());
    out.write_value("}, ");
    write_scalar(out, quaternion.scalar());
}

impl DebugPrint for Vec3 {
    fn debug_print(&self, out: &mut DebugOutput) {
        out.write_value("Vector(");
        out.compact(|out| {
            print_vector::<f32>(out, *self);
            out.write_value(")");
        });
    }
}

impl DebugPrint for DVec3 {
    fn debug_print(&self, out: &mut DebugOutput) {
        out.write_value("Vector(");
        out.compact(|out| {
            print_vector::<f64>(out, *self);
            out.write_value(")");
        });
    }
}

/// `Quaternion({x, y, z}, w)`
impl<T: Scalar> DebugPrint for Quaternion<T> {
    fn debug_print(&self, out: &mut DebugOutput) {
        out.write_value("Quaternion(");
        out.compact(|out| {
            print_quaternion_parts(out, self);
            out.write_value(")");
        });
    }
}

/// `Dual(real, dual)`
impl<X: DebugPrint + Copy> DebugPrint for Dual<X> {
    fn debug_print(&self, out: &mut DebugOutput) {
        out.write_value("Dual(");
        out.compact(|out| {
            self.real().debug_print(out);
            out.write_value(", ");
            self.dual().debug_print(out);
            out.write_value(")");
        });
    }
}

/// `DualQuaternion({{x, y, z}, w}, {{x, y, z}, w})`
impl<T: Scalar> DebugPrint for DualQuaternion<T> {
    fn debug_print(&self, out: &mut DebugOutput) {
        out.write_value("DualQuaternion({");
        out.compact(|out| {
            print_quaternion_parts(out, &self.real());
            out.write_value("}, {");
            print_quaternion_parts(out, &self.dual());
            out.write_value("})");
        });
    }
}

fn display_via_debug_output<V: DebugPrint>(value: &V, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let out = DebugOutput::with_space_after_each_value(false).print(value);
    f.write_str(out.as_str())
}

impl<T: Scalar> Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_via_debug_output(self, f)
    }
}

impl<X: DebugPrint + Copy> Display for Dual<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_via_debug_output(self, f)
    }
}

impl<T: Scalar> Display for DualQuaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_via_debug_output(self, f)
    }
}
