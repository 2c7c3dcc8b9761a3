//! Textual rendering of vectors.
//!
//! A vector renders as `vec{N}{suffix}(e0, e1, ...)`, where the suffix names the scalar class
//! (`f`, `d`, `ld`, `i`, `li`, `u`, `lu`) and each element uses its class format: two decimals for
//! the float classes, plain integers otherwise.

use std::{fmt, io};

use crate::core::traits::{Dim, Scalar, SupportedDim};
use crate::error::KitError;

use super::Vector;

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vec{}{}(", N, T::SUFFIX)?;
        for (i, elem) in self.data.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt_elem(f)?;
        }
        f.write_str(")")
    }
}

impl<T: Scalar, const N: usize> Vector<T, N>
where
    Dim<N>: SupportedDim,
{
    /// Writes `prefix` followed by the rendering of `self` and a newline to `sink`.
    ///
    /// ```
    /// # use vekit::*;
    /// let mut out = Vec::new();
    /// vec3(1.0f32, -2.0, 3.0).debug(&mut out, "a = ").unwrap();
    /// assert_eq!(out, b"a = vec3f(1.00, -2.00, 3.00)\n");
    /// ```
    ///
    /// Write errors from the sink are returned as [`KitError::Sink`].
    pub fn debug<W>(&self, sink: &mut W, prefix: &str) -> Result<(), KitError>
    where
        W: io::Write + ?Sized,
    {
        writeln!(sink, "{}{}", prefix, self)?;
        Ok(())
    }
}
