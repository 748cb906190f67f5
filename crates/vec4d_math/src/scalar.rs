//! Numeric capability shared by the vector types

use num_traits::Num;

/// Anything that supports `+ - * /`, has a zero and a one, and can be compared.
///
/// Implemented automatically for every primitive integer and float type.
pub trait Scalar: Num + Copy + PartialOrd {}

impl<T: Num + Copy + PartialOrd> Scalar for T {}
