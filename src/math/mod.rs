//! Integer arithmetic for bin pricing and swaps.
//!
//! Everything here is deterministic integer math; floating point appears
//! only in [`Price::to_f64_lossy`](crate::domain::Price::to_f64_lossy) for
//! display.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`PriceCurve`] | `id -> price` and its floor inverse |
//! | [`mul_shift`], [`shift_div`], [`mul_div`] | Q128.128 products and quotients |
//! | [`input_for_output`], [`output_for_input`] | single-bin swap steps |
//! | [`CheckedArithmetic`] | `Result`-returning quantity arithmetic |

mod checked;
mod fixed_point;
mod price_curve;
mod swap_math;

pub use checked::CheckedArithmetic;
pub use fixed_point::{mul_div, mul_div_u128, mul_shift, shift_div, SCALE_OFFSET};
pub use price_curve::PriceCurve;
pub use swap_math::{fill_exact_in, fill_exact_out, input_for_output, output_for_input, BinFill};
