//! Total-fit paragraph line breaking, after Knuth & Plass (1981).
//!
//! A [`Paragraph`] is built from [`Item`]s (boxes, glue, and penalties); a
//! [`KnuthPlass`] breaker searches the space of legal breakpoints for the set
//! of lines with least total demerits, recovering gracefully rather than
//! failing outright when no line width fits.
//!
//! ```
//! use text_layout::{KnuthPlass, Paragraph};
//!
//! let mut paragraph = Paragraph::<f32>::new();
//! paragraph
//!     .push_box(3.0)
//!     .push_glue(1.0, 1.0, 1.0)
//!     .push_box(3.0)
//!     .close();
//!
//! let lines = KnuthPlass::new().break_paragraph(&paragraph, &[10.0]).unwrap();
//! assert_eq!(lines.len(), 1);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "fixed", feature = "libm")))]
compile_error! { "Either the std, fixed, or libm feature must be enabled" }

extern crate alloc;

mod breaker;
mod error;
mod item;
mod math;
mod measure;
mod paragraph;

pub use breaker::{KnuthPlass, Line};
pub use error::{BreakError, BuildError, OverfullPolicy};
pub use item::Item;
pub use math::Num;
#[cfg(feature = "fixed")]
pub use math::Fixed;
pub use measure::{Measurer, Token};
pub use paragraph::Paragraph;
