//! The measurement collaborator.
//!
//! The core never measures glyphs or words itself. [`Measurer`] is the seam
//! at which a caller plugs in a rendering environment: it is queried once per
//! distinct token produced by tokenizing raw text (with hyphenation hints
//! already applied) and returns the widths the item model needs.

use crate::math::Num;

/// One token of a paragraph, as produced by an external tokenizer/hyphenator.
///
/// Word parts are expected to already be hyphenation-free runs (soft hyphens
/// are reported as their own token); turning raw text into this stream is
/// left to the caller's own tokenizer and hyphenator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A run of non-whitespace content with no internal break opportunities.
    Word(&'a str),
    /// A run of inter-word whitespace.
    Gap,
    /// A soft-hyphen break opportunity inside a word.
    SoftHyphen,
    /// The end of the paragraph.
    EndOfParagraph,
}

/// Supplies widths for the items a [`crate::Paragraph`] is built from.
///
/// Queried once per distinct token; the core does not cache results, so
/// callers wanting memoization should do so behind their own implementation.
pub trait Measurer<N: Num = f32> {
    /// The width of a word-part box.
    fn word_width(&self, word: &str) -> N;

    /// The `(width, stretch, shrink)` triple for the glue inserted at an
    /// inter-word gap.
    fn space_glue(&self) -> (N, N, N);

    /// The width of the penalty item inserted at a soft-hyphen break
    /// opportunity (the width of the hyphen glyph if the break is taken).
    fn hyphen_width(&self) -> N;

    /// The aesthetic cost assigned to breaking at a soft hyphen. Defaults to
    /// a mild, flagged penalty.
    fn hyphen_cost(&self) -> N {
        N::from(50)
    }
}
