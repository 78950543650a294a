//! The paragraph: an ordered sequence of well-formed items, plus the
//! optional token-stream builder convenience.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::BuildError;
use crate::item::Item;
use crate::math::Num;
use crate::measure::{Measurer, Token};

/// An ordered sequence of [`Item`]s.
///
/// A well-formed paragraph's last two items are always a glue with
/// `(w=0, y=+∞, z=0)` followed by a penalty with `p=−∞`: this forces the
/// final line to break at the end of the paragraph regardless of how the
/// search proceeds.
#[derive(Debug, Clone, Default)]
pub struct Paragraph<N: Num = f32> {
    items: Vec<Item<N>>,
}

impl<N: Num> Paragraph<N> {
    /// Creates an empty paragraph.
    pub fn new() -> Self {
        Paragraph { items: Vec::new() }
    }

    /// Appends an unbreakable box of the given width.
    pub fn push_box(&mut self, width: N) -> &mut Self {
        self.items.push(Item::Box { width });
        self
    }

    /// Appends a glue item.
    pub fn push_glue(&mut self, width: N, stretch: N, shrink: N) -> &mut Self {
        self.items.push(Item::Glue {
            width,
            stretch,
            shrink,
        });
        self
    }

    /// Appends a penalty item.
    pub fn push_penalty(&mut self, width: N, cost: N, flagged: bool) -> &mut Self {
        self.items.push(Item::Penalty {
            width,
            cost,
            flagged,
        });
        self
    }

    /// Appends the finishing glue and forcing penalty, making the paragraph
    /// well-formed regardless of what precedes it.
    pub fn close(&mut self) -> &mut Self {
        self.push_glue(N::from(0), N::INFINITY, N::from(0));
        self.push_penalty(N::from(0), N::NEG_INFINITY, false);
        self
    }

    /// The item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Item<N>> {
        self.items.get(index)
    }

    /// The number of items in the paragraph.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the paragraph has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Direct access to the underlying items, for the breaker.
    pub(crate) fn items(&self) -> &[Item<N>] {
        &self.items
    }

    /// Checks well-formedness: the paragraph must end with
    /// `(glue(0, +∞, 0), penalty(−∞))`.
    pub fn validate(&self) -> Result<(), BuildError> {
        let n = self.items.len();
        if n < 2 {
            return Err(BuildError::MissingTerminator);
        }
        let ok = matches!(
            (&self.items[n - 2], &self.items[n - 1]),
            (
                Item::Glue { stretch, .. },
                Item::Penalty { cost, .. },
            ) if *stretch == N::INFINITY && *cost == N::NEG_INFINITY
        );
        if ok {
            Ok(())
        } else {
            Err(BuildError::MissingTerminator)
        }
    }

    /// Builds a paragraph from a token stream, consulting `measurer` once per
    /// token for widths. Word-parts become boxes, gaps become glue, soft
    /// hyphens become flagged penalties, and the stream is always closed with
    /// the finishing glue/penalty pair regardless of whether the caller's
    /// stream ends in [`Token::EndOfParagraph`].
    pub fn build<'a, I, M>(tokens: I, measurer: &M) -> Self
    where
        I: IntoIterator<Item = Token<'a>>,
        M: Measurer<N>,
    {
        let mut paragraph = Paragraph::new();
        let mut last_was_box = false;
        for token in tokens {
            match token {
                Token::Word(word) => {
                    paragraph.push_box(measurer.word_width(word));
                    last_was_box = true;
                }
                Token::Gap => {
                    let (width, stretch, shrink) = measurer.space_glue();
                    paragraph.push_glue(width, stretch, shrink);
                    last_was_box = false;
                }
                Token::SoftHyphen => {
                    if last_was_box {
                        paragraph.push_penalty(
                            measurer.hyphen_width(),
                            measurer.hyphen_cost(),
                            true,
                        );
                    }
                    last_was_box = false;
                }
                Token::EndOfParagraph => break,
            }
        }
        paragraph.close();
        paragraph
    }
}
