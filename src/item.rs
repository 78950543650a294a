//! The item model: boxes, glue, and penalties, per Knuth-Plass '81.

use crate::math::Num;

/// A single item in a paragraph.
///
/// A paragraph is an ordered sequence of these three kinds. The breaker only
/// ever consults the attributes below; it has no notion of what a box
/// actually renders as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Item<N: Num = f32> {
    /// An unbreakable box containing paragraph content. Typically represents a
    /// glyph or sequence of glyphs. Lines may not be broken at boxes. The
    /// width may be zero or negative.
    Box {
        /// The width of the box.
        width: N,
    },
    /// Whitespace that separates boxes. Lines may be broken at a glue item,
    /// provided the item immediately before it is a box.
    Glue {
        /// The normal width of the whitespace.
        width: N,
        /// The stretch parameter. If this item needs to be stretched in order
        /// to lay out a line, the stretch amount will be proportional to this
        /// value.
        stretch: N,
        /// The shrink parameter. If this item needs to be shrunk in order to
        /// lay out a line, the shrink amount will be proportional to this
        /// value.
        shrink: N,
    },
    /// A penalty item. Represents a possible breakpoint with a particular
    /// aesthetic cost indicating the desirability or undesirability of a
    /// break at that point.
    Penalty {
        /// The width contributed to the line if a break is taken here (e.g. a
        /// hyphen glyph).
        width: N,
        /// The cost of breaking here. `+∞` forbids a break; `−∞` forces one.
        cost: N,
        /// Whether this is a flagged penalty item (e.g. a hyphenation point).
        /// Two consecutive flagged breaks are discouraged via `α`.
        flagged: bool,
    },
}

impl<N: Num> Item<N> {
    /// The item's effective `penalty` field: `cost` for a penalty item, `0`
    /// otherwise.
    pub(crate) fn penalty_cost(&self) -> N {
        match self {
            Item::Penalty { cost, .. } => *cost,
            _ => N::from(0),
        }
    }

    /// The item's effective `flag` field: `1` for a flagged penalty, `0`
    /// otherwise.
    pub(crate) fn penalty_flag(&self) -> N {
        match self {
            Item::Penalty { flagged: true, .. } => N::from(1),
            _ => N::from(0),
        }
    }

    /// Whether this item is a flagged penalty, used for the `α` demerit term.
    pub(crate) fn is_flagged(&self) -> bool {
        matches!(self, Item::Penalty { flagged: true, .. })
    }

    /// Whether this item forces a break (`p = −∞`).
    pub(crate) fn is_forced_break(&self) -> bool {
        matches!(self, Item::Penalty { cost, .. } if *cost == N::NEG_INFINITY)
    }

    /// Returns `(width, stretch, shrink, is_legal_breakpoint)` for this item
    /// at position `b`, given the item immediately preceding it (`None` at
    /// the start of the paragraph).
    ///
    /// A glue is a legal breakpoint iff it is immediately preceded by a box.
    /// A penalty is a legal breakpoint iff its cost is less than `+∞`.
    pub(crate) fn is_legal_breakpoint(&self, pred: Option<&Item<N>>) -> (N, N, N, bool) {
        match self {
            Item::Box { width } => (*width, N::from(0), N::from(0), false),
            Item::Glue {
                width,
                stretch,
                shrink,
            } => (
                *width,
                *stretch,
                *shrink,
                matches!(pred, Some(Item::Box { .. })),
            ),
            Item::Penalty { width, cost, .. } => {
                (*width, N::from(0), N::from(0), *cost != N::INFINITY)
            }
        }
    }

    /// Calculates the adjustment ratio for a line ending at this item, given
    /// the line's accumulated width, stretch, and shrink (not including this
    /// item's own width) and the target `line_width`.
    pub(crate) fn adjustment_ratio(&self, width: N, stretch: N, shrink: N, line_width: N) -> N {
        let penalty_width = match self {
            Item::Penalty { width, .. } => *width,
            _ => N::from(0),
        };
        let width = width + penalty_width;
        if width < line_width {
            if stretch > N::from(0) {
                (line_width - width) / stretch
            } else {
                N::INFINITY
            }
        } else if width > line_width {
            if shrink > N::from(0) {
                (line_width - width) / shrink
            } else {
                N::NEG_INFINITY
            }
        } else {
            N::from(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glue_is_legal_breakpoint_only_after_a_box() {
        let glue = Item::<f32>::Glue {
            width: 1.0,
            stretch: 1.0,
            shrink: 1.0,
        };
        let boxed = Item::<f32>::Box { width: 3.0 };
        let (.., legal_after_box) = glue.is_legal_breakpoint(Some(&boxed));
        assert!(legal_after_box);

        let (.., legal_after_glue) = glue.is_legal_breakpoint(Some(&glue));
        assert!(!legal_after_glue);

        let (.., legal_at_start) = glue.is_legal_breakpoint(None);
        assert!(!legal_at_start);
    }

    #[test]
    fn forbidden_penalty_is_never_legal() {
        let forbidden = Item::<f32>::Penalty {
            width: 0.0,
            cost: f32::INFINITY,
            flagged: false,
        };
        let (.., legal) = forbidden.is_legal_breakpoint(None);
        assert!(!legal);
    }

    #[test]
    fn forcing_penalty_is_legal_and_forces() {
        let forced = Item::<f32>::Penalty {
            width: 0.0,
            cost: f32::NEG_INFINITY,
            flagged: false,
        };
        let (.., legal) = forced.is_legal_breakpoint(None);
        assert!(legal);
        assert!(forced.is_forced_break());
    }

    #[test]
    fn adjustment_ratio_signs() {
        let glue = Item::<f32>::Glue {
            width: 0.0,
            stretch: 2.0,
            shrink: 2.0,
        };
        // Line is short of its target: positive ratio (stretch).
        assert!(glue.adjustment_ratio(8.0, 2.0, 2.0, 10.0) > 0.0);
        // Line exceeds its target: negative ratio (shrink).
        assert!(glue.adjustment_ratio(12.0, 2.0, 2.0, 10.0) < 0.0);
        // Exact fit.
        assert_eq!(glue.adjustment_ratio(10.0, 2.0, 2.0, 10.0), 0.0);
    }
}
