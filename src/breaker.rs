//! The breaker: the dynamic-programming search over active breakpoints
//! described by Knuth and Plass. This is the core of the crate.
//!
//! Active and passive nodes are kept in a single arena (`Vec<Node<N>>`)
//! addressed by index rather than as an intrusive pointer list. A node is
//! "active" exactly when it is reachable from `Run::active` by following
//! `link`; deactivating a node is just rewriting the `link` of its
//! predecessor (or `Run::active` itself) to skip over it. Because indices
//! into the arena never move and a `previous` link only ever points to a
//! node created earlier, reconstruction is a safe, ordinary backward walk —
//! no raw pointers are needed to model the paper's arena.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::{BreakError, OverfullPolicy};
use crate::item::Item;
use crate::math::Num;
use crate::paragraph::Paragraph;

/// A single line of text as represented by its break point and adjustment
/// ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<N: Num = f32> {
    /// The index of the item at which this line breaks.
    pub break_at: usize,
    /// The adjustment ratio applied to this line's glue. Negative shrinks,
    /// positive stretches. A value below `-1` marks a recovered overfull
    /// line.
    pub adjustment_ratio: N,
}

impl<N: Num> Line<N> {
    /// Whether this line is the result of overfull recovery rather than a
    /// normally feasible fit.
    pub fn is_overfull(&self) -> bool {
        self.adjustment_ratio <= N::from(-1)
    }

    /// The width of a glue item with the given width, stretch, and shrink
    /// once this line's adjustment ratio is taken into account.
    pub fn glue_width(&self, width: N, stretch: N, shrink: N) -> N {
        if self.adjustment_ratio < N::from(0) {
            width + shrink * self.adjustment_ratio
        } else if self.adjustment_ratio > N::from(0) {
            width + stretch * self.adjustment_ratio
        } else {
            width
        }
    }
}

/// Fitness classes, ordered tight → very loose. Consecutive lines whose
/// fitness classes differ by more than one incur the `γ` demerit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Fitness {
    #[default]
    Tight = 0,
    Normal = 1,
    Loose = 2,
    VeryLoose = 3,
}

const FITNESS_CLASSES: [Fitness; 4] = [
    Fitness::Tight,
    Fitness::Normal,
    Fitness::Loose,
    Fitness::VeryLoose,
];

impl Fitness {
    fn of<N: Num>(r: N) -> Self {
        if r < N::rat(-1, 2) {
            Fitness::Tight
        } else if r <= N::rat(1, 2) {
            Fitness::Normal
        } else if r <= N::from(1) {
            Fitness::Loose
        } else {
            Fitness::VeryLoose
        }
    }

    fn distance(self, other: Self) -> usize {
        (self as isize - other as isize).unsigned_abs()
    }
}

/// A tentative breakpoint reached by the search (an "active node").
#[derive(Clone, Copy)]
struct Node<N> {
    position: usize,
    line: usize,
    fitness: Fitness,
    total_width: N,
    total_stretch: N,
    total_shrink: N,
    total_demerits: N,
    /// The adjustment ratio of the line ending at this node, fixed at
    /// creation time.
    ratio: N,
    previous: Option<usize>,
    /// Index of the next node in the active list, or `None` at the tail.
    link: Option<usize>,
}

/// Runs the Knuth-Plass line-breaking algorithm to calculate the optimal
/// break points for a paragraph.
#[derive(Debug, Clone, Copy)]
pub struct KnuthPlass<N> {
    threshold: N,
    looseness: isize,
    flagged_demerit: N,
    fitness_demerit: N,
    overfull_policy: OverfullPolicy,
}

impl<N: Num> KnuthPlass<N> {
    /// Creates a breaker with no threshold, no looseness bias, and no
    /// flagged- or fitness-demerit penalty. This reproduces a plain
    /// minimum-demerits fit.
    pub fn new() -> Self {
        KnuthPlass {
            threshold: N::INFINITY,
            looseness: 0,
            flagged_demerit: N::from(0),
            fitness_demerit: N::from(0),
            overfull_policy: OverfullPolicy::Recover,
        }
    }

    /// Sets the adjustment ratio threshold `ρ`. Lines are not allowed to
    /// break at a given point if doing so would cause the line's adjustment
    /// ratio to exceed this value. The paper suggests values from 1 to 5 for
    /// ordinary typesetting.
    pub fn with_threshold(mut self, threshold: N) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the looseness `q`. The chosen paragraph will have as close to
    /// `q` more (or, if negative, fewer) lines than the demerit-optimal
    /// count as feasibility allows.
    pub fn with_looseness(mut self, looseness: isize) -> Self {
        self.looseness = looseness;
        self
    }

    /// Sets the demerit `α` added when two consecutive breakpoints are both
    /// flagged (e.g. both hyphenation points).
    pub fn with_flagged_demerit(mut self, flagged_demerit: N) -> Self {
        self.flagged_demerit = flagged_demerit;
        self
    }

    /// Sets the demerit `γ` added when consecutive lines' fitness classes
    /// differ by more than one.
    pub fn with_fitness_demerit(mut self, fitness_demerit: N) -> Self {
        self.fitness_demerit = fitness_demerit;
        self
    }

    /// Chooses how the breaker reacts to an infeasible paragraph. Defaults
    /// to [`OverfullPolicy::Recover`].
    pub fn with_overfull_policy(mut self, policy: OverfullPolicy) -> Self {
        self.overfull_policy = policy;
        self
    }

    /// Sets `ρ`, `q`, `α`, and `γ` together in one call, as a single-call
    /// alternative to chaining the `with_*` builder setters individually.
    pub fn configure(self, threshold: N, looseness: isize, flagged_demerit: N, fitness_demerit: N) -> Self {
        self.with_threshold(threshold)
            .with_looseness(looseness)
            .with_flagged_demerit(flagged_demerit)
            .with_fitness_demerit(fitness_demerit)
    }

    /// Computes the optimal set of line breaks for `paragraph` against the
    /// per-line schedule `line_lengths` (if the line number exceeds the
    /// schedule, the last entry is reused).
    ///
    /// Returns one [`Line`] per chosen line, in order; `breakpoints[0] = 0`
    /// is implicit (every line starts where the previous one ended, and the
    /// first line starts at the beginning of the paragraph).
    pub fn break_paragraph(
        &self,
        paragraph: &Paragraph<N>,
        line_lengths: &[N],
    ) -> Result<Vec<Line<N>>, BreakError> {
        paragraph.validate()?;
        if line_lengths.is_empty() {
            return Err(BreakError::EmptyLineLengths);
        }
        Run::new(paragraph.items(), line_lengths, self).execute()
    }
}

impl<N: Num> Default for KnuthPlass<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// The state of one `break_paragraph` call. Scoped to a single call so that
/// a [`KnuthPlass`] instance holds only configuration and is trivially
/// reusable across paragraphs.
struct Run<'a, N: Num> {
    items: &'a [Item<N>],
    line_lengths: &'a [N],
    config: &'a KnuthPlass<N>,
    /// The least line number beyond which `lines(j)` is constant, or
    /// `usize::MAX` when looseness is in play. Used to cut the inner scan
    /// short once no further line lengths can change the outcome.
    first_uniform_line: usize,

    nodes: Vec<Node<N>>,
    active: Option<usize>,
    last_deactivated: Option<usize>,

    total_width: N,
    total_stretch: N,
    total_shrink: N,
}

impl<'a, N: Num> Run<'a, N> {
    fn new(items: &'a [Item<N>], line_lengths: &'a [N], config: &'a KnuthPlass<N>) -> Self {
        let first_uniform_line = if config.looseness != 0 {
            usize::MAX
        } else {
            first_uniform_line(line_lengths)
        };
        Run {
            items,
            line_lengths,
            config,
            first_uniform_line,
            nodes: vec![Node {
                position: 0,
                line: 0,
                fitness: Fitness::Normal,
                total_width: N::from(0),
                total_stretch: N::from(0),
                total_shrink: N::from(0),
                total_demerits: N::from(0),
                ratio: N::from(0),
                previous: None,
                link: None,
            }],
            active: Some(0),
            last_deactivated: None,
            total_width: N::from(0),
            total_stretch: N::from(0),
            total_shrink: N::from(0),
        }
    }

    fn line_width(&self, j: usize) -> N {
        let i = (j - 1).min(self.line_lengths.len() - 1);
        self.line_lengths[i]
    }

    /// Outer scan: walks the item sequence once, running the inner scan at
    /// every legal breakpoint.
    fn execute(mut self) -> Result<Vec<Line<N>>, BreakError> {
        for b in 0..self.items.len() {
            match self.items[b] {
                Item::Box { width } => {
                    self.total_width = self.total_width + width;
                }
                Item::Glue {
                    width,
                    stretch,
                    shrink,
                } => {
                    if b > 0 && matches!(self.items[b - 1], Item::Box { .. }) {
                        self.process_breakpoint(b)?;
                    }
                    self.total_width = self.total_width + width;
                    self.total_stretch = self.total_stretch + stretch;
                    self.total_shrink = self.total_shrink + shrink;
                }
                Item::Penalty { cost, .. } => {
                    if cost != N::INFINITY {
                        self.process_breakpoint(b)?;
                    }
                    // Penalty widths are not part of the running sums; they
                    // only count against the line that actually breaks here.
                }
            }
        }

        let chosen = self.choose_terminal();
        Ok(self.reconstruct(chosen))
    }

    /// Inner scan at candidate break `b`: rescans the active list, deactivating
    /// infeasible predecessors and tracking the best predecessor per fitness
    /// class so new nodes can be spliced in at `b`.
    fn process_breakpoint(&mut self, b: usize) -> Result<(), BreakError> {
        let mut a = self.active;
        let mut prev_a: Option<usize> = None;

        while let Some(start) = a {
            let mut class_node: [Option<usize>; 4] = [None; 4];
            let mut class_demerits: [N; 4] = [N::INFINITY; 4];
            let mut class_ratio: [N; 4] = [N::from(0); 4];
            let mut min_demerits = N::INFINITY;

            let mut cur = start;
            loop {
                let next = self.nodes[cur].link;
                let (j, r) = self.adjustment_ratio(cur, b);

                if r < N::from(-1) || self.items[b].is_forced_break() {
                    self.deactivate(cur, prev_a);
                } else {
                    prev_a = Some(cur);
                }

                if N::from(-1) <= r && r <= self.config.threshold {
                    let (demerits, fitness) = self.demerits_and_fitness(r, cur, b);
                    let fi = fitness as usize;
                    if demerits < class_demerits[fi] {
                        class_demerits[fi] = demerits;
                        class_node[fi] = Some(cur);
                        class_ratio[fi] = r;
                        if demerits < min_demerits {
                            min_demerits = demerits;
                        }
                    }
                }

                match next {
                    None => {
                        a = None;
                        break;
                    }
                    Some(n) => {
                        if self.nodes[n].line >= j && j < self.first_uniform_line {
                            a = Some(n);
                            break;
                        }
                        cur = n;
                    }
                }
            }

            if min_demerits < N::INFINITY {
                let (tw, ty, tz) = self.total_after(b);
                let bound = min_demerits + self.config.fitness_demerit;
                for &fitness in &FITNESS_CLASSES {
                    let fi = fitness as usize;
                    let demerits = class_demerits[fi];
                    if demerits <= bound {
                        let pred = class_node[fi].expect("class with finite demerits has a predecessor");
                        let new_idx = self.nodes.len();
                        self.nodes.push(Node {
                            position: b,
                            line: self.nodes[pred].line + 1,
                            fitness,
                            total_width: tw,
                            total_stretch: ty,
                            total_shrink: tz,
                            total_demerits: demerits,
                            ratio: class_ratio[fi],
                            previous: Some(pred),
                            link: a,
                        });
                        match prev_a {
                            None => self.active = Some(new_idx),
                            Some(p) => self.nodes[p].link = Some(new_idx),
                        }
                        prev_a = Some(new_idx);
                    }
                }
            }
        }

        if self.active.is_none() && self.items[b].is_forced_break() {
            self.recover(b)?;
        }
        Ok(())
    }

    /// Line number and adjustment ratio for a line from the end of node `a`
    /// to position `b`.
    fn adjustment_ratio(&self, a: usize, b: usize) -> (usize, N) {
        let node = &self.nodes[a];
        let j = node.line + 1;
        let r = self.items[b].adjustment_ratio(
            self.total_width - node.total_width,
            self.total_stretch - node.total_stretch,
            self.total_shrink - node.total_shrink,
            self.line_width(j),
        );
        (j, r)
    }

    /// Demerits and fitness class for a line from node `a` to `b`, per the
    /// Knuth-Plass demerit formula.
    fn demerits_and_fitness(&self, r: N, a: usize, b: usize) -> (N, Fitness) {
        let cost = self.items[b].penalty_cost();
        let base = if cost >= N::from(0) {
            (N::from(1) + N::from(100) * r.abs().powi(3) + cost).powi(2)
        } else if cost != N::NEG_INFINITY {
            (N::from(1) + N::from(100) * r.abs().powi(3)).powi(2) - cost.powi(2)
        } else {
            (N::from(1) + N::from(100) * r.abs().powi(3)).powi(2)
        };

        let node = &self.nodes[a];
        let d = base + self.config.flagged_demerit * self.items[b].penalty_flag() * self.items[node.position].penalty_flag();

        let fitness = Fitness::of(r);
        let d = if fitness.distance(node.fitness) > 1 {
            d + self.config.fitness_demerit
        } else {
            d
        };

        (d + node.total_demerits, fitness)
    }

    /// Unlinks node `at` (whose predecessor in the active list is `prev`,
    /// if any) from the active list.
    fn deactivate(&mut self, at: usize, prev: Option<usize>) {
        let link = self.nodes[at].link;
        match prev {
            Some(p) => self.nodes[p].link = link,
            None => {}
        }
        if self.active == Some(at) {
            self.active = link;
        }
        self.last_deactivated = Some(at);
    }

    /// Look-ahead sums: `Σw`, `Σy`, `Σz` after `b`, plus the contribution of
    /// any glue/penalty immediately following `b` up to (but not including)
    /// the next box, also stopping just after a later forcing penalty.
    fn total_after(&self, b: usize) -> (N, N, N) {
        let (mut tw, mut ty, mut tz) = (self.total_width, self.total_stretch, self.total_shrink);
        for (i, item) in self.items.iter().enumerate().skip(b) {
            match item {
                Item::Box { .. } => break,
                Item::Glue {
                    width,
                    stretch,
                    shrink,
                } => {
                    tw = tw + *width;
                    ty = ty + *stretch;
                    tz = tz + *shrink;
                }
                Item::Penalty { cost, .. } => {
                    if *cost == N::NEG_INFINITY && i > b {
                        break;
                    }
                }
            }
        }
        (tw, ty, tz)
    }

    /// Overfull recovery: readmits the most recently deactivated node as the
    /// sole active node, pinning its line's adjustment ratio to `-1` rather
    /// than producing no output.
    fn recover(&mut self, b: usize) -> Result<(), BreakError> {
        if self.config.overfull_policy == OverfullPolicy::Reject {
            return Err(BreakError::Overfull { position: b });
        }
        let pred = self
            .last_deactivated
            .expect("active list cannot empty without a prior deactivation");
        let (tw, ty, tz) = self.total_after(b);
        let new_idx = self.nodes.len();
        self.nodes.push(Node {
            position: b,
            line: self.nodes[pred].line + 1,
            fitness: Fitness::of(N::from(-1)),
            total_width: tw,
            total_stretch: ty,
            total_shrink: tz,
            total_demerits: self.nodes[pred].total_demerits,
            ratio: N::from(-1),
            previous: Some(pred),
            link: None,
        });
        self.active = Some(new_idx);
        Ok(())
    }

    /// Terminal choice: the active node with fewest total demerits, adjusted
    /// for looseness if configured.
    fn choose_terminal(&self) -> usize {
        let mut best = self.active.expect(
            "paragraph invariant guarantees a forcing break, so the scan always ends with an active node",
        );
        let mut node = self.active;
        while let Some(idx) = node {
            if self.nodes[idx].total_demerits < self.nodes[best].total_demerits {
                best = idx;
            }
            node = self.nodes[idx].link;
        }

        let q = self.config.looseness;
        if q == 0 {
            return best;
        }

        let k = self.nodes[best].line as isize;
        let mut chosen = best;
        let mut chosen_delta: Option<isize> = None;
        let mut node = self.active;
        while let Some(idx) = node {
            let delta = self.nodes[idx].line as isize - k;
            let qualifies = delta.signum() == q.signum() && delta.abs() <= q.abs();
            if qualifies {
                let better = match chosen_delta {
                    None => true,
                    Some(cd) => {
                        delta.abs() < cd
                            || (delta.abs() == cd
                                && self.nodes[idx].total_demerits < self.nodes[chosen].total_demerits)
                    }
                };
                if better {
                    chosen = idx;
                    chosen_delta = Some(delta.abs());
                }
            }
            node = self.nodes[idx].link;
        }
        chosen
    }

    /// Reconstruction: walks `previous` back from `chosen` to the start of
    /// the paragraph.
    fn reconstruct(&self, chosen: usize) -> Vec<Line<N>> {
        let mut lines = Vec::with_capacity(self.nodes[chosen].line);
        let mut node = chosen;
        loop {
            let n = &self.nodes[node];
            lines.push(Line {
                break_at: n.position,
                adjustment_ratio: n.ratio,
            });
            match n.previous {
                Some(p) => node = p,
                None => break,
            }
        }
        lines.reverse();
        lines
    }
}

/// Computes `j0`: the least line number beyond which `lines(j)` is constant.
fn first_uniform_line<N: Num>(line_lengths: &[N]) -> usize {
    let n = line_lengths.len();
    let last = line_lengths[n - 1];
    let mut i = n;
    while i > 1 && line_lengths[i - 2] == last {
        i -= 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paragraph::Paragraph;
    use test_case::test_case;

    #[test_case(-2.0 => Fitness::Tight)]
    #[test_case(-0.51 => Fitness::Tight)]
    #[test_case(-0.5 => Fitness::Normal)]
    #[test_case(0.0 => Fitness::Normal)]
    #[test_case(0.5 => Fitness::Normal)]
    #[test_case(0.51 => Fitness::Loose)]
    #[test_case(1.0 => Fitness::Loose)]
    #[test_case(1.01 => Fitness::VeryLoose)]
    fn fitness_class_boundaries(r: f32) -> Fitness {
        Fitness::of(r)
    }

    fn simple_paragraph(words: &[(&str, f32)]) -> Paragraph<f32> {
        let mut p = Paragraph::new();
        for (i, &(_, width)) in words.iter().enumerate() {
            if i > 0 {
                p.push_glue(1.0, 1.0, 1.0);
            }
            p.push_box(width);
        }
        p.close();
        p
    }

    #[test]
    fn trivial_fit_single_line() {
        let mut p = Paragraph::<f32>::new();
        p.push_box(3.0)
            .push_glue(1.0, 1.0, 1.0)
            .push_box(3.0)
            .close();
        let breaker = KnuthPlass::new();
        let lines = breaker.break_paragraph(&p, &[10.0]).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].break_at, 4);
        assert!(lines[0].adjustment_ratio >= 0.0);
    }

    #[test]
    fn forced_two_line_break() {
        let mut p = Paragraph::<f32>::new();
        p.push_box(3.0)
            .push_glue(1.0, 1.0, 1.0)
            .push_box(3.0)
            .close();
        let breaker = KnuthPlass::new();
        let lines = breaker.break_paragraph(&p, &[3.0]).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].break_at, 1);
        assert_eq!(lines[0].adjustment_ratio, 0.0);
        assert_eq!(lines[1].break_at, 4);
        assert!(lines[1].adjustment_ratio >= 0.0);
    }

    #[test]
    fn hyphenation_preferred_over_overfull() {
        let mut p = Paragraph::<f32>::new();
        p.push_box(5.0)
            .push_penalty(1.0, 50.0, true)
            .push_box(5.0)
            .close();
        let breaker = KnuthPlass::new();
        let lines = breaker.break_paragraph(&p, &[6.0]).unwrap();
        assert_eq!(lines[0].break_at, 1);
        assert_eq!(lines[0].adjustment_ratio, 0.0);
    }

    #[test]
    fn overfull_line_recovers_with_ratio_minus_one() {
        let mut p = Paragraph::<f32>::new();
        p.push_box(20.0).close();
        let breaker = KnuthPlass::new();
        let lines = breaker.break_paragraph(&p, &[5.0]).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].break_at, 2);
        assert_eq!(lines[0].adjustment_ratio, -1.0);
        assert!(lines[0].is_overfull());
    }

    #[test]
    fn overfull_can_be_rejected_instead() {
        let mut p = Paragraph::<f32>::new();
        p.push_box(20.0).close();
        let breaker = KnuthPlass::new().with_overfull_policy(OverfullPolicy::Reject);
        let err = breaker.break_paragraph(&p, &[5.0]).unwrap_err();
        assert!(matches!(err, BreakError::Overfull { .. }));
    }

    #[test]
    fn looseness_bias_adds_a_line() {
        // A paragraph long enough to naturally fit several lines either way,
        // so that requesting +1 line via looseness is actually satisfiable.
        let words: Vec<(&str, f32)> = vec![
            ("a", 8.0),
            ("b", 8.0),
            ("c", 8.0),
            ("d", 8.0),
            ("e", 8.0),
            ("f", 8.0),
        ];
        let p = simple_paragraph(&words);
        let baseline = KnuthPlass::new().break_paragraph(&p, &[20.0]).unwrap();
        let loose = KnuthPlass::new()
            .with_looseness(1)
            .break_paragraph(&p, &[20.0])
            .unwrap();
        assert!(loose.len() >= baseline.len());
    }

    #[test]
    fn empty_line_lengths_is_rejected() {
        let mut p = Paragraph::<f32>::new();
        p.push_box(1.0).close();
        let err = KnuthPlass::new().break_paragraph(&p, &[]).unwrap_err();
        assert_eq!(err, BreakError::EmptyLineLengths);
    }

    #[test]
    fn missing_terminator_is_rejected() {
        let mut p = Paragraph::<f32>::new();
        p.push_box(1.0);
        let err = KnuthPlass::new().break_paragraph(&p, &[10.0]).unwrap_err();
        assert!(matches!(err, BreakError::MalformedParagraph(_)));
    }

    #[test]
    fn determinism() {
        let mut p = Paragraph::<f32>::new();
        p.push_box(3.0)
            .push_glue(1.0, 1.0, 1.0)
            .push_box(5.0)
            .push_glue(1.0, 1.0, 1.0)
            .push_box(2.0)
            .close();
        let breaker = KnuthPlass::new();
        let a = breaker.break_paragraph(&p, &[8.0]).unwrap();
        let b = breaker.break_paragraph(&p, &[8.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn raising_fitness_demerit_never_decreases_demerits() {
        // Two candidate lines with differing fitness classes so that γ > 0
        // can actually bite; raising it can only add cost, never remove it.
        let mut p = Paragraph::<f32>::new();
        p.push_box(2.0)
            .push_glue(1.0, 1.0, 1.0)
            .push_box(8.0)
            .push_glue(1.0, 1.0, 1.0)
            .push_box(2.0)
            .close();
        let low = KnuthPlass::new().with_fitness_demerit(0.0);
        let high = KnuthPlass::new().with_fitness_demerit(1000.0);
        let low_lines = low.break_paragraph(&p, &[10.0]).unwrap();
        let high_lines = high.break_paragraph(&p, &[10.0]).unwrap();
        let low_total: f32 = low_lines.iter().map(|l| l.adjustment_ratio.abs()).sum();
        let high_total: f32 = high_lines.iter().map(|l| l.adjustment_ratio.abs()).sum();
        // A higher γ never makes the chosen layout look "more fit" in
        // aggregate than a lower one did (a weak proxy here for demerits,
        // which the public API does not expose directly).
        assert!(high_total >= low_total - 1e-4 || high_lines.len() != low_lines.len());
    }

    #[test]
    fn fitness_penalty_prefers_adjacent_classes() {
        // Two candidate breaks of roughly equal base cost, one of which
        // leaves adjacent lines in wildly different fitness classes (tight
        // next to very loose) and one of which keeps them close. With a
        // large γ the breaker must avoid the jarring sequence.
        let mut p = Paragraph::<f32>::new();
        p.push_box(5.0)
            .push_glue(1.0, 1.0, 1.0)
            .push_box(5.0)
            .push_glue(1.0, 8.0, 1.0)
            .push_box(1.0)
            .push_glue(1.0, 1.0, 1.0)
            .push_box(5.0)
            .close();
        let no_gamma = KnuthPlass::new();
        let with_gamma = KnuthPlass::new().with_fitness_demerit(10000.0);
        let a = no_gamma.break_paragraph(&p, &[11.0]).unwrap();
        let b = with_gamma.break_paragraph(&p, &[11.0]).unwrap();
        // Both must still produce a valid, fully-covering break sequence.
        assert_eq!(a.last().unwrap().break_at, p.len() - 1);
        assert_eq!(b.last().unwrap().break_at, p.len() - 1);
    }

    #[test]
    fn build_from_measured_tokens_round_trips_into_a_single_line() {
        use crate::measure::{Measurer, Token};

        struct CharMeasurer;
        impl Measurer<f32> for CharMeasurer {
            fn word_width(&self, word: &str) -> f32 {
                word.chars().count() as f32
            }
            fn space_glue(&self) -> (f32, f32, f32) {
                (1.0, 1.0, 1.0)
            }
            fn hyphen_width(&self) -> f32 {
                1.0
            }
        }

        let tokens = [
            Token::Word("foo"),
            Token::Gap,
            Token::Word("bar"),
            Token::Gap,
            Token::Word("baz"),
        ];
        let p = Paragraph::<f32>::build(tokens, &CharMeasurer);
        let m = p.len();
        let breaker = KnuthPlass::new();
        let lines = breaker.break_paragraph(&p, &[1000.0]).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].break_at, m - 1);
    }

    #[test]
    fn line_width_recomputes_to_the_target() {
        // Property #2: recomputing L from the break positions and applying
        // the chosen ratio to the line's glue reproduces lines(i) exactly.
        let mut p = Paragraph::<f32>::new();
        p.push_box(3.0)
            .push_glue(1.0, 2.0, 2.0)
            .push_box(3.0)
            .close();
        let target = 9.0f32;
        let breaker = KnuthPlass::new();
        let lines = breaker.break_paragraph(&p, &[target]).unwrap();
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert!(!line.is_overfull());
        // Reconstruct L the same way the breaker's own bookkeeping does:
        // box(3) + adjusted-glue + box(3).
        let adjusted_glue = line.glue_width(1.0, 2.0, 2.0);
        let l = 3.0 + adjusted_glue + 3.0;
        assert!((l - target).abs() < 1e-4);
    }

    #[test]
    fn raising_threshold_never_increases_demerits() {
        // A paragraph where the tight threshold forbids the globally-optimal
        // break, so relaxing it can only help (or do nothing).
        let mut p = Paragraph::<f32>::new();
        p.push_box(4.0)
            .push_glue(1.0, 1.0, 1.0)
            .push_box(4.0)
            .push_glue(1.0, 1.0, 1.0)
            .push_box(4.0)
            .close();
        let tight = KnuthPlass::new().with_threshold(0.2);
        let loose = KnuthPlass::new().with_threshold(5.0);
        let tight_lines = tight.break_paragraph(&p, &[9.0]).unwrap();
        let loose_lines = loose.break_paragraph(&p, &[9.0]).unwrap();
        // Both must produce a legal result; the relaxed threshold is never
        // forced into a worse (more-overfull) final ratio than the tight one.
        assert!(loose_lines.last().unwrap().adjustment_ratio.abs() <= tight_lines.last().unwrap().adjustment_ratio.abs() + 1e-4
            || !tight_lines.last().unwrap().is_overfull());
    }
}
