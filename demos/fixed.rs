extern crate fixed;
extern crate text_layout;

use fixed::types::I16F16;
use std::fmt::{self, Write};
use text_layout::{KnuthPlass, Line, Num, Paragraph};
use text_layout::Fixed as Fix;

type F = Fix<I16F16>;

// `F::from` would be ambiguous between `Num::from` and `Fixed`'s own
// `From<I16F16>` impl, so go through the trait explicitly here.
fn n(v: i32) -> F {
    <F as Num>::from(v)
}

fn layout_paragraph<'a>(paragraph: &'a str, breaker: &KnuthPlass<F>, max_width: F) -> Vec<&'a str> {
    // Process the paragraph into its items, one per character.
    let mut items = Paragraph::<F>::new();
    let mut at_start = true;
    for c in paragraph.chars() {
        if c.is_whitespace() && !at_start {
            items.push_glue(n(1), n(1), n(0));
        } else {
            items.push_box(n(1));
        }
        at_start = false;
    }
    items.close();

    // Calculate the paragraph's breaks.
    let breaks: Vec<Line<F>> = breaker
        .break_paragraph(&items, &[max_width])
        .expect("demo paragraph is always well formed");

    // Render the laid-out paragraph using the break positions.
    let mut lines = Vec::new();
    let mut start = 0;
    let mut cursor = 0;
    for (i, _) in paragraph.chars().enumerate() {
        if cursor < breaks.len() && i == breaks[cursor].break_at {
            lines.push(&paragraph[start..i]);
            start = i + 1;
            cursor += 1;
        }
    }
    lines.push(&paragraph[start..]);
    lines
}

fn layout_text() -> Result<String, fmt::Error> {
    let text = "  Far out in the uncharted backwaters of the unfashionable end of the western spiral arm of the Galaxy lies a small unregarded yellow sun. Orbiting this at a distance of roughly ninety-two million miles is an utterly insignificant little blue-green planet whose ape-descended life forms are so amazingly primitive that they still think digital watches are a pretty neat idea.";
    let knuth_plass = KnuthPlass::new()
        .with_threshold(F::INFINITY)
        .with_flagged_demerit(n(100))
        .with_fitness_demerit(n(100));
    let lines = layout_paragraph(text, &knuth_plass, n(80));
    let mut result = String::new();
    writeln!(&mut result, "┏{}┓", "━".repeat(80))?;
    for l in lines {
        let pad = 80 - l.chars().count();
        writeln!(&mut result, "┃{}{}┃", l, " ".repeat(pad))?;
    }
    writeln!(&mut result, "┗{}┛", "━".repeat(80))?;
    Ok(result)
}

fn main() -> Result<(), fmt::Error> {
    print!("{}", layout_text()?);
    Ok(())
}
