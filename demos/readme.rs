extern crate text_layout;
use std::fmt::{self, Write};
use text_layout::{KnuthPlass, Line, Paragraph};

fn layout_paragraph<'a>(paragraph: &'a str, breaker: &KnuthPlass<f32>, max_width: usize) -> Vec<&'a str> {
    // Process the paragraph into its items, one per character: non-whitespace
    // characters become unit-width boxes, and whitespace (other than a
    // leading run) becomes breakable glue.
    let mut items = Paragraph::<f32>::new();
    let mut at_start = true;
    for c in paragraph.chars() {
        if c.is_whitespace() && !at_start {
            items.push_glue(1.0, 1.0, 0.0);
        } else {
            items.push_box(1.0);
        }
        at_start = false;
    }
    items.close();

    // Calculate the paragraph's breaks.
    let breaks: Vec<Line<f32>> = breaker
        .break_paragraph(&items, &[max_width as f32])
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
        .with_threshold(f32::INFINITY)
        .with_flagged_demerit(100.0)
        .with_fitness_demerit(100.0);
    let lines = layout_paragraph(text, &knuth_plass, 80);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme() {
        let expected = r#"┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┓
┃  Far out in the uncharted backwaters of the unfashionable end of the western   ┃
┃spiral arm of the Galaxy lies a small unregarded yellow sun. Orbiting this      ┃
┃at a distance of roughly ninety-two million miles is an utterly insignificant   ┃
┃little blue-green planet whose ape-descended life forms are so amazingly       ┃
┃primitive that they still think digital watches are a pretty neat idea.        ┃
┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛
"#;
        let actual = layout_text().unwrap();
        assert!(actual == expected);
    }
}
