//! Demonstrates the breaker's overfull recovery: a word too wide for
//! any line in the schedule does not abort the layout, it simply produces a
//! line with an adjustment ratio below -1.

extern crate text_layout;
use std::fmt::{self, Write};
use text_layout::{KnuthPlass, OverfullPolicy, Paragraph};

fn layout_text() -> Result<String, fmt::Error> {
    let mut paragraph = Paragraph::<f32>::new();
    paragraph
        .push_box(40.0) // a single "word" much wider than any configured line
        .close();

    let breaker = KnuthPlass::new();
    let lines = breaker
        .break_paragraph(&paragraph, &[20.0])
        .expect("default policy recovers instead of failing");

    let mut result = String::new();
    for line in &lines {
        writeln!(
            &mut result,
            "break at item {}, ratio {:.1}{}",
            line.break_at,
            line.adjustment_ratio,
            if line.is_overfull() { " (overfull)" } else { "" }
        )?;
    }

    // With the stricter policy the same paragraph is rejected outright.
    let rejecting = KnuthPlass::new().with_overfull_policy(OverfullPolicy::Reject);
    match rejecting.break_paragraph(&paragraph, &[20.0]) {
        Ok(_) => unreachable!("a 40-wide box can never fit a 20-wide line"),
        Err(e) => writeln!(&mut result, "with Reject: {e}")?,
    }

    Ok(result)
}

fn main() -> Result<(), fmt::Error> {
    print!("{}", layout_text()?);
    Ok(())
}
