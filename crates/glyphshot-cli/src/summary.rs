use std::path::Path;

use console::Style;
use glyphshot_core::word::{reading_order, WordBox};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    low: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            low: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

/// Confidence below which a word is printed dimmed.
const LOW_CONFIDENCE: f32 = 60.0;

pub fn print_word_table(image: &Path, words: &[WordBox]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Recognized words"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();
    println!("  {:<8}{}", s.label.apply_to("Image"), s.path.apply_to(image.display()));
    println!("  {:<8}{}", s.label.apply_to("Words"), s.value.apply_to(words.len()));
    println!();

    if words.is_empty() {
        return;
    }

    println!(
        "  {:>5}  {:>13}  {:>9}  {:>5}  {}",
        s.label.apply_to("Line"),
        s.label.apply_to("Position"),
        s.label.apply_to("Size"),
        s.label.apply_to("Conf"),
        s.label.apply_to("Text"),
    );

    for i in reading_order(words) {
        let w = &words[i];
        let text = if w.confidence < LOW_CONFIDENCE {
            s.low.apply_to(w.text.as_str())
        } else {
            s.value.apply_to(w.text.as_str())
        };
        println!(
            "  {:>5}  {:>13}  {:>9}  {:>5.1}  {}",
            format!("{}.{}", w.line_id.block, w.line_id.line),
            format!("{},{}", w.x, w.y),
            format!("{}x{}", w.w, w.h),
            w.confidence,
            text,
        );
    }
    println!();
}
