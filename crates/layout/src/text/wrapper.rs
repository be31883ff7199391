use crate::metrics::TextMetrics;
use folio_types::FontSpec;

/// Tolerance for float noise when comparing a line width against its column.
const EPSILON: f32 = 0.01;

/// Greedy line breaker.
///
/// The measurer owns the break decision; glyph widths come from the wrapped
/// [`TextMetrics`]. It holds no state between calls, so wrapping the same
/// input twice always yields the same lines. Boxes are sized from one call
/// and drawn from another, and the two must agree.
pub struct TextMeasurer<'a, M: TextMetrics + ?Sized> {
    metrics: &'a M,
}

impl<'a, M: TextMetrics + ?Sized> TextMeasurer<'a, M> {
    pub fn new(metrics: &'a M) -> Self {
        Self { metrics }
    }

    pub fn width(&self, text: &str, font: &FontSpec, size_pt: f32) -> f32 {
        self.metrics.text_width(text, font, size_pt)
    }

    /// Break `text` into lines no wider than `max_width` millimetres.
    ///
    /// Hard newlines always start a new line and blank lines between
    /// paragraphs are kept. Whitespace runs collapse to a single space. A word
    /// wider than the column is split between characters. Text that is empty
    /// or only whitespace produces no lines.
    pub fn wrap(&self, text: &str, max_width: f32, font: &FontSpec, size_pt: f32) -> Vec<String> {
        let text = text.trim_end();
        if text.trim().is_empty() {
            return Vec::new();
        }

        let fits = |candidate: &str| self.width(candidate, font, size_pt) <= max_width + EPSILON;
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let mut current = String::new();
            let mut any_word = false;

            for word in paragraph.split_whitespace() {
                any_word = true;
                if current.is_empty() {
                    if fits(word) {
                        current.push_str(word);
                    } else {
                        current = self.break_word(word, &mut lines, &fits);
                    }
                    continue;
                }

                let candidate = format!("{} {}", current, word);
                if fits(&candidate) {
                    current = candidate;
                } else {
                    lines.push(std::mem::take(&mut current));
                    if fits(word) {
                        current.push_str(word);
                    } else {
                        current = self.break_word(word, &mut lines, &fits);
                    }
                }
            }

            if !any_word {
                lines.push(String::new());
            } else if !current.is_empty() {
                lines.push(current);
            }
        }

        lines
    }

    /// Wrap several independent strings, concatenating their lines.
    pub fn wrap_all<S: AsRef<str>>(
        &self,
        texts: &[S],
        max_width: f32,
        font: &FontSpec,
        size_pt: f32,
    ) -> Vec<String> {
        texts
            .iter()
            .flat_map(|t| self.wrap(t.as_ref(), max_width, font, size_pt))
            .collect()
    }

    /// Split an over-long word between characters. Full pieces are pushed to
    /// `lines`; the unfinished tail is returned so following words can join it.
    /// Every piece holds at least one character, so this always terminates.
    fn break_word(&self, word: &str, lines: &mut Vec<String>, fits: &impl Fn(&str) -> bool) -> String {
        let mut piece = String::new();
        for ch in word.chars() {
            piece.push(ch);
            if !fits(&piece) && piece.chars().count() > 1 {
                piece.pop();
                lines.push(std::mem::take(&mut piece));
                piece.push(ch);
            }
        }
        piece
    }
}
