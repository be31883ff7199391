//! Advance widths for the standard-14 fonts, in 1/1000 em.
//!
//! Tables cover printable ASCII (32..=126). Oblique and italic faces share the
//! widths of their upright face. Characters outside the table use the face's
//! average width.

use once_cell::sync::Lazy;
use std::collections::HashMap;

const FIRST_CHAR: u32 = 32;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

const COURIER: [u16; 95] = [600; 95];

struct FaceWidths {
    table: &'static [u16; 95],
    average: u16,
}

static FACES: Lazy<HashMap<&'static str, FaceWidths>> = Lazy::new(|| {
    let helvetica = || FaceWidths { table: &HELVETICA, average: 556 };
    let helvetica_bold = || FaceWidths { table: &HELVETICA_BOLD, average: 611 };
    let times = || FaceWidths { table: &TIMES_ROMAN, average: 500 };
    let times_bold = || FaceWidths { table: &TIMES_BOLD, average: 500 };
    let courier = || FaceWidths { table: &COURIER, average: 600 };

    HashMap::from([
        ("Helvetica", helvetica()),
        ("Helvetica-Oblique", helvetica()),
        ("Helvetica-Bold", helvetica_bold()),
        ("Helvetica-BoldOblique", helvetica_bold()),
        ("Times-Roman", times()),
        ("Times-Italic", times()),
        ("Times-Bold", times_bold()),
        ("Times-BoldItalic", times_bold()),
        ("Courier", courier()),
        ("Courier-Oblique", courier()),
        ("Courier-Bold", courier()),
        ("Courier-BoldOblique", courier()),
    ])
});

/// Width of `text` in points when set in `base_font` at `size_pt`.
pub fn string_width_pt(base_font: &str, text: &str, size_pt: f32) -> f32 {
    let face = FACES.get(base_font).unwrap_or_else(|| &FACES["Helvetica"]);
    let units: u32 = text
        .chars()
        .map(|c| {
            let code = c as u32;
            if (FIRST_CHAR..FIRST_CHAR + 95).contains(&code) {
                face.table[(code - FIRST_CHAR) as usize] as u32
            } else {
                face.average as u32
            }
        })
        .sum();
    units as f32 / 1000.0 * size_pt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helvetica_digits_are_tabular() {
        let a = string_width_pt("Helvetica", "1111", 10.0);
        let b = string_width_pt("Helvetica", "8888", 10.0);
        assert_eq!(a, b);
        assert!((a - 22.24).abs() < 0.001);
    }

    #[test]
    fn bold_is_wider_than_regular() {
        let regular = string_width_pt("Helvetica", "Invoice total", 12.0);
        let bold = string_width_pt("Helvetica-Bold", "Invoice total", 12.0);
        assert!(bold > regular);
    }

    #[test]
    fn unknown_face_measures_as_helvetica() {
        assert_eq!(
            string_width_pt("NoSuchFont", "abc", 9.0),
            string_width_pt("Helvetica", "abc", 9.0)
        );
    }

    #[test]
    fn courier_is_monospaced() {
        assert!((string_width_pt("Courier", "iW", 10.0) - 12.0).abs() < 0.001);
    }
}
