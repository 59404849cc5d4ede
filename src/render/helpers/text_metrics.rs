//! Text measurement for the builtin Helvetica face
//!
//! Widths come from Adobe's AFM files for the Standard 14 fonts and are used
//! to wrap clue text and right-align labels before anything is drawn.

/// Trait for text measurement operations
pub trait TextMeasure {
    /// Measure text width in points at a given font size
    fn measure_width_pt(&self, text: &str, font_size: f32) -> f32;

    /// Wrap text into lines no wider than `max_width` points.
    ///
    /// Explicit newlines always start a new line. Words are packed greedily;
    /// a word wider than the whole line is broken between characters. The
    /// empty string wraps to a single empty line.
    fn split_text_to_size(&self, text: &str, max_width: f32, font_size: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let space = self.measure_width_pt(" ", font_size);

        for paragraph in text.split('\n') {
            let paragraph = paragraph.trim_end_matches('\r');
            let mut current = String::new();
            let mut current_width = 0.0;

            for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
                let word_width = self.measure_width_pt(word, font_size);
                let needed = if current.is_empty() {
                    word_width
                } else {
                    current_width + space + word_width
                };

                if needed <= max_width {
                    if !current.is_empty() {
                        current.push(' ');
                    }
                    current.push_str(word);
                    current_width = needed;
                    continue;
                }

                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0.0;
                }

                if word_width <= max_width {
                    current.push_str(word);
                    current_width = word_width;
                    continue;
                }

                for c in word.chars() {
                    let mut buf = [0u8; 4];
                    let c_width = self.measure_width_pt(c.encode_utf8(&mut buf), font_size);
                    if !current.is_empty() && current_width + c_width > max_width {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0.0;
                    }
                    current.push(c);
                    current_width += c_width;
                }
            }

            lines.push(current);
        }

        lines
    }
}

/// Text measurer for the builtin Helvetica face
#[derive(Debug, Default, Clone, Copy)]
pub struct HelveticaMeasurer;

impl HelveticaMeasurer {
    /// Character width in 1000 units per em
    fn char_width(c: char) -> u16 {
        // Builtin fonts are Win-1252; anything beyond ASCII gets an average width
        if !c.is_ascii() {
            return 500;
        }
        HELVETICA_WIDTHS.get(c as usize).copied().unwrap_or(278)
    }
}

impl TextMeasure for HelveticaMeasurer {
    fn measure_width_pt(&self, text: &str, font_size: f32) -> f32 {
        let total_width: u32 = text.chars().map(|c| Self::char_width(c) as u32).sum();
        (total_width as f32 / 1000.0) * font_size
    }
}

/// Shared Helvetica measurer used for clue wrapping and label alignment
pub fn get_helvetica_measurer() -> &'static HelveticaMeasurer {
    static MEASURER: HelveticaMeasurer = HelveticaMeasurer;
    &MEASURER
}

// =============================================================================
// Adobe AFM Character Width Table (ASCII subset, in 1000 units per em)
// =============================================================================

/// Helvetica character widths (indices 0-127, only 32-126 are valid)
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 128] = [
    // 0-31: Control characters
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 32-47: space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 48-63: 0-9 : ; < = > ?
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // 64-79: @ A-O
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    // 80-95: P-Z [ \ ] ^ _
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // 96-111: ` a-o
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    // 112-127: p-z { | } ~ DEL
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helvetica_measurement() {
        let measurer = get_helvetica_measurer();

        // "Hello" = 722 + 556 + 222 + 222 + 556 = 2278 units
        let width = measurer.measure_width_pt("Hello", 10.0);
        assert!((width - 22.78).abs() < 0.001);

        // Larger font scales linearly
        let bigger = measurer.measure_width_pt("Hello", 20.0);
        assert!((bigger - width * 2.0).abs() < 0.001);
    }


    #[test]
    fn test_empty_text_is_one_line() {
        let lines = get_helvetica_measurer().split_text_to_size("", 94.0, 9.0);
        assert_eq!(lines, vec![String::new()]);
    }

    #[test]
    fn test_short_text_stays_on_one_line() {
        let lines = get_helvetica_measurer().split_text_to_size("Capital of France", 94.0, 9.0);
        assert_eq!(lines, vec!["Capital of France".to_string()]);
    }

    #[test]
    fn test_long_text_wraps_within_width() {
        let measurer = get_helvetica_measurer();
        let text = "A clue that keeps going well past the width of a single narrow column";
        let lines = measurer.split_text_to_size(text, 94.0, 9.0);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(measurer.measure_width_pt(line, 9.0) <= 94.0);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_newlines_start_new_lines() {
        let lines = get_helvetica_measurer().split_text_to_size("One\nTwo", 94.0, 9.0);
        assert_eq!(lines, vec!["One".to_string(), "Two".to_string()]);
    }

    #[test]
    fn test_overlong_word_is_broken() {
        let measurer = get_helvetica_measurer();
        let word = "W".repeat(30);
        let lines = measurer.split_text_to_size(&word, 94.0, 9.0);

        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(measurer.measure_width_pt(line, 9.0) <= 94.0);
        }
    }
}
