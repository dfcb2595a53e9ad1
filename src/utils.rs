// src/utils.rs

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Turns a section key such as `interview_questions` into the tab title
/// `Interview Questions`.
pub fn format_tab_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len());
    let mut previous_is_word = false;

    for c in key.chars().map(|c| if c == '_' { ' ' } else { c }) {
        let is_word = is_word_char(c);
        if is_word && !previous_is_word {
            label.push(c.to_ascii_uppercase());
        } else {
            label.push(c);
        }
        previous_is_word = is_word;
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert_eq!(format_tab_label("resume_summary"), "Resume Summary");
        assert_eq!(format_tab_label("ats"), "Ats");
        assert_eq!(format_tab_label("interview_questions"), "Interview Questions");
        assert_eq!(format_tab_label("jobs"), "Jobs");
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(format_tab_label("cover-letter v2"), "Cover-Letter V2");
        assert_eq!(format_tab_label("__x"), "  X");
        assert_eq!(format_tab_label(""), "");
        // only the first letter of a word changes
        assert_eq!(format_tab_label("mIXed_CASE"), "MIXed CASE");
    }

    #[test]
    fn test_idempotent() {
        for key in ["resume_summary", "optimized_resume", "a_b_c", "déjà_vu", "x__y", "Already Done"] {
            let once = format_tab_label(key);
            assert_eq!(format_tab_label(&once), once, "key {key}");
        }
    }
}
