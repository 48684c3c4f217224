/// A message body split into sender and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedBody {
    /// `None` when the body has no sender prefix (a system notice).
    pub author: Option<String>,
    pub text: String,
}

/// Split `body` at its first `:` into author and text.
///
/// A body without a colon is a system notice. The first colon always wins, so a
/// notice that itself contains a colon (`"Alice changed the subject to: Party"`)
/// is read as a message from `"Alice changed the subject to"`; the export format
/// gives no way to tell the two apart. A blank author is treated as absent.
pub fn classify_body(body: &str) -> ClassifiedBody {
    match body.split_once(':') {
        Some((author, text)) => {
            let author = author.trim();
            ClassifiedBody {
                author: (!author.is_empty()).then(|| author.to_string()),
                text: text.trim().to_string(),
            }
        }
        None => ClassifiedBody { author: None, text: body.trim().to_string() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_message_with_author() {
        let body = classify_body("Alice: bye\n");
        assert_eq!(body.author.as_deref(), Some("Alice"));
        assert_eq!(body.text, "bye");
    }

    #[test]
    fn test_classify_keeps_later_colons_in_text() {
        let body = classify_body("Bob: meeting at 10:30: don't be late");
        assert_eq!(body.author.as_deref(), Some("Bob"));
        assert_eq!(body.text, "meeting at 10:30: don't be late");
    }

    #[test]
    fn test_classify_system_notice() {
        let body = classify_body("Carol joined using this group's invite link\n");
        assert_eq!(body.author, None);
        assert_eq!(body.text, "Carol joined using this group's invite link");
    }

    #[test]
    fn test_classify_multiline_text() {
        let body = classify_body("Dave: first\nsecond\n\n");
        assert_eq!(body.text, "first\nsecond");
    }

    #[test]
    fn test_classify_first_colon_wins_for_notices() {
        let body = classify_body("Alice changed the subject to: Party");
        assert_eq!(body.author.as_deref(), Some("Alice changed the subject to"));
        assert_eq!(body.text, "Party");
    }

    #[test]
    fn test_classify_empty_author_and_text() {
        let body = classify_body(" : hello");
        assert_eq!(body.author, None);
        assert_eq!(body.text, "hello");

        let body = classify_body("Eve:");
        assert_eq!(body.author.as_deref(), Some("Eve"));
        assert_eq!(body.text, "");
    }

    #[test]
    fn test_classify_unicode_author() {
        let body = classify_body("José 🎉: olá");
        assert_eq!(body.author.as_deref(), Some("José 🎉"));
        assert_eq!(body.text, "olá");
    }
}
