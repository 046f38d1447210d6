// Shared prompt fragments used by every model backend.
// Flow-specific prompts live alongside the flow that uses them.

/// Header placed before the context documents appended to a user message.
pub const CONTEXT_PREFACE: &str = "\n\nUse the following information to complete your task:\n\n";

/// Renders context documents as a single text part:
/// the preface, one `- [i]: doc` line per document, then a blank line.
pub fn render_context(documents: &[String]) -> String {
    let mut out = String::from(CONTEXT_PREFACE);
    for (i, doc) in documents.iter().enumerate() {
        out.push_str(&format!("- [{i}]: {doc}\n"));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_context_numbers_documents() {
        let rendered = render_context(&["alpha".to_string(), "beta".to_string()]);
        assert_eq!(
            rendered,
            "\n\nUse the following information to complete your task:\n\n- [0]: alpha\n- [1]: beta\n\n"
        );
    }
}
