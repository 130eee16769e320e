//! Canned responder behind the dashboard chat box.

/// The only reply the chat box ever gives.
pub const CHAT_REPLY: &str = "Part of universe.";
/// Question recognised by the responder, compared after trimming and lowercasing.
pub const KNOWN_QUESTION: &str = "what is milky way?";

/// Answer a chat question. Every input receives [`CHAT_REPLY`]; the known
/// question is only distinguished in the logs.
pub fn respond(question: &str) -> &'static str {
    let normalized = question.trim().to_lowercase();
    if normalized == KNOWN_QUESTION {
        tracing::debug!("Chat question matched the known prompt");
        CHAT_REPLY
    } else {
        tracing::debug!("Chat question did not match; using default reply");
        CHAT_REPLY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_question_gets_fixed_reply() {
        assert_eq!(respond("What is Milky Way?  "), "Part of universe.");
    }

    #[test]
    fn any_other_input_gets_same_reply() {
        for question in ["", "how big is the sun?", "   ", "what is milky way"] {
            assert_eq!(respond(question), CHAT_REPLY);
        }
    }
}
