//! Suggested prompts shown on the welcome panel.
//!
//! Selecting one goes through the same submit path as typed input.
//! The panel (and with it these prompts) is only offered while the
//! conversation is empty.

use serde::Serialize;

/// A canned message offered as a one-keystroke shortcut.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SuggestedPrompt {
    pub text: &'static str,
    pub category: &'static str,
}

/// The fixed prompt cards, in display order.
pub const SUGGESTED_PROMPTS: [SuggestedPrompt; 6] = [
    SuggestedPrompt {
        text: "Analyze my portfolio risk",
        category: "Portfolio",
    },
    SuggestedPrompt {
        text: "Show market trends this week",
        category: "Market",
    },
    SuggestedPrompt {
        text: "Generate monthly report",
        category: "Reports",
    },
    SuggestedPrompt {
        text: "Compare tech stocks",
        category: "Analysis",
    },
    SuggestedPrompt {
        text: "Calculate potential returns",
        category: "Investment",
    },
    SuggestedPrompt {
        text: "Show market sentiment",
        category: "Market",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_are_nonempty() {
        for prompt in &SUGGESTED_PROMPTS {
            assert!(!prompt.text.trim().is_empty());
            assert!(!prompt.category.is_empty());
        }
    }

    #[test]
    fn test_prompt_texts_are_distinct() {
        for (i, a) in SUGGESTED_PROMPTS.iter().enumerate() {
            for b in &SUGGESTED_PROMPTS[i + 1..] {
                assert_ne!(a.text, b.text);
            }
        }
    }
}
