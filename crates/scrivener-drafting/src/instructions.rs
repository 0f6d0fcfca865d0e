//! Instruction block resolution

/// Instructions applied when the caller supplies none
pub const DEFAULT_INSTRUCTIONS: &str = "You are a legal drafting assistant.
Summarize the key facts and produce a structured draft resolution or memo.
Keep the tone formal and comply with the information provided.
";

/// Trimmed caller instructions, or the trimmed defaults when those are blank
pub fn build_instruction_block(instructions: &str) -> &str {
    resolve(instructions, DEFAULT_INSTRUCTIONS)
}

pub(crate) fn resolve<'a>(instructions: &'a str, fallback: &'a str) -> &'a str {
    match instructions.trim() {
        "" => fallback.trim(),
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_instructions_trimmed() {
        assert_eq!(
            build_instruction_block("\n  Draft a board resolution.  \n"),
            "Draft a board resolution."
        );
    }

    #[test]
    fn test_blank_falls_back_to_defaults() {
        let expected = DEFAULT_INSTRUCTIONS.trim();
        assert_eq!(build_instruction_block(""), expected);
        assert_eq!(build_instruction_block(" \n\t "), expected);
        assert!(!expected.ends_with('\n'));
    }

    #[test]
    fn test_custom_fallback() {
        assert_eq!(resolve("", "  Be brief.\n"), "Be brief.");
        assert_eq!(resolve("Cite sections.", "Be brief."), "Cite sections.");
    }
}
