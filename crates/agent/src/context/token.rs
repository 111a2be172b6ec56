//! Token counting and context trimming.
//!
//! A "token" here is a whitespace-delimited word. This is coarser than the
//! model's sub-word tokenizer and is kept that way on purpose: budgets are
//! expressed in words throughout the pipeline.

/// Headroom reserved for the persona, question and answer.
pub const DEFAULT_BUFFER_TOKENS: usize = 1000;

/// Count whitespace-delimited tokens.
pub fn count_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Bound `context` to `max_tokens - buffer_tokens` tokens, keeping the tail.
///
/// When the text already fits it is returned verbatim, whitespace included.
/// When it does not, the last tokens are re-joined with single spaces. A
/// buffer at or above the budget trims to the empty string.
pub fn trim_context(context: &str, max_tokens: usize, buffer_tokens: usize) -> String {
    let tokens: Vec<&str> = context.split_whitespace().collect();
    if tokens.len().saturating_add(buffer_tokens) <= max_tokens {
        return context.to_string();
    }

    let keep = max_tokens.saturating_sub(buffer_tokens);
    tokens[tokens.len() - keep.min(tokens.len())..].join(" ")
}
