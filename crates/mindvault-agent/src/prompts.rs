//! Prompt templates.

/// System instruction for structured journal feedback.
pub const FEEDBACK_SYSTEM_PROMPT: &str = "\
You are a compassionate AI trained in CBT, Stoic philosophy, and emotional intelligence.
The user will input a personal journal entry.

Your task:
1. Detect their mood
2. Analyze emotional clarity and articulation
3. Offer 1 insight using CBT or Stoic wisdom
4. Suggest 1 small action for tomorrow

Respond in this JSON format:
{
  \"mood\": \"...\",
  \"clarityScore\": 0-10,
  \"summary\": \"...\",
  \"insight\": \"...\",
  \"suggestedAction\": \"...\"
}";

/// Separator used when joining retrieved entries or snippets into a context
/// block.
pub const CONTEXT_SEPARATOR: &str = "\n\n";

/// Build the composite system prompt for a personality question.
///
/// Embeds the owner's journal context, the expert knowledge context, and the
/// literal question.
pub fn personality_prompt(journal_context: &str, expert_context: &str, question: &str) -> String {
    format!(
        "You are an insightful AI that analyzes a person's journal to answer questions \
about their personality, habits, and emotional patterns. Ground your answer in the \
journal entries below; use the expert knowledge to deepen it. Be specific and honest, \
not flattering.\n\n\
Journal entries:\n{journal_context}\n\n\
Expert knowledge:\n{expert_context}\n\n\
Question: {question}"
    )
}
