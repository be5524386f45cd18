//! Prompt helpers: the tool-listing system prompt and prompt fingerprints.

use sha2::{Digest, Sha256};

use crate::definition::ToolDefinition;

/// Opening line of the generated system prompt.
pub const SYSTEM_PROMPT_PREAMBLE: &str = "You are a helpful assistant. \nYou are able to call the following tools:";

/// Render the system prompt that advertises `tools` to the model.
///
/// One `- name: description` line per tool, in the order given.
pub fn build_system_prompt(tools: &[ToolDefinition]) -> String {
    let mut prompt = String::from(SYSTEM_PROMPT_PREAMBLE);
    for tool in tools {
        prompt.push_str("\n- ");
        prompt.push_str(&tool.function.name);
        prompt.push_str(": ");
        prompt.push_str(tool.function.description.as_deref().unwrap_or(""));
    }
    prompt
}

/// Compute a stable SHA-256 fingerprint for a prompt string.
pub fn hash_prompt(prompt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prompt.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}
