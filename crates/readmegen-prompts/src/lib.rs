pub mod conventions;
pub mod sections;

use std::sync::OnceLock;

pub use sections::{RequiredSection, REQUIRED_SECTIONS};

const PREAMBLE: &str = "You are a helpful assistant that converts text into a well-formatted \
README.md document following professional conventions.";

/// The system instruction sent with every conversion.
///
/// Rendered once from the section and convention tables; every call returns
/// the same string.
pub fn instruction_text() -> &'static str {
    static TEXT: OnceLock<String> = OnceLock::new();
    TEXT.get_or_init(assemble_instructions)
}

fn assemble_instructions() -> String {
    let mut prompt = String::new();
    prompt.push('\n');
    prompt.push_str(PREAMBLE);
    prompt.push_str("\n\n");
    conventions::append_conventions(&mut prompt);
    sections::append_sections(&mut prompt);
    prompt.push_str("---\n");
    prompt
}
