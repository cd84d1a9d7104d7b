use chrono::{TimeZone, Utc};
use fake::faker::lorem::en::{Paragraph, Sentence, Words};
use fake::Fake;

use crate::features::prompts::models::{Prompt, PromptFields, PromptId};

/// Random but valid prompt fields
pub fn fake_fields() -> PromptFields {
    let words: Vec<String> = Words(1..3).fake();
    PromptFields {
        name: words.join(" "),
        description: Sentence(3..8).fake(),
        content: Paragraph(1..4).fake(),
    }
}

/// A stored prompt with a fixed timestamp
pub fn prompt(id: i64, name: &str) -> Prompt {
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    Prompt {
        id: PromptId(id),
        name: name.to_string(),
        description: format!("{} description", name),
        content: format!("{} content", name),
        created_at: at,
        updated_at: at,
    }
}
