//! Interactive story builder.

use crate::model::{
    ContentRecord, Interactivity, InteractivityKind, Quiz, QuizAnswer, Section, StoryElement,
};

/// Turn sections into story elements.
///
/// Interactivity cycles reveal, quiz, highlight by position; quiz sections
/// carry a three-option question about the section title.
pub fn build_story(record: &ContentRecord) -> Vec<StoryElement> {
    record
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let kind = InteractivityKind::for_index(index);
            let options = match kind {
                InteractivityKind::Quiz => Some(quiz_for(section)),
                InteractivityKind::Reveal | InteractivityKind::Highlight => None,
            };

            StoryElement {
                id: format!("story-section-{}", index),
                kind: "story-section".to_string(),
                title: section.title.clone(),
                content: section.content.clone(),
                interactivity: Interactivity { kind, options },
            }
        })
        .collect()
}

/// The fixed quiz attached to a section.
pub fn quiz_for(section: &Section) -> Quiz {
    let answer = |text: &str, correct: bool| QuizAnswer {
        text: text.to_string(),
        correct,
    };

    Quiz {
        question: format!("What is the main point of \"{}\"?", section.title),
        answers: vec![
            answer("Option A", true),
            answer("Option B", false),
            answer("Option C", false),
        ],
    }
}
