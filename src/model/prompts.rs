//! Prompt templates for each assistant use case.
//!
//! Builders only assemble text; they do not validate or clamp their inputs.

use chrono::{Local, NaiveDate};

pub const SYSTEM_PROMPT: &str = "You are a Church AI Assistant designed to help young Christians in their spiritual journey.
Your primary roles are:

1. Help users plan meaningful quiet times with God
2. Recommend appropriate Christian books for spiritual growth
3. Assist with Bible studies by providing explanations and context
4. Answer questions about Christianity using the Bible as your primary reference

Always provide Biblical references when possible. Be encouraging, supportive, and
deeply rooted in Christian theology while remaining accessible to young believers.
Aim to foster a deeper relationship with God rather than just providing information.";

/// How far along a reader is in their faith; selects the audience phrase in book prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpiritualLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl SpiritualLevel {
    /// Case-insensitive exact match; anything unrecognized is `Beginner`.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Beginner,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Beginner => "new to Christianity or early in their faith journey",
            Self::Intermediate => "established in their faith but looking to go deeper",
            Self::Advanced => "mature believers looking for challenging theological content",
        }
    }
}

pub fn quiet_time_prompt(duration_minutes: u32, focus_area: Option<&str>) -> String {
    quiet_time_prompt_on(Local::now().date_naive(), duration_minutes, focus_area)
}

pub fn quiet_time_prompt_on(today: NaiveDate, duration_minutes: u32, focus_area: Option<&str>) -> String {
    let mut prompt = format!(
        "Please create a structured quiet time plan for today ({}) that takes approximately {} minutes.",
        today.format("%Y-%m-%d"),
        duration_minutes
    );
    push_focus(&mut prompt, focus_area);
    prompt.push_str(
        "\n\nInclude:
1. A specific Bible passage to read
2. Prayer points
3. Reflection questions
4. A practical application step

Format this in a clear, step-by-step manner that's easy to follow.",
    );
    prompt
}

pub fn book_prompt(topic: Option<&str>, level: SpiritualLevel, count: u32) -> String {
    let mut prompt = format!(
        "Please recommend {} Christian books for someone who is {}.",
        count,
        level.description()
    );
    push_focus(&mut prompt, topic);
    prompt.push_str(
        "\n\nFor each book, provide:
1. Title and author
2. A brief description (2-3 sentences)
3. Why it's valuable for spiritual growth
4. A key concept or takeaway",
    );
    prompt
}

pub fn bible_study_prompt(passage: &str) -> String {
    format!(
        "Please create a detailed Bible study guide for the passage: {}.

Include:
1. Historical and cultural context
2. Key themes and theological concepts
3. Verse-by-verse explanation
4. Cross-references to other relevant scriptures
5. Application questions for personal reflection
6. How this passage points to Jesus and the gospel

Make this accessible for young Christians while maintaining theological depth.",
        passage
    )
}

pub fn question_prompt(question: &str) -> String {
    format!(
        "Question about Christianity: {}

Please provide a thorough answer that:
1. Addresses the question directly
2. Provides relevant Bible verses and references
3. Explains any theological concepts in an accessible way
4. Offers practical wisdom if applicable

Base your response primarily on Biblical teachings rather than denominational perspectives.",
        question
    )
}

// Whitespace-only focus counts as absent, unlike a plain truthiness check.
fn push_focus(prompt: &mut String, focus: Option<&str>) {
    if let Some(focus) = focus.filter(|f| !f.trim().is_empty()) {
        prompt.push_str(&format!(" The focus should be on: {}.", focus));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 17).unwrap()
    }

    #[test]
    fn quiet_time_prompt_embeds_date_duration_and_focus() {
        let prompt = quiet_time_prompt_on(day(), 10, Some("patience"));
        assert!(prompt.contains("(2024-03-17)"));
        assert!(prompt.contains("approximately 10 minutes"));
        assert!(prompt.contains("The focus should be on: patience."));
        assert!(prompt.contains("1. A specific Bible passage to read"));
        assert!(prompt.contains("4. A practical application step"));
    }

    #[test]
    fn quiet_time_prompt_skips_missing_or_blank_focus() {
        let without = quiet_time_prompt_on(day(), 15, None);
        let blank = quiet_time_prompt_on(day(), 15, Some("   "));
        assert!(!without.contains("focus should be on"));
        assert_eq!(without, blank);
    }

    #[test]
    fn quiet_time_prompt_uses_todays_date() {
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert!(quiet_time_prompt(15, None).contains(&today));
    }

    #[test]
    fn book_prompt_embeds_count_level_and_topic() {
        let prompt = book_prompt(Some("prayer"), SpiritualLevel::Advanced, 5);
        assert!(prompt.contains("recommend 5 Christian books"));
        assert!(prompt.contains("mature believers looking for challenging theological content"));
        assert!(prompt.contains("The focus should be on: prayer."));
        assert!(prompt.contains("1. Title and author"));
        assert!(prompt.contains("4. A key concept or takeaway"));
    }

    #[test]
    fn unrecognized_level_falls_back_to_beginner() {
        assert_eq!(SpiritualLevel::from_label("EXPERT"), SpiritualLevel::Beginner);
        assert_eq!(SpiritualLevel::from_label(""), SpiritualLevel::Beginner);
        let prompt = book_prompt(None, SpiritualLevel::from_label("EXPERT"), 3);
        assert!(prompt.contains(SpiritualLevel::Beginner.description()));
    }

    #[test]
    fn level_lookup_ignores_case() {
        assert_eq!(SpiritualLevel::from_label("Intermediate"), SpiritualLevel::Intermediate);
        assert_eq!(SpiritualLevel::from_label("ADVANCED"), SpiritualLevel::Advanced);
        assert_eq!(SpiritualLevel::from_label("beginner"), SpiritualLevel::Beginner);
    }

    #[test]
    fn level_lookup_does_not_trim() {
        assert_eq!(SpiritualLevel::from_label(" advanced "), SpiritualLevel::Beginner);
    }

    #[test]
    fn bible_study_prompt_embeds_passage_verbatim() {
        let prompt = bible_study_prompt("John 3:16");
        assert!(prompt.contains("the passage: John 3:16."));
        assert!(prompt.contains("3. Verse-by-verse explanation"));
        assert!(prompt.contains("6. How this passage points to Jesus and the gospel"));
    }

    #[test]
    fn question_prompt_embeds_question_and_source_directive() {
        let prompt = question_prompt("What is grace?");
        assert!(prompt.starts_with("Question about Christianity: What is grace?"));
        assert!(prompt.contains("rather than denominational perspectives"));
    }

    #[test]
    fn system_prompt_lists_all_four_roles() {
        assert!(SYSTEM_PROMPT.contains("quiet times"));
        assert!(SYSTEM_PROMPT.contains("Christian books"));
        assert!(SYSTEM_PROMPT.contains("Bible studies"));
        assert!(SYSTEM_PROMPT.contains("Answer questions"));
    }
}
