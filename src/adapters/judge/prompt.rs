//! Prompt construction for language-model judges

use crate::config::CriteriaConfig;
use crate::domain::Record;
use std::fmt::Write;

/// Builds the evaluation prompt for `record`
///
/// Criteria are numbered in order: topics to exclude, tone requirements, and
/// a single forbidden-words line when any are configured.
pub fn build_prompt(record: &Record, criteria: &CriteriaConfig) -> String {
    let mut criteria_list = String::new();
    let mut index = 1;

    for item in criteria
        .topics_to_exclude
        .iter()
        .chain(&criteria.tone_requirements)
    {
        let _ = writeln!(criteria_list, "{index}. {item}");
        index += 1;
    }

    if !criteria.forbidden_words.is_empty() {
        let _ = writeln!(
            criteria_list,
            "{index}. Contains any of these words: {}",
            criteria.forbidden_words.join(", ")
        );
    }

    let guidance = criteria.additional_guidance.trim();
    let additional = if guidance.is_empty() {
        String::new()
    } else {
        format!("\n\nAdditional guidance: {guidance}")
    };

    format!(
        "You are evaluating tweets for a professional's Twitter cleanup.\n\
         \n\
         Tweet ID: {id}\n\
         Tweet: \"{text}\"\n\
         \n\
         Mark for deletion if it violates any of these criteria:\n\
         {criteria_list}{additional}\n\
         \n\
         Respond in JSON format:\n\
         {{\n  \"decision\": \"DELETE\" or \"KEEP\",\n  \"reason\": \"brief explanation\"\n}}",
        id = record.id,
        text = record.text,
    )
}
