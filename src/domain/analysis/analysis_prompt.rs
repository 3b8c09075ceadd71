//! Prompt and output schema for transcript analysis

use serde_json::json;

use crate::domain::completion::OutputSchema;

/// Name of the function the model is forced to call
pub const ANALYSIS_FUNCTION_NAME: &str = "analyze_transcript";

/// Fields every analysis must contain, in schema order
pub const ANALYSIS_FIELDS: &[&str] = &["summary", "keyPoints", "recommendations"];

const SYSTEM_PROMPT: &str = "Analyze the transcript";

const FUNCTION_DESCRIPTION: &str = "Analysis of the information from the phone call transcript";

const EXAMPLE_TRANSCRIPT: &str = r#"A: Hi Ms. Patel, this is Dan from Brightline Plumbing. I'm calling about the water heater quote we sent last week. Did you get a chance to look it over?
B: I did, thanks. The price looks fine, but I wasn't sure whether the old tank gets hauled away or if that's extra.
A: Removal and disposal are included. We'd also need to shut the water off for about three hours during the install.
B: That works. Could you do Thursday morning? I work from home that day.
A: Thursday at 9 a.m. is open. I'll send a confirmation email with the crew lead's name.
B: Perfect, see you Thursday."#;

const SUMMARY_DESCRIPTION: &str = r#"Summarize the transcript. A summary gathers the key facts about the circumstances of the conversation and gives a concise guide to its contents. Include the names, places, events and topics that appear, how substantial each reference is, and roughly where in the conversation it comes up.

Example transcript:
{transcript}

Example summary:
Dan from Brightline Plumbing followed up with Ms. Patel on a water heater quote. She accepted the price once Dan confirmed that removal of the old tank is included. Water will be off for about three hours during the install, which they booked for Thursday at 9 a.m. Dan will email a confirmation with the crew lead's name."#;

const KEY_POINTS_DESCRIPTION: &str = r#"Key points of the transcript, one per line, each starting with "● ".

Example transcript:
{transcript}

Example key points:
● Brightline Plumbing called to follow up on a water heater quote.
● Ms. Patel is happy with the price.
● Removal and disposal of the old tank are included.
● Water will be shut off for about three hours during the install.
● Installation is booked for Thursday at 9 a.m."#;

const RECOMMENDATIONS_DESCRIPTION: &str = r#"The recommended actions the participants of the phone call should perform, one per line, each starting with "● " and a short label.

Example transcript:
{transcript}

Example recommendations:
● Send Confirmation: Email Ms. Patel the Thursday 9 a.m. booking and the crew lead's name today.
● Schedule Crew: Reserve the install crew and a truck for Thursday morning.
● Prepare Equipment: Confirm the replacement water heater is in stock and loaded Wednesday.
● Plan Disposal: Arrange drop-off of the old tank at the recycling site.
● Client Reminder: Text Ms. Patel on Wednesday evening about the three-hour water shutoff."#;

/// System prompt sent with every analysis request
pub fn analysis_system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

/// Forced function call describing the three analysis fields
pub fn analysis_output_schema() -> OutputSchema {
    let with_example = |template: &str| template.replace("{transcript}", EXAMPLE_TRANSCRIPT);

    OutputSchema::new(
        ANALYSIS_FUNCTION_NAME,
        FUNCTION_DESCRIPTION,
        json!({
            "type": "object",
            "properties": {
                "summary": {
                    "type": "string",
                    "description": with_example(SUMMARY_DESCRIPTION),
                },
                "keyPoints": {
                    "type": "string",
                    "description": with_example(KEY_POINTS_DESCRIPTION),
                },
                "recommendations": {
                    "type": "string",
                    "description": with_example(RECOMMENDATIONS_DESCRIPTION),
                },
            },
            "required": ANALYSIS_FIELDS,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_exactly_three_fields() {
        let schema = analysis_output_schema();
        assert_eq!(schema.name, "analyze_transcript");
        assert_eq!(
            schema.required_fields(),
            vec!["summary", "keyPoints", "recommendations"]
        );
    }

    #[test]
    fn schema_fields_are_strings() {
        let schema = analysis_output_schema();
        let properties = schema.parameters["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 3);
        for field in ANALYSIS_FIELDS {
            assert_eq!(properties[*field]["type"], "string", "field {field}");
        }
    }

    #[test]
    fn descriptions_embed_example() {
        let schema = analysis_output_schema();
        let description = schema.parameters["properties"]["summary"]["description"]
            .as_str()
            .unwrap();
        assert!(description.contains("Brightline Plumbing"));
        assert!(!description.contains("{transcript}"));
    }

    #[test]
    fn system_prompt_mentions_transcript() {
        assert!(analysis_system_prompt().contains("transcript"));
    }
}
