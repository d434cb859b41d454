use serde::{Deserialize, Serialize};

use super::{require, EVENT_TYPES};
use crate::types::GenerationRequest;
use crate::Result;

const PLANNER_INSTRUCTION: &str =
    "You are an AI assistant helping to plan community events. Be creative, practical, and encouraging.";

const IDEAS_INSTRUCTION: &str =
    "You are an AI assistant specialized in brainstorming event ideas. Provide output in the requested JSON format.";

/// Which event planner button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventTool {
    Ideas,
    Logistics,
    Sponsorship,
}

impl EventTool {
    /// Ideas come back as a JSON array; the rest are prose.
    pub fn is_structured(&self) -> bool {
        matches!(self, EventTool::Ideas)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPlanner {
    pub event_type: String,
    pub event_description: String,
    pub community_focus: String,
    pub sponsor_target: String,
}

impl Default for EventPlanner {
    fn default() -> Self {
        Self {
            event_type: EVENT_TYPES[0].to_string(),
            event_description: String::new(),
            community_focus: "local neighborhood".to_string(),
            sponsor_target: "local businesses".to_string(),
        }
    }
}

impl EventPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.event_description = description.into();
        self
    }

    pub fn community_focus(mut self, focus: impl Into<String>) -> Self {
        self.community_focus = focus.into();
        self
    }

    pub fn sponsor_target(mut self, target: impl Into<String>) -> Self {
        self.sponsor_target = target.into();
        self
    }

    pub fn request(&self, tool: EventTool) -> Result<GenerationRequest> {
        match tool {
            EventTool::Ideas => self.ideas_request(),
            EventTool::Logistics => self.logistics_request(),
            EventTool::Sponsorship => self.sponsorship_request(),
        }
    }

    /// Five ideas as a JSON array of `{name, description}`.
    pub fn ideas_request(&self) -> Result<GenerationRequest> {
        require(
            &self.event_type,
            "Please select or provide an event type.",
            "event_type",
            "event_planner",
        )?;

        let prompt = format!(
            "Generate 5 creative event ideas for a \"{}\" in a \"{}\" community. For each idea, provide a catchy name and a brief 1-2 sentence description. Format the output as a JSON array of objects, where each object has a \"name\" and \"description\" key.",
            self.event_type, self.community_focus
        );

        Ok(GenerationRequest::new(prompt)
            .system_instruction(IDEAS_INSTRUCTION)
            .structured(true))
    }

    pub fn logistics_request(&self) -> Result<GenerationRequest> {
        self.require_description()?;

        let prompt = format!(
            "Create a checklist of key logistical steps for organizing an event: \"{}\". The event type is \"{}\". Categorize the steps if possible (e.g., Pre-event, During Event, Post-event). Provide a detailed and practical plan.",
            self.event_description, self.event_type
        );

        Ok(GenerationRequest::new(prompt).system_instruction(PLANNER_INSTRUCTION))
    }

    pub fn sponsorship_request(&self) -> Result<GenerationRequest> {
        self.require_description()?;

        let prompt = format!(
            "Draft a persuasive and concise sponsorship request message for an event called \"{}\". This event is a \"{}\". The target audience for this message is potential {}. Include placeholders like [Contact Person] or [Sponsorship Package Link] where appropriate. Make it sound professional yet community-focused.",
            self.event_description, self.event_type, self.sponsor_target
        );

        Ok(GenerationRequest::new(prompt).system_instruction(PLANNER_INSTRUCTION))
    }

    fn require_description(&self) -> Result<()> {
        require(
            &self.event_description,
            "Please provide an event description.",
            "event_description",
            "event_planner",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults_match_form() {
        let planner = EventPlanner::default();
        assert_eq!(planner.event_type, "Neighborhood Cleanup");
        assert_eq!(planner.community_focus, "local neighborhood");
        assert_eq!(planner.sponsor_target, "local businesses");
        assert!(planner.event_description.is_empty());
    }

    #[test]
    fn test_ideas_is_structured() {
        let req = EventPlanner::new()
            .event_type("Block Party")
            .community_focus("riverside apartments")
            .ideas_request()
            .unwrap();
        assert!(req.expect_structured);
        assert!(!req.enable_web_search);
        assert!(req.prompt.contains("\"Block Party\" in a \"riverside apartments\" community"));
        assert!(req
            .system_instruction
            .as_deref()
            .unwrap()
            .contains("brainstorming event ideas"));
    }

    #[test]
    fn test_ideas_needs_event_type() {
        let err = EventPlanner::new().event_type("").ideas_request().unwrap_err();
        assert_eq!(err.user_message(), "Please select or provide an event type.");
    }

    #[test]
    fn test_logistics_and_sponsorship_need_description() {
        let planner = EventPlanner::new();
        for tool in [EventTool::Logistics, EventTool::Sponsorship] {
            match planner.request(tool) {
                Err(Error::Validation { message, context }) => {
                    assert_eq!(message, "Please provide an event description.");
                    assert_eq!(context.field_path.as_deref(), Some("event_description"));
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_sponsorship_prompt_mentions_target() {
        let req = EventPlanner::new()
            .description("Spring park cleanup")
            .sponsor_target("hardware stores")
            .sponsorship_request()
            .unwrap();
        assert!(!req.expect_structured);
        assert!(req.prompt.contains("event called \"Spring park cleanup\""));
        assert!(req.prompt.contains("potential hardware stores."));
        assert_eq!(req.system_instruction.as_deref(), Some(PLANNER_INSTRUCTION));
    }

    #[test]
    fn test_logistics_prompt() {
        let req = EventPlanner::new()
            .description("Spring park cleanup")
            .logistics_request()
            .unwrap();
        assert!(req.prompt.starts_with("Create a checklist of key logistical steps"));
        assert!(req.prompt.contains("The event type is \"Neighborhood Cleanup\""));
    }

    #[test]
    fn test_only_ideas_is_structured() {
        assert!(EventTool::Ideas.is_structured());
        assert!(!EventTool::Logistics.is_structured());
        assert!(!EventTool::Sponsorship.is_structured());
    }
}
