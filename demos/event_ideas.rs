//! Event planner example
//!
//! Requests five structured event ideas and falls back to printing the raw
//! reply when the model does not return valid JSON.
//!
//! Usage:
//!   API_KEY=your_key cargo run --example event_ideas -- "Block Party"

use localhive::structured::RequiredFields;
use localhive::tools::{EventPlanner, EventTool};
use localhive::{generate_with_fallback, Dispatcher, StructuredIdea, StructuredOrText};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let event_type = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Neighborhood Cleanup".to_string());

    let dispatcher = Dispatcher::from_env()?;
    let planner = EventPlanner::new()
        .event_type(event_type)
        .community_focus("riverside neighborhood");
    let request = planner.request(EventTool::Ideas)?;

    let validator = RequiredFields::idea();
    let outcome: StructuredOrText<Vec<StructuredIdea>> =
        generate_with_fallback(&dispatcher, &request, Some(&validator)).await?;

    match outcome {
        StructuredOrText::Structured(ideas) => {
            for (i, idea) in ideas.iter().enumerate() {
                println!("{}. {}\n   {}", i + 1, idea.name, idea.description);
            }
        }
        StructuredOrText::Text(result) => {
            println!("Could not parse ideas, showing the raw reply:\n{}", result.text);
        }
    }

    Ok(())
}
