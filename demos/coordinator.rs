//! Smart coordinator example
//!
//! Sends an open-ended community goal to Gemini, optionally grounded with
//! web search, and prints the plan with its citations.
//!
//! The key is read from the environment:
//! - API_KEY (or GEMINI_API_KEY)
//!
//! Usage:
//!   API_KEY=your_key cargo run --example coordinator -- "Start a tool library" --search

use localhive::tools::Coordinator;
use localhive::Dispatcher;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut goal = String::from("Organize a monthly repair cafe in our neighborhood");
    let mut search = false;
    for arg in std::env::args().skip(1) {
        if arg == "--search" {
            search = true;
        } else {
            goal = arg;
        }
    }

    let dispatcher = Dispatcher::from_env()?;
    if !dispatcher.has_credential() {
        eprintln!("Warning: API_KEY not set. The request will be rejected before it is sent.");
    }

    let request = Coordinator::new(goal).web_search(search).request()?;
    match dispatcher.generate_text(&request).await {
        Ok(result) => {
            println!("{}", result.text);
            if result.has_sources() {
                println!("\nSources:");
                for source in &result.sources {
                    println!("- {} <{}>", source.label(), source.uri);
                }
            }
        }
        Err(e) => eprintln!("{}", e.user_message()),
    }

    Ok(())
}
