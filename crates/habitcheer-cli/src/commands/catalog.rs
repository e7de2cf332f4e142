use clap::Args;
use habitcheer_core::messages::{catalog, CELEBRATION_MESSAGES, ONBOARDING_MESSAGE};
use habitcheer_core::MessageCategory;
use serde_json::json;

use super::CommandResult;

#[derive(Args)]
pub struct CatalogArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CatalogArgs) -> CommandResult {
    catalog::validate()?;

    if args.json {
        let mut categories = serde_json::Map::new();
        for category in MessageCategory::ALL {
            categories.insert(category.as_str().to_string(), json!(category.messages()));
        }
        categories.insert("celebration".to_string(), json!(CELEBRATION_MESSAGES));
        let out = json!({
            "onboarding": ONBOARDING_MESSAGE,
            "categories": categories,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("onboarding:");
    println!("  {ONBOARDING_MESSAGE}");
    for category in MessageCategory::ALL {
        println!("{category}:");
        for message in category.messages() {
            println!("  {message}");
        }
    }
    println!("celebration:");
    for message in CELEBRATION_MESSAGES {
        println!("  {message}");
    }
    Ok(())
}
