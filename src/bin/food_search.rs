// ABOUTME: Command-line food search against Edamam, Open Food Facts, or USDA
// ABOUTME: Prints the normalized search response as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutrition Companion contributors

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use nutrition_companion::config::FoodApiConfig;
use nutrition_companion::external::FoodSearchProvider;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Source {
    /// Edamam Food Database (requires EDAMAM_APP_ID and EDAMAM_APP_KEY)
    Edamam,
    /// Open Food Facts (no credentials needed)
    OpenFoodFacts,
    /// USDA FoodData Central (requires USDA_API_KEY)
    Usda,
}

#[derive(Debug, Parser)]
#[command(name = "food-search", about = "Search a food database and print per-100g nutrition")]
struct Args {
    /// Food name to search for
    query: String,

    /// Which food database to query
    #[arg(long, value_enum, default_value = "open-food-facts")]
    source: Source,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nutrition_companion=info")),
        )
        .init();

    let args = Args::parse();
    let config = FoodApiConfig::from_env();

    info!(query = %args.query, source = ?args.source, "searching");

    let response = match args.source {
        Source::Edamam => config.edamam_client().search_products(&args.query).await,
        Source::OpenFoodFacts => {
            config
                .open_food_facts_client()
                .search_products(&args.query)
                .await
        }
        Source::Usda => config.usda_client().search_products(&args.query).await,
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
