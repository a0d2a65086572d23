//! Basic usage example for the UMA HTTP client
//!
//! This example demonstrates how to:
//! - Create a client with default settings or a custom base URL and timeout
//! - Fetch a champion, a node and a war tier concurrently
//! - Match on the error kinds the client returns
//! - Close the client
//!
//! Set `UMA_BASE_URL` to point it at a mock server instead of the public API.

use std::time::Duration;
use uma_http_client::{UmaClient, UmaError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = UmaClient::builder().timeout(Duration::from_secs(15));
    if let Ok(url) = std::env::var("UMA_BASE_URL") {
        builder = builder.base_url(url)?;
    }
    let client = builder.build()?;
    println!("Querying {}", client.base_url());

    // All three requests share the client's connection pool
    let (champ, node, war) = tokio::join!(
        client.get_champion("Ghost", 6, 5),
        client.get_node(42),
        client.get_war(3),
    );

    match champ {
        Ok(champ) => println!(
            "✓ {} ({}) {}★ r{}: {} prestige, {} hp",
            champ.name, champ.class_tag, champ.tier, champ.rank, champ.prestige, champ.hp
        ),
        Err(e) => report(&e),
    }

    match node {
        Ok(node) => println!("✓ Node {}: {}", node.node_id, node.node_name),
        Err(e) => report(&e),
    }

    match war {
        Ok(war) => println!(
            "✓ War tier {} ({}), multiplier {}",
            war.tier, war.difficulty, war.tier_multiplier
        ),
        Err(e) => report(&e),
    }

    client.close();
    Ok(())
}

fn report(error: &UmaError) {
    match error {
        UmaError::Api => println!("✗ API trouble: {}", error),
        UmaError::MalformedPayload { resource, .. } => {
            println!("✗ Unexpected {} payload: {}", resource, error)
        }
        other => println!("✗ {}", other),
    }
}
