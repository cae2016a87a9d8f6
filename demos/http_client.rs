//! HTTP client example demonstrating request shaping and retry configuration.
//!
//! This example shows how to:
//! - Create an HTTP client with default headers
//! - Make GET, POST, PUT and DELETE requests
//! - Configure retry behavior and inspect backoff delays
//! - Attach authentication to every request
//!
//! Responses are canned; no network traffic is generated.
//!
//! # Running
//!
//! ```bash
//! cargo run --example http_client
//! ```

use client_wrappers::{Auth, HttpClient, HttpClientConfig, RetryConfig};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    println!("Example 1: Basic HTTP Requests");
    println!("{}", "-".repeat(50));

    let client = HttpClient::new(
        HttpClientConfig::new("https://api.example.com")
            .with_header("Content-Type", "application/json"),
    )?;

    let response = client.get("/users")?;
    println!("GET {}", response.url);
    println!("Status: {}", response.status_code);
    println!("Data: {}\n", response.data);

    let new_user = json!({"name": "John Doe", "email": "john@example.com"});
    println!("Data: {}", serde_json::to_string_pretty(&new_user)?);
    let response = client.post("/users", Some(new_user))?;
    println!("POST {}", response.url);
    println!("Status: {}", response.status_code);
    println!("Data: {}\n", response.data);

    let updated_user = json!({"name": "John Doe", "email": "john.doe@example.com"});
    let response = client.put("/users/123", Some(updated_user))?;
    println!("PUT {}", response.url);
    println!("Status: {}", response.status_code);
    println!("Data: {}\n", response.data);

    let response = client.delete("/users/123")?;
    println!("DELETE {}", response.url);
    println!("Status: {}\n", response.status_code);

    println!("Example 2: Client with Retry Configuration");
    println!("{}", "-".repeat(50));

    let client_with_retry = HttpClient::new(
        HttpClientConfig::new("https://api.example.com").with_retry(RetryConfig::new(5, 2.0)?),
    )?;
    let retry = client_with_retry.retry_config();
    println!("Max retries: {}", retry.max_retries);
    println!("Backoff factor: {}", retry.backoff_factor);
    for attempt in 0..retry.max_retries {
        println!(
            "  delay after attempt {attempt}: {:?}",
            retry.delay_for_attempt(attempt)
        );
    }

    let response = client_with_retry.get("/health")?;
    println!("Response: {}\n", serde_json::to_string(&response)?);

    println!("Example 3: Authenticated Requests");
    println!("{}", "-".repeat(50));

    let auth_client = HttpClient::new(
        HttpClientConfig::new("https://api.example.com")
            .with_header("Content-Type", "application/json")
            .with_auth(Auth::bearer("abc123token")),
    )?;
    let response = auth_client.get("/protected/resource")?;
    println!("Authenticated request successful");
    println!("Response: {}", response.data);

    println!("\nNote: This example uses canned responses.");
    Ok(())
}
