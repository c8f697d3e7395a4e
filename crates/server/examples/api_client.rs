//! Smoke-test client for a running carelist server
//!
//! Start the server first (`cargo run -p carelist-server`), then:
//!
//! ```text
//! cargo run -p carelist-server --example api_client
//! ```
//!
//! Set `CARELIST_URL` to point at a server other than `http://localhost:3000`.

use reqwest::Client;
use serde_json::Value;

const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

const ENDPOINTS: &[(&str, &str)] = &[
    ("API info", "/"),
    ("All professionals", "/professionals"),
    ("Filter by specialty", "/professionals?specialty=cardiologia"),
    ("Filter by availability", "/professionals?available=true"),
    (
        "Filter by specialty and availability",
        "/professionals?specialty=pediatria&available=true",
    ),
    ("Professional by id", "/professionals/1"),
    ("Unknown professional", "/professionals/999"),
    ("Specialties", "/specialties"),
    ("Search by accented name", "/search?q=jo%C3%A3o"),
    ("Search specialty only", "/search?q=cardio&type=specialty"),
    ("Search name only", "/search?q=maria&type=name"),
    ("Search without term", "/search"),
    ("Statistics", "/statistics"),
    ("Unknown route", "/rota-inexistente"),
    ("Health", "/health"),
    ("Readiness", "/ready"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url =
        std::env::var("CARELIST_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
    let client = Client::new();

    println!("Exercising carelist API at {base_url}\n");

    for (i, (label, path)) in ENDPOINTS.iter().enumerate() {
        println!("{}. {label}: GET {path}", i + 1);

        let resp = match client.get(format!("{base_url}{path}")).send().await {
            Ok(resp) => resp,
            Err(err) => {
                println!("Request failed: {err}");
                println!();
                continue;
            }
        };

        println!("Status: {}", resp.status());
        match resp.json::<Value>().await {
            Ok(body) => println!("Body: {}", serde_json::to_string_pretty(&body)?),
            Err(err) => println!("Body was not JSON: {err}"),
        }
        println!();
    }

    println!("Done.");
    Ok(())
}
