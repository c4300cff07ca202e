use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;

use mergington::registry::ActivityRegistry;
use mergington::web::build_app;

#[tokio::main]
async fn main() {
    // Load .env file
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();
    tracing::info!(build_id = env!("MERGINGTON_BUILD_ID"), "starting server");

    // 2. Seed the in-memory activity registry
    let registry = Arc::new(ActivityRegistry::with_default_catalog());

    // 3. Build the whole application
    let app = build_app(registry);

    // 4. Start the server (with fallback port)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Cannot parse host/port");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "⚠️  Could not bind {}: {}. Trying fallback {}:{}",
                addr,
                e,
                host,
                port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("Cannot parse fallback");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("Cannot bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    println!("🚀 Server running on http://{}", bound_addr);
    println!("📍 Open http://{}/static/index.html to sign up", bound_addr);

    axum::serve(listener, app).await.unwrap();
}
