//! AlgoViz Visualization Server
//!
//! Serve the algorithm playback frontend.

use algoviz_vis::VisServer;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let port: u16 = args.get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);

    println!("AlgoViz");
    println!("=======");
    println!();
    println!("Starting visualization server on http://localhost:{}", port);
    println!("Open in browser to run and replay algorithm executions.");
    println!();

    let server = VisServer::new();
    server.serve(port).await?;

    Ok(())
}
