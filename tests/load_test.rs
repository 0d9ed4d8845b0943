//! Concurrency smoke test: many parallel clients, every answer 200.

use std::time::{Duration, Instant};
use lamp_diag::config::DiagConfig;

mod common;

#[tokio::test]
async fn test_concurrent_requests_all_succeed() {
    let server = common::start_server(DiagConfig::default()).await;

    let concurrency = 20;
    let requests_per_task = 25;
    let total_requests = concurrency * requests_per_task;
    let paths = ["/", "/health", "/status", "/security", "/metrics"];

    let client = reqwest::Client::new();
    let start = Instant::now();

    let mut tasks = Vec::new();
    for t in 0..concurrency {
        let client = client.clone();
        let base = server.base_url.clone();
        tasks.push(tokio::spawn(async move {
            let mut ok = 0;
            for i in 0..requests_per_task {
                let path = paths[(t + i) % paths.len()];
                if let Ok(res) = client.get(format!("{}{}", base, path)).send().await {
                    if res.status() == 200 {
                        ok += 1;
                    }
                }
            }
            ok
        }));
    }

    let mut succeeded = 0;
    for task in tasks {
        succeeded += task.await.unwrap();
    }
    let elapsed = start.elapsed();

    println!(
        "{} requests in {:?} ({:.0} req/s)",
        total_requests,
        elapsed,
        total_requests as f64 / elapsed.as_secs_f64()
    );

    assert_eq!(succeeded, total_requests);
    assert!(elapsed < Duration::from_secs(30));

    server.shutdown.trigger();
}
