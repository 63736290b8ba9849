/// Page Load Prefetch Flow Test
///
/// Tests the full prefetch flow:
/// Page hostnames → intake → dispatch loop → worker pool → warmed resolver

#[path = "../common/mod.rs"]
mod common;
use common::{CountingResolver, TestHosts};

use hostwarm_domain::{Config, HostPriority, PrefetchConfig, PrefetchRequest};
use hostwarm_infrastructure::prefetch::Prefetcher;
use std::time::Duration;

async fn settle(resolver: &CountingResolver, expected: usize) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while resolver.count() < expected && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

// ============================================================================
// Full Prefetch Flow Tests
// ============================================================================

#[tokio::test]
async fn test_complete_page_prefetch_flow() {
    // Arrange: a page with one navigation host and several subresource hosts
    let resolver = CountingResolver::new();
    let handle = Prefetcher::spawn(PrefetchConfig::default(), resolver.clone());

    // Act: embedder hands over the extracted hostname map
    handle.prefetch_page(vec![
        PrefetchRequest::new(TestHosts::page(), HostPriority::High),
        PrefetchRequest::new(TestHosts::cdn(), HostPriority::Normal),
        PrefetchRequest::new(TestHosts::images(), HostPriority::Normal),
        PrefetchRequest::new(TestHosts::tracker(), HostPriority::Normal),
    ]);
    handle.wait_until_idle().await;
    settle(&resolver, 4).await;

    // Assert: every host was warmed exactly once
    let mut warmed = resolver.warmed();
    warmed.sort();
    assert_eq!(
        warmed,
        vec![
            TestHosts::cdn(),
            TestHosts::images(),
            TestHosts::tracker(),
            TestHosts::page(),
        ]
    );

    handle.shutdown();
}

#[tokio::test]
async fn test_navigation_host_then_page_batch() {
    // The navigation host goes in first via the single-host path, the page
    // batch follows once parsing finds the embedded hostnames.
    let resolver = CountingResolver::new();
    let handle = Prefetcher::spawn(PrefetchConfig::default(), resolver.clone());

    handle.prefetch_host(TestHosts::page(), HostPriority::High);
    handle.prefetch_page(vec![
        (TestHosts::cdn(), HostPriority::Normal),
        (TestHosts::images(), HostPriority::Normal),
    ]);
    handle.wait_until_idle().await;
    settle(&resolver, 3).await;

    assert_eq!(resolver.count(), 3);

    handle.shutdown();
}

#[tokio::test]
async fn test_embedder_sizes_extraction_to_cap() {
    let resolver = CountingResolver::new();
    let handle = Prefetcher::spawn(PrefetchConfig::default(), resolver.clone());

    // The embedder asks for the cap before extracting hostnames
    let cap = handle.max_queries_per_page();
    assert_eq!(cap, 64);

    let hosts: Vec<(String, HostPriority)> = (0..cap)
        .map(|i| (format!("sub{i}.example.com"), HostPriority::Normal))
        .collect();
    handle.prefetch_page(hosts);
    handle.wait_until_idle().await;
    settle(&resolver, cap).await;

    // Exactly at the cap: everything dispatched, nothing dropped
    assert_eq!(resolver.count(), cap);
    assert_eq!(handle.metrics().snapshot().dropped, 0);

    handle.shutdown();
}

#[tokio::test]
async fn test_config_driven_prefetcher() {
    // Wire the prefetcher from a parsed config file, bootstrap style
    let config: Config = toml_from_str(
        r#"
        [prefetch]
        worker_slots = 2
        max_queries_per_page = 8
        "#,
    );

    hostwarm_infrastructure::logging::init_logging(&config.logging);

    let resolver = CountingResolver::new();
    let handle = Prefetcher::spawn(config.prefetch, resolver.clone());

    assert_eq!(handle.max_queries_per_page(), 8);

    handle.prefetch_host(TestHosts::page(), HostPriority::High);
    handle.wait_until_idle().await;
    settle(&resolver, 1).await;

    assert_eq!(resolver.count(), 1);

    handle.shutdown();
}

fn toml_from_str(s: &str) -> Config {
    // Config derives Deserialize; reuse its TOML path without a temp file
    ::toml::from_str(s).expect("valid test config")
}
