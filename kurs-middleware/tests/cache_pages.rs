use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use kurs_core::{KursError, PageSource};
use kurs_middleware::CachedSource;
use kurs_types::CacheConfig;

fn counting(count: Arc<AtomicUsize>) -> Arc<dyn PageSource> {
    <dyn PageSource>::from_fn("counting", move |url| {
        let n = count.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{url}#{n}"))
    })
}

fn failing(count: Arc<AtomicUsize>) -> Arc<dyn PageSource> {
    <dyn PageSource>::from_fn("failing", move |url| {
        count.fetch_add(1, Ordering::SeqCst);
        Err(KursError::fetch_failed(url, Some(404), "not found"))
    })
}

#[tokio::test]
async fn repeated_url_is_served_from_cache() {
    let count = Arc::new(AtomicUsize::new(0));
    let cached = CachedSource::new(
        counting(count.clone()),
        &CacheConfig::with_ttl(Duration::from_secs(60)),
    );

    let a = cached.fetch("https://x/a").await.unwrap();
    let b = cached.fetch("https://x/a").await.unwrap();
    assert_eq!(a, b);
    assert_eq!(count.load(Ordering::SeqCst), 1);

    let c = cached.fetch("https://x/b").await.unwrap();
    assert_ne!(a, c);
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn ttl_expiration_causes_refetch() {
    let count = Arc::new(AtomicUsize::new(0));
    let cached = CachedSource::new(
        counting(count.clone()),
        &CacheConfig::with_ttl(Duration::from_millis(50)),
    );

    let _ = cached.fetch("https://x/a").await.unwrap();
    tokio::time::sleep(Duration::from_millis(150)).await;
    let _ = cached.fetch("https://x/a").await.unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn failures_are_not_cached() {
    let count = Arc::new(AtomicUsize::new(0));
    let cached = CachedSource::new(
        failing(count.clone()),
        &CacheConfig::with_ttl(Duration::from_secs(60)),
    );

    let first = cached.fetch("https://x/missing").await.unwrap_err();
    let second = cached.fetch("https://x/missing").await.unwrap_err();
    assert_eq!(first, second);
    assert_eq!(first.status(), Some(404));
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn clear_forgets_pages() {
    let count = Arc::new(AtomicUsize::new(0));
    let cached = CachedSource::new(
        counting(count.clone()),
        &CacheConfig::with_ttl(Duration::from_secs(60)),
    );
    let _ = cached.fetch("https://x/a").await.unwrap();
    cached.clear();
    let _ = cached.fetch("https://x/a").await.unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 2);
    assert_eq!(cached.name(), "counting");
    assert_eq!(cached.inner().name(), "counting");
}
