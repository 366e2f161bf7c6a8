use std::fs;
use std::thread;

use paws_dashboard::{DASHBOARD, DASHBOARD_LEN, DASHBOARD_SOURCE, dashboard_string};

fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

#[test]
fn dashboard_matches_staged_source() {
    init_logging();
    let on_disk = fs::read(DASHBOARD_SOURCE).expect("staged dashboard source is readable");

    let asset = dashboard_string();
    assert_eq!(asset.len(), on_disk.len());
    assert_eq!(asset.len(), DASHBOARD_LEN);
    assert_eq!(asset.as_bytes(), &on_disk[..]);
}

#[test]
fn shipped_dashboard_is_html() {
    if !DASHBOARD_SOURCE.ends_with("assets/dashboard.html") {
        return;
    }
    let html = dashboard_string()
        .into_string()
        .expect("dashboard is valid UTF-8");
    assert!(html.trim_start().starts_with("<!DOCTYPE html>"));
    assert!(html.contains("</html>"));
}

#[test]
fn repeated_calls_are_equal_but_independent() {
    init_logging();
    let first = dashboard_string();
    let second = dashboard_string();
    assert_eq!(first, second);

    if !first.is_empty() {
        assert_ne!(first.as_ptr(), second.as_ptr());
    }

    let mut owned = first.into_bytes();
    owned.clear();
    owned.extend_from_slice(b"mutated");
    assert_eq!(second.as_bytes(), DASHBOARD.as_bytes());
    assert_eq!(dashboard_string(), second);
}

#[test]
fn concurrent_calls_see_identical_content() {
    let expected = dashboard_string();
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| (0..16).map(|_| dashboard_string()).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            for asset in handle.join().expect("worker thread panicked") {
                assert_eq!(asset, expected);
            }
        }
    });
}
