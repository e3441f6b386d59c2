use crate::{
    Dashboard, DashboardConfig, DashboardError, HtmlTarget, ViewTarget,
    tests::fixtures::{ScriptedSource, snapshot},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn create_dashboard(source: ScriptedSource) -> Dashboard<ScriptedSource, ViewTarget> {
    Dashboard::new(source, ViewTarget::new(), DashboardConfig::default()).unwrap()
}

async fn mounted_hostname(dashboard: &Dashboard<ScriptedSource, ViewTarget>) -> Option<String> {
    dashboard
        .target()
        .current()
        .await
        .map(|view| view.nodes[0].hostname.clone())
}

#[tokio::test(start_paused = true)]
async fn test_start_polls_every_interval() {
    let dashboard = create_dashboard(ScriptedSource::repeating(
        snapshot("a"),
        Duration::ZERO,
        10,
    ));

    assert!(dashboard.start().await);
    assert!(dashboard.is_running().await);

    // No fetch before the first full interval.
    sleep(Duration::from_millis(100)).await;
    assert_eq!(dashboard.source().calls(), 0);

    sleep(Duration::from_millis(3000)).await;
    assert_eq!(dashboard.source().calls(), 1);
    assert_eq!(mounted_hostname(&dashboard).await.as_deref(), Some("a"));

    sleep(Duration::from_millis(3000)).await;
    assert_eq!(dashboard.source().calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_second_start_does_not_add_timer() {
    let dashboard = create_dashboard(ScriptedSource::repeating(
        snapshot("a"),
        Duration::ZERO,
        10,
    ));

    assert!(dashboard.start().await);
    assert!(!dashboard.start().await);

    sleep(Duration::from_millis(3100)).await;
    assert_eq!(dashboard.source().calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_stop_cancels_timer() {
    let dashboard = create_dashboard(ScriptedSource::repeating(
        snapshot("a"),
        Duration::ZERO,
        10,
    ));

    dashboard.start().await;
    sleep(Duration::from_millis(3100)).await;
    assert_eq!(dashboard.source().calls(), 1);

    assert!(dashboard.stop().await);
    assert!(!dashboard.is_running().await);
    assert!(!dashboard.stop().await);

    sleep(Duration::from_millis(10_000)).await;
    assert_eq!(dashboard.source().calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_restart_after_stop() {
    let dashboard = create_dashboard(ScriptedSource::repeating(
        snapshot("a"),
        Duration::ZERO,
        10,
    ));

    dashboard.start().await;
    dashboard.stop().await;
    assert!(dashboard.start().await);

    sleep(Duration::from_millis(3100)).await;
    assert_eq!(dashboard.source().calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_in_flight_fetch_applies_after_stop() {
    let dashboard = create_dashboard(ScriptedSource::repeating(
        snapshot("late"),
        Duration::from_millis(1000),
        1,
    ));

    dashboard.start().await;
    sleep(Duration::from_millis(3100)).await;
    assert_eq!(dashboard.source().calls(), 1);

    dashboard.stop().await;
    assert!(dashboard.last_snapshot().await.is_none());

    sleep(Duration::from_millis(1000)).await;
    assert_eq!(mounted_hostname(&dashboard).await.as_deref(), Some("late"));
    assert_eq!(
        dashboard.last_snapshot().await.unwrap().nodes[0].hostname,
        "late"
    );
}

#[tokio::test(start_paused = true)]
async fn test_refresh_now_is_independent_of_timer() {
    let dashboard = create_dashboard(ScriptedSource::repeating(
        snapshot("manual"),
        Duration::ZERO,
        1,
    ));

    dashboard.refresh_now().await.unwrap();

    assert!(!dashboard.is_running().await);
    assert_eq!(dashboard.source().calls(), 1);
    assert_eq!(mounted_hostname(&dashboard).await.as_deref(), Some("manual"));
}

#[tokio::test(start_paused = true)]
async fn test_timeout_keeps_rendered_state() {
    let dashboard = create_dashboard(ScriptedSource::new(vec![
        (Duration::ZERO, Ok(snapshot("fresh"))),
        (Duration::from_millis(5000), Ok(snapshot("stale"))),
    ]));

    dashboard.refresh().await.unwrap();
    let before = dashboard.target().current().await;

    let result = dashboard.refresh().await;
    assert!(matches!(result, Err(DashboardError::Timeout(t)) if t == Duration::from_millis(2000)));

    sleep(Duration::from_millis(10_000)).await;
    assert_eq!(dashboard.target().current().await, before);
    assert_eq!(
        dashboard.last_snapshot().await.unwrap().nodes[0].hostname,
        "fresh"
    );
}

#[tokio::test(start_paused = true)]
async fn test_failed_poll_keeps_last_render() {
    let dashboard = create_dashboard(ScriptedSource::new(vec![
        (Duration::ZERO, Ok(snapshot("good"))),
        (
            Duration::ZERO,
            Err(DashboardError::Connection("refused".to_string())),
        ),
    ]));

    dashboard.refresh().await.unwrap();
    assert!(dashboard.refresh().await.is_err());
    dashboard.refresh_now().await.unwrap();

    assert_eq!(dashboard.source().calls(), 3);
    assert_eq!(mounted_hostname(&dashboard).await.as_deref(), Some("good"));
}

#[tokio::test(start_paused = true)]
async fn test_out_of_order_completion_last_completed_wins() {
    let dashboard = create_dashboard(ScriptedSource::new(vec![
        (Duration::from_millis(200), Ok(snapshot("A"))),
        (Duration::from_millis(50), Ok(snapshot("B"))),
    ]));

    let refresh_a = dashboard.refresh_now();
    tokio::task::yield_now().await;
    let refresh_b = dashboard.refresh_now();

    sleep(Duration::from_millis(100)).await;
    assert_eq!(mounted_hostname(&dashboard).await.as_deref(), Some("B"));

    refresh_b.await.unwrap();
    refresh_a.await.unwrap();
    assert_eq!(mounted_hostname(&dashboard).await.as_deref(), Some("A"));
    assert_eq!(
        dashboard.last_snapshot().await.unwrap().nodes[0].hostname,
        "A"
    );
}

#[tokio::test(start_paused = true)]
async fn test_out_of_order_completion_with_joined_refreshes() {
    let dashboard = create_dashboard(ScriptedSource::new(vec![
        (Duration::from_millis(200), Ok(snapshot("A"))),
        (Duration::from_millis(50), Ok(snapshot("B"))),
    ]));

    let (a, b) = tokio::join!(dashboard.refresh(), dashboard.refresh());
    a.unwrap();
    b.unwrap();

    assert_eq!(mounted_hostname(&dashboard).await.as_deref(), Some("A"));
}

#[tokio::test(start_paused = true)]
async fn test_rerender_same_snapshot_is_idempotent() {
    let source = ScriptedSource::repeating(snapshot("same"), Duration::ZERO, 2);
    let dashboard = Dashboard::new(source, HtmlTarget::new(), DashboardConfig::default()).unwrap();

    dashboard.refresh().await.unwrap();
    let once = dashboard.target().html().await;
    dashboard.refresh().await.unwrap();
    let twice = dashboard.target().html().await;

    assert!(!once.is_empty());
    assert_eq!(once, twice);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_dashboard_ends_timer() {
    let source = Arc::new(ScriptedSource::repeating(
        snapshot("a"),
        Duration::ZERO,
        10,
    ));
    let dashboard = Dashboard::new(
        Arc::clone(&source),
        ViewTarget::new(),
        DashboardConfig::default(),
    )
    .unwrap();

    dashboard.start().await;
    drop(dashboard);

    sleep(Duration::from_millis(10_000)).await;
    assert_eq!(source.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_custom_interval() {
    let config = DashboardConfig {
        poll_interval: Duration::from_millis(500),
        ..Default::default()
    };
    let dashboard = Dashboard::new(
        ScriptedSource::repeating(snapshot("a"), Duration::ZERO, 10),
        ViewTarget::new(),
        config,
    )
    .unwrap();

    dashboard.start().await;
    sleep(Duration::from_millis(1600)).await;
    assert_eq!(dashboard.source().calls(), 3);
}
