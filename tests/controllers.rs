//! Controller tests against a scripted data source and a manual clock.
//!
//! Run with:
//! ```bash
//! cargo test --test controllers
//! ```

mod common;

use std::rc::Rc;
use std::time::Duration;

use crypto_price_monitor::controller::{CoinDetailController, CoinListController, Dashboard, ListOptions};
use crypto_price_monitor::domain::coin::{state::FETCH_ERROR_MESSAGE, RefreshApplied, SortField};
use crypto_price_monitor::domain::price_history::{DetailBody, HistoryKey};
use crypto_price_monitor::schedule::{Clock, ManualClock, SystemClock};
use crypto_price_monitor::shared::{CoinId, Currency, FetchOutcome};

use common::{coin, history, network_failure, Call, ScriptedSource};

const MINUTE: Duration = Duration::from_secs(60);

fn list_controller(
    source: &Rc<ScriptedSource>,
    clock: &ManualClock,
) -> CoinListController<Rc<ScriptedSource>, ManualClock> {
    CoinListController::new(
        Rc::clone(source),
        clock.clone(),
        Currency::Usd,
        ListOptions::default(),
    )
}

fn dashboard(
    source: &Rc<ScriptedSource>,
    clock: &ManualClock,
) -> Dashboard<Rc<ScriptedSource>, ManualClock> {
    Dashboard::new(
        Rc::clone(source),
        clock.clone(),
        Currency::Usd,
        ListOptions::default(),
    )
}

// ── Coin list ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_refresh_requests_first_page_and_stamps_time() {
    let source = Rc::new(ScriptedSource::new());
    let clock = ManualClock::default();
    clock.advance(Duration::from_secs(90));
    let mut list = list_controller(&source, &clock);

    let applied = list.refresh().await;

    assert_eq!(applied, Some(RefreshApplied::Replaced { count: 2 }));
    assert_eq!(
        source.calls(),
        vec![Call::TopCoins {
            currency: Currency::Usd,
            page: 1,
            per_page: 20
        }]
    );
    assert_eq!(list.state().last_updated(), Some(clock.wall_now()));
    assert_eq!(list.state().view()[0].coin.id.as_str(), "bitcoin");
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_list_and_shows_banner() {
    let source = Rc::new(ScriptedSource::new());
    let clock = ManualClock::default();
    let mut list = list_controller(&source, &clock);
    list.refresh().await;

    source.push_list(network_failure());
    let applied = list.refresh().await;

    assert_eq!(applied, Some(RefreshApplied::Failed));
    assert_eq!(list.state().coins().len(), 2);
    assert_eq!(list.state().error(), Some(FETCH_ERROR_MESSAGE));
    assert!(!list.state().is_loading());

    list.dismiss_error();
    assert!(list.state().error().is_none());
}

#[tokio::test]
async fn test_empty_refresh_shows_banner() {
    let source = Rc::new(ScriptedSource::new());
    let clock = ManualClock::default();
    let mut list = list_controller(&source, &clock);

    source.push_list(FetchOutcome::Empty);
    assert_eq!(list.refresh().await, Some(RefreshApplied::Failed));
    assert!(list.state().coins().is_empty());
    assert!(list.state().error().is_some());
}

#[tokio::test]
async fn test_auto_refresh_fires_every_interval() {
    let source = Rc::new(ScriptedSource::new());
    let clock = ManualClock::default();
    let mut list = list_controller(&source, &clock);
    list.refresh().await;
    list.set_auto_refresh(true);

    assert!(list.tick().await.is_none());
    clock.advance(Duration::from_secs(59));
    assert!(list.tick().await.is_none());
    assert_eq!(source.list_calls(), 1);

    clock.advance(Duration::from_secs(1));
    assert!(list.tick().await.is_some());
    assert_eq!(source.list_calls(), 2);

    clock.advance(MINUTE);
    assert!(list.tick().await.is_some());
    assert!(list.tick().await.is_none());
    assert_eq!(source.list_calls(), 3);
}

#[tokio::test]
async fn test_disabling_auto_refresh_stops_polling() {
    let source = Rc::new(ScriptedSource::new());
    let clock = ManualClock::default();
    let mut list = list_controller(&source, &clock);
    list.set_auto_refresh(true);
    list.set_auto_refresh(false);

    clock.advance(MINUTE * 5);
    assert!(list.tick().await.is_none());
    assert_eq!(source.list_calls(), 0);
    assert!(!list.timer().is_armed());
}

#[tokio::test]
async fn test_reasserting_auto_refresh_keeps_schedule() {
    let source = Rc::new(ScriptedSource::new());
    let clock = ManualClock::default();
    let mut list = list_controller(&source, &clock);
    list.set_auto_refresh(true);
    let generation = list.timer().generation();

    let mut fired = 0;
    for _ in 0..10 {
        clock.advance(Duration::from_secs(45));
        list.set_auto_refresh(true);
        if list.tick().await.is_some() {
            fired += 1;
        }
    }

    // 450 s on a 60 s cadence started at 0.
    assert_eq!(fired, 7);
    assert_eq!(source.list_calls(), 7);
    assert_eq!(list.timer().generation(), generation);
}

#[tokio::test]
async fn test_currency_change_refetches_and_restarts_schedule() {
    let source = Rc::new(ScriptedSource::new());
    let clock = ManualClock::default();
    let mut list = list_controller(&source, &clock);
    list.refresh().await;
    list.set_auto_refresh(true);

    clock.advance(Duration::from_secs(30));
    let applied = list.set_currency(Currency::Eur).await;
    assert_eq!(applied, Some(RefreshApplied::Replaced { count: 2 }));
    assert_eq!(
        source.calls().last(),
        Some(&Call::TopCoins {
            currency: Currency::Eur,
            page: 1,
            per_page: 20
        })
    );

    // The old schedule would have fired at 60 s; the new one fires at 90 s.
    clock.advance(Duration::from_secs(30));
    assert!(list.tick().await.is_none());
    clock.advance(Duration::from_secs(30));
    assert!(list.tick().await.is_some());
    assert_eq!(source.list_calls(), 3);
}

#[tokio::test]
async fn test_same_currency_does_not_refetch() {
    let source = Rc::new(ScriptedSource::new());
    let clock = ManualClock::default();
    let mut list = list_controller(&source, &clock);

    assert!(list.set_currency(Currency::Usd).await.is_none());
    assert_eq!(source.list_calls(), 0);
}

#[tokio::test]
async fn test_teardown_stops_every_fetch() {
    let source = Rc::new(ScriptedSource::new());
    let clock = ManualClock::default();
    let mut list = list_controller(&source, &clock);
    list.set_auto_refresh(true);
    list.teardown();

    clock.advance(MINUTE * 3);
    assert!(list.tick().await.is_none());

    list.set_auto_refresh(false);
    list.set_auto_refresh(true);
    assert!(!list.timer().is_armed());
    assert_eq!(list.refresh().await, None);
    assert_eq!(list.set_currency(Currency::Eur).await, None);
    assert_eq!(source.list_calls(), 0);
}

#[tokio::test]
async fn test_search_and_sort_shape_the_view() {
    let source = Rc::new(ScriptedSource::new());
    source.push_list(FetchOutcome::Loaded(vec![
        coin("bitcoin", "Bitcoin", "btc", 64_000, 1_000),
        coin("ethereum", "Ethereum", "eth", 3_100, 400),
        coin("tether", "Tether", "usdt", 1, 100),
    ]));
    let clock = ManualClock::default();
    let mut list = list_controller(&source, &clock);
    list.refresh().await;

    list.set_search("ETH");
    let ids: Vec<_> = list.state().view().iter().map(|r| r.coin.id.to_string()).collect();
    assert_eq!(ids, ["ethereum", "tether"]);

    list.set_search("");
    list.set_sort(SortField::Price);
    list.set_sort(SortField::Price);
    let ids: Vec<_> = list.state().view().iter().map(|r| r.coin.id.to_string()).collect();
    assert_eq!(ids, ["tether", "ethereum", "bitcoin"]);
}

#[tokio::test]
async fn test_wait_and_tick_sleeps_until_due() {
    let source = Rc::new(ScriptedSource::new());
    let options = ListOptions {
        refresh_interval: Duration::from_millis(20),
        ..ListOptions::default()
    };
    let mut list =
        CoinListController::new(Rc::clone(&source), SystemClock::new(), Currency::Ngn, options);

    assert!(list.wait_and_tick().await.is_none());

    list.set_auto_refresh(true);
    let applied = list.wait_and_tick().await;
    assert_eq!(applied, Some(RefreshApplied::Replaced { count: 2 }));
    assert_eq!(source.list_calls(), 1);
}

// ── Coin detail ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_open_issues_one_tagged_history_request() {
    let source = Rc::new(ScriptedSource::new());
    let mut detail = CoinDetailController::new(Rc::clone(&source), Currency::Eur);

    assert!(detail.open(coin("bitcoin", "Bitcoin", "btc", 1, 1)).await);

    assert_eq!(
        source.history_calls(),
        vec![HistoryKey::new(CoinId::from("bitcoin"), Currency::Eur, 7)]
    );
    assert!(matches!(detail.state().body(), DetailBody::Chart(points) if points.len() == 1));
}

#[tokio::test]
async fn test_failed_history_renders_no_data() {
    let source = Rc::new(ScriptedSource::new());
    source.push_history(network_failure());
    let mut detail = CoinDetailController::new(Rc::clone(&source), Currency::Usd);

    detail.open(coin("bitcoin", "Bitcoin", "btc", 1, 1)).await;

    assert_eq!(detail.state().body(), DetailBody::NoData);
}

#[tokio::test]
async fn test_reopening_other_coin_never_shows_previous_history() {
    let source = Rc::new(ScriptedSource::new());
    source.push_history(FetchOutcome::Loaded(history(&[10, 11, 12])));
    source.push_history(FetchOutcome::Loaded(history(&[50])));
    let mut detail = CoinDetailController::new(Rc::clone(&source), Currency::Usd);

    detail.open(coin("x", "Xcoin", "x", 1, 1)).await;
    assert_eq!(detail.state().history().len(), 3);
    detail.close();
    assert_eq!(detail.state().body(), DetailBody::Closed);

    detail.open(coin("y", "Ycoin", "y", 1, 1)).await;
    let keys = source.history_calls();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[1].coin_id.as_str(), "y");
    assert_eq!(detail.state().history(), history(&[50]).as_slice());
}

// ── Dashboard ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_dashboard_routes_currency_to_open_detail() {
    let source = Rc::new(ScriptedSource::new());
    let clock = ManualClock::default();
    let mut dash = dashboard(&source, &clock);

    dash.start().await;
    assert!(dash.open_coin(&CoinId::from("ethereum")).await);

    dash.set_currency(Currency::Ngn).await;

    assert_eq!(dash.currency(), Currency::Ngn);
    assert_eq!(
        source.calls(),
        vec![
            Call::TopCoins {
                currency: Currency::Usd,
                page: 1,
                per_page: 20
            },
            Call::History(HistoryKey::new(CoinId::from("ethereum"), Currency::Usd, 7)),
            Call::TopCoins {
                currency: Currency::Ngn,
                page: 1,
                per_page: 20
            },
            Call::History(HistoryKey::new(CoinId::from("ethereum"), Currency::Ngn, 7)),
        ]
    );
}

#[tokio::test]
async fn test_dashboard_currency_code_falls_back_to_usd() {
    let source = Rc::new(ScriptedSource::new());
    let clock = ManualClock::default();
    let mut dash = dashboard(&source, &clock);
    dash.start().await;

    dash.set_currency_code("eur").await;
    assert_eq!(dash.currency(), Currency::Eur);

    dash.set_currency_code("EUR").await;
    assert_eq!(dash.currency(), Currency::Usd);

    dash.set_currency_code("jpy").await;
    assert_eq!(dash.currency(), Currency::Usd);
    assert_eq!(source.list_calls(), 3);
}

#[tokio::test]
async fn test_dashboard_closed_detail_does_not_refetch_on_currency_change() {
    let source = Rc::new(ScriptedSource::new());
    let clock = ManualClock::default();
    let mut dash = dashboard(&source, &clock);
    dash.start().await;
    dash.open_coin(&CoinId::from("bitcoin")).await;
    dash.close_coin();

    dash.set_currency(Currency::Eur).await;

    assert_eq!(source.history_calls().len(), 1);
    assert_eq!(dash.detail().state().currency(), Currency::Eur);
}

#[tokio::test]
async fn test_dashboard_unknown_coin_is_ignored() {
    let source = Rc::new(ScriptedSource::new());
    let clock = ManualClock::default();
    let mut dash = dashboard(&source, &clock);
    dash.start().await;

    assert!(!dash.open_coin(&CoinId::from("dogecoin")).await);
    assert!(source.history_calls().is_empty());
}

#[tokio::test]
async fn test_dashboard_teardown() {
    let source = Rc::new(ScriptedSource::new());
    let clock = ManualClock::default();
    let mut dash = dashboard(&source, &clock);
    dash.start().await;
    dash.list_mut().set_auto_refresh(true);
    dash.teardown();

    clock.advance(MINUTE * 2);
    assert!(dash.tick().await.is_none());
    assert_eq!(source.list_calls(), 1);
}
