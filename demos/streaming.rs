//! Streaming demo: load a bar history, stack the four layer kinds, then feed
//! live-style updates and show how little work each render does.
//!
//! Run with: cargo run --example streaming

use std::rc::Rc;

use chrono::{DateTime, Duration, Utc};

use chart_engine::{
    BarData, BarManager, CandleItem, ChartLayer, Icon, IconItem, IconMark, LineColor, LineItem,
    LineMark, PlotViewport, VolumeItem,
};

fn make_bar(dt: DateTime<Utc>, i: usize) -> BarData {
    let close = 100.0 + (i as f64 * 0.15).sin() * 5.0;
    let open = close - 0.4;
    let mut bar = BarData::new(
        "BTCUSDT",
        dt,
        open,
        close + 0.8,
        open - 0.8,
        close,
        1000.0 + (i % 7) as f64 * 150.0,
    );

    bar.mark_line(LineMark {
        label: "ma5".to_string(),
        value: 100.0 + (i as f64 * 0.15).cos() * 3.0,
        color: LineColor::Yellow,
        width: None,
    });
    if i % 25 == 0 {
        bar.mark_icon(IconMark {
            icon: Icon::SmileyFace,
            y: close + 2.0,
        });
    }
    bar
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chart_engine=debug")),
        )
        .init();

    let start = Utc::now();
    let history: Vec<BarData> = (0..500)
        .map(|i| make_bar(start + Duration::minutes(i as i64), i))
        .collect();

    let mut manager = BarManager::new();
    manager.update_history(history).expect("ordered history");

    let viewport = Rc::new(PlotViewport::new(8.0, 4.0));

    let mut candles = ChartLayer::new(CandleItem::new());
    let mut volumes = ChartLayer::new(VolumeItem::new());
    let mut lines = ChartLayer::new(LineItem::new());
    let mut icons = ChartLayer::new(IconItem::new(viewport.clone()));

    candles.update_history(&manager);
    volumes.update_history(&manager);
    lines.update_history(&manager);
    icons.update_history(&manager);

    // First paint of the last 100 bars.
    let window = (400, 500);
    for _ in 0..2 {
        candles.render(&manager, window.0, window.1);
        volumes.render(&manager, window.0, window.1);
        lines.render(&manager, window.0, window.1);
        icons.render(&manager, window.0, window.1);
    }
    println!("after first paint + repaint: {:?}", candles.cache_stats());

    // Stream 20 updates: amend the live bar, then roll to the next one.
    let mut last_dt = manager.get_datetime(499).expect("bar");
    for i in 500..520 {
        let amended = make_bar(last_dt, i - 1);
        manager.update_bar(amended.clone()).expect("in order");
        candles.update_bar(&manager, &amended);
        volumes.update_bar(&manager, &amended);
        lines.update_bar(&manager, &amended);
        icons.update_bar(&manager, &amended);

        last_dt += Duration::minutes(1);
        let next = make_bar(last_dt, i);
        manager.update_bar(next.clone()).expect("in order");
        candles.update_bar(&manager, &next);
        volumes.update_bar(&manager, &next);
        lines.update_bar(&manager, &next);
        icons.update_bar(&manager, &next);

        let count = manager.get_count();
        candles.render(&manager, count - 100, count);
        volumes.render(&manager, count - 100, count);
        lines.render(&manager, count - 100, count);
        icons.render(&manager, count - 100, count);
    }
    println!("after streaming 20 bars: {:?}", candles.cache_stats());

    // Zooming changes the scale; only the icon layer redraws everything.
    viewport.set_scale(3.0, 2.0);
    candles.notify_view_changed();
    icons.notify_view_changed();
    let count = manager.get_count();
    candles.render(&manager, count - 100, count);
    icons.render(&manager, count - 100, count);
    println!("after zoom: candles {:?}", candles.cache_stats());
    println!("after zoom: icons   {:?}", icons.cache_stats());

    let (min_price, max_price) = manager.get_price_range(Some(count - 100), None);
    println!("visible price range: {min_price:.2} .. {max_price:.2}");
    println!("cursor text:\n{}", candles.get_info_text(&manager, count - 1));
}
