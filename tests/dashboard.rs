use std::sync::Arc;

use airtamgu_lib::{
    analysis::Metric,
    config::DashboardConfig,
    controller::{Clock, DashboardController},
    export::CSV_HEADER,
    table::{DateRange, EditableField, RecordFilter, SortDirection, SortKey},
};
use chrono::NaiveDate;

fn fixed_clock() -> Clock {
    Arc::new(|| {
        NaiveDate::from_ymd_opt(2025, 10, 14)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap()
    })
}

fn controller(seed: u64) -> DashboardController {
    let config = DashboardConfig {
        seed: Some(seed),
        ..DashboardConfig::default()
    };
    DashboardController::with_clock(&config, fixed_clock())
}

#[tokio::test]
async fn same_seed_same_first_page() {
    let a = controller(5).page().await;
    let b = controller(5).page().await;

    assert_eq!(a, b);
    assert_eq!(a.page.current_page, 1);
    assert!(a.rows.len() <= 50);
    assert!(a.page.total_rows > 0);
}

#[tokio::test]
async fn walking_every_page_covers_each_row_once() {
    let dashboard = controller(8);
    let first = dashboard.toggle_sort(SortKey::Location).await;
    let total_pages = first.page.total_pages;

    let mut ids = Vec::new();
    for page in 1..=total_pages {
        let rows = dashboard.go_to_page(page).await.rows;
        ids.extend(rows.into_iter().map(|row| row.record.id));
    }

    assert_eq!(ids.len(), first.page.total_rows);
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());

    // Past the end clamps to the last page.
    let last = dashboard.next_page().await;
    assert_eq!(last.page.current_page, total_pages);
}

#[tokio::test]
async fn sort_toggles_between_directions() {
    let dashboard = controller(2);

    let asc = dashboard.toggle_sort(SortKey::Pm25).await;
    assert_eq!(asc.sort.direction, SortDirection::Asc);
    let values: Vec<u32> = asc.rows.iter().map(|row| row.record.pm25).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));

    let desc = dashboard.toggle_sort(SortKey::Pm25).await;
    assert_eq!(desc.sort.direction, SortDirection::Desc);
    let values: Vec<u32> = desc.rows.iter().map(|row| row.record.pm25).collect();
    assert!(values.windows(2).all(|w| w[0] >= w[1]));

    let other = dashboard.toggle_sort(SortKey::Humidity).await;
    assert_eq!(other.sort.key, SortKey::Humidity);
    assert_eq!(other.sort.direction, SortDirection::Asc);
}

#[tokio::test]
async fn renaming_a_session_marks_all_its_rows() {
    let dashboard = controller(21);
    let session = dashboard.sessions().await.remove(0);

    let result = dashboard
        .rename_session(&session.id, "Harbor Loop")
        .await
        .unwrap();
    assert!(!result.affected_rows.is_empty());

    let page = dashboard
        .set_filter(RecordFilter {
            session_id: Some(session.id.clone()),
            ..Default::default()
        })
        .await;
    assert_eq!(page.page.total_rows, result.affected_rows.len());
    for row in &page.rows {
        assert_eq!(row.record.session_name, "Harbor Loop");
        assert_eq!(row.edited_fields, vec![EditableField::SessionName]);
    }
}

#[tokio::test]
async fn humidity_edits_are_clamped() {
    let dashboard = controller(34);
    let row_id = dashboard.page().await.rows[0].record.id.clone();

    dashboard
        .edit_field(&row_id, EditableField::Humidity, "150")
        .await
        .unwrap();
    let row = dashboard
        .page()
        .await
        .rows
        .into_iter()
        .find(|row| row.record.id == row_id)
        .unwrap();
    assert_eq!(row.record.humidity, 100);
    assert_eq!(row.edited_fields, vec![EditableField::Humidity]);
}

#[tokio::test]
async fn unknown_row_is_an_error_and_changes_nothing() {
    let dashboard = controller(55);
    let before = dashboard.page().await;

    assert!(dashboard
        .edit_field("no-such-row", EditableField::Pm25, "12")
        .await
        .is_err());
    assert!(dashboard.maps_url("no-such-row").await.is_err());
    assert!(dashboard.detail_readings("no-such-row").await.is_err());
    assert_eq!(dashboard.page().await, before);
}

#[tokio::test]
async fn export_matches_filter() {
    let dashboard = controller(3);

    let everything = dashboard.export_csv().await.unwrap();
    assert_eq!(everything.file_name, "air-quality-data-2025-10-14.csv");
    assert_eq!(
        everything.contents.lines().count(),
        everything.row_count + 1
    );

    dashboard
        .set_filter(RecordFilter {
            search: "no location is called this".into(),
            ..Default::default()
        })
        .await;
    let empty = dashboard.export_csv().await.unwrap();
    assert_eq!(empty.row_count, 0);
    assert_eq!(empty.contents, CSV_HEADER.join(","));
}

#[tokio::test]
async fn today_filter_only_returns_today() {
    let dashboard = controller(13);
    let page = dashboard
        .set_filter(RecordFilter {
            date_range: DateRange::Today,
            ..Default::default()
        })
        .await;

    let today = NaiveDate::from_ymd_opt(2025, 10, 14).unwrap();
    assert!(page.rows.iter().all(|row| row.record.date == today));
}

#[tokio::test]
async fn analysis_follows_the_current_filter() {
    let dashboard = controller(89);
    let location = dashboard.locations().await.remove(0);

    let all = dashboard.metric_report(Metric::Pm25).await;
    dashboard
        .set_filter(RecordFilter {
            location: Some(location),
            ..Default::default()
        })
        .await;
    let one = dashboard.metric_report(Metric::Pm25).await;

    let all_count = all.summary.unwrap().count;
    let one_count = one.summary.unwrap().count;
    assert!(one_count < all_count);

    let bucketed: usize = one.aqi_distribution.iter().map(|b| b.count).sum();
    assert_eq!(bucketed, one_count);
}

#[tokio::test]
async fn trend_and_comparison_follow_the_filter() {
    let dashboard = controller(233);
    let location = dashboard.locations().await.remove(2);

    let everywhere = dashboard.location_comparison(Metric::Co).await;
    assert_eq!(everywhere.groups.len(), 9);

    dashboard
        .set_filter(RecordFilter {
            location: Some(location.clone()),
            date_range: DateRange::Week,
            ..Default::default()
        })
        .await;

    let one = dashboard.location_comparison(Metric::Co).await;
    assert_eq!(one.groups.len(), 1);
    assert_eq!(one.groups[0].name, location);
    assert_eq!(one.range, Some(0.0));

    let trend = dashboard.trend_report(Metric::Co).await;
    assert_eq!(trend.week.len(), 7);
    assert_eq!(trend.month.len(), 31);
    assert_eq!(
        trend.week.last().unwrap().date,
        NaiveDate::from_ymd_opt(2025, 10, 14).unwrap()
    );
    // The week filter excludes everything older than seven days.
    assert!(trend.month[..24].iter().all(|p| p.reading_count == 0));
    let counted: usize = trend.week.iter().map(|p| p.reading_count).sum();
    assert_eq!(counted, one.groups[0].reading_count);
}

#[tokio::test]
async fn week_filter_drops_the_cutoff_day_after_midnight() {
    let dashboard = controller(377);
    let page = dashboard
        .set_filter(RecordFilter {
            date_range: DateRange::Week,
            ..Default::default()
        })
        .await;

    // 19:30 on Oct 14 puts the cutoff at 19:30 on Oct 7.
    assert!(page.page.total_rows > 0);
    let export = dashboard.export_csv().await.unwrap();
    assert_eq!(export.row_count, page.page.total_rows);
    assert!(export
        .contents
        .lines()
        .skip(1)
        .all(|line| line >= "2025-10-08"));
}

#[tokio::test]
async fn heat_map_and_zoom() {
    let dashboard = controller(144);
    let map = dashboard.heat_map(Metric::Temp, None).await;
    assert_eq!(map.stations.len(), 9);
    assert!(map.city_status.is_none());

    assert_eq!(dashboard.zoom_in().await.level(), 1.2);
    assert_eq!(dashboard.zoom_out().await.level(), 1.0);
    assert_eq!(dashboard.zoom_out().await.level(), 0.8);
    assert_eq!(dashboard.reset_zoom().await.level(), 1.0);
}

#[tokio::test]
async fn detail_readings_cover_one_minute() {
    let dashboard = controller(7);
    let row_id = dashboard.page().await.rows[0].record.id.clone();

    let readings = dashboard.detail_readings(&row_id).await.unwrap();
    assert_eq!(readings.len(), 60);
}
