use tauri::State;

use crate::{
    analysis::{Comparison, HeatMap, Metric, MetricReport, TrendReport, Zoom},
    controller::DashboardController,
    dataset::DetailReading,
    AppState,
};

fn controller_from_state(state: &State<'_, AppState>) -> DashboardController {
    state.dashboard.clone()
}

#[tauri::command]
pub async fn get_detail_readings(
    state: State<'_, AppState>,
    row_id: String,
) -> Result<Vec<DetailReading>, String> {
    let controller = controller_from_state(&state);
    controller
        .detail_readings(&row_id)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_metric_summary(
    state: State<'_, AppState>,
    metric: Metric,
) -> Result<MetricReport, String> {
    let controller = controller_from_state(&state);
    Ok(controller.metric_report(metric).await)
}

#[tauri::command]
pub async fn get_metric_trend(
    state: State<'_, AppState>,
    metric: Metric,
) -> Result<TrendReport, String> {
    let controller = controller_from_state(&state);
    Ok(controller.trend_report(metric).await)
}

#[tauri::command]
pub async fn get_location_comparison(
    state: State<'_, AppState>,
    metric: Metric,
) -> Result<Comparison, String> {
    let controller = controller_from_state(&state);
    Ok(controller.location_comparison(metric).await)
}

#[tauri::command]
pub async fn get_heat_map(
    state: State<'_, AppState>,
    metric: Metric,
    session_id: Option<String>,
) -> Result<HeatMap, String> {
    let controller = controller_from_state(&state);
    Ok(controller.heat_map(metric, session_id.as_deref()).await)
}

#[tauri::command]
pub async fn zoom_heat_map_in(state: State<'_, AppState>) -> Result<Zoom, String> {
    let controller = controller_from_state(&state);
    Ok(controller.zoom_in().await)
}

#[tauri::command]
pub async fn zoom_heat_map_out(state: State<'_, AppState>) -> Result<Zoom, String> {
    let controller = controller_from_state(&state);
    Ok(controller.zoom_out().await)
}

#[tauri::command]
pub async fn reset_heat_map_zoom(state: State<'_, AppState>) -> Result<Zoom, String> {
    let controller = controller_from_state(&state);
    Ok(controller.reset_zoom().await)
}
