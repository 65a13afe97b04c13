use std::path::PathBuf;

use serde::Serialize;
use tauri::{AppHandle, Emitter, Manager, State};
use tauri_plugin_opener::OpenerExt;

use crate::{
    controller::{DashboardController, EditResult},
    dataset::SessionSummary,
    table::{EditableField, RecordFilter, SortKey, TablePage},
    AppState,
};

const EDIT_EVENT: &str = "raw-data-edited";

fn controller_from_state(state: &State<'_, AppState>) -> DashboardController {
    state.dashboard.clone()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedExport {
    pub path: PathBuf,
    pub row_count: usize,
}

#[tauri::command]
pub async fn get_raw_data_page(state: State<'_, AppState>) -> Result<TablePage, String> {
    let controller = controller_from_state(&state);
    Ok(controller.page().await)
}

#[tauri::command]
pub async fn set_raw_data_filter(
    state: State<'_, AppState>,
    filter: RecordFilter,
) -> Result<TablePage, String> {
    let controller = controller_from_state(&state);
    Ok(controller.set_filter(filter).await)
}

#[tauri::command]
pub async fn toggle_raw_data_sort(
    state: State<'_, AppState>,
    key: SortKey,
) -> Result<TablePage, String> {
    let controller = controller_from_state(&state);
    Ok(controller.toggle_sort(key).await)
}

#[tauri::command]
pub async fn set_raw_data_page(
    state: State<'_, AppState>,
    page: usize,
) -> Result<TablePage, String> {
    let controller = controller_from_state(&state);
    Ok(controller.go_to_page(page).await)
}

#[tauri::command]
pub async fn next_raw_data_page(state: State<'_, AppState>) -> Result<TablePage, String> {
    let controller = controller_from_state(&state);
    Ok(controller.next_page().await)
}

#[tauri::command]
pub async fn previous_raw_data_page(state: State<'_, AppState>) -> Result<TablePage, String> {
    let controller = controller_from_state(&state);
    Ok(controller.previous_page().await)
}

#[tauri::command]
pub async fn edit_record_field(
    app_handle: AppHandle,
    state: State<'_, AppState>,
    row_id: String,
    field: EditableField,
    value: String,
) -> Result<EditResult, String> {
    let controller = controller_from_state(&state);
    let result = controller
        .edit_field(&row_id, field, &value)
        .await
        .map_err(|e| e.to_string())?;

    app_handle
        .emit(EDIT_EVENT, &result.affected_rows)
        .map_err(|e| e.to_string())?;

    Ok(result)
}

#[tauri::command]
pub async fn rename_session(
    app_handle: AppHandle,
    state: State<'_, AppState>,
    session_id: String,
    name: String,
) -> Result<EditResult, String> {
    let controller = controller_from_state(&state);
    let result = controller
        .rename_session(&session_id, &name)
        .await
        .map_err(|e| e.to_string())?;

    app_handle
        .emit(EDIT_EVENT, &result.affected_rows)
        .map_err(|e| e.to_string())?;

    Ok(result)
}

#[tauri::command]
pub async fn list_locations(state: State<'_, AppState>) -> Result<Vec<String>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.locations().await)
}

#[tauri::command]
pub async fn list_sessions(state: State<'_, AppState>) -> Result<Vec<SessionSummary>, String> {
    let controller = controller_from_state(&state);
    Ok(controller.sessions().await)
}

/// Writes the filtered rows to the user's download folder.
#[tauri::command]
pub async fn export_raw_data_csv(
    app_handle: AppHandle,
    state: State<'_, AppState>,
) -> Result<SavedExport, String> {
    let controller = controller_from_state(&state);
    let export = controller.export_csv().await.map_err(|e| e.to_string())?;

    let dir = app_handle
        .path()
        .download_dir()
        .map_err(|e| e.to_string())?;
    let path = dir.join(&export.file_name);
    tokio::fs::write(&path, export.contents)
        .await
        .map_err(|e| e.to_string())?;

    Ok(SavedExport {
        path,
        row_count: export.row_count,
    })
}

#[tauri::command]
pub async fn open_record_in_maps(
    app_handle: AppHandle,
    state: State<'_, AppState>,
    row_id: String,
) -> Result<String, String> {
    let controller = controller_from_state(&state);
    let url = controller
        .maps_url(&row_id)
        .await
        .map_err(|e| e.to_string())?;

    app_handle
        .opener()
        .open_url(url.clone(), None::<&str>)
        .map_err(|e| e.to_string())?;

    Ok(url)
}
