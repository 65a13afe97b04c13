pub mod analysis;
pub mod config;
pub mod controller;
pub mod dataset;
pub mod export;
pub mod profile;
pub mod table;
pub mod utils;

#[cfg(feature = "desktop")]
pub use desktop::run;

#[cfg(feature = "desktop")]
pub(crate) use desktop::AppState;

#[cfg(feature = "desktop")]
mod desktop {
    use tauri::{Emitter, Manager, State};

    use crate::{
        analysis::commands::{
            get_detail_readings, get_heat_map, get_location_comparison, get_metric_summary,
            get_metric_trend, reset_heat_map_zoom, zoom_heat_map_in, zoom_heat_map_out,
        },
        config::DashboardConfig,
        controller::DashboardController,
        profile::{ClassProfile, ProfileStore},
        table::commands::{
            edit_record_field, export_raw_data_csv, get_raw_data_page, list_locations,
            list_sessions, next_raw_data_page, open_record_in_maps, previous_raw_data_page,
            rename_session, set_raw_data_filter, set_raw_data_page, toggle_raw_data_sort,
        },
        utils::logging,
    };

    pub(crate) struct AppState {
        pub(crate) dashboard: DashboardController,
        pub(crate) profile: ProfileStore,
    }

    #[tauri::command]
    fn get_profile(state: State<AppState>) -> Result<ClassProfile, String> {
        Ok(state.profile.profile())
    }

    #[tauri::command]
    fn update_profile(
        profile: ClassProfile,
        state: State<AppState>,
        app_handle: tauri::AppHandle,
    ) -> Result<ClassProfile, String> {
        let saved = state.profile.update(profile).map_err(|e| e.to_string())?;

        app_handle
            .emit("profile-updated", &saved)
            .map_err(|e| e.to_string())?;

        Ok(saved)
    }

    #[cfg_attr(mobile, tauri::mobile_entry_point)]
    pub fn run() {
        logging::init();

        log::info!("AIR@TAMGU starting up...");

        tauri::Builder::default()
            .plugin(tauri_plugin_opener::init())
            .setup(|app| {
                let result = (|| -> anyhow::Result<()> {
                    let app_data_dir = app
                        .path()
                        .app_data_dir()
                        .map_err(|err| anyhow::anyhow!(err))?;
                    std::fs::create_dir_all(&app_data_dir)?;

                    let profile = ProfileStore::new(app_data_dir.join("profile.json"))?;
                    let config = DashboardConfig::from_env();

                    app.manage(AppState {
                        dashboard: DashboardController::new(&config),
                        profile,
                    });

                    Ok(())
                })();

                result.map_err(|err| err.into())
            })
            .invoke_handler(tauri::generate_handler![
                get_raw_data_page,
                set_raw_data_filter,
                toggle_raw_data_sort,
                set_raw_data_page,
                next_raw_data_page,
                previous_raw_data_page,
                edit_record_field,
                rename_session,
                list_locations,
                list_sessions,
                export_raw_data_csv,
                open_record_in_maps,
                get_detail_readings,
                get_metric_summary,
                get_metric_trend,
                get_location_comparison,
                get_heat_map,
                zoom_heat_map_in,
                zoom_heat_map_out,
                reset_heat_map_zoom,
                get_profile,
                update_profile,
            ])
            .run(tauri::generate_context!())
            .expect("error while running tauri application");
    }
}
