#[cfg(test)]
mod common;

#[cfg(test)]
mod route_classification_tests;

#[cfg(test)]
mod view_store_tests;

#[cfg(test)]
mod view_detection_tests;

#[cfg(test)]
mod navigation_session_tests;

#[cfg(test)]
mod dashboard_config_tests;

#[cfg(test)]
mod list_query_tests;

#[cfg(test)]
mod app_error_tests;

#[cfg(test)]
mod ui_render_tests;
