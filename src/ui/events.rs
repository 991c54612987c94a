//! Application event handling.
//!
//! This module applies background task results (city data, routes,
//! payments, the welcome timer) to the application state.

use crate::app::{App, AppEvent};

/// Handle application events from background tasks.
///
/// Results of superseded or cancelled tasks are dropped by `App`.
pub(super) async fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::CityLoaded {
            city,
            generation,
            result,
        } => {
            app.apply_city_loaded(city, generation, result);
        }

        AppEvent::RoutesFound { generation, routes } => {
            app.apply_routes(generation, routes);
        }

        AppEvent::PaymentCompleted { generation, result } => {
            app.apply_payment(generation, result);
        }

        AppEvent::WelcomeDue { generation } => {
            if app.apply_welcome(generation) {
                if let Err(e) = app.db.mark_visited().await {
                    tracing::warn!(error = %e, "Failed to record first visit");
                }
            }
        }

        AppEvent::TaskPanicked { task, error } => {
            app.set_status(format!("Internal error in {}", task));
            app.apply_task_panicked(task, &error);
        }
    }
}
