use crate::shell::config::AppConfig;
use crate::shell::errors::ErrorStyle;
use crate::shell::state::AppState;

/// Freshly seeded stores, so every test starts from keys 0 to 6 and two posts.
pub fn make_test_state(error_style: ErrorStyle) -> AppState {
    AppState::seeded(&AppConfig {
        error_style,
        ..AppConfig::default()
    })
}
