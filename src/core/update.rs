use crate::{
    core::{
        cmd::Cmd,
        msg::{dashboard::DashboardMsg, ui::UiMsg, Msg},
        state::AppState,
    },
    domain::route::Route,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Dashboard messages (delegated to DashboardState)
        Msg::Dashboard(dashboard_msg) => {
            let commands = state.dashboard.update(dashboard_msg);
            (state, commands)
        }

        // Navigation needs whole-state context: a signed-in session never
        // sees the landing view, and entering the dashboard starts a fetch.
        Msg::Ui(UiMsg::Navigate(route)) => {
            let route = if route == Route::Landing && state.session.is_authenticated() {
                Route::Dashboard
            } else {
                route
            };

            let mut commands = state.ui.update(UiMsg::Navigate(route));
            if route == Route::Dashboard {
                commands.extend(state.dashboard.update(DashboardMsg::Load));
            }
            (state, commands)
        }

        Msg::Ui(ui_msg) => {
            let commands = state.ui.update(ui_msg);
            (state, commands)
        }
    }
}
