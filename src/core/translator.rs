use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{dashboard::DashboardMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::{AppState, LoadPhase},
    },
    domain::route::Route,
    infrastructure::config::keybindings::KeyAction,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Network events - fetch completions keep their generation tag
        RawMsg::OverviewLoaded {
            generation,
            overview,
        } => vec![Msg::Dashboard(DashboardMsg::Loaded {
            generation,
            overview,
        })],
        RawMsg::OverviewFailed { generation } => {
            vec![Msg::Dashboard(DashboardMsg::Failed { generation })]
        }

        // System status
        RawMsg::SystemMessage(msg) => vec![Msg::System(SystemMsg::UpdateStatusMessage(msg))],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(*action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: KeyAction, state: &AppState) -> Vec<Msg> {
    match action {
        KeyAction::Quit => vec![Msg::System(SystemMsg::Quit)],
        KeyAction::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        KeyAction::Retry => translate_retry_key(state),
        KeyAction::GoLanding => vec![Msg::Ui(UiMsg::Navigate(Route::Landing))],
        KeyAction::GoLogin => vec![Msg::Ui(UiMsg::Navigate(Route::Login))],
        KeyAction::GoRegister => vec![Msg::Ui(UiMsg::Navigate(Route::Register))],
        KeyAction::GoDashboard => vec![Msg::Ui(UiMsg::Navigate(Route::Dashboard))],
        KeyAction::GoResumeBank => vec![Msg::Ui(UiMsg::Navigate(Route::ResumeBank))],
        KeyAction::UploadResume => {
            // The upload affordance only exists on the landing view.
            if state.ui.route == Route::Landing {
                vec![Msg::Ui(UiMsg::UploadResume)]
            } else {
                vec![]
            }
        }
        KeyAction::Back => {
            let home = if state.session.is_authenticated() {
                Route::Dashboard
            } else {
                Route::Landing
            };
            if state.ui.route == home {
                vec![]
            } else {
                vec![Msg::Ui(UiMsg::Navigate(home))]
            }
        }
    }
}

/// Retry only acts on the dashboard error state; a fetch is otherwise
/// already in flight or the data is current.
fn translate_retry_key(state: &AppState) -> Vec<Msg> {
    if state.ui.route == Route::Dashboard && matches!(state.dashboard.phase, LoadPhase::Error(_)) {
        vec![Msg::Dashboard(DashboardMsg::Retry)]
    } else {
        vec![]
    }
}
