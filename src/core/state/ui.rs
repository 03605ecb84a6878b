use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg},
    domain::route::Route,
};

/// Navigation-related state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub route: Route,
    /// Set while the landing-view upload affordance hands off to the resume
    /// bank; only used to annotate/disable the affordance.
    pub is_uploading: bool,
}

impl UiState {
    /// UI-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::Navigate(route) => {
                self.route = route;
                self.is_uploading = false;
                vec![]
            }

            UiMsg::UploadResume => {
                // Uploads are owned by the resume bank; the landing view
                // only hands off.
                self.is_uploading = true;
                self.route = Route::ResumeBank;
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_navigate_switches_route() {
        let mut ui = UiState::default();
        assert_eq!(ui.route, Route::Landing);

        let cmds = ui.update(UiMsg::Navigate(Route::Login));

        assert!(cmds.is_empty());
        assert_eq!(ui.route, Route::Login);
    }

    #[test]
    fn test_upload_sets_flag_and_navigates() {
        let mut ui = UiState::default();

        let cmds = ui.update(UiMsg::UploadResume);

        assert!(cmds.is_empty());
        assert!(ui.is_uploading);
        assert_eq!(ui.route, Route::ResumeBank);
    }

    #[test]
    fn test_navigate_clears_upload_flag() {
        let mut ui = UiState::default();
        ui.update(UiMsg::UploadResume);

        ui.update(UiMsg::Navigate(Route::Landing));

        assert!(!ui.is_uploading);
        assert_eq!(ui.route, Route::Landing);
    }
}
