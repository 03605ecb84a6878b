use serde::{Deserialize, Serialize};

use crate::domain::route::Route;

/// Navigation and landing-view messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    /// Switch to another view. A signed-in session navigating to the
    /// landing view is redirected to the dashboard by `update`.
    Navigate(Route),
    /// The landing-view upload affordance was triggered; marks the view as
    /// uploading and navigates to the resume bank (which owns uploads).
    UploadResume,
}
