use crate::{
    core::{cmd::Cmd, msg::dashboard::DashboardMsg},
    domain::overview::DashboardOverview,
};

/// The one fixed user-facing message for a failed overview fetch. Network
/// failures, authorization failures and malformed responses all collapse
/// into it; the only recovery is the retry key or navigating away.
pub const LOAD_ERROR_MESSAGE: &str = "Could not load your dashboard.";

/// Load lifecycle of the dashboard view.
///
/// `Loading → Ready` on success, `Loading → Error` on any failure,
/// `Error → Loading` via retry. `Ready` is terminal until the view is
/// re-entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready(DashboardOverview),
    Error(String),
}

/// Dashboard-related state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub phase: LoadPhase,
    /// Current fetch generation. Each issued fetch carries this value;
    /// responses tagged with an older generation are discarded so a stale
    /// response can never overwrite a newer one.
    generation: u64,
}

impl DashboardState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    pub fn overview(&self) -> Option<&DashboardOverview> {
        match &self.phase {
            LoadPhase::Ready(overview) => Some(overview),
            _ => None,
        }
    }

    /// Dashboard-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: DashboardMsg) -> Vec<Cmd> {
        match msg {
            DashboardMsg::Load => self.begin_fetch(),

            DashboardMsg::Loaded {
                generation,
                overview,
            } => {
                if generation != self.generation {
                    return vec![Cmd::LogInfo {
                        message: format!(
                            "Discarding stale overview (generation {generation}, current {})",
                            self.generation
                        ),
                    }];
                }
                self.phase = LoadPhase::Ready(*overview);
                vec![]
            }

            DashboardMsg::Failed { generation } => {
                if generation != self.generation {
                    return vec![Cmd::LogInfo {
                        message: format!(
                            "Discarding stale overview failure (generation {generation}, current {})",
                            self.generation
                        ),
                    }];
                }
                self.phase = LoadPhase::Error(LOAD_ERROR_MESSAGE.to_string());
                vec![]
            }

            DashboardMsg::Retry => {
                // Retry only makes sense from the error state; elsewhere a
                // fetch is already in flight or the data is current.
                if matches!(self.phase, LoadPhase::Error(_)) {
                    self.begin_fetch()
                } else {
                    vec![]
                }
            }
        }
    }

    fn begin_fetch(&mut self) -> Vec<Cmd> {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        vec![Cmd::FetchOverview {
            generation: self.generation,
        }]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn overview_with_resumes(n: u64) -> DashboardOverview {
        DashboardOverview {
            total_resumes: Some(n),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_issues_exactly_one_fetch() {
        let mut dashboard = DashboardState::default();

        let cmds = dashboard.update(DashboardMsg::Load);

        assert_eq!(cmds, vec![Cmd::FetchOverview { generation: 1 }]);
        assert!(dashboard.is_loading());
    }

    #[test]
    fn test_loaded_stores_record_wholesale() {
        let mut dashboard = DashboardState::default();
        dashboard.update(DashboardMsg::Load);

        let cmds = dashboard.update(DashboardMsg::Loaded {
            generation: 1,
            overview: Box::new(overview_with_resumes(12)),
        });

        assert!(cmds.is_empty());
        assert_eq!(dashboard.overview(), Some(&overview_with_resumes(12)));
    }

    #[test]
    fn test_failed_sets_fixed_message() {
        let mut dashboard = DashboardState::default();
        dashboard.update(DashboardMsg::Load);

        let cmds = dashboard.update(DashboardMsg::Failed { generation: 1 });

        assert!(cmds.is_empty());
        assert_eq!(
            dashboard.phase,
            LoadPhase::Error(LOAD_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_retry_from_error_reenters_loading() {
        let mut dashboard = DashboardState::default();
        dashboard.update(DashboardMsg::Load);
        dashboard.update(DashboardMsg::Failed { generation: 1 });

        let cmds = dashboard.update(DashboardMsg::Retry);

        assert_eq!(cmds, vec![Cmd::FetchOverview { generation: 2 }]);
        assert!(dashboard.is_loading());
    }

    #[test]
    fn test_retry_outside_error_is_ignored() {
        let mut dashboard = DashboardState::default();
        dashboard.update(DashboardMsg::Load);

        assert!(dashboard.update(DashboardMsg::Retry).is_empty());
        assert!(dashboard.is_loading());

        dashboard.update(DashboardMsg::Loaded {
            generation: 1,
            overview: Box::default(),
        });
        assert!(dashboard.update(DashboardMsg::Retry).is_empty());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut dashboard = DashboardState::default();
        dashboard.update(DashboardMsg::Load);
        dashboard.update(DashboardMsg::Failed { generation: 1 });
        dashboard.update(DashboardMsg::Retry); // generation 2 in flight

        // The response of the first fetch arrives late.
        let cmds = dashboard.update(DashboardMsg::Loaded {
            generation: 1,
            overview: Box::new(overview_with_resumes(99)),
        });

        assert_eq!(cmds.len(), 1); // stale discard is logged
        assert!(dashboard.is_loading());

        // The current-generation response still lands.
        dashboard.update(DashboardMsg::Loaded {
            generation: 2,
            overview: Box::new(overview_with_resumes(12)),
        });
        assert_eq!(dashboard.overview(), Some(&overview_with_resumes(12)));
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut dashboard = DashboardState::default();
        dashboard.update(DashboardMsg::Load); // generation 1
        dashboard.update(DashboardMsg::Load); // re-entered view, generation 2

        dashboard.update(DashboardMsg::Failed { generation: 1 });
        assert!(dashboard.is_loading());
    }

    #[test]
    fn test_reentering_view_replaces_record() {
        let mut dashboard = DashboardState::default();
        dashboard.update(DashboardMsg::Load);
        dashboard.update(DashboardMsg::Loaded {
            generation: 1,
            overview: Box::new(overview_with_resumes(1)),
        });

        // Re-entering the view re-fetches; the old record is gone.
        let cmds = dashboard.update(DashboardMsg::Load);
        assert_eq!(cmds, vec![Cmd::FetchOverview { generation: 2 }]);
        assert!(dashboard.overview().is_none());
    }
}
