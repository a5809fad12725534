use crate::modules::employees::core::ports::EmployeeApi;
use crate::modules::employees::core::statistics::DashboardStats;
use crate::modules::employees::views::load_state::LoadState;

#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    state: LoadState<DashboardStats>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<DashboardStats> {
        &self.state
    }

    /// Fetches every record and recomputes the figures; also the retry action.
    pub async fn load(&mut self, api: &dyn EmployeeApi) {
        self.state = LoadState::Loading;
        let result = api.list_employees().await;
        if let Err(err) = &result {
            tracing::warn!(%err, "could not load dashboard");
        }
        self.state = result
            .map(|employees| DashboardStats::from_employees(&employees))
            .into();
    }
}
