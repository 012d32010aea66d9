use std::ops::Deref;
use std::rc::Rc;

use common::{DashboardAction, DashboardState, Resource};
use yew::prelude::*;

/// Outcome of the latest fetched batch, surfaced to the view as a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendNotice {
    /// Bumped on every batch so repeated identical outcomes still notify.
    pub seq: u64,
    pub resource: Resource,
    pub appended: usize,
}

impl AppendNotice {
    pub fn message(&self) -> String {
        match self.appended {
            0 => format!("No new {} loaded (duplicate ids skipped)", self.resource.label()),
            n => format!("Loaded {} {}", n, self.resource.label()),
        }
    }
}

/// Dashboard state owned by the top-level view through `use_reducer`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStore {
    state: DashboardState,
    pub notice: Option<AppendNotice>,
}

impl Deref for DashboardStore {
    type Target = DashboardState;

    fn deref(&self) -> &DashboardState {
        &self.state
    }
}

impl DashboardStore {
    fn appended(&self, state: DashboardState, resource: Resource, appended: usize) -> Self {
        let seq = self.notice.as_ref().map_or(0, |n| n.seq) + 1;
        log::debug!("Appended {} new {}", appended, resource.label());
        Self {
            state,
            notice: Some(AppendNotice {
                seq,
                resource,
                appended,
            }),
        }
    }
}

impl Reducible for DashboardStore {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: DashboardAction) -> Rc<Self> {
        match action {
            DashboardAction::UsersFetched(users) => {
                let (state, appended) = self.state.append_users_counted(users);
                Rc::new(self.appended(state, Resource::Users, appended))
            }
            DashboardAction::BanksFetched(banks) => {
                let (state, appended) = self.state.append_banks_counted(banks);
                Rc::new(self.appended(state, Resource::Banks, appended))
            }
            action => match self.state.apply(action) {
                Ok(state) => Rc::new(Self {
                    state,
                    notice: self.notice.clone(),
                }),
                Err(e) => {
                    // Rejected actions keep the current state; the view reports them.
                    log::warn!("Dashboard action rejected: {}", e);
                    self
                }
            },
        }
    }
}
