use super::repository::AnalyticsRepository;
use crate::{
    api::{AnalyticsSummary, ApiClient, ApiError},
    utils::{
        generation::{Generation, LatestOnly},
        time::today_local,
    },
};
use chrono::NaiveDate;
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AnalyticsViewModel {
    pub date: RwSignal<NaiveDate>,
    pub summary: RwSignal<Option<AnalyticsSummary>>,
    pub error: RwSignal<Option<ApiError>>,
    pub loading: RwSignal<bool>,
    tracker: StoredValue<LatestOnly>,
    repository: StoredValue<AnalyticsRepository>,
}

impl AnalyticsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let vm = Self {
            date: create_rw_signal(today_local()),
            summary: create_rw_signal(None),
            error: create_rw_signal(None),
            loading: create_rw_signal(false),
            tracker: store_value(LatestOnly::new()),
            repository: store_value(AnalyticsRepository::new_with_client(Rc::new(api))),
        };

        create_effect(move |_| vm.mount());

        vm
    }

    /// First fetch, for the default date. Later ones come from `set_date`.
    pub fn mount(&self) {
        log::debug!("Analytics view mounted");
        self.load();
    }

    pub fn set_date(&self, date: NaiveDate) {
        if self.date.get_untracked() == date {
            return;
        }
        self.date.set(date);
        self.load();
    }

    pub fn load(&self) {
        let date = self.date.get_untracked();
        let Some(generation) = self.tracker.try_with_value(LatestOnly::begin) else {
            return;
        };
        let Some(repo) = self.repository.try_get_value() else {
            return;
        };
        self.loading.set(true);
        log::debug!("Fetching attendance analytics for {}", date);

        let vm = *self;
        spawn_local(async move {
            let result = repo.fetch_summary(date).await;
            vm.apply(generation, result);
        });
    }

    /// Publishes a response if no newer fetch has started since.
    pub fn apply(
        &self,
        generation: Generation,
        result: Result<AnalyticsSummary, ApiError>,
    ) -> bool {
        let current = self
            .tracker
            .try_with_value(|tracker| tracker.is_current(generation))
            .unwrap_or(false);
        if !current {
            log::debug!("Discarding stale analytics response");
            return false;
        }

        match result {
            Ok(summary) => {
                log::info!("Loaded attendance analytics for {}", summary.date);
                let _ = self.error.try_set(None);
                let _ = self.summary.try_set(Some(summary));
            }
            Err(err) => {
                log::error!("Failed to load attendance analytics: {}", err);
                let _ = self.error.try_set(Some(err));
            }
        }
        let _ = self.loading.try_set(false);
        true
    }

    #[cfg(test)]
    fn begin(&self) -> Generation {
        self.tracker.with_value(LatestOnly::begin)
    }
}
