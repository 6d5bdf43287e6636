use std::path::Path;
use std::sync::Arc;

use fortuna_core::config::FortunaConfig;
use fortuna_core::constants::{DATE_FORMAT, HISTORY_DISPLAY_DAYS};
use fortuna_core::errors::{FortunaError, FortunaResult};
use fortuna_core::models::{Catalog, Draw, ItemCount, SelectionMode, SelectionRecord};
use fortuna_core::traits::{IHistoryStore, IWeightCalculator};
use fortuna_observability::events;
use fortuna_storage::HistoryEngine;
use fortuna_weights::{Drawer, WeightBreakdown, WeightEngine};

use crate::outcome::SaveOutcome;
use crate::overwrite::OverwriteConfirm;

/// One user's picker session.
///
/// All mutable state (mode, last draw, generator) lives here; the weight
/// engine and the store are stateless between calls. Saves are stamped
/// with the store's clock, so "today" is the same date for writes and for
/// history windows.
pub struct Session {
    store: Arc<dyn IHistoryStore>,
    catalog: Catalog,
    engine: WeightEngine,
    drawer: Drawer,
    mode: SelectionMode,
    last_draw: Option<Draw>,
    history_display_days: u32,
}

impl Session {
    /// Session over `store` with an entropy-seeded generator and Normal mode.
    pub fn new(store: Arc<dyn IHistoryStore>, catalog: Catalog) -> Self {
        Self {
            store,
            catalog,
            engine: WeightEngine::new(),
            drawer: Drawer::from_entropy(),
            mode: SelectionMode::Normal,
            last_draw: None,
            history_display_days: HISTORY_DISPLAY_DAYS,
        }
    }

    /// Validate the catalog, open the configured database, and apply the
    /// configured starting mode.
    pub fn from_config(config: &FortunaConfig) -> FortunaResult<Self> {
        let catalog = config.catalog()?;
        let store = HistoryEngine::open_with_config(&config.storage)?;
        let mut session = Self::new(Arc::new(store), catalog).with_mode(config.selection.default_mode);
        session.history_display_days = config.selection.history_display_days;
        Ok(session)
    }

    /// Load a TOML config file and build a session from it.
    pub fn open(config_path: &Path) -> FortunaResult<Self> {
        Self::from_config(&FortunaConfig::load(config_path)?)
    }

    pub fn with_drawer(mut self, drawer: Drawer) -> Self {
        self.drawer = drawer;
        self
    }

    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    /// The most recent draw, if any.
    pub fn last_draw(&self) -> Option<&Draw> {
        self.last_draw.as_ref()
    }

    /// Draw one item under the current mode and remember it.
    pub fn draw(&mut self) -> FortunaResult<&Draw> {
        let recent = if self.mode.uses_history() {
            self.recent_or_empty(self.engine.lookback_days())
        } else {
            Vec::new()
        };
        let weights = self.engine.compute_weights(self.mode, &self.catalog, &recent);
        let draw = self.drawer.draw(&self.catalog, self.mode, weights)?;
        events::selection_drawn(&draw.item, draw.mode.as_str(), draw.probability());
        Ok(self.last_draw.insert(draw))
    }

    /// Persist the last draw as today's pick.
    ///
    /// If today already has a pick, `confirm` decides whether to replace
    /// it. Any storage failure is returned to the caller.
    pub fn save(&mut self, confirm: &mut dyn OverwriteConfirm) -> FortunaResult<SaveOutcome> {
        let draw = self.last_draw.as_ref().ok_or(FortunaError::NothingToSave)?;
        let now = self.store.clock().now();
        let today = now.date();
        let date_str = today.format(DATE_FORMAT).to_string();

        if let Some(existing) = self.store.find_by_date(today)? {
            if !confirm.confirm_overwrite(&existing, &draw.item) {
                events::overwrite_declined(&draw.item, &existing.item, &date_str);
                return Ok(SaveOutcome::Declined { existing });
            }
        }

        let superseded = self.store.upsert_for_date(&draw.item, today, now)?;
        let item = draw.item.clone();
        match superseded.into_iter().next() {
            Some(previous) => {
                events::selection_overwritten(&item, &previous.item, &date_str);
                Ok(SaveOutcome::Overwritten {
                    item,
                    date: today,
                    previous,
                })
            }
            None => {
                events::selection_saved(&item, &date_str);
                Ok(SaveOutcome::Saved { item, date: today })
            }
        }
    }

    /// Records from the configured display window, newest first.
    /// Empty if the store cannot be read.
    pub fn recent_history(&self) -> Vec<SelectionRecord> {
        self.recent_or_empty(self.history_display_days)
    }

    /// Records from the last `days_back` days, newest first.
    /// Empty if the store cannot be read.
    pub fn recent_history_for(&self, days_back: u32) -> Vec<SelectionRecord> {
        self.recent_or_empty(days_back)
    }

    /// Per-item totals, most picked first.
    pub fn statistics(&self) -> FortunaResult<Vec<ItemCount>> {
        self.store.count_by_item()
    }

    /// The weights the current mode would draw from right now.
    pub fn current_weights(&self) -> Vec<WeightBreakdown> {
        let recent = if self.mode.uses_history() {
            self.recent_or_empty(self.engine.lookback_days())
        } else {
            Vec::new()
        };
        self.engine.compute_breakdown(self.mode, &self.catalog, &recent)
    }

    /// Query recent history, treating a read failure as no history.
    fn recent_or_empty(&self, days_back: u32) -> Vec<SelectionRecord> {
        match self.store.query_recent(days_back) {
            Ok(records) => records,
            Err(e) => {
                events::degradation_triggered("history_store", &e.to_string(), "empty history");
                Vec::new()
            }
        }
    }
}
