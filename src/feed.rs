//! Launch Feed State
//!
//! Pagination and search as a single reducer. Every change to the feed goes
//! through [`FeedState::apply`], which returns the fetch to issue (if any).
//! Network results come back in as events tagged with the generation that
//! requested them, so responses for a superseded search are dropped.

use crate::models::LaunchRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Idle with nothing loaded
    #[default]
    Empty,
    /// One request in flight for the current generation
    Loading,
    /// Idle with at least one page loaded
    Ready,
    /// Last request came back empty; only a new search leaves this state
    Exhausted,
}

/// A page to fetch, stamped with the generation that asked for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub page: u32,
    pub search: String,
}

impl FetchRequest {
    pub fn offset(&self, page_size: u32) -> u32 {
        self.page.saturating_sub(1) * page_size
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    /// First mount; loads page 1 of the current search
    Started,
    /// Debounced search term; resets the feed
    SearchCommitted(String),
    /// The end of the list came into view (or "load more" was pressed)
    AdvanceRequested,
    PageLoaded {
        generation: u64,
        page: u32,
        records: Vec<LaunchRecord>,
    },
    PageFailed {
        generation: u64,
        page: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    /// Page of the most recent request
    page: u32,
    /// Pages appended for the current generation
    loaded_pages: u32,
    records: Vec<LaunchRecord>,
    search_term: String,
    generation: u64,
    phase: Phase,
    /// Bumped on every reset and every appended page
    epoch: u64,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            page: 1,
            loaded_pages: 0,
            records: Vec::new(),
            search_term: String::new(),
            generation: 0,
            phase: Phase::Empty,
            epoch: 0,
        }
    }
}

impl FeedState {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: FeedEvent) -> Option<FetchRequest> {
        match event {
            FeedEvent::Started => {
                if self.phase == Phase::Empty && self.loaded_pages == 0 {
                    self.begin(1)
                } else {
                    None
                }
            }
            FeedEvent::SearchCommitted(term) => {
                self.generation += 1;
                self.epoch += 1;
                self.loaded_pages = 0;
                self.records.clear();
                self.search_term = term;
                self.begin(1)
            }
            FeedEvent::AdvanceRequested => match self.phase {
                Phase::Empty | Phase::Ready => self.begin(self.loaded_pages + 1),
                Phase::Loading | Phase::Exhausted => None,
            },
            FeedEvent::PageLoaded { generation, page, records } => {
                if !self.is_current(generation, page) {
                    return None;
                }
                if records.is_empty() {
                    self.phase = Phase::Exhausted;
                    return None;
                }
                if page == 1 {
                    self.records = records;
                } else {
                    self.records.extend(records);
                }
                self.loaded_pages = page;
                self.epoch += 1;
                self.phase = Phase::Ready;
                None
            }
            FeedEvent::PageFailed { generation, page } => {
                if self.is_current(generation, page) {
                    self.phase = self.idle_phase();
                }
                None
            }
        }
    }

    fn begin(&mut self, page: u32) -> Option<FetchRequest> {
        self.page = page;
        self.phase = Phase::Loading;
        Some(FetchRequest {
            generation: self.generation,
            page,
            search: self.search_term.clone(),
        })
    }

    /// Whether a response still belongs to the outstanding request
    fn is_current(&self, generation: u64, page: u32) -> bool {
        self.phase == Phase::Loading && generation == self.generation && page == self.page
    }

    fn idle_phase(&self) -> Phase {
        if self.records.is_empty() {
            Phase::Empty
        } else {
            Phase::Ready
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    #[cfg(test)]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Exhausted
    }

    /// A committed search that produced nothing, with no request pending
    pub fn shows_no_data(&self) -> bool {
        !self.search_term.is_empty() && self.records.is_empty() && !self.is_loading()
    }

    /// Changes when the scroll sentinel should be re-observed: after a reset
    /// and after each appended page, but not on a failed request.
    pub fn rebind_key(&self) -> u64 {
        self.epoch
    }
}

/// Single-select accordion toggle
pub fn toggle_expanded(current: Option<u32>, id: u32) -> Option<u32> {
    if current == Some(id) {
        None
    } else {
        Some(id)
    }
}
