//! Generic record grid controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Users, drivers, and pickups share one list behaviour: fetch on mount,
//! two-step delete with confirmation, pagination, and sorting. The controller
//! owns that behaviour; `components::data_grid` only renders snapshots.
//!
//! STATE MACHINE
//! =============
//! `Uninitialized -> Loading -> Loaded`, and
//! `Loaded -> ConfirmingDelete(id) -> Loaded` on confirm or cancel. Unmount
//! returns to `Uninitialized`; any fetch still in flight from before the
//! unmount is discarded when it resolves. Overlapping fetches within one
//! mount resolve last-write-wins.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;

use crate::net::api::ApiError;
use crate::state::notifications::Notifier;
use crate::util::text::{header_from_field, title_case};

/// Rows per page.
pub const PAGE_SIZE: usize = 20;

/// Anything the grid can list: it only needs a stable identifier.
pub trait Record {
    fn id(&self) -> &str;
}

/// Backend operations for one record collection.
#[async_trait(?Send)]
pub trait GridSource<R> {
    async fn fetch(&self) -> Result<Vec<R>, ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

type CellFn<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// One grid column: a field name, header text, and a value accessor.
pub struct Column<R> {
    pub field: String,
    pub header: String,
    pub sort: Option<SortDirection>,
    value: CellFn<R>,
    link: Option<CellFn<R>>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            header: self.header.clone(),
            sort: self.sort,
            value: Arc::clone(&self.value),
            link: self.link.clone(),
        }
    }
}

impl<R> Column<R> {
    /// Column with a header derived from the field name.
    pub fn new(field: &str, value: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        Self {
            field: field.to_owned(),
            header: header_from_field(field),
            sort: None,
            value: Arc::new(value),
            link: None,
        }
    }

    #[must_use]
    pub fn header(mut self, header: &str) -> Self {
        header.clone_into(&mut self.header);
        self
    }

    /// Render the cell as a link to the returned href.
    #[must_use]
    pub fn link(mut self, href: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        self.link = Some(Arc::new(href));
        self
    }

    /// Default sort for this column.
    #[must_use]
    pub fn sorted(mut self, direction: SortDirection) -> Self {
        self.sort = Some(direction);
        self
    }

    pub fn value(&self, row: &R) -> String {
        (self.value)(row)
    }

    pub fn href(&self, row: &R) -> Option<String> {
        self.link.as_ref().map(|f| f(row))
    }
}

/// Numeric-aware comparison so `"10"` sorts after `"9"`. Numeric cells
/// order before all other text.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridPhase {
    Uninitialized,
    Loading,
    Loaded,
    ConfirmingDelete(String),
}

/// Render-ready view of the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSnapshot<R> {
    pub phase: GridPhase,
    /// All rows in display order.
    pub rows: Vec<R>,
    pub page: usize,
    pub page_count: usize,
    pub sort: Option<(String, SortDirection)>,
}

impl<R> GridSnapshot<R> {
    pub fn empty() -> Self {
        Self {
            phase: GridPhase::Uninitialized,
            rows: Vec::new(),
            page: 0,
            page_count: 1,
            sort: None,
        }
    }

    /// Rows on the current page.
    pub fn visible_rows(&self) -> &[R] {
        let start = (self.page * PAGE_SIZE).min(self.rows.len());
        let end = (start + PAGE_SIZE).min(self.rows.len());
        &self.rows[start..end]
    }

    pub fn staged(&self) -> Option<&str> {
        match &self.phase {
            GridPhase::ConfirmingDelete(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, GridPhase::Loading)
    }
}

/// Number of pages for `len` rows; always at least one.
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

struct GridInner<R> {
    phase: GridPhase,
    rows: Vec<R>,
    page: usize,
    sort: Option<(usize, SortDirection)>,
    attached: bool,
    generation: u64,
}

type ChangeFn<R> = Box<dyn Fn(GridSnapshot<R>)>;

/// Drives one grid instance.
pub struct GridController<R> {
    label: String,
    columns: Vec<Column<R>>,
    source: Rc<dyn GridSource<R>>,
    notifier: Rc<dyn Notifier>,
    inner: RefCell<GridInner<R>>,
    on_change: RefCell<Option<ChangeFn<R>>>,
}

impl<R: Record + Clone + 'static> GridController<R> {
    /// `label` is the lowercase record name used in messages (`"user"`).
    pub fn new(
        label: &str,
        columns: Vec<Column<R>>,
        source: Rc<dyn GridSource<R>>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        let sort = columns
            .iter()
            .enumerate()
            .find_map(|(idx, col)| col.sort.map(|dir| (idx, dir)));
        Self {
            label: label.to_owned(),
            columns,
            source,
            notifier,
            inner: RefCell::new(GridInner {
                phase: GridPhase::Uninitialized,
                rows: Vec::new(),
                page: 0,
                sort,
                attached: false,
                generation: 0,
            }),
            on_change: RefCell::new(None),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Register the render callback invoked after every transition.
    pub fn set_on_change(&self, callback: impl Fn(GridSnapshot<R>) + 'static) {
        *self.on_change.borrow_mut() = Some(Box::new(callback));
    }

    pub fn snapshot(&self) -> GridSnapshot<R> {
        let inner = self.inner.borrow();
        let mut rows = inner.rows.clone();
        if let Some((idx, dir)) = inner.sort {
            if let Some(col) = self.columns.get(idx) {
                rows.sort_by(|a, b| {
                    let ord = compare_cells(&col.value(a), &col.value(b));
                    if dir == SortDirection::Descending { ord.reverse() } else { ord }
                });
            }
        }
        GridSnapshot {
            phase: inner.phase.clone(),
            page: inner.page,
            page_count: page_count(rows.len()),
            sort: inner
                .sort
                .and_then(|(idx, dir)| self.columns.get(idx).map(|c| (c.field.clone(), dir))),
            rows,
        }
    }

    fn emit(&self) {
        let snapshot = self.snapshot();
        if let Some(callback) = self.on_change.borrow().as_ref() {
            callback(snapshot);
        }
    }

    /// Attach and perform the initial fetch. A no-op while already attached.
    pub async fn mount(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.attached {
                return;
            }
            inner.attached = true;
            inner.generation += 1;
            inner.phase = GridPhase::Uninitialized;
            inner.rows.clear();
            inner.page = 0;
        }
        self.refresh().await;
    }

    /// Detach and drop all rows. Pending fetches are discarded on arrival.
    pub fn unmount(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.attached = false;
        inner.generation += 1;
        inner.phase = GridPhase::Uninitialized;
        inner.rows = Vec::new();
        inner.page = 0;
    }

    pub fn is_attached(&self) -> bool {
        self.inner.borrow().attached
    }

    /// Replace the row set with a fresh fetch.
    pub async fn refresh(&self) {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            if !inner.attached {
                return;
            }
            if !matches!(inner.phase, GridPhase::ConfirmingDelete(_)) {
                inner.phase = GridPhase::Loading;
            }
            inner.generation
        };
        self.emit();

        let result = self.source.fetch().await;

        let failed = {
            let mut inner = self.inner.borrow_mut();
            if !inner.attached || inner.generation != generation {
                log::debug!("discarding stale {} fetch", self.label);
                return;
            }
            let failed = match result {
                Ok(rows) => {
                    inner.rows = rows;
                    false
                }
                Err(e) => {
                    log::warn!("{} fetch failed: {e}", self.label);
                    inner.rows = Vec::new();
                    true
                }
            };
            inner.page = inner.page.min(page_count(inner.rows.len()) - 1);
            if inner.phase == GridPhase::Loading {
                inner.phase = GridPhase::Loaded;
            }
            failed
        };
        if failed {
            self.notifier.error(&format!("Failed to load {} data", self.label));
        }
        self.emit();
    }

    /// Stage a row for deletion and open the confirmation. Only valid once loaded.
    pub fn stage_delete(&self, id: &str) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.phase != GridPhase::Loaded {
                return false;
            }
            inner.phase = GridPhase::ConfirmingDelete(id.to_owned());
        }
        self.emit();
        true
    }

    /// Close the confirmation without touching the backend.
    pub fn cancel_delete(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if !matches!(inner.phase, GridPhase::ConfirmingDelete(_)) {
                return;
            }
            inner.phase = GridPhase::Loaded;
        }
        self.emit();
    }

    /// Delete the staged row. Success refetches; failure keeps the rows.
    pub async fn confirm_delete(&self) {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let GridPhase::ConfirmingDelete(id) = &inner.phase else {
                return;
            };
            let id = id.clone();
            inner.phase = GridPhase::Loaded;
            id
        };
        self.emit();

        match self.source.delete(&id).await {
            Ok(()) => {
                log::info!("{} {id} deleted", self.label);
                self.notifier.success(&format!("{} deleted", title_case(&self.label)));
                self.refresh().await;
            }
            Err(e) => {
                log::warn!("{} {id} delete failed: {e}", self.label);
                self.notifier.error(&format!("Failed to delete {}: {e}", self.label));
            }
        }
    }

    pub fn confirm_message(&self, id: &str) -> String {
        format!(
            "Are you sure you want to delete {} {id}? This action cannot be undone.",
            self.label
        )
    }

    /// Jump to `page`, clamped to the available range.
    pub fn set_page(&self, page: usize) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.page = page.min(page_count(inner.rows.len()) - 1);
        }
        self.emit();
    }

    pub fn next_page(&self) {
        let page = self.inner.borrow().page;
        self.set_page(page + 1);
    }

    pub fn prev_page(&self) {
        let page = self.inner.borrow().page;
        self.set_page(page.saturating_sub(1));
    }

    /// Sort by `field`; repeating the same field flips the direction.
    pub fn toggle_sort(&self, field: &str) {
        let Some(idx) = self.columns.iter().position(|c| c.field == field) else {
            return;
        };
        {
            let mut inner = self.inner.borrow_mut();
            inner.sort = match inner.sort {
                Some((current, dir)) if current == idx => Some((idx, dir.toggled())),
                _ => Some((idx, SortDirection::Ascending)),
            };
            inner.page = 0;
        }
        self.emit();
    }
}
