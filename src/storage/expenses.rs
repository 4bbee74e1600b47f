//! Expense store backed by a single JSON slot
//!
//! Owns the canonical, insertion-ordered expense list. Every mutation is
//! written through to `expenses.json` while the write lock is held, so the
//! file and the in-memory list agree once a mutating call returns `Ok`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, Category, Expense, ExpenseId, Month};
use crate::services::CategoryClassifier;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Aggregate of one category within a set of records
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotals {
    pub total: Amount,
    pub count: usize,
    pub records: Vec<Expense>,
}

impl Default for CategoryTotals {
    fn default() -> Self {
        Self {
            total: Amount::zero(),
            count: 0,
            records: Vec::new(),
        }
    }
}

/// Per-category totals, iterated in category priority order
pub type CategoryBreakdown = BTreeMap<Category, CategoryTotals>;

/// Local-first expense store
pub struct ExpenseStore {
    path: PathBuf,
    classifier: CategoryClassifier,
    data: RwLock<Vec<Expense>>,
    /// Last known reachability of the remote store
    connectivity: AtomicBool,
}

impl ExpenseStore {
    /// Create an empty store persisting to `path` (nothing is read yet)
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            classifier: CategoryClassifier::default(),
            data: RwLock::new(Vec::new()),
            connectivity: AtomicBool::new(false),
        }
    }

    /// Create a store at `path` and load whatever is persisted there
    pub fn open(path: PathBuf) -> Self {
        let store = Self::new(path);
        store.load();
        store
    }

    /// Open the store in the standard data directory
    pub fn open_in(paths: &ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;
        Ok(Self::open(paths.expenses_file()))
    }

    /// Use a different classifier for new records
    pub fn with_classifier(mut self, classifier: CategoryClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Path of the persisted slot
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted sequence; absent or unparsable data means empty
    pub fn load(&self) {
        let records: Vec<Expense> = read_json_or_default(&self.path);
        debug!(count = records.len(), path = %self.path.display(), "loaded expenses");
        *self.write_guard() = records;
    }

    /// Add an expense created now
    pub fn add(&self, amount: &str, detail: &str) -> ExpenseResult<Expense> {
        self.add_at(amount, detail, Utc::now())
    }

    /// Add an expense with an explicit creation time
    ///
    /// Validation happens before any mutation. If the durable write fails the
    /// error is returned and the in-memory list keeps the new record, ahead of
    /// disk.
    pub fn add_at(&self, amount: &str, detail: &str, at: DateTime<Utc>) -> ExpenseResult<Expense> {
        let amount = Amount::parse(amount)
            .map_err(|e| ExpenseError::invalid_input(format!("Invalid amount: {}", e)))?;

        let detail = detail.trim();
        if detail.is_empty() {
            return Err(ExpenseError::invalid_input("Expense detail cannot be empty"));
        }

        let mut data = self.write_guard();
        let last_id = data.iter().map(|e| e.id).max();
        let id = ExpenseId::next_after(last_id, at).ok_or_else(|| {
            ExpenseError::invalid_input(format!(
                "No expense id left after {}",
                last_id.map_or(0, |id| id.as_i64())
            ))
        })?;
        let expense = Expense::new(
            id,
            amount,
            detail,
            at,
            self.classifier.classify(detail),
        );

        data.push(expense.clone());
        write_json_atomic(&self.path, &*data)?;

        debug!(id = %expense.id, category = %expense.category, "added expense");
        Ok(expense)
    }

    /// Replace the whole list (used by a successful pull)
    pub fn replace_all(&self, records: Vec<Expense>) -> ExpenseResult<()> {
        let mut data = self.write_guard();
        let previous = data.len();
        *data = records;
        write_json_atomic(&self.path, &*data)?;

        info!(previous, current = data.len(), "replaced local expenses");
        Ok(())
    }

    /// All records in insertion order
    pub fn all(&self) -> Vec<Expense> {
        self.read_guard().clone()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }

    /// Records created in the given month (zero-based index), insertion order
    pub fn by_month(&self, year: i32, month0: u32) -> Vec<Expense> {
        match Month::new(year, month0) {
            Ok(month) => self.in_month(month),
            Err(_) => Vec::new(),
        }
    }

    /// Records created in `month`, insertion order
    pub fn in_month(&self, month: Month) -> Vec<Expense> {
        self.read_guard()
            .iter()
            .filter(|e| month.contains(e.date))
            .cloned()
            .collect()
    }

    /// Up to `limit` records, most recent first; equal dates keep insertion order
    pub fn recent(&self, limit: usize) -> Vec<Expense> {
        let mut records = self.all();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records.truncate(limit);
        records
    }

    /// Group `records` by category with totals and counts
    pub fn category_breakdown(records: &[Expense]) -> CategoryBreakdown {
        let mut breakdown = CategoryBreakdown::new();
        for expense in records {
            let entry = breakdown.entry(expense.category).or_default();
            entry.total += expense.amount;
            entry.count += 1;
            entry.records.push(expense.clone());
        }
        breakdown
    }

    /// Last known reachability of the remote store
    pub fn connectivity(&self) -> bool {
        self.connectivity.load(Ordering::SeqCst)
    }

    /// Record the outcome of a probe or sync call
    pub fn set_connectivity(&self, online: bool) {
        self.connectivity.store(online, Ordering::SeqCst);
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, Vec<Expense>> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Vec<Expense>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}
