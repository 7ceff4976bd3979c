//! Defines core data structures used throughout the sorting pipeline.
//!
//! The central type is [`Summary`], the insertion-ordered per-location,
//! per-dish tally accumulated while photos are filed.

/// A dish name and how many photos were filed under it during one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishTally {
    /// The dish name as it appeared in the filename.
    pub name: String,
    /// Number of photos filed under this dish.
    pub count: u64,
}

/// All dish tallies for one location, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationTally {
    /// The location display name (after mapping resolution).
    pub name: String,
    dishes: Vec<DishTally>,
}

impl LocationTally {
    /// The dish tallies for this location, in first-seen order.
    pub fn dishes(&self) -> &[DishTally] {
        &self.dishes
    }
}

/// Per-location, per-dish counts of the photos filed during one run.
///
/// Locations and dishes iterate in the order they were first recorded, not
/// sorted. Built fresh each run; never persisted between runs except as the
/// overwritten report file.
///
/// # Examples
///
/// ```
/// use photosort::core_types::Summary;
///
/// let mut summary = Summary::new();
/// summary.record("教工餐厅一层", "西红柿炒鸡蛋");
/// summary.record("教工餐厅一层", "西红柿炒鸡蛋");
/// summary.record("风味餐厅二层", "麻辣香锅");
///
/// assert_eq!(summary.total(), 3);
/// assert_eq!(summary.locations()[0].name, "教工餐厅一层");
/// assert_eq!(summary.locations()[0].dishes()[0].count, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    locations: Vec<LocationTally>,
}

impl Summary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count for `(location, dish)`, inserting either level on
    /// first sight. Lookups are a linear scan over one run's tallies.
    pub fn record(&mut self, location: &str, dish: &str) {
        let index = match self.locations.iter().position(|l| l.name == location) {
            Some(index) => index,
            None => {
                self.locations.push(LocationTally {
                    name: location.to_string(),
                    dishes: Vec::new(),
                });
                self.locations.len() - 1
            }
        };
        let location = &mut self.locations[index];
        match location.dishes.iter_mut().find(|d| d.name == dish) {
            Some(existing) => existing.count += 1,
            None => location.dishes.push(DishTally {
                name: dish.to_string(),
                count: 1,
            }),
        }
    }

    /// The location tallies, in first-seen order.
    pub fn locations(&self) -> &[LocationTally] {
        &self.locations
    }

    /// `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Total number of photos recorded across all locations.
    pub fn total(&self) -> u64 {
        self.locations
            .iter()
            .flat_map(|l| l.dishes.iter())
            .map(|d| d.count)
            .sum()
    }
}

/// Outcome of one sorting pass over the source directory.
#[derive(Debug, Clone, Default)]
pub struct SortOutcome {
    /// The accumulated per-location, per-dish tally.
    pub summary: Summary,
    /// Photos moved into a location/dish folder.
    pub filed: usize,
    /// Photos moved into the TODO triage folder.
    pub todo: usize,
    /// Candidates left in place because their name did not classify.
    pub skipped: Vec<String>,
    /// Candidates left in place because their move failed (`--keep-going`).
    pub failed: Vec<String>,
}

impl SortOutcome {
    /// Photos that were actually relocated.
    pub fn moved(&self) -> usize {
        self.filed + self.todo
    }
}
