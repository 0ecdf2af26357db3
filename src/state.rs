use crate::data::filter::{filtered_indices, FilterState};
use crate::data::model::{Dataset, Day, GroupField, MealTime};

// ---------------------------------------------------------------------------
// Table sorting
// ---------------------------------------------------------------------------

/// Column the data grid can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Bill,
    Tip,
    Sex,
    Smoker,
    Day,
    Time,
    Size,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::Bill,
        SortKey::Tip,
        SortKey::Sex,
        SortKey::Smoker,
        SortKey::Day,
        SortKey::Time,
        SortKey::Size,
    ];

    pub fn header(self) -> &'static str {
        match self {
            SortKey::Bill => "Bill",
            SortKey::Tip => "Tip",
            SortKey::Sex => "Sex",
            SortKey::Smoker => "Smoker",
            SortKey::Day => "Day",
            SortKey::Time => "Time",
            SortKey::Size => "Size",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The embedded dataset, fixed for the process lifetime.
    pub dataset: Dataset,

    /// Current sidebar filter selections.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached; rebuilt by
    /// [`AppState::refilter`] only when a filter input changes).
    pub visible_indices: Vec<usize>,

    /// Colour grouping for the scatter plot (`None` = single colour).
    pub scatter_group: Option<GroupField>,

    /// Split axis for the tip-percentage distribution plot.
    pub distribution_split: GroupField,

    /// Active table sort: column and ascending flag. `None` = original order.
    pub sort: Option<(SortKey, bool)>,
}

impl AppState {
    /// Start a session over the dataset with full-domain filters.
    pub fn new(dataset: Dataset) -> Self {
        let filters = FilterState::full(&dataset);
        let visible_indices = (0..dataset.len()).collect();
        AppState {
            dataset,
            filters,
            visible_indices,
            scatter_group: None,
            distribution_split: GroupField::Day,
            sort: None,
        }
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.filters);
    }

    /// Restore the filters to the full dataset domain. Chart grouping and
    /// table sort are deliberately left untouched.
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::full(&self.dataset);
        self.refilter();
    }

    /// Set the bill range, clamped to the dataset domain and kept ordered.
    pub fn set_bill_range(&mut self, mut min: f64, mut max: f64) {
        min = min.clamp(self.dataset.bill_min, self.dataset.bill_max);
        max = max.clamp(self.dataset.bill_min, self.dataset.bill_max);
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        self.filters.bill_range = (min, max);
        self.refilter();
    }

    /// Toggle one meal time in the filter.
    pub fn toggle_time(&mut self, time: MealTime) {
        if !self.filters.times.remove(&time) {
            self.filters.times.insert(time);
        }
        self.refilter();
    }

    /// Toggle one day in the filter.
    pub fn toggle_day(&mut self, day: Day) {
        if !self.filters.days.remove(&day) {
            self.filters.days.insert(day);
        }
        self.refilter();
    }

    /// Click on a column header: sort ascending, then flip, then keep
    /// flipping on repeated clicks.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some((current, ascending)) if current == key => Some((key, !ascending)),
            _ => Some((key, true)),
        };
    }

    /// Visible row indices in the order the table should display them.
    pub fn sorted_visible(&self) -> Vec<usize> {
        let mut rows = self.visible_indices.clone();
        if let Some((key, ascending)) = self.sort {
            rows.sort_by(|&a, &b| {
                let ra = &self.dataset.records[a];
                let rb = &self.dataset.records[b];
                let ord = match key {
                    SortKey::Bill => ra.total_bill.total_cmp(&rb.total_bill),
                    SortKey::Tip => ra.tip.total_cmp(&rb.tip),
                    SortKey::Sex => ra.sex.cmp(&rb.sex),
                    SortKey::Smoker => ra.smoker.cmp(&rb.smoker),
                    SortKey::Day => ra.day.cmp(&rb.day),
                    SortKey::Time => ra.time.cmp(&rb.time),
                    SortKey::Size => ra.size.cmp(&rb.size),
                };
                if ascending { ord } else { ord.reverse() }
            });
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_embedded;

    fn state() -> AppState {
        AppState::new(load_embedded().unwrap())
    }

    #[test]
    fn initial_state_shows_everything() {
        let st = state();
        assert_eq!(st.visible_indices.len(), st.dataset.len());
        assert_eq!(st.filters, FilterState::full(&st.dataset));
        assert_eq!(st.distribution_split, GroupField::Day);
        assert_eq!(st.scatter_group, None);
    }

    #[test]
    fn reset_restores_full_domain_and_is_idempotent() {
        let mut st = state();
        st.set_bill_range(12.0, 18.0);
        st.toggle_time(MealTime::Dinner);
        st.toggle_day(Day::Sun);
        assert!(st.visible_indices.len() < st.dataset.len());

        st.reset_filters();
        let after_once = st.filters.clone();
        assert_eq!(after_once, FilterState::full(&st.dataset));
        assert_eq!(st.visible_indices.len(), st.dataset.len());

        st.reset_filters();
        assert_eq!(st.filters, after_once);
    }

    #[test]
    fn reset_leaves_chart_grouping_alone() {
        let mut st = state();
        st.scatter_group = Some(GroupField::Smoker);
        st.distribution_split = GroupField::Time;
        st.reset_filters();
        assert_eq!(st.scatter_group, Some(GroupField::Smoker));
        assert_eq!(st.distribution_split, GroupField::Time);
    }

    #[test]
    fn bill_range_is_clamped_and_ordered() {
        let mut st = state();
        st.set_bill_range(-100.0, 1e6);
        assert_eq!(
            st.filters.bill_range,
            (st.dataset.bill_min, st.dataset.bill_max)
        );

        st.set_bill_range(30.0, 10.0);
        assert_eq!(st.filters.bill_range, (10.0, 30.0));
    }

    #[test]
    fn toggling_a_time_off_and_on_roundtrips() {
        let mut st = state();
        let before = st.visible_indices.clone();
        st.toggle_time(MealTime::Lunch);
        assert!(st
            .visible_indices
            .iter()
            .all(|&i| st.dataset.records[i].time == MealTime::Dinner));
        st.toggle_time(MealTime::Lunch);
        assert_eq!(st.visible_indices, before);
    }

    #[test]
    fn deselecting_everything_empties_the_view() {
        let mut st = state();
        st.toggle_day(Day::Thur);
        st.toggle_day(Day::Fri);
        st.toggle_day(Day::Sat);
        st.toggle_day(Day::Sun);
        assert!(st.visible_indices.is_empty());
    }

    #[test]
    fn sort_toggles_direction_on_repeat() {
        let mut st = state();
        st.toggle_sort(SortKey::Bill);
        assert_eq!(st.sort, Some((SortKey::Bill, true)));
        let asc = st.sorted_visible();
        assert!(asc
            .windows(2)
            .all(|w| st.dataset.records[w[0]].total_bill
                <= st.dataset.records[w[1]].total_bill));

        st.toggle_sort(SortKey::Bill);
        assert_eq!(st.sort, Some((SortKey::Bill, false)));
        let desc = st.sorted_visible();
        assert!(desc
            .windows(2)
            .all(|w| st.dataset.records[w[0]].total_bill
                >= st.dataset.records[w[1]].total_bill));

        st.toggle_sort(SortKey::Day);
        assert_eq!(st.sort, Some((SortKey::Day, true)));
    }

    #[test]
    fn unsorted_table_preserves_row_order() {
        let st = state();
        assert_eq!(st.sorted_visible(), st.visible_indices);
    }
}
