//! Searchable, sortable list of beers

use crate::core::beer::Beer;
use crate::core::error::SourceError;
use crate::core::query::{self, SearchMode, SearchPattern, SortCriterion, SortKey};
use crate::core::source::BeerSource;
use crate::storage::CatalogStore;
use serde::Serialize;

/// One row of the rendered list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeerSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub alcohol_content: f64,
    pub image_url: String,
    pub detail_url: String,
}

impl From<&Beer> for BeerSummary {
    fn from(beer: &Beer) -> Self {
        Self {
            id: beer.id.clone(),
            name: beer.display_name().to_string(),
            description: beer.description.clone(),
            alcohol_content: beer.alcohol_content,
            image_url: super::data_url("/data/beers/", &beer.image_ref),
            detail_url: super::detail_path(&beer.id),
        }
    }
}

/// Everything needed to draw the list page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSnapshot {
    pub pattern: String,
    pub criterion: SortCriterion,
    pub criteria: Vec<SortCriterion>,
    pub descending: bool,
    pub beers: Vec<BeerSummary>,
    /// Number of beers matching the pattern, whatever the sort
    pub matching_count: usize,
}

/// The list view
///
/// Reads the catalog store on every render; pattern, criterion and direction
/// changes take effect on the next [`render`](Self::render).
#[derive(Debug, Clone)]
pub struct ListView {
    store: CatalogStore,
    search_mode: SearchMode,
    pattern: SearchPattern,
    criterion: SortCriterion,
    descending: bool,
}

impl ListView {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store,
            search_mode: SearchMode::default(),
            pattern: SearchPattern::default(),
            criterion: SortCriterion::default(),
            descending: false,
        }
    }

    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self.pattern = SearchPattern::with_mode(self.pattern.as_str(), mode);
        self
    }

    /// Fetch the catalog into the store
    ///
    /// The view keeps showing whatever the store held before when the fetch
    /// fails; the failure is logged by the store.
    pub async fn load(&self, source: &dyn BeerSource) -> Result<usize, SourceError> {
        self.store.load(source).await.map(|beers| beers.len())
    }

    /// The search box received input
    pub fn on_search_input(&mut self, value: &str) {
        self.pattern = SearchPattern::with_mode(value, self.search_mode);
    }

    /// An option of the sort select box was picked
    ///
    /// `value` is the option's value (the sort key), `label` its text.
    /// A value naming no known field is ignored.
    pub fn on_sort_change(&mut self, value: &str, label: &str) {
        match value.parse::<SortKey>() {
            Ok(key) => self.criterion = SortCriterion::new(key, label.trim()),
            Err(e) => tracing::warn!(value = %value, error = %e, "Ignoring sort change"),
        }
    }

    /// The descending checkbox was toggled
    pub fn on_descending_change(&mut self, checked: bool) {
        self.descending = checked;
    }

    pub fn pattern(&self) -> &SearchPattern {
        &self.pattern
    }

    pub fn criterion(&self) -> &SortCriterion {
        &self.criterion
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }

    /// Beers matching the current pattern, in catalog order
    pub fn matching(&self) -> Vec<Beer> {
        query::filter(&self.store.snapshot(), &self.pattern)
    }

    /// Beers matching the current pattern, sorted
    pub fn visible(&self) -> Vec<Beer> {
        query::sort(self.matching(), &self.criterion, self.descending)
    }

    pub fn matching_count(&self) -> usize {
        self.store
            .snapshot()
            .iter()
            .filter(|beer| self.pattern.matches(beer))
            .count()
    }

    pub fn render(&self) -> ListSnapshot {
        let visible = self.visible();
        ListSnapshot {
            pattern: self.pattern.as_str().to_string(),
            criterion: self.criterion.clone(),
            criteria: query::sorting_criteria(),
            descending: self.descending,
            matching_count: visible.len(),
            beers: visible.iter().map(BeerSummary::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(snapshot: &ListSnapshot) -> Vec<&str> {
        snapshot.beers.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_initial_render_shows_bundled_list_by_name() {
        let view = ListView::new(CatalogStore::bundled());
        let snapshot = view.render();

        assert_eq!(snapshot.pattern, "");
        assert_eq!(snapshot.criterion.key, SortKey::Name);
        assert!(!snapshot.descending);
        assert_eq!(snapshot.matching_count, 3);
        assert_eq!(
            ids(&snapshot),
            vec!["AffligemBlond", "AffligemDubbel", "AffligemTripel"]
        );
    }

    #[test]
    fn test_search_input_filters_and_counts() {
        let mut view = ListView::new(CatalogStore::bundled());
        view.on_search_input("dubbel");

        let snapshot = view.render();
        assert_eq!(ids(&snapshot), vec!["AffligemDubbel"]);
        assert_eq!(snapshot.matching_count, 1);
        assert_eq!(view.matching_count(), 1);
        assert_eq!(snapshot.pattern, "dubbel");
    }

    #[test]
    fn test_sort_and_direction_changes() {
        let mut view = ListView::new(CatalogStore::bundled());
        view.on_sort_change("alcohol", " Alcohol content");
        view.on_descending_change(true);

        let snapshot = view.render();
        assert_eq!(snapshot.criterion.label, "Alcohol content");
        assert_eq!(snapshot.beers[0].id, "AffligemTripel");
        assert_eq!(snapshot.matching_count, 3);
    }

    #[test]
    fn test_unknown_sort_value_is_ignored() {
        let mut view = ListView::new(CatalogStore::bundled());
        view.on_sort_change("alcohol", "Alcohol content");
        view.on_sort_change("brewery", "Brewery");
        assert_eq!(view.criterion().key, SortKey::Alcohol);
    }

    #[test]
    fn test_render_follows_store_replacement() {
        let store = CatalogStore::bundled();
        let view = ListView::new(store.clone());

        store.replace(vec![Beer::new("Orval", "Orval", "Trappist", 6.2, "img/Orval.jpg")]);

        let snapshot = view.render();
        assert_eq!(ids(&snapshot), vec!["Orval"]);
        assert_eq!(snapshot.beers[0].image_url, "/data/beers/img/Orval.jpg");
        assert_eq!(snapshot.beers[0].detail_url, "/beer/Orval");
    }

    #[test]
    fn test_nameless_beer_is_never_listed() {
        let mut anonymous = Beer::new("Anon", "", "No label at all", 5.0, "img/Anon.jpg");
        anonymous.name = None;
        let mut beers = crate::core::beer::bundled_beers();
        beers.push(anonymous);
        let mut view = ListView::new(CatalogStore::new(beers));

        let snapshot = view.render();
        assert!(!ids(&snapshot).contains(&"Anon"));
        assert_eq!(snapshot.matching_count, 3);
        assert_eq!(view.matching_count(), 3);

        view.on_search_input("label");
        assert_eq!(view.render().matching_count, 0);
    }

    #[test]
    fn test_regex_search_mode() {
        let mut view = ListView::new(CatalogStore::bundled()).with_search_mode(SearchMode::Regex);
        view.on_search_input("(blond|tripel)$");
        assert_eq!(view.matching_count(), 2);
    }
}
