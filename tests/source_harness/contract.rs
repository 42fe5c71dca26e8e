//! Macro-generated test suite for `BeerSource` contract validation.
//!
//! Every source must expose the same data layout with the same failure
//! behavior, whatever the transport.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod source_harness;
//!
//! use beers::prelude::*;
//! use source_harness::*;
//!
//! beer_source_tests!(static_dir_source());
//! ```
//!
//! # Generated Tests
//!
//! - `test_fetch_catalog_in_file_order`: catalog comes back as written
//! - `test_fetch_details`: optional fields and wire renames decode
//! - `test_unknown_id_fails`: missing record is not a parse error
//! - `test_malformed_details_is_parse_error`: broken JSON is
//! - `test_invalid_id_is_refused`: ids that would escape the layout
//! - `test_store_load_replaces_bundled_list`: store over the source
//! - `test_detail_view_over_source`: Loaded, then Failed
//! - `test_concurrent_ids_last_wins`: overlapping fetches

/// Generate a full `BeerSource` conformance test suite.
///
/// `$setup` must be a future resolving to `(TempDir, impl BeerSource)` over
/// the fixture data directory. It is re-evaluated for each test; the
/// `TempDir` is held until the test ends. The including file must bring
/// `beers::prelude::*` into scope.
#[macro_export]
macro_rules! beer_source_tests {
    ($setup:expr) => {
        mod beer_source_contract_tests {
            use super::*;

            #[tokio::test]
            async fn test_fetch_catalog_in_file_order() {
                let (_dir, source) = $setup.await;

                let beers = source.fetch_catalog().await.unwrap();

                let ids: Vec<&str> = beers.iter().map(|b| b.id.as_str()).collect();
                assert_eq!(ids, FIXTURE_IDS);
                assert_eq!(beers[3].alcohol_content, 9.5);
                assert_eq!(beers[3].image_ref, "img/WestmalleTripel.jpg");
            }

            #[tokio::test]
            async fn test_fetch_details() {
                let (_dir, source) = $setup.await;

                let beer = source.fetch_details("AffligemTripel").await.unwrap();

                assert_eq!(beer.display_name(), "Affligem Tripel");
                assert_eq!(beer.brewery.as_deref(), Some("AffligemTripel Brewery"));
                assert_eq!(
                    beer.secondary_image_ref.as_deref(),
                    Some("beers/img/AffligemTripelLabel.png")
                );
                assert_eq!(beer.serving_notes.as_deref(), Some("Serve in a chalice"));
            }

            #[tokio::test]
            async fn test_unknown_id_fails() {
                let (_dir, source) = $setup.await;

                let err = source.fetch_details("Unknown").await.unwrap_err();
                assert!(!err.is_parse());
            }

            #[tokio::test]
            async fn test_malformed_details_is_parse_error() {
                let (_dir, source) = $setup.await;

                let err = source.fetch_details(BROKEN_ID).await.unwrap_err();
                assert!(err.is_parse(), "unexpected error: {}", err);
            }

            #[tokio::test]
            async fn test_invalid_id_is_refused() {
                let (_dir, source) = $setup.await;

                let err = source.fetch_details("../beers").await.unwrap_err();
                assert!(matches!(err, SourceError::InvalidId { .. }));
            }

            #[tokio::test]
            async fn test_store_load_replaces_bundled_list() {
                let (_dir, source) = $setup.await;
                let store = CatalogStore::bundled();

                store.load(&source).await.unwrap();

                assert_eq!(store.len(), FIXTURE_IDS.len());
                assert!(store.get("WestmalleTripel").is_some());
            }

            #[tokio::test]
            async fn test_detail_view_over_source() {
                let (_dir, source) = $setup.await;
                let view = DetailView::new(Arc::new(source));

                assert!(view.set_beer_id("AffligemBlond").await.is_loaded());
                assert_eq!(
                    view.set_beer_id(BROKEN_ID).await,
                    DetailState::Failed {
                        beer_id: BROKEN_ID.to_string()
                    }
                );
                assert!(view.render().is_none());
            }

            #[tokio::test]
            async fn test_concurrent_ids_last_wins() {
                let (_dir, source) = $setup.await;
                let view = DetailView::new(Arc::new(source));

                futures::join!(
                    view.set_beer_id("AffligemBlond"),
                    view.set_beer_id("AffligemDubbel"),
                );

                let snapshot = view.render().unwrap();
                assert_eq!(snapshot.id, "AffligemDubbel");
            }
        }
    };
}
