//! Property-based tests for submission validation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use proptest::prelude::*;

use doi_recommender::client::RecommendationService;
use doi_recommender::error::{ClientResult, PageError};
use doi_recommender::models::{AuthorDirectory, Doi};
use doi_recommender::page::Page;

/// In-memory recommender that counts requests.
struct CountingService {
    authors: Vec<String>,
    requests: AtomicUsize,
    last_author: Mutex<Option<String>>,
}

impl CountingService {
    fn new(authors: Vec<String>) -> Self {
        Self { authors, requests: AtomicUsize::new(0), last_author: Mutex::new(None) }
    }
}

#[async_trait]
impl RecommendationService for CountingService {
    async fn fetch_authors(&self) -> ClientResult<AuthorDirectory> {
        Ok(AuthorDirectory::new(self.authors.clone()))
    }

    async fn fetch_recommendations(&self, author: &str) -> ClientResult<Vec<Doi>> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        *self.last_author.lock().unwrap() = Some(author.to_string());
        Ok(author.chars().take(3).map(|c| Doi::new(format!("10.0/{}", c as u32))).collect())
    }
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread().build().unwrap()
}

fn arb_directory() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z][A-Za-z .'-]{0,20}", 0..10)
}

proptest! {
    /// Names outside the directory never reach the network and always flag the input.
    #[test]
    fn unknown_names_never_request(authors in arb_directory(), name in ".{0,24}") {
        prop_assume!(!authors.contains(&name));

        let service = Arc::new(CountingService::new(authors));
        let rt = runtime();
        let mut page = rt.block_on(Page::load(service.clone()));

        let outcome = rt.block_on(page.submit_name(name));

        prop_assert!(
            matches!(outcome, Some(Err(PageError::Validation { .. }))),
            "expected a validation error, got {:?}",
            outcome
        );
        prop_assert!(page.document().name_error.is_shown());
        prop_assert_eq!(service.requests.load(Ordering::SeqCst), 0);
    }

    /// Names in the directory issue exactly one request carrying that name.
    #[test]
    fn known_names_request_once(authors in arb_directory().prop_filter("non-empty", |a| !a.is_empty()), pick in any::<prop::sample::Index>()) {
        let name = pick.get(&authors).clone();

        let service = Arc::new(CountingService::new(authors));
        let rt = runtime();
        let mut page = rt.block_on(Page::load(service.clone()));

        let outcome = rt.block_on(page.submit_name(name.clone()));

        prop_assert!(matches!(outcome, Some(Ok(_))));
        prop_assert!(!page.document().name_error.is_shown());
        prop_assert_eq!(service.requests.load(Ordering::SeqCst), 1);
        prop_assert_eq!(service.last_author.lock().unwrap().clone(), Some(name));
    }

    /// The rendered list has one entry per identifier, in order, each resolving via doi.org.
    #[test]
    fn rendered_list_matches_response(dois in prop::collection::vec("10\\.[0-9]{1,5}/[a-z0-9.()-]{1,12}", 0..15)) {
        let mut doc = doi_recommender::page::Document::new();
        doc.recommendations.render_one(&Doi::new("10.9/stale"));

        let dois: Vec<Doi> = dois.into_iter().map(Doi::new).collect();
        doc.recommendations.render_all(&dois);

        prop_assert_eq!(doc.recommendations.len(), dois.len());
        for (item, doi) in doc.recommendations.items().iter().zip(&dois) {
            prop_assert_eq!(item.link.text.as_str(), doi.as_str());
            prop_assert_eq!(item.link.href.clone(), format!("https://doi.org/{doi}"));
        }
    }
}
