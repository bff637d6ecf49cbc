use super::CostSource;
use super::dtos::{QueryPage, ResultPage};
use crate::display::SpinnerContainer;
use crate::prelude::*;
use crate::report::ReportRequest;

/// Follows the continuation token until the API stops sending one.
///
/// Every page's buckets are appended in the order they arrive. The first
/// failing page aborts the whole thing, nothing is retried.
pub async fn fetch_all<S: CostSource>(
    source: &S,
    request: &ReportRequest,
    display: &mut SpinnerContainer,
) -> AppResult<Vec<ResultPage>> {
    // This one has to be started with true so the first round can proceed, then what comes out
    // from the response will dictate this value until it reaches false.
    let mut has_more: bool = true;

    // Manual counter.
    let mut page_number = 1;

    // Start empty.
    let mut next_page: Option<String> = None;
    let mut results: Vec<ResultPage> = vec![];

    while has_more {
        display.update_text(progress_text(page_number));

        let QueryPage {
            results: page_results,
            next_page_token,
        } = source
            .query(request, next_page.as_deref())
            .await
            .wrap_err_with(|| format!("While fetching page {page_number}"))?;

        tracing::debug!(
            page_number,
            buckets = page_results.len(),
            has_more = next_page_token.is_some(),
            "fetched a page of daily costs"
        );

        results.extend(page_results);

        // An empty token would just ask for the first page again.
        next_page = next_page_token.filter(|token| !token.is_empty());
        has_more = next_page.is_some();
        page_number += 1;
    }

    Ok(results)
}

// private

fn progress_text(page_number: usize) -> String {
    format!("Retrieving{}", ".".repeat(page_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::io::cost_explorer::Group;
    use jiff::civil::date;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Hands out canned responses in order and remembers the tokens it was given.
    struct FakeSource {
        responses: RefCell<VecDeque<AppResult<QueryPage>>>,
        calls: RefCell<Vec<Option<String>>>,
    }

    impl FakeSource {
        fn new(responses: Vec<AppResult<QueryPage>>) -> Self {
            FakeSource {
                responses: RefCell::new(responses.into()),
                calls: RefCell::new(vec![]),
            }
        }

        fn calls(&self) -> Vec<Option<String>> {
            self.calls.borrow().clone()
        }
    }

    impl CostSource for FakeSource {
        async fn query(
            &self,
            _request: &ReportRequest,
            next_page_token: Option<&str>,
        ) -> AppResult<QueryPage> {
            self.calls
                .borrow_mut()
                .push(next_page_token.map(str::to_owned));

            self.responses
                .borrow_mut()
                .pop_front()
                .expect("queried more often than there are canned pages")
        }
    }

    fn request() -> ReportRequest {
        ReportRequest::trailing(date(2024, 1, 31), 30, "username").unwrap()
    }

    fn bucket(period_start: &str, name: &str) -> ResultPage {
        ResultPage {
            period_start: period_start.to_owned(),
            is_estimated: false,
            groups: vec![Group {
                keys: vec![name.to_owned(), "111111111111".to_owned()],
                amount: "1.00".to_owned(),
                unit: "USD".to_owned(),
            }],
        }
    }

    fn page(results: Vec<ResultPage>, token: Option<&str>) -> AppResult<QueryPage> {
        Ok(QueryPage {
            results,
            next_page_token: token.map(str::to_owned),
        })
    }

    #[tokio::test]
    async fn single_page_means_single_call() {
        let p1 = bucket("2024-01-01", "alice");
        let source = FakeSource::new(vec![page(vec![p1.clone()], None)]);

        let results = fetch_all(&source, &request(), &mut SpinnerContainer::new())
            .await
            .unwrap();

        assert_eq!(results, vec![p1]);
        assert_eq!(source.calls(), vec![None]);
    }

    #[tokio::test]
    async fn follows_the_token_to_the_second_page() {
        let p1 = bucket("2024-01-01", "alice");
        let p2 = bucket("2024-01-02", "bob");
        let source = FakeSource::new(vec![
            page(vec![p1.clone()], Some("T")),
            page(vec![p2.clone()], None),
        ]);

        let results = fetch_all(&source, &request(), &mut SpinnerContainer::new())
            .await
            .unwrap();

        assert_eq!(results, vec![p1, p2]);
        assert_eq!(source.calls(), vec![None, Some("T".to_owned())]);
    }

    #[tokio::test]
    async fn keeps_arrival_order_across_many_pages() {
        let source = FakeSource::new(vec![
            page(
                vec![bucket("2024-01-01", "a"), bucket("2024-01-01", "b")],
                Some("T1"),
            ),
            page(vec![], Some("T2")),
            page(vec![bucket("2024-01-02", "c")], None),
        ]);

        let results = fetch_all(&source, &request(), &mut SpinnerContainer::new())
            .await
            .unwrap();

        let names: Vec<&str> = results
            .iter()
            .map(|r| r.groups[0].keys[0].as_str())
            .collect();

        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(
            source.calls(),
            vec![None, Some("T1".to_owned()), Some("T2".to_owned())]
        );
    }

    #[tokio::test]
    async fn empty_token_ends_the_loop() {
        let source = FakeSource::new(vec![page(vec![bucket("2024-01-01", "a")], Some(""))]);

        let results = fetch_all(&source, &request(), &mut SpinnerContainer::new())
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(source.calls().len(), 1);
    }

    #[tokio::test]
    async fn failure_stops_without_further_calls() {
        let source = FakeSource::new(vec![
            page(vec![bucket("2024-01-01", "a")], Some("T")),
            Err(Error::ApiRequest("ThrottlingException".to_owned()).into()),
            page(vec![bucket("2024-01-02", "b")], None),
        ]);

        let error = fetch_all(&source, &request(), &mut SpinnerContainer::new())
            .await
            .unwrap_err();

        assert!(
            error
                .chain()
                .any(|cause| cause.to_string().contains("ThrottlingException"))
        );
        assert_eq!(source.calls().len(), 2);
    }

    #[test]
    fn progress_grows_with_pages() {
        assert_eq!(progress_text(1), "Retrieving.");
        assert_eq!(progress_text(3), "Retrieving...");
    }
}
