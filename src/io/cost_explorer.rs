mod client;
mod dtos;
mod pagination;

pub use client::AwsCostExplorer;
pub use dtos::{Group, QueryPage, ResultPage};
pub use pagination::fetch_all;

use crate::prelude::*;
use crate::report::ReportRequest;

/// Anything that can answer one page of a daily cost query.
///
/// The real one talks to AWS. Tests hand back canned pages instead.
#[allow(async_fn_in_trait)] // Only ever used through generics, never as dyn.
pub trait CostSource {
    /// Fetch one page. `next_page_token` is `None` on the first call and the
    /// previous page's token afterwards.
    async fn query(
        &self,
        request: &ReportRequest,
        next_page_token: Option<&str>,
    ) -> AppResult<QueryPage>;
}
