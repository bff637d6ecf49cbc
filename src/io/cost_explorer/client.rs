use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_costexplorer::Client;
use aws_sdk_costexplorer::error::DisplayErrorContext;
use aws_sdk_costexplorer::types::{
    DateInterval, Granularity, Group as CeGroup, GroupDefinition, GroupDefinitionType,
    ResultByTime,
};

use super::CostSource;
use super::dtos::{Group, QueryPage, ResultPage};
use crate::error::Error;
use crate::prelude::*;
use crate::report::ReportRequest;

const METRIC: &str = "UnblendedCost";
const LINKED_ACCOUNT: &str = "LINKED_ACCOUNT";

// Cost Explorer only lives here, so use it when nothing else is configured.
const HOME_REGION: &str = "us-east-1";

/// Cost Explorer client backed by the ambient AWS credential chain.
pub struct AwsCostExplorer {
    client: Client,
}

impl AwsCostExplorer {
    /// Loads the shared AWS config and resolves credentials once, so a machine
    /// without credentials fails here instead of on the first query.
    pub async fn connect() -> AppResult<Self> {
        let region = RegionProviderChain::default_provider().or_else(HOME_REGION);
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        let provider = config.credentials_provider().ok_or_else(|| {
            Error::CredentialsUnavailable("no credentials provider is configured".to_owned())
        })?;

        provider
            .provide_credentials()
            .await
            .map_err(|e| Error::CredentialsUnavailable(DisplayErrorContext(e).to_string()))?;

        tracing::debug!(region = ?config.region(), "cost explorer client ready");

        Ok(AwsCostExplorer {
            client: Client::new(&config),
        })
    }
}

impl CostSource for AwsCostExplorer {
    async fn query(
        &self,
        request: &ReportRequest,
        next_page_token: Option<&str>,
    ) -> AppResult<QueryPage> {
        let time_period = DateInterval::builder()
            .start(request.start_date())
            .end(request.end_date())
            .build()
            .map_err(|e| Error::ApiRequest(DisplayErrorContext(e).to_string()))?;

        let output = self
            .client
            .get_cost_and_usage()
            // ranging, sizing.
            .time_period(time_period)
            .granularity(Granularity::Daily)
            .metrics(METRIC)
            // grouping.
            .group_by(group_definition(GroupDefinitionType::Tag, request.tag_key()))
            .group_by(group_definition(GroupDefinitionType::Dimension, LINKED_ACCOUNT))
            // optional page.
            .set_next_page_token(next_page_token.map(str::to_owned))
            .send()
            .await
            .map_err(|e| Error::ApiRequest(DisplayErrorContext(e).to_string()))?;

        let results = output
            .results_by_time()
            .iter()
            .map(ResultPage::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(QueryPage {
            results,
            next_page_token: output.next_page_token().map(str::to_owned),
        })
    }
}

// private

fn group_definition(kind: GroupDefinitionType, key: &str) -> GroupDefinition {
    GroupDefinition::builder().r#type(kind).key(key).build()
}

/// Try to turn an SDK daily bucket into mine.
impl TryFrom<&ResultByTime> for ResultPage {
    type Error = miette::Report;

    fn try_from(bucket: &ResultByTime) -> Result<Self, Self::Error> {
        let period_start = bucket
            .time_period()
            .map(|period| period.start().to_owned())
            .ok_or_else(|| Error::MalformedResponse("a daily bucket has no time period".into()))?;

        let groups = bucket
            .groups()
            .iter()
            .map(Group::try_from)
            .collect::<AppResult<Vec<_>>>()
            .wrap_err_with(|| format!("In the bucket starting {period_start}"))?;

        Ok(ResultPage {
            period_start,
            is_estimated: bucket.estimated(),
            groups,
        })
    }
}

/// Plucks the unblended cost out of an SDK group.
impl TryFrom<&CeGroup> for Group {
    type Error = miette::Report;

    fn try_from(group: &CeGroup) -> Result<Self, Self::Error> {
        let keys = group.keys().to_vec();

        // One tag value plus one linked account, always, since we group by both.
        if keys.len() != 2 {
            let error = Error::MalformedResponse(format!(
                "expected 2 group keys, got {}: {:?}",
                keys.len(),
                keys
            ));

            return Err(error.into());
        }

        let metric = group
            .metrics()
            .and_then(|metrics| metrics.get(METRIC))
            .ok_or_else(|| Error::MalformedResponse(format!("{keys:?} has no {METRIC}")))?;

        let amount = metric
            .amount()
            .ok_or_else(|| Error::MalformedResponse(format!("{keys:?} has no amount")))?
            .to_owned();

        let unit = metric
            .unit()
            .ok_or_else(|| Error::MalformedResponse(format!("{keys:?} has no unit")))?
            .to_owned();

        Ok(Group { keys, amount, unit })
    }
}
