/// One response of the paginated query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage {
    /// Daily buckets, in the order the API sent them.
    pub results: Vec<ResultPage>,

    /// Present when there is more to fetch.
    pub next_page_token: Option<String>,
}

/// One daily bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    /// Start of the day (inclusive), YYYY-MM-DD.
    pub period_start: String,

    /// The month is not closed yet, the numbers may still move.
    pub is_estimated: bool,

    pub groups: Vec<Group>,
}

/// Cost of one (tag value, linked account) pair for a day.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Tag value first, linked account id second. Exactly as returned,
    /// so the tag value keeps its `key$` prefix.
    pub keys: Vec<String>,

    /// Decimal string, untouched.
    pub amount: String,

    /// Currency code, e.g. USD.
    pub unit: String,
}
