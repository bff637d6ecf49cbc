use crate::error::Error;
use crate::io::cost_explorer::{Group, ResultPage};
use crate::prelude::*;

const HEADER: [&str; 6] = [
    "TimePeriod",
    "Name",
    "LinkedAccount",
    "Amount",
    "Unit",
    "Estimated",
];

/// One output line. The field order is the column order.
#[derive(Serialize)]
struct TsvRow<'a> {
    time_period: &'a str,
    name: &'a str,
    linked_account: &'a str,
    amount: &'a str,
    unit: &'a str,
    estimated: &'static str,
}

/// Renders the accumulated pages as tab-separated values, header first.
///
/// Rows come out in the order the pages and groups were produced. Nothing is
/// sorted, filtered or reformatted, the amount is the API's own string.
pub fn render_tsv(pages: &[ResultPage]) -> AppResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false) // Written by hand so an empty report still has one.
        .from_writer(vec![]);

    writer
        .write_record(HEADER)
        .into_diagnostic()
        .wrap_err("Failed to write the header row.")?;

    for page in pages {
        for group in &page.groups {
            let row = into_row(page, group)?;

            writer
                .serialize(row)
                .into_diagnostic()
                .wrap_err("Failed to serialize a cost row to TSV format")?;
        }
    }

    let data = writer
        .into_inner()
        .into_diagnostic()
        .wrap_err("Failed to get writer data.")?;

    let tsv_string = String::from_utf8(data)
        .into_diagnostic()
        .wrap_err("Invalid utf-8")?;

    Ok(tsv_string)
}

// private

fn into_row<'a>(page: &'a ResultPage, group: &'a Group) -> AppResult<TsvRow<'a>> {
    let [name, linked_account] = group.keys.as_slice() else {
        let error = Error::Render(format!(
            "expected a tag value and a linked account, got {} key(s) on {}",
            group.keys.len(),
            page.period_start
        ));

        return Err(error.into());
    };

    Ok(TsvRow {
        time_period: &page.period_start,
        name,
        linked_account,
        amount: &group.amount,
        unit: &group.unit,
        estimated: if page.is_estimated { "True" } else { "False" },
    })
}
