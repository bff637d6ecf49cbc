pub mod request;
pub mod tsv;

pub use request::ReportRequest;
pub use tsv::render_tsv;
