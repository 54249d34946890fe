// Resume text extraction: PDF → plain text, then best-effort section and contact scraping.
// Everything here is a pure function of its input; nothing is cached between requests.

pub mod contact;
pub mod handlers;
pub mod pdf;
pub mod sections;
