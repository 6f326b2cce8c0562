/// Formatter adapters for rendering the license report
mod html_fragment_formatter;
mod markdown_table_formatter;

pub use html_fragment_formatter::HtmlFragmentFormatter;
pub use markdown_table_formatter::MarkdownTableFormatter;
