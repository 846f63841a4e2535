//! Reference documentation for the configuration options.
//!
//! Generates markdown from the option table and the JSON schemas of the
//! section structures, so descriptions come straight from the field docs.

mod markdown;
mod schema;
mod sections;

#[cfg(test)]
mod tests;

pub use markdown::{generate_section_page, render_reference};
pub use schema::{PropertyInfo, config_schema, extract_property_info};
pub use sections::{SchemeFn, SectionInfo, get_all_sections};
