pub mod ensemble_form;
pub mod header;
pub mod results;
pub mod text_analyzer;
pub mod text_results;
pub mod theme_toggle;
pub mod utils;
