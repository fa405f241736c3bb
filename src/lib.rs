pub mod anthropic;
pub mod config;
pub mod error;
pub mod i18n;
pub mod normalize;
pub mod pipeline;
pub mod prompt;
pub mod report;
pub mod scaffold;
pub mod table;
