pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod input;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod seed;
pub mod store;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use app::App;
pub use config::Config;
pub use error::{Result, VocabError};
pub use models::{Mode, Streak, Verdict, WordPair};
pub use quiz::judge;
pub use seed::{spawn_seed_worker, JsonFileSeed, SeedEvent, SeedSource};
pub use store::WordStore;
pub use ui::draw_app;
