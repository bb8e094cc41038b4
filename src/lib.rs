pub mod app;
pub mod config;
pub mod db;
pub mod loader;
pub mod logger;
pub mod models;
pub mod provider;
pub mod session;
pub mod timer;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::App;
pub use config::{Config, QuestionSource};
pub use loader::spawn_loader;
pub use models::{Intent, Phase, Question, SessionState};
pub use provider::{FileQuestionProvider, HttpQuestionProvider, LoadError, QuestionProvider};
pub use session::{handle_quiz_input, transition, KeyAction};
pub use timer::Countdown;
pub use ui::draw;
