pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod picker;
pub mod render;
pub mod runtime;
pub mod settings;
pub mod terminal_guard;
pub mod theme;
pub mod trigger;

pub use app::App;
pub use runtime::run;
