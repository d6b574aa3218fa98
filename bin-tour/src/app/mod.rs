mod app;
mod err;
mod utils;
mod tour;

pub use app::App;
