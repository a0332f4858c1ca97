//! HTTP request handlers.

mod health;
mod links;
mod redirect;

pub use health::health_handler;
pub use links::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
};
pub use redirect::redirect_handler;
