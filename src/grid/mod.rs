//! Icon grid: query state, pagination and last-request-wins fetching

mod controller;
mod window;


pub use controller::{FetchTicket, GridEvent, QueryPaginationController};
pub use window::{WINDOW_SIZE, page_window};
