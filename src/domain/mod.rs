//! Domain types shared by the grid, transfer, preview and voice layers

mod color;
mod icon;
mod query;

pub use color::{ColorSelection, DEFAULT_GRID_COLOR, PRESET_COLORS};
pub use icon::{
    IconDescriptor, IconStyle, STYLE_PLACEHOLDER, StyleFilter, UnknownStyle, download_file_name,
    with_color_param,
};
pub use query::{DEFAULT_PAGE_SIZE, QueryState, ResultPage};
