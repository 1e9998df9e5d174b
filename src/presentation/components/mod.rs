mod footer;
mod form;
mod header;
mod layout;
mod popup;
mod table;

pub use footer::render_footer;
pub use form::{FORM_HEIGHT, render_form};
pub use header::render_header;
pub use popup::render_confirm;
pub use table::render_table;
