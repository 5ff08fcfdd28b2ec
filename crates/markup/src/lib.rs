mod escape;
mod template;
mod view;

pub use escape::escape;
pub use template::{render_fragment, Fragment, RenderedHtml, TemplateError, Value};
pub use view::render_user_view;
