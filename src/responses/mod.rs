pub mod errors;
pub mod html;

pub use errors::{html_error_response, ResultResp};

pub use html::{html_response, redirect_response, text_response};
