mod http_form;

pub use http_form::{HttpFormSubmitter, DEFAULT_FORM_ENDPOINT};
