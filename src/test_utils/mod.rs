#![allow(missing_docs)]

pub(crate) mod backend;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use backend::{MockBackend, serve};
pub(crate) use form::{assert_hx_endpoint, must_get_form};
pub(crate) use html::{
    assert_valid_html, must_select, parse_html_document, parse_html_fragment, select_text,
};
pub(crate) use http::{assert_status_ok, get_header};
