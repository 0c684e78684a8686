#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use form::{assert_attribute, assert_submit_button, must_get_required_input};
pub(crate) use html::{
    assert_valid_html, must_select, page_text, parse_html_document, parse_html_fragment,
    select_texts,
};
pub(crate) use http::get_header;
