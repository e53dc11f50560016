#![allow(missing_docs)]

pub(crate) mod files;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use files::TempCsvPath;
pub(crate) use form::{
    assert_form_attribute, assert_required_input, assert_select_options, assert_submit_button,
    must_get_form,
};
pub(crate) use html::{
    assert_alert_message, assert_valid_html, parse_html_document, parse_html_fragment,
};
pub(crate) use http::{assert_html_page, assert_hx_redirect};
