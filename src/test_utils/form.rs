use scraper::{ElementRef, Html, Selector};

#[track_caller]
fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|error| panic!("bad selector {css:?}: {error:?}"))
}

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&selector("form"))
        .next()
        .expect("No form found")
}

/// Assert that `form` has `attribute` set to `value`, e.g. `hx-post`.
#[track_caller]
pub(crate) fn assert_form_attribute(form: &ElementRef<'_>, attribute: &str, value: &str) {
    let got = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        got, value,
        "want form with attribute {attribute}=\"{value}\", got {got:?}"
    );
}

/// Assert that `form` has a required input named `name` with the given type
/// and prefilled value.
#[track_caller]
pub(crate) fn assert_required_input(form: &ElementRef<'_>, name: &str, type_: &str, value: &str) {
    let input = form
        .select(&selector(&format!("input[name=\"{name}\"]")))
        .next()
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""));

    let got_type = input.value().attr("type").unwrap_or_default();
    let got_value = input.value().attr("value").unwrap_or_default();

    assert_eq!(got_type, type_, "want input {name} with type \"{type_}\"");
    assert_eq!(got_value, value, "want input {name} with value \"{value}\"");
    assert!(
        input.value().attr("required").is_some(),
        "want input {name} to have the required attribute"
    );
}

/// Assert the option values of the select named `name`, and which option is
/// selected. `None` means no option carries the `selected` attribute.
#[track_caller]
pub(crate) fn assert_select_options(
    form: &ElementRef<'_>,
    name: &str,
    options: &[&str],
    selected: Option<&str>,
) {
    let select = form
        .select(&selector(&format!("select[name=\"{name}\"]")))
        .next()
        .unwrap_or_else(|| panic!("No select found with name \"{name}\""));
    let option_selector = selector("option");

    let got_options: Vec<&str> = select
        .select(&option_selector)
        .filter_map(|option| option.value().attr("value"))
        .collect();
    let got_selected: Vec<&str> = select
        .select(&option_selector)
        .filter(|option| option.value().attr("selected").is_some())
        .filter_map(|option| option.value().attr("value"))
        .collect();

    assert_eq!(got_options, options, "options of select {name}");
    assert_eq!(
        got_selected,
        selected.into_iter().collect::<Vec<_>>(),
        "selected option of select {name}"
    );
}

#[track_caller]
pub(crate) fn assert_submit_button(form: &ElementRef<'_>, text: &str) {
    let button = form
        .select(&selector("button[type=submit]"))
        .next()
        .expect("No submit button found");

    let got_text = button.text().collect::<String>();
    assert_eq!(got_text.trim(), text);
}
