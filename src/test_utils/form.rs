use scraper::{ElementRef, Selector};

#[track_caller]
pub(crate) fn assert_attribute(element: &ElementRef<'_>, attribute: &str, want: &str) {
    let got = element
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        got, want,
        "want element with attribute {attribute}=\"{want}\", got {got:?}"
    );
}

/// Find the input called `name` in `form` and check that it is a required
/// input of type `type_`.
#[track_caller]
pub(crate) fn must_get_required_input<'a>(
    form: &ElementRef<'a>,
    name: &str,
    type_: &str,
) -> ElementRef<'a> {
    let selector = Selector::parse(&format!("input[name=\"{name}\"]")).expect("Invalid selector");
    let input = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""));

    assert_attribute(&input, "type", type_);
    assert!(
        input.value().attr("required").is_some(),
        "want input with name {name} to have the required attribute but got none"
    );

    input
}

#[track_caller]
pub(crate) fn assert_submit_button(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button[type=submit]").expect("Invalid selector"))
        .next()
        .expect("No submit button found");

    let got_text = submit_button.text().collect::<String>();
    assert_eq!(got_text.trim(), text);
}
