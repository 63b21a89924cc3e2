use maud::{Markup, Render, html};

const INPUT_CLASSES: &str = "shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn form_element(id: &'static str, label: &'static str, element: Markup) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-bold mb-2" {(label)}
            (element)
        }
    }
}

pub fn simple_form_element(
    id: &'static str,
    label: &'static str,
    required: bool,
    input_type: Option<&'static str>,
    value: &str,
) -> Markup {
    form_element(
        id,
        label,
        html! {
            input type=(input_type.unwrap_or("text")) id=(id) name=(id) value=(value) required[required] class=(INPUT_CLASSES);
        },
    )
}

/// A `<select>` whose options are `(value, label)` pairs, with `selected` pre-chosen if present.
pub fn select_form_element(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: impl IntoIterator<Item = (String, String)>,
    selected: &str,
) -> Markup {
    form_element(
        id,
        label,
        html! {
            select id=(id) name=(id) required class=(INPUT_CLASSES) {
                option value="" selected[selected.is_empty()] {(placeholder)}
                @for (value, label) in options {
                    option value=(value) selected[value == selected] {(label)}
                }
            }
        },
    )
}

pub fn form_submit_button(text: &str) -> Markup {
    html! {
        button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
            (text)
        }
    }
}
