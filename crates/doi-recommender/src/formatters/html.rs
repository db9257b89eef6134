//! HTML output formatting.
//!
//! Values go through minijinja's HTML auto-escaping, which gives identifiers
//! the same treatment a DOM text assignment would.

use minijinja::{Environment, context};
use serde::Serialize;

use crate::config::page;
use crate::page::{Document, ListItem};

const PAGE_TEMPLATE: &str = r#"<form class="author-name">
  <input id="{{ name_id }}" type="text" value="{{ name }}">
  <p class="{{ error_classes }}">Author not found.</p>
  <button id="{{ submit_id }}" type="submit">Submit</button>
</form>
<ul id="{{ list_id }}">
{%- for item in items %}
  <li class="{{ item.class }}"><a class="{{ item.link_class }}" href="{{ item.href }}" target="{{ item.target }}">{{ item.text }}</a></li>
{%- endfor %}
</ul>
"#;

const LIST_TEMPLATE: &str = r#"<ul id="{{ list_id }}">
{%- for item in items %}
  <li class="{{ item.class }}"><a class="{{ item.link_class }}" href="{{ item.href }}" target="{{ item.target }}">{{ item.text }}</a></li>
{%- endfor %}
</ul>
"#;

#[derive(Serialize)]
struct ItemView<'a> {
    class: &'a str,
    link_class: &'a str,
    href: &'a str,
    target: &'a str,
    text: &'a str,
}

impl<'a> From<&'a ListItem> for ItemView<'a> {
    fn from(item: &'a ListItem) -> Self {
        Self {
            class: item.class,
            link_class: item.link.class,
            href: &item.link.href,
            target: item.link.target,
            text: &item.link.text,
        }
    }
}

fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("page.html", PAGE_TEMPLATE)?;
    env.add_template("list.html", LIST_TEMPLATE)?;
    Ok(env)
}

fn strip_selector(selector: &str) -> &str {
    selector.trim_start_matches(['#', '.'])
}

/// Render the whole page: form, error message, and list.
pub fn format_page_html(document: &Document) -> Result<String, minijinja::Error> {
    let env = environment()?;
    let items: Vec<ItemView<'_>> = document.recommendations.items().iter().map(ItemView::from).collect();

    env.get_template("page.html")?.render(context! {
        name_id => strip_selector(page::NAME_INPUT),
        name => document.name_input.value(),
        error_classes => document.name_error.classes().join(" "),
        submit_id => strip_selector(page::SUBMIT_BUTTON),
        list_id => strip_selector(page::RECOMMENDATIONS_LIST),
        items => items,
    })
}

/// Render only the recommendation list container.
pub fn format_list_html(document: &Document) -> Result<String, minijinja::Error> {
    let env = environment()?;
    let items: Vec<ItemView<'_>> = document.recommendations.items().iter().map(ItemView::from).collect();

    env.get_template("list.html")?.render(context! {
        list_id => strip_selector(page::RECOMMENDATIONS_LIST),
        items => items,
    })
}
