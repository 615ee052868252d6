use axum::response::Html;

use crate::query::Direction;

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
ul.integers{columns:5;list-style:none;padding:0}\
form{margin:1em 0}";

const ACTIONS: &[(&str, &str)] = &[
    ("/add_sorted_set", "Add integers to the sorted set"),
    ("/delete_sorted_set", "Delete the sorted set"),
    ("/view_asc_sorted_set", "View the sorted set (ascending)"),
    ("/view_desc_sorted_set", "View the sorted set (descending)"),
    ("/add_list", "Add integers to the list"),
    ("/delete_list", "Delete the list"),
    ("/view_asc_list", "View the list (ascending)"),
    ("/view_desc_list", "View the list (descending)"),
];

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{title}</title>\
<style>{STYLE}</style></head>\n<body>\n<h1>{title}</h1>\n{body}\n\
<p><a href=\"/\">Home</a></p>\n</body></html>"
    ))
}

pub fn index() -> Html<String> {
    let links: String = ACTIONS
        .iter()
        .map(|(path, label)| format!("<li><a href=\"{path}\">{label}</a></li>\n"))
        .collect();
    let body = format!("<ul>\n{links}</ul>");

    page("Integer Collections", &body)
}

/// Form posting `starting_pos` back to `action`.
pub fn seed_form(action: &str, collection: &str) -> Html<String> {
    let body = format!(
        "<form method=\"post\" action=\"{action}\">\n\
<label for=\"starting_pos\">Starting integer</label>\n\
<input type=\"number\" id=\"starting_pos\" name=\"starting_pos\" value=\"1\">\n\
<button type=\"submit\">Add 100 integers</button>\n</form>"
    );

    page(&format!("Add integers to the {collection}"), &body)
}

pub fn delete_form(action: &str, collection: &str) -> Html<String> {
    let body = format!(
        "<form method=\"post\" action=\"{action}\">\n\
<p>This removes every integer in the {collection}.</p>\n\
<button type=\"submit\">Delete</button>\n</form>"
    );

    page(&format!("Delete the {collection}"), &body)
}

pub fn integers(collection: &str, integers: &[i64], direction: Direction) -> Html<String> {
    let items: String = integers
        .iter()
        .map(|integer| format!("<li>{integer}</li>\n"))
        .collect();
    let body = format!(
        "<p>Order: <strong>{direction}</strong>, {} integers</p>\n<ul class=\"integers\">\n{items}</ul>",
        integers.len()
    );

    page(&format!("The {collection}"), &body)
}
