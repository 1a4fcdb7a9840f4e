//! HTML rendering of the shelf and the cart

use std::fmt::Write;

use crate::state::{CartState, Item};

/// Render the whole page: one add button per shelf item, then the cart as
/// an ordered list with a remove button per entry.
pub fn render_page(shelf: &[Item], cart: &CartState) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Shopping Cart</title>\n</head>\n<body>\n",
    );

    html.push_str("<h2>Shelf</h2>\n<ul class=\"shelf\">\n");
    for item in shelf {
        let _ = writeln!(
            html,
            "<li>{name}{button}</li>",
            name = escape(item.name()),
            button = item_form("/ui/add", "+", item),
        );
    }
    html.push_str("</ul>\n");

    html.push_str("<h2>Cart</h2>\n<ol class=\"cart\">\n");
    for item in cart.items() {
        let _ = writeln!(
            html,
            "<li>{name}{button}</li>",
            name = escape(item.name()),
            button = item_form("/ui/remove", "-", item),
        );
    }
    html.push_str("</ol>\n</body>\n</html>\n");

    html
}

fn item_form(action: &str, label: &str, item: &Item) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\" style=\"display:inline\">\
         <input type=\"hidden\" name=\"item\" value=\"{value}\">\
         <button type=\"submit\">{label}</button></form>",
        value = escape(item.name()),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
