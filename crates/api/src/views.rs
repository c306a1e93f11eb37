//! Server-rendered pages.

use maud::{html, Markup, DOCTYPE};
use mudae_core::profile::Item;

/// Page shown after scanning a box's QR code.
pub fn box_page(room: &str, index: usize, items: &[Item]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Mudae - " (room) " #" (index) }
                link rel="stylesheet" href="/static/box.css";
            }
            body {
                div id="toolbar" {
                    h1 { "Mudae" }
                }
                h3 { "Itens da caixa" }
                ul {
                    @for item in items {
                        li { (item.kind) " " (item.quantity) "x" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_each_item_with_quantity() {
        let items = vec![
            Item {
                quantity: 2,
                kind: "moveis".into(),
            },
            Item {
                quantity: 1,
                kind: "tv".into(),
            },
        ];
        let page = box_page("Sala", 0, &items).into_string();

        assert!(page.contains("<h1>Mudae</h1>"));
        assert!(page.contains("<h3>Itens da caixa</h3>"));
        assert!(page.contains("<li>moveis 2x</li>"));
        assert!(page.contains("<li>tv 1x</li>"));
    }

    #[test]
    fn escapes_item_labels() {
        let items = vec![Item {
            quantity: 1,
            kind: "<script>".into(),
        }];
        let page = box_page("Sala", 0, &items).into_string();
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
