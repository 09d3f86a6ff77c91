use colored::Colorize;
use ego_tree::NodeId;
use html5ever::tendril::StrTendril;
use html5ever::{namespace_url, ns, LocalName, QualName};
use scraper::{ElementRef, Html, Node, Selector};

use crate::document::adapter::DocumentAdapter;

/// Scraper-backed document the page updater works on. Parsed once from
/// the host page, mutated in place, serialized once at the end.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(html_content: &str) -> Self {
        Self {
            html: Html::parse_document(html_content),
        }
    }

    pub fn html(&self) -> String {
        self.html.html()
    }

    fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(id).and_then(ElementRef::wrap)
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            eprintln!("{}", format!("Invalid selector {:?}: {}", selector, e).red());
            None
        }
    }
}

impl DocumentAdapter for HtmlDocument {
    type Handle = NodeId;

    fn find_all(&self, selector: &str) -> Vec<NodeId> {
        let parsed = match parse_selector(selector) {
            Some(parsed) => parsed,
            None => return Vec::new(),
        };

        self.html
            .select(&parsed)
            .map(|element| element.id())
            .collect()
    }

    fn find_first(&self, element: NodeId, selector: &str) -> Option<NodeId> {
        let parsed = parse_selector(selector)?;
        let scope = self.element(element)?;
        scope.select(&parsed).next().map(|element| element.id())
    }

    fn get_attribute(&self, element: NodeId, name: &str) -> Option<String> {
        self.element(element)
            .and_then(|element| element.value().attr(name))
            .map(|value| value.to_string())
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) {
        if let Some(mut node) = self.html.tree.get_mut(element) {
            if let Node::Element(el) = node.value() {
                let attr = QualName::new(None, ns!(), LocalName::from(name));
                el.attrs.insert(attr, StrTendril::from(value));
            }
        }
    }
}
