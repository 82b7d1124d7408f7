use super::Node;

/// Compound selector: optional tag, any number of `.class` and `[attr]` /
/// `[attr="value"]` parts. Combinators are not supported.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Selector {
    tag: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, Option<String>)>,
}

impl Selector {
    pub(crate) fn parse(input: &str) -> Option<Selector> {
        let input = input.trim();
        if input.is_empty() || (input.contains(char::is_whitespace) && !input.contains('[')) {
            return None;
        }

        let mut selector = Selector::default();
        let tag_end = input.find(['.', '[']).unwrap_or(input.len());
        if tag_end > 0 {
            let tag = &input[..tag_end];
            if tag.contains(char::is_whitespace) {
                return None;
            }
            selector.tag = Some(tag.to_ascii_lowercase());
        }

        let mut rest = &input[tag_end..];
        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix('.') {
                let end = after.find(['.', '[']).unwrap_or(after.len());
                let class = &after[..end];
                if class.is_empty() || class.contains(char::is_whitespace) {
                    return None;
                }
                selector.classes.push(class.to_owned());
                rest = &after[end..];
            } else if let Some(after) = rest.strip_prefix('[') {
                let end = after.find(']')?;
                let attr = match after[..end].split_once('=') {
                    Some((name, value)) => (
                        name.trim().to_owned(),
                        Some(unquote(value.trim()).to_owned()),
                    ),
                    None => (after[..end].trim().to_owned(), None),
                };
                if attr.0.is_empty() {
                    return None;
                }
                selector.attrs.push(attr);
                rest = &after[end + 1..];
            } else {
                return None;
            }
        }

        Some(selector)
    }

    pub(crate) fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag {
            if *tag != node.tag {
                return false;
            }
        }
        if !self
            .classes
            .iter()
            .all(|class| node.classes.iter().any(|own| own == class))
        {
            return false;
        }
        self.attrs.iter().all(|(name, expected)| {
            match (node.attribute(name), expected) {
                (Some(actual), Some(expected)) => actual == *expected,
                (Some(_), None) => true,
                (None, _) => false,
            }
        })
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value)
}
