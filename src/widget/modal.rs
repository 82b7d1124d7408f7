use crate::dom::Element;

pub const PAGE_OPEN_CLASS: &str = "is-modal-open";

/// Dialog the cart renders its detail view into. The dialog owns its chrome;
/// the cart only supplies title and body.
pub trait Modal {
    fn set_title(&mut self, title: &str);
    fn set_body(&mut self, body: Element);
    fn open(&mut self);
    fn close(&mut self);

    /// Whether a click on `target` is the dialog's own close control.
    fn is_close_target(&self, _target: &Element) -> bool {
        false
    }
}

/// Overlay dialog mounted into a page element while open.
#[derive(Debug)]
pub struct ModalWindow {
    page: Element,
    elem: Element,
    title: Element,
    body: Element,
    is_open: bool,
}

impl ModalWindow {
    pub fn new(page: &Element, assets_base: &str) -> Self {
        let title = Element::new("h3").class("modal__title");
        let body = Element::new("div").class("modal__body");
        let elem = Element::new("div")
            .class("modal")
            .child(Element::new("div").class("modal__overlay"))
            .child(
                Element::new("div")
                    .class("modal__inner")
                    .child(
                        Element::new("div")
                            .class("modal__header")
                            .child(
                                Element::new("button")
                                    .attr("type", "button")
                                    .class("modal__close")
                                    .child(
                                        Element::new("img")
                                            .attr(
                                                "src",
                                                format!("{assets_base}/icons/cross-icon.svg"),
                                            )
                                            .attr("alt", "close-icon"),
                                    ),
                            )
                            .child(title.clone()),
                    )
                    .child(body.clone()),
            );

        ModalWindow {
            page: page.clone(),
            elem,
            title,
            body,
            is_open: false,
        }
    }

    pub fn elem(&self) -> &Element {
        &self.elem
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn title(&self) -> String {
        self.title.text_content()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

impl Modal for ModalWindow {
    fn set_title(&mut self, title: &str) {
        self.title.set_text(title);
    }

    fn set_body(&mut self, body: Element) {
        self.body.clear();
        self.body.append(&body);
    }

    fn open(&mut self) {
        self.page.append(&self.elem);
        self.page.add_class(PAGE_OPEN_CLASS);
        self.is_open = true;
    }

    fn close(&mut self) {
        self.elem.remove();
        self.page.remove_class(PAGE_OPEN_CLASS);
        self.is_open = false;
    }

    fn is_close_target(&self, target: &Element) -> bool {
        target
            .closest(".modal__close")
            .is_some_and(|button| self.elem.contains(&button))
    }
}
