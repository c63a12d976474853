//! Browser DOM binding and `wasm-bindgen` exports.
//!
//! Only compiled on `wasm32` targets. Hover handlers are kept in a registry
//! shared by every handle of one document, so rebinding an element removes the
//! previous listeners instead of stacking new ones.

use crate::applier::ThemeApplier;
use crate::color::HoverStyle;
use crate::config::ThemeConfig;
use crate::constants::style::BACKGROUND_PROPERTY;
use crate::error::{Result, ThemeError};
use crate::extraction::FetchExtractor;
use crate::target::{Document, NodeCollection, ThemeElement};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{HtmlCollection, HtmlElement};

const POINTER_ENTER: &str = "mouseenter";
const POINTER_LEAVE: &str = "mouseleave";

struct HoverListeners {
    element: HtmlElement,
    enter: Closure<dyn FnMut()>,
    leave: Closure<dyn FnMut()>,
}

impl HoverListeners {
    fn attach(element: &HtmlElement, hover: &HoverStyle) -> Result<Self> {
        let enter = background_setter(element, hover.enter.clone());
        let leave = background_setter(element, hover.leave.clone());

        element
            .add_event_listener_with_callback(POINTER_ENTER, enter.as_ref().unchecked_ref())
            .map_err(|e| js_style_error("add mouseenter listener", e))?;
        element
            .add_event_listener_with_callback(POINTER_LEAVE, leave.as_ref().unchecked_ref())
            .map_err(|e| js_style_error("add mouseleave listener", e))?;

        Ok(Self {
            element: element.clone(),
            enter,
            leave,
        })
    }

    fn detach(&self) -> Result<()> {
        self.element
            .remove_event_listener_with_callback(POINTER_ENTER, self.enter.as_ref().unchecked_ref())
            .map_err(|e| js_style_error("remove mouseenter listener", e))?;
        self.element
            .remove_event_listener_with_callback(POINTER_LEAVE, self.leave.as_ref().unchecked_ref())
            .map_err(|e| js_style_error("remove mouseleave listener", e))?;
        Ok(())
    }
}

fn background_setter(element: &HtmlElement, background: String) -> Closure<dyn FnMut()> {
    let element = element.clone();
    Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = element.style().set_property(BACKGROUND_PROPERTY, &background) {
            tracing::warn!(background = %background, error = ?err, "hover background update failed");
        }
    })
}

type HoverRegistry = Rc<RefCell<Vec<HoverListeners>>>;

/// The page document
#[derive(Clone)]
pub struct DomDocument {
    document: web_sys::Document,
    registry: HoverRegistry,
}

impl DomDocument {
    /// Bind to the document of the current window
    pub fn current() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ThemeError::ProcessingError("No document available".into()))?;
        Ok(Self {
            document,
            registry: Rc::default(),
        })
    }

    /// Number of elements currently holding a hover pair
    pub fn hover_bindings(&self) -> usize {
        self.registry.borrow().len()
    }
}

impl Document for DomDocument {
    type Collection = DomCollection;

    fn elements_by_class(&self, class_names: &str) -> Result<DomCollection> {
        Ok(DomCollection {
            collection: self.document.get_elements_by_class_name(class_names),
            registry: Rc::clone(&self.registry),
        })
    }
}

/// Live `HTMLCollection` of matching elements
#[derive(Clone)]
pub struct DomCollection {
    collection: HtmlCollection,
    registry: HoverRegistry,
}

impl NodeCollection for DomCollection {
    type Element = DomElement;

    fn elements(&self) -> Vec<DomElement> {
        (0..self.collection.length())
            .filter_map(|index| self.collection.item(index))
            .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
            .map(|element| DomElement {
                element,
                registry: Rc::clone(&self.registry),
            })
            .collect()
    }

    fn node_count(&self) -> usize {
        self.collection.length() as usize
    }
}

/// Handle to an `HTMLElement`
pub struct DomElement {
    element: HtmlElement,
    registry: HoverRegistry,
}

impl DomElement {
    fn binding_index(&self) -> Option<usize> {
        self.registry
            .borrow()
            .iter()
            .position(|listeners| listeners.element == self.element)
    }

    /// Detach and drop this element's pair; it stays registered if detaching fails
    fn release_binding(&self) -> Result<bool> {
        let Some(index) = self.binding_index() else {
            return Ok(false);
        };
        self.registry.borrow()[index].detach()?;
        self.registry.borrow_mut().swap_remove(index);
        Ok(true)
    }

    /// Drop pairs of elements that left the document
    fn prune_disconnected(&self) {
        self.registry.borrow_mut().retain(|listeners| {
            if listeners.element.is_connected() {
                return true;
            }
            match listeners.detach() {
                Ok(()) => false,
                Err(err) => {
                    tracing::warn!(error = %err, "keeping hover pair of a detached element");
                    true
                }
            }
        });
    }
}

impl ThemeElement for DomElement {
    fn set_style(&self, property: &str, value: &str) -> Result<()> {
        self.element
            .style()
            .set_property(property, value)
            .map_err(|e| js_style_error(property, e))
    }

    fn bind_hover(&self, hover: &HoverStyle) -> Result<()> {
        self.prune_disconnected();
        self.release_binding()?;
        let listeners = HoverListeners::attach(&self.element, hover)?;
        self.registry.borrow_mut().push(listeners);
        Ok(())
    }

    fn unbind_hover(&self) -> Result<bool> {
        self.release_binding()
    }
}

fn js_style_error(what: &str, err: JsValue) -> ThemeError {
    ThemeError::style(format!("{}: {:?}", what, err))
}

fn js_error(err: ThemeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JavaScript entry point theming page elements from an image URL
#[wasm_bindgen]
pub struct WebTheme {
    inner: ThemeApplier<DomDocument, FetchExtractor>,
}

#[wasm_bindgen]
impl WebTheme {
    /// Create a theme bound to the current document, with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> std::result::Result<WebTheme, JsValue> {
        let document = DomDocument::current().map_err(js_error)?;
        Ok(Self {
            inner: ThemeApplier::new(document, FetchExtractor::default()),
        })
    }

    /// Create a theme from a JSON configuration string
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> std::result::Result<WebTheme, JsValue> {
        let config: ThemeConfig = serde_json::from_str(json)
            .map_err(|e| js_error(ThemeError::config("Failed to parse configuration", e)))?;
        let document = DomDocument::current().map_err(js_error)?;
        let extractor = FetchExtractor::new(config.sampling.clone());
        let inner = ThemeApplier::with_config(document, extractor, config).map_err(js_error)?;
        Ok(Self { inner })
    }

    /// Store the image URL
    #[wasm_bindgen(js_name = setImage)]
    pub fn set_image(&mut self, src: &str) {
        self.inner.set_image(src);
    }

    /// Resolve the elements carrying the given class names
    #[wasm_bindgen(js_name = setElements)]
    pub fn set_elements(&mut self, class_names: &str) -> std::result::Result<(), JsValue> {
        self.inner.set_targets(class_names).map_err(js_error)
    }

    /// Apply the most colorful prominent color; resolves to the applied style
    #[wasm_bindgen(js_name = getMainColor)]
    pub fn get_main_color(&self) -> js_sys::Promise {
        let applier = self.inner.clone();
        future_to_promise(async move {
            let style = applier.select_dominant_color().await.map_err(js_error)?;
            style_to_js(&style)
        })
    }

    /// Apply the average color; resolves to the applied style
    #[wasm_bindgen(js_name = getAverageColor)]
    pub fn get_average_color(&self) -> js_sys::Promise {
        let applier = self.inner.clone();
        future_to_promise(async move {
            let style = applier.select_average_color().await.map_err(js_error)?;
            style_to_js(&style)
        })
    }

    /// Remove hover handlers from the current elements
    pub fn detach(&self) -> std::result::Result<u32, JsValue> {
        self.inner
            .detach()
            .map(|count| count as u32)
            .map_err(js_error)
    }
}

fn style_to_js(style: &crate::color::ThemeStyle) -> std::result::Result<JsValue, JsValue> {
    let json = serde_json::to_string(style)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize style: {}", e)))?;
    js_sys::JSON::parse(&json)
}
