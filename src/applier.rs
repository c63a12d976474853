//! Theme applier
//!
//! Holds an image reference and a target collection, asks the extractor for
//! colors, picks one and styles every stylable target with it:
//! - `background-color` set to the chosen color
//! - `color` set to black or white depending on YIQ luminance
//! - `transition` animating background changes
//! - one pointer enter/leave pair toggling a translucent background
//!
//! Selection methods borrow the applier immutably, so several may be in
//! flight at once. Each one snapshots the image reference before awaiting
//! the extractor; whichever resolves last leaves its colors on the elements.

use crate::color::{select_most_colorful, Rgb, ThemeStyle};
use crate::config::{StyleConfig, ThemeConfig};
use crate::constants::style::{BACKGROUND_PROPERTY, TEXT_PROPERTY, TRANSITION_PROPERTY};
use crate::error::{Result, ThemeError};
use crate::extraction::ColorExtractor;
use crate::target::{Document, NodeCollection, ThemeElement};

/// Applies image-derived themes to a set of elements
pub struct ThemeApplier<D: Document, X: ColorExtractor> {
    document: D,
    extractor: X,
    style: StyleConfig,
    image: String,
    targets: Option<D::Collection>,
}

impl<D, X> Clone for ThemeApplier<D, X>
where
    D: Document + Clone,
    D::Collection: Clone,
    X: ColorExtractor + Clone,
{
    fn clone(&self) -> Self {
        Self {
            document: self.document.clone(),
            extractor: self.extractor.clone(),
            style: self.style.clone(),
            image: self.image.clone(),
            targets: self.targets.clone(),
        }
    }
}

impl<D: Document, X: ColorExtractor> ThemeApplier<D, X> {
    /// Create an applier with the default style configuration
    pub fn new(document: D, extractor: X) -> Self {
        Self::with_style(document, extractor, StyleConfig::default())
    }

    /// Create an applier with a custom style configuration
    pub fn with_style(document: D, extractor: X, style: StyleConfig) -> Self {
        Self {
            document,
            extractor,
            style,
            image: String::new(),
            targets: None,
        }
    }

    /// Create an applier from a complete theme configuration
    ///
    /// Only the style half is kept here; the sampling half belongs to the
    /// extractor, which the caller builds from `config.sampling`.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError::InvalidParameter` if `config` fails validation.
    pub fn with_config(document: D, extractor: X, config: ThemeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_style(document, extractor, config.style))
    }

    /// Store the image reference used by the next selection
    pub fn set_image(&mut self, src: impl Into<String>) {
        self.image = src.into();
    }

    /// Resolve and store the elements carrying `class_names`
    ///
    /// The collection is resolved once here; call again to pick a different
    /// selector. Resolution errors from the document are returned as-is.
    pub fn set_targets(&mut self, class_names: &str) -> Result<()> {
        let collection = self.document.elements_by_class(class_names)?;
        tracing::debug!(
            selector = class_names,
            nodes = collection.node_count(),
            "resolved theme targets"
        );
        self.targets = Some(collection);
        Ok(())
    }

    /// Current image reference
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Current target collection, if one was resolved
    pub fn targets(&self) -> Option<&D::Collection> {
        self.targets.as_ref()
    }

    /// Style configuration
    pub fn style_config(&self) -> &StyleConfig {
        &self.style
    }

    /// Color extractor
    pub fn extractor(&self) -> &X {
        &self.extractor
    }

    /// Theme the targets with the most colorful prominent color of the image
    ///
    /// Pure white is never chosen. Among equally colorful entries the one
    /// ranked first wins.
    ///
    /// # Errors
    ///
    /// - Extractor errors, unchanged
    /// - `ThemeError::EmptyPalette` when no candidate is left after dropping white
    /// - Binding errors raised while styling. Styling stops at the failing
    ///   element: earlier targets keep the new theme, later ones are untouched.
    pub async fn select_dominant_color(&self) -> Result<ThemeStyle> {
        let image = self.image.clone();
        let palette = self.extractor.dominant_colors(&image).await?;

        let color = select_most_colorful(palette).ok_or_else(|| ThemeError::EmptyPalette {
            image: image.clone(),
        })?;
        self.apply(&image, color)
    }

    /// Theme the targets with the average color of the image
    ///
    /// # Errors
    ///
    /// - Extractor errors, unchanged
    /// - Binding errors raised while styling, with the same partial
    ///   application as [`Self::select_dominant_color`]
    pub async fn select_average_color(&self) -> Result<ThemeStyle> {
        let image = self.image.clone();
        let color = self.extractor.average_color(&image).await?;
        self.apply(&image, color)
    }

    /// Remove the hover handlers bound to the current targets
    ///
    /// Returns the number of elements that had a pair installed. Colors are
    /// left in place.
    pub fn detach(&self) -> Result<usize> {
        let mut detached = 0;
        for element in self.current_elements() {
            if element.unbind_hover()? {
                detached += 1;
            }
        }
        tracing::debug!(detached, "detached hover handlers");
        Ok(detached)
    }

    fn apply(&self, image: &str, color: Rgb) -> Result<ThemeStyle> {
        let style = ThemeStyle::derive(color, &self.style);
        let elements = self.current_elements();

        for element in &elements {
            element.set_style(BACKGROUND_PROPERTY, &style.background)?;
            element.set_style(TEXT_PROPERTY, style.text.as_css())?;
            element.set_style(TRANSITION_PROPERTY, &style.transition)?;
            element.bind_hover(&style.hover)?;
        }

        tracing::debug!(
            image,
            color = %color,
            text = %style.text,
            elements = elements.len(),
            "applied theme"
        );
        Ok(style)
    }

    fn current_elements(&self) -> Vec<<D::Collection as NodeCollection>::Element> {
        self.targets
            .as_ref()
            .map(NodeCollection::elements)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{HoverStyle, TextColor};
    use crate::config::HoverNotation;
    use crate::extraction::StaticExtractor;
    use crate::target::{MemoryDocument, MemoryElement, MemoryNode};
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    fn palette(colors: &[[u8; 3]]) -> Vec<Rgb> {
        colors.iter().copied().map(Rgb::from).collect()
    }

    fn applier_with(
        doc: &MemoryDocument,
        colors: &[[u8; 3]],
        average: [u8; 3],
    ) -> ThemeApplier<MemoryDocument, StaticExtractor> {
        let mut applier = ThemeApplier::new(
            doc.clone(),
            StaticExtractor::new(palette(colors), Rgb::from(average)),
        );
        applier.set_image("cover.png");
        applier.set_targets("themed").unwrap();
        applier
    }

    /// Extractor whose answers are released by the test, one per call
    struct GatedExtractor {
        gates: RefCell<VecDeque<oneshot::Receiver<Vec<Rgb>>>>,
    }

    impl ColorExtractor for GatedExtractor {
        async fn dominant_colors(&self, image: &str) -> Result<Vec<Rgb>> {
            let gate = self.gates.borrow_mut().pop_front();
            let gate = gate.ok_or_else(|| ThemeError::ProcessingError("no gate".into()))?;
            gate.await
                .map_err(|_| ThemeError::EmptyPalette { image: image.to_string() })
        }

        async fn average_color(&self, _image: &str) -> Result<Rgb> {
            Err(ThemeError::ProcessingError("unused".into()))
        }
    }

    /// Binding rejecting dotted selectors and style writes on read-only elements
    #[derive(Clone, Default)]
    struct ScriptedDocument {
        elements: Vec<ScriptedElement>,
    }

    #[derive(Clone)]
    struct ScriptedElement {
        inner: MemoryElement,
        read_only: bool,
    }

    struct ScriptedCollection(Vec<ScriptedElement>);

    impl Document for ScriptedDocument {
        type Collection = ScriptedCollection;

        fn elements_by_class(&self, class_names: &str) -> Result<ScriptedCollection> {
            if class_names.starts_with('.') {
                return Err(ThemeError::target(class_names, "class names take no leading dot"));
            }
            Ok(ScriptedCollection(self.elements.clone()))
        }
    }

    impl NodeCollection for ScriptedCollection {
        type Element = ScriptedElement;

        fn elements(&self) -> Vec<ScriptedElement> {
            self.0.clone()
        }

        fn node_count(&self) -> usize {
            self.0.len()
        }
    }

    impl ThemeElement for ScriptedElement {
        fn set_style(&self, property: &str, value: &str) -> Result<()> {
            if self.read_only {
                return Err(ThemeError::style(format!("{} is read-only", property)));
            }
            self.inner.set_style(property, value)
        }

        fn bind_hover(&self, hover: &HoverStyle) -> Result<()> {
            self.inner.bind_hover(hover)
        }

        fn unbind_hover(&self) -> Result<bool> {
            self.inner.unbind_hover()
        }
    }

    fn scripted(read_only: &[bool]) -> ScriptedDocument {
        ScriptedDocument {
            elements: read_only
                .iter()
                .map(|&read_only| ScriptedElement {
                    inner: MemoryElement::new("div", "themed"),
                    read_only,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_dominant_color_skips_white() {
        let doc = MemoryDocument::new();
        let card = doc.add_element("div", "themed");
        let applier = applier_with(&doc, &[[255, 255, 255], [10, 200, 10], [250, 0, 0]], [0, 0, 0]);

        let style = applier.select_dominant_color().await.unwrap();

        assert_eq!(style.color, Rgb::new(250, 0, 0));
        assert_eq!(style.text, TextColor::White);
        assert_eq!(card.style("background-color").as_deref(), Some("rgb(250, 0, 0)"));
        assert_eq!(card.style("color").as_deref(), Some("white"));
        assert_eq!(
            card.style("transition").as_deref(),
            Some("background-color 0.3s ease")
        );
    }

    #[tokio::test]
    async fn test_average_color() {
        let doc = MemoryDocument::new();
        let card = doc.add_element("div", "themed");
        let applier = applier_with(&doc, &[], [200, 200, 200]);

        let style = applier.select_average_color().await.unwrap();

        assert_eq!(style.text, TextColor::Black);
        assert_eq!(card.style("background-color").as_deref(), Some("rgb(200, 200, 200)"));
        assert_eq!(card.style("color").as_deref(), Some("black"));
    }

    #[tokio::test]
    async fn test_hover_toggles_translucent_background() {
        let doc = MemoryDocument::new();
        let card = doc.add_element("div", "themed");
        let applier = applier_with(&doc, &[[0, 0, 120]], [0, 0, 0]);
        applier.select_dominant_color().await.unwrap();

        card.pointer_enter();
        assert_eq!(card.style("background-color").as_deref(), Some("rgba(0, 0, 120, 0.7)"));
        card.pointer_leave();
        assert_eq!(card.style("background-color").as_deref(), Some("rgb(0, 0, 120)"));
    }

    #[tokio::test]
    async fn test_legacy_hover_notation() {
        let doc = MemoryDocument::new();
        let card = doc.add_element("div", "themed");
        let style = StyleConfig {
            hover_notation: HoverNotation::Legacy,
            ..StyleConfig::default()
        };
        let mut applier = ThemeApplier::with_style(
            doc.clone(),
            StaticExtractor::new(palette(&[[9, 8, 7]]), Rgb::BLACK),
            style,
        );
        applier.set_targets("themed").unwrap();
        applier.select_dominant_color().await.unwrap();

        card.pointer_enter();
        assert_eq!(card.style("background-color").as_deref(), Some("rgb(9, 8, 7, 0.7)"));
    }

    #[tokio::test]
    async fn test_only_matching_stylable_elements_touched() {
        let doc = MemoryDocument::new();
        let first = doc.add_element("div", "themed");
        let second = doc.add_element("span", "themed extra");
        let other = doc.add_element("div", "plain");
        doc.add_node(MemoryNode::unstyled("svg", "themed"));
        let applier = applier_with(&doc, &[[40, 50, 60]], [0, 0, 0]);

        applier.select_dominant_color().await.unwrap();

        for element in [&first, &second] {
            assert_eq!(element.style("background-color").as_deref(), Some("rgb(40, 50, 60)"));
            assert_eq!(element.style("color").as_deref(), Some("white"));
            assert_eq!(element.listener_count(), 2);
        }
        assert_eq!(other.style("background-color"), None);
        assert_eq!(other.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_repeated_calls_replace_handlers() {
        let doc = MemoryDocument::new();
        let card = doc.add_element("div", "themed");
        let mut applier = applier_with(&doc, &[[250, 0, 0]], [200, 200, 200]);

        applier.select_dominant_color().await.unwrap();
        applier.set_image("other.png");
        applier.select_average_color().await.unwrap();

        assert_eq!(card.style("background-color").as_deref(), Some("rgb(200, 200, 200)"));
        assert_eq!(card.style("color").as_deref(), Some("black"));
        assert_eq!(card.listener_count(), 2);

        card.pointer_enter();
        assert_eq!(
            card.style("background-color").as_deref(),
            Some("rgba(200, 200, 200, 0.7)")
        );
    }

    #[tokio::test]
    async fn test_empty_palette_leaves_elements_untouched() {
        let doc = MemoryDocument::new();
        let card = doc.add_element("div", "themed");
        let applier = applier_with(&doc, &[[255, 255, 255]], [0, 0, 0]);

        let err = applier.select_dominant_color().await.unwrap_err();

        assert!(matches!(err, ThemeError::EmptyPalette { ref image } if image == "cover.png"));
        assert_eq!(card.style("background-color"), None);
        assert_eq!(card.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_without_targets_is_noop() {
        let applier = ThemeApplier::new(
            MemoryDocument::new(),
            StaticExtractor::new(palette(&[[1, 1, 1]]), Rgb::BLACK),
        );
        let style = applier.select_dominant_color().await.unwrap();
        assert_eq!(style.color, Rgb::new(1, 1, 1));
        assert_eq!(applier.detach().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_detach_removes_handlers() {
        let doc = MemoryDocument::new();
        let card = doc.add_element("div", "themed");
        let applier = applier_with(&doc, &[[90, 0, 90]], [0, 0, 0]);
        applier.select_dominant_color().await.unwrap();

        assert_eq!(applier.detach().unwrap(), 1);
        assert_eq!(card.listener_count(), 0);
        assert_eq!(card.style("background-color").as_deref(), Some("rgb(90, 0, 90)"));
    }

    #[tokio::test]
    async fn test_last_resolved_call_wins() {
        let doc = MemoryDocument::new();
        let card = doc.add_element("div", "themed");

        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let mut applier = ThemeApplier::new(
            doc.clone(),
            GatedExtractor {
                gates: RefCell::new(VecDeque::from([first_rx, second_rx])),
            },
        );
        applier.set_targets("themed").unwrap();

        let release = async {
            second_tx.send(palette(&[[0, 0, 200]])).unwrap();
            tokio::task::yield_now().await;
            first_tx.send(palette(&[[200, 0, 0]])).unwrap();
        };
        let (first, second, ()) = futures::join!(
            applier.select_dominant_color(),
            applier.select_dominant_color(),
            release
        );

        assert_eq!(first.unwrap().color, Rgb::new(200, 0, 0));
        assert_eq!(second.unwrap().color, Rgb::new(0, 0, 200));
        assert_eq!(card.style("background-color").as_deref(), Some("rgb(200, 0, 0)"));
        assert_eq!(card.listener_count(), 2);
    }

    #[tokio::test]
    async fn test_with_config_uses_style_half() {
        let doc = MemoryDocument::new();
        let card = doc.add_element("div", "themed");
        let mut config = ThemeConfig::default();
        config.style.hover_alpha = 0.4;
        config.style.transition = "background-color 2s linear".to_string();

        let mut applier = ThemeApplier::with_config(
            doc.clone(),
            StaticExtractor::new(palette(&[[0, 80, 0]]), Rgb::BLACK),
            config,
        )
        .unwrap();
        applier.set_targets("themed").unwrap();
        applier.select_dominant_color().await.unwrap();

        assert_eq!(applier.style_config().hover_alpha, 0.4);
        assert_eq!(
            card.style("transition").as_deref(),
            Some("background-color 2s linear")
        );
        card.pointer_enter();
        assert_eq!(card.style("background-color").as_deref(), Some("rgba(0, 80, 0, 0.4)"));
    }

    #[test]
    fn test_with_config_rejects_invalid_config() {
        let mut config = ThemeConfig::default();
        config.sampling.sample = 0;

        let result = ThemeApplier::with_config(
            MemoryDocument::new(),
            StaticExtractor::new(Vec::new(), Rgb::BLACK),
            config,
        );
        assert!(matches!(result, Err(ThemeError::InvalidParameter { .. })));
    }

    #[test]
    fn test_resolution_error_returned_unchanged() {
        let mut applier = ThemeApplier::new(
            scripted(&[false]),
            StaticExtractor::new(palette(&[[1, 1, 1]]), Rgb::BLACK),
        );

        let err = applier.set_targets(".themed").unwrap_err();

        assert!(matches!(
            err,
            ThemeError::TargetResolution { ref selector, .. } if selector == ".themed"
        ));
        assert!(applier.targets().is_none());
    }

    #[tokio::test]
    async fn test_binding_failure_stops_at_failing_element() {
        let doc = scripted(&[false, true, false]);
        let [first, failing, last] = [0, 1, 2].map(|i| doc.elements[i].inner.clone());
        let mut applier = ThemeApplier::new(
            doc,
            StaticExtractor::new(palette(&[[60, 0, 60]]), Rgb::BLACK),
        );
        applier.set_targets("themed").unwrap();

        let err = applier.select_dominant_color().await.unwrap_err();

        assert!(matches!(err, ThemeError::StyleError { .. }));
        assert_eq!(first.style("background-color").as_deref(), Some("rgb(60, 0, 60)"));
        assert_eq!(first.listener_count(), 2);
        assert_eq!(failing.style("background-color"), None);
        assert_eq!(last.style("background-color"), None);
        assert_eq!(last.listener_count(), 0);
    }
}
