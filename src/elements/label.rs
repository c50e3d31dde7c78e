//! Positioned text label.

use crate::core::VisualNode;
use crate::elements::Element;
use crate::render::{TextHAlign, TextPrimitive, TextVAlign};

pub const KIND: &str = "label";

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    node: VisualNode,
    text: String,
    h_align: TextHAlign,
    v_align: TextVAlign,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            node: VisualNode::new(),
            text: String::new(),
            h_align: TextHAlign::Left,
            v_align: TextVAlign::Top,
        }
    }
}

impl Label {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text;
            self.node.mark_dirty();
        }
    }

    #[must_use]
    pub fn h_align(&self) -> TextHAlign {
        self.h_align
    }

    #[must_use]
    pub fn v_align(&self) -> TextVAlign {
        self.v_align
    }

    pub fn set_alignment(&mut self, h_align: TextHAlign, v_align: TextVAlign) {
        if self.h_align != h_align || self.v_align != v_align {
            self.h_align = h_align;
            self.v_align = v_align;
            self.node.mark_dirty();
        }
    }

    #[must_use]
    pub fn to_primitive(&self) -> Option<TextPrimitive> {
        if self.text.is_empty() {
            return None;
        }
        let color = self.node.fill()?;
        Some(
            TextPrimitive::new(
                self.text.clone(),
                self.node.position().x,
                self.node.position().y,
                color,
            )
            .aligned(self.h_align, self.v_align)
            .with_fill_opacity(self.node.fill_opacity()),
        )
    }
}

impl Element for Label {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn node(&self) -> &VisualNode {
        &self.node
    }

    fn node_mut(&mut self) -> &mut VisualNode {
        &mut self.node
    }

    // Text measurement belongs to the backend; a label has no geometry to rebuild.
    fn draw(&mut self) {
        let _ = self.node.take_dirty();
    }

    fn push_primitives(&self, frame: &mut crate::render::RenderFrame) {
        if !self.node.is_visible() {
            return;
        }
        if let Some(primitive) = self.to_primitive() {
            frame.texts.push(primitive);
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Label;
    use crate::elements::Element;
    use crate::render::Color;

    #[test]
    fn primitive_requires_text_and_fill() {
        let mut label = Label::new();
        assert!(label.to_primitive().is_none());

        label.set_text("42%");
        assert!(label.to_primitive().is_none());

        label.node_mut().set_fill(Some(Color::rgb(0.0, 0.0, 0.0)));
        let primitive = label.to_primitive().expect("primitive");
        assert_eq!(primitive.text, "42%");
    }
}
