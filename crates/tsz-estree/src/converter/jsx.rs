//! JSX elements, attributes and text.

use super::{Converter, Result};
use crate::ast_node_type::AstNodeType;
use crate::es_node::{EsNode, Value};
use tsz_scanner::SyntaxKind;
use tsz_syntax::{
    AccessExprData, JsxAttributeData, JsxAttributesData, JsxClosingData, JsxElementData, JsxExpressionData,
    JsxOpeningData, JsxSpreadAttributeData, Node, NodeIndex,
};

impl<'a> Converter<'a> {
    // =========================================================================
    // Elements
    // =========================================================================

    pub(super) fn convert_jsx_element(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<JsxElementData>(index, node)?;
        let opening = self.child(data.opening_element)?;
        let closing = self.child(data.closing_element)?;
        let children = self.list(&data.children)?;
        let element = self
            .builder(AstNodeType::JSXElement, node)
            .prop("openingElement", opening)
            .prop("closingElement", closing)
            .prop("children", children);
        Ok(Some(self.finish(element)))
    }

    /// `<a />` is an element whose opening tag is the whole node.
    pub(super) fn convert_jsx_self_closing_element(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let opening = self.convert_jsx_opening_element(index, node, true)?;
        let element = self
            .builder(AstNodeType::JSXElement, node)
            .prop("openingElement", opening)
            .prop("closingElement", Value::Null)
            .prop("children", Value::Array(Vec::new()));
        Ok(Some(self.finish(element)))
    }

    /// Shared by opening tags and self-closing elements.
    pub(super) fn convert_jsx_opening_element(
        &mut self,
        index: NodeIndex,
        node: &Node,
        self_closing: bool,
    ) -> Result<EsNode> {
        let data = self.data::<JsxOpeningData>(index, node)?;
        let type_parameters = self.type_arguments_opt(data.type_arguments.as_ref())?;
        let name = self.jsx_tag_name(data.tag_name)?;
        let attributes = match self.get(data.attributes) {
            Some(attributes_node) => {
                let attributes = self.data::<JsxAttributesData>(data.attributes, attributes_node)?;
                self.list(&attributes.properties)?
            }
            None => Value::Array(Vec::new()),
        };
        let opening = self
            .builder(AstNodeType::JSXOpeningElement, node)
            .prop_opt("typeParameters", type_parameters)
            .prop("selfClosing", self_closing)
            .prop("name", name)
            .prop("attributes", attributes);
        Ok(self.finish(opening))
    }

    pub(super) fn convert_jsx_closing_element(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<JsxClosingData>(index, node)?;
        let name = self.jsx_tag_name(data.tag_name)?;
        Ok(Some(self.finish(self.builder(AstNodeType::JSXClosingElement, node).prop("name", name))))
    }

    pub(super) fn convert_jsx_fragment(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<JsxElementData>(index, node)?;
        let opening = self.child(data.opening_element)?;
        let closing = self.child(data.closing_element)?;
        let children = self.list(&data.children)?;
        let fragment = self
            .builder(AstNodeType::JSXFragment, node)
            .prop("openingFragment", opening)
            .prop("closingFragment", closing)
            .prop("children", children);
        Ok(Some(self.finish(fragment)))
    }

    /// `div`, `this`, `a.b.c` as JSX names.
    fn jsx_tag_name(&mut self, index: NodeIndex) -> Result<Value> {
        let Some(node) = self.get(index) else {
            return Ok(Value::Null);
        };
        let name = if node.kind == SyntaxKind::PropertyAccessExpression {
            let access = self.data::<AccessExprData>(index, node)?;
            let object = self.jsx_tag_name(access.expression)?;
            let property = self.jsx_tag_name(access.name_or_argument)?;
            self.builder(AstNodeType::JSXMemberExpression, node)
                .prop("object", object)
                .prop("property", property)
        } else {
            self.builder(AstNodeType::JSXIdentifier, node)
                .prop("name", self.node_text(node))
        };
        let name = self.finish(name);
        self.register(index, &name);
        Ok(name.into())
    }

    // =========================================================================
    // Attributes and children
    // =========================================================================

    pub(super) fn convert_jsx_attribute(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<JsxAttributeData>(index, node)?;
        let name = match self.get(data.name) {
            Some(name_node) => {
                let name = self
                    .builder(AstNodeType::JSXIdentifier, name_node)
                    .prop("name", self.node_text(name_node));
                let name = self.finish(name);
                self.register(data.name, &name);
                Value::from(name)
            }
            None => Value::Null,
        };
        let value = self.child(data.initializer)?;
        let attribute = self
            .builder(AstNodeType::JSXAttribute, node)
            .prop("name", name)
            .prop("value", value);
        Ok(Some(self.finish(attribute)))
    }

    pub(super) fn convert_jsx_spread_attribute(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<JsxSpreadAttributeData>(index, node)?;
        let argument = self.child(data.expression)?;
        let spread = self
            .builder(AstNodeType::JSXSpreadAttribute, node)
            .prop("argument", argument);
        Ok(Some(self.finish(spread)))
    }

    /// `{expr}`, `{...expr}` and `{}`.
    pub(super) fn convert_jsx_expression(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<JsxExpressionData>(index, node)?;
        let expression = match self.convert(data.expression)? {
            Some(expression) => Value::from(expression),
            None => {
                let start = node.pos.saturating_add(1);
                let end = node.end.saturating_sub(1).max(start);
                Value::from(self.finish(self.builder_span(AstNodeType::JSXEmptyExpression, start, end)))
            }
        };
        let ty = if data.dot_dot_dot_token {
            AstNodeType::JSXSpreadChild
        } else {
            AstNodeType::JSXExpressionContainer
        };
        Ok(Some(self.finish(self.builder(ty, node).prop("expression", expression))))
    }

    /// A text run; `value` and `raw` are both the source slice.
    pub(super) fn convert_jsx_text(&self, node: &Node) -> Option<EsNode> {
        let ty = if self.options.use_literal_text_node_for_markup_text {
            AstNodeType::JSXText
        } else {
            AstNodeType::Literal
        };
        let text = self.node_text(node);
        Some(self.finish(self.builder(ty, node).prop("value", text).prop("raw", text)))
    }
}
