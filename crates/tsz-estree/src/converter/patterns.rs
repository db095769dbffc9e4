//! Array/object literals, binding patterns and the pattern-or-expression
//! decision for literals.

use super::{Converter, Result};
use crate::ast_node_type::AstNodeType;
use crate::es_node::EsNode;
use tsz_scanner::SyntaxKind;
use tsz_syntax::{
    BindingElementData, BindingPatternData, LiteralExprData, Node, NodeIndex, PropertyAssignmentData,
    ShorthandPropertyData, UnaryExprDataEx,
};

/// How an array or object literal is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralRole {
    /// A destructuring target.
    Pattern,
    Expression,
}

impl<'a> Converter<'a> {
    // =========================================================================
    // Classification
    // =========================================================================

    /// Whether the literal at `index` is a destructuring target: the left
    /// side of `=`, the binding target of a for-in/for-of, or an element or
    /// property value of another target.
    pub fn classify_literal_role(&self, index: NodeIndex) -> LiteralRole {
        let parent = self.arena.parent(index);
        let Some(parent_node) = self.get(parent) else {
            return LiteralRole::Expression;
        };
        let is_target = match parent_node.kind {
            SyntaxKind::BinaryExpression => self
                .arena
                .get_binary_expr(parent_node)
                .is_some_and(|binary| binary.operator_token == SyntaxKind::EqualsToken && binary.left == index),
            SyntaxKind::ForInStatement | SyntaxKind::ForOfStatement => self
                .arena
                .get_for_in_of(parent_node)
                .is_some_and(|stmt| stmt.initializer == index),
            _ => false,
        };
        if is_target || self.in_pattern_context(index) {
            LiteralRole::Pattern
        } else {
            LiteralRole::Expression
        }
    }

    /// Whether `index` sits in an element or property-value slot of a
    /// literal classified as a pattern.
    pub(super) fn in_pattern_context(&self, index: NodeIndex) -> bool {
        let parent = self.arena.parent(index);
        let Some(parent_node) = self.get(parent) else {
            return false;
        };
        match parent_node.kind {
            SyntaxKind::ArrayLiteralExpression | SyntaxKind::ObjectLiteralExpression => {
                self.classify_literal_role(parent) == LiteralRole::Pattern
            }
            SyntaxKind::PropertyAssignment => {
                let is_value = self
                    .arena
                    .get_property_assignment(parent_node)
                    .is_some_and(|property| property.initializer == index);
                is_value && self.in_pattern_context(parent)
            }
            SyntaxKind::ParenthesizedExpression => self.in_pattern_context(parent),
            _ => false,
        }
    }

    // =========================================================================
    // Literals
    // =========================================================================

    pub(super) fn convert_array_literal(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<LiteralExprData>(index, node)?;
        let ty = match self.classify_literal_role(index) {
            LiteralRole::Pattern => AstNodeType::ArrayPattern,
            LiteralRole::Expression => AstNodeType::ArrayExpression,
        };
        let elements = self.list(&data.elements)?;
        Ok(Some(self.finish(self.builder(ty, node).prop("elements", elements))))
    }

    pub(super) fn convert_object_literal(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<LiteralExprData>(index, node)?;
        let ty = match self.classify_literal_role(index) {
            LiteralRole::Pattern => AstNodeType::ObjectPattern,
            LiteralRole::Expression => AstNodeType::ObjectExpression,
        };
        let properties = self.list(&data.elements)?;
        Ok(Some(self.finish(self.builder(ty, node).prop("properties", properties))))
    }

    pub(super) fn convert_property_assignment(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<PropertyAssignmentData>(index, node)?;
        let computed = self.kind_of(data.name) == Some(SyntaxKind::ComputedPropertyName);
        let key = self.child(data.name)?;
        let value = self.child(data.initializer)?;
        let property = self
            .builder(AstNodeType::Property, node)
            .prop("key", key)
            .prop("value", value)
            .prop("computed", computed)
            .prop("method", false)
            .prop("shorthand", false)
            .prop("kind", "init");
        Ok(Some(self.finish(property)))
    }

    pub(super) fn convert_shorthand_property(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<ShorthandPropertyData>(index, node)?;
        let key = self.child(data.name)?;
        let value = match self.get(data.object_assignment_initializer) {
            Some(_) => {
                let left = self.child(data.name)?;
                let right = self.child(data.object_assignment_initializer)?;
                let pattern = self
                    .builder(AstNodeType::AssignmentPattern, node)
                    .prop("left", left)
                    .prop("right", right);
                self.finish(pattern).into()
            }
            None => self.child(data.name)?,
        };
        let property = self
            .builder(AstNodeType::Property, node)
            .prop("key", key)
            .prop("value", value)
            .prop("computed", false)
            .prop("method", false)
            .prop("shorthand", true)
            .prop("kind", "init");
        Ok(Some(self.finish(property)))
    }

    /// `...x`: a rest element inside a pattern, a spread otherwise.
    pub(super) fn convert_spread(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<UnaryExprDataEx>(index, node)?;
        let ty = if self.in_pattern_context(index) {
            AstNodeType::RestElement
        } else {
            AstNodeType::SpreadElement
        };
        let argument = self.child(data.expression)?;
        Ok(Some(self.finish(self.builder(ty, node).prop("argument", argument))))
    }

    // =========================================================================
    // Binding patterns
    // =========================================================================

    pub(super) fn convert_binding_pattern(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<BindingPatternData>(index, node)?;
        let elements = self.list(&data.elements)?;
        let pattern = if node.kind == SyntaxKind::ObjectBindingPattern {
            self.builder(AstNodeType::ObjectPattern, node).prop("properties", elements)
        } else {
            self.builder(AstNodeType::ArrayPattern, node).prop("elements", elements)
        };
        Ok(Some(self.finish(pattern)))
    }

    pub(super) fn convert_binding_element(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<BindingElementData>(index, node)?;
        let in_object = self.kind_of(self.arena.parent(index)) == Some(SyntaxKind::ObjectBindingPattern);

        if data.dot_dot_dot_token {
            let target = if in_object && data.property_name.is_some() {
                data.property_name
            } else {
                data.name
            };
            let argument = self.child(target)?;
            return Ok(Some(self.finish(self.builder(AstNodeType::RestElement, node).prop("argument", argument))));
        }

        if !in_object {
            if self.get(data.initializer).is_none() {
                return self.convert(data.name);
            }
            let left = self.child(data.name)?;
            let right = self.child(data.initializer)?;
            let pattern = self
                .builder(AstNodeType::AssignmentPattern, node)
                .prop("left", left)
                .prop("right", right);
            return Ok(Some(self.finish(pattern)));
        }

        let shorthand = data.property_name.is_none();
        let key_index = if shorthand { data.name } else { data.property_name };
        let computed = self.kind_of(key_index) == Some(SyntaxKind::ComputedPropertyName);
        let key = self.child(key_index)?;
        let value = match (self.get(data.name), self.get(data.initializer)) {
            (Some(name), Some(initializer)) => {
                let left = self.child(data.name)?;
                let right = self.child(data.initializer)?;
                let pattern = self
                    .builder_span(AstNodeType::AssignmentPattern, name.pos, initializer.end)
                    .prop("left", left)
                    .prop("right", right);
                self.finish(pattern).into()
            }
            _ => self.child(data.name)?,
        };
        let property = self
            .builder(AstNodeType::Property, node)
            .prop("key", key)
            .prop("value", value)
            .prop("computed", computed)
            .prop("method", false)
            .prop("shorthand", shorthand)
            .prop("kind", "init");
        Ok(Some(self.finish(property)))
    }
}
