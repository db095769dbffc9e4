//! Names, literals, templates and operator expressions.

use super::{Converter, Result};
use crate::ast_node_type::AstNodeType;
use crate::es_node::{EsNode, Value};
use crate::node_utils::{binary_expression_type, decode_html_entities, operator_text, parse_numeric_literal, split_regex};
use indexmap::IndexMap;
use tsz_scanner::SyntaxKind;
use tsz_syntax::{
    AccessExprData, BinaryExprData, CallExprData, ComputedPropertyData, ConditionalExprData, IdentifierData,
    LiteralData, MetaPropertyData, Node, NodeIndex, ParenthesizedData, TaggedTemplateData, TemplateExprData,
    TemplateSpanData, UnaryExprData, UnaryExprDataEx,
};

impl<'a> Converter<'a> {
    // =========================================================================
    // Names
    // =========================================================================

    pub(super) fn convert_identifier(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<IdentifierData>(index, node)?;
        let identifier = self
            .builder(AstNodeType::Identifier, node)
            .prop("name", data.escaped_text.as_str());
        Ok(Some(self.finish(identifier)))
    }

    pub(super) fn convert_private_identifier(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<IdentifierData>(index, node)?;
        let name = data.escaped_text.strip_prefix('#').unwrap_or(&data.escaped_text);
        let identifier = self.builder(AstNodeType::PrivateIdentifier, node).prop("name", name);
        Ok(Some(self.finish(identifier)))
    }

    /// `[expr]` property names are their expression.
    pub(super) fn convert_computed_property_name(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<ComputedPropertyData>(index, node)?;
        self.convert(data.expression)
    }

    // =========================================================================
    // Literals
    // =========================================================================

    pub(super) fn convert_string_literal(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<LiteralData>(index, node)?;
        let in_jsx_attribute = self.kind_of(self.arena.parent(index)) == Some(SyntaxKind::JsxAttribute);
        let value = if in_jsx_attribute {
            decode_html_entities(&data.text)
        } else {
            data.text.clone()
        };
        let literal = self
            .builder(AstNodeType::Literal, node)
            .prop("value", value)
            .prop("raw", self.node_text(node));
        Ok(Some(self.finish(literal)))
    }

    pub(super) fn convert_numeric_literal(&mut self, _index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let raw = self.node_text(node);
        let literal = self
            .builder(AstNodeType::Literal, node)
            .prop("value", parse_numeric_literal(raw))
            .prop("raw", raw);
        Ok(Some(self.finish(literal)))
    }

    pub(super) fn convert_bigint_literal(&mut self, _index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let raw = self.node_text(node);
        let literal = self
            .builder(AstNodeType::BigIntLiteral, node)
            .prop("value", raw.strip_suffix('n').unwrap_or(raw))
            .prop("raw", raw);
        Ok(Some(self.finish(literal)))
    }

    pub(super) fn convert_regex_literal(&mut self, _index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let raw = self.node_text(node);
        let (pattern, flags) = split_regex(raw);
        let mut regex = IndexMap::new();
        regex.insert("pattern", Value::String(pattern));
        regex.insert("flags", Value::String(flags));
        let literal = self
            .builder(AstNodeType::Literal, node)
            .prop("value", Value::Null)
            .prop("raw", raw)
            .prop("regex", Value::Object(regex));
        Ok(Some(self.finish(literal)))
    }

    pub(super) fn convert_boolean_literal(&self, node: &Node) -> Option<EsNode> {
        let literal = self
            .builder(AstNodeType::Literal, node)
            .prop("value", node.kind == SyntaxKind::TrueKeyword)
            .prop("raw", self.node_text(node));
        Some(self.finish(literal))
    }

    pub(super) fn convert_null(&self, index: NodeIndex, node: &Node) -> Option<EsNode> {
        if self.in_type_position(index) {
            return self.bare(AstNodeType::TSNullKeyword, node);
        }
        let literal = self
            .builder(AstNodeType::Literal, node)
            .prop("value", Value::Null)
            .prop("raw", "null");
        Some(self.finish(literal))
    }

    // =========================================================================
    // Templates
    // =========================================================================

    /// `TemplateElement` for a template piece; `raw` is the text between the
    /// delimiters.
    fn template_element(&self, node: &Node, cooked: &str, close: u32, tail: bool) -> EsNode {
        let raw = self.text(node.pos + 1, node.end.saturating_sub(close).max(node.pos + 1));
        let mut value = IndexMap::new();
        value.insert("raw", Value::from(raw));
        value.insert("cooked", Value::from(cooked));
        let element = self
            .builder(AstNodeType::TemplateElement, node)
            .prop("value", Value::Object(value))
            .prop("tail", tail);
        self.finish(element)
    }

    pub(super) fn convert_no_substitution_template(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<LiteralData>(index, node)?;
        let quasi = self.template_element(node, &data.text, 1, true);
        let template = self
            .builder(AstNodeType::TemplateLiteral, node)
            .prop("quasis", vec![quasi])
            .prop("expressions", Value::Array(Vec::new()));
        Ok(Some(self.finish(template)))
    }

    pub(super) fn convert_template_element(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<LiteralData>(index, node)?;
        let (close, tail) = match node.kind {
            SyntaxKind::TemplateTail => (1, true),
            _ => (2, false),
        };
        Ok(Some(self.template_element(node, &data.text, close, tail)))
    }

    pub(super) fn convert_template_expression(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<TemplateExprData>(index, node)?;
        let mut quasis = vec![self.child(data.head)?];
        let mut expressions = Vec::with_capacity(data.template_spans.len());
        for span in data.template_spans.iter() {
            let Some(span_node) = self.get(span) else {
                continue;
            };
            let span_data = self.data::<TemplateSpanData>(span, span_node)?;
            expressions.push(self.child(span_data.expression)?);
            quasis.push(self.child(span_data.literal)?);
        }
        let template = self
            .builder(AstNodeType::TemplateLiteral, node)
            .prop("quasis", quasis)
            .prop("expressions", expressions);
        Ok(Some(self.finish(template)))
    }

    pub(super) fn convert_tagged_template(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<TaggedTemplateData>(index, node)?;
        let tag = self.child(data.tag)?;
        let type_parameters = self.type_arguments_opt(data.type_arguments.as_ref())?;
        let quasi = self.child(data.template)?;
        let tagged = self
            .builder(AstNodeType::TaggedTemplateExpression, node)
            .prop("tag", tag)
            .prop("quasi", quasi)
            .prop_opt("typeParameters", type_parameters);
        Ok(Some(self.finish(tagged)))
    }

    // =========================================================================
    // Operators
    // =========================================================================

    pub(super) fn convert_binary(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<BinaryExprData>(index, node)?;
        if data.operator_token == SyntaxKind::CommaToken {
            return self.convert_sequence(node, data).map(Some);
        }
        if data.operator_token == SyntaxKind::EqualsToken && self.in_pattern_context(index) {
            let left = self.child(data.left)?;
            let right = self.child(data.right)?;
            let pattern = self
                .builder(AstNodeType::AssignmentPattern, node)
                .prop("left", left)
                .prop("right", right);
            return Ok(Some(self.finish(pattern)));
        }
        let left = self.child(data.left)?;
        let right = self.child(data.right)?;
        let binary = self
            .builder(binary_expression_type(data.operator_token), node)
            .prop("operator", operator_text(data.operator_token))
            .prop("left", left)
            .prop("right", right);
        Ok(Some(self.finish(binary)))
    }

    /// `a, b, c` parses as `(a, b), c`; the left-nested chain becomes one
    /// flat `SequenceExpression`. Parenthesized operands stay nested.
    fn convert_sequence(&mut self, node: &Node, data: &BinaryExprData) -> Result<EsNode> {
        let mut operands = vec![data.right];
        let mut left = data.left;
        while let Some(left_node) = self.get(left) {
            match self.arena.get_binary_expr(left_node) {
                Some(inner) if left_node.kind == SyntaxKind::BinaryExpression
                    && inner.operator_token == SyntaxKind::CommaToken =>
                {
                    operands.push(inner.right);
                    left = inner.left;
                }
                _ => break,
            }
        }
        operands.push(left);
        operands.reverse();

        let mut expressions = Vec::with_capacity(operands.len());
        for operand in operands {
            expressions.push(self.child(operand)?);
        }
        let sequence = self
            .builder(AstNodeType::SequenceExpression, node)
            .prop("expressions", expressions);
        Ok(self.finish(sequence))
    }

    pub(super) fn convert_unary(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<UnaryExprData>(index, node)?;
        let prefix = node.kind == SyntaxKind::PrefixUnaryExpression;
        let argument = self.child(data.operand)?;
        let update = matches!(data.operator, SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken);
        let ty = if update {
            AstNodeType::UpdateExpression
        } else {
            AstNodeType::UnaryExpression
        };
        let unary = self
            .builder(ty, node)
            .prop("operator", operator_text(data.operator))
            .prop("prefix", prefix)
            .prop("argument", argument);
        Ok(Some(self.finish(unary)))
    }

    /// `delete x`, `typeof x`, `void x`.
    pub(super) fn convert_keyword_unary(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<UnaryExprDataEx>(index, node)?;
        let operator = match node.kind {
            SyntaxKind::DeleteExpression => "delete",
            SyntaxKind::TypeOfExpression => "typeof",
            _ => "void",
        };
        let argument = self.child(data.expression)?;
        let unary = self
            .builder(AstNodeType::UnaryExpression, node)
            .prop("operator", operator)
            .prop("prefix", true)
            .prop("argument", argument);
        Ok(Some(self.finish(unary)))
    }

    pub(super) fn convert_await(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<UnaryExprDataEx>(index, node)?;
        let argument = self.child(data.expression)?;
        Ok(Some(self.finish(self.builder(AstNodeType::AwaitExpression, node).prop("argument", argument))))
    }

    pub(super) fn convert_yield(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<UnaryExprDataEx>(index, node)?;
        let argument = self.child(data.expression)?;
        let yield_expression = self
            .builder(AstNodeType::YieldExpression, node)
            .prop("delegate", data.asterisk_token)
            .prop("argument", argument);
        Ok(Some(self.finish(yield_expression)))
    }

    pub(super) fn convert_conditional(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<ConditionalExprData>(index, node)?;
        let test = self.child(data.condition)?;
        let consequent = self.child(data.when_true)?;
        let alternate = self.child(data.when_false)?;
        let conditional = self
            .builder(AstNodeType::ConditionalExpression, node)
            .prop("test", test)
            .prop("consequent", consequent)
            .prop("alternate", alternate);
        Ok(Some(self.finish(conditional)))
    }

    // =========================================================================
    // Calls and member access
    // =========================================================================

    pub(super) fn convert_call(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<CallExprData>(index, node)?;
        let callee = self.child(data.expression)?;
        let arguments = self.list_opt(data.arguments.as_ref())?;
        let type_parameters = self.type_arguments_opt(data.type_arguments.as_ref())?;
        let call = self
            .builder(AstNodeType::CallExpression, node)
            .prop("callee", callee)
            .prop("arguments", arguments)
            .prop_opt("typeParameters", type_parameters)
            .prop_opt("optional", data.question_dot_token.then_some(true));
        Ok(Some(self.finish(call)))
    }

    pub(super) fn convert_new(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<CallExprData>(index, node)?;
        let callee = self.child(data.expression)?;
        let arguments = self.list_opt(data.arguments.as_ref())?;
        let type_parameters = self.type_arguments_opt(data.type_arguments.as_ref())?;
        let new = self
            .builder(AstNodeType::NewExpression, node)
            .prop("callee", callee)
            .prop("arguments", arguments)
            .prop_opt("typeParameters", type_parameters);
        Ok(Some(self.finish(new)))
    }

    pub(super) fn convert_member(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<AccessExprData>(index, node)?;
        let object = self.child(data.expression)?;
        let property = self.child(data.name_or_argument)?;
        let member = self
            .builder(AstNodeType::MemberExpression, node)
            .prop("object", object)
            .prop("property", property)
            .prop("computed", node.kind == SyntaxKind::ElementAccessExpression)
            .prop_opt("optional", data.question_dot_token.then_some(true));
        Ok(Some(self.finish(member)))
    }

    pub(super) fn convert_parenthesized(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<ParenthesizedData>(index, node)?;
        self.convert(data.expression)
    }

    /// `new.target` and `import.meta`; `meta` covers the keyword.
    pub(super) fn convert_meta_property(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<MetaPropertyData>(index, node)?;
        let keyword = operator_text(data.keyword_token);
        let meta = self
            .builder_span(AstNodeType::Identifier, node.pos, node.pos + keyword.len() as u32)
            .prop("name", keyword);
        let meta = self.finish(meta);
        let property = self.child(data.name)?;
        let meta_property = self
            .builder(AstNodeType::MetaProperty, node)
            .prop("meta", meta)
            .prop("property", property);
        Ok(Some(self.finish(meta_property)))
    }
}
