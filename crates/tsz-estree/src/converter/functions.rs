//! Functions, arrows, parameters and decorators.

use super::{Converter, Result};
use crate::ast_node_type::AstNodeType;
use crate::es_node::{EsNode, Value};
use crate::location::EsNodeBuilder;
use crate::node_utils::accessibility;
use tsz_scanner::SyntaxKind;
use tsz_syntax::{DecoratorData, FunctionData, ModifierFlags, Node, NodeIndex, NodeList, ParameterData};

impl<'a> Converter<'a> {
    // =========================================================================
    // Function-likes
    // =========================================================================

    pub(super) fn convert_function_declaration(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<FunctionData>(index, node)?;
        let modifiers = data.modifiers.as_ref();
        let ty = if self.has_modifier(modifiers, SyntaxKind::DeclareKeyword) {
            AstNodeType::DeclareFunction
        } else {
            AstNodeType::FunctionDeclaration
        };
        let id = self.child(data.name)?;
        let params = self.list(&data.parameters)?;
        let body = self.child(data.body)?;
        let function = self
            .builder(ty, node)
            .prop("id", id)
            .prop("generator", data.asterisk_token)
            .prop("expression", false)
            .prop("async", self.has_modifier(modifiers, SyntaxKind::AsyncKeyword))
            .prop("params", params)
            .prop("body", body);
        let function = self.with_signature_extras(function, data.type_annotation, data.type_parameters.as_ref())?;
        let function = self.finish(function);
        Ok(Some(self.fix_exports(modifiers, function)))
    }

    pub(super) fn convert_function_expression(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<FunctionData>(index, node)?;
        let id = self.child(data.name)?;
        let params = self.list(&data.parameters)?;
        let body = self.child(data.body)?;
        let function = self
            .builder(AstNodeType::FunctionExpression, node)
            .prop("id", id)
            .prop("generator", data.asterisk_token)
            .prop("expression", false)
            .prop("async", self.has_modifier(data.modifiers.as_ref(), SyntaxKind::AsyncKeyword))
            .prop("params", params)
            .prop("body", body);
        let function = self.with_signature_extras(function, data.type_annotation, data.type_parameters.as_ref())?;
        Ok(Some(self.finish(function)))
    }

    pub(super) fn convert_arrow_function(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<FunctionData>(index, node)?;
        let params = self.list(&data.parameters)?;
        let expression_body = self.kind_of(data.body) != Some(SyntaxKind::Block);
        let body = self.child(data.body)?;
        let arrow = self
            .builder(AstNodeType::ArrowFunctionExpression, node)
            .prop("generator", false)
            .prop("id", Value::Null)
            .prop("params", params)
            .prop("body", body)
            .prop("async", self.has_modifier(data.modifiers.as_ref(), SyntaxKind::AsyncKeyword))
            .prop("expression", expression_body);
        let arrow = self.with_signature_extras(arrow, data.type_annotation, data.type_parameters.as_ref())?;
        Ok(Some(self.finish(arrow)))
    }

    /// Attach `returnType` and `typeParameters` when present.
    pub(super) fn with_signature_extras(
        &mut self,
        builder: EsNodeBuilder,
        return_type: NodeIndex,
        type_parameters: Option<&NodeList>,
    ) -> Result<EsNodeBuilder> {
        let return_type = self.type_annotation(return_type)?;
        let type_parameters = self.type_parameters_opt(type_parameters)?;
        Ok(builder
            .prop_opt("returnType", return_type)
            .prop_opt("typeParameters", type_parameters))
    }

    /// The anonymous `FunctionExpression` behind a method, accessor or
    /// constructor. It starts at the type parameters' `<`, or at the
    /// parameter list's `(`, found after `anchor`.
    pub(super) fn method_value(&mut self, node: &Node, data: &FunctionData, anchor: u32) -> Result<EsNode> {
        let opener = if data.type_parameters.is_some() {
            SyntaxKind::LessThanToken
        } else {
            SyntaxKind::OpenParenToken
        };
        let start = self
            .tokens()
            .find_after(anchor, opener)
            .map_or(data.parameters.pos, |token| token.start);
        let params = self.list(&data.parameters)?;
        let body = self.child(data.body)?;
        let value = self
            .builder_span(AstNodeType::FunctionExpression, start, node.end)
            .prop("id", Value::Null)
            .prop("generator", data.asterisk_token)
            .prop("expression", false)
            .prop("async", self.has_modifier(data.modifiers.as_ref(), SyntaxKind::AsyncKeyword))
            .prop("body", body)
            .prop("params", params);
        let value = self.with_signature_extras(value, data.type_annotation, data.type_parameters.as_ref())?;
        Ok(self.finish(value))
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    pub(super) fn convert_parameter(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<ParameterData>(index, node)?;
        let modifiers = data.modifiers.as_ref().filter(|list| !list.is_empty());
        let Some(name) = self.convert(data.name)? else {
            return Ok(None);
        };
        let name_end = name.end();

        // The annotated node: the rest element itself, or the bare name.
        let mut target = if data.dot_dot_dot_token {
            self.builder(AstNodeType::RestElement, node).prop("argument", name)
        } else {
            name.into_builder()
        };
        if let Some(annotation) = self.type_annotation(data.type_annotation)? {
            let end = annotation.end();
            target = target.prop("typeAnnotation", annotation).extend_to(end);
        }
        if data.question_token {
            if let Some(question) = self
                .tokens()
                .at_or_after(name_end)
                .filter(|token| token.kind == SyntaxKind::QuestionToken)
            {
                target = target.extend_to(question.end);
            }
            target = target.prop("optional", true);
        }
        let target = self.finish(target);

        let mut result = match self.get(data.initializer) {
            Some(_) if !data.dot_dot_dot_token => {
                let start = if modifiers.is_some() { target.start() } else { node.pos };
                let right = self.child(data.initializer)?;
                self.builder(AstNodeType::AssignmentPattern, node)
                    .start_at(start)
                    .prop("left", target)
                    .prop("right", right)
            }
            _ => target.into_builder(),
        };

        if modifiers.is_some() {
            let flags = self.modifier_flags(index);
            let parameter = self.finish(result);
            result = self
                .builder(AstNodeType::TSParameterProperty, node)
                .prop_opt("accessibility", accessibility(flags))
                .prop_opt("readonly", flags.contains(ModifierFlags::READONLY).then_some(true))
                .prop_opt("static", flags.contains(ModifierFlags::STATIC).then_some(true))
                .prop_opt("export", flags.contains(ModifierFlags::EXPORT).then_some(true))
                .prop("parameter", parameter);
        }
        if let Some(decorators) = self.decorators(data.decorators.as_ref())? {
            result.set("decorators", decorators);
        }
        Ok(Some(self.finish(result)))
    }

    // =========================================================================
    // Decorators
    // =========================================================================

    /// Converted decorator list, `None` when there are none.
    pub(super) fn decorators(&mut self, list: Option<&NodeList>) -> Result<Option<Value>> {
        match list {
            Some(list) if !list.is_empty() => Ok(Some(self.list(list)?)),
            _ => Ok(None),
        }
    }

    pub(super) fn convert_decorator(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<DecoratorData>(index, node)?;
        let expression = self.child(data.expression)?;
        Ok(Some(self.finish(self.builder(AstNodeType::Decorator, node).prop("expression", expression))))
    }
}
