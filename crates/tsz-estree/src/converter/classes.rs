//! Classes and class members.

use super::{Converter, Result};
use crate::ast_node_type::AstNodeType;
use crate::es_node::{EsNode, Value};
use crate::node_utils::accessibility;
use tsz_scanner::SyntaxKind;
use tsz_syntax::{
    ClassData, ExprWithTypeArgsData, FunctionData, HeritageData, ModifierFlags, Node, NodeIndex, PropertyDeclData,
};

impl<'a> Converter<'a> {
    // =========================================================================
    // Class declarations and expressions
    // =========================================================================

    pub(super) fn convert_class(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<ClassData>(index, node)?;
        let modifiers = data.modifiers.as_ref();

        let mut extends: Option<&HeritageData> = None;
        let mut implements: Option<&HeritageData> = None;
        if let Some(clauses) = &data.heritage_clauses {
            for clause in clauses.iter() {
                let Some(clause_node) = self.get(clause) else {
                    continue;
                };
                let heritage = self.data::<HeritageData>(clause, clause_node)?;
                match heritage.token {
                    SyntaxKind::ExtendsKeyword => extends = Some(heritage),
                    SyntaxKind::ImplementsKeyword => implements = Some(heritage),
                    _ => {}
                }
            }
        }
        if let Some(second) = extends.and_then(|clause| clause.types.nodes.get(1)) {
            let pos = self.get(*second).map_or(node.pos, |n| n.pos);
            return Err(self.structure_error(pos, "Classes can only extend a single class."));
        }

        let ty = if node.kind == SyntaxKind::ClassDeclaration
            && self.has_modifier(modifiers, SyntaxKind::AbstractKeyword)
        {
            AstNodeType::TSAbstractClassDeclaration
        } else if node.kind == SyntaxKind::ClassDeclaration {
            AstNodeType::ClassDeclaration
        } else {
            AstNodeType::ClassExpression
        };

        let id = self.child(data.name)?;
        let brace = self.body_open_brace(node, data);
        let members = self.statements(&data.members)?;
        let body = self.builder_span(AstNodeType::ClassBody, brace, node.end).prop("body", members);
        let body = self.finish(body);

        let mut super_class = Value::Null;
        let mut super_type_parameters = None;
        if let Some(first) = extends.and_then(|clause| clause.types.first()) {
            if let Some(first_node) = self.get(first) {
                let heritage = self.data::<ExprWithTypeArgsData>(first, first_node)?;
                super_class = self.child(heritage.expression)?;
                super_type_parameters = self.type_arguments_opt(heritage.type_arguments.as_ref())?;
            }
        }

        let implements = match implements {
            Some(clause) => {
                let mut entries = Vec::with_capacity(clause.types.len());
                for ty in clause.types.iter() {
                    entries.push(self.class_implements(ty)?);
                }
                Some(Value::Array(entries))
            }
            None => None,
        };
        let decorators = self.decorators(data.decorators.as_ref())?;
        let type_parameters = self.type_parameters_opt(data.type_parameters.as_ref())?;

        let class = self
            .builder(ty, node)
            .prop("id", id)
            .prop("body", body)
            .prop("superClass", super_class)
            .prop_opt("superTypeParameters", super_type_parameters)
            .prop_opt("implements", implements)
            .prop_opt("decorators", decorators)
            .prop_opt("typeParameters", type_parameters);
        let class = self.finish(class);
        if node.kind == SyntaxKind::ClassDeclaration {
            Ok(Some(self.fix_exports(modifiers, class)))
        } else {
            Ok(Some(class))
        }
    }

    fn class_implements(&mut self, index: NodeIndex) -> Result<Value> {
        let Some(node) = self.get(index) else {
            return Ok(Value::Null);
        };
        let data = self.data::<ExprWithTypeArgsData>(index, node)?;
        let expression = self.child(data.expression)?;
        let type_parameters = self.type_arguments_opt(data.type_arguments.as_ref())?;
        let implements = self
            .builder(AstNodeType::ClassImplements, node)
            .prop("expression", expression)
            .prop_opt("typeParameters", type_parameters);
        Ok(self.finish(implements).into())
    }

    // =========================================================================
    // Members
    // =========================================================================

    pub(super) fn convert_property_declaration(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<PropertyDeclData>(index, node)?;
        let flags = self.modifier_flags(index);
        let ty = if flags.contains(ModifierFlags::ABSTRACT) {
            AstNodeType::TSAbstractClassProperty
        } else {
            AstNodeType::ClassProperty
        };
        let name_kind = self.kind_of(data.name);
        let key = self.child(data.name)?;
        let value = self.child(data.initializer)?;
        let type_annotation = self.type_annotation(data.type_annotation)?;
        let decorators = self.decorators(data.decorators.as_ref())?;
        let optional = data.question_token
            && matches!(
                name_kind,
                Some(SyntaxKind::Identifier | SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral)
            );
        let property = self
            .builder(ty, node)
            .prop("key", key)
            .prop("value", value)
            .prop("computed", name_kind == Some(SyntaxKind::ComputedPropertyName))
            .prop("static", flags.contains(ModifierFlags::STATIC))
            .prop_opt("readonly", flags.contains(ModifierFlags::READONLY).then_some(true))
            .prop_opt("typeAnnotation", type_annotation)
            .prop_opt("decorators", decorators)
            .prop_opt("accessibility", accessibility(flags))
            .prop_opt("optional", optional.then_some(true))
            .prop_opt("definite", data.exclamation_token.then_some(true));
        Ok(Some(self.finish(property)))
    }

    /// Methods and accessors, in a class body or an object literal.
    pub(super) fn convert_method(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<FunctionData>(index, node)?;
        let flags = self.modifier_flags(index);
        let in_object_literal =
            self.kind_of(self.arena.parent(index)) == Some(SyntaxKind::ObjectLiteralExpression);
        let name_node = self.get(data.name);
        let computed = name_node.is_some_and(|n| n.kind == SyntaxKind::ComputedPropertyName);
        let anchor = name_node.map_or(node.pos, |n| n.end);

        let key = self.child(data.name)?;
        let value = self.method_value(node, data, anchor)?;
        let accessor_kind = match node.kind {
            SyntaxKind::GetAccessor => Some("get"),
            SyntaxKind::SetAccessor => Some("set"),
            _ => None,
        };

        let mut method = if in_object_literal {
            self.builder(AstNodeType::Property, node)
                .prop("key", key)
                .prop("value", value)
                .prop("computed", computed)
                .prop("method", node.kind == SyntaxKind::MethodDeclaration)
                .prop("shorthand", false)
                .prop("kind", accessor_kind.unwrap_or("init"))
        } else {
            let is_static = flags.contains(ModifierFlags::STATIC);
            let named_constructor = !is_static
                && node.kind == SyntaxKind::MethodDeclaration
                && name_node
                    .filter(|n| n.kind == SyntaxKind::StringLiteral)
                    .and_then(|n| self.arena.get_literal(n))
                    .is_some_and(|literal| literal.text == "constructor");
            let kind = match accessor_kind {
                Some(kind) => kind,
                None if named_constructor => "constructor",
                None => "method",
            };
            let ty = if flags.contains(ModifierFlags::ABSTRACT) {
                AstNodeType::TSAbstractMethodDefinition
            } else {
                AstNodeType::MethodDefinition
            };
            let decorators = self.decorators(data.decorators.as_ref())?;
            self.builder(ty, node)
                .prop("key", key)
                .prop("value", value)
                .prop("computed", computed)
                .prop("static", is_static)
                .prop("kind", kind)
                .prop_opt("decorators", decorators)
                .prop_opt("accessibility", accessibility(flags))
        };
        if data.question_token {
            method.set("optional", true);
        }
        Ok(Some(self.finish(method)))
    }

    pub(super) fn convert_constructor(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<FunctionData>(index, node)?;
        let modifiers = data.modifiers.as_ref();
        let flags = self.modifier_flags(index);
        let after = modifiers
            .and_then(|list| list.last())
            .and_then(|last| self.get(last))
            .map_or(node.pos, |last| last.end);
        let Some(token) = self.tokens().at_or_after(after) else {
            return Err(self.structure_error(node.pos, "Constructor keyword not found."));
        };

        let key = if token.kind == SyntaxKind::StringLiteral {
            let raw = self.text(token.start, token.end);
            let value = raw.get(1..raw.len().saturating_sub(1)).unwrap_or_default();
            self.builder_span(AstNodeType::Literal, token.start, token.end)
                .prop("value", value)
                .prop("raw", raw)
        } else {
            self.builder_span(AstNodeType::Identifier, token.start, token.end)
                .prop("name", "constructor")
        };
        let key = self.finish(key);
        let value = self.method_value(node, data, token.end)?;

        let is_static = flags.contains(ModifierFlags::STATIC);
        let ty = if flags.contains(ModifierFlags::ABSTRACT) {
            AstNodeType::TSAbstractMethodDefinition
        } else {
            AstNodeType::MethodDefinition
        };
        let constructor = self
            .builder(ty, node)
            .prop("key", key)
            .prop("value", value)
            .prop("computed", false)
            .prop("static", is_static)
            .prop("kind", if is_static { "method" } else { "constructor" })
            .prop_opt("accessibility", accessibility(flags));
        Ok(Some(self.finish(constructor)))
    }
}
