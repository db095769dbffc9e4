//! TypeScript declarations, signatures and type wrappers.

use super::{Converter, Result};
use crate::ast_node_type::AstNodeType;
use crate::es_node::{EsNode, Value};
use crate::location::EsNodeBuilder;
use crate::node_utils::{accessibility, operator_text};
use tsz_scanner::SyntaxKind;
use tsz_syntax::{
    BlockData, ClassData, EnumData, EnumMemberData, ExprWithTypeArgsData, FunctionData, HeritageData,
    ImportTypeData, IndexSignatureData, ModifierFlags, ModuleData, Node, NodeIndex, NodeList,
    PropertySignatureData, QualifiedNameData, SignatureData, TypeAliasData, TypeOperatorData,
    TypeParameterData, TypePredicateData, TypeRefData, node_flags,
};

impl<'a> Converter<'a> {
    // =========================================================================
    // Annotations, type arguments and type parameters
    // =========================================================================

    /// `TSTypeAnnotation` around the type at `type_index`, or `None` when
    /// there is no type.
    pub(super) fn type_annotation(&mut self, type_index: NodeIndex) -> Result<Option<EsNode>> {
        let Some(type_node) = self.get(type_index) else {
            return Ok(None);
        };
        let start = match self.tokens().before(type_node.pos) {
            Some(token)
                if matches!(token.kind, SyntaxKind::ColonToken | SyntaxKind::EqualsGreaterThanToken) =>
            {
                token.start
            }
            _ => type_node.pos,
        };
        let inner = self.child(type_index)?;
        let annotation = self
            .builder_span(AstNodeType::TSTypeAnnotation, start, type_node.end)
            .prop("typeAnnotation", inner);
        Ok(Some(self.finish(annotation)))
    }

    /// The `<` and `>` around a type argument or parameter list.
    fn angle_bracket_span(&self, list: &NodeList) -> (u32, u32) {
        if list.is_empty() {
            return (list.pos.saturating_sub(1), list.end + 1);
        }
        let open = match self.tokens().before(list.pos) {
            Some(token) if token.kind == SyntaxKind::LessThanToken => token.start,
            _ => list.pos.saturating_sub(1),
        };
        let close = self
            .tokens()
            .find_after(list.end, SyntaxKind::GreaterThanToken)
            .map_or(list.end + 1, |token| token.end);
        (open, close)
    }

    pub(super) fn type_arguments(&mut self, list: &NodeList) -> Result<EsNode> {
        let (start, end) = self.angle_bracket_span(list);
        let mut params = Vec::with_capacity(list.len());
        for argument in list.iter() {
            params.push(self.type_argument(argument)?);
        }
        let instantiation = self
            .builder_span(AstNodeType::TSTypeParameterInstantiation, start, end)
            .prop("params", params);
        Ok(self.finish(instantiation))
    }

    pub(super) fn type_arguments_opt(&mut self, list: Option<&NodeList>) -> Result<Option<EsNode>> {
        list.map(|list| self.type_arguments(list)).transpose()
    }

    /// One type argument: keywords stay bare, import types convert directly
    /// and everything else is presented as a type reference.
    fn type_argument(&mut self, index: NodeIndex) -> Result<Value> {
        let Some(node) = self.get(index) else {
            return Ok(Value::Null);
        };
        if node.kind.is_type_keyword() || node.kind == SyntaxKind::ImportType {
            return self.child(index);
        }
        let (type_name, type_parameters) = match self.arena.get_type_ref(node) {
            Some(TypeRefData {
                type_name,
                type_arguments,
            }) => (self.child(*type_name)?, self.type_arguments_opt(type_arguments.as_ref())?),
            None => (self.child(index)?, None),
        };
        let reference = self
            .builder(AstNodeType::TSTypeReference, node)
            .prop("typeName", type_name)
            .prop_opt("typeParameters", type_parameters);
        Ok(self.finish(reference).into())
    }

    pub(super) fn type_parameters(&mut self, list: &NodeList) -> Result<EsNode> {
        let (start, end) = self.angle_bracket_span(list);
        let params = self.list(list)?;
        let declaration = self
            .builder_span(AstNodeType::TSTypeParameterDeclaration, start, end)
            .prop("params", params);
        Ok(self.finish(declaration))
    }

    pub(super) fn type_parameters_opt(&mut self, list: Option<&NodeList>) -> Result<Option<EsNode>> {
        list.map(|list| self.type_parameters(list)).transpose()
    }

    pub(super) fn convert_type_parameter(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<TypeParameterData>(index, node)?;
        let name = self.arena.identifier_text(data.name).unwrap_or_default().to_string();
        let constraint = self.child_opt(data.constraint)?;
        let default = self.child_opt(data.default)?;
        let parameter = self
            .builder(AstNodeType::TSTypeParameter, node)
            .prop("name", name)
            .prop_opt("constraint", constraint)
            .prop_opt("default", default);
        Ok(Some(self.finish(parameter)))
    }

    /// Whether `index` is written in a type position: directly under a type
    /// node, or in the type slot of a declaration.
    pub(super) fn in_type_position(&self, index: NodeIndex) -> bool {
        let parent = self.arena.parent(index);
        let Some(parent_node) = self.get(parent) else {
            return false;
        };
        if parent_node.kind.is_type_node() {
            return true;
        }
        let arena = self.arena;
        let in_list = |list: Option<&NodeList>| list.is_some_and(|list| list.nodes.contains(&index));
        arena.get_variable_declaration(parent_node).is_some_and(|d| d.type_annotation == index)
            || arena.get_parameter(parent_node).is_some_and(|d| d.type_annotation == index)
            || arena.get_property_decl(parent_node).is_some_and(|d| d.type_annotation == index)
            || arena.get_function(parent_node).is_some_and(|d| d.type_annotation == index)
            || arena.get_property_signature(parent_node).is_some_and(|d| d.type_annotation == index)
            || arena.get_index_signature(parent_node).is_some_and(|d| d.type_annotation == index)
            || arena.get_signature(parent_node).is_some_and(|d| d.type_annotation == index)
            || arena.get_type_alias(parent_node).is_some_and(|d| d.type_node == index)
            || arena.get_type_assertion(parent_node).is_some_and(|d| d.type_node == index)
            || arena
                .get_type_parameter(parent_node)
                .is_some_and(|d| d.constraint == index || d.default == index)
            || arena.get_call_expr(parent_node).is_some_and(|d| in_list(d.type_arguments.as_ref()))
            || arena
                .get_expr_with_type_args(parent_node)
                .is_some_and(|d| in_list(d.type_arguments.as_ref()))
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    pub(super) fn convert_type_alias(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<TypeAliasData>(index, node)?;
        let start = self.get(data.name).map_or(node.pos, |name| name.pos);
        let id = self.child(data.name)?;
        let type_parameters = self.type_parameters_opt(data.type_parameters.as_ref())?;
        let init = self.child(data.type_node)?;
        let declarator = self
            .builder_span(AstNodeType::VariableDeclarator, start, node.end)
            .prop("id", id)
            .prop("init", init)
            .prop_opt("typeParameters", type_parameters);
        let declarator = self.finish(declarator);
        let declaration = self
            .builder(AstNodeType::VariableDeclaration, node)
            .prop("kind", "type")
            .prop("declarations", vec![declarator]);
        let declaration = self.finish(declaration);
        Ok(Some(self.fix_exports(data.modifiers.as_ref(), declaration)))
    }

    /// Start of the `{` opening a class or interface body.
    pub(super) fn body_open_brace(&self, node: &Node, data: &ClassData) -> u32 {
        let end_of = |index: NodeIndex| self.get(index).map_or(0, |n| n.end);
        let list_end = |list: Option<&NodeList>| list.and_then(|l| l.last()).map_or(0, end_of);
        let anchor = node
            .pos
            .max(end_of(data.name))
            .max(list_end(data.modifiers.as_ref()))
            .max(list_end(data.decorators.as_ref()))
            .max(data.type_parameters.as_ref().map_or(0, |list| list.end))
            .max(list_end(data.heritage_clauses.as_ref()));
        self.tokens()
            .find_after(anchor, SyntaxKind::OpenBraceToken)
            .map_or(node.pos, |token| token.start)
    }

    pub(super) fn convert_interface(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<ClassData>(index, node)?;
        let modifiers = data.modifiers.as_ref();
        let brace = self.body_open_brace(node, data);
        let members = self.list(&data.members)?;
        let body = self
            .builder_span(AstNodeType::TSInterfaceBody, brace, node.end)
            .prop("body", members);
        let body = self.finish(body);
        let id = self.child(data.name)?;

        let mut heritage = Vec::new();
        if let Some(first) = data.heritage_clauses.as_ref().and_then(|list| list.first()) {
            if let Some(clause_node) = self.get(first) {
                let clause = self.data::<HeritageData>(first, clause_node)?;
                for ty in clause.types.iter() {
                    heritage.push(self.interface_heritage(ty)?);
                }
            }
        }

        let type_parameters = self.type_parameters_opt(data.type_parameters.as_ref())?;
        let decorators = self.decorators(data.decorators.as_ref())?;
        let interface = self
            .builder(AstNodeType::TSInterfaceDeclaration, node)
            .prop("abstract", self.has_modifier(modifiers, SyntaxKind::AbstractKeyword))
            .prop("body", body)
            .prop("id", id)
            .prop("heritage", Value::Array(heritage))
            .prop_opt("typeParameters", type_parameters)
            .prop_opt("decorators", decorators);
        let interface = self.finish(interface);
        Ok(Some(self.fix_exports(modifiers, interface)))
    }

    fn interface_heritage(&mut self, index: NodeIndex) -> Result<Value> {
        let Some(node) = self.get(index) else {
            return Ok(Value::Null);
        };
        let data = self.data::<ExprWithTypeArgsData>(index, node)?;
        let id = self.child(data.expression)?;
        let type_parameters = self.type_arguments_opt(data.type_arguments.as_ref())?;
        let heritage = self
            .builder(AstNodeType::TSInterfaceHeritage, node)
            .prop("id", id)
            .prop_opt("typeParameters", type_parameters);
        Ok(self.finish(heritage).into())
    }

    /// Fold `const`/`declare` into flags and keep the rest as a `modifiers`
    /// list. `export`/`default` are consumed by the export wrapper.
    fn apply_modifiers(&mut self, mut builder: EsNodeBuilder, modifiers: Option<&NodeList>) -> Result<EsNodeBuilder> {
        let Some(list) = modifiers else {
            return Ok(builder);
        };
        let mut remaining = Vec::new();
        for modifier in list.iter() {
            match self.kind_of(modifier) {
                Some(SyntaxKind::ExportKeyword | SyntaxKind::DefaultKeyword) => {}
                Some(SyntaxKind::ConstKeyword) => builder.set("const", true),
                Some(SyntaxKind::DeclareKeyword) => builder.set("declare", true),
                _ => remaining.push(self.child(modifier)?),
            }
        }
        if !remaining.is_empty() {
            builder.set("modifiers", Value::Array(remaining));
        }
        Ok(builder)
    }

    pub(super) fn convert_enum(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<EnumData>(index, node)?;
        let id = self.child(data.name)?;
        let members = self.list(&data.members)?;
        let builder = self
            .builder(AstNodeType::TSEnumDeclaration, node)
            .prop("id", id)
            .prop("members", members);
        let builder = self.apply_modifiers(builder, data.modifiers.as_ref())?;
        let declaration = self.finish(builder);
        Ok(Some(self.fix_exports(data.modifiers.as_ref(), declaration)))
    }

    pub(super) fn convert_enum_member(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<EnumMemberData>(index, node)?;
        let id = self.child(data.name)?;
        let initializer = self.child_opt(data.initializer)?;
        let member = self
            .builder(AstNodeType::TSEnumMember, node)
            .prop("id", id)
            .prop_opt("initializer", initializer);
        Ok(Some(self.finish(member)))
    }

    pub(super) fn convert_module(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<ModuleData>(index, node)?;
        let id = self.child(data.name)?;
        let body = self.child_opt(data.body)?;
        let builder = self
            .builder(AstNodeType::TSModuleDeclaration, node)
            .prop("id", id)
            .prop_opt("body", body);
        let mut builder = self.apply_modifiers(builder, data.modifiers.as_ref())?;
        if node.has_flag(node_flags::GLOBAL_AUGMENTATION) {
            builder.set("global", true);
        }
        let declaration = self.finish(builder);
        Ok(Some(self.fix_exports(data.modifiers.as_ref(), declaration)))
    }

    pub(super) fn convert_module_block(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<BlockData>(index, node)?;
        let body = self.statements(&data.statements)?;
        Ok(Some(self.finish(self.builder(AstNodeType::TSModuleBlock, node).prop("body", body))))
    }

    // =========================================================================
    // Type members
    // =========================================================================

    pub(super) fn convert_method_signature(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<FunctionData>(index, node)?;
        let flags = self.modifier_flags(index);
        let computed = self.kind_of(data.name) == Some(SyntaxKind::ComputedPropertyName);
        let key = self.child(data.name)?;
        let params = self.list(&data.parameters)?;
        let return_type: Value = self.type_annotation(data.type_annotation)?.into();
        let type_parameters = self.type_parameters_opt(data.type_parameters.as_ref())?;
        let signature = self
            .builder(AstNodeType::TSMethodSignature, node)
            .prop("optional", data.question_token)
            .prop("computed", computed)
            .prop("key", key)
            .prop("params", params)
            .prop("typeAnnotation", return_type)
            .prop_opt("readonly", flags.contains(ModifierFlags::READONLY).then_some(true))
            .prop("static", flags.contains(ModifierFlags::STATIC))
            .prop_opt("export", flags.contains(ModifierFlags::EXPORT).then_some(true))
            .prop_opt("typeParameters", type_parameters)
            .prop_opt("accessibility", accessibility(flags));
        Ok(Some(self.finish(signature)))
    }

    pub(super) fn convert_property_signature(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<PropertySignatureData>(index, node)?;
        let flags = self.modifier_flags(index);
        let computed = self.kind_of(data.name) == Some(SyntaxKind::ComputedPropertyName);
        let key = self.child(data.name)?;
        let type_annotation = self.type_annotation(data.type_annotation)?;
        let initializer = self.child_opt(data.initializer)?;
        let signature = self
            .builder(AstNodeType::TSPropertySignature, node)
            .prop_opt("optional", data.question_token.then_some(true))
            .prop("computed", computed)
            .prop("key", key)
            .prop_opt("typeAnnotation", type_annotation)
            .prop_opt("initializer", initializer)
            .prop_opt("readonly", flags.contains(ModifierFlags::READONLY).then_some(true))
            .prop_opt("static", flags.contains(ModifierFlags::STATIC).then_some(true))
            .prop_opt("export", flags.contains(ModifierFlags::EXPORT).then_some(true))
            .prop_opt("accessibility", accessibility(flags));
        Ok(Some(self.finish(signature)))
    }

    pub(super) fn convert_index_signature(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<IndexSignatureData>(index, node)?;
        let flags = self.modifier_flags(index);
        let parameter = match data.parameters.first() {
            Some(first) => self.child(first)?,
            None => Value::Null,
        };
        let type_annotation: Value = self.type_annotation(data.type_annotation)?.into();
        let signature = self
            .builder(AstNodeType::TSIndexSignature, node)
            .prop("index", parameter)
            .prop("typeAnnotation", type_annotation)
            .prop_opt("readonly", flags.contains(ModifierFlags::READONLY).then_some(true))
            .prop("static", flags.contains(ModifierFlags::STATIC))
            .prop_opt("export", flags.contains(ModifierFlags::EXPORT).then_some(true))
            .prop_opt("accessibility", accessibility(flags));
        Ok(Some(self.finish(signature)))
    }

    pub(super) fn convert_construct_signature(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<SignatureData>(index, node)?;
        let params = self.list(&data.parameters)?;
        let type_annotation: Value = self.type_annotation(data.type_annotation)?.into();
        let type_parameters = self.type_parameters_opt(data.type_parameters.as_ref())?;
        let signature = self
            .builder(AstNodeType::TSConstructSignature, node)
            .prop("params", params)
            .prop("typeAnnotation", type_annotation)
            .prop_opt("typeParameters", type_parameters);
        Ok(Some(self.finish(signature)))
    }

    // =========================================================================
    // Types with bespoke shapes
    // =========================================================================

    pub(super) fn convert_type_predicate(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<TypePredicateData>(index, node)?;
        let parameter_name = self.child(data.parameter_name)?;
        // The annotation wrapper shares the range of the type it wraps.
        let type_annotation = match self.get(data.type_node) {
            Some(type_node) => {
                let inner = self.child(data.type_node)?;
                let wrapper = self
                    .builder(AstNodeType::TSTypeAnnotation, type_node)
                    .prop("typeAnnotation", inner);
                Value::from(self.finish(wrapper))
            }
            None => Value::Null,
        };
        let predicate = self
            .builder(AstNodeType::TSTypePredicate, node)
            .prop("parameterName", parameter_name)
            .prop("typeAnnotation", type_annotation);
        Ok(Some(self.finish(predicate)))
    }

    pub(super) fn convert_import_type(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<ImportTypeData>(index, node)?;
        let parameter = self.child(data.argument)?;
        let qualifier = self.child(data.qualifier)?;
        let type_parameters: Value = self.type_arguments_opt(data.type_arguments.as_ref())?.into();
        let import = self
            .builder(AstNodeType::TSImportType, node)
            .prop("isTypeOf", data.is_type_of)
            .prop("parameter", parameter)
            .prop("qualifier", qualifier)
            .prop("typeParameters", type_parameters);
        Ok(Some(self.finish(import)))
    }

    pub(super) fn convert_type_operator(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<TypeOperatorData>(index, node)?;
        let type_annotation = self.child(data.type_node)?;
        let operator = self
            .builder(AstNodeType::TSTypeOperator, node)
            .prop("operator", operator_text(data.operator))
            .prop("typeAnnotation", type_annotation);
        Ok(Some(self.finish(operator)))
    }

    pub(super) fn convert_qualified_name(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<QualifiedNameData>(index, node)?;
        let left = self.child(data.left)?;
        let right = self.child(data.right)?;
        let name = self
            .builder(AstNodeType::TSQualifiedName, node)
            .prop("left", left)
            .prop("right", right);
        Ok(Some(self.finish(name)))
    }
}
