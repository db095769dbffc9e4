//! Table-driven conversion for kinds without a dedicated handler.
//!
//! Every such kind becomes a `TS{KindName}` node. When the kind has an entry
//! in [`FALLBACK_TABLE`], its fields are copied in table order according to
//! their [`FieldRole`]; otherwise the node is emitted bare (type keywords,
//! `this` types, modifiers).

use super::{Converter, Result};
use crate::ast_node_type::AstNodeType;
use crate::error::ConvertError;
use crate::es_node::{EsNode, EsType};
use tracing::debug;
use tsz_scanner::SyntaxKind;
use tsz_syntax::{
    ArrayTypeData, CompositeTypeData, ConditionalTypeData, ExprWithTypeArgsData, ExternalModuleRefData,
    ImportEqualsData, IndexedAccessTypeData, InferTypeData, LiteralTypeData, MappedTypeData, NamedTupleMemberData,
    NamespaceExportDeclData, Node, NodeArena, NodeIndex, NodeList, SignatureData, TemplateExprData, TemplateSpanData,
    TypeAssertionData, TypeLiteralData, TypeQueryData, TypeRefData, UnaryExprDataEx, WrappedTypeData,
};

/// How a field of a fallback node is emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRole {
    /// Converted recursively; omitted when absent.
    Child,
    /// Converted element-wise; omitted when absent.
    Children,
    /// Copied as is.
    Scalar,
    /// Wrapped in a `TSTypeAnnotation` under `typeAnnotation`.
    TypeSlot,
    /// Emitted as `typeParameters: TSTypeParameterInstantiation`.
    TypeArgs,
    /// Emitted as `typeParameters: TSTypeParameterDeclaration`.
    TypeParams,
    /// Emitted as `decorators` when non-empty.
    Decorators,
}

/// A raw field value read out of the concrete tree.
#[derive(Clone, Copy, Debug)]
pub enum FieldValue<'n> {
    Node(NodeIndex),
    List(Option<&'n NodeList>),
    Flag(bool),
}

pub struct FieldSpec {
    pub name: &'static str,
    pub role: FieldRole,
    /// `None` when the node does not carry the expected data.
    pub get: for<'n> fn(&'n NodeArena, &'n Node) -> Option<FieldValue<'n>>,
}

pub struct FallbackEntry {
    pub kind: SyntaxKind,
    /// Overrides the default `TS{KindName}`.
    pub type_name: Option<&'static str>,
    pub fields: &'static [FieldSpec],
}

macro_rules! field {
    ($name:literal, $role:ident, $data:ty, |$d:ident| $value:expr) => {
        FieldSpec {
            name: $name,
            role: FieldRole::$role,
            get: {
                fn get<'n>(arena: &'n NodeArena, node: &'n Node) -> Option<FieldValue<'n>> {
                    let $d = arena.node_data::<$data>(node)?;
                    Some($value)
                }
                get
            },
        }
    };
}

macro_rules! entry {
    ($kind:ident => [$($field:expr),* $(,)?]) => {
        FallbackEntry {
            kind: SyntaxKind::$kind,
            type_name: None,
            fields: &[$($field),*],
        }
    };
}

const SIGNATURE_FIELDS: &[FieldSpec] = &[
    field!("typeParameters", TypeParams, SignatureData, |d| FieldValue::List(d.type_parameters.as_ref())),
    field!("parameters", Children, SignatureData, |d| FieldValue::List(Some(&d.parameters))),
    field!("type", TypeSlot, SignatureData, |d| FieldValue::Node(d.type_annotation)),
];

const WRAPPED_TYPE_FIELDS: &[FieldSpec] = &[field!("type", TypeSlot, WrappedTypeData, |d| FieldValue::Node(d.type_node))];

const TYPE_ASSERTION_FIELDS: &[FieldSpec] = &[
    field!("expression", Child, TypeAssertionData, |d| FieldValue::Node(d.expression)),
    field!("type", TypeSlot, TypeAssertionData, |d| FieldValue::Node(d.type_node)),
];

pub static FALLBACK_TABLE: &[FallbackEntry] = &[
    entry!(TypeReference => [
        field!("typeName", Child, TypeRefData, |d| FieldValue::Node(d.type_name)),
        field!("typeArguments", TypeArgs, TypeRefData, |d| FieldValue::List(d.type_arguments.as_ref())),
    ]),
    entry!(UnionType => [field!("types", Children, CompositeTypeData, |d| FieldValue::List(Some(&d.types)))]),
    entry!(IntersectionType => [field!("types", Children, CompositeTypeData, |d| FieldValue::List(Some(&d.types)))]),
    entry!(TupleType => [
        field!("elementTypes", Children, CompositeTypeData, |d| FieldValue::List(Some(&d.types))),
    ]),
    entry!(ArrayType => [field!("elementType", Child, ArrayTypeData, |d| FieldValue::Node(d.element_type))]),
    FallbackEntry { kind: SyntaxKind::OptionalType, type_name: None, fields: WRAPPED_TYPE_FIELDS },
    FallbackEntry { kind: SyntaxKind::RestType, type_name: None, fields: WRAPPED_TYPE_FIELDS },
    FallbackEntry { kind: SyntaxKind::ParenthesizedType, type_name: None, fields: WRAPPED_TYPE_FIELDS },
    entry!(IndexedAccessType => [
        field!("objectType", Child, IndexedAccessTypeData, |d| FieldValue::Node(d.object_type)),
        field!("indexType", Child, IndexedAccessTypeData, |d| FieldValue::Node(d.index_type)),
    ]),
    entry!(ConditionalType => [
        field!("checkType", Child, ConditionalTypeData, |d| FieldValue::Node(d.check_type)),
        field!("extendsType", Child, ConditionalTypeData, |d| FieldValue::Node(d.extends_type)),
        field!("trueType", Child, ConditionalTypeData, |d| FieldValue::Node(d.true_type)),
        field!("falseType", Child, ConditionalTypeData, |d| FieldValue::Node(d.false_type)),
    ]),
    entry!(InferType => [field!("typeParameter", Child, InferTypeData, |d| FieldValue::Node(d.type_parameter))]),
    entry!(MappedType => [
        field!("readonlyToken", Child, MappedTypeData, |d| FieldValue::Node(d.readonly_token)),
        field!("typeParameter", Child, MappedTypeData, |d| FieldValue::Node(d.type_parameter)),
        field!("nameType", Child, MappedTypeData, |d| FieldValue::Node(d.name_type)),
        field!("questionToken", Child, MappedTypeData, |d| FieldValue::Node(d.question_token)),
        field!("type", TypeSlot, MappedTypeData, |d| FieldValue::Node(d.type_node)),
    ]),
    entry!(LiteralType => [field!("literal", Child, LiteralTypeData, |d| FieldValue::Node(d.literal))]),
    entry!(TypeQuery => [
        field!("exprName", Child, TypeQueryData, |d| FieldValue::Node(d.expr_name)),
        field!("typeArguments", TypeArgs, TypeQueryData, |d| FieldValue::List(d.type_arguments.as_ref())),
    ]),
    entry!(TypeLiteral => [field!("members", Children, TypeLiteralData, |d| FieldValue::List(Some(&d.members)))]),
    FallbackEntry { kind: SyntaxKind::FunctionType, type_name: None, fields: SIGNATURE_FIELDS },
    FallbackEntry { kind: SyntaxKind::ConstructorType, type_name: None, fields: SIGNATURE_FIELDS },
    FallbackEntry { kind: SyntaxKind::CallSignature, type_name: None, fields: SIGNATURE_FIELDS },
    FallbackEntry { kind: SyntaxKind::AsExpression, type_name: None, fields: TYPE_ASSERTION_FIELDS },
    FallbackEntry { kind: SyntaxKind::SatisfiesExpression, type_name: None, fields: TYPE_ASSERTION_FIELDS },
    FallbackEntry {
        kind: SyntaxKind::TypeAssertionExpression,
        type_name: Some("TSTypeAssertion"),
        fields: TYPE_ASSERTION_FIELDS,
    },
    entry!(NonNullExpression => [
        field!("expression", Child, UnaryExprDataEx, |d| FieldValue::Node(d.expression)),
    ]),
    entry!(ExpressionWithTypeArguments => [
        field!("expression", Child, ExprWithTypeArgsData, |d| FieldValue::Node(d.expression)),
        field!("typeArguments", TypeArgs, ExprWithTypeArgsData, |d| FieldValue::List(d.type_arguments.as_ref())),
    ]),
    entry!(ImportEqualsDeclaration => [
        field!("decorators", Decorators, ImportEqualsData, |d| FieldValue::List(d.decorators.as_ref())),
        field!("modifiers", Children, ImportEqualsData, |d| FieldValue::List(d.modifiers.as_ref())),
        field!("isTypeOnly", Scalar, ImportEqualsData, |d| FieldValue::Flag(d.is_type_only)),
        field!("name", Child, ImportEqualsData, |d| FieldValue::Node(d.name)),
        field!("moduleReference", Child, ImportEqualsData, |d| FieldValue::Node(d.module_reference)),
    ]),
    entry!(ExternalModuleReference => [
        field!("expression", Child, ExternalModuleRefData, |d| FieldValue::Node(d.expression)),
    ]),
    entry!(NamespaceExportDeclaration => [
        field!("name", Child, NamespaceExportDeclData, |d| FieldValue::Node(d.name)),
    ]),
    entry!(NamedTupleMember => [
        field!("dotDotDotToken", Scalar, NamedTupleMemberData, |d| FieldValue::Flag(d.dot_dot_dot_token)),
        field!("name", Child, NamedTupleMemberData, |d| FieldValue::Node(d.name)),
        field!("questionToken", Scalar, NamedTupleMemberData, |d| FieldValue::Flag(d.question_token)),
        field!("type", TypeSlot, NamedTupleMemberData, |d| FieldValue::Node(d.type_node)),
    ]),
    entry!(TemplateLiteralType => [
        field!("head", Child, TemplateExprData, |d| FieldValue::Node(d.head)),
        field!("templateSpans", Children, TemplateExprData, |d| FieldValue::List(Some(&d.template_spans))),
    ]),
    entry!(TemplateLiteralTypeSpan => [
        field!("type", TypeSlot, TemplateSpanData, |d| FieldValue::Node(d.expression)),
        field!("literal", Child, TemplateSpanData, |d| FieldValue::Node(d.literal)),
    ]),
];

/// The table entry for `kind`, if any.
pub fn fallback_entry(kind: SyntaxKind) -> Option<&'static FallbackEntry> {
    FALLBACK_TABLE.iter().find(|entry| entry.kind == kind)
}

/// The node type a fallback conversion of `kind` produces.
pub fn fallback_type_name(kind: SyntaxKind) -> String {
    match fallback_entry(kind).and_then(|entry| entry.type_name) {
        Some(name) => name.to_string(),
        None => format!("TS{}", kind.name()),
    }
}

impl<'a> Converter<'a> {
    pub(super) fn convert_fallback(&mut self, index: NodeIndex, node: &'a Node) -> Result<EsNode> {
        let name = fallback_type_name(node.kind);
        let ty = match AstNodeType::from_name(&name) {
            Some(known) => EsType::Known(known),
            None if self.options.fail_on_unknown_node_kind => return Err(ConvertError::UnknownNodeType(name)),
            None => EsType::Synthesized(name),
        };
        debug!(kind = ?node.kind, ty = ty.as_str(), "fallback conversion");

        let mut builder = self.builder(ty, node);
        let Some(entry) = fallback_entry(node.kind) else {
            return Ok(self.finish(builder));
        };
        let arena: &'a NodeArena = self.arena;
        for field in entry.fields {
            let value = (field.get)(arena, node).ok_or(ConvertError::MissingData {
                kind: node.kind,
                index: index.0,
            })?;
            match (field.role, value) {
                (FieldRole::Child, FieldValue::Node(child)) => {
                    if let Some(converted) = self.child_opt(child)? {
                        builder.set(field.name, converted);
                    }
                }
                (FieldRole::Children, FieldValue::List(Some(list))) => {
                    builder.set(field.name, self.list(list)?);
                }
                (FieldRole::Scalar, FieldValue::Flag(flag)) => builder.set(field.name, flag),
                (FieldRole::TypeSlot, FieldValue::Node(child)) => {
                    if let Some(annotation) = self.type_annotation(child)? {
                        builder.set("typeAnnotation", annotation);
                    }
                }
                (FieldRole::TypeArgs, FieldValue::List(list)) => {
                    if let Some(arguments) = self.type_arguments_opt(list)? {
                        builder.set("typeParameters", arguments);
                    }
                }
                (FieldRole::TypeParams, FieldValue::List(list)) => {
                    if let Some(parameters) = self.type_parameters_opt(list)? {
                        builder.set("typeParameters", parameters);
                    }
                }
                (FieldRole::Decorators, FieldValue::List(list)) => {
                    if let Some(decorators) = self.decorators(list)? {
                        builder.set("decorators", decorators);
                    }
                }
                _ => {}
            }
        }
        Ok(self.finish(builder))
    }
}
