//! Source-order child enumeration for every data pool.

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use tsz_scanner::SyntaxKind;

/// Enumerate the direct children of a node's data in source order.
///
/// `kind` disambiguates pools shared by kinds whose children appear in a
/// different order (`<T>x` vs `x as T`, `do..while` vs `while`).
pub trait NodeChildren {
    fn for_each_child(&self, kind: SyntaxKind, f: &mut dyn FnMut(NodeIndex));
}

#[inline]
fn one(index: NodeIndex, f: &mut dyn FnMut(NodeIndex)) {
    if index.is_some() {
        f(index);
    }
}

#[inline]
fn list(list: &NodeList, f: &mut dyn FnMut(NodeIndex)) {
    for index in list.iter() {
        one(index, f);
    }
}

#[inline]
fn opt_list(nodes: &Option<NodeList>, f: &mut dyn FnMut(NodeIndex)) {
    if let Some(nodes) = nodes {
        list(nodes, f);
    }
}

macro_rules! children {
    ($ty:ty => |$data:ident, $f:ident| $body:block) => {
        impl NodeChildren for $ty {
            fn for_each_child(&self, _kind: SyntaxKind, $f: &mut dyn FnMut(NodeIndex)) {
                let $data = self;
                $body
            }
        }
    };
}

children!(IdentifierData => |_d, _f| {});
children!(LiteralData => |_d, _f| {});
children!(QualifiedNameData => |d, f| { one(d.left, f); one(d.right, f); });
children!(ComputedPropertyData => |d, f| { one(d.expression, f); });
children!(BinaryExprData => |d, f| { one(d.left, f); one(d.right, f); });
children!(UnaryExprData => |d, f| { one(d.operand, f); });
children!(UnaryExprDataEx => |d, f| { one(d.expression, f); });
children!(CallExprData => |d, f| {
    one(d.expression, f);
    opt_list(&d.type_arguments, f);
    opt_list(&d.arguments, f);
});
children!(AccessExprData => |d, f| { one(d.expression, f); one(d.name_or_argument, f); });
children!(ConditionalExprData => |d, f| {
    one(d.condition, f);
    one(d.when_true, f);
    one(d.when_false, f);
});
children!(LiteralExprData => |d, f| { list(&d.elements, f); });
children!(ParenthesizedData => |d, f| { one(d.expression, f); });

impl NodeChildren for TypeAssertionData {
    fn for_each_child(&self, kind: SyntaxKind, f: &mut dyn FnMut(NodeIndex)) {
        if kind == SyntaxKind::TypeAssertionExpression {
            one(self.type_node, f);
            one(self.expression, f);
        } else {
            one(self.expression, f);
            one(self.type_node, f);
        }
    }
}

children!(TemplateExprData => |d, f| { one(d.head, f); list(&d.template_spans, f); });
children!(TemplateSpanData => |d, f| { one(d.expression, f); one(d.literal, f); });
children!(TaggedTemplateData => |d, f| {
    one(d.tag, f);
    opt_list(&d.type_arguments, f);
    one(d.template, f);
});
children!(MetaPropertyData => |d, f| { one(d.name, f); });
children!(FunctionData => |d, f| {
    opt_list(&d.decorators, f);
    opt_list(&d.modifiers, f);
    one(d.name, f);
    opt_list(&d.type_parameters, f);
    list(&d.parameters, f);
    one(d.type_annotation, f);
    one(d.body, f);
});
children!(ClassData => |d, f| {
    opt_list(&d.decorators, f);
    opt_list(&d.modifiers, f);
    one(d.name, f);
    opt_list(&d.type_parameters, f);
    opt_list(&d.heritage_clauses, f);
    list(&d.members, f);
});
children!(HeritageData => |d, f| { list(&d.types, f); });
children!(ExprWithTypeArgsData => |d, f| { one(d.expression, f); opt_list(&d.type_arguments, f); });
children!(PropertyDeclData => |d, f| {
    opt_list(&d.decorators, f);
    opt_list(&d.modifiers, f);
    one(d.name, f);
    one(d.type_annotation, f);
    one(d.initializer, f);
});
children!(ParameterData => |d, f| {
    opt_list(&d.decorators, f);
    opt_list(&d.modifiers, f);
    one(d.name, f);
    one(d.type_annotation, f);
    one(d.initializer, f);
});
children!(TypeParameterData => |d, f| {
    opt_list(&d.modifiers, f);
    one(d.name, f);
    one(d.constraint, f);
    one(d.default, f);
});
children!(DecoratorData => |d, f| { one(d.expression, f); });
children!(BlockData => |d, f| { list(&d.statements, f); });
children!(VariableStatementData => |d, f| { opt_list(&d.modifiers, f); one(d.declaration_list, f); });
children!(VariableListData => |d, f| { list(&d.declarations, f); });
children!(VariableDeclarationData => |d, f| {
    one(d.name, f);
    one(d.type_annotation, f);
    one(d.initializer, f);
});
children!(IfStatementData => |d, f| {
    one(d.expression, f);
    one(d.then_statement, f);
    one(d.else_statement, f);
});

impl NodeChildren for LoopData {
    fn for_each_child(&self, kind: SyntaxKind, f: &mut dyn FnMut(NodeIndex)) {
        if kind == SyntaxKind::DoStatement {
            one(self.statement, f);
            one(self.condition, f);
        } else {
            one(self.initializer, f);
            one(self.condition, f);
            one(self.incrementor, f);
            one(self.statement, f);
        }
    }
}

children!(ForInOfData => |d, f| {
    one(d.initializer, f);
    one(d.expression, f);
    one(d.statement, f);
});
children!(ReturnData => |d, f| { one(d.expression, f); });
children!(ExprStatementData => |d, f| { one(d.expression, f); });
children!(JumpData => |d, f| { one(d.label, f); });
children!(LabeledData => |d, f| { one(d.label, f); one(d.statement, f); });
children!(WithData => |d, f| { one(d.expression, f); one(d.statement, f); });
children!(SwitchData => |d, f| { one(d.expression, f); one(d.case_block, f); });
children!(CaseClauseData => |d, f| { one(d.expression, f); list(&d.statements, f); });
children!(TryData => |d, f| {
    one(d.try_block, f);
    one(d.catch_clause, f);
    one(d.finally_block, f);
});
children!(CatchClauseData => |d, f| { one(d.variable_declaration, f); one(d.block, f); });
children!(TypeRefData => |d, f| { one(d.type_name, f); opt_list(&d.type_arguments, f); });
children!(CompositeTypeData => |d, f| { list(&d.types, f); });
children!(ArrayTypeData => |d, f| { one(d.element_type, f); });
children!(WrappedTypeData => |d, f| { one(d.type_node, f); });
children!(TypeOperatorData => |d, f| { one(d.type_node, f); });
children!(IndexedAccessTypeData => |d, f| { one(d.object_type, f); one(d.index_type, f); });
children!(ConditionalTypeData => |d, f| {
    one(d.check_type, f);
    one(d.extends_type, f);
    one(d.true_type, f);
    one(d.false_type, f);
});
children!(InferTypeData => |d, f| { one(d.type_parameter, f); });
children!(MappedTypeData => |d, f| {
    one(d.readonly_token, f);
    one(d.type_parameter, f);
    one(d.name_type, f);
    one(d.question_token, f);
    one(d.type_node, f);
});
children!(LiteralTypeData => |d, f| { one(d.literal, f); });
children!(TypeQueryData => |d, f| { one(d.expr_name, f); opt_list(&d.type_arguments, f); });
children!(TypeLiteralData => |d, f| { list(&d.members, f); });
children!(TypePredicateData => |d, f| { one(d.parameter_name, f); one(d.type_node, f); });
children!(ImportTypeData => |d, f| {
    one(d.argument, f);
    one(d.qualifier, f);
    opt_list(&d.type_arguments, f);
});
children!(NamedTupleMemberData => |d, f| { one(d.name, f); one(d.type_node, f); });
children!(SignatureData => |d, f| {
    opt_list(&d.modifiers, f);
    opt_list(&d.type_parameters, f);
    list(&d.parameters, f);
    one(d.type_annotation, f);
});
children!(IndexSignatureData => |d, f| {
    opt_list(&d.modifiers, f);
    list(&d.parameters, f);
    one(d.type_annotation, f);
});
children!(PropertySignatureData => |d, f| {
    opt_list(&d.modifiers, f);
    one(d.name, f);
    one(d.type_annotation, f);
    one(d.initializer, f);
});
children!(ImportDeclData => |d, f| {
    opt_list(&d.modifiers, f);
    one(d.import_clause, f);
    one(d.module_specifier, f);
});
children!(ImportClauseData => |d, f| { one(d.name, f); one(d.named_bindings, f); });
children!(NamedImportsData => |d, f| { list(&d.elements, f); });
children!(SpecifierData => |d, f| { one(d.property_name, f); one(d.name, f); });
children!(ExportDeclData => |d, f| {
    opt_list(&d.modifiers, f);
    one(d.export_clause, f);
    one(d.module_specifier, f);
});
children!(ExportAssignmentData => |d, f| { opt_list(&d.modifiers, f); one(d.expression, f); });
children!(ImportEqualsData => |d, f| {
    opt_list(&d.decorators, f);
    opt_list(&d.modifiers, f);
    one(d.name, f);
    one(d.module_reference, f);
});
children!(ExternalModuleRefData => |d, f| { one(d.expression, f); });
children!(NamespaceExportDeclData => |d, f| { one(d.name, f); });
children!(EnumData => |d, f| { opt_list(&d.modifiers, f); one(d.name, f); list(&d.members, f); });
children!(EnumMemberData => |d, f| { one(d.name, f); one(d.initializer, f); });
children!(ModuleData => |d, f| { opt_list(&d.modifiers, f); one(d.name, f); one(d.body, f); });
children!(TypeAliasData => |d, f| {
    opt_list(&d.modifiers, f);
    one(d.name, f);
    opt_list(&d.type_parameters, f);
    one(d.type_node, f);
});
children!(BindingPatternData => |d, f| { list(&d.elements, f); });
children!(BindingElementData => |d, f| {
    one(d.property_name, f);
    one(d.name, f);
    one(d.initializer, f);
});
children!(PropertyAssignmentData => |d, f| { one(d.name, f); one(d.initializer, f); });
children!(ShorthandPropertyData => |d, f| {
    one(d.name, f);
    one(d.object_assignment_initializer, f);
});
children!(JsxElementData => |d, f| {
    one(d.opening_element, f);
    list(&d.children, f);
    one(d.closing_element, f);
});
children!(JsxOpeningData => |d, f| {
    one(d.tag_name, f);
    opt_list(&d.type_arguments, f);
    one(d.attributes, f);
});
children!(JsxClosingData => |d, f| { one(d.tag_name, f); });
children!(JsxAttributesData => |d, f| { list(&d.properties, f); });
children!(JsxAttributeData => |d, f| { one(d.name, f); one(d.initializer, f); });
children!(JsxSpreadAttributeData => |d, f| { one(d.expression, f); });
children!(JsxExpressionData => |d, f| { one(d.expression, f); });
children!(SourceFileData => |d, f| { list(&d.statements, f); one(d.end_of_file_token, f); });
