//! Import and export declarations.

use super::{Converter, Result};
use crate::ast_node_type::AstNodeType;
use crate::es_node::{EsNode, Value};
use tsz_scanner::SyntaxKind;
use tsz_syntax::{
    ExportAssignmentData, ExportDeclData, ImportClauseData, ImportDeclData, NamedImportsData, Node, NodeIndex,
    SpecifierData,
};

impl<'a> Converter<'a> {
    pub(super) fn convert_import_declaration(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<ImportDeclData>(index, node)?;
        let source = self.child(data.module_specifier)?;
        let mut specifiers = Vec::new();

        if let Some(clause_node) = self.get(data.import_clause) {
            let clause = self.data::<ImportClauseData>(data.import_clause, clause_node)?;
            if let Some(name_node) = self.get(clause.name) {
                let local = self.child(clause.name)?;
                let default = self
                    .builder_span(AstNodeType::ImportDefaultSpecifier, clause_node.pos, name_node.end)
                    .prop("local", local);
                specifiers.push(Value::from(self.finish(default)));
            }
            if let Some(bindings) = self.get(clause.named_bindings) {
                match bindings.kind {
                    SyntaxKind::NamespaceImport => {
                        if let Some(namespace) = self.convert(clause.named_bindings)? {
                            specifiers.push(namespace.into());
                        }
                    }
                    _ => {
                        let named = self.data::<NamedImportsData>(clause.named_bindings, bindings)?;
                        for element in named.elements.iter() {
                            if let Some(specifier) = self.convert(element)? {
                                specifiers.push(specifier.into());
                            }
                        }
                    }
                }
            }
        }

        let import = self
            .builder(AstNodeType::ImportDeclaration, node)
            .prop("source", source)
            .prop("specifiers", Value::Array(specifiers));
        Ok(Some(self.finish(import)))
    }

    pub(super) fn convert_import_specifier(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<SpecifierData>(index, node)?;
        let local = self.child(data.name)?;
        let imported = if data.property_name.is_some() {
            self.child(data.property_name)?
        } else {
            self.child(data.name)?
        };
        let specifier = self
            .builder(AstNodeType::ImportSpecifier, node)
            .prop("local", local)
            .prop("imported", imported);
        Ok(Some(self.finish(specifier)))
    }

    pub(super) fn convert_namespace_import(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<SpecifierData>(index, node)?;
        let local = self.child(data.name)?;
        let specifier = self
            .builder(AstNodeType::ImportNamespaceSpecifier, node)
            .prop("local", local);
        Ok(Some(self.finish(specifier)))
    }

    // =========================================================================
    // Exports
    // =========================================================================

    pub(super) fn convert_export_declaration(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<ExportDeclData>(index, node)?;
        let source = self.child(data.module_specifier)?;

        let export = match self.get(data.export_clause) {
            Some(clause) if clause.kind == SyntaxKind::NamedExports => {
                let named = self.data::<NamedImportsData>(data.export_clause, clause)?;
                let specifiers = self.list(&named.elements)?;
                self.builder(AstNodeType::ExportNamedDeclaration, node)
                    .prop("declaration", Value::Null)
                    .prop("specifiers", specifiers)
                    .prop("source", source)
            }
            // export * as ns from "m"
            Some(clause) => {
                let namespace = self.data::<SpecifierData>(data.export_clause, clause)?;
                let exported = self.child(namespace.name)?;
                self.builder(AstNodeType::ExportAllDeclaration, node)
                    .prop("source", source)
                    .prop("exported", exported)
            }
            None => self
                .builder(AstNodeType::ExportAllDeclaration, node)
                .prop("source", source),
        };
        Ok(Some(self.finish(export)))
    }

    pub(super) fn convert_export_specifier(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<SpecifierData>(index, node)?;
        let local = if data.property_name.is_some() {
            self.child(data.property_name)?
        } else {
            self.child(data.name)?
        };
        let exported = self.child(data.name)?;
        let specifier = self
            .builder(AstNodeType::ExportSpecifier, node)
            .prop("local", local)
            .prop("exported", exported);
        Ok(Some(self.finish(specifier)))
    }

    /// `export = x` and `export default x`.
    pub(super) fn convert_export_assignment(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<ExportAssignmentData>(index, node)?;
        let expression = self.child(data.expression)?;
        let export = if data.is_export_equals {
            self.builder(AstNodeType::TSExportAssignment, node)
                .prop("expression", expression)
        } else {
            self.builder(AstNodeType::ExportDefaultDeclaration, node)
                .prop("declaration", expression)
        };
        Ok(Some(self.finish(export)))
    }
}
