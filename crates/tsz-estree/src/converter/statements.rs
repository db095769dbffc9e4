//! Program, statements and variable declarations.

use super::{Converter, Result};
use crate::ast_node_type::AstNodeType;
use crate::es_node::{EsNode, Value};
use crate::node_utils::declaration_kind;
use tsz_scanner::SyntaxKind;
use tsz_syntax::{
    BlockData, CaseClauseData, CatchClauseData, ExprStatementData, ForInOfData, IfStatementData, JumpData,
    LabeledData, LoopData, Node, NodeIndex, ReturnData, SourceFileData, SwitchData, TryData,
    VariableDeclarationData, VariableListData, VariableStatementData, WithData,
};

impl<'a> Converter<'a> {
    pub(super) fn convert_program(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<SourceFileData>(index, node)?;
        let end = self.get(data.end_of_file_token).map_or(node.end, |eof| eof.end);
        // Leading trivia is outside the program; a file of only trivia starts at its end.
        let start = self.tokens().at_or_after(node.pos).map_or(end, |token| token.start);
        let body = self.statements(&data.statements)?;
        let source_type = if data.external_module_indicator { "module" } else { "script" };
        let program = self
            .builder_span(AstNodeType::Program, start, end)
            .prop("body", body)
            .prop("sourceType", source_type);
        Ok(Some(self.finish(program)))
    }

    pub(super) fn convert_block(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<BlockData>(index, node)?;
        let body = self.statements(&data.statements)?;
        Ok(Some(self.finish(self.builder(AstNodeType::BlockStatement, node).prop("body", body))))
    }

    pub(super) fn convert_expression_statement(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<ExprStatementData>(index, node)?;
        let expression = self.child(data.expression)?;
        let statement = self
            .builder(AstNodeType::ExpressionStatement, node)
            .prop("expression", expression);
        Ok(Some(self.finish(statement)))
    }

    // =========================================================================
    // Variables
    // =========================================================================

    pub(super) fn convert_variable_statement(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<VariableStatementData>(index, node)?;
        let modifiers = data.modifiers.as_ref();
        let Some(list_node) = self.get(data.declaration_list) else {
            return Err(self.structure_error(node.pos, "Variable statement without a declaration list."));
        };
        let list = self.data::<VariableListData>(data.declaration_list, list_node)?;
        let declarations = self.list(&list.declarations)?;
        let declaration = self
            .builder(AstNodeType::VariableDeclaration, node)
            .prop("declarations", declarations)
            .prop("kind", declaration_kind(list_node.flags))
            .prop_opt(
                "declare",
                self.has_modifier(modifiers, SyntaxKind::DeclareKeyword).then_some(true),
            );
        let declaration = self.finish(declaration);
        Ok(Some(self.fix_exports(modifiers, declaration)))
    }

    /// A declaration list outside a variable statement (`for (let x of y)`).
    pub(super) fn convert_variable_declaration_list(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<VariableListData>(index, node)?;
        let declarations = self.list(&data.declarations)?;
        let declaration = self
            .builder(AstNodeType::VariableDeclaration, node)
            .prop("declarations", declarations)
            .prop("kind", declaration_kind(node.flags));
        Ok(Some(self.finish(declaration)))
    }

    pub(super) fn convert_variable_declarator(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<VariableDeclarationData>(index, node)?;
        let id = match self.convert(data.name)? {
            Some(id) => match self.type_annotation(data.type_annotation)? {
                Some(annotation) => {
                    let end = annotation.end();
                    let id = id.into_builder().prop("typeAnnotation", annotation).extend_to(end);
                    Value::from(self.finish(id))
                }
                None => Value::from(id),
            },
            None => Value::Null,
        };
        let init = self.child(data.initializer)?;
        let declarator = self
            .builder(AstNodeType::VariableDeclarator, node)
            .prop("id", id)
            .prop("init", init)
            .prop_opt("definite", data.exclamation_token.then_some(true));
        Ok(Some(self.finish(declarator)))
    }

    // =========================================================================
    // Control flow
    // =========================================================================

    pub(super) fn convert_if(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<IfStatementData>(index, node)?;
        let test = self.child(data.expression)?;
        let consequent = self.child(data.then_statement)?;
        let alternate = self.child(data.else_statement)?;
        let statement = self
            .builder(AstNodeType::IfStatement, node)
            .prop("test", test)
            .prop("consequent", consequent)
            .prop("alternate", alternate);
        Ok(Some(self.finish(statement)))
    }

    /// `for (;;)`, `while` and `do ... while`.
    pub(super) fn convert_loop(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<LoopData>(index, node)?;
        let statement = match node.kind {
            SyntaxKind::ForStatement => {
                let init = self.child(data.initializer)?;
                let test = self.child(data.condition)?;
                let update = self.child(data.incrementor)?;
                let body = self.child(data.statement)?;
                self.builder(AstNodeType::ForStatement, node)
                    .prop("init", init)
                    .prop("test", test)
                    .prop("update", update)
                    .prop("body", body)
            }
            SyntaxKind::DoStatement => {
                let body = self.child(data.statement)?;
                let test = self.child(data.condition)?;
                self.builder(AstNodeType::DoWhileStatement, node)
                    .prop("body", body)
                    .prop("test", test)
            }
            _ => {
                let test = self.child(data.condition)?;
                let body = self.child(data.statement)?;
                self.builder(AstNodeType::WhileStatement, node)
                    .prop("test", test)
                    .prop("body", body)
            }
        };
        Ok(Some(self.finish(statement)))
    }

    pub(super) fn convert_for_in_of(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<ForInOfData>(index, node)?;
        let left = self.child(data.initializer)?;
        let right = self.child(data.expression)?;
        let body = self.child(data.statement)?;
        let statement = if node.kind == SyntaxKind::ForOfStatement {
            self.builder(AstNodeType::ForOfStatement, node)
                .prop("left", left)
                .prop("right", right)
                .prop("body", body)
                .prop("await", data.await_modifier)
        } else {
            self.builder(AstNodeType::ForInStatement, node)
                .prop("left", left)
                .prop("right", right)
                .prop("body", body)
        };
        Ok(Some(self.finish(statement)))
    }

    pub(super) fn convert_jump(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<JumpData>(index, node)?;
        let ty = if node.kind == SyntaxKind::BreakStatement {
            AstNodeType::BreakStatement
        } else {
            AstNodeType::ContinueStatement
        };
        let label = self.child(data.label)?;
        Ok(Some(self.finish(self.builder(ty, node).prop("label", label))))
    }

    pub(super) fn convert_return_or_throw(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<ReturnData>(index, node)?;
        let ty = if node.kind == SyntaxKind::ThrowStatement {
            AstNodeType::ThrowStatement
        } else {
            AstNodeType::ReturnStatement
        };
        let argument = self.child(data.expression)?;
        Ok(Some(self.finish(self.builder(ty, node).prop("argument", argument))))
    }

    pub(super) fn convert_with(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<WithData>(index, node)?;
        let object = self.child(data.expression)?;
        let body = self.child(data.statement)?;
        let statement = self
            .builder(AstNodeType::WithStatement, node)
            .prop("object", object)
            .prop("body", body);
        Ok(Some(self.finish(statement)))
    }

    pub(super) fn convert_labeled(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<LabeledData>(index, node)?;
        let label = self.child(data.label)?;
        let body = self.child(data.statement)?;
        let statement = self
            .builder(AstNodeType::LabeledStatement, node)
            .prop("label", label)
            .prop("body", body);
        Ok(Some(self.finish(statement)))
    }

    // =========================================================================
    // switch / try
    // =========================================================================

    pub(super) fn convert_switch(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<SwitchData>(index, node)?;
        let discriminant = self.child(data.expression)?;
        let cases = match self.get(data.case_block) {
            Some(block_node) => {
                let block = self.data::<BlockData>(data.case_block, block_node)?;
                self.list(&block.statements)?
            }
            None => Value::Array(Vec::new()),
        };
        let statement = self
            .builder(AstNodeType::SwitchStatement, node)
            .prop("discriminant", discriminant)
            .prop("cases", cases);
        Ok(Some(self.finish(statement)))
    }

    pub(super) fn convert_case_clause(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<CaseClauseData>(index, node)?;
        let test = self.child(data.expression)?;
        let consequent = self.statements(&data.statements)?;
        let case = self
            .builder(AstNodeType::SwitchCase, node)
            .prop("test", test)
            .prop("consequent", consequent);
        Ok(Some(self.finish(case)))
    }

    pub(super) fn convert_try(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<TryData>(index, node)?;
        let block = self.child(data.try_block)?;
        let handler = self.child(data.catch_clause)?;
        let finalizer = self.child(data.finally_block)?;
        let statement = self
            .builder(AstNodeType::TryStatement, node)
            .prop("block", block)
            .prop("handler", handler)
            .prop("finalizer", finalizer);
        Ok(Some(self.finish(statement)))
    }

    pub(super) fn convert_catch_clause(&mut self, index: NodeIndex, node: &Node) -> Result<Option<EsNode>> {
        let data = self.data::<CatchClauseData>(index, node)?;
        let param = match self.get(data.variable_declaration) {
            Some(declaration_node) => {
                let declaration =
                    self.data::<VariableDeclarationData>(data.variable_declaration, declaration_node)?;
                self.child(declaration.name)?
            }
            None => Value::Null,
        };
        let body = self.child(data.block)?;
        let clause = self
            .builder(AstNodeType::CatchClause, node)
            .prop("param", param)
            .prop("body", body);
        Ok(Some(self.finish(clause)))
    }
}
