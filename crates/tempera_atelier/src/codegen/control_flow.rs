//! Control-flow emission: if/else-if/else, switch, and for.
//!
//! Bodies keep interior whitespace but lose their edges, so a branch can
//! still separate inline content without introducing space at its
//! boundaries.

use tempera_relief::{ForExpression, IfExpression, Node, SwitchExpression};

use super::{strip_leading_and_trailing_whitespace, Generator};
use crate::errors::Result;

impl<'a, W: std::io::Write> Generator<'a, W> {
    pub(crate) fn write_if_expression(
        &mut self,
        indent_level: u32,
        n: &'a IfExpression,
        next: Option<&'a Node>,
    ) -> Result<()> {
        self.w.write_indent(indent_level, "if ")?;
        let r = self.w.write(&n.expression.value)?;
        self.source_map.add_expression(&n.expression, r);
        self.w.write(" {\n")?;
        self.write_nodes(
            indent_level + 1,
            &strip_leading_and_trailing_whitespace(&n.then),
            next,
        )?;
        for else_if in &n.else_ifs {
            self.w.write_indent(indent_level, "} else if ")?;
            let r = self.w.write(&else_if.expression.value)?;
            self.source_map.add_expression(&else_if.expression, r);
            self.w.write(" {\n")?;
            self.write_nodes(
                indent_level + 1,
                &strip_leading_and_trailing_whitespace(&else_if.then),
                next,
            )?;
        }
        if !n.else_branch.is_empty() {
            self.w.write_indent(indent_level, "} else {\n")?;
            self.write_nodes(
                indent_level + 1,
                &strip_leading_and_trailing_whitespace(&n.else_branch),
                next,
            )?;
        }
        self.w.write_indent(indent_level, "}\n")?;
        Ok(())
    }

    pub(crate) fn write_switch_expression(
        &mut self,
        indent_level: u32,
        n: &'a SwitchExpression,
        next: Option<&'a Node>,
    ) -> Result<()> {
        self.w.write_indent(indent_level, "switch ")?;
        let r = self.w.write(&n.expression.value)?;
        self.source_map.add_expression(&n.expression, r);
        self.w.write(" {\n")?;
        for case in &n.cases {
            // The case expression carries its own label, colon, and newline.
            let r = self.w.write_indent(indent_level, &case.expression.value)?;
            self.source_map.add_expression(&case.expression, r);
            self.write_nodes(
                indent_level + 1,
                &strip_leading_and_trailing_whitespace(&case.children),
                next,
            )?;
        }
        self.w.write_indent(indent_level, "}\n")?;
        Ok(())
    }

    pub(crate) fn write_for_expression(
        &mut self,
        indent_level: u32,
        n: &'a ForExpression,
        next: Option<&'a Node>,
    ) -> Result<()> {
        self.w.write_indent(indent_level, "for ")?;
        let r = self.w.write(&n.expression.value)?;
        self.source_map.add_expression(&n.expression, r);
        self.w.write(" {\n")?;
        self.write_nodes(
            indent_level + 1,
            &strip_leading_and_trailing_whitespace(&n.children),
            next,
        )?;
        self.w.write_indent(indent_level, "}\n")?;
        Ok(())
    }
}
