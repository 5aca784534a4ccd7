//! The code generator.
//!
//! A visitor over the template AST that emits Go source through the range
//! writer, registering a source-map entry every time an embedded Go
//! expression passes through and a symbol range around every top-level
//! declaration.
//!
//! Emission is deterministic: the fresh-variable counter starts at zero for
//! every generation and nothing depends on time, addresses, or map order.

mod attributes;
mod control_flow;
mod css;
mod element;
pub(crate) mod helpers;
mod script;

use tempera_carton::String;
use tempera_relief::{
    CallTemplateExpression, DocType, Expression, Node, Range, TemplElementExpression, TemplateFile,
    TemplateFileNode, Text, TrailingSpace, Whitespace,
};

use crate::errors::Result;
use crate::options::GeneratorOptions;
use crate::range_writer::RangeWriter;
use crate::source_map::SourceMap;
use helpers::create_go_string;

/// A constant identifier prefix keeps generated symbols unlikely to collide
/// with user code.
pub(crate) const VAR_PREFIX: &str = "templ_7745c5c3_Var";

pub(crate) struct Generator<'a, W> {
    pub(crate) tf: &'a TemplateFile,
    pub(crate) w: RangeWriter<W>,
    pub(crate) source_map: SourceMap,
    pub(crate) options: GeneratorOptions,
    pub(crate) variable_id: u64,
    /// Name of the variable holding the current template's incoming
    /// children component. Set once per HTML template.
    pub(crate) children_var: String,
}

impl<'a, W: std::io::Write> Generator<'a, W> {
    pub(crate) fn new(tf: &'a TemplateFile, w: W, options: GeneratorOptions) -> Self {
        Self {
            tf,
            w: RangeWriter::new(w),
            source_map: SourceMap::new(),
            options,
            variable_id: 0,
            children_var: String::default(),
        }
    }

    pub(crate) fn into_output(self) -> crate::GeneratorOutput {
        crate::GeneratorOutput {
            options: self.options,
            source_map: self.source_map,
            literals: self.w.into_literals(),
        }
    }

    pub(crate) fn generate(&mut self) -> Result<()> {
        self.write_code_generated_comment()?;
        self.write_version_comment()?;
        self.write_generated_date_comment()?;
        self.write_header()?;
        self.write_package()?;
        self.write_imports()?;
        self.write_template_nodes()?;
        self.write_blank_assignment_for_runtime_import()?;
        Ok(())
    }

    pub(crate) fn create_variable_name(&mut self) -> String {
        self.variable_id += 1;
        format!("{VAR_PREFIX}{}", self.variable_id).into()
    }

    // Automatically generated files carry a marker comment in the header
    // that instructs editor tooling to stop operating on the file. The
    // language server asks for it to be skipped; an empty comment keeps the
    // file the same shape.
    fn write_code_generated_comment(&mut self) -> Result<()> {
        if self.options.skip_code_generated_comment {
            self.w.write("//\n\n")?;
            return Ok(());
        }
        self.w.write("// Code generated by templ - DO NOT EDIT.\n\n")?;
        Ok(())
    }

    fn write_version_comment(&mut self) -> Result<()> {
        if !self.options.version.is_empty() {
            let line = format!("// templ: version: {}\n", self.options.version);
            self.w.write(&line)?;
        }
        Ok(())
    }

    fn write_generated_date_comment(&mut self) -> Result<()> {
        if !self.options.generated_date.is_empty() {
            let line = format!("// templ: generated: {}\n", self.options.generated_date);
            self.w.write(&line)?;
        }
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        let tf = self.tf;
        for n in &tf.header {
            self.write_go_expression(n, false)?;
        }
        Ok(())
    }

    fn write_package(&mut self) -> Result<()> {
        let tf = self.tf;
        let r = self.w.write(&format!("{}\n\n", tf.package_expr.value))?;
        self.source_map.add_expression(&tf.package_expr, r);
        self.w.write(
            "//lint:file-ignore SA4006 This context is only used if a nested component is present.\n\n",
        )?;
        Ok(())
    }

    fn write_imports(&mut self) -> Result<()> {
        // Always import templ because it's the interface type of all
        // templates.
        self.w.write("import \"github.com/a-h/templ\"\n")?;
        self.w
            .write("import templruntime \"github.com/a-h/templ/runtime\"\n")?;
        self.w.write("\n")?;
        Ok(())
    }

    fn write_template_nodes(&mut self) -> Result<()> {
        let tf = self.tf;
        let count = tf.nodes.len();
        for (i, n) in tf.nodes.iter().enumerate() {
            let is_last = i + 1 >= count;
            match n {
                TemplateFileNode::GoCode(e) => self.write_go_expression(e, is_last)?,
                TemplateFileNode::HtmlTemplate(t) => self.write_template(t, is_last)?,
                TemplateFileNode::CssTemplate(c) => self.write_css(c, is_last)?,
                TemplateFileNode::ScriptTemplate(s) => self.write_script(s, is_last)?,
            }
        }
        Ok(())
    }

    fn write_go_expression(&mut self, n: &Expression, is_last: bool) -> Result<()> {
        let r = self.w.write(&n.value)?;
        let symbol_from = r.from;
        self.source_map.add_expression(n, r);
        // A block ending in a line comment would swallow the separator, so
        // only a newline is appended after it.
        let last_line = n.value.split('\n').next_back().unwrap_or("");
        let separator = if last_line.starts_with("//") || is_last {
            "\n"
        } else {
            "\n\n"
        };
        let r = self.w.write_indent(0, separator)?;
        self.source_map
            .add_symbol(n.range, Range::new(symbol_from, r.to));
        Ok(())
    }

    fn write_template(&mut self, t: &'a tempera_relief::HtmlTemplate, is_last: bool) -> Result<()> {
        let r = self.w.write("func ")?;
        let symbol_from = r.from;
        let r = self.w.write(&t.expression.value)?;
        self.source_map.add_expression(&t.expression, r);
        self.w.write(" templ.Component {\n")?;
        self.w.write_indent(
            1,
            "return templruntime.GeneratedTemplate(func(templ_7745c5c3_Input templruntime.GeneratedComponentInput) (templ_7745c5c3_Err error) {\n",
        )?;
        {
            self.w.write_indent(
                2,
                "templ_7745c5c3_W, ctx := templ_7745c5c3_Input.Writer, templ_7745c5c3_Input.Context\n",
            )?;
            self.w.write_indent(
                2,
                "if templ_7745c5c3_CtxErr := ctx.Err(); templ_7745c5c3_CtxErr != nil {\n",
            )?;
            self.w.write_indent(3, "return templ_7745c5c3_CtxErr\n")?;
            self.w.write_indent(2, "}\n")?;
            self.write_templ_buffer(2)?;
            self.w.write_indent(2, "ctx = templ.InitializeContext(ctx)\n")?;
            self.children_var = self.create_variable_name();
            self.w.write_indent(
                2,
                &format!("{} := templ.GetChildren(ctx)\n", self.children_var),
            )?;
            self.w
                .write_indent(2, &format!("if {} == nil {{\n", self.children_var))?;
            self.w
                .write_indent(3, &format!("{} = templ.NopComponent\n", self.children_var))?;
            self.w.write_indent(2, "}\n")?;
            self.w.write_indent(2, "ctx = templ.ClearChildren(ctx)\n")?;
            self.write_nodes(2, &strip_whitespace(&t.children), None)?;
            self.w.write_indent(2, "return nil\n")?;
        }
        self.w.write_indent(1, "})\n")?;

        let closing_brace = if is_last { "}\n" } else { "}\n\n" };
        let r = self.w.write_indent(0, closing_brace)?;
        self.source_map
            .add_symbol(t.range, Range::new(symbol_from, r.to));
        Ok(())
    }

    /// Acquire the pooled render buffer, releasing it on exit in a way that
    /// preserves any error the body already produced.
    pub(crate) fn write_templ_buffer(&mut self, indent_level: u32) -> Result<()> {
        self.w.write_indent(
            indent_level,
            "templ_7745c5c3_Buffer, templ_7745c5c3_IsBuffer := templruntime.GetBuffer(templ_7745c5c3_W)\n",
        )?;
        self.w
            .write_indent(indent_level, "if !templ_7745c5c3_IsBuffer {\n")?;
        {
            self.w.write_indent(indent_level + 1, "defer func() {\n")?;
            {
                self.w.write_indent(
                    indent_level + 2,
                    "templ_7745c5c3_BufErr := templruntime.ReleaseBuffer(templ_7745c5c3_Buffer)\n",
                )?;
                self.w
                    .write_indent(indent_level + 2, "if templ_7745c5c3_Err == nil {\n")?;
                self.w
                    .write_indent(indent_level + 3, "templ_7745c5c3_Err = templ_7745c5c3_BufErr\n")?;
                self.w.write_indent(indent_level + 2, "}\n")?;
            }
            self.w.write_indent(indent_level + 1, "}()\n")?;
        }
        self.w.write_indent(indent_level, "}\n")?;
        Ok(())
    }

    pub(crate) fn write_nodes(
        &mut self,
        indent_level: u32,
        nodes: &[&'a Node],
        next: Option<&'a Node>,
    ) -> Result<()> {
        for (i, curr) in nodes.iter().enumerate() {
            let next_node = nodes.get(i + 1).copied().or(next);
            self.write_node(indent_level, curr, next_node)?;
        }
        Ok(())
    }

    fn write_node(&mut self, indent_level: u32, current: &'a Node, next: Option<&'a Node>) -> Result<()> {
        match current {
            Node::DocType(n) => self.write_doc_type(indent_level, n)?,
            Node::Element(n) => self.write_element(indent_level, n)?,
            Node::HtmlComment(n) => self.write_comment(indent_level, n)?,
            Node::ChildrenExpression => self.write_children_expression(indent_level)?,
            Node::RawElement(n) => self.write_raw_element(indent_level, n)?,
            Node::ScriptElement(n) => self.write_script_element(indent_level, n)?,
            Node::For(n) => self.write_for_expression(indent_level, n, next)?,
            Node::CallTemplate(n) => self.write_call_template_expression(indent_level, n)?,
            Node::TemplElement(n) => self.write_templ_element_expression(indent_level, n)?,
            Node::If(n) => self.write_if_expression(indent_level, n, next)?,
            Node::Switch(n) => self.write_switch_expression(indent_level, n, next)?,
            Node::StringExpression(n) => self.write_string_expression(indent_level, &n.expression)?,
            Node::GoCode(n) => self.write_go_code(indent_level, &n.expression)?,
            Node::Whitespace(n) => self.write_whitespace(indent_level, n)?,
            Node::Text(n) => self.write_text(indent_level, n)?,
            // Go comments are not rendered in the output HTML.
            Node::GoComment(_) => return Ok(()),
        }
        // Write trailing whitespace if a following node might need the
        // separation. Block elements never do.
        if is_inline_or_text(Some(current)) && is_inline_or_text(next) {
            self.write_whitespace_trailer(indent_level, current.trailing_space())?;
        }
        Ok(())
    }

    fn write_whitespace_trailer(&mut self, indent_level: u32, n: TrailingSpace) -> Result<()> {
        if n == TrailingSpace::None {
            return Ok(());
        }
        // Normalize for minified output: in HTML, a single space is
        // equivalent to any run of spaces, tabs, or newlines.
        let n = n.normalized();
        self.w.write_string_literal(indent_level, n.as_str())?;
        Ok(())
    }

    fn write_doc_type(&mut self, indent_level: u32, n: &DocType) -> Result<()> {
        self.w
            .write_string_literal(indent_level, &format!("<!doctype {}>", n.value))?;
        Ok(())
    }

    pub(crate) fn write_children_expression(&mut self, indent_level: u32) -> Result<()> {
        self.w.write_indent(
            indent_level,
            &format!(
                "templ_7745c5c3_Err = {}.Render(ctx, templ_7745c5c3_Buffer)\n",
                self.children_var
            ),
        )?;
        self.write_error_handler(indent_level)?;
        Ok(())
    }

    fn write_templ_element_expression(
        &mut self,
        indent_level: u32,
        n: &'a TemplElementExpression,
    ) -> Result<()> {
        if n.children.is_empty() {
            return self.write_self_closing_templ_element_expression(indent_level, n);
        }
        self.write_block_templ_element_expression(indent_level, n)
    }

    fn write_block_templ_element_expression(
        &mut self,
        indent_level: u32,
        n: &'a TemplElementExpression,
    ) -> Result<()> {
        let children_name = self.create_variable_name();
        self.w.write_indent(
            indent_level,
            &format!(
                "{children_name} := templruntime.GeneratedTemplate(func(templ_7745c5c3_Input templruntime.GeneratedComponentInput) (templ_7745c5c3_Err error) {{\n"
            ),
        )?;
        self.w.write_indent(
            indent_level + 1,
            "templ_7745c5c3_W, ctx := templ_7745c5c3_Input.Writer, templ_7745c5c3_Input.Context\n",
        )?;
        self.write_templ_buffer(indent_level + 1)?;
        self.w
            .write_indent(indent_level + 1, "ctx = templ.InitializeContext(ctx)\n")?;
        self.write_nodes(
            indent_level + 1,
            &strip_leading_and_trailing_whitespace(&n.children),
            None,
        )?;
        self.w.write_indent(indent_level + 1, "return nil\n")?;
        self.w.write_indent(indent_level, "})\n")?;
        self.w.write_indent(indent_level, "templ_7745c5c3_Err = ")?;
        let r = self.w.write(&n.expression.value)?;
        self.source_map.add_expression(&n.expression, r);
        self.w.write(&format!(
            ".Render(templ.WithChildren(ctx, {children_name}), templ_7745c5c3_Buffer)\n"
        ))?;
        self.write_error_handler(indent_level)?;
        Ok(())
    }

    fn write_self_closing_templ_element_expression(
        &mut self,
        indent_level: u32,
        n: &TemplElementExpression,
    ) -> Result<()> {
        self.w.write_indent(indent_level, "templ_7745c5c3_Err = ")?;
        let r = self.w.write(&n.expression.value)?;
        self.source_map.add_expression(&n.expression, r);
        self.w.write(".Render(ctx, templ_7745c5c3_Buffer)\n")?;
        self.write_error_handler(indent_level)?;
        Ok(())
    }

    fn write_call_template_expression(
        &mut self,
        indent_level: u32,
        n: &CallTemplateExpression,
    ) -> Result<()> {
        self.w.write_indent(indent_level, "templ_7745c5c3_Err = ")?;
        let r = self.w.write(&n.expression.value)?;
        self.source_map.add_expression(&n.expression, r);
        self.w.write(".Render(ctx, templ_7745c5c3_Buffer)\n")?;
        self.write_error_handler(indent_level)?;
        Ok(())
    }

    pub(crate) fn write_error_handler(&mut self, indent_level: u32) -> Result<()> {
        self.w
            .write_indent(indent_level, "if templ_7745c5c3_Err != nil {\n")?;
        self.w
            .write_indent(indent_level + 1, "return templ_7745c5c3_Err\n")?;
        self.w.write_indent(indent_level, "}\n")?;
        Ok(())
    }

    /// Emit the handler that converts a non-nil error from a user expression
    /// into a structured error carrying the source position of that
    /// expression, not the generated one.
    pub(crate) fn write_expression_error_handler(
        &mut self,
        indent_level: u32,
        expression: &Expression,
    ) -> Result<()> {
        self.w
            .write_indent(indent_level, "if templ_7745c5c3_Err != nil {\n")?;
        let line = expression.range.to.line + 1;
        let col = expression.range.to.col;
        let ret = format!(
            "return templ.Error{{Err: templ_7745c5c3_Err, FileName: {}, Line: {}, Col: {}}}\n",
            create_go_string(&self.options.file_name),
            line,
            col
        );
        self.w.write_indent(indent_level + 1, &ret)?;
        self.w.write_indent(indent_level, "}\n")?;
        Ok(())
    }

    pub(crate) fn write_go_code(&mut self, indent_level: u32, e: &Expression) -> Result<()> {
        if e.value.trim().is_empty() {
            return Ok(());
        }
        let r = self.w.write_indent(indent_level, &format!("{}\n", e.value))?;
        self.source_map.add_expression(e, r);
        Ok(())
    }

    pub(crate) fn write_string_expression(&mut self, indent_level: u32, e: &Expression) -> Result<()> {
        if e.value.trim().is_empty() {
            return Ok(());
        }
        let vn = self.create_variable_name();
        self.w.write_indent(indent_level, &format!("var {vn} string\n"))?;
        self.w.write_indent(
            indent_level,
            &format!("{vn}, templ_7745c5c3_Err = templ.JoinStringErrs("),
        )?;
        let r = self.w.write(&e.value)?;
        self.source_map.add_expression(e, r);
        self.w.write(")\n")?;
        self.write_expression_error_handler(indent_level, e)?;
        self.w.write_indent(
            indent_level,
            &format!(
                "_, templ_7745c5c3_Err = templ_7745c5c3_Buffer.WriteString(templ.EscapeString({vn}))\n"
            ),
        )?;
        self.write_error_handler(indent_level)?;
        Ok(())
    }

    fn write_whitespace(&mut self, indent_level: u32, n: &Whitespace) -> Result<()> {
        if n.value.is_empty() {
            return Ok(());
        }
        // Whitespace runs collapse to a single space in the output.
        self.w.write_string_literal(indent_level, " ")?;
        Ok(())
    }

    pub(crate) fn write_text(&mut self, indent_level: u32, n: &Text) -> Result<()> {
        self.w.write_string_literal(indent_level, &n.value)?;
        Ok(())
    }

    // Ensures that even if the runtime package is otherwise unused in the
    // generated code, the Go compiler will not complain about the import.
    fn write_blank_assignment_for_runtime_import(&mut self) -> Result<()> {
        self.w.write("var _ = templruntime.GeneratedTemplate")?;
        Ok(())
    }
}

/// Nodes that render inline: no whitespace is stripped between them at
/// runtime. Control flow counts as inline because its rendered contents are.
fn is_inline_or_text(node: Option<&Node>) -> bool {
    match node {
        None => false,
        Some(n) => match n {
            Node::If(_) | Node::Switch(_) | Node::For(_) | Node::Text(_) | Node::StringExpression(_) => {
                true
            }
            Node::Element(e) => !e.is_block_element(),
            _ => false,
        },
    }
}

/// Remove all whitespace nodes. Used where block structure governs layout.
pub(crate) fn strip_whitespace(nodes: &[Node]) -> Vec<&Node> {
    nodes
        .iter()
        .filter(|n| !matches!(n, Node::Whitespace(_)))
        .collect()
}

/// Remove only edge whitespace. Used inside control-flow bodies, where
/// interior whitespace still separates inline content.
pub(crate) fn strip_leading_and_trailing_whitespace(nodes: &[Node]) -> Vec<&Node> {
    let Some(start) = nodes.iter().position(|n| !matches!(n, Node::Whitespace(_))) else {
        return Vec::new();
    };
    let end = nodes
        .iter()
        .rposition(|n| !matches!(n, Node::Whitespace(_)))
        .unwrap_or(start);
    nodes[start..=end].iter().collect()
}
