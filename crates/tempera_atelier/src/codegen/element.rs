//! Element emission: standard elements, raw-text elements, script elements,
//! and HTML comments.

use tempera_carton::SmallVec;
use tempera_relief::{
    Attribute, Element, Expression, ExpressionAttribute, HtmlComment, Range, RawElement,
    ScriptContents, ScriptElement, TrailingSpace,
};

use super::helpers::{escape_html, is_script_attribute};
use super::{strip_whitespace, Generator};
use crate::errors::Result;

impl<'a, W: std::io::Write> Generator<'a, W> {
    pub(crate) fn write_element(&mut self, indent_level: u32, n: &'a Element) -> Result<()> {
        if n.attributes.is_empty() {
            self.w
                .write_string_literal(indent_level, &format!("<{}>", escape_html(&n.name)))?;
        } else {
            // CSS and script handling may emit statements ahead of the
            // element, and the CSS pass rewrites class attributes, so it
            // operates on a copy.
            let mut attrs = n.attributes.clone();
            self.write_attributes_css(indent_level, &mut attrs)?;
            self.write_element_script(indent_level, &attrs)?;
            self.w
                .write_string_literal(indent_level, &format!("<{}", escape_html(&n.name)))?;
            self.write_element_attributes(indent_level, &n.name, &attrs)?;
            self.w.write_string_literal(indent_level, ">")?;
        }
        // Void elements have no children and no close tag.
        if n.is_void_element() && n.children.is_empty() {
            return Ok(());
        }
        self.write_nodes(indent_level, &strip_whitespace(&n.children), None)?;
        self.w
            .write_string_literal(indent_level, &format!("</{}>", escape_html(&n.name)))?;
        Ok(())
    }

    /// Render class expressions ahead of the element and rewrite each one so
    /// that attribute emission reads the rendered class list.
    pub(crate) fn write_attributes_css(
        &mut self,
        indent_level: u32,
        attrs: &mut [Attribute],
    ) -> Result<()> {
        for attr in attrs.iter_mut() {
            match attr {
                Attribute::Expression(ea) => {
                    if let Some(rewritten) = self.write_attribute_css(indent_level, ea)? {
                        *ea = rewritten;
                    }
                }
                Attribute::Conditional(ca) => {
                    self.write_attributes_css(indent_level, &mut ca.then)?;
                    self.write_attributes_css(indent_level, &mut ca.else_branch)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn write_attribute_css(
        &mut self,
        indent_level: u32,
        attr: &ExpressionAttribute,
    ) -> Result<Option<ExpressionAttribute>> {
        if escape_html(attr.key.text()) != "class" {
            return Ok(None);
        }
        // The expression may be a templ.Classes call or anything that can
        // appear in a heterogeneous class slot list.
        let classes_name = self.create_variable_name();
        self.w
            .write_indent(indent_level, &format!("var {classes_name} = []any{{"))?;
        let r = self.w.write(&attr.expression.value)?;
        self.source_map.add_expression(&attr.expression, r);
        self.w.write("}\n")?;
        self.w.write_indent(
            indent_level,
            &format!(
                "templ_7745c5c3_Err = templ.RenderCSSItems(ctx, templ_7745c5c3_Buffer, {classes_name}...)\n"
            ),
        )?;
        self.write_error_handler(indent_level)?;
        // Point the attribute at the rendered class list.
        Ok(Some(ExpressionAttribute {
            key: attr.key.clone(),
            expression: Expression::new(
                format!("templ.CSSClasses({classes_name}).String()"),
                Range::default(),
            ),
        }))
    }

    /// Render any event-handler scripts ahead of the element.
    pub(crate) fn write_element_script(
        &mut self,
        indent_level: u32,
        attrs: &[Attribute],
    ) -> Result<()> {
        let mut script_expressions: SmallVec<[&str; 4]> = SmallVec::new();
        for attr in attrs {
            collect_attribute_scripts(attr, &mut script_expressions);
        }
        if script_expressions.is_empty() {
            return Ok(());
        }
        self.w.write_indent(
            indent_level,
            &format!(
                "templ_7745c5c3_Err = templ.RenderScriptItems(ctx, templ_7745c5c3_Buffer, {})\n",
                script_expressions.join(", ")
            ),
        )?;
        self.write_error_handler(indent_level)?;
        Ok(())
    }

    pub(crate) fn write_raw_element(&mut self, indent_level: u32, n: &RawElement) -> Result<()> {
        if n.attributes.is_empty() {
            self.w
                .write_string_literal(indent_level, &format!("<{}>", escape_html(&n.name)))?;
        } else {
            self.write_element_script(indent_level, &n.attributes)?;
            self.w
                .write_string_literal(indent_level, &format!("<{}", escape_html(&n.name)))?;
            self.write_element_attributes(indent_level, &n.name, &n.attributes)?;
            self.w.write_string_literal(indent_level, ">")?;
        }
        // Contents pass through as a single text run.
        self.w.write_string_literal(indent_level, &n.contents)?;
        self.w
            .write_string_literal(indent_level, &format!("</{}>", escape_html(&n.name)))?;
        Ok(())
    }

    pub(crate) fn write_script_element(&mut self, indent_level: u32, n: &ScriptElement) -> Result<()> {
        if n.attributes.is_empty() {
            self.w.write_string_literal(indent_level, "<script>")?;
        } else {
            self.write_element_script(indent_level, &n.attributes)?;
            self.w.write_string_literal(indent_level, "<script")?;
            self.write_element_attributes(indent_level, "script", &n.attributes)?;
            self.w.write_string_literal(indent_level, ">")?;
        }
        for c in &n.contents {
            self.write_script_contents(indent_level, c)?;
        }
        self.w.write_string_literal(indent_level, "</script>")?;
        Ok(())
    }

    fn write_script_contents(&mut self, indent_level: u32, c: &ScriptContents) -> Result<()> {
        match c {
            // Literal JavaScript is written directly to the output.
            ScriptContents::Script(value) => {
                if value.is_empty() {
                    return Ok(());
                }
                self.w.write_string_literal(indent_level, value)?;
                Ok(())
            }
            // A Go expression is evaluated and its result serialized so it
            // is safe to place within a script tag.
            ScriptContents::GoCode {
                code,
                inside_string_literal,
            } => {
                let vn = self.create_variable_name();
                let fn_call = if *inside_string_literal {
                    "templruntime.ScriptContentInsideStringLiteral"
                } else {
                    "templruntime.ScriptContentOutsideStringLiteral"
                };
                self.w.write_indent(
                    indent_level,
                    &format!("{vn}, templ_7745c5c3_Err := {fn_call}("),
                )?;
                let r = self.w.write(&code.expression.value)?;
                self.source_map.add_expression(&code.expression, r);
                self.w.write(")\n")?;
                self.write_expression_error_handler(indent_level, &code.expression)?;
                self.w.write_indent(
                    indent_level,
                    &format!("_, templ_7745c5c3_Err = templ_7745c5c3_Buffer.WriteString({vn})\n"),
                )?;
                self.write_error_handler(indent_level)?;
                if code.trailing_space != TrailingSpace::None {
                    self.w
                        .write_string_literal(indent_level, code.trailing_space.as_str())?;
                }
                Ok(())
            }
        }
    }

    pub(crate) fn write_comment(&mut self, indent_level: u32, c: &HtmlComment) -> Result<()> {
        self.w.write_string_literal(indent_level, "<!--")?;
        self.w.write_string_literal(indent_level, &c.contents)?;
        self.w.write_string_literal(indent_level, "-->")?;
        Ok(())
    }
}

fn collect_attribute_scripts<'n>(attr: &'n Attribute, scripts: &mut SmallVec<[&'n str; 4]>) {
    match attr {
        Attribute::Conditional(c) => {
            for attr in &c.then {
                collect_attribute_scripts(attr, scripts);
            }
            for attr in &c.else_branch {
                collect_attribute_scripts(attr, scripts);
            }
        }
        Attribute::Expression(e) => {
            if is_script_attribute(e.key.text()) {
                scripts.push(&e.expression.value);
            }
        }
        _ => {}
    }
}
