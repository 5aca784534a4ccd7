//! Attribute emission.
//!
//! Expression attribute values are context-sensitive: URL attributes,
//! JavaScript handlers, and style attributes each route through a dedicated
//! runtime helper before anything reaches the buffer.

use tempera_relief::{
    Attribute, AttributeKey, BoolConstantAttribute, BoolExpressionAttribute, ConditionalAttribute,
    ConstantAttribute, ExpressionAttribute, SpreadAttributes,
};

use super::helpers::{escape_html, is_script_attribute, is_url_attribute};
use super::Generator;
use crate::errors::Result;

impl<W: std::io::Write> Generator<'_, W> {
    pub(crate) fn write_element_attributes(
        &mut self,
        indent_level: u32,
        element_name: &str,
        attrs: &[Attribute],
    ) -> Result<()> {
        for attr in attrs {
            match attr {
                Attribute::BoolConstant(a) => self.write_bool_constant_attribute(indent_level, a)?,
                Attribute::Constant(a) => self.write_constant_attribute(indent_level, a)?,
                Attribute::BoolExpression(a) => {
                    self.write_bool_expression_attribute(indent_level, a)?
                }
                Attribute::Expression(a) => {
                    self.write_expression_attribute(indent_level, element_name, a)?
                }
                Attribute::Spread(a) => self.write_spread_attributes(indent_level, a)?,
                Attribute::Conditional(a) => {
                    self.write_conditional_attribute(indent_level, element_name, a)?
                }
            }
        }
        Ok(())
    }

    fn write_attribute_key(&mut self, indent_level: u32, key: &AttributeKey) -> Result<()> {
        match key {
            AttributeKey::Constant(name) => {
                self.w
                    .write_string_literal(indent_level, &format!(" {}", escape_html(name)))?;
                Ok(())
            }
            AttributeKey::Expression(expr) => {
                let vn = self.create_variable_name();
                self.w
                    .write_indent(indent_level, &format!("var {vn} string\n"))?;
                self.w.write_indent(
                    indent_level,
                    &format!("{vn}, templ_7745c5c3_Err = templ.JoinStringErrs("),
                )?;
                let r = self.w.write(&expr.value)?;
                self.source_map.add_expression(expr, r);
                self.w.write(")\n")?;
                self.write_expression_error_handler(indent_level, expr)?;
                self.w.write_indent(
                    indent_level,
                    &format!(
                        "_, templ_7745c5c3_Err = templ_7745c5c3_Buffer.WriteString(templ.EscapeString(` `+{vn}))\n"
                    ),
                )?;
                self.write_error_handler(indent_level)
            }
        }
    }

    fn write_bool_constant_attribute(
        &mut self,
        indent_level: u32,
        attr: &BoolConstantAttribute,
    ) -> Result<()> {
        self.write_attribute_key(indent_level, &attr.key)
    }

    fn write_constant_attribute(
        &mut self,
        indent_level: u32,
        attr: &ConstantAttribute,
    ) -> Result<()> {
        self.write_attribute_key(indent_level, &attr.key)?;
        let quote = if attr.single_quote { '\'' } else { '"' };
        self.w
            .write_string_literal(indent_level, &format!("={quote}{}{quote}", attr.value))?;
        Ok(())
    }

    fn write_bool_expression_attribute(
        &mut self,
        indent_level: u32,
        attr: &BoolExpressionAttribute,
    ) -> Result<()> {
        self.w.write_indent(indent_level, "if ")?;
        let r = self.w.write(&attr.expression.value)?;
        self.source_map.add_expression(&attr.expression, r);
        self.w.write(" {\n")?;
        self.write_attribute_key(indent_level + 1, &attr.key)?;
        self.w.write_indent(indent_level, "}\n")?;
        Ok(())
    }

    fn write_expression_attribute(
        &mut self,
        indent_level: u32,
        element_name: &str,
        attr: &ExpressionAttribute,
    ) -> Result<()> {
        self.write_attribute_key(indent_level, &attr.key)?;
        self.w.write_string_literal(indent_level, "=\"")?;
        let attr_key = escape_html(attr.key.text());
        if is_url_attribute(element_name, &attr_key) {
            self.write_expression_attribute_value_url(indent_level, attr)?;
        } else if is_script_attribute(&attr_key) {
            self.write_expression_attribute_value_script(indent_level, attr)?;
        } else if attr_key == "style" {
            self.write_expression_attribute_value_style(indent_level, attr)?;
        } else {
            self.write_expression_attribute_value_default(indent_level, attr)?;
        }
        self.w.write_string_literal(indent_level, "\"")?;
        Ok(())
    }

    fn write_expression_attribute_value_url(
        &mut self,
        indent_level: u32,
        attr: &ExpressionAttribute,
    ) -> Result<()> {
        let vn = self.create_variable_name();
        self.w
            .write_indent(indent_level, &format!("var {vn} templ.SafeURL\n"))?;
        self.w.write_indent(
            indent_level,
            &format!("{vn}, templ_7745c5c3_Err = templ.JoinURLErrs("),
        )?;
        let r = self.w.write(&attr.expression.value)?;
        self.source_map.add_expression(&attr.expression, r);
        self.w.write(")\n")?;
        self.write_expression_error_handler(indent_level, &attr.expression)?;
        self.w.write_indent(
            indent_level,
            &format!(
                "_, templ_7745c5c3_Err = templ_7745c5c3_Buffer.WriteString(templ.EscapeString(string({vn})))\n"
            ),
        )?;
        self.write_error_handler(indent_level)
    }

    // A JavaScript handler requires special handling because the value is a
    // script component, not a string.
    fn write_expression_attribute_value_script(
        &mut self,
        indent_level: u32,
        attr: &ExpressionAttribute,
    ) -> Result<()> {
        let vn = self.create_variable_name();
        self.w
            .write_indent(indent_level, &format!("var {vn} templ.ComponentScript = "))?;
        let r = self.w.write(&attr.expression.value)?;
        self.source_map.add_expression(&attr.expression, r);
        self.w.write("\n")?;
        self.w.write_indent(
            indent_level,
            &format!("_, templ_7745c5c3_Err = templ_7745c5c3_Buffer.WriteString({vn}.Call)\n"),
        )?;
        self.write_error_handler(indent_level)
    }

    fn write_expression_attribute_value_style(
        &mut self,
        indent_level: u32,
        attr: &ExpressionAttribute,
    ) -> Result<()> {
        let vn = self.create_variable_name();
        self.w
            .write_indent(indent_level, &format!("var {vn} string\n"))?;
        self.w.write_indent(
            indent_level,
            &format!("{vn}, templ_7745c5c3_Err = templruntime.SanitizeStyleAttributeValues("),
        )?;
        let r = self.w.write(&attr.expression.value)?;
        self.source_map.add_expression(&attr.expression, r);
        self.w.write(")\n")?;
        self.write_expression_error_handler(indent_level, &attr.expression)?;
        self.w.write_indent(
            indent_level,
            &format!(
                "_, templ_7745c5c3_Err = templ_7745c5c3_Buffer.WriteString(templ.EscapeString({vn}))\n"
            ),
        )?;
        self.write_error_handler(indent_level)
    }

    fn write_expression_attribute_value_default(
        &mut self,
        indent_level: u32,
        attr: &ExpressionAttribute,
    ) -> Result<()> {
        let vn = self.create_variable_name();
        self.w
            .write_indent(indent_level, &format!("var {vn} string\n"))?;
        self.w.write_indent(
            indent_level,
            &format!("{vn}, templ_7745c5c3_Err = templ.JoinStringErrs("),
        )?;
        let r = self.w.write(&attr.expression.value)?;
        self.source_map.add_expression(&attr.expression, r);
        self.w.write(")\n")?;
        self.write_expression_error_handler(indent_level, &attr.expression)?;
        self.w.write_indent(
            indent_level,
            &format!(
                "_, templ_7745c5c3_Err = templ_7745c5c3_Buffer.WriteString(templ.EscapeString({vn}))\n"
            ),
        )?;
        self.write_error_handler(indent_level)
    }

    fn write_spread_attributes(
        &mut self,
        indent_level: u32,
        attr: &SpreadAttributes,
    ) -> Result<()> {
        self.w.write_indent(
            indent_level,
            "templ_7745c5c3_Err = templ.RenderAttributes(ctx, templ_7745c5c3_Buffer, ",
        )?;
        let r = self.w.write(&attr.expression.value)?;
        self.source_map.add_expression(&attr.expression, r);
        self.w.write(")\n")?;
        self.write_error_handler(indent_level)
    }

    fn write_conditional_attribute(
        &mut self,
        indent_level: u32,
        element_name: &str,
        attr: &ConditionalAttribute,
    ) -> Result<()> {
        self.w.write_indent(indent_level, "if ")?;
        let r = self.w.write(&attr.expression.value)?;
        self.source_map.add_expression(&attr.expression, r);
        self.w.write(" {\n")?;
        self.write_element_attributes(indent_level + 1, element_name, &attr.then)?;
        if !attr.else_branch.is_empty() {
            self.w.write_indent(indent_level, "} else {\n")?;
            self.write_element_attributes(indent_level + 1, element_name, &attr.else_branch)?;
        }
        self.w.write_indent(indent_level, "}\n")?;
        Ok(())
    }
}
