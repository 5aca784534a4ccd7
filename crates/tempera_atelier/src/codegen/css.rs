//! CSS template emission.
//!
//! A CSS template becomes a function returning a `templ.CSSClass` whose ID
//! is derived from the class name and the rendered property block, so the
//! same declaration always yields the same class.

use tempera_relief::{CssProperty, CssTemplate, Range};

use super::helpers::create_go_string;
use super::Generator;
use crate::errors::Result;

impl<W: std::io::Write> Generator<'_, W> {
    pub(crate) fn write_css(&mut self, n: &CssTemplate, is_last: bool) -> Result<()> {
        let r = self.w.write("func ")?;
        let symbol_from = r.from;
        let r = self.w.write(&n.expression.value)?;
        self.source_map.add_expression(&n.expression, r);
        self.w.write(" templ.CSSClass {\n")?;
        {
            self.w.write_indent(
                1,
                "templ_7745c5c3_CSSBuilder := templruntime.GetBuilder()\n",
            )?;
            for p in &n.properties {
                match p {
                    // Constant property values are not sanitized.
                    CssProperty::Constant { name, value } => {
                        self.w.write_indent(
                            1,
                            &format!(
                                "templ_7745c5c3_CSSBuilder.WriteString({})\n",
                                create_go_string(&format!("{name}:{value};"))
                            ),
                        )?;
                    }
                    CssProperty::Expression { name, value } => {
                        self.w.write_indent(
                            1,
                            &format!(
                                "templ_7745c5c3_CSSBuilder.WriteString(string(templ.SanitizeCSS(`{name}`, "
                            ),
                        )?;
                        let r = self.w.write(&value.value)?;
                        self.source_map.add_expression(value, r);
                        self.w.write(")))\n")?;
                    }
                }
            }
            self.w.write_indent(
                1,
                &format!(
                    "templ_7745c5c3_CSSID := templ.CSSID(`{}`, templ_7745c5c3_CSSBuilder.String())\n",
                    n.name
                ),
            )?;
            self.w
                .write_indent(1, "return templ.ComponentCSSClass{\n")?;
            {
                self.w.write_indent(2, "ID: templ_7745c5c3_CSSID,\n")?;
                self.w.write_indent(
                    2,
                    "Class: templ.SafeCSS(`.` + templ_7745c5c3_CSSID + `{` + templ_7745c5c3_CSSBuilder.String() + `}`),\n",
                )?;
            }
            self.w.write_indent(1, "}\n")?;
        }
        let closing_brace = if is_last { "}\n" } else { "}\n\n" };
        let r = self.w.write_indent(0, closing_brace)?;
        self.source_map
            .add_symbol(n.range, Range::new(symbol_from, r.to));
        Ok(())
    }
}
