//! Script template emission.
//!
//! A script template becomes a function returning a `templ.ComponentScript`:
//! the function source for the page, plus safe call strings for handlers and
//! inline use.

use tempera_relief::{Range, ScriptTemplate};

use super::helpers::{create_go_string, function_name, strip_types};
use super::Generator;
use crate::errors::Result;

impl<W: std::io::Write> Generator<'_, W> {
    pub(crate) fn write_script(&mut self, t: &ScriptTemplate, is_last: bool) -> Result<()> {
        let r = self.w.write("func ")?;
        let symbol_from = r.from;
        let r = self.w.write(&t.name.value)?;
        self.source_map.add_expression(&t.name, r);
        self.w.write("(")?;
        let r = self.w.write(&t.parameters.value)?;
        self.source_map.add_expression(&t.parameters, r);
        self.w.write(") templ.ComponentScript {\n")?;
        {
            self.w.write_indent(1, "return templ.ComponentScript{\n")?;
            {
                let fn_name = function_name(&t.name.value, &t.value);
                let go_fn = create_go_string(&fn_name);
                let args = strip_types(&t.parameters.value);
                self.w.write_indent(2, &format!("Name: {go_fn},\n"))?;
                let body = t.value.trim_start();
                let function = format!("function {fn_name}({args}){{{body}}}");
                self.w.write_indent(
                    2,
                    &format!("Function: {},\n", create_go_string(&function)),
                )?;
                self.w.write_indent(
                    2,
                    &format!("Call: templ.SafeScript({go_fn}, {args}),\n"),
                )?;
                self.w.write_indent(
                    2,
                    &format!("CallInline: templ.SafeScriptInline({go_fn}, {args}),\n"),
                )?;
            }
            self.w.write_indent(1, "}\n")?;
        }
        let closing_brace = if is_last { "}\n" } else { "}\n\n" };
        let r = self.w.write_indent(0, closing_brace)?;
        self.source_map
            .add_symbol(t.range, Range::new(symbol_from, r.to));
        Ok(())
    }
}
