//! End-to-end generator tests: hand-built template ASTs in, Go source and
//! source maps out.

use tempera_atelier::{generate, has_code_changed, GeneratorOptions, GeneratorOutput};
use tempera_relief::{
    Attribute, AttributeKey, BoolExpressionAttribute, CallTemplateExpression, CaseExpression,
    ConditionalAttribute, ConstantAttribute, CssProperty, CssTemplate, DocType, Element,
    ElseIfExpression, Expression, ExpressionAttribute, ForExpression, GoCode, GoComment,
    HtmlComment, HtmlTemplate, IfExpression, Node, Position, Range, RawElement, ScriptContents,
    ScriptElement, ScriptTemplate, SpreadAttributes, StringExpression, SwitchExpression,
    TemplElementExpression, TemplateFile, TemplateFileNode, Text, TrailingSpace, Whitespace,
};

fn expr(value: &str) -> Expression {
    Expression::new(value, Range::default())
}

fn expr_at(value: &str, from_index: u32, line: u32, col: u32) -> Expression {
    let from = Position::new(from_index, line, col);
    let to = Position::new(from_index + value.len() as u32, line, col + value.len() as u32);
    Expression::new(value, Range::new(from, to))
}

fn text(value: &str) -> Node {
    Node::Text(Text {
        value: value.into(),
        trailing_space: TrailingSpace::None,
    })
}

fn element(name: &str, children: Vec<Node>) -> Node {
    Node::Element(Element {
        name: name.into(),
        attributes: vec![],
        children,
        trailing_space: TrailingSpace::None,
    })
}

fn element_with_attrs(name: &str, attributes: Vec<Attribute>, children: Vec<Node>) -> Node {
    Node::Element(Element {
        name: name.into(),
        attributes,
        children,
        trailing_space: TrailingSpace::None,
    })
}

fn template(signature: &str, children: Vec<Node>) -> TemplateFileNode {
    TemplateFileNode::HtmlTemplate(HtmlTemplate {
        expression: expr(signature),
        children,
        range: Range::default(),
    })
}

fn file(nodes: Vec<TemplateFileNode>) -> TemplateFile {
    TemplateFile {
        header: vec![],
        package_expr: expr("package main"),
        nodes,
    }
}

fn render(tf: &TemplateFile) -> (String, GeneratorOutput) {
    render_with(tf, GeneratorOptions::new())
}

fn render_with(tf: &TemplateFile, options: GeneratorOptions) -> (String, GeneratorOutput) {
    let mut buf = Vec::new();
    let output = generate(tf, &mut buf, options).expect("generation failed");
    (String::from_utf8(buf).expect("generated code is UTF-8"), output)
}

#[test]
fn test_hello_paragraph() {
    let tf = file(vec![template("Name()", vec![element("p", vec![text("Hello")])])]);
    let (out, output) = render(&tf);

    assert!(out.contains("func Name() templ.Component {"));
    // Open and close tags are separate string-literal writes.
    assert!(out.contains(", 1, \"<p>\")"));
    assert!(out.contains(", 2, \"Hello\")"));
    assert!(out.contains(", 3, \"</p>\")"));
    assert_eq!(output.literals, vec!["<p>", "Hello", "</p>"]);
    // One symbol range covering the whole func declaration.
    assert_eq!(output.source_map.symbol_ranges.len(), 1);
    let symbol = &output.source_map.symbol_ranges[0];
    let func_at = out.find("func Name").expect("func emitted") as u32;
    assert_eq!(symbol.target.from.index, func_at);
    assert!(out[symbol.target.from.index as usize..symbol.target.to.index as usize].ends_with("}\n"));
}

#[test]
fn test_string_expression_emission() {
    let name_expr = expr_at("name", 28, 1, 8);
    let tf = file(vec![template(
        "Greet(name string)",
        vec![element(
            "p",
            vec![Node::StringExpression(StringExpression {
                expression: name_expr.clone(),
                trailing_space: TrailingSpace::None,
            })],
        )],
    )]);
    let (out, output) = render_with(&tf, GeneratorOptions::new().with_file_name("greet.templ"));

    // Var1 is the children slot, so the string expression gets Var2.
    assert!(out.contains("var templ_7745c5c3_Var2 string"));
    assert!(out.contains("templ_7745c5c3_Var2, templ_7745c5c3_Err = templ.JoinStringErrs(name)"));
    // The structured error carries the source position of `name`.
    assert!(out.contains(
        "return templ.Error{Err: templ_7745c5c3_Err, FileName: `greet.templ`, Line: 2, Col: 12}"
    ));
    assert!(out.contains("templ_7745c5c3_Buffer.WriteString(templ.EscapeString(templ_7745c5c3_Var2))"));
    // Exactly one source-map entry for the expression.
    let entries: Vec<_> = output
        .source_map
        .expressions
        .iter()
        .filter(|e| e.source == name_expr.range)
        .collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_href_uses_url_join() {
    let tf = file(vec![template(
        "L()",
        vec![element_with_attrs(
            "a",
            vec![Attribute::Expression(ExpressionAttribute {
                key: AttributeKey::Constant("href".into()),
                expression: expr("u"),
            })],
            vec![text("x")],
        )],
    )]);
    let (out, _) = render(&tf);
    assert!(out.contains("templ.JoinURLErrs(u)"));
    assert!(!out.contains("templ.JoinStringErrs(u)"));
    assert!(out.contains("var templ_7745c5c3_Var2 templ.SafeURL"));
}

#[test]
fn test_onclick_renders_script_items_before_element() {
    let tf = file(vec![template(
        "S()",
        vec![element_with_attrs(
            "button",
            vec![Attribute::Expression(ExpressionAttribute {
                key: AttributeKey::Constant("onclick".into()),
                expression: expr("handler()"),
            })],
            vec![text("x")],
        )],
    )]);
    let (out, _) = render(&tf);

    let scripts_at = out
        .find("templ.RenderScriptItems(ctx, templ_7745c5c3_Buffer, handler())")
        .expect("script render call emitted");
    let button_at = out.find("\"<button\"").expect("button literal emitted");
    assert!(scripts_at < button_at);
    // The attribute value uses the script component's Call field.
    assert!(out.contains("var templ_7745c5c3_Var2 templ.ComponentScript = handler()"));
    assert!(out.contains("templ_7745c5c3_Buffer.WriteString(templ_7745c5c3_Var2.Call)"));
}

#[test]
fn test_trailing_space_between_dynamic_and_text() {
    let tf = file(vec![template(
        "W()",
        vec![element(
            "p",
            vec![
                text("a "),
                Node::StringExpression(StringExpression {
                    expression: expr("b"),
                    trailing_space: TrailingSpace::Horizontal,
                }),
                text("c"),
            ],
        )],
    )]);
    let (_, output) = render(&tf);
    assert_eq!(output.literals, vec!["<p>", "a ", " ", "c", "</p>"]);
}

#[test]
fn test_templ_element_self_closing_and_block() {
    let tf = file(vec![template(
        "Page()",
        vec![Node::TemplElement(TemplElementExpression {
            expression: expr("Child()"),
            children: vec![],
        })],
    )]);
    let (out, _) = render(&tf);
    assert!(out.contains("templ_7745c5c3_Err = Child().Render(ctx, templ_7745c5c3_Buffer)"));
    assert!(!out.contains("WithChildren"));

    let tf = file(vec![template(
        "Page()",
        vec![Node::TemplElement(TemplElementExpression {
            expression: expr("Child()"),
            children: vec![element("span", vec![])],
        })],
    )]);
    let (out, _) = render(&tf);
    // The children body becomes a nested anonymous component.
    assert!(out.contains(
        "templ_7745c5c3_Var2 := templruntime.GeneratedTemplate(func(templ_7745c5c3_Input templruntime.GeneratedComponentInput) (templ_7745c5c3_Err error) {"
    ));
    assert!(out.contains(
        "templ_7745c5c3_Err = Child().Render(templ.WithChildren(ctx, templ_7745c5c3_Var2), templ_7745c5c3_Buffer)"
    ));
}

#[test]
fn test_void_element_has_no_close_tag() {
    let tf = file(vec![template(
        "V()",
        vec![element("br", vec![]), element("img", vec![])],
    )]);
    let (out, output) = render(&tf);
    assert!(out.contains("\"<br>\""));
    assert!(!out.contains("</br>"));
    assert!(!out.contains("</img>"));
    assert_eq!(output.literals, vec!["<br>", "<img>"]);
}

#[test]
fn test_whitespace_literals_are_single_spaces() {
    let tf = file(vec![template(
        "N()",
        vec![Node::If(IfExpression {
            expression: expr("ok"),
            then: vec![
                Node::Whitespace(Whitespace { value: "\n\t".into() }),
                text("a"),
                Node::Whitespace(Whitespace { value: "\n \t\n".into() }),
                Node::Text(Text {
                    value: "b".into(),
                    trailing_space: TrailingSpace::Vertical,
                }),
                text("c"),
                Node::Whitespace(Whitespace { value: " ".into() }),
            ],
            else_ifs: vec![],
            else_branch: vec![],
        })],
    )]);
    let (_, output) = render(&tf);
    for literal in &output.literals {
        if literal.chars().all(char::is_whitespace) {
            assert_eq!(literal, " ");
        }
    }
    // Edge whitespace was stripped, interior kept; vertical trailing space
    // normalized to a single horizontal space.
    assert_eq!(output.literals, vec!["a", " ", "b", " ", "c"]);
}

#[test]
fn test_if_else_chain() {
    let tf = file(vec![template(
        "C(x int)",
        vec![Node::If(IfExpression {
            expression: expr("x > 0"),
            then: vec![text("pos")],
            else_ifs: vec![ElseIfExpression {
                expression: expr("x < 0"),
                then: vec![text("neg")],
            }],
            else_branch: vec![text("zero")],
        })],
    )]);
    let (out, output) = render(&tf);
    assert!(out.contains("if x > 0 {\n"));
    assert!(out.contains("} else if x < 0 {\n"));
    assert!(out.contains("} else {\n"));
    assert_eq!(output.literals, vec!["pos", "neg", "zero"]);
    // Conditions are source-mapped.
    assert_eq!(output.source_map.expressions.len(), 4); // package + sig + 2 conditions...
}

#[test]
fn test_switch_cases() {
    let tf = file(vec![template(
        "S(value string)",
        vec![Node::Switch(SwitchExpression {
            expression: expr("value"),
            cases: vec![
                CaseExpression {
                    expression: expr("case \"a\":\n"),
                    children: vec![text("A")],
                },
                CaseExpression {
                    expression: expr("default:\n"),
                    children: vec![text("other")],
                },
            ],
        })],
    )]);
    let (out, output) = render(&tf);
    assert!(out.contains("switch value {\n"));
    assert!(out.contains("case \"a\":\n"));
    assert!(out.contains("default:\n"));
    assert_eq!(output.literals, vec!["A", "other"]);
}

#[test]
fn test_for_loop() {
    let tf = file(vec![template(
        "List(items []string)",
        vec![element(
            "ul",
            vec![Node::For(ForExpression {
                expression: expr("_, item := range items"),
                children: vec![element(
                    "li",
                    vec![Node::StringExpression(StringExpression {
                        expression: expr("item"),
                        trailing_space: TrailingSpace::None,
                    })],
                )],
            })],
        )],
    )]);
    let (out, _) = render(&tf);
    assert!(out.contains("for _, item := range items {\n"));
    assert!(out.contains("templ.JoinStringErrs(item)"));
}

#[test]
fn test_children_expression_renders_children_var() {
    let tf = file(vec![template(
        "Wrap()",
        vec![element("div", vec![Node::ChildrenExpression])],
    )]);
    let (out, _) = render(&tf);
    assert!(out.contains("templ_7745c5c3_Var1 := templ.GetChildren(ctx)"));
    assert!(out.contains("templ_7745c5c3_Err = templ_7745c5c3_Var1.Render(ctx, templ_7745c5c3_Buffer)"));
}

#[test]
fn test_call_template_expression() {
    let tf = file(vec![template(
        "P()",
        vec![Node::CallTemplate(CallTemplateExpression {
            expression: expr("header()"),
        })],
    )]);
    let (out, _) = render(&tf);
    assert!(out.contains("templ_7745c5c3_Err = header().Render(ctx, templ_7745c5c3_Buffer)"));
}

#[test]
fn test_go_comment_is_dropped() {
    let with_comment = file(vec![template(
        "P()",
        vec![
            Node::GoComment(GoComment {
                contents: "internal note".into(),
            }),
            text("visible"),
        ],
    )]);
    let without_comment = file(vec![template("P()", vec![text("visible")])]);
    let (out_a, output_a) = render(&with_comment);
    let (out_b, output_b) = render(&without_comment);
    assert_eq!(out_a, out_b);
    assert_eq!(output_a.literals, output_b.literals);
}

#[test]
fn test_go_code_is_emitted_and_mapped() {
    let code = expr_at("count := len(items)", 40, 2, 1);
    let tf = file(vec![template(
        "P(items []string)",
        vec![Node::GoCode(GoCode {
            expression: code.clone(),
            trailing_space: TrailingSpace::None,
        })],
    )]);
    let (out, output) = render(&tf);
    assert!(out.contains("count := len(items)\n"));
    assert!(output
        .source_map
        .expressions
        .iter()
        .any(|e| e.source == code.range));
}

#[test]
fn test_doctype() {
    let tf = file(vec![template(
        "Page()",
        vec![
            Node::DocType(DocType { value: "html".into() }),
            element("html", vec![]),
        ],
    )]);
    let (_, output) = render(&tf);
    assert_eq!(output.literals[0], "<!doctype html>");
}

#[test]
fn test_html_comment() {
    let tf = file(vec![template(
        "P()",
        vec![Node::HtmlComment(HtmlComment {
            contents: "layout boundary".into(),
        })],
    )]);
    let (_, output) = render(&tf);
    assert_eq!(output.literals, vec!["<!--", "layout boundary", "-->"]);
}

#[test]
fn test_raw_element_escapes_only_for_the_go_literal() {
    let tf = file(vec![template(
        "P()",
        vec![Node::RawElement(RawElement {
            name: "style".into(),
            attributes: vec![],
            contents: "body { content: \"x\" }".into(),
        })],
    )]);
    let (out, output) = render(&tf);
    assert_eq!(
        output.literals,
        vec!["<style>", "body { content: \"x\" }", "</style>"]
    );
    // Quotes are escaped in the emitted Go literal.
    assert!(out.contains("body { content: \\\"x\\\" }"));
}

#[test]
fn test_script_element_contents() {
    let code = expr_at("page.ID", 60, 3, 20);
    let tf = file(vec![template(
        "P(page Page)",
        vec![Node::ScriptElement(ScriptElement {
            attributes: vec![],
            contents: vec![
                ScriptContents::Script("const id = ".into()),
                ScriptContents::GoCode {
                    code: GoCode {
                        expression: code.clone(),
                        trailing_space: TrailingSpace::None,
                    },
                    inside_string_literal: false,
                },
                ScriptContents::Script(";".into()),
            ],
        })],
    )]);
    let (out, output) = render(&tf);
    assert!(out.contains("templruntime.ScriptContentOutsideStringLiteral(page.ID)"));
    assert!(output
        .source_map
        .expressions
        .iter()
        .any(|e| e.source == code.range));
    assert_eq!(output.literals, vec!["<script>", "const id = ", ";", "</script>"]);
}

#[test]
fn test_script_contents_inside_string_literal() {
    let tf = file(vec![template(
        "P(name string)",
        vec![Node::ScriptElement(ScriptElement {
            attributes: vec![],
            contents: vec![
                ScriptContents::Script("const greeting = \"hello ".into()),
                ScriptContents::GoCode {
                    code: GoCode {
                        expression: expr("name"),
                        trailing_space: TrailingSpace::None,
                    },
                    inside_string_literal: true,
                },
                ScriptContents::Script("\";".into()),
            ],
        })],
    )]);
    let (out, _) = render(&tf);
    assert!(out.contains("templruntime.ScriptContentInsideStringLiteral(name)"));
}

#[test]
fn test_class_expression_attribute_renders_css_items() {
    let tf = file(vec![template(
        "B()",
        vec![element_with_attrs(
            "button",
            vec![Attribute::Expression(ExpressionAttribute {
                key: AttributeKey::Constant("class".into()),
                expression: expr("styles()"),
            })],
            vec![text("x")],
        )],
    )]);
    let (out, _) = render(&tf);
    assert!(out.contains("var templ_7745c5c3_Var2 = []any{styles()}"));
    assert!(out.contains(
        "templ_7745c5c3_Err = templ.RenderCSSItems(ctx, templ_7745c5c3_Buffer, templ_7745c5c3_Var2...)"
    ));
    // Attribute emission reads the rendered class list.
    assert!(out.contains("templ.JoinStringErrs(templ.CSSClasses(templ_7745c5c3_Var2).String())"));
}

#[test]
fn test_constant_and_bool_attributes() {
    let tf = file(vec![template(
        "B()",
        vec![element_with_attrs(
            "input",
            vec![
                Attribute::Constant(ConstantAttribute {
                    key: AttributeKey::Constant("type".into()),
                    value: "text".into(),
                    single_quote: false,
                }),
                Attribute::BoolExpression(BoolExpressionAttribute {
                    key: AttributeKey::Constant("disabled".into()),
                    expression: expr("isDisabled"),
                }),
            ],
            vec![],
        )],
    )]);
    let (out, output) = render(&tf);
    assert!(output.literals.contains(&"=\"text\"".into()));
    assert!(out.contains("if isDisabled {\n"));
    assert!(output.literals.contains(&" disabled".into()));
    // input is void: no close tag.
    assert!(!out.contains("</input>"));
}

#[test]
fn test_style_attribute_is_sanitized() {
    let tf = file(vec![template(
        "B()",
        vec![element_with_attrs(
            "div",
            vec![Attribute::Expression(ExpressionAttribute {
                key: AttributeKey::Constant("style".into()),
                expression: expr("userStyle"),
            })],
            vec![],
        )],
    )]);
    let (out, _) = render(&tf);
    assert!(out.contains("templruntime.SanitizeStyleAttributeValues(userStyle)"));
}

#[test]
fn test_spread_attributes() {
    let tf = file(vec![template(
        "B()",
        vec![element_with_attrs(
            "div",
            vec![Attribute::Spread(SpreadAttributes {
                expression: expr("attrs"),
            })],
            vec![],
        )],
    )]);
    let (out, _) = render(&tf);
    assert!(out.contains("templ_7745c5c3_Err = templ.RenderAttributes(ctx, templ_7745c5c3_Buffer, attrs)"));
}

#[test]
fn test_conditional_attribute() {
    let tf = file(vec![template(
        "B()",
        vec![element_with_attrs(
            "div",
            vec![Attribute::Conditional(ConditionalAttribute {
                expression: expr("isActive"),
                then: vec![Attribute::Constant(ConstantAttribute {
                    key: AttributeKey::Constant("class".into()),
                    value: "active".into(),
                    single_quote: false,
                })],
                else_branch: vec![Attribute::Constant(ConstantAttribute {
                    key: AttributeKey::Constant("class".into()),
                    value: "inactive".into(),
                    single_quote: false,
                })],
            })],
            vec![],
        )],
    )]);
    let (out, output) = render(&tf);
    assert!(out.contains("if isActive {\n"));
    assert!(out.contains("} else {\n"));
    assert!(output.literals.contains(&"=\"active\"".into()));
    assert!(output.literals.contains(&"=\"inactive\"".into()));
}

#[test]
fn test_dynamic_attribute_key() {
    let tf = file(vec![template(
        "B()",
        vec![element_with_attrs(
            "div",
            vec![Attribute::Expression(ExpressionAttribute {
                key: AttributeKey::Expression(expr("dataKey")),
                expression: expr("dataValue"),
            })],
            vec![],
        )],
    )]);
    let (out, _) = render(&tf);
    assert!(out.contains("templ.JoinStringErrs(dataKey)"));
    assert!(out.contains("templ.EscapeString(` `+templ_7745c5c3_Var2)"));
    assert!(out.contains("templ.JoinStringErrs(dataValue)"));
}

#[test]
fn test_css_template() {
    let bg = expr("background");
    let tf = file(vec![TemplateFileNode::CssTemplate(CssTemplate {
        name: "red".into(),
        expression: expr("red()"),
        properties: vec![
            CssProperty::Constant {
                name: "color".into(),
                value: "#ff0000".into(),
            },
            CssProperty::Expression {
                name: "background-color".into(),
                value: bg.clone(),
            },
        ],
        range: Range::default(),
    })]);
    let (out, output) = render(&tf);
    assert!(out.contains("func red() templ.CSSClass {"));
    assert!(out.contains("templ_7745c5c3_CSSBuilder := templruntime.GetBuilder()"));
    assert!(out.contains("templ_7745c5c3_CSSBuilder.WriteString(`color:#ff0000;`)"));
    assert!(out.contains(
        "templ_7745c5c3_CSSBuilder.WriteString(string(templ.SanitizeCSS(`background-color`, background)))"
    ));
    assert!(out.contains("templ_7745c5c3_CSSID := templ.CSSID(`red`, templ_7745c5c3_CSSBuilder.String())"));
    assert!(out.contains("ID: templ_7745c5c3_CSSID,"));
    assert!(out.contains(
        "Class: templ.SafeCSS(`.` + templ_7745c5c3_CSSID + `{` + templ_7745c5c3_CSSBuilder.String() + `}`),"
    ));
    assert_eq!(output.source_map.symbol_ranges.len(), 1);
}

#[test]
fn test_script_template() {
    let body = "console.log(data)";
    let tf = file(vec![TemplateFileNode::ScriptTemplate(ScriptTemplate {
        name: expr("graph"),
        parameters: expr("data []int"),
        value: body.into(),
        range: Range::default(),
    })]);
    let (out, _) = render(&tf);
    let hash = tempera_carton::hash::short_hash(body);
    let fn_name = format!("__templ_graph_{hash}");
    assert!(out.contains("func graph(data []int) templ.ComponentScript {"));
    assert!(out.contains(&format!("Name: `{fn_name}`,")));
    assert!(out.contains(&format!("Function: `function {fn_name}(data){{console.log(data)}}`,")));
    assert!(out.contains(&format!("Call: templ.SafeScript(`{fn_name}`, data),")));
    assert!(out.contains(&format!("CallInline: templ.SafeScriptInline(`{fn_name}`, data),")));
}

#[test]
fn test_symbol_ranges_are_monotonic_and_cover_all_declarations() {
    let tf = TemplateFile {
        header: vec![expr("//go:build !skip")],
        package_expr: expr("package main"),
        nodes: vec![
            TemplateFileNode::GoCode(expr("const title = \"home\"")),
            template("A()", vec![text("a")]),
            TemplateFileNode::CssTemplate(CssTemplate {
                name: "c".into(),
                expression: expr("c()"),
                properties: vec![],
                range: Range::default(),
            }),
            TemplateFileNode::ScriptTemplate(ScriptTemplate {
                name: expr("s"),
                parameters: expr(""),
                value: "go()".into(),
                range: Range::default(),
            }),
        ],
    };
    let (_, output) = render(&tf);
    // Header block + four declarations.
    assert_eq!(output.source_map.symbol_ranges.len(), 5);
    for pair in output.source_map.symbol_ranges.windows(2) {
        assert!(pair[0].target.to.index <= pair[1].target.from.index);
        assert!(pair[0].target.from.index < pair[1].target.from.index);
    }
}

#[test]
fn test_blank_lines_between_declarations() {
    let tf = file(vec![
        template("First()", vec![text("a")]),
        template("Second()", vec![text("b")]),
    ]);
    let (out, _) = render(&tf);
    // Exactly one blank line between declarations.
    assert!(out.contains("}\n\nfunc Second()"));
    // None after the final declaration.
    assert!(out.ends_with("})\n}\nvar _ = templruntime.GeneratedTemplate"));
}

#[test]
fn test_template_wrapper_shape() {
    let tf = file(vec![template("P()", vec![text("x")])]);
    let (out, _) = render(&tf);
    assert!(out.contains(
        "return templruntime.GeneratedTemplate(func(templ_7745c5c3_Input templruntime.GeneratedComponentInput) (templ_7745c5c3_Err error) {"
    ));
    assert!(out.contains("templ_7745c5c3_W, ctx := templ_7745c5c3_Input.Writer, templ_7745c5c3_Input.Context"));
    assert!(out.contains("if templ_7745c5c3_CtxErr := ctx.Err(); templ_7745c5c3_CtxErr != nil {"));
    assert!(out.contains("templ_7745c5c3_Buffer, templ_7745c5c3_IsBuffer := templruntime.GetBuffer(templ_7745c5c3_W)"));
    assert!(out.contains("templ_7745c5c3_BufErr := templruntime.ReleaseBuffer(templ_7745c5c3_Buffer)"));
    assert!(out.contains("ctx = templ.InitializeContext(ctx)"));
    assert!(out.contains("if templ_7745c5c3_Var1 == nil {"));
    assert!(out.contains("templ_7745c5c3_Var1 = templ.NopComponent"));
    assert!(out.contains("ctx = templ.ClearChildren(ctx)"));
    assert!(out.contains("return nil"));
}

#[test]
fn test_literals_contain_no_go_identifiers() {
    let tf = file(vec![template(
        "P(name string)",
        vec![element(
            "div",
            vec![
                text("before "),
                Node::StringExpression(StringExpression {
                    expression: expr("name"),
                    trailing_space: TrailingSpace::None,
                }),
            ],
        )],
    )]);
    let (_, output) = render(&tf);
    for literal in &output.literals {
        assert!(!literal.contains("templ_7745c5c3"));
        assert!(!literal.contains("name"));
    }
}

#[test]
fn test_determinism_across_runs() {
    let tf = file(vec![
        template(
            "A(x int)",
            vec![Node::If(IfExpression {
                expression: expr("x > 1"),
                then: vec![element("p", vec![text("big")])],
                else_ifs: vec![],
                else_branch: vec![],
            })],
        ),
        template("B()", vec![Node::ChildrenExpression]),
    ]);
    let (out_a, output_a) = render(&tf);
    let (out_b, output_b) = render(&tf);
    assert_eq!(out_a, out_b);
    assert_eq!(output_a, output_b);
}

#[test]
fn test_change_detection_laws() {
    let make = |value: &str| {
        file(vec![template(
            "P()",
            vec![Node::StringExpression(StringExpression {
                expression: expr_at(value, 20, 1, 4),
                trailing_space: TrailingSpace::None,
            })],
        )])
    };
    let (_, base) = render(&make("name"));
    let (_, same) = render(&make("name"));
    assert!(!has_code_changed(&base, &same));

    // The generated date does not count as a change.
    let (_, dated) = render_with(
        &make("name"),
        GeneratorOptions::new().with_generated_date("2024-06-01T00:00:00Z"),
    );
    assert!(!has_code_changed(&base, &dated));

    // Changing expression text moves the emitted ranges.
    let (_, renamed) = render(&make("fullName"));
    assert!(has_code_changed(&base, &renamed));
}

#[test]
fn test_header_blocks_precede_package() {
    let tf = TemplateFile {
        header: vec![expr("//go:build !dev")],
        package_expr: expr("package main"),
        nodes: vec![],
    };
    let (out, output) = render(&tf);
    let header_at = out.find("//go:build !dev").expect("header emitted");
    let package_at = out.find("package main").expect("package emitted");
    assert!(header_at < package_at);
    // Header blocks get symbol ranges too.
    assert_eq!(output.source_map.symbol_ranges.len(), 1);
}
