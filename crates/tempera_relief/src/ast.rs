//! Template AST node types.
//!
//! All polymorphic node and attribute families are closed sum types;
//! consumers dispatch with exhaustive `match`. Every node the parser lifts
//! from the source carries the byte range it was read from, so the generator
//! can correlate input and output positions.

use serde::{Deserialize, Serialize};
use tempera_carton::String;

/// A position in the template source.
///
/// `line` and `col` are zero-based; `col` counts bytes from the start of the
/// line. `index` is the absolute byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Position {
    pub index: u32,
    pub line: u32,
    pub col: u32,
}

impl Position {
    pub const fn new(index: u32, line: u32, col: u32) -> Self {
        Self { index, line, col }
    }
}

/// A half-open `[from, to)` span of template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Range {
    pub from: Position,
    pub to: Position,
}

impl Range {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

/// Go source lifted verbatim from the template, plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Expression {
    pub value: String,
    pub range: Range,
}

impl Expression {
    pub fn new(value: impl Into<String>, range: Range) -> Self {
        Self {
            value: value.into(),
            range,
        }
    }
}

/// A parsed template file: header blocks, the package declaration, and the
/// top-level declarations in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TemplateFile {
    /// Go pass-through blocks that precede the package declaration, such as
    /// build tags.
    pub header: Vec<Expression>,
    pub package_expr: Expression,
    pub nodes: Vec<TemplateFileNode>,
}

/// A top-level declaration in a template file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TemplateFileNode {
    /// Go code copied through unchanged.
    GoCode(Expression),
    HtmlTemplate(HtmlTemplate),
    CssTemplate(CssTemplate),
    ScriptTemplate(ScriptTemplate),
}

/// `templ Name(params) { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlTemplate {
    /// The function signature, e.g. `Name(params []string)`.
    pub expression: Expression,
    pub children: Vec<Node>,
    pub range: Range,
}

/// `css name() { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssTemplate {
    pub name: String,
    /// The function signature, e.g. `name()`.
    pub expression: Expression,
    pub properties: Vec<CssProperty>,
    pub range: Range,
}

/// A single property inside a CSS template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CssProperty {
    Constant { name: String, value: String },
    Expression { name: String, value: Expression },
}

/// `script name(params) { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptTemplate {
    pub name: Expression,
    pub parameters: Expression,
    /// The raw JavaScript body.
    pub value: String,
    pub range: Range,
}

/// A node inside an HTML template body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    DocType(DocType),
    Element(Element),
    RawElement(RawElement),
    ScriptElement(ScriptElement),
    HtmlComment(HtmlComment),
    Text(Text),
    Whitespace(Whitespace),
    StringExpression(StringExpression),
    GoCode(GoCode),
    GoComment(GoComment),
    /// `{ children... }` - renders the caller-provided children.
    ChildrenExpression,
    TemplElement(TemplElementExpression),
    CallTemplate(CallTemplateExpression),
    For(ForExpression),
    If(IfExpression),
    Switch(SwitchExpression),
}

impl Node {
    /// The whitespace marker that followed this node in the source, for the
    /// node kinds that track one.
    pub fn trailing_space(&self) -> TrailingSpace {
        match self {
            Node::Element(e) => e.trailing_space,
            Node::Text(t) => t.trailing_space,
            Node::StringExpression(s) => s.trailing_space,
            Node::GoCode(g) => g.trailing_space,
            _ => TrailingSpace::None,
        }
    }
}

/// `<!DOCTYPE html>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocType {
    pub value: String,
}

/// A standard HTML element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
    pub trailing_space: TrailingSpace,
}

impl Element {
    /// Whether the element never receives a closing tag.
    #[inline]
    pub fn is_void_element(&self) -> bool {
        tempera_carton::is_void_element(&self.name)
    }

    /// Whether the element is block-level, which suppresses normalized
    /// inter-node spaces around it.
    #[inline]
    pub fn is_block_element(&self) -> bool {
        tempera_carton::is_block_element(&self.name)
    }
}

/// An element whose contents are passed through as raw text, e.g. `<style>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawElement {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub contents: String,
}

/// A `<script>` element whose contents interleave literal JavaScript with
/// embedded Go expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptElement {
    pub attributes: Vec<Attribute>,
    pub contents: Vec<ScriptContents>,
}

/// One run of `<script>` element content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScriptContents {
    /// Literal JavaScript, written to the output as-is.
    Script(String),
    /// An embedded Go expression whose value is serialized into the script.
    GoCode {
        code: GoCode,
        /// Whether the expression sits inside a JavaScript string literal,
        /// which changes how the runtime serializes it.
        inside_string_literal: bool,
    },
}

/// `<!-- ... -->`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlComment {
    pub contents: String,
}

/// A run of literal text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    pub trailing_space: TrailingSpace,
}

/// A run of whitespace between nodes. Significant only for deciding whether
/// a single normalized space separates adjacent inline nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Whitespace {
    pub value: String,
}

/// `{ expr }` - a Go expression rendered as escaped text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringExpression {
    pub expression: Expression,
    pub trailing_space: TrailingSpace,
}

/// `{{ statements }}` - Go statements executed during rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoCode {
    pub expression: Expression,
    pub trailing_space: TrailingSpace,
}

/// A Go comment in the template. Dropped on emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoComment {
    pub contents: String,
}

/// `@Component(args) { children... }` - renders another template component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplElementExpression {
    pub expression: Expression,
    pub children: Vec<Node>,
}

/// `{! expr }` - renders a component held in a Go expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallTemplateExpression {
    pub expression: Expression,
}

/// `for ... { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForExpression {
    pub expression: Expression,
    pub children: Vec<Node>,
}

/// `if ... { ... } else if ... { ... } else { ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfExpression {
    pub expression: Expression,
    pub then: Vec<Node>,
    pub else_ifs: Vec<ElseIfExpression>,
    pub else_branch: Vec<Node>,
}

/// One `else if` arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElseIfExpression {
    pub expression: Expression,
    pub then: Vec<Node>,
}

/// `switch ... { case ...: ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchExpression {
    pub expression: Expression,
    pub cases: Vec<CaseExpression>,
}

/// One `case ...:` or `default:` arm. The expression holds the whole label,
/// colon included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseExpression {
    pub expression: Expression,
    pub children: Vec<Node>,
}

/// An attribute on an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Attribute {
    /// `disabled`
    BoolConstant(BoolConstantAttribute),
    /// `href="..."`
    Constant(ConstantAttribute),
    /// `disabled?={ expr }`
    BoolExpression(BoolExpressionAttribute),
    /// `href={ expr }`
    Expression(ExpressionAttribute),
    /// `{ attrMap... }`
    Spread(SpreadAttributes),
    /// `if cond { ... } else { ... }` around attributes
    Conditional(ConditionalAttribute),
}

/// An attribute name: constant, or computed from a Go expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeKey {
    Constant(String),
    Expression(Expression),
}

impl AttributeKey {
    /// The textual form of the key: the constant name, or the expression
    /// source for computed keys.
    pub fn text(&self) -> &str {
        match self {
            AttributeKey::Constant(name) => name,
            AttributeKey::Expression(expr) => &expr.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoolConstantAttribute {
    pub key: AttributeKey,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantAttribute {
    pub key: AttributeKey,
    pub value: String,
    pub single_quote: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoolExpressionAttribute {
    pub key: AttributeKey,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionAttribute {
    pub key: AttributeKey,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadAttributes {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalAttribute {
    pub expression: Expression,
    pub then: Vec<Attribute>,
    pub else_branch: Vec<Attribute>,
}

/// The whitespace that followed a node in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TrailingSpace {
    #[default]
    None,
    Horizontal,
    Vertical,
}

impl TrailingSpace {
    /// Normalize for minified output: in HTML a single space is equivalent
    /// to any run of spaces, tabs, or newlines.
    pub fn normalized(self) -> TrailingSpace {
        match self {
            TrailingSpace::Vertical => TrailingSpace::Horizontal,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrailingSpace::None => "",
            TrailingSpace::Horizontal => " ",
            TrailingSpace::Vertical => "\n",
        }
    }
}
