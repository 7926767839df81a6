//! Syntax and delimiter-balance checks for JavaScript sources.
//!
//! The syntax check parses the file as the body of a plain (neither async nor
//! generator) function using the tree-sitter JavaScript grammar. The grammar
//! is permissive, so after parsing the tree is walked for constructs a
//! function body may not contain: `import`/`export` statements, `await`
//! outside an async function, `yield` outside a generator and lexical names
//! declared twice in one block. Balance checks are a naive character count:
//! delimiters inside strings, comments and regex literals count too.

use std::collections::HashSet;

use tree_sitter::{Language, Node, Parser, Tree};

use crate::error::{Defect, LintError};

/// First line of the wrapper placed around the content before parsing.
/// Content line N sits on wrapped row N (0-indexed).
const FUNCTION_BODY_OPEN: &str = "function __webcheck_body__() {";
const FUNCTION_BODY_CLOSE: &str = "}";

/// Longest token excerpt quoted in an "unexpected token" message.
const SNIPPET_MAX_CHARS: usize = 30;

struct BalanceCheck {
    open: char,
    close: char,
    describe: fn(usize, usize) -> String,
}

fn describe_parens(open: usize, close: usize) -> String {
    format!("Par\u{e9}ntesis desbalanceados ({open} abiertos, {close} cerrados)")
}

fn describe_braces(open: usize, close: usize) -> String {
    format!("Llaves desbalanceadas ({open} abiertas, {close} cerradas)")
}

fn describe_brackets(open: usize, close: usize) -> String {
    format!("Corchetes desbalanceados ({open} abiertos, {close} cerrados)")
}

const BALANCE_CHECKS: [BalanceCheck; 3] = [
    BalanceCheck {
        open: '(',
        close: ')',
        describe: describe_parens,
    },
    BalanceCheck {
        open: '{',
        close: '}',
        describe: describe_braces,
    },
    BalanceCheck {
        open: '[',
        close: ']',
        describe: describe_brackets,
    },
];

/// Validate a JavaScript file.
///
/// Runs the syntax check, then the parenthesis, brace and bracket balance
/// checks. Every check runs; defects come back in that order.
///
/// # Errors
///
/// Returns `LintError::Parser` if the JavaScript grammar cannot be loaded or
/// the parser produces no syntax tree. The file is never passed unchecked.
pub fn validate_js(content: &str) -> Result<Vec<Defect>, LintError> {
    let mut defects = Vec::new();

    if let Some(defect) = check_syntax(content)? {
        defects.push(defect);
    }

    for check in &BALANCE_CHECKS {
        let open = content.matches(check.open).count();
        let close = content.matches(check.close).count();
        if open != close {
            defects.push(Defect::unlocated((check.describe)(open, close)));
        }
    }

    Ok(defects)
}

fn javascript_parser() -> Result<Parser, LintError> {
    let mut parser = Parser::new();
    let language: Language = tree_sitter_javascript::LANGUAGE.into();
    parser
        .set_language(&language)
        .map_err(|err| LintError::Parser(format!("failed to load JavaScript grammar: {err}")))?;
    Ok(parser)
}

fn parse_source(parser: &mut Parser, source: &str) -> Result<Tree, LintError> {
    parser
        .parse(source, None)
        .ok_or_else(|| LintError::Parser("parser returned no syntax tree".to_owned()))
}

/// Parse `content` as a function body and report the first syntax error.
fn check_syntax(content: &str) -> Result<Option<Defect>, LintError> {
    let wrapped = format!("{FUNCTION_BODY_OPEN}\n{content}\n{FUNCTION_BODY_CLOSE}");
    let mut parser = javascript_parser()?;
    let tree = parse_source(&mut parser, &wrapped)?;

    let root = tree.root_node();
    let line_count = content.lines().count().max(1);
    let line_of = |node: Node<'_>| node.start_position().row.clamp(1, line_count);

    if root.has_error() {
        let defect = match first_error_node(root) {
            Some(node) => Defect::at_line(line_of(node), describe_error(node, &wrapped)),
            None => Defect::at_line(1, "Syntax error"),
        };
        return Ok(Some(defect));
    }

    let mut found = Vec::new();
    collect_early_errors(root, &wrapped, FunctionContext::PLAIN, &mut found);
    Ok(found
        .into_iter()
        .min_by_key(|(node, _)| node.start_byte())
        .map(|(node, message)| Defect::at_line(line_of(node), message)))
}

/// Depth-first search for the first `ERROR` or `MISSING` node.
fn first_error_node(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    node.children(&mut cursor).find_map(first_error_node)
}

/// First leaf under `node` that spans at least one byte.
fn first_token(node: Node<'_>) -> Option<Node<'_>> {
    if node.child_count() == 0 {
        return (node.end_byte() > node.start_byte()).then_some(node);
    }
    let mut cursor = node.walk();
    node.children(&mut cursor).find_map(first_token)
}

fn describe_error(node: Node<'_>, source: &str) -> String {
    if node.is_missing() {
        return format!("Missing '{}'", node.kind());
    }

    let snippet: String = first_token(node)
        .and_then(|token| token.utf8_text(source.as_bytes()).ok())
        .unwrap_or_default()
        .trim()
        .chars()
        .take(SNIPPET_MAX_CHARS)
        .collect();

    if snippet.is_empty() {
        "Unexpected end of input".to_owned()
    } else {
        format!("Unexpected token '{snippet}'")
    }
}

/// What the innermost enclosing function allows.
#[derive(Debug, Clone, Copy)]
struct FunctionContext {
    is_async: bool,
    is_generator: bool,
}

impl FunctionContext {
    const PLAIN: Self = Self {
        is_async: false,
        is_generator: false,
    };

    /// Context inside `node` if it starts a new function, `None` otherwise.
    fn entered(node: Node<'_>) -> Option<Self> {
        let is_generator = match node.kind() {
            "function_declaration" | "function_expression" | "function" | "arrow_function" => {
                false
            }
            "generator_function_declaration" | "generator_function" => true,
            "method_definition" => has_child_kind(node, "*"),
            _ => return None,
        };
        Some(Self {
            is_async: has_child_kind(node, "async"),
            is_generator,
        })
    }
}

fn has_child_kind(node: Node<'_>, kind: &str) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|child| child.kind() == kind)
}

/// Collect constructs that parse but are not allowed in a plain function body.
fn collect_early_errors<'t>(
    node: Node<'t>,
    source: &str,
    context: FunctionContext,
    found: &mut Vec<(Node<'t>, String)>,
) {
    match node.kind() {
        "import_statement" => {
            found.push((node, "Cannot use import statement outside a module".to_owned()));
            return;
        }
        "export_statement" => {
            found.push((node, "Unexpected token 'export'".to_owned()));
            return;
        }
        "await_expression" if !context.is_async => found.push((
            node,
            "await is only valid in async functions".to_owned(),
        )),
        "yield_expression" if !context.is_generator => found.push((
            node,
            "yield is only valid in generator functions".to_owned(),
        )),
        "statement_block" | "program" => {
            if let Some(duplicate) = redeclared_name(node, source) {
                found.push(duplicate);
            }
        }
        _ => {}
    }

    let context = FunctionContext::entered(node).unwrap_or(context);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_early_errors(child, source, context, found);
    }
}

/// First `let`/`const`/`class` name in `block` that clashes with an earlier
/// declaration among the block's own statements.
fn redeclared_name<'t>(block: Node<'t>, source: &str) -> Option<(Node<'t>, String)> {
    let mut lexical: HashSet<&str> = HashSet::new();
    let mut hoisted: HashSet<&str> = HashSet::new();

    let mut cursor = block.walk();
    for statement in block.named_children(&mut cursor) {
        let is_lexical = matches!(statement.kind(), "lexical_declaration" | "class_declaration");
        for name in declared_names(statement) {
            let Ok(text) = name.utf8_text(source.as_bytes()) else {
                continue;
            };
            let clashes = lexical.contains(text) || (is_lexical && hoisted.contains(text));
            if clashes {
                return Some((name, format!("Identifier '{text}' has already been declared")));
            }
            if is_lexical {
                lexical.insert(text);
            } else {
                hoisted.insert(text);
            }
        }
    }
    None
}

/// Identifier nodes bound by a declaration statement. Destructuring patterns
/// are not followed.
fn declared_names(statement: Node<'_>) -> Vec<Node<'_>> {
    match statement.kind() {
        "lexical_declaration" | "variable_declaration" => {
            let mut cursor = statement.walk();
            statement
                .named_children(&mut cursor)
                .filter(|child| child.kind() == "variable_declarator")
                .filter_map(|declarator| declarator.child_by_field_name("name"))
                .filter(|name| name.kind() == "identifier")
                .collect()
        }
        "class_declaration" | "function_declaration" | "generator_function_declaration" => {
            statement.child_by_field_name("name").into_iter().collect()
        }
        _ => Vec::new(),
    }
}
