//! Template engine for custom outline prompts.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Templates are tokenized once; substituted values are never re-scanned,
//! so user text containing braces is inserted as-is. Undefined variables are
//! an error rather than an empty substitution.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template parsing and rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    /// An empty variable name was found (e.g., `{}`).
    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName { position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Literal(&'a str),
    Brace(char),
    Variable { name: &'a str, position: usize },
}

fn tokenize(template: &str) -> Result<Vec<Token<'_>>, TemplateError> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if ch != '{' && ch != '}' {
            continue;
        }
        if literal_start < pos {
            tokens.push(Token::Literal(&template[literal_start..pos]));
        }

        if ch == '}' {
            // `}}` collapses to one brace; a lone `}` passes through.
            if let Some((_, '}')) = chars.peek() {
                chars.next();
            }
            tokens.push(Token::Brace('}'));
            literal_start = pos + 1;
            if template[pos + 1..].starts_with('}') {
                literal_start += 1;
            }
            continue;
        }

        if let Some((_, '{')) = chars.peek() {
            chars.next();
            tokens.push(Token::Brace('{'));
            literal_start = pos + 2;
            continue;
        }

        let close = template[pos + 1..]
            .find('}')
            .ok_or(TemplateError::UnmatchedBrace { position: pos })?;
        let raw = &template[pos + 1..pos + 1 + close];
        if raw.is_empty() {
            return Err(TemplateError::EmptyVariableName { position: pos });
        }
        tokens.push(Token::Variable {
            name: raw.trim(),
            position: pos,
        });

        let end = pos + 1 + close;
        while let Some(&(i, _)) = chars.peek() {
            if i > end {
                break;
            }
            chars.next();
        }
        literal_start = end + 1;
    }

    if literal_start < template.len() {
        tokens.push(Token::Literal(&template[literal_start..]));
    }
    Ok(tokens)
}

/// Check a template's syntax and that it only references `known` variables.
pub fn validate_template(template: &str, known: &[&str]) -> Result<(), TemplateError> {
    for token in tokenize(template)? {
        if let Token::Variable { name, position } = token
            && !known.contains(&name)
        {
            return Err(TemplateError::UndefinedVariable {
                name: name.to_string(),
                position,
            });
        }
    }
    Ok(())
}

/// Render a template string by substituting variables.
///
/// ```
/// use std::collections::HashMap;
/// use prd_outliner::prompt::render_template;
///
/// let mut vars = HashMap::new();
/// vars.insert("goal".to_string(), "ship it".to_string());
///
/// let result = render_template("Goal: {goal} ({{draft}})", &vars).unwrap();
/// assert_eq!(result, "Goal: ship it ({draft})");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());

    for token in tokenize(template)? {
        match token {
            Token::Literal(text) => result.push_str(text),
            Token::Brace(brace) => result.push(brace),
            Token::Variable { name, position } => match variables.get(name) {
                Some(value) => result.push_str(value),
                None => {
                    return Err(TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position,
                    });
                }
            },
        }
    }

    Ok(result)
}
