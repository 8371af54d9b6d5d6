use crate::ast;

/// A default value literal of an input field, as written in the schema.
///
/// Object literals and variables have no representation here; they are
/// rejected while building the model.
#[derive(Clone, Debug, PartialEq)]
pub enum DefaultValue {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<DefaultValue>),
    Null,
    String(String),
}
impl DefaultValue {
    /// Converts an AST literal, or returns `None` for unsupported shapes
    /// (object literals, variables) at any nesting depth.
    pub(crate) fn from_ast(value: &ast::Value) -> Option<Self> {
        Some(match value {
            ast::Value::Boolean(value) => Self::Boolean(*value),
            ast::Value::Enum(name) => Self::Enum(name.to_string()),
            ast::Value::Float(value) => Self::Float(*value),
            ast::Value::Int(number) => Self::Int(number.as_i64()?),
            ast::Value::List(values) => Self::List(
                values.iter()
                    .map(Self::from_ast)
                    .collect::<Option<Vec<_>>>()?
            ),
            ast::Value::Null => Self::Null,
            ast::Value::String(value) => Self::String(value.to_string()),
            ast::Value::Object(_) | ast::Value::Variable(_) => return None,
        })
    }
}
impl std::fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Enum(name) => f.write_str(name),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(values) => write!(
                f,
                "[{}]",
                values.iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::Null => f.write_str("null"),
            Self::String(value) => write!(f, "{value:?}"),
        }
    }
}

/// Renders any AST literal (including the shapes [`DefaultValue`] can't hold)
/// in GraphQL syntax, for diagnostics.
pub(crate) fn ast_value_to_graphql_string(value: &ast::Value) -> String {
    match value {
        ast::Value::Boolean(value) => value.to_string(),
        ast::Value::Enum(name) => name.to_string(),
        ast::Value::Float(value) => format!("{value:?}"),
        ast::Value::Int(number) => number.as_i64()
            .map(|value| value.to_string())
            .unwrap_or_else(|| "<int>".to_string()),
        ast::Value::List(values) => format!(
            "[{}]",
            values.iter()
                .map(ast_value_to_graphql_string)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        ast::Value::Null => "null".to_string(),
        ast::Value::Object(fields) => format!(
            "{{{}}}",
            fields.iter()
                .map(|(name, value)| format!(
                    "{name}: {}",
                    ast_value_to_graphql_string(value),
                ))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        ast::Value::String(value) => format!("{value:?}"),
        ast::Value::Variable(name) => format!("${name}"),
    }
}
