use crate::config::OperatorConfig;
use crate::model::Effect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
    Nightly,
    Search,
    Delete,
    Bookmarkless,
    Local,
}

#[derive(Debug)]
pub struct Operator {
    pub name: &'static str,
    pub kind: OperatorKind,
}

impl Operator {
    pub fn shortcut(&self) -> char {
        self.name.chars().next().unwrap_or_default()
    }
}

/// Checked in order, first match wins.
pub const OPERATORS: &[Operator] = &[
    Operator { name: "nightly", kind: OperatorKind::Nightly },
    Operator { name: "search", kind: OperatorKind::Search },
    Operator { name: "delete", kind: OperatorKind::Delete },
    Operator { name: "bookmarkless", kind: OperatorKind::Bookmarkless },
    Operator { name: "local", kind: OperatorKind::Local },
];

/// `!prefix` matches any operator name starting with `prefix`; a single
/// character matches the operator's first letter. Anything else never matches.
pub fn matches_operator(token: &str, operator: &str) -> bool {
    if let Some(prefix) = token.strip_prefix('!') {
        return operator.starts_with(prefix);
    }

    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => operator.chars().next() == Some(c),
        _ => false,
    }
}

pub fn find_operator(token: &str) -> Option<&'static Operator> {
    OPERATORS.iter().find(|op| matches_operator(token, op.name))
}

/// What the operators need besides their argument.
pub struct OperatorContext<'a> {
    pub templates: &'a OperatorConfig,
    pub default_scheme: &'a str,
}

impl OperatorKind {
    /// Turns the (already label-resolved) argument into an effect.
    pub fn apply(self, arg: &str, ctx: &OperatorContext<'_>) -> Effect {
        match self {
            OperatorKind::Nightly => Effect::Navigate {
                url: fill_template(&ctx.templates.nightly, &dashed(arg)),
                remember: Some(format!("!n {}", arg)),
            },
            OperatorKind::Search => Effect::Navigate {
                url: fill_template(&ctx.templates.search, arg),
                remember: None,
            },
            OperatorKind::Delete => Effect::Delete(arg.to_string()),
            OperatorKind::Bookmarkless => Effect::Navigate {
                url: prepend_scheme(arg, ctx.default_scheme),
                remember: None,
            },
            OperatorKind::Local => Effect::Navigate {
                url: fill_template(&ctx.templates.local, &dashed(arg)),
                remember: Some(format!("!l {}", arg)),
            },
        }
    }
}

fn dashed(arg: &str) -> String {
    arg.replace('.', "-")
}

fn fill_template(template: &str, arg: &str) -> String {
    template.replace("{}", arg)
}

/// Adds `scheme` unless the value already starts with one.
pub fn prepend_scheme(uri: &str, scheme: &str) -> String {
    if has_scheme(uri) || uri.starts_with("about:") {
        uri.to_string()
    } else {
        format!("{}{}", scheme, uri)
    }
}

/// `name://` at the very start, where name is a letter followed by letters, digits, `+`, `-` or `.`.
fn has_scheme(uri: &str) -> bool {
    let Some((name, _)) = uri.split_once("://") else {
        return false;
    };
    name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
