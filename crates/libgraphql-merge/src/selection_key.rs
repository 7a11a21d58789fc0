use crate::ast;

/// The identity under which two [`ast::Selection`]s in the same selection set
/// are considered "the same" selection and get folded together when merging.
///
/// Fragment spreads have no key: they are opaque and never folded.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum SelectionKey<'a> {
    Field {
        alias: Option<&'a str>,
        name: &'a str,
    },

    /// `type_condition` is `None` for inline fragments written without an
    /// `on Type` clause. That absence is a key value in its own right.
    InlineFragment {
        type_condition: Option<&'a str>,
    },
}
impl<'a> SelectionKey<'a> {
    pub fn of(selection: &'a ast::Selection) -> Option<Self> {
        match selection {
            ast::Selection::Field(field) => Some(Self::Field {
                alias: field.alias.as_deref(),
                name: field.name.as_str(),
            }),

            ast::Selection::InlineFragment(inline_frag) => Some(Self::InlineFragment {
                type_condition: inline_frag.type_condition.as_ref().map(
                    |cond| match cond {
                        ast::TypeCondition::On(type_name) => type_name.as_str(),
                    },
                ),
            }),

            ast::Selection::FragmentSpread(_) => None,
        }
    }
}
impl std::fmt::Display for SelectionKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field { alias: Some(alias), name } => write!(f, "{alias}: {name}"),
            Self::Field { alias: None, name } => f.write_str(name),
            Self::InlineFragment { type_condition: Some(type_name) } =>
                write!(f, "... on {type_name}"),
            Self::InlineFragment { type_condition: None } => f.write_str("..."),
        }
    }
}

/// The name of the kind of an [`ast::Selection`], as used in error messages.
pub(crate) fn selection_kind_name(selection: &ast::Selection) -> &'static str {
    match selection {
        ast::Selection::Field(_) => "Field",
        ast::Selection::FragmentSpread(_) => "FragmentSpread",
        ast::Selection::InlineFragment(_) => "InlineFragment",
    }
}
