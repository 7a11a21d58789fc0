use crate::ast;
use crate::selection_key::selection_kind_name;
use crate::MergeError;
use crate::SelectionKey;

type Result<T> = std::result::Result<T, MergeError>;

/// Merge two ordered lists of [`ast::Selection`]s into a new list.
///
/// The result starts out as a copy of `selections_a`. Each selection in
/// `selections_b` is then either folded into the entry of the result that has
/// the same [`SelectionKey`], or appended to the end if no such entry exists.
/// Folding recurses into nested selection sets, so the same ordering rule
/// holds at every depth: selections from `selections_a` first, followed by
/// the unmatched selections of `selections_b` in their original order.
///
/// Fragment spreads are never folded. Spreading the same fragment on both
/// sides yields two spreads in the output.
///
/// Only a field's alias and name identify it. Arguments and directives of
/// the first occurrence win.
///
/// Neither input is modified.
pub fn merge_selections(
    selections_a: &[ast::Selection],
    selections_b: &[ast::Selection],
) -> Result<Vec<ast::Selection>> {
    let mut merged = selections_a.to_vec();

    for incoming in selections_b {
        let Some(key) = SelectionKey::of(incoming) else {
            merged.push(incoming.clone());
            continue
        };

        let existing_idx = merged.iter().position(
            |existing| SelectionKey::of(existing).as_ref() == Some(&key),
        );
        let Some(existing_idx) = existing_idx else {
            merged.push(incoming.clone());
            continue
        };

        match (&mut merged[existing_idx], incoming) {
            (ast::Selection::Field(existing), ast::Selection::Field(incoming)) =>
                merge_field_into(existing, incoming, &key)?,

            (
                ast::Selection::InlineFragment(existing),
                ast::Selection::InlineFragment(incoming),
            ) => {
                existing.selection_set.items = merge_selections(
                    &existing.selection_set.items,
                    &incoming.selection_set.items,
                )?;
            },

            (existing, _) => return Err(MergeError::InvariantViolation {
                found: selection_kind_name(existing),
                key: key.to_string(),
            }),
        }
    }

    Ok(merged)
}

/// Merge two [`ast::SelectionSet`]s. The result keeps the span of
/// `selection_set_a`.
pub fn merge_selection_sets(
    selection_set_a: &ast::SelectionSet,
    selection_set_b: &ast::SelectionSet,
) -> Result<ast::SelectionSet> {
    Ok(ast::SelectionSet {
        span: selection_set_a.span,
        items: merge_selections(&selection_set_a.items, &selection_set_b.items)?,
    })
}

fn merge_field_into(
    existing: &mut ast::Field,
    incoming: &ast::Field,
    key: &SelectionKey<'_>,
) -> Result<()> {
    let existing_is_leaf = existing.selection_set.items.is_empty();
    let incoming_is_leaf = incoming.selection_set.items.is_empty();
    match (existing_is_leaf, incoming_is_leaf) {
        (true, true) => Ok(()),

        (false, false) => {
            existing.selection_set.items = merge_selections(
                &existing.selection_set.items,
                &incoming.selection_set.items,
            )?;
            Ok(())
        },

        // Leaf and composite selections of one field are never reconciled.
        _ => Err(MergeError::FieldSelectionShapeMismatch {
            field: key.to_string(),
        }),
    }
}
