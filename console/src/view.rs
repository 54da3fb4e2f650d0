//! Text rendering of the controller state.

use item_core::ItemState;

/// Render the whole screen for `state`.
pub fn render(state: &ItemState) -> String {
    let mut out = String::new();
    out.push_str("Item Manager\nManage your items with ease\n");

    if let Some(message) = state.error_message() {
        out.push_str(&format!("! {message}\n"));
    }

    out.push_str(&format!("\nName: [{}]  <{}>", state.input, submit_control(state)));
    if state.is_editing() {
        out.push_str("  <cancel>");
    }
    out.push_str("\n\nItems List\n");

    if state.loading {
        out.push_str("  Loading items...\n");
    } else if state.items.is_empty() {
        out.push_str("  No items found. Add one to get started!\n");
    } else {
        for (index, item) in state.items.iter().enumerate() {
            let marker = if state.edit_target.as_deref() == Some(item.id.as_str()) {
                '*'
            } else {
                ' '
            };
            out.push_str(&format!("{marker}{:>3}. {}\n", index + 1, item.name));
        }
    }
    out
}

fn submit_control(state: &ItemState) -> String {
    if state.is_submitting() {
        format!("saving... {}", state.submit_label())
    } else if state.can_submit() {
        state.submit_label().to_string()
    } else {
        format!("{} (disabled)", state.submit_label())
    }
}

#[cfg(test)]
mod tests {
    use item_core::{Failure, Item, SubmitKind};

    use super::*;

    fn milk_and_eggs() -> ItemState {
        ItemState {
            items: vec![
                Item {
                    id: "1".to_string(),
                    name: "Milk".to_string(),
                },
                Item {
                    id: "2".to_string(),
                    name: "Eggs".to_string(),
                },
            ],
            ..ItemState::default()
        }
    }

    #[test]
    fn empty_list_prompts_to_add() {
        let screen = render(&ItemState::default());
        assert!(screen.starts_with("Item Manager\n"));
        assert!(screen.contains("No items found. Add one to get started!"));
        assert!(screen.contains("<Add Item (disabled)>"));
        assert!(!screen.contains("<cancel>"));
    }

    #[test]
    fn loading_hides_list() {
        let state = ItemState {
            loading: true,
            ..milk_and_eggs()
        };
        let screen = render(&state);
        assert!(screen.contains("Loading items..."));
        assert!(!screen.contains("Milk"));
    }

    #[test]
    fn numbered_list_marks_edit_target() {
        let state = ItemState {
            input: "Milk".to_string(),
            edit_target: Some("1".to_string()),
            ..milk_and_eggs()
        };
        let screen = render(&state);
        assert!(screen.contains("*  1. Milk\n"));
        assert!(screen.contains("   2. Eggs\n"));
        assert!(screen.contains("Name: [Milk]  <Update Item>  <cancel>"));
    }

    #[test]
    fn error_banner_and_submitting() {
        let state = ItemState {
            input: "Bread".to_string(),
            submitting: Some(SubmitKind::Create),
            error: Some(Failure::Fetch),
            ..milk_and_eggs()
        };
        let screen = render(&state);
        assert!(screen.contains("! Failed to fetch items. Please try again.\n"));
        assert!(screen.contains("<saving... Add Item>"));
    }
}
