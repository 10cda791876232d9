//! Tests for the termtree text rendering of a snapshot.

use formtree::{CheckboxItem, ComputeRule, ComputedItem, InputItem, Item, TreeDisplay};

#[test]
fn given_sample_tree_when_rendered_then_markers_and_labels_appear() {
    let tree = Item::Computed(ComputedItem {
        uuid: "root".into(),
        content: "# hello".into(),
        rule: ComputeRule::All,
        children: vec![
            Item::Checkbox(CheckboxItem {
                uuid: "cb".into(),
                content: "# bonjour".into(),
                checked: false,
            }),
            Item::Input(InputItem {
                uuid: "in".into(),
                content: "# salut".into(),
                checked: true,
                input: "some text".into(),
            }),
        ],
    });

    let rendered = tree.to_tree_string().to_string();

    // Root is unchecked under All because the checkbox is unchecked
    assert!(rendered.contains("[ ] # hello (All)"));
    assert!(rendered.contains("[ ] # bonjour"));
    assert!(rendered.contains("[x] # salut: some text"));
}

#[test]
fn given_empty_group_when_rendered_then_vacuous_check_shows() {
    let tree = Item::Computed(ComputedItem {
        uuid: "root".into(),
        content: "todo".into(),
        rule: ComputeRule::All,
        children: vec![],
    });

    let rendered = tree.to_tree_string().to_string();
    assert!(rendered.starts_with("[x] todo (All)"));
}

#[test]
fn given_input_without_text_when_rendered_then_no_trailing_separator() {
    let tree = Item::Input(InputItem {
        uuid: "in".into(),
        content: "note".into(),
        checked: false,
        input: String::new(),
    });

    let rendered = tree.to_tree_string().to_string();
    assert!(rendered.starts_with("[ ] note"));
    assert!(!rendered.contains(':'));
}
