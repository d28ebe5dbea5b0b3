//! Item-type UUID mapping and display priority.

use valshop_bot::valorant::models::{
    ItemKind, TYPE_BUDDY, TYPE_CARD, TYPE_SKIN, TYPE_SPRAY, TYPE_TITLE,
};

#[test]
fn known_type_uuids_map_to_kinds() {
    assert_eq!(ItemKind::from_type_uuid(TYPE_SKIN), ItemKind::Skin);
    assert_eq!(ItemKind::from_type_uuid(TYPE_BUDDY), ItemKind::Buddy);
    assert_eq!(ItemKind::from_type_uuid(TYPE_SPRAY), ItemKind::Spray);
    assert_eq!(ItemKind::from_type_uuid(TYPE_CARD), ItemKind::Card);
    assert_eq!(ItemKind::from_type_uuid(TYPE_TITLE), ItemKind::Title);
    assert_eq!(ItemKind::from_type_uuid("deadbeef"), ItemKind::Other);
}

#[test]
fn priority_orders_skin_first_title_last() {
    let mut kinds = [
        ItemKind::Title,
        ItemKind::Card,
        ItemKind::Skin,
        ItemKind::Spray,
        ItemKind::Buddy,
    ];
    kinds.sort_by(|a, b| b.priority().cmp(&a.priority()));
    assert_eq!(
        kinds,
        [
            ItemKind::Skin,
            ItemKind::Buddy,
            ItemKind::Spray,
            ItemKind::Card,
            ItemKind::Title,
        ]
    );
    assert!(ItemKind::Other.priority() < ItemKind::Title.priority());
}
