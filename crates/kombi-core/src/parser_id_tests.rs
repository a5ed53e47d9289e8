use crate::ParserId;

#[test]
fn fresh_ids_are_unique_and_increasing() {
    let a = ParserId::fresh();
    let b = ParserId::fresh();

    assert_ne!(a, b);
    assert!(b > a);
}

#[test]
fn display_uses_hash_prefix() {
    let id = ParserId::fresh();

    assert_eq!(id.to_string(), format!("#{}", id.as_u32()));
}
