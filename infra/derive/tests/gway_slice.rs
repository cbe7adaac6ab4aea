use gway_domain::registry::{FeatureSlice, InitializedSlice};

#[gway_derive::gway_slice]
pub struct Catalog {
    pub name: String,
}

#[test]
fn slice_handle_derefs_to_inner_state() {
    let slice = Catalog::new(CatalogInner { name: "catalog".to_owned() });
    let cloned = slice.clone();

    assert_eq!(cloned.name, "catalog");
}

#[test]
fn slice_registers_and_downcasts() {
    let registered = InitializedSlice::new(Catalog::new(CatalogInner { name: "c".to_owned() }));

    assert_eq!(registered.id, std::any::TypeId::of::<Catalog>());
    let state = registered.state.as_any().downcast_ref::<Catalog>().expect("downcast");
    assert_eq!(state.name, "c");
}
