use crate::components::{Component, ComponentRegistry, Signature};

/// Builds a [Signature] from a tuple of [Component] types.
///
/// Systems use this to express the set of component types they are interested
/// in, then test incoming signatures with [Signature::is_subset_of]. Unlike a
/// per-type lookup, building a signature registers every named type, so the
/// resulting mask is valid even before any entity holds those components.
pub trait ComponentSet {
	/// Collect the ids of every type in the set into a [Signature].
	fn signature(registry: &mut ComponentRegistry) -> Signature;
}

impl ComponentSet for () {
	fn signature(_registry: &mut ComponentRegistry) -> Signature {
		Signature::new()
	}
}

macro_rules! impl_component_set {
    ($($t: ident),*) => {
        impl <$($t: Component),*> ComponentSet for ($($t,)*) {
            fn signature(registry: &mut ComponentRegistry) -> Signature {
                let mut signature = Signature::new();
                $(signature.set(registry.id_of::<$t>().value(), true);)*
                signature
            }
        }
    };
}

impl_component_set!(T0);
impl_component_set!(T0, T1);
impl_component_set!(T0, T1, T2);
impl_component_set!(T0, T1, T2, T3);
impl_component_set!(T0, T1, T2, T3, T4);
impl_component_set!(T0, T1, T2, T3, T4, T5);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
