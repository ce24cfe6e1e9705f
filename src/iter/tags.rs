//! Iterator category tags and their derivation lattice.
//!
//! ```text
//!   Input <- Forward <- Bidirectional <- RandomAccess
//!   Output
//! ```

/// An iterator category.
pub trait IteratorTag: Copy + Default + 'static {}

/// `is_base_of<Base, Self>` restricted to tags. Reflexive and transitive.
pub trait DerivedFrom<Base: IteratorTag>: IteratorTag {}

macro_rules! define_tags {
    ($($(#[$meta:meta])* $Tag:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $Tag;

            impl IteratorTag for $Tag {}
            impl DerivedFrom<$Tag> for $Tag {}
        )*
    };
}

macro_rules! derives {
    ($($Tag:ident => $($Base:ident),+;)*) => {
        $($(impl DerivedFrom<$Base> for $Tag {})+)*
    };
}

define_tags! {
    /// Single pass, read only.
    InputIteratorTag,
    /// Single pass, write only.
    OutputIteratorTag,
    ForwardIteratorTag,
    BidirectionalIteratorTag,
    RandomAccessIteratorTag,
}

derives! {
    ForwardIteratorTag => InputIteratorTag;
    BidirectionalIteratorTag => ForwardIteratorTag, InputIteratorTag;
    RandomAccessIteratorTag => BidirectionalIteratorTag, ForwardIteratorTag, InputIteratorTag;
}
