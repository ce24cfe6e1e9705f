//! The capability descriptor.
//!
//! `#[pointer_like]`, `#[allocator]` and `#[deleter]` record which optional
//! members an impl wrote itself in a `MEMBERS` const. Absence is a normal,
//! queryable fact: `!A::MEMBERS.contains(MemberSet::CONSTRUCT)` means the
//! default placement construct is in effect.

use bitflags::bitflags;

bitflags! {
    /// Optional members an impl provided.
    ///
    /// Flags cover pointer members, allocator members and the deleter's
    /// handle type; each trait only ever sets its own subset.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct MemberSet: u32 {
        // pointer_traits
        const ELEMENT_TYPE = 1 << 0;
        const DIFFERENCE_TYPE = 1 << 1;
        const REBIND = 1 << 2;
        const REBIND_CONST = 1 << 3;

        // allocator_traits (DIFFERENCE_TYPE and REBIND shared)
        const POINTER = 1 << 4;
        const CONST_POINTER = 1 << 5;
        const VOID_POINTER = 1 << 6;
        const CONST_VOID_POINTER = 1 << 7;
        const SIZE_TYPE = 1 << 8;
        const PROPAGATE_ON_CONTAINER_MOVE_ASSIGNMENT = 1 << 9;
        const PROPAGATE_ON_CONTAINER_SWAP = 1 << 10;
        const IS_ALWAYS_EQUAL = 1 << 11;
        const CONSTRUCT = 1 << 12;
        const DESTROY = 1 << 13;
        const MAX_SIZE = 1 << 14;
        const SELECT_ON_CONTAINER_COPY_CONSTRUCTION = 1 << 15;
        const ALLOCATE_HINT = 1 << 16;
    }
}

impl MemberSet {
    /// Every optional allocator member.
    pub const ALLOCATOR: Self = Self::POINTER
        .union(Self::CONST_POINTER)
        .union(Self::VOID_POINTER)
        .union(Self::CONST_VOID_POINTER)
        .union(Self::DIFFERENCE_TYPE)
        .union(Self::SIZE_TYPE)
        .union(Self::REBIND)
        .union(Self::PROPAGATE_ON_CONTAINER_MOVE_ASSIGNMENT)
        .union(Self::PROPAGATE_ON_CONTAINER_SWAP)
        .union(Self::IS_ALWAYS_EQUAL)
        .union(Self::CONSTRUCT)
        .union(Self::DESTROY)
        .union(Self::MAX_SIZE)
        .union(Self::SELECT_ON_CONTAINER_COPY_CONSTRUCTION)
        .union(Self::ALLOCATE_HINT);

    /// Every optional pointer member.
    pub const POINTER_LIKE: Self = Self::ELEMENT_TYPE
        .union(Self::DIFFERENCE_TYPE)
        .union(Self::REBIND)
        .union(Self::REBIND_CONST);
}
