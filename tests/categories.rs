//! Primary and composite categories.

use tola_meta::prelude::*;
use tola_meta::traits::*;

#[derive(TypeInfo)]
struct Widget {
    _id: u32,
}

#[derive(TypeInfo)]
#[allow(dead_code)]
enum Color {
    Red,
    Green,
}

#[derive(TypeInfo)]
#[allow(dead_code)]
union Bits {
    int: u32,
    float: f32,
}

/// Every primary category that holds for `T`.
fn primary<T: ?Sized + TypeInfo>() -> Vec<&'static str> {
    let table = [
        ("void", is_void::<T>()),
        ("null_pointer", is_null_pointer::<T>()),
        ("integral", is_integral::<T>()),
        ("floating_point", is_floating_point::<T>()),
        ("array", is_array::<T>()),
        ("enum", is_enum::<T>()),
        ("union", is_union::<T>()),
        ("class", is_class::<T>()),
        ("function", is_function::<T>()),
        ("pointer", is_pointer::<T>()),
        ("lvalue_reference", is_lvalue_reference::<T>()),
        ("rvalue_reference", is_rvalue_reference::<T>()),
        ("member_object_pointer", is_member_object_pointer::<T>()),
        ("member_function_pointer", is_member_function_pointer::<T>()),
    ];
    table.iter().filter(|(_, hit)| *hit).map(|(name, _)| *name).collect()
}

#[test]
fn test_exactly_one_primary_category() {
    assert_eq!(primary::<()>(), ["void"]);
    assert_eq!(primary::<NullPtr>(), ["null_pointer"]);
    assert_eq!(primary::<i32>(), ["integral"]);
    assert_eq!(primary::<bool>(), ["integral"]);
    assert_eq!(primary::<f64>(), ["floating_point"]);
    assert_eq!(primary::<[u8; 3]>(), ["array"]);
    assert_eq!(primary::<[u8]>(), ["array"]);
    assert_eq!(primary::<Color>(), ["enum"]);
    assert_eq!(primary::<Bits>(), ["union"]);
    assert_eq!(primary::<Widget>(), ["class"]);
    assert_eq!(primary::<(u8, u16)>(), ["class"]);
    assert_eq!(primary::<fn(i32) -> i32>(), ["function"]);
    assert_eq!(primary::<*mut i32>(), ["pointer"]);
    assert_eq!(primary::<*const i32>(), ["pointer"]);
    assert_eq!(primary::<&'static i32>(), ["lvalue_reference"]);
    assert_eq!(primary::<&'static mut i32>(), ["rvalue_reference"]);
    assert_eq!(primary::<MemberPointer<Widget, u32>>(), ["member_object_pointer"]);
    assert_eq!(primary::<MemberPointer<Widget, fn()>>(), ["member_function_pointer"]);
}

#[test]
fn test_categories_look_through_cv() {
    assert_eq!(primary::<Const<i32>>(), ["integral"]);
    assert_eq!(primary::<Volatile<Const<f32>>>(), ["floating_point"]);
    assert_eq!(primary::<Const<*mut u8>>(), ["pointer"]);
}

#[test]
fn test_function_signatures() {
    assert!(is_function::<unsafe fn()>());
    assert!(is_function::<extern "C" fn(u8, u16) -> u32>());
    assert!(is_function::<unsafe extern "C" fn(*const u8, ...) -> i32>());
    assert!(!is_function::<*mut fn()>());
}

#[test]
fn test_function_arities_and_abis() {
    assert!(is_function::<fn() -> u8>());
    assert!(is_function::<unsafe fn(u8) -> u8>());
    assert!(is_function::<extern "C" fn(u8, u8, u8)>());
    assert!(is_function::<unsafe extern "C" fn(u8, u8, u8, u8, u8)>());
    assert!(is_function::<fn(u8, u16, u32, u64, i8, i16, i32, i64) -> bool>());
    assert!(is_function::<unsafe extern "C" fn(u8, u8, u8, u8, ...)>());

    tola_meta::assert_same!(Decay<unsafe extern "C" fn(u8, u16) -> u32>, unsafe extern "C" fn(u8, u16) -> u32);
    tola_meta::assert_same!(AddPointer<fn(u8, u8, u8, u8, u8, u8, u8)>, fn(u8, u8, u8, u8, u8, u8, u8));
    tola_meta::assert_same!(RemovePointer<extern "C" fn()>, extern "C" fn());
}

#[test]
fn test_composite_categories() {
    assert!(is_arithmetic::<u8>() && is_arithmetic::<f32>());
    assert!(!is_arithmetic::<*mut u8>());

    assert!(is_fundamental::<()>());
    assert!(is_fundamental::<NullPtr>());
    assert!(!is_fundamental::<Widget>());

    assert!(is_scalar::<Color>());
    assert!(is_scalar::<*const Widget>());
    assert!(is_scalar::<MemberPointer<Widget, u32>>());
    assert!(!is_scalar::<Widget>());

    assert!(is_object::<Widget>());
    assert!(is_object::<[Widget; 2]>());
    assert!(!is_object::<fn()>());
    assert!(!is_object::<&'static Widget>());
    assert!(!is_object::<()>());

    assert!(is_compound::<&'static u8>());
    assert!(is_compound::<Widget>());
    assert!(!is_compound::<i64>());

    assert!(is_reference::<&'static mut Widget>());
    assert!(is_member_pointer::<MemberPointer<Widget, fn(u8)>>());
}

#[test]
fn test_library_types() {
    assert!(is_class::<String>());
    assert!(is_class::<Vec<u8>>());
    assert!(is_class::<Box<str>>());
    assert!(is_class::<str>());
    assert!(is_enum::<Option<u8>>());
    assert!(is_enum::<core::cmp::Ordering>());
    assert!(is_class::<std::collections::HashMap<u8, u8>>());
}

#[test]
fn test_signedness() {
    assert!(is_signed::<i8>());
    assert!(is_signed::<f64>());
    assert!(is_signed::<Const<i32>>());
    assert!(is_unsigned::<usize>());
    assert!(is_unsigned::<bool>());
    assert!(!is_signed::<Color>());
    assert!(!is_unsigned::<Color>());
    assert!(!is_unsigned::<*mut u8>());
}

#[test]
fn test_cv_queries() {
    assert!(is_const::<Const<u8>>());
    assert!(is_const::<Const<Volatile<u8>>>());
    assert!(is_volatile::<Const<Volatile<u8>>>());
    assert!(!is_const::<*const u8>());
    assert!(!is_const::<&'static u8>());
}

#[test]
fn test_array_dimensions() {
    assert_eq!(rank::<u8>(), 0);
    assert_eq!(rank::<[[[u8; 4]; 3]; 2]>(), 3);
    assert_eq!(extent::<[[[u8; 4]; 3]; 2]>(0), 2);
    assert_eq!(extent::<[[[u8; 4]; 3]; 2]>(1), 3);
    assert_eq!(extent::<[[[u8; 4]; 3]; 2]>(2), 4);
    assert_eq!(extent::<[[[u8; 4]; 3]; 2]>(3), 0);
    assert_eq!(extent::<[[u8; 4]]>(0), 0);
    assert_eq!(extent::<[[u8; 4]]>(1), 4);
}

#[test]
fn test_layout_properties() {
    struct Unit;

    assert!(is_stateless::<Unit>());
    assert!(!is_stateless::<Widget>());
    assert!(!is_empty::<()>());
    assert!(is_trivially_destructible::<Widget>());
    assert!(!is_trivially_destructible::<String>());
    assert_eq!(alignment_of::<u64>(), core::mem::align_of::<u64>());
}
