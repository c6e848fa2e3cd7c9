//! Integration test: growth transparency under sustained appends.
//!
//! Pushes 1000 handles through ten capacity doublings and verifies that
//! every element reads back at its original logical position — capacity
//! growth never loses or reorders elements — then churns the structure
//! with interleaved inserts and removes to confirm the shift paths keep
//! order across relocated storage.

use skein_core::ValueRef;
use skein_vec::RefVec;

#[test]
fn thousand_pushes_read_back_in_order() {
    let mut v = RefVec::new();
    for i in 0..1000u32 {
        v.push(ValueRef::new(i, 0));
    }
    assert_eq!(v.len(), 1000);
    // 1 → 2 → 4 → … → 1024: ten doublings, power of two throughout.
    assert_eq!(v.capacity(), 1024);
    for i in 0..1000u32 {
        assert_eq!(v.get(i as usize).unwrap(), ValueRef::new(i, 0));
    }
}

#[test]
fn front_churn_keeps_order_across_growth() {
    let mut v = RefVec::new();
    // Repeated front insertion forces a full shift every time and a
    // growth every doubling; final order is reverse insertion order.
    for i in 0..257u32 {
        v.insert(0, ValueRef::new(i, 0)).unwrap();
    }
    for i in 0..257u32 {
        assert_eq!(
            v.get(i as usize).unwrap(),
            ValueRef::new(256 - i, 0),
            "element at {i} out of place after front churn"
        );
    }
    // Drain from the front; each removal returns the current head.
    for i in (0..257u32).rev() {
        assert_eq!(v.remove(0).unwrap(), ValueRef::new(i, 0));
    }
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 512);
}

#[test]
fn interleaved_mutation_never_desynchronizes_length() {
    let mut v = RefVec::new();
    let mut mirror: Vec<ValueRef> = Vec::new();
    for i in 0..500u32 {
        match i % 5 {
            0 | 1 | 2 => {
                let r = ValueRef::new(i, 0);
                v.push(r);
                mirror.push(r);
            }
            3 if !mirror.is_empty() => {
                let at = (i as usize * 7) % mirror.len();
                assert_eq!(v.remove(at).unwrap(), mirror.remove(at));
            }
            _ if !mirror.is_empty() => {
                let at = (i as usize * 3) % (mirror.len() + 1);
                let r = ValueRef::new(i, 1);
                v.insert(at, r).unwrap();
                mirror.insert(at, r);
            }
            _ => {}
        }
        assert_eq!(v.len(), mirror.len());
    }
    for (i, &r) in mirror.iter().enumerate() {
        assert_eq!(v.get(i).unwrap(), r);
    }
}
