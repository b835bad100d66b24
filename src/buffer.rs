//! Reference-counted fixed-capacity element storage.
//!
//! A `SharedBuf` holds exactly `capacity` elements behind an `Rc`. Handles
//! are only produced by the explicit [`SharedBuf::share`] call, and mutable
//! access goes through [`SharedBuf::make_mut`], which clones the storage
//! first when more than one handle is alive. Two handles therefore observe
//! the same memory right up until one of them writes.
//!
//! The buffer never grows or shrinks in place. A sequence that changes
//! length allocates a fresh buffer and copies; see `seq::Seq::resize`.

use std::rc::Rc;

/// Fixed-capacity storage shared by reference count, clone-on-write.
pub struct SharedBuf<T> {
    slots: Rc<Box<[T]>>,
}

impl<T> SharedBuf<T> {
    /// Allocate `capacity` default-constructed slots.
    pub fn with_len(capacity: usize) -> SharedBuf<T>
    where
        T: Default,
    {
        let slots: Box<[T]> = (0..capacity).map(|_| T::default()).collect();
        return SharedBuf { slots: Rc::new(slots) };
    }

    /// Allocate `capacity` slots, each a clone of `value`.
    pub fn filled(capacity: usize, value: &T) -> SharedBuf<T>
    where
        T: Clone,
    {
        let slots: Box<[T]> = (0..capacity).map(|_| value.clone()).collect();
        return SharedBuf { slots: Rc::new(slots) };
    }

    /// Take ownership of already-built storage.
    pub fn from_vec(elements: Vec<T>) -> SharedBuf<T> {
        return SharedBuf { slots: Rc::new(elements.into_boxed_slice()) };
    }

    /// Number of slots. Fixed for the lifetime of the allocation.
    pub fn len(&self) -> usize {
        return self.slots.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.slots.is_empty();
    }

    /// Read-only view of every slot.
    pub fn as_slice(&self) -> &[T] {
        return &self.slots;
    }

    /// Mutable view of every slot. Detaches (clones the storage) when
    /// another handle is alive, so writes never alias across handles.
    pub fn make_mut(&mut self) -> &mut [T]
    where
        T: Clone,
    {
        return Rc::make_mut(&mut self.slots).as_mut();
    }

    /// A new handle onto the same storage. This is the only way handles
    /// multiply; `SharedBuf` deliberately does not implement `Clone`.
    pub fn share(&self) -> SharedBuf<T> {
        return SharedBuf { slots: Rc::clone(&self.slots) };
    }

    /// True when another handle currently references this storage.
    pub fn is_shared(&self) -> bool {
        return Rc::strong_count(&self.slots) > 1;
    }

    /// True when both handles reference the same allocation.
    pub fn ptr_eq(&self, other: &SharedBuf<T>) -> bool {
        return Rc::ptr_eq(&self.slots, &other.slots);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SharedBuf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f
            .debug_struct("SharedBuf")
            .field("capacity", &self.len())
            .field("shared", &self.is_shared())
            .field("slots", &self.as_slice())
            .finish();
    }
}
