//! RAII guard that owns a resource and hands it to a given
//! function when it drops out of scope.
//!
//! Useful for ensuring resource cleanup no matter the return
//! path.
//!
//! Example
//! ```
//! # use dio_provision_lib::utilities::guard::Guard;
//! let mut released = Vec::new();
//! {
//!     // The guard owns the value and gives access to it
//!     // until it goes out of scope.
//!     let mut guarded = Guard::new(vec![1u8], |v| released.extend(v));
//!     guarded.push(2);
//! }
//! // Guard has dropped out of scope here, so the value was released
//! assert_eq!(released, vec![1, 2]);
//! ```

use std::ops::{Deref, DerefMut};

pub struct Guard<T, G>
where
    G: FnOnce(T),
{
    item: Option<T>,
    on_exit: Option<G>,
}

impl<T, G> Guard<T, G>
where
    G: FnOnce(T),
{
    pub fn new(item: T, on_exit: G) -> Self { Self { item: Some(item), on_exit: Some(on_exit) } }
}

impl<T, G> Deref for Guard<T, G>
where
    G: FnOnce(T),
{
    type Target = T;
    fn deref(&self) -> &T { self.item.as_ref().unwrap() }
}

impl<T, G> DerefMut for Guard<T, G>
where
    G: FnOnce(T),
{
    fn deref_mut(&mut self) -> &mut T { self.item.as_mut().unwrap() }
}

impl<T, G> Drop for Guard<T, G>
where
    G: FnOnce(T),
{
    fn drop(&mut self) {
        if let (Some(item), Some(on_exit)) = (self.item.take(), self.on_exit.take()) {
            on_exit(item);
        }
    }
}
