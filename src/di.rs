//! Dependency injection infrastructure.
//!
//! Services are resolved from the root [`Context`](crate::context::Context)
//! through the `FromRef` trait. The `from_context!` macro generates the
//! `FromRef<Context>` impl for a service by resolving each field in turn.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Clone)]
//! pub struct ReferenceGraphService {
//!     config: Arc<Config>,
//! }
//!
//! from_context!(ReferenceGraphService { config });
//!
//! let service = ReferenceGraphService::from_ref(&ctx);
//! ```

/// Trait for extracting a value from a reference to another type.
///
/// Types that implement `FromRef<T>` can be extracted from `&T`.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Blanket implementation: any Clone type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}

/// Implement `FromRef<Context>` for a struct whose fields all resolve from the context.
#[macro_export]
macro_rules! from_context {
    // Stateless types built from their Default
    ($name:ident) => {
        impl $crate::di::FromRef<$crate::context::Context> for $name {
            fn from_ref(_ctx: &$crate::context::Context) -> Self {
                Self::default()
            }
        }
    };
    ($name:ident { $($field:ident),* $(,)? }) => {
        impl $crate::di::FromRef<$crate::context::Context> for $name {
            fn from_ref(ctx: &$crate::context::Context) -> Self {
                Self {
                    $($field: $crate::di::FromRef::from_ref(ctx)),*
                }
            }
        }
    };
}
