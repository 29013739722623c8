//! Macro for reducing boilerplate when defining resources
//!
//! Generates the struct (with a store-managed `id` field) and the
//! [`Resource`](crate::core::resource::Resource) implementation in one shot.

/// Define a resource type and implement `Resource` for it.
///
/// The generated struct carries a `#[serde(default)] id` field so POST
/// bodies may omit the id; the store overwrites it on create regardless.
/// Domain fields are listed struct-style and are opaque to the framework.
///
/// # Example
/// ```rust,ignore
/// resource!(Book, "book", "books", {
///     title: String,
///     author: String,
///     year: i32,
/// });
///
/// let book = Book { id: 0, title: "Dune".into(), author: "Herbert".into(), year: 1965 };
/// assert_eq!(Book::resource_name(), "books");
/// ```
#[macro_export]
macro_rules! resource {
    ($type:ident, $singular:literal, $plural:literal, { $($field:ident: $ftype:ty),* $(,)? }) => {
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $type {
            /// Unique identifier, assigned by the store
            #[serde(default)]
            pub id: $crate::core::resource::ResourceId,

            $(pub $field: $ftype,)*
        }

        impl $crate::core::resource::Resource for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> $crate::core::resource::ResourceId {
                self.id
            }

            fn assign_id(&mut self, id: $crate::core::resource::ResourceId) {
                self.id = id;
            }
        }
    };
}
