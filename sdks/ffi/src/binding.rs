//! Binding Surface generator.
//!
//! [`bindings!`](crate::bindings) turns a block of typed declarations into
//! `extern "C"` exports plus a `DESCRIPTORS` table for the invoking module:
//!
//! ```ignore
//! symbridge_ffi::bindings! {
//!     constructor fn Demo_Point_mk(x: i64) -> Box<Point> { Box::new(Point { x }) }
//!     method fn Demo_Point_x(this: &Point) -> i64 { this.x }
//!     function fn Demo_answer() -> u32 { 42 }
//! }
//! ```
//!
//! Each export takes every argument as a borrowed host object, marshals it
//! with [`FromHost`](crate::marshal::FromHost), runs the body inside
//! [`boundary::guard`](crate::boundary::guard) and marshals the result with
//! [`IntoHost`](crate::marshal::IntoHost). The descriptor is derived from the
//! same parameter and return types, so the two cannot disagree. The receiver
//! class comes from the return type of a constructor and from the first
//! parameter of a method.

#[macro_export]
macro_rules! bindings {
    (@receiver constructor, $ret:ty, [$($ty:ty),*]) => {
        $crate::descriptor::Receiver::Constructor(
            match <$ret as $crate::marshal::IntoHost>::KIND {
                $crate::descriptor::ValueKind::Handle(class) => class,
                _ => panic!("constructor bindings must return a handle"),
            },
        )
    };
    (@receiver method, $ret:ty, [$first:ty $(, $rest:ty)*]) => {
        $crate::descriptor::Receiver::Method(
            match <$first as $crate::marshal::FromHost>::KIND {
                $crate::descriptor::ValueKind::Handle(class) => class,
                _ => panic!("method bindings must take a handle receiver first"),
            },
        )
    };
    (@receiver function, $ret:ty, [$($ty:ty),*]) => {
        $crate::descriptor::Receiver::Free
    };
    (
        $(
            $(#[doc = $doc:literal])*
            $role:ident fn $name:ident ( $($arg:ident : $ty:ty),* $(,)? ) -> $ret:ty $body:block
        )*
    ) => {
        $(
            $(#[doc = $doc])*
            ///
            /// # Safety
            /// Every argument must be a live host object of the declared kind.
            #[allow(non_snake_case)]
            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn $name($($arg: $crate::host::ObjArg),*) -> $crate::host::ObjRes {
                $crate::boundary::guard(stringify!($name), || {
                    $(
                        let $arg: $ty = unsafe { <$ty as $crate::marshal::FromHost>::from_host($arg) };
                    )*
                    let result: $ret = $body;
                    <$ret as $crate::marshal::IntoHost>::into_host(result)
                })
            }
        )*

        /// Descriptors of the bindings declared in this module.
        pub const DESCRIPTORS: &[$crate::descriptor::BindingDescriptor] = &[
            $(
                $crate::descriptor::BindingDescriptor {
                    symbol: stringify!($name),
                    receiver: $crate::bindings!(@receiver $role, $ret, [$($ty),*]),
                    params: &[$(<$ty as $crate::marshal::FromHost>::KIND),*],
                    returns: <$ret as $crate::marshal::IntoHost>::KIND,
                },
            )*
        ];

        const _: () = {
            let mut i = 0;
            while i < DESCRIPTORS.len() {
                assert!(DESCRIPTORS[i].is_well_formed(), "malformed binding descriptor");
                i += 1;
            }
        };
    };
}

#[cfg(test)]
mod tests {
    use crate::descriptor::{IntWidth, Receiver, ValueKind};
    use crate::host;

    pub struct Counter {
        label: String,
        hits: u32,
    }

    crate::native_class!(Counter, "Demo.Counter");

    mod exports {
        use super::Counter;

        crate::bindings! {
            /// Make a counter.
            constructor fn Demo_Counter_mk(label: &str, hits: u32) -> Box<Counter> {
                Box::new(Counter { label: label.to_string(), hits })
            }
            method fn Demo_Counter_label(this: &Counter) -> String {
                format!("{}:{}", this.label, this.hits)
            }
            method fn Demo_Counter_bumped(this: &Counter, by: u32) -> Box<Counter> {
                Box::new(Counter { label: this.label.clone(), hits: this.hits.wrapping_add(by) })
            }
            function fn Demo_touch() -> () {}
        }
    }

    #[test]
    fn test_descriptors_follow_declarations() {
        let counter = ValueKind::Handle("Demo.Counter");
        let table = exports::DESCRIPTORS;
        assert_eq!(table.len(), 4);

        assert_eq!(table[0].symbol, "Demo_Counter_mk");
        assert_eq!(table[0].receiver, Receiver::Constructor("Demo.Counter"));
        assert_eq!(table[0].params, &[ValueKind::String, ValueKind::Integer(IntWidth::U32)]);
        assert_eq!(table[0].returns, counter);

        assert_eq!(table[2].receiver, Receiver::Method("Demo.Counter"));
        assert_eq!(table[2].params, &[counter, ValueKind::Integer(IntWidth::U32)]);

        assert_eq!(table[3].receiver, Receiver::Free);
        assert_eq!(table[3].returns, ValueKind::Unit);
    }

    #[test]
    fn test_exports_marshal_both_ways() {
        let label = host::mk_string("clicks");
        let hits = host::box_int(3);
        unsafe {
            let counter = exports::Demo_Counter_mk(label, hits);
            let by = host::box_int(4);
            let bumped = exports::Demo_Counter_bumped(counter, by);
            let text = exports::Demo_Counter_label(bumped);
            assert_eq!(host::string_str(text), "clicks:7");

            let done = exports::Demo_touch();
            assert!(host::io_result_is_ok(done));

            for obj in [label, hits, by, counter, bumped, text, done] {
                host::dec_ref(obj);
            }
        }
    }
}
