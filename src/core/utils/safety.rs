//! Zero-cost cell access
//!
//! Neighbor queries index the cell buffer thousands of times per tick. Their
//! callers already proved the index in range (edge checks on x/y), so release
//! builds skip the slice bounds check; debug builds keep it and panic with
//! the offending index.
//!
//! ```rust
//! use powderfall_engine::fast;
//!
//! let mut cells = vec![0u32; 12];
//! fast!(cells, [5] = 0xFF00_00FF);
//! assert_eq!(*fast!(cells, [5]), 0xFF00_00FF);
//! ```

/// Read: `fast!(slice, [index])` / write: `fast!(slice, [index] = value)`
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}
