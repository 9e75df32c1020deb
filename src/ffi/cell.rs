//! Cell handles with per-channel getters and setters.

use crate::cell::Cell;

/// Allocates a cell handle.
///
/// # Safety
/// The returned pointer must eventually be freed with `gol_cell_free()`.
#[no_mangle]
pub extern "C" fn gol_cell_new(c0: u32, c1: u32, c2: u32) -> *mut Cell {
    Box::into_raw(Box::new(Cell(c0, c1, c2)))
}

/// Frees a cell handle.
///
/// # Safety
/// - `ptr` must be a handle returned by this library, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn gol_cell_free(ptr: *mut Cell) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

macro_rules! channel_accessors {
    ($get:ident, $set:ident, $field:tt) => {
        /// Reads one channel; 0 if `ptr` is null.
        ///
        /// # Safety
        /// - `ptr` must be a valid cell handle, or null
        #[no_mangle]
        pub unsafe extern "C" fn $get(ptr: *const Cell) -> u32 {
            if ptr.is_null() {
                return 0;
            }
            (*ptr).$field
        }

        /// Writes one channel; no-op if `ptr` is null.
        ///
        /// # Safety
        /// - `ptr` must be a valid cell handle, or null
        #[no_mangle]
        pub unsafe extern "C" fn $set(ptr: *mut Cell, value: u32) {
            if ptr.is_null() {
                return;
            }
            (*ptr).$field = value;
        }
    };
}

channel_accessors!(gol_cell_get_0, gol_cell_set_0, 0);
channel_accessors!(gol_cell_get_1, gol_cell_set_1, 1);
channel_accessors!(gol_cell_get_2, gol_cell_set_2, 2);

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_cell_roundtrip_fields() {
        unsafe {
            let c = gol_cell_new(1, 2, 3);
            assert!(!c.is_null());
            assert_eq!(gol_cell_get_0(c), 1);
            assert_eq!(gol_cell_get_1(c), 2);
            assert_eq!(gol_cell_get_2(c), 3);

            gol_cell_set_1(c, 20);
            assert_eq!(*c, Cell(1, 20, 3));
            gol_cell_set_0(c, 0);
            gol_cell_set_2(c, 30);
            assert_eq!(*c, Cell(0, 20, 30));

            gol_cell_free(c);
        }
    }

    #[test]
    fn test_null_pointer_handling() {
        unsafe {
            assert_eq!(gol_cell_get_0(ptr::null()), 0);
            assert_eq!(gol_cell_get_2(ptr::null()), 0);
            gol_cell_set_1(ptr::null_mut(), 5); // Should not crash
            gol_cell_free(ptr::null_mut());
        }
    }
}
