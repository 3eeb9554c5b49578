//! The C boundary guard.
//!
//! A panic inside native code must never unwind into the host. Bindings run
//! through [`guard`], which treats any panic as a fatal native error: it is
//! logged and the process aborts.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::host::ObjRes;

/// Run `f`, turning a panic into an `Err` with the panic message.
pub fn catch<R>(f: impl FnOnce() -> R) -> Result<R, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Run one binding body. Aborts the process if it panics.
pub fn guard(symbol: &'static str, f: impl FnOnce() -> ObjRes) -> ObjRes {
    tracing::trace!(binding = symbol, "native call");
    match catch(f) {
        Ok(result) => result,
        Err(message) => {
            tracing::error!(binding = symbol, %message, "native call failed, aborting");
            std::process::abort()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host;

    #[test]
    fn test_catch_passes_values_through() {
        assert_eq!(catch(|| 41 + 1), Ok(42));
    }

    #[test]
    fn test_catch_reports_panic_messages() {
        assert_eq!(catch(|| panic!("division by zero")), Err::<(), _>("division by zero".to_string()));
        let detail = 7;
        assert_eq!(
            catch(|| panic!("bad value {}", detail)),
            Err::<(), _>("bad value 7".to_string())
        );
    }

    #[test]
    fn test_guard_returns_result() {
        let obj = guard("Test_ok", || host::box_int(5));
        unsafe {
            assert_eq!(host::unbox_int(obj), 5);
            host::dec_ref(obj);
        }
    }
}
