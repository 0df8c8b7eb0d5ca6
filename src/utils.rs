use web_sys::console;

// Console logging, formatted like println!
macro_rules! log {
    ( $( $t:tt )* ) => {
        web_sys::console::log_1(&format!( $( $t )* ).into())
    };
}

macro_rules! warn {
    ( $( $t:tt )* ) => {
        web_sys::console::warn_1(&format!( $( $t )* ).into())
    };
}

pub fn set_panic_hook() {
    // Panics show up in the browser console with a stack trace instead of
    // "unreachable executed"
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Times the enclosing scope in the browser console
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}
